// Copyright 2026 the Imgbasics Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image cropping.

use core::fmt;

use image::{GenericImageView, ImageBuffer};

use crate::Point;

/// A crop rectangle in pixel units: origin (x, y), then width and height.
///
/// The zone covers the half-open pixel ranges `x..x + width` and
/// `y..y + height`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CropZone {
    /// Leftmost column of the zone.
    pub x: u32,
    /// Topmost row of the zone.
    pub y: u32,
    /// Width of the zone in pixels.
    pub width: u32,
    /// Height of the zone in pixels.
    pub height: u32,
}

impl CropZone {
    /// Create a new `CropZone`.
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        CropZone {
            x,
            y,
            width,
            height,
        }
    }

    /// A zone from two opposite corners in continuous image coordinates,
    /// such as a pair of mouse clicks over a displayed image.
    ///
    /// Each coordinate is rounded to the nearest pixel *center* (integer
    /// coordinates refer to pixel centers), and both corner pixels are
    /// included in the zone. Two clicks inside the same pixel therefore
    /// produce a 1×1 zone. Corners are clamped to the positive quadrant.
    ///
    /// # Examples
    ///
    /// ```
    /// use imgbasics::{CropZone, Point};
    ///
    /// let zone = CropZone::from_corners(Point::new(18.6, 15.2), Point::new(5.4, 7.49));
    /// assert_eq!(zone, CropZone::new(5, 7, 15, 9));
    /// ```
    pub fn from_corners(p0: impl Into<Point>, p1: impl Into<Point>) -> CropZone {
        let p0 = p0.into().round();
        let p1 = p1.into().round();

        let x0 = p0.x.min(p1.x).max(0.0);
        let y0 = p0.y.min(p1.y).max(0.0);
        // +1 so that the zone includes both corner pixels.
        let width = (p0.x.max(p1.x) - x0 + 1.0).max(0.0);
        let height = (p0.y.max(p1.y) - y0 + 1.0).max(0.0);

        CropZone {
            x: x0 as u32,
            y: y0 as u32,
            width: width as u32,
            height: height as u32,
        }
    }

    /// One past the rightmost column of the zone.
    ///
    /// Widened to `u64` so that zones near the `u32` limit do not overflow.
    #[inline]
    pub fn right(&self) -> u64 {
        u64::from(self.x) + u64::from(self.width)
    }

    /// One past the bottommost row of the zone.
    #[inline]
    pub fn bottom(&self) -> u64 {
        u64::from(self.y) + u64::from(self.height)
    }
}

impl From<(u32, u32, u32, u32)> for CropZone {
    #[inline]
    fn from((x, y, width, height): (u32, u32, u32, u32)) -> CropZone {
        CropZone::new(x, y, width, height)
    }
}

/// Errors produced by [`crop`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CropError {
    /// The crop zone extends beyond the image bounds.
    OutOfBounds {
        /// The requested zone.
        zone: CropZone,
        /// Width of the image that was to be cropped.
        width: u32,
        /// Height of the image that was to be cropped.
        height: u32,
    },
}

impl fmt::Display for CropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CropError::OutOfBounds {
                zone,
                width,
                height,
            } => write!(
                f,
                "crop zone {}x{}+{}+{} exceeds image bounds {width}x{height}",
                zone.width, zone.height, zone.x, zone.y,
            ),
        }
    }
}

impl std::error::Error for CropError {}

/// Crop `image` to `zone`, returning an owned buffer of exactly
/// `zone.width × zone.height` pixels.
///
/// A zone that extends beyond the image is a caller bug and is reported as
/// [`CropError::OutOfBounds`] rather than silently clamped. A zero-sized zone
/// is valid and yields an empty buffer.
///
/// # Examples
///
/// ```
/// use imgbasics::{crop, CropZone};
///
/// let img = image::GrayImage::from_fn(20, 20, |x, y| image::Luma([(x * 20 + y) as u8]));
/// let cropped = crop(&img, CropZone::new(5, 7, 14, 9)).unwrap();
///
/// assert_eq!(cropped.dimensions(), (14, 9));
/// assert_eq!(cropped.get_pixel(0, 0), img.get_pixel(5, 7));
/// ```
pub fn crop<I>(
    image: &I,
    zone: CropZone,
) -> Result<ImageBuffer<I::Pixel, Vec<<I::Pixel as image::Pixel>::Subpixel>>, CropError>
where
    I: GenericImageView,
    I::Pixel: 'static,
{
    let (width, height) = image.dimensions();
    if zone.right() > u64::from(width) || zone.bottom() > u64::from(height) {
        return Err(CropError::OutOfBounds {
            zone,
            width,
            height,
        });
    }
    Ok(ImageBuffer::from_fn(zone.width, zone.height, |ix, iy| {
        image.get_pixel(zone.x + ix, zone.y + iy)
    }))
}
