// Copyright 2026 the Imgbasics Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image rotation.

use image::Pixel;
use imageproc::definitions::{Clamp, Image};
use imageproc::geometric_transformations::{warp_into, Projection};

use crate::Point;

/// Pixel interpolation used when resampling a rotated image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Interpolation {
    /// Nearest-neighbor sampling. Fast, preserves the exact pixel values of
    /// the source, and the right choice for label or mask images.
    Nearest,
    /// Bilinear sampling.
    #[default]
    Bilinear,
    /// Bicubic sampling.
    Bicubic,
}

impl Interpolation {
    /// The interpolation matching a spline order, as used by resampling
    /// routines in scientific imaging packages (0 is nearest, 1 is linear,
    /// 3 is cubic).
    ///
    /// Returns `None` for orders with no counterpart here.
    #[inline]
    pub const fn from_order(order: u8) -> Option<Interpolation> {
        match order {
            0 => Some(Interpolation::Nearest),
            1 => Some(Interpolation::Bilinear),
            3 => Some(Interpolation::Bicubic),
            _ => None,
        }
    }
}

impl From<Interpolation> for imageproc::geometric_transformations::Interpolation {
    #[inline]
    fn from(interpolation: Interpolation) -> Self {
        use imageproc::geometric_transformations::Interpolation as Imp;
        match interpolation {
            Interpolation::Nearest => Imp::Nearest,
            Interpolation::Bilinear => Imp::Bilinear,
            Interpolation::Bicubic => Imp::Bicubic,
        }
    }
}

/// Options for [`rotate`].
///
/// The angle is in degrees, positive turning the image content
/// counter-clockwise as displayed (y pointing down). The remaining options
/// have sensible defaults and can be set with the `with_` methods:
///
/// ```
/// use imgbasics::{Interpolation, Rotation};
///
/// let rotation = Rotation::new(30.0)
///     .with_resize(true)
///     .with_interpolation(Interpolation::Nearest);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rotation {
    /// Rotation angle in degrees, counter-clockwise as displayed.
    pub angle: f64,
    /// Whether to enlarge the output frame so the whole rotated image fits.
    ///
    /// When `false` (the default) the output has the input's dimensions and
    /// corners of the rotated content may fall outside it.
    pub resize: bool,
    /// The pivot, in pixel-center coordinates of the input image. `None`
    /// (the default) pivots about the image center.
    ///
    /// A custom pivot only makes sense in a fixed frame, so it is ignored
    /// when `resize` is set.
    pub center: Option<Point>,
    /// Resampling method, [`Interpolation::Bilinear`] by default.
    pub interpolation: Interpolation,
}

impl Rotation {
    /// A rotation by `angle` degrees counter-clockwise, with default options:
    /// fixed frame, pivot at the image center, bilinear interpolation.
    #[inline]
    pub const fn new(angle: f64) -> Rotation {
        Rotation {
            angle,
            resize: false,
            center: None,
            interpolation: Interpolation::Bilinear,
        }
    }

    /// Builder method for setting [`resize`](Rotation::resize).
    #[inline]
    pub const fn with_resize(mut self, resize: bool) -> Rotation {
        self.resize = resize;
        self
    }

    /// Builder method for setting a custom pivot.
    #[inline]
    pub const fn with_center(mut self, center: Point) -> Rotation {
        self.center = Some(center);
        self
    }

    /// Builder method for setting the [`interpolation`](Rotation::interpolation).
    #[inline]
    pub const fn with_interpolation(mut self, interpolation: Interpolation) -> Rotation {
        self.interpolation = interpolation;
        self
    }
}

/// The center of a `width` × `height` frame, in pixel-center coordinates.
fn frame_center(width: u32, height: u32) -> Point {
    Point::new((f64::from(width) - 1.0) / 2.0, (f64::from(height) - 1.0) / 2.0)
}

/// The frame that holds a `width` × `height` image rotated by `theta`
/// radians, truncated to whole pixels.
fn expanded_frame(width: u32, height: u32, theta: f64) -> (u32, u32) {
    let (sin, cos) = (theta.sin().abs(), theta.cos().abs());
    let (w, h) = (f64::from(width), f64::from(height));
    ((w * cos + h * sin) as u32, (w * sin + h * cos) as u32)
}

/// Rotate `image` according to `rotation`, filling pixels that come from
/// outside the source with `fill`.
///
/// With [`resize`](Rotation::resize) set, the output frame grows to hold the
/// whole rotated content and the pivot moves to the new frame's center;
/// otherwise the output has the input's dimensions and the corners of the
/// rotated content may be cut off.
///
/// # Examples
///
/// ```
/// use image::{GrayImage, Luma};
/// use imgbasics::{rotate, Rotation};
///
/// let img = GrayImage::from_pixel(64, 32, Luma([200u8]));
/// let turned = rotate(&img, &Rotation::new(90.0).with_resize(true), Luma([0u8]));
/// assert_eq!(turned.dimensions(), (32, 64));
/// ```
pub fn rotate<P>(image: &Image<P>, rotation: &Rotation, fill: P) -> Image<P>
where
    P: Pixel + Send + Sync,
    P::Subpixel: Send + Sync + Into<f32> + Clamp<f32>,
{
    let (width, height) = image.dimensions();
    let theta = rotation.angle.to_radians();

    // Pixel-center coordinates of the pivot in the source frame.
    let center = if rotation.resize {
        frame_center(width, height)
    } else {
        rotation.center.unwrap_or_else(|| frame_center(width, height))
    };

    let (out_width, out_height) = if rotation.resize {
        expanded_frame(width, height, theta)
    } else {
        (width, height)
    };
    // In a fixed frame the pivot stays put; in a resized frame it moves to
    // the new frame's center.
    let out_center = if rotation.resize {
        frame_center(out_width, out_height)
    } else {
        center
    };

    // imageproc's rotation is clockwise as displayed, hence the negation.
    let projection = Projection::translate(out_center.x as f32, out_center.y as f32)
        * Projection::rotate(-theta as f32)
        * Projection::translate(-center.x as f32, -center.y as f32);

    let mut out = Image::from_pixel(out_width, out_height, fill);
    warp_into(
        image,
        &projection,
        rotation.interpolation.into(),
        fill,
        &mut out,
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    const BLACK: Luma<u8> = Luma([0u8]);

    fn gradient(width: u32, height: u32) -> GrayImage {
        GrayImage::from_fn(width, height, |x, y| Luma([(x * 7 + y * 3) as u8]))
    }

    #[test]
    fn zero_angle_is_identity() {
        let img = gradient(21, 13);
        let rotation = Rotation::new(0.0).with_interpolation(Interpolation::Nearest);
        assert_eq!(rotate(&img, &rotation, BLACK), img);
    }

    #[test]
    fn fixed_frame_keeps_dimensions() {
        let img = gradient(40, 25);
        let turned = rotate(&img, &Rotation::new(33.0), BLACK);
        assert_eq!(turned.dimensions(), (40, 25));
    }

    #[test]
    fn quarter_turn_with_resize_swaps_dimensions() {
        let img = gradient(64, 32);
        let turned = rotate(&img, &Rotation::new(90.0).with_resize(true), BLACK);
        assert_eq!(turned.dimensions(), (32, 64));

        let turned = rotate(&img, &Rotation::new(-90.0).with_resize(true), BLACK);
        assert_eq!(turned.dimensions(), (32, 64));
    }

    #[test]
    fn diagonal_turn_with_resize_grows_the_frame() {
        let img = gradient(100, 100);
        let turned = rotate(&img, &Rotation::new(45.0).with_resize(true), BLACK);
        // 100 * sqrt(2), truncated.
        assert_eq!(turned.dimensions(), (141, 141));
    }

    #[test]
    fn resized_frame_truncates_to_whole_pixels() {
        // 100 cos 30° + 50 sin 30° = 111.6 and 100 sin 30° + 50 cos 30° = 93.3,
        // which truncate rather than round.
        let img = gradient(100, 50);
        let turned = rotate(&img, &Rotation::new(30.0).with_resize(true), BLACK);
        assert_eq!(turned.dimensions(), (111, 93));
    }

    #[test]
    fn quarter_turns_preserve_content_under_nearest() {
        // A single bright pixel off-center: four quarter turns in a fixed
        // square frame must bring it home.
        let mut img = GrayImage::from_pixel(15, 15, BLACK);
        img.put_pixel(3, 5, Luma([255u8]));

        let rotation = Rotation::new(90.0).with_interpolation(Interpolation::Nearest);
        let mut turned = img.clone();
        for _ in 0..4 {
            turned = rotate(&turned, &rotation, BLACK);
        }
        assert_eq!(turned, img);
    }

    #[test]
    fn fill_value_shows_in_exposed_corners() {
        let img = GrayImage::from_pixel(30, 30, Luma([100u8]));
        let fill = Luma([7u8]);
        let turned = rotate(
            &img,
            &Rotation::new(45.0).with_interpolation(Interpolation::Nearest),
            fill,
        );
        // The frame corner is outside the rotated square.
        assert_eq!(*turned.get_pixel(0, 0), fill);
        // The frame center is still inside it.
        assert_eq!(*turned.get_pixel(15, 15), Luma([100u8]));
    }

    #[test]
    fn custom_center_pivots_there() {
        // Pivoting about a corner pixel keeps that pixel in place.
        let mut img = GrayImage::from_pixel(20, 20, BLACK);
        img.put_pixel(0, 0, Luma([255u8]));

        let rotation = Rotation::new(10.0)
            .with_center(Point::ZERO)
            .with_interpolation(Interpolation::Nearest);
        let turned = rotate(&img, &rotation, BLACK);
        assert_eq!(*turned.get_pixel(0, 0), Luma([255u8]));
    }

    #[test]
    fn spline_orders_map_to_interpolations() {
        assert_eq!(Interpolation::from_order(0), Some(Interpolation::Nearest));
        assert_eq!(Interpolation::from_order(1), Some(Interpolation::Bilinear));
        assert_eq!(Interpolation::from_order(3), Some(Interpolation::Bicubic));
        assert_eq!(Interpolation::from_order(2), None);
        assert_eq!(Interpolation::from_order(5), None);
    }
}
