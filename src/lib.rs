// Copyright 2026 the Imgbasics Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic 2D image analysis.
//!
//! The imgbasics library contains small, composable tools for working with
//! the output of image analysis routines: iso-level contours produced by an
//! external detector, and the crop/rotate operations that usually surround
//! them. It computes closed-polygon metrics (signed area, perimeter,
//! centroid), selects the contour nearest to a point of interest, and
//! normalizes the two coordinate conventions detectors commonly emit.
//!
//! # Examples
//!
//! Picking a contour out of detector output and measuring it:
//!
//! ```
//! use imgbasics::{closest_contour, Contour, ContourSource, Point};
//!
//! // Detector output in the scikit convention: points stored as (row, col).
//! let blobs: Vec<Vec<[f64; 2]>> = vec![
//!     vec![[0.0, 0.0], [0.0, 4.0], [3.0, 4.0], [3.0, 0.0]],
//!     vec![[10.0, 10.0], [10.0, 12.0], [11.0, 12.0], [11.0, 10.0]],
//! ];
//!
//! # fn run(blobs: &[Vec<[f64; 2]>]) -> Result<(), imgbasics::ContourError> {
//! let (ix, raw) = closest_contour(blobs, Point::new(11.0, 10.5), false, ContourSource::SciKit)?;
//! assert_eq!(ix, 1);
//!
//! let contour = Contour::from_raw(raw, ContourSource::SciKit);
//! let metrics = contour.metrics()?;
//! assert!((metrics.area.abs() - 2.0).abs() < 1e-9);
//! assert!(metrics.centroid.distance(Point::new(11.0, 10.5)) < 1e-9);
//! # Ok(())
//! # }
//! # run(&blobs).unwrap();
//! ```
//!
//! Cropping an image to a pixel zone (requires the `raster` feature):
//!
//! ```
//! # #[cfg(feature = "raster")] {
//! use imgbasics::{crop, CropZone};
//!
//! let img = image::GrayImage::from_fn(20, 20, |x, y| image::Luma([(x + y) as u8]));
//! let cropped = crop(&img, CropZone::new(5, 7, 14, 9)).unwrap();
//! assert_eq!(cropped.dimensions(), (14, 9));
//! # }
//! ```
//!
//! # Coordinate frames
//!
//! All geometry is expressed in canonical (x, y) coordinates. Contours coming
//! from a detector are converted exactly once, at the boundary, according to
//! an explicit [`ContourSource`]; downstream code never sees the raw layout.
//! In the y-down frame of an image, a clockwise contour has negative signed
//! area; in a y-up plot frame the same traversal reads anti-clockwise and the
//! sign flips with it. This is intentional and preserved by every operation
//! here.
//!
//! # Features
//!
//! - `std` (enabled by default): get floating point functions from the
//!   standard library (likely using your target's libc).
//! - `libm`: use floating point implementations from [libm][]. This is useful
//!   for `no_std` environments; note that `libm` is not as efficient as the
//!   standard library.
//! - `raster` (enabled by default; implies `std`): the [`crop`] and [`rotate`]
//!   operations over [image][] buffers, with resampling delegated to
//!   [imageproc][].
//! - `serde`: implement `serde::Deserialize` and `serde::Serialize` on the
//!   vocabulary types.
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//! The crate always requires an allocator (it uses [alloc]).
//!
//! [libm]: https://docs.rs/libm
//! [image]: https://docs.rs/image
//! [imageproc]: https://docs.rs/imageproc

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![allow(clippy::unreadable_literal, clippy::excessive_precision)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("imgbasics requires either the `std` or `libm` feature");

// Suppress the unused dependency when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

extern crate alloc;

mod common;
mod contour;
#[cfg(feature = "raster")]
mod crop;
mod point;
mod raw;
mod select;
#[cfg(feature = "raster")]
mod transform;
mod vec2;

pub use crate::contour::{Contour, ContourError, ContourMetrics};
#[cfg(feature = "raster")]
pub use crate::crop::{crop, CropError, CropZone};
pub use crate::point::Point;
pub use crate::raw::{contour_coords, ContourSource, RawContour};
pub use crate::select::closest_contour;
#[cfg(feature = "raster")]
pub use crate::transform::{rotate, Interpolation, Rotation};
pub use crate::vec2::Vec2;
