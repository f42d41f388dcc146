// Copyright 2026 the Imgbasics Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw detector output and its coordinate conventions.
//!
//! Contour detectors disagree on how a point is stored: scikit-image emits
//! (row, col) pairs, while OpenCV emits (x, y) pairs wrapped in an extra
//! singleton dimension. Everything in this crate works on canonical (x, y)
//! [`Point`]s, so the convention is resolved exactly once, here, and nowhere
//! else. There is no auto-detection: the caller states the convention.

use alloc::vec::Vec;

use crate::Point;

/// Vertex layout convention of an upstream contour detector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContourSource {
    /// Points stored as (row, col), i.e. (y, x), as produced by
    /// scikit-image's `find_contours`.
    SciKit,
    /// Points stored as (x, y), as produced by OpenCV's `findContours`.
    ///
    /// OpenCV's extra singleton nesting level is absorbed by the
    /// [`RawContour`] impl for `[[[f64; 2]; 1]]`, so by the time a pair
    /// reaches this enum it is a plain (x, y).
    OpenCv,
}

impl ContourSource {
    /// The canonical (x, y) point for a coordinate pair in this convention's
    /// stored order.
    #[inline]
    pub fn to_xy(self, pair: (f64, f64)) -> Point {
        match self {
            ContourSource::SciKit => Point::new(pair.1, pair.0),
            ContourSource::OpenCv => Point::new(pair.0, pair.1),
        }
    }
}

/// Read-only access to one detector-produced contour.
///
/// This is the minimal capability the rest of the crate needs from a raw
/// contour: an ordered, indexable sequence of coordinate pairs. Implementations
/// are provided for the shapes detectors actually hand out, including the
/// OpenCV-style nesting and (behind the `raster` feature)
/// `imageproc::contours::Contour`. How the two stored components map onto
/// (x, y) is decided separately, by a [`ContourSource`].
pub trait RawContour {
    /// Number of points in the contour.
    fn len(&self) -> usize;

    /// The `ix`-th coordinate pair, in stored order (no convention applied).
    ///
    /// Implementations may panic when `ix >= self.len()`.
    fn raw_point(&self, ix: usize) -> (f64, f64);

    /// Whether the contour has no points.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RawContour for [[f64; 2]] {
    #[inline]
    fn len(&self) -> usize {
        <[[f64; 2]]>::len(self)
    }

    #[inline]
    fn raw_point(&self, ix: usize) -> (f64, f64) {
        (self[ix][0], self[ix][1])
    }
}

/// OpenCV-style storage, where each point carries an extra singleton
/// dimension.
impl RawContour for [[[f64; 2]; 1]] {
    #[inline]
    fn len(&self) -> usize {
        <[[[f64; 2]; 1]]>::len(self)
    }

    #[inline]
    fn raw_point(&self, ix: usize) -> (f64, f64) {
        (self[ix][0][0], self[ix][0][1])
    }
}

impl RawContour for [(f64, f64)] {
    #[inline]
    fn len(&self) -> usize {
        <[(f64, f64)]>::len(self)
    }

    #[inline]
    fn raw_point(&self, ix: usize) -> (f64, f64) {
        self[ix]
    }
}

impl RawContour for [Point] {
    #[inline]
    fn len(&self) -> usize {
        <[Point]>::len(self)
    }

    #[inline]
    fn raw_point(&self, ix: usize) -> (f64, f64) {
        (self[ix].x, self[ix].y)
    }
}

impl<T> RawContour for Vec<T>
where
    [T]: RawContour,
{
    #[inline]
    fn len(&self) -> usize {
        RawContour::len(self.as_slice())
    }

    #[inline]
    fn raw_point(&self, ix: usize) -> (f64, f64) {
        self.as_slice().raw_point(ix)
    }
}

/// Integer contours traced by `imageproc::contours::find_contours`.
///
/// imageproc stores points as (x, y), so these pair with
/// [`ContourSource::OpenCv`].
#[cfg(feature = "raster")]
impl<T> RawContour for imageproc::contours::Contour<T>
where
    T: Copy + Into<f64>,
{
    #[inline]
    fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    fn raw_point(&self, ix: usize) -> (f64, f64) {
        let p = self.points[ix];
        (p.x.into(), p.y.into())
    }
}

/// Extract parallel (x-values, y-values) sequences from raw contour data.
///
/// This is a pure reshape of the normalized representation, suitable for
/// plotting directly over an image display. No geometry is computed.
///
/// # Examples
///
/// ```
/// use imgbasics::{contour_coords, ContourSource};
///
/// // The same physical square, in both conventions.
/// let scikit: Vec<[f64; 2]> = vec![[0.0, 1.0], [0.0, 3.0], [2.0, 3.0], [2.0, 1.0]];
/// let opencv: Vec<[[f64; 2]; 1]> = vec![[[1.0, 0.0]], [[3.0, 0.0]], [[3.0, 2.0]], [[1.0, 2.0]]];
///
/// assert_eq!(
///     contour_coords(&scikit, ContourSource::SciKit),
///     contour_coords(&opencv, ContourSource::OpenCv),
/// );
/// ```
pub fn contour_coords<C: RawContour + ?Sized>(
    contour: &C,
    source: ContourSource,
) -> (Vec<f64>, Vec<f64>) {
    let n = contour.len();
    let mut xs = Vec::with_capacity(n);
    let mut ys = Vec::with_capacity(n);
    for ix in 0..n {
        let p = source.to_xy(contour.raw_point(ix));
        xs.push(p.x);
        ys.push(p.y);
    }
    (xs, ys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scikit_swaps_components() {
        let raw: Vec<[f64; 2]> = vec![[1.0, 2.0], [3.0, 4.0]];
        let (xs, ys) = contour_coords(&raw, ContourSource::SciKit);
        assert_eq!(xs, vec![2.0, 4.0]);
        assert_eq!(ys, vec![1.0, 3.0]);
    }

    #[test]
    fn opencv_round_trips_unchanged() {
        let raw: Vec<[[f64; 2]; 1]> = vec![[[1.0, 2.0]], [[3.0, 4.0]], [[5.0, 6.0]]];
        let (xs, ys) = contour_coords(&raw, ContourSource::OpenCv);
        assert_eq!(xs, vec![1.0, 3.0, 5.0]);
        assert_eq!(ys, vec![2.0, 4.0, 6.0]);
    }

    #[test]
    fn conventions_agree_on_the_same_polygon() {
        // (x, y) vertices of a triangle.
        let xy = [(0.5, -1.0), (2.0, 0.25), (-1.5, 3.0)];

        let scikit: Vec<[f64; 2]> = xy.iter().map(|&(x, y)| [y, x]).collect();
        let opencv: Vec<(f64, f64)> = xy.to_vec();

        assert_eq!(
            contour_coords(&scikit, ContourSource::SciKit),
            contour_coords(&opencv, ContourSource::OpenCv),
        );
    }

    #[test]
    fn empty_contour_formats_to_empty_sequences() {
        let raw: Vec<(f64, f64)> = Vec::new();
        let (xs, ys) = contour_coords(&raw, ContourSource::OpenCv);
        assert!(xs.is_empty());
        assert!(ys.is_empty());
    }
}
