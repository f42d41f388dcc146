// Copyright 2026 the Imgbasics Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed polygon contours and their derived metrics.

use alloc::vec::Vec;
use core::fmt;
use core::ops::{Add, Mul};

use crate::{ContourSource, Point, RawContour, Vec2};

/// A closed polygon contour: an ordered sequence of canonical (x, y) points.
///
/// The last point connects implicitly back to the first; no terminating copy
/// of the first point is stored or expected. A contour does not own any
/// meaning beyond its vertices — construct one, measure it with
/// [`metrics`](Contour::metrics), discard it.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contour {
    points: Vec<Point>,
}

impl Contour {
    /// Create a contour from a sequence of canonical (x, y) points.
    #[inline]
    pub fn new(points: Vec<Point>) -> Self {
        Contour { points }
    }

    /// Normalize raw detector output into a contour.
    ///
    /// This is the only place a [`ContourSource`] is consulted; the resulting
    /// contour is always in canonical (x, y) order.
    pub fn from_raw<C: RawContour + ?Sized>(raw: &C, source: ContourSource) -> Self {
        let mut points = Vec::with_capacity(raw.len());
        for ix in 0..raw.len() {
            points.push(source.to_xy(raw.raw_point(ix)));
        }
        Contour { points }
    }

    /// The vertices of the contour.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the contour has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Parallel (x-values, y-values) sequences of the vertices, for plotting.
    pub fn coords(&self) -> (Vec<f64>, Vec<f64>) {
        self.points.iter().map(|p| (p.x, p.y)).unzip()
    }

    /// The same contour traversed in the opposite direction.
    ///
    /// Reversal flips the sign of the area and leaves perimeter and centroid
    /// unchanged.
    pub fn reversed(&self) -> Contour {
        let mut points = self.points.clone();
        points.reverse();
        Contour { points }
    }

    /// Signed area, perimeter and centroid of the contour, in one pass.
    ///
    /// The area is signed by winding direction: in image (y-down) coordinates
    /// a clockwise contour has negative area, an anti-clockwise one positive.
    /// The same traversal read in a y-up plot frame winds the other way, so
    /// its sign flips with the frame. The perimeter is the plain sum of
    /// segment lengths and is never negative.
    ///
    /// Returns [`ContourError::Degenerate`] when the contour has fewer than
    /// two vertices or zero signed area (all vertices collinear, or a single
    /// repeated point): the centroid is undefined there and no partial result
    /// is produced.
    ///
    /// # Examples
    ///
    /// A regular hexagon, traversed clockwise with respect to a standard
    /// (y-up) plot:
    ///
    /// ```
    /// use imgbasics::{Contour, Point};
    ///
    /// let l = 1.0 / 3.0_f64.sqrt();
    /// let xs = [0.5, 0.5, 0.0, -0.5, -0.5, 0.0];
    /// let ys = [-l / 2.0, l / 2.0, l, l / 2.0, -l / 2.0, -l];
    /// let hexagon: Contour = xs.iter().zip(&ys).map(|(&x, &y)| Point::new(x, y)).collect();
    ///
    /// let metrics = hexagon.metrics().unwrap();
    /// assert!(metrics.centroid.distance(Point::ZERO) < 1e-9);
    /// assert!((metrics.perimeter - 3.4641).abs() < 1e-3);
    /// assert!((metrics.area - (-0.8660)).abs() < 1e-3);
    /// ```
    pub fn metrics(&self) -> Result<ContourMetrics, ContourError> {
        let n = self.points.len();
        if n < 2 {
            return Err(ContourError::Degenerate);
        }

        // Work relative to the vertex mean to keep the moment sums well
        // conditioned for contours far from the origin.
        let mean = self
            .points
            .iter()
            .fold(Vec2::ZERO, |acc, p| acc + p.to_vec2())
            / n as f64;

        let mut area2 = 0.0;
        let mut perimeter = 0.0;
        let mut ma = 0.0;
        let mut mb = 0.0;
        for (ix, p) in self.points.iter().enumerate() {
            let q = self.points[(ix + 1) % n];
            let v = p.to_vec2() - mean;
            let d = q - *p;

            // d × v = y·dx − x·dy, the shoelace term.
            area2 += d.cross(v);
            perimeter += d.hypot();

            // Boundary moments, needed for the centroid.
            ma += (v.y * d.x * d.x - v.x * v.x * d.y) / 4.0
                + v.x * v.y * d.x / 2.0
                + d.x * d.x * d.y / 12.0;
            mb += (v.y * v.y * d.x - v.x * d.y * d.y) / 4.0
                - v.x * v.y * d.y / 2.0
                - d.y * d.y * d.x / 12.0;
        }

        let area = 0.5 * area2;
        if area == 0.0 {
            return Err(ContourError::Degenerate);
        }

        Ok(ContourMetrics {
            centroid: Point::new(ma / area + mean.x, mb / area + mean.y),
            perimeter,
            area,
        })
    }
}

impl From<Vec<Point>> for Contour {
    #[inline]
    fn from(points: Vec<Point>) -> Contour {
        Contour { points }
    }
}

impl FromIterator<Point> for Contour {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Contour {
        Contour {
            points: iter.into_iter().collect(),
        }
    }
}

impl Add<Vec2> for Contour {
    type Output = Contour;

    /// Translate every vertex by `v`.
    fn add(mut self, v: Vec2) -> Contour {
        for p in &mut self.points {
            *p += v;
        }
        self
    }
}

impl Mul<Contour> for f64 {
    type Output = Contour;

    /// Scale every vertex by `self`, about the origin.
    fn mul(self, mut other: Contour) -> Contour {
        for p in &mut other.points {
            *p = (self * p.to_vec2()).to_point();
        }
        other
    }
}

/// Derived metrics of a closed contour.
///
/// Computed fresh on every [`Contour::metrics`] call; there is no caching and
/// no identity beyond the call that produced the value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContourMetrics {
    /// Area-weighted geometric center.
    pub centroid: Point,
    /// Total length of the boundary, including the closing segment.
    /// Always non-negative.
    pub perimeter: f64,
    /// Signed area; the sign encodes winding direction relative to the
    /// coordinate frame (see [`Contour::metrics`]).
    pub area: f64,
}

/// Failures of contour geometry and selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContourError {
    /// The contour has fewer than two vertices or zero signed area, so its
    /// centroid is undefined.
    Degenerate,
    /// An empty collection was passed to
    /// [`closest_contour`](crate::closest_contour).
    NoContours,
}

impl fmt::Display for ContourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContourError::Degenerate => write!(f, "degenerate contour: centroid is undefined"),
            ContourError::NoContours => write!(f, "no contours available"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ContourError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn assert_approx_eq(x: f64, y: f64, tolerance: f64) {
        assert!((x - y).abs() <= tolerance, "{x} != {y}");
    }

    /// The hexagon from the documentation: centroid at the origin,
    /// perimeter 6/√3, area −√3/2 (clockwise in a y-up frame).
    fn hexagon() -> Contour {
        let l = 1.0 / 3.0_f64.sqrt();
        let xs = [1.0, 1.0, 0.0, -1.0, -1.0, 0.0];
        let ys = [-l, l, 2.0 * l, l, -l, -2.0 * l];
        xs.iter()
            .zip(&ys)
            .map(|(&x, &y)| Point::new(x / 2.0, y / 2.0))
            .collect()
    }

    /// A star-shaped polygon around `center`: random radii at sorted angles.
    /// Always simple, with a consistent winding, so never degenerate.
    fn random_polygon(rng: &mut impl Rng, center: Point, n: usize) -> Contour {
        (0..n)
            .map(|ix| {
                let theta = ix as f64 / n as f64 * core::f64::consts::TAU;
                let r = rng.random_range(0.5..2.0);
                center + r * Vec2::new(theta.cos(), theta.sin())
            })
            .collect()
    }

    #[test]
    fn hexagon_fixture() {
        let metrics = hexagon().metrics().unwrap();
        assert_approx_eq(metrics.centroid.x, 0.0, 1e-6);
        assert_approx_eq(metrics.centroid.y, 0.0, 1e-6);
        assert_approx_eq(metrics.perimeter, 3.4641, 1e-3);
        assert_approx_eq(metrics.area, -0.8660, 1e-3);
    }

    #[test]
    fn unit_square() {
        // Anti-clockwise in a y-up frame, i.e. clockwise as drawn on an
        // image, so the signed area comes out negative.
        let square: Contour = [(0., 0.), (1., 0.), (1., 1.), (0., 1.)]
            .iter()
            .map(|&(x, y)| Point::new(x, y))
            .collect();
        let metrics = square.metrics().unwrap();
        assert_approx_eq(metrics.area, -1.0, 1e-12);
        assert_approx_eq(metrics.perimeter, 4.0, 1e-12);
        assert_approx_eq(metrics.centroid.x, 0.5, 1e-12);
        assert_approx_eq(metrics.centroid.y, 0.5, 1e-12);
    }

    #[test]
    fn reversal_negates_area_only() {
        let mut rng = rand::rng();
        for _ in 0..20 {
            let contour = random_polygon(&mut rng, Point::new(100.0, -40.0), 12);
            let fwd = contour.metrics().unwrap();
            let rev = contour.reversed().metrics().unwrap();

            assert_approx_eq(rev.area, -fwd.area, 1e-9 * fwd.area.abs());
            assert_approx_eq(rev.perimeter, fwd.perimeter, 1e-9 * fwd.perimeter);
            assert!(rev.centroid.distance(fwd.centroid) < 1e-9);
        }
    }

    #[test]
    fn perimeter_is_non_negative() {
        let mut rng = rand::rng();
        for _ in 0..20 {
            let contour = random_polygon(&mut rng, Point::ZERO, 7);
            assert!(contour.metrics().unwrap().perimeter >= 0.0);
        }
    }

    #[test]
    fn scale_covariance() {
        let mut rng = rand::rng();
        for _ in 0..20 {
            let contour = random_polygon(&mut rng, Point::new(3.0, 5.0), 9);
            let k = rng.random_range(0.25..4.0);

            let base = contour.clone().metrics().unwrap();
            let scaled = (k * contour).metrics().unwrap();

            assert_approx_eq(scaled.area, k * k * base.area, 1e-9 * base.area.abs());
            assert_approx_eq(scaled.perimeter, k * base.perimeter, 1e-9 * base.perimeter);
            assert!(scaled
                .centroid
                .distance((k * base.centroid.to_vec2()).to_point())
                < 1e-9 * k);
        }
    }

    #[test]
    fn translation_leaves_area_and_perimeter() {
        let contour = hexagon();
        let base = contour.clone().metrics().unwrap();
        let moved = (contour + Vec2::new(1e6, -2e6)).metrics().unwrap();

        // The mean-shift keeps the computation conditioned even this far out.
        assert_approx_eq(moved.area, base.area, 1e-6);
        assert_approx_eq(moved.perimeter, base.perimeter, 1e-6);
        assert!(moved.centroid.distance(base.centroid + Vec2::new(1e6, -2e6)) < 1e-6);
    }

    #[test]
    fn degenerate_contours_are_rejected() {
        let empty = Contour::default();
        assert_eq!(empty.metrics(), Err(ContourError::Degenerate));

        let single = Contour::new(vec![Point::new(1.0, 2.0)]);
        assert_eq!(single.metrics(), Err(ContourError::Degenerate));

        let repeated = Contour::new(vec![Point::new(1.0, 2.0); 5]);
        assert_eq!(repeated.metrics(), Err(ContourError::Degenerate));

        let collinear: Contour = (0..4).map(|ix| Point::new(ix as f64, 2.0 * ix as f64)).collect();
        assert_eq!(collinear.metrics(), Err(ContourError::Degenerate));
    }

    #[test]
    fn from_raw_normalizes_scikit_rows_and_cols() {
        let raw: Vec<[f64; 2]> = vec![[10.0, 10.0], [10.0, 12.0], [11.0, 12.0], [11.0, 10.0]];
        let contour = Contour::from_raw(&raw, ContourSource::SciKit);
        assert_eq!(contour.points()[1], Point::new(12.0, 10.0));

        let (xs, ys) = contour.coords();
        assert_eq!(xs, vec![10.0, 12.0, 12.0, 10.0]);
        assert_eq!(ys, vec![10.0, 10.0, 11.0, 11.0]);
    }
}
