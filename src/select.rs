// Copyright 2026 the Imgbasics Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearest-contour selection.

use crate::{Contour, ContourError, ContourSource, Point, RawContour};

/// Find the contour in `contours` closest to `point`.
///
/// Returns the index of the winning contour along with a reference to it in
/// its **original** representation, so the caller can correlate the result
/// with any labels or metadata tracked alongside the collection.
///
/// Two mutually exclusive distance policies are supported:
///
/// - `by_edge == false`: the distance from `point` to each contour's
///   centroid, as computed by [`Contour::metrics`]. A degenerate contour in
///   the collection makes the whole call fail with
///   [`ContourError::Degenerate`], since its centroid is undefined.
/// - `by_edge == true`: the distance from `point` to the nearest *vertex* of
///   each contour. Distances to interpolated positions along the edge
///   segments are not considered; detector output is dense enough that the
///   vertices sample the boundary well.
///
/// Ties go to the first contour in input order. A collection holding a single
/// contour is returned immediately, without measuring anything.
///
/// Returns [`ContourError::NoContours`] when `contours` is empty.
///
/// # Examples
///
/// ```
/// use imgbasics::{closest_contour, ContourError, ContourSource, Point};
///
/// let contours: Vec<Vec<(f64, f64)>> = vec![
///     vec![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)],
///     vec![(10.0, 0.0), (12.0, 0.0), (12.0, 2.0), (10.0, 2.0)],
/// ];
///
/// let (ix, _) = closest_contour(
///     &contours,
///     Point::new(9.0, 1.0),
///     false,
///     ContourSource::OpenCv,
/// ).unwrap();
/// assert_eq!(ix, 1);
///
/// let empty: Vec<Vec<(f64, f64)>> = Vec::new();
/// let err = closest_contour(&empty, Point::ZERO, false, ContourSource::OpenCv);
/// assert_eq!(err.unwrap_err(), ContourError::NoContours);
/// ```
pub fn closest_contour<'a, C: RawContour>(
    contours: &'a [C],
    point: Point,
    by_edge: bool,
    source: ContourSource,
) -> Result<(usize, &'a C), ContourError> {
    match contours {
        [] => Err(ContourError::NoContours),
        [only] => Ok((0, only)),
        _ => {
            let mut best_ix = 0;
            let mut best_dist = f64::INFINITY;
            for (ix, raw) in contours.iter().enumerate() {
                let contour = Contour::from_raw(raw, source);
                // Squared distances order the same as distances.
                let dist = if by_edge {
                    contour
                        .points()
                        .iter()
                        .map(|p| p.distance_squared(point))
                        .fold(f64::INFINITY, f64::min)
                } else {
                    contour.metrics()?.centroid.distance_squared(point)
                };
                if dist < best_dist {
                    best_dist = dist;
                    best_ix = ix;
                }
            }
            Ok((best_ix, &contours[best_ix]))
        }
    }
}
