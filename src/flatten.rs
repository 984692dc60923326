// Copyright 2026 the flatbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The subdivision loop shared by the quadratic and cubic flatteners.
//!
//! Instead of recursing, the loop keeps working on the first half of a
//! rejected segment and parks the second half, tagged with its depth, on a
//! fixed-capacity stack. A segment at depth [`RECURSION_LIMIT`] is accepted
//! as is, whether it was reached by splitting or popped off the stack. The
//! pending halves sit at distinct depths, so the stack never overflows.

use arrayvec::ArrayVec;

use crate::{Path, Point, Result, Tolerance};

/// The maximum subdivision depth. Segments this deep are accepted as is.
pub const RECURSION_LIMIT: usize = 32;

/// A Bézier segment the subdivision loop can work on.
pub(crate) trait Subdivide: Copy {
    /// The most vertices a single call to `try_accept` may emit.
    const MAX_EMIT: usize;

    /// The control points, start to end.
    fn points(&self) -> ArrayVec<Point, 4>;

    /// Decide whether the segment is flat enough.
    ///
    /// On acceptance the segment's replacement vertices, if any, are
    /// appended to `path` and `true` is returned. The caller has reserved
    /// room for `MAX_EMIT` vertices.
    fn try_accept(&self, tol: &Tolerance, path: &mut Path) -> bool;

    /// Split at `t = 0.5`, using de Casteljau.
    fn subdivide(&self) -> (Self, Self);
}

/// Flatten `seg` into `path`, ending with its exact end point.
pub(crate) fn flatten_segment<S: Subdivide>(
    seg: S,
    tol: &Tolerance,
    path: &mut Path,
) -> Result<()> {
    let pts = seg.points();
    let end = pts[pts.len() - 1];
    if !pts.iter().all(|p| p.is_finite()) {
        log::warn!("skipping non-finite curve {pts:?}");
        return path.line_to(end);
    }
    if pts.iter().all(|&p| p == end) {
        return path.line_to(end);
    }

    let mut stack = ArrayVec::<(S, usize), RECURSION_LIMIT>::new();
    let (mut current, mut depth) = (seg, 0);
    loop {
        path.reserve(S::MAX_EMIT)?;
        if !current.try_accept(tol, path) {
            if depth < RECURSION_LIMIT {
                let (first, second) = current.subdivide();
                if stack.try_push((second, depth + 1)).is_ok() {
                    current = first;
                    depth += 1;
                    continue;
                }
            }
            log::trace!("subdivision depth limit of {RECURSION_LIMIT} reached");
        }
        match stack.pop() {
            Some((next, next_depth)) => (current, depth) = (next, next_depth),
            None => break,
        }
    }
    path.line_to(end)
}

/// Squared distance from `p` to the chord `start..end`, given the projection
/// parameter `t` of `p` onto that chord. Outside `[0, 1]` the nearer end
/// point is used.
#[inline]
pub(crate) fn chord_deviation_sq(p: Point, t: f64, start: Point, end: Point) -> f64 {
    if t <= 0.0 {
        p.distance_squared(start)
    } else if t >= 1.0 {
        p.distance_squared(end)
    } else {
        p.distance_squared(start.lerp(end, t))
    }
}
