// Copyright 2026 the flatbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use core::ops::Mul;

use arrayvec::ArrayVec;

use crate::common::turn_angle;
use crate::flatten::{chord_deviation_sq, flatten_segment, Subdivide};
use crate::tolerance::COLLINEARITY_EPSILON;
use crate::{Affine, Path, Point, Result, Tolerance};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A single cubic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub struct CubicBez {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P, p3: P) -> CubicBez {
        CubicBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    /// Evaluate the curve at parameter `t`.
    pub fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let v = self.p0.to_vec2() * (mt * mt * mt)
            + (self.p1.to_vec2() * (mt * mt * 3.0)
                + (self.p2.to_vec2() * (mt * 3.0) + self.p3.to_vec2() * t) * t)
                * t;
        v.to_point()
    }

    /// The start point.
    #[inline]
    pub fn start(&self) -> Point {
        self.p0
    }

    /// The end point.
    #[inline]
    pub fn end(&self) -> Point {
        self.p3
    }

    /// Subdivide into halves, using de Casteljau.
    pub fn subdivide(&self) -> (CubicBez, CubicBez) {
        let p01 = self.p0.midpoint(self.p1);
        let p12 = self.p1.midpoint(self.p2);
        let p23 = self.p2.midpoint(self.p3);
        let p012 = p01.midpoint(p12);
        let p123 = p12.midpoint(p23);
        let p0123 = p012.midpoint(p123);
        (
            CubicBez::new(self.p0, p01, p012, p0123),
            CubicBez::new(p0123, p123, p23, self.p3),
        )
    }

    /// Append a polyline approximating this curve to `path`.
    ///
    /// Only `LineTo` vertices are appended, the last one being exactly
    /// [`end`](Self::end). Besides the distance and angle tolerances, the
    /// cubic flattener honors [`Tolerance::cusp_limit`]: a turn sharper than
    /// the limit at an interior control point stops the subdivision there
    /// and emits that control point.
    ///
    /// On error the path keeps every vertex committed before the failure.
    pub fn flatten(&self, tol: &Tolerance, path: &mut Path) -> Result<()> {
        flatten_segment(*self, tol, path)
    }
}

impl Subdivide for CubicBez {
    const MAX_EMIT: usize = 2;

    #[inline]
    fn points(&self) -> ArrayVec<Point, 4> {
        [self.p0, self.p1, self.p2, self.p3].into_iter().collect()
    }

    fn try_accept(&self, tol: &Tolerance, path: &mut Path) -> bool {
        let CubicBez { p0, p1, p2, p3 } = *self;
        let chord = p3 - p0;
        let chord_sq = chord.hypot2();
        let d1 = (p1 - p3).cross(chord).abs();
        let d2 = (p2 - p3).cross(chord).abs();
        let p123 = p1.midpoint(p2).midpoint(p2.midpoint(p3));

        match (d1 > COLLINEARITY_EPSILON, d2 > COLLINEARITY_EPSILON) {
            // All collinear, or p0 == p3.
            (false, false) => {
                let (d1, d2) = if chord_sq == 0.0 {
                    (p0.distance_squared(p1), p3.distance_squared(p2))
                } else {
                    let k = chord_sq.recip();
                    let t1 = k * (p1 - p0).dot(chord);
                    let t2 = k * (p2 - p0).dot(chord);
                    if t1 > 0.0 && t1 < 1.0 && t2 > 0.0 && t2 < 1.0 {
                        // p0---p1---p2---p3: the end points alone represent it.
                        return true;
                    }
                    (
                        chord_deviation_sq(p1, t1, p0, p3),
                        chord_deviation_sq(p2, t2, p0, p3),
                    )
                };
                let (d, p) = if d1 > d2 { (d1, p1) } else { (d2, p2) };
                if d < tol.distance_tolerance_sq() {
                    path.commit_line_to(p);
                    return true;
                }
                false
            }
            // p0, p1, p3 are collinear, p2 is significant.
            (false, true) => {
                if !tol.is_flat(d2, chord_sq) {
                    return false;
                }
                if !tol.angle_enabled() {
                    path.commit_line_to(p123);
                    return true;
                }
                let da = turn_angle(p2 - p1, p3 - p2);
                if da < tol.angle_tolerance() {
                    path.commit_line_to(p1);
                    path.commit_line_to(p2);
                    return true;
                }
                if tol.cusp_enabled() && da > tol.cusp_limit() {
                    path.commit_line_to(p2);
                    return true;
                }
                false
            }
            // p0, p2, p3 are collinear, p1 is significant.
            (true, false) => {
                if !tol.is_flat(d1, chord_sq) {
                    return false;
                }
                if !tol.angle_enabled() {
                    path.commit_line_to(p123);
                    return true;
                }
                let da = turn_angle(p1 - p0, p2 - p1);
                if da < tol.angle_tolerance() {
                    path.commit_line_to(p1);
                    path.commit_line_to(p2);
                    return true;
                }
                // The control point at the cusp, mirroring the case above as
                // AGG does. Fog's approximateCurve4 emits p2 here instead.
                if tol.cusp_enabled() && da > tol.cusp_limit() {
                    path.commit_line_to(p1);
                    return true;
                }
                false
            }
            // Regular case.
            (true, true) => {
                if !tol.is_flat(d1 + d2, chord_sq) {
                    return false;
                }
                if !tol.angle_enabled() {
                    path.commit_line_to(p123);
                    return true;
                }
                let da1 = turn_angle(p1 - p0, p2 - p1);
                let da2 = turn_angle(p2 - p1, p3 - p2);
                if da1 + da2 < tol.angle_tolerance() {
                    path.commit_line_to(p123);
                    return true;
                }
                if tol.cusp_enabled() {
                    if da1 > tol.cusp_limit() {
                        path.commit_line_to(p1);
                        return true;
                    }
                    if da2 > tol.cusp_limit() {
                        path.commit_line_to(p2);
                        return true;
                    }
                }
                false
            }
        }
    }

    #[inline]
    fn subdivide(&self) -> (Self, Self) {
        CubicBez::subdivide(self)
    }
}

impl Mul<CubicBez> for Affine {
    type Output = CubicBez;

    #[inline]
    fn mul(self, c: CubicBez) -> CubicBez {
        CubicBez {
            p0: self * c.p0,
            p1: self * c.p1,
            p2: self * c.p2,
            p3: self * c.p3,
        }
    }
}
