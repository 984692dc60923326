// Copyright 2026 the flatbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadratic Bézier segments.

use core::ops::Mul;

use arrayvec::ArrayVec;

use crate::common::turn_angle;
use crate::flatten::{chord_deviation_sq, flatten_segment, Subdivide};
use crate::tolerance::COLLINEARITY_EPSILON;
use crate::{Affine, Path, Point, Result, Tolerance};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A single quadratic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub struct QuadBez {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
}

impl QuadBez {
    /// Create a new quadratic Bézier segment.
    #[inline]
    pub fn new<V: Into<Point>>(p0: V, p1: V, p2: V) -> QuadBez {
        QuadBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
        }
    }

    /// Evaluate the curve at parameter `t`.
    pub fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        (self.p0.to_vec2() * (mt * mt)
            + (self.p1.to_vec2() * (mt * 2.0) + self.p2.to_vec2() * t) * t)
            .to_point()
    }

    /// The start point.
    #[inline]
    pub fn start(&self) -> Point {
        self.p0
    }

    /// The end point.
    #[inline]
    pub fn end(&self) -> Point {
        self.p2
    }

    /// Subdivide into halves, using de Casteljau.
    pub fn subdivide(&self) -> (QuadBez, QuadBez) {
        let p01 = self.p0.midpoint(self.p1);
        let p12 = self.p1.midpoint(self.p2);
        let p012 = p01.midpoint(p12);
        (
            QuadBez::new(self.p0, p01, p012),
            QuadBez::new(p012, p12, self.p2),
        )
    }

    /// Append a polyline approximating this curve to `path`.
    ///
    /// Only `LineTo` vertices are appended, the last one being exactly
    /// [`end`](Self::end). The start point is not emitted; callers usually
    /// have it in the path already.
    ///
    /// On error the path keeps every vertex committed before the failure.
    ///
    /// ```
    /// use flatbez::{Path, QuadBez, Tolerance};
    ///
    /// let quad = QuadBez::new((0.0, 0.0), (50.0, 100.0), (100.0, 0.0));
    /// let mut path = Path::new();
    /// path.move_to(quad.p0).unwrap();
    /// quad.flatten(&Tolerance::from_scale(1.0), &mut path).unwrap();
    /// assert!(path.len() > 2);
    /// assert_eq!(path.last().unwrap().point, quad.p2);
    /// ```
    pub fn flatten(&self, tol: &Tolerance, path: &mut Path) -> Result<()> {
        flatten_segment(*self, tol, path)
    }
}

impl Subdivide for QuadBez {
    const MAX_EMIT: usize = 1;

    #[inline]
    fn points(&self) -> ArrayVec<Point, 4> {
        [self.p0, self.p1, self.p2].into_iter().collect()
    }

    fn try_accept(&self, tol: &Tolerance, path: &mut Path) -> bool {
        let QuadBez { p0, p1, p2 } = *self;
        let chord = p2 - p0;
        let d = (p1 - p2).cross(chord).abs();

        if d > COLLINEARITY_EPSILON {
            if tol.is_flat(d, chord.hypot2())
                && (!tol.angle_enabled() || turn_angle(p1 - p0, p2 - p1) < tol.angle_tolerance())
            {
                let p012 = p0.midpoint(p1).midpoint(p1.midpoint(p2));
                path.commit_line_to(p012);
                return true;
            }
            return false;
        }

        let chord_sq = chord.hypot2();
        let dist_sq = if chord_sq == 0.0 {
            p0.distance_squared(p1)
        } else {
            let t = (p1 - p0).dot(chord) / chord_sq;
            if t > 0.0 && t < 1.0 {
                // p0---p1---p2: the end points alone represent it.
                return true;
            }
            chord_deviation_sq(p1, t, p0, p2)
        };
        if dist_sq < tol.distance_tolerance_sq() {
            path.commit_line_to(p1);
            return true;
        }
        false
    }

    #[inline]
    fn subdivide(&self) -> (Self, Self) {
        QuadBez::subdivide(self)
    }
}

impl Mul<QuadBez> for Affine {
    type Output = QuadBez;

    #[inline]
    fn mul(self, other: QuadBez) -> QuadBez {
        QuadBez {
            p0: self * other.p0,
            p1: self * other.p1,
            p2: self * other.p2,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;
    use crate::{Error, Vertex, VertexCmd};

    fn flatten(q: QuadBez, tol: Tolerance) -> Path {
        let mut path = Path::new();
        q.flatten(&tol, &mut path).unwrap();
        path
    }

    fn distance_to_curve(q: QuadBez, p: Point) -> f64 {
        const N: usize = 2048;
        (0..=N)
            .map(|i| q.eval(i as f64 / N as f64).distance(p))
            .fold(f64::INFINITY, f64::min)
    }

    const ARCH: QuadBez = QuadBez {
        p0: Point::new(0.0, 0.0),
        p1: Point::new(50.0, 100.0),
        p2: Point::new(100.0, 0.0),
    };

    #[test]
    fn quadbez_subdivide() {
        let (a, b) = ARCH.subdivide();
        assert_eq!(a.p0, ARCH.p0);
        assert_eq!(a.p2, ARCH.eval(0.5));
        assert_eq!(b.p0, a.p2);
        assert_eq!(b.p2, ARCH.p2);
    }

    #[test]
    fn arch() {
        let path = flatten(ARCH, Tolerance::from_scale(1.0));
        assert!(path.len() > 2);
        assert_eq!(path.last().unwrap().point, ARCH.p2);
        for v in &path {
            assert_eq!(v.cmd, VertexCmd::LineTo);
            let Point { x, y } = v.point;
            assert!((0.0..=100.0).contains(&x), "{v:?}");
            assert!((0.0..=50.0).contains(&y), "{v:?}");
            assert!(distance_to_curve(ARCH, v.point) < 1e-6, "{v:?}");
        }
    }

    #[test]
    fn polyline_stays_close() {
        let q = QuadBez::new((10.0, 80.0), (140.0, -60.0), (30.0, 20.0));
        let path = flatten(q, Tolerance::from_scale(1.0));
        let mut prev = q.p0;
        for v in &path {
            let mid = prev.midpoint(v.point);
            assert!(distance_to_curve(q, mid) < 1.0, "{mid:?}");
            prev = v.point;
        }
    }

    #[test]
    fn collinear_inside_chord_collapses() {
        let q = QuadBez::new((0.0, 0.0), (5.0, 0.0), (10.0, 0.0));
        let path = flatten(q, Tolerance::from_scale(1.0));
        assert_eq!(path.vertices(), &[Vertex::line_to((10.0, 0.0))]);
    }

    #[test]
    fn collinear_overshoot_reaches_apex() {
        // Turns around at x = 40/3, then comes back to 10.
        let q = QuadBez::new((0.0, 0.0), (20.0, 0.0), (10.0, 0.0));
        let path = flatten(q, Tolerance::from_scale(1.0));
        assert!(path.len() > 1);
        let max_x = path
            .vertices()
            .iter()
            .map(|v| v.point.x)
            .fold(f64::NEG_INFINITY, f64::max);
        assert!(max_x > 13.0 && max_x < 14.0, "{max_x}");
        assert!(path.vertices().iter().all(|v| v.point.y == 0.0));
        assert_eq!(path.last().unwrap().point, q.p2);
    }

    #[test]
    fn single_point() {
        let q = QuadBez::new((3.0, 3.0), (3.0, 3.0), (3.0, 3.0));
        let path = flatten(q, Tolerance::from_scale(100.0));
        assert_eq!(path.vertices(), &[Vertex::line_to((3.0, 3.0))]);
    }

    #[test]
    fn non_finite_emits_end_only() {
        let q = QuadBez::new((0.0, 0.0), (f64::NAN, 1.0), (10.0, 0.0));
        let path = flatten(q, Tolerance::from_scale(1.0));
        assert_eq!(path.vertices(), &[Vertex::line_to((10.0, 0.0))]);
    }

    #[test]
    fn more_vertices_with_scale() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut curves = vec![ARCH];
        for _ in 0..20 {
            let mut p = || Point::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0));
            curves.push(QuadBez::new(p(), p(), p()));
        }
        for q in curves {
            let mut last = 0;
            for scale in [0.1, 0.5, 1.0, 2.0, 4.0, 10.0] {
                let n = flatten(q, Tolerance::from_scale(scale)).len();
                assert!(n >= last, "{q:?} at {scale}: {n} < {last}");
                last = n;
            }
        }
    }

    #[test]
    fn angle_tolerance_refines() {
        let q = QuadBez::new((0.0, 0.0), (100.0, 100.0), (200.0, 0.0));
        let tol = Tolerance::from_scale(0.1);
        let plain = flatten(q, tol).len();
        let refined = flatten(q, tol.with_angle_tolerance(0.1)).len();
        assert!(refined > plain, "{refined} <= {plain}");
        // Below the epsilon the angle check is off entirely.
        assert_eq!(flatten(q, tol.with_angle_tolerance(0.001)).len(), plain);
    }

    #[test]
    fn rotation_invariance() {
        // A quarter turn is exact in floating point.
        let rot = Affine::new([0.0, 1.0, -1.0, 0.0, 0.0, 0.0]);
        let q = QuadBez::new((3.0, 7.0), (120.0, 45.0), (-20.0, 90.0));
        let tol = Tolerance::from_scale(2.0);
        let a = flatten(q, tol);
        let b = flatten(rot * q, tol);
        assert_eq!(a.len(), b.len());
        for (u, v) in a.vertices().iter().zip(b.vertices()) {
            assert_eq!(rot * u.point, v.point);
        }
    }

    #[test]
    fn scale_invariance() {
        let q = QuadBez::new((3.0, 7.0), (120.0, 45.0), (-20.0, 90.0));
        let a = flatten(q, Tolerance::from_scale(1.0));
        let b = flatten(Affine::scale(2.0) * q, Tolerance::from_scale(0.5));
        assert_eq!(a.len(), b.len());
        for (u, v) in a.vertices().iter().zip(b.vertices()) {
            assert_eq!(u.point.to_vec2() * 2.0, v.point.to_vec2());
        }
    }

    #[test]
    fn out_of_memory_keeps_prefix() {
        let mut path = Path::with_limit(4);
        path.move_to(ARCH.p0).unwrap();
        let err = ARCH.flatten(&Tolerance::from_scale(1.0), &mut path);
        assert_eq!(err, Err(Error::OutOfMemory { requested: 1 }));
        assert_eq!(path.len(), 4);
        assert_eq!(path.vertices()[0].cmd, VertexCmd::MoveTo);
        for v in &path.vertices()[1..] {
            assert_eq!(v.cmd, VertexCmd::LineTo);
            assert!(distance_to_curve(ARCH, v.point) < 1e-6);
        }
    }
}
