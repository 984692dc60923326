// Copyright 2026 the flatbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations.

#![allow(missing_docs)]

use core::f64::consts::PI;

use crate::Vec2;

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(#[inline]
            fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("flatbez requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn atan2(self, other: Self) -> Self => atan2;
    fn hypot(self, other: Self) -> Self => hypot;
    fn sin_cos(self) -> (Self, Self) => sincos;
    fn sqrt(self) -> Self => sqrt;
}

/// Wrap the absolute difference of two angles into `[0, π]`.
///
/// Both inputs are expected to come from `atan2`, so their difference lies
/// in `[-2π, 2π]` and a single reflection is enough.
#[inline]
pub fn wrap_angle(da: f64) -> f64 {
    let da = da.abs();
    if da >= PI {
        2.0 * PI - da
    } else {
        da
    }
}

/// The turning angle from direction `a` to direction `b`, in `[0, π]`.
///
/// Zero-length directions have an angle of zero, matching `atan2(0, 0)`.
#[inline]
pub fn turn_angle(a: Vec2, b: Vec2) -> f64 {
    wrap_angle(b.atan2() - a.atan2())
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    #[test]
    fn wrap_angle_range() {
        assert_eq!(wrap_angle(0.0), 0.0);
        assert_eq!(wrap_angle(-FRAC_PI_2), FRAC_PI_2);
        assert!((wrap_angle(1.5 * PI) - FRAC_PI_2).abs() < 1e-12);
        assert!((wrap_angle(-1.9 * PI) - 0.1 * PI).abs() < 1e-12);
        assert_eq!(wrap_angle(PI), PI);
    }

    #[test]
    fn turn_angle_across_branch_cut() {
        // Just above and just below the negative x axis: a tiny turn, not ~2π.
        let a = Vec2::new(-1.0, 1e-3);
        let b = Vec2::new(-1.0, -1e-3);
        assert!(turn_angle(a, b) < 3e-3);
        assert!((turn_angle(Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)) - FRAC_PI_2).abs() < 1e-12);
        assert!((turn_angle(Vec2::new(1.0, 0.0), Vec2::new(-1.0, 0.0)) - PI).abs() < 1e-12);
    }
}
