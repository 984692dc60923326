// Copyright 2026 the flatbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flattening tolerances.

use crate::Affine;

/// Cross products at or below this magnitude are treated as zero: the
/// control point is considered to lie on the chord.
pub const COLLINEARITY_EPSILON: f64 = 1e-30;

/// Angle tolerances below this value (in radians) disable the angle based
/// refinement, leaving distance-only termination.
pub const ANGLE_TOLERANCE_EPSILON: f64 = 0.01;

/// How closely a flattened polyline must follow its curve.
///
/// The distance part is derived from an approximation scale, the number of
/// output units (typically device pixels) per curve unit. The resulting
/// polyline stays within half an output unit of the curve.
///
/// ```
/// use flatbez::Tolerance;
///
/// let tol = Tolerance::from_scale(2.0).with_angle_tolerance(0.2);
/// assert_eq!(tol.distance_tolerance_sq(), 0.0625);
/// assert!(tol.angle_enabled());
/// assert!(!tol.cusp_enabled());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerance {
    distance_tolerance_sq: f64,
    angle_tolerance: f64,
    cusp_limit: f64,
}

impl Tolerance {
    /// Create a tolerance from an approximation scale.
    ///
    /// The squared distance tolerance is `(0.5 / approximation_scale)²`, so
    /// larger scales give tighter tolerances and more vertices. The scale is
    /// expected to be positive; a scale of zero accepts every curve as flat.
    /// Angle and cusp refinement start out disabled.
    pub fn from_scale(approximation_scale: f64) -> Tolerance {
        let d = 0.5 / approximation_scale;
        Tolerance {
            distance_tolerance_sq: d * d,
            angle_tolerance: 0.0,
            cusp_limit: 0.0,
        }
    }

    /// Create a tolerance for curves that will be drawn through `affine`.
    ///
    /// This is [`from_scale`](Self::from_scale) with the transform's
    /// [`scale_factor`](Affine::scale_factor), so flattening before the
    /// transform gives half a unit of error after it.
    pub fn from_transform(affine: Affine) -> Tolerance {
        Tolerance::from_scale(affine.scale_factor())
    }

    /// Set the angle tolerance, in radians.
    ///
    /// When enabled, a segment that is flat enough by distance is only
    /// accepted if the control polygon turns by less than this angle.
    /// Values below [`ANGLE_TOLERANCE_EPSILON`] disable the refinement.
    #[must_use]
    pub fn with_angle_tolerance(mut self, angle_tolerance: f64) -> Tolerance {
        self.angle_tolerance = angle_tolerance;
        self
    }

    /// Set the cusp limit, in radians. Only cubic segments use it.
    ///
    /// A turn sharper than this at an interior control point ends the
    /// subdivision early at that control point. Zero disables it.
    #[must_use]
    pub fn with_cusp_limit(mut self, cusp_limit: f64) -> Tolerance {
        self.cusp_limit = cusp_limit;
        self
    }

    /// The squared distance tolerance.
    #[inline]
    pub fn distance_tolerance_sq(&self) -> f64 {
        self.distance_tolerance_sq
    }

    /// The angle tolerance, in radians.
    #[inline]
    pub fn angle_tolerance(&self) -> f64 {
        self.angle_tolerance
    }

    /// The cusp limit, in radians.
    #[inline]
    pub fn cusp_limit(&self) -> f64 {
        self.cusp_limit
    }

    /// Whether the angle refinement is active.
    #[inline]
    pub fn angle_enabled(&self) -> bool {
        self.angle_tolerance >= ANGLE_TOLERANCE_EPSILON
    }

    /// Whether the cusp limit is active.
    #[inline]
    pub fn cusp_enabled(&self) -> bool {
        self.cusp_limit != 0.0
    }

    /// Whether a deviation `d` from a chord of squared length `chord_sq` is
    /// within tolerance.
    ///
    /// `d` is a cross product, i.e. the perpendicular distance scaled by the
    /// chord length, hence the comparison against the scaled tolerance.
    #[inline]
    pub(crate) fn is_flat(&self, d: f64, chord_sq: f64) -> bool {
        d * d <= self.distance_tolerance_sq * chord_sq
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::from_scale(1.0)
    }
}
