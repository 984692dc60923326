// Copyright 2026 the flatbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adaptive flattening of quadratic and cubic Bézier curves.
//!
//! The flatbez library turns curve segments into polylines that stay within a
//! tolerance of the true curve, using recursive midpoint subdivision with
//! distance, angle and cusp criteria. Output goes into a [`Path`], a vertex
//! sink whose storage grows in fixed-size chunks and reports allocation
//! failure as an [`Error`] instead of aborting.
//!
//! # Examples
//!
//! Flattening a single curve:
//! ```
//! use flatbez::{CubicBez, Path, Tolerance, VertexCmd};
//!
//! let curve = CubicBez::new((0.0, 0.0), (0.0, 100.0), (100.0, 100.0), (100.0, 0.0));
//! let mut path = Path::new();
//! path.move_to(curve.p0).unwrap();
//! curve.flatten(&Tolerance::from_scale(1.0), &mut path).unwrap();
//!
//! assert!(path.len() > 2);
//! assert_eq!(path.last().unwrap().cmd, VertexCmd::LineTo);
//! assert_eq!(path.last().unwrap().point, curve.p3);
//! ```
//!
//! Flattening a whole path, then mapping it to device space:
//! ```
//! use flatbez::{Affine, Path, Tolerance};
//!
//! let mut path = Path::new();
//! path.move_to((0.0, 0.0)).unwrap();
//! path.quad_to((10.0, 20.0), (20.0, 0.0)).unwrap();
//! path.close_path().unwrap();
//!
//! // Four device pixels per unit, so flattening needs four times the precision.
//! let device = Affine::scale(4.0);
//! let mut flat = path.flatten(&Tolerance::from_transform(device)).unwrap();
//! flat.transform(device);
//! assert!(flat.vertices().iter().all(|v| v.point.x <= 80.0));
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. This crate still uses the `alloc` crate
//! regardless.
//!
//! The `serde` and `schemars` features derive serialization and schemas for
//! the geometry types, and `mint` adds conversions to and from its types.
//!
//! # Logging
//!
//! Diagnostics go through the [`log`] facade: skipped non-finite curves at
//! `warn`, failed reservations at `debug` and subdivision hitting the depth
//! limit at `trace`. Nothing is logged on the fast path.
//!
//! [`libm`]: https://docs.rs/libm
//! [`log`]: https://docs.rs/log

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision
)]
// The following lints are part of the Linebender standard set,
// but resolving them has been deferred for now.
#![allow(
    missing_debug_implementations,
    elided_lifetimes_in_paths,
    single_use_lifetimes,
    trivial_numeric_casts,
    unnameable_types,
    clippy::use_self,
    clippy::return_self_not_must_use,
    clippy::cast_possible_truncation,
    clippy::wildcard_imports,
    clippy::shadow_unrelated,
    clippy::missing_assert_message,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::exhaustive_enums,
    clippy::match_same_arms,
    clippy::partial_pub_fields,
    clippy::unseparated_literal_suffix,
    clippy::duplicated_attributes,
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("flatbez requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

extern crate alloc;

mod affine;
pub mod common;
mod cubicbez;
mod error;
mod flatten;
mod path;
mod point;
mod quadbez;
mod tolerance;
mod transform;
mod vec2;
mod vertex;

pub use crate::affine::Affine;
pub use crate::cubicbez::CubicBez;
pub use crate::error::{Error, Result};
pub use crate::flatten::RECURSION_LIMIT;
pub use crate::path::Path;
pub use crate::point::Point;
pub use crate::quadbez::QuadBez;
pub use crate::tolerance::{Tolerance, ANGLE_TOLERANCE_EPSILON, COLLINEARITY_EPSILON};
pub use crate::transform::{transform_vertices, transform_vertices_into};
pub use crate::vec2::Vec2;
pub use crate::vertex::{Vertex, VertexCmd};
