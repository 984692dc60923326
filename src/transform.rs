// Copyright 2026 the flatbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Applying affine transforms to runs of vertices.
//!
//! Only vertices whose command [carries a position](crate::VertexCmd::is_vertex)
//! are mapped. Structural markers keep their coordinates bit for bit.

use crate::{Affine, Vertex};

/// Transform `vertices` in place.
pub fn transform_vertices(affine: Affine, vertices: &mut [Vertex]) {
    for v in vertices.iter_mut() {
        if v.is_vertex() {
            v.point = affine * v.point;
        }
    }
}

/// Transform `src` into `dst`.
///
/// Every command is copied. Positions are mapped; the coordinates of
/// structural markers are copied unchanged.
///
/// # Panics
///
/// Panics if `src` and `dst` have different lengths.
pub fn transform_vertices_into(affine: Affine, src: &[Vertex], dst: &mut [Vertex]) {
    assert_eq!(
        src.len(),
        dst.len(),
        "source and destination vertex counts differ"
    );
    for (d, s) in dst.iter_mut().zip(src) {
        *d = affine * *s;
    }
}
