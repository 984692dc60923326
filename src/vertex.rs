// Copyright 2026 the flatbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tagged path vertices.

use core::ops::Mul;

use crate::{Affine, Point};

/// The command carried by a [`Vertex`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VertexCmd {
    /// Start a new subpath at the vertex.
    MoveTo,
    /// A straight line to the vertex.
    LineTo,
    /// An off-curve control point.
    ///
    /// One or two of these followed by an on-curve [`LineTo`] form a
    /// quadratic or cubic segment. Flatteners never emit them.
    ///
    /// [`LineTo`]: VertexCmd::LineTo
    CurveControl,
    /// Close the current subpath. The coordinates are not a position.
    Close,
    /// End marker. The coordinates are not a position.
    Stop,
}

impl VertexCmd {
    /// Whether vertices with this command carry a position in the plane.
    ///
    /// Structural commands keep whatever coordinates they hold through
    /// every transform.
    #[inline]
    pub fn is_vertex(self) -> bool {
        matches!(
            self,
            VertexCmd::MoveTo | VertexCmd::LineTo | VertexCmd::CurveControl
        )
    }
}

/// A point tagged with a [`VertexCmd`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    /// The command.
    pub cmd: VertexCmd,
    /// The coordinates.
    pub point: Point,
}

impl Vertex {
    /// Create a new vertex.
    #[inline]
    pub const fn new(cmd: VertexCmd, point: Point) -> Vertex {
        Vertex { cmd, point }
    }

    /// A [`VertexCmd::MoveTo`] vertex.
    #[inline]
    pub fn move_to(p: impl Into<Point>) -> Vertex {
        Vertex::new(VertexCmd::MoveTo, p.into())
    }

    /// A [`VertexCmd::LineTo`] vertex.
    #[inline]
    pub fn line_to(p: impl Into<Point>) -> Vertex {
        Vertex::new(VertexCmd::LineTo, p.into())
    }

    /// Whether this vertex carries a position; see [`VertexCmd::is_vertex`].
    #[inline]
    pub fn is_vertex(&self) -> bool {
        self.cmd.is_vertex()
    }
}

impl Mul<Vertex> for Affine {
    type Output = Vertex;

    #[inline]
    fn mul(self, other: Vertex) -> Vertex {
        if other.is_vertex() {
            Vertex::new(other.cmd, self * other.point)
        } else {
            other
        }
    }
}
