// Copyright 2026 the flatbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The vertex sink flatteners write into.

use alloc::vec::Vec;
use core::ops::Range;

use smallvec::SmallVec;

use crate::{
    transform_vertices, Affine, CubicBez, Error, Point, QuadBez, Result, Tolerance, Vertex,
    VertexCmd,
};

/// A growable sequence of tagged vertices.
///
/// Storage grows in whole chunks of [`Path::CHUNK_SIZE`] vertices, and growth
/// is fallible: running out of memory (or past the optional vertex limit) is
/// reported as [`Error::OutOfMemory`] and leaves every vertex committed so
/// far in place.
///
/// Curve segments are stored as one (quadratic) or two (cubic)
/// [`VertexCmd::CurveControl`] vertices followed by the on-curve end point
/// as a [`VertexCmd::LineTo`]. [`Path::flatten`] turns them into polylines.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    vertices: Vec<Vertex>,
    limit: usize,
}

impl Path {
    /// The number of vertices storage grows by at a time.
    pub const CHUNK_SIZE: usize = 256;

    /// Create a new, empty path.
    pub fn new() -> Path {
        Path {
            vertices: Vec::new(),
            limit: usize::MAX,
        }
    }

    /// Create an empty path that can hold at least `capacity` vertices
    /// without growing.
    pub fn with_capacity(capacity: usize) -> Result<Path> {
        let mut path = Path::new();
        path.reserve(capacity)?;
        Ok(path)
    }

    /// Create an empty path that will never hold more than `limit` vertices.
    ///
    /// Any attempt to grow past the limit fails as if the allocator had run
    /// out of memory.
    pub fn with_limit(limit: usize) -> Path {
        Path {
            vertices: Vec::new(),
            limit,
        }
    }

    /// The vertex limit, if one was set.
    pub fn limit(&self) -> Option<usize> {
        (self.limit != usize::MAX).then_some(self.limit)
    }

    /// The number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the path has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The number of vertices the path can hold without growing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.vertices.capacity()
    }

    /// Get the vertices.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Get the vertices, mutably.
    #[inline]
    pub fn vertices_mut(&mut self) -> &mut [Vertex] {
        &mut self.vertices
    }

    /// The last vertex, if any.
    #[inline]
    pub fn last(&self) -> Option<&Vertex> {
        self.vertices.last()
    }

    /// Remove all vertices, keeping the storage.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Shorten the path to `len` vertices. Has no effect if it is already
    /// shorter.
    pub fn truncate(&mut self, len: usize) {
        self.vertices.truncate(len);
    }

    /// Make room for at least `additional` more vertices.
    ///
    /// When the current storage is too small, capacity grows to the next
    /// multiple of [`Path::CHUNK_SIZE`] that fits, clamped to the vertex
    /// limit. On failure nothing is changed.
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        let len = self.vertices.len();
        if self.vertices.capacity().min(self.limit) - len >= additional {
            return Ok(());
        }
        let oom = || {
            log::debug!("failed to reserve {additional} vertices on a path of {len}");
            Error::OutOfMemory {
                requested: additional,
            }
        };
        let needed = len
            .checked_add(additional)
            .filter(|&needed| needed <= self.limit)
            .ok_or_else(oom)?;
        let target = needed
            .checked_next_multiple_of(Self::CHUNK_SIZE)
            .unwrap_or(needed)
            .min(self.limit);
        self.vertices
            .try_reserve_exact(target - len)
            .map_err(|_| oom())
    }

    /// Append a vertex into storage that has already been reserved.
    #[inline]
    pub(crate) fn commit(&mut self, vertex: Vertex) {
        debug_assert!(
            self.vertices.len() < self.vertices.capacity(),
            "vertex committed without reserving"
        );
        self.vertices.push(vertex);
    }

    #[inline]
    pub(crate) fn commit_line_to(&mut self, p: Point) {
        self.commit(Vertex::new(VertexCmd::LineTo, p));
    }

    /// Append a vertex.
    pub fn push(&mut self, vertex: Vertex) -> Result<()> {
        self.reserve(1)?;
        self.commit(vertex);
        Ok(())
    }

    /// Append a "move to" vertex.
    pub fn move_to(&mut self, p: impl Into<Point>) -> Result<()> {
        self.push(Vertex::new(VertexCmd::MoveTo, p.into()))
    }

    /// Append a "line to" vertex.
    pub fn line_to(&mut self, p: impl Into<Point>) -> Result<()> {
        self.push(Vertex::new(VertexCmd::LineTo, p.into()))
    }

    /// Append a quadratic segment: one control point and the end point.
    ///
    /// Nothing is appended if there is no room for both.
    pub fn quad_to(&mut self, p1: impl Into<Point>, p2: impl Into<Point>) -> Result<()> {
        self.reserve(2)?;
        self.commit(Vertex::new(VertexCmd::CurveControl, p1.into()));
        self.commit(Vertex::new(VertexCmd::LineTo, p2.into()));
        Ok(())
    }

    /// Append a cubic segment: two control points and the end point.
    ///
    /// Nothing is appended if there is no room for all three.
    pub fn cubic_to(
        &mut self,
        p1: impl Into<Point>,
        p2: impl Into<Point>,
        p3: impl Into<Point>,
    ) -> Result<()> {
        self.reserve(3)?;
        self.commit(Vertex::new(VertexCmd::CurveControl, p1.into()));
        self.commit(Vertex::new(VertexCmd::CurveControl, p2.into()));
        self.commit(Vertex::new(VertexCmd::LineTo, p3.into()));
        Ok(())
    }

    /// Append a "close path" marker.
    pub fn close_path(&mut self) -> Result<()> {
        self.push(Vertex::new(VertexCmd::Close, Point::ZERO))
    }

    /// Append a "stop" marker.
    pub fn stop(&mut self) -> Result<()> {
        self.push(Vertex::new(VertexCmd::Stop, Point::ZERO))
    }

    /// Apply an affine transform to every vertex of the path.
    pub fn transform(&mut self, affine: Affine) {
        transform_vertices(affine, &mut self.vertices);
    }

    /// Apply an affine transform to the vertices in `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is out of bounds.
    pub fn transform_range(&mut self, range: Range<usize>, affine: Affine) {
        transform_vertices(affine, &mut self.vertices[range]);
    }

    /// Return a copy of this path with every curve segment flattened.
    pub fn flatten(&self, tol: &Tolerance) -> Result<Path> {
        let mut dst = Path::new();
        self.flatten_into(tol, &mut dst)?;
        Ok(dst)
    }

    /// Append this path to `dst`, replacing every curve segment with a
    /// polyline.
    ///
    /// Straight segments and structural markers are copied as is. Control
    /// points that do not form a quadratic or cubic segment (no current
    /// point, more than two in a row, or no on-curve end) are kept as
    /// straight `LineTo`s through the control polygon.
    pub fn flatten_into(&self, tol: &Tolerance, dst: &mut Path) -> Result<()> {
        let mut start: Option<Point> = None;
        let mut current: Option<Point> = None;
        let mut controls = SmallVec::<[Point; 2]>::new();

        for vertex in &self.vertices {
            match vertex.cmd {
                VertexCmd::CurveControl => {
                    controls.push(vertex.point);
                    continue;
                }
                VertexCmd::LineTo => {
                    let end = vertex.point;
                    match (current, controls.as_slice()) {
                        (_, []) => dst.push(*vertex)?,
                        (Some(p0), &[p1]) => QuadBez::new(p0, p1, end).flatten(tol, dst)?,
                        (Some(p0), &[p1, p2]) => {
                            CubicBez::new(p0, p1, p2, end).flatten(tol, dst)?;
                        }
                        (_, polygon) => {
                            for &p in polygon {
                                dst.line_to(p)?;
                            }
                            dst.push(*vertex)?;
                        }
                    }
                    current = Some(end);
                }
                VertexCmd::MoveTo => {
                    flush_controls(&controls, dst)?;
                    dst.push(*vertex)?;
                    start = Some(vertex.point);
                    current = start;
                }
                VertexCmd::Close => {
                    flush_controls(&controls, dst)?;
                    dst.push(*vertex)?;
                    current = start;
                }
                VertexCmd::Stop => {
                    flush_controls(&controls, dst)?;
                    dst.push(*vertex)?;
                }
            }
            controls.clear();
        }
        flush_controls(&controls, dst)
    }
}

fn flush_controls(controls: &[Point], dst: &mut Path) -> Result<()> {
    for &p in controls {
        dst.line_to(p)?;
    }
    Ok(())
}

impl Default for Path {
    fn default() -> Self {
        Path::new()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Vertex;
    type IntoIter = core::slice::Iter<'a, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}
