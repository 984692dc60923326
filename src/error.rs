// Copyright 2026 the flatbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for path growth.

use thiserror::Error;

/// Errors that can occur while writing to a [`Path`](crate::Path).
///
/// Zero tolerances and degenerate curves are valid inputs, so the only way a
/// flattening call can fail is by running out of room for its output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Growing the vertex storage failed.
    ///
    /// Either the allocator refused the request, the request overflowed, or
    /// the path's vertex limit would have been exceeded. Everything committed
    /// before the failure is still in the path.
    #[error("out of memory while reserving {requested} path vertices")]
    OutOfMemory {
        /// The number of additional vertices that could not be reserved.
        requested: usize,
    },
}

/// A specialized `Result` for path and flattening operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;
