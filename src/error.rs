// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for boxvec.

use thiserror::Error;

/// Error type for `BoxVec` operations.
///
/// Every failure is some form of allocation failure; fallible operations
/// return this error and leave the vector unchanged.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum BoxVecError {
    /// The slot buffer could not be reallocated during growth.
    #[error("Allocation failed: slot buffer could not be grown")]
    AllocFailed,

    /// The item constructor signalled allocation failure by returning `None`.
    #[error("Construction failed: item constructor returned no item")]
    ConstructFailed,

    /// Integer overflow when doubling capacity.
    ///
    /// This error is practically impossible to encounter in normal usage,
    /// as it would require a slot buffer with capacity exceeding
    /// `usize::MAX / 2` - more slots than can be allocated - which is
    /// also why no test exercises it. It exists as a defensive check for
    /// integer overflow safety.
    #[error("Integer overflow: doubled capacity would exceed usize::MAX")]
    Overflow,
}
