// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable vector of individually boxed items with fallible insertion.
//!
//! `BoxVec<T>` stores each item in its own heap allocation and keeps the
//! owning pointers in a contiguous slot buffer that grows geometrically.
//! Construction of items is routed through the [`Construct`] trait, which
//! builds an owned item from a borrowed source and signals allocation
//! failure by returning `None`; destruction is the item's own `Drop`.
//!
//! # Core Guarantees
//!
//! - **Strong failure safety**: a failed `insert()` leaves the vector
//!   exactly as it was - no partial mutation, no leaked items.
//! - **Stable item addresses**: items are individually boxed, so growing
//!   the slot buffer never moves an item.
//! - **Exactly-once destruction**: every stored item is dropped exactly
//!   once, in insertion order, when the vector is dropped or destroyed.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use boxvec::{BoxVec, BoxVecError};
//!
//! fn example() -> Result<(), BoxVecError> {
//!     let mut vec = BoxVec::<u32>::new();
//!
//!     vec.insert(&3)?;
//!     vec.insert(&1)?;
//!     vec.insert(&4)?;
//!
//!     assert_eq!(vec.len(), 3);
//!
//!     let forward: Vec<u32> = vec.iter().copied().collect();
//!     assert_eq!(forward, [3, 1, 4]);
//!
//!     let reverse: Vec<u32> = vec.iter().rev().copied().collect();
//!     assert_eq!(reverse, [4, 1, 3]);
//!
//!     vec.destroy();
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Custom Construction
//!
//! ```rust
//! use boxvec::{BoxVec, Construct};
//!
//! struct Record {
//!     name: String,
//! }
//!
//! impl Construct for Record {
//!     type Source = str;
//!
//!     fn construct(source: &str) -> Option<Self> {
//!         let name = String::construct(source)?;
//!         Some(Record { name })
//!     }
//! }
//!
//! let mut vec = BoxVec::<Record>::new();
//! let record = vec.insert("alice").expect("insert failed");
//! assert_eq!(record.name, "alice");
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject failures for testing error
//! handling paths:
//!
//! ```toml
//! [dev-dependencies]
//! boxvec = { version = "*", features = ["test_utils"] }
//! ```
//!
//! Then use [`BoxVecBehaviour`] to test error scenarios:
//!
//! ```rust
//! // test_utils feature required in dev-dependencies
//! #[cfg(test)]
//! mod tests {
//!     use boxvec::{BoxVec, BoxVecBehaviour};
//!
//!     #[test]
//!     fn test_handles_grow_failure() {
//!         let mut vec = BoxVec::<u32>::new();
//!         vec.change_behaviour(BoxVecBehaviour::FailAtGrow);
//!
//!         // Test that your code handles the error correctly
//!         assert!(vec.insert(&1).is_err());
//!     }
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod box_vec;
mod construct;
mod error;
mod iter;

#[cfg(test)]
mod tests;

pub use box_vec::BoxVec;
pub use construct::Construct;
pub use error::BoxVecError;
pub use iter::Iter;

#[cfg(any(test, feature = "test_utils"))]
pub use box_vec::BoxVecBehaviour;
