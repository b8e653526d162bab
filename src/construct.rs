// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fallible copy-construction of owned items from borrowed sources.

use alloc::string::String;

/// Builds an owned item from a borrowed source value.
///
/// This is the constructor contract of [`BoxVec`](crate::BoxVec): the
/// implementation chosen by the item type is bound for the lifetime of the
/// container. The matching destructor contract is the item's own `Drop`,
/// which runs exactly once per item.
///
/// # Contract
///
/// - The produced item must be independent of `source`: no borrow of
///   `source` may be retained past the call.
/// - `source` may be a fully-formed value of the item type or a descriptor
///   the constructor interprets.
/// - Allocation failure is signalled by returning `None`. `construct` must
///   not panic for failure signalling.
///
/// # Example
///
/// ```rust
/// use boxvec::Construct;
///
/// struct Pixel {
///     luma: u8,
/// }
///
/// impl Construct for Pixel {
///     type Source = u8;
///
///     fn construct(source: &u8) -> Option<Self> {
///         Some(Pixel { luma: *source })
///     }
/// }
/// ```
pub trait Construct: Sized {
    /// The borrowed source value an item is built from.
    type Source: ?Sized;

    /// Builds a new owned item from `source`, or `None` on allocation
    /// failure.
    fn construct(source: &Self::Source) -> Option<Self>;
}

macro_rules! impl_construct_copy {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Construct for $ty {
                type Source = $ty;

                fn construct(source: &Self::Source) -> Option<Self> {
                    Some(*source)
                }
            }
        )*
    };
}

impl_construct_copy!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Construct for String {
    type Source = str;

    fn construct(source: &str) -> Option<Self> {
        let mut owned = String::new();
        owned.try_reserve_exact(source.len()).ok()?;
        owned.push_str(source);
        Some(owned)
    }
}
