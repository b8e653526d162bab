// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Double-ended iteration over the live slot range.

use alloc::boxed::Box;
use core::iter::FusedIterator;

use crate::box_vec::BoxVec;
use crate::construct::Construct;

/// Iterator over borrowed items of a [`BoxVec`].
///
/// Yields `&T` over the half-open live range `[0, len)` in insertion
/// order; `rev()` yields strictly reverse insertion order. Obtained via
/// [`BoxVec::iter`] or `&BoxVec` in a `for` loop.
pub struct Iter<'a, T> {
    slots: core::slice::Iter<'a, Box<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [Box<T>]) -> Self {
        Self {
            slots: slots.iter(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.slots.next().map(|slot| &**slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.slots.next_back().map(|slot| &**slot)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a BoxVec<T>
where
    T: Construct,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
