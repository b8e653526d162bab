// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::construct::Construct;
use crate::error::BoxVecError;
use crate::iter::Iter;

/// Test behaviour for injecting failures in `BoxVec` operations.
///
/// This is only available with the `test_utils` feature and allows users
/// to test error handling paths in their code by injecting failures.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust
/// // test_utils feature required in dev-dependencies
/// #[cfg(test)]
/// mod tests {
///     use boxvec::{BoxVec, BoxVecBehaviour, BoxVecError};
///
///     #[test]
///     fn test_handles_alloc_failure() -> Result<(), BoxVecError> {
///         let mut vec = BoxVec::<u32>::new();
///
///         // Inject failure
///         vec.change_behaviour(BoxVecBehaviour::FailAtGrow);
///
///         // This will fail even though memory is available
///         let result = vec.insert(&1);
///         assert!(result.is_err());
///
///         // Reset to normal behaviour
///         vec.change_behaviour(BoxVecBehaviour::None);
///
///         // Now it works
///         vec.insert(&1)?;
///         Ok(())
///     }
/// }
/// ```
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoxVecBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// The next `insert()` that needs to grow the slot buffer will fail
    /// with `AllocFailed`.
    FailAtGrow,
    /// The next `insert()` call will fail with `ConstructFailed` without
    /// invoking the constructor.
    FailAtConstruct,
}

/// Growable vector of individually boxed items.
///
/// Each item lives in its own heap allocation; the vector owns the boxes
/// and keeps them in a contiguous slot buffer that doubles in capacity
/// when full. Items are built via [`Construct`] and handed out only as
/// borrowed references; they are dropped exactly once, in insertion
/// order, when the vector goes away.
///
/// # Type Parameters
///
/// - `T`: The item type. Its [`Construct`] impl is the constructor bound
///   to this vector for its whole lifetime; its `Drop` is the destructor.
///
/// # Example
///
/// ```rust
/// use boxvec::{BoxVec, BoxVecError};
///
/// fn example() -> Result<(), BoxVecError> {
///     let mut vec = BoxVec::<u32>::new();
///     vec.insert(&1)?;
///     vec.insert(&2)?;
///
///     assert_eq!(vec.len(), 2);
///     assert_eq!(vec.get(0), Some(&1));
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct BoxVec<T>
where
    T: Construct,
{
    slots: Vec<Box<T>>,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: BoxVecBehaviour,
}

impl<T> BoxVec<T>
where
    T: Construct,
{
    /// Creates a new empty `BoxVec` with zero capacity.
    ///
    /// Does not allocate; the slot buffer is first allocated by the
    /// insert that needs it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boxvec::BoxVec;
    ///
    /// let vec: BoxVec<u8> = BoxVec::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.capacity(), 0);
    /// ```
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: BoxVecBehaviour::default(),
        }
    }

    /// Grows the slot buffer by doubling (from zero: to one slot).
    ///
    /// Only called with `len() == capacity()`. On any failure the buffer
    /// is left untouched.
    #[cold]
    #[inline(never)]
    fn grow(&mut self) -> Result<(), BoxVecError> {
        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, BoxVecBehaviour::FailAtGrow) {
            return Err(BoxVecError::AllocFailed);
        }

        let new_capacity = match self.slots.capacity() {
            0 => 1,
            n => n.checked_mul(2).ok_or(BoxVecError::Overflow)?,
        };

        self.slots
            .try_reserve_exact(new_capacity - self.slots.len())
            .map_err(|_| BoxVecError::AllocFailed)?;

        Ok(())
    }

    #[inline(always)]
    fn maybe_grow(&mut self) -> Result<(), BoxVecError> {
        if self.slots.len() < self.slots.capacity() {
            return Ok(());
        }

        self.grow()
    }

    /// Appends one new item built from `source` and returns a borrow of it.
    ///
    /// If the vector is full, the slot buffer is grown first (doubling,
    /// starting at one slot); only then is `T::construct(source)` invoked
    /// and the resulting item boxed into the new slot.
    ///
    /// # Errors
    ///
    /// - [`BoxVecError::AllocFailed`] if the slot buffer could not be
    ///   reallocated.
    /// - [`BoxVecError::ConstructFailed`] if the constructor returned
    ///   `None`.
    /// - [`BoxVecError::Overflow`] if the doubled capacity would overflow.
    ///
    /// On any error the vector is unchanged: same count, same capacity on
    /// the construct path, same items.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boxvec::{BoxVec, BoxVecError};
    ///
    /// fn example() -> Result<(), BoxVecError> {
    ///     let mut vec = BoxVec::<u32>::new();
    ///
    ///     let item = vec.insert(&42)?;
    ///     assert_eq!(*item, 42);
    ///     assert_eq!(vec.len(), 1);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn insert(&mut self, source: &T::Source) -> Result<&T, BoxVecError> {
        self.maybe_grow()?;

        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, BoxVecBehaviour::FailAtConstruct) {
            return Err(BoxVecError::ConstructFailed);
        }

        let item = T::construct(source).ok_or(BoxVecError::ConstructFailed)?;
        self.slots.push(Box::new(item));

        let item = self
            .slots
            .last()
            .map(|slot| &**slot)
            .expect("infallible: push above stored an item");

        Ok(item)
    }

    /// Returns the number of items in the vector.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boxvec::{BoxVec, BoxVecError};
    ///
    /// fn example() -> Result<(), BoxVecError> {
    ///     let mut vec = BoxVec::<u8>::new();
    ///     vec.insert(&1)?;
    ///     assert_eq!(vec.len(), 1);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the vector contains no items.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the slot capacity of the vector.
    ///
    /// Capacity never shrinks; it only grows through insert-triggered
    /// doubling.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Returns a borrow of the item at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).map(|slot| &**slot)
    }

    /// Returns a borrow of the first item, or `None` if empty.
    pub fn first(&self) -> Option<&T> {
        self.slots.first().map(|slot| &**slot)
    }

    /// Returns a borrow of the last inserted item, or `None` if empty.
    pub fn last(&self) -> Option<&T> {
        self.slots.last().map(|slot| &**slot)
    }

    /// Returns an iterator over the live range `[0, len)` in insertion
    /// order.
    ///
    /// The iterator is lazy, finite, and restartable (call `iter()`
    /// again). It is double-ended: `iter().rev()` visits items in
    /// strictly reverse insertion order. Any `insert()` requires `&mut
    /// self` and therefore ends all outstanding iterators and item
    /// borrows; re-fetch after mutating.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boxvec::{BoxVec, BoxVecError};
    ///
    /// fn example() -> Result<(), BoxVecError> {
    ///     let mut vec = BoxVec::<u32>::new();
    ///     vec.insert(&3)?;
    ///     vec.insert(&1)?;
    ///     vec.insert(&4)?;
    ///
    ///     let forward: Vec<u32> = vec.iter().copied().collect();
    ///     assert_eq!(forward, [3, 1, 4]);
    ///
    ///     let reverse: Vec<u32> = vec.iter().rev().copied().collect();
    ///     assert_eq!(reverse, [4, 1, 3]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.slots.as_slice())
    }

    /// Tears the vector down, consuming the handle.
    ///
    /// Every live item is dropped exactly once, in insertion order, then
    /// the slot buffer is freed. Equivalent to dropping the vector;
    /// provided as an explicit teardown verb. Because the handle is taken
    /// by value, using it afterwards - including a second `destroy()` -
    /// is a compile error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boxvec::{BoxVec, BoxVecError};
    ///
    /// fn example() -> Result<(), BoxVecError> {
    ///     let mut vec = BoxVec::<u32>::new();
    ///     vec.insert(&7)?;
    ///
    ///     vec.destroy();
    ///     // vec is gone; `vec.len()` would not compile
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn destroy(self) {}

    /// Changes the test behaviour for this vector.
    ///
    /// This is only available with the `test_utils` feature and allows
    /// injecting failures for testing error handling paths.
    ///
    /// # Example
    ///
    /// ```rust
    /// // test_utils feature required in dev-dependencies
    /// #[cfg(test)]
    /// mod tests {
    ///     use boxvec::{BoxVec, BoxVecBehaviour};
    ///
    ///     #[test]
    ///     fn test_error_handling() {
    ///         let mut vec = BoxVec::<u32>::new();
    ///         vec.change_behaviour(BoxVecBehaviour::FailAtGrow);
    ///
    ///         // Next insert will fail
    ///         assert!(vec.insert(&1).is_err());
    ///     }
    /// }
    /// ```
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: BoxVecBehaviour) {
        self.behaviour = behaviour;
    }
}

impl<T> Default for BoxVec<T>
where
    T: Construct,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for BoxVec<T>
where
    T: Construct,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BoxVec")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}
