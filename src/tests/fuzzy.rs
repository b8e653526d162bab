// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::{BoxVec, BoxVecError, Construct};

/// Constructor that refuses the all-ones source value.
#[derive(Debug, PartialEq, Eq)]
struct Checked(u32);

impl Construct for Checked {
    type Source = u32;

    fn construct(source: &u32) -> Option<Self> {
        if *source == u32::MAX {
            return None;
        }

        Some(Checked(*source))
    }
}

proptest! {
    #[test]
    fn count_equals_successful_inserts(
        values in prop::collection::vec(any::<u32>(), 0..64)
    ) {
        let mut vec = BoxVec::<u32>::new();

        for value in &values {
            vec.insert(value).expect("insert failed");
        }

        prop_assert_eq!(vec.len(), values.len());
        prop_assert!(vec.len() <= vec.capacity());
    }

    #[test]
    fn forward_and_reverse_preserve_insertion_order(
        values in prop::collection::vec(any::<u32>(), 0..64)
    ) {
        let mut vec = BoxVec::<u32>::new();

        for value in &values {
            vec.insert(value).expect("insert failed");
        }

        let forward: Vec<u32> = vec.iter().copied().collect();
        prop_assert_eq!(&forward, &values);

        let mut reversed = values.clone();
        reversed.reverse();
        let reverse: Vec<u32> = vec.iter().rev().copied().collect();
        prop_assert_eq!(&reverse, &reversed);
    }

    #[test]
    fn capacity_is_monotone_and_covers_count(
        values in prop::collection::vec(any::<u32>(), 1..64)
    ) {
        let mut vec = BoxVec::<u32>::new();
        let mut last_capacity = vec.capacity();

        for value in &values {
            vec.insert(value).expect("insert failed");

            prop_assert!(vec.capacity() >= last_capacity);
            prop_assert!(vec.len() <= vec.capacity());
            last_capacity = vec.capacity();
        }
    }

    #[test]
    fn failed_insert_is_atomic(
        values in prop::collection::vec(0..u32::MAX, 0..32)
    ) {
        let mut vec = BoxVec::<Checked>::new();

        for value in &values {
            vec.insert(value).expect("insert failed");
        }

        let capacity_before = vec.capacity();
        let result = vec.insert(&u32::MAX);

        prop_assert_eq!(result, Err(BoxVecError::ConstructFailed));
        prop_assert_eq!(vec.len(), values.len());
        prop_assert!(vec.capacity() >= capacity_before);

        for (index, value) in values.iter().enumerate() {
            prop_assert_eq!(vec.get(index), Some(&Checked(*value)));
        }
    }

    #[test]
    fn stored_strings_never_alias_sources(
        sources in prop::collection::vec(".{1,16}", 1..16)
    ) {
        let mut vec = BoxVec::<String>::new();

        for source in &sources {
            let item = vec.insert(source.as_str()).expect("insert failed");

            prop_assert_eq!(item, source);
            prop_assert_ne!(item.as_ptr(), source.as_ptr());
        }
    }
}
