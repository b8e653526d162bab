// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::Construct;

// =============================================================================
// primitive impls
// =============================================================================

#[test]
fn test_primitive_construct_copies_source() {
    let source = 42u32;
    let item = u32::construct(&source).expect("construct failed");

    assert_eq!(item, source);
}

#[test]
fn test_all_integer_widths_construct() {
    assert_eq!(u8::construct(&7), Some(7));
    assert_eq!(u64::construct(&7), Some(7));
    assert_eq!(usize::construct(&7), Some(7));
    assert_eq!(i32::construct(&-7), Some(-7));
    assert_eq!(isize::construct(&-7), Some(-7));
}

// =============================================================================
// String impl
// =============================================================================

#[test]
fn test_string_construct_from_str() {
    let item = String::construct("hello").expect("construct failed");

    assert_eq!(item, "hello");
}

#[test]
fn test_string_construct_is_independent_of_source() {
    let source = String::from("hello");
    let item = String::construct(source.as_str()).expect("construct failed");

    assert_ne!(item.as_ptr(), source.as_ptr());
    drop(source);
    assert_eq!(item, "hello");
}

#[test]
fn test_string_construct_empty() {
    let item = String::construct("").expect("construct failed");

    assert!(item.is_empty());
    assert_eq!(item.capacity(), 0);
}
