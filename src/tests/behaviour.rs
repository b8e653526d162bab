// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{BoxVec, BoxVecBehaviour, BoxVecError};

#[test]
fn test_default_behaviour_is_none() {
    assert_eq!(BoxVecBehaviour::default(), BoxVecBehaviour::None);
}

#[test]
fn test_behaviour_is_sticky() -> Result<(), BoxVecError> {
    let mut vec = BoxVec::<u32>::new();
    vec.change_behaviour(BoxVecBehaviour::FailAtGrow);

    // Stays in effect across calls until changed.
    assert_eq!(vec.insert(&1), Err(BoxVecError::AllocFailed));
    assert_eq!(vec.insert(&1), Err(BoxVecError::AllocFailed));
    assert_eq!(vec.len(), 0);

    vec.change_behaviour(BoxVecBehaviour::None);
    vec.insert(&1)?;
    assert_eq!(vec.len(), 1);
    Ok(())
}

#[test]
fn test_construct_failure_injection_skips_constructor() {
    let mut vec = BoxVec::<u32>::new();
    vec.change_behaviour(BoxVecBehaviour::FailAtConstruct);

    assert_eq!(vec.insert(&1), Err(BoxVecError::ConstructFailed));
    assert_eq!(vec.len(), 0);
}
