/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::error::Error;
use std::fmt;

/// A string did not match any value of a constrained enumeration.
///
/// Returned by the `try_parse` constructor on generated enums. An empty string is always rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidParameterValueError {
    enum_name: &'static str,
    value: String,
}

impl InvalidParameterValueError {
    /// Creates an error for `value`, which is not a member of `enum_name`.
    pub fn new(enum_name: &'static str, value: impl Into<String>) -> Self {
        Self {
            enum_name,
            value: value.into(),
        }
    }

    /// Name of the enumeration the value was checked against.
    pub fn enum_name(&self) -> &'static str {
        self.enum_name
    }

    /// The rejected value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for InvalidParameterValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "value must not be empty for {}", self.enum_name)
        } else {
            write!(
                f,
                "`{}` is not a valid value for {}",
                self.value, self.enum_name
            )
        }
    }
}

impl Error for InvalidParameterValueError {}

/// A key was added to a map member that already contains it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyError {
    key: String,
}

impl DuplicateKeyError {
    /// Creates an error for the repeated `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// The key that was already present.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for DuplicateKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "duplicate key provided ({})", self.key)
    }
}

impl Error for DuplicateKeyError {}
