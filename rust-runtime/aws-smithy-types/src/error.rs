/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Errors shared by the generated service clients.

pub mod display;
pub mod metadata;
pub mod operation;

mod input;

pub use input::{DuplicateKeyError, InvalidParameterValueError};
pub use metadata::ErrorMetadata;
