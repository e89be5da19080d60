/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Runtime for the query protocol clients.
//!
//! Each operation call is driven by [`client::orchestrator::invoke`]: the input is serialized,
//! sent through the configured [`HttpConnector`](client::connector::HttpConnector), and the
//! response is deserialized into either the operation output or a service error.

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

pub mod client;

/// Utilities for testing code built on this runtime.
#[cfg(any(test, feature = "test-util"))]
pub mod test_util;
