/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// The HTTP connector a client dispatches requests through.
pub mod connector;

/// Operation invocation.
pub mod orchestrator;

/// Errors returned from an operation call.
pub mod result;
