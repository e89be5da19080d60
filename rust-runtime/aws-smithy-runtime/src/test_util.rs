/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Utility for capturing and displaying logs during a unit test.
pub mod capture_test_logs;

/// A connector that replays canned responses and records the requests it was given.
pub mod replay;
