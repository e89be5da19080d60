/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`ListLedgers`](crate::operation::list_ledgers::builders::ListLedgersFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`max_results`](crate::operation::list_ledgers::builders::ListLedgersFluentBuilder::max_results) / [`set_max_results`](crate::operation::list_ledgers::builders::ListLedgersFluentBuilder::set_max_results):
    ///   - [`next_token`](crate::operation::list_ledgers::builders::ListLedgersFluentBuilder::next_token) / [`set_next_token`](crate::operation::list_ledgers::builders::ListLedgersFluentBuilder::set_next_token):
    /// - On success, responds with [`ListLedgersOutput`](crate::operation::list_ledgers::ListLedgersOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn list_ledgers(&self) -> crate::operation::list_ledgers::builders::ListLedgersFluentBuilder {
        crate::operation::list_ledgers::builders::ListLedgersFluentBuilder::new(self.handle.clone())
    }
}
