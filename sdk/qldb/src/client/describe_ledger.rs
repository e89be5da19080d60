/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`DescribeLedger`](crate::operation::describe_ledger::builders::DescribeLedgerFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`name`](crate::operation::describe_ledger::builders::DescribeLedgerFluentBuilder::name) / [`set_name`](crate::operation::describe_ledger::builders::DescribeLedgerFluentBuilder::set_name): <br>**required: true**
    /// - On success, responds with [`DescribeLedgerOutput`](crate::operation::describe_ledger::DescribeLedgerOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn describe_ledger(&self) -> crate::operation::describe_ledger::builders::DescribeLedgerFluentBuilder {
        crate::operation::describe_ledger::builders::DescribeLedgerFluentBuilder::new(self.handle.clone())
    }
}
