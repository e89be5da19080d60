/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`DeleteLedger`](crate::operation::delete_ledger::builders::DeleteLedgerFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`name`](crate::operation::delete_ledger::builders::DeleteLedgerFluentBuilder::name) / [`set_name`](crate::operation::delete_ledger::builders::DeleteLedgerFluentBuilder::set_name): <br>**required: true**
    /// - On success, responds with [`DeleteLedgerOutput`](crate::operation::delete_ledger::DeleteLedgerOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn delete_ledger(&self) -> crate::operation::delete_ledger::builders::DeleteLedgerFluentBuilder {
        crate::operation::delete_ledger::builders::DeleteLedgerFluentBuilder::new(self.handle.clone())
    }
}
