/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`UpdateLedger`](crate::operation::update_ledger::builders::UpdateLedgerFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`name`](crate::operation::update_ledger::builders::UpdateLedgerFluentBuilder::name) / [`set_name`](crate::operation::update_ledger::builders::UpdateLedgerFluentBuilder::set_name): <br>**required: true**
    ///   - [`deletion_protection`](crate::operation::update_ledger::builders::UpdateLedgerFluentBuilder::deletion_protection) / [`set_deletion_protection`](crate::operation::update_ledger::builders::UpdateLedgerFluentBuilder::set_deletion_protection):
    ///   - [`kms_key`](crate::operation::update_ledger::builders::UpdateLedgerFluentBuilder::kms_key) / [`set_kms_key`](crate::operation::update_ledger::builders::UpdateLedgerFluentBuilder::set_kms_key):
    /// - On success, responds with [`UpdateLedgerOutput`](crate::operation::update_ledger::UpdateLedgerOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn update_ledger(&self) -> crate::operation::update_ledger::builders::UpdateLedgerFluentBuilder {
        crate::operation::update_ledger::builders::UpdateLedgerFluentBuilder::new(self.handle.clone())
    }
}
