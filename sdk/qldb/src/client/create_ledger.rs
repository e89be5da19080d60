/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`CreateLedger`](crate::operation::create_ledger::builders::CreateLedgerFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`name`](crate::operation::create_ledger::builders::CreateLedgerFluentBuilder::name) / [`set_name`](crate::operation::create_ledger::builders::CreateLedgerFluentBuilder::set_name): <br>**required: true**
    ///   - [`insert_tags(impl Into<String>, impl Into<String>)`](crate::operation::create_ledger::builders::CreateLedgerFluentBuilder::insert_tags) / [`set_tags(Option<HashMap::<String, String>>)`](crate::operation::create_ledger::builders::CreateLedgerFluentBuilder::set_tags):
    ///   - [`permissions_mode`](crate::operation::create_ledger::builders::CreateLedgerFluentBuilder::permissions_mode) / [`set_permissions_mode`](crate::operation::create_ledger::builders::CreateLedgerFluentBuilder::set_permissions_mode): <br>**required: true**
    ///   - [`deletion_protection`](crate::operation::create_ledger::builders::CreateLedgerFluentBuilder::deletion_protection) / [`set_deletion_protection`](crate::operation::create_ledger::builders::CreateLedgerFluentBuilder::set_deletion_protection):
    ///   - [`kms_key`](crate::operation::create_ledger::builders::CreateLedgerFluentBuilder::kms_key) / [`set_kms_key`](crate::operation::create_ledger::builders::CreateLedgerFluentBuilder::set_kms_key):
    /// - On success, responds with [`CreateLedgerOutput`](crate::operation::create_ledger::CreateLedgerOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn create_ledger(&self) -> crate::operation::create_ledger::builders::CreateLedgerFluentBuilder {
        crate::operation::create_ledger::builders::CreateLedgerFluentBuilder::new(self.handle.clone())
    }
}
