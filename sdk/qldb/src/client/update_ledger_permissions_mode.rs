/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`UpdateLedgerPermissionsMode`](crate::operation::update_ledger_permissions_mode::builders::UpdateLedgerPermissionsModeFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`name`](crate::operation::update_ledger_permissions_mode::builders::UpdateLedgerPermissionsModeFluentBuilder::name) / [`set_name`](crate::operation::update_ledger_permissions_mode::builders::UpdateLedgerPermissionsModeFluentBuilder::set_name): <br>**required: true**
    ///   - [`permissions_mode`](crate::operation::update_ledger_permissions_mode::builders::UpdateLedgerPermissionsModeFluentBuilder::permissions_mode) / [`set_permissions_mode`](crate::operation::update_ledger_permissions_mode::builders::UpdateLedgerPermissionsModeFluentBuilder::set_permissions_mode): <br>**required: true**
    /// - On success, responds with [`UpdateLedgerPermissionsModeOutput`](crate::operation::update_ledger_permissions_mode::UpdateLedgerPermissionsModeOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn update_ledger_permissions_mode(&self) -> crate::operation::update_ledger_permissions_mode::builders::UpdateLedgerPermissionsModeFluentBuilder {
        crate::operation::update_ledger_permissions_mode::builders::UpdateLedgerPermissionsModeFluentBuilder::new(self.handle.clone())
    }
}
