/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::update_ledger_permissions_mode::_update_ledger_permissions_mode_output::UpdateLedgerPermissionsModeOutputBuilder;

pub use crate::operation::update_ledger_permissions_mode::_update_ledger_permissions_mode_input::UpdateLedgerPermissionsModeInputBuilder;

/// Fluent builder constructing a request to `UpdateLedgerPermissionsMode`.
///
/// <p>Updates the permissions mode of a ledger.</p>
#[derive(::std::clone::Clone, ::std::fmt::Debug)]
pub struct UpdateLedgerPermissionsModeFluentBuilder {
    handle: ::std::sync::Arc<crate::client::Handle>,
    inner: crate::operation::update_ledger_permissions_mode::builders::UpdateLedgerPermissionsModeInputBuilder,
}
impl UpdateLedgerPermissionsModeFluentBuilder {
    /// Creates a new `UpdateLedgerPermissionsModeFluentBuilder`.
    pub(crate) fn new(handle: ::std::sync::Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }
    /// Access the UpdateLedgerPermissionsMode as a reference.
    pub fn as_input(&self) -> &crate::operation::update_ledger_permissions_mode::builders::UpdateLedgerPermissionsModeInputBuilder {
        &self.inner
    }
    /// Sends the request and returns the response.
    ///
    /// If an error occurs, an `SdkError` will be returned with additional details that
    /// can be matched against.
    pub fn send(
        self,
    ) -> ::std::result::Result<
        crate::operation::update_ledger_permissions_mode::UpdateLedgerPermissionsModeOutput,
        ::aws_smithy_runtime::client::result::SdkError<crate::Error>,
    > {
        let input = self
            .inner
            .build()
            .map_err(::aws_smithy_runtime::client::result::SdkError::construction_failure)?;
        self.handle.invoke::<crate::operation::update_ledger_permissions_mode::UpdateLedgerPermissionsMode>(&input)
    }
    /// <p>The name of the ledger.</p>
    pub fn name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.inner = self.inner.name(input);
        self
    }
    /// <p>The name of the ledger.</p>
    pub fn set_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.inner = self.inner.set_name(input);
        self
    }
    /// <p>The name of the ledger.</p>
    pub fn get_name(&self) -> &::std::option::Option<::std::string::String> {
        self.inner.get_name()
    }
    /// <p>The permissions mode to assign to the ledger.</p>
    pub fn permissions_mode(mut self, input: impl ::std::convert::Into<crate::types::PermissionsMode>) -> Self {
        self.inner = self.inner.permissions_mode(input);
        self
    }
    /// <p>The permissions mode to assign to the ledger.</p>
    pub fn set_permissions_mode(mut self, input: ::std::option::Option<crate::types::PermissionsMode>) -> Self {
        self.inner = self.inner.set_permissions_mode(input);
        self
    }
    /// <p>The permissions mode to assign to the ledger.</p>
    pub fn get_permissions_mode(&self) -> &::std::option::Option<crate::types::PermissionsMode> {
        self.inner.get_permissions_mode()
    }
}
