/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct UpdateLedgerPermissionsModeOutput {
    /// <p>The name of the ledger.</p>
    pub name: ::std::option::Option<::std::string::String>,
    /// <p>The Amazon Resource Name (ARN) for the ledger.</p>
    pub arn: ::std::option::Option<::std::string::String>,
    /// <p>The current permissions mode of the ledger.</p>
    pub permissions_mode: ::std::option::Option<crate::types::PermissionsMode>,
    _request_id: Option<String>,
}
impl UpdateLedgerPermissionsModeOutput {
    /// <p>The name of the ledger.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The Amazon Resource Name (ARN) for the ledger.</p>
    pub fn arn(&self) -> ::std::option::Option<&str> {
        self.arn.as_deref()
    }
    /// <p>The current permissions mode of the ledger.</p>
    pub fn permissions_mode(&self) -> ::std::option::Option<&crate::types::PermissionsMode> {
        self.permissions_mode.as_ref()
    }
}
impl ::aws_types::request_id::RequestId for UpdateLedgerPermissionsModeOutput {
    fn request_id(&self) -> Option<&str> {
        self._request_id.as_deref()
    }
}
impl UpdateLedgerPermissionsModeOutput {
    /// Creates a new builder-style object to manufacture [`UpdateLedgerPermissionsModeOutput`](crate::operation::update_ledger_permissions_mode::UpdateLedgerPermissionsModeOutput).
    pub fn builder() -> crate::operation::update_ledger_permissions_mode::builders::UpdateLedgerPermissionsModeOutputBuilder {
        crate::operation::update_ledger_permissions_mode::builders::UpdateLedgerPermissionsModeOutputBuilder::default()
    }
}

/// A builder for [`UpdateLedgerPermissionsModeOutput`](crate::operation::update_ledger_permissions_mode::UpdateLedgerPermissionsModeOutput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct UpdateLedgerPermissionsModeOutputBuilder {
    pub(crate) name: ::std::option::Option<::std::string::String>,
    pub(crate) arn: ::std::option::Option<::std::string::String>,
    pub(crate) permissions_mode: ::std::option::Option<crate::types::PermissionsMode>,
    _request_id: Option<String>,
}
impl UpdateLedgerPermissionsModeOutputBuilder {
    /// <p>The name of the ledger.</p>
    pub fn name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name of the ledger.</p>
    pub fn set_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.name = input;
        self
    }
    /// <p>The name of the ledger.</p>
    pub fn get_name(&self) -> &::std::option::Option<::std::string::String> {
        &self.name
    }
    /// <p>The Amazon Resource Name (ARN) for the ledger.</p>
    pub fn arn(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.arn = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The Amazon Resource Name (ARN) for the ledger.</p>
    pub fn set_arn(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.arn = input;
        self
    }
    /// <p>The Amazon Resource Name (ARN) for the ledger.</p>
    pub fn get_arn(&self) -> &::std::option::Option<::std::string::String> {
        &self.arn
    }
    /// <p>The current permissions mode of the ledger.</p>
    pub fn permissions_mode(mut self, input: impl ::std::convert::Into<crate::types::PermissionsMode>) -> Self {
        self.permissions_mode = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The current permissions mode of the ledger.</p>
    pub fn set_permissions_mode(mut self, input: ::std::option::Option<crate::types::PermissionsMode>) -> Self {
        self.permissions_mode = input;
        self
    }
    /// <p>The current permissions mode of the ledger.</p>
    pub fn get_permissions_mode(&self) -> &::std::option::Option<crate::types::PermissionsMode> {
        &self.permissions_mode
    }
    pub(crate) fn _set_request_id(mut self, request_id: Option<String>) -> Self {
        self._request_id = request_id;
        self
    }
    /// Consumes the builder and constructs a [`UpdateLedgerPermissionsModeOutput`](crate::operation::update_ledger_permissions_mode::UpdateLedgerPermissionsModeOutput).
    pub fn build(self) -> crate::operation::update_ledger_permissions_mode::UpdateLedgerPermissionsModeOutput {
        crate::operation::update_ledger_permissions_mode::UpdateLedgerPermissionsModeOutput {
            name: self.name,
            arn: self.arn,
            permissions_mode: self.permissions_mode,
            _request_id: self._request_id,
        }
    }
}
