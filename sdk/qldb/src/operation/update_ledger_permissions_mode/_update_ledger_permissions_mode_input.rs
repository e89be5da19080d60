/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct UpdateLedgerPermissionsModeInput {
    /// <p>The name of the ledger.</p>
    pub name: ::std::option::Option<::std::string::String>,
    /// <p>The permissions mode to assign to the ledger.</p>
    pub permissions_mode: ::std::option::Option<crate::types::PermissionsMode>,
}
impl UpdateLedgerPermissionsModeInput {
    /// <p>The name of the ledger.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The permissions mode to assign to the ledger.</p>
    pub fn permissions_mode(&self) -> ::std::option::Option<&crate::types::PermissionsMode> {
        self.permissions_mode.as_ref()
    }
}
impl UpdateLedgerPermissionsModeInput {
    /// Creates a new builder-style object to manufacture [`UpdateLedgerPermissionsModeInput`](crate::operation::update_ledger_permissions_mode::UpdateLedgerPermissionsModeInput).
    pub fn builder() -> crate::operation::update_ledger_permissions_mode::builders::UpdateLedgerPermissionsModeInputBuilder {
        crate::operation::update_ledger_permissions_mode::builders::UpdateLedgerPermissionsModeInputBuilder::default()
    }
}

/// A builder for [`UpdateLedgerPermissionsModeInput`](crate::operation::update_ledger_permissions_mode::UpdateLedgerPermissionsModeInput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct UpdateLedgerPermissionsModeInputBuilder {
    pub(crate) name: ::std::option::Option<::std::string::String>,
    pub(crate) permissions_mode: ::std::option::Option<crate::types::PermissionsMode>,
}
impl UpdateLedgerPermissionsModeInputBuilder {
    /// <p>The name of the ledger.</p>
    /// This field is required.
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
    /// <p>The permissions mode to assign to the ledger.</p>
    /// This field is required.
    pub fn permissions_mode(mut self, input: impl ::std::convert::Into<crate::types::PermissionsMode>) -> Self {
        self.permissions_mode = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The permissions mode to assign to the ledger.</p>
    pub fn set_permissions_mode(mut self, input: ::std::option::Option<crate::types::PermissionsMode>) -> Self {
        self.permissions_mode = input;
        self
    }
    /// <p>The permissions mode to assign to the ledger.</p>
    pub fn get_permissions_mode(&self) -> &::std::option::Option<crate::types::PermissionsMode> {
        &self.permissions_mode
    }
    /// Consumes the builder and constructs a [`UpdateLedgerPermissionsModeInput`](crate::operation::update_ledger_permissions_mode::UpdateLedgerPermissionsModeInput).
    ///
    /// Fails with a [`BuildError`](::aws_smithy_types::error::operation::BuildError) if a required member is unset.
    pub fn build(
        self,
    ) -> ::std::result::Result<crate::operation::update_ledger_permissions_mode::UpdateLedgerPermissionsModeInput, ::aws_smithy_types::error::operation::BuildError> {
        if self.name.is_none() {
            return ::std::result::Result::Err(::aws_smithy_types::error::operation::BuildError::missing_field(
                "name",
                "name was not specified but it is required when building UpdateLedgerPermissionsModeInput",
            ));
        }
        if self.permissions_mode.is_none() {
            return ::std::result::Result::Err(::aws_smithy_types::error::operation::BuildError::missing_field(
                "permissions_mode",
                "permissions_mode was not specified but it is required when building UpdateLedgerPermissionsModeInput",
            ));
        }
        ::std::result::Result::Ok(crate::operation::update_ledger_permissions_mode::UpdateLedgerPermissionsModeInput {
            name: self.name,
            permissions_mode: self.permissions_mode,
        })
    }
}
