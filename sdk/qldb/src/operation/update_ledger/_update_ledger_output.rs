/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct UpdateLedgerOutput {
    /// <p>The name of the ledger.</p>
    pub name: ::std::option::Option<::std::string::String>,
    /// <p>The Amazon Resource Name (ARN) for the ledger.</p>
    pub arn: ::std::option::Option<::std::string::String>,
    /// <p>The current status of the ledger.</p>
    pub state: ::std::option::Option<crate::types::LedgerState>,
    /// <p>The date and time, in epoch time format, when the ledger was created.</p>
    pub creation_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    /// <p>Specifies whether the ledger is protected from being deleted by any user.</p>
    pub deletion_protection: ::std::option::Option<bool>,
    /// <p>Information about the encryption of data at rest in the ledger.</p>
    pub encryption_description: ::std::option::Option<crate::types::LedgerEncryptionDescription>,
    _request_id: Option<String>,
}
impl UpdateLedgerOutput {
    /// <p>The name of the ledger.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The Amazon Resource Name (ARN) for the ledger.</p>
    pub fn arn(&self) -> ::std::option::Option<&str> {
        self.arn.as_deref()
    }
    /// <p>The current status of the ledger.</p>
    pub fn state(&self) -> ::std::option::Option<&crate::types::LedgerState> {
        self.state.as_ref()
    }
    /// <p>The date and time, in epoch time format, when the ledger was created.</p>
    pub fn creation_date_time(&self) -> ::std::option::Option<&::aws_smithy_types::DateTime> {
        self.creation_date_time.as_ref()
    }
    /// <p>Specifies whether the ledger is protected from being deleted by any user.</p>
    pub fn deletion_protection(&self) -> ::std::option::Option<bool> {
        self.deletion_protection
    }
    /// <p>Information about the encryption of data at rest in the ledger.</p>
    pub fn encryption_description(&self) -> ::std::option::Option<&crate::types::LedgerEncryptionDescription> {
        self.encryption_description.as_ref()
    }
}
impl ::aws_types::request_id::RequestId for UpdateLedgerOutput {
    fn request_id(&self) -> Option<&str> {
        self._request_id.as_deref()
    }
}
impl UpdateLedgerOutput {
    /// Creates a new builder-style object to manufacture [`UpdateLedgerOutput`](crate::operation::update_ledger::UpdateLedgerOutput).
    pub fn builder() -> crate::operation::update_ledger::builders::UpdateLedgerOutputBuilder {
        crate::operation::update_ledger::builders::UpdateLedgerOutputBuilder::default()
    }
}

/// A builder for [`UpdateLedgerOutput`](crate::operation::update_ledger::UpdateLedgerOutput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct UpdateLedgerOutputBuilder {
    pub(crate) name: ::std::option::Option<::std::string::String>,
    pub(crate) arn: ::std::option::Option<::std::string::String>,
    pub(crate) state: ::std::option::Option<crate::types::LedgerState>,
    pub(crate) creation_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    pub(crate) deletion_protection: ::std::option::Option<bool>,
    pub(crate) encryption_description: ::std::option::Option<crate::types::LedgerEncryptionDescription>,
    _request_id: Option<String>,
}
impl UpdateLedgerOutputBuilder {
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
    /// <p>The current status of the ledger.</p>
    pub fn state(mut self, input: impl ::std::convert::Into<crate::types::LedgerState>) -> Self {
        self.state = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The current status of the ledger.</p>
    pub fn set_state(mut self, input: ::std::option::Option<crate::types::LedgerState>) -> Self {
        self.state = input;
        self
    }
    /// <p>The current status of the ledger.</p>
    pub fn get_state(&self) -> &::std::option::Option<crate::types::LedgerState> {
        &self.state
    }
    /// <p>The date and time, in epoch time format, when the ledger was created.</p>
    pub fn creation_date_time(mut self, input: ::aws_smithy_types::DateTime) -> Self {
        self.creation_date_time = ::std::option::Option::Some(input);
        self
    }
    /// <p>The date and time, in epoch time format, when the ledger was created.</p>
    pub fn set_creation_date_time(mut self, input: ::std::option::Option<::aws_smithy_types::DateTime>) -> Self {
        self.creation_date_time = input;
        self
    }
    /// <p>The date and time, in epoch time format, when the ledger was created.</p>
    pub fn get_creation_date_time(&self) -> &::std::option::Option<::aws_smithy_types::DateTime> {
        &self.creation_date_time
    }
    /// <p>Specifies whether the ledger is protected from being deleted by any user.</p>
    pub fn deletion_protection(mut self, input: bool) -> Self {
        self.deletion_protection = ::std::option::Option::Some(input);
        self
    }
    /// <p>Specifies whether the ledger is protected from being deleted by any user.</p>
    pub fn set_deletion_protection(mut self, input: ::std::option::Option<bool>) -> Self {
        self.deletion_protection = input;
        self
    }
    /// <p>Specifies whether the ledger is protected from being deleted by any user.</p>
    pub fn get_deletion_protection(&self) -> &::std::option::Option<bool> {
        &self.deletion_protection
    }
    /// <p>Information about the encryption of data at rest in the ledger.</p>
    pub fn encryption_description(mut self, input: crate::types::LedgerEncryptionDescription) -> Self {
        self.encryption_description = ::std::option::Option::Some(input);
        self
    }
    /// <p>Information about the encryption of data at rest in the ledger.</p>
    pub fn set_encryption_description(mut self, input: ::std::option::Option<crate::types::LedgerEncryptionDescription>) -> Self {
        self.encryption_description = input;
        self
    }
    /// <p>Information about the encryption of data at rest in the ledger.</p>
    pub fn get_encryption_description(&self) -> &::std::option::Option<crate::types::LedgerEncryptionDescription> {
        &self.encryption_description
    }
    pub(crate) fn _set_request_id(mut self, request_id: Option<String>) -> Self {
        self._request_id = request_id;
        self
    }
    /// Consumes the builder and constructs a [`UpdateLedgerOutput`](crate::operation::update_ledger::UpdateLedgerOutput).
    pub fn build(self) -> crate::operation::update_ledger::UpdateLedgerOutput {
        crate::operation::update_ledger::UpdateLedgerOutput {
            name: self.name,
            arn: self.arn,
            state: self.state,
            creation_date_time: self.creation_date_time,
            deletion_protection: self.deletion_protection,
            encryption_description: self.encryption_description,
            _request_id: self._request_id,
        }
    }
}
