/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::create_ledger::_create_ledger_output::CreateLedgerOutputBuilder;

pub use crate::operation::create_ledger::_create_ledger_input::CreateLedgerInputBuilder;

/// Fluent builder constructing a request to `CreateLedger`.
///
/// <p>Creates a new ledger in your Amazon Web Services account in the current Region.</p>
#[derive(::std::clone::Clone, ::std::fmt::Debug)]
pub struct CreateLedgerFluentBuilder {
    handle: ::std::sync::Arc<crate::client::Handle>,
    inner: crate::operation::create_ledger::builders::CreateLedgerInputBuilder,
}
impl CreateLedgerFluentBuilder {
    /// Creates a new `CreateLedgerFluentBuilder`.
    pub(crate) fn new(handle: ::std::sync::Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }
    /// Access the CreateLedger as a reference.
    pub fn as_input(&self) -> &crate::operation::create_ledger::builders::CreateLedgerInputBuilder {
        &self.inner
    }
    /// Sends the request and returns the response.
    ///
    /// If an error occurs, an `SdkError` will be returned with additional details that
    /// can be matched against.
    pub fn send(
        self,
    ) -> ::std::result::Result<
        crate::operation::create_ledger::CreateLedgerOutput,
        ::aws_smithy_runtime::client::result::SdkError<crate::Error>,
    > {
        let input = self
            .inner
            .build()
            .map_err(::aws_smithy_runtime::client::result::SdkError::construction_failure)?;
        self.handle.invoke::<crate::operation::create_ledger::CreateLedger>(&input)
    }
    /// <p>The name of the ledger that you want to create.</p>
    pub fn name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.inner = self.inner.name(input);
        self
    }
    /// <p>The name of the ledger that you want to create.</p>
    pub fn set_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.inner = self.inner.set_name(input);
        self
    }
    /// <p>The name of the ledger that you want to create.</p>
    pub fn get_name(&self) -> &::std::option::Option<::std::string::String> {
        self.inner.get_name()
    }
    /// Adds a key-value pair to `tags`.
    ///
    /// Fails if `k` is already present, leaving the map unchanged.
    pub fn insert_tags(
        &mut self,
        k: impl ::std::convert::Into<::std::string::String>,
        v: impl ::std::convert::Into<::std::string::String>,
    ) -> ::std::result::Result<&mut Self, ::aws_smithy_types::error::DuplicateKeyError> {
        self.inner.insert_tags(k, v)?;
        ::std::result::Result::Ok(self)
    }
    /// <p>The key-value pairs to add as tags to the ledger that you want to create.</p>
    pub fn set_tags(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>) -> Self {
        self.inner = self.inner.set_tags(input);
        self
    }
    /// <p>The key-value pairs to add as tags to the ledger that you want to create.</p>
    pub fn get_tags(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>> {
        self.inner.get_tags()
    }
    /// <p>The permissions mode to assign to the ledger that you want to create.</p>
    pub fn permissions_mode(mut self, input: impl ::std::convert::Into<crate::types::PermissionsMode>) -> Self {
        self.inner = self.inner.permissions_mode(input);
        self
    }
    /// <p>The permissions mode to assign to the ledger that you want to create.</p>
    pub fn set_permissions_mode(mut self, input: ::std::option::Option<crate::types::PermissionsMode>) -> Self {
        self.inner = self.inner.set_permissions_mode(input);
        self
    }
    /// <p>The permissions mode to assign to the ledger that you want to create.</p>
    pub fn get_permissions_mode(&self) -> &::std::option::Option<crate::types::PermissionsMode> {
        self.inner.get_permissions_mode()
    }
    /// <p>Specifies whether the ledger is protected from being deleted by any user.</p>
    pub fn deletion_protection(mut self, input: bool) -> Self {
        self.inner = self.inner.deletion_protection(input);
        self
    }
    /// <p>Specifies whether the ledger is protected from being deleted by any user.</p>
    pub fn set_deletion_protection(mut self, input: ::std::option::Option<bool>) -> Self {
        self.inner = self.inner.set_deletion_protection(input);
        self
    }
    /// <p>Specifies whether the ledger is protected from being deleted by any user.</p>
    pub fn get_deletion_protection(&self) -> &::std::option::Option<bool> {
        self.inner.get_deletion_protection()
    }
    /// <p>The key in Key Management Service (KMS) to use for encryption of data at rest in the ledger.</p>
    pub fn kms_key(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.inner = self.inner.kms_key(input);
        self
    }
    /// <p>The key in Key Management Service (KMS) to use for encryption of data at rest in the ledger.</p>
    pub fn set_kms_key(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.inner = self.inner.set_kms_key(input);
        self
    }
    /// <p>The key in Key Management Service (KMS) to use for encryption of data at rest in the ledger.</p>
    pub fn get_kms_key(&self) -> &::std::option::Option<::std::string::String> {
        self.inner.get_kms_key()
    }
}
