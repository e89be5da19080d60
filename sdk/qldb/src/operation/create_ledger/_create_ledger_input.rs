/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct CreateLedgerInput {
    /// <p>The name of the ledger that you want to create.</p>
    pub name: ::std::option::Option<::std::string::String>,
    /// <p>The key-value pairs to add as tags to the ledger that you want to create.</p>
    pub tags: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
    /// <p>The permissions mode to assign to the ledger that you want to create.</p>
    pub permissions_mode: ::std::option::Option<crate::types::PermissionsMode>,
    /// <p>Specifies whether the ledger is protected from being deleted by any user.</p>
    pub deletion_protection: ::std::option::Option<bool>,
    /// <p>The key in Key Management Service (KMS) to use for encryption of data at rest in the ledger.</p>
    pub kms_key: ::std::option::Option<::std::string::String>,
}
impl CreateLedgerInput {
    /// <p>The name of the ledger that you want to create.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The key-value pairs to add as tags to the ledger that you want to create.</p>
    pub fn tags(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::string::String>> {
        self.tags.as_ref()
    }
    /// <p>The permissions mode to assign to the ledger that you want to create.</p>
    pub fn permissions_mode(&self) -> ::std::option::Option<&crate::types::PermissionsMode> {
        self.permissions_mode.as_ref()
    }
    /// <p>Specifies whether the ledger is protected from being deleted by any user.</p>
    pub fn deletion_protection(&self) -> ::std::option::Option<bool> {
        self.deletion_protection
    }
    /// <p>The key in Key Management Service (KMS) to use for encryption of data at rest in the ledger.</p>
    pub fn kms_key(&self) -> ::std::option::Option<&str> {
        self.kms_key.as_deref()
    }
}
impl CreateLedgerInput {
    /// Creates a new builder-style object to manufacture [`CreateLedgerInput`](crate::operation::create_ledger::CreateLedgerInput).
    pub fn builder() -> crate::operation::create_ledger::builders::CreateLedgerInputBuilder {
        crate::operation::create_ledger::builders::CreateLedgerInputBuilder::default()
    }
}

/// A builder for [`CreateLedgerInput`](crate::operation::create_ledger::CreateLedgerInput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct CreateLedgerInputBuilder {
    pub(crate) name: ::std::option::Option<::std::string::String>,
    pub(crate) tags: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
    pub(crate) permissions_mode: ::std::option::Option<crate::types::PermissionsMode>,
    pub(crate) deletion_protection: ::std::option::Option<bool>,
    pub(crate) kms_key: ::std::option::Option<::std::string::String>,
}
impl CreateLedgerInputBuilder {
    /// <p>The name of the ledger that you want to create.</p>
    /// This field is required.
    pub fn name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name of the ledger that you want to create.</p>
    pub fn set_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.name = input;
        self
    }
    /// <p>The name of the ledger that you want to create.</p>
    pub fn get_name(&self) -> &::std::option::Option<::std::string::String> {
        &self.name
    }
    /// Adds a key-value pair to `tags`.
    ///
    /// To override the contents of this collection use [`set_tags`](Self::set_tags).
    ///
    /// Fails with a [`DuplicateKeyError`](::aws_smithy_types::error::DuplicateKeyError) if `k` is
    /// already present, leaving the map unchanged.
    pub fn insert_tags(
        &mut self,
        k: impl ::std::convert::Into<::std::string::String>,
        v: impl ::std::convert::Into<::std::string::String>,
    ) -> ::std::result::Result<&mut Self, ::aws_smithy_types::error::DuplicateKeyError> {
        ::aws_smithy_types::map::insert_unique(&mut self.tags, k, v.into())?;
        ::std::result::Result::Ok(self)
    }
    /// <p>The key-value pairs to add as tags to the ledger that you want to create.</p>
    pub fn set_tags(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>) -> Self {
        self.tags = input;
        self
    }
    /// <p>The key-value pairs to add as tags to the ledger that you want to create.</p>
    pub fn get_tags(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>> {
        &self.tags
    }
    /// <p>The permissions mode to assign to the ledger that you want to create.</p>
    /// This field is required.
    pub fn permissions_mode(mut self, input: impl ::std::convert::Into<crate::types::PermissionsMode>) -> Self {
        self.permissions_mode = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The permissions mode to assign to the ledger that you want to create.</p>
    pub fn set_permissions_mode(mut self, input: ::std::option::Option<crate::types::PermissionsMode>) -> Self {
        self.permissions_mode = input;
        self
    }
    /// <p>The permissions mode to assign to the ledger that you want to create.</p>
    pub fn get_permissions_mode(&self) -> &::std::option::Option<crate::types::PermissionsMode> {
        &self.permissions_mode
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
    /// <p>The key in Key Management Service (KMS) to use for encryption of data at rest in the ledger.</p>
    pub fn kms_key(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.kms_key = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The key in Key Management Service (KMS) to use for encryption of data at rest in the ledger.</p>
    pub fn set_kms_key(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.kms_key = input;
        self
    }
    /// <p>The key in Key Management Service (KMS) to use for encryption of data at rest in the ledger.</p>
    pub fn get_kms_key(&self) -> &::std::option::Option<::std::string::String> {
        &self.kms_key
    }
    /// Consumes the builder and constructs a [`CreateLedgerInput`](crate::operation::create_ledger::CreateLedgerInput).
    ///
    /// Fails with a [`BuildError`](::aws_smithy_types::error::operation::BuildError) if a required member is unset.
    pub fn build(
        self,
    ) -> ::std::result::Result<crate::operation::create_ledger::CreateLedgerInput, ::aws_smithy_types::error::operation::BuildError> {
        if self.name.is_none() {
            return ::std::result::Result::Err(::aws_smithy_types::error::operation::BuildError::missing_field(
                "name",
                "name was not specified but it is required when building CreateLedgerInput",
            ));
        }
        if self.permissions_mode.is_none() {
            return ::std::result::Result::Err(::aws_smithy_types::error::operation::BuildError::missing_field(
                "permissions_mode",
                "permissions_mode was not specified but it is required when building CreateLedgerInput",
            ));
        }
        ::std::result::Result::Ok(crate::operation::create_ledger::CreateLedgerInput {
            name: self.name,
            tags: self.tags,
            permissions_mode: self.permissions_mode,
            deletion_protection: self.deletion_protection,
            kms_key: self.kms_key,
        })
    }
}
