/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct DeleteAccessPointInput {
    /// <p>The account ID for the owner of the resource.</p>
    pub account_id: ::std::option::Option<::std::string::String>,
    /// <p>The name of the access point you want to delete.</p>
    pub name: ::std::option::Option<::std::string::String>,
}
impl DeleteAccessPointInput {
    /// <p>The account ID for the owner of the resource.</p>
    pub fn account_id(&self) -> ::std::option::Option<&str> {
        self.account_id.as_deref()
    }
    /// <p>The name of the access point you want to delete.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
}
impl DeleteAccessPointInput {
    /// Creates a new builder-style object to manufacture [`DeleteAccessPointInput`](crate::operation::delete_access_point::DeleteAccessPointInput).
    pub fn builder() -> crate::operation::delete_access_point::builders::DeleteAccessPointInputBuilder {
        crate::operation::delete_access_point::builders::DeleteAccessPointInputBuilder::default()
    }
}

/// A builder for [`DeleteAccessPointInput`](crate::operation::delete_access_point::DeleteAccessPointInput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct DeleteAccessPointInputBuilder {
    pub(crate) account_id: ::std::option::Option<::std::string::String>,
    pub(crate) name: ::std::option::Option<::std::string::String>,
}
impl DeleteAccessPointInputBuilder {
    /// <p>The account ID for the owner of the resource.</p>
    /// This field is required.
    pub fn account_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.account_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The account ID for the owner of the resource.</p>
    pub fn set_account_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.account_id = input;
        self
    }
    /// <p>The account ID for the owner of the resource.</p>
    pub fn get_account_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.account_id
    }
    /// <p>The name of the access point you want to delete.</p>
    /// This field is required.
    pub fn name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name of the access point you want to delete.</p>
    pub fn set_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.name = input;
        self
    }
    /// <p>The name of the access point you want to delete.</p>
    pub fn get_name(&self) -> &::std::option::Option<::std::string::String> {
        &self.name
    }
    /// Consumes the builder and constructs a [`DeleteAccessPointInput`](crate::operation::delete_access_point::DeleteAccessPointInput).
    ///
    /// Fails with a [`BuildError`](::aws_smithy_types::error::operation::BuildError) if a required member is unset.
    pub fn build(
        self,
    ) -> ::std::result::Result<crate::operation::delete_access_point::DeleteAccessPointInput, ::aws_smithy_types::error::operation::BuildError> {
        if self.account_id.is_none() {
            return ::std::result::Result::Err(::aws_smithy_types::error::operation::BuildError::missing_field(
                "account_id",
                "account_id was not specified but it is required when building DeleteAccessPointInput",
            ));
        }
        if self.name.is_none() {
            return ::std::result::Result::Err(::aws_smithy_types::error::operation::BuildError::missing_field(
                "name",
                "name was not specified but it is required when building DeleteAccessPointInput",
            ));
        }
        ::std::result::Result::Ok(crate::operation::delete_access_point::DeleteAccessPointInput {
            account_id: self.account_id,
            name: self.name,
        })
    }
}
