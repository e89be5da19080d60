/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct GetDigestInput {
    /// <p>The name of the ledger.</p>
    pub name: ::std::option::Option<::std::string::String>,
}
impl GetDigestInput {
    /// <p>The name of the ledger.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
}
impl GetDigestInput {
    /// Creates a new builder-style object to manufacture [`GetDigestInput`](crate::operation::get_digest::GetDigestInput).
    pub fn builder() -> crate::operation::get_digest::builders::GetDigestInputBuilder {
        crate::operation::get_digest::builders::GetDigestInputBuilder::default()
    }
}

/// A builder for [`GetDigestInput`](crate::operation::get_digest::GetDigestInput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct GetDigestInputBuilder {
    pub(crate) name: ::std::option::Option<::std::string::String>,
}
impl GetDigestInputBuilder {
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
    /// Consumes the builder and constructs a [`GetDigestInput`](crate::operation::get_digest::GetDigestInput).
    ///
    /// Fails with a [`BuildError`](::aws_smithy_types::error::operation::BuildError) if a required member is unset.
    pub fn build(
        self,
    ) -> ::std::result::Result<crate::operation::get_digest::GetDigestInput, ::aws_smithy_types::error::operation::BuildError> {
        if self.name.is_none() {
            return ::std::result::Result::Err(::aws_smithy_types::error::operation::BuildError::missing_field(
                "name",
                "name was not specified but it is required when building GetDigestInput",
            ));
        }
        ::std::result::Result::Ok(crate::operation::get_digest::GetDigestInput {
            name: self.name,
        })
    }
}
