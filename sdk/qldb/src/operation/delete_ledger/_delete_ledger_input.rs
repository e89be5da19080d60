/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct DeleteLedgerInput {
    /// <p>The name of the ledger that you want to delete.</p>
    pub name: ::std::option::Option<::std::string::String>,
}
impl DeleteLedgerInput {
    /// <p>The name of the ledger that you want to delete.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
}
impl DeleteLedgerInput {
    /// Creates a new builder-style object to manufacture [`DeleteLedgerInput`](crate::operation::delete_ledger::DeleteLedgerInput).
    pub fn builder() -> crate::operation::delete_ledger::builders::DeleteLedgerInputBuilder {
        crate::operation::delete_ledger::builders::DeleteLedgerInputBuilder::default()
    }
}

/// A builder for [`DeleteLedgerInput`](crate::operation::delete_ledger::DeleteLedgerInput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct DeleteLedgerInputBuilder {
    pub(crate) name: ::std::option::Option<::std::string::String>,
}
impl DeleteLedgerInputBuilder {
    /// <p>The name of the ledger that you want to delete.</p>
    /// This field is required.
    pub fn name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name of the ledger that you want to delete.</p>
    pub fn set_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.name = input;
        self
    }
    /// <p>The name of the ledger that you want to delete.</p>
    pub fn get_name(&self) -> &::std::option::Option<::std::string::String> {
        &self.name
    }
    /// Consumes the builder and constructs a [`DeleteLedgerInput`](crate::operation::delete_ledger::DeleteLedgerInput).
    ///
    /// Fails with a [`BuildError`](::aws_smithy_types::error::operation::BuildError) if a required member is unset.
    pub fn build(
        self,
    ) -> ::std::result::Result<crate::operation::delete_ledger::DeleteLedgerInput, ::aws_smithy_types::error::operation::BuildError> {
        if self.name.is_none() {
            return ::std::result::Result::Err(::aws_smithy_types::error::operation::BuildError::missing_field(
                "name",
                "name was not specified but it is required when building DeleteLedgerInput",
            ));
        }
        ::std::result::Result::Ok(crate::operation::delete_ledger::DeleteLedgerInput {
            name: self.name,
        })
    }
}
