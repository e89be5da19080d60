/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct DescribeLedgerInput {
    /// <p>The name of the ledger that you want to describe.</p>
    pub name: ::std::option::Option<::std::string::String>,
}
impl DescribeLedgerInput {
    /// <p>The name of the ledger that you want to describe.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
}
impl DescribeLedgerInput {
    /// Creates a new builder-style object to manufacture [`DescribeLedgerInput`](crate::operation::describe_ledger::DescribeLedgerInput).
    pub fn builder() -> crate::operation::describe_ledger::builders::DescribeLedgerInputBuilder {
        crate::operation::describe_ledger::builders::DescribeLedgerInputBuilder::default()
    }
}

/// A builder for [`DescribeLedgerInput`](crate::operation::describe_ledger::DescribeLedgerInput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct DescribeLedgerInputBuilder {
    pub(crate) name: ::std::option::Option<::std::string::String>,
}
impl DescribeLedgerInputBuilder {
    /// <p>The name of the ledger that you want to describe.</p>
    /// This field is required.
    pub fn name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name of the ledger that you want to describe.</p>
    pub fn set_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.name = input;
        self
    }
    /// <p>The name of the ledger that you want to describe.</p>
    pub fn get_name(&self) -> &::std::option::Option<::std::string::String> {
        &self.name
    }
    /// Consumes the builder and constructs a [`DescribeLedgerInput`](crate::operation::describe_ledger::DescribeLedgerInput).
    ///
    /// Fails with a [`BuildError`](::aws_smithy_types::error::operation::BuildError) if a required member is unset.
    pub fn build(
        self,
    ) -> ::std::result::Result<crate::operation::describe_ledger::DescribeLedgerInput, ::aws_smithy_types::error::operation::BuildError> {
        if self.name.is_none() {
            return ::std::result::Result::Err(::aws_smithy_types::error::operation::BuildError::missing_field(
                "name",
                "name was not specified but it is required when building DescribeLedgerInput",
            ));
        }
        ::std::result::Result::Ok(crate::operation::describe_ledger::DescribeLedgerInput {
            name: self.name,
        })
    }
}
