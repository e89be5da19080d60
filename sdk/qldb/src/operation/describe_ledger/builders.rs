/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::describe_ledger::_describe_ledger_output::DescribeLedgerOutputBuilder;

pub use crate::operation::describe_ledger::_describe_ledger_input::DescribeLedgerInputBuilder;

/// Fluent builder constructing a request to `DescribeLedger`.
///
/// <p>Returns information about a ledger, including its state, permissions mode, encryption at rest settings, and when it was created.</p>
#[derive(::std::clone::Clone, ::std::fmt::Debug)]
pub struct DescribeLedgerFluentBuilder {
    handle: ::std::sync::Arc<crate::client::Handle>,
    inner: crate::operation::describe_ledger::builders::DescribeLedgerInputBuilder,
}
impl DescribeLedgerFluentBuilder {
    /// Creates a new `DescribeLedgerFluentBuilder`.
    pub(crate) fn new(handle: ::std::sync::Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }
    /// Access the DescribeLedger as a reference.
    pub fn as_input(&self) -> &crate::operation::describe_ledger::builders::DescribeLedgerInputBuilder {
        &self.inner
    }
    /// Sends the request and returns the response.
    ///
    /// If an error occurs, an `SdkError` will be returned with additional details that
    /// can be matched against.
    pub fn send(
        self,
    ) -> ::std::result::Result<
        crate::operation::describe_ledger::DescribeLedgerOutput,
        ::aws_smithy_runtime::client::result::SdkError<crate::Error>,
    > {
        let input = self
            .inner
            .build()
            .map_err(::aws_smithy_runtime::client::result::SdkError::construction_failure)?;
        self.handle.invoke::<crate::operation::describe_ledger::DescribeLedger>(&input)
    }
    /// <p>The name of the ledger that you want to describe.</p>
    pub fn name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.inner = self.inner.name(input);
        self
    }
    /// <p>The name of the ledger that you want to describe.</p>
    pub fn set_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.inner = self.inner.set_name(input);
        self
    }
    /// <p>The name of the ledger that you want to describe.</p>
    pub fn get_name(&self) -> &::std::option::Option<::std::string::String> {
        self.inner.get_name()
    }
}
