/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::delete_ledger::_delete_ledger_output::DeleteLedgerOutputBuilder;

pub use crate::operation::delete_ledger::_delete_ledger_input::DeleteLedgerInputBuilder;

/// Fluent builder constructing a request to `DeleteLedger`.
///
/// <p>Deletes a ledger and all of its contents.</p>
#[derive(::std::clone::Clone, ::std::fmt::Debug)]
pub struct DeleteLedgerFluentBuilder {
    handle: ::std::sync::Arc<crate::client::Handle>,
    inner: crate::operation::delete_ledger::builders::DeleteLedgerInputBuilder,
}
impl DeleteLedgerFluentBuilder {
    /// Creates a new `DeleteLedgerFluentBuilder`.
    pub(crate) fn new(handle: ::std::sync::Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }
    /// Access the DeleteLedger as a reference.
    pub fn as_input(&self) -> &crate::operation::delete_ledger::builders::DeleteLedgerInputBuilder {
        &self.inner
    }
    /// Sends the request and returns the response.
    ///
    /// If an error occurs, an `SdkError` will be returned with additional details that
    /// can be matched against.
    pub fn send(
        self,
    ) -> ::std::result::Result<
        crate::operation::delete_ledger::DeleteLedgerOutput,
        ::aws_smithy_runtime::client::result::SdkError<crate::Error>,
    > {
        let input = self
            .inner
            .build()
            .map_err(::aws_smithy_runtime::client::result::SdkError::construction_failure)?;
        self.handle.invoke::<crate::operation::delete_ledger::DeleteLedger>(&input)
    }
    /// <p>The name of the ledger that you want to delete.</p>
    pub fn name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.inner = self.inner.name(input);
        self
    }
    /// <p>The name of the ledger that you want to delete.</p>
    pub fn set_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.inner = self.inner.set_name(input);
        self
    }
    /// <p>The name of the ledger that you want to delete.</p>
    pub fn get_name(&self) -> &::std::option::Option<::std::string::String> {
        self.inner.get_name()
    }
}
