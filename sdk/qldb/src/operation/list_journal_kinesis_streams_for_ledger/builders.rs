/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::list_journal_kinesis_streams_for_ledger::_list_journal_kinesis_streams_for_ledger_output::ListJournalKinesisStreamsForLedgerOutputBuilder;

pub use crate::operation::list_journal_kinesis_streams_for_ledger::_list_journal_kinesis_streams_for_ledger_input::ListJournalKinesisStreamsForLedgerInputBuilder;

/// Fluent builder constructing a request to `ListJournalKinesisStreamsForLedger`.
///
/// <p>Returns all Amazon QLDB journal streams for a given ledger.</p>
#[derive(::std::clone::Clone, ::std::fmt::Debug)]
pub struct ListJournalKinesisStreamsForLedgerFluentBuilder {
    handle: ::std::sync::Arc<crate::client::Handle>,
    inner: crate::operation::list_journal_kinesis_streams_for_ledger::builders::ListJournalKinesisStreamsForLedgerInputBuilder,
}
impl ListJournalKinesisStreamsForLedgerFluentBuilder {
    /// Creates a new `ListJournalKinesisStreamsForLedgerFluentBuilder`.
    pub(crate) fn new(handle: ::std::sync::Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }
    /// Access the ListJournalKinesisStreamsForLedger as a reference.
    pub fn as_input(&self) -> &crate::operation::list_journal_kinesis_streams_for_ledger::builders::ListJournalKinesisStreamsForLedgerInputBuilder {
        &self.inner
    }
    /// Sends the request and returns the response.
    ///
    /// If an error occurs, an `SdkError` will be returned with additional details that
    /// can be matched against.
    pub fn send(
        self,
    ) -> ::std::result::Result<
        crate::operation::list_journal_kinesis_streams_for_ledger::ListJournalKinesisStreamsForLedgerOutput,
        ::aws_smithy_runtime::client::result::SdkError<crate::Error>,
    > {
        let input = self
            .inner
            .build()
            .map_err(::aws_smithy_runtime::client::result::SdkError::construction_failure)?;
        self.handle.invoke::<crate::operation::list_journal_kinesis_streams_for_ledger::ListJournalKinesisStreamsForLedger>(&input)
    }
    /// <p>The name of the ledger.</p>
    pub fn ledger_name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.inner = self.inner.ledger_name(input);
        self
    }
    /// <p>The name of the ledger.</p>
    pub fn set_ledger_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.inner = self.inner.set_ledger_name(input);
        self
    }
    /// <p>The name of the ledger.</p>
    pub fn get_ledger_name(&self) -> &::std::option::Option<::std::string::String> {
        self.inner.get_ledger_name()
    }
    /// <p>The maximum number of results to return in a single request.</p>
    pub fn max_results(mut self, input: i32) -> Self {
        self.inner = self.inner.max_results(input);
        self
    }
    /// <p>The maximum number of results to return in a single request.</p>
    pub fn set_max_results(mut self, input: ::std::option::Option<i32>) -> Self {
        self.inner = self.inner.set_max_results(input);
        self
    }
    /// <p>The maximum number of results to return in a single request.</p>
    pub fn get_max_results(&self) -> &::std::option::Option<i32> {
        self.inner.get_max_results()
    }
    /// <p>A pagination token, indicating that you want to retrieve the next page of results.</p>
    pub fn next_token(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.inner = self.inner.next_token(input);
        self
    }
    /// <p>A pagination token, indicating that you want to retrieve the next page of results.</p>
    pub fn set_next_token(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.inner = self.inner.set_next_token(input);
        self
    }
    /// <p>A pagination token, indicating that you want to retrieve the next page of results.</p>
    pub fn get_next_token(&self) -> &::std::option::Option<::std::string::String> {
        self.inner.get_next_token()
    }
}
