/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct ListJournalKinesisStreamsForLedgerOutput {
    /// <p>The QLDB journal streams that are currently associated with the given ledger.</p>
    pub streams: ::std::option::Option<::std::vec::Vec<crate::types::JournalKinesisStreamDescription>>,
    /// <p>Indicates whether there are more results available.</p>
    pub next_token: ::std::option::Option<::std::string::String>,
    _request_id: Option<String>,
}
impl ListJournalKinesisStreamsForLedgerOutput {
    /// <p>The QLDB journal streams that are currently associated with the given ledger.</p>
    ///
    /// An unset list is distinct from an empty one.
    pub fn streams(&self) -> ::std::option::Option<&[crate::types::JournalKinesisStreamDescription]> {
        self.streams.as_deref()
    }
    /// <p>Indicates whether there are more results available.</p>
    pub fn next_token(&self) -> ::std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
impl ::aws_types::request_id::RequestId for ListJournalKinesisStreamsForLedgerOutput {
    fn request_id(&self) -> Option<&str> {
        self._request_id.as_deref()
    }
}
impl ListJournalKinesisStreamsForLedgerOutput {
    /// Creates a new builder-style object to manufacture [`ListJournalKinesisStreamsForLedgerOutput`](crate::operation::list_journal_kinesis_streams_for_ledger::ListJournalKinesisStreamsForLedgerOutput).
    pub fn builder() -> crate::operation::list_journal_kinesis_streams_for_ledger::builders::ListJournalKinesisStreamsForLedgerOutputBuilder {
        crate::operation::list_journal_kinesis_streams_for_ledger::builders::ListJournalKinesisStreamsForLedgerOutputBuilder::default()
    }
}

/// A builder for [`ListJournalKinesisStreamsForLedgerOutput`](crate::operation::list_journal_kinesis_streams_for_ledger::ListJournalKinesisStreamsForLedgerOutput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct ListJournalKinesisStreamsForLedgerOutputBuilder {
    pub(crate) streams: ::std::option::Option<::std::vec::Vec<crate::types::JournalKinesisStreamDescription>>,
    pub(crate) next_token: ::std::option::Option<::std::string::String>,
    _request_id: Option<String>,
}
impl ListJournalKinesisStreamsForLedgerOutputBuilder {
    /// Appends an item to `streams`.
    ///
    /// To override the contents of this collection use [`set_streams`](Self::set_streams).
    ///
    /// <p>The QLDB journal streams that are currently associated with the given ledger.</p>
    pub fn streams(mut self, input: crate::types::JournalKinesisStreamDescription) -> Self {
        let mut v = self.streams.unwrap_or_default();
        v.push(input);
        self.streams = ::std::option::Option::Some(v);
        self
    }
    /// <p>The QLDB journal streams that are currently associated with the given ledger.</p>
    pub fn set_streams(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::JournalKinesisStreamDescription>>) -> Self {
        self.streams = input;
        self
    }
    /// <p>The QLDB journal streams that are currently associated with the given ledger.</p>
    pub fn get_streams(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::JournalKinesisStreamDescription>> {
        &self.streams
    }
    /// <p>Indicates whether there are more results available.</p>
    pub fn next_token(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.next_token = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>Indicates whether there are more results available.</p>
    pub fn set_next_token(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.next_token = input;
        self
    }
    /// <p>Indicates whether there are more results available.</p>
    pub fn get_next_token(&self) -> &::std::option::Option<::std::string::String> {
        &self.next_token
    }
    pub(crate) fn _set_request_id(mut self, request_id: Option<String>) -> Self {
        self._request_id = request_id;
        self
    }
    /// Consumes the builder and constructs a [`ListJournalKinesisStreamsForLedgerOutput`](crate::operation::list_journal_kinesis_streams_for_ledger::ListJournalKinesisStreamsForLedgerOutput).
    pub fn build(self) -> crate::operation::list_journal_kinesis_streams_for_ledger::ListJournalKinesisStreamsForLedgerOutput {
        crate::operation::list_journal_kinesis_streams_for_ledger::ListJournalKinesisStreamsForLedgerOutput {
            streams: self.streams,
            next_token: self.next_token,
            _request_id: self._request_id,
        }
    }
}
