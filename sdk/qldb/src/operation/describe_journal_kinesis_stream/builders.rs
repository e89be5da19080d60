/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::describe_journal_kinesis_stream::_describe_journal_kinesis_stream_output::DescribeJournalKinesisStreamOutputBuilder;

pub use crate::operation::describe_journal_kinesis_stream::_describe_journal_kinesis_stream_input::DescribeJournalKinesisStreamInputBuilder;

/// Fluent builder constructing a request to `DescribeJournalKinesisStream`.
///
/// <p>Returns detailed information about a given Amazon QLDB journal stream.</p>
#[derive(::std::clone::Clone, ::std::fmt::Debug)]
pub struct DescribeJournalKinesisStreamFluentBuilder {
    handle: ::std::sync::Arc<crate::client::Handle>,
    inner: crate::operation::describe_journal_kinesis_stream::builders::DescribeJournalKinesisStreamInputBuilder,
}
impl DescribeJournalKinesisStreamFluentBuilder {
    /// Creates a new `DescribeJournalKinesisStreamFluentBuilder`.
    pub(crate) fn new(handle: ::std::sync::Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }
    /// Access the DescribeJournalKinesisStream as a reference.
    pub fn as_input(&self) -> &crate::operation::describe_journal_kinesis_stream::builders::DescribeJournalKinesisStreamInputBuilder {
        &self.inner
    }
    /// Sends the request and returns the response.
    ///
    /// If an error occurs, an `SdkError` will be returned with additional details that
    /// can be matched against.
    pub fn send(
        self,
    ) -> ::std::result::Result<
        crate::operation::describe_journal_kinesis_stream::DescribeJournalKinesisStreamOutput,
        ::aws_smithy_runtime::client::result::SdkError<crate::Error>,
    > {
        let input = self
            .inner
            .build()
            .map_err(::aws_smithy_runtime::client::result::SdkError::construction_failure)?;
        self.handle.invoke::<crate::operation::describe_journal_kinesis_stream::DescribeJournalKinesisStream>(&input)
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
    /// <p>The UUID (represented in Base62-encoded text) of the QLDB journal stream to describe.</p>
    pub fn stream_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.inner = self.inner.stream_id(input);
        self
    }
    /// <p>The UUID (represented in Base62-encoded text) of the QLDB journal stream to describe.</p>
    pub fn set_stream_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.inner = self.inner.set_stream_id(input);
        self
    }
    /// <p>The UUID (represented in Base62-encoded text) of the QLDB journal stream to describe.</p>
    pub fn get_stream_id(&self) -> &::std::option::Option<::std::string::String> {
        self.inner.get_stream_id()
    }
}
