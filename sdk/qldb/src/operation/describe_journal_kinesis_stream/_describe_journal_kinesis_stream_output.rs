/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct DescribeJournalKinesisStreamOutput {
    /// <p>Information about the QLDB journal stream returned by a <code>DescribeJournalS3Export</code> request.</p>
    pub stream: ::std::option::Option<crate::types::JournalKinesisStreamDescription>,
    _request_id: Option<String>,
}
impl DescribeJournalKinesisStreamOutput {
    /// <p>Information about the QLDB journal stream returned by a <code>DescribeJournalS3Export</code> request.</p>
    pub fn stream(&self) -> ::std::option::Option<&crate::types::JournalKinesisStreamDescription> {
        self.stream.as_ref()
    }
}
impl ::aws_types::request_id::RequestId for DescribeJournalKinesisStreamOutput {
    fn request_id(&self) -> Option<&str> {
        self._request_id.as_deref()
    }
}
impl DescribeJournalKinesisStreamOutput {
    /// Creates a new builder-style object to manufacture [`DescribeJournalKinesisStreamOutput`](crate::operation::describe_journal_kinesis_stream::DescribeJournalKinesisStreamOutput).
    pub fn builder() -> crate::operation::describe_journal_kinesis_stream::builders::DescribeJournalKinesisStreamOutputBuilder {
        crate::operation::describe_journal_kinesis_stream::builders::DescribeJournalKinesisStreamOutputBuilder::default()
    }
}

/// A builder for [`DescribeJournalKinesisStreamOutput`](crate::operation::describe_journal_kinesis_stream::DescribeJournalKinesisStreamOutput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct DescribeJournalKinesisStreamOutputBuilder {
    pub(crate) stream: ::std::option::Option<crate::types::JournalKinesisStreamDescription>,
    _request_id: Option<String>,
}
impl DescribeJournalKinesisStreamOutputBuilder {
    /// <p>Information about the QLDB journal stream returned by a <code>DescribeJournalS3Export</code> request.</p>
    pub fn stream(mut self, input: crate::types::JournalKinesisStreamDescription) -> Self {
        self.stream = ::std::option::Option::Some(input);
        self
    }
    /// <p>Information about the QLDB journal stream returned by a <code>DescribeJournalS3Export</code> request.</p>
    pub fn set_stream(mut self, input: ::std::option::Option<crate::types::JournalKinesisStreamDescription>) -> Self {
        self.stream = input;
        self
    }
    /// <p>Information about the QLDB journal stream returned by a <code>DescribeJournalS3Export</code> request.</p>
    pub fn get_stream(&self) -> &::std::option::Option<crate::types::JournalKinesisStreamDescription> {
        &self.stream
    }
    pub(crate) fn _set_request_id(mut self, request_id: Option<String>) -> Self {
        self._request_id = request_id;
        self
    }
    /// Consumes the builder and constructs a [`DescribeJournalKinesisStreamOutput`](crate::operation::describe_journal_kinesis_stream::DescribeJournalKinesisStreamOutput).
    pub fn build(self) -> crate::operation::describe_journal_kinesis_stream::DescribeJournalKinesisStreamOutput {
        crate::operation::describe_journal_kinesis_stream::DescribeJournalKinesisStreamOutput {
            stream: self.stream,
            _request_id: self._request_id,
        }
    }
}
