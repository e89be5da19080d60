/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Orchestration and serialization glue logic for `DescribeJournalKinesisStream`.
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct DescribeJournalKinesisStream;
impl DescribeJournalKinesisStream {
    /// Creates a new `DescribeJournalKinesisStream`
    pub fn new() -> Self {
        Self
    }
}
impl ::aws_smithy_runtime::client::orchestrator::QueryOperation for DescribeJournalKinesisStream {
    const NAME: &'static str = "DescribeJournalKinesisStream";

    type Input = crate::operation::describe_journal_kinesis_stream::DescribeJournalKinesisStreamInput;
    type Output = crate::operation::describe_journal_kinesis_stream::DescribeJournalKinesisStreamOutput;
    type Error = crate::Error;

    fn serialize_input(input: &Self::Input) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::BuildError> {
        ::std::result::Result::Ok(crate::protocol_serde::shape_describe_journal_kinesis_stream_input::ser_describe_journal_kinesis_stream_input_input(input)?)
    }

    fn deserialize_output(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Output, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::shape_describe_journal_kinesis_stream::de_describe_journal_kinesis_stream_http_response(response)
    }

    fn deserialize_error(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Error, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::de_service_error(response.body())
    }
}

pub use crate::operation::describe_journal_kinesis_stream::_describe_journal_kinesis_stream_output::DescribeJournalKinesisStreamOutput;

pub use crate::operation::describe_journal_kinesis_stream::_describe_journal_kinesis_stream_input::DescribeJournalKinesisStreamInput;

mod _describe_journal_kinesis_stream_input;

mod _describe_journal_kinesis_stream_output;

/// Builders
pub mod builders;
