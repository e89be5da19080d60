/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Orchestration and serialization glue logic for `StreamJournalToKinesis`.
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct StreamJournalToKinesis;
impl StreamJournalToKinesis {
    /// Creates a new `StreamJournalToKinesis`
    pub fn new() -> Self {
        Self
    }
}
impl ::aws_smithy_runtime::client::orchestrator::QueryOperation for StreamJournalToKinesis {
    const NAME: &'static str = "StreamJournalToKinesis";

    type Input = crate::operation::stream_journal_to_kinesis::StreamJournalToKinesisInput;
    type Output = crate::operation::stream_journal_to_kinesis::StreamJournalToKinesisOutput;
    type Error = crate::Error;

    fn serialize_input(input: &Self::Input) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::BuildError> {
        ::std::result::Result::Ok(crate::protocol_serde::shape_stream_journal_to_kinesis_input::ser_stream_journal_to_kinesis_input_input(input)?)
    }

    fn deserialize_output(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Output, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::shape_stream_journal_to_kinesis::de_stream_journal_to_kinesis_http_response(response)
    }

    fn deserialize_error(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Error, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::de_service_error(response.body())
    }
}

pub use crate::operation::stream_journal_to_kinesis::_stream_journal_to_kinesis_output::StreamJournalToKinesisOutput;

pub use crate::operation::stream_journal_to_kinesis::_stream_journal_to_kinesis_input::StreamJournalToKinesisInput;

mod _stream_journal_to_kinesis_input;

mod _stream_journal_to_kinesis_output;

/// Builders
pub mod builders;
