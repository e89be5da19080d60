/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Orchestration and serialization glue logic for `CancelJournalKinesisStream`.
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct CancelJournalKinesisStream;
impl CancelJournalKinesisStream {
    /// Creates a new `CancelJournalKinesisStream`
    pub fn new() -> Self {
        Self
    }
}
impl ::aws_smithy_runtime::client::orchestrator::QueryOperation for CancelJournalKinesisStream {
    const NAME: &'static str = "CancelJournalKinesisStream";

    type Input = crate::operation::cancel_journal_kinesis_stream::CancelJournalKinesisStreamInput;
    type Output = crate::operation::cancel_journal_kinesis_stream::CancelJournalKinesisStreamOutput;
    type Error = crate::Error;

    fn serialize_input(input: &Self::Input) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::BuildError> {
        ::std::result::Result::Ok(crate::protocol_serde::shape_cancel_journal_kinesis_stream_input::ser_cancel_journal_kinesis_stream_input_input(input)?)
    }

    fn deserialize_output(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Output, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::shape_cancel_journal_kinesis_stream::de_cancel_journal_kinesis_stream_http_response(response)
    }

    fn deserialize_error(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Error, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::de_service_error(response.body())
    }
}

pub use crate::operation::cancel_journal_kinesis_stream::_cancel_journal_kinesis_stream_output::CancelJournalKinesisStreamOutput;

pub use crate::operation::cancel_journal_kinesis_stream::_cancel_journal_kinesis_stream_input::CancelJournalKinesisStreamInput;

mod _cancel_journal_kinesis_stream_input;

mod _cancel_journal_kinesis_stream_output;

/// Builders
pub mod builders;
