/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Orchestration and serialization glue logic for `DescribeJournalS3Export`.
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct DescribeJournalS3Export;
impl DescribeJournalS3Export {
    /// Creates a new `DescribeJournalS3Export`
    pub fn new() -> Self {
        Self
    }
}
impl ::aws_smithy_runtime::client::orchestrator::QueryOperation for DescribeJournalS3Export {
    const NAME: &'static str = "DescribeJournalS3Export";

    type Input = crate::operation::describe_journal_s3_export::DescribeJournalS3ExportInput;
    type Output = crate::operation::describe_journal_s3_export::DescribeJournalS3ExportOutput;
    type Error = crate::Error;

    fn serialize_input(input: &Self::Input) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::BuildError> {
        ::std::result::Result::Ok(crate::protocol_serde::shape_describe_journal_s3_export_input::ser_describe_journal_s3_export_input_input(input)?)
    }

    fn deserialize_output(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Output, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::shape_describe_journal_s3_export::de_describe_journal_s3_export_http_response(response)
    }

    fn deserialize_error(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Error, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::de_service_error(response.body())
    }
}

pub use crate::operation::describe_journal_s3_export::_describe_journal_s3_export_output::DescribeJournalS3ExportOutput;

pub use crate::operation::describe_journal_s3_export::_describe_journal_s3_export_input::DescribeJournalS3ExportInput;

mod _describe_journal_s3_export_input;

mod _describe_journal_s3_export_output;

/// Builders
pub mod builders;
