/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Orchestration and serialization glue logic for `ExportJournalToS3`.
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct ExportJournalToS3;
impl ExportJournalToS3 {
    /// Creates a new `ExportJournalToS3`
    pub fn new() -> Self {
        Self
    }
}
impl ::aws_smithy_runtime::client::orchestrator::QueryOperation for ExportJournalToS3 {
    const NAME: &'static str = "ExportJournalToS3";

    type Input = crate::operation::export_journal_to_s3::ExportJournalToS3Input;
    type Output = crate::operation::export_journal_to_s3::ExportJournalToS3Output;
    type Error = crate::Error;

    fn serialize_input(input: &Self::Input) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::BuildError> {
        ::std::result::Result::Ok(crate::protocol_serde::shape_export_journal_to_s3_input::ser_export_journal_to_s3_input_input(input)?)
    }

    fn deserialize_output(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Output, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::shape_export_journal_to_s3::de_export_journal_to_s3_http_response(response)
    }

    fn deserialize_error(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Error, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::de_service_error(response.body())
    }
}

pub use crate::operation::export_journal_to_s3::_export_journal_to_s3_output::ExportJournalToS3Output;

pub use crate::operation::export_journal_to_s3::_export_journal_to_s3_input::ExportJournalToS3Input;

mod _export_journal_to_s3_input;

mod _export_journal_to_s3_output;

/// Builders
pub mod builders;
