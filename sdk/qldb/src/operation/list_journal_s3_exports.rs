/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Orchestration and serialization glue logic for `ListJournalS3Exports`.
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct ListJournalS3Exports;
impl ListJournalS3Exports {
    /// Creates a new `ListJournalS3Exports`
    pub fn new() -> Self {
        Self
    }
}
impl ::aws_smithy_runtime::client::orchestrator::QueryOperation for ListJournalS3Exports {
    const NAME: &'static str = "ListJournalS3Exports";

    type Input = crate::operation::list_journal_s3_exports::ListJournalS3ExportsInput;
    type Output = crate::operation::list_journal_s3_exports::ListJournalS3ExportsOutput;
    type Error = crate::Error;

    fn serialize_input(input: &Self::Input) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::BuildError> {
        ::std::result::Result::Ok(crate::protocol_serde::shape_list_journal_s3_exports_input::ser_list_journal_s3_exports_input_input(input)?)
    }

    fn deserialize_output(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Output, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::shape_list_journal_s3_exports::de_list_journal_s3_exports_http_response(response)
    }

    fn deserialize_error(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Error, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::de_service_error(response.body())
    }
}

pub use crate::operation::list_journal_s3_exports::_list_journal_s3_exports_output::ListJournalS3ExportsOutput;

pub use crate::operation::list_journal_s3_exports::_list_journal_s3_exports_input::ListJournalS3ExportsInput;

mod _list_journal_s3_exports_input;

mod _list_journal_s3_exports_output;

/// Builders
pub mod builders;
