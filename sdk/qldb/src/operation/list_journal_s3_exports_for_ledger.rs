/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Orchestration and serialization glue logic for `ListJournalS3ExportsForLedger`.
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct ListJournalS3ExportsForLedger;
impl ListJournalS3ExportsForLedger {
    /// Creates a new `ListJournalS3ExportsForLedger`
    pub fn new() -> Self {
        Self
    }
}
impl ::aws_smithy_runtime::client::orchestrator::QueryOperation for ListJournalS3ExportsForLedger {
    const NAME: &'static str = "ListJournalS3ExportsForLedger";

    type Input = crate::operation::list_journal_s3_exports_for_ledger::ListJournalS3ExportsForLedgerInput;
    type Output = crate::operation::list_journal_s3_exports_for_ledger::ListJournalS3ExportsForLedgerOutput;
    type Error = crate::Error;

    fn serialize_input(input: &Self::Input) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::BuildError> {
        ::std::result::Result::Ok(crate::protocol_serde::shape_list_journal_s3_exports_for_ledger_input::ser_list_journal_s3_exports_for_ledger_input_input(input)?)
    }

    fn deserialize_output(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Output, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::shape_list_journal_s3_exports_for_ledger::de_list_journal_s3_exports_for_ledger_http_response(response)
    }

    fn deserialize_error(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Error, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::de_service_error(response.body())
    }
}

pub use crate::operation::list_journal_s3_exports_for_ledger::_list_journal_s3_exports_for_ledger_output::ListJournalS3ExportsForLedgerOutput;

pub use crate::operation::list_journal_s3_exports_for_ledger::_list_journal_s3_exports_for_ledger_input::ListJournalS3ExportsForLedgerInput;

mod _list_journal_s3_exports_for_ledger_input;

mod _list_journal_s3_exports_for_ledger_output;

/// Builders
pub mod builders;
