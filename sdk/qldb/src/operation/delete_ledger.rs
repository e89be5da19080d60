/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Orchestration and serialization glue logic for `DeleteLedger`.
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct DeleteLedger;
impl DeleteLedger {
    /// Creates a new `DeleteLedger`
    pub fn new() -> Self {
        Self
    }
}
impl ::aws_smithy_runtime::client::orchestrator::QueryOperation for DeleteLedger {
    const NAME: &'static str = "DeleteLedger";

    type Input = crate::operation::delete_ledger::DeleteLedgerInput;
    type Output = crate::operation::delete_ledger::DeleteLedgerOutput;
    type Error = crate::Error;

    fn serialize_input(input: &Self::Input) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::BuildError> {
        ::std::result::Result::Ok(crate::protocol_serde::shape_delete_ledger_input::ser_delete_ledger_input_input(input)?)
    }

    fn deserialize_output(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Output, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::shape_delete_ledger::de_delete_ledger_http_response(response)
    }

    fn deserialize_error(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Error, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::de_service_error(response.body())
    }
}

pub use crate::operation::delete_ledger::_delete_ledger_output::DeleteLedgerOutput;

pub use crate::operation::delete_ledger::_delete_ledger_input::DeleteLedgerInput;

mod _delete_ledger_input;

mod _delete_ledger_output;

/// Builders
pub mod builders;
