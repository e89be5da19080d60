/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Orchestration and serialization glue logic for `CreateLedger`.
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct CreateLedger;
impl CreateLedger {
    /// Creates a new `CreateLedger`
    pub fn new() -> Self {
        Self
    }
}
impl ::aws_smithy_runtime::client::orchestrator::QueryOperation for CreateLedger {
    const NAME: &'static str = "CreateLedger";

    type Input = crate::operation::create_ledger::CreateLedgerInput;
    type Output = crate::operation::create_ledger::CreateLedgerOutput;
    type Error = crate::Error;

    fn serialize_input(input: &Self::Input) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::BuildError> {
        ::std::result::Result::Ok(crate::protocol_serde::shape_create_ledger_input::ser_create_ledger_input_input(input)?)
    }

    fn deserialize_output(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Output, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::shape_create_ledger::de_create_ledger_http_response(response)
    }

    fn deserialize_error(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Error, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::de_service_error(response.body())
    }
}

pub use crate::operation::create_ledger::_create_ledger_output::CreateLedgerOutput;

pub use crate::operation::create_ledger::_create_ledger_input::CreateLedgerInput;

mod _create_ledger_input;

mod _create_ledger_output;

/// Builders
pub mod builders;
