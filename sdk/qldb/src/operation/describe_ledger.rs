/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Orchestration and serialization glue logic for `DescribeLedger`.
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct DescribeLedger;
impl DescribeLedger {
    /// Creates a new `DescribeLedger`
    pub fn new() -> Self {
        Self
    }
}
impl ::aws_smithy_runtime::client::orchestrator::QueryOperation for DescribeLedger {
    const NAME: &'static str = "DescribeLedger";

    type Input = crate::operation::describe_ledger::DescribeLedgerInput;
    type Output = crate::operation::describe_ledger::DescribeLedgerOutput;
    type Error = crate::Error;

    fn serialize_input(input: &Self::Input) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::BuildError> {
        ::std::result::Result::Ok(crate::protocol_serde::shape_describe_ledger_input::ser_describe_ledger_input_input(input)?)
    }

    fn deserialize_output(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Output, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::shape_describe_ledger::de_describe_ledger_http_response(response)
    }

    fn deserialize_error(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Error, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::de_service_error(response.body())
    }
}

pub use crate::operation::describe_ledger::_describe_ledger_output::DescribeLedgerOutput;

pub use crate::operation::describe_ledger::_describe_ledger_input::DescribeLedgerInput;

mod _describe_ledger_input;

mod _describe_ledger_output;

/// Builders
pub mod builders;
