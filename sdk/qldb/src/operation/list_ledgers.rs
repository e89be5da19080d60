/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Orchestration and serialization glue logic for `ListLedgers`.
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct ListLedgers;
impl ListLedgers {
    /// Creates a new `ListLedgers`
    pub fn new() -> Self {
        Self
    }
}
impl ::aws_smithy_runtime::client::orchestrator::QueryOperation for ListLedgers {
    const NAME: &'static str = "ListLedgers";

    type Input = crate::operation::list_ledgers::ListLedgersInput;
    type Output = crate::operation::list_ledgers::ListLedgersOutput;
    type Error = crate::Error;

    fn serialize_input(input: &Self::Input) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::BuildError> {
        ::std::result::Result::Ok(crate::protocol_serde::shape_list_ledgers_input::ser_list_ledgers_input_input(input)?)
    }

    fn deserialize_output(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Output, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::shape_list_ledgers::de_list_ledgers_http_response(response)
    }

    fn deserialize_error(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Error, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::de_service_error(response.body())
    }
}

pub use crate::operation::list_ledgers::_list_ledgers_output::ListLedgersOutput;

pub use crate::operation::list_ledgers::_list_ledgers_input::ListLedgersInput;

mod _list_ledgers_input;

mod _list_ledgers_output;

/// Builders
pub mod builders;
