/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Orchestration and serialization glue logic for `ListAccessPoints`.
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct ListAccessPoints;
impl ListAccessPoints {
    /// Creates a new `ListAccessPoints`
    pub fn new() -> Self {
        Self
    }
}
impl ::aws_smithy_runtime::client::orchestrator::QueryOperation for ListAccessPoints {
    const NAME: &'static str = "ListAccessPoints";

    type Input = crate::operation::list_access_points::ListAccessPointsInput;
    type Output = crate::operation::list_access_points::ListAccessPointsOutput;
    type Error = crate::Error;

    fn serialize_input(input: &Self::Input) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::BuildError> {
        ::std::result::Result::Ok(crate::protocol_serde::shape_list_access_points_input::ser_list_access_points_input_input(input)?)
    }

    fn deserialize_output(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Output, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::shape_list_access_points::de_list_access_points_http_response(response)
    }

    fn deserialize_error(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Error, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::de_service_error(response.body())
    }
}

pub use crate::operation::list_access_points::_list_access_points_output::ListAccessPointsOutput;

pub use crate::operation::list_access_points::_list_access_points_input::ListAccessPointsInput;

mod _list_access_points_input;

mod _list_access_points_output;

/// Builders
pub mod builders;
