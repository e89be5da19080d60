/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Orchestration and serialization glue logic for `CreateAccessPoint`.
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct CreateAccessPoint;
impl CreateAccessPoint {
    /// Creates a new `CreateAccessPoint`
    pub fn new() -> Self {
        Self
    }
}
impl ::aws_smithy_runtime::client::orchestrator::QueryOperation for CreateAccessPoint {
    const NAME: &'static str = "CreateAccessPoint";

    type Input = crate::operation::create_access_point::CreateAccessPointInput;
    type Output = crate::operation::create_access_point::CreateAccessPointOutput;
    type Error = crate::Error;

    fn serialize_input(input: &Self::Input) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::BuildError> {
        ::std::result::Result::Ok(crate::protocol_serde::shape_create_access_point_input::ser_create_access_point_input_input(input)?)
    }

    fn deserialize_output(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Output, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::shape_create_access_point::de_create_access_point_http_response(response)
    }

    fn deserialize_error(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Error, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::de_service_error(response.body())
    }
}

pub use crate::operation::create_access_point::_create_access_point_output::CreateAccessPointOutput;

pub use crate::operation::create_access_point::_create_access_point_input::CreateAccessPointInput;

mod _create_access_point_input;

mod _create_access_point_output;

/// Builders
pub mod builders;
