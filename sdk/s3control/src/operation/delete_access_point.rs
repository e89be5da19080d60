/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Orchestration and serialization glue logic for `DeleteAccessPoint`.
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct DeleteAccessPoint;
impl DeleteAccessPoint {
    /// Creates a new `DeleteAccessPoint`
    pub fn new() -> Self {
        Self
    }
}
impl ::aws_smithy_runtime::client::orchestrator::QueryOperation for DeleteAccessPoint {
    const NAME: &'static str = "DeleteAccessPoint";

    type Input = crate::operation::delete_access_point::DeleteAccessPointInput;
    type Output = crate::operation::delete_access_point::DeleteAccessPointOutput;
    type Error = crate::Error;

    fn serialize_input(input: &Self::Input) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::BuildError> {
        ::std::result::Result::Ok(crate::protocol_serde::shape_delete_access_point_input::ser_delete_access_point_input_input(input)?)
    }

    fn deserialize_output(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Output, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::shape_delete_access_point::de_delete_access_point_http_response(response)
    }

    fn deserialize_error(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Error, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::de_service_error(response.body())
    }
}

pub use crate::operation::delete_access_point::_delete_access_point_output::DeleteAccessPointOutput;

pub use crate::operation::delete_access_point::_delete_access_point_input::DeleteAccessPointInput;

mod _delete_access_point_input;

mod _delete_access_point_output;

/// Builders
pub mod builders;
