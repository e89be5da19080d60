/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Orchestration and serialization glue logic for `PutAccessPointPolicy`.
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct PutAccessPointPolicy;
impl PutAccessPointPolicy {
    /// Creates a new `PutAccessPointPolicy`
    pub fn new() -> Self {
        Self
    }
}
impl ::aws_smithy_runtime::client::orchestrator::QueryOperation for PutAccessPointPolicy {
    const NAME: &'static str = "PutAccessPointPolicy";

    type Input = crate::operation::put_access_point_policy::PutAccessPointPolicyInput;
    type Output = crate::operation::put_access_point_policy::PutAccessPointPolicyOutput;
    type Error = crate::Error;

    fn serialize_input(input: &Self::Input) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::BuildError> {
        ::std::result::Result::Ok(crate::protocol_serde::shape_put_access_point_policy_input::ser_put_access_point_policy_input_input(input)?)
    }

    fn deserialize_output(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Output, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::shape_put_access_point_policy::de_put_access_point_policy_http_response(response)
    }

    fn deserialize_error(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Error, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::de_service_error(response.body())
    }
}

pub use crate::operation::put_access_point_policy::_put_access_point_policy_output::PutAccessPointPolicyOutput;

pub use crate::operation::put_access_point_policy::_put_access_point_policy_input::PutAccessPointPolicyInput;

mod _put_access_point_policy_input;

mod _put_access_point_policy_output;

/// Builders
pub mod builders;
