/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Orchestration and serialization glue logic for `DeleteAccessPointPolicy`.
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct DeleteAccessPointPolicy;
impl DeleteAccessPointPolicy {
    /// Creates a new `DeleteAccessPointPolicy`
    pub fn new() -> Self {
        Self
    }
}
impl ::aws_smithy_runtime::client::orchestrator::QueryOperation for DeleteAccessPointPolicy {
    const NAME: &'static str = "DeleteAccessPointPolicy";

    type Input = crate::operation::delete_access_point_policy::DeleteAccessPointPolicyInput;
    type Output = crate::operation::delete_access_point_policy::DeleteAccessPointPolicyOutput;
    type Error = crate::Error;

    fn serialize_input(input: &Self::Input) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::BuildError> {
        ::std::result::Result::Ok(crate::protocol_serde::shape_delete_access_point_policy_input::ser_delete_access_point_policy_input_input(input)?)
    }

    fn deserialize_output(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Output, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::shape_delete_access_point_policy::de_delete_access_point_policy_http_response(response)
    }

    fn deserialize_error(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Error, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::de_service_error(response.body())
    }
}

pub use crate::operation::delete_access_point_policy::_delete_access_point_policy_output::DeleteAccessPointPolicyOutput;

pub use crate::operation::delete_access_point_policy::_delete_access_point_policy_input::DeleteAccessPointPolicyInput;

mod _delete_access_point_policy_input;

mod _delete_access_point_policy_output;

/// Builders
pub mod builders;
