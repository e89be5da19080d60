/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Orchestration and serialization glue logic for `UntagResource`.
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct UntagResource;
impl UntagResource {
    /// Creates a new `UntagResource`
    pub fn new() -> Self {
        Self
    }
}
impl ::aws_smithy_runtime::client::orchestrator::QueryOperation for UntagResource {
    const NAME: &'static str = "UntagResource";

    type Input = crate::operation::untag_resource::UntagResourceInput;
    type Output = crate::operation::untag_resource::UntagResourceOutput;
    type Error = crate::Error;

    fn serialize_input(input: &Self::Input) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::BuildError> {
        ::std::result::Result::Ok(crate::protocol_serde::shape_untag_resource_input::ser_untag_resource_input_input(input)?)
    }

    fn deserialize_output(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Output, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::shape_untag_resource::de_untag_resource_http_response(response)
    }

    fn deserialize_error(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Error, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::de_service_error(response.body())
    }
}

pub use crate::operation::untag_resource::_untag_resource_output::UntagResourceOutput;

pub use crate::operation::untag_resource::_untag_resource_input::UntagResourceInput;

mod _untag_resource_input;

mod _untag_resource_output;

/// Builders
pub mod builders;
