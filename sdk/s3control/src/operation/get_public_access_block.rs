/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Orchestration and serialization glue logic for `GetPublicAccessBlock`.
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct GetPublicAccessBlock;
impl GetPublicAccessBlock {
    /// Creates a new `GetPublicAccessBlock`
    pub fn new() -> Self {
        Self
    }
}
impl ::aws_smithy_runtime::client::orchestrator::QueryOperation for GetPublicAccessBlock {
    const NAME: &'static str = "GetPublicAccessBlock";

    type Input = crate::operation::get_public_access_block::GetPublicAccessBlockInput;
    type Output = crate::operation::get_public_access_block::GetPublicAccessBlockOutput;
    type Error = crate::Error;

    fn serialize_input(input: &Self::Input) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::BuildError> {
        ::std::result::Result::Ok(crate::protocol_serde::shape_get_public_access_block_input::ser_get_public_access_block_input_input(input)?)
    }

    fn deserialize_output(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Output, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::shape_get_public_access_block::de_get_public_access_block_http_response(response)
    }

    fn deserialize_error(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Error, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::de_service_error(response.body())
    }
}

pub use crate::operation::get_public_access_block::_get_public_access_block_output::GetPublicAccessBlockOutput;

pub use crate::operation::get_public_access_block::_get_public_access_block_input::GetPublicAccessBlockInput;

mod _get_public_access_block_input;

mod _get_public_access_block_output;

/// Builders
pub mod builders;
