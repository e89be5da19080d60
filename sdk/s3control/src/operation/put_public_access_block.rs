/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Orchestration and serialization glue logic for `PutPublicAccessBlock`.
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct PutPublicAccessBlock;
impl PutPublicAccessBlock {
    /// Creates a new `PutPublicAccessBlock`
    pub fn new() -> Self {
        Self
    }
}
impl ::aws_smithy_runtime::client::orchestrator::QueryOperation for PutPublicAccessBlock {
    const NAME: &'static str = "PutPublicAccessBlock";

    type Input = crate::operation::put_public_access_block::PutPublicAccessBlockInput;
    type Output = crate::operation::put_public_access_block::PutPublicAccessBlockOutput;
    type Error = crate::Error;

    fn serialize_input(input: &Self::Input) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::BuildError> {
        ::std::result::Result::Ok(crate::protocol_serde::shape_put_public_access_block_input::ser_put_public_access_block_input_input(input)?)
    }

    fn deserialize_output(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Output, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::shape_put_public_access_block::de_put_public_access_block_http_response(response)
    }

    fn deserialize_error(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Error, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::de_service_error(response.body())
    }
}

pub use crate::operation::put_public_access_block::_put_public_access_block_output::PutPublicAccessBlockOutput;

pub use crate::operation::put_public_access_block::_put_public_access_block_input::PutPublicAccessBlockInput;

mod _put_public_access_block_input;

mod _put_public_access_block_output;

/// Builders
pub mod builders;
