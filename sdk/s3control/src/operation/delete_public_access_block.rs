/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Orchestration and serialization glue logic for `DeletePublicAccessBlock`.
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct DeletePublicAccessBlock;
impl DeletePublicAccessBlock {
    /// Creates a new `DeletePublicAccessBlock`
    pub fn new() -> Self {
        Self
    }
}
impl ::aws_smithy_runtime::client::orchestrator::QueryOperation for DeletePublicAccessBlock {
    const NAME: &'static str = "DeletePublicAccessBlock";

    type Input = crate::operation::delete_public_access_block::DeletePublicAccessBlockInput;
    type Output = crate::operation::delete_public_access_block::DeletePublicAccessBlockOutput;
    type Error = crate::Error;

    fn serialize_input(input: &Self::Input) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::BuildError> {
        ::std::result::Result::Ok(crate::protocol_serde::shape_delete_public_access_block_input::ser_delete_public_access_block_input_input(input)?)
    }

    fn deserialize_output(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Output, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::shape_delete_public_access_block::de_delete_public_access_block_http_response(response)
    }

    fn deserialize_error(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Error, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::de_service_error(response.body())
    }
}

pub use crate::operation::delete_public_access_block::_delete_public_access_block_output::DeletePublicAccessBlockOutput;

pub use crate::operation::delete_public_access_block::_delete_public_access_block_input::DeletePublicAccessBlockInput;

mod _delete_public_access_block_input;

mod _delete_public_access_block_output;

/// Builders
pub mod builders;
