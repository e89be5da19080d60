/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Orchestration and serialization glue logic for `ListTagsForResource`.
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct ListTagsForResource;
impl ListTagsForResource {
    /// Creates a new `ListTagsForResource`
    pub fn new() -> Self {
        Self
    }
}
impl ::aws_smithy_runtime::client::orchestrator::QueryOperation for ListTagsForResource {
    const NAME: &'static str = "ListTagsForResource";

    type Input = crate::operation::list_tags_for_resource::ListTagsForResourceInput;
    type Output = crate::operation::list_tags_for_resource::ListTagsForResourceOutput;
    type Error = crate::Error;

    fn serialize_input(input: &Self::Input) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::BuildError> {
        ::std::result::Result::Ok(crate::protocol_serde::shape_list_tags_for_resource_input::ser_list_tags_for_resource_input_input(input)?)
    }

    fn deserialize_output(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Output, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::shape_list_tags_for_resource::de_list_tags_for_resource_http_response(response)
    }

    fn deserialize_error(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Error, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::de_service_error(response.body())
    }
}

pub use crate::operation::list_tags_for_resource::_list_tags_for_resource_output::ListTagsForResourceOutput;

pub use crate::operation::list_tags_for_resource::_list_tags_for_resource_input::ListTagsForResourceInput;

mod _list_tags_for_resource_input;

mod _list_tags_for_resource_output;

/// Builders
pub mod builders;
