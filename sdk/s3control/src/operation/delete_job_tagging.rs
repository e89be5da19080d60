/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Orchestration and serialization glue logic for `DeleteJobTagging`.
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct DeleteJobTagging;
impl DeleteJobTagging {
    /// Creates a new `DeleteJobTagging`
    pub fn new() -> Self {
        Self
    }
}
impl ::aws_smithy_runtime::client::orchestrator::QueryOperation for DeleteJobTagging {
    const NAME: &'static str = "DeleteJobTagging";

    type Input = crate::operation::delete_job_tagging::DeleteJobTaggingInput;
    type Output = crate::operation::delete_job_tagging::DeleteJobTaggingOutput;
    type Error = crate::Error;

    fn serialize_input(input: &Self::Input) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::BuildError> {
        ::std::result::Result::Ok(crate::protocol_serde::shape_delete_job_tagging_input::ser_delete_job_tagging_input_input(input)?)
    }

    fn deserialize_output(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Output, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::shape_delete_job_tagging::de_delete_job_tagging_http_response(response)
    }

    fn deserialize_error(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Error, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::de_service_error(response.body())
    }
}

pub use crate::operation::delete_job_tagging::_delete_job_tagging_output::DeleteJobTaggingOutput;

pub use crate::operation::delete_job_tagging::_delete_job_tagging_input::DeleteJobTaggingInput;

mod _delete_job_tagging_input;

mod _delete_job_tagging_output;

/// Builders
pub mod builders;
