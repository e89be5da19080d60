/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Orchestration and serialization glue logic for `PutJobTagging`.
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct PutJobTagging;
impl PutJobTagging {
    /// Creates a new `PutJobTagging`
    pub fn new() -> Self {
        Self
    }
}
impl ::aws_smithy_runtime::client::orchestrator::QueryOperation for PutJobTagging {
    const NAME: &'static str = "PutJobTagging";

    type Input = crate::operation::put_job_tagging::PutJobTaggingInput;
    type Output = crate::operation::put_job_tagging::PutJobTaggingOutput;
    type Error = crate::Error;

    fn serialize_input(input: &Self::Input) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::BuildError> {
        ::std::result::Result::Ok(crate::protocol_serde::shape_put_job_tagging_input::ser_put_job_tagging_input_input(input)?)
    }

    fn deserialize_output(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Output, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::shape_put_job_tagging::de_put_job_tagging_http_response(response)
    }

    fn deserialize_error(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Error, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::de_service_error(response.body())
    }
}

pub use crate::operation::put_job_tagging::_put_job_tagging_output::PutJobTaggingOutput;

pub use crate::operation::put_job_tagging::_put_job_tagging_input::PutJobTaggingInput;

mod _put_job_tagging_input;

mod _put_job_tagging_output;

/// Builders
pub mod builders;
