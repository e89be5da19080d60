/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Orchestration and serialization glue logic for `UpdateJobStatus`.
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct UpdateJobStatus;
impl UpdateJobStatus {
    /// Creates a new `UpdateJobStatus`
    pub fn new() -> Self {
        Self
    }
}
impl ::aws_smithy_runtime::client::orchestrator::QueryOperation for UpdateJobStatus {
    const NAME: &'static str = "UpdateJobStatus";

    type Input = crate::operation::update_job_status::UpdateJobStatusInput;
    type Output = crate::operation::update_job_status::UpdateJobStatusOutput;
    type Error = crate::Error;

    fn serialize_input(input: &Self::Input) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::BuildError> {
        ::std::result::Result::Ok(crate::protocol_serde::shape_update_job_status_input::ser_update_job_status_input_input(input)?)
    }

    fn deserialize_output(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Output, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::shape_update_job_status::de_update_job_status_http_response(response)
    }

    fn deserialize_error(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Error, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::de_service_error(response.body())
    }
}

pub use crate::operation::update_job_status::_update_job_status_output::UpdateJobStatusOutput;

pub use crate::operation::update_job_status::_update_job_status_input::UpdateJobStatusInput;

mod _update_job_status_input;

mod _update_job_status_output;

/// Builders
pub mod builders;
