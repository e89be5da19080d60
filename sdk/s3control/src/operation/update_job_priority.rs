/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Orchestration and serialization glue logic for `UpdateJobPriority`.
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct UpdateJobPriority;
impl UpdateJobPriority {
    /// Creates a new `UpdateJobPriority`
    pub fn new() -> Self {
        Self
    }
}
impl ::aws_smithy_runtime::client::orchestrator::QueryOperation for UpdateJobPriority {
    const NAME: &'static str = "UpdateJobPriority";

    type Input = crate::operation::update_job_priority::UpdateJobPriorityInput;
    type Output = crate::operation::update_job_priority::UpdateJobPriorityOutput;
    type Error = crate::Error;

    fn serialize_input(input: &Self::Input) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::BuildError> {
        ::std::result::Result::Ok(crate::protocol_serde::shape_update_job_priority_input::ser_update_job_priority_input_input(input)?)
    }

    fn deserialize_output(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Output, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::shape_update_job_priority::de_update_job_priority_http_response(response)
    }

    fn deserialize_error(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Error, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::de_service_error(response.body())
    }
}

pub use crate::operation::update_job_priority::_update_job_priority_output::UpdateJobPriorityOutput;

pub use crate::operation::update_job_priority::_update_job_priority_input::UpdateJobPriorityInput;

mod _update_job_priority_input;

mod _update_job_priority_output;

/// Builders
pub mod builders;
