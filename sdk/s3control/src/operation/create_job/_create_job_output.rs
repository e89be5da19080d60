/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct CreateJobOutput {
    /// <p>The ID for this job.</p>
    pub job_id: ::std::option::Option<::std::string::String>,
    _request_id: Option<String>,
}
impl CreateJobOutput {
    /// <p>The ID for this job.</p>
    pub fn job_id(&self) -> ::std::option::Option<&str> {
        self.job_id.as_deref()
    }
}
impl ::aws_types::request_id::RequestId for CreateJobOutput {
    fn request_id(&self) -> Option<&str> {
        self._request_id.as_deref()
    }
}
impl CreateJobOutput {
    /// Creates a new builder-style object to manufacture [`CreateJobOutput`](crate::operation::create_job::CreateJobOutput).
    pub fn builder() -> crate::operation::create_job::builders::CreateJobOutputBuilder {
        crate::operation::create_job::builders::CreateJobOutputBuilder::default()
    }
}

/// A builder for [`CreateJobOutput`](crate::operation::create_job::CreateJobOutput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct CreateJobOutputBuilder {
    pub(crate) job_id: ::std::option::Option<::std::string::String>,
    _request_id: Option<String>,
}
impl CreateJobOutputBuilder {
    /// <p>The ID for this job.</p>
    pub fn job_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.job_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The ID for this job.</p>
    pub fn set_job_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.job_id = input;
        self
    }
    /// <p>The ID for this job.</p>
    pub fn get_job_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.job_id
    }
    pub(crate) fn _set_request_id(mut self, request_id: Option<String>) -> Self {
        self._request_id = request_id;
        self
    }
    /// Consumes the builder and constructs a [`CreateJobOutput`](crate::operation::create_job::CreateJobOutput).
    pub fn build(self) -> crate::operation::create_job::CreateJobOutput {
        crate::operation::create_job::CreateJobOutput {
            job_id: self.job_id,
            _request_id: self._request_id,
        }
    }
}
