/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct UpdateJobPriorityOutput {
    /// <p>The ID for the job whose priority Amazon S3 updated.</p>
    pub job_id: ::std::option::Option<::std::string::String>,
    /// <p>The new priority assigned to the specified job.</p>
    pub priority: ::std::option::Option<i32>,
    _request_id: Option<String>,
}
impl UpdateJobPriorityOutput {
    /// <p>The ID for the job whose priority Amazon S3 updated.</p>
    pub fn job_id(&self) -> ::std::option::Option<&str> {
        self.job_id.as_deref()
    }
    /// <p>The new priority assigned to the specified job.</p>
    pub fn priority(&self) -> ::std::option::Option<i32> {
        self.priority
    }
}
impl ::aws_types::request_id::RequestId for UpdateJobPriorityOutput {
    fn request_id(&self) -> Option<&str> {
        self._request_id.as_deref()
    }
}
impl UpdateJobPriorityOutput {
    /// Creates a new builder-style object to manufacture [`UpdateJobPriorityOutput`](crate::operation::update_job_priority::UpdateJobPriorityOutput).
    pub fn builder() -> crate::operation::update_job_priority::builders::UpdateJobPriorityOutputBuilder {
        crate::operation::update_job_priority::builders::UpdateJobPriorityOutputBuilder::default()
    }
}

/// A builder for [`UpdateJobPriorityOutput`](crate::operation::update_job_priority::UpdateJobPriorityOutput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct UpdateJobPriorityOutputBuilder {
    pub(crate) job_id: ::std::option::Option<::std::string::String>,
    pub(crate) priority: ::std::option::Option<i32>,
    _request_id: Option<String>,
}
impl UpdateJobPriorityOutputBuilder {
    /// <p>The ID for the job whose priority Amazon S3 updated.</p>
    pub fn job_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.job_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The ID for the job whose priority Amazon S3 updated.</p>
    pub fn set_job_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.job_id = input;
        self
    }
    /// <p>The ID for the job whose priority Amazon S3 updated.</p>
    pub fn get_job_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.job_id
    }
    /// <p>The new priority assigned to the specified job.</p>
    pub fn priority(mut self, input: i32) -> Self {
        self.priority = ::std::option::Option::Some(input);
        self
    }
    /// <p>The new priority assigned to the specified job.</p>
    pub fn set_priority(mut self, input: ::std::option::Option<i32>) -> Self {
        self.priority = input;
        self
    }
    /// <p>The new priority assigned to the specified job.</p>
    pub fn get_priority(&self) -> &::std::option::Option<i32> {
        &self.priority
    }
    pub(crate) fn _set_request_id(mut self, request_id: Option<String>) -> Self {
        self._request_id = request_id;
        self
    }
    /// Consumes the builder and constructs a [`UpdateJobPriorityOutput`](crate::operation::update_job_priority::UpdateJobPriorityOutput).
    pub fn build(self) -> crate::operation::update_job_priority::UpdateJobPriorityOutput {
        crate::operation::update_job_priority::UpdateJobPriorityOutput {
            job_id: self.job_id,
            priority: self.priority,
            _request_id: self._request_id,
        }
    }
}
