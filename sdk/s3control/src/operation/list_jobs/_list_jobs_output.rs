/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct ListJobsOutput {
    /// <p>If the <code>List Jobs</code> request produced more than the maximum number of results, you can pass this value into a subsequent <code>List Jobs</code> request in order to retrieve the next page of results.</p>
    pub next_token: ::std::option::Option<::std::string::String>,
    /// <p>The list of current jobs and jobs that have ended within the last 30 days.</p>
    pub jobs: ::std::option::Option<::std::vec::Vec<crate::types::JobListDescriptor>>,
    _request_id: Option<String>,
}
impl ListJobsOutput {
    /// <p>If the <code>List Jobs</code> request produced more than the maximum number of results, you can pass this value into a subsequent <code>List Jobs</code> request in order to retrieve the next page of results.</p>
    pub fn next_token(&self) -> ::std::option::Option<&str> {
        self.next_token.as_deref()
    }
    /// <p>The list of current jobs and jobs that have ended within the last 30 days.</p>
    ///
    /// An unset list is distinct from an empty one.
    pub fn jobs(&self) -> ::std::option::Option<&[crate::types::JobListDescriptor]> {
        self.jobs.as_deref()
    }
}
impl ::aws_types::request_id::RequestId for ListJobsOutput {
    fn request_id(&self) -> Option<&str> {
        self._request_id.as_deref()
    }
}
impl ListJobsOutput {
    /// Creates a new builder-style object to manufacture [`ListJobsOutput`](crate::operation::list_jobs::ListJobsOutput).
    pub fn builder() -> crate::operation::list_jobs::builders::ListJobsOutputBuilder {
        crate::operation::list_jobs::builders::ListJobsOutputBuilder::default()
    }
}

/// A builder for [`ListJobsOutput`](crate::operation::list_jobs::ListJobsOutput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct ListJobsOutputBuilder {
    pub(crate) next_token: ::std::option::Option<::std::string::String>,
    pub(crate) jobs: ::std::option::Option<::std::vec::Vec<crate::types::JobListDescriptor>>,
    _request_id: Option<String>,
}
impl ListJobsOutputBuilder {
    /// <p>If the <code>List Jobs</code> request produced more than the maximum number of results, you can pass this value into a subsequent <code>List Jobs</code> request in order to retrieve the next page of results.</p>
    pub fn next_token(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.next_token = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>If the <code>List Jobs</code> request produced more than the maximum number of results, you can pass this value into a subsequent <code>List Jobs</code> request in order to retrieve the next page of results.</p>
    pub fn set_next_token(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.next_token = input;
        self
    }
    /// <p>If the <code>List Jobs</code> request produced more than the maximum number of results, you can pass this value into a subsequent <code>List Jobs</code> request in order to retrieve the next page of results.</p>
    pub fn get_next_token(&self) -> &::std::option::Option<::std::string::String> {
        &self.next_token
    }
    /// Appends an item to `jobs`.
    ///
    /// To override the contents of this collection use [`set_jobs`](Self::set_jobs).
    ///
    /// <p>The list of current jobs and jobs that have ended within the last 30 days.</p>
    pub fn jobs(mut self, input: crate::types::JobListDescriptor) -> Self {
        let mut v = self.jobs.unwrap_or_default();
        v.push(input);
        self.jobs = ::std::option::Option::Some(v);
        self
    }
    /// <p>The list of current jobs and jobs that have ended within the last 30 days.</p>
    pub fn set_jobs(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::JobListDescriptor>>) -> Self {
        self.jobs = input;
        self
    }
    /// <p>The list of current jobs and jobs that have ended within the last 30 days.</p>
    pub fn get_jobs(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::JobListDescriptor>> {
        &self.jobs
    }
    pub(crate) fn _set_request_id(mut self, request_id: Option<String>) -> Self {
        self._request_id = request_id;
        self
    }
    /// Consumes the builder and constructs a [`ListJobsOutput`](crate::operation::list_jobs::ListJobsOutput).
    pub fn build(self) -> crate::operation::list_jobs::ListJobsOutput {
        crate::operation::list_jobs::ListJobsOutput {
            next_token: self.next_token,
            jobs: self.jobs,
            _request_id: self._request_id,
        }
    }
}
