/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::update_job_status::_update_job_status_output::UpdateJobStatusOutputBuilder;

pub use crate::operation::update_job_status::_update_job_status_input::UpdateJobStatusInputBuilder;

/// Fluent builder constructing a request to `UpdateJobStatus`.
///
/// <p>Updates the status for the specified job.</p>
#[derive(::std::clone::Clone, ::std::fmt::Debug)]
pub struct UpdateJobStatusFluentBuilder {
    handle: ::std::sync::Arc<crate::client::Handle>,
    inner: crate::operation::update_job_status::builders::UpdateJobStatusInputBuilder,
}
impl UpdateJobStatusFluentBuilder {
    /// Creates a new `UpdateJobStatusFluentBuilder`.
    pub(crate) fn new(handle: ::std::sync::Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }
    /// Access the UpdateJobStatus as a reference.
    pub fn as_input(&self) -> &crate::operation::update_job_status::builders::UpdateJobStatusInputBuilder {
        &self.inner
    }
    /// Sends the request and returns the response.
    ///
    /// If an error occurs, an `SdkError` will be returned with additional details that
    /// can be matched against.
    pub fn send(
        self,
    ) -> ::std::result::Result<
        crate::operation::update_job_status::UpdateJobStatusOutput,
        ::aws_smithy_runtime::client::result::SdkError<crate::Error>,
    > {
        let input = self
            .inner
            .build()
            .map_err(::aws_smithy_runtime::client::result::SdkError::construction_failure)?;
        self.handle.invoke::<crate::operation::update_job_status::UpdateJobStatus>(&input)
    }
    /// <p>The account ID for the owner of the resource.</p>
    pub fn account_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.inner = self.inner.account_id(input);
        self
    }
    /// <p>The account ID for the owner of the resource.</p>
    pub fn set_account_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.inner = self.inner.set_account_id(input);
        self
    }
    /// <p>The account ID for the owner of the resource.</p>
    pub fn get_account_id(&self) -> &::std::option::Option<::std::string::String> {
        self.inner.get_account_id()
    }
    /// <p>The ID of the job whose status you want to update.</p>
    pub fn job_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.inner = self.inner.job_id(input);
        self
    }
    /// <p>The ID of the job whose status you want to update.</p>
    pub fn set_job_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.inner = self.inner.set_job_id(input);
        self
    }
    /// <p>The ID of the job whose status you want to update.</p>
    pub fn get_job_id(&self) -> &::std::option::Option<::std::string::String> {
        self.inner.get_job_id()
    }
    /// <p>The status that you want to move the specified job to.</p>
    pub fn requested_job_status(mut self, input: impl ::std::convert::Into<crate::types::RequestedJobStatus>) -> Self {
        self.inner = self.inner.requested_job_status(input);
        self
    }
    /// <p>The status that you want to move the specified job to.</p>
    pub fn set_requested_job_status(mut self, input: ::std::option::Option<crate::types::RequestedJobStatus>) -> Self {
        self.inner = self.inner.set_requested_job_status(input);
        self
    }
    /// <p>The status that you want to move the specified job to.</p>
    pub fn get_requested_job_status(&self) -> &::std::option::Option<crate::types::RequestedJobStatus> {
        self.inner.get_requested_job_status()
    }
    /// <p>A description of the reason why you want to change the specified job's status.</p>
    pub fn status_update_reason(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.inner = self.inner.status_update_reason(input);
        self
    }
    /// <p>A description of the reason why you want to change the specified job's status.</p>
    pub fn set_status_update_reason(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.inner = self.inner.set_status_update_reason(input);
        self
    }
    /// <p>A description of the reason why you want to change the specified job's status.</p>
    pub fn get_status_update_reason(&self) -> &::std::option::Option<::std::string::String> {
        self.inner.get_status_update_reason()
    }
}
