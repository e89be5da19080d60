/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::delete_job_tagging::_delete_job_tagging_output::DeleteJobTaggingOutputBuilder;

pub use crate::operation::delete_job_tagging::_delete_job_tagging_input::DeleteJobTaggingInputBuilder;

/// Fluent builder constructing a request to `DeleteJobTagging`.
///
/// <p>Removes the entire tag set from the specified S3 Batch Operations job.</p>
#[derive(::std::clone::Clone, ::std::fmt::Debug)]
pub struct DeleteJobTaggingFluentBuilder {
    handle: ::std::sync::Arc<crate::client::Handle>,
    inner: crate::operation::delete_job_tagging::builders::DeleteJobTaggingInputBuilder,
}
impl DeleteJobTaggingFluentBuilder {
    /// Creates a new `DeleteJobTaggingFluentBuilder`.
    pub(crate) fn new(handle: ::std::sync::Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }
    /// Access the DeleteJobTagging as a reference.
    pub fn as_input(&self) -> &crate::operation::delete_job_tagging::builders::DeleteJobTaggingInputBuilder {
        &self.inner
    }
    /// Sends the request and returns the response.
    ///
    /// If an error occurs, an `SdkError` will be returned with additional details that
    /// can be matched against.
    pub fn send(
        self,
    ) -> ::std::result::Result<
        crate::operation::delete_job_tagging::DeleteJobTaggingOutput,
        ::aws_smithy_runtime::client::result::SdkError<crate::Error>,
    > {
        let input = self
            .inner
            .build()
            .map_err(::aws_smithy_runtime::client::result::SdkError::construction_failure)?;
        self.handle.invoke::<crate::operation::delete_job_tagging::DeleteJobTagging>(&input)
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
    /// <p>The ID for the S3 Batch Operations job whose tags you want to delete.</p>
    pub fn job_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.inner = self.inner.job_id(input);
        self
    }
    /// <p>The ID for the S3 Batch Operations job whose tags you want to delete.</p>
    pub fn set_job_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.inner = self.inner.set_job_id(input);
        self
    }
    /// <p>The ID for the S3 Batch Operations job whose tags you want to delete.</p>
    pub fn get_job_id(&self) -> &::std::option::Option<::std::string::String> {
        self.inner.get_job_id()
    }
}
