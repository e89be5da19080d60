/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::create_job::_create_job_output::CreateJobOutputBuilder;

pub use crate::operation::create_job::_create_job_input::CreateJobInputBuilder;

/// Fluent builder constructing a request to `CreateJob`.
///
/// <p>Creates an S3 Batch Operations job.</p>
#[derive(::std::clone::Clone, ::std::fmt::Debug)]
pub struct CreateJobFluentBuilder {
    handle: ::std::sync::Arc<crate::client::Handle>,
    inner: crate::operation::create_job::builders::CreateJobInputBuilder,
}
impl CreateJobFluentBuilder {
    /// Creates a new `CreateJobFluentBuilder`.
    pub(crate) fn new(handle: ::std::sync::Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }
    /// Access the CreateJob as a reference.
    pub fn as_input(&self) -> &crate::operation::create_job::builders::CreateJobInputBuilder {
        &self.inner
    }
    /// Sends the request and returns the response.
    ///
    /// If an error occurs, an `SdkError` will be returned with additional details that
    /// can be matched against.
    ///
    /// An unset `client_request_token` is filled in from the client's
    /// [`IdempotencyTokenProvider`](crate::idempotency_token::IdempotencyTokenProvider).
    pub fn send(
        self,
    ) -> ::std::result::Result<
        crate::operation::create_job::CreateJobOutput,
        ::aws_smithy_runtime::client::result::SdkError<crate::Error>,
    > {
        let mut inner = self.inner;
        if inner.get_client_request_token().is_none() {
            let token = self.handle.conf.idempotency_token_provider().make_idempotency_token();
            ::tracing::trace!(token = %token, "filled in missing client_request_token");
            inner = inner.client_request_token(token);
        }
        let input = inner
            .build()
            .map_err(::aws_smithy_runtime::client::result::SdkError::construction_failure)?;
        self.handle.invoke::<crate::operation::create_job::CreateJob>(&input)
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
    /// <p>Indicates whether confirmation is required before Amazon S3 runs the job.</p>
    pub fn confirmation_required(mut self, input: bool) -> Self {
        self.inner = self.inner.confirmation_required(input);
        self
    }
    /// <p>Indicates whether confirmation is required before Amazon S3 runs the job.</p>
    pub fn set_confirmation_required(mut self, input: ::std::option::Option<bool>) -> Self {
        self.inner = self.inner.set_confirmation_required(input);
        self
    }
    /// <p>Indicates whether confirmation is required before Amazon S3 runs the job.</p>
    pub fn get_confirmation_required(&self) -> &::std::option::Option<bool> {
        self.inner.get_confirmation_required()
    }
    /// <p>The action that you want this job to perform on every object listed in the manifest.</p>
    pub fn operation(mut self, input: crate::types::JobOperation) -> Self {
        self.inner = self.inner.operation(input);
        self
    }
    /// <p>The action that you want this job to perform on every object listed in the manifest.</p>
    pub fn set_operation(mut self, input: ::std::option::Option<crate::types::JobOperation>) -> Self {
        self.inner = self.inner.set_operation(input);
        self
    }
    /// <p>The action that you want this job to perform on every object listed in the manifest.</p>
    pub fn get_operation(&self) -> &::std::option::Option<crate::types::JobOperation> {
        self.inner.get_operation()
    }
    /// <p>Configuration parameters for the optional job-completion report.</p>
    pub fn report(mut self, input: crate::types::JobReport) -> Self {
        self.inner = self.inner.report(input);
        self
    }
    /// <p>Configuration parameters for the optional job-completion report.</p>
    pub fn set_report(mut self, input: ::std::option::Option<crate::types::JobReport>) -> Self {
        self.inner = self.inner.set_report(input);
        self
    }
    /// <p>Configuration parameters for the optional job-completion report.</p>
    pub fn get_report(&self) -> &::std::option::Option<crate::types::JobReport> {
        self.inner.get_report()
    }
    /// <p>An idempotency token to ensure that you don't accidentally submit the same request twice.</p>
    pub fn client_request_token(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.inner = self.inner.client_request_token(input);
        self
    }
    /// <p>An idempotency token to ensure that you don't accidentally submit the same request twice.</p>
    pub fn set_client_request_token(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.inner = self.inner.set_client_request_token(input);
        self
    }
    /// <p>An idempotency token to ensure that you don't accidentally submit the same request twice.</p>
    pub fn get_client_request_token(&self) -> &::std::option::Option<::std::string::String> {
        self.inner.get_client_request_token()
    }
    /// <p>Configuration parameters for the manifest.</p>
    pub fn manifest(mut self, input: crate::types::JobManifest) -> Self {
        self.inner = self.inner.manifest(input);
        self
    }
    /// <p>Configuration parameters for the manifest.</p>
    pub fn set_manifest(mut self, input: ::std::option::Option<crate::types::JobManifest>) -> Self {
        self.inner = self.inner.set_manifest(input);
        self
    }
    /// <p>Configuration parameters for the manifest.</p>
    pub fn get_manifest(&self) -> &::std::option::Option<crate::types::JobManifest> {
        self.inner.get_manifest()
    }
    /// <p>A description for this job.</p>
    pub fn description(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.inner = self.inner.description(input);
        self
    }
    /// <p>A description for this job.</p>
    pub fn set_description(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.inner = self.inner.set_description(input);
        self
    }
    /// <p>A description for this job.</p>
    pub fn get_description(&self) -> &::std::option::Option<::std::string::String> {
        self.inner.get_description()
    }
    /// <p>The numerical priority for this job. Higher numbers indicate higher priority.</p>
    pub fn priority(mut self, input: i32) -> Self {
        self.inner = self.inner.priority(input);
        self
    }
    /// <p>The numerical priority for this job. Higher numbers indicate higher priority.</p>
    pub fn set_priority(mut self, input: ::std::option::Option<i32>) -> Self {
        self.inner = self.inner.set_priority(input);
        self
    }
    /// <p>The numerical priority for this job. Higher numbers indicate higher priority.</p>
    pub fn get_priority(&self) -> &::std::option::Option<i32> {
        self.inner.get_priority()
    }
    /// <p>The Amazon Resource Name (ARN) for the Identity and Access Management (IAM) role that Batch Operations will use to run this job's action on every object in the manifest.</p>
    pub fn role_arn(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.inner = self.inner.role_arn(input);
        self
    }
    /// <p>The Amazon Resource Name (ARN) for the Identity and Access Management (IAM) role that Batch Operations will use to run this job's action on every object in the manifest.</p>
    pub fn set_role_arn(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.inner = self.inner.set_role_arn(input);
        self
    }
    /// <p>The Amazon Resource Name (ARN) for the Identity and Access Management (IAM) role that Batch Operations will use to run this job's action on every object in the manifest.</p>
    pub fn get_role_arn(&self) -> &::std::option::Option<::std::string::String> {
        self.inner.get_role_arn()
    }
    /// Appends an item to `tags`.
    ///
    /// To override the contents of this collection use [`set_tags`](Self::set_tags).
    ///
    /// <p>A set of tags to associate with the S3 Batch Operations job.</p>
    pub fn tags(mut self, input: crate::types::S3Tag) -> Self {
        self.inner = self.inner.tags(input);
        self
    }
    /// <p>A set of tags to associate with the S3 Batch Operations job.</p>
    pub fn set_tags(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::S3Tag>>) -> Self {
        self.inner = self.inner.set_tags(input);
        self
    }
    /// <p>A set of tags to associate with the S3 Batch Operations job.</p>
    pub fn get_tags(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::S3Tag>> {
        self.inner.get_tags()
    }
}
