/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`CreateJob`](crate::operation::create_job::builders::CreateJobFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`account_id`](crate::operation::create_job::builders::CreateJobFluentBuilder::account_id) / [`set_account_id`](crate::operation::create_job::builders::CreateJobFluentBuilder::set_account_id): <br>**required: true**
    ///   - [`confirmation_required`](crate::operation::create_job::builders::CreateJobFluentBuilder::confirmation_required) / [`set_confirmation_required`](crate::operation::create_job::builders::CreateJobFluentBuilder::set_confirmation_required):
    ///   - [`operation`](crate::operation::create_job::builders::CreateJobFluentBuilder::operation) / [`set_operation`](crate::operation::create_job::builders::CreateJobFluentBuilder::set_operation): <br>**required: true**
    ///   - [`report`](crate::operation::create_job::builders::CreateJobFluentBuilder::report) / [`set_report`](crate::operation::create_job::builders::CreateJobFluentBuilder::set_report): <br>**required: true**
    ///   - [`client_request_token`](crate::operation::create_job::builders::CreateJobFluentBuilder::client_request_token) / [`set_client_request_token`](crate::operation::create_job::builders::CreateJobFluentBuilder::set_client_request_token):
    ///   - [`manifest`](crate::operation::create_job::builders::CreateJobFluentBuilder::manifest) / [`set_manifest`](crate::operation::create_job::builders::CreateJobFluentBuilder::set_manifest): <br>**required: true**
    ///   - [`description`](crate::operation::create_job::builders::CreateJobFluentBuilder::description) / [`set_description`](crate::operation::create_job::builders::CreateJobFluentBuilder::set_description):
    ///   - [`priority`](crate::operation::create_job::builders::CreateJobFluentBuilder::priority) / [`set_priority`](crate::operation::create_job::builders::CreateJobFluentBuilder::set_priority): <br>**required: true**
    ///   - [`role_arn`](crate::operation::create_job::builders::CreateJobFluentBuilder::role_arn) / [`set_role_arn`](crate::operation::create_job::builders::CreateJobFluentBuilder::set_role_arn): <br>**required: true**
    ///   - [`tags`](crate::operation::create_job::builders::CreateJobFluentBuilder::tags) / [`set_tags`](crate::operation::create_job::builders::CreateJobFluentBuilder::set_tags):
    /// - On success, responds with [`CreateJobOutput`](crate::operation::create_job::CreateJobOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn create_job(&self) -> crate::operation::create_job::builders::CreateJobFluentBuilder {
        crate::operation::create_job::builders::CreateJobFluentBuilder::new(self.handle.clone())
    }
}
