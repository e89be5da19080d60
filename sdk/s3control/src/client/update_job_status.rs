/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`UpdateJobStatus`](crate::operation::update_job_status::builders::UpdateJobStatusFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`account_id`](crate::operation::update_job_status::builders::UpdateJobStatusFluentBuilder::account_id) / [`set_account_id`](crate::operation::update_job_status::builders::UpdateJobStatusFluentBuilder::set_account_id): <br>**required: true**
    ///   - [`job_id`](crate::operation::update_job_status::builders::UpdateJobStatusFluentBuilder::job_id) / [`set_job_id`](crate::operation::update_job_status::builders::UpdateJobStatusFluentBuilder::set_job_id): <br>**required: true**
    ///   - [`requested_job_status`](crate::operation::update_job_status::builders::UpdateJobStatusFluentBuilder::requested_job_status) / [`set_requested_job_status`](crate::operation::update_job_status::builders::UpdateJobStatusFluentBuilder::set_requested_job_status): <br>**required: true**
    ///   - [`status_update_reason`](crate::operation::update_job_status::builders::UpdateJobStatusFluentBuilder::status_update_reason) / [`set_status_update_reason`](crate::operation::update_job_status::builders::UpdateJobStatusFluentBuilder::set_status_update_reason):
    /// - On success, responds with [`UpdateJobStatusOutput`](crate::operation::update_job_status::UpdateJobStatusOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn update_job_status(&self) -> crate::operation::update_job_status::builders::UpdateJobStatusFluentBuilder {
        crate::operation::update_job_status::builders::UpdateJobStatusFluentBuilder::new(self.handle.clone())
    }
}
