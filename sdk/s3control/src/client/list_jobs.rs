/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`ListJobs`](crate::operation::list_jobs::builders::ListJobsFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`account_id`](crate::operation::list_jobs::builders::ListJobsFluentBuilder::account_id) / [`set_account_id`](crate::operation::list_jobs::builders::ListJobsFluentBuilder::set_account_id): <br>**required: true**
    ///   - [`job_statuses`](crate::operation::list_jobs::builders::ListJobsFluentBuilder::job_statuses) / [`set_job_statuses`](crate::operation::list_jobs::builders::ListJobsFluentBuilder::set_job_statuses):
    ///   - [`next_token`](crate::operation::list_jobs::builders::ListJobsFluentBuilder::next_token) / [`set_next_token`](crate::operation::list_jobs::builders::ListJobsFluentBuilder::set_next_token):
    ///   - [`max_results`](crate::operation::list_jobs::builders::ListJobsFluentBuilder::max_results) / [`set_max_results`](crate::operation::list_jobs::builders::ListJobsFluentBuilder::set_max_results):
    /// - On success, responds with [`ListJobsOutput`](crate::operation::list_jobs::ListJobsOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn list_jobs(&self) -> crate::operation::list_jobs::builders::ListJobsFluentBuilder {
        crate::operation::list_jobs::builders::ListJobsFluentBuilder::new(self.handle.clone())
    }
}
