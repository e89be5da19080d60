/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`UpdateJobPriority`](crate::operation::update_job_priority::builders::UpdateJobPriorityFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`account_id`](crate::operation::update_job_priority::builders::UpdateJobPriorityFluentBuilder::account_id) / [`set_account_id`](crate::operation::update_job_priority::builders::UpdateJobPriorityFluentBuilder::set_account_id): <br>**required: true**
    ///   - [`job_id`](crate::operation::update_job_priority::builders::UpdateJobPriorityFluentBuilder::job_id) / [`set_job_id`](crate::operation::update_job_priority::builders::UpdateJobPriorityFluentBuilder::set_job_id): <br>**required: true**
    ///   - [`priority`](crate::operation::update_job_priority::builders::UpdateJobPriorityFluentBuilder::priority) / [`set_priority`](crate::operation::update_job_priority::builders::UpdateJobPriorityFluentBuilder::set_priority): <br>**required: true**
    /// - On success, responds with [`UpdateJobPriorityOutput`](crate::operation::update_job_priority::UpdateJobPriorityOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn update_job_priority(&self) -> crate::operation::update_job_priority::builders::UpdateJobPriorityFluentBuilder {
        crate::operation::update_job_priority::builders::UpdateJobPriorityFluentBuilder::new(self.handle.clone())
    }
}
