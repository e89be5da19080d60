/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`GetJobTagging`](crate::operation::get_job_tagging::builders::GetJobTaggingFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`account_id`](crate::operation::get_job_tagging::builders::GetJobTaggingFluentBuilder::account_id) / [`set_account_id`](crate::operation::get_job_tagging::builders::GetJobTaggingFluentBuilder::set_account_id): <br>**required: true**
    ///   - [`job_id`](crate::operation::get_job_tagging::builders::GetJobTaggingFluentBuilder::job_id) / [`set_job_id`](crate::operation::get_job_tagging::builders::GetJobTaggingFluentBuilder::set_job_id): <br>**required: true**
    /// - On success, responds with [`GetJobTaggingOutput`](crate::operation::get_job_tagging::GetJobTaggingOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn get_job_tagging(&self) -> crate::operation::get_job_tagging::builders::GetJobTaggingFluentBuilder {
        crate::operation::get_job_tagging::builders::GetJobTaggingFluentBuilder::new(self.handle.clone())
    }
}
