/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`DeleteJobTagging`](crate::operation::delete_job_tagging::builders::DeleteJobTaggingFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`account_id`](crate::operation::delete_job_tagging::builders::DeleteJobTaggingFluentBuilder::account_id) / [`set_account_id`](crate::operation::delete_job_tagging::builders::DeleteJobTaggingFluentBuilder::set_account_id): <br>**required: true**
    ///   - [`job_id`](crate::operation::delete_job_tagging::builders::DeleteJobTaggingFluentBuilder::job_id) / [`set_job_id`](crate::operation::delete_job_tagging::builders::DeleteJobTaggingFluentBuilder::set_job_id): <br>**required: true**
    /// - On success, responds with [`DeleteJobTaggingOutput`](crate::operation::delete_job_tagging::DeleteJobTaggingOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn delete_job_tagging(&self) -> crate::operation::delete_job_tagging::builders::DeleteJobTaggingFluentBuilder {
        crate::operation::delete_job_tagging::builders::DeleteJobTaggingFluentBuilder::new(self.handle.clone())
    }
}
