/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`PutJobTagging`](crate::operation::put_job_tagging::builders::PutJobTaggingFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`account_id`](crate::operation::put_job_tagging::builders::PutJobTaggingFluentBuilder::account_id) / [`set_account_id`](crate::operation::put_job_tagging::builders::PutJobTaggingFluentBuilder::set_account_id): <br>**required: true**
    ///   - [`job_id`](crate::operation::put_job_tagging::builders::PutJobTaggingFluentBuilder::job_id) / [`set_job_id`](crate::operation::put_job_tagging::builders::PutJobTaggingFluentBuilder::set_job_id): <br>**required: true**
    ///   - [`tags`](crate::operation::put_job_tagging::builders::PutJobTaggingFluentBuilder::tags) / [`set_tags`](crate::operation::put_job_tagging::builders::PutJobTaggingFluentBuilder::set_tags): <br>**required: true**
    /// - On success, responds with [`PutJobTaggingOutput`](crate::operation::put_job_tagging::PutJobTaggingOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn put_job_tagging(&self) -> crate::operation::put_job_tagging::builders::PutJobTaggingFluentBuilder {
        crate::operation::put_job_tagging::builders::PutJobTaggingFluentBuilder::new(self.handle.clone())
    }
}
