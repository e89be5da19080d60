/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`DescribeJob`](crate::operation::describe_job::builders::DescribeJobFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`account_id`](crate::operation::describe_job::builders::DescribeJobFluentBuilder::account_id) / [`set_account_id`](crate::operation::describe_job::builders::DescribeJobFluentBuilder::set_account_id): <br>**required: true**
    ///   - [`job_id`](crate::operation::describe_job::builders::DescribeJobFluentBuilder::job_id) / [`set_job_id`](crate::operation::describe_job::builders::DescribeJobFluentBuilder::set_job_id): <br>**required: true**
    /// - On success, responds with [`DescribeJobOutput`](crate::operation::describe_job::DescribeJobOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn describe_job(&self) -> crate::operation::describe_job::builders::DescribeJobFluentBuilder {
        crate::operation::describe_job::builders::DescribeJobFluentBuilder::new(self.handle.clone())
    }
}
