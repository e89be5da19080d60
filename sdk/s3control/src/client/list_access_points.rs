/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`ListAccessPoints`](crate::operation::list_access_points::builders::ListAccessPointsFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`account_id`](crate::operation::list_access_points::builders::ListAccessPointsFluentBuilder::account_id) / [`set_account_id`](crate::operation::list_access_points::builders::ListAccessPointsFluentBuilder::set_account_id): <br>**required: true**
    ///   - [`bucket`](crate::operation::list_access_points::builders::ListAccessPointsFluentBuilder::bucket) / [`set_bucket`](crate::operation::list_access_points::builders::ListAccessPointsFluentBuilder::set_bucket):
    ///   - [`next_token`](crate::operation::list_access_points::builders::ListAccessPointsFluentBuilder::next_token) / [`set_next_token`](crate::operation::list_access_points::builders::ListAccessPointsFluentBuilder::set_next_token):
    ///   - [`max_results`](crate::operation::list_access_points::builders::ListAccessPointsFluentBuilder::max_results) / [`set_max_results`](crate::operation::list_access_points::builders::ListAccessPointsFluentBuilder::set_max_results):
    /// - On success, responds with [`ListAccessPointsOutput`](crate::operation::list_access_points::ListAccessPointsOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn list_access_points(&self) -> crate::operation::list_access_points::builders::ListAccessPointsFluentBuilder {
        crate::operation::list_access_points::builders::ListAccessPointsFluentBuilder::new(self.handle.clone())
    }
}
