/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`GetAccessPointPolicy`](crate::operation::get_access_point_policy::builders::GetAccessPointPolicyFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`account_id`](crate::operation::get_access_point_policy::builders::GetAccessPointPolicyFluentBuilder::account_id) / [`set_account_id`](crate::operation::get_access_point_policy::builders::GetAccessPointPolicyFluentBuilder::set_account_id): <br>**required: true**
    ///   - [`name`](crate::operation::get_access_point_policy::builders::GetAccessPointPolicyFluentBuilder::name) / [`set_name`](crate::operation::get_access_point_policy::builders::GetAccessPointPolicyFluentBuilder::set_name): <br>**required: true**
    /// - On success, responds with [`GetAccessPointPolicyOutput`](crate::operation::get_access_point_policy::GetAccessPointPolicyOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn get_access_point_policy(&self) -> crate::operation::get_access_point_policy::builders::GetAccessPointPolicyFluentBuilder {
        crate::operation::get_access_point_policy::builders::GetAccessPointPolicyFluentBuilder::new(self.handle.clone())
    }
}
