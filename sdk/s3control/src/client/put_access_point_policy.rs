/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`PutAccessPointPolicy`](crate::operation::put_access_point_policy::builders::PutAccessPointPolicyFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`account_id`](crate::operation::put_access_point_policy::builders::PutAccessPointPolicyFluentBuilder::account_id) / [`set_account_id`](crate::operation::put_access_point_policy::builders::PutAccessPointPolicyFluentBuilder::set_account_id): <br>**required: true**
    ///   - [`name`](crate::operation::put_access_point_policy::builders::PutAccessPointPolicyFluentBuilder::name) / [`set_name`](crate::operation::put_access_point_policy::builders::PutAccessPointPolicyFluentBuilder::set_name): <br>**required: true**
    ///   - [`policy`](crate::operation::put_access_point_policy::builders::PutAccessPointPolicyFluentBuilder::policy) / [`set_policy`](crate::operation::put_access_point_policy::builders::PutAccessPointPolicyFluentBuilder::set_policy): <br>**required: true**
    /// - On success, responds with [`PutAccessPointPolicyOutput`](crate::operation::put_access_point_policy::PutAccessPointPolicyOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn put_access_point_policy(&self) -> crate::operation::put_access_point_policy::builders::PutAccessPointPolicyFluentBuilder {
        crate::operation::put_access_point_policy::builders::PutAccessPointPolicyFluentBuilder::new(self.handle.clone())
    }
}
