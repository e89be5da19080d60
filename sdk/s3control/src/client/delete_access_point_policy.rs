/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`DeleteAccessPointPolicy`](crate::operation::delete_access_point_policy::builders::DeleteAccessPointPolicyFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`account_id`](crate::operation::delete_access_point_policy::builders::DeleteAccessPointPolicyFluentBuilder::account_id) / [`set_account_id`](crate::operation::delete_access_point_policy::builders::DeleteAccessPointPolicyFluentBuilder::set_account_id): <br>**required: true**
    ///   - [`name`](crate::operation::delete_access_point_policy::builders::DeleteAccessPointPolicyFluentBuilder::name) / [`set_name`](crate::operation::delete_access_point_policy::builders::DeleteAccessPointPolicyFluentBuilder::set_name): <br>**required: true**
    /// - On success, responds with [`DeleteAccessPointPolicyOutput`](crate::operation::delete_access_point_policy::DeleteAccessPointPolicyOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn delete_access_point_policy(&self) -> crate::operation::delete_access_point_policy::builders::DeleteAccessPointPolicyFluentBuilder {
        crate::operation::delete_access_point_policy::builders::DeleteAccessPointPolicyFluentBuilder::new(self.handle.clone())
    }
}
