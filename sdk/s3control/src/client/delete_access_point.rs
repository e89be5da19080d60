/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`DeleteAccessPoint`](crate::operation::delete_access_point::builders::DeleteAccessPointFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`account_id`](crate::operation::delete_access_point::builders::DeleteAccessPointFluentBuilder::account_id) / [`set_account_id`](crate::operation::delete_access_point::builders::DeleteAccessPointFluentBuilder::set_account_id): <br>**required: true**
    ///   - [`name`](crate::operation::delete_access_point::builders::DeleteAccessPointFluentBuilder::name) / [`set_name`](crate::operation::delete_access_point::builders::DeleteAccessPointFluentBuilder::set_name): <br>**required: true**
    /// - On success, responds with [`DeleteAccessPointOutput`](crate::operation::delete_access_point::DeleteAccessPointOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn delete_access_point(&self) -> crate::operation::delete_access_point::builders::DeleteAccessPointFluentBuilder {
        crate::operation::delete_access_point::builders::DeleteAccessPointFluentBuilder::new(self.handle.clone())
    }
}
