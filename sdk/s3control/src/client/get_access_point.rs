/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`GetAccessPoint`](crate::operation::get_access_point::builders::GetAccessPointFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`account_id`](crate::operation::get_access_point::builders::GetAccessPointFluentBuilder::account_id) / [`set_account_id`](crate::operation::get_access_point::builders::GetAccessPointFluentBuilder::set_account_id): <br>**required: true**
    ///   - [`name`](crate::operation::get_access_point::builders::GetAccessPointFluentBuilder::name) / [`set_name`](crate::operation::get_access_point::builders::GetAccessPointFluentBuilder::set_name): <br>**required: true**
    /// - On success, responds with [`GetAccessPointOutput`](crate::operation::get_access_point::GetAccessPointOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn get_access_point(&self) -> crate::operation::get_access_point::builders::GetAccessPointFluentBuilder {
        crate::operation::get_access_point::builders::GetAccessPointFluentBuilder::new(self.handle.clone())
    }
}
