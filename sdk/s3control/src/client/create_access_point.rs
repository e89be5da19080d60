/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`CreateAccessPoint`](crate::operation::create_access_point::builders::CreateAccessPointFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`account_id`](crate::operation::create_access_point::builders::CreateAccessPointFluentBuilder::account_id) / [`set_account_id`](crate::operation::create_access_point::builders::CreateAccessPointFluentBuilder::set_account_id): <br>**required: true**
    ///   - [`name`](crate::operation::create_access_point::builders::CreateAccessPointFluentBuilder::name) / [`set_name`](crate::operation::create_access_point::builders::CreateAccessPointFluentBuilder::set_name): <br>**required: true**
    ///   - [`bucket`](crate::operation::create_access_point::builders::CreateAccessPointFluentBuilder::bucket) / [`set_bucket`](crate::operation::create_access_point::builders::CreateAccessPointFluentBuilder::set_bucket): <br>**required: true**
    ///   - [`vpc_configuration`](crate::operation::create_access_point::builders::CreateAccessPointFluentBuilder::vpc_configuration) / [`set_vpc_configuration`](crate::operation::create_access_point::builders::CreateAccessPointFluentBuilder::set_vpc_configuration):
    ///   - [`public_access_block_configuration`](crate::operation::create_access_point::builders::CreateAccessPointFluentBuilder::public_access_block_configuration) / [`set_public_access_block_configuration`](crate::operation::create_access_point::builders::CreateAccessPointFluentBuilder::set_public_access_block_configuration):
    /// - On success, responds with [`CreateAccessPointOutput`](crate::operation::create_access_point::CreateAccessPointOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn create_access_point(&self) -> crate::operation::create_access_point::builders::CreateAccessPointFluentBuilder {
        crate::operation::create_access_point::builders::CreateAccessPointFluentBuilder::new(self.handle.clone())
    }
}
