/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`GetPublicAccessBlock`](crate::operation::get_public_access_block::builders::GetPublicAccessBlockFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`account_id`](crate::operation::get_public_access_block::builders::GetPublicAccessBlockFluentBuilder::account_id) / [`set_account_id`](crate::operation::get_public_access_block::builders::GetPublicAccessBlockFluentBuilder::set_account_id): <br>**required: true**
    /// - On success, responds with [`GetPublicAccessBlockOutput`](crate::operation::get_public_access_block::GetPublicAccessBlockOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn get_public_access_block(&self) -> crate::operation::get_public_access_block::builders::GetPublicAccessBlockFluentBuilder {
        crate::operation::get_public_access_block::builders::GetPublicAccessBlockFluentBuilder::new(self.handle.clone())
    }
}
