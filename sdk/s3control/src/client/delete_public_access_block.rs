/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`DeletePublicAccessBlock`](crate::operation::delete_public_access_block::builders::DeletePublicAccessBlockFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`account_id`](crate::operation::delete_public_access_block::builders::DeletePublicAccessBlockFluentBuilder::account_id) / [`set_account_id`](crate::operation::delete_public_access_block::builders::DeletePublicAccessBlockFluentBuilder::set_account_id): <br>**required: true**
    /// - On success, responds with [`DeletePublicAccessBlockOutput`](crate::operation::delete_public_access_block::DeletePublicAccessBlockOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn delete_public_access_block(&self) -> crate::operation::delete_public_access_block::builders::DeletePublicAccessBlockFluentBuilder {
        crate::operation::delete_public_access_block::builders::DeletePublicAccessBlockFluentBuilder::new(self.handle.clone())
    }
}
