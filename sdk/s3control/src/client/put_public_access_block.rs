/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`PutPublicAccessBlock`](crate::operation::put_public_access_block::builders::PutPublicAccessBlockFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`public_access_block_configuration`](crate::operation::put_public_access_block::builders::PutPublicAccessBlockFluentBuilder::public_access_block_configuration) / [`set_public_access_block_configuration`](crate::operation::put_public_access_block::builders::PutPublicAccessBlockFluentBuilder::set_public_access_block_configuration): <br>**required: true**
    ///   - [`account_id`](crate::operation::put_public_access_block::builders::PutPublicAccessBlockFluentBuilder::account_id) / [`set_account_id`](crate::operation::put_public_access_block::builders::PutPublicAccessBlockFluentBuilder::set_account_id): <br>**required: true**
    /// - On success, responds with [`PutPublicAccessBlockOutput`](crate::operation::put_public_access_block::PutPublicAccessBlockOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn put_public_access_block(&self) -> crate::operation::put_public_access_block::builders::PutPublicAccessBlockFluentBuilder {
        crate::operation::put_public_access_block::builders::PutPublicAccessBlockFluentBuilder::new(self.handle.clone())
    }
}
