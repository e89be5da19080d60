/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`GetRevision`](crate::operation::get_revision::builders::GetRevisionFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`name`](crate::operation::get_revision::builders::GetRevisionFluentBuilder::name) / [`set_name`](crate::operation::get_revision::builders::GetRevisionFluentBuilder::set_name): <br>**required: true**
    ///   - [`block_address`](crate::operation::get_revision::builders::GetRevisionFluentBuilder::block_address) / [`set_block_address`](crate::operation::get_revision::builders::GetRevisionFluentBuilder::set_block_address): <br>**required: true**
    ///   - [`document_id`](crate::operation::get_revision::builders::GetRevisionFluentBuilder::document_id) / [`set_document_id`](crate::operation::get_revision::builders::GetRevisionFluentBuilder::set_document_id): <br>**required: true**
    ///   - [`digest_tip_address`](crate::operation::get_revision::builders::GetRevisionFluentBuilder::digest_tip_address) / [`set_digest_tip_address`](crate::operation::get_revision::builders::GetRevisionFluentBuilder::set_digest_tip_address):
    /// - On success, responds with [`GetRevisionOutput`](crate::operation::get_revision::GetRevisionOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn get_revision(&self) -> crate::operation::get_revision::builders::GetRevisionFluentBuilder {
        crate::operation::get_revision::builders::GetRevisionFluentBuilder::new(self.handle.clone())
    }
}
