/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`GetBlock`](crate::operation::get_block::builders::GetBlockFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`name`](crate::operation::get_block::builders::GetBlockFluentBuilder::name) / [`set_name`](crate::operation::get_block::builders::GetBlockFluentBuilder::set_name): <br>**required: true**
    ///   - [`block_address`](crate::operation::get_block::builders::GetBlockFluentBuilder::block_address) / [`set_block_address`](crate::operation::get_block::builders::GetBlockFluentBuilder::set_block_address): <br>**required: true**
    ///   - [`digest_tip_address`](crate::operation::get_block::builders::GetBlockFluentBuilder::digest_tip_address) / [`set_digest_tip_address`](crate::operation::get_block::builders::GetBlockFluentBuilder::set_digest_tip_address):
    /// - On success, responds with [`GetBlockOutput`](crate::operation::get_block::GetBlockOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn get_block(&self) -> crate::operation::get_block::builders::GetBlockFluentBuilder {
        crate::operation::get_block::builders::GetBlockFluentBuilder::new(self.handle.clone())
    }
}
