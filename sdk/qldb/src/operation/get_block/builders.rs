/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::get_block::_get_block_output::GetBlockOutputBuilder;

pub use crate::operation::get_block::_get_block_input::GetBlockInputBuilder;

/// Fluent builder constructing a request to `GetBlock`.
///
/// <p>Returns a block object at a specified address in a journal.</p>
#[derive(::std::clone::Clone, ::std::fmt::Debug)]
pub struct GetBlockFluentBuilder {
    handle: ::std::sync::Arc<crate::client::Handle>,
    inner: crate::operation::get_block::builders::GetBlockInputBuilder,
}
impl GetBlockFluentBuilder {
    /// Creates a new `GetBlockFluentBuilder`.
    pub(crate) fn new(handle: ::std::sync::Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }
    /// Access the GetBlock as a reference.
    pub fn as_input(&self) -> &crate::operation::get_block::builders::GetBlockInputBuilder {
        &self.inner
    }
    /// Sends the request and returns the response.
    ///
    /// If an error occurs, an `SdkError` will be returned with additional details that
    /// can be matched against.
    pub fn send(
        self,
    ) -> ::std::result::Result<
        crate::operation::get_block::GetBlockOutput,
        ::aws_smithy_runtime::client::result::SdkError<crate::Error>,
    > {
        let input = self
            .inner
            .build()
            .map_err(::aws_smithy_runtime::client::result::SdkError::construction_failure)?;
        self.handle.invoke::<crate::operation::get_block::GetBlock>(&input)
    }
    /// <p>The name of the ledger.</p>
    pub fn name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.inner = self.inner.name(input);
        self
    }
    /// <p>The name of the ledger.</p>
    pub fn set_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.inner = self.inner.set_name(input);
        self
    }
    /// <p>The name of the ledger.</p>
    pub fn get_name(&self) -> &::std::option::Option<::std::string::String> {
        self.inner.get_name()
    }
    /// <p>The location of the block that you want to request.</p>
    pub fn block_address(mut self, input: crate::types::ValueHolder) -> Self {
        self.inner = self.inner.block_address(input);
        self
    }
    /// <p>The location of the block that you want to request.</p>
    pub fn set_block_address(mut self, input: ::std::option::Option<crate::types::ValueHolder>) -> Self {
        self.inner = self.inner.set_block_address(input);
        self
    }
    /// <p>The location of the block that you want to request.</p>
    pub fn get_block_address(&self) -> &::std::option::Option<crate::types::ValueHolder> {
        self.inner.get_block_address()
    }
    /// <p>The latest block location covered by the digest for which to request a proof.</p>
    pub fn digest_tip_address(mut self, input: crate::types::ValueHolder) -> Self {
        self.inner = self.inner.digest_tip_address(input);
        self
    }
    /// <p>The latest block location covered by the digest for which to request a proof.</p>
    pub fn set_digest_tip_address(mut self, input: ::std::option::Option<crate::types::ValueHolder>) -> Self {
        self.inner = self.inner.set_digest_tip_address(input);
        self
    }
    /// <p>The latest block location covered by the digest for which to request a proof.</p>
    pub fn get_digest_tip_address(&self) -> &::std::option::Option<crate::types::ValueHolder> {
        self.inner.get_digest_tip_address()
    }
}
