/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct GetBlockOutput {
    /// <p>The block data object in Amazon Ion format.</p>
    pub block: ::std::option::Option<crate::types::ValueHolder>,
    /// <p>The proof object in Amazon Ion format returned by a <code>GetBlock</code> request.</p>
    pub proof: ::std::option::Option<crate::types::ValueHolder>,
    _request_id: Option<String>,
}
impl GetBlockOutput {
    /// <p>The block data object in Amazon Ion format.</p>
    pub fn block(&self) -> ::std::option::Option<&crate::types::ValueHolder> {
        self.block.as_ref()
    }
    /// <p>The proof object in Amazon Ion format returned by a <code>GetBlock</code> request.</p>
    pub fn proof(&self) -> ::std::option::Option<&crate::types::ValueHolder> {
        self.proof.as_ref()
    }
}
impl ::aws_types::request_id::RequestId for GetBlockOutput {
    fn request_id(&self) -> Option<&str> {
        self._request_id.as_deref()
    }
}
impl GetBlockOutput {
    /// Creates a new builder-style object to manufacture [`GetBlockOutput`](crate::operation::get_block::GetBlockOutput).
    pub fn builder() -> crate::operation::get_block::builders::GetBlockOutputBuilder {
        crate::operation::get_block::builders::GetBlockOutputBuilder::default()
    }
}

/// A builder for [`GetBlockOutput`](crate::operation::get_block::GetBlockOutput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct GetBlockOutputBuilder {
    pub(crate) block: ::std::option::Option<crate::types::ValueHolder>,
    pub(crate) proof: ::std::option::Option<crate::types::ValueHolder>,
    _request_id: Option<String>,
}
impl GetBlockOutputBuilder {
    /// <p>The block data object in Amazon Ion format.</p>
    pub fn block(mut self, input: crate::types::ValueHolder) -> Self {
        self.block = ::std::option::Option::Some(input);
        self
    }
    /// <p>The block data object in Amazon Ion format.</p>
    pub fn set_block(mut self, input: ::std::option::Option<crate::types::ValueHolder>) -> Self {
        self.block = input;
        self
    }
    /// <p>The block data object in Amazon Ion format.</p>
    pub fn get_block(&self) -> &::std::option::Option<crate::types::ValueHolder> {
        &self.block
    }
    /// <p>The proof object in Amazon Ion format returned by a <code>GetBlock</code> request.</p>
    pub fn proof(mut self, input: crate::types::ValueHolder) -> Self {
        self.proof = ::std::option::Option::Some(input);
        self
    }
    /// <p>The proof object in Amazon Ion format returned by a <code>GetBlock</code> request.</p>
    pub fn set_proof(mut self, input: ::std::option::Option<crate::types::ValueHolder>) -> Self {
        self.proof = input;
        self
    }
    /// <p>The proof object in Amazon Ion format returned by a <code>GetBlock</code> request.</p>
    pub fn get_proof(&self) -> &::std::option::Option<crate::types::ValueHolder> {
        &self.proof
    }
    pub(crate) fn _set_request_id(mut self, request_id: Option<String>) -> Self {
        self._request_id = request_id;
        self
    }
    /// Consumes the builder and constructs a [`GetBlockOutput`](crate::operation::get_block::GetBlockOutput).
    pub fn build(self) -> crate::operation::get_block::GetBlockOutput {
        crate::operation::get_block::GetBlockOutput {
            block: self.block,
            proof: self.proof,
            _request_id: self._request_id,
        }
    }
}
