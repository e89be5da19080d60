/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::get_revision::_get_revision_output::GetRevisionOutputBuilder;

pub use crate::operation::get_revision::_get_revision_input::GetRevisionInputBuilder;

/// Fluent builder constructing a request to `GetRevision`.
///
/// <p>Returns a revision data object for a specified document ID and block address.</p>
#[derive(::std::clone::Clone, ::std::fmt::Debug)]
pub struct GetRevisionFluentBuilder {
    handle: ::std::sync::Arc<crate::client::Handle>,
    inner: crate::operation::get_revision::builders::GetRevisionInputBuilder,
}
impl GetRevisionFluentBuilder {
    /// Creates a new `GetRevisionFluentBuilder`.
    pub(crate) fn new(handle: ::std::sync::Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }
    /// Access the GetRevision as a reference.
    pub fn as_input(&self) -> &crate::operation::get_revision::builders::GetRevisionInputBuilder {
        &self.inner
    }
    /// Sends the request and returns the response.
    ///
    /// If an error occurs, an `SdkError` will be returned with additional details that
    /// can be matched against.
    pub fn send(
        self,
    ) -> ::std::result::Result<
        crate::operation::get_revision::GetRevisionOutput,
        ::aws_smithy_runtime::client::result::SdkError<crate::Error>,
    > {
        let input = self
            .inner
            .build()
            .map_err(::aws_smithy_runtime::client::result::SdkError::construction_failure)?;
        self.handle.invoke::<crate::operation::get_revision::GetRevision>(&input)
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
    /// <p>The block location of the document revision to be verified.</p>
    pub fn block_address(mut self, input: crate::types::ValueHolder) -> Self {
        self.inner = self.inner.block_address(input);
        self
    }
    /// <p>The block location of the document revision to be verified.</p>
    pub fn set_block_address(mut self, input: ::std::option::Option<crate::types::ValueHolder>) -> Self {
        self.inner = self.inner.set_block_address(input);
        self
    }
    /// <p>The block location of the document revision to be verified.</p>
    pub fn get_block_address(&self) -> &::std::option::Option<crate::types::ValueHolder> {
        self.inner.get_block_address()
    }
    /// <p>The UUID (represented in Base62-encoded text) of the document to be verified.</p>
    pub fn document_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.inner = self.inner.document_id(input);
        self
    }
    /// <p>The UUID (represented in Base62-encoded text) of the document to be verified.</p>
    pub fn set_document_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.inner = self.inner.set_document_id(input);
        self
    }
    /// <p>The UUID (represented in Base62-encoded text) of the document to be verified.</p>
    pub fn get_document_id(&self) -> &::std::option::Option<::std::string::String> {
        self.inner.get_document_id()
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
