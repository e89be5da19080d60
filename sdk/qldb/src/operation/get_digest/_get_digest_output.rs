/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct GetDigestOutput {
    /// <p>The 256-bit hash value representing the digest returned by a <code>GetDigest</code> request.</p>
    pub digest: ::std::option::Option<::aws_smithy_types::Blob>,
    /// <p>The latest block location covered by the digest that you requested.</p>
    pub digest_tip_address: ::std::option::Option<crate::types::ValueHolder>,
    _request_id: Option<String>,
}
impl GetDigestOutput {
    /// <p>The 256-bit hash value representing the digest returned by a <code>GetDigest</code> request.</p>
    pub fn digest(&self) -> ::std::option::Option<&::aws_smithy_types::Blob> {
        self.digest.as_ref()
    }
    /// <p>The latest block location covered by the digest that you requested.</p>
    pub fn digest_tip_address(&self) -> ::std::option::Option<&crate::types::ValueHolder> {
        self.digest_tip_address.as_ref()
    }
}
impl ::aws_types::request_id::RequestId for GetDigestOutput {
    fn request_id(&self) -> Option<&str> {
        self._request_id.as_deref()
    }
}
impl GetDigestOutput {
    /// Creates a new builder-style object to manufacture [`GetDigestOutput`](crate::operation::get_digest::GetDigestOutput).
    pub fn builder() -> crate::operation::get_digest::builders::GetDigestOutputBuilder {
        crate::operation::get_digest::builders::GetDigestOutputBuilder::default()
    }
}

/// A builder for [`GetDigestOutput`](crate::operation::get_digest::GetDigestOutput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct GetDigestOutputBuilder {
    pub(crate) digest: ::std::option::Option<::aws_smithy_types::Blob>,
    pub(crate) digest_tip_address: ::std::option::Option<crate::types::ValueHolder>,
    _request_id: Option<String>,
}
impl GetDigestOutputBuilder {
    /// <p>The 256-bit hash value representing the digest returned by a <code>GetDigest</code> request.</p>
    pub fn digest(mut self, input: ::aws_smithy_types::Blob) -> Self {
        self.digest = ::std::option::Option::Some(input);
        self
    }
    /// <p>The 256-bit hash value representing the digest returned by a <code>GetDigest</code> request.</p>
    pub fn set_digest(mut self, input: ::std::option::Option<::aws_smithy_types::Blob>) -> Self {
        self.digest = input;
        self
    }
    /// <p>The 256-bit hash value representing the digest returned by a <code>GetDigest</code> request.</p>
    pub fn get_digest(&self) -> &::std::option::Option<::aws_smithy_types::Blob> {
        &self.digest
    }
    /// <p>The latest block location covered by the digest that you requested.</p>
    pub fn digest_tip_address(mut self, input: crate::types::ValueHolder) -> Self {
        self.digest_tip_address = ::std::option::Option::Some(input);
        self
    }
    /// <p>The latest block location covered by the digest that you requested.</p>
    pub fn set_digest_tip_address(mut self, input: ::std::option::Option<crate::types::ValueHolder>) -> Self {
        self.digest_tip_address = input;
        self
    }
    /// <p>The latest block location covered by the digest that you requested.</p>
    pub fn get_digest_tip_address(&self) -> &::std::option::Option<crate::types::ValueHolder> {
        &self.digest_tip_address
    }
    pub(crate) fn _set_request_id(mut self, request_id: Option<String>) -> Self {
        self._request_id = request_id;
        self
    }
    /// Consumes the builder and constructs a [`GetDigestOutput`](crate::operation::get_digest::GetDigestOutput).
    pub fn build(self) -> crate::operation::get_digest::GetDigestOutput {
        crate::operation::get_digest::GetDigestOutput {
            digest: self.digest,
            digest_tip_address: self.digest_tip_address,
            _request_id: self._request_id,
        }
    }
}
