/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct DeletePublicAccessBlockOutput {
    _request_id: Option<String>,
}
impl ::aws_types::request_id::RequestId for DeletePublicAccessBlockOutput {
    fn request_id(&self) -> Option<&str> {
        self._request_id.as_deref()
    }
}
impl DeletePublicAccessBlockOutput {
    /// Creates a new builder-style object to manufacture [`DeletePublicAccessBlockOutput`](crate::operation::delete_public_access_block::DeletePublicAccessBlockOutput).
    pub fn builder() -> crate::operation::delete_public_access_block::builders::DeletePublicAccessBlockOutputBuilder {
        crate::operation::delete_public_access_block::builders::DeletePublicAccessBlockOutputBuilder::default()
    }
}

/// A builder for [`DeletePublicAccessBlockOutput`](crate::operation::delete_public_access_block::DeletePublicAccessBlockOutput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct DeletePublicAccessBlockOutputBuilder {
    _request_id: Option<String>,
}
impl DeletePublicAccessBlockOutputBuilder {
    pub(crate) fn _set_request_id(mut self, request_id: Option<String>) -> Self {
        self._request_id = request_id;
        self
    }
    /// Consumes the builder and constructs a [`DeletePublicAccessBlockOutput`](crate::operation::delete_public_access_block::DeletePublicAccessBlockOutput).
    pub fn build(self) -> crate::operation::delete_public_access_block::DeletePublicAccessBlockOutput {
        crate::operation::delete_public_access_block::DeletePublicAccessBlockOutput {
            _request_id: self._request_id,
        }
    }
}
