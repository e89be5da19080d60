/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct DeleteAccessPointOutput {
    _request_id: Option<String>,
}
impl ::aws_types::request_id::RequestId for DeleteAccessPointOutput {
    fn request_id(&self) -> Option<&str> {
        self._request_id.as_deref()
    }
}
impl DeleteAccessPointOutput {
    /// Creates a new builder-style object to manufacture [`DeleteAccessPointOutput`](crate::operation::delete_access_point::DeleteAccessPointOutput).
    pub fn builder() -> crate::operation::delete_access_point::builders::DeleteAccessPointOutputBuilder {
        crate::operation::delete_access_point::builders::DeleteAccessPointOutputBuilder::default()
    }
}

/// A builder for [`DeleteAccessPointOutput`](crate::operation::delete_access_point::DeleteAccessPointOutput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct DeleteAccessPointOutputBuilder {
    _request_id: Option<String>,
}
impl DeleteAccessPointOutputBuilder {
    pub(crate) fn _set_request_id(mut self, request_id: Option<String>) -> Self {
        self._request_id = request_id;
        self
    }
    /// Consumes the builder and constructs a [`DeleteAccessPointOutput`](crate::operation::delete_access_point::DeleteAccessPointOutput).
    pub fn build(self) -> crate::operation::delete_access_point::DeleteAccessPointOutput {
        crate::operation::delete_access_point::DeleteAccessPointOutput {
            _request_id: self._request_id,
        }
    }
}
