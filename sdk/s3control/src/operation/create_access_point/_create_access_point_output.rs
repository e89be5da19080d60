/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct CreateAccessPointOutput {
    _request_id: Option<String>,
}
impl ::aws_types::request_id::RequestId for CreateAccessPointOutput {
    fn request_id(&self) -> Option<&str> {
        self._request_id.as_deref()
    }
}
impl CreateAccessPointOutput {
    /// Creates a new builder-style object to manufacture [`CreateAccessPointOutput`](crate::operation::create_access_point::CreateAccessPointOutput).
    pub fn builder() -> crate::operation::create_access_point::builders::CreateAccessPointOutputBuilder {
        crate::operation::create_access_point::builders::CreateAccessPointOutputBuilder::default()
    }
}

/// A builder for [`CreateAccessPointOutput`](crate::operation::create_access_point::CreateAccessPointOutput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct CreateAccessPointOutputBuilder {
    _request_id: Option<String>,
}
impl CreateAccessPointOutputBuilder {
    pub(crate) fn _set_request_id(mut self, request_id: Option<String>) -> Self {
        self._request_id = request_id;
        self
    }
    /// Consumes the builder and constructs a [`CreateAccessPointOutput`](crate::operation::create_access_point::CreateAccessPointOutput).
    pub fn build(self) -> crate::operation::create_access_point::CreateAccessPointOutput {
        crate::operation::create_access_point::CreateAccessPointOutput {
            _request_id: self._request_id,
        }
    }
}
