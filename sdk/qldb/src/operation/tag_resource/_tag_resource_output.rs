/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct TagResourceOutput {
    _request_id: Option<String>,
}
impl ::aws_types::request_id::RequestId for TagResourceOutput {
    fn request_id(&self) -> Option<&str> {
        self._request_id.as_deref()
    }
}
impl TagResourceOutput {
    /// Creates a new builder-style object to manufacture [`TagResourceOutput`](crate::operation::tag_resource::TagResourceOutput).
    pub fn builder() -> crate::operation::tag_resource::builders::TagResourceOutputBuilder {
        crate::operation::tag_resource::builders::TagResourceOutputBuilder::default()
    }
}

/// A builder for [`TagResourceOutput`](crate::operation::tag_resource::TagResourceOutput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct TagResourceOutputBuilder {
    _request_id: Option<String>,
}
impl TagResourceOutputBuilder {
    pub(crate) fn _set_request_id(mut self, request_id: Option<String>) -> Self {
        self._request_id = request_id;
        self
    }
    /// Consumes the builder and constructs a [`TagResourceOutput`](crate::operation::tag_resource::TagResourceOutput).
    pub fn build(self) -> crate::operation::tag_resource::TagResourceOutput {
        crate::operation::tag_resource::TagResourceOutput {
            _request_id: self._request_id,
        }
    }
}
