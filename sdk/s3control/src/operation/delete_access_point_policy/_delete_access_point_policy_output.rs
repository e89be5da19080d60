/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct DeleteAccessPointPolicyOutput {
    _request_id: Option<String>,
}
impl ::aws_types::request_id::RequestId for DeleteAccessPointPolicyOutput {
    fn request_id(&self) -> Option<&str> {
        self._request_id.as_deref()
    }
}
impl DeleteAccessPointPolicyOutput {
    /// Creates a new builder-style object to manufacture [`DeleteAccessPointPolicyOutput`](crate::operation::delete_access_point_policy::DeleteAccessPointPolicyOutput).
    pub fn builder() -> crate::operation::delete_access_point_policy::builders::DeleteAccessPointPolicyOutputBuilder {
        crate::operation::delete_access_point_policy::builders::DeleteAccessPointPolicyOutputBuilder::default()
    }
}

/// A builder for [`DeleteAccessPointPolicyOutput`](crate::operation::delete_access_point_policy::DeleteAccessPointPolicyOutput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct DeleteAccessPointPolicyOutputBuilder {
    _request_id: Option<String>,
}
impl DeleteAccessPointPolicyOutputBuilder {
    pub(crate) fn _set_request_id(mut self, request_id: Option<String>) -> Self {
        self._request_id = request_id;
        self
    }
    /// Consumes the builder and constructs a [`DeleteAccessPointPolicyOutput`](crate::operation::delete_access_point_policy::DeleteAccessPointPolicyOutput).
    pub fn build(self) -> crate::operation::delete_access_point_policy::DeleteAccessPointPolicyOutput {
        crate::operation::delete_access_point_policy::DeleteAccessPointPolicyOutput {
            _request_id: self._request_id,
        }
    }
}
