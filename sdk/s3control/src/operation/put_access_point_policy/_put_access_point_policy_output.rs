/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct PutAccessPointPolicyOutput {
    _request_id: Option<String>,
}
impl ::aws_types::request_id::RequestId for PutAccessPointPolicyOutput {
    fn request_id(&self) -> Option<&str> {
        self._request_id.as_deref()
    }
}
impl PutAccessPointPolicyOutput {
    /// Creates a new builder-style object to manufacture [`PutAccessPointPolicyOutput`](crate::operation::put_access_point_policy::PutAccessPointPolicyOutput).
    pub fn builder() -> crate::operation::put_access_point_policy::builders::PutAccessPointPolicyOutputBuilder {
        crate::operation::put_access_point_policy::builders::PutAccessPointPolicyOutputBuilder::default()
    }
}

/// A builder for [`PutAccessPointPolicyOutput`](crate::operation::put_access_point_policy::PutAccessPointPolicyOutput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct PutAccessPointPolicyOutputBuilder {
    _request_id: Option<String>,
}
impl PutAccessPointPolicyOutputBuilder {
    pub(crate) fn _set_request_id(mut self, request_id: Option<String>) -> Self {
        self._request_id = request_id;
        self
    }
    /// Consumes the builder and constructs a [`PutAccessPointPolicyOutput`](crate::operation::put_access_point_policy::PutAccessPointPolicyOutput).
    pub fn build(self) -> crate::operation::put_access_point_policy::PutAccessPointPolicyOutput {
        crate::operation::put_access_point_policy::PutAccessPointPolicyOutput {
            _request_id: self._request_id,
        }
    }
}
