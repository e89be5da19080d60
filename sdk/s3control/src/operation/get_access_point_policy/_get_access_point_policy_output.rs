/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct GetAccessPointPolicyOutput {
    /// <p>The access point policy associated with the specified access point.</p>
    pub policy: ::std::option::Option<::std::string::String>,
    _request_id: Option<String>,
}
impl GetAccessPointPolicyOutput {
    /// <p>The access point policy associated with the specified access point.</p>
    pub fn policy(&self) -> ::std::option::Option<&str> {
        self.policy.as_deref()
    }
}
impl ::aws_types::request_id::RequestId for GetAccessPointPolicyOutput {
    fn request_id(&self) -> Option<&str> {
        self._request_id.as_deref()
    }
}
impl GetAccessPointPolicyOutput {
    /// Creates a new builder-style object to manufacture [`GetAccessPointPolicyOutput`](crate::operation::get_access_point_policy::GetAccessPointPolicyOutput).
    pub fn builder() -> crate::operation::get_access_point_policy::builders::GetAccessPointPolicyOutputBuilder {
        crate::operation::get_access_point_policy::builders::GetAccessPointPolicyOutputBuilder::default()
    }
}

/// A builder for [`GetAccessPointPolicyOutput`](crate::operation::get_access_point_policy::GetAccessPointPolicyOutput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct GetAccessPointPolicyOutputBuilder {
    pub(crate) policy: ::std::option::Option<::std::string::String>,
    _request_id: Option<String>,
}
impl GetAccessPointPolicyOutputBuilder {
    /// <p>The access point policy associated with the specified access point.</p>
    pub fn policy(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.policy = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The access point policy associated with the specified access point.</p>
    pub fn set_policy(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.policy = input;
        self
    }
    /// <p>The access point policy associated with the specified access point.</p>
    pub fn get_policy(&self) -> &::std::option::Option<::std::string::String> {
        &self.policy
    }
    pub(crate) fn _set_request_id(mut self, request_id: Option<String>) -> Self {
        self._request_id = request_id;
        self
    }
    /// Consumes the builder and constructs a [`GetAccessPointPolicyOutput`](crate::operation::get_access_point_policy::GetAccessPointPolicyOutput).
    pub fn build(self) -> crate::operation::get_access_point_policy::GetAccessPointPolicyOutput {
        crate::operation::get_access_point_policy::GetAccessPointPolicyOutput {
            policy: self.policy,
            _request_id: self._request_id,
        }
    }
}
