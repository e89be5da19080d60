/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct ListAccessPointsOutput {
    /// <p>Contains identification and configuration information for one or more access points associated with the specified bucket.</p>
    pub access_point_list: ::std::option::Option<::std::vec::Vec<crate::types::AccessPoint>>,
    /// <p>If the specified bucket has more access points than can be returned in one call to this API, this field contains a continuation token.</p>
    pub next_token: ::std::option::Option<::std::string::String>,
    _request_id: Option<String>,
}
impl ListAccessPointsOutput {
    /// <p>Contains identification and configuration information for one or more access points associated with the specified bucket.</p>
    ///
    /// An unset list is distinct from an empty one.
    pub fn access_point_list(&self) -> ::std::option::Option<&[crate::types::AccessPoint]> {
        self.access_point_list.as_deref()
    }
    /// <p>If the specified bucket has more access points than can be returned in one call to this API, this field contains a continuation token.</p>
    pub fn next_token(&self) -> ::std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
impl ::aws_types::request_id::RequestId for ListAccessPointsOutput {
    fn request_id(&self) -> Option<&str> {
        self._request_id.as_deref()
    }
}
impl ListAccessPointsOutput {
    /// Creates a new builder-style object to manufacture [`ListAccessPointsOutput`](crate::operation::list_access_points::ListAccessPointsOutput).
    pub fn builder() -> crate::operation::list_access_points::builders::ListAccessPointsOutputBuilder {
        crate::operation::list_access_points::builders::ListAccessPointsOutputBuilder::default()
    }
}

/// A builder for [`ListAccessPointsOutput`](crate::operation::list_access_points::ListAccessPointsOutput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct ListAccessPointsOutputBuilder {
    pub(crate) access_point_list: ::std::option::Option<::std::vec::Vec<crate::types::AccessPoint>>,
    pub(crate) next_token: ::std::option::Option<::std::string::String>,
    _request_id: Option<String>,
}
impl ListAccessPointsOutputBuilder {
    /// Appends an item to `access_point_list`.
    ///
    /// To override the contents of this collection use [`set_access_point_list`](Self::set_access_point_list).
    ///
    /// <p>Contains identification and configuration information for one or more access points associated with the specified bucket.</p>
    pub fn access_point_list(mut self, input: crate::types::AccessPoint) -> Self {
        let mut v = self.access_point_list.unwrap_or_default();
        v.push(input);
        self.access_point_list = ::std::option::Option::Some(v);
        self
    }
    /// <p>Contains identification and configuration information for one or more access points associated with the specified bucket.</p>
    pub fn set_access_point_list(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::AccessPoint>>) -> Self {
        self.access_point_list = input;
        self
    }
    /// <p>Contains identification and configuration information for one or more access points associated with the specified bucket.</p>
    pub fn get_access_point_list(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::AccessPoint>> {
        &self.access_point_list
    }
    /// <p>If the specified bucket has more access points than can be returned in one call to this API, this field contains a continuation token.</p>
    pub fn next_token(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.next_token = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>If the specified bucket has more access points than can be returned in one call to this API, this field contains a continuation token.</p>
    pub fn set_next_token(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.next_token = input;
        self
    }
    /// <p>If the specified bucket has more access points than can be returned in one call to this API, this field contains a continuation token.</p>
    pub fn get_next_token(&self) -> &::std::option::Option<::std::string::String> {
        &self.next_token
    }
    pub(crate) fn _set_request_id(mut self, request_id: Option<String>) -> Self {
        self._request_id = request_id;
        self
    }
    /// Consumes the builder and constructs a [`ListAccessPointsOutput`](crate::operation::list_access_points::ListAccessPointsOutput).
    pub fn build(self) -> crate::operation::list_access_points::ListAccessPointsOutput {
        crate::operation::list_access_points::ListAccessPointsOutput {
            access_point_list: self.access_point_list,
            next_token: self.next_token,
            _request_id: self._request_id,
        }
    }
}
