/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::delete_access_point_policy::_delete_access_point_policy_output::DeleteAccessPointPolicyOutputBuilder;

pub use crate::operation::delete_access_point_policy::_delete_access_point_policy_input::DeleteAccessPointPolicyInputBuilder;

/// Fluent builder constructing a request to `DeleteAccessPointPolicy`.
///
/// <p>Deletes the access point policy for the specified access point.</p>
#[derive(::std::clone::Clone, ::std::fmt::Debug)]
pub struct DeleteAccessPointPolicyFluentBuilder {
    handle: ::std::sync::Arc<crate::client::Handle>,
    inner: crate::operation::delete_access_point_policy::builders::DeleteAccessPointPolicyInputBuilder,
}
impl DeleteAccessPointPolicyFluentBuilder {
    /// Creates a new `DeleteAccessPointPolicyFluentBuilder`.
    pub(crate) fn new(handle: ::std::sync::Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }
    /// Access the DeleteAccessPointPolicy as a reference.
    pub fn as_input(&self) -> &crate::operation::delete_access_point_policy::builders::DeleteAccessPointPolicyInputBuilder {
        &self.inner
    }
    /// Sends the request and returns the response.
    ///
    /// If an error occurs, an `SdkError` will be returned with additional details that
    /// can be matched against.
    pub fn send(
        self,
    ) -> ::std::result::Result<
        crate::operation::delete_access_point_policy::DeleteAccessPointPolicyOutput,
        ::aws_smithy_runtime::client::result::SdkError<crate::Error>,
    > {
        let input = self
            .inner
            .build()
            .map_err(::aws_smithy_runtime::client::result::SdkError::construction_failure)?;
        self.handle.invoke::<crate::operation::delete_access_point_policy::DeleteAccessPointPolicy>(&input)
    }
    /// <p>The account ID for the owner of the resource.</p>
    pub fn account_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.inner = self.inner.account_id(input);
        self
    }
    /// <p>The account ID for the owner of the resource.</p>
    pub fn set_account_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.inner = self.inner.set_account_id(input);
        self
    }
    /// <p>The account ID for the owner of the resource.</p>
    pub fn get_account_id(&self) -> &::std::option::Option<::std::string::String> {
        self.inner.get_account_id()
    }
    /// <p>The name of the access point whose policy you want to delete.</p>
    pub fn name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.inner = self.inner.name(input);
        self
    }
    /// <p>The name of the access point whose policy you want to delete.</p>
    pub fn set_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.inner = self.inner.set_name(input);
        self
    }
    /// <p>The name of the access point whose policy you want to delete.</p>
    pub fn get_name(&self) -> &::std::option::Option<::std::string::String> {
        self.inner.get_name()
    }
}
