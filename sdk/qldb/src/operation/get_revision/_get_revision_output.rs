/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct GetRevisionOutput {
    /// <p>The proof object in Amazon Ion format returned by a <code>GetRevision</code> request.</p>
    pub proof: ::std::option::Option<crate::types::ValueHolder>,
    /// <p>The document revision data object in Amazon Ion format.</p>
    pub revision: ::std::option::Option<crate::types::ValueHolder>,
    _request_id: Option<String>,
}
impl GetRevisionOutput {
    /// <p>The proof object in Amazon Ion format returned by a <code>GetRevision</code> request.</p>
    pub fn proof(&self) -> ::std::option::Option<&crate::types::ValueHolder> {
        self.proof.as_ref()
    }
    /// <p>The document revision data object in Amazon Ion format.</p>
    pub fn revision(&self) -> ::std::option::Option<&crate::types::ValueHolder> {
        self.revision.as_ref()
    }
}
impl ::aws_types::request_id::RequestId for GetRevisionOutput {
    fn request_id(&self) -> Option<&str> {
        self._request_id.as_deref()
    }
}
impl GetRevisionOutput {
    /// Creates a new builder-style object to manufacture [`GetRevisionOutput`](crate::operation::get_revision::GetRevisionOutput).
    pub fn builder() -> crate::operation::get_revision::builders::GetRevisionOutputBuilder {
        crate::operation::get_revision::builders::GetRevisionOutputBuilder::default()
    }
}

/// A builder for [`GetRevisionOutput`](crate::operation::get_revision::GetRevisionOutput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct GetRevisionOutputBuilder {
    pub(crate) proof: ::std::option::Option<crate::types::ValueHolder>,
    pub(crate) revision: ::std::option::Option<crate::types::ValueHolder>,
    _request_id: Option<String>,
}
impl GetRevisionOutputBuilder {
    /// <p>The proof object in Amazon Ion format returned by a <code>GetRevision</code> request.</p>
    pub fn proof(mut self, input: crate::types::ValueHolder) -> Self {
        self.proof = ::std::option::Option::Some(input);
        self
    }
    /// <p>The proof object in Amazon Ion format returned by a <code>GetRevision</code> request.</p>
    pub fn set_proof(mut self, input: ::std::option::Option<crate::types::ValueHolder>) -> Self {
        self.proof = input;
        self
    }
    /// <p>The proof object in Amazon Ion format returned by a <code>GetRevision</code> request.</p>
    pub fn get_proof(&self) -> &::std::option::Option<crate::types::ValueHolder> {
        &self.proof
    }
    /// <p>The document revision data object in Amazon Ion format.</p>
    pub fn revision(mut self, input: crate::types::ValueHolder) -> Self {
        self.revision = ::std::option::Option::Some(input);
        self
    }
    /// <p>The document revision data object in Amazon Ion format.</p>
    pub fn set_revision(mut self, input: ::std::option::Option<crate::types::ValueHolder>) -> Self {
        self.revision = input;
        self
    }
    /// <p>The document revision data object in Amazon Ion format.</p>
    pub fn get_revision(&self) -> &::std::option::Option<crate::types::ValueHolder> {
        &self.revision
    }
    pub(crate) fn _set_request_id(mut self, request_id: Option<String>) -> Self {
        self._request_id = request_id;
        self
    }
    /// Consumes the builder and constructs a [`GetRevisionOutput`](crate::operation::get_revision::GetRevisionOutput).
    pub fn build(self) -> crate::operation::get_revision::GetRevisionOutput {
        crate::operation::get_revision::GetRevisionOutput {
            proof: self.proof,
            revision: self.revision,
            _request_id: self._request_id,
        }
    }
}
