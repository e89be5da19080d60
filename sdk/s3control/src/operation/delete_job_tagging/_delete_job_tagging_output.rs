/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct DeleteJobTaggingOutput {
    _request_id: Option<String>,
}
impl ::aws_types::request_id::RequestId for DeleteJobTaggingOutput {
    fn request_id(&self) -> Option<&str> {
        self._request_id.as_deref()
    }
}
impl DeleteJobTaggingOutput {
    /// Creates a new builder-style object to manufacture [`DeleteJobTaggingOutput`](crate::operation::delete_job_tagging::DeleteJobTaggingOutput).
    pub fn builder() -> crate::operation::delete_job_tagging::builders::DeleteJobTaggingOutputBuilder {
        crate::operation::delete_job_tagging::builders::DeleteJobTaggingOutputBuilder::default()
    }
}

/// A builder for [`DeleteJobTaggingOutput`](crate::operation::delete_job_tagging::DeleteJobTaggingOutput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct DeleteJobTaggingOutputBuilder {
    _request_id: Option<String>,
}
impl DeleteJobTaggingOutputBuilder {
    pub(crate) fn _set_request_id(mut self, request_id: Option<String>) -> Self {
        self._request_id = request_id;
        self
    }
    /// Consumes the builder and constructs a [`DeleteJobTaggingOutput`](crate::operation::delete_job_tagging::DeleteJobTaggingOutput).
    pub fn build(self) -> crate::operation::delete_job_tagging::DeleteJobTaggingOutput {
        crate::operation::delete_job_tagging::DeleteJobTaggingOutput {
            _request_id: self._request_id,
        }
    }
}
