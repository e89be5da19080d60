/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct PutJobTaggingOutput {
    _request_id: Option<String>,
}
impl ::aws_types::request_id::RequestId for PutJobTaggingOutput {
    fn request_id(&self) -> Option<&str> {
        self._request_id.as_deref()
    }
}
impl PutJobTaggingOutput {
    /// Creates a new builder-style object to manufacture [`PutJobTaggingOutput`](crate::operation::put_job_tagging::PutJobTaggingOutput).
    pub fn builder() -> crate::operation::put_job_tagging::builders::PutJobTaggingOutputBuilder {
        crate::operation::put_job_tagging::builders::PutJobTaggingOutputBuilder::default()
    }
}

/// A builder for [`PutJobTaggingOutput`](crate::operation::put_job_tagging::PutJobTaggingOutput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct PutJobTaggingOutputBuilder {
    _request_id: Option<String>,
}
impl PutJobTaggingOutputBuilder {
    pub(crate) fn _set_request_id(mut self, request_id: Option<String>) -> Self {
        self._request_id = request_id;
        self
    }
    /// Consumes the builder and constructs a [`PutJobTaggingOutput`](crate::operation::put_job_tagging::PutJobTaggingOutput).
    pub fn build(self) -> crate::operation::put_job_tagging::PutJobTaggingOutput {
        crate::operation::put_job_tagging::PutJobTaggingOutput {
            _request_id: self._request_id,
        }
    }
}
