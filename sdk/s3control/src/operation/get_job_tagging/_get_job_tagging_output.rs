/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct GetJobTaggingOutput {
    /// <p>The set of tags associated with the S3 Batch Operations job.</p>
    pub tags: ::std::option::Option<::std::vec::Vec<crate::types::S3Tag>>,
    _request_id: Option<String>,
}
impl GetJobTaggingOutput {
    /// <p>The set of tags associated with the S3 Batch Operations job.</p>
    ///
    /// An unset list is distinct from an empty one.
    pub fn tags(&self) -> ::std::option::Option<&[crate::types::S3Tag]> {
        self.tags.as_deref()
    }
}
impl ::aws_types::request_id::RequestId for GetJobTaggingOutput {
    fn request_id(&self) -> Option<&str> {
        self._request_id.as_deref()
    }
}
impl GetJobTaggingOutput {
    /// Creates a new builder-style object to manufacture [`GetJobTaggingOutput`](crate::operation::get_job_tagging::GetJobTaggingOutput).
    pub fn builder() -> crate::operation::get_job_tagging::builders::GetJobTaggingOutputBuilder {
        crate::operation::get_job_tagging::builders::GetJobTaggingOutputBuilder::default()
    }
}

/// A builder for [`GetJobTaggingOutput`](crate::operation::get_job_tagging::GetJobTaggingOutput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct GetJobTaggingOutputBuilder {
    pub(crate) tags: ::std::option::Option<::std::vec::Vec<crate::types::S3Tag>>,
    _request_id: Option<String>,
}
impl GetJobTaggingOutputBuilder {
    /// Appends an item to `tags`.
    ///
    /// To override the contents of this collection use [`set_tags`](Self::set_tags).
    ///
    /// <p>The set of tags associated with the S3 Batch Operations job.</p>
    pub fn tags(mut self, input: crate::types::S3Tag) -> Self {
        let mut v = self.tags.unwrap_or_default();
        v.push(input);
        self.tags = ::std::option::Option::Some(v);
        self
    }
    /// <p>The set of tags associated with the S3 Batch Operations job.</p>
    pub fn set_tags(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::S3Tag>>) -> Self {
        self.tags = input;
        self
    }
    /// <p>The set of tags associated with the S3 Batch Operations job.</p>
    pub fn get_tags(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::S3Tag>> {
        &self.tags
    }
    pub(crate) fn _set_request_id(mut self, request_id: Option<String>) -> Self {
        self._request_id = request_id;
        self
    }
    /// Consumes the builder and constructs a [`GetJobTaggingOutput`](crate::operation::get_job_tagging::GetJobTaggingOutput).
    pub fn build(self) -> crate::operation::get_job_tagging::GetJobTaggingOutput {
        crate::operation::get_job_tagging::GetJobTaggingOutput {
            tags: self.tags,
            _request_id: self._request_id,
        }
    }
}
