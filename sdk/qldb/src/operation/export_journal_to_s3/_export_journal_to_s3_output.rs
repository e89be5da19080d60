/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct ExportJournalToS3Output {
    /// <p>The UUID (represented in Base62-encoded text) that QLDB assigns to each journal export job.</p>
    pub export_id: ::std::option::Option<::std::string::String>,
    _request_id: Option<String>,
}
impl ExportJournalToS3Output {
    /// <p>The UUID (represented in Base62-encoded text) that QLDB assigns to each journal export job.</p>
    pub fn export_id(&self) -> ::std::option::Option<&str> {
        self.export_id.as_deref()
    }
}
impl ::aws_types::request_id::RequestId for ExportJournalToS3Output {
    fn request_id(&self) -> Option<&str> {
        self._request_id.as_deref()
    }
}
impl ExportJournalToS3Output {
    /// Creates a new builder-style object to manufacture [`ExportJournalToS3Output`](crate::operation::export_journal_to_s3::ExportJournalToS3Output).
    pub fn builder() -> crate::operation::export_journal_to_s3::builders::ExportJournalToS3OutputBuilder {
        crate::operation::export_journal_to_s3::builders::ExportJournalToS3OutputBuilder::default()
    }
}

/// A builder for [`ExportJournalToS3Output`](crate::operation::export_journal_to_s3::ExportJournalToS3Output).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct ExportJournalToS3OutputBuilder {
    pub(crate) export_id: ::std::option::Option<::std::string::String>,
    _request_id: Option<String>,
}
impl ExportJournalToS3OutputBuilder {
    /// <p>The UUID (represented in Base62-encoded text) that QLDB assigns to each journal export job.</p>
    pub fn export_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.export_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The UUID (represented in Base62-encoded text) that QLDB assigns to each journal export job.</p>
    pub fn set_export_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.export_id = input;
        self
    }
    /// <p>The UUID (represented in Base62-encoded text) that QLDB assigns to each journal export job.</p>
    pub fn get_export_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.export_id
    }
    pub(crate) fn _set_request_id(mut self, request_id: Option<String>) -> Self {
        self._request_id = request_id;
        self
    }
    /// Consumes the builder and constructs a [`ExportJournalToS3Output`](crate::operation::export_journal_to_s3::ExportJournalToS3Output).
    pub fn build(self) -> crate::operation::export_journal_to_s3::ExportJournalToS3Output {
        crate::operation::export_journal_to_s3::ExportJournalToS3Output {
            export_id: self.export_id,
            _request_id: self._request_id,
        }
    }
}
