/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct ListJournalS3ExportsForLedgerOutput {
    /// <p>The journal export jobs that are currently associated with the specified ledger.</p>
    pub journal_s3_exports: ::std::option::Option<::std::vec::Vec<crate::types::JournalS3ExportDescription>>,
    /// <p>Indicates whether there are more results available.</p>
    pub next_token: ::std::option::Option<::std::string::String>,
    _request_id: Option<String>,
}
impl ListJournalS3ExportsForLedgerOutput {
    /// <p>The journal export jobs that are currently associated with the specified ledger.</p>
    ///
    /// An unset list is distinct from an empty one.
    pub fn journal_s3_exports(&self) -> ::std::option::Option<&[crate::types::JournalS3ExportDescription]> {
        self.journal_s3_exports.as_deref()
    }
    /// <p>Indicates whether there are more results available.</p>
    pub fn next_token(&self) -> ::std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
impl ::aws_types::request_id::RequestId for ListJournalS3ExportsForLedgerOutput {
    fn request_id(&self) -> Option<&str> {
        self._request_id.as_deref()
    }
}
impl ListJournalS3ExportsForLedgerOutput {
    /// Creates a new builder-style object to manufacture [`ListJournalS3ExportsForLedgerOutput`](crate::operation::list_journal_s3_exports_for_ledger::ListJournalS3ExportsForLedgerOutput).
    pub fn builder() -> crate::operation::list_journal_s3_exports_for_ledger::builders::ListJournalS3ExportsForLedgerOutputBuilder {
        crate::operation::list_journal_s3_exports_for_ledger::builders::ListJournalS3ExportsForLedgerOutputBuilder::default()
    }
}

/// A builder for [`ListJournalS3ExportsForLedgerOutput`](crate::operation::list_journal_s3_exports_for_ledger::ListJournalS3ExportsForLedgerOutput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct ListJournalS3ExportsForLedgerOutputBuilder {
    pub(crate) journal_s3_exports: ::std::option::Option<::std::vec::Vec<crate::types::JournalS3ExportDescription>>,
    pub(crate) next_token: ::std::option::Option<::std::string::String>,
    _request_id: Option<String>,
}
impl ListJournalS3ExportsForLedgerOutputBuilder {
    /// Appends an item to `journal_s3_exports`.
    ///
    /// To override the contents of this collection use [`set_journal_s3_exports`](Self::set_journal_s3_exports).
    ///
    /// <p>The journal export jobs that are currently associated with the specified ledger.</p>
    pub fn journal_s3_exports(mut self, input: crate::types::JournalS3ExportDescription) -> Self {
        let mut v = self.journal_s3_exports.unwrap_or_default();
        v.push(input);
        self.journal_s3_exports = ::std::option::Option::Some(v);
        self
    }
    /// <p>The journal export jobs that are currently associated with the specified ledger.</p>
    pub fn set_journal_s3_exports(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::JournalS3ExportDescription>>) -> Self {
        self.journal_s3_exports = input;
        self
    }
    /// <p>The journal export jobs that are currently associated with the specified ledger.</p>
    pub fn get_journal_s3_exports(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::JournalS3ExportDescription>> {
        &self.journal_s3_exports
    }
    /// <p>Indicates whether there are more results available.</p>
    pub fn next_token(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.next_token = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>Indicates whether there are more results available.</p>
    pub fn set_next_token(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.next_token = input;
        self
    }
    /// <p>Indicates whether there are more results available.</p>
    pub fn get_next_token(&self) -> &::std::option::Option<::std::string::String> {
        &self.next_token
    }
    pub(crate) fn _set_request_id(mut self, request_id: Option<String>) -> Self {
        self._request_id = request_id;
        self
    }
    /// Consumes the builder and constructs a [`ListJournalS3ExportsForLedgerOutput`](crate::operation::list_journal_s3_exports_for_ledger::ListJournalS3ExportsForLedgerOutput).
    pub fn build(self) -> crate::operation::list_journal_s3_exports_for_ledger::ListJournalS3ExportsForLedgerOutput {
        crate::operation::list_journal_s3_exports_for_ledger::ListJournalS3ExportsForLedgerOutput {
            journal_s3_exports: self.journal_s3_exports,
            next_token: self.next_token,
            _request_id: self._request_id,
        }
    }
}
