/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::list_journal_s3_exports::_list_journal_s3_exports_output::ListJournalS3ExportsOutputBuilder;

pub use crate::operation::list_journal_s3_exports::_list_journal_s3_exports_input::ListJournalS3ExportsInputBuilder;

/// Fluent builder constructing a request to `ListJournalS3Exports`.
///
/// <p>Returns all journal export jobs for all ledgers that are associated with the current Amazon Web Services account and Region.</p>
#[derive(::std::clone::Clone, ::std::fmt::Debug)]
pub struct ListJournalS3ExportsFluentBuilder {
    handle: ::std::sync::Arc<crate::client::Handle>,
    inner: crate::operation::list_journal_s3_exports::builders::ListJournalS3ExportsInputBuilder,
}
impl ListJournalS3ExportsFluentBuilder {
    /// Creates a new `ListJournalS3ExportsFluentBuilder`.
    pub(crate) fn new(handle: ::std::sync::Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }
    /// Access the ListJournalS3Exports as a reference.
    pub fn as_input(&self) -> &crate::operation::list_journal_s3_exports::builders::ListJournalS3ExportsInputBuilder {
        &self.inner
    }
    /// Sends the request and returns the response.
    ///
    /// If an error occurs, an `SdkError` will be returned with additional details that
    /// can be matched against.
    pub fn send(
        self,
    ) -> ::std::result::Result<
        crate::operation::list_journal_s3_exports::ListJournalS3ExportsOutput,
        ::aws_smithy_runtime::client::result::SdkError<crate::Error>,
    > {
        let input = self
            .inner
            .build()
            .map_err(::aws_smithy_runtime::client::result::SdkError::construction_failure)?;
        self.handle.invoke::<crate::operation::list_journal_s3_exports::ListJournalS3Exports>(&input)
    }
    /// <p>The maximum number of results to return in a single request.</p>
    pub fn max_results(mut self, input: i32) -> Self {
        self.inner = self.inner.max_results(input);
        self
    }
    /// <p>The maximum number of results to return in a single request.</p>
    pub fn set_max_results(mut self, input: ::std::option::Option<i32>) -> Self {
        self.inner = self.inner.set_max_results(input);
        self
    }
    /// <p>The maximum number of results to return in a single request.</p>
    pub fn get_max_results(&self) -> &::std::option::Option<i32> {
        self.inner.get_max_results()
    }
    /// <p>A pagination token, indicating that you want to retrieve the next page of results.</p>
    pub fn next_token(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.inner = self.inner.next_token(input);
        self
    }
    /// <p>A pagination token, indicating that you want to retrieve the next page of results.</p>
    pub fn set_next_token(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.inner = self.inner.set_next_token(input);
        self
    }
    /// <p>A pagination token, indicating that you want to retrieve the next page of results.</p>
    pub fn get_next_token(&self) -> &::std::option::Option<::std::string::String> {
        self.inner.get_next_token()
    }
}
