/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`ListJournalS3Exports`](crate::operation::list_journal_s3_exports::builders::ListJournalS3ExportsFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`max_results`](crate::operation::list_journal_s3_exports::builders::ListJournalS3ExportsFluentBuilder::max_results) / [`set_max_results`](crate::operation::list_journal_s3_exports::builders::ListJournalS3ExportsFluentBuilder::set_max_results):
    ///   - [`next_token`](crate::operation::list_journal_s3_exports::builders::ListJournalS3ExportsFluentBuilder::next_token) / [`set_next_token`](crate::operation::list_journal_s3_exports::builders::ListJournalS3ExportsFluentBuilder::set_next_token):
    /// - On success, responds with [`ListJournalS3ExportsOutput`](crate::operation::list_journal_s3_exports::ListJournalS3ExportsOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn list_journal_s3_exports(&self) -> crate::operation::list_journal_s3_exports::builders::ListJournalS3ExportsFluentBuilder {
        crate::operation::list_journal_s3_exports::builders::ListJournalS3ExportsFluentBuilder::new(self.handle.clone())
    }
}
