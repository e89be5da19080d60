/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`ListJournalS3ExportsForLedger`](crate::operation::list_journal_s3_exports_for_ledger::builders::ListJournalS3ExportsForLedgerFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`name`](crate::operation::list_journal_s3_exports_for_ledger::builders::ListJournalS3ExportsForLedgerFluentBuilder::name) / [`set_name`](crate::operation::list_journal_s3_exports_for_ledger::builders::ListJournalS3ExportsForLedgerFluentBuilder::set_name): <br>**required: true**
    ///   - [`max_results`](crate::operation::list_journal_s3_exports_for_ledger::builders::ListJournalS3ExportsForLedgerFluentBuilder::max_results) / [`set_max_results`](crate::operation::list_journal_s3_exports_for_ledger::builders::ListJournalS3ExportsForLedgerFluentBuilder::set_max_results):
    ///   - [`next_token`](crate::operation::list_journal_s3_exports_for_ledger::builders::ListJournalS3ExportsForLedgerFluentBuilder::next_token) / [`set_next_token`](crate::operation::list_journal_s3_exports_for_ledger::builders::ListJournalS3ExportsForLedgerFluentBuilder::set_next_token):
    /// - On success, responds with [`ListJournalS3ExportsForLedgerOutput`](crate::operation::list_journal_s3_exports_for_ledger::ListJournalS3ExportsForLedgerOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn list_journal_s3_exports_for_ledger(&self) -> crate::operation::list_journal_s3_exports_for_ledger::builders::ListJournalS3ExportsForLedgerFluentBuilder {
        crate::operation::list_journal_s3_exports_for_ledger::builders::ListJournalS3ExportsForLedgerFluentBuilder::new(self.handle.clone())
    }
}
