/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`ListJournalKinesisStreamsForLedger`](crate::operation::list_journal_kinesis_streams_for_ledger::builders::ListJournalKinesisStreamsForLedgerFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`ledger_name`](crate::operation::list_journal_kinesis_streams_for_ledger::builders::ListJournalKinesisStreamsForLedgerFluentBuilder::ledger_name) / [`set_ledger_name`](crate::operation::list_journal_kinesis_streams_for_ledger::builders::ListJournalKinesisStreamsForLedgerFluentBuilder::set_ledger_name): <br>**required: true**
    ///   - [`max_results`](crate::operation::list_journal_kinesis_streams_for_ledger::builders::ListJournalKinesisStreamsForLedgerFluentBuilder::max_results) / [`set_max_results`](crate::operation::list_journal_kinesis_streams_for_ledger::builders::ListJournalKinesisStreamsForLedgerFluentBuilder::set_max_results):
    ///   - [`next_token`](crate::operation::list_journal_kinesis_streams_for_ledger::builders::ListJournalKinesisStreamsForLedgerFluentBuilder::next_token) / [`set_next_token`](crate::operation::list_journal_kinesis_streams_for_ledger::builders::ListJournalKinesisStreamsForLedgerFluentBuilder::set_next_token):
    /// - On success, responds with [`ListJournalKinesisStreamsForLedgerOutput`](crate::operation::list_journal_kinesis_streams_for_ledger::ListJournalKinesisStreamsForLedgerOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn list_journal_kinesis_streams_for_ledger(&self) -> crate::operation::list_journal_kinesis_streams_for_ledger::builders::ListJournalKinesisStreamsForLedgerFluentBuilder {
        crate::operation::list_journal_kinesis_streams_for_ledger::builders::ListJournalKinesisStreamsForLedgerFluentBuilder::new(self.handle.clone())
    }
}
