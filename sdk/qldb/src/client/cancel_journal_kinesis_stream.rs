/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`CancelJournalKinesisStream`](crate::operation::cancel_journal_kinesis_stream::builders::CancelJournalKinesisStreamFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`ledger_name`](crate::operation::cancel_journal_kinesis_stream::builders::CancelJournalKinesisStreamFluentBuilder::ledger_name) / [`set_ledger_name`](crate::operation::cancel_journal_kinesis_stream::builders::CancelJournalKinesisStreamFluentBuilder::set_ledger_name): <br>**required: true**
    ///   - [`stream_id`](crate::operation::cancel_journal_kinesis_stream::builders::CancelJournalKinesisStreamFluentBuilder::stream_id) / [`set_stream_id`](crate::operation::cancel_journal_kinesis_stream::builders::CancelJournalKinesisStreamFluentBuilder::set_stream_id): <br>**required: true**
    /// - On success, responds with [`CancelJournalKinesisStreamOutput`](crate::operation::cancel_journal_kinesis_stream::CancelJournalKinesisStreamOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn cancel_journal_kinesis_stream(&self) -> crate::operation::cancel_journal_kinesis_stream::builders::CancelJournalKinesisStreamFluentBuilder {
        crate::operation::cancel_journal_kinesis_stream::builders::CancelJournalKinesisStreamFluentBuilder::new(self.handle.clone())
    }
}
