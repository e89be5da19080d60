/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`StreamJournalToKinesis`](crate::operation::stream_journal_to_kinesis::builders::StreamJournalToKinesisFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`ledger_name`](crate::operation::stream_journal_to_kinesis::builders::StreamJournalToKinesisFluentBuilder::ledger_name) / [`set_ledger_name`](crate::operation::stream_journal_to_kinesis::builders::StreamJournalToKinesisFluentBuilder::set_ledger_name): <br>**required: true**
    ///   - [`role_arn`](crate::operation::stream_journal_to_kinesis::builders::StreamJournalToKinesisFluentBuilder::role_arn) / [`set_role_arn`](crate::operation::stream_journal_to_kinesis::builders::StreamJournalToKinesisFluentBuilder::set_role_arn): <br>**required: true**
    ///   - [`insert_tags(impl Into<String>, impl Into<String>)`](crate::operation::stream_journal_to_kinesis::builders::StreamJournalToKinesisFluentBuilder::insert_tags) / [`set_tags(Option<HashMap::<String, String>>)`](crate::operation::stream_journal_to_kinesis::builders::StreamJournalToKinesisFluentBuilder::set_tags):
    ///   - [`inclusive_start_time`](crate::operation::stream_journal_to_kinesis::builders::StreamJournalToKinesisFluentBuilder::inclusive_start_time) / [`set_inclusive_start_time`](crate::operation::stream_journal_to_kinesis::builders::StreamJournalToKinesisFluentBuilder::set_inclusive_start_time): <br>**required: true**
    ///   - [`exclusive_end_time`](crate::operation::stream_journal_to_kinesis::builders::StreamJournalToKinesisFluentBuilder::exclusive_end_time) / [`set_exclusive_end_time`](crate::operation::stream_journal_to_kinesis::builders::StreamJournalToKinesisFluentBuilder::set_exclusive_end_time):
    ///   - [`kinesis_configuration`](crate::operation::stream_journal_to_kinesis::builders::StreamJournalToKinesisFluentBuilder::kinesis_configuration) / [`set_kinesis_configuration`](crate::operation::stream_journal_to_kinesis::builders::StreamJournalToKinesisFluentBuilder::set_kinesis_configuration): <br>**required: true**
    ///   - [`stream_name`](crate::operation::stream_journal_to_kinesis::builders::StreamJournalToKinesisFluentBuilder::stream_name) / [`set_stream_name`](crate::operation::stream_journal_to_kinesis::builders::StreamJournalToKinesisFluentBuilder::set_stream_name): <br>**required: true**
    /// - On success, responds with [`StreamJournalToKinesisOutput`](crate::operation::stream_journal_to_kinesis::StreamJournalToKinesisOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn stream_journal_to_kinesis(&self) -> crate::operation::stream_journal_to_kinesis::builders::StreamJournalToKinesisFluentBuilder {
        crate::operation::stream_journal_to_kinesis::builders::StreamJournalToKinesisFluentBuilder::new(self.handle.clone())
    }
}
