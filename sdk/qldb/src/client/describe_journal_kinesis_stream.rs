/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`DescribeJournalKinesisStream`](crate::operation::describe_journal_kinesis_stream::builders::DescribeJournalKinesisStreamFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`ledger_name`](crate::operation::describe_journal_kinesis_stream::builders::DescribeJournalKinesisStreamFluentBuilder::ledger_name) / [`set_ledger_name`](crate::operation::describe_journal_kinesis_stream::builders::DescribeJournalKinesisStreamFluentBuilder::set_ledger_name): <br>**required: true**
    ///   - [`stream_id`](crate::operation::describe_journal_kinesis_stream::builders::DescribeJournalKinesisStreamFluentBuilder::stream_id) / [`set_stream_id`](crate::operation::describe_journal_kinesis_stream::builders::DescribeJournalKinesisStreamFluentBuilder::set_stream_id): <br>**required: true**
    /// - On success, responds with [`DescribeJournalKinesisStreamOutput`](crate::operation::describe_journal_kinesis_stream::DescribeJournalKinesisStreamOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn describe_journal_kinesis_stream(&self) -> crate::operation::describe_journal_kinesis_stream::builders::DescribeJournalKinesisStreamFluentBuilder {
        crate::operation::describe_journal_kinesis_stream::builders::DescribeJournalKinesisStreamFluentBuilder::new(self.handle.clone())
    }
}
