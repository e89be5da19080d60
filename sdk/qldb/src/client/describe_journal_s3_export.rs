/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`DescribeJournalS3Export`](crate::operation::describe_journal_s3_export::builders::DescribeJournalS3ExportFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`name`](crate::operation::describe_journal_s3_export::builders::DescribeJournalS3ExportFluentBuilder::name) / [`set_name`](crate::operation::describe_journal_s3_export::builders::DescribeJournalS3ExportFluentBuilder::set_name): <br>**required: true**
    ///   - [`export_id`](crate::operation::describe_journal_s3_export::builders::DescribeJournalS3ExportFluentBuilder::export_id) / [`set_export_id`](crate::operation::describe_journal_s3_export::builders::DescribeJournalS3ExportFluentBuilder::set_export_id): <br>**required: true**
    /// - On success, responds with [`DescribeJournalS3ExportOutput`](crate::operation::describe_journal_s3_export::DescribeJournalS3ExportOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn describe_journal_s3_export(&self) -> crate::operation::describe_journal_s3_export::builders::DescribeJournalS3ExportFluentBuilder {
        crate::operation::describe_journal_s3_export::builders::DescribeJournalS3ExportFluentBuilder::new(self.handle.clone())
    }
}
