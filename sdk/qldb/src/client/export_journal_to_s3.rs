/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`ExportJournalToS3`](crate::operation::export_journal_to_s3::builders::ExportJournalToS3FluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`name`](crate::operation::export_journal_to_s3::builders::ExportJournalToS3FluentBuilder::name) / [`set_name`](crate::operation::export_journal_to_s3::builders::ExportJournalToS3FluentBuilder::set_name): <br>**required: true**
    ///   - [`inclusive_start_time`](crate::operation::export_journal_to_s3::builders::ExportJournalToS3FluentBuilder::inclusive_start_time) / [`set_inclusive_start_time`](crate::operation::export_journal_to_s3::builders::ExportJournalToS3FluentBuilder::set_inclusive_start_time): <br>**required: true**
    ///   - [`exclusive_end_time`](crate::operation::export_journal_to_s3::builders::ExportJournalToS3FluentBuilder::exclusive_end_time) / [`set_exclusive_end_time`](crate::operation::export_journal_to_s3::builders::ExportJournalToS3FluentBuilder::set_exclusive_end_time): <br>**required: true**
    ///   - [`s3_export_configuration`](crate::operation::export_journal_to_s3::builders::ExportJournalToS3FluentBuilder::s3_export_configuration) / [`set_s3_export_configuration`](crate::operation::export_journal_to_s3::builders::ExportJournalToS3FluentBuilder::set_s3_export_configuration): <br>**required: true**
    ///   - [`role_arn`](crate::operation::export_journal_to_s3::builders::ExportJournalToS3FluentBuilder::role_arn) / [`set_role_arn`](crate::operation::export_journal_to_s3::builders::ExportJournalToS3FluentBuilder::set_role_arn): <br>**required: true**
    ///   - [`output_format`](crate::operation::export_journal_to_s3::builders::ExportJournalToS3FluentBuilder::output_format) / [`set_output_format`](crate::operation::export_journal_to_s3::builders::ExportJournalToS3FluentBuilder::set_output_format):
    /// - On success, responds with [`ExportJournalToS3Output`](crate::operation::export_journal_to_s3::ExportJournalToS3Output).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn export_journal_to_s3(&self) -> crate::operation::export_journal_to_s3::builders::ExportJournalToS3FluentBuilder {
        crate::operation::export_journal_to_s3::builders::ExportJournalToS3FluentBuilder::new(self.handle.clone())
    }
}
