/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct ExportJournalToS3Input {
    /// <p>The name of the ledger.</p>
    pub name: ::std::option::Option<::std::string::String>,
    /// <p>The inclusive start date and time for the range of journal contents to export.</p>
    pub inclusive_start_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    /// <p>The exclusive end date and time for the range of journal contents to export.</p>
    pub exclusive_end_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    /// <p>The configuration settings of the Amazon S3 bucket destination for your export request.</p>
    pub s3_export_configuration: ::std::option::Option<crate::types::S3ExportConfiguration>,
    /// <p>The Amazon Resource Name (ARN) of the IAM role that grants QLDB permissions for a journal export job.</p>
    pub role_arn: ::std::option::Option<::std::string::String>,
    /// <p>The output format of your exported journal data.</p>
    pub output_format: ::std::option::Option<crate::types::OutputFormat>,
}
impl ExportJournalToS3Input {
    /// <p>The name of the ledger.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The inclusive start date and time for the range of journal contents to export.</p>
    pub fn inclusive_start_time(&self) -> ::std::option::Option<&::aws_smithy_types::DateTime> {
        self.inclusive_start_time.as_ref()
    }
    /// <p>The exclusive end date and time for the range of journal contents to export.</p>
    pub fn exclusive_end_time(&self) -> ::std::option::Option<&::aws_smithy_types::DateTime> {
        self.exclusive_end_time.as_ref()
    }
    /// <p>The configuration settings of the Amazon S3 bucket destination for your export request.</p>
    pub fn s3_export_configuration(&self) -> ::std::option::Option<&crate::types::S3ExportConfiguration> {
        self.s3_export_configuration.as_ref()
    }
    /// <p>The Amazon Resource Name (ARN) of the IAM role that grants QLDB permissions for a journal export job.</p>
    pub fn role_arn(&self) -> ::std::option::Option<&str> {
        self.role_arn.as_deref()
    }
    /// <p>The output format of your exported journal data.</p>
    pub fn output_format(&self) -> ::std::option::Option<&crate::types::OutputFormat> {
        self.output_format.as_ref()
    }
}
impl ExportJournalToS3Input {
    /// Creates a new builder-style object to manufacture [`ExportJournalToS3Input`](crate::operation::export_journal_to_s3::ExportJournalToS3Input).
    pub fn builder() -> crate::operation::export_journal_to_s3::builders::ExportJournalToS3InputBuilder {
        crate::operation::export_journal_to_s3::builders::ExportJournalToS3InputBuilder::default()
    }
}

/// A builder for [`ExportJournalToS3Input`](crate::operation::export_journal_to_s3::ExportJournalToS3Input).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct ExportJournalToS3InputBuilder {
    pub(crate) name: ::std::option::Option<::std::string::String>,
    pub(crate) inclusive_start_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    pub(crate) exclusive_end_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    pub(crate) s3_export_configuration: ::std::option::Option<crate::types::S3ExportConfiguration>,
    pub(crate) role_arn: ::std::option::Option<::std::string::String>,
    pub(crate) output_format: ::std::option::Option<crate::types::OutputFormat>,
}
impl ExportJournalToS3InputBuilder {
    /// <p>The name of the ledger.</p>
    /// This field is required.
    pub fn name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name of the ledger.</p>
    pub fn set_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.name = input;
        self
    }
    /// <p>The name of the ledger.</p>
    pub fn get_name(&self) -> &::std::option::Option<::std::string::String> {
        &self.name
    }
    /// <p>The inclusive start date and time for the range of journal contents to export.</p>
    /// This field is required.
    pub fn inclusive_start_time(mut self, input: ::aws_smithy_types::DateTime) -> Self {
        self.inclusive_start_time = ::std::option::Option::Some(input);
        self
    }
    /// <p>The inclusive start date and time for the range of journal contents to export.</p>
    pub fn set_inclusive_start_time(mut self, input: ::std::option::Option<::aws_smithy_types::DateTime>) -> Self {
        self.inclusive_start_time = input;
        self
    }
    /// <p>The inclusive start date and time for the range of journal contents to export.</p>
    pub fn get_inclusive_start_time(&self) -> &::std::option::Option<::aws_smithy_types::DateTime> {
        &self.inclusive_start_time
    }
    /// <p>The exclusive end date and time for the range of journal contents to export.</p>
    /// This field is required.
    pub fn exclusive_end_time(mut self, input: ::aws_smithy_types::DateTime) -> Self {
        self.exclusive_end_time = ::std::option::Option::Some(input);
        self
    }
    /// <p>The exclusive end date and time for the range of journal contents to export.</p>
    pub fn set_exclusive_end_time(mut self, input: ::std::option::Option<::aws_smithy_types::DateTime>) -> Self {
        self.exclusive_end_time = input;
        self
    }
    /// <p>The exclusive end date and time for the range of journal contents to export.</p>
    pub fn get_exclusive_end_time(&self) -> &::std::option::Option<::aws_smithy_types::DateTime> {
        &self.exclusive_end_time
    }
    /// <p>The configuration settings of the Amazon S3 bucket destination for your export request.</p>
    /// This field is required.
    pub fn s3_export_configuration(mut self, input: crate::types::S3ExportConfiguration) -> Self {
        self.s3_export_configuration = ::std::option::Option::Some(input);
        self
    }
    /// <p>The configuration settings of the Amazon S3 bucket destination for your export request.</p>
    pub fn set_s3_export_configuration(mut self, input: ::std::option::Option<crate::types::S3ExportConfiguration>) -> Self {
        self.s3_export_configuration = input;
        self
    }
    /// <p>The configuration settings of the Amazon S3 bucket destination for your export request.</p>
    pub fn get_s3_export_configuration(&self) -> &::std::option::Option<crate::types::S3ExportConfiguration> {
        &self.s3_export_configuration
    }
    /// <p>The Amazon Resource Name (ARN) of the IAM role that grants QLDB permissions for a journal export job.</p>
    /// This field is required.
    pub fn role_arn(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.role_arn = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The Amazon Resource Name (ARN) of the IAM role that grants QLDB permissions for a journal export job.</p>
    pub fn set_role_arn(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.role_arn = input;
        self
    }
    /// <p>The Amazon Resource Name (ARN) of the IAM role that grants QLDB permissions for a journal export job.</p>
    pub fn get_role_arn(&self) -> &::std::option::Option<::std::string::String> {
        &self.role_arn
    }
    /// <p>The output format of your exported journal data.</p>
    pub fn output_format(mut self, input: impl ::std::convert::Into<crate::types::OutputFormat>) -> Self {
        self.output_format = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The output format of your exported journal data.</p>
    pub fn set_output_format(mut self, input: ::std::option::Option<crate::types::OutputFormat>) -> Self {
        self.output_format = input;
        self
    }
    /// <p>The output format of your exported journal data.</p>
    pub fn get_output_format(&self) -> &::std::option::Option<crate::types::OutputFormat> {
        &self.output_format
    }
    /// Consumes the builder and constructs a [`ExportJournalToS3Input`](crate::operation::export_journal_to_s3::ExportJournalToS3Input).
    ///
    /// Fails with a [`BuildError`](::aws_smithy_types::error::operation::BuildError) if a required member is unset.
    pub fn build(
        self,
    ) -> ::std::result::Result<crate::operation::export_journal_to_s3::ExportJournalToS3Input, ::aws_smithy_types::error::operation::BuildError> {
        if self.name.is_none() {
            return ::std::result::Result::Err(::aws_smithy_types::error::operation::BuildError::missing_field(
                "name",
                "name was not specified but it is required when building ExportJournalToS3Input",
            ));
        }
        if self.inclusive_start_time.is_none() {
            return ::std::result::Result::Err(::aws_smithy_types::error::operation::BuildError::missing_field(
                "inclusive_start_time",
                "inclusive_start_time was not specified but it is required when building ExportJournalToS3Input",
            ));
        }
        if self.exclusive_end_time.is_none() {
            return ::std::result::Result::Err(::aws_smithy_types::error::operation::BuildError::missing_field(
                "exclusive_end_time",
                "exclusive_end_time was not specified but it is required when building ExportJournalToS3Input",
            ));
        }
        if self.s3_export_configuration.is_none() {
            return ::std::result::Result::Err(::aws_smithy_types::error::operation::BuildError::missing_field(
                "s3_export_configuration",
                "s3_export_configuration was not specified but it is required when building ExportJournalToS3Input",
            ));
        }
        if self.role_arn.is_none() {
            return ::std::result::Result::Err(::aws_smithy_types::error::operation::BuildError::missing_field(
                "role_arn",
                "role_arn was not specified but it is required when building ExportJournalToS3Input",
            ));
        }
        ::std::result::Result::Ok(crate::operation::export_journal_to_s3::ExportJournalToS3Input {
            name: self.name,
            inclusive_start_time: self.inclusive_start_time,
            exclusive_end_time: self.exclusive_end_time,
            s3_export_configuration: self.s3_export_configuration,
            role_arn: self.role_arn,
            output_format: self.output_format,
        })
    }
}
