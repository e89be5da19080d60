/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct StreamJournalToKinesisInput {
    /// <p>The name of the ledger.</p>
    pub ledger_name: ::std::option::Option<::std::string::String>,
    /// <p>The Amazon Resource Name (ARN) of the IAM role that grants QLDB permissions for a journal stream to write data records to a Kinesis Data Streams resource.</p>
    pub role_arn: ::std::option::Option<::std::string::String>,
    /// <p>The key-value pairs to add as tags to the stream that you want to create.</p>
    pub tags: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
    /// <p>The inclusive start date and time from which to start streaming journal data.</p>
    pub inclusive_start_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    /// <p>The exclusive date and time that specifies when the stream ends.</p>
    pub exclusive_end_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    /// <p>The configuration settings of the Kinesis Data Streams destination for your stream request.</p>
    pub kinesis_configuration: ::std::option::Option<crate::types::KinesisConfiguration>,
    /// <p>The name that you want to assign to the QLDB journal stream.</p>
    pub stream_name: ::std::option::Option<::std::string::String>,
}
impl StreamJournalToKinesisInput {
    /// <p>The name of the ledger.</p>
    pub fn ledger_name(&self) -> ::std::option::Option<&str> {
        self.ledger_name.as_deref()
    }
    /// <p>The Amazon Resource Name (ARN) of the IAM role that grants QLDB permissions for a journal stream to write data records to a Kinesis Data Streams resource.</p>
    pub fn role_arn(&self) -> ::std::option::Option<&str> {
        self.role_arn.as_deref()
    }
    /// <p>The key-value pairs to add as tags to the stream that you want to create.</p>
    pub fn tags(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::string::String>> {
        self.tags.as_ref()
    }
    /// <p>The inclusive start date and time from which to start streaming journal data.</p>
    pub fn inclusive_start_time(&self) -> ::std::option::Option<&::aws_smithy_types::DateTime> {
        self.inclusive_start_time.as_ref()
    }
    /// <p>The exclusive date and time that specifies when the stream ends.</p>
    pub fn exclusive_end_time(&self) -> ::std::option::Option<&::aws_smithy_types::DateTime> {
        self.exclusive_end_time.as_ref()
    }
    /// <p>The configuration settings of the Kinesis Data Streams destination for your stream request.</p>
    pub fn kinesis_configuration(&self) -> ::std::option::Option<&crate::types::KinesisConfiguration> {
        self.kinesis_configuration.as_ref()
    }
    /// <p>The name that you want to assign to the QLDB journal stream.</p>
    pub fn stream_name(&self) -> ::std::option::Option<&str> {
        self.stream_name.as_deref()
    }
}
impl StreamJournalToKinesisInput {
    /// Creates a new builder-style object to manufacture [`StreamJournalToKinesisInput`](crate::operation::stream_journal_to_kinesis::StreamJournalToKinesisInput).
    pub fn builder() -> crate::operation::stream_journal_to_kinesis::builders::StreamJournalToKinesisInputBuilder {
        crate::operation::stream_journal_to_kinesis::builders::StreamJournalToKinesisInputBuilder::default()
    }
}

/// A builder for [`StreamJournalToKinesisInput`](crate::operation::stream_journal_to_kinesis::StreamJournalToKinesisInput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct StreamJournalToKinesisInputBuilder {
    pub(crate) ledger_name: ::std::option::Option<::std::string::String>,
    pub(crate) role_arn: ::std::option::Option<::std::string::String>,
    pub(crate) tags: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
    pub(crate) inclusive_start_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    pub(crate) exclusive_end_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    pub(crate) kinesis_configuration: ::std::option::Option<crate::types::KinesisConfiguration>,
    pub(crate) stream_name: ::std::option::Option<::std::string::String>,
}
impl StreamJournalToKinesisInputBuilder {
    /// <p>The name of the ledger.</p>
    /// This field is required.
    pub fn ledger_name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.ledger_name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name of the ledger.</p>
    pub fn set_ledger_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.ledger_name = input;
        self
    }
    /// <p>The name of the ledger.</p>
    pub fn get_ledger_name(&self) -> &::std::option::Option<::std::string::String> {
        &self.ledger_name
    }
    /// <p>The Amazon Resource Name (ARN) of the IAM role that grants QLDB permissions for a journal stream to write data records to a Kinesis Data Streams resource.</p>
    /// This field is required.
    pub fn role_arn(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.role_arn = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The Amazon Resource Name (ARN) of the IAM role that grants QLDB permissions for a journal stream to write data records to a Kinesis Data Streams resource.</p>
    pub fn set_role_arn(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.role_arn = input;
        self
    }
    /// <p>The Amazon Resource Name (ARN) of the IAM role that grants QLDB permissions for a journal stream to write data records to a Kinesis Data Streams resource.</p>
    pub fn get_role_arn(&self) -> &::std::option::Option<::std::string::String> {
        &self.role_arn
    }
    /// Adds a key-value pair to `tags`.
    ///
    /// To override the contents of this collection use [`set_tags`](Self::set_tags).
    ///
    /// Fails with a [`DuplicateKeyError`](::aws_smithy_types::error::DuplicateKeyError) if `k` is
    /// already present, leaving the map unchanged.
    pub fn insert_tags(
        &mut self,
        k: impl ::std::convert::Into<::std::string::String>,
        v: impl ::std::convert::Into<::std::string::String>,
    ) -> ::std::result::Result<&mut Self, ::aws_smithy_types::error::DuplicateKeyError> {
        ::aws_smithy_types::map::insert_unique(&mut self.tags, k, v.into())?;
        ::std::result::Result::Ok(self)
    }
    /// <p>The key-value pairs to add as tags to the stream that you want to create.</p>
    pub fn set_tags(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>) -> Self {
        self.tags = input;
        self
    }
    /// <p>The key-value pairs to add as tags to the stream that you want to create.</p>
    pub fn get_tags(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>> {
        &self.tags
    }
    /// <p>The inclusive start date and time from which to start streaming journal data.</p>
    /// This field is required.
    pub fn inclusive_start_time(mut self, input: ::aws_smithy_types::DateTime) -> Self {
        self.inclusive_start_time = ::std::option::Option::Some(input);
        self
    }
    /// <p>The inclusive start date and time from which to start streaming journal data.</p>
    pub fn set_inclusive_start_time(mut self, input: ::std::option::Option<::aws_smithy_types::DateTime>) -> Self {
        self.inclusive_start_time = input;
        self
    }
    /// <p>The inclusive start date and time from which to start streaming journal data.</p>
    pub fn get_inclusive_start_time(&self) -> &::std::option::Option<::aws_smithy_types::DateTime> {
        &self.inclusive_start_time
    }
    /// <p>The exclusive date and time that specifies when the stream ends.</p>
    pub fn exclusive_end_time(mut self, input: ::aws_smithy_types::DateTime) -> Self {
        self.exclusive_end_time = ::std::option::Option::Some(input);
        self
    }
    /// <p>The exclusive date and time that specifies when the stream ends.</p>
    pub fn set_exclusive_end_time(mut self, input: ::std::option::Option<::aws_smithy_types::DateTime>) -> Self {
        self.exclusive_end_time = input;
        self
    }
    /// <p>The exclusive date and time that specifies when the stream ends.</p>
    pub fn get_exclusive_end_time(&self) -> &::std::option::Option<::aws_smithy_types::DateTime> {
        &self.exclusive_end_time
    }
    /// <p>The configuration settings of the Kinesis Data Streams destination for your stream request.</p>
    /// This field is required.
    pub fn kinesis_configuration(mut self, input: crate::types::KinesisConfiguration) -> Self {
        self.kinesis_configuration = ::std::option::Option::Some(input);
        self
    }
    /// <p>The configuration settings of the Kinesis Data Streams destination for your stream request.</p>
    pub fn set_kinesis_configuration(mut self, input: ::std::option::Option<crate::types::KinesisConfiguration>) -> Self {
        self.kinesis_configuration = input;
        self
    }
    /// <p>The configuration settings of the Kinesis Data Streams destination for your stream request.</p>
    pub fn get_kinesis_configuration(&self) -> &::std::option::Option<crate::types::KinesisConfiguration> {
        &self.kinesis_configuration
    }
    /// <p>The name that you want to assign to the QLDB journal stream.</p>
    /// This field is required.
    pub fn stream_name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.stream_name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name that you want to assign to the QLDB journal stream.</p>
    pub fn set_stream_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.stream_name = input;
        self
    }
    /// <p>The name that you want to assign to the QLDB journal stream.</p>
    pub fn get_stream_name(&self) -> &::std::option::Option<::std::string::String> {
        &self.stream_name
    }
    /// Consumes the builder and constructs a [`StreamJournalToKinesisInput`](crate::operation::stream_journal_to_kinesis::StreamJournalToKinesisInput).
    ///
    /// Fails with a [`BuildError`](::aws_smithy_types::error::operation::BuildError) if a required member is unset.
    pub fn build(
        self,
    ) -> ::std::result::Result<crate::operation::stream_journal_to_kinesis::StreamJournalToKinesisInput, ::aws_smithy_types::error::operation::BuildError> {
        if self.ledger_name.is_none() {
            return ::std::result::Result::Err(::aws_smithy_types::error::operation::BuildError::missing_field(
                "ledger_name",
                "ledger_name was not specified but it is required when building StreamJournalToKinesisInput",
            ));
        }
        if self.role_arn.is_none() {
            return ::std::result::Result::Err(::aws_smithy_types::error::operation::BuildError::missing_field(
                "role_arn",
                "role_arn was not specified but it is required when building StreamJournalToKinesisInput",
            ));
        }
        if self.inclusive_start_time.is_none() {
            return ::std::result::Result::Err(::aws_smithy_types::error::operation::BuildError::missing_field(
                "inclusive_start_time",
                "inclusive_start_time was not specified but it is required when building StreamJournalToKinesisInput",
            ));
        }
        if self.kinesis_configuration.is_none() {
            return ::std::result::Result::Err(::aws_smithy_types::error::operation::BuildError::missing_field(
                "kinesis_configuration",
                "kinesis_configuration was not specified but it is required when building StreamJournalToKinesisInput",
            ));
        }
        if self.stream_name.is_none() {
            return ::std::result::Result::Err(::aws_smithy_types::error::operation::BuildError::missing_field(
                "stream_name",
                "stream_name was not specified but it is required when building StreamJournalToKinesisInput",
            ));
        }
        ::std::result::Result::Ok(crate::operation::stream_journal_to_kinesis::StreamJournalToKinesisInput {
            ledger_name: self.ledger_name,
            role_arn: self.role_arn,
            tags: self.tags,
            inclusive_start_time: self.inclusive_start_time,
            exclusive_end_time: self.exclusive_end_time,
            kinesis_configuration: self.kinesis_configuration,
            stream_name: self.stream_name,
        })
    }
}
