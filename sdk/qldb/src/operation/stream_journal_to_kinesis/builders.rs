/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::stream_journal_to_kinesis::_stream_journal_to_kinesis_output::StreamJournalToKinesisOutputBuilder;

pub use crate::operation::stream_journal_to_kinesis::_stream_journal_to_kinesis_input::StreamJournalToKinesisInputBuilder;

/// Fluent builder constructing a request to `StreamJournalToKinesis`.
///
/// <p>Creates a journal stream for a given Amazon QLDB ledger.</p>
#[derive(::std::clone::Clone, ::std::fmt::Debug)]
pub struct StreamJournalToKinesisFluentBuilder {
    handle: ::std::sync::Arc<crate::client::Handle>,
    inner: crate::operation::stream_journal_to_kinesis::builders::StreamJournalToKinesisInputBuilder,
}
impl StreamJournalToKinesisFluentBuilder {
    /// Creates a new `StreamJournalToKinesisFluentBuilder`.
    pub(crate) fn new(handle: ::std::sync::Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }
    /// Access the StreamJournalToKinesis as a reference.
    pub fn as_input(&self) -> &crate::operation::stream_journal_to_kinesis::builders::StreamJournalToKinesisInputBuilder {
        &self.inner
    }
    /// Sends the request and returns the response.
    ///
    /// If an error occurs, an `SdkError` will be returned with additional details that
    /// can be matched against.
    pub fn send(
        self,
    ) -> ::std::result::Result<
        crate::operation::stream_journal_to_kinesis::StreamJournalToKinesisOutput,
        ::aws_smithy_runtime::client::result::SdkError<crate::Error>,
    > {
        let input = self
            .inner
            .build()
            .map_err(::aws_smithy_runtime::client::result::SdkError::construction_failure)?;
        self.handle.invoke::<crate::operation::stream_journal_to_kinesis::StreamJournalToKinesis>(&input)
    }
    /// <p>The name of the ledger.</p>
    pub fn ledger_name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.inner = self.inner.ledger_name(input);
        self
    }
    /// <p>The name of the ledger.</p>
    pub fn set_ledger_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.inner = self.inner.set_ledger_name(input);
        self
    }
    /// <p>The name of the ledger.</p>
    pub fn get_ledger_name(&self) -> &::std::option::Option<::std::string::String> {
        self.inner.get_ledger_name()
    }
    /// <p>The Amazon Resource Name (ARN) of the IAM role that grants QLDB permissions for a journal stream to write data records to a Kinesis Data Streams resource.</p>
    pub fn role_arn(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.inner = self.inner.role_arn(input);
        self
    }
    /// <p>The Amazon Resource Name (ARN) of the IAM role that grants QLDB permissions for a journal stream to write data records to a Kinesis Data Streams resource.</p>
    pub fn set_role_arn(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.inner = self.inner.set_role_arn(input);
        self
    }
    /// <p>The Amazon Resource Name (ARN) of the IAM role that grants QLDB permissions for a journal stream to write data records to a Kinesis Data Streams resource.</p>
    pub fn get_role_arn(&self) -> &::std::option::Option<::std::string::String> {
        self.inner.get_role_arn()
    }
    /// Adds a key-value pair to `tags`.
    ///
    /// Fails if `k` is already present, leaving the map unchanged.
    pub fn insert_tags(
        &mut self,
        k: impl ::std::convert::Into<::std::string::String>,
        v: impl ::std::convert::Into<::std::string::String>,
    ) -> ::std::result::Result<&mut Self, ::aws_smithy_types::error::DuplicateKeyError> {
        self.inner.insert_tags(k, v)?;
        ::std::result::Result::Ok(self)
    }
    /// <p>The key-value pairs to add as tags to the stream that you want to create.</p>
    pub fn set_tags(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>) -> Self {
        self.inner = self.inner.set_tags(input);
        self
    }
    /// <p>The key-value pairs to add as tags to the stream that you want to create.</p>
    pub fn get_tags(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>> {
        self.inner.get_tags()
    }
    /// <p>The inclusive start date and time from which to start streaming journal data.</p>
    pub fn inclusive_start_time(mut self, input: ::aws_smithy_types::DateTime) -> Self {
        self.inner = self.inner.inclusive_start_time(input);
        self
    }
    /// <p>The inclusive start date and time from which to start streaming journal data.</p>
    pub fn set_inclusive_start_time(mut self, input: ::std::option::Option<::aws_smithy_types::DateTime>) -> Self {
        self.inner = self.inner.set_inclusive_start_time(input);
        self
    }
    /// <p>The inclusive start date and time from which to start streaming journal data.</p>
    pub fn get_inclusive_start_time(&self) -> &::std::option::Option<::aws_smithy_types::DateTime> {
        self.inner.get_inclusive_start_time()
    }
    /// <p>The exclusive date and time that specifies when the stream ends.</p>
    pub fn exclusive_end_time(mut self, input: ::aws_smithy_types::DateTime) -> Self {
        self.inner = self.inner.exclusive_end_time(input);
        self
    }
    /// <p>The exclusive date and time that specifies when the stream ends.</p>
    pub fn set_exclusive_end_time(mut self, input: ::std::option::Option<::aws_smithy_types::DateTime>) -> Self {
        self.inner = self.inner.set_exclusive_end_time(input);
        self
    }
    /// <p>The exclusive date and time that specifies when the stream ends.</p>
    pub fn get_exclusive_end_time(&self) -> &::std::option::Option<::aws_smithy_types::DateTime> {
        self.inner.get_exclusive_end_time()
    }
    /// <p>The configuration settings of the Kinesis Data Streams destination for your stream request.</p>
    pub fn kinesis_configuration(mut self, input: crate::types::KinesisConfiguration) -> Self {
        self.inner = self.inner.kinesis_configuration(input);
        self
    }
    /// <p>The configuration settings of the Kinesis Data Streams destination for your stream request.</p>
    pub fn set_kinesis_configuration(mut self, input: ::std::option::Option<crate::types::KinesisConfiguration>) -> Self {
        self.inner = self.inner.set_kinesis_configuration(input);
        self
    }
    /// <p>The configuration settings of the Kinesis Data Streams destination for your stream request.</p>
    pub fn get_kinesis_configuration(&self) -> &::std::option::Option<crate::types::KinesisConfiguration> {
        self.inner.get_kinesis_configuration()
    }
    /// <p>The name that you want to assign to the QLDB journal stream.</p>
    pub fn stream_name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.inner = self.inner.stream_name(input);
        self
    }
    /// <p>The name that you want to assign to the QLDB journal stream.</p>
    pub fn set_stream_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.inner = self.inner.set_stream_name(input);
        self
    }
    /// <p>The name that you want to assign to the QLDB journal stream.</p>
    pub fn get_stream_name(&self) -> &::std::option::Option<::std::string::String> {
        self.inner.get_stream_name()
    }
}
