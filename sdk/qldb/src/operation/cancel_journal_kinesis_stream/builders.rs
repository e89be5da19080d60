/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::cancel_journal_kinesis_stream::_cancel_journal_kinesis_stream_output::CancelJournalKinesisStreamOutputBuilder;

pub use crate::operation::cancel_journal_kinesis_stream::_cancel_journal_kinesis_stream_input::CancelJournalKinesisStreamInputBuilder;

/// Fluent builder constructing a request to `CancelJournalKinesisStream`.
///
/// <p>Ends a given Amazon QLDB journal stream.</p>
#[derive(::std::clone::Clone, ::std::fmt::Debug)]
pub struct CancelJournalKinesisStreamFluentBuilder {
    handle: ::std::sync::Arc<crate::client::Handle>,
    inner: crate::operation::cancel_journal_kinesis_stream::builders::CancelJournalKinesisStreamInputBuilder,
}
impl CancelJournalKinesisStreamFluentBuilder {
    /// Creates a new `CancelJournalKinesisStreamFluentBuilder`.
    pub(crate) fn new(handle: ::std::sync::Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }
    /// Access the CancelJournalKinesisStream as a reference.
    pub fn as_input(&self) -> &crate::operation::cancel_journal_kinesis_stream::builders::CancelJournalKinesisStreamInputBuilder {
        &self.inner
    }
    /// Sends the request and returns the response.
    ///
    /// If an error occurs, an `SdkError` will be returned with additional details that
    /// can be matched against.
    pub fn send(
        self,
    ) -> ::std::result::Result<
        crate::operation::cancel_journal_kinesis_stream::CancelJournalKinesisStreamOutput,
        ::aws_smithy_runtime::client::result::SdkError<crate::Error>,
    > {
        let input = self
            .inner
            .build()
            .map_err(::aws_smithy_runtime::client::result::SdkError::construction_failure)?;
        self.handle.invoke::<crate::operation::cancel_journal_kinesis_stream::CancelJournalKinesisStream>(&input)
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
    /// <p>The UUID (represented in Base62-encoded text) of the QLDB journal stream to be canceled.</p>
    pub fn stream_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.inner = self.inner.stream_id(input);
        self
    }
    /// <p>The UUID (represented in Base62-encoded text) of the QLDB journal stream to be canceled.</p>
    pub fn set_stream_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.inner = self.inner.set_stream_id(input);
        self
    }
    /// <p>The UUID (represented in Base62-encoded text) of the QLDB journal stream to be canceled.</p>
    pub fn get_stream_id(&self) -> &::std::option::Option<::std::string::String> {
        self.inner.get_stream_id()
    }
}
