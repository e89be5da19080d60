/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::describe_journal_s3_export::_describe_journal_s3_export_output::DescribeJournalS3ExportOutputBuilder;

pub use crate::operation::describe_journal_s3_export::_describe_journal_s3_export_input::DescribeJournalS3ExportInputBuilder;

/// Fluent builder constructing a request to `DescribeJournalS3Export`.
///
/// <p>Returns information about a journal export job, including the ledger name, export ID, creation time, current status, and the parameters of the original export creation request.</p>
#[derive(::std::clone::Clone, ::std::fmt::Debug)]
pub struct DescribeJournalS3ExportFluentBuilder {
    handle: ::std::sync::Arc<crate::client::Handle>,
    inner: crate::operation::describe_journal_s3_export::builders::DescribeJournalS3ExportInputBuilder,
}
impl DescribeJournalS3ExportFluentBuilder {
    /// Creates a new `DescribeJournalS3ExportFluentBuilder`.
    pub(crate) fn new(handle: ::std::sync::Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }
    /// Access the DescribeJournalS3Export as a reference.
    pub fn as_input(&self) -> &crate::operation::describe_journal_s3_export::builders::DescribeJournalS3ExportInputBuilder {
        &self.inner
    }
    /// Sends the request and returns the response.
    ///
    /// If an error occurs, an `SdkError` will be returned with additional details that
    /// can be matched against.
    pub fn send(
        self,
    ) -> ::std::result::Result<
        crate::operation::describe_journal_s3_export::DescribeJournalS3ExportOutput,
        ::aws_smithy_runtime::client::result::SdkError<crate::Error>,
    > {
        let input = self
            .inner
            .build()
            .map_err(::aws_smithy_runtime::client::result::SdkError::construction_failure)?;
        self.handle.invoke::<crate::operation::describe_journal_s3_export::DescribeJournalS3Export>(&input)
    }
    /// <p>The name of the ledger.</p>
    pub fn name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.inner = self.inner.name(input);
        self
    }
    /// <p>The name of the ledger.</p>
    pub fn set_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.inner = self.inner.set_name(input);
        self
    }
    /// <p>The name of the ledger.</p>
    pub fn get_name(&self) -> &::std::option::Option<::std::string::String> {
        self.inner.get_name()
    }
    /// <p>The UUID (represented in Base62-encoded text) of the journal export job to describe.</p>
    pub fn export_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.inner = self.inner.export_id(input);
        self
    }
    /// <p>The UUID (represented in Base62-encoded text) of the journal export job to describe.</p>
    pub fn set_export_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.inner = self.inner.set_export_id(input);
        self
    }
    /// <p>The UUID (represented in Base62-encoded text) of the journal export job to describe.</p>
    pub fn get_export_id(&self) -> &::std::option::Option<::std::string::String> {
        self.inner.get_export_id()
    }
}
