/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct DescribeJournalS3ExportInput {
    /// <p>The name of the ledger.</p>
    pub name: ::std::option::Option<::std::string::String>,
    /// <p>The UUID (represented in Base62-encoded text) of the journal export job to describe.</p>
    pub export_id: ::std::option::Option<::std::string::String>,
}
impl DescribeJournalS3ExportInput {
    /// <p>The name of the ledger.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The UUID (represented in Base62-encoded text) of the journal export job to describe.</p>
    pub fn export_id(&self) -> ::std::option::Option<&str> {
        self.export_id.as_deref()
    }
}
impl DescribeJournalS3ExportInput {
    /// Creates a new builder-style object to manufacture [`DescribeJournalS3ExportInput`](crate::operation::describe_journal_s3_export::DescribeJournalS3ExportInput).
    pub fn builder() -> crate::operation::describe_journal_s3_export::builders::DescribeJournalS3ExportInputBuilder {
        crate::operation::describe_journal_s3_export::builders::DescribeJournalS3ExportInputBuilder::default()
    }
}

/// A builder for [`DescribeJournalS3ExportInput`](crate::operation::describe_journal_s3_export::DescribeJournalS3ExportInput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct DescribeJournalS3ExportInputBuilder {
    pub(crate) name: ::std::option::Option<::std::string::String>,
    pub(crate) export_id: ::std::option::Option<::std::string::String>,
}
impl DescribeJournalS3ExportInputBuilder {
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
    /// <p>The UUID (represented in Base62-encoded text) of the journal export job to describe.</p>
    /// This field is required.
    pub fn export_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.export_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The UUID (represented in Base62-encoded text) of the journal export job to describe.</p>
    pub fn set_export_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.export_id = input;
        self
    }
    /// <p>The UUID (represented in Base62-encoded text) of the journal export job to describe.</p>
    pub fn get_export_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.export_id
    }
    /// Consumes the builder and constructs a [`DescribeJournalS3ExportInput`](crate::operation::describe_journal_s3_export::DescribeJournalS3ExportInput).
    ///
    /// Fails with a [`BuildError`](::aws_smithy_types::error::operation::BuildError) if a required member is unset.
    pub fn build(
        self,
    ) -> ::std::result::Result<crate::operation::describe_journal_s3_export::DescribeJournalS3ExportInput, ::aws_smithy_types::error::operation::BuildError> {
        if self.name.is_none() {
            return ::std::result::Result::Err(::aws_smithy_types::error::operation::BuildError::missing_field(
                "name",
                "name was not specified but it is required when building DescribeJournalS3ExportInput",
            ));
        }
        if self.export_id.is_none() {
            return ::std::result::Result::Err(::aws_smithy_types::error::operation::BuildError::missing_field(
                "export_id",
                "export_id was not specified but it is required when building DescribeJournalS3ExportInput",
            ));
        }
        ::std::result::Result::Ok(crate::operation::describe_journal_s3_export::DescribeJournalS3ExportInput {
            name: self.name,
            export_id: self.export_id,
        })
    }
}
