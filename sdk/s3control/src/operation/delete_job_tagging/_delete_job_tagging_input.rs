/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct DeleteJobTaggingInput {
    /// <p>The account ID for the owner of the resource.</p>
    pub account_id: ::std::option::Option<::std::string::String>,
    /// <p>The ID for the S3 Batch Operations job whose tags you want to delete.</p>
    pub job_id: ::std::option::Option<::std::string::String>,
}
impl DeleteJobTaggingInput {
    /// <p>The account ID for the owner of the resource.</p>
    pub fn account_id(&self) -> ::std::option::Option<&str> {
        self.account_id.as_deref()
    }
    /// <p>The ID for the S3 Batch Operations job whose tags you want to delete.</p>
    pub fn job_id(&self) -> ::std::option::Option<&str> {
        self.job_id.as_deref()
    }
}
impl DeleteJobTaggingInput {
    /// Creates a new builder-style object to manufacture [`DeleteJobTaggingInput`](crate::operation::delete_job_tagging::DeleteJobTaggingInput).
    pub fn builder() -> crate::operation::delete_job_tagging::builders::DeleteJobTaggingInputBuilder {
        crate::operation::delete_job_tagging::builders::DeleteJobTaggingInputBuilder::default()
    }
}

/// A builder for [`DeleteJobTaggingInput`](crate::operation::delete_job_tagging::DeleteJobTaggingInput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct DeleteJobTaggingInputBuilder {
    pub(crate) account_id: ::std::option::Option<::std::string::String>,
    pub(crate) job_id: ::std::option::Option<::std::string::String>,
}
impl DeleteJobTaggingInputBuilder {
    /// <p>The account ID for the owner of the resource.</p>
    /// This field is required.
    pub fn account_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.account_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The account ID for the owner of the resource.</p>
    pub fn set_account_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.account_id = input;
        self
    }
    /// <p>The account ID for the owner of the resource.</p>
    pub fn get_account_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.account_id
    }
    /// <p>The ID for the S3 Batch Operations job whose tags you want to delete.</p>
    /// This field is required.
    pub fn job_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.job_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The ID for the S3 Batch Operations job whose tags you want to delete.</p>
    pub fn set_job_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.job_id = input;
        self
    }
    /// <p>The ID for the S3 Batch Operations job whose tags you want to delete.</p>
    pub fn get_job_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.job_id
    }
    /// Consumes the builder and constructs a [`DeleteJobTaggingInput`](crate::operation::delete_job_tagging::DeleteJobTaggingInput).
    ///
    /// Fails with a [`BuildError`](::aws_smithy_types::error::operation::BuildError) if a required member is unset.
    pub fn build(
        self,
    ) -> ::std::result::Result<crate::operation::delete_job_tagging::DeleteJobTaggingInput, ::aws_smithy_types::error::operation::BuildError> {
        if self.account_id.is_none() {
            return ::std::result::Result::Err(::aws_smithy_types::error::operation::BuildError::missing_field(
                "account_id",
                "account_id was not specified but it is required when building DeleteJobTaggingInput",
            ));
        }
        if self.job_id.is_none() {
            return ::std::result::Result::Err(::aws_smithy_types::error::operation::BuildError::missing_field(
                "job_id",
                "job_id was not specified but it is required when building DeleteJobTaggingInput",
            ));
        }
        ::std::result::Result::Ok(crate::operation::delete_job_tagging::DeleteJobTaggingInput {
            account_id: self.account_id,
            job_id: self.job_id,
        })
    }
}
