/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Contains the configuration parameters for an Initiate Glacier Restore job.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct S3InitiateRestoreObjectOperation {
    /// <p>The number of days that the restored copies remain available.</p>
    pub expiration_in_days: ::std::option::Option<i32>,
    /// <p>The retrieval tier used for the restore.</p>
    pub glacier_job_tier: ::std::option::Option<crate::types::S3GlacierJobTier>,
}
impl S3InitiateRestoreObjectOperation {
    /// <p>The number of days that the restored copies remain available.</p>
    pub fn expiration_in_days(&self) -> ::std::option::Option<i32> {
        self.expiration_in_days
    }
    /// <p>The retrieval tier used for the restore.</p>
    pub fn glacier_job_tier(&self) -> ::std::option::Option<&crate::types::S3GlacierJobTier> {
        self.glacier_job_tier.as_ref()
    }
}
impl S3InitiateRestoreObjectOperation {
    /// Creates a new builder-style object to manufacture [`S3InitiateRestoreObjectOperation`](crate::types::S3InitiateRestoreObjectOperation).
    pub fn builder() -> crate::types::builders::S3InitiateRestoreObjectOperationBuilder {
        crate::types::builders::S3InitiateRestoreObjectOperationBuilder::default()
    }
}

/// A builder for [`S3InitiateRestoreObjectOperation`](crate::types::S3InitiateRestoreObjectOperation).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct S3InitiateRestoreObjectOperationBuilder {
    pub(crate) expiration_in_days: ::std::option::Option<i32>,
    pub(crate) glacier_job_tier: ::std::option::Option<crate::types::S3GlacierJobTier>,
}
impl S3InitiateRestoreObjectOperationBuilder {
    /// <p>The number of days that the restored copies remain available.</p>
    pub fn expiration_in_days(mut self, input: i32) -> Self {
        self.expiration_in_days = ::std::option::Option::Some(input);
        self
    }
    /// <p>The number of days that the restored copies remain available.</p>
    pub fn set_expiration_in_days(mut self, input: ::std::option::Option<i32>) -> Self {
        self.expiration_in_days = input;
        self
    }
    /// <p>The number of days that the restored copies remain available.</p>
    pub fn get_expiration_in_days(&self) -> &::std::option::Option<i32> {
        &self.expiration_in_days
    }
    /// <p>The retrieval tier used for the restore.</p>
    pub fn glacier_job_tier(mut self, input: impl ::std::convert::Into<crate::types::S3GlacierJobTier>) -> Self {
        self.glacier_job_tier = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The retrieval tier used for the restore.</p>
    pub fn set_glacier_job_tier(mut self, input: ::std::option::Option<crate::types::S3GlacierJobTier>) -> Self {
        self.glacier_job_tier = input;
        self
    }
    /// <p>The retrieval tier used for the restore.</p>
    pub fn get_glacier_job_tier(&self) -> &::std::option::Option<crate::types::S3GlacierJobTier> {
        &self.glacier_job_tier
    }
    /// Consumes the builder and constructs a [`S3InitiateRestoreObjectOperation`](crate::types::S3InitiateRestoreObjectOperation).
    pub fn build(self) -> crate::types::S3InitiateRestoreObjectOperation {
        crate::types::S3InitiateRestoreObjectOperation {
            expiration_in_days: self.expiration_in_days,
            glacier_job_tier: self.glacier_job_tier,
        }
    }
}
