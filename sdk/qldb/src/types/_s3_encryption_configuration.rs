/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The encryption settings that are used by a journal export job to write data in an Amazon S3 bucket.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct S3EncryptionConfiguration {
    /// <p>The Amazon S3 object encryption type.</p>
    pub object_encryption_type: ::std::option::Option<crate::types::S3ObjectEncryptionType>,
    /// <p>The Amazon Resource Name (ARN) of a symmetric key in Key Management Service.</p>
    pub kms_key_arn: ::std::option::Option<::std::string::String>,
}
impl S3EncryptionConfiguration {
    /// <p>The Amazon S3 object encryption type.</p>
    pub fn object_encryption_type(&self) -> ::std::option::Option<&crate::types::S3ObjectEncryptionType> {
        self.object_encryption_type.as_ref()
    }
    /// <p>The Amazon Resource Name (ARN) of a symmetric key in Key Management Service.</p>
    pub fn kms_key_arn(&self) -> ::std::option::Option<&str> {
        self.kms_key_arn.as_deref()
    }
}
impl S3EncryptionConfiguration {
    /// Creates a new builder-style object to manufacture [`S3EncryptionConfiguration`](crate::types::S3EncryptionConfiguration).
    pub fn builder() -> crate::types::builders::S3EncryptionConfigurationBuilder {
        crate::types::builders::S3EncryptionConfigurationBuilder::default()
    }
}

/// A builder for [`S3EncryptionConfiguration`](crate::types::S3EncryptionConfiguration).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct S3EncryptionConfigurationBuilder {
    pub(crate) object_encryption_type: ::std::option::Option<crate::types::S3ObjectEncryptionType>,
    pub(crate) kms_key_arn: ::std::option::Option<::std::string::String>,
}
impl S3EncryptionConfigurationBuilder {
    /// <p>The Amazon S3 object encryption type.</p>
    /// This field is required.
    pub fn object_encryption_type(mut self, input: impl ::std::convert::Into<crate::types::S3ObjectEncryptionType>) -> Self {
        self.object_encryption_type = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The Amazon S3 object encryption type.</p>
    pub fn set_object_encryption_type(mut self, input: ::std::option::Option<crate::types::S3ObjectEncryptionType>) -> Self {
        self.object_encryption_type = input;
        self
    }
    /// <p>The Amazon S3 object encryption type.</p>
    pub fn get_object_encryption_type(&self) -> &::std::option::Option<crate::types::S3ObjectEncryptionType> {
        &self.object_encryption_type
    }
    /// <p>The Amazon Resource Name (ARN) of a symmetric key in Key Management Service.</p>
    pub fn kms_key_arn(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.kms_key_arn = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The Amazon Resource Name (ARN) of a symmetric key in Key Management Service.</p>
    pub fn set_kms_key_arn(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.kms_key_arn = input;
        self
    }
    /// <p>The Amazon Resource Name (ARN) of a symmetric key in Key Management Service.</p>
    pub fn get_kms_key_arn(&self) -> &::std::option::Option<::std::string::String> {
        &self.kms_key_arn
    }
    /// Consumes the builder and constructs a [`S3EncryptionConfiguration`](crate::types::S3EncryptionConfiguration).
    pub fn build(self) -> crate::types::S3EncryptionConfiguration {
        crate::types::S3EncryptionConfiguration {
            object_encryption_type: self.object_encryption_type,
            kms_key_arn: self.kms_key_arn,
        }
    }
}
