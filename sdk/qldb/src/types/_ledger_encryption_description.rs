/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Information about the encryption of data at rest in an Amazon QLDB ledger.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct LedgerEncryptionDescription {
    /// <p>The Amazon Resource Name (ARN) of the customer managed KMS key that the ledger uses for encryption at rest.</p>
    pub kms_key_arn: ::std::option::Option<::std::string::String>,
    /// <p>The current state of encryption at rest for the ledger.</p>
    pub encryption_status: ::std::option::Option<crate::types::EncryptionStatus>,
    /// <p>The date and time, in epoch time format, when the KMS key first became inaccessible, in the case of an error.</p>
    pub inaccessible_kms_key_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
}
impl LedgerEncryptionDescription {
    /// <p>The Amazon Resource Name (ARN) of the customer managed KMS key that the ledger uses for encryption at rest.</p>
    pub fn kms_key_arn(&self) -> ::std::option::Option<&str> {
        self.kms_key_arn.as_deref()
    }
    /// <p>The current state of encryption at rest for the ledger.</p>
    pub fn encryption_status(&self) -> ::std::option::Option<&crate::types::EncryptionStatus> {
        self.encryption_status.as_ref()
    }
    /// <p>The date and time, in epoch time format, when the KMS key first became inaccessible, in the case of an error.</p>
    pub fn inaccessible_kms_key_date_time(&self) -> ::std::option::Option<&::aws_smithy_types::DateTime> {
        self.inaccessible_kms_key_date_time.as_ref()
    }
}
impl LedgerEncryptionDescription {
    /// Creates a new builder-style object to manufacture [`LedgerEncryptionDescription`](crate::types::LedgerEncryptionDescription).
    pub fn builder() -> crate::types::builders::LedgerEncryptionDescriptionBuilder {
        crate::types::builders::LedgerEncryptionDescriptionBuilder::default()
    }
}

/// A builder for [`LedgerEncryptionDescription`](crate::types::LedgerEncryptionDescription).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct LedgerEncryptionDescriptionBuilder {
    pub(crate) kms_key_arn: ::std::option::Option<::std::string::String>,
    pub(crate) encryption_status: ::std::option::Option<crate::types::EncryptionStatus>,
    pub(crate) inaccessible_kms_key_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
}
impl LedgerEncryptionDescriptionBuilder {
    /// <p>The Amazon Resource Name (ARN) of the customer managed KMS key that the ledger uses for encryption at rest.</p>
    /// This field is required.
    pub fn kms_key_arn(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.kms_key_arn = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The Amazon Resource Name (ARN) of the customer managed KMS key that the ledger uses for encryption at rest.</p>
    pub fn set_kms_key_arn(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.kms_key_arn = input;
        self
    }
    /// <p>The Amazon Resource Name (ARN) of the customer managed KMS key that the ledger uses for encryption at rest.</p>
    pub fn get_kms_key_arn(&self) -> &::std::option::Option<::std::string::String> {
        &self.kms_key_arn
    }
    /// <p>The current state of encryption at rest for the ledger.</p>
    /// This field is required.
    pub fn encryption_status(mut self, input: impl ::std::convert::Into<crate::types::EncryptionStatus>) -> Self {
        self.encryption_status = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The current state of encryption at rest for the ledger.</p>
    pub fn set_encryption_status(mut self, input: ::std::option::Option<crate::types::EncryptionStatus>) -> Self {
        self.encryption_status = input;
        self
    }
    /// <p>The current state of encryption at rest for the ledger.</p>
    pub fn get_encryption_status(&self) -> &::std::option::Option<crate::types::EncryptionStatus> {
        &self.encryption_status
    }
    /// <p>The date and time, in epoch time format, when the KMS key first became inaccessible, in the case of an error.</p>
    pub fn inaccessible_kms_key_date_time(mut self, input: ::aws_smithy_types::DateTime) -> Self {
        self.inaccessible_kms_key_date_time = ::std::option::Option::Some(input);
        self
    }
    /// <p>The date and time, in epoch time format, when the KMS key first became inaccessible, in the case of an error.</p>
    pub fn set_inaccessible_kms_key_date_time(mut self, input: ::std::option::Option<::aws_smithy_types::DateTime>) -> Self {
        self.inaccessible_kms_key_date_time = input;
        self
    }
    /// <p>The date and time, in epoch time format, when the KMS key first became inaccessible, in the case of an error.</p>
    pub fn get_inaccessible_kms_key_date_time(&self) -> &::std::option::Option<::aws_smithy_types::DateTime> {
        &self.inaccessible_kms_key_date_time
    }
    /// Consumes the builder and constructs a [`LedgerEncryptionDescription`](crate::types::LedgerEncryptionDescription).
    pub fn build(self) -> crate::types::LedgerEncryptionDescription {
        crate::types::LedgerEncryptionDescription {
            kms_key_arn: self.kms_key_arn,
            encryption_status: self.encryption_status,
            inaccessible_kms_key_date_time: self.inaccessible_kms_key_date_time,
        }
    }
}
