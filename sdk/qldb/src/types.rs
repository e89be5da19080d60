/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::types::_encryption_status::EncryptionStatus;
pub use crate::types::_error_cause::ErrorCause;
pub use crate::types::_export_status::ExportStatus;
pub use crate::types::_journal_kinesis_stream_description::JournalKinesisStreamDescription;
pub use crate::types::_journal_s3_export_description::JournalS3ExportDescription;
pub use crate::types::_kinesis_configuration::KinesisConfiguration;
pub use crate::types::_ledger_encryption_description::LedgerEncryptionDescription;
pub use crate::types::_ledger_state::LedgerState;
pub use crate::types::_ledger_summary::LedgerSummary;
pub use crate::types::_output_format::OutputFormat;
pub use crate::types::_permissions_mode::PermissionsMode;
pub use crate::types::_s3_encryption_configuration::S3EncryptionConfiguration;
pub use crate::types::_s3_export_configuration::S3ExportConfiguration;
pub use crate::types::_s3_object_encryption_type::S3ObjectEncryptionType;
pub use crate::types::_stream_status::StreamStatus;
pub use crate::types::_value_holder::ValueHolder;

mod _encryption_status;
mod _error_cause;
mod _export_status;
mod _journal_kinesis_stream_description;
mod _journal_s3_export_description;
mod _kinesis_configuration;
mod _ledger_encryption_description;
mod _ledger_state;
mod _ledger_summary;
mod _output_format;
mod _permissions_mode;
mod _s3_encryption_configuration;
mod _s3_export_configuration;
mod _s3_object_encryption_type;
mod _stream_status;
mod _value_holder;

/// Builders
pub mod builders;

/// Error types that Amazon QLDB can respond with.
pub mod error;
