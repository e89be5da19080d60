/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::types::_journal_kinesis_stream_description::JournalKinesisStreamDescriptionBuilder;
pub use crate::types::_journal_s3_export_description::JournalS3ExportDescriptionBuilder;
pub use crate::types::_kinesis_configuration::KinesisConfigurationBuilder;
pub use crate::types::_ledger_encryption_description::LedgerEncryptionDescriptionBuilder;
pub use crate::types::_ledger_summary::LedgerSummaryBuilder;
pub use crate::types::_s3_encryption_configuration::S3EncryptionConfigurationBuilder;
pub use crate::types::_s3_export_configuration::S3ExportConfigurationBuilder;
pub use crate::types::_value_holder::ValueHolderBuilder;
