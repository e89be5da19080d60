/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use ::aws_types::request_id::RequestId;

/// Types for the `CancelJournalKinesisStream` operation.
pub mod cancel_journal_kinesis_stream;

/// Types for the `CreateLedger` operation.
pub mod create_ledger;

/// Types for the `DeleteLedger` operation.
pub mod delete_ledger;

/// Types for the `DescribeJournalKinesisStream` operation.
pub mod describe_journal_kinesis_stream;

/// Types for the `DescribeJournalS3Export` operation.
pub mod describe_journal_s3_export;

/// Types for the `DescribeLedger` operation.
pub mod describe_ledger;

/// Types for the `ExportJournalToS3` operation.
pub mod export_journal_to_s3;

/// Types for the `GetBlock` operation.
pub mod get_block;

/// Types for the `GetDigest` operation.
pub mod get_digest;

/// Types for the `GetRevision` operation.
pub mod get_revision;

/// Types for the `ListJournalKinesisStreamsForLedger` operation.
pub mod list_journal_kinesis_streams_for_ledger;

/// Types for the `ListJournalS3Exports` operation.
pub mod list_journal_s3_exports;

/// Types for the `ListJournalS3ExportsForLedger` operation.
pub mod list_journal_s3_exports_for_ledger;

/// Types for the `ListLedgers` operation.
pub mod list_ledgers;

/// Types for the `ListTagsForResource` operation.
pub mod list_tags_for_resource;

/// Types for the `StreamJournalToKinesis` operation.
pub mod stream_journal_to_kinesis;

/// Types for the `TagResource` operation.
pub mod tag_resource;

/// Types for the `UntagResource` operation.
pub mod untag_resource;

/// Types for the `UpdateLedger` operation.
pub mod update_ledger;

/// Types for the `UpdateLedgerPermissionsMode` operation.
pub mod update_ledger_permissions_mode;
