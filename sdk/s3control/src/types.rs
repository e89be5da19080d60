/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::types::_access_point::AccessPoint;
pub use crate::types::_job_descriptor::JobDescriptor;
pub use crate::types::_job_failure::JobFailure;
pub use crate::types::_job_list_descriptor::JobListDescriptor;
pub use crate::types::_job_manifest::JobManifest;
pub use crate::types::_job_manifest_field_name::JobManifestFieldName;
pub use crate::types::_job_manifest_format::JobManifestFormat;
pub use crate::types::_job_manifest_location::JobManifestLocation;
pub use crate::types::_job_manifest_spec::JobManifestSpec;
pub use crate::types::_job_operation::JobOperation;
pub use crate::types::_job_progress_summary::JobProgressSummary;
pub use crate::types::_job_report::JobReport;
pub use crate::types::_job_report_format::JobReportFormat;
pub use crate::types::_job_report_scope::JobReportScope;
pub use crate::types::_job_status::JobStatus;
pub use crate::types::_lambda_invoke_operation::LambdaInvokeOperation;
pub use crate::types::_network_origin::NetworkOrigin;
pub use crate::types::_operation_name::OperationName;
pub use crate::types::_public_access_block_configuration::PublicAccessBlockConfiguration;
pub use crate::types::_requested_job_status::RequestedJobStatus;
pub use crate::types::_s3_glacier_job_tier::S3GlacierJobTier;
pub use crate::types::_s3_initiate_restore_object_operation::S3InitiateRestoreObjectOperation;
pub use crate::types::_s3_set_object_tagging_operation::S3SetObjectTaggingOperation;
pub use crate::types::_s3_tag::S3Tag;
pub use crate::types::_vpc_configuration::VpcConfiguration;

mod _access_point;
mod _job_descriptor;
mod _job_failure;
mod _job_list_descriptor;
mod _job_manifest;
mod _job_manifest_field_name;
mod _job_manifest_format;
mod _job_manifest_location;
mod _job_manifest_spec;
mod _job_operation;
mod _job_progress_summary;
mod _job_report;
mod _job_report_format;
mod _job_report_scope;
mod _job_status;
mod _lambda_invoke_operation;
mod _network_origin;
mod _operation_name;
mod _public_access_block_configuration;
mod _requested_job_status;
mod _s3_glacier_job_tier;
mod _s3_initiate_restore_object_operation;
mod _s3_set_object_tagging_operation;
mod _s3_tag;
mod _vpc_configuration;

/// Builders
pub mod builders;

/// Error types that AWS S3 Control can respond with.
pub mod error;
