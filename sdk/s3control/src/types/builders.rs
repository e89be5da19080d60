/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::types::_access_point::AccessPointBuilder;
pub use crate::types::_job_descriptor::JobDescriptorBuilder;
pub use crate::types::_job_failure::JobFailureBuilder;
pub use crate::types::_job_list_descriptor::JobListDescriptorBuilder;
pub use crate::types::_job_manifest::JobManifestBuilder;
pub use crate::types::_job_manifest_location::JobManifestLocationBuilder;
pub use crate::types::_job_manifest_spec::JobManifestSpecBuilder;
pub use crate::types::_job_operation::JobOperationBuilder;
pub use crate::types::_job_progress_summary::JobProgressSummaryBuilder;
pub use crate::types::_job_report::JobReportBuilder;
pub use crate::types::_lambda_invoke_operation::LambdaInvokeOperationBuilder;
pub use crate::types::_public_access_block_configuration::PublicAccessBlockConfigurationBuilder;
pub use crate::types::_s3_initiate_restore_object_operation::S3InitiateRestoreObjectOperationBuilder;
pub use crate::types::_s3_set_object_tagging_operation::S3SetObjectTaggingOperationBuilder;
pub use crate::types::_s3_tag::S3TagBuilder;
pub use crate::types::_vpc_configuration::VpcConfigurationBuilder;
