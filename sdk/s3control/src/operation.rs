/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use ::aws_types::request_id::RequestId;

/// Types for the `CreateAccessPoint` operation.
pub mod create_access_point;

/// Types for the `GetAccessPoint` operation.
pub mod get_access_point;

/// Types for the `DeleteAccessPoint` operation.
pub mod delete_access_point;

/// Types for the `ListAccessPoints` operation.
pub mod list_access_points;

/// Types for the `GetAccessPointPolicy` operation.
pub mod get_access_point_policy;

/// Types for the `PutAccessPointPolicy` operation.
pub mod put_access_point_policy;

/// Types for the `DeleteAccessPointPolicy` operation.
pub mod delete_access_point_policy;

/// Types for the `GetPublicAccessBlock` operation.
pub mod get_public_access_block;

/// Types for the `PutPublicAccessBlock` operation.
pub mod put_public_access_block;

/// Types for the `DeletePublicAccessBlock` operation.
pub mod delete_public_access_block;

/// Types for the `CreateJob` operation.
pub mod create_job;

/// Types for the `DescribeJob` operation.
pub mod describe_job;

/// Types for the `ListJobs` operation.
pub mod list_jobs;

/// Types for the `UpdateJobPriority` operation.
pub mod update_job_priority;

/// Types for the `UpdateJobStatus` operation.
pub mod update_job_status;

/// Types for the `GetJobTagging` operation.
pub mod get_job_tagging;

/// Types for the `PutJobTagging` operation.
pub mod put_job_tagging;

/// Types for the `DeleteJobTagging` operation.
pub mod delete_job_tagging;
