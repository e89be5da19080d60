/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::types::error::_bad_request_exception::BadRequestException;
pub use crate::types::error::_invalid_request_exception::InvalidRequestException;
pub use crate::types::error::_invalid_next_token_exception::InvalidNextTokenException;
pub use crate::types::error::_not_found_exception::NotFoundException;
pub use crate::types::error::_no_such_public_access_block_configuration::NoSuchPublicAccessBlockConfiguration;
pub use crate::types::error::_too_many_requests_exception::TooManyRequestsException;
pub use crate::types::error::_too_many_tags_exception::TooManyTagsException;
pub use crate::types::error::_idempotency_exception::IdempotencyException;
pub use crate::types::error::_internal_service_exception::InternalServiceException;
pub use crate::types::error::_job_status_exception::JobStatusException;

mod _bad_request_exception;
mod _invalid_request_exception;
mod _invalid_next_token_exception;
mod _not_found_exception;
mod _no_such_public_access_block_configuration;
mod _too_many_requests_exception;
mod _too_many_tags_exception;
mod _idempotency_exception;
mod _internal_service_exception;
mod _job_status_exception;

/// Builders
pub mod builders;
