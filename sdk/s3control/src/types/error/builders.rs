/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::types::error::_bad_request_exception::BadRequestExceptionBuilder;
pub use crate::types::error::_invalid_request_exception::InvalidRequestExceptionBuilder;
pub use crate::types::error::_invalid_next_token_exception::InvalidNextTokenExceptionBuilder;
pub use crate::types::error::_not_found_exception::NotFoundExceptionBuilder;
pub use crate::types::error::_no_such_public_access_block_configuration::NoSuchPublicAccessBlockConfigurationBuilder;
pub use crate::types::error::_too_many_requests_exception::TooManyRequestsExceptionBuilder;
pub use crate::types::error::_too_many_tags_exception::TooManyTagsExceptionBuilder;
pub use crate::types::error::_idempotency_exception::IdempotencyExceptionBuilder;
pub use crate::types::error::_internal_service_exception::InternalServiceExceptionBuilder;
pub use crate::types::error::_job_status_exception::JobStatusExceptionBuilder;
