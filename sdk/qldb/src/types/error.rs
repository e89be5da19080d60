/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::types::error::_invalid_parameter_exception::InvalidParameterException;
pub use crate::types::error::_limit_exceeded_exception::LimitExceededException;
pub use crate::types::error::_resource_already_exists_exception::ResourceAlreadyExistsException;
pub use crate::types::error::_resource_in_use_exception::ResourceInUseException;
pub use crate::types::error::_resource_not_found_exception::ResourceNotFoundException;
pub use crate::types::error::_resource_precondition_not_met_exception::ResourcePreconditionNotMetException;

mod _invalid_parameter_exception;
mod _limit_exceeded_exception;
mod _resource_already_exists_exception;
mod _resource_in_use_exception;
mod _resource_not_found_exception;
mod _resource_precondition_not_met_exception;

/// Builders
pub mod builders;
