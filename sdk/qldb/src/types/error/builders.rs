/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::types::error::_invalid_parameter_exception::InvalidParameterExceptionBuilder;
pub use crate::types::error::_limit_exceeded_exception::LimitExceededExceptionBuilder;
pub use crate::types::error::_resource_already_exists_exception::ResourceAlreadyExistsExceptionBuilder;
pub use crate::types::error::_resource_in_use_exception::ResourceInUseExceptionBuilder;
pub use crate::types::error::_resource_not_found_exception::ResourceNotFoundExceptionBuilder;
pub use crate::types::error::_resource_precondition_not_met_exception::ResourcePreconditionNotMetExceptionBuilder;
