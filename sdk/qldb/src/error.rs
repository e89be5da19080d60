/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use ::aws_smithy_runtime::client::result::SdkError;
pub use ::aws_smithy_runtime::client::result::Unhandled;
pub use ::aws_smithy_types::error::display::DisplayErrorContext;
pub use ::aws_smithy_types::error::metadata::ProvideErrorMetadata;
pub use ::aws_smithy_types::error::operation::BuildError;
pub use ::aws_smithy_types::error::{DuplicateKeyError, ErrorMetadata, InvalidParameterValueError};
