/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// All possible error types for this service.
#[non_exhaustive]
#[derive(::std::fmt::Debug)]
pub enum Error {
    /// <p>One or more parameters in the request aren't valid.</p>
    InvalidParameterException(crate::types::error::InvalidParameterException),
    /// <p>You have reached the limit on the maximum number of resources allowed.</p>
    LimitExceededException(crate::types::error::LimitExceededException),
    /// <p>The specified resource already exists.</p>
    ResourceAlreadyExistsException(crate::types::error::ResourceAlreadyExistsException),
    /// <p>The specified resource can't be modified at this time.</p>
    ResourceInUseException(crate::types::error::ResourceInUseException),
    /// <p>The specified resource doesn't exist.</p>
    ResourceNotFoundException(crate::types::error::ResourceNotFoundException),
    /// <p>The operation failed because a condition wasn't satisfied in advance.</p>
    ResourcePreconditionNotMetException(crate::types::error::ResourcePreconditionNotMetException),
    /// An unexpected error occurred (e.g., an unknown error code or an error that prevented a response from being read).
    ///
    /// Match on `Unhandled` only as a fallback: check [`code()`](::aws_smithy_types::error::metadata::ProvideErrorMetadata::code)
    /// for codes that newer versions of this crate may model.
    Unhandled(::aws_smithy_runtime::client::result::Unhandled),
}
impl ::std::fmt::Display for Error {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        match self {
            Error::InvalidParameterException(inner) => ::std::fmt::Display::fmt(inner, f),
            Error::LimitExceededException(inner) => ::std::fmt::Display::fmt(inner, f),
            Error::ResourceAlreadyExistsException(inner) => ::std::fmt::Display::fmt(inner, f),
            Error::ResourceInUseException(inner) => ::std::fmt::Display::fmt(inner, f),
            Error::ResourceNotFoundException(inner) => ::std::fmt::Display::fmt(inner, f),
            Error::ResourcePreconditionNotMetException(inner) => ::std::fmt::Display::fmt(inner, f),
            Error::Unhandled(_) => {
                if let ::std::option::Option::Some(code) = ::aws_smithy_types::error::metadata::ProvideErrorMetadata::code(self) {
                    write!(f, "unhandled error ({code})")
                } else {
                    f.write_str("unhandled error")
                }
            }
        }
    }
}
impl Error {
    pub(crate) fn unhandled(meta: ::aws_smithy_types::error::ErrorMetadata) -> Self {
        Error::Unhandled(::aws_smithy_runtime::client::result::Unhandled::with_meta(meta.clone(), meta))
    }
    /// Returns `true` if the error kind is `Error::InvalidParameterException`.
    pub fn is_invalid_parameter_exception(&self) -> bool {
        matches!(self, Self::InvalidParameterException(_))
    }
    /// Returns `true` if the error kind is `Error::LimitExceededException`.
    pub fn is_limit_exceeded_exception(&self) -> bool {
        matches!(self, Self::LimitExceededException(_))
    }
    /// Returns `true` if the error kind is `Error::ResourceAlreadyExistsException`.
    pub fn is_resource_already_exists_exception(&self) -> bool {
        matches!(self, Self::ResourceAlreadyExistsException(_))
    }
    /// Returns `true` if the error kind is `Error::ResourceInUseException`.
    pub fn is_resource_in_use_exception(&self) -> bool {
        matches!(self, Self::ResourceInUseException(_))
    }
    /// Returns `true` if the error kind is `Error::ResourceNotFoundException`.
    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(self, Self::ResourceNotFoundException(_))
    }
    /// Returns `true` if the error kind is `Error::ResourcePreconditionNotMetException`.
    pub fn is_resource_precondition_not_met_exception(&self) -> bool {
        matches!(self, Self::ResourcePreconditionNotMetException(_))
    }
}
impl ::std::error::Error for Error {
    fn source(&self) -> ::std::option::Option<&(dyn ::std::error::Error + 'static)> {
        match self {
            Error::InvalidParameterException(inner) => ::std::error::Error::source(inner),
            Error::LimitExceededException(inner) => ::std::error::Error::source(inner),
            Error::ResourceAlreadyExistsException(inner) => ::std::error::Error::source(inner),
            Error::ResourceInUseException(inner) => ::std::error::Error::source(inner),
            Error::ResourceNotFoundException(inner) => ::std::error::Error::source(inner),
            Error::ResourcePreconditionNotMetException(inner) => ::std::error::Error::source(inner),
            Error::Unhandled(inner) => ::std::option::Option::Some(inner),
        }
    }
}
impl ::aws_smithy_types::error::metadata::ProvideErrorMetadata for Error {
    fn meta(&self) -> &::aws_smithy_types::error::ErrorMetadata {
        match self {
            Self::InvalidParameterException(inner) => ::aws_smithy_types::error::metadata::ProvideErrorMetadata::meta(inner),
            Self::LimitExceededException(inner) => ::aws_smithy_types::error::metadata::ProvideErrorMetadata::meta(inner),
            Self::ResourceAlreadyExistsException(inner) => ::aws_smithy_types::error::metadata::ProvideErrorMetadata::meta(inner),
            Self::ResourceInUseException(inner) => ::aws_smithy_types::error::metadata::ProvideErrorMetadata::meta(inner),
            Self::ResourceNotFoundException(inner) => ::aws_smithy_types::error::metadata::ProvideErrorMetadata::meta(inner),
            Self::ResourcePreconditionNotMetException(inner) => ::aws_smithy_types::error::metadata::ProvideErrorMetadata::meta(inner),
            Self::Unhandled(inner) => ::aws_smithy_types::error::metadata::ProvideErrorMetadata::meta(inner),
        }
    }
}
impl ::aws_types::request_id::RequestId for Error {
    fn request_id(&self) -> Option<&str> {
        ::aws_smithy_types::error::metadata::ProvideErrorMetadata::meta(self).request_id()
    }
}
impl From<::aws_smithy_runtime::client::result::Unhandled> for Error {
    fn from(err: ::aws_smithy_runtime::client::result::Unhandled) -> Self {
        Error::Unhandled(err)
    }
}
impl<R> From<::aws_smithy_runtime::client::result::SdkError<Error, R>> for Error
where
    R: ::std::fmt::Debug + Send + Sync + 'static,
{
    fn from(err: ::aws_smithy_runtime::client::result::SdkError<Error, R>) -> Self {
        match err {
            ::aws_smithy_runtime::client::result::SdkError::ServiceError { err, .. } => err,
            other => Error::Unhandled(::aws_smithy_runtime::client::result::Unhandled::new(other)),
        }
    }
}
