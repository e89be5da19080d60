/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// All possible error types for this service.
#[non_exhaustive]
#[derive(::std::fmt::Debug)]
pub enum Error {
    /// <p>The request is malformed.</p>
    BadRequestException(crate::types::error::BadRequestException),
    /// <p>The request contains a parameter that is not valid.</p>
    InvalidRequestException(crate::types::error::InvalidRequestException),
    /// <p>The pagination token is not valid.</p>
    InvalidNextTokenException(crate::types::error::InvalidNextTokenException),
    /// <p>The requested resource was not found.</p>
    NotFoundException(crate::types::error::NotFoundException),
    /// <p>Amazon S3 throws this exception if you make a <code>GetPublicAccessBlock</code> request against an account that doesn't have a <code>PublicAccessBlockConfiguration</code> set.</p>
    NoSuchPublicAccessBlockConfiguration(crate::types::error::NoSuchPublicAccessBlockConfiguration),
    /// <p>The request was throttled.</p>
    TooManyRequestsException(crate::types::error::TooManyRequestsException),
    /// <p>Amazon S3 throws this exception if you have too many tags in your tag set.</p>
    TooManyTagsException(crate::types::error::TooManyTagsException),
    /// <p>A request with the same client request token was already made with different parameters.</p>
    IdempotencyException(crate::types::error::IdempotencyException),
    /// <p>The service encountered an internal error.</p>
    InternalServiceException(crate::types::error::InternalServiceException),
    /// <p>The requested status change is not allowed for the current status of the job.</p>
    JobStatusException(crate::types::error::JobStatusException),
    /// An unexpected error occurred (e.g., an unknown error code or an error that prevented a response from being read).
    ///
    /// Match on `Unhandled` only as a fallback: check [`code()`](::aws_smithy_types::error::metadata::ProvideErrorMetadata::code)
    /// for codes that newer versions of this crate may model.
    Unhandled(::aws_smithy_runtime::client::result::Unhandled),
}
impl ::std::fmt::Display for Error {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        match self {
            Error::BadRequestException(inner) => ::std::fmt::Display::fmt(inner, f),
            Error::InvalidRequestException(inner) => ::std::fmt::Display::fmt(inner, f),
            Error::InvalidNextTokenException(inner) => ::std::fmt::Display::fmt(inner, f),
            Error::NotFoundException(inner) => ::std::fmt::Display::fmt(inner, f),
            Error::NoSuchPublicAccessBlockConfiguration(inner) => ::std::fmt::Display::fmt(inner, f),
            Error::TooManyRequestsException(inner) => ::std::fmt::Display::fmt(inner, f),
            Error::TooManyTagsException(inner) => ::std::fmt::Display::fmt(inner, f),
            Error::IdempotencyException(inner) => ::std::fmt::Display::fmt(inner, f),
            Error::InternalServiceException(inner) => ::std::fmt::Display::fmt(inner, f),
            Error::JobStatusException(inner) => ::std::fmt::Display::fmt(inner, f),
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
    /// Returns `true` if the error kind is `Error::BadRequestException`.
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(self, Self::BadRequestException(_))
    }
    /// Returns `true` if the error kind is `Error::InvalidRequestException`.
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(self, Self::InvalidRequestException(_))
    }
    /// Returns `true` if the error kind is `Error::InvalidNextTokenException`.
    pub fn is_invalid_next_token_exception(&self) -> bool {
        matches!(self, Self::InvalidNextTokenException(_))
    }
    /// Returns `true` if the error kind is `Error::NotFoundException`.
    pub fn is_not_found_exception(&self) -> bool {
        matches!(self, Self::NotFoundException(_))
    }
    /// Returns `true` if the error kind is `Error::NoSuchPublicAccessBlockConfiguration`.
    pub fn is_no_such_public_access_block_configuration(&self) -> bool {
        matches!(self, Self::NoSuchPublicAccessBlockConfiguration(_))
    }
    /// Returns `true` if the error kind is `Error::TooManyRequestsException`.
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(self, Self::TooManyRequestsException(_))
    }
    /// Returns `true` if the error kind is `Error::TooManyTagsException`.
    pub fn is_too_many_tags_exception(&self) -> bool {
        matches!(self, Self::TooManyTagsException(_))
    }
    /// Returns `true` if the error kind is `Error::IdempotencyException`.
    pub fn is_idempotency_exception(&self) -> bool {
        matches!(self, Self::IdempotencyException(_))
    }
    /// Returns `true` if the error kind is `Error::InternalServiceException`.
    pub fn is_internal_service_exception(&self) -> bool {
        matches!(self, Self::InternalServiceException(_))
    }
    /// Returns `true` if the error kind is `Error::JobStatusException`.
    pub fn is_job_status_exception(&self) -> bool {
        matches!(self, Self::JobStatusException(_))
    }
}
impl ::std::error::Error for Error {
    fn source(&self) -> ::std::option::Option<&(dyn ::std::error::Error + 'static)> {
        match self {
            Error::BadRequestException(inner) => ::std::error::Error::source(inner),
            Error::InvalidRequestException(inner) => ::std::error::Error::source(inner),
            Error::InvalidNextTokenException(inner) => ::std::error::Error::source(inner),
            Error::NotFoundException(inner) => ::std::error::Error::source(inner),
            Error::NoSuchPublicAccessBlockConfiguration(inner) => ::std::error::Error::source(inner),
            Error::TooManyRequestsException(inner) => ::std::error::Error::source(inner),
            Error::TooManyTagsException(inner) => ::std::error::Error::source(inner),
            Error::IdempotencyException(inner) => ::std::error::Error::source(inner),
            Error::InternalServiceException(inner) => ::std::error::Error::source(inner),
            Error::JobStatusException(inner) => ::std::error::Error::source(inner),
            Error::Unhandled(inner) => ::std::option::Option::Some(inner),
        }
    }
}
impl ::aws_smithy_types::error::metadata::ProvideErrorMetadata for Error {
    fn meta(&self) -> &::aws_smithy_types::error::ErrorMetadata {
        match self {
            Self::BadRequestException(inner) => ::aws_smithy_types::error::metadata::ProvideErrorMetadata::meta(inner),
            Self::InvalidRequestException(inner) => ::aws_smithy_types::error::metadata::ProvideErrorMetadata::meta(inner),
            Self::InvalidNextTokenException(inner) => ::aws_smithy_types::error::metadata::ProvideErrorMetadata::meta(inner),
            Self::NotFoundException(inner) => ::aws_smithy_types::error::metadata::ProvideErrorMetadata::meta(inner),
            Self::NoSuchPublicAccessBlockConfiguration(inner) => ::aws_smithy_types::error::metadata::ProvideErrorMetadata::meta(inner),
            Self::TooManyRequestsException(inner) => ::aws_smithy_types::error::metadata::ProvideErrorMetadata::meta(inner),
            Self::TooManyTagsException(inner) => ::aws_smithy_types::error::metadata::ProvideErrorMetadata::meta(inner),
            Self::IdempotencyException(inner) => ::aws_smithy_types::error::metadata::ProvideErrorMetadata::meta(inner),
            Self::InternalServiceException(inner) => ::aws_smithy_types::error::metadata::ProvideErrorMetadata::meta(inner),
            Self::JobStatusException(inner) => ::aws_smithy_types::error::metadata::ProvideErrorMetadata::meta(inner),
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
