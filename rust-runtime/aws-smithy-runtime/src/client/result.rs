/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::client::connector::{BoxError, ConnectorError, HttpResponse};
use aws_smithy_types::error::metadata::{ErrorMetadata, ProvideErrorMetadata, EMPTY_ERROR_METADATA};
use std::error::Error;
use std::fmt;

/// Failed SDK Result
#[derive(Debug)]
pub enum SdkError<E, R = HttpResponse> {
    /// The request failed during construction. It was not dispatched over the network.
    ConstructionFailure(BoxError),

    /// The request failed during dispatch. An HTTP response was not received. The request MAY
    /// have been sent.
    DispatchFailure(ConnectorError),

    /// A response was received but it was not parseable according the the protocol (for example
    /// the body was not valid XML)
    ResponseError {
        /// The error encountered while parsing the response
        err: BoxError,
        /// The raw response
        raw: R,
    },

    /// An error response was received from the service
    ServiceError {
        /// The modeled or unhandled error returned by the service
        err: E,
        /// The raw response
        raw: R,
    },
}

impl<E, R> SdkError<E, R> {
    /// Construct a `SdkError` for a construction failure
    pub fn construction_failure(source: impl Into<BoxError>) -> Self {
        Self::ConstructionFailure(source.into())
    }

    /// Construct a `SdkError` for a dispatch failure with a [`ConnectorError`]
    pub fn dispatch_failure(source: ConnectorError) -> Self {
        Self::DispatchFailure(source)
    }

    /// Construct a `SdkError` for a response error
    pub fn response_error(source: impl Into<BoxError>, raw: R) -> Self {
        Self::ResponseError {
            err: source.into(),
            raw,
        }
    }

    /// Construct a `SdkError` for a service error
    pub fn service_error(source: E, raw: R) -> Self {
        Self::ServiceError { err: source, raw }
    }

    /// Returns the underlying service error `E` if there is one
    ///
    /// If the `SdkError` is not a `ServiceError` (for example, the error is a network timeout),
    /// then it will be converted into an unhandled variant of `E`. This makes it easy to match
    /// on the service's error response while simultaneously bubbling up transient failures.
    pub fn into_service_error(self) -> E
    where
        E: Error + Send + Sync + From<Unhandled> + 'static,
    {
        match self {
            Self::ServiceError { err, .. } => err,
            other => E::from(Unhandled::new(other.into_source())),
        }
    }

    /// Returns the service error if there is one, without consuming the `SdkError`.
    pub fn as_service_error(&self) -> Option<&E> {
        match self {
            Self::ServiceError { err, .. } => Some(err),
            _ => None,
        }
    }

    /// Returns the raw response, if one was received.
    pub fn raw_response(&self) -> Option<&R> {
        match self {
            Self::ResponseError { raw, .. } | Self::ServiceError { raw, .. } => Some(raw),
            _ => None,
        }
    }

    /// Converts this error into its error source.
    fn into_source(self) -> BoxError
    where
        E: Error + Send + Sync + 'static,
    {
        match self {
            Self::ConstructionFailure(source) => source,
            Self::DispatchFailure(source) => source.into(),
            Self::ResponseError { err, .. } => err,
            Self::ServiceError { err, .. } => err.into(),
        }
    }
}

impl<E, R> fmt::Display for SdkError<E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::ConstructionFailure(_) => write!(f, "failed to construct request"),
            SdkError::DispatchFailure(_) => write!(f, "dispatch failure"),
            SdkError::ResponseError { .. } => write!(f, "response error"),
            SdkError::ServiceError { .. } => write!(f, "service error"),
        }
    }
}

impl<E, R> Error for SdkError<E, R>
where
    E: Error + 'static,
    R: fmt::Debug,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SdkError::ConstructionFailure(source) => Some(source.as_ref()),
            SdkError::DispatchFailure(source) => Some(source),
            SdkError::ResponseError { err, .. } => Some(err.as_ref()),
            SdkError::ServiceError { err, .. } => Some(err),
        }
    }
}

impl<E, R> ProvideErrorMetadata for SdkError<E, R>
where
    E: ProvideErrorMetadata,
{
    fn meta(&self) -> &ErrorMetadata {
        match self {
            SdkError::ServiceError { err, .. } => err.meta(),
            _ => &EMPTY_ERROR_METADATA,
        }
    }
}

/// An error that was not modeled by the service, or that occurred before a service error
/// could be read.
#[derive(Debug)]
pub struct Unhandled {
    source: BoxError,
    meta: ErrorMetadata,
}

impl Unhandled {
    /// Wraps `source` with no error metadata.
    pub fn new(source: impl Into<BoxError>) -> Self {
        Self {
            source: source.into(),
            meta: ErrorMetadata::default(),
        }
    }

    /// Wraps `source` along with the metadata parsed from the error response.
    pub fn with_meta(source: impl Into<BoxError>, meta: ErrorMetadata) -> Self {
        Self {
            source: source.into(),
            meta,
        }
    }
}

impl fmt::Display for Unhandled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unhandled error")
    }
}

impl Error for Unhandled {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl ProvideErrorMetadata for Unhandled {
    fn meta(&self) -> &ErrorMetadata {
        &self.meta
    }
}

#[cfg(test)]
mod test {
    use super::{SdkError, Unhandled};
    use crate::client::connector::ConnectorError;
    use aws_smithy_types::error::metadata::{ErrorMetadata, ProvideErrorMetadata};
    use pretty_assertions::assert_eq;
    use std::error::Error as _;

    #[derive(Debug)]
    enum TestError {
        Modeled(ErrorMetadata),
        Unhandled(Unhandled),
    }

    impl std::fmt::Display for TestError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "test error")
        }
    }

    impl std::error::Error for TestError {}

    impl From<Unhandled> for TestError {
        fn from(err: Unhandled) -> Self {
            TestError::Unhandled(err)
        }
    }

    impl ProvideErrorMetadata for TestError {
        fn meta(&self) -> &ErrorMetadata {
            match self {
                TestError::Modeled(meta) => meta,
                TestError::Unhandled(inner) => inner.meta(),
            }
        }
    }

    #[test]
    fn dispatch_failures_become_unhandled_service_errors() {
        let err: SdkError<TestError, ()> =
            SdkError::dispatch_failure(ConnectorError::io("connection reset"));
        assert_eq!(err.to_string(), "dispatch failure");
        assert!(err.raw_response().is_none());
        match err.into_service_error() {
            TestError::Unhandled(unhandled) => {
                assert_eq!(unhandled.source().unwrap().to_string(), "io error")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn service_errors_expose_metadata() {
        let meta = ErrorMetadata::builder().code("Throttling").build();
        let err: SdkError<TestError, &str> =
            SdkError::service_error(TestError::Modeled(meta), "raw");
        assert_eq!(err.code(), Some("Throttling"));
        assert_eq!(err.raw_response(), Some(&"raw"));
        assert!(err.as_service_error().is_some());

        let err: SdkError<TestError, &str> = SdkError::construction_failure("bad input");
        assert_eq!(err.code(), None);
        assert_eq!(err.source().unwrap().to_string(), "bad input");
    }
}
