/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use bytes::Bytes;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Boxed error type used as the source of runtime errors.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// A request as handed to an [`HttpConnector`]. Query request bodies are always UTF-8.
pub type HttpRequest = http::Request<String>;

/// A fully-read response as returned by an [`HttpConnector`].
pub type HttpResponse = http::Response<Bytes>;

/// Sends a single HTTP request and returns the response.
///
/// Connectors are the transport collaborator for a client. They do not retry, sign, or
/// interpret the response.
pub trait HttpConnector: Send + Sync + fmt::Debug {
    /// Sends `request`, returning the response or the reason no response was received.
    fn call(&self, request: HttpRequest) -> Result<HttpResponse, ConnectorError>;
}

/// A reference-counted [`HttpConnector`] that can be shared between clients.
#[derive(Clone, Debug)]
pub struct SharedHttpConnector(Arc<dyn HttpConnector>);

impl SharedHttpConnector {
    /// Wraps `connector` so it can be shared.
    pub fn new(connector: impl HttpConnector + 'static) -> Self {
        Self(Arc::new(connector))
    }
}

impl HttpConnector for SharedHttpConnector {
    fn call(&self, request: HttpRequest) -> Result<HttpResponse, ConnectorError> {
        self.0.call(request)
    }
}

#[derive(Debug)]
enum ConnectorErrorKind {
    Timeout,
    Io,
    Other,
}

/// Error from an [`HttpConnector`] when no response was received.
#[derive(Debug)]
pub struct ConnectorError {
    kind: ConnectorErrorKind,
    source: BoxError,
}

impl ConnectorError {
    /// The request timed out.
    pub fn timeout(source: impl Into<BoxError>) -> Self {
        Self {
            kind: ConnectorErrorKind::Timeout,
            source: source.into(),
        }
    }

    /// An I/O error occurred while sending the request or reading the response.
    pub fn io(source: impl Into<BoxError>) -> Self {
        Self {
            kind: ConnectorErrorKind::Io,
            source: source.into(),
        }
    }

    /// Any other failure to get a response.
    pub fn other(source: impl Into<BoxError>) -> Self {
        Self {
            kind: ConnectorErrorKind::Other,
            source: source.into(),
        }
    }

    /// Returns true if the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ConnectorErrorKind::Timeout)
    }

    /// Returns true if this is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ConnectorErrorKind::Io)
    }
}

impl fmt::Display for ConnectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ConnectorErrorKind::Timeout => write!(f, "timeout"),
            ConnectorErrorKind::Io => write!(f, "io error"),
            ConnectorErrorKind::Other => write!(f, "other"),
        }
    }
}

impl Error for ConnectorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.source.as_ref())
    }
}

#[cfg(test)]
mod test {
    use super::{ConnectorError, HttpConnector, HttpRequest, HttpResponse, SharedHttpConnector};
    use std::error::Error as _;

    #[derive(Debug)]
    struct AlwaysTimesOut;

    impl HttpConnector for AlwaysTimesOut {
        fn call(&self, _request: HttpRequest) -> Result<HttpResponse, ConnectorError> {
            Err(ConnectorError::timeout("took too long"))
        }
    }

    #[test]
    fn shared_connector_delegates() {
        let connector = SharedHttpConnector::new(AlwaysTimesOut);
        let err = connector
            .clone()
            .call(http::Request::new(String::new()))
            .expect_err("always fails");
        assert!(err.is_timeout());
        assert!(!err.is_io());
        assert_eq!(err.source().unwrap().to_string(), "took too long");
    }

    #[test]
    fn connector_is_send_sync() {
        fn verify_send_sync<T: Send + Sync>() {}
        verify_send_sync::<SharedHttpConnector>();
        verify_send_sync::<ConnectorError>();
    }
}
