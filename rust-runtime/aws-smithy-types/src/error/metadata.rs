/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Error metadata

use std::collections::HashMap;
use std::fmt;

const REQUEST_ID: &str = "request_id";

/// Trait to retrieve error metadata from a result
pub trait ProvideErrorMetadata {
    /// Returns error metadata, which includes the error code, message,
    /// request ID, and potentially additional information.
    fn meta(&self) -> &ErrorMetadata;

    /// Returns the error code if it's available.
    fn code(&self) -> Option<&str> {
        self.meta().code()
    }

    /// Returns the error message, if there is one.
    fn message(&self) -> Option<&str> {
        self.meta().message()
    }
}

/// Empty error metadata
#[doc(hidden)]
pub const EMPTY_ERROR_METADATA: ErrorMetadata = ErrorMetadata {
    code: None,
    message: None,
    extras: None,
};

/// Generic Error type
///
/// Errors that a service models carry this alongside their typed fields. Errors that are not
/// modeled are surfaced with only this type, which exposes the `code`, `message` and `request_id`.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct ErrorMetadata {
    code: Option<String>,
    message: Option<String>,
    extras: Option<HashMap<&'static str, String>>,
}

/// Builder for [`ErrorMetadata`].
#[derive(Debug, Default)]
pub struct Builder {
    inner: ErrorMetadata,
}

impl Builder {
    /// Sets the error message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.inner.message = Some(message.into());
        self
    }

    /// Sets the error code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.inner.code = Some(code.into());
        self
    }

    /// Sets the ID of the request that produced this error.
    pub fn request_id(self, request_id: impl Into<String>) -> Self {
        self.custom(REQUEST_ID, request_id)
    }

    /// Set a custom field on the error metadata
    pub fn custom(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.inner
            .extras
            .get_or_insert_with(HashMap::new)
            .insert(key, value.into());
        self
    }

    /// Creates the error.
    pub fn build(self) -> ErrorMetadata {
        self.inner
    }
}

impl ErrorMetadata {
    /// Returns the error code.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Returns the error message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the ID of the request that produced this error, if the service returned one.
    pub fn request_id(&self) -> Option<&str> {
        self.extra(REQUEST_ID)
    }

    /// Returns additional information about the error if it's present.
    pub fn extra(&self, key: &'static str) -> Option<&str> {
        self.extras
            .as_ref()
            .and_then(|extras| extras.get(key).map(|k| k.as_str()))
    }

    /// Creates an `ErrorMetadata` builder.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Converts an `ErrorMetadata` into a builder.
    pub fn into_builder(self) -> Builder {
        Builder { inner: self }
    }
}

impl ProvideErrorMetadata for ErrorMetadata {
    fn meta(&self) -> &ErrorMetadata {
        self
    }
}

impl fmt::Display for ErrorMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(extras) = &self.extras {
            let mut keys: Vec<_> = extras.keys().collect();
            keys.sort();
            for k in keys {
                fmt.field(k, &extras[k]);
            }
        }
        fmt.finish()
    }
}

impl std::error::Error for ErrorMetadata {}

#[cfg(test)]
mod test {
    use super::{ErrorMetadata, ProvideErrorMetadata};

    #[test]
    fn display_includes_every_field() {
        let meta = ErrorMetadata::builder()
            .code("ResourceNotFoundException")
            .message("no such ledger")
            .request_id("abc-123")
            .build();
        assert_eq!(
            meta.to_string(),
            r#"Error { code: "ResourceNotFoundException", message: "no such ledger", request_id: "abc-123" }"#
        );
    }

    #[test]
    fn provides_code_and_message() {
        let meta = ErrorMetadata::builder().code("Throttling").build();
        assert_eq!(ProvideErrorMetadata::code(&meta), Some("Throttling"));
        assert_eq!(ProvideErrorMetadata::message(&meta), None);
        assert_eq!(meta.request_id(), None);
    }

    #[test]
    fn into_builder_keeps_existing_fields() {
        let meta = ErrorMetadata::builder()
            .code("Throttling")
            .build()
            .into_builder()
            .message("slow down")
            .build();
        assert_eq!(meta.code(), Some("Throttling"));
        assert_eq!(meta.message(), Some("slow down"));
    }
}
