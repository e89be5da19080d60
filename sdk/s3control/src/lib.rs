/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#![allow(clippy::too_many_arguments)]
#![allow(clippy::large_enum_variant)]
#![allow(clippy::result_large_err)]
#![allow(rustdoc::bare_urls)]
#![forbid(unsafe_code)]
#![warn(missing_docs)]
//! Amazon Web Services S3 Control provides access to Amazon S3 control plane actions.
//!
//! ## Getting Started
//!
//! Every operation is a method on [`Client`] that returns a fluent builder. Set the
//! operation's members on the builder and call `send()`:
//!
//! ```rust,ignore
//! let config = aws_sdk_s3control::Config::builder()
//!     .region(aws_types::region::Region::new("us-east-1"))
//!     .http_connector(my_connector)
//!     .build();
//! let client = aws_sdk_s3control::Client::from_conf(config);
//! let output = client.create_access_point()
//!     .account_id("example")
//!     .name("example")
//!     .bucket("example")
//!     .send()?;
//! ```
//!
//! Requests are form-encoded with the AWS query protocol and responses are read from XML.
//! Errors returned by the service are exposed as [`Error`], with the codes this crate does not
//! know about kept in `Error::Unhandled` alongside the parsed error metadata.

pub use error_meta::Error;

#[doc(inline)]
pub use config::Config;

/// Client for calling AWS S3 Control.
pub mod client;

/// Configuration for AWS S3 Control.
pub mod config;

/// Common errors and error handling utilities.
pub mod error;

mod error_meta;

/// Idempotency tokens for operations that must not be applied twice.
pub mod idempotency_token;

/// All operations that this crate can perform.
pub mod operation;

/// Primitives such as `Blob` or `DateTime` used by other types.
pub mod primitives;

/// Data structures used by operation inputs/outputs.
pub mod types;

mod protocol_serde;

#[doc(inline)]
pub use client::Client;
