/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Helpers for validating query protocol requests in tests.

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

mod urlencoded;
mod xml;

use http::Request;
use pretty_assertions::Comparison;
use thiserror::Error;

pub use urlencoded::parse_form;
pub use xml::query_to_xml;

/// A failed protocol check.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProtocolTestFailure {
    /// An expected header was missing.
    #[error("missing required header: `{expected}`")]
    MissingHeader {
        /// Name of the header.
        expected: String,
    },

    /// A header had a different value than expected.
    #[error("invalid header value for key `{key}`: expected `{expected}`, found `{found}`")]
    InvalidHeader {
        /// Name of the header.
        key: String,
        /// Expected value.
        expected: String,
        /// Actual value.
        found: String,
    },

    /// The body did not match.
    #[error("body did not match. left=actual, right=expected\n{comparison}\n == hint:\n{hint}.")]
    BodyDidNotMatch {
        /// Pretty-printed diff of the two bodies.
        comparison: PrettyString,
        /// Explanation of how the bodies were compared.
        hint: String,
    },
}

/// A `String` whose `Debug` impl prints it verbatim, so that diffs stay readable.
#[derive(Eq, PartialEq)]
pub struct PrettyString(String);

impl std::fmt::Debug for PrettyString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for PrettyString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a body should be compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    /// `application/x-www-form-urlencoded`: compared as an unordered set of parameters.
    UrlEncodedForm,
    /// Anything else: compared byte for byte.
    Other,
}

/// Check that the protocol test succeeded & print the pretty error
/// if it did not
///
/// The primary motivation is making multiline debug output
/// readable & using the cleaner Display implementation
#[track_caller]
pub fn assert_ok(inp: Result<(), ProtocolTestFailure>) {
    if let Err(e) = inp {
        panic!("Protocol test failed: {}", e);
    }
}

/// Checks that every header in `expected_headers` is present on `request` with the given value.
///
/// Repeated headers are joined with `, ` before comparison.
pub fn validate_headers<B>(
    request: &Request<B>,
    expected_headers: &[(&str, &str)],
) -> Result<(), ProtocolTestFailure> {
    for (key, expected_value) in expected_headers {
        if !request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::MissingHeader {
                expected: key.to_string(),
            });
        }
        let actual_value: String = request
            .headers()
            .get_all(*key)
            .iter()
            .map(|hv| String::from_utf8_lossy(hv.as_bytes()).into_owned())
            .collect::<Vec<_>>()
            .join(", ");
        if *expected_value != actual_value {
            return Err(ProtocolTestFailure::InvalidHeader {
                key: key.to_string(),
                expected: expected_value.to_string(),
                found: actual_value,
            });
        }
    }
    Ok(())
}

/// Compares an actual request body against the expected body.
pub fn validate_body(
    actual_body: &str,
    expected_body: &str,
    media_type: MediaType,
) -> Result<(), ProtocolTestFailure> {
    match media_type {
        MediaType::UrlEncodedForm => urlencoded::try_url_encoded_form_equivalent(
            actual_body,
            expected_body,
        ),
        MediaType::Other => {
            if actual_body == expected_body {
                Ok(())
            } else {
                Err(ProtocolTestFailure::BodyDidNotMatch {
                    comparison: pretty_comparison(actual_body, expected_body),
                    hint: "bodies were compared byte for byte".into(),
                })
            }
        }
    }
}

fn pretty_comparison(left: &str, right: &str) -> PrettyString {
    PrettyString(format!(
        "{}",
        Comparison::new(&PrettyString(left.into()), &PrettyString(right.into()))
    ))
}

#[cfg(test)]
mod tests {
    use crate::{validate_body, validate_headers, MediaType, ProtocolTestFailure};
    use http::Request;

    #[test]
    fn test_validate_headers() {
        let request = Request::builder()
            .uri("/")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("X-Foo-List", "foo")
            .header("X-Foo-List", "bar")
            .body(())
            .unwrap();

        validate_headers(
            &request,
            &[("content-type", "application/x-www-form-urlencoded")],
        )
        .expect("header present");
        validate_headers(&request, &[("x-foo-list", "foo, bar")]).expect("list concat");
        validate_headers(&request, &[("X-Foo-List", "foo")])
            .expect_err("all list members must be specified");
        assert_eq!(
            validate_headers(&request, &[("missing", "value")]),
            Err(ProtocolTestFailure::MissingHeader {
                expected: "missing".to_owned()
            })
        );
    }

    #[test]
    fn test_validate_other_body() {
        validate_body("abc", "abc", MediaType::Other).expect("same bytes");
        let err = validate_body("abc", "abd", MediaType::Other).expect_err("different");
        assert!(err.to_string().contains("byte for byte"), "{}", err);
    }
}
