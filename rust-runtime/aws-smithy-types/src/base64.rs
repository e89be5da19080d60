/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Base64 encoding for blob members, backed by `base64-simd`.

use base64_simd::STANDARD;
use std::error::Error;
use std::fmt;

/// Failure to decode a base64 string.
#[derive(Debug)]
pub struct DecodeError {
    source: base64_simd::Error,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid base64 input")
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Decode `input` from base64 using the standard alphabet.
///
/// Leading and trailing whitespace is ignored.
pub fn decode(input: impl AsRef<str>) -> Result<Vec<u8>, DecodeError> {
    STANDARD
        .decode_to_vec(input.as_ref().trim())
        .map_err(|source| DecodeError { source })
}

/// Encode `input` into base64 using the standard alphabet.
pub fn encode(input: impl AsRef<[u8]>) -> String {
    STANDARD.encode_to_string(input.as_ref())
}

#[cfg(test)]
mod test {
    use super::{decode, encode};

    #[test]
    fn encodes_standard_alphabet() {
        assert_eq!(encode(b"AWS"), "QVdT");
        assert_eq!(encode(b""), "");
        assert_eq!(encode([0xfb, 0xff]), "+/8=");
    }

    #[test]
    fn decodes_with_whitespace() {
        assert_eq!(decode("  QVdT\n").unwrap(), b"AWS".to_vec());
    }

    #[test]
    fn rejects_invalid_input() {
        let err = decode("not base64!").expect_err("invalid");
        assert_eq!(err.to_string(), "invalid base64 input");
    }
}
