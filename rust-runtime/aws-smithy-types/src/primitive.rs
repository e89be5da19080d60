/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Utilities for formatting and parsing primitives in the query and XML wire formats.
//!
//! Floating point values use `NaN`, `Infinity` and `-Infinity` for the non-finite cases.
//!
//! # Example
//! ```
//! use aws_smithy_types::primitive::{Encoder, Parse};
//!
//! let output = Encoder::from(1.5_f64).encode().to_string();
//! assert_eq!(output, "1.5");
//! assert_eq!(f64::parse_smithy_primitive("-Infinity").unwrap(), f64::NEG_INFINITY);
//! ```

use crate::Number;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// An error during primitive parsing
#[non_exhaustive]
#[derive(Debug)]
pub struct PrimitiveParseError(&'static str);

impl fmt::Display for PrimitiveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse input as {}", self.0)
    }
}

impl Error for PrimitiveParseError {}

/// Sealed trait for custom parsing of primitive types
pub trait Parse: Sized {
    /// Parses a Smithy primitive from a string.
    fn parse_smithy_primitive(input: &str) -> Result<Self, PrimitiveParseError>;
}

impl Parse for bool {
    fn parse_smithy_primitive(input: &str) -> Result<Self, PrimitiveParseError> {
        match input {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(PrimitiveParseError("bool")),
        }
    }
}

macro_rules! parse_from_str {
    ($t:ty) => {
        impl Parse for $t {
            fn parse_smithy_primitive(input: &str) -> Result<Self, PrimitiveParseError> {
                FromStr::from_str(input).map_err(|_| PrimitiveParseError(stringify!($t)))
            }
        }
    };
}

parse_from_str!(i8);
parse_from_str!(i16);
parse_from_str!(i32);
parse_from_str!(i64);

macro_rules! parse_float {
    ($t:ident) => {
        impl Parse for $t {
            fn parse_smithy_primitive(input: &str) -> Result<Self, PrimitiveParseError> {
                match input {
                    "NaN" => Ok($t::NAN),
                    "Infinity" => Ok($t::INFINITY),
                    "-Infinity" => Ok($t::NEG_INFINITY),
                    // `from_str` accepts spellings like "inf" that are not valid on the wire
                    other if other.bytes().any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E') => {
                        Err(PrimitiveParseError(stringify!($t)))
                    }
                    other => FromStr::from_str(other).map_err(|_| PrimitiveParseError(stringify!($t))),
                }
            }
        }
    };
}

parse_float!(f32);
parse_float!(f64);

enum Inner {
    Bool(bool),
    Int(itoa::Buffer, i64),
    UInt(itoa::Buffer, u64),
    Float(ryu::Buffer, f64),
    Float32(ryu::Buffer, f32),
}

impl fmt::Debug for Inner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inner::Bool(v) => write!(f, "Bool({})", v),
            Inner::Int(_, v) => write!(f, "Int({})", v),
            Inner::UInt(_, v) => write!(f, "UInt({})", v),
            Inner::Float(_, v) => write!(f, "Float({})", v),
            Inner::Float32(_, v) => write!(f, "Float32({})", v),
        }
    }
}

/// Primitive Type Encoder
///
/// Encodes primitive types in the query and XML wire formats without intermediate allocations.
#[derive(Debug)]
pub struct Encoder {
    value: Inner,
}

impl Encoder {
    /// Encodes a Smithy primitive as a string.
    pub fn encode(&mut self) -> &str {
        match &mut self.value {
            Inner::Bool(true) => "true",
            Inner::Bool(false) => "false",
            Inner::Int(buf, v) => buf.format(*v),
            Inner::UInt(buf, v) => buf.format(*v),
            Inner::Float(_, v) if v.is_nan() => "NaN",
            Inner::Float(_, v) if *v == f64::INFINITY => "Infinity",
            Inner::Float(_, v) if *v == f64::NEG_INFINITY => "-Infinity",
            Inner::Float(buf, v) => {
                let formatted = buf.format_finite(*v);
                formatted.strip_suffix(".0").unwrap_or(formatted)
            }
            Inner::Float32(_, v) if v.is_nan() => "NaN",
            Inner::Float32(_, v) if *v == f32::INFINITY => "Infinity",
            Inner::Float32(_, v) if *v == f32::NEG_INFINITY => "-Infinity",
            Inner::Float32(buf, v) => {
                let formatted = buf.format_finite(*v);
                formatted.strip_suffix(".0").unwrap_or(formatted)
            }
        }
    }
}

impl From<bool> for Encoder {
    fn from(input: bool) -> Self {
        Self {
            value: Inner::Bool(input),
        }
    }
}

macro_rules! encode_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Encoder {
                fn from(input: $t) -> Self {
                    Self {
                        value: Inner::Int(itoa::Buffer::new(), input as i64),
                    }
                }
            }
        )*
    };
}

encode_signed!(i8, i16, i32, i64);

impl From<f32> for Encoder {
    fn from(input: f32) -> Self {
        Self {
            value: Inner::Float32(ryu::Buffer::new(), input),
        }
    }
}

impl From<f64> for Encoder {
    fn from(input: f64) -> Self {
        Self {
            value: Inner::Float(ryu::Buffer::new(), input),
        }
    }
}

impl From<Number> for Encoder {
    fn from(input: Number) -> Self {
        match input {
            Number::PosInt(v) => Self {
                value: Inner::UInt(itoa::Buffer::new(), v),
            },
            Number::NegInt(v) => v.into(),
            Number::Float(v) => v.into(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Encoder, Parse};
    use crate::Number;

    #[test]
    fn bool_parse() {
        assert!(bool::parse_smithy_primitive("true").unwrap());
        assert!(!bool::parse_smithy_primitive("false").unwrap());
        assert!(bool::parse_smithy_primitive("True").is_err());
        assert!(bool::parse_smithy_primitive("").is_err());
    }

    #[test]
    fn float_parse() {
        assert_eq!(f64::parse_smithy_primitive("1234.5").unwrap(), 1234.5);
        assert_eq!(f64::parse_smithy_primitive("1e3").unwrap(), 1000.0);
        assert!(f64::parse_smithy_primitive("NaN").unwrap().is_nan());
        assert_eq!(
            f64::parse_smithy_primitive("Infinity").unwrap(),
            f64::INFINITY
        );
        assert!(f64::parse_smithy_primitive("inf").is_err());
        assert!(f32::parse_smithy_primitive("nan").is_err());
    }

    #[test]
    fn int_parse() {
        assert_eq!(i32::parse_smithy_primitive("-17").unwrap(), -17);
        assert!(i8::parse_smithy_primitive("300").is_err());
    }

    #[test]
    fn encodes_primitives() {
        assert_eq!(Encoder::from(true).encode(), "true");
        assert_eq!(Encoder::from(-15_i32).encode(), "-15");
        assert_eq!(Encoder::from(2.0_f64).encode(), "2");
        assert_eq!(Encoder::from(0.1_f32).encode(), "0.1");
        assert_eq!(Encoder::from(f64::NAN).encode(), "NaN");
        assert_eq!(Encoder::from(f64::NEG_INFINITY).encode(), "-Infinity");
        assert_eq!(Encoder::from(Number::PosInt(u64::MAX)).encode(), "18446744073709551615");
    }
}
