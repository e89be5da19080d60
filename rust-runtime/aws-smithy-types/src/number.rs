/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// A number type that implements Javascript / JSON semantics, modeled on serde_json:
/// <https://docs.serde.rs/src/serde_json/number.rs.html#20-22>
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Unsigned 64-bit integer value.
    PosInt(u64),
    /// Signed 64-bit integer value. The wire format will use this variant only if the number is
    /// negative.
    NegInt(i64),
    /// 64-bit floating-point value.
    Float(f64),
}

macro_rules! from_signed {
    ($($typ:ty),*) => {
        $(
            impl From<$typ> for Number {
                fn from(value: $typ) -> Self {
                    if value < 0 {
                        Number::NegInt(value as i64)
                    } else {
                        Number::PosInt(value as u64)
                    }
                }
            }
        )*
    };
}

from_signed!(i8, i16, i32, i64);

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Number::PosInt(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

#[cfg(test)]
mod test {
    use super::Number;

    #[test]
    fn signed_conversions_pick_variant_by_sign() {
        assert_eq!(Number::from(5_i32), Number::PosInt(5));
        assert_eq!(Number::from(-5_i64), Number::NegInt(-5));
        assert_eq!(Number::from(0_i16), Number::PosInt(0));
        assert_eq!(Number::from(1.5_f64), Number::Float(1.5));
    }
}
