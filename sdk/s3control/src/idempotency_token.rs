/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::{Arc, Mutex, PoisonError};

/// Formats 128 random bits as a version 4 UUID.
///
/// The version nibble and variant bits overwrite the corresponding random bits.
pub(crate) fn uuid_v4(input: u128) -> String {
    let mut out = String::with_capacity(36);
    // u4-aligned index into [input]
    let mut rnd_idx: u8 = 0;
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    for str_idx in 0..36 {
        if str_idx == 8 || str_idx == 13 || str_idx == 18 || str_idx == 23 {
            out.push('-');
        // UUID version character
        } else if str_idx == 14 {
            out.push('4');
        } else {
            let mut dat: u8 = ((input >> (rnd_idx * 4)) & 0x0F) as u8;
            // UUID variant bits
            if str_idx == 19 {
                dat |= 0b00001000;
            }
            rnd_idx += 1;
            out.push(HEX_CHARS[dat as usize] as char);
        }
    }
    out
}

/// IdempotencyTokenProvider generates idempotency tokens for idempotent API requests
///
/// Generally, customers will not need to interact with this at all. A sensible default will be
/// provided automatically during config construction. However, if you need deterministic behavior
/// for testing, two options are available:
/// 1. Utilize the From<&'static str>` implementation to hard code an idempotency token
/// 2. Seed the token provider with [`IdempotencyTokenProvider::with_seed`](IdempotencyTokenProvider::with_seed)
#[derive(Debug, Clone)]
pub struct IdempotencyTokenProvider {
    inner: Inner,
}

#[derive(Debug, Clone)]
enum Inner {
    Static(&'static str),
    Random(Arc<Mutex<fastrand::Rng>>),
}

/// Returns the default provider, which generates random v4 UUIDs.
pub fn default_provider() -> IdempotencyTokenProvider {
    IdempotencyTokenProvider::random()
}

impl From<&'static str> for IdempotencyTokenProvider {
    fn from(token: &'static str) -> Self {
        Self::fixed(token)
    }
}

impl IdempotencyTokenProvider {
    /// Returns the next token.
    pub fn make_idempotency_token(&self) -> String {
        match &self.inner {
            Inner::Static(token) => token.to_string(),
            Inner::Random(rng) => {
                let input: u128 = rng
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .u128(..);
                uuid_v4(input)
            }
        }
    }

    /// Creates a provider whose token sequence is fully determined by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            inner: Inner::Random(Arc::new(Mutex::new(fastrand::Rng::with_seed(seed)))),
        }
    }

    /// Creates a provider seeded from the thread-local generator.
    pub fn random() -> Self {
        Self {
            inner: Inner::Random(Arc::new(Mutex::new(fastrand::Rng::new()))),
        }
    }

    /// Creates a provider that always returns `token`.
    pub fn fixed(token: &'static str) -> Self {
        Self {
            inner: Inner::Static(token),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{uuid_v4, IdempotencyTokenProvider};
    use proptest::prelude::*;

    #[test]
    fn uuid_layout() {
        assert_eq!(uuid_v4(0), "00000000-0000-4000-8000-000000000000");
        assert_eq!(uuid_v4(12341234), "2ff4cb00-0000-4000-8000-000000000000");
        assert_eq!(
            uuid_v4(u128::MAX),
            "ffffffff-ffff-4fff-ffff-ffffffffffff"
        );
    }

    #[test]
    fn seeded_providers_are_deterministic() {
        let a = IdempotencyTokenProvider::with_seed(123);
        let b = IdempotencyTokenProvider::with_seed(123);
        let first = a.make_idempotency_token();
        assert_eq!(first, b.make_idempotency_token());
        assert_ne!(first, a.make_idempotency_token());
    }

    #[test]
    fn clones_share_a_sequence() {
        let a = IdempotencyTokenProvider::with_seed(7);
        let b = a.clone();
        assert_ne!(a.make_idempotency_token(), b.make_idempotency_token());
    }

    #[test]
    fn fixed_token() {
        let provider = IdempotencyTokenProvider::from("00000000-0000-4000-8000-000000000000");
        assert_eq!(
            provider.make_idempotency_token(),
            "00000000-0000-4000-8000-000000000000"
        );
    }

    proptest! {
        #[test]
        fn valid_uuid_v4(input: u128) {
            let out = uuid_v4(input);
            prop_assert_eq!(out.len(), 36);
            let bytes = out.as_bytes();
            for idx in [8, 13, 18, 23] {
                prop_assert_eq!(bytes[idx], b'-');
            }
            prop_assert_eq!(bytes[14], b'4');
            prop_assert!(matches!(bytes[19], b'8' | b'9' | b'a' | b'b' | b'c' | b'd' | b'e' | b'f'));
            prop_assert!(out.chars().all(|c| c == '-' || c.is_ascii_hexdigit()));
        }
    }
}
