/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Helpers for map-valued members of generated shapes.

use crate::error::DuplicateKeyError;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Inserts `key` into the map held by a builder, creating the map if it is unset.
///
/// Fails without modifying the map when `key` is already present.
pub fn insert_unique<V>(
    map: &mut Option<HashMap<String, V>>,
    key: impl Into<String>,
    value: V,
) -> Result<(), DuplicateKeyError> {
    match map.get_or_insert_with(HashMap::new).entry(key.into()) {
        Entry::Occupied(existing) => Err(DuplicateKeyError::new(existing.key().as_str())),
        Entry::Vacant(slot) => {
            slot.insert(value);
            Ok(())
        }
    }
}

#[cfg(test)]
mod test {
    use super::insert_unique;

    #[test]
    fn creates_the_map_on_first_insert() {
        let mut tags = None;
        insert_unique(&mut tags, "team", "ledger".to_string()).unwrap();
        assert_eq!(tags.unwrap().get("team").map(String::as_str), Some("ledger"));
    }

    #[test]
    fn rejects_repeated_keys_and_keeps_the_first_value() {
        let mut tags = None;
        insert_unique(&mut tags, "env", 1).unwrap();
        let err = insert_unique(&mut tags, "env", 2).expect_err("duplicate");
        assert_eq!(err.key(), "env");
        assert_eq!(err.to_string(), "duplicate key provided (env)");
        assert_eq!(tags.unwrap()["env"], 1);
    }
}
