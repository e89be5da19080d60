/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_qldb::operation::create_ledger::CreateLedgerInput;
use aws_sdk_qldb::types::{KinesisConfiguration, LedgerState, PermissionsMode};
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::str::FromStr;

#[test]
fn enum_values_parse() {
    assert_eq!(LedgerState::try_parse("ACTIVE").unwrap(), LedgerState::Active);
    assert_eq!(
        PermissionsMode::from_str("ALLOW_ALL").unwrap(),
        PermissionsMode::AllowAll
    );
    assert_eq!(PermissionsMode::Standard.to_string(), "STANDARD");
    assert_eq!(
        LedgerState::values(),
        &["CREATING", "ACTIVE", "DELETING", "DELETED"]
    );
}

#[test]
fn unknown_enum_values_are_preserved() {
    let state = LedgerState::from("ARCHIVED");
    assert_eq!(state.as_str(), "ARCHIVED");
    assert_eq!(state.to_string(), "ARCHIVED");
    assert_ne!(state, LedgerState::Active);

    let err = LedgerState::try_parse("ARCHIVED").expect_err("not a known state");
    assert_eq!(err.enum_name(), "LedgerState");
    assert_eq!(err.value(), "ARCHIVED");
}

#[test]
fn empty_enum_value_is_rejected() {
    let err = PermissionsMode::try_parse("").expect_err("empty");
    assert_eq!(err.value(), "");
}

#[test]
fn required_members_are_checked_on_build() {
    let err = CreateLedgerInput::builder()
        .name("ledger1")
        .build()
        .expect_err("permissions mode is required");
    assert_eq!(err.field(), Some("permissions_mode"));

    let input = CreateLedgerInput::builder()
        .name("ledger1")
        .permissions_mode(PermissionsMode::Standard)
        .build()
        .unwrap();
    assert_eq!(input.name(), Some("ledger1"));
    assert_eq!(input.tags(), None);
    assert_eq!(input.deletion_protection(), None);
}

#[test]
fn duplicate_map_key_leaves_map_unchanged() {
    let mut builder = CreateLedgerInput::builder()
        .name("ledger1")
        .permissions_mode(PermissionsMode::Standard);
    builder.insert_tags("team", "ledger").unwrap();
    let err = builder
        .insert_tags("team", "other")
        .expect_err("team is already set");
    assert_eq!(err.key(), "team");

    let input = builder.build().unwrap();
    let mut expected = HashMap::new();
    expected.insert("team".to_string(), "ledger".to_string());
    assert_eq!(input.tags(), Some(&expected));
}

#[test]
fn unset_members_differ_from_empty_ones() {
    let unset = KinesisConfiguration::builder().stream_arn("arn").build();
    let also_unset = KinesisConfiguration::builder().stream_arn("arn").build();
    let empty = KinesisConfiguration::builder()
        .stream_arn("arn")
        .aggregation_enabled(false)
        .build();
    assert_eq!(unset, also_unset);
    assert_ne!(unset, empty);

    let base = CreateLedgerInput::builder()
        .name("ledger1")
        .permissions_mode(PermissionsMode::AllowAll);
    let none = base.clone().build().unwrap();
    let some_empty = base.kms_key("").build().unwrap();
    assert_eq!(none.kms_key(), None);
    assert_eq!(some_empty.kms_key(), Some(""));
    assert_ne!(none, some_empty);
}
