/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_qldb::config::Region;
use aws_sdk_qldb::operation::RequestId;
use aws_sdk_qldb::primitives::{Blob, DateTime};
use aws_sdk_qldb::types::{EncryptionStatus, LedgerState};
use aws_sdk_qldb::{Client, Config};
use aws_smithy_runtime::client::result::SdkError;
use aws_smithy_runtime::test_util::capture_test_logs::capture_test_logs;
use aws_smithy_runtime::test_util::replay::{ReplayEvent, StaticReplayConnector};
use pretty_assertions::assert_eq;
use std::collections::HashMap;

fn client_with_response(body: &str) -> Client {
    let connector = StaticReplayConnector::new(vec![ReplayEvent::with_response(
        http::Response::builder()
            .status(200)
            .body(body.to_owned().into())
            .unwrap(),
    )]);
    Client::from_conf(
        Config::builder()
            .region(Region::new("us-east-1"))
            .http_connector(connector)
            .build(),
    )
}

#[test]
fn describe_ledger_minimal() {
    let client = client_with_response(
        r#"<DescribeLedgerResponse xmlns="https://qldb.amazonaws.com/doc/2019-01-02/">
  <DescribeLedgerResult>
    <Name>ledger1</Name>
    <State>ACTIVE</State>
  </DescribeLedgerResult>
  <ResponseMetadata>
    <RequestId>5a1e4f2c-0000-4d3b-a6a0-1f0f3b9c7d11</RequestId>
  </ResponseMetadata>
</DescribeLedgerResponse>"#,
    );
    let output = client.describe_ledger().name("ledger1").send().unwrap();
    assert_eq!(output.name(), Some("ledger1"));
    assert_eq!(output.state(), Some(&LedgerState::Active));
    assert_eq!(output.arn(), None);
    assert_eq!(output.creation_date_time(), None);
    assert_eq!(output.permissions_mode(), None);
    assert_eq!(output.deletion_protection(), None);
    assert_eq!(output.encryption_description(), None);
    assert_eq!(
        output.request_id(),
        Some("5a1e4f2c-0000-4d3b-a6a0-1f0f3b9c7d11")
    );
}

#[test]
fn describe_ledger_full() {
    let client = client_with_response(
        r#"<DescribeLedgerResponse>
  <DescribeLedgerResult>
    <Name>ledger1</Name>
    <Arn>arn:aws:qldb:us-east-1:123456789012:ledger/ledger1</Arn>
    <State>UPDATING</State>
    <CreationDateTime>2019-11-18T21:36:49Z</CreationDateTime>
    <PermissionsMode>STANDARD</PermissionsMode>
    <DeletionProtection>false</DeletionProtection>
    <EncryptionDescription>
      <KmsKeyArn>arn:aws:kms:us-east-1:123456789012:key/1234abcd</KmsKeyArn>
      <EncryptionStatus>KMS_KEY_INACCESSIBLE</EncryptionStatus>
      <InaccessibleKmsKeyDateTime>2021-03-01T12:00:00Z</InaccessibleKmsKeyDateTime>
    </EncryptionDescription>
    <AddedInAFutureVersion><Nested>ignored</Nested></AddedInAFutureVersion>
  </DescribeLedgerResult>
</DescribeLedgerResponse>"#,
    );
    let output = client.describe_ledger().name("ledger1").send().unwrap();
    let state = output.state().expect("state is set");
    assert_eq!(state.as_str(), "UPDATING");
    assert!(LedgerState::try_parse(state.as_str()).is_err());
    assert_eq!(
        output.creation_date_time(),
        Some(&DateTime::from_secs(1574113009))
    );
    assert_eq!(output.deletion_protection(), Some(false));
    let encryption = output.encryption_description().expect("encryption");
    assert_eq!(
        encryption.encryption_status(),
        Some(&EncryptionStatus::KmsKeyInaccessible)
    );
    assert_eq!(
        encryption.inaccessible_kms_key_date_time(),
        Some(&DateTime::from_secs(1614600000))
    );
    assert_eq!(output.request_id(), None);
}

#[test]
fn list_ledgers() {
    let client = client_with_response(
        r#"<ListLedgersResponse>
  <ListLedgersResult>
    <Ledgers>
      <member>
        <Name>first</Name>
        <State>ACTIVE</State>
        <CreationDateTime>2020-01-01T00:00:00Z</CreationDateTime>
      </member>
      <member>
        <Name>second</Name>
        <State>DELETING</State>
      </member>
    </Ledgers>
    <NextToken>page-2</NextToken>
  </ListLedgersResult>
</ListLedgersResponse>"#,
    );
    let output = client.list_ledgers().max_results(2).send().unwrap();
    let ledgers = output.ledgers().expect("ledgers");
    assert_eq!(ledgers.len(), 2);
    assert_eq!(ledgers[0].name(), Some("first"));
    assert_eq!(
        ledgers[0].creation_date_time(),
        Some(&DateTime::from_secs(1577836800))
    );
    assert_eq!(ledgers[1].state(), Some(&LedgerState::Deleting));
    assert_eq!(ledgers[1].creation_date_time(), None);
    assert_eq!(output.next_token(), Some("page-2"));
}

#[test]
fn empty_list_is_present() {
    let client = client_with_response(
        "<ListLedgersResponse><ListLedgersResult><Ledgers/></ListLedgersResult></ListLedgersResponse>",
    );
    let output = client.list_ledgers().send().unwrap();
    assert_eq!(output.ledgers(), Some(&[][..]));
    assert_eq!(output.next_token(), None);
}

#[test]
fn list_tags_for_resource() {
    let client = client_with_response(
        r#"<ListTagsForResourceResponse>
  <ListTagsForResourceResult>
    <Tags>
      <entry><key>team</key><value>ledger</value></entry>
      <entry><key>env</key><value></value></entry>
    </Tags>
  </ListTagsForResourceResult>
</ListTagsForResourceResponse>"#,
    );
    let output = client
        .list_tags_for_resource()
        .resource_arn("arn:aws:qldb:us-east-1:123456789012:ledger/ledger1")
        .send()
        .unwrap();
    let expected: HashMap<String, String> = [("team", "ledger"), ("env", "")]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_eq!(output.tags(), Some(&expected));
}

#[test]
fn map_entry_without_value_is_a_response_error() {
    let client = client_with_response(
        "<ListTagsForResourceResponse><ListTagsForResourceResult><Tags>\
        <entry><key>team</key></entry>\
        </Tags></ListTagsForResourceResult></ListTagsForResourceResponse>",
    );
    let err = client
        .list_tags_for_resource()
        .resource_arn("arn")
        .send()
        .expect_err("entry is incomplete");
    assert!(matches!(err, SdkError::ResponseError { .. }), "{:?}", err);
}

#[test]
fn repeated_map_key_is_a_response_error() {
    let client = client_with_response(
        "<ListTagsForResourceResponse><ListTagsForResourceResult><Tags>\
        <entry><key>team</key><value>ledger</value></entry>\
        <entry><key>team</key><value>audit</value></entry>\
        </Tags></ListTagsForResourceResult></ListTagsForResourceResponse>",
    );
    let err = client
        .list_tags_for_resource()
        .resource_arn("arn")
        .send()
        .expect_err("key appears twice");
    assert!(matches!(err, SdkError::ResponseError { .. }), "{:?}", err);
}

#[test]
fn get_digest_blob() {
    let client = client_with_response(
        r#"<GetDigestResponse>
  <GetDigestResult>
    <Digest>ZGlnZXN0</Digest>
    <DigestTipAddress>
      <IonText>{strandId:"BlFTjlSXze9BIh1KOszcE3",sequenceNo:14}</IonText>
    </DigestTipAddress>
  </GetDigestResult>
</GetDigestResponse>"#,
    );
    let output = client.get_digest().name("ledger1").send().unwrap();
    assert_eq!(output.digest(), Some(&Blob::new(b"digest".to_vec())));
    assert_eq!(
        output.digest_tip_address().and_then(|v| v.ion_text()),
        Some(r#"{strandId:"BlFTjlSXze9BIh1KOszcE3",sequenceNo:14}"#)
    );
}

#[test]
fn invalid_boolean_is_a_response_error() {
    let client = client_with_response(
        "<DescribeLedgerResponse><DescribeLedgerResult>\
        <DeletionProtection>maybe</DeletionProtection>\
        </DescribeLedgerResult></DescribeLedgerResponse>",
    );
    let err = client
        .describe_ledger()
        .name("ledger1")
        .send()
        .expect_err("not a boolean");
    assert!(matches!(err, SdkError::ResponseError { .. }), "{:?}", err);
    assert_eq!(err.raw_response().map(|r| r.status().as_u16()), Some(200));
}

#[test]
fn truncated_body_is_a_response_error() {
    let client = client_with_response(
        "<DescribeLedgerResponse><DescribeLedgerResult>\
        <Name>ledger1</Name><State>ACTIVE</State><Arn",
    );
    let err = client
        .describe_ledger()
        .name("ledger1")
        .send()
        .expect_err("body ends mid-tag");
    assert!(matches!(err, SdkError::ResponseError { .. }), "{:?}", err);
}

#[test]
fn unclosed_body_is_a_response_error() {
    let client = client_with_response(
        "<DescribeLedgerResponse><DescribeLedgerResult>\
        <Name>ledger1</Name><State>ACTIVE</State>",
    );
    let err = client
        .describe_ledger()
        .name("ledger1")
        .send()
        .expect_err("envelope is never closed");
    assert!(matches!(err, SdkError::ResponseError { .. }), "{:?}", err);
}

#[test]
fn trailing_garbage_is_a_response_error() {
    let client = client_with_response(
        "<DescribeLedgerResponse><DescribeLedgerResult>\
        <Name>ledger1</Name><<<not xml",
    );
    let err = client
        .describe_ledger()
        .name("ledger1")
        .send()
        .expect_err("invalid markup");
    assert!(matches!(err, SdkError::ResponseError { .. }), "{:?}", err);
}

#[test]
fn bad_attribute_escape_is_a_response_error() {
    let client = client_with_response(
        r#"<DescribeLedgerResponse><DescribeLedgerResult>
        <Arn x="&bogus;">a</Arn><Name>ledger1</Name><State>ACTIVE</State>
        </DescribeLedgerResult></DescribeLedgerResponse>"#,
    );
    let err = client
        .describe_ledger()
        .name("ledger1")
        .send()
        .expect_err("undefined entity");
    assert!(matches!(err, SdkError::ResponseError { .. }), "{:?}", err);
}

#[test]
fn wrong_envelope_is_a_response_error() {
    let client = client_with_response("<DeleteLedgerResponse/>");
    let err = client
        .describe_ledger()
        .name("ledger1")
        .send()
        .expect_err("wrong operation");
    assert!(matches!(err, SdkError::ResponseError { .. }), "{:?}", err);
}

#[test]
fn operation_is_logged() {
    let (_guard, logs) = capture_test_logs();
    let client = client_with_response(
        "<DeleteLedgerResponse><ResponseMetadata><RequestId>r</RequestId></ResponseMetadata></DeleteLedgerResponse>",
    );
    client.delete_ledger().name("ledger1").send().unwrap();
    let logs = logs.contents();
    assert!(logs.contains("dispatching request"), "{}", logs);
    assert!(logs.contains("service=\"qldb\""), "{}", logs);
    assert!(logs.contains("operation=\"DeleteLedger\""), "{}", logs);
}

#[test]
fn response_without_result_element() {
    let client = client_with_response(
        "<UpdateLedgerPermissionsModeResponse>\
        <ResponseMetadata><RequestId>perm-1</RequestId></ResponseMetadata>\
        </UpdateLedgerPermissionsModeResponse>",
    );
    let output = client
        .update_ledger_permissions_mode()
        .name("ledger1")
        .permissions_mode("STANDARD")
        .send()
        .unwrap();
    assert_eq!(output.name(), None);
    assert_eq!(output.permissions_mode(), None);
    assert_eq!(output.request_id(), Some("perm-1"));
}
