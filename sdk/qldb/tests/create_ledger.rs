/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_qldb::config::Region;
use aws_sdk_qldb::operation::RequestId;
use aws_sdk_qldb::types::{LedgerState, PermissionsMode};
use aws_sdk_qldb::{Client, Config};
use aws_smithy_protocol_test::parse_form;
use aws_smithy_runtime::client::connector::HttpResponse;
use aws_smithy_runtime::test_util::replay::{ReplayEvent, StaticReplayConnector};
use pretty_assertions::assert_eq;

fn client(events: Vec<ReplayEvent>) -> (Client, StaticReplayConnector) {
    let connector = StaticReplayConnector::new(events);
    let config = Config::builder()
        .region(Region::new("us-east-1"))
        .http_connector(connector.clone())
        .build();
    (Client::from_conf(config), connector)
}

fn response(body: &str) -> HttpResponse {
    http::Response::builder()
        .status(200)
        .body(body.to_owned().into())
        .unwrap()
}

const CREATE_LEDGER_RESPONSE: &str = r#"<CreateLedgerResponse xmlns="https://qldb.amazonaws.com/doc/2019-01-02/">
  <CreateLedgerResult>
    <Name>my-ledger</Name>
    <Arn>arn:aws:qldb:us-east-1:123456789012:ledger/my-ledger</Arn>
    <State>CREATING</State>
    <CreationDateTime>2019-11-18T21:36:49Z</CreationDateTime>
    <PermissionsMode>ALLOW_ALL</PermissionsMode>
    <DeletionProtection>true</DeletionProtection>
  </CreateLedgerResult>
  <ResponseMetadata>
    <RequestId>7e9d7a35-5a8c-4b4e-9f55-6b7ad1d0a8f3</RequestId>
  </ResponseMetadata>
</CreateLedgerResponse>"#;

#[test]
fn create_ledger_request() {
    let (client, connector) = client(vec![ReplayEvent::new(
        http::Request::builder()
            .method("POST")
            .uri("https://qldb.us-east-1.amazonaws.com")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(
                "Action=CreateLedger&Version=2019-01-02&Name=my-ledger\
                &PermissionsMode=ALLOW_ALL&DeletionProtection=true"
                    .to_string(),
            )
            .unwrap(),
        response(CREATE_LEDGER_RESPONSE),
    )]);

    let output = client
        .create_ledger()
        .name("my-ledger")
        .permissions_mode(PermissionsMode::AllowAll)
        .deletion_protection(true)
        .send()
        .expect("success");

    connector.assert_requests_match(&[]);
    let requests = connector.actual_requests();
    let mut params = parse_form(requests[0].body());
    params.sort();
    assert_eq!(
        params,
        vec![
            ("Action", "CreateLedger"),
            ("DeletionProtection", "true"),
            ("Name", "my-ledger"),
            ("PermissionsMode", "ALLOW_ALL"),
            ("Version", "2019-01-02"),
        ]
    );

    assert_eq!(output.name(), Some("my-ledger"));
    assert_eq!(output.state(), Some(&LedgerState::Creating));
    assert_eq!(output.permissions_mode(), Some(&PermissionsMode::AllowAll));
    assert_eq!(output.deletion_protection(), Some(true));
    assert_eq!(
        output.creation_date_time().map(|t| t.secs()),
        Some(1574113009)
    );
    assert_eq!(output.kms_key_arn(), None);
    assert_eq!(
        output.request_id(),
        Some("7e9d7a35-5a8c-4b4e-9f55-6b7ad1d0a8f3")
    );
}

#[test]
fn tags_are_sent_as_sorted_entries() {
    let (client, connector) = client(vec![ReplayEvent::new(
        http::Request::builder()
            .method("POST")
            .uri("https://qldb.us-east-1.amazonaws.com")
            .body(
                "Action=CreateLedger&Version=2019-01-02&Name=tagged\
                &Tags.entry.1.key=env&Tags.entry.1.value=prod\
                &Tags.entry.2.key=team&Tags.entry.2.value=ledger%20ops\
                &PermissionsMode=STANDARD"
                    .to_string(),
            )
            .unwrap(),
        response(CREATE_LEDGER_RESPONSE),
    )]);

    let mut builder = client
        .create_ledger()
        .name("tagged")
        .permissions_mode("STANDARD");
    builder.insert_tags("team", "ledger ops").unwrap();
    builder.insert_tags("env", "prod").unwrap();
    builder.send().expect("success");

    connector.assert_requests_match(&[]);
}

#[test]
fn empty_tags_are_distinct_from_unset_tags() {
    let (client, connector) = client(vec![ReplayEvent::with_response(response(
        CREATE_LEDGER_RESPONSE,
    ))]);

    client
        .create_ledger()
        .name("empty-tags")
        .permissions_mode(PermissionsMode::Standard)
        .set_tags(Some(Default::default()))
        .send()
        .expect("success");

    let requests = connector.actual_requests();
    let params = parse_form(requests[0].body());
    assert!(
        !params.iter().any(|(name, _)| name.starts_with("Tags")),
        "an empty map has no entries to send: {:?}",
        params
    );
}

#[test]
fn endpoint_url_overrides_region() {
    let connector = StaticReplayConnector::new(vec![ReplayEvent::new(
        http::Request::builder()
            .method("POST")
            .uri("http://localhost:4566")
            .body(
                "Action=DeleteLedger&Version=2019-01-02&Name=old-ledger".to_string(),
            )
            .unwrap(),
        response("<DeleteLedgerResponse><ResponseMetadata><RequestId>del-1</RequestId></ResponseMetadata></DeleteLedgerResponse>"),
    )]);
    let config = Config::builder()
        .endpoint_url("http://localhost:4566")
        .http_connector(connector.clone())
        .build();
    let client = Client::from_conf(config);

    let output = client
        .delete_ledger()
        .name("old-ledger")
        .send()
        .expect("success");
    assert_eq!(output.request_id(), Some("del-1"));
    connector.assert_requests_match(&[]);
}

#[test]
fn nested_and_timestamp_members() {
    let (client, connector) = client(vec![ReplayEvent::new(
        http::Request::builder()
            .method("POST")
            .uri("https://qldb.us-east-1.amazonaws.com")
            .body(
                "Action=ExportJournalToS3&Version=2019-01-02&Name=ledger1\
                &InclusiveStartTime=2021-01-01T00%3A00%3A00Z\
                &ExclusiveEndTime=2021-01-02T00%3A00%3A00Z\
                &S3ExportConfiguration.Bucket=exports\
                &S3ExportConfiguration.Prefix=ledger1%2F\
                &S3ExportConfiguration.EncryptionConfiguration.ObjectEncryptionType=SSE_S3\
                &RoleArn=arn%3Aaws%3Aiam%3A%3A123456789012%3Arole%2Fexport\
                &OutputFormat=JSON"
                    .to_string(),
            )
            .unwrap(),
        response("<ExportJournalToS3Response><ExportJournalToS3Result><ExportId>7ISCkqwe4y25YyHLzYUFAf</ExportId></ExportJournalToS3Result></ExportJournalToS3Response>"),
    )]);

    use aws_sdk_qldb::primitives::DateTime;
    use aws_sdk_qldb::types::{OutputFormat, S3EncryptionConfiguration, S3ExportConfiguration, S3ObjectEncryptionType};
    let output = client
        .export_journal_to_s3()
        .name("ledger1")
        .inclusive_start_time(DateTime::from_secs(1609459200))
        .exclusive_end_time(DateTime::from_secs(1609545600))
        .s3_export_configuration(
            S3ExportConfiguration::builder()
                .bucket("exports")
                .prefix("ledger1/")
                .encryption_configuration(
                    S3EncryptionConfiguration::builder()
                        .object_encryption_type(S3ObjectEncryptionType::SseS3)
                        .build(),
                )
                .build(),
        )
        .role_arn("arn:aws:iam::123456789012:role/export")
        .output_format(OutputFormat::Json)
        .send()
        .expect("success");

    connector.assert_requests_match(&[]);
    assert_eq!(output.export_id(), Some("7ISCkqwe4y25YyHLzYUFAf"));
    assert_eq!(output.request_id(), None);
}

#[test]
fn list_members_are_indexed_from_one() {
    let (client, connector) = client(vec![ReplayEvent::new(
        http::Request::builder()
            .method("POST")
            .uri("https://qldb.us-east-1.amazonaws.com")
            .body(
                "Action=UntagResource&Version=2019-01-02\
                &ResourceArn=arn%3Aaws%3Aqldb%3Aus-east-1%3A123456789012%3Aledger%2Fledger1\
                &TagKeys.member.1=team&TagKeys.member.2=env"
                    .to_string(),
            )
            .unwrap(),
        response("<UntagResourceResponse/>"),
    )]);

    client
        .untag_resource()
        .resource_arn("arn:aws:qldb:us-east-1:123456789012:ledger/ledger1")
        .tag_keys("team")
        .tag_keys("env")
        .send()
        .expect("success");
    connector.assert_requests_match(&[]);
}
