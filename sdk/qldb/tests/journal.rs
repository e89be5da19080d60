/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_qldb::config::Region;
use aws_sdk_qldb::error::{BuildError, SdkError};
use aws_sdk_qldb::operation::RequestId;
use aws_sdk_qldb::types::{ExportStatus, OutputFormat, StreamStatus, ValueHolder};
use aws_sdk_qldb::{Client, Config};
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

fn request(body: &str) -> http::Request<String> {
    http::Request::builder()
        .method("POST")
        .uri("https://qldb.us-east-1.amazonaws.com")
        .body(body.to_string())
        .unwrap()
}

fn response(body: &str) -> HttpResponse {
    http::Response::builder()
        .status(200)
        .body(body.to_owned().into())
        .unwrap()
}

const BLOCK_ADDRESS: &str = r#"{strandId:"BlwLFuVi",sequenceNo:3}"#;
const ENCODED_BLOCK_ADDRESS: &str = "%7BstrandId%3A%22BlwLFuVi%22%2CsequenceNo%3A3%7D";

#[test]
fn get_block_with_value_holders() {
    let (client, connector) = client(vec![ReplayEvent::new(
        request(&format!(
            "Action=GetBlock&Version=2019-01-02&Name=ledger1\
            &BlockAddress.IonText={ENCODED_BLOCK_ADDRESS}"
        )),
        response(
            r#"<GetBlockResponse>
  <GetBlockResult>
    <Block><IonText>{blockAddress:{strandId:"BlwLFuVi",sequenceNo:3}}</IonText></Block>
  </GetBlockResult>
  <ResponseMetadata><RequestId>block-1</RequestId></ResponseMetadata>
</GetBlockResponse>"#,
        ),
    )]);

    let output = client
        .get_block()
        .name("ledger1")
        .block_address(ValueHolder::builder().ion_text(BLOCK_ADDRESS).build())
        .send()
        .expect("success");

    connector.assert_requests_match(&[]);
    assert_eq!(
        output.block().and_then(|block| block.ion_text()),
        Some(r#"{blockAddress:{strandId:"BlwLFuVi",sequenceNo:3}}"#)
    );
    assert_eq!(output.proof(), None);
    assert_eq!(output.request_id(), Some("block-1"));
}

#[test]
fn get_block_requires_a_block_address() {
    let (client, connector) = client(vec![]);
    let err = client
        .get_block()
        .name("ledger1")
        .send()
        .expect_err("block address is required");
    match &err {
        SdkError::ConstructionFailure(source) => {
            let build_error = source
                .downcast_ref::<BuildError>()
                .expect("build error");
            assert_eq!(build_error.field(), Some("block_address"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(connector.actual_requests().is_empty());
}

#[test]
fn get_revision() {
    let (client, connector) = client(vec![ReplayEvent::new(
        request(&format!(
            "Action=GetRevision&Version=2019-01-02&Name=ledger1\
            &BlockAddress.IonText={ENCODED_BLOCK_ADDRESS}\
            &DocumentId=8F0TPCmdNQ6JTRpiLj2TmW\
            &DigestTipAddress.IonText={ENCODED_BLOCK_ADDRESS}"
        )),
        response(
            r#"<GetRevisionResponse>
  <GetRevisionResult>
    <Proof><IonText>[hash1,hash2]</IonText></Proof>
    <Revision><IonText>{data:{}}</IonText></Revision>
  </GetRevisionResult>
</GetRevisionResponse>"#,
        ),
    )]);

    let address = ValueHolder::builder().ion_text(BLOCK_ADDRESS).build();
    let output = client
        .get_revision()
        .name("ledger1")
        .block_address(address.clone())
        .document_id("8F0TPCmdNQ6JTRpiLj2TmW")
        .digest_tip_address(address)
        .send()
        .expect("success");

    connector.assert_requests_match(&[]);
    assert_eq!(output.proof().and_then(|p| p.ion_text()), Some("[hash1,hash2]"));
    assert_eq!(output.revision().and_then(|r| r.ion_text()), Some("{data:{}}"));
    assert_eq!(output.request_id(), None);
}

#[test]
fn describe_journal_s3_export() {
    let (client, connector) = client(vec![ReplayEvent::new(
        request("Action=DescribeJournalS3Export&Version=2019-01-02&Name=ledger1&ExportId=export-1"),
        response(
            r#"<DescribeJournalS3ExportResponse>
  <DescribeJournalS3ExportResult>
    <ExportDescription>
      <LedgerName>ledger1</LedgerName>
      <ExportId>export-1</ExportId>
      <ExportCreationTime>2021-03-01T00:00:00Z</ExportCreationTime>
      <Status>COMPLETED</Status>
      <InclusiveStartTime>2021-01-01T00:00:00Z</InclusiveStartTime>
      <ExclusiveEndTime>2021-03-01T00:00:00Z</ExclusiveEndTime>
      <S3ExportConfiguration>
        <Bucket>exports</Bucket>
        <Prefix>ledger1/</Prefix>
        <EncryptionConfiguration>
          <ObjectEncryptionType>SSE_KMS</ObjectEncryptionType>
          <KmsKeyArn>arn:aws:kms:us-east-1:123456789012:key/abc</KmsKeyArn>
        </EncryptionConfiguration>
      </S3ExportConfiguration>
      <RoleArn>arn:aws:iam::123456789012:role/export</RoleArn>
      <OutputFormat>ION_TEXT</OutputFormat>
    </ExportDescription>
  </DescribeJournalS3ExportResult>
  <ResponseMetadata><RequestId>s3-export-1</RequestId></ResponseMetadata>
</DescribeJournalS3ExportResponse>"#,
        ),
    )]);

    let output = client
        .describe_journal_s3_export()
        .name("ledger1")
        .export_id("export-1")
        .send()
        .expect("success");

    connector.assert_requests_match(&[]);
    let export = output.export_description().expect("description is present");
    assert_eq!(export.ledger_name(), Some("ledger1"));
    assert_eq!(export.status(), Some(&ExportStatus::Completed));
    assert_eq!(export.inclusive_start_time().map(|t| t.secs()), Some(1609459200));
    assert_eq!(export.exclusive_end_time().map(|t| t.secs()), Some(1614556800));
    assert_eq!(export.output_format(), Some(&OutputFormat::IonText));
    let s3 = export.s3_export_configuration().expect("configuration is present");
    assert_eq!(s3.bucket(), Some("exports"));
    assert_eq!(
        s3.encryption_configuration().and_then(|e| e.kms_key_arn()),
        Some("arn:aws:kms:us-east-1:123456789012:key/abc")
    );
    assert_eq!(output.request_id(), Some("s3-export-1"));
}

const EXPORTS_RESPONSE: &str = r#"<ListJournalS3ExportsResult>
    <JournalS3Exports>
      <member><LedgerName>ledger1</LedgerName><ExportId>a</ExportId><Status>IN_PROGRESS</Status></member>
      <member><LedgerName>ledger2</LedgerName><ExportId>b</ExportId><Status>CANCELLED</Status></member>
    </JournalS3Exports>
    <NextToken>page-2</NextToken>
  </ListJournalS3ExportsResult>"#;

#[test]
fn list_journal_s3_exports() {
    let (client, connector) = client(vec![ReplayEvent::new(
        request("Action=ListJournalS3Exports&Version=2019-01-02&MaxResults=2"),
        response(&format!(
            "<ListJournalS3ExportsResponse>{EXPORTS_RESPONSE}</ListJournalS3ExportsResponse>"
        )),
    )]);

    let output = client
        .list_journal_s3_exports()
        .max_results(2)
        .send()
        .expect("success");

    connector.assert_requests_match(&[]);
    let exports = output.journal_s3_exports().expect("list is present");
    let ids: Vec<_> = exports.iter().filter_map(|e| e.export_id()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(exports[1].status(), Some(&ExportStatus::Cancelled));
    assert_eq!(output.next_token(), Some("page-2"));
}

#[test]
fn list_journal_s3_exports_for_ledger() {
    let (client, connector) = client(vec![ReplayEvent::new(
        request(
            "Action=ListJournalS3ExportsForLedger&Version=2019-01-02&Name=ledger1&NextToken=page-2",
        ),
        response(
            r#"<ListJournalS3ExportsForLedgerResponse>
  <ListJournalS3ExportsForLedgerResult>
    <JournalS3Exports/>
  </ListJournalS3ExportsForLedgerResult>
</ListJournalS3ExportsForLedgerResponse>"#,
        ),
    )]);

    let output = client
        .list_journal_s3_exports_for_ledger()
        .name("ledger1")
        .next_token("page-2")
        .send()
        .expect("success");

    connector.assert_requests_match(&[]);
    assert_eq!(output.journal_s3_exports(), Some(&[][..]));
    assert_eq!(output.next_token(), None);
}

#[test]
fn list_and_cancel_kinesis_streams() {
    let (client, connector) = client(vec![
        ReplayEvent::new(
            request("Action=ListJournalKinesisStreamsForLedger&Version=2019-01-02&LedgerName=ledger1"),
            response(
                r#"<ListJournalKinesisStreamsForLedgerResponse>
  <ListJournalKinesisStreamsForLedgerResult>
    <Streams>
      <member>
        <LedgerName>ledger1</LedgerName>
        <RoleArn>arn:aws:iam::123456789012:role/stream</RoleArn>
        <StreamId>stream-1</StreamId>
        <Arn>arn:aws:qldb:us-east-1:123456789012:stream/ledger1/stream-1</Arn>
        <Status>IMPAIRED</Status>
        <KinesisConfiguration>
          <StreamArn>arn:aws:kinesis:us-east-1:123456789012:stream/journal</StreamArn>
          <AggregationEnabled>false</AggregationEnabled>
        </KinesisConfiguration>
        <ErrorCause>IAM_PERMISSION_REVOKED</ErrorCause>
        <StreamName>journal</StreamName>
      </member>
    </Streams>
  </ListJournalKinesisStreamsForLedgerResult>
</ListJournalKinesisStreamsForLedgerResponse>"#,
            ),
        ),
        ReplayEvent::new(
            request("Action=CancelJournalKinesisStream&Version=2019-01-02&LedgerName=ledger1&StreamId=stream-1"),
            response(
                r#"<CancelJournalKinesisStreamResponse>
  <CancelJournalKinesisStreamResult><StreamId>stream-1</StreamId></CancelJournalKinesisStreamResult>
  <ResponseMetadata><RequestId>cancel-1</RequestId></ResponseMetadata>
</CancelJournalKinesisStreamResponse>"#,
            ),
        ),
    ]);

    let streams = client
        .list_journal_kinesis_streams_for_ledger()
        .ledger_name("ledger1")
        .send()
        .expect("success");
    let stream = &streams.streams().expect("streams are present")[0];
    assert_eq!(stream.status(), Some(&StreamStatus::Impaired));
    assert_eq!(
        stream.error_cause().map(|cause| cause.as_str()),
        Some("IAM_PERMISSION_REVOKED")
    );
    assert_eq!(
        stream.kinesis_configuration().and_then(|k| k.aggregation_enabled()),
        Some(false)
    );

    let cancelled = client
        .cancel_journal_kinesis_stream()
        .ledger_name("ledger1")
        .stream_id(stream.stream_id().expect("stream id"))
        .send()
        .expect("success");
    assert_eq!(cancelled.stream_id(), Some("stream-1"));
    assert_eq!(cancelled.request_id(), Some("cancel-1"));
    connector.assert_requests_match(&[]);
}

#[test]
fn tag_resource() {
    let arn = "arn:aws:qldb:us-east-1:123456789012:ledger/ledger1";
    let (client, connector) = client(vec![ReplayEvent::new(
        request(
            "Action=TagResource&Version=2019-01-02\
            &ResourceArn=arn%3Aaws%3Aqldb%3Aus-east-1%3A123456789012%3Aledger%2Fledger1\
            &Tags.entry.1.key=a&Tags.entry.1.value=1\
            &Tags.entry.2.key=b&Tags.entry.2.value=",
        ),
        response("<TagResourceResponse><TagResourceResult/></TagResourceResponse>"),
    )]);

    let mut builder = client.tag_resource().resource_arn(arn);
    builder.insert_tags("b", "").unwrap();
    builder.insert_tags("a", "1").unwrap();
    builder.send().expect("success");

    connector.assert_requests_match(&[]);
}

#[test]
fn update_ledger() {
    let (client, connector) = client(vec![ReplayEvent::new(
        request("Action=UpdateLedger&Version=2019-01-02&Name=ledger1&DeletionProtection=false&KmsKey=AWS_OWNED_KMS_KEY"),
        response(
            r#"<UpdateLedgerResponse>
  <UpdateLedgerResult>
    <Name>ledger1</Name>
    <State>ACTIVE</State>
    <DeletionProtection>false</DeletionProtection>
    <EncryptionDescription>
      <KmsKeyArn>AWS_OWNED_KMS_KEY</KmsKeyArn>
      <EncryptionStatus>ENABLED</EncryptionStatus>
    </EncryptionDescription>
  </UpdateLedgerResult>
</UpdateLedgerResponse>"#,
        ),
    )]);

    let output = client
        .update_ledger()
        .name("ledger1")
        .deletion_protection(false)
        .kms_key("AWS_OWNED_KMS_KEY")
        .send()
        .expect("success");

    connector.assert_requests_match(&[]);
    assert_eq!(output.deletion_protection(), Some(false));
    assert_eq!(
        output
            .encryption_description()
            .and_then(|e| e.encryption_status())
            .map(|status| status.as_str()),
        Some("ENABLED")
    );
    assert_eq!(output.creation_date_time(), None);
}
