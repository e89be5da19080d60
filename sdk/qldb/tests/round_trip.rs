/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Requests are rendered as XML with `query_to_xml` and fed back as responses, checking that
//! what a client sends is what it reads back.

use aws_sdk_qldb::config::Region;
use aws_sdk_qldb::primitives::DateTime;
use aws_sdk_qldb::types::{JournalKinesisStreamDescription, KinesisConfiguration};
use aws_sdk_qldb::{Client, Config};
use aws_smithy_protocol_test::query_to_xml;
use aws_smithy_runtime::client::connector::HttpResponse;
use aws_smithy_runtime::test_util::replay::{ReplayEvent, StaticReplayConnector};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn ok(body: String) -> HttpResponse {
    http::Response::builder()
        .status(200)
        .body(body.into())
        .unwrap()
}

fn client(connector: &StaticReplayConnector) -> Client {
    Client::from_conf(
        Config::builder()
            .region(Region::new("us-east-1"))
            .http_connector(connector.clone())
            .build(),
    )
}

struct Stream {
    ledger_name: String,
    role_arn: String,
    stream_name: String,
    stream_arn: String,
    aggregation_enabled: Option<bool>,
    inclusive_start_time: DateTime,
    exclusive_end_time: Option<DateTime>,
}

fn stream_round_trip(stream: &Stream) -> JournalKinesisStreamDescription {
    let send = StaticReplayConnector::new(vec![ReplayEvent::with_response(ok(
        "<StreamJournalToKinesisResponse><StreamJournalToKinesisResult>\
        <StreamId>stream-1</StreamId>\
        </StreamJournalToKinesisResult></StreamJournalToKinesisResponse>"
            .to_string(),
    ))]);
    let output = client(&send)
        .stream_journal_to_kinesis()
        .ledger_name(&stream.ledger_name)
        .role_arn(&stream.role_arn)
        .stream_name(&stream.stream_name)
        .inclusive_start_time(stream.inclusive_start_time)
        .set_exclusive_end_time(stream.exclusive_end_time)
        .kinesis_configuration(
            KinesisConfiguration::builder()
                .stream_arn(&stream.stream_arn)
                .set_aggregation_enabled(stream.aggregation_enabled)
                .build(),
        )
        .send()
        .expect("stream started");
    assert_eq!(output.stream_id(), Some("stream-1"));

    let requests = send.actual_requests();
    let as_xml = query_to_xml(requests[0].body(), "Stream");
    let describe = StaticReplayConnector::new(vec![ReplayEvent::with_response(ok(format!(
        "<DescribeJournalKinesisStreamResponse><DescribeJournalKinesisStreamResult>{}\
        </DescribeJournalKinesisStreamResult></DescribeJournalKinesisStreamResponse>",
        as_xml
    )))]);
    let output = client(&describe)
        .describe_journal_kinesis_stream()
        .ledger_name(&stream.ledger_name)
        .stream_id("stream-1")
        .send()
        .expect("stream described");
    output.stream().cloned().expect("stream is present")
}

fn assert_matches(stream: &Stream, described: &JournalKinesisStreamDescription) {
    assert_eq!(described.ledger_name(), Some(stream.ledger_name.as_str()));
    assert_eq!(described.role_arn(), Some(stream.role_arn.as_str()));
    assert_eq!(described.stream_name(), Some(stream.stream_name.as_str()));
    assert_eq!(
        described.inclusive_start_time(),
        Some(&stream.inclusive_start_time)
    );
    assert_eq!(
        described.exclusive_end_time(),
        stream.exclusive_end_time.as_ref()
    );
    let kinesis = described.kinesis_configuration().expect("kinesis");
    assert_eq!(kinesis.stream_arn(), Some(stream.stream_arn.as_str()));
    assert_eq!(kinesis.aggregation_enabled(), stream.aggregation_enabled);
    assert_eq!(described.status(), None);
    assert_eq!(described.arn(), None);
}

#[test]
fn stream_journal_to_kinesis() {
    let stream = Stream {
        ledger_name: "ledger1".into(),
        role_arn: "arn:aws:iam::123456789012:role/stream".into(),
        stream_name: "journal & more <stream>".into(),
        stream_arn: "arn:aws:kinesis:us-east-1:123456789012:stream/journal".into(),
        aggregation_enabled: Some(true),
        inclusive_start_time: DateTime::from_secs(1609459200),
        exclusive_end_time: Some(DateTime::from_secs(1609545600)),
    };
    let described = stream_round_trip(&stream);
    assert_matches(&stream, &described);
}

#[test]
fn empty_strings_survive() {
    let stream = Stream {
        ledger_name: "ledger1".into(),
        role_arn: "".into(),
        stream_name: "".into(),
        stream_arn: "arn".into(),
        aggregation_enabled: None,
        inclusive_start_time: DateTime::from_secs(0),
        exclusive_end_time: None,
    };
    let described = stream_round_trip(&stream);
    assert_matches(&stream, &described);
}

fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.:/<>&'\"=%+-]{0,24}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]
    #[test]
    fn any_stream_round_trips(
        ledger_name in text(),
        role_arn in text(),
        stream_name in text(),
        stream_arn in text(),
        aggregation_enabled in proptest::option::of(any::<bool>()),
        start in 0i64..4_102_444_800,
        end in proptest::option::of(0i64..4_102_444_800),
    ) {
        let stream = Stream {
            ledger_name,
            role_arn,
            stream_name,
            stream_arn,
            aggregation_enabled,
            inclusive_start_time: DateTime::from_secs(start),
            exclusive_end_time: end.map(DateTime::from_secs),
        };
        let described = stream_round_trip(&stream);
        assert_matches(&stream, &described);
    }
}
