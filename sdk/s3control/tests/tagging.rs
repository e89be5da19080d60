/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3control::config::Region;
use aws_sdk_s3control::error::ProvideErrorMetadata;
use aws_sdk_s3control::types::S3Tag;
use aws_sdk_s3control::{Client, Config, Error};
use aws_smithy_protocol_test::query_to_xml;
use aws_smithy_runtime::client::connector::HttpResponse;
use aws_smithy_runtime::test_util::replay::{ReplayEvent, StaticReplayConnector};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn response(status: u16, body: String) -> HttpResponse {
    http::Response::builder()
        .status(status)
        .body(body.into())
        .unwrap()
}

fn client(connector: &StaticReplayConnector) -> Client {
    Client::from_conf(
        Config::builder()
            .region(Region::new("us-west-2"))
            .http_connector(connector.clone())
            .build(),
    )
}

fn tag(key: &str, value: &str) -> S3Tag {
    S3Tag::builder().key(key).value(value).build()
}

#[test]
fn put_job_tagging_request() {
    let connector = StaticReplayConnector::new(vec![ReplayEvent::new(
        http::Request::builder()
            .method("POST")
            .uri("https://s3-control.us-west-2.amazonaws.com")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(
                "Action=PutJobTagging&Version=2018-08-20&AccountId=123456789012&JobId=job-1\
                &Tags.member.1.Key=department&Tags.member.1.Value=finance\
                &Tags.member.2.Key=cost%20center&Tags.member.2.Value=42"
                    .to_string(),
            )
            .unwrap(),
        response(200, "<PutJobTaggingResponse/>".into()),
    )]);
    client(&connector)
        .put_job_tagging()
        .account_id("123456789012")
        .job_id("job-1")
        .tags(tag("department", "finance"))
        .tags(tag("cost center", "42"))
        .send()
        .expect("tags stored");
    connector.assert_requests_match(&[]);
}

/// Sends `tags` with PutJobTagging and answers GetJobTagging with what was sent.
fn tagging_round_trip(tags: Option<Vec<S3Tag>>) -> Option<Vec<S3Tag>> {
    let put = StaticReplayConnector::new(vec![ReplayEvent::with_response(response(
        200,
        "<PutJobTaggingResponse/>".into(),
    ))]);
    client(&put)
        .put_job_tagging()
        .account_id("123456789012")
        .job_id("job-1")
        .set_tags(tags)
        .send()
        .expect("tags stored");

    let requests = put.actual_requests();
    let as_xml = query_to_xml(requests[0].body(), "GetJobTaggingResult");
    let get = StaticReplayConnector::new(vec![ReplayEvent::with_response(response(
        200,
        format!("<GetJobTaggingResponse>{}</GetJobTaggingResponse>", as_xml),
    ))]);
    let output = client(&get)
        .get_job_tagging()
        .account_id("123456789012")
        .job_id("job-1")
        .send()
        .expect("tags read");
    output.tags().map(|tags| tags.to_vec())
}

#[test]
fn tags_round_trip() {
    let tags = vec![tag("b", "2"), tag("a", "1 & <2>"), tag("empty", "")];
    assert_eq!(tagging_round_trip(Some(tags.clone())), Some(tags));
}

#[test]
fn empty_tag_list_round_trips() {
    let connector = StaticReplayConnector::new(vec![ReplayEvent::new(
        http::Request::builder()
            .method("POST")
            .uri("https://s3-control.us-west-2.amazonaws.com")
            .body(
                "Action=PutJobTagging&Version=2018-08-20&AccountId=123456789012&JobId=job-1&Tags="
                    .to_string(),
            )
            .unwrap(),
        response(200, "<PutJobTaggingResponse/>".into()),
    )]);
    client(&connector)
        .put_job_tagging()
        .account_id("123456789012")
        .job_id("job-1")
        .set_tags(Some(vec![]))
        .send()
        .expect("tags cleared");
    connector.assert_requests_match(&[]);

    assert_eq!(tagging_round_trip(Some(vec![])), Some(vec![]));
}

#[test]
fn too_many_tags() {
    let connector = StaticReplayConnector::new(vec![ReplayEvent::with_response(response(
        400,
        "<ErrorResponse><Error><Type>Sender</Type><Code>TooManyTagsException</Code>\
        <Message>Jobs may have at most 50 tags</Message></Error>\
        <RequestId>tags-1</RequestId></ErrorResponse>"
            .into(),
    ))]);
    let err = client(&connector)
        .put_job_tagging()
        .account_id("123456789012")
        .job_id("job-1")
        .tags(tag("k", "v"))
        .send()
        .expect_err("too many tags")
        .into_service_error();
    assert!(err.is_too_many_tags_exception(), "{:?}", err);
    assert_eq!(err.code(), Some("TooManyTagsException"));
    match err {
        Error::TooManyTagsException(inner) => {
            assert_eq!(inner.message(), Some("Jobs may have at most 50 tags"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

fn tag_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.:/=+@&<>-]{0,16}".prop_map(|s| s.trim().to_string())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]
    #[test]
    fn any_tags_round_trip(pairs in proptest::collection::vec((tag_text(), tag_text()), 0..6)) {
        let tags: Vec<S3Tag> = pairs.iter().map(|(k, v)| tag(k, v)).collect();
        prop_assert_eq!(tagging_round_trip(Some(tags.clone())), Some(tags));
    }
}
