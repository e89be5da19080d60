/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3control::config::Region;
use aws_sdk_s3control::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_s3control::operation::RequestId;
use aws_sdk_s3control::types::PublicAccessBlockConfiguration;
use aws_sdk_s3control::{Client, Config, Error};
use aws_smithy_protocol_test::query_to_xml;
use aws_smithy_runtime::client::connector::HttpResponse;
use aws_smithy_runtime::test_util::replay::{ReplayEvent, StaticReplayConnector};
use aws_types::SdkConfig;
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

#[test]
fn put_public_access_block_request() {
    let connector = StaticReplayConnector::new(vec![ReplayEvent::new(
        http::Request::builder()
            .method("POST")
            .uri("https://s3-control.us-west-2.amazonaws.com")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(
                "Action=PutPublicAccessBlock&Version=2018-08-20\
                &PublicAccessBlockConfiguration.BlockPublicAcls=true\
                &PublicAccessBlockConfiguration.RestrictPublicBuckets=false\
                &AccountId=123456789012"
                    .to_string(),
            )
            .unwrap(),
        response(
            200,
            "<PutPublicAccessBlockResponse><ResponseMetadata><RequestId>pab-1</RequestId>\
            </ResponseMetadata></PutPublicAccessBlockResponse>"
                .into(),
        ),
    )]);
    let output = client(&connector)
        .put_public_access_block()
        .account_id("123456789012")
        .public_access_block_configuration(
            PublicAccessBlockConfiguration::builder()
                .block_public_acls(true)
                .restrict_public_buckets(false)
                .build(),
        )
        .send()
        .expect("configuration stored");
    connector.assert_requests_match(&[]);
    assert_eq!(output.request_id(), Some("pab-1"));
}

fn round_trip(configuration: PublicAccessBlockConfiguration) -> Option<PublicAccessBlockConfiguration> {
    let put = StaticReplayConnector::new(vec![ReplayEvent::with_response(response(
        200,
        "<PutPublicAccessBlockResponse/>".into(),
    ))]);
    client(&put)
        .put_public_access_block()
        .account_id("123456789012")
        .public_access_block_configuration(configuration)
        .send()
        .expect("configuration stored");

    let requests = put.actual_requests();
    let as_xml = query_to_xml(requests[0].body(), "GetPublicAccessBlockResult");
    let get = StaticReplayConnector::new(vec![ReplayEvent::with_response(response(
        200,
        format!("<GetPublicAccessBlockResponse>{}</GetPublicAccessBlockResponse>", as_xml),
    ))]);
    client(&get)
        .get_public_access_block()
        .account_id("123456789012")
        .send()
        .expect("configuration read")
        .public_access_block_configuration()
        .cloned()
}

proptest! {
    #[test]
    fn configuration_round_trips(
        block_public_acls in proptest::option::of(any::<bool>()),
        ignore_public_acls in proptest::option::of(any::<bool>()),
        block_public_policy in proptest::option::of(any::<bool>()),
        restrict_public_buckets in proptest::option::of(any::<bool>()),
    ) {
        let configuration = PublicAccessBlockConfiguration::builder()
            .set_block_public_acls(block_public_acls)
            .set_ignore_public_acls(ignore_public_acls)
            .set_block_public_policy(block_public_policy)
            .set_restrict_public_buckets(restrict_public_buckets)
            .build();
        prop_assert_eq!(round_trip(configuration.clone()), Some(configuration));
    }
}

#[test]
fn no_configuration_is_a_modeled_error() {
    let connector = StaticReplayConnector::new(vec![ReplayEvent::with_response(response(
        404,
        "<ErrorResponse><Error><Type>Sender</Type>\
        <Code>NoSuchPublicAccessBlockConfiguration</Code>\
        <Message>The public access block configuration was not found</Message>\
        </Error><RequestId>pab-2</RequestId></ErrorResponse>"
            .into(),
    ))]);
    let err = client(&connector)
        .get_public_access_block()
        .account_id("123456789012")
        .send()
        .expect_err("not configured");
    assert_eq!(err.request_id(), Some("pab-2"));
    assert!(matches!(
        err.as_service_error(),
        Some(Error::NoSuchPublicAccessBlockConfiguration(_))
    ));
    let err = err.into_service_error();
    assert!(err.is_no_such_public_access_block_configuration());
    assert_eq!(
        err.message(),
        Some("The public access block configuration was not found")
    );
    assert_eq!(
        err.to_string(),
        "NoSuchPublicAccessBlockConfiguration: The public access block configuration was not found"
    );
}

#[test]
fn account_id_is_required() {
    let connector = StaticReplayConnector::new(vec![]);
    let err = client(&connector)
        .get_public_access_block()
        .send()
        .expect_err("account id is required");
    assert!(matches!(err, SdkError::ConstructionFailure(_)), "{:?}", err);
    assert!(connector.actual_requests().is_empty());
}

#[test]
fn client_from_shared_config() {
    let connector = StaticReplayConnector::new(vec![ReplayEvent::new(
        http::Request::builder()
            .method("POST")
            .uri("https://s3-control.eu-west-1.amazonaws.com")
            .body(
                "Action=DeletePublicAccessBlock&Version=2018-08-20&AccountId=123456789012"
                    .to_string(),
            )
            .unwrap(),
        response(200, "<DeletePublicAccessBlockResponse/>".into()),
    )]);
    let shared = SdkConfig::builder()
        .region(Region::new("eu-west-1"))
        .http_connector(connector.clone())
        .build();
    let client = Client::new(&shared);
    assert_eq!(client.config().region(), Some(&Region::new("eu-west-1")));
    client
        .delete_public_access_block()
        .account_id("123456789012")
        .send()
        .expect("deleted");
    connector.assert_requests_match(&[]);
}
