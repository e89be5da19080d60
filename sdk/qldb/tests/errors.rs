/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_qldb::config::Region;
use aws_sdk_qldb::error::{BuildError, DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_qldb::operation::RequestId;
use aws_sdk_qldb::{Client, Config, Error};
use aws_smithy_runtime::test_util::replay::{ReplayEvent, StaticReplayConnector};
use pretty_assertions::assert_eq;

fn client_with_error(status: u16, body: &str) -> Client {
    let connector = StaticReplayConnector::new(vec![ReplayEvent::with_response(
        http::Response::builder()
            .status(status)
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
fn modeled_error_with_members() {
    let client = client_with_error(
        404,
        r#"<ErrorResponse xmlns="https://qldb.amazonaws.com/doc/2019-01-02/">
  <Error>
    <Type>Sender</Type>
    <Code>ResourceNotFoundException</Code>
    <Message>Ledger ledger1 not found</Message>
    <ResourceType>LEDGER</ResourceType>
    <ResourceName>ledger1</ResourceName>
  </Error>
  <RequestId>a0c3c5f6-7e6f-4b7c-a1b1-77c6f7d1a2b3</RequestId>
</ErrorResponse>"#,
    );
    let err = client
        .describe_ledger()
        .name("ledger1")
        .send()
        .expect_err("ledger is missing");

    assert_eq!(err.code(), Some("ResourceNotFoundException"));
    assert_eq!(err.request_id(), Some("a0c3c5f6-7e6f-4b7c-a1b1-77c6f7d1a2b3"));
    assert_eq!(err.raw_response().map(|r| r.status().as_u16()), Some(404));

    let err = err.into_service_error();
    assert!(err.is_resource_not_found_exception());
    assert!(!err.is_resource_in_use_exception());
    match &err {
        Error::ResourceNotFoundException(inner) => {
            assert_eq!(inner.message(), Some("Ledger ledger1 not found"));
            assert_eq!(inner.resource_type(), Some("LEDGER"));
            assert_eq!(inner.resource_name(), Some("ledger1"));
            assert_eq!(inner.request_id(), Some("a0c3c5f6-7e6f-4b7c-a1b1-77c6f7d1a2b3"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(
        err.to_string(),
        "ResourceNotFoundException: Ledger ledger1 not found"
    );
}

#[test]
fn invalid_parameter_names_the_parameter() {
    let client = client_with_error(
        400,
        "<ErrorResponse><Error><Code>InvalidParameterException</Code>\
        <Message>Name is too long</Message><ParameterName>Name</ParameterName>\
        </Error><RequestId>r-2</RequestId></ErrorResponse>",
    );
    let err = client
        .create_ledger()
        .name("x".repeat(40))
        .permissions_mode("STANDARD")
        .send()
        .expect_err("rejected")
        .into_service_error();
    match err {
        Error::InvalidParameterException(inner) => {
            assert_eq!(inner.parameter_name(), Some("Name"));
            assert_eq!(inner.meta().code(), Some("InvalidParameterException"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn unmodeled_code_is_unhandled() {
    let client = client_with_error(
        400,
        "<ErrorResponse><Error><Type>Sender</Type><Code>ThrottlingException</Code>\
        <Message>Rate exceeded</Message></Error><RequestId>r-3</RequestId></ErrorResponse>",
    );
    let err = client
        .list_ledgers()
        .send()
        .expect_err("throttled")
        .into_service_error();
    assert!(matches!(err, Error::Unhandled(_)), "{:?}", err);
    assert_eq!(err.code(), Some("ThrottlingException"));
    assert_eq!(err.message(), Some("Rate exceeded"));
    assert_eq!(err.request_id(), Some("r-3"));
    assert_eq!(err.to_string(), "unhandled error (ThrottlingException)");
}

#[test]
fn error_body_that_is_not_xml() {
    let client = client_with_error(500, "Internal Server Error");
    let err = client.list_ledgers().send().expect_err("server error");
    assert!(matches!(err, SdkError::ResponseError { .. }), "{:?}", err);
    assert_eq!(err.code(), None);
}

#[test]
fn truncated_error_envelope() {
    let client = client_with_error(
        404,
        "<ErrorResponse><Error><Code>ResourceNotFoundException</Code>\
        <Message>gone</Message></Error>",
    );
    let err = client.list_ledgers().send().expect_err("not found");
    assert!(matches!(err, SdkError::ResponseError { .. }), "{:?}", err);
    assert_eq!(err.code(), None);
}

#[test]
fn missing_required_member_is_not_sent() {
    let connector = StaticReplayConnector::new(vec![]);
    let client = Client::from_conf(
        Config::builder()
            .region(Region::new("us-east-1"))
            .http_connector(connector.clone())
            .build(),
    );
    let err = client
        .describe_ledger()
        .send()
        .expect_err("name is required");
    match &err {
        SdkError::ConstructionFailure(source) => {
            let build_error = source
                .downcast_ref::<BuildError>()
                .expect("build error");
            assert_eq!(build_error.field(), Some("name"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(connector.actual_requests().is_empty());
    assert!(
        format!("{}", DisplayErrorContext(&err)).contains("name"),
        "{}",
        DisplayErrorContext(&err)
    );
}

#[test]
fn missing_region_is_a_construction_failure() {
    let connector = StaticReplayConnector::new(vec![]);
    let client = Client::from_conf(Config::builder().http_connector(connector.clone()).build());
    let err = client
        .list_ledgers()
        .send()
        .expect_err("no region");
    match &err {
        SdkError::ConstructionFailure(source) => {
            assert_eq!(
                source.downcast_ref::<BuildError>().and_then(|e| e.field()),
                Some("region")
            );
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(connector.actual_requests().is_empty());
}

#[test]
fn missing_connector_is_a_construction_failure() {
    let client = Client::from_conf(Config::builder().region(Region::new("us-east-1")).build());
    let err = client.list_ledgers().send().expect_err("no connector");
    match &err {
        SdkError::ConstructionFailure(source) => {
            assert_eq!(
                source.downcast_ref::<BuildError>().and_then(|e| e.field()),
                Some("http_connector")
            );
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn transport_failure_becomes_unhandled() {
    let client = Client::from_conf(
        Config::builder()
            .region(Region::new("us-east-1"))
            .http_connector(StaticReplayConnector::new(vec![]))
            .build(),
    );
    let err = client.list_ledgers().send().expect_err("no response recorded");
    assert!(matches!(err, SdkError::DispatchFailure(_)), "{:?}", err);
    let err: Error = err.into();
    assert!(matches!(err, Error::Unhandled(_)), "{:?}", err);
    assert_eq!(err.code(), None);
}
