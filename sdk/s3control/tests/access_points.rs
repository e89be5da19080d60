/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3control::config::Region;
use aws_sdk_s3control::primitives::DateTime;
use aws_sdk_s3control::types::{NetworkOrigin, VpcConfiguration};
use aws_sdk_s3control::{Client, Config};
use aws_smithy_runtime::client::connector::HttpResponse;
use aws_smithy_runtime::test_util::replay::{ReplayEvent, StaticReplayConnector};
use pretty_assertions::assert_eq;

fn ok(body: &str) -> HttpResponse {
    http::Response::builder()
        .status(200)
        .body(body.to_owned().into())
        .unwrap()
}

fn client(events: Vec<ReplayEvent>) -> (Client, StaticReplayConnector) {
    let connector = StaticReplayConnector::new(events);
    let client = Client::from_conf(
        Config::builder()
            .region(Region::new("us-west-2"))
            .endpoint_url("https://123456789012.s3-control.us-west-2.amazonaws.com")
            .http_connector(connector.clone())
            .build(),
    );
    (client, connector)
}

#[test]
fn create_access_point_in_a_vpc() {
    let (client, connector) = client(vec![ReplayEvent::new(
        http::Request::builder()
            .method("POST")
            .uri("https://123456789012.s3-control.us-west-2.amazonaws.com")
            .body(
                "Action=CreateAccessPoint&Version=2018-08-20&AccountId=123456789012\
                &Name=internal&Bucket=data-bucket\
                &VpcConfiguration.VpcId=vpc-1a2b3c4d"
                    .to_string(),
            )
            .unwrap(),
        ok("<CreateAccessPointResponse/>"),
    )]);
    client
        .create_access_point()
        .account_id("123456789012")
        .name("internal")
        .bucket("data-bucket")
        .vpc_configuration(VpcConfiguration::builder().vpc_id("vpc-1a2b3c4d").build())
        .send()
        .expect("access point created");
    connector.assert_requests_match(&[]);
}

#[test]
fn get_access_point() {
    let (client, _connector) = client(vec![ReplayEvent::with_response(ok(
        r#"<GetAccessPointResponse>
  <GetAccessPointResult>
    <Name>internal</Name>
    <Bucket>data-bucket</Bucket>
    <NetworkOrigin>VPC</NetworkOrigin>
    <VpcConfiguration><VpcId>vpc-1a2b3c4d</VpcId></VpcConfiguration>
    <PublicAccessBlockConfiguration>
      <BlockPublicAcls>true</BlockPublicAcls>
      <IgnorePublicAcls>true</IgnorePublicAcls>
    </PublicAccessBlockConfiguration>
    <CreationDate>2020-01-01T00:00:00Z</CreationDate>
  </GetAccessPointResult>
</GetAccessPointResponse>"#,
    ))]);
    let output = client
        .get_access_point()
        .account_id("123456789012")
        .name("internal")
        .send()
        .expect("access point read");
    assert_eq!(output.name(), Some("internal"));
    assert_eq!(output.network_origin(), Some(&NetworkOrigin::Vpc));
    assert_eq!(
        output.vpc_configuration().and_then(|vpc| vpc.vpc_id()),
        Some("vpc-1a2b3c4d")
    );
    let block = output
        .public_access_block_configuration()
        .expect("block configuration");
    assert_eq!(block.block_public_acls(), Some(true));
    assert_eq!(block.block_public_policy(), None);
    assert_eq!(output.creation_date(), Some(&DateTime::from_secs(1577836800)));
}

#[test]
fn list_access_points() {
    let (client, connector) = client(vec![ReplayEvent::new(
        http::Request::builder()
            .method("POST")
            .uri("https://123456789012.s3-control.us-west-2.amazonaws.com")
            .body(
                "Action=ListAccessPoints&Version=2018-08-20&AccountId=123456789012\
                &Bucket=data-bucket&MaxResults=2"
                    .to_string(),
            )
            .unwrap(),
        ok(r#"<ListAccessPointsResponse>
  <ListAccessPointsResult>
    <AccessPointList>
      <member>
        <Name>internal</Name>
        <NetworkOrigin>VPC</NetworkOrigin>
        <VpcConfiguration><VpcId>vpc-1a2b3c4d</VpcId></VpcConfiguration>
        <Bucket>data-bucket</Bucket>
      </member>
      <member>
        <Name>public</Name>
        <NetworkOrigin>Internet</NetworkOrigin>
        <Bucket>data-bucket</Bucket>
      </member>
    </AccessPointList>
    <NextToken>ap-page-2</NextToken>
  </ListAccessPointsResult>
</ListAccessPointsResponse>"#),
    )]);
    let output = client
        .list_access_points()
        .account_id("123456789012")
        .bucket("data-bucket")
        .max_results(2)
        .send()
        .expect("access points listed");
    connector.assert_requests_match(&[]);

    let names: Vec<_> = output
        .access_point_list()
        .unwrap_or_default()
        .iter()
        .map(|ap| (ap.name(), ap.network_origin().map(|o| o.as_str())))
        .collect();
    assert_eq!(
        names,
        vec![
            (Some("internal"), Some("VPC")),
            (Some("public"), Some("Internet"))
        ]
    );
    assert_eq!(output.next_token(), Some("ap-page-2"));
}

#[test]
fn access_point_policy() {
    let policy = r#"{"Version":"2012-10-17","Statement":[{"Effect":"Allow","Action":"s3:GetObject"}]}"#;
    let (client, _connector) = client(vec![ReplayEvent::with_response(ok(&format!(
        "<GetAccessPointPolicyResponse><GetAccessPointPolicyResult>\
        <Policy>{}</Policy>\
        </GetAccessPointPolicyResult></GetAccessPointPolicyResponse>",
        policy.replace('"', "&quot;")
    )))]);
    let output = client
        .get_access_point_policy()
        .account_id("123456789012")
        .name("internal")
        .send()
        .expect("policy read");
    assert_eq!(output.policy(), Some(policy));
}
