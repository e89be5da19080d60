/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3control::config::Region;
use aws_sdk_s3control::idempotency_token::IdempotencyTokenProvider;
use aws_sdk_s3control::operation::create_job::builders::CreateJobFluentBuilder;
use aws_sdk_s3control::operation::RequestId;
use aws_sdk_s3control::primitives::DateTime;
use aws_sdk_s3control::types::{
    JobManifest, JobManifestFieldName, JobManifestFormat, JobManifestLocation, JobManifestSpec,
    JobOperation, JobReport, JobReportFormat, JobReportScope, JobStatus, LambdaInvokeOperation,
    OperationName,
};
use aws_sdk_s3control::{Client, Config};
use aws_smithy_protocol_test::parse_form;
use aws_smithy_runtime::client::connector::HttpResponse;
use aws_smithy_runtime::test_util::replay::{ReplayEvent, StaticReplayConnector};
use pretty_assertions::assert_eq;

const CREATE_JOB_RESPONSE: &str = "<CreateJobResponse><CreateJobResult>\
    <JobId>6f4c8a52-2d8e-4c5f-9a4b-7d6c5e4f3a21</JobId>\
    </CreateJobResult><ResponseMetadata><RequestId>create-1</RequestId></ResponseMetadata>\
    </CreateJobResponse>";

fn ok(body: &str) -> HttpResponse {
    http::Response::builder()
        .status(200)
        .body(body.to_owned().into())
        .unwrap()
}

fn client(
    events: Vec<ReplayEvent>,
    tokens: IdempotencyTokenProvider,
) -> (Client, StaticReplayConnector) {
    let connector = StaticReplayConnector::new(events);
    let config = Config::builder()
        .region(Region::new("us-west-2"))
        .http_connector(connector.clone())
        .idempotency_token_provider(tokens)
        .build();
    (Client::from_conf(config), connector)
}

fn lambda_job(client: &Client) -> CreateJobFluentBuilder {
    client
        .create_job()
        .account_id("123456789012")
        .operation(
            JobOperation::builder()
                .lambda_invoke(
                    LambdaInvokeOperation::builder()
                        .function_arn("arn:aws:lambda:us-west-2:123456789012:function:process")
                        .build(),
                )
                .build(),
        )
        .report(
            JobReport::builder()
                .bucket("arn:aws:s3:::reports")
                .format(JobReportFormat::ReportCsv20180820)
                .enabled(true)
                .report_scope(JobReportScope::AllTasks)
                .build(),
        )
        .manifest(
            JobManifest::builder()
                .spec(
                    JobManifestSpec::builder()
                        .format(JobManifestFormat::S3BatchOperationsCsv20180820)
                        .fields(JobManifestFieldName::Bucket)
                        .fields(JobManifestFieldName::Key)
                        .build(),
                )
                .location(
                    JobManifestLocation::builder()
                        .object_arn("arn:aws:s3:::manifests/manifest.csv")
                        .e_tag("60e460c9d1046e73f7dde5043ac3ae85")
                        .build(),
                )
                .build(),
        )
        .priority(10)
        .role_arn("arn:aws:iam::123456789012:role/batch")
}

#[test]
fn create_job_request() {
    let (client, connector) = client(
        vec![ReplayEvent::new(
            http::Request::builder()
                .method("POST")
                .uri("https://s3-control.us-west-2.amazonaws.com")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(
                    "Action=CreateJob&Version=2018-08-20&AccountId=123456789012\
                    &Operation.LambdaInvoke.FunctionArn=arn%3Aaws%3Alambda%3Aus-west-2%3A123456789012%3Afunction%3Aprocess\
                    &Report.Bucket=arn%3Aaws%3As3%3A%3A%3Areports\
                    &Report.Format=Report_CSV_20180820\
                    &Report.Enabled=true\
                    &Report.ReportScope=AllTasks\
                    &ClientRequestToken=00000000-0000-4000-8000-000000000000\
                    &Manifest.Spec.Format=S3BatchOperations_CSV_20180820\
                    &Manifest.Spec.Fields.member.1=Bucket\
                    &Manifest.Spec.Fields.member.2=Key\
                    &Manifest.Location.ObjectArn=arn%3Aaws%3As3%3A%3A%3Amanifests%2Fmanifest.csv\
                    &Manifest.Location.ETag=60e460c9d1046e73f7dde5043ac3ae85\
                    &Priority=10\
                    &RoleArn=arn%3Aaws%3Aiam%3A%3A123456789012%3Arole%2Fbatch"
                        .to_string(),
                )
                .unwrap(),
            ok(CREATE_JOB_RESPONSE),
        )],
        IdempotencyTokenProvider::fixed("00000000-0000-4000-8000-000000000000"),
    );

    let output = lambda_job(&client).send().expect("job created");
    connector.assert_requests_match(&[]);
    assert_eq!(output.job_id(), Some("6f4c8a52-2d8e-4c5f-9a4b-7d6c5e4f3a21"));
    assert_eq!(output.request_id(), Some("create-1"));
}

fn sent_token(connector: &StaticReplayConnector, index: usize) -> String {
    let requests = connector.actual_requests();
    parse_form(requests[index].body())
        .into_iter()
        .find(|(name, _)| *name == "ClientRequestToken")
        .map(|(_, value)| value.to_string())
        .expect("a token was sent")
}

#[test]
fn explicit_token_is_kept() {
    let (client, connector) = client(
        vec![ReplayEvent::with_response(ok(CREATE_JOB_RESPONSE))],
        IdempotencyTokenProvider::fixed("from-provider"),
    );
    lambda_job(&client)
        .client_request_token("caller-chosen")
        .send()
        .expect("job created");
    assert_eq!(sent_token(&connector, 0), "caller-chosen");
}

#[test]
fn seeded_tokens_are_fresh_per_call() {
    let (client, connector) = client(
        vec![
            ReplayEvent::with_response(ok(CREATE_JOB_RESPONSE)),
            ReplayEvent::with_response(ok(CREATE_JOB_RESPONSE)),
        ],
        IdempotencyTokenProvider::with_seed(42),
    );
    lambda_job(&client).send().expect("first job");
    lambda_job(&client).send().expect("second job");

    let expected = IdempotencyTokenProvider::with_seed(42);
    assert_eq!(sent_token(&connector, 0), expected.make_idempotency_token());
    assert_eq!(sent_token(&connector, 1), expected.make_idempotency_token());
    assert_ne!(sent_token(&connector, 0), sent_token(&connector, 1));
}

#[test]
fn default_provider_sends_a_uuid() {
    let connector =
        StaticReplayConnector::new(vec![ReplayEvent::with_response(ok(CREATE_JOB_RESPONSE))]);
    let client = Client::from_conf(
        Config::builder()
            .region(Region::new("us-west-2"))
            .http_connector(connector.clone())
            .build(),
    );
    lambda_job(&client).send().expect("job created");
    let token = sent_token(&connector, 0);
    assert_eq!(token.len(), 36, "{}", token);
    assert_eq!(&token[14..15], "4", "{}", token);
}

#[test]
fn list_jobs_request_and_response() {
    let (client, connector) = client(
        vec![ReplayEvent::new(
            http::Request::builder()
                .method("POST")
                .uri("https://s3-control.us-west-2.amazonaws.com")
                .body(
                    "Action=ListJobs&Version=2018-08-20&AccountId=123456789012\
                    &JobStatuses.member.1=Active&JobStatuses.member.2=Suspended\
                    &MaxResults=20"
                        .to_string(),
                )
                .unwrap(),
            ok(r#"<ListJobsResponse>
  <ListJobsResult>
    <Jobs>
      <member>
        <JobId>job-1</JobId>
        <Operation>LambdaInvoke</Operation>
        <Priority>10</Priority>
        <Status>Active</Status>
        <CreationTime>2020-01-01T00:00:00Z</CreationTime>
        <ProgressSummary>
          <TotalNumberOfTasks>100</TotalNumberOfTasks>
          <NumberOfTasksSucceeded>40</NumberOfTasksSucceeded>
          <NumberOfTasksFailed>2</NumberOfTasksFailed>
        </ProgressSummary>
      </member>
      <member>
        <JobId>job-2</JobId>
        <Status>Suspended</Status>
        <Priority>-1</Priority>
      </member>
    </Jobs>
    <NextToken>more</NextToken>
  </ListJobsResult>
</ListJobsResponse>"#),
        )],
        IdempotencyTokenProvider::fixed("unused"),
    );

    let output = client
        .list_jobs()
        .account_id("123456789012")
        .job_statuses(JobStatus::Active)
        .job_statuses(JobStatus::Suspended)
        .max_results(20)
        .send()
        .expect("jobs listed");
    connector.assert_requests_match(&[]);

    let jobs = output.jobs().expect("jobs");
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].job_id(), Some("job-1"));
    assert_eq!(jobs[0].operation(), Some(&OperationName::LambdaInvoke));
    assert_eq!(jobs[0].priority(), Some(10));
    assert_eq!(jobs[0].status(), Some(&JobStatus::Active));
    assert_eq!(
        jobs[0].creation_time(),
        Some(&DateTime::from_secs(1577836800))
    );
    let progress = jobs[0].progress_summary().expect("progress");
    assert_eq!(progress.total_number_of_tasks(), Some(100));
    assert_eq!(progress.number_of_tasks_failed(), Some(2));
    assert_eq!(jobs[1].status(), Some(&JobStatus::Suspended));
    assert_eq!(jobs[1].priority(), Some(-1));
    assert_eq!(jobs[1].progress_summary(), None);
    assert_eq!(output.next_token(), Some("more"));
}

#[test]
fn missing_manifest_is_not_sent() {
    let (client, connector) = client(vec![], IdempotencyTokenProvider::fixed("token"));
    let err = lambda_job(&client)
        .set_manifest(None)
        .send()
        .expect_err("manifest is required");
    assert!(
        matches!(err, aws_sdk_s3control::error::SdkError::ConstructionFailure(_)),
        "{:?}",
        err
    );
    assert!(connector.actual_requests().is_empty());
}
