/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3control::config::Region;
use aws_sdk_s3control::error::ProvideErrorMetadata;
use aws_sdk_s3control::operation::RequestId;
use aws_sdk_s3control::types::{JobStatus, RequestedJobStatus, S3GlacierJobTier};
use aws_sdk_s3control::{Client, Config, Error};
use aws_smithy_runtime::client::connector::HttpResponse;
use aws_smithy_runtime::test_util::replay::{ReplayEvent, StaticReplayConnector};
use pretty_assertions::assert_eq;

const ACCOUNT: &str = "123456789012";
const JOB_ID: &str = "6f4c8a52-2d8e-4c5f-9a4b-7d6c5e4f3a21";

fn client(events: Vec<ReplayEvent>) -> (Client, StaticReplayConnector) {
    let connector = StaticReplayConnector::new(events);
    let config = Config::builder()
        .region(Region::new("us-west-2"))
        .http_connector(connector.clone())
        .build();
    (Client::from_conf(config), connector)
}

fn request(body: &str) -> http::Request<String> {
    http::Request::builder()
        .method("POST")
        .uri("https://s3-control.us-west-2.amazonaws.com")
        .body(body.to_string())
        .unwrap()
}

fn response(status: u16, body: &str) -> HttpResponse {
    http::Response::builder()
        .status(status)
        .body(body.to_owned().into())
        .unwrap()
}

#[test]
fn describe_job() {
    let (client, connector) = client(vec![ReplayEvent::new(
        request(&format!(
            "Action=DescribeJob&Version=2018-08-20&AccountId={ACCOUNT}&JobId={JOB_ID}"
        )),
        response(
            200,
            r#"<DescribeJobResponse>
  <DescribeJobResult>
    <Job>
      <JobId>6f4c8a52-2d8e-4c5f-9a4b-7d6c5e4f3a21</JobId>
      <ConfirmationRequired>true</ConfirmationRequired>
      <Description>restore archived logs</Description>
      <Status>Suspended</Status>
      <Operation>
        <S3InitiateRestoreObject>
          <ExpirationInDays>7</ExpirationInDays>
          <GlacierJobTier>BULK</GlacierJobTier>
        </S3InitiateRestoreObject>
      </Operation>
      <Priority>42</Priority>
      <ProgressSummary>
        <TotalNumberOfTasks>1000</TotalNumberOfTasks>
        <NumberOfTasksSucceeded>0</NumberOfTasksSucceeded>
        <NumberOfTasksFailed>0</NumberOfTasksFailed>
      </ProgressSummary>
      <FailureReasons>
        <member><FailureCode>ManifestNotFound</FailureCode><FailureReason>manifest is missing</FailureReason></member>
      </FailureReasons>
      <Report><Enabled>false</Enabled></Report>
      <CreationTime>2020-01-15T12:00:00Z</CreationTime>
      <SuspendedCause>AwaitingConfirmation</SuspendedCause>
    </Job>
  </DescribeJobResult>
  <ResponseMetadata><RequestId>describe-1</RequestId></ResponseMetadata>
</DescribeJobResponse>"#,
        ),
    )]);

    let output = client
        .describe_job()
        .account_id(ACCOUNT)
        .job_id(JOB_ID)
        .send()
        .expect("success");
    connector.assert_requests_match(&[]);
    assert_eq!(output.request_id(), Some("describe-1"));

    let job = output.job().expect("job is present");
    assert_eq!(job.job_id(), Some(JOB_ID));
    assert_eq!(job.confirmation_required(), Some(true));
    assert_eq!(job.status(), Some(&JobStatus::Suspended));
    assert_eq!(job.priority(), Some(42));
    assert_eq!(job.creation_time().map(|t| t.secs()), Some(1579089600));
    assert_eq!(job.termination_date(), None);
    assert_eq!(job.suspended_cause(), Some("AwaitingConfirmation"));

    let restore = job
        .operation()
        .and_then(|op| op.s3_initiate_restore_object())
        .expect("restore operation");
    assert_eq!(restore.expiration_in_days(), Some(7));
    assert_eq!(restore.glacier_job_tier(), Some(&S3GlacierJobTier::Bulk));
    assert_eq!(job.operation().and_then(|op| op.lambda_invoke()), None);

    let summary = job.progress_summary().expect("summary");
    assert_eq!(summary.total_number_of_tasks(), Some(1000));
    assert_eq!(summary.number_of_tasks_failed(), Some(0));

    let failures = job.failure_reasons().expect("failures");
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].failure_code(), Some("ManifestNotFound"));
    assert_eq!(job.report().and_then(|r| r.enabled()), Some(false));
    assert_eq!(job.report().and_then(|r| r.bucket()), None);
}

#[test]
fn update_job_priority() {
    let (client, connector) = client(vec![ReplayEvent::new(
        request(&format!(
            "Action=UpdateJobPriority&Version=2018-08-20&AccountId={ACCOUNT}&JobId={JOB_ID}&Priority=0"
        )),
        response(
            200,
            "<UpdateJobPriorityResponse><UpdateJobPriorityResult>\
            <JobId>6f4c8a52-2d8e-4c5f-9a4b-7d6c5e4f3a21</JobId><Priority>0</Priority>\
            </UpdateJobPriorityResult></UpdateJobPriorityResponse>",
        ),
    )]);

    let output = client
        .update_job_priority()
        .account_id(ACCOUNT)
        .job_id(JOB_ID)
        .priority(0)
        .send()
        .expect("success");
    connector.assert_requests_match(&[]);
    assert_eq!(output.job_id(), Some(JOB_ID));
    assert_eq!(output.priority(), Some(0));
}

#[test]
fn update_job_status() {
    let (client, connector) = client(vec![ReplayEvent::new(
        request(&format!(
            "Action=UpdateJobStatus&Version=2018-08-20&AccountId={ACCOUNT}&JobId={JOB_ID}\
            &RequestedJobStatus=Cancelled&StatusUpdateReason=no%20longer%20needed"
        )),
        response(
            200,
            "<UpdateJobStatusResponse><UpdateJobStatusResult>\
            <JobId>6f4c8a52-2d8e-4c5f-9a4b-7d6c5e4f3a21</JobId>\
            <Status>Cancelling</Status>\
            <StatusUpdateReason>no longer needed</StatusUpdateReason>\
            </UpdateJobStatusResult></UpdateJobStatusResponse>",
        ),
    )]);

    let output = client
        .update_job_status()
        .account_id(ACCOUNT)
        .job_id(JOB_ID)
        .requested_job_status(RequestedJobStatus::Cancelled)
        .status_update_reason("no longer needed")
        .send()
        .expect("success");
    connector.assert_requests_match(&[]);
    assert_eq!(output.status(), Some(&JobStatus::Cancelling));
    assert_eq!(output.status_update_reason(), Some("no longer needed"));
}

#[test]
fn job_in_wrong_state() {
    let (client, _connector) = client(vec![ReplayEvent::with_response(response(
        400,
        "<ErrorResponse><Error><Type>Sender</Type>\
        <Code>JobStatusException</Code>\
        <Message>Job is already complete</Message>\
        </Error><RequestId>status-2</RequestId></ErrorResponse>",
    ))]);

    let err = client
        .update_job_status()
        .account_id(ACCOUNT)
        .job_id(JOB_ID)
        .requested_job_status(RequestedJobStatus::Ready)
        .send()
        .expect_err("job is complete");
    assert_eq!(err.request_id(), Some("status-2"));
    assert_eq!(err.raw_response().map(|raw| raw.status().as_u16()), Some(400));
    let err = err.into_service_error();
    assert!(err.is_job_status_exception());
    assert!(!err.is_bad_request_exception());
    assert_eq!(err.code(), Some("JobStatusException"));
    assert_eq!(err.message(), Some("Job is already complete"));
    assert!(matches!(err, Error::JobStatusException(_)));
}

#[test]
fn delete_job_tagging() {
    let (client, connector) = client(vec![ReplayEvent::new(
        request(&format!(
            "Action=DeleteJobTagging&Version=2018-08-20&AccountId={ACCOUNT}&JobId={JOB_ID}"
        )),
        response(
            200,
            "<DeleteJobTaggingResponse><ResponseMetadata><RequestId>untag-1</RequestId>\
            </ResponseMetadata></DeleteJobTaggingResponse>",
        ),
    )]);

    let output = client
        .delete_job_tagging()
        .account_id(ACCOUNT)
        .job_id(JOB_ID)
        .send()
        .expect("success");
    connector.assert_requests_match(&[]);
    assert_eq!(output.request_id(), Some("untag-1"));
}

#[test]
fn access_point_policy_lifecycle() {
    let policy = r#"{"Version":"2012-10-17","Statement":[]}"#;
    let (client, connector) = client(vec![
        ReplayEvent::new(
            request(&format!(
                "Action=PutAccessPointPolicy&Version=2018-08-20&AccountId={ACCOUNT}&Name=logs\
                &Policy=%7B%22Version%22%3A%222012-10-17%22%2C%22Statement%22%3A%5B%5D%7D"
            )),
            response(200, "<PutAccessPointPolicyResponse/>"),
        ),
        ReplayEvent::new(
            request(&format!(
                "Action=DeleteAccessPointPolicy&Version=2018-08-20&AccountId={ACCOUNT}&Name=logs"
            )),
            response(200, "<DeleteAccessPointPolicyResponse/>"),
        ),
        ReplayEvent::new(
            request(&format!(
                "Action=DeleteAccessPoint&Version=2018-08-20&AccountId={ACCOUNT}&Name=logs"
            )),
            response(
                200,
                "<DeleteAccessPointResponse><ResponseMetadata><RequestId>ap-del</RequestId>\
                </ResponseMetadata></DeleteAccessPointResponse>",
            ),
        ),
    ]);

    client
        .put_access_point_policy()
        .account_id(ACCOUNT)
        .name("logs")
        .policy(policy)
        .send()
        .expect("policy stored");
    let deleted_policy = client
        .delete_access_point_policy()
        .account_id(ACCOUNT)
        .name("logs")
        .send()
        .expect("policy deleted");
    assert_eq!(deleted_policy.request_id(), None);
    let deleted = client
        .delete_access_point()
        .account_id(ACCOUNT)
        .name("logs")
        .send()
        .expect("access point deleted");
    assert_eq!(deleted.request_id(), Some("ap-del"));
    connector.assert_requests_match(&[]);
}

#[test]
fn missing_access_point() {
    let (client, _connector) = client(vec![ReplayEvent::with_response(response(
        404,
        "<ErrorResponse><Error><Code>NoSuchAccessPoint</Code>\
        <Message>The specified accesspoint does not exist</Message></Error>\
        <RequestId>ap-404</RequestId></ErrorResponse>",
    ))]);

    let err = client
        .delete_access_point()
        .account_id(ACCOUNT)
        .name("missing")
        .send()
        .expect_err("not found");
    let err = err.into_service_error();
    assert!(matches!(err, Error::Unhandled(_)));
    assert_eq!(err.code(), Some("NoSuchAccessPoint"));
    assert_eq!(err.request_id(), Some("ap-404"));
}
