/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::client::connector::{HttpConnector, HttpResponse, SharedHttpConnector};
use crate::client::result::SdkError;
use aws_smithy_types::error::operation::BuildError;
use aws_smithy_types::error::display::DisplayErrorContext;
use aws_smithy_xml::decode::XmlDecodeError;
use std::error::Error;
use tracing::{debug, debug_span, trace};

/// A single query protocol operation.
///
/// Implemented by each operation type of a generated client. The serializer and deserializers
/// are called at most once per [`invoke`].
pub trait QueryOperation {
    /// Name of the operation, as sent in the `Action` parameter.
    const NAME: &'static str;

    /// The operation input.
    type Input;
    /// The output of a successful call.
    type Output;
    /// The service errors this operation can return.
    type Error: Error + Send + Sync + 'static;

    /// Serializes `input` into a form-encoded request body.
    fn serialize_input(input: &Self::Input) -> Result<String, BuildError>;

    /// Deserializes a successful response.
    fn deserialize_output(response: &HttpResponse) -> Result<Self::Output, XmlDecodeError>;

    /// Deserializes an error response.
    fn deserialize_error(response: &HttpResponse) -> Result<Self::Error, XmlDecodeError>;
}

/// Everything [`invoke`] needs to dispatch a request.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    service_name: &'static str,
    endpoint: String,
    connector: SharedHttpConnector,
}

impl RuntimeConfig {
    /// Creates a config that sends requests for `service_name` to `endpoint` through `connector`.
    pub fn new(
        service_name: &'static str,
        endpoint: impl Into<String>,
        connector: SharedHttpConnector,
    ) -> Self {
        Self {
            service_name,
            endpoint: endpoint.into(),
            connector,
        }
    }

    /// The name of the service, used for logging.
    pub fn service_name(&self) -> &'static str {
        self.service_name
    }

    /// The URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Calls operation `O` with `input`.
///
/// The input is serialized and POSTed to the configured endpoint. A 2xx response is
/// deserialized into the output; any other status is deserialized into a service error.
pub fn invoke<O: QueryOperation>(
    config: &RuntimeConfig,
    input: &O::Input,
) -> Result<O::Output, SdkError<O::Error>> {
    let span = debug_span!(
        "invoke",
        service = config.service_name,
        operation = O::NAME
    );
    let _enter = span.enter();

    let body = O::serialize_input(input).map_err(|err| {
        debug!(error = %DisplayErrorContext(&err), "failed to serialize input");
        SdkError::construction_failure(err)
    })?;
    trace!(body = %body, "serialized request body");

    let request = http::Request::builder()
        .method(http::Method::POST)
        .uri(config.endpoint.as_str())
        .header(http::header::CONTENT_TYPE, aws_smithy_query::CONTENT_TYPE)
        .body(body)
        .map_err(SdkError::construction_failure)?;

    debug!("dispatching request");
    let response = config.connector.call(request).map_err(|err| {
        debug!(error = %DisplayErrorContext(&err), "dispatch failed");
        SdkError::dispatch_failure(err)
    })?;
    debug!(status = %response.status(), "received response");

    if response.status().is_success() {
        match O::deserialize_output(&response) {
            Ok(output) => Ok(output),
            Err(err) => {
                debug!(error = %DisplayErrorContext(&err), "failed to deserialize response");
                Err(SdkError::response_error(err, response))
            }
        }
    } else {
        match O::deserialize_error(&response) {
            Ok(err) => {
                debug!(error = %DisplayErrorContext(&err), "service returned an error");
                Err(SdkError::service_error(err, response))
            }
            Err(err) => {
                debug!(error = %DisplayErrorContext(&err), "failed to deserialize error response");
                Err(SdkError::response_error(err, response))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::{invoke, QueryOperation, RuntimeConfig};
    use crate::client::connector::{HttpResponse, SharedHttpConnector};
    use crate::client::result::{SdkError, Unhandled};
    use crate::test_util::capture_test_logs::capture_test_logs;
    use crate::test_util::replay::{ReplayEvent, StaticReplayConnector};
    use aws_smithy_query::errors::parse_error_metadata;
    use aws_smithy_query::response::decode_response;
    use aws_smithy_query::QueryWriter;
    use aws_smithy_types::error::operation::BuildError;
    use aws_smithy_xml::decode::{try_data, XmlDecodeError};

    struct Echo;

    impl QueryOperation for Echo {
        const NAME: &'static str = "Echo";
        type Input = Option<String>;
        type Output = Option<String>;
        type Error = Unhandled;

        fn serialize_input(input: &Option<String>) -> Result<String, BuildError> {
            let value = input
                .as_deref()
                .ok_or_else(|| BuildError::missing_field("value", "a value is required"))?;
            let mut out = String::new();
            let mut writer = QueryWriter::new(&mut out, Self::NAME, "2020-01-01");
            writer.prefix("Value").string(value);
            writer.finish();
            Ok(out)
        }

        fn deserialize_output(response: &HttpResponse) -> Result<Option<String>, XmlDecodeError> {
            let (value, _) = decode_response(response.body(), Self::NAME, |decoder| {
                let mut value = None;
                while let Some(mut tag) = decoder.next_tag() {
                    if tag.start_el().matches("Value") {
                        value = Some(try_data(&mut tag)?.into_owned());
                    }
                }
                Ok(value)
            })?;
            Ok(value.flatten())
        }

        fn deserialize_error(response: &HttpResponse) -> Result<Unhandled, XmlDecodeError> {
            let meta = parse_error_metadata(response.body())?.build();
            Ok(Unhandled::with_meta("unmodeled error", meta))
        }
    }

    fn config(events: Vec<ReplayEvent>) -> (RuntimeConfig, StaticReplayConnector) {
        let connector = StaticReplayConnector::new(events);
        let config = RuntimeConfig::new(
            "echo",
            "https://echo.us-east-1.amazonaws.com",
            SharedHttpConnector::new(connector.clone()),
        );
        (config, connector)
    }

    fn response(status: u16, body: &'static str) -> HttpResponse {
        http::Response::builder()
            .status(status)
            .body(body.into())
            .unwrap()
    }

    #[test]
    fn successful_call() {
        let (_guard, logs) = capture_test_logs();
        let (config, connector) = config(vec![ReplayEvent::new(
            http::Request::builder()
                .method("POST")
                .uri("https://echo.us-east-1.amazonaws.com")
                .header("content-type", "application/x-www-form-urlencoded")
                .body("Action=Echo&Version=2020-01-01&Value=hi%20there".to_string())
                .unwrap(),
            response(
                200,
                "<EchoResponse><EchoResult><Value>hi there</Value></EchoResult></EchoResponse>",
            ),
        )]);

        let output = invoke::<Echo>(&config, &Some("hi there".into())).unwrap();
        assert_eq!(output.as_deref(), Some("hi there"));
        connector.assert_requests_match(&[]);
        let logs = logs.contents();
        assert!(logs.contains("dispatching request"), "{}", logs);
        assert!(logs.contains("operation=\"Echo\""), "{}", logs);
    }

    #[test]
    fn construction_failure_is_not_dispatched() {
        let (config, connector) = config(vec![]);
        let err = invoke::<Echo>(&config, &None).expect_err("missing value");
        assert!(matches!(err, SdkError::ConstructionFailure(_)), "{:?}", err);
        assert!(connector.actual_requests().is_empty());
    }

    #[test]
    fn service_error() {
        let (config, _connector) = config(vec![ReplayEvent::with_response(response(
            400,
            "<ErrorResponse><Error><Code>Throttling</Code><Message>slow down</Message></Error><RequestId>req-1</RequestId></ErrorResponse>",
        ))]);
        let err = invoke::<Echo>(&config, &Some("hi".into())).expect_err("service error");
        use aws_smithy_types::error::metadata::ProvideErrorMetadata;
        assert_eq!(err.code(), Some("Throttling"));
        assert_eq!(err.message(), Some("slow down"));
        assert_eq!(err.meta().request_id(), Some("req-1"));
        assert_eq!(err.raw_response().unwrap().status(), 400);
    }

    #[test]
    fn malformed_response() {
        let (config, _connector) = config(vec![ReplayEvent::with_response(response(
            200,
            "<OtherResponse/>",
        ))]);
        let err = invoke::<Echo>(&config, &Some("hi".into())).expect_err("bad envelope");
        assert!(matches!(err, SdkError::ResponseError { .. }), "{:?}", err);
    }

    #[test]
    fn dispatch_failure_when_no_responses_remain() {
        let (config, _connector) = config(vec![]);
        let err = invoke::<Echo>(&config, &Some("hi".into())).expect_err("no response");
        assert!(matches!(err, SdkError::DispatchFailure(_)), "{:?}", err);
    }
}
