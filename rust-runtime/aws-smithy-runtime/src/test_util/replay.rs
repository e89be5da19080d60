/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::client::connector::{ConnectorError, HttpConnector, HttpRequest, HttpResponse};
use aws_smithy_protocol_test::{assert_ok, validate_body, MediaType};
use http::header::{HeaderName, CONTENT_TYPE};
use std::ops::Deref;
use std::sync::{Arc, Mutex};

/// One canned exchange for the [`StaticReplayConnector`].
#[derive(Debug)]
pub struct ReplayEvent {
    request: Option<HttpRequest>,
    response: HttpResponse,
}

impl ReplayEvent {
    /// An exchange whose actual request is checked against `request` by
    /// [`StaticReplayConnector::assert_requests_match`].
    pub fn new(request: HttpRequest, response: HttpResponse) -> Self {
        Self {
            request: Some(request),
            response,
        }
    }

    /// An exchange that answers any request with `response`.
    pub fn with_response(response: HttpResponse) -> Self {
        Self {
            request: None,
            response,
        }
    }
}

#[derive(Debug, Default)]
struct State {
    remaining: Vec<ReplayEvent>,
    expected: Vec<Option<HttpRequest>>,
    actual: Vec<HttpRequest>,
}

/// Connector that answers requests with a fixed list of responses, in order.
///
/// Every request is recorded. Once the responses run out, calls fail with a dispatch error.
#[derive(Clone, Debug)]
pub struct StaticReplayConnector {
    state: Arc<Mutex<State>>,
}

impl StaticReplayConnector {
    /// Creates a connector that replays `events` in order.
    pub fn new(mut events: Vec<ReplayEvent>) -> Self {
        events.reverse();
        Self {
            state: Arc::new(Mutex::new(State {
                remaining: events,
                ..Default::default()
            })),
        }
    }

    /// The requests that were made, in order.
    pub fn actual_requests(&self) -> impl Deref<Target = Vec<HttpRequest>> + '_ {
        struct Requests<'a>(std::sync::MutexGuard<'a, State>);
        impl Deref for Requests<'_> {
            type Target = Vec<HttpRequest>;
            fn deref(&self) -> &Vec<HttpRequest> {
                &self.0.actual
            }
        }
        Requests(self.state.lock().unwrap())
    }

    /// Asserts that every request matched its expected request and that every response was used.
    ///
    /// URI, method and the expected headers are compared exactly, except for headers in
    /// `ignore_headers`. Form bodies are compared without regard to parameter order.
    #[track_caller]
    pub fn assert_requests_match(&self, ignore_headers: &[HeaderName]) {
        let state = self.state.lock().unwrap();
        for (index, (expected, actual)) in state.expected.iter().zip(&state.actual).enumerate() {
            if let Some(expected) = expected {
                assert_request_matches(index, expected, actual, ignore_headers);
            }
        }
        assert!(
            state.remaining.is_empty(),
            "{} responses were never requested",
            state.remaining.len()
        );
    }
}

#[track_caller]
fn assert_request_matches(
    index: usize,
    expected: &HttpRequest,
    actual: &HttpRequest,
    ignore_headers: &[HeaderName],
) {
    assert_eq!(
        actual.method(),
        expected.method(),
        "Request #{index} - method doesn't match expected value"
    );
    assert_eq!(
        actual.uri(),
        expected.uri(),
        "Request #{index} - URI doesn't match expected value"
    );
    for (name, value) in expected.headers() {
        if ignore_headers.contains(name) {
            continue;
        }
        let actual_header = actual
            .headers()
            .get(name)
            .unwrap_or_else(|| panic!("Request #{index} - Header {name:?} is missing"));
        assert_eq!(
            actual_header, value,
            "Request #{index} - Header {name:?} doesn't match expected value",
        );
    }
    let media_type = match actual.headers().get(CONTENT_TYPE) {
        Some(value) if value == aws_smithy_query::CONTENT_TYPE => MediaType::UrlEncodedForm,
        _ => MediaType::Other,
    };
    assert_ok(validate_body(actual.body(), expected.body(), media_type));
}

impl HttpConnector for StaticReplayConnector {
    fn call(&self, request: HttpRequest) -> Result<HttpResponse, ConnectorError> {
        let mut state = self.state.lock().unwrap();
        let event = state.remaining.pop();
        state.actual.push(request);
        match event {
            Some(event) => {
                state.expected.push(event.request);
                Ok(event.response)
            }
            None => Err(ConnectorError::other("no more replay events")),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{ReplayEvent, StaticReplayConnector};
    use crate::client::connector::HttpConnector;

    fn request(body: &str) -> http::Request<String> {
        http::Request::builder()
            .method("POST")
            .uri("https://example.com")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(body.to_string())
            .unwrap()
    }

    #[test]
    fn replays_in_order_and_matches_unordered_bodies() {
        let connector = StaticReplayConnector::new(vec![
            ReplayEvent::new(
                request("Action=A&Version=1&B=2&C=3"),
                http::Response::new("first".into()),
            ),
            ReplayEvent::with_response(http::Response::new("second".into())),
        ]);
        let first = connector.call(request("Action=A&Version=1&C=3&B=2")).unwrap();
        let second = connector.call(request("anything")).unwrap();
        assert_eq!(first.body().as_ref(), b"first");
        assert_eq!(second.body().as_ref(), b"second");
        assert_eq!(connector.actual_requests().len(), 2);
        connector.assert_requests_match(&[]);
        assert!(connector.call(request("")).is_err());
    }

    #[test]
    #[should_panic]
    fn mismatched_body_panics() {
        let connector = StaticReplayConnector::new(vec![ReplayEvent::new(
            request("Action=A&Version=1&B=2"),
            http::Response::new("".into()),
        )]);
        connector.call(request("Action=A&Version=1&B=3")).unwrap();
        connector.assert_requests_match(&[]);
    }

    #[test]
    #[should_panic]
    fn unused_responses_panic() {
        let connector =
            StaticReplayConnector::new(vec![ReplayEvent::with_response(http::Response::new(
                "".into(),
            ))]);
        connector.assert_requests_match(&[]);
    }
}
