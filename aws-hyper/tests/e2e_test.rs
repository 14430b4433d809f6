/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_auth::{Credentials, SharedCredentialsProvider};
use aws_endpoint::{set_endpoint_resolver, DefaultAwsEndpointResolver};
use aws_http::user_agent::AwsUserAgent;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::{Client, SdkError};
use aws_types::region::Region;
use bytes::Bytes;
use http::header::USER_AGENT;
use http::Uri;
use smithy_http::body::SdkBody;
use smithy_http::operation;
use smithy_http::operation::Operation;
use smithy_http::response::ParseStrictResponse;
use smithy_http::result::ParseFailure;
use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;

#[derive(Debug)]
struct EchoError(String);

impl fmt::Display for EchoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "echo failed: {}", self.0)
    }
}

impl std::error::Error for EchoError {}

/// Returns the response body on success and wraps it in an `EchoError` otherwise
#[derive(Clone)]
struct EchoParser;

impl ParseStrictResponse for EchoParser {
    type Output = Result<String, ParseFailure<EchoError>>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        let body = String::from_utf8_lossy(response.body()).to_string();
        if response.status().is_success() {
            Ok(body)
        } else {
            Err(EchoError(body).into())
        }
    }
}

fn echo_operation(with_credentials: bool) -> Operation<EchoParser> {
    let req = operation::Request::new(
        http::Request::builder()
            .method("POST")
            .uri("/")
            .body(SdkBody::from("request body"))
            .unwrap(),
    )
    .augment(|req, conf| {
        set_endpoint_resolver(
            conf,
            Arc::new(DefaultAwsEndpointResolver::for_service("test-service")),
        );
        if with_credentials {
            aws_auth::set_provider(
                conf,
                SharedCredentialsProvider::new(Credentials::from_keys(
                    "access_key",
                    "secret_key",
                    None,
                )),
            );
        }
        conf.insert(Region::new("test-region"));
        conf.insert(AwsUserAgent::for_tests());
        Result::<_, Infallible>::Ok(req)
    })
    .unwrap();
    Operation::new(req, EchoParser).with_metadata(operation::Metadata::new("Echo", "test-service"))
}

#[tokio::test]
async fn e2e_test() {
    let expected_req = http::Request::builder()
        .method("POST")
        .header(USER_AGENT, AwsUserAgent::for_tests().ua_header())
        .header("x-amz-user-agent", AwsUserAgent::for_tests().aws_ua_header())
        .uri(Uri::from_static("https://test-service.test-region.amazonaws.com/"))
        .body(SdkBody::from("request body"))
        .unwrap();
    let events = vec![(
        expected_req,
        http::Response::builder()
            .status(200)
            .body("response body")
            .unwrap(),
    )];
    let conn = TestConnection::new(events);
    let client = Client::new(conn.clone());
    let resp = client
        .call(echo_operation(true))
        .await
        .expect("successful operation");
    assert_eq!(resp, "response body");

    assert_eq!(conn.requests().len(), 1);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn error_responses_become_service_errors() {
    let conn = TestConnection::new(vec![(
        http::Request::new(SdkBody::empty()),
        http::Response::builder()
            .status(500)
            .body("internal failure")
            .unwrap(),
    )]);
    let client = Client::new(conn);
    match client.call(echo_operation(true)).await {
        Err(SdkError::ServiceError { raw, err }) => {
            assert_eq!(raw.status(), 500);
            assert_eq!(err.0, "internal failure");
        }
        other => panic!("expected a service error, got {:?}", other),
    }
}

#[tokio::test]
async fn missing_credentials_fail_before_dispatch() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let client = Client::new(conn.clone());
    match client.call(echo_operation(false)).await {
        Err(SdkError::ConstructionFailure(_)) => {}
        other => panic!("expected a construction failure, got {:?}", other),
    }
    assert!(conn.requests().is_empty());
}

#[tokio::test]
async fn connector_failures_become_dispatch_failures() {
    let client = Client::new(TestConnection::<&'static str>::new(vec![]));
    match client.call(echo_operation(true)).await {
        Err(SdkError::DispatchFailure(err)) => assert_eq!(err.to_string(), "No more data"),
        other => panic!("expected a dispatch failure, got {:?}", other),
    }
}

#[tokio::test]
async fn raw_response_is_kept_on_success() {
    let conn = TestConnection::new(vec![(
        http::Request::new(SdkBody::empty()),
        http::Response::builder()
            .status(200)
            .header("x-amzn-requestid", "abc-123")
            .body("{}")
            .unwrap(),
    )]);
    let client = Client::new(conn);
    let success = client
        .call_raw(echo_operation(true))
        .await
        .expect("successful operation");
    assert_eq!(success.parsed, "{}");
    assert_eq!(
        success.raw.headers().get("x-amzn-requestid").unwrap(),
        "abc-123"
    );
}
