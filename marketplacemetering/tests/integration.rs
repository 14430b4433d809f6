/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_http::user_agent::AwsUserAgent;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::{Client, SdkError};
use http::Uri;
use marketplacemetering::error::{MeterUsageErrorKind, ResolveCustomerErrorKind};
use marketplacemetering::input::{BatchMeterUsageInput, MeterUsageInput, ResolveCustomerInput};
use marketplacemetering::model::{UsageRecord, UsageRecordResultStatus};
use marketplacemetering::{Config, Credentials, Instant, Region};
use smithy_http::body::SdkBody;

fn conf() -> Config {
    Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::from_keys("AKIDEXAMPLE", "secret", None))
        .build()
}

fn json_response(status: u16, body: &'static str) -> http::Response<&'static str> {
    http::Response::builder()
        .status(status)
        .header("content-type", "application/x-amz-json-1.1")
        .header("x-amzn-requestid", "5e8f3b2c-6c1a-4c55-9d7c-0a1d2a3b4c5d")
        .body(body)
        .unwrap()
}

#[tokio::test]
async fn meter_usage() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .header("content-type", "application/x-amz-json-1.1")
            .header("x-amz-target", "AWSMPMeteringService.MeterUsage")
            .header("user-agent", "aws-sdk-rust/0.123.test os/windows/XPSP3 lang/rust/1.50.0")
            .header("x-amz-user-agent", "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows/XPSP3 lang/rust/1.50.0")
            .uri(Uri::from_static("https://metering.marketplace.us-east-1.amazonaws.com/"))
            .body(SdkBody::from(
                r#"{"ProductCode":"6z5g3dyxcqrz8gw6u5w4f0i1t","Timestamp":1576540800,"UsageDimension":"hosts","UsageQuantity":3,"DryRun":false}"#,
            ))
            .unwrap(),
        json_response(200, r#"{"MeteringRecordId":"f6e1a9a8-0b5b-4a4e-a1d0-4a5c0c4e2d3b"}"#),
    )]);
    let client = Client::new(conn.clone());
    let mut op = MeterUsageInput::builder()
        .product_code("6z5g3dyxcqrz8gw6u5w4f0i1t")
        .timestamp(Instant::from_epoch_seconds(1576540800))
        .usage_dimension("hosts")
        .usage_quantity(3)
        .dry_run(false)
        .build()
        .make_operation(&conf())
        .expect("valid operation");
    op.properties_mut().insert(AwsUserAgent::for_tests());
    let output = client.call(op).await.expect("request should succeed");
    assert_eq!(
        output.metering_record_id(),
        Some("f6e1a9a8-0b5b-4a4e-a1d0-4a5c0c4e2d3b")
    );
    assert_eq!(conn.requests().len(), 1);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn batch_meter_usage_results_are_parsed() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .header("x-amz-target", "AWSMPMeteringService.BatchMeterUsage")
            .header("content-type", "application/x-amz-json-1.1")
            .uri(Uri::from_static("https://metering.marketplace.us-east-1.amazonaws.com/"))
            .body(SdkBody::from(
                r#"{"ProductCode":"prod","UsageRecords":[
                    {"Timestamp":1576540800,"CustomerIdentifier":"cust-1","Dimension":"users","Quantity":10},
                    {"Timestamp":1576540800,"CustomerIdentifier":"cust-2","Dimension":"users","Quantity":4}
                ]}"#,
            ))
            .unwrap(),
        json_response(
            200,
            r#"{
                "Results": [{
                    "UsageRecord": {"Timestamp":1576540800,"CustomerIdentifier":"cust-1","Dimension":"users","Quantity":10},
                    "MeteringRecordId": "rec-1",
                    "Status": "Success"
                }],
                "UnprocessedRecords": [
                    {"Timestamp":1576540800,"CustomerIdentifier":"cust-2","Dimension":"users","Quantity":4}
                ]
            }"#,
        ),
    )]);
    let record = |customer: &str, quantity: i32| {
        UsageRecord::builder()
            .timestamp(Instant::from_epoch_seconds(1576540800))
            .customer_identifier(customer)
            .dimension("users")
            .quantity(quantity)
            .build()
    };
    let op = BatchMeterUsageInput::builder()
        .product_code("prod")
        .usage_records(record("cust-1", 10))
        .usage_records(record("cust-2", 4))
        .build()
        .make_operation(&conf())
        .unwrap();
    let output = Client::new(conn.clone()).call(op).await.unwrap();

    let results = output.results().expect("results present");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].status(), Some(&UsageRecordResultStatus::Success));
    assert_eq!(results[0].usage_record(), Some(&record("cust-1", 10)));
    assert_eq!(output.unprocessed_records(), Some(&[record("cust-2", 4)][..]));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn modeled_errors_are_typed() {
    let conn = TestConnection::new(vec![(
        http::Request::new(SdkBody::empty()),
        json_response(
            400,
            r#"{"__type":"com.amazonaws.awsmpmetering#ThrottlingException","message":"Rate exceeded"}"#,
        ),
    )]);
    let op = MeterUsageInput::builder()
        .product_code("prod")
        .build()
        .make_operation(&conf())
        .unwrap();
    let err = Client::new(conn)
        .call(op)
        .await
        .expect_err("throttled");
    let (raw, err) = match err {
        SdkError::ServiceError { raw, err } => (raw, err),
        other => panic!("expected a service error, got {:?}", other),
    };
    assert_eq!(raw.status(), 400);
    assert!(err.is_throttling_error());
    assert_eq!(err.code(), Some("ThrottlingException"));
    assert_eq!(err.message(), Some("Rate exceeded"));
    assert_eq!(err.request_id(), Some("5e8f3b2c-6c1a-4c55-9d7c-0a1d2a3b4c5d"));
    match err.kind {
        MeterUsageErrorKind::ThrottlingError(inner) => {
            assert_eq!(inner.message(), Some("Rate exceeded"));
            assert_eq!(inner.to_string(), "ThrottlingError: Rate exceeded");
        }
        other => panic!("incorrect error kind: {:?}", other),
    }
}

#[tokio::test]
async fn error_type_header_wins_over_body() {
    let conn = TestConnection::new(vec![(
        http::Request::new(SdkBody::empty()),
        http::Response::builder()
            .status(400)
            .header("x-amzn-errortype", "ExpiredTokenException:http://internal.amazon.com/coral/com.amazonaws.awsmpmetering/")
            .body(r#"{"__type":"InvalidTokenException","Message":"token expired"}"#)
            .unwrap(),
    )]);
    let op = ResolveCustomerInput::builder()
        .registration_token("token")
        .build()
        .make_operation(&conf())
        .unwrap();
    let err = Client::new(conn).call(op).await.expect_err("expired");
    let err = err.into_service_error().expect("service error");
    assert_eq!(err.message(), Some("token expired"));
    assert!(matches!(err.kind, ResolveCustomerErrorKind::ExpiredTokenError(_)));
}

#[tokio::test]
async fn unknown_error_codes_are_unhandled() {
    let conn = TestConnection::new(vec![(
        http::Request::new(SdkBody::empty()),
        json_response(500, r#"{"__type":"ServiceUnavailableException"}"#),
    )]);
    let op = ResolveCustomerInput::builder()
        .registration_token("token")
        .build()
        .make_operation(&conf())
        .unwrap();
    match Client::new(conn).call(op).await {
        Err(SdkError::ServiceError { raw, err }) => {
            assert_eq!(raw.status(), 500);
            assert_eq!(err.code(), Some("ServiceUnavailableException"));
            assert!(matches!(err.kind, ResolveCustomerErrorKind::Unhandled(_)));
        }
        other => panic!("expected a service error, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_error_bodies_are_unhandled() {
    let conn = TestConnection::new(vec![(
        http::Request::new(SdkBody::empty()),
        http::Response::builder()
            .status(502)
            .body("<html>Bad Gateway</html>")
            .unwrap(),
    )]);
    let op = ResolveCustomerInput::builder()
        .registration_token("token")
        .build()
        .make_operation(&conf())
        .unwrap();
    let err = Client::new(conn)
        .call(op)
        .await
        .expect_err("bad gateway")
        .into_service_error()
        .expect("service error");
    assert_eq!(err.code(), None);
    assert!(matches!(err.kind, ResolveCustomerErrorKind::Unhandled(_)));
}

#[tokio::test]
async fn service_errors_convert_to_the_service_error() {
    let conn = TestConnection::new(vec![(
        http::Request::new(SdkBody::empty()),
        json_response(400, r#"{"__type":"InvalidProductCodeException","message":"no such product"}"#),
    )]);
    let op = MeterUsageInput::builder()
        .product_code("missing")
        .build()
        .make_operation(&conf())
        .unwrap();
    let err: marketplacemetering::Error = Client::new(conn).call(op).await.unwrap_err().into();
    match err {
        marketplacemetering::Error::InvalidProductCodeError(inner) => {
            assert_eq!(inner.message(), Some("no such product"))
        }
        other => panic!("incorrect error: {:?}", other),
    }
}

#[tokio::test]
async fn errors_without_a_code_keep_their_metadata() {
    let conn = TestConnection::new(vec![(
        http::Request::new(SdkBody::empty()),
        json_response(400, r#"{"message":"Rate exceeded"}"#),
    )]);
    let op = ResolveCustomerInput::builder()
        .registration_token("token")
        .build()
        .make_operation(&conf())
        .unwrap();
    let err = Client::new(conn)
        .call(op)
        .await
        .expect_err("no error code")
        .into_service_error()
        .expect("service error");
    assert_eq!(err.code(), None);
    assert_eq!(err.message(), Some("Rate exceeded"));
    assert_eq!(err.request_id(), Some("5e8f3b2c-6c1a-4c55-9d7c-0a1d2a3b4c5d"));
    assert!(matches!(err.kind, ResolveCustomerErrorKind::Unhandled(_)));
}

#[tokio::test]
async fn malformed_success_bodies_are_response_errors() {
    let conn = TestConnection::new(vec![(
        http::Request::new(SdkBody::empty()),
        http::Response::builder()
            .status(200)
            .body("<html>not json</html>")
            .unwrap(),
    )]);
    let op = ResolveCustomerInput::builder()
        .registration_token("token")
        .build()
        .make_operation(&conf())
        .unwrap();
    match Client::new(conn).call(op).await {
        Err(SdkError::ResponseError { raw, .. }) => {
            assert_eq!(raw.status(), 200);
            assert_eq!(raw.body().as_ref(), b"<html>not json</html>");
        }
        other => panic!("expected a response error, got {:?}", other),
    }
}
