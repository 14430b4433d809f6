/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_endpoint::Endpoint;
use aws_hyper::test_connection::TestConnection;
use aws_types::credentials::provider::future;
use aws_types::credentials::ProvideCredentials;
use http::Uri;
use marketplacemetering::{Client, Config, Credentials, Region, SdkError};
use smithy_http::body::SdkBody;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts how many times credentials were requested from it
#[derive(Debug, Clone, Default)]
struct CountingProvider {
    calls: Arc<AtomicUsize>,
}

impl CountingProvider {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ProvideCredentials for CountingProvider {
    fn provide_credentials<'a>(&'a self) -> future::ProvideCredentials<'a>
    where
        Self: 'a,
    {
        self.calls.fetch_add(1, Ordering::SeqCst);
        future::ProvideCredentials::ready(Ok(Credentials::from_keys("AKID", "secret", None)))
    }
}

fn resolve_customer_response() -> (http::Request<SdkBody>, http::Response<&'static str>) {
    (
        http::Request::builder()
            .method("POST")
            .header("x-amz-target", "AWSMPMeteringService.ResolveCustomer")
            .header("content-type", "application/x-amz-json-1.1")
            .uri(Uri::from_static("https://metering.marketplace.us-west-2.amazonaws.com/"))
            .body(SdkBody::from(r#"{"RegistrationToken":"token"}"#))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(r#"{"CustomerIdentifier":"cust-1","ProductCode":"prod"}"#)
            .unwrap(),
    )
}

#[tokio::test]
async fn fluent_client_sends_requests() {
    let client_provider = CountingProvider::default();
    let conn = TestConnection::new(vec![resolve_customer_response()]);
    let conf = Config::builder()
        .region(Region::new("us-west-2"))
        .credentials_provider(client_provider.clone())
        .build();
    let client = Client::from_conf_conn(conf, conn.clone());
    let output = client
        .resolve_customer()
        .registration_token("token")
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(output.customer_identifier(), Some("cust-1"));
    assert_eq!(output.product_code(), Some("prod"));
    assert_eq!(client_provider.calls(), 1);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn request_credentials_override_client_credentials() {
    let client_provider = CountingProvider::default();
    let request_provider = CountingProvider::default();
    let conn = TestConnection::new(vec![resolve_customer_response(), resolve_customer_response()]);
    let conf = Config::builder()
        .region(Region::new("us-west-2"))
        .credentials_provider(client_provider.clone())
        .build();
    let client = Client::from_conf_conn(conf, conn.clone());
    client
        .resolve_customer()
        .registration_token("token")
        .credentials_override(request_provider.clone())
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(request_provider.calls(), 1);
    assert_eq!(client_provider.calls(), 0);

    // the override only applies to the request it was set on
    client
        .resolve_customer()
        .registration_token("token")
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(request_provider.calls(), 1);
    assert_eq!(client_provider.calls(), 1);
}

#[tokio::test]
async fn missing_region_is_a_construction_failure() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let conf = Config::builder()
        .credentials_provider(Credentials::from_keys("AKID", "secret", None))
        .build();
    let client = Client::from_conf_conn(conf, conn.clone());
    let err = client
        .resolve_customer()
        .registration_token("token")
        .send()
        .await
        .expect_err("no region");
    assert!(matches!(err, SdkError::ConstructionFailure(_)), "{:?}", err);
    assert!(conn.requests().is_empty());
}

#[tokio::test]
async fn connection_failures_are_dispatch_failures() {
    let conf = Config::builder()
        .region(Region::new("us-west-2"))
        .credentials_provider(Credentials::from_keys("AKID", "secret", None))
        .build();
    let client = Client::from_conf_conn(conf, TestConnection::<&'static str>::new(vec![]));
    let err = client
        .meter_usage()
        .product_code("prod")
        .send()
        .await
        .expect_err("connection has no responses");
    assert!(matches!(err, SdkError::DispatchFailure(_)), "{:?}", err);
}

#[tokio::test]
async fn static_endpoints_replace_the_regional_endpoint() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri(Uri::from_static("http://localhost:8000/"))
            .body(SdkBody::from(r#"{"RegistrationToken":"token"}"#))
            .unwrap(),
        http::Response::builder().status(200).body("{}").unwrap(),
    )]);
    let conf = Config::builder()
        .region(Region::new("us-west-2"))
        .credentials_provider(Credentials::from_keys("AKID", "secret", None))
        .endpoint_resolver(Endpoint::immutable(Uri::from_static("http://localhost:8000")))
        .build();
    let output = Client::from_conf_conn(conf, conn.clone())
        .resolve_customer()
        .registration_token("token")
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(output.customer_identifier(), None);
    conn.assert_requests_match(&[]);
}
