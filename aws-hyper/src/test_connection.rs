/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::header::{HeaderName, CONTENT_TYPE};
use protocol_test_helpers::{assert_ok, validate_body, MediaType};
use smithy_http::body::SdkBody;
use std::future::Ready;
use std::ops::Deref;
use std::sync::{Arc, Mutex, MutexGuard};
use std::task::{Context, Poll};
use tower::BoxError;

type ConnectVec<B> = Vec<(http::Request<SdkBody>, http::Response<B>)>;

/// A request the connection received, paired with the request the test expected
#[derive(Debug)]
pub struct ValidateRequest {
    pub expected: http::Request<SdkBody>,
    pub actual: http::Request<SdkBody>,
}

impl ValidateRequest {
    /// Panic unless `actual` carries every header of `expected` and matches its method, URI and body
    ///
    /// Headers named in `ignore_headers` are skipped. JSON bodies are compared structurally.
    pub fn assert_matches(&self, ignore_headers: &[HeaderName]) {
        let (actual, expected) = (&self.actual, &self.expected);
        for (name, value) in expected.headers() {
            if ignore_headers.contains(name) {
                continue;
            }
            let actual_header = actual
                .headers()
                .get(name)
                .unwrap_or_else(|| panic!("Header {:?} missing", name));
            assert_eq!(actual_header, value, "Header mismatch for {:?}", name);
        }
        assert_eq!(actual.method(), expected.method());
        assert_eq!(actual.uri(), expected.uri());

        let actual_body = actual.body().bytes().unwrap_or(&[]);
        let expected_body = expected.body().bytes().unwrap_or(&[]);
        let media_type = expected
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .map(MediaType::from);
        match (media_type, std::str::from_utf8(expected_body)) {
            (Some(MediaType::Json), Ok(expected_body)) => {
                assert_ok(validate_body(actual_body, expected_body, MediaType::Json))
            }
            _ => assert_eq!(actual_body, expected_body),
        }
    }
}

/// TestConnection for use with an [`aws_hyper::Client`](crate::Client)
///
/// Answers requests from a preloaded series of responses, in order, and records every request
/// it receives for later inspection. Once the responses run out, further requests fail with a
/// dispatch error.
///
/// ```rust
/// use aws_hyper::test_connection::TestConnection;
/// use smithy_http::body::SdkBody;
/// let events = vec![(
///    http::Request::new(SdkBody::from("request body")),
///    http::Response::builder()
///        .status(200)
///        .body("response body")
///        .unwrap(),
/// )];
/// let conn = TestConnection::new(events);
/// let client = aws_hyper::Client::new(conn);
/// ```
#[derive(Debug)]
pub struct TestConnection<B> {
    data: Arc<Mutex<ConnectVec<B>>>,
    requests: Arc<Mutex<Vec<ValidateRequest>>>,
}

// `derive(Clone)` would require `B: Clone`
impl<B> Clone for TestConnection<B> {
    fn clone(&self) -> Self {
        TestConnection {
            data: self.data.clone(),
            requests: self.requests.clone(),
        }
    }
}

impl<B> TestConnection<B> {
    pub fn new(mut data: ConnectVec<B>) -> Self {
        data.reverse();
        TestConnection {
            data: Arc::new(Mutex::new(data)),
            requests: Default::default(),
        }
    }

    /// Requests received so far, in the order they arrived
    pub fn requests(&self) -> impl Deref<Target = Vec<ValidateRequest>> + '_ {
        lock(&self.requests)
    }

    /// Assert that every request received matches its expected counterpart
    pub fn assert_requests_match(&self, ignore_headers: &[HeaderName]) {
        for req in self.requests().iter() {
            req.assert_matches(ignore_headers);
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<B: Into<SdkBody>> tower::Service<http::Request<SdkBody>> for TestConnection<B> {
    type Response = http::Response<SdkBody>;
    type Error = BoxError;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, actual: http::Request<SdkBody>) -> Self::Future {
        if let Some((expected, resp)) = lock(&self.data).pop() {
            lock(&self.requests).push(ValidateRequest { expected, actual });
            std::future::ready(Ok(resp.map(|body| body.into())))
        } else {
            std::future::ready(Err("No more data".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::conn::HttpService;
    use crate::test_connection::TestConnection;
    use smithy_http::body::SdkBody;
    use tower::ServiceExt;

    #[test]
    fn meets_trait_bounds() {
        fn check(_: impl HttpService + Clone) {}
        check(TestConnection::<String>::new(vec![]));
    }

    #[tokio::test]
    async fn responses_are_replayed_in_order() {
        let conn = TestConnection::new(vec![
            (
                http::Request::new(SdkBody::from("first")),
                http::Response::new("one"),
            ),
            (
                http::Request::new(SdkBody::from("second")),
                http::Response::new("two"),
            ),
        ]);
        let first = conn
            .clone()
            .oneshot(http::Request::new(SdkBody::from("first")))
            .await
            .expect("first response");
        assert_eq!(first.body().bytes(), Some(&b"one"[..]));
        let second = conn
            .clone()
            .oneshot(http::Request::new(SdkBody::from("second")))
            .await
            .expect("second response");
        assert_eq!(second.body().bytes(), Some(&b"two"[..]));
        conn.clone()
            .oneshot(http::Request::new(SdkBody::empty()))
            .await
            .expect_err("no more responses");
        assert_eq!(conn.requests().len(), 2);
        conn.assert_requests_match(&[]);
    }

    #[test]
    #[should_panic]
    fn json_bodies_are_compared_structurally() {
        let req = |body: &'static str| {
            http::Request::builder()
                .header("content-type", "application/x-amz-json-1.1")
                .body(SdkBody::from(body))
                .unwrap()
        };
        let validate = super::ValidateRequest {
            expected: req(r#"{"a": 1, "b": 2}"#),
            actual: req(r#"{"b":2,"a":3}"#),
        };
        validate.assert_matches(&[]);
    }

    #[test]
    fn json_key_order_is_ignored() {
        let req = |body: &'static str| {
            http::Request::builder()
                .header("content-type", "application/x-amz-json-1.1")
                .body(SdkBody::from(body))
                .unwrap()
        };
        let validate = super::ValidateRequest {
            expected: req(r#"{"a": 1, "b": 2}"#),
            actual: req(r#"{"b":2,"a":1}"#),
        };
        validate.assert_matches(&[]);
    }
}
