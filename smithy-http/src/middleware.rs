/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request middleware and response loading
//!
//! Middleware stages are written against [`operation::Request`](crate::operation::Request) so
//! they can read configuration from the property bag. They are adapted into `tower` layers by
//! `smithy-http-tower`.

use crate::operation;
use crate::response::ParseHttpResponse;
use crate::result::{ParseFailure, SdkError, SdkSuccess};
use bytes::{Buf, Bytes};
use http_body::Body;
use std::error::Error;
use std::future::Future;
use std::pin::Pin;

type BoxError = Box<dyn Error + Send + Sync>;

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Synchronous request transformation
///
/// Implementations read what they need from the property bag and modify the HTTP request.
/// A failure aborts the operation with `SdkError::ConstructionFailure`.
pub trait MapRequest {
    type Error: Into<BoxError>;

    fn apply(&self, request: operation::Request) -> Result<operation::Request, Self::Error>;
}

/// Request transformation that needs to await something, eg. loading credentials
///
/// The returned future must not borrow from `self`.
pub trait AsyncMapRequest {
    type Error: Into<BoxError> + 'static;

    fn apply(&self, request: operation::Request)
        -> BoxFuture<Result<operation::Request, Self::Error>>;
}

/// Load a response body into memory and parse it with `handler`
///
/// If the handler can parse the response without the body, the body is never read. Service errors
/// become `SdkError::ServiceError`; bodies that cannot be deserialized become
/// `SdkError::ResponseError`.
pub async fn load_response<B, T, E, O>(
    mut response: http::Response<B>,
    handler: &O,
) -> Result<SdkSuccess<T>, SdkError<E>>
where
    B: Body + Unpin,
    B::Error: Into<BoxError>,
    O: ParseHttpResponse<B, Output = Result<T, ParseFailure<E>>>,
{
    if let Some(parsed_response) = handler.parse_unloaded(&mut response) {
        return sdk_result(parsed_response, response.map(|_| Bytes::new()));
    }

    let body = match read_body(response.body_mut()).await {
        Ok(body) => body,
        Err(err) => {
            return Err(SdkError::ResponseError {
                raw: response.map(|_| Bytes::new()),
                err: err.into(),
            });
        }
    };

    let response = response.map(|_| body);
    let parsed = handler.parse_loaded(&response);
    sdk_result(parsed, response)
}

async fn read_body<B: Body + Unpin>(body: &mut B) -> Result<Bytes, B::Error> {
    let mut output = Vec::new();
    while let Some(buf) = body.data().await {
        let mut buf = buf?;
        while buf.has_remaining() {
            let chunk_len = buf.chunk().len();
            output.extend_from_slice(buf.chunk());
            buf.advance(chunk_len);
        }
    }
    Ok(Bytes::from(output))
}

fn sdk_result<T, E>(
    parsed: Result<T, ParseFailure<E>>,
    raw: http::Response<Bytes>,
) -> Result<SdkSuccess<T>, SdkError<E>> {
    match parsed {
        Ok(parsed) => Ok(SdkSuccess { raw, parsed }),
        Err(ParseFailure::ServiceError(err)) => Err(SdkError::ServiceError { raw, err }),
        Err(ParseFailure::DeserializeError(err)) => Err(SdkError::ResponseError { raw, err }),
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::middleware::load_response;
    use crate::response::ParseStrictResponse;
    use crate::result::{ParseFailure, SdkError};
    use bytes::Bytes;

    struct Utf8Parser;

    impl ParseStrictResponse for Utf8Parser {
        type Output = Result<String, ParseFailure<String>>;

        fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
            if !response.status().is_success() {
                return Err(String::from_utf8_lossy(response.body()).to_string().into());
            }
            String::from_utf8(response.body().to_vec())
                .map_err(|err| ParseFailure::DeserializeError(err.into()))
        }
    }

    #[tokio::test]
    async fn loads_body_before_parsing() {
        let response = http::Response::new(SdkBody::from("hello!"));
        let success = load_response(response, &Utf8Parser)
            .await
            .expect("successful parse");
        assert_eq!(success.parsed, "hello!");
        assert_eq!(success.raw.body(), "hello!");
    }

    #[tokio::test]
    async fn parse_errors_become_service_errors() {
        let response = http::Response::builder()
            .status(400)
            .body(SdkBody::from("bad request"))
            .expect("valid response");
        match load_response(response, &Utf8Parser).await {
            Err(SdkError::ServiceError { raw, err }) => {
                assert_eq!(raw.status(), 400);
                assert_eq!(err, "bad request");
            }
            other => panic!("expected a service error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn undeserializable_bodies_become_response_errors() {
        let response = http::Response::new(SdkBody::from(vec![0xff, 0xfe]));
        match load_response(response, &Utf8Parser).await {
            Err(SdkError::ResponseError { raw, .. }) => {
                assert_eq!(raw.status(), 200);
                assert_eq!(raw.body(), &Bytes::from_static(&[0xff, 0xfe]));
            }
            other => panic!("expected a response error, got {:?}", other),
        }
    }
}
