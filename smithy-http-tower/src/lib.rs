/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! `tower` layers that turn `smithy-http` middleware into a service stack.

pub mod dispatch;
pub mod map_request;
pub mod parse_response;

use smithy_http::result::SdkError;
use std::fmt;
use std::fmt::{Display, Formatter};
use tower::BoxError;

/// An error occurred while constructing or dispatching a request
///
/// Lower layers of the stack only return this type. `ParseResponseService` converts it into an
/// [`SdkError`].
#[derive(Debug)]
pub enum SendOperationError {
    /// The request could not be constructed. It was never sent.
    RequestConstructionError(BoxError),

    /// The connector failed to deliver the request or receive a response
    RequestDispatchError(BoxError),
}

impl Display for SendOperationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SendOperationError::RequestConstructionError(err) => {
                write!(f, "failed to construct request: {}", err)
            }
            SendOperationError::RequestDispatchError(err) => {
                write!(f, "failed to dispatch request: {}", err)
            }
        }
    }
}

impl std::error::Error for SendOperationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SendOperationError::RequestConstructionError(err)
            | SendOperationError::RequestDispatchError(err) => Some(err.as_ref()),
        }
    }
}

/// Convert a `SendOperationError` into an `SdkError`
impl<E> From<SendOperationError> for SdkError<E> {
    fn from(err: SendOperationError) -> Self {
        match err {
            SendOperationError::RequestDispatchError(e) => SdkError::DispatchFailure(e),
            SendOperationError::RequestConstructionError(e) => SdkError::ConstructionFailure(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dispatch::DispatchLayer;
    use crate::map_request::MapRequestLayer;
    use crate::parse_response::ParseResponseLayer;
    use bytes::Bytes;
    use http::header::HeaderName;
    use http::HeaderValue;
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;
    use smithy_http::operation::{Operation, Request};
    use smithy_http::response::ParseStrictResponse;
    use smithy_http::result::{ParseFailure, SdkError};
    use std::convert::Infallible;
    use tower::{service_fn, ServiceBuilder, ServiceExt};

    /// Create a stack with a `MapRequest` middleware, the dispatch layer, and the response
    /// parser, then drive an operation through it
    #[tokio::test]
    async fn service_stack() {
        #[derive(Clone)]
        struct AddHeader;

        impl MapRequest for AddHeader {
            type Error = Infallible;

            fn apply(&self, request: operation::Request) -> Result<operation::Request, Self::Error> {
                request.augment(|mut req, _| {
                    req.headers_mut().insert(
                        HeaderName::from_static("x-test"),
                        HeaderValue::from_static("test"),
                    );
                    Ok(req)
                })
            }
        }

        struct TestParseResponse;

        impl ParseStrictResponse for TestParseResponse {
            type Output = Result<String, ParseFailure<Infallible>>;

            fn parse(&self, _response: &http::Response<Bytes>) -> Self::Output {
                Ok("OK".to_string())
            }
        }

        let http_layer = service_fn(|request: http::Request<SdkBody>| async move {
            if request.headers().contains_key("x-test") {
                Ok(http::Response::new(SdkBody::from("ok")))
            } else {
                Err("header not set")
            }
        });

        let svc = ServiceBuilder::new()
            .layer(ParseResponseLayer::<TestParseResponse>::new())
            .layer(MapRequestLayer::for_mapper(AddHeader))
            .layer(DispatchLayer::new())
            .service(http_layer);
        let req = http::Request::new(SdkBody::from("hello"));
        let req = operation::Request::new(req);
        let req = Operation::new(req, TestParseResponse);
        let resp = svc.oneshot(req).await;
        assert_eq!(resp.expect("success").parsed, "OK");
    }

    #[tokio::test]
    async fn dispatch_failures_are_classified() {
        struct NeverParsed;

        impl ParseStrictResponse for NeverParsed {
            type Output = Result<(), ParseFailure<Infallible>>;

            fn parse(&self, _response: &http::Response<Bytes>) -> Self::Output {
                unreachable!("the connector never returns a response")
            }
        }

        let connector = service_fn(|_request: http::Request<SdkBody>| async move {
            Err::<http::Response<SdkBody>, _>("connection refused")
        });
        let svc = ServiceBuilder::new()
            .layer(ParseResponseLayer::<NeverParsed>::new())
            .layer(DispatchLayer::new())
            .service(connector);
        let op = Operation::new(Request::new(http::Request::new(SdkBody::empty())), NeverParsed);
        match svc.oneshot(op).await {
            Err(SdkError::DispatchFailure(err)) => assert_eq!(err.to_string(), "connection refused"),
            other => panic!("expected a dispatch failure, got {:?}", other),
        }
    }
}
