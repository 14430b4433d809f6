/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The HTTP client shared by every service crate.
//!
//! [`Client::call`] assembles the middleware stack for a single operation and drives the
//! request through it:
//!
//! 1. resolve the endpoint from the configured region,
//! 2. set the user agent,
//! 3. load credentials (a request-level provider wins over the client's),
//! 4. dispatch over the connector and parse the response.

pub mod conn;
#[cfg(feature = "test-util")]
pub mod test_connection;

use crate::conn::{HttpService, Standard};
use aws_auth::CredentialsStage;
use aws_endpoint::AwsEndpointStage;
use aws_http::user_agent::UserAgentStage;
use smithy_http::body::SdkBody;
use smithy_http::operation::Operation;
use smithy_http::response::ParseHttpResponse;
use smithy_http_tower::dispatch::DispatchLayer;
use smithy_http_tower::map_request::{AsyncMapRequestLayer, MapRequestLayer};
use smithy_http_tower::parse_response::ParseResponseLayer;
use std::error::Error;
use tower::{ServiceBuilder, ServiceExt};
use tracing::{debug, debug_span, Instrument};

pub use smithy_http::result::{ParseFailure, SdkError, SdkSuccess};

/// AWS Service Client
///
/// Hyper-based AWS Service Client. Most customers will want to construct a client with
/// [`Client::https()`](Client::https). For testing & other more advanced use cases, a custom
/// connector may be used via [`Client::new(connector)`](Client::new).
///
/// The client is cheap to clone and holds no per-request state.
#[derive(Clone, Debug)]
pub struct Client {
    inner: Standard,
}

impl Client {
    /// Construct a client that sends requests through `connector`
    pub fn new(connector: impl HttpService + 'static) -> Self {
        Client {
            inner: Standard::new(connector),
        }
    }

    /// Construct a client backed by `hyper` with a TLS connector
    pub fn https() -> Self {
        Client {
            inner: Standard::https(),
        }
    }

    /// Dispatch an operation and return the parsed output
    pub async fn call<O, T, E>(&self, input: Operation<O>) -> Result<T, SdkError<E>>
    where
        O: ParseHttpResponse<SdkBody, Output = Result<T, ParseFailure<E>>> + Send + Sync + 'static,
        T: Send + 'static,
        E: Error + Send + 'static,
    {
        self.call_raw(input).await.map(|res| res.parsed)
    }

    /// Dispatch an operation, keeping the raw response alongside the parsed output
    pub async fn call_raw<O, T, E>(&self, input: Operation<O>) -> Result<SdkSuccess<T>, SdkError<E>>
    where
        O: ParseHttpResponse<SdkBody, Output = Result<T, ParseFailure<E>>> + Send + Sync + 'static,
        T: Send + 'static,
        E: Error + Send + 'static,
    {
        let span = match input.metadata() {
            Some(metadata) => debug_span!(
                "send_operation",
                operation = metadata.name(),
                service = metadata.service()
            ),
            None => debug_span!("send_operation"),
        };
        let svc = ServiceBuilder::new()
            .layer(ParseResponseLayer::<O>::new())
            .layer(MapRequestLayer::for_mapper(AwsEndpointStage))
            .layer(MapRequestLayer::for_mapper(UserAgentStage::new()))
            .layer(AsyncMapRequestLayer::for_mapper(CredentialsStage::new()))
            .layer(DispatchLayer::new())
            .service(self.inner.clone());
        async move {
            let result = svc.oneshot(input).await;
            match &result {
                Ok(success) => debug!(status = %success.raw.status(), "operation succeeded"),
                Err(err) => debug!(error = %err, "operation failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::Client;

    #[test]
    fn client_is_send_sync_and_clone() {
        fn check<T: Send + Sync + Clone>() {}
        check::<Client>();
    }
}
