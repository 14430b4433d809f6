/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Connectors: the bottom of the middleware stack, where requests meet the network.

use hyper_tls::HttpsConnector;
use smithy_http::body::SdkBody;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::{BoxError, Service};

pub type BoxFuture =
    Pin<Box<dyn Future<Output = Result<http::Response<SdkBody>, BoxError>> + Send>>;

/// An object-safe HTTP connector
///
/// Implemented for every cloneable `tower::Service` that sends `http::Request<SdkBody>` and
/// returns `http::Response<SdkBody>`, including [`TestConnection`](crate::test_connection::TestConnection).
pub trait HttpService: Send + Sync {
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), BoxError>>;

    fn call(&mut self, req: http::Request<SdkBody>) -> BoxFuture;

    fn clone_box(&self) -> Box<dyn HttpService>;
}

impl<T> HttpService for T
where
    T: Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
        + Clone
        + Send
        + Sync
        + 'static,
    T::Error: Into<BoxError>,
    T::Future: Send + 'static,
{
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), BoxError>> {
        Service::poll_ready(self, cx).map_err(|err| err.into())
    }

    fn call(&mut self, req: http::Request<SdkBody>) -> BoxFuture {
        let future = Service::call(self, req);
        Box::pin(async move { future.await.map_err(|err| err.into()) })
    }

    fn clone_box(&self) -> Box<dyn HttpService> {
        Box::new(self.clone())
    }
}

/// The connector used by [`Client`](crate::Client)
///
/// Either `hyper` over TLS, or any custom [`HttpService`].
pub struct Standard(Connector);

enum Connector {
    Https(Box<dyn HttpService>),
    Dyn(Box<dyn HttpService>),
}

impl Connector {
    fn service(&mut self) -> &mut Box<dyn HttpService> {
        match self {
            Connector::Https(svc) | Connector::Dyn(svc) => svc,
        }
    }
}

impl Standard {
    /// A connector that uses `hyper` with `hyper-tls` for HTTPS
    pub fn https() -> Self {
        let https = HttpsConnector::new();
        let client = hyper::Client::builder().build::<_, SdkBody>(https);
        Standard(Connector::Https(Box::new(HyperAdapter(client))))
    }

    pub fn new(connector: impl HttpService + 'static) -> Self {
        Standard(Connector::Dyn(Box::new(connector)))
    }
}

impl Clone for Standard {
    fn clone(&self) -> Self {
        Standard(match &self.0 {
            Connector::Https(svc) => Connector::Https(svc.clone_box()),
            Connector::Dyn(svc) => Connector::Dyn(svc.clone_box()),
        })
    }
}

impl Debug for Standard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Connector::Https(_) => f.write_str("Standard::Https"),
            Connector::Dyn(_) => f.write_str("Standard::Dyn"),
        }
    }
}

impl Service<http::Request<SdkBody>> for Standard {
    type Response = http::Response<SdkBody>;
    type Error = BoxError;
    type Future = BoxFuture;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.0.service().poll_ready(cx)
    }

    fn call(&mut self, req: http::Request<SdkBody>) -> Self::Future {
        self.0.service().call(req)
    }
}

/// Adapts `hyper::Client` (which returns `hyper::Body`) to the `SdkBody` connector interface
#[derive(Clone)]
struct HyperAdapter<C>(hyper::Client<C, SdkBody>);

impl<C> Service<http::Request<SdkBody>> for HyperAdapter<C>
where
    C: hyper::client::connect::Connect + Clone + Send + Sync + 'static,
{
    type Response = http::Response<SdkBody>;
    type Error = BoxError;
    type Future = BoxFuture;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.0.poll_ready(cx).map_err(|err| err.into())
    }

    fn call(&mut self, req: http::Request<SdkBody>) -> Self::Future {
        let future = self.0.call(req);
        Box::pin(async move {
            let response = future.await?;
            Ok(response.map(SdkBody::from))
        })
    }
}

#[cfg(test)]
mod test {
    use crate::conn::Standard;
    use smithy_http::body::SdkBody;
    use tower::{service_fn, BoxError, ServiceExt};

    #[tokio::test]
    async fn dyn_connectors_are_called() {
        let conn = Standard::new(service_fn(|req: http::Request<SdkBody>| async move {
            Ok::<_, BoxError>(http::Response::new(SdkBody::from(req.uri().to_string())))
        }));
        let response = conn
            .clone()
            .oneshot(http::Request::builder().uri("/hello").body(SdkBody::empty()).unwrap())
            .await
            .expect("connector succeeds");
        assert_eq!(response.body().bytes(), Some(&b"/hello"[..]));
        assert_eq!(format!("{:?}", conn), "Standard::Dyn");
    }
}
