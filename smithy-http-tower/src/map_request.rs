/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::SendOperationError;
use pin_project::pin_project;
use smithy_http::middleware::{AsyncMapRequest, BoxFuture, MapRequest};
use smithy_http::operation;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Applies a [`MapRequest`] before calling the inner service
#[derive(Clone, Debug)]
pub struct MapRequestService<S, M> {
    inner: S,
    mapper: M,
}

#[derive(Debug)]
pub struct MapRequestLayer<M> {
    mapper: M,
}

impl<M> MapRequestLayer<M> {
    pub fn for_mapper(mapper: M) -> Self {
        MapRequestLayer { mapper }
    }
}

impl<S, M> Layer<S> for MapRequestLayer<M>
where
    M: Clone,
{
    type Service = MapRequestService<S, M>;

    fn layer(&self, inner: S) -> Self::Service {
        MapRequestService {
            inner,
            mapper: self.mapper.clone(),
        }
    }
}

/// Either the inner service's future, or the error the mapper returned
#[pin_project(project = MapRequestFutureProj)]
pub enum MapRequestFuture<F, E> {
    Inner {
        #[pin]
        inner: F,
    },
    Ready {
        inner: Option<E>,
    },
}

impl<O, F, E> Future for MapRequestFuture<F, E>
where
    F: Future<Output = Result<O, E>>,
{
    type Output = Result<O, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project() {
            MapRequestFutureProj::Inner { inner } => inner.poll(cx),
            MapRequestFutureProj::Ready { inner } => {
                Poll::Ready(Err(inner.take().expect("future polled after completion")))
            }
        }
    }
}

impl<S, M> Service<operation::Request> for MapRequestService<S, M>
where
    S: Service<operation::Request, Error = SendOperationError>,
    M: MapRequest,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = MapRequestFuture<S::Future, S::Error>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: operation::Request) -> Self::Future {
        match self.mapper.apply(req) {
            Err(e) => MapRequestFuture::Ready {
                inner: Some(SendOperationError::RequestConstructionError(e.into())),
            },
            Ok(req) => MapRequestFuture::Inner {
                inner: self.inner.call(req),
            },
        }
    }
}

/// Applies an [`AsyncMapRequest`] before calling the inner service
#[derive(Clone, Debug)]
pub struct AsyncMapRequestService<S, M> {
    inner: S,
    mapper: M,
}

#[derive(Debug)]
pub struct AsyncMapRequestLayer<M> {
    mapper: M,
}

impl<M> AsyncMapRequestLayer<M> {
    pub fn for_mapper(mapper: M) -> Self {
        AsyncMapRequestLayer { mapper }
    }
}

impl<S, M> Layer<S> for AsyncMapRequestLayer<M>
where
    M: Clone,
{
    type Service = AsyncMapRequestService<S, M>;

    fn layer(&self, inner: S) -> Self::Service {
        AsyncMapRequestService {
            inner,
            mapper: self.mapper.clone(),
        }
    }
}

impl<S, M> Service<operation::Request> for AsyncMapRequestService<S, M>
where
    S: Service<operation::Request, Error = SendOperationError> + Clone + Send + 'static,
    S::Future: Send + 'static,
    M: AsyncMapRequest + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: operation::Request) -> Self::Future {
        // the readied service is moved into the future; a clone stays behind for the next call
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let mapped = self.mapper.apply(req);
        Box::pin(async move {
            let req = match mapped.await {
                Ok(req) => req,
                Err(e) => return Err(SendOperationError::RequestConstructionError(e.into())),
            };
            inner.call(req).await
        })
    }
}

#[cfg(test)]
mod test {
    use crate::map_request::{AsyncMapRequestLayer, MapRequestLayer};
    use crate::SendOperationError;
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::{AsyncMapRequest, BoxFuture, MapRequest};
    use smithy_http::operation;
    use std::convert::Infallible;
    use tower::{service_fn, ServiceBuilder, ServiceExt};

    #[derive(Clone)]
    struct Reject;

    impl MapRequest for Reject {
        type Error = &'static str;

        fn apply(&self, _request: operation::Request) -> Result<operation::Request, Self::Error> {
            Err("rejected")
        }
    }

    #[derive(Clone)]
    struct InsertMarker;

    impl AsyncMapRequest for InsertMarker {
        type Error = Infallible;

        fn apply(
            &self,
            mut request: operation::Request,
        ) -> BoxFuture<Result<operation::Request, Self::Error>> {
            Box::pin(async move {
                request.properties_mut().insert(42u32);
                Ok(request)
            })
        }
    }

    fn request() -> operation::Request {
        operation::Request::new(http::Request::new(SdkBody::empty()))
    }

    #[tokio::test]
    async fn map_request_errors_abort_the_call() {
        let svc = ServiceBuilder::new()
            .layer(MapRequestLayer::for_mapper(Reject))
            .service(service_fn(|req: operation::Request| async move {
                Ok::<_, SendOperationError>(req.properties().get::<u32>().cloned())
            }));
        match svc.oneshot(request()).await {
            Err(SendOperationError::RequestConstructionError(err)) => {
                assert_eq!(err.to_string(), "rejected")
            }
            other => panic!("expected a construction error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn async_map_request_runs_before_inner() {
        let svc = ServiceBuilder::new()
            .layer(AsyncMapRequestLayer::for_mapper(InsertMarker))
            .service(service_fn(|req: operation::Request| async move {
                Ok::<_, SendOperationError>(req.properties().get::<u32>().cloned())
            }));
        let marker = svc.oneshot(request()).await.expect("success");
        assert_eq!(marker, Some(42));
    }
}
