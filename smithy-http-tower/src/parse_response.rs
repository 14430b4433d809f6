/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::SendOperationError;
use smithy_http::body::SdkBody;
use smithy_http::middleware::load_response;
use smithy_http::operation;
use smithy_http::operation::Operation;
use smithy_http::response::ParseHttpResponse;
use smithy_http::result::{ParseFailure, SdkError, SdkSuccess};
use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Outermost service of the stack: accepts an [`Operation`], sends its request through the
/// inner service, and parses the response with the operation's handler
#[derive(Clone)]
pub struct ParseResponseService<S, O> {
    inner: S,
    _output_type: PhantomData<O>,
}

#[derive(Default)]
pub struct ParseResponseLayer<O> {
    _output_type: PhantomData<O>,
}

impl<O> ParseResponseLayer<O> {
    pub fn new() -> Self {
        ParseResponseLayer {
            _output_type: Default::default(),
        }
    }
}

impl<S, O> Layer<S> for ParseResponseLayer<O>
where
    S: Service<operation::Request>,
{
    type Service = ParseResponseService<S, O>;

    fn layer(&self, inner: S) -> Self::Service {
        ParseResponseService {
            inner,
            _output_type: Default::default(),
        }
    }
}

type BoxedResultFuture<T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send>>;

/// `S` is the inner service, `O` the response parser producing `Result<T, ParseFailure<E>>`
impl<S, O, T, E> Service<Operation<O>> for ParseResponseService<S, O>
where
    S: Service<operation::Request, Response = http::Response<SdkBody>, Error = SendOperationError>
        + 'static,
    S::Future: Send + 'static,
    O: ParseHttpResponse<SdkBody, Output = Result<T, ParseFailure<E>>> + Send + Sync + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    type Response = SdkSuccess<T>;
    type Error = SdkError<E>;
    type Future = BoxedResultFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(|err| err.into())
    }

    fn call(&mut self, req: Operation<O>) -> Self::Future {
        let (req, parts) = req.into_request_response();
        let handler = parts.response_handler;
        let resp = self.inner.call(req);
        Box::pin(async move {
            match resp.await {
                Err(e) => Err(e.into()),
                Ok(resp) => load_response(resp, &handler).await,
            }
        })
    }
}
