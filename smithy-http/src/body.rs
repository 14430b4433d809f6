/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::{HeaderMap, HeaderValue};
use http_body::{Body, SizeHint};
use std::error::Error;
use std::fmt::{self, Debug, Formatter};
use std::pin::Pin;
use std::task::{Context, Poll};

pub type BoxError = Box<dyn Error + Send + Sync>;

/// Request and response body used throughout the runtime
///
/// Request bodies built by service crates are always in memory. Responses coming off the wire
/// arrive as streaming `hyper` bodies and are loaded fully before parsing.
pub struct SdkBody(Inner);

enum Inner {
    Once(Option<Bytes>),
    Streaming(hyper::Body),
    Taken,
}

impl Debug for SdkBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Inner::Once(Some(bytes)) => f.debug_tuple("SdkBody::Once").field(bytes).finish(),
            Inner::Once(None) => f.write_str("SdkBody::Empty"),
            Inner::Streaming(body) => f.debug_tuple("SdkBody::Streaming").field(body).finish(),
            Inner::Taken => f.write_str("SdkBody::Taken"),
        }
    }
}

impl SdkBody {
    pub fn empty() -> Self {
        SdkBody(Inner::Once(None))
    }

    /// Replace this body with `Taken`, returning the original body
    pub fn take(&mut self) -> Self {
        SdkBody(std::mem::replace(&mut self.0, Inner::Taken))
    }

    fn poll_inner(&mut self, cx: &mut Context<'_>) -> Poll<Option<Result<Bytes, BoxError>>> {
        match &mut self.0 {
            Inner::Once(once) => match once.take() {
                Some(bytes) if bytes.is_empty() => Poll::Ready(None),
                Some(bytes) => Poll::Ready(Some(Ok(bytes))),
                None => Poll::Ready(None),
            },
            Inner::Streaming(body) => Pin::new(body).poll_data(cx).map_err(|e| e.into()),
            Inner::Taken => Poll::Ready(Some(Err("A `Taken` body should never be polled".into()))),
        }
    }

    /// If this is an in-memory body, return its contents
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.0 {
            Inner::Once(Some(bytes)) => Some(bytes),
            Inner::Once(None) => Some(&[]),
            _ => None,
        }
    }

    /// Clone an in-memory body. Streaming bodies cannot be cloned.
    pub fn try_clone(&self) -> Option<Self> {
        match &self.0 {
            Inner::Once(bytes) => Some(SdkBody(Inner::Once(bytes.clone()))),
            _ => None,
        }
    }

    pub fn content_length(&self) -> Option<u64> {
        self.size_hint().exact()
    }
}

impl From<&str> for SdkBody {
    fn from(s: &str) -> Self {
        SdkBody::from(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<String> for SdkBody {
    fn from(s: String) -> Self {
        SdkBody::from(Bytes::from(s))
    }
}

impl From<Bytes> for SdkBody {
    fn from(bytes: Bytes) -> Self {
        SdkBody(Inner::Once(Some(bytes)))
    }
}

impl From<Vec<u8>> for SdkBody {
    fn from(data: Vec<u8>) -> Self {
        SdkBody::from(Bytes::from(data))
    }
}

impl From<hyper::Body> for SdkBody {
    fn from(body: hyper::Body) -> Self {
        SdkBody(Inner::Streaming(body))
    }
}

impl Body for SdkBody {
    type Data = Bytes;
    type Error = BoxError;

    fn poll_data(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Self::Data, Self::Error>>> {
        self.poll_inner(cx)
    }

    fn poll_trailers(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Result<Option<HeaderMap<HeaderValue>>, Self::Error>> {
        Poll::Ready(Ok(None))
    }

    fn is_end_stream(&self) -> bool {
        match &self.0 {
            Inner::Once(None) => true,
            Inner::Once(Some(bytes)) => bytes.is_empty(),
            Inner::Streaming(body) => body.is_end_stream(),
            Inner::Taken => true,
        }
    }

    fn size_hint(&self) -> SizeHint {
        match &self.0 {
            Inner::Once(None) | Inner::Taken => SizeHint::with_exact(0),
            Inner::Once(Some(bytes)) => SizeHint::with_exact(bytes.len() as u64),
            Inner::Streaming(body) => body.size_hint(),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use http_body::Body;

    #[tokio::test]
    async fn once_body_yields_data_once() {
        let mut body = SdkBody::from("hello");
        assert_eq!(body.content_length(), Some(5));
        let chunk = body.data().await;
        assert_eq!(chunk.expect("one chunk").expect("no error"), "hello");
        assert!(body.data().await.is_none());
    }

    #[test]
    fn empty_body_is_end_of_stream() {
        let body = SdkBody::empty();
        assert!(body.is_end_stream());
        assert_eq!(body.bytes(), Some(&b""[..]));
    }

    #[test]
    fn in_memory_bodies_can_be_cloned() {
        let body = SdkBody::from(vec![1, 2, 3]);
        let cloned = body.try_clone().expect("in-memory body");
        assert_eq!(cloned.bytes(), Some(&[1u8, 2, 3][..]));
    }

    #[test]
    fn taken_body_is_empty() {
        let mut body = SdkBody::from("data");
        let original = body.take();
        assert_eq!(original.bytes(), Some(&b"data"[..]));
        assert!(body.bytes().is_none());
        assert!(body.try_clone().is_none());
    }
}
