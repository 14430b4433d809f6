/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::body::SdkBody;
use crate::property_bag::PropertyBag;
use std::borrow::Cow;
use std::error::Error;
use thiserror::Error;

/// Name of an operation and the service it belongs to
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Parts<H> {
    pub response_handler: H,
    pub metadata: Option<Metadata>,
}

/// An error occurred while converting an operation input into an HTTP request
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to serialize input: {0}")]
    SerializationError(#[source] Box<dyn Error + Send + Sync + 'static>),

    #[error("failed to construct HTTP request: {0}")]
    Other(#[source] Box<dyn Error + Send + Sync + 'static>),
}

/// A request ready for the middleware stack paired with the parser for its response
#[derive(Debug)]
pub struct Operation<H> {
    request: Request,
    parts: Parts<H>,
}

impl<H> Operation<H> {
    pub fn new(request: Request, response_handler: H) -> Self {
        Operation {
            request,
            parts: Parts {
                response_handler,
                metadata: None,
            },
        }
    }

    pub fn into_request_response(self) -> (Request, Parts<H>) {
        (self.request, self.parts)
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.parts.metadata = Some(metadata);
        self
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.parts.metadata.as_ref()
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn properties(&self) -> &PropertyBag {
        self.request.properties()
    }

    pub fn properties_mut(&mut self) -> &mut PropertyBag {
        self.request.properties_mut()
    }
}

/// An HTTP request plus the property bag that middleware reads its configuration from
#[derive(Debug)]
pub struct Request {
    inner: http::Request<SdkBody>,
    properties: PropertyBag,
}

impl Request {
    pub fn new(base: http::Request<SdkBody>) -> Self {
        Request {
            inner: base,
            properties: PropertyBag::new(),
        }
    }

    /// Transform the HTTP request, with access to the property bag
    ///
    /// Used by middleware to rewrite the request based on configuration stored alongside it.
    pub fn augment<T>(
        self,
        f: impl FnOnce(http::Request<SdkBody>, &mut PropertyBag) -> Result<http::Request<SdkBody>, T>,
    ) -> Result<Request, T> {
        let Request {
            inner,
            mut properties,
        } = self;
        let inner = f(inner, &mut properties)?;
        Ok(Request { inner, properties })
    }

    pub fn properties(&self) -> &PropertyBag {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut PropertyBag {
        &mut self.properties
    }

    pub fn http(&self) -> &http::Request<SdkBody> {
        &self.inner
    }

    pub fn http_mut(&mut self) -> &mut http::Request<SdkBody> {
        &mut self.inner
    }

    pub fn into_parts(self) -> (http::Request<SdkBody>, PropertyBag) {
        (self.inner, self.properties)
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::operation::{Metadata, Operation, Request};
    use http::header::CONTENT_TYPE;

    #[test]
    fn augment_keeps_properties() {
        let mut request = Request::new(
            http::Request::builder()
                .uri("/")
                .body(SdkBody::from("{}"))
                .expect("valid request"),
        );
        request.properties_mut().insert(String::from("us-west-2"));
        let request = request
            .augment(|mut req, props| {
                let value = props.get::<String>().cloned().unwrap_or_default();
                req.headers_mut()
                    .insert(CONTENT_TYPE, value.parse().expect("valid header"));
                Ok::<_, ()>(req)
            })
            .expect("augment succeeds");
        assert_eq!(request.http().headers()[CONTENT_TYPE], "us-west-2");
        assert!(request.properties().contains::<String>());
    }

    #[test]
    fn metadata_is_attached() {
        let request = Request::new(http::Request::new(SdkBody::empty()));
        let op = Operation::new(request, ()).with_metadata(Metadata::new("ListTags", "sagemaker"));
        let metadata = op.metadata().expect("metadata set");
        assert_eq!(metadata.name(), "ListTags");
        assert_eq!(metadata.service(), "sagemaker");
    }
}
