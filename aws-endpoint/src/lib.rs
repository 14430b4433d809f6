/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Endpoint resolution for AWS services.
//!
//! Service crates store an endpoint resolver and a [`Region`] in each operation's property bag.
//! [`AwsEndpointStage`] resolves the endpoint and rewrites the request URI, keeping the
//! request's own path and query.

use aws_types::region::Region;
use http::Uri;
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;
use smithy_http::property_bag::PropertyBag;
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;
use tracing::debug;

pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// A URI that requests are sent to
///
/// The scheme and authority of the endpoint replace those of the request. A path on the
/// endpoint is prepended to the request path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    uri: Uri,
}

impl Endpoint {
    /// An endpoint used for every region, eg. a local mock or a VPC endpoint
    pub fn immutable(uri: Uri) -> Self {
        Endpoint { uri }
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Rewrite `uri` to point at this endpoint
    pub fn set_endpoint(&self, uri: &mut Uri) -> Result<(), BoxError> {
        let authority = self
            .uri
            .authority()
            .ok_or_else(|| format!("endpoint `{}` has no authority", self.uri))?;
        let scheme = self.uri.scheme_str().unwrap_or("https");
        let prefix = self.uri.path().trim_end_matches('/');
        let path_and_query = uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");
        let new_uri = format!("{}://{}{}{}", scheme, authority, prefix, path_and_query);
        *uri = new_uri.parse::<Uri>()?;
        Ok(())
    }
}

/// An endpoint resolved for a specific region
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AwsEndpoint {
    endpoint: Endpoint,
}

impl AwsEndpoint {
    pub fn from_endpoint(endpoint: Endpoint) -> Self {
        AwsEndpoint { endpoint }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn set_endpoint(&self, uri: &mut Uri) -> Result<(), BoxError> {
        self.endpoint.set_endpoint(uri)
    }
}

/// Resolve the endpoint for a region
pub trait ResolveAwsEndpoint: Send + Sync {
    fn endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError>;
}

impl ResolveAwsEndpoint for Endpoint {
    fn endpoint(&self, _region: &Region) -> Result<AwsEndpoint, BoxError> {
        Ok(AwsEndpoint::from_endpoint(self.clone()))
    }
}

/// Default resolver for services that follow `https://{prefix}.{region}.amazonaws.com`
///
/// Partitions other than `aws` are not modeled.
#[derive(Clone, Debug)]
pub struct DefaultAwsEndpointResolver {
    endpoint_prefix: &'static str,
}

impl DefaultAwsEndpointResolver {
    pub fn for_service(endpoint_prefix: &'static str) -> Self {
        DefaultAwsEndpointResolver { endpoint_prefix }
    }
}

impl ResolveAwsEndpoint for DefaultAwsEndpointResolver {
    fn endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError> {
        let uri = format!(
            "https://{}.{}.amazonaws.com",
            self.endpoint_prefix,
            region.as_ref()
        )
        .parse::<Uri>()?;
        Ok(AwsEndpoint::from_endpoint(Endpoint::immutable(uri)))
    }
}

pub type AwsEndpointResolver = Arc<dyn ResolveAwsEndpoint>;

pub fn get_endpoint_resolver(properties: &PropertyBag) -> Option<&AwsEndpointResolver> {
    properties.get()
}

pub fn set_endpoint_resolver(properties: &mut PropertyBag, provider: AwsEndpointResolver) {
    properties.insert(provider);
}

/// Middleware Stage to Add an Endpoint to a Request
///
/// AwsEndpointStage implements [`MapRequest`](smithy_http::middleware::MapRequest). It will:
/// 1. Load an endpoint provider from the property bag.
/// 2. Load an endpoint given the [`Region`](aws_types::region::Region) in the property bag.
/// 3. Apply the endpoint to the URI in the request.
#[derive(Clone, Debug, Default)]
pub struct AwsEndpointStage;

#[derive(Debug)]
pub enum AwsEndpointStageError {
    NoEndpointResolver,
    NoRegion,
    EndpointResolutionError(BoxError),
}

impl Display for AwsEndpointStageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AwsEndpointStageError::NoEndpointResolver => {
                write!(f, "no endpoint resolver in the property bag")
            }
            AwsEndpointStageError::NoRegion => write!(
                f,
                "no region configured: set one on the service config or with AWS_REGION"
            ),
            AwsEndpointStageError::EndpointResolutionError(err) => {
                write!(f, "failed to resolve endpoint: {}", err)
            }
        }
    }
}

impl Error for AwsEndpointStageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AwsEndpointStageError::EndpointResolutionError(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl MapRequest for AwsEndpointStage {
    type Error = AwsEndpointStageError;

    fn apply(&self, request: Request) -> Result<Request, Self::Error> {
        request.augment(|mut http_req, props| {
            let provider =
                get_endpoint_resolver(props).ok_or(AwsEndpointStageError::NoEndpointResolver)?;
            let region = props
                .get::<Region>()
                .ok_or(AwsEndpointStageError::NoRegion)?;
            let endpoint = provider
                .endpoint(region)
                .map_err(AwsEndpointStageError::EndpointResolutionError)?;
            endpoint
                .set_endpoint(http_req.uri_mut())
                .map_err(AwsEndpointStageError::EndpointResolutionError)?;
            debug!(endpoint = %http_req.uri(), region = %region, "resolved endpoint");
            Ok(http_req)
        })
    }
}

#[cfg(test)]
mod test {
    use crate::{
        set_endpoint_resolver, AwsEndpointStage, AwsEndpointStageError,
        DefaultAwsEndpointResolver, Endpoint, ResolveAwsEndpoint,
    };
    use aws_types::region::Region;
    use http::Uri;
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;
    use std::sync::Arc;

    fn request() -> operation::Request {
        operation::Request::new(
            http::Request::builder()
                .uri("/")
                .body(SdkBody::from(""))
                .expect("valid request"),
        )
    }

    #[test]
    fn default_resolver_sets_regional_endpoint() {
        let mut req = request();
        set_endpoint_resolver(
            req.properties_mut(),
            Arc::new(DefaultAwsEndpointResolver::for_service("api.sagemaker")),
        );
        req.properties_mut().insert(Region::new("us-west-2"));
        let req = AwsEndpointStage.apply(req).expect("should succeed");
        assert_eq!(
            req.http().uri(),
            &Uri::from_static("https://api.sagemaker.us-west-2.amazonaws.com/")
        );
    }

    #[test]
    fn static_endpoint_keeps_path_prefix_and_query() {
        let endpoint = Endpoint::immutable(Uri::from_static("http://localhost:8000/mock/"));
        let mut uri = Uri::from_static("/?x=1");
        endpoint
            .endpoint(&Region::new("us-east-1"))
            .expect("static endpoints always resolve")
            .set_endpoint(&mut uri)
            .expect("valid uri");
        assert_eq!(uri, Uri::from_static("http://localhost:8000/mock/?x=1"));
    }

    #[test]
    fn endpoint_without_authority_is_rejected() {
        let endpoint = Endpoint::immutable(Uri::from_static("/just-a-path"));
        let mut uri = Uri::from_static("/");
        assert!(endpoint.set_endpoint(&mut uri).is_err());
    }

    #[test]
    fn missing_region_is_an_error() {
        let mut req = request();
        set_endpoint_resolver(
            req.properties_mut(),
            Arc::new(DefaultAwsEndpointResolver::for_service("metering.marketplace")),
        );
        let err = AwsEndpointStage.apply(req).expect_err("no region");
        assert!(matches!(err, AwsEndpointStageError::NoRegion));
    }

    #[test]
    fn missing_resolver_is_an_error() {
        let err = AwsEndpointStage.apply(request()).expect_err("no resolver");
        assert!(matches!(err, AwsEndpointStageError::NoEndpointResolver));
    }
}
