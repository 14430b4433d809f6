/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_auth::{EnvironmentVariableCredentialsProvider, ProvideCredentials, SharedCredentialsProvider};
use aws_endpoint::{DefaultAwsEndpointResolver, ResolveAwsEndpoint};
use aws_http::user_agent::AwsUserAgent;
use aws_types::os_shim_internal::Env;
use aws_types::region::{ProvideRegion, Region};
use smithy_http::property_bag::PropertyBag;
use std::fmt;
use std::sync::Arc;

/// Service configuration, copied into every operation built from it
#[derive(Clone)]
pub struct Config {
    pub(crate) region: Option<Region>,
    pub(crate) credentials_provider: SharedCredentialsProvider,
    pub(crate) endpoint_resolver: Arc<dyn ResolveAwsEndpoint>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("region", &self.region)
            .field("credentials_provider", &self.credentials_provider)
            .finish()
    }
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Region from `AWS_REGION` (or `AWS_DEFAULT_REGION`), credentials from the environment
    pub fn from_env() -> Self {
        Builder::default()
            .region(aws_types::region::default_provider())
            .build()
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }
}

#[derive(Default)]
pub struct Builder {
    region: Option<Region>,
    credentials_provider: Option<SharedCredentialsProvider>,
    endpoint_resolver: Option<Arc<dyn ResolveAwsEndpoint>>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the region, eg. `Region::new("us-east-1")`, or a provider that resolves one
    pub fn region(mut self, region_provider: impl ProvideRegion) -> Self {
        self.region = region_provider.region();
        self
    }

    pub fn credentials_provider(mut self, provider: impl ProvideCredentials + 'static) -> Self {
        self.credentials_provider = Some(SharedCredentialsProvider::new(provider));
        self
    }

    /// Override how endpoints are resolved
    ///
    /// Pass an [`Endpoint`](aws_endpoint::Endpoint) to send every request to a fixed URI.
    pub fn endpoint_resolver(mut self, resolver: impl ResolveAwsEndpoint + 'static) -> Self {
        self.endpoint_resolver = Some(Arc::new(resolver));
        self
    }

    pub fn build(self) -> Config {
        Config {
            region: self.region,
            credentials_provider: self.credentials_provider.unwrap_or_else(|| {
                SharedCredentialsProvider::new(EnvironmentVariableCredentialsProvider::new())
            }),
            endpoint_resolver: self.endpoint_resolver.unwrap_or_else(|| {
                Arc::new(DefaultAwsEndpointResolver::for_service("api.sagemaker"))
            }),
        }
    }
}

/// Copy `config` into the property bag of a request
pub(crate) fn populate_properties(config: &Config, properties: &mut PropertyBag) {
    aws_endpoint::set_endpoint_resolver(properties, config.endpoint_resolver.clone());
    if let Some(region) = &config.region {
        properties.insert(region.clone());
    }
    aws_auth::set_provider(properties, config.credentials_provider.clone());
    properties.insert(AwsUserAgent::new_from_environment(
        Env::real(),
        crate::API_METADATA.clone(),
    ));
}

#[cfg(test)]
mod test {
    use crate::config::Config;
    use crate::Region;

    #[test]
    fn region_is_optional() {
        let conf = Config::builder().build();
        assert_eq!(conf.region(), None);
        let conf = Config::builder().region(Region::new("us-west-2")).build();
        assert_eq!(conf.region(), Some(&Region::new("us-west-2")));
    }

    #[test]
    fn debug_does_not_print_credentials() {
        let conf = Config::builder()
            .credentials_provider(crate::Credentials::from_keys("AKIDEXAMPLE", "topsecret", None))
            .build();
        let debug = format!("{:?}", conf);
        assert!(debug.contains("AKIDEXAMPLE"));
        assert!(!debug.contains("topsecret"));
    }
}
