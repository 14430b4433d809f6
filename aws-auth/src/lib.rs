/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Credential resolution for outgoing requests.
//!
//! Service crates store the client-level provider in each operation's property bag with
//! [`set_provider`]. A single call can override it with [`set_request_provider`].
//! [`CredentialsStage`] resolves the effective provider and stores the loaded [`Credentials`]
//! in the property bag for the signer.

pub use aws_types::credentials::{
    CredentialsError, EnvironmentVariableCredentialsProvider, ProvideCredentials,
    SharedCredentialsProvider,
};
pub use aws_types::Credentials;

use smithy_http::middleware::{AsyncMapRequest, BoxFuture};
use smithy_http::operation::Request;
use smithy_http::property_bag::PropertyBag;
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use tracing::debug;

/// Provider supplied for a single request, taking precedence over the client's provider
#[derive(Clone, Debug)]
struct RequestCredentialsProvider(SharedCredentialsProvider);

/// Store the client-level credentials provider
pub fn set_provider(config: &mut PropertyBag, provider: SharedCredentialsProvider) {
    config.insert(provider);
}

/// Store a credentials provider that only applies to this request
pub fn set_request_provider(config: &mut PropertyBag, provider: SharedCredentialsProvider) {
    config.insert(RequestCredentialsProvider(provider));
}

/// Middleware stage that loads credentials for a request
///
/// Reads the request-level provider if one was set, otherwise the client-level provider, and
/// inserts the resulting [`Credentials`] into the property bag.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct CredentialsStage;

impl CredentialsStage {
    pub fn new() -> Self {
        CredentialsStage
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub enum CredentialsStageError {
    /// No credentials provider was stored in the property bag
    MissingCredentialsProvider,
    /// The provider failed to load credentials
    CredentialsLoadingError(CredentialsError),
}

impl Display for CredentialsStageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CredentialsStageError::MissingCredentialsProvider => {
                write!(f, "no credentials provider in the property bag")
            }
            CredentialsStageError::CredentialsLoadingError(err) => {
                write!(f, "failed to load credentials: {}", err)
            }
        }
    }
}

impl Error for CredentialsStageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CredentialsStageError::CredentialsLoadingError(err) => Some(err),
            _ => None,
        }
    }
}

fn effective_provider(
    properties: &PropertyBag,
) -> Result<SharedCredentialsProvider, CredentialsStageError> {
    if let Some(RequestCredentialsProvider(provider)) = properties.get::<RequestCredentialsProvider>()
    {
        debug!("using request-level credentials provider");
        return Ok(provider.clone());
    }
    properties
        .get::<SharedCredentialsProvider>()
        .cloned()
        .ok_or(CredentialsStageError::MissingCredentialsProvider)
}

impl AsyncMapRequest for CredentialsStage {
    type Error = CredentialsStageError;

    fn apply(&self, mut request: Request) -> BoxFuture<Result<Request, Self::Error>> {
        Box::pin(async move {
            let provider = effective_provider(request.properties())?;
            let credentials = provider
                .provide_credentials()
                .await
                .map_err(CredentialsStageError::CredentialsLoadingError)?;
            debug!(provider = credentials.provider_name(), "loaded credentials");
            request.properties_mut().insert(credentials);
            Ok::<_, CredentialsStageError>(request)
        })
    }
}

#[cfg(test)]
mod test {
    use super::{set_provider, set_request_provider, CredentialsStage, CredentialsStageError};
    use aws_types::credentials::{CredentialsError, SharedCredentialsProvider};
    use aws_types::Credentials;
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::AsyncMapRequest;
    use smithy_http::operation;

    fn request() -> operation::Request {
        operation::Request::new(http::Request::new(SdkBody::empty()))
    }

    fn provider(akid: &str) -> SharedCredentialsProvider {
        SharedCredentialsProvider::new(Credentials::from_keys(akid, "secret", None))
    }

    #[tokio::test]
    async fn client_provider_is_used_by_default() {
        let mut req = request();
        set_provider(req.properties_mut(), provider("client"));
        let req = CredentialsStage::new().apply(req).await.expect("credentials load");
        let creds = req.properties().get::<Credentials>().expect("credentials inserted");
        assert_eq!(creds.access_key_id(), "client");
    }

    #[tokio::test]
    async fn request_provider_takes_precedence() {
        let mut req = request();
        set_provider(req.properties_mut(), provider("client"));
        set_request_provider(req.properties_mut(), provider("request"));
        let req = CredentialsStage::new().apply(req).await.expect("credentials load");
        let creds = req.properties().get::<Credentials>().expect("credentials inserted");
        assert_eq!(creds.access_key_id(), "request");
    }

    #[tokio::test]
    async fn missing_provider_is_an_error() {
        let err = CredentialsStage::new()
            .apply(request())
            .await
            .expect_err("no provider configured");
        assert!(matches!(err, CredentialsStageError::MissingCredentialsProvider));
    }

    #[derive(Debug)]
    struct FailingProvider;

    impl aws_types::credentials::ProvideCredentials for FailingProvider {
        fn provide_credentials<'a>(
            &'a self,
        ) -> aws_types::credentials::provider::future::ProvideCredentials<'a>
        where
            Self: 'a,
        {
            aws_types::credentials::provider::future::ProvideCredentials::ready(Err(
                CredentialsError::CredentialsNotLoaded,
            ))
        }
    }

    #[tokio::test]
    async fn provider_errors_propagate() {
        let mut req = request();
        set_provider(req.properties_mut(), SharedCredentialsProvider::new(FailingProvider));
        let err = CredentialsStage::new().apply(req).await.expect_err("provider fails");
        assert!(matches!(
            err,
            CredentialsStageError::CredentialsLoadingError(CredentialsError::CredentialsNotLoaded)
        ));
    }
}
