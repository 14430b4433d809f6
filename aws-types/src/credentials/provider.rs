/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::Credentials;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug)]
#[non_exhaustive]
pub enum CredentialsError {
    /// No credentials were available for this provider
    CredentialsNotLoaded,

    /// Loading credentials from this provider exceeded the maximum allowed duration
    ProviderTimedOut(Duration),

    /// The provider was given an invalid configuration
    InvalidConfiguration(Box<dyn Error + Send + Sync + 'static>),

    /// The provider experienced an error during credential resolution
    ProviderError(Box<dyn Error + Send + Sync + 'static>),

    /// An unexpected error occurred during credential resolution
    Unhandled(Box<dyn Error + Send + Sync + 'static>),
}

impl Display for CredentialsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CredentialsError::CredentialsNotLoaded => write!(
                f,
                "the provider could not provide credentials or required configuration was not set"
            ),
            CredentialsError::ProviderTimedOut(d) => write!(
                f,
                "credentials provider timed out after {} seconds",
                d.as_secs()
            ),
            CredentialsError::InvalidConfiguration(err) => {
                write!(f, "the credentials provider was not properly configured: {}", err)
            }
            CredentialsError::ProviderError(err) => {
                write!(f, "an error occurred while loading credentials: {}", err)
            }
            CredentialsError::Unhandled(err) => write!(f, "unexpected credentials error: {}", err),
        }
    }
}

impl Error for CredentialsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CredentialsError::InvalidConfiguration(e)
            | CredentialsError::ProviderError(e)
            | CredentialsError::Unhandled(e) => Some(e.as_ref() as _),
            _ => None,
        }
    }
}

pub type Result = std::result::Result<Credentials, CredentialsError>;

pub mod future {
    use std::future::Future;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

    /// Future returned by [`ProvideCredentials::provide_credentials`](super::ProvideCredentials)
    pub struct ProvideCredentials<'a>(BoxFuture<'a, super::Result>);

    impl<'a> ProvideCredentials<'a> {
        pub fn new(future: impl Future<Output = super::Result> + Send + 'a) -> Self {
            ProvideCredentials(Box::pin(future))
        }

        pub fn ready(credentials: super::Result) -> Self {
            ProvideCredentials::new(std::future::ready(credentials))
        }
    }

    impl Future for ProvideCredentials<'_> {
        type Output = super::Result;

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
            self.0.as_mut().poll(cx)
        }
    }
}

/// Asynchronous Credentials Provider
pub trait ProvideCredentials: Send + Sync + Debug {
    fn provide_credentials<'a>(&'a self) -> future::ProvideCredentials<'a>
    where
        Self: 'a;
}

impl ProvideCredentials for Credentials {
    fn provide_credentials<'a>(&'a self) -> future::ProvideCredentials<'a>
    where
        Self: 'a,
    {
        future::ProvideCredentials::ready(Ok(self.clone()))
    }
}

/// A cheaply cloneable, type-erased credentials provider
///
/// Service configs store their provider as a `SharedCredentialsProvider` so it can be copied
/// into every operation's property bag.
#[derive(Clone, Debug)]
pub struct SharedCredentialsProvider(Arc<dyn ProvideCredentials>);

impl SharedCredentialsProvider {
    pub fn new(provider: impl ProvideCredentials + 'static) -> Self {
        Self(Arc::new(provider))
    }
}

impl AsRef<dyn ProvideCredentials> for SharedCredentialsProvider {
    fn as_ref(&self) -> &(dyn ProvideCredentials + 'static) {
        self.0.as_ref()
    }
}

impl ProvideCredentials for SharedCredentialsProvider {
    fn provide_credentials<'a>(&'a self) -> future::ProvideCredentials<'a>
    where
        Self: 'a,
    {
        self.0.provide_credentials()
    }
}

#[cfg(test)]
mod test {
    use crate::credentials::{CredentialsError, ProvideCredentials, SharedCredentialsProvider};
    use crate::Credentials;

    #[tokio::test]
    async fn shared_provider_delegates() {
        let provider =
            SharedCredentialsProvider::new(Credentials::from_keys("AKID", "secret", None));
        let creds = provider.clone().provide_credentials().await.expect("static creds");
        assert_eq!(creds.access_key_id(), "AKID");
        assert_eq!(creds.secret_access_key(), "secret");
    }

    #[test]
    fn errors_render_their_cause() {
        let err = CredentialsError::ProviderError("connection reset".into());
        assert_eq!(
            err.to_string(),
            "an error occurred while loading credentials: connection reset"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
