/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::credentials::provider::{self, future, CredentialsError, ProvideCredentials};
use crate::os_shim_internal::Env;
use crate::Credentials;
use std::env::VarError;

const ENV_PROVIDER: &str = "EnvironmentVariable";

/// Load credentials from the process environment
///
/// - `AWS_ACCESS_KEY_ID` (or `AWS_ACCESS_KEY`)
/// - `AWS_SECRET_ACCESS_KEY` (or `SECRET_ACCESS_KEY`)
/// - `AWS_SESSION_TOKEN`, optional
#[derive(Debug, Default)]
pub struct EnvironmentVariableCredentialsProvider {
    env: Env,
}

impl EnvironmentVariableCredentialsProvider {
    pub fn new() -> Self {
        Self::new_with_env(Env::real())
    }

    pub fn new_with_env(env: Env) -> Self {
        Self { env }
    }

    fn credentials(&self) -> provider::Result {
        let access_key = self
            .env
            .get("AWS_ACCESS_KEY_ID")
            .or_else(|_| self.env.get("AWS_ACCESS_KEY"))
            .map_err(to_cred_error)?;
        let secret_key = self
            .env
            .get("AWS_SECRET_ACCESS_KEY")
            .or_else(|_| self.env.get("SECRET_ACCESS_KEY"))
            .map_err(to_cred_error)?;
        let session_token = self
            .env
            .get("AWS_SESSION_TOKEN")
            .ok()
            .filter(|token| !token.is_empty());
        tracing::debug!(provider = ENV_PROVIDER, "loaded credentials");
        Ok(Credentials::new(
            access_key,
            secret_key,
            session_token,
            None,
            ENV_PROVIDER,
        ))
    }
}

fn to_cred_error(err: VarError) -> CredentialsError {
    match err {
        VarError::NotPresent => CredentialsError::CredentialsNotLoaded,
        e @ VarError::NotUnicode(_) => CredentialsError::Unhandled(Box::new(e)),
    }
}

impl ProvideCredentials for EnvironmentVariableCredentialsProvider {
    fn provide_credentials<'a>(&'a self) -> future::ProvideCredentials<'a>
    where
        Self: 'a,
    {
        future::ProvideCredentials::ready(self.credentials())
    }
}

#[cfg(test)]
mod test {
    use crate::credentials::{CredentialsError, EnvironmentVariableCredentialsProvider, ProvideCredentials};
    use crate::os_shim_internal::Env;

    #[tokio::test]
    async fn valid_with_session_token() {
        let provider = EnvironmentVariableCredentialsProvider::new_with_env(Env::from_slice(&[
            ("AWS_ACCESS_KEY_ID", "access"),
            ("AWS_SECRET_ACCESS_KEY", "secret"),
            ("AWS_SESSION_TOKEN", "token"),
        ]));
        let creds = provider.provide_credentials().await.expect("valid credentials");
        assert_eq!(creds.access_key_id(), "access");
        assert_eq!(creds.secret_access_key(), "secret");
        assert_eq!(creds.session_token(), Some("token"));
        assert_eq!(creds.provider_name(), "EnvironmentVariable");
    }

    #[tokio::test]
    async fn alternate_names_and_empty_token() {
        let provider = EnvironmentVariableCredentialsProvider::new_with_env(Env::from_slice(&[
            ("AWS_ACCESS_KEY", "access"),
            ("SECRET_ACCESS_KEY", "secret"),
            ("AWS_SESSION_TOKEN", ""),
        ]));
        let creds = provider.provide_credentials().await.expect("valid credentials");
        assert_eq!(creds.access_key_id(), "access");
        assert_eq!(creds.session_token(), None);
    }

    #[tokio::test]
    async fn missing_secret() {
        let provider = EnvironmentVariableCredentialsProvider::new_with_env(Env::from_slice(&[(
            "AWS_ACCESS_KEY_ID",
            "access",
        )]));
        let err = provider.provide_credentials().await.expect_err("no secret key");
        assert!(matches!(err, CredentialsError::CredentialsNotLoaded));
    }
}
