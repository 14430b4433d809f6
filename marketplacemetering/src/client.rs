/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[derive(std::fmt::Debug)]
pub(crate) struct Handle {
    client: aws_hyper::Client,
    conf: crate::Config,
}

/// Client for AWS Marketplace Metering Service
///
/// Each method returns a fluent builder for one operation. Finish with `send().await`.
#[derive(std::clone::Clone, std::fmt::Debug)]
pub struct Client {
    handle: std::sync::Arc<Handle>,
}

impl Client {
    /// A client configured from the environment, sending requests with `hyper` over TLS
    pub fn from_env() -> Self {
        Self::from_conf(crate::Config::from_env())
    }

    pub fn from_conf(conf: crate::Config) -> Self {
        Self::with_client(conf, aws_hyper::Client::https())
    }

    /// A client that sends requests through `conn`, eg. a [`TestConnection`](aws_hyper::test_connection::TestConnection)
    pub fn from_conf_conn(conf: crate::Config, conn: impl aws_hyper::conn::HttpService + 'static) -> Self {
        Self::with_client(conf, aws_hyper::Client::new(conn))
    }

    fn with_client(conf: crate::Config, client: aws_hyper::Client) -> Self {
        Self {
            handle: std::sync::Arc::new(Handle { client, conf }),
        }
    }

    pub fn conf(&self) -> &crate::Config {
        &self.handle.conf
    }

    pub fn batch_meter_usage(&self) -> fluent_builders::BatchMeterUsage {
        fluent_builders::BatchMeterUsage::new(self.handle.clone())
    }

    pub fn meter_usage(&self) -> fluent_builders::MeterUsage {
        fluent_builders::MeterUsage::new(self.handle.clone())
    }

    pub fn register_usage(&self) -> fluent_builders::RegisterUsage {
        fluent_builders::RegisterUsage::new(self.handle.clone())
    }

    pub fn resolve_customer(&self) -> fluent_builders::ResolveCustomer {
        fluent_builders::ResolveCustomer::new(self.handle.clone())
    }
}

pub mod fluent_builders {
    /// Meters usage for up to 25 customers of a SaaS product in a single call.
    #[derive(std::fmt::Debug)]
    pub struct BatchMeterUsage {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::batch_meter_usage_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl BatchMeterUsage {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::BatchMeterUsageOutput,
            smithy_http::result::SdkError<crate::error::BatchMeterUsageError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn usage_records(mut self, input: impl Into<crate::model::UsageRecord>) -> Self {
            self.inner = self.inner.usage_records(input);
            self
        }
        pub fn set_usage_records(mut self, input: std::option::Option<std::vec::Vec<crate::model::UsageRecord>>) -> Self {
            self.inner = self.inner.set_usage_records(input);
            self
        }

        pub fn product_code(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.product_code(input);
            self
        }
        pub fn set_product_code(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_product_code(input);
            self
        }
    }
    /// Emits a single metering record for an EC2 based product.
    #[derive(std::fmt::Debug)]
    pub struct MeterUsage {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::meter_usage_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl MeterUsage {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::MeterUsageOutput,
            smithy_http::result::SdkError<crate::error::MeterUsageError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn product_code(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.product_code(input);
            self
        }
        pub fn set_product_code(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_product_code(input);
            self
        }

        pub fn timestamp(mut self, input: smithy_types::Instant) -> Self {
            self.inner = self.inner.timestamp(input);
            self
        }
        pub fn set_timestamp(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_timestamp(input);
            self
        }

        pub fn usage_dimension(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.usage_dimension(input);
            self
        }
        pub fn set_usage_dimension(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_usage_dimension(input);
            self
        }

        pub fn usage_quantity(mut self, input: i32) -> Self {
            self.inner = self.inner.usage_quantity(input);
            self
        }
        pub fn set_usage_quantity(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_usage_quantity(input);
            self
        }

        pub fn dry_run(mut self, input: bool) -> Self {
            self.inner = self.inner.dry_run(input);
            self
        }
        pub fn set_dry_run(mut self, input: std::option::Option<bool>) -> Self {
            self.inner = self.inner.set_dry_run(input);
            self
        }
    }
    /// Verifies that the customer running a paid container product has a valid subscription.
    #[derive(std::fmt::Debug)]
    pub struct RegisterUsage {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::register_usage_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl RegisterUsage {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::RegisterUsageOutput,
            smithy_http::result::SdkError<crate::error::RegisterUsageError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn product_code(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.product_code(input);
            self
        }
        pub fn set_product_code(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_product_code(input);
            self
        }

        pub fn public_key_version(mut self, input: i32) -> Self {
            self.inner = self.inner.public_key_version(input);
            self
        }
        pub fn set_public_key_version(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_public_key_version(input);
            self
        }

        pub fn nonce(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.nonce(input);
            self
        }
        pub fn set_nonce(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_nonce(input);
            self
        }
    }
    /// Exchanges a registration token for a `CustomerIdentifier` and product code.
    #[derive(std::fmt::Debug)]
    pub struct ResolveCustomer {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::resolve_customer_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl ResolveCustomer {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ResolveCustomerOutput,
            smithy_http::result::SdkError<crate::error::ResolveCustomerError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn registration_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.registration_token(input);
            self
        }
        pub fn set_registration_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_registration_token(input);
            self
        }
    }
}
