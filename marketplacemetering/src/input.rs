/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct BatchMeterUsageInput {
    /// Records to meter. Each record is processed independently.
    #[serde(rename = "UsageRecords")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub usage_records: std::option::Option<std::vec::Vec<crate::model::UsageRecord>>,
    /// Product code issued when the product was listed.
    #[serde(rename = "ProductCode")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub product_code: std::option::Option<std::string::String>,
}
impl BatchMeterUsageInput {
    pub fn usage_records(&self) -> std::option::Option<&[crate::model::UsageRecord]> {
        self.usage_records.as_deref()
    }

    pub fn product_code(&self) -> std::option::Option<&str> {
        self.product_code.as_deref()
    }
}
/// See [`BatchMeterUsageInput`](crate::input::BatchMeterUsageInput)
pub mod batch_meter_usage_input {
    /// A builder for [`BatchMeterUsageInput`](crate::input::BatchMeterUsageInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        usage_records: std::option::Option<std::vec::Vec<crate::model::UsageRecord>>,
        product_code: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `UsageRecords`.
        ///
        /// To override the contents of this collection use [`set_usage_records`](Self::set_usage_records).
        pub fn usage_records(mut self, input: impl Into<crate::model::UsageRecord>) -> Self {
            let mut v = self.usage_records.unwrap_or_default();
            v.push(input.into());
            self.usage_records = Some(v);
            self
        }
        pub fn set_usage_records(mut self, input: std::option::Option<std::vec::Vec<crate::model::UsageRecord>>) -> Self {
            self.usage_records = input;
            self
        }
        pub fn product_code(mut self, input: impl Into<std::string::String>) -> Self {
            self.product_code = Some(input.into());
            self
        }
        pub fn set_product_code(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.product_code = input;
            self
        }
        /// Consumes the builder and constructs a [`BatchMeterUsageInput`](crate::input::BatchMeterUsageInput)
        pub fn build(self) -> crate::input::BatchMeterUsageInput {
            crate::input::BatchMeterUsageInput {
                usage_records: self.usage_records,
                product_code: self.product_code,
            }
        }
    }
}
impl BatchMeterUsageInput {
    /// Creates a new builder-style object to manufacture [`BatchMeterUsageInput`](crate::input::BatchMeterUsageInput)
    pub fn builder() -> crate::input::batch_meter_usage_input::Builder {
        crate::input::batch_meter_usage_input::Builder::default()
    }
}

impl BatchMeterUsageInput {
    /// Serializes this input into an Operation<[`BatchMeterUsage`](crate::operation::BatchMeterUsage)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::BatchMeterUsage>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::BatchMeterUsage::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "BatchMeterUsage",
                "marketplacemetering",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "AWSMPMeteringService.BatchMeterUsage")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct MeterUsageInput {
    #[serde(rename = "ProductCode")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub product_code: std::option::Option<std::string::String>,
    /// Timestamp in UTC. Only hourly granularity is metered.
    #[serde(rename = "Timestamp")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub timestamp: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "UsageDimension")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub usage_dimension: std::option::Option<std::string::String>,
    #[serde(rename = "UsageQuantity")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub usage_quantity: std::option::Option<i32>,
    /// Checks permissions without metering usage.
    #[serde(rename = "DryRun")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub dry_run: std::option::Option<bool>,
}
impl MeterUsageInput {
    pub fn product_code(&self) -> std::option::Option<&str> {
        self.product_code.as_deref()
    }

    pub fn timestamp(&self) -> std::option::Option<&smithy_types::Instant> {
        self.timestamp.as_ref()
    }

    pub fn usage_dimension(&self) -> std::option::Option<&str> {
        self.usage_dimension.as_deref()
    }

    pub fn usage_quantity(&self) -> std::option::Option<i32> {
        self.usage_quantity
    }

    pub fn dry_run(&self) -> std::option::Option<bool> {
        self.dry_run
    }
}
/// See [`MeterUsageInput`](crate::input::MeterUsageInput)
pub mod meter_usage_input {
    /// A builder for [`MeterUsageInput`](crate::input::MeterUsageInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        product_code: std::option::Option<std::string::String>,
        timestamp: std::option::Option<smithy_types::Instant>,
        usage_dimension: std::option::Option<std::string::String>,
        usage_quantity: std::option::Option<i32>,
        dry_run: std::option::Option<bool>,
    }
    impl Builder {
        pub fn product_code(mut self, input: impl Into<std::string::String>) -> Self {
            self.product_code = Some(input.into());
            self
        }
        pub fn set_product_code(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.product_code = input;
            self
        }
        pub fn timestamp(mut self, input: smithy_types::Instant) -> Self {
            self.timestamp = Some(input);
            self
        }
        pub fn set_timestamp(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.timestamp = input;
            self
        }
        pub fn usage_dimension(mut self, input: impl Into<std::string::String>) -> Self {
            self.usage_dimension = Some(input.into());
            self
        }
        pub fn set_usage_dimension(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.usage_dimension = input;
            self
        }
        pub fn usage_quantity(mut self, input: i32) -> Self {
            self.usage_quantity = Some(input);
            self
        }
        pub fn set_usage_quantity(mut self, input: std::option::Option<i32>) -> Self {
            self.usage_quantity = input;
            self
        }
        pub fn dry_run(mut self, input: bool) -> Self {
            self.dry_run = Some(input);
            self
        }
        pub fn set_dry_run(mut self, input: std::option::Option<bool>) -> Self {
            self.dry_run = input;
            self
        }
        /// Consumes the builder and constructs a [`MeterUsageInput`](crate::input::MeterUsageInput)
        pub fn build(self) -> crate::input::MeterUsageInput {
            crate::input::MeterUsageInput {
                product_code: self.product_code,
                timestamp: self.timestamp,
                usage_dimension: self.usage_dimension,
                usage_quantity: self.usage_quantity,
                dry_run: self.dry_run,
            }
        }
    }
}
impl MeterUsageInput {
    /// Creates a new builder-style object to manufacture [`MeterUsageInput`](crate::input::MeterUsageInput)
    pub fn builder() -> crate::input::meter_usage_input::Builder {
        crate::input::meter_usage_input::Builder::default()
    }
}

impl MeterUsageInput {
    /// Serializes this input into an Operation<[`MeterUsage`](crate::operation::MeterUsage)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::MeterUsage>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::MeterUsage::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "MeterUsage",
                "marketplacemetering",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "AWSMPMeteringService.MeterUsage")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct RegisterUsageInput {
    #[serde(rename = "ProductCode")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub product_code: std::option::Option<std::string::String>,
    /// Public key version used to sign the response. Must be 1.
    #[serde(rename = "PublicKeyVersion")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub public_key_version: std::option::Option<i32>,
    /// Nonce echoed back in the signed response.
    #[serde(rename = "Nonce")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub nonce: std::option::Option<std::string::String>,
}
impl RegisterUsageInput {
    pub fn product_code(&self) -> std::option::Option<&str> {
        self.product_code.as_deref()
    }

    pub fn public_key_version(&self) -> std::option::Option<i32> {
        self.public_key_version
    }

    pub fn nonce(&self) -> std::option::Option<&str> {
        self.nonce.as_deref()
    }
}
/// See [`RegisterUsageInput`](crate::input::RegisterUsageInput)
pub mod register_usage_input {
    /// A builder for [`RegisterUsageInput`](crate::input::RegisterUsageInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        product_code: std::option::Option<std::string::String>,
        public_key_version: std::option::Option<i32>,
        nonce: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn product_code(mut self, input: impl Into<std::string::String>) -> Self {
            self.product_code = Some(input.into());
            self
        }
        pub fn set_product_code(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.product_code = input;
            self
        }
        pub fn public_key_version(mut self, input: i32) -> Self {
            self.public_key_version = Some(input);
            self
        }
        pub fn set_public_key_version(mut self, input: std::option::Option<i32>) -> Self {
            self.public_key_version = input;
            self
        }
        pub fn nonce(mut self, input: impl Into<std::string::String>) -> Self {
            self.nonce = Some(input.into());
            self
        }
        pub fn set_nonce(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.nonce = input;
            self
        }
        /// Consumes the builder and constructs a [`RegisterUsageInput`](crate::input::RegisterUsageInput)
        pub fn build(self) -> crate::input::RegisterUsageInput {
            crate::input::RegisterUsageInput {
                product_code: self.product_code,
                public_key_version: self.public_key_version,
                nonce: self.nonce,
            }
        }
    }
}
impl RegisterUsageInput {
    /// Creates a new builder-style object to manufacture [`RegisterUsageInput`](crate::input::RegisterUsageInput)
    pub fn builder() -> crate::input::register_usage_input::Builder {
        crate::input::register_usage_input::Builder::default()
    }
}

impl RegisterUsageInput {
    /// Serializes this input into an Operation<[`RegisterUsage`](crate::operation::RegisterUsage)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::RegisterUsage>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::RegisterUsage::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "RegisterUsage",
                "marketplacemetering",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "AWSMPMeteringService.RegisterUsage")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ResolveCustomerInput {
    /// Token posted to the SaaS registration URL when the customer subscribes.
    #[serde(rename = "RegistrationToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub registration_token: std::option::Option<std::string::String>,
}
impl ResolveCustomerInput {
    pub fn registration_token(&self) -> std::option::Option<&str> {
        self.registration_token.as_deref()
    }
}
/// See [`ResolveCustomerInput`](crate::input::ResolveCustomerInput)
pub mod resolve_customer_input {
    /// A builder for [`ResolveCustomerInput`](crate::input::ResolveCustomerInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        registration_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn registration_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.registration_token = Some(input.into());
            self
        }
        pub fn set_registration_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.registration_token = input;
            self
        }
        /// Consumes the builder and constructs a [`ResolveCustomerInput`](crate::input::ResolveCustomerInput)
        pub fn build(self) -> crate::input::ResolveCustomerInput {
            crate::input::ResolveCustomerInput {
                registration_token: self.registration_token,
            }
        }
    }
}
impl ResolveCustomerInput {
    /// Creates a new builder-style object to manufacture [`ResolveCustomerInput`](crate::input::ResolveCustomerInput)
    pub fn builder() -> crate::input::resolve_customer_input::Builder {
        crate::input::resolve_customer_input::Builder::default()
    }
}

impl ResolveCustomerInput {
    /// Serializes this input into an Operation<[`ResolveCustomer`](crate::operation::ResolveCustomer)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ResolveCustomer>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::ResolveCustomer::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "ResolveCustomer",
                "marketplacemetering",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "AWSMPMeteringService.ResolveCustomer")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}
