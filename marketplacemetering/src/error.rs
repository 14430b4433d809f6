/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Error type for the `BatchMeterUsage` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct BatchMeterUsageError {
    pub kind: BatchMeterUsageErrorKind,
    pub(crate) meta: smithy_types::Error,
}

/// Kinds of errors returned by `BatchMeterUsage`
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum BatchMeterUsageErrorKind {
    InternalServiceError(crate::error::InternalServiceError),
    InvalidProductCodeError(crate::error::InvalidProductCodeError),
    InvalidUsageDimensionError(crate::error::InvalidUsageDimensionError),
    InvalidCustomerIdentifierError(crate::error::InvalidCustomerIdentifierError),
    TimestampOutOfBoundsError(crate::error::TimestampOutOfBoundsError),
    ThrottlingError(crate::error::ThrottlingError),
    DisabledApiError(crate::error::DisabledApiError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for BatchMeterUsageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            BatchMeterUsageErrorKind::InternalServiceError(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchMeterUsageErrorKind::InvalidProductCodeError(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchMeterUsageErrorKind::InvalidUsageDimensionError(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchMeterUsageErrorKind::InvalidCustomerIdentifierError(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchMeterUsageErrorKind::TimestampOutOfBoundsError(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchMeterUsageErrorKind::ThrottlingError(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchMeterUsageErrorKind::DisabledApiError(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchMeterUsageErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl BatchMeterUsageError {
    pub fn new(kind: BatchMeterUsageErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: BatchMeterUsageErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: BatchMeterUsageErrorKind::Unhandled(err.into()),
        }
    }

    /// The message returned by the service, if any
    pub fn message(&self) -> std::option::Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> std::option::Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> std::option::Option<&str> {
        self.meta.code()
    }

    pub fn is_internal_service_error(&self) -> bool {
        matches!(&self.kind, BatchMeterUsageErrorKind::InternalServiceError(_))
    }

    pub fn is_invalid_product_code_error(&self) -> bool {
        matches!(&self.kind, BatchMeterUsageErrorKind::InvalidProductCodeError(_))
    }

    pub fn is_invalid_usage_dimension_error(&self) -> bool {
        matches!(&self.kind, BatchMeterUsageErrorKind::InvalidUsageDimensionError(_))
    }

    pub fn is_invalid_customer_identifier_error(&self) -> bool {
        matches!(&self.kind, BatchMeterUsageErrorKind::InvalidCustomerIdentifierError(_))
    }

    pub fn is_timestamp_out_of_bounds_error(&self) -> bool {
        matches!(&self.kind, BatchMeterUsageErrorKind::TimestampOutOfBoundsError(_))
    }

    pub fn is_throttling_error(&self) -> bool {
        matches!(&self.kind, BatchMeterUsageErrorKind::ThrottlingError(_))
    }

    pub fn is_disabled_api_error(&self) -> bool {
        matches!(&self.kind, BatchMeterUsageErrorKind::DisabledApiError(_))
    }
}
impl std::error::Error for BatchMeterUsageError {
    fn source(&self) -> std::option::Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            BatchMeterUsageErrorKind::InternalServiceError(_inner) => Some(_inner),
            BatchMeterUsageErrorKind::InvalidProductCodeError(_inner) => Some(_inner),
            BatchMeterUsageErrorKind::InvalidUsageDimensionError(_inner) => Some(_inner),
            BatchMeterUsageErrorKind::InvalidCustomerIdentifierError(_inner) => Some(_inner),
            BatchMeterUsageErrorKind::TimestampOutOfBoundsError(_inner) => Some(_inner),
            BatchMeterUsageErrorKind::ThrottlingError(_inner) => Some(_inner),
            BatchMeterUsageErrorKind::DisabledApiError(_inner) => Some(_inner),
            BatchMeterUsageErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `MeterUsage` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct MeterUsageError {
    pub kind: MeterUsageErrorKind,
    pub(crate) meta: smithy_types::Error,
}

/// Kinds of errors returned by `MeterUsage`
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum MeterUsageErrorKind {
    InternalServiceError(crate::error::InternalServiceError),
    InvalidProductCodeError(crate::error::InvalidProductCodeError),
    InvalidUsageDimensionError(crate::error::InvalidUsageDimensionError),
    InvalidEndpointRegionError(crate::error::InvalidEndpointRegionError),
    TimestampOutOfBoundsError(crate::error::TimestampOutOfBoundsError),
    DuplicateRequestError(crate::error::DuplicateRequestError),
    ThrottlingError(crate::error::ThrottlingError),
    CustomerNotEntitledError(crate::error::CustomerNotEntitledError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for MeterUsageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            MeterUsageErrorKind::InternalServiceError(_inner) => std::fmt::Display::fmt(_inner, f),
            MeterUsageErrorKind::InvalidProductCodeError(_inner) => std::fmt::Display::fmt(_inner, f),
            MeterUsageErrorKind::InvalidUsageDimensionError(_inner) => std::fmt::Display::fmt(_inner, f),
            MeterUsageErrorKind::InvalidEndpointRegionError(_inner) => std::fmt::Display::fmt(_inner, f),
            MeterUsageErrorKind::TimestampOutOfBoundsError(_inner) => std::fmt::Display::fmt(_inner, f),
            MeterUsageErrorKind::DuplicateRequestError(_inner) => std::fmt::Display::fmt(_inner, f),
            MeterUsageErrorKind::ThrottlingError(_inner) => std::fmt::Display::fmt(_inner, f),
            MeterUsageErrorKind::CustomerNotEntitledError(_inner) => std::fmt::Display::fmt(_inner, f),
            MeterUsageErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl MeterUsageError {
    pub fn new(kind: MeterUsageErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: MeterUsageErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: MeterUsageErrorKind::Unhandled(err.into()),
        }
    }

    /// The message returned by the service, if any
    pub fn message(&self) -> std::option::Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> std::option::Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> std::option::Option<&str> {
        self.meta.code()
    }

    pub fn is_internal_service_error(&self) -> bool {
        matches!(&self.kind, MeterUsageErrorKind::InternalServiceError(_))
    }

    pub fn is_invalid_product_code_error(&self) -> bool {
        matches!(&self.kind, MeterUsageErrorKind::InvalidProductCodeError(_))
    }

    pub fn is_invalid_usage_dimension_error(&self) -> bool {
        matches!(&self.kind, MeterUsageErrorKind::InvalidUsageDimensionError(_))
    }

    pub fn is_invalid_endpoint_region_error(&self) -> bool {
        matches!(&self.kind, MeterUsageErrorKind::InvalidEndpointRegionError(_))
    }

    pub fn is_timestamp_out_of_bounds_error(&self) -> bool {
        matches!(&self.kind, MeterUsageErrorKind::TimestampOutOfBoundsError(_))
    }

    pub fn is_duplicate_request_error(&self) -> bool {
        matches!(&self.kind, MeterUsageErrorKind::DuplicateRequestError(_))
    }

    pub fn is_throttling_error(&self) -> bool {
        matches!(&self.kind, MeterUsageErrorKind::ThrottlingError(_))
    }

    pub fn is_customer_not_entitled_error(&self) -> bool {
        matches!(&self.kind, MeterUsageErrorKind::CustomerNotEntitledError(_))
    }
}
impl std::error::Error for MeterUsageError {
    fn source(&self) -> std::option::Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            MeterUsageErrorKind::InternalServiceError(_inner) => Some(_inner),
            MeterUsageErrorKind::InvalidProductCodeError(_inner) => Some(_inner),
            MeterUsageErrorKind::InvalidUsageDimensionError(_inner) => Some(_inner),
            MeterUsageErrorKind::InvalidEndpointRegionError(_inner) => Some(_inner),
            MeterUsageErrorKind::TimestampOutOfBoundsError(_inner) => Some(_inner),
            MeterUsageErrorKind::DuplicateRequestError(_inner) => Some(_inner),
            MeterUsageErrorKind::ThrottlingError(_inner) => Some(_inner),
            MeterUsageErrorKind::CustomerNotEntitledError(_inner) => Some(_inner),
            MeterUsageErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `RegisterUsage` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct RegisterUsageError {
    pub kind: RegisterUsageErrorKind,
    pub(crate) meta: smithy_types::Error,
}

/// Kinds of errors returned by `RegisterUsage`
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum RegisterUsageErrorKind {
    InvalidProductCodeError(crate::error::InvalidProductCodeError),
    InvalidRegionError(crate::error::InvalidRegionError),
    InvalidPublicKeyVersionError(crate::error::InvalidPublicKeyVersionError),
    PlatformNotSupportedError(crate::error::PlatformNotSupportedError),
    CustomerNotEntitledError(crate::error::CustomerNotEntitledError),
    ThrottlingError(crate::error::ThrottlingError),
    InternalServiceError(crate::error::InternalServiceError),
    DisabledApiError(crate::error::DisabledApiError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for RegisterUsageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            RegisterUsageErrorKind::InvalidProductCodeError(_inner) => std::fmt::Display::fmt(_inner, f),
            RegisterUsageErrorKind::InvalidRegionError(_inner) => std::fmt::Display::fmt(_inner, f),
            RegisterUsageErrorKind::InvalidPublicKeyVersionError(_inner) => std::fmt::Display::fmt(_inner, f),
            RegisterUsageErrorKind::PlatformNotSupportedError(_inner) => std::fmt::Display::fmt(_inner, f),
            RegisterUsageErrorKind::CustomerNotEntitledError(_inner) => std::fmt::Display::fmt(_inner, f),
            RegisterUsageErrorKind::ThrottlingError(_inner) => std::fmt::Display::fmt(_inner, f),
            RegisterUsageErrorKind::InternalServiceError(_inner) => std::fmt::Display::fmt(_inner, f),
            RegisterUsageErrorKind::DisabledApiError(_inner) => std::fmt::Display::fmt(_inner, f),
            RegisterUsageErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl RegisterUsageError {
    pub fn new(kind: RegisterUsageErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: RegisterUsageErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: RegisterUsageErrorKind::Unhandled(err.into()),
        }
    }

    /// The message returned by the service, if any
    pub fn message(&self) -> std::option::Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> std::option::Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> std::option::Option<&str> {
        self.meta.code()
    }

    pub fn is_invalid_product_code_error(&self) -> bool {
        matches!(&self.kind, RegisterUsageErrorKind::InvalidProductCodeError(_))
    }

    pub fn is_invalid_region_error(&self) -> bool {
        matches!(&self.kind, RegisterUsageErrorKind::InvalidRegionError(_))
    }

    pub fn is_invalid_public_key_version_error(&self) -> bool {
        matches!(&self.kind, RegisterUsageErrorKind::InvalidPublicKeyVersionError(_))
    }

    pub fn is_platform_not_supported_error(&self) -> bool {
        matches!(&self.kind, RegisterUsageErrorKind::PlatformNotSupportedError(_))
    }

    pub fn is_customer_not_entitled_error(&self) -> bool {
        matches!(&self.kind, RegisterUsageErrorKind::CustomerNotEntitledError(_))
    }

    pub fn is_throttling_error(&self) -> bool {
        matches!(&self.kind, RegisterUsageErrorKind::ThrottlingError(_))
    }

    pub fn is_internal_service_error(&self) -> bool {
        matches!(&self.kind, RegisterUsageErrorKind::InternalServiceError(_))
    }

    pub fn is_disabled_api_error(&self) -> bool {
        matches!(&self.kind, RegisterUsageErrorKind::DisabledApiError(_))
    }
}
impl std::error::Error for RegisterUsageError {
    fn source(&self) -> std::option::Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            RegisterUsageErrorKind::InvalidProductCodeError(_inner) => Some(_inner),
            RegisterUsageErrorKind::InvalidRegionError(_inner) => Some(_inner),
            RegisterUsageErrorKind::InvalidPublicKeyVersionError(_inner) => Some(_inner),
            RegisterUsageErrorKind::PlatformNotSupportedError(_inner) => Some(_inner),
            RegisterUsageErrorKind::CustomerNotEntitledError(_inner) => Some(_inner),
            RegisterUsageErrorKind::ThrottlingError(_inner) => Some(_inner),
            RegisterUsageErrorKind::InternalServiceError(_inner) => Some(_inner),
            RegisterUsageErrorKind::DisabledApiError(_inner) => Some(_inner),
            RegisterUsageErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `ResolveCustomer` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ResolveCustomerError {
    pub kind: ResolveCustomerErrorKind,
    pub(crate) meta: smithy_types::Error,
}

/// Kinds of errors returned by `ResolveCustomer`
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ResolveCustomerErrorKind {
    InvalidTokenError(crate::error::InvalidTokenError),
    ExpiredTokenError(crate::error::ExpiredTokenError),
    ThrottlingError(crate::error::ThrottlingError),
    InternalServiceError(crate::error::InternalServiceError),
    DisabledApiError(crate::error::DisabledApiError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ResolveCustomerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ResolveCustomerErrorKind::InvalidTokenError(_inner) => std::fmt::Display::fmt(_inner, f),
            ResolveCustomerErrorKind::ExpiredTokenError(_inner) => std::fmt::Display::fmt(_inner, f),
            ResolveCustomerErrorKind::ThrottlingError(_inner) => std::fmt::Display::fmt(_inner, f),
            ResolveCustomerErrorKind::InternalServiceError(_inner) => std::fmt::Display::fmt(_inner, f),
            ResolveCustomerErrorKind::DisabledApiError(_inner) => std::fmt::Display::fmt(_inner, f),
            ResolveCustomerErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl ResolveCustomerError {
    pub fn new(kind: ResolveCustomerErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ResolveCustomerErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ResolveCustomerErrorKind::Unhandled(err.into()),
        }
    }

    /// The message returned by the service, if any
    pub fn message(&self) -> std::option::Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> std::option::Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> std::option::Option<&str> {
        self.meta.code()
    }

    pub fn is_invalid_token_error(&self) -> bool {
        matches!(&self.kind, ResolveCustomerErrorKind::InvalidTokenError(_))
    }

    pub fn is_expired_token_error(&self) -> bool {
        matches!(&self.kind, ResolveCustomerErrorKind::ExpiredTokenError(_))
    }

    pub fn is_throttling_error(&self) -> bool {
        matches!(&self.kind, ResolveCustomerErrorKind::ThrottlingError(_))
    }

    pub fn is_internal_service_error(&self) -> bool {
        matches!(&self.kind, ResolveCustomerErrorKind::InternalServiceError(_))
    }

    pub fn is_disabled_api_error(&self) -> bool {
        matches!(&self.kind, ResolveCustomerErrorKind::DisabledApiError(_))
    }
}
impl std::error::Error for ResolveCustomerError {
    fn source(&self) -> std::option::Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ResolveCustomerErrorKind::InvalidTokenError(_inner) => Some(_inner),
            ResolveCustomerErrorKind::ExpiredTokenError(_inner) => Some(_inner),
            ResolveCustomerErrorKind::ThrottlingError(_inner) => Some(_inner),
            ResolveCustomerErrorKind::InternalServiceError(_inner) => Some(_inner),
            ResolveCustomerErrorKind::DisabledApiError(_inner) => Some(_inner),
            ResolveCustomerErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Exception thrown when the customer does not have a valid subscription for the product.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug)]
pub struct CustomerNotEntitledError {
    pub message: std::option::Option<std::string::String>,
}
impl CustomerNotEntitledError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for CustomerNotEntitledError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CustomerNotEntitledError")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for CustomerNotEntitledError {}
/// See [`CustomerNotEntitledError`](crate::error::CustomerNotEntitledError)
pub mod customer_not_entitled_error {
    /// A builder for [`CustomerNotEntitledError`](crate::error::CustomerNotEntitledError)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`CustomerNotEntitledError`](crate::error::CustomerNotEntitledError)
        pub fn build(self) -> crate::error::CustomerNotEntitledError {
            crate::error::CustomerNotEntitledError {
                message: self.message,
            }
        }
    }
}
impl CustomerNotEntitledError {
    /// Creates a new builder-style object to manufacture [`CustomerNotEntitledError`](crate::error::CustomerNotEntitledError)
    pub fn builder() -> crate::error::customer_not_entitled_error::Builder {
        crate::error::customer_not_entitled_error::Builder::default()
    }
}

/// The API is disabled in the region.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug)]
pub struct DisabledApiError {
    pub message: std::option::Option<std::string::String>,
}
impl DisabledApiError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for DisabledApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DisabledApiError")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for DisabledApiError {}
/// See [`DisabledApiError`](crate::error::DisabledApiError)
pub mod disabled_api_error {
    /// A builder for [`DisabledApiError`](crate::error::DisabledApiError)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`DisabledApiError`](crate::error::DisabledApiError)
        pub fn build(self) -> crate::error::DisabledApiError {
            crate::error::DisabledApiError {
                message: self.message,
            }
        }
    }
}
impl DisabledApiError {
    /// Creates a new builder-style object to manufacture [`DisabledApiError`](crate::error::DisabledApiError)
    pub fn builder() -> crate::error::disabled_api_error::Builder {
        crate::error::disabled_api_error::Builder::default()
    }
}

/// A metering record has already been emitted by the same EC2 instance for the given {usageDimension, timestamp} with a different usageQuantity.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug)]
pub struct DuplicateRequestError {
    pub message: std::option::Option<std::string::String>,
}
impl DuplicateRequestError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for DuplicateRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DuplicateRequestError")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for DuplicateRequestError {}
/// See [`DuplicateRequestError`](crate::error::DuplicateRequestError)
pub mod duplicate_request_error {
    /// A builder for [`DuplicateRequestError`](crate::error::DuplicateRequestError)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`DuplicateRequestError`](crate::error::DuplicateRequestError)
        pub fn build(self) -> crate::error::DuplicateRequestError {
            crate::error::DuplicateRequestError {
                message: self.message,
            }
        }
    }
}
impl DuplicateRequestError {
    /// Creates a new builder-style object to manufacture [`DuplicateRequestError`](crate::error::DuplicateRequestError)
    pub fn builder() -> crate::error::duplicate_request_error::Builder {
        crate::error::duplicate_request_error::Builder::default()
    }
}

/// The submitted registration token has expired.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug)]
pub struct ExpiredTokenError {
    pub message: std::option::Option<std::string::String>,
}
impl ExpiredTokenError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for ExpiredTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ExpiredTokenError")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for ExpiredTokenError {}
/// See [`ExpiredTokenError`](crate::error::ExpiredTokenError)
pub mod expired_token_error {
    /// A builder for [`ExpiredTokenError`](crate::error::ExpiredTokenError)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`ExpiredTokenError`](crate::error::ExpiredTokenError)
        pub fn build(self) -> crate::error::ExpiredTokenError {
            crate::error::ExpiredTokenError {
                message: self.message,
            }
        }
    }
}
impl ExpiredTokenError {
    /// Creates a new builder-style object to manufacture [`ExpiredTokenError`](crate::error::ExpiredTokenError)
    pub fn builder() -> crate::error::expired_token_error::Builder {
        crate::error::expired_token_error::Builder::default()
    }
}

/// An internal error has occurred. Retry your request.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug)]
pub struct InternalServiceError {
    pub message: std::option::Option<std::string::String>,
}
impl InternalServiceError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for InternalServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InternalServiceError")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InternalServiceError {}
/// See [`InternalServiceError`](crate::error::InternalServiceError)
pub mod internal_service_error {
    /// A builder for [`InternalServiceError`](crate::error::InternalServiceError)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`InternalServiceError`](crate::error::InternalServiceError)
        pub fn build(self) -> crate::error::InternalServiceError {
            crate::error::InternalServiceError {
                message: self.message,
            }
        }
    }
}
impl InternalServiceError {
    /// Creates a new builder-style object to manufacture [`InternalServiceError`](crate::error::InternalServiceError)
    pub fn builder() -> crate::error::internal_service_error::Builder {
        crate::error::internal_service_error::Builder::default()
    }
}

/// You have metered usage for a customer identifier that does not exist.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug)]
pub struct InvalidCustomerIdentifierError {
    pub message: std::option::Option<std::string::String>,
}
impl InvalidCustomerIdentifierError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for InvalidCustomerIdentifierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidCustomerIdentifierError")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidCustomerIdentifierError {}
/// See [`InvalidCustomerIdentifierError`](crate::error::InvalidCustomerIdentifierError)
pub mod invalid_customer_identifier_error {
    /// A builder for [`InvalidCustomerIdentifierError`](crate::error::InvalidCustomerIdentifierError)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`InvalidCustomerIdentifierError`](crate::error::InvalidCustomerIdentifierError)
        pub fn build(self) -> crate::error::InvalidCustomerIdentifierError {
            crate::error::InvalidCustomerIdentifierError {
                message: self.message,
            }
        }
    }
}
impl InvalidCustomerIdentifierError {
    /// Creates a new builder-style object to manufacture [`InvalidCustomerIdentifierError`](crate::error::InvalidCustomerIdentifierError)
    pub fn builder() -> crate::error::invalid_customer_identifier_error::Builder {
        crate::error::invalid_customer_identifier_error::Builder::default()
    }
}

/// The endpoint being called is in a region different from the one the EC2 instance is in.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug)]
pub struct InvalidEndpointRegionError {
    pub message: std::option::Option<std::string::String>,
}
impl InvalidEndpointRegionError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for InvalidEndpointRegionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidEndpointRegionError")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidEndpointRegionError {}
/// See [`InvalidEndpointRegionError`](crate::error::InvalidEndpointRegionError)
pub mod invalid_endpoint_region_error {
    /// A builder for [`InvalidEndpointRegionError`](crate::error::InvalidEndpointRegionError)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`InvalidEndpointRegionError`](crate::error::InvalidEndpointRegionError)
        pub fn build(self) -> crate::error::InvalidEndpointRegionError {
            crate::error::InvalidEndpointRegionError {
                message: self.message,
            }
        }
    }
}
impl InvalidEndpointRegionError {
    /// Creates a new builder-style object to manufacture [`InvalidEndpointRegionError`](crate::error::InvalidEndpointRegionError)
    pub fn builder() -> crate::error::invalid_endpoint_region_error::Builder {
        crate::error::invalid_endpoint_region_error::Builder::default()
    }
}

/// The product code passed does not match the product code used for publishing the product.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug)]
pub struct InvalidProductCodeError {
    pub message: std::option::Option<std::string::String>,
}
impl InvalidProductCodeError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for InvalidProductCodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidProductCodeError")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidProductCodeError {}
/// See [`InvalidProductCodeError`](crate::error::InvalidProductCodeError)
pub mod invalid_product_code_error {
    /// A builder for [`InvalidProductCodeError`](crate::error::InvalidProductCodeError)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`InvalidProductCodeError`](crate::error::InvalidProductCodeError)
        pub fn build(self) -> crate::error::InvalidProductCodeError {
            crate::error::InvalidProductCodeError {
                message: self.message,
            }
        }
    }
}
impl InvalidProductCodeError {
    /// Creates a new builder-style object to manufacture [`InvalidProductCodeError`](crate::error::InvalidProductCodeError)
    pub fn builder() -> crate::error::invalid_product_code_error::Builder {
        crate::error::invalid_product_code_error::Builder::default()
    }
}

/// Public Key version is invalid.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug)]
pub struct InvalidPublicKeyVersionError {
    pub message: std::option::Option<std::string::String>,
}
impl InvalidPublicKeyVersionError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for InvalidPublicKeyVersionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidPublicKeyVersionError")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidPublicKeyVersionError {}
/// See [`InvalidPublicKeyVersionError`](crate::error::InvalidPublicKeyVersionError)
pub mod invalid_public_key_version_error {
    /// A builder for [`InvalidPublicKeyVersionError`](crate::error::InvalidPublicKeyVersionError)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`InvalidPublicKeyVersionError`](crate::error::InvalidPublicKeyVersionError)
        pub fn build(self) -> crate::error::InvalidPublicKeyVersionError {
            crate::error::InvalidPublicKeyVersionError {
                message: self.message,
            }
        }
    }
}
impl InvalidPublicKeyVersionError {
    /// Creates a new builder-style object to manufacture [`InvalidPublicKeyVersionError`](crate::error::InvalidPublicKeyVersionError)
    pub fn builder() -> crate::error::invalid_public_key_version_error::Builder {
        crate::error::invalid_public_key_version_error::Builder::default()
    }
}

/// RegisterUsage must be called in the same region the ECS task was launched in.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug)]
pub struct InvalidRegionError {
    pub message: std::option::Option<std::string::String>,
}
impl InvalidRegionError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for InvalidRegionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidRegionError")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidRegionError {}
/// See [`InvalidRegionError`](crate::error::InvalidRegionError)
pub mod invalid_region_error {
    /// A builder for [`InvalidRegionError`](crate::error::InvalidRegionError)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`InvalidRegionError`](crate::error::InvalidRegionError)
        pub fn build(self) -> crate::error::InvalidRegionError {
            crate::error::InvalidRegionError {
                message: self.message,
            }
        }
    }
}
impl InvalidRegionError {
    /// Creates a new builder-style object to manufacture [`InvalidRegionError`](crate::error::InvalidRegionError)
    pub fn builder() -> crate::error::invalid_region_error::Builder {
        crate::error::invalid_region_error::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug)]
pub struct InvalidTokenError {
    pub message: std::option::Option<std::string::String>,
}
impl InvalidTokenError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for InvalidTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidTokenError")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidTokenError {}
/// See [`InvalidTokenError`](crate::error::InvalidTokenError)
pub mod invalid_token_error {
    /// A builder for [`InvalidTokenError`](crate::error::InvalidTokenError)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`InvalidTokenError`](crate::error::InvalidTokenError)
        pub fn build(self) -> crate::error::InvalidTokenError {
            crate::error::InvalidTokenError {
                message: self.message,
            }
        }
    }
}
impl InvalidTokenError {
    /// Creates a new builder-style object to manufacture [`InvalidTokenError`](crate::error::InvalidTokenError)
    pub fn builder() -> crate::error::invalid_token_error::Builder {
        crate::error::invalid_token_error::Builder::default()
    }
}

/// The usage dimension does not match one of the dimensions provided during publication.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug)]
pub struct InvalidUsageDimensionError {
    pub message: std::option::Option<std::string::String>,
}
impl InvalidUsageDimensionError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for InvalidUsageDimensionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidUsageDimensionError")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidUsageDimensionError {}
/// See [`InvalidUsageDimensionError`](crate::error::InvalidUsageDimensionError)
pub mod invalid_usage_dimension_error {
    /// A builder for [`InvalidUsageDimensionError`](crate::error::InvalidUsageDimensionError)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`InvalidUsageDimensionError`](crate::error::InvalidUsageDimensionError)
        pub fn build(self) -> crate::error::InvalidUsageDimensionError {
            crate::error::InvalidUsageDimensionError {
                message: self.message,
            }
        }
    }
}
impl InvalidUsageDimensionError {
    /// Creates a new builder-style object to manufacture [`InvalidUsageDimensionError`](crate::error::InvalidUsageDimensionError)
    pub fn builder() -> crate::error::invalid_usage_dimension_error::Builder {
        crate::error::invalid_usage_dimension_error::Builder::default()
    }
}

/// AWS Marketplace does not support metering usage from the underlying platform.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug)]
pub struct PlatformNotSupportedError {
    pub message: std::option::Option<std::string::String>,
}
impl PlatformNotSupportedError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for PlatformNotSupportedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PlatformNotSupportedError")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for PlatformNotSupportedError {}
/// See [`PlatformNotSupportedError`](crate::error::PlatformNotSupportedError)
pub mod platform_not_supported_error {
    /// A builder for [`PlatformNotSupportedError`](crate::error::PlatformNotSupportedError)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`PlatformNotSupportedError`](crate::error::PlatformNotSupportedError)
        pub fn build(self) -> crate::error::PlatformNotSupportedError {
            crate::error::PlatformNotSupportedError {
                message: self.message,
            }
        }
    }
}
impl PlatformNotSupportedError {
    /// Creates a new builder-style object to manufacture [`PlatformNotSupportedError`](crate::error::PlatformNotSupportedError)
    pub fn builder() -> crate::error::platform_not_supported_error::Builder {
        crate::error::platform_not_supported_error::Builder::default()
    }
}

/// The calls to the API are throttled.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug)]
pub struct ThrottlingError {
    pub message: std::option::Option<std::string::String>,
}
impl ThrottlingError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for ThrottlingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ThrottlingError")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for ThrottlingError {}
/// See [`ThrottlingError`](crate::error::ThrottlingError)
pub mod throttling_error {
    /// A builder for [`ThrottlingError`](crate::error::ThrottlingError)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`ThrottlingError`](crate::error::ThrottlingError)
        pub fn build(self) -> crate::error::ThrottlingError {
            crate::error::ThrottlingError {
                message: self.message,
            }
        }
    }
}
impl ThrottlingError {
    /// Creates a new builder-style object to manufacture [`ThrottlingError`](crate::error::ThrottlingError)
    pub fn builder() -> crate::error::throttling_error::Builder {
        crate::error::throttling_error::Builder::default()
    }
}

/// The timestamp value passed in the request is out of the allowed range.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug)]
pub struct TimestampOutOfBoundsError {
    pub message: std::option::Option<std::string::String>,
}
impl TimestampOutOfBoundsError {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for TimestampOutOfBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TimestampOutOfBoundsError")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for TimestampOutOfBoundsError {}
/// See [`TimestampOutOfBoundsError`](crate::error::TimestampOutOfBoundsError)
pub mod timestamp_out_of_bounds_error {
    /// A builder for [`TimestampOutOfBoundsError`](crate::error::TimestampOutOfBoundsError)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`TimestampOutOfBoundsError`](crate::error::TimestampOutOfBoundsError)
        pub fn build(self) -> crate::error::TimestampOutOfBoundsError {
            crate::error::TimestampOutOfBoundsError {
                message: self.message,
            }
        }
    }
}
impl TimestampOutOfBoundsError {
    /// Creates a new builder-style object to manufacture [`TimestampOutOfBoundsError`](crate::error::TimestampOutOfBoundsError)
    pub fn builder() -> crate::error::timestamp_out_of_bounds_error::Builder {
        crate::error::timestamp_out_of_bounds_error::Builder::default()
    }
}
