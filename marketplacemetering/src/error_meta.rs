/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// All possible error types for this service.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum Error {
    CustomerNotEntitledError(crate::error::CustomerNotEntitledError),
    DisabledApiError(crate::error::DisabledApiError),
    DuplicateRequestError(crate::error::DuplicateRequestError),
    ExpiredTokenError(crate::error::ExpiredTokenError),
    InternalServiceError(crate::error::InternalServiceError),
    InvalidCustomerIdentifierError(crate::error::InvalidCustomerIdentifierError),
    InvalidEndpointRegionError(crate::error::InvalidEndpointRegionError),
    InvalidProductCodeError(crate::error::InvalidProductCodeError),
    InvalidPublicKeyVersionError(crate::error::InvalidPublicKeyVersionError),
    InvalidRegionError(crate::error::InvalidRegionError),
    InvalidTokenError(crate::error::InvalidTokenError),
    InvalidUsageDimensionError(crate::error::InvalidUsageDimensionError),
    PlatformNotSupportedError(crate::error::PlatformNotSupportedError),
    ThrottlingError(crate::error::ThrottlingError),
    TimestampOutOfBoundsError(crate::error::TimestampOutOfBoundsError),
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::CustomerNotEntitledError(inner) => std::fmt::Display::fmt(inner, f),
            Error::DisabledApiError(inner) => std::fmt::Display::fmt(inner, f),
            Error::DuplicateRequestError(inner) => std::fmt::Display::fmt(inner, f),
            Error::ExpiredTokenError(inner) => std::fmt::Display::fmt(inner, f),
            Error::InternalServiceError(inner) => std::fmt::Display::fmt(inner, f),
            Error::InvalidCustomerIdentifierError(inner) => std::fmt::Display::fmt(inner, f),
            Error::InvalidEndpointRegionError(inner) => std::fmt::Display::fmt(inner, f),
            Error::InvalidProductCodeError(inner) => std::fmt::Display::fmt(inner, f),
            Error::InvalidPublicKeyVersionError(inner) => std::fmt::Display::fmt(inner, f),
            Error::InvalidRegionError(inner) => std::fmt::Display::fmt(inner, f),
            Error::InvalidTokenError(inner) => std::fmt::Display::fmt(inner, f),
            Error::InvalidUsageDimensionError(inner) => std::fmt::Display::fmt(inner, f),
            Error::PlatformNotSupportedError(inner) => std::fmt::Display::fmt(inner, f),
            Error::ThrottlingError(inner) => std::fmt::Display::fmt(inner, f),
            Error::TimestampOutOfBoundsError(inner) => std::fmt::Display::fmt(inner, f),
            Error::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::BatchMeterUsageError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::BatchMeterUsageError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::BatchMeterUsageErrorKind::InternalServiceError(inner) => Error::InternalServiceError(inner),
                crate::error::BatchMeterUsageErrorKind::InvalidProductCodeError(inner) => Error::InvalidProductCodeError(inner),
                crate::error::BatchMeterUsageErrorKind::InvalidUsageDimensionError(inner) => Error::InvalidUsageDimensionError(inner),
                crate::error::BatchMeterUsageErrorKind::InvalidCustomerIdentifierError(inner) => Error::InvalidCustomerIdentifierError(inner),
                crate::error::BatchMeterUsageErrorKind::TimestampOutOfBoundsError(inner) => Error::TimestampOutOfBoundsError(inner),
                crate::error::BatchMeterUsageErrorKind::ThrottlingError(inner) => Error::ThrottlingError(inner),
                crate::error::BatchMeterUsageErrorKind::DisabledApiError(inner) => Error::DisabledApiError(inner),
                crate::error::BatchMeterUsageErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::MeterUsageError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::MeterUsageError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::MeterUsageErrorKind::InternalServiceError(inner) => Error::InternalServiceError(inner),
                crate::error::MeterUsageErrorKind::InvalidProductCodeError(inner) => Error::InvalidProductCodeError(inner),
                crate::error::MeterUsageErrorKind::InvalidUsageDimensionError(inner) => Error::InvalidUsageDimensionError(inner),
                crate::error::MeterUsageErrorKind::InvalidEndpointRegionError(inner) => Error::InvalidEndpointRegionError(inner),
                crate::error::MeterUsageErrorKind::TimestampOutOfBoundsError(inner) => Error::TimestampOutOfBoundsError(inner),
                crate::error::MeterUsageErrorKind::DuplicateRequestError(inner) => Error::DuplicateRequestError(inner),
                crate::error::MeterUsageErrorKind::ThrottlingError(inner) => Error::ThrottlingError(inner),
                crate::error::MeterUsageErrorKind::CustomerNotEntitledError(inner) => Error::CustomerNotEntitledError(inner),
                crate::error::MeterUsageErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::RegisterUsageError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::RegisterUsageError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::RegisterUsageErrorKind::InvalidProductCodeError(inner) => Error::InvalidProductCodeError(inner),
                crate::error::RegisterUsageErrorKind::InvalidRegionError(inner) => Error::InvalidRegionError(inner),
                crate::error::RegisterUsageErrorKind::InvalidPublicKeyVersionError(inner) => Error::InvalidPublicKeyVersionError(inner),
                crate::error::RegisterUsageErrorKind::PlatformNotSupportedError(inner) => Error::PlatformNotSupportedError(inner),
                crate::error::RegisterUsageErrorKind::CustomerNotEntitledError(inner) => Error::CustomerNotEntitledError(inner),
                crate::error::RegisterUsageErrorKind::ThrottlingError(inner) => Error::ThrottlingError(inner),
                crate::error::RegisterUsageErrorKind::InternalServiceError(inner) => Error::InternalServiceError(inner),
                crate::error::RegisterUsageErrorKind::DisabledApiError(inner) => Error::DisabledApiError(inner),
                crate::error::RegisterUsageErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::ResolveCustomerError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::ResolveCustomerError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ResolveCustomerErrorKind::InvalidTokenError(inner) => Error::InvalidTokenError(inner),
                crate::error::ResolveCustomerErrorKind::ExpiredTokenError(inner) => Error::ExpiredTokenError(inner),
                crate::error::ResolveCustomerErrorKind::ThrottlingError(inner) => Error::ThrottlingError(inner),
                crate::error::ResolveCustomerErrorKind::InternalServiceError(inner) => Error::InternalServiceError(inner),
                crate::error::ResolveCustomerErrorKind::DisabledApiError(inner) => Error::DisabledApiError(inner),
                crate::error::ResolveCustomerErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl std::error::Error for Error {}
