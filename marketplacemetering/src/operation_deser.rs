/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub fn parse_batch_meter_usage_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::BatchMeterUsageOutput, crate::error::BatchMeterUsageError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::BatchMeterUsageError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::BatchMeterUsageError::generic(generic)),
    };
    Err(match error_code {
        "InternalServiceErrorException" => crate::error::BatchMeterUsageError::new(
            crate::error::BatchMeterUsageErrorKind::InternalServiceError(
                crate::error::InternalServiceError::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        "InvalidProductCodeException" => crate::error::BatchMeterUsageError::new(
            crate::error::BatchMeterUsageErrorKind::InvalidProductCodeError(
                crate::error::InvalidProductCodeError::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        "InvalidUsageDimensionException" => crate::error::BatchMeterUsageError::new(
            crate::error::BatchMeterUsageErrorKind::InvalidUsageDimensionError(
                crate::error::InvalidUsageDimensionError::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        "InvalidCustomerIdentifierException" => crate::error::BatchMeterUsageError::new(
            crate::error::BatchMeterUsageErrorKind::InvalidCustomerIdentifierError(
                crate::error::InvalidCustomerIdentifierError::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        "TimestampOutOfBoundsException" => crate::error::BatchMeterUsageError::new(
            crate::error::BatchMeterUsageErrorKind::TimestampOutOfBoundsError(
                crate::error::TimestampOutOfBoundsError::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        "ThrottlingException" => crate::error::BatchMeterUsageError::new(
            crate::error::BatchMeterUsageErrorKind::ThrottlingError(
                crate::error::ThrottlingError::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        "DisabledApiException" => crate::error::BatchMeterUsageError::new(
            crate::error::BatchMeterUsageErrorKind::DisabledApiError(
                crate::error::DisabledApiError::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        _ => crate::error::BatchMeterUsageError::generic(generic),
    })
}

pub fn parse_batch_meter_usage_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::BatchMeterUsageOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_meter_usage_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::MeterUsageOutput, crate::error::MeterUsageError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::MeterUsageError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::MeterUsageError::generic(generic)),
    };
    Err(match error_code {
        "InternalServiceErrorException" => crate::error::MeterUsageError::new(
            crate::error::MeterUsageErrorKind::InternalServiceError(
                crate::error::InternalServiceError::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        "InvalidProductCodeException" => crate::error::MeterUsageError::new(
            crate::error::MeterUsageErrorKind::InvalidProductCodeError(
                crate::error::InvalidProductCodeError::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        "InvalidUsageDimensionException" => crate::error::MeterUsageError::new(
            crate::error::MeterUsageErrorKind::InvalidUsageDimensionError(
                crate::error::InvalidUsageDimensionError::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        "InvalidEndpointRegionException" => crate::error::MeterUsageError::new(
            crate::error::MeterUsageErrorKind::InvalidEndpointRegionError(
                crate::error::InvalidEndpointRegionError::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        "TimestampOutOfBoundsException" => crate::error::MeterUsageError::new(
            crate::error::MeterUsageErrorKind::TimestampOutOfBoundsError(
                crate::error::TimestampOutOfBoundsError::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        "DuplicateRequestException" => crate::error::MeterUsageError::new(
            crate::error::MeterUsageErrorKind::DuplicateRequestError(
                crate::error::DuplicateRequestError::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        "ThrottlingException" => crate::error::MeterUsageError::new(
            crate::error::MeterUsageErrorKind::ThrottlingError(
                crate::error::ThrottlingError::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        "CustomerNotEntitledException" => crate::error::MeterUsageError::new(
            crate::error::MeterUsageErrorKind::CustomerNotEntitledError(
                crate::error::CustomerNotEntitledError::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        _ => crate::error::MeterUsageError::generic(generic),
    })
}

pub fn parse_meter_usage_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::MeterUsageOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_register_usage_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::RegisterUsageOutput, crate::error::RegisterUsageError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::RegisterUsageError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::RegisterUsageError::generic(generic)),
    };
    Err(match error_code {
        "InvalidProductCodeException" => crate::error::RegisterUsageError::new(
            crate::error::RegisterUsageErrorKind::InvalidProductCodeError(
                crate::error::InvalidProductCodeError::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        "InvalidRegionException" => crate::error::RegisterUsageError::new(
            crate::error::RegisterUsageErrorKind::InvalidRegionError(
                crate::error::InvalidRegionError::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        "InvalidPublicKeyVersionException" => crate::error::RegisterUsageError::new(
            crate::error::RegisterUsageErrorKind::InvalidPublicKeyVersionError(
                crate::error::InvalidPublicKeyVersionError::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        "PlatformNotSupportedException" => crate::error::RegisterUsageError::new(
            crate::error::RegisterUsageErrorKind::PlatformNotSupportedError(
                crate::error::PlatformNotSupportedError::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        "CustomerNotEntitledException" => crate::error::RegisterUsageError::new(
            crate::error::RegisterUsageErrorKind::CustomerNotEntitledError(
                crate::error::CustomerNotEntitledError::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        "ThrottlingException" => crate::error::RegisterUsageError::new(
            crate::error::RegisterUsageErrorKind::ThrottlingError(
                crate::error::ThrottlingError::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        "InternalServiceErrorException" => crate::error::RegisterUsageError::new(
            crate::error::RegisterUsageErrorKind::InternalServiceError(
                crate::error::InternalServiceError::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        "DisabledApiException" => crate::error::RegisterUsageError::new(
            crate::error::RegisterUsageErrorKind::DisabledApiError(
                crate::error::DisabledApiError::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        _ => crate::error::RegisterUsageError::generic(generic),
    })
}

pub fn parse_register_usage_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::RegisterUsageOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_resolve_customer_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ResolveCustomerOutput, crate::error::ResolveCustomerError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::ResolveCustomerError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::ResolveCustomerError::generic(generic)),
    };
    Err(match error_code {
        "InvalidTokenException" => crate::error::ResolveCustomerError::new(
            crate::error::ResolveCustomerErrorKind::InvalidTokenError(
                crate::error::InvalidTokenError::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        "ExpiredTokenException" => crate::error::ResolveCustomerError::new(
            crate::error::ResolveCustomerErrorKind::ExpiredTokenError(
                crate::error::ExpiredTokenError::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        "ThrottlingException" => crate::error::ResolveCustomerError::new(
            crate::error::ResolveCustomerErrorKind::ThrottlingError(
                crate::error::ThrottlingError::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        "InternalServiceErrorException" => crate::error::ResolveCustomerError::new(
            crate::error::ResolveCustomerErrorKind::InternalServiceError(
                crate::error::InternalServiceError::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        "DisabledApiException" => crate::error::ResolveCustomerError::new(
            crate::error::ResolveCustomerErrorKind::DisabledApiError(
                crate::error::DisabledApiError::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        _ => crate::error::ResolveCustomerError::generic(generic),
    })
}

pub fn parse_resolve_customer_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ResolveCustomerOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}
