/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Meters usage for up to 25 customers of a SaaS product in a single call.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct BatchMeterUsage {
    _private: (),
}
impl BatchMeterUsage {
    /// Creates a new builder-style object to manufacture [`BatchMeterUsageInput`](crate::input::BatchMeterUsageInput)
    pub fn builder() -> crate::input::batch_meter_usage_input::Builder {
        crate::input::batch_meter_usage_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for BatchMeterUsage {
    type Output = std::result::Result<
        crate::output::BatchMeterUsageOutput,
        smithy_http::result::ParseFailure<crate::error::BatchMeterUsageError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_batch_meter_usage_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_batch_meter_usage_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Emits a single metering record for an EC2 based product.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct MeterUsage {
    _private: (),
}
impl MeterUsage {
    /// Creates a new builder-style object to manufacture [`MeterUsageInput`](crate::input::MeterUsageInput)
    pub fn builder() -> crate::input::meter_usage_input::Builder {
        crate::input::meter_usage_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for MeterUsage {
    type Output = std::result::Result<
        crate::output::MeterUsageOutput,
        smithy_http::result::ParseFailure<crate::error::MeterUsageError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_meter_usage_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_meter_usage_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Verifies that the customer running a paid container product has a valid subscription.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct RegisterUsage {
    _private: (),
}
impl RegisterUsage {
    /// Creates a new builder-style object to manufacture [`RegisterUsageInput`](crate::input::RegisterUsageInput)
    pub fn builder() -> crate::input::register_usage_input::Builder {
        crate::input::register_usage_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for RegisterUsage {
    type Output = std::result::Result<
        crate::output::RegisterUsageOutput,
        smithy_http::result::ParseFailure<crate::error::RegisterUsageError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_register_usage_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_register_usage_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Exchanges a registration token for a `CustomerIdentifier` and product code.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ResolveCustomer {
    _private: (),
}
impl ResolveCustomer {
    /// Creates a new builder-style object to manufacture [`ResolveCustomerInput`](crate::input::ResolveCustomerInput)
    pub fn builder() -> crate::input::resolve_customer_input::Builder {
        crate::input::resolve_customer_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ResolveCustomer {
    type Output = std::result::Result<
        crate::output::ResolveCustomerOutput,
        smithy_http::result::ParseFailure<crate::error::ResolveCustomerError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_resolve_customer_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_resolve_customer_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}
