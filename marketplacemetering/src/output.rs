/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct BatchMeterUsageOutput {
    #[serde(rename = "Results")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub results: std::option::Option<std::vec::Vec<crate::model::UsageRecordResult>>,
    /// Records that were not processed and may be retried.
    #[serde(rename = "UnprocessedRecords")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub unprocessed_records: std::option::Option<std::vec::Vec<crate::model::UsageRecord>>,
}
impl BatchMeterUsageOutput {
    pub fn results(&self) -> std::option::Option<&[crate::model::UsageRecordResult]> {
        self.results.as_deref()
    }

    pub fn unprocessed_records(&self) -> std::option::Option<&[crate::model::UsageRecord]> {
        self.unprocessed_records.as_deref()
    }
}
/// See [`BatchMeterUsageOutput`](crate::output::BatchMeterUsageOutput)
pub mod batch_meter_usage_output {
    /// A builder for [`BatchMeterUsageOutput`](crate::output::BatchMeterUsageOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        results: std::option::Option<std::vec::Vec<crate::model::UsageRecordResult>>,
        unprocessed_records: std::option::Option<std::vec::Vec<crate::model::UsageRecord>>,
    }
    impl Builder {
        /// Appends an item to `Results`.
        ///
        /// To override the contents of this collection use [`set_results`](Self::set_results).
        pub fn results(mut self, input: impl Into<crate::model::UsageRecordResult>) -> Self {
            let mut v = self.results.unwrap_or_default();
            v.push(input.into());
            self.results = Some(v);
            self
        }
        pub fn set_results(mut self, input: std::option::Option<std::vec::Vec<crate::model::UsageRecordResult>>) -> Self {
            self.results = input;
            self
        }
        /// Appends an item to `UnprocessedRecords`.
        ///
        /// To override the contents of this collection use [`set_unprocessed_records`](Self::set_unprocessed_records).
        pub fn unprocessed_records(mut self, input: impl Into<crate::model::UsageRecord>) -> Self {
            let mut v = self.unprocessed_records.unwrap_or_default();
            v.push(input.into());
            self.unprocessed_records = Some(v);
            self
        }
        pub fn set_unprocessed_records(mut self, input: std::option::Option<std::vec::Vec<crate::model::UsageRecord>>) -> Self {
            self.unprocessed_records = input;
            self
        }
        /// Consumes the builder and constructs a [`BatchMeterUsageOutput`](crate::output::BatchMeterUsageOutput)
        pub fn build(self) -> crate::output::BatchMeterUsageOutput {
            crate::output::BatchMeterUsageOutput {
                results: self.results,
                unprocessed_records: self.unprocessed_records,
            }
        }
    }
}
impl BatchMeterUsageOutput {
    /// Creates a new builder-style object to manufacture [`BatchMeterUsageOutput`](crate::output::BatchMeterUsageOutput)
    pub fn builder() -> crate::output::batch_meter_usage_output::Builder {
        crate::output::batch_meter_usage_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct MeterUsageOutput {
    #[serde(rename = "MeteringRecordId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub metering_record_id: std::option::Option<std::string::String>,
}
impl MeterUsageOutput {
    pub fn metering_record_id(&self) -> std::option::Option<&str> {
        self.metering_record_id.as_deref()
    }
}
/// See [`MeterUsageOutput`](crate::output::MeterUsageOutput)
pub mod meter_usage_output {
    /// A builder for [`MeterUsageOutput`](crate::output::MeterUsageOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        metering_record_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn metering_record_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.metering_record_id = Some(input.into());
            self
        }
        pub fn set_metering_record_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.metering_record_id = input;
            self
        }
        /// Consumes the builder and constructs a [`MeterUsageOutput`](crate::output::MeterUsageOutput)
        pub fn build(self) -> crate::output::MeterUsageOutput {
            crate::output::MeterUsageOutput {
                metering_record_id: self.metering_record_id,
            }
        }
    }
}
impl MeterUsageOutput {
    /// Creates a new builder-style object to manufacture [`MeterUsageOutput`](crate::output::MeterUsageOutput)
    pub fn builder() -> crate::output::meter_usage_output::Builder {
        crate::output::meter_usage_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct RegisterUsageOutput {
    #[serde(rename = "PublicKeyRotationTimestamp")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub public_key_rotation_timestamp: std::option::Option<smithy_types::Instant>,
    /// JWT token signed by AWS Marketplace.
    #[serde(rename = "Signature")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub signature: std::option::Option<std::string::String>,
}
impl RegisterUsageOutput {
    pub fn public_key_rotation_timestamp(&self) -> std::option::Option<&smithy_types::Instant> {
        self.public_key_rotation_timestamp.as_ref()
    }

    pub fn signature(&self) -> std::option::Option<&str> {
        self.signature.as_deref()
    }
}
/// See [`RegisterUsageOutput`](crate::output::RegisterUsageOutput)
pub mod register_usage_output {
    /// A builder for [`RegisterUsageOutput`](crate::output::RegisterUsageOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        public_key_rotation_timestamp: std::option::Option<smithy_types::Instant>,
        signature: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn public_key_rotation_timestamp(mut self, input: smithy_types::Instant) -> Self {
            self.public_key_rotation_timestamp = Some(input);
            self
        }
        pub fn set_public_key_rotation_timestamp(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.public_key_rotation_timestamp = input;
            self
        }
        pub fn signature(mut self, input: impl Into<std::string::String>) -> Self {
            self.signature = Some(input.into());
            self
        }
        pub fn set_signature(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.signature = input;
            self
        }
        /// Consumes the builder and constructs a [`RegisterUsageOutput`](crate::output::RegisterUsageOutput)
        pub fn build(self) -> crate::output::RegisterUsageOutput {
            crate::output::RegisterUsageOutput {
                public_key_rotation_timestamp: self.public_key_rotation_timestamp,
                signature: self.signature,
            }
        }
    }
}
impl RegisterUsageOutput {
    /// Creates a new builder-style object to manufacture [`RegisterUsageOutput`](crate::output::RegisterUsageOutput)
    pub fn builder() -> crate::output::register_usage_output::Builder {
        crate::output::register_usage_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ResolveCustomerOutput {
    #[serde(rename = "CustomerIdentifier")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub customer_identifier: std::option::Option<std::string::String>,
    #[serde(rename = "ProductCode")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub product_code: std::option::Option<std::string::String>,
}
impl ResolveCustomerOutput {
    pub fn customer_identifier(&self) -> std::option::Option<&str> {
        self.customer_identifier.as_deref()
    }

    pub fn product_code(&self) -> std::option::Option<&str> {
        self.product_code.as_deref()
    }
}
/// See [`ResolveCustomerOutput`](crate::output::ResolveCustomerOutput)
pub mod resolve_customer_output {
    /// A builder for [`ResolveCustomerOutput`](crate::output::ResolveCustomerOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        customer_identifier: std::option::Option<std::string::String>,
        product_code: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn customer_identifier(mut self, input: impl Into<std::string::String>) -> Self {
            self.customer_identifier = Some(input.into());
            self
        }
        pub fn set_customer_identifier(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.customer_identifier = input;
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
        /// Consumes the builder and constructs a [`ResolveCustomerOutput`](crate::output::ResolveCustomerOutput)
        pub fn build(self) -> crate::output::ResolveCustomerOutput {
            crate::output::ResolveCustomerOutput {
                customer_identifier: self.customer_identifier,
                product_code: self.product_code,
            }
        }
    }
}
impl ResolveCustomerOutput {
    /// Creates a new builder-style object to manufacture [`ResolveCustomerOutput`](crate::output::ResolveCustomerOutput)
    pub fn builder() -> crate::output::resolve_customer_output::Builder {
        crate::output::resolve_customer_output::Builder::default()
    }
}
