/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// A usage record for one customer, dimension and hour.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct UsageRecord {
    /// Start of the hour the usage is reported for, in UTC.
    #[serde(rename = "Timestamp")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub timestamp: std::option::Option<smithy_types::Instant>,
    /// The `CustomerIdentifier` obtained through `ResolveCustomer`.
    #[serde(rename = "CustomerIdentifier")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub customer_identifier: std::option::Option<std::string::String>,
    /// The dimension of the product the usage is reported for.
    #[serde(rename = "Dimension")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub dimension: std::option::Option<std::string::String>,
    /// The quantity of usage consumed by the customer in the hour.
    #[serde(rename = "Quantity")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub quantity: std::option::Option<i32>,
}
impl UsageRecord {
    pub fn timestamp(&self) -> std::option::Option<&smithy_types::Instant> {
        self.timestamp.as_ref()
    }

    pub fn customer_identifier(&self) -> std::option::Option<&str> {
        self.customer_identifier.as_deref()
    }

    pub fn dimension(&self) -> std::option::Option<&str> {
        self.dimension.as_deref()
    }

    pub fn quantity(&self) -> std::option::Option<i32> {
        self.quantity
    }
}
/// See [`UsageRecord`](crate::model::UsageRecord)
pub mod usage_record {
    /// A builder for [`UsageRecord`](crate::model::UsageRecord)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        timestamp: std::option::Option<smithy_types::Instant>,
        customer_identifier: std::option::Option<std::string::String>,
        dimension: std::option::Option<std::string::String>,
        quantity: std::option::Option<i32>,
    }
    impl Builder {
        pub fn timestamp(mut self, input: smithy_types::Instant) -> Self {
            self.timestamp = Some(input);
            self
        }
        pub fn set_timestamp(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.timestamp = input;
            self
        }
        pub fn customer_identifier(mut self, input: impl Into<std::string::String>) -> Self {
            self.customer_identifier = Some(input.into());
            self
        }
        pub fn set_customer_identifier(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.customer_identifier = input;
            self
        }
        pub fn dimension(mut self, input: impl Into<std::string::String>) -> Self {
            self.dimension = Some(input.into());
            self
        }
        pub fn set_dimension(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.dimension = input;
            self
        }
        pub fn quantity(mut self, input: i32) -> Self {
            self.quantity = Some(input);
            self
        }
        pub fn set_quantity(mut self, input: std::option::Option<i32>) -> Self {
            self.quantity = input;
            self
        }
        /// Consumes the builder and constructs a [`UsageRecord`](crate::model::UsageRecord)
        pub fn build(self) -> crate::model::UsageRecord {
            crate::model::UsageRecord {
                timestamp: self.timestamp,
                customer_identifier: self.customer_identifier,
                dimension: self.dimension,
                quantity: self.quantity,
            }
        }
    }
}
impl UsageRecord {
    /// Creates a new builder-style object to manufacture [`UsageRecord`](crate::model::UsageRecord)
    pub fn builder() -> crate::model::usage_record::Builder {
        crate::model::usage_record::Builder::default()
    }
}

/// The outcome of metering a single `UsageRecord` in a `BatchMeterUsage` call.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct UsageRecordResult {
    #[serde(rename = "UsageRecord")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub usage_record: std::option::Option<crate::model::UsageRecord>,
    /// Unique identifier of the metering event.
    #[serde(rename = "MeteringRecordId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub metering_record_id: std::option::Option<std::string::String>,
    #[serde(rename = "Status")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::UsageRecordResultStatus>,
}
impl UsageRecordResult {
    pub fn usage_record(&self) -> std::option::Option<&crate::model::UsageRecord> {
        self.usage_record.as_ref()
    }

    pub fn metering_record_id(&self) -> std::option::Option<&str> {
        self.metering_record_id.as_deref()
    }

    pub fn status(&self) -> std::option::Option<&crate::model::UsageRecordResultStatus> {
        self.status.as_ref()
    }
}
/// See [`UsageRecordResult`](crate::model::UsageRecordResult)
pub mod usage_record_result {
    /// A builder for [`UsageRecordResult`](crate::model::UsageRecordResult)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        usage_record: std::option::Option<crate::model::UsageRecord>,
        metering_record_id: std::option::Option<std::string::String>,
        status: std::option::Option<crate::model::UsageRecordResultStatus>,
    }
    impl Builder {
        pub fn usage_record(mut self, input: crate::model::UsageRecord) -> Self {
            self.usage_record = Some(input);
            self
        }
        pub fn set_usage_record(mut self, input: std::option::Option<crate::model::UsageRecord>) -> Self {
            self.usage_record = input;
            self
        }
        pub fn metering_record_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.metering_record_id = Some(input.into());
            self
        }
        pub fn set_metering_record_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.metering_record_id = input;
            self
        }
        pub fn status(mut self, input: crate::model::UsageRecordResultStatus) -> Self {
            self.status = Some(input);
            self
        }
        pub fn set_status(mut self, input: std::option::Option<crate::model::UsageRecordResultStatus>) -> Self {
            self.status = input;
            self
        }
        /// Consumes the builder and constructs a [`UsageRecordResult`](crate::model::UsageRecordResult)
        pub fn build(self) -> crate::model::UsageRecordResult {
            crate::model::UsageRecordResult {
                usage_record: self.usage_record,
                metering_record_id: self.metering_record_id,
                status: self.status,
            }
        }
    }
}
impl UsageRecordResult {
    /// Creates a new builder-style object to manufacture [`UsageRecordResult`](crate::model::UsageRecordResult)
    pub fn builder() -> crate::model::usage_record_result::Builder {
        crate::model::usage_record_result::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum UsageRecordResultStatus {
    Success,
    CustomerNotSubscribed,
    DuplicateRecord,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for UsageRecordResultStatus {
    fn from(s: &str) -> Self {
        match s {
            "Success" => UsageRecordResultStatus::Success,
            "CustomerNotSubscribed" => UsageRecordResultStatus::CustomerNotSubscribed,
            "DuplicateRecord" => UsageRecordResultStatus::DuplicateRecord,
            other => UsageRecordResultStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for UsageRecordResultStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(UsageRecordResultStatus::from(s))
    }
}
impl UsageRecordResultStatus {
    pub fn as_str(&self) -> &str {
        match self {
            UsageRecordResultStatus::Success => "Success",
            UsageRecordResultStatus::CustomerNotSubscribed => "CustomerNotSubscribed",
            UsageRecordResultStatus::DuplicateRecord => "DuplicateRecord",
            UsageRecordResultStatus::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for UsageRecordResultStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for UsageRecordResultStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for UsageRecordResultStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}
