/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use marketplacemetering::input::{BatchMeterUsageInput, MeterUsageInput};
use marketplacemetering::model::{UsageRecord, UsageRecordResult, UsageRecordResultStatus};
use marketplacemetering::Instant;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn record(customer: &str) -> UsageRecord {
    UsageRecord::builder()
        .timestamp(Instant::from_epoch_seconds(1_600_000_000))
        .customer_identifier(customer)
        .dimension("seats")
        .quantity(5)
        .build()
}

#[test]
fn fluent_list_setters_append() {
    let input = BatchMeterUsageInput::builder()
        .usage_records(record("r1"))
        .usage_records(record("r2"))
        .build();
    assert_eq!(input.usage_records(), Some(&[record("r1"), record("r2")][..]));
}

#[test]
fn fluent_list_setter_extends_a_replaced_list() {
    let input = BatchMeterUsageInput::builder()
        .set_usage_records(Some(vec![record("r1")]))
        .usage_records(record("r2"))
        .build();
    assert_eq!(input.usage_records().map(|records| records.len()), Some(2));
}

#[test]
fn setting_none_leaves_the_field_empty() {
    let input = BatchMeterUsageInput::builder()
        .usage_records(record("r1"))
        .set_usage_records(None)
        .build();
    assert_eq!(input.usage_records(), None);
    assert_eq!(input.usage_records, None);
}

#[test]
fn stored_lists_are_owned() {
    let mut records = vec![record("r1")];
    let input = BatchMeterUsageInput::builder()
        .set_usage_records(Some(records.clone()))
        .build();
    records.push(record("r2"));
    records[0] = record("changed");
    assert_eq!(input.usage_records(), Some(&[record("r1")][..]));
}

#[test]
fn getters_return_what_was_set() {
    let at = Instant::from_secs_and_nanos(1_600_000_000, 250_000_000);
    let input = MeterUsageInput::builder()
        .product_code("prod")
        .timestamp(at)
        .usage_dimension("hosts")
        .usage_quantity(42)
        .dry_run(true)
        .build();
    assert_eq!(input.product_code(), Some("prod"));
    assert_eq!(input.timestamp(), Some(&at));
    assert_eq!(input.usage_dimension(), Some("hosts"));
    assert_eq!(input.usage_quantity(), Some(42));
    assert_eq!(input.dry_run(), Some(true));
}

#[test]
fn equal_values_from_different_builders_hash_equally() {
    let fluent = UsageRecordResult::builder()
        .usage_record(record("r1"))
        .metering_record_id("id")
        .status(UsageRecordResultStatus::DuplicateRecord)
        .build();
    let replaced = UsageRecordResult::builder()
        .set_status(Some(UsageRecordResultStatus::from("DuplicateRecord")))
        .set_metering_record_id(Some("id".to_string()))
        .set_usage_record(Some(record("r1")))
        .build();
    assert_eq!(fluent, replaced);
    assert_eq!(replaced, fluent);
    assert_eq!(fluent, fluent.clone());
    assert_eq!(hash_of(&fluent), hash_of(&replaced));

    let different = UsageRecordResult::builder()
        .usage_record(record("r2"))
        .metering_record_id("id")
        .status(UsageRecordResultStatus::DuplicateRecord)
        .build();
    assert_ne!(fluent, different);
}

#[test]
fn unknown_enum_values_are_preserved() {
    let status = UsageRecordResultStatus::from("PartiallyProcessed");
    assert_eq!(
        status,
        UsageRecordResultStatus::Unknown("PartiallyProcessed".to_string())
    );
    assert_eq!(status.as_str(), "PartiallyProcessed");
    assert_eq!(
        serde_json::to_string(&status).unwrap(),
        r#""PartiallyProcessed""#
    );
    assert_eq!(
        "CustomerNotSubscribed".parse::<UsageRecordResultStatus>().unwrap(),
        UsageRecordResultStatus::CustomerNotSubscribed
    );
}

#[test]
fn inputs_serialize_with_wire_names() {
    let input = MeterUsageInput::builder()
        .product_code("prod")
        .timestamp(Instant::from_secs_and_nanos(1_600_000_000, 500_000_000))
        .usage_quantity(1)
        .build();
    assert_eq!(
        serde_json::to_value(&input).unwrap(),
        serde_json::json!({
            "ProductCode": "prod",
            "Timestamp": 1600000000.5,
            "UsageQuantity": 1
        })
    );
}
