/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use sagemaker::input::CreateTrainingJobInput;
use sagemaker::model::{
    AlgorithmSpecification, InstanceType, MetricData, ProductionVariant, ResourceConfig,
    StoppingCondition, Tag, TrainingInputMode, TrainingInstanceType, TrainingJobStatus,
};
use smithy_types::Instant;
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn tag(key: &str, value: &str) -> Tag {
    Tag::builder().key(key).value(value).build()
}

fn training_job() -> sagemaker::input::create_training_job_input::Builder {
    CreateTrainingJobInput::builder()
        .training_job_name("xgboost-2021-01-01")
        .role_arn("arn:aws:iam::123456789012:role/SageMakerRole")
        .algorithm_specification(
            AlgorithmSpecification::builder()
                .training_image("123456789012.dkr.ecr.us-west-2.amazonaws.com/xgboost:1")
                .training_input_mode(TrainingInputMode::File)
                .build(),
        )
        .resource_config(
            ResourceConfig::builder()
                .instance_type(TrainingInstanceType::MlM5Xlarge)
                .instance_count(1)
                .volume_size_in_gb(10)
                .build(),
        )
        .stopping_condition(StoppingCondition::builder().max_runtime_in_seconds(3600).build())
}

#[test]
fn map_setters_insert_entries() {
    let input = training_job()
        .hyper_parameters("num_round", "100")
        .hyper_parameters("eta", "0.2")
        .hyper_parameters("num_round", "50")
        .build();
    let mut expected = BTreeMap::new();
    expected.insert("eta".to_string(), "0.2".to_string());
    expected.insert("num_round".to_string(), "50".to_string());
    assert_eq!(input.hyper_parameters(), Some(&expected));
}

#[test]
fn list_setters_append() {
    let input = training_job()
        .tags(tag("team", "ml"))
        .tags(tag("stage", "dev"))
        .build();
    assert_eq!(
        input.tags(),
        Some(&[tag("team", "ml"), tag("stage", "dev")][..])
    );
}

#[test]
fn nested_structures_compare_by_value() {
    let a = training_job().hyper_parameters("eta", "0.2").build();
    let b = training_job().hyper_parameters("eta", "0.2").build();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    let smaller = training_job()
        .hyper_parameters("eta", "0.2")
        .resource_config(
            ResourceConfig::builder()
                .instance_type(TrainingInstanceType::MlM5Xlarge)
                .instance_count(1)
                .volume_size_in_gb(5)
                .build(),
        )
        .build();
    assert_ne!(a, smaller);
}

#[test]
fn cloned_values_are_independent() {
    let original = training_job().tags(tag("team", "ml")).build();
    let mut copy = original.clone();
    copy.tags = Some(vec![tag("team", "infra")]);
    assert_eq!(original.tags(), Some(&[tag("team", "ml")][..]));
    assert_ne!(original, copy);
}

#[test]
fn instance_types_parse_from_wire_values() {
    assert_eq!(InstanceType::from("ml.t2.medium"), InstanceType::MlT2Medium);
    assert_eq!(InstanceType::MlT2Medium.as_str(), "ml.t2.medium");
    assert_eq!(
        "ml.m5.xlarge".parse::<TrainingInstanceType>().unwrap(),
        TrainingInstanceType::MlM5Xlarge
    );
}

#[test]
fn unknown_enum_values_round_trip() {
    let status: TrainingJobStatus = serde_json::from_str(r#""Pending""#).unwrap();
    assert_eq!(status, TrainingJobStatus::Unknown("Pending".to_string()));
    assert_eq!(status.as_str(), "Pending");
    assert_eq!(serde_json::to_string(&status).unwrap(), r#""Pending""#);

    let known: TrainingJobStatus = serde_json::from_str(r#""InProgress""#).unwrap();
    assert_eq!(known, TrainingJobStatus::InProgress);
}

#[test]
fn unset_fields_are_not_serialized() {
    let tag = Tag::builder().key("team").build();
    assert_eq!(
        serde_json::to_value(&tag).unwrap(),
        serde_json::json!({ "Key": "team" })
    );
}

fn metric(value: f32) -> MetricData {
    MetricData::builder()
        .metric_name("train:loss")
        .value(value)
        .timestamp(Instant::from_epoch_seconds(1609459800))
        .build()
}

#[test]
fn float_members_compare_by_bit_pattern() {
    assert_eq!(metric(0.25), metric(0.25));
    assert_eq!(hash_of(&metric(0.25)), hash_of(&metric(0.25)));
    assert_ne!(metric(0.25), metric(0.5));

    // NaN is equal to itself so the value can live in hashed collections
    assert_eq!(metric(f32::NAN), metric(f32::NAN));
    assert_eq!(hash_of(&metric(f32::NAN)), hash_of(&metric(f32::NAN)));
    assert_ne!(metric(0.0), metric(-0.0));

    let unset = MetricData::builder().metric_name("train:loss").build();
    assert_ne!(unset, metric(0.0));
    assert_eq!(unset.value(), None);
}

#[test]
fn structures_holding_floats_are_hashable() {
    let variant = |weight: f32| {
        ProductionVariant::builder()
            .variant_name("primary")
            .model_name("xgboost-model")
            .initial_variant_weight(weight)
            .build()
    };
    let mut seen = std::collections::HashSet::new();
    assert!(seen.insert(variant(1.0)));
    assert!(!seen.insert(variant(1.0)));
    assert!(seen.insert(variant(0.5)));
}
