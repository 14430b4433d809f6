/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_hyper::test_connection::TestConnection;
use aws_hyper::SdkError;
use http::Uri;
use sagemaker::error::{
    CreateTrainingJobErrorKind, DescribeTrainingJobErrorKind, StopLabelingJobErrorKind,
};
use sagemaker::input::{
    AddTagsInput, CreateHyperParameterTuningJobInput, CreateTrainingJobInput, DeleteTagsInput,
    DescribeTrainingJobInput, StopLabelingJobInput,
};
use sagemaker::model::{
    AlgorithmSpecification, AssemblyType, BatchStrategy, CaptureStatus, DebugHookConfig,
    DebugRuleConfiguration, EndpointStatus, ExperimentConfig, HyperParameterAlgorithmSpecification,
    HyperParameterScalingType, HyperParameterTrainingJobDefinition, HyperParameterTuningJobConfig,
    HyperParameterTuningJobObjective, HyperParameterTuningJobObjectiveType,
    HyperParameterTuningJobStrategyType, IntegerParameterRange, MetricData, ParameterRanges,
    ProcessingInstanceType, ResourceConfig, ResourceLimits, RuleEvaluationStatus, S3DataType,
    SecondaryStatus, SortBy, SortOrder, SplitType, StoppingCondition, Tag, TensorBoardOutputConfig,
    TrainingInputMode, TrainingInstanceType, TrainingJobStatus, TransformDataSource,
    TransformInput, TransformInstanceType, TransformOutput, TransformResources,
    TransformS3DataSource, TuningJobCompletionCriteria,
};
use sagemaker::{Client, Config, Credentials, Instant, Region};
use smithy_http::body::SdkBody;

fn conf() -> Config {
    Config::builder()
        .region(Region::new("us-west-2"))
        .credentials_provider(Credentials::from_keys("AKIDEXAMPLE", "secret", None))
        .build()
}

fn request(target: &str, body: &'static str) -> http::Request<SdkBody> {
    http::Request::builder()
        .method("POST")
        .header("content-type", "application/x-amz-json-1.1")
        .header("x-amz-target", target)
        .uri(Uri::from_static("https://api.sagemaker.us-west-2.amazonaws.com/"))
        .body(SdkBody::from(body))
        .unwrap()
}

fn response(status: u16, body: &'static str) -> http::Response<&'static str> {
    http::Response::builder()
        .status(status)
        .header("content-type", "application/x-amz-json-1.1")
        .header("x-amzn-requestid", "d2c9b1d6-1d8e-4b4f-9c4e-2c3c1f1b5a7e")
        .body(body)
        .unwrap()
}

#[tokio::test]
async fn describe_training_job() {
    let conn = TestConnection::new(vec![(
        request(
            "SageMaker.DescribeTrainingJob",
            r#"{"TrainingJobName":"xgboost-2021-01-01"}"#,
        ),
        response(
            200,
            r#"{
                "TrainingJobName": "xgboost-2021-01-01",
                "TrainingJobArn": "arn:aws:sagemaker:us-west-2:123456789012:training-job/xgboost-2021-01-01",
                "TrainingJobStatus": "Completed",
                "SecondaryStatus": "Completed",
                "HyperParameters": {"eta": "0.2", "num_round": "100"},
                "AlgorithmSpecification": {"TrainingImage": "xgboost:1", "TrainingInputMode": "File"},
                "ResourceConfig": {"InstanceType": "ml.m5.xlarge", "InstanceCount": 1, "VolumeSizeInGB": 10},
                "StoppingCondition": {"MaxRuntimeInSeconds": 3600},
                "CreationTime": 1609459200.25,
                "TrainingStartTime": 1609459260,
                "SecondaryStatusTransitions": [
                    {"Status": "Starting", "StartTime": 1609459200.5, "EndTime": 1609459260, "StatusMessage": "Preparing the instances for training"},
                    {"Status": "Completed", "StartTime": 1609459800, "StatusMessage": "Training job completed"}
                ],
                "BillableTimeInSeconds": 540
            }"#,
        ),
    )]);
    let client = Client::from_conf_conn(conf(), conn.clone());
    let output = client
        .describe_training_job()
        .training_job_name("xgboost-2021-01-01")
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(output.training_job_status(), Some(&TrainingJobStatus::Completed));
    assert_eq!(output.secondary_status(), Some(&SecondaryStatus::Completed));
    assert_eq!(
        output.creation_time(),
        Some(&Instant::from_secs_and_nanos(1609459200, 250_000_000))
    );
    assert_eq!(
        output.training_start_time(),
        Some(&Instant::from_epoch_seconds(1609459260))
    );
    assert_eq!(
        output.hyper_parameters().and_then(|params| params.get("eta")),
        Some(&"0.2".to_string())
    );
    assert_eq!(
        output.resource_config(),
        Some(
            &ResourceConfig::builder()
                .instance_type(TrainingInstanceType::MlM5Xlarge)
                .instance_count(1)
                .volume_size_in_gb(10)
                .build()
        )
    );
    let transitions = output.secondary_status_transitions().expect("transitions");
    assert_eq!(transitions.len(), 2);
    assert_eq!(transitions[0].status(), Some(&SecondaryStatus::Starting));
    assert_eq!(
        transitions[0].start_time(),
        Some(&Instant::from_secs_and_nanos(1609459200, 500_000_000))
    );
    assert_eq!(transitions[1].end_time(), None);
    assert_eq!(output.billable_time_in_seconds(), Some(540));
    assert_eq!(output.training_end_time(), None);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn create_training_job_conflicts_are_typed() {
    let conn = TestConnection::new(vec![(
        http::Request::new(SdkBody::empty()),
        response(
            400,
            r#"{"__type":"ResourceInUse","Message":"Training job names must be unique within an AWS account and region"}"#,
        ),
    )]);
    let op = CreateTrainingJobInput::builder()
        .training_job_name("xgboost-2021-01-01")
        .role_arn("arn:aws:iam::123456789012:role/SageMakerRole")
        .algorithm_specification(
            AlgorithmSpecification::builder()
                .training_image("xgboost:1")
                .training_input_mode(TrainingInputMode::File)
                .build(),
        )
        .stopping_condition(StoppingCondition::builder().max_runtime_in_seconds(3600).build())
        .build()
        .make_operation(&conf())
        .unwrap();
    let err = aws_hyper::Client::new(conn)
        .call(op)
        .await
        .expect_err("name in use")
        .into_service_error()
        .expect("service error");
    assert!(err.is_resource_in_use());
    assert_eq!(err.request_id(), Some("d2c9b1d6-1d8e-4b4f-9c4e-2c3c1f1b5a7e"));
    match err.kind {
        CreateTrainingJobErrorKind::ResourceInUse(inner) => assert_eq!(
            inner.message(),
            Some("Training job names must be unique within an AWS account and region")
        ),
        other => panic!("incorrect error kind: {:?}", other),
    }
}

#[tokio::test]
async fn errors_not_modeled_for_the_operation_are_unhandled() {
    let conn = TestConnection::new(vec![(
        http::Request::new(SdkBody::empty()),
        response(400, r#"{"__type":"ResourceInUse","Message":"busy"}"#),
    )]);
    let op = DescribeTrainingJobInput::builder()
        .training_job_name("job")
        .build()
        .make_operation(&conf())
        .unwrap();
    let err = aws_hyper::Client::new(conn)
        .call(op)
        .await
        .expect_err("unexpected error")
        .into_service_error()
        .expect("service error");
    assert_eq!(err.code(), Some("ResourceInUse"));
    assert_eq!(err.message(), Some("busy"));
    assert!(matches!(err.kind, DescribeTrainingJobErrorKind::Unhandled(_)));
}

#[tokio::test]
async fn add_tags() {
    let conn = TestConnection::new(vec![(
        request(
            "SageMaker.AddTags",
            r#"{
                "ResourceArn": "arn:aws:sagemaker:us-west-2:123456789012:notebook-instance/nb",
                "Tags": [{"Key": "team", "Value": "ml"}, {"Key": "stage", "Value": "dev"}]
            }"#,
        ),
        response(200, r#"{"Tags":[{"Key":"team","Value":"ml"},{"Key":"stage","Value":"dev"}]}"#),
    )]);
    let op = AddTagsInput::builder()
        .resource_arn("arn:aws:sagemaker:us-west-2:123456789012:notebook-instance/nb")
        .tags(Tag::builder().key("team").value("ml").build())
        .tags(Tag::builder().key("stage").value("dev").build())
        .build()
        .make_operation(&conf())
        .unwrap();
    let output = aws_hyper::Client::new(conn.clone()).call(op).await.unwrap();
    assert_eq!(output.tags().map(|tags| tags.len()), Some(2));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn empty_response_bodies_parse_as_empty_outputs() {
    let conn = TestConnection::new(vec![(
        request(
            "SageMaker.DeleteTags",
            r#"{"ResourceArn":"arn:aws:sagemaker:us-west-2:123456789012:model/m","TagKeys":["team"]}"#,
        ),
        response(200, ""),
    )]);
    let op = DeleteTagsInput::builder()
        .resource_arn("arn:aws:sagemaker:us-west-2:123456789012:model/m")
        .tag_keys("team")
        .build()
        .make_operation(&conf())
        .unwrap();
    let output = aws_hyper::Client::new(conn.clone()).call(op).await.unwrap();
    assert_eq!(output, sagemaker::output::DeleteTagsOutput::builder().build());
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn list_training_jobs_with_request_credentials() {
    let conn = TestConnection::new(vec![(
        request(
            "SageMaker.ListTrainingJobs",
            r#"{"MaxResults":2,"StatusEquals":"InProgress","SortBy":"CreationTime","SortOrder":"Descending"}"#,
        ),
        response(
            200,
            r#"{
                "TrainingJobSummaries": [
                    {"TrainingJobName": "a", "TrainingJobArn": "arn:a", "CreationTime": 1609459200, "TrainingJobStatus": "InProgress"},
                    {"TrainingJobName": "b", "TrainingJobArn": "arn:b", "CreationTime": 1609459100, "TrainingJobStatus": "InProgress"}
                ],
                "NextToken": "page-2"
            }"#,
        ),
    )]);
    // no client-level credentials: the environment may not have any
    let conf = Config::builder()
        .region(Region::new("us-west-2"))
        .credentials_provider(aws_auth::EnvironmentVariableCredentialsProvider::new_with_env(
            aws_types::os_shim_internal::Env::from_slice(&[]),
        ))
        .build();
    let client = Client::from_conf_conn(conf, conn.clone());
    let output = client
        .list_training_jobs()
        .max_results(2)
        .status_equals(TrainingJobStatus::InProgress)
        .sort_by(SortBy::CreationTime)
        .sort_order(SortOrder::Descending)
        .credentials_override(Credentials::from_keys("AKIDEXAMPLE", "secret", None))
        .send()
        .await
        .expect("request credentials are used");
    let names: Vec<_> = output
        .training_job_summaries()
        .unwrap_or_default()
        .iter()
        .filter_map(|summary| summary.training_job_name())
        .collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(output.next_token(), Some("page-2"));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn missing_credentials_fail_before_dispatch() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let conf = Config::builder()
        .region(Region::new("us-west-2"))
        .credentials_provider(aws_auth::EnvironmentVariableCredentialsProvider::new_with_env(
            aws_types::os_shim_internal::Env::from_slice(&[]),
        ))
        .build();
    let err = Client::from_conf_conn(conf, conn.clone())
        .list_training_jobs()
        .send()
        .await
        .expect_err("no credentials");
    assert!(matches!(err, SdkError::ConstructionFailure(_)), "{:?}", err);
    assert!(conn.requests().is_empty());
}

#[tokio::test]
async fn service_errors_convert_to_the_service_error() {
    let conn = TestConnection::new(vec![(
        http::Request::new(SdkBody::empty()),
        response(400, r#"{"__type":"ResourceNotFound","Message":"Requested resource not found."}"#),
    )]);
    let err: sagemaker::Error = Client::from_conf_conn(conf(), conn)
        .describe_training_job()
        .training_job_name("missing")
        .send()
        .await
        .unwrap_err()
        .into();
    match err {
        sagemaker::Error::ResourceNotFound(inner) => {
            assert_eq!(inner.to_string(), "ResourceNotFound: Requested resource not found.")
        }
        other => panic!("incorrect error: {:?}", other),
    }
}

#[tokio::test]
async fn malformed_success_bodies_are_response_errors() {
    let conn = TestConnection::new(vec![(
        http::Request::new(SdkBody::empty()),
        response(200, "<html>not json</html>"),
    )]);
    let err = Client::from_conf_conn(conf(), conn)
        .describe_training_job()
        .training_job_name("xgboost-2021-01-01")
        .send()
        .await
        .expect_err("body is not json");
    match err {
        SdkError::ResponseError { raw, .. } => assert_eq!(raw.status(), 200),
        other => panic!("expected a response error, got {:?}", other),
    }
}

#[tokio::test]
async fn create_training_job_with_debugger_and_experiment() {
    let conn = TestConnection::new(vec![(
        request(
            "SageMaker.CreateTrainingJob",
            r#"{
                "TrainingJobName": "resnet-debug",
                "RoleArn": "arn:aws:iam::123456789012:role/SageMakerRole",
                "AlgorithmSpecification": {"TrainingImage": "resnet:1", "TrainingInputMode": "File"},
                "StoppingCondition": {"MaxRuntimeInSeconds": 3600},
                "DebugHookConfig": {
                    "S3OutputPath": "s3://bucket/debug",
                    "HookParameters": {"save_interval": "100"}
                },
                "DebugRuleConfigurations": [{
                    "RuleConfigurationName": "VanishingGradient",
                    "RuleEvaluatorImage": "rules:latest",
                    "InstanceType": "ml.t3.medium",
                    "VolumeSizeInGB": 5,
                    "RuleParameters": {"rule_to_invoke": "VanishingGradient"}
                }],
                "TensorBoardOutputConfig": {"S3OutputPath": "s3://bucket/tensorboard"},
                "ExperimentConfig": {"ExperimentName": "resnet", "TrialName": "trial-1"}
            }"#,
        ),
        response(
            200,
            r#"{"TrainingJobArn":"arn:aws:sagemaker:us-west-2:123456789012:training-job/resnet-debug"}"#,
        ),
    )]);
    let output = Client::from_conf_conn(conf(), conn.clone())
        .create_training_job()
        .training_job_name("resnet-debug")
        .role_arn("arn:aws:iam::123456789012:role/SageMakerRole")
        .algorithm_specification(
            AlgorithmSpecification::builder()
                .training_image("resnet:1")
                .training_input_mode(TrainingInputMode::File)
                .build(),
        )
        .stopping_condition(StoppingCondition::builder().max_runtime_in_seconds(3600).build())
        .debug_hook_config(
            DebugHookConfig::builder()
                .s3_output_path("s3://bucket/debug")
                .hook_parameters("save_interval", "100")
                .build(),
        )
        .debug_rule_configurations(
            DebugRuleConfiguration::builder()
                .rule_configuration_name("VanishingGradient")
                .rule_evaluator_image("rules:latest")
                .instance_type(ProcessingInstanceType::MlT3Medium)
                .volume_size_in_gb(5)
                .rule_parameters("rule_to_invoke", "VanishingGradient")
                .build(),
        )
        .tensor_board_output_config(
            TensorBoardOutputConfig::builder()
                .s3_output_path("s3://bucket/tensorboard")
                .build(),
        )
        .experiment_config(
            ExperimentConfig::builder()
                .experiment_name("resnet")
                .trial_name("trial-1")
                .build(),
        )
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(
        output.training_job_arn(),
        Some("arn:aws:sagemaker:us-west-2:123456789012:training-job/resnet-debug")
    );
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn describe_training_job_final_metrics_and_rule_evaluations() {
    let conn = TestConnection::new(vec![(
        http::Request::new(SdkBody::empty()),
        response(
            200,
            r#"{
                "TrainingJobName": "resnet-debug",
                "TrainingJobStatus": "Completed",
                "FinalMetricDataList": [
                    {"MetricName": "train:loss", "Value": 0.25, "Timestamp": 1609459800},
                    {"MetricName": "validation:accuracy", "Value": 0.875, "Timestamp": 1609459800.5}
                ],
                "DebugRuleEvaluationStatuses": [{
                    "RuleConfigurationName": "VanishingGradient",
                    "RuleEvaluationJobArn": "arn:aws:sagemaker:us-west-2:123456789012:processing-job/vanishing",
                    "RuleEvaluationStatus": "NoIssuesFound",
                    "LastModifiedTime": 1609459900
                }],
                "ExperimentConfig": {"ExperimentName": "resnet", "TrialName": "trial-1"}
            }"#,
        ),
    )]);
    let output = Client::from_conf_conn(conf(), conn)
        .describe_training_job()
        .training_job_name("resnet-debug")
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(
        output.final_metric_data_list(),
        Some(
            &[
                MetricData::builder()
                    .metric_name("train:loss")
                    .value(0.25)
                    .timestamp(Instant::from_epoch_seconds(1609459800))
                    .build(),
                MetricData::builder()
                    .metric_name("validation:accuracy")
                    .value(0.875)
                    .timestamp(Instant::from_secs_and_nanos(1609459800, 500_000_000))
                    .build(),
            ][..]
        )
    );
    let statuses = output.debug_rule_evaluation_statuses().expect("rule statuses");
    assert_eq!(
        statuses[0].rule_evaluation_status(),
        Some(&RuleEvaluationStatus::NoIssuesFound)
    );
    assert_eq!(
        statuses[0].last_modified_time(),
        Some(&Instant::from_epoch_seconds(1609459900))
    );
    assert_eq!(
        output.experiment_config().and_then(|config| config.trial_name()),
        Some("trial-1")
    );
    assert_eq!(output.debug_hook_config(), None);
}

#[tokio::test]
async fn create_transform_job() {
    let conn = TestConnection::new(vec![(
        request(
            "SageMaker.CreateTransformJob",
            r#"{
                "TransformJobName": "batch-scoring",
                "ModelName": "xgboost-model",
                "MaxPayloadInMB": 6,
                "BatchStrategy": "MultiRecord",
                "Environment": {"LOG_LEVEL": "info"},
                "TransformInput": {
                    "DataSource": {"S3DataSource": {"S3DataType": "S3Prefix", "S3Uri": "s3://bucket/input"}},
                    "ContentType": "text/csv",
                    "SplitType": "Line"
                },
                "TransformOutput": {"S3OutputPath": "s3://bucket/output", "AssembleWith": "Line"},
                "TransformResources": {"InstanceType": "ml.m5.xlarge", "InstanceCount": 2}
            }"#,
        ),
        response(
            200,
            r#"{"TransformJobArn":"arn:aws:sagemaker:us-west-2:123456789012:transform-job/batch-scoring"}"#,
        ),
    )]);
    let output = Client::from_conf_conn(conf(), conn.clone())
        .create_transform_job()
        .transform_job_name("batch-scoring")
        .model_name("xgboost-model")
        .max_payload_in_mb(6)
        .batch_strategy(BatchStrategy::MultiRecord)
        .environment("LOG_LEVEL", "info")
        .transform_input(
            TransformInput::builder()
                .data_source(
                    TransformDataSource::builder()
                        .s3_data_source(
                            TransformS3DataSource::builder()
                                .s3_data_type(S3DataType::S3Prefix)
                                .s3_uri("s3://bucket/input")
                                .build(),
                        )
                        .build(),
                )
                .content_type("text/csv")
                .split_type(SplitType::Line)
                .build(),
        )
        .transform_output(
            TransformOutput::builder()
                .s3_output_path("s3://bucket/output")
                .assemble_with(AssemblyType::Line)
                .build(),
        )
        .transform_resources(
            TransformResources::builder()
                .instance_type(TransformInstanceType::MlM5Xlarge)
                .instance_count(2)
                .build(),
        )
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(
        output.transform_job_arn(),
        Some("arn:aws:sagemaker:us-west-2:123456789012:transform-job/batch-scoring")
    );
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn create_hyper_parameter_tuning_job() {
    let conn = TestConnection::new(vec![(
        request(
            "SageMaker.CreateHyperParameterTuningJob",
            r#"{
                "HyperParameterTuningJobName": "xgboost-tuning",
                "HyperParameterTuningJobConfig": {
                    "Strategy": "Bayesian",
                    "HyperParameterTuningJobObjective": {"Type": "Maximize", "MetricName": "validation:auc"},
                    "ResourceLimits": {"MaxNumberOfTrainingJobs": 20, "MaxParallelTrainingJobs": 2},
                    "ParameterRanges": {
                        "IntegerParameterRanges": [
                            {"Name": "max_depth", "MinValue": "1", "MaxValue": "10", "ScalingType": "Linear"}
                        ]
                    },
                    "TuningJobCompletionCriteria": {"TargetObjectiveMetricValue": 0.75}
                },
                "TrainingJobDefinition": {
                    "StaticHyperParameters": {"objective": "binary:logistic"},
                    "AlgorithmSpecification": {"TrainingImage": "xgboost:1", "TrainingInputMode": "File"},
                    "RoleArn": "arn:aws:iam::123456789012:role/SageMakerRole",
                    "StoppingCondition": {"MaxRuntimeInSeconds": 3600}
                }
            }"#,
        ),
        response(
            200,
            r#"{"HyperParameterTuningJobArn":"arn:aws:sagemaker:us-west-2:123456789012:hyper-parameter-tuning-job/xgboost-tuning"}"#,
        ),
    )]);
    let op = CreateHyperParameterTuningJobInput::builder()
        .hyper_parameter_tuning_job_name("xgboost-tuning")
        .hyper_parameter_tuning_job_config(
            HyperParameterTuningJobConfig::builder()
                .strategy(HyperParameterTuningJobStrategyType::Bayesian)
                .hyper_parameter_tuning_job_objective(
                    HyperParameterTuningJobObjective::builder()
                        .r#type(HyperParameterTuningJobObjectiveType::Maximize)
                        .metric_name("validation:auc")
                        .build(),
                )
                .resource_limits(
                    ResourceLimits::builder()
                        .max_number_of_training_jobs(20)
                        .max_parallel_training_jobs(2)
                        .build(),
                )
                .parameter_ranges(
                    ParameterRanges::builder()
                        .integer_parameter_ranges(
                            IntegerParameterRange::builder()
                                .name("max_depth")
                                .min_value("1")
                                .max_value("10")
                                .scaling_type(HyperParameterScalingType::Linear)
                                .build(),
                        )
                        .build(),
                )
                .tuning_job_completion_criteria(
                    TuningJobCompletionCriteria::builder()
                        .target_objective_metric_value(0.75)
                        .build(),
                )
                .build(),
        )
        .training_job_definition(
            HyperParameterTrainingJobDefinition::builder()
                .static_hyper_parameters("objective", "binary:logistic")
                .algorithm_specification(
                    HyperParameterAlgorithmSpecification::builder()
                        .training_image("xgboost:1")
                        .training_input_mode(TrainingInputMode::File)
                        .build(),
                )
                .role_arn("arn:aws:iam::123456789012:role/SageMakerRole")
                .stopping_condition(StoppingCondition::builder().max_runtime_in_seconds(3600).build())
                .build(),
        )
        .build()
        .make_operation(&conf())
        .unwrap();
    let output = aws_hyper::Client::new(conn.clone()).call(op).await.unwrap();
    assert_eq!(
        output.hyper_parameter_tuning_job_arn(),
        Some("arn:aws:sagemaker:us-west-2:123456789012:hyper-parameter-tuning-job/xgboost-tuning")
    );
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn stop_labeling_job_not_found_is_typed() {
    let conn = TestConnection::new(vec![(
        http::Request::new(SdkBody::empty()),
        response(400, r#"{"__type":"ResourceNotFound","Message":"Could not find labeling job"}"#),
    )]);
    let op = StopLabelingJobInput::builder()
        .labeling_job_name("missing")
        .build()
        .make_operation(&conf())
        .unwrap();
    let err = aws_hyper::Client::new(conn)
        .call(op)
        .await
        .expect_err("job does not exist")
        .into_service_error()
        .expect("service error");
    assert!(err.is_resource_not_found());
    assert!(matches!(err.kind, StopLabelingJobErrorKind::ResourceNotFound(_)));
}

#[tokio::test]
async fn describe_endpoint() {
    let conn = TestConnection::new(vec![(
        request("SageMaker.DescribeEndpoint", r#"{"EndpointName":"fraud-detector"}"#),
        response(
            200,
            r#"{
                "EndpointName": "fraud-detector",
                "EndpointArn": "arn:aws:sagemaker:us-west-2:123456789012:endpoint/fraud-detector",
                "EndpointConfigName": "fraud-detector-v2",
                "EndpointStatus": "InService",
                "ProductionVariants": [{
                    "VariantName": "primary",
                    "DeployedImages": [{
                        "SpecifiedImage": "xgboost:1",
                        "ResolvedImage": "xgboost@sha256:0123",
                        "ResolutionTime": 1609459200
                    }],
                    "CurrentWeight": 1.0,
                    "DesiredWeight": 0.5,
                    "CurrentInstanceCount": 2,
                    "DesiredInstanceCount": 2
                }],
                "DataCaptureConfig": {"EnableCapture": true, "CaptureStatus": "Started", "CurrentSamplingPercentage": 50},
                "CreationTime": 1609459100,
                "LastModifiedTime": 1609459300
            }"#,
        ),
    )]);
    let output = Client::from_conf_conn(conf(), conn.clone())
        .describe_endpoint()
        .endpoint_name("fraud-detector")
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(output.endpoint_status(), Some(&EndpointStatus::InService));
    let variant = &output.production_variants().expect("variants")[0];
    assert_eq!(variant.current_weight(), Some(1.0));
    assert_eq!(variant.desired_weight(), Some(0.5));
    assert_eq!(
        variant.deployed_images().map(|images| images[0].resolution_time()),
        Some(Some(&Instant::from_epoch_seconds(1609459200)))
    );
    let capture = output.data_capture_config().expect("capture config");
    assert_eq!(capture.capture_status(), Some(&CaptureStatus::Started));
    assert_eq!(capture.enable_capture(), Some(true));
    conn.assert_requests_match(&[]);
}
