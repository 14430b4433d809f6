/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// The training algorithm: either a registry path to a training image or an algorithm resource name.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct AlgorithmSpecification {
    #[serde(rename = "TrainingImage")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub training_image: std::option::Option<std::string::String>,
    #[serde(rename = "AlgorithmName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub algorithm_name: std::option::Option<std::string::String>,
    #[serde(rename = "TrainingInputMode")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub training_input_mode: std::option::Option<crate::model::TrainingInputMode>,
    #[serde(rename = "MetricDefinitions")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub metric_definitions: std::option::Option<std::vec::Vec<crate::model::MetricDefinition>>,
    #[serde(rename = "EnableSageMakerMetricsTimeSeries")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub enable_sage_maker_metrics_time_series: std::option::Option<bool>,
}
impl AlgorithmSpecification {
    pub fn training_image(&self) -> std::option::Option<&str> {
        self.training_image.as_deref()
    }

    pub fn algorithm_name(&self) -> std::option::Option<&str> {
        self.algorithm_name.as_deref()
    }

    pub fn training_input_mode(&self) -> std::option::Option<&crate::model::TrainingInputMode> {
        self.training_input_mode.as_ref()
    }

    pub fn metric_definitions(&self) -> std::option::Option<&[crate::model::MetricDefinition]> {
        self.metric_definitions.as_deref()
    }

    pub fn enable_sage_maker_metrics_time_series(&self) -> std::option::Option<bool> {
        self.enable_sage_maker_metrics_time_series
    }
}
/// See [`AlgorithmSpecification`](crate::model::AlgorithmSpecification)
pub mod algorithm_specification {
    /// A builder for [`AlgorithmSpecification`](crate::model::AlgorithmSpecification)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        training_image: std::option::Option<std::string::String>,
        algorithm_name: std::option::Option<std::string::String>,
        training_input_mode: std::option::Option<crate::model::TrainingInputMode>,
        metric_definitions: std::option::Option<std::vec::Vec<crate::model::MetricDefinition>>,
        enable_sage_maker_metrics_time_series: std::option::Option<bool>,
    }
    impl Builder {
        pub fn training_image(mut self, input: impl Into<std::string::String>) -> Self {
            self.training_image = Some(input.into());
            self
        }
        pub fn set_training_image(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.training_image = input;
            self
        }
        pub fn algorithm_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.algorithm_name = Some(input.into());
            self
        }
        pub fn set_algorithm_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.algorithm_name = input;
            self
        }
        pub fn training_input_mode(mut self, input: crate::model::TrainingInputMode) -> Self {
            self.training_input_mode = Some(input);
            self
        }
        pub fn set_training_input_mode(mut self, input: std::option::Option<crate::model::TrainingInputMode>) -> Self {
            self.training_input_mode = input;
            self
        }
        /// Appends an item to `MetricDefinitions`.
        ///
        /// To override the contents of this collection use [`set_metric_definitions`](Self::set_metric_definitions).
        pub fn metric_definitions(mut self, input: impl Into<crate::model::MetricDefinition>) -> Self {
            let mut v = self.metric_definitions.unwrap_or_default();
            v.push(input.into());
            self.metric_definitions = Some(v);
            self
        }
        pub fn set_metric_definitions(mut self, input: std::option::Option<std::vec::Vec<crate::model::MetricDefinition>>) -> Self {
            self.metric_definitions = input;
            self
        }
        pub fn enable_sage_maker_metrics_time_series(mut self, input: bool) -> Self {
            self.enable_sage_maker_metrics_time_series = Some(input);
            self
        }
        pub fn set_enable_sage_maker_metrics_time_series(mut self, input: std::option::Option<bool>) -> Self {
            self.enable_sage_maker_metrics_time_series = input;
            self
        }
        /// Consumes the builder and constructs a [`AlgorithmSpecification`](crate::model::AlgorithmSpecification)
        pub fn build(self) -> crate::model::AlgorithmSpecification {
            crate::model::AlgorithmSpecification {
                training_image: self.training_image,
                algorithm_name: self.algorithm_name,
                training_input_mode: self.training_input_mode,
                metric_definitions: self.metric_definitions,
                enable_sage_maker_metrics_time_series: self.enable_sage_maker_metrics_time_series,
            }
        }
    }
}
impl AlgorithmSpecification {
    /// Creates a new builder-style object to manufacture [`AlgorithmSpecification`](crate::model::AlgorithmSpecification)
    pub fn builder() -> crate::model::algorithm_specification::Builder {
        crate::model::algorithm_specification::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct AnnotationConsolidationConfig {
    #[serde(rename = "AnnotationConsolidationLambdaArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub annotation_consolidation_lambda_arn: std::option::Option<std::string::String>,
}
impl AnnotationConsolidationConfig {
    pub fn annotation_consolidation_lambda_arn(&self) -> std::option::Option<&str> {
        self.annotation_consolidation_lambda_arn.as_deref()
    }
}
/// See [`AnnotationConsolidationConfig`](crate::model::AnnotationConsolidationConfig)
pub mod annotation_consolidation_config {
    /// A builder for [`AnnotationConsolidationConfig`](crate::model::AnnotationConsolidationConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        annotation_consolidation_lambda_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn annotation_consolidation_lambda_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.annotation_consolidation_lambda_arn = Some(input.into());
            self
        }
        pub fn set_annotation_consolidation_lambda_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.annotation_consolidation_lambda_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`AnnotationConsolidationConfig`](crate::model::AnnotationConsolidationConfig)
        pub fn build(self) -> crate::model::AnnotationConsolidationConfig {
            crate::model::AnnotationConsolidationConfig {
                annotation_consolidation_lambda_arn: self.annotation_consolidation_lambda_arn,
            }
        }
    }
}
impl AnnotationConsolidationConfig {
    /// Creates a new builder-style object to manufacture [`AnnotationConsolidationConfig`](crate::model::AnnotationConsolidationConfig)
    pub fn builder() -> crate::model::annotation_consolidation_config::Builder {
        crate::model::annotation_consolidation_config::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct CaptureContentTypeHeader {
    #[serde(rename = "CsvContentTypes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub csv_content_types: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "JsonContentTypes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub json_content_types: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl CaptureContentTypeHeader {
    pub fn csv_content_types(&self) -> std::option::Option<&[std::string::String]> {
        self.csv_content_types.as_deref()
    }

    pub fn json_content_types(&self) -> std::option::Option<&[std::string::String]> {
        self.json_content_types.as_deref()
    }
}
/// See [`CaptureContentTypeHeader`](crate::model::CaptureContentTypeHeader)
pub mod capture_content_type_header {
    /// A builder for [`CaptureContentTypeHeader`](crate::model::CaptureContentTypeHeader)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        csv_content_types: std::option::Option<std::vec::Vec<std::string::String>>,
        json_content_types: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        /// Appends an item to `CsvContentTypes`.
        ///
        /// To override the contents of this collection use [`set_csv_content_types`](Self::set_csv_content_types).
        pub fn csv_content_types(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.csv_content_types.unwrap_or_default();
            v.push(input.into());
            self.csv_content_types = Some(v);
            self
        }
        pub fn set_csv_content_types(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.csv_content_types = input;
            self
        }
        /// Appends an item to `JsonContentTypes`.
        ///
        /// To override the contents of this collection use [`set_json_content_types`](Self::set_json_content_types).
        pub fn json_content_types(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.json_content_types.unwrap_or_default();
            v.push(input.into());
            self.json_content_types = Some(v);
            self
        }
        pub fn set_json_content_types(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.json_content_types = input;
            self
        }
        /// Consumes the builder and constructs a [`CaptureContentTypeHeader`](crate::model::CaptureContentTypeHeader)
        pub fn build(self) -> crate::model::CaptureContentTypeHeader {
            crate::model::CaptureContentTypeHeader {
                csv_content_types: self.csv_content_types,
                json_content_types: self.json_content_types,
            }
        }
    }
}
impl CaptureContentTypeHeader {
    /// Creates a new builder-style object to manufacture [`CaptureContentTypeHeader`](crate::model::CaptureContentTypeHeader)
    pub fn builder() -> crate::model::capture_content_type_header::Builder {
        crate::model::capture_content_type_header::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct CaptureOption {
    #[serde(rename = "CaptureMode")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub capture_mode: std::option::Option<crate::model::CaptureMode>,
}
impl CaptureOption {
    pub fn capture_mode(&self) -> std::option::Option<&crate::model::CaptureMode> {
        self.capture_mode.as_ref()
    }
}
/// See [`CaptureOption`](crate::model::CaptureOption)
pub mod capture_option {
    /// A builder for [`CaptureOption`](crate::model::CaptureOption)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        capture_mode: std::option::Option<crate::model::CaptureMode>,
    }
    impl Builder {
        pub fn capture_mode(mut self, input: crate::model::CaptureMode) -> Self {
            self.capture_mode = Some(input);
            self
        }
        pub fn set_capture_mode(mut self, input: std::option::Option<crate::model::CaptureMode>) -> Self {
            self.capture_mode = input;
            self
        }
        /// Consumes the builder and constructs a [`CaptureOption`](crate::model::CaptureOption)
        pub fn build(self) -> crate::model::CaptureOption {
            crate::model::CaptureOption {
                capture_mode: self.capture_mode,
            }
        }
    }
}
impl CaptureOption {
    /// Creates a new builder-style object to manufacture [`CaptureOption`](crate::model::CaptureOption)
    pub fn builder() -> crate::model::capture_option::Builder {
        crate::model::capture_option::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct CategoricalParameterRange {
    #[serde(rename = "Name")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "Values")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub values: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl CategoricalParameterRange {
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }

    pub fn values(&self) -> std::option::Option<&[std::string::String]> {
        self.values.as_deref()
    }
}
/// See [`CategoricalParameterRange`](crate::model::CategoricalParameterRange)
pub mod categorical_parameter_range {
    /// A builder for [`CategoricalParameterRange`](crate::model::CategoricalParameterRange)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        name: std::option::Option<std::string::String>,
        values: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        /// Appends an item to `Values`.
        ///
        /// To override the contents of this collection use [`set_values`](Self::set_values).
        pub fn values(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.values.unwrap_or_default();
            v.push(input.into());
            self.values = Some(v);
            self
        }
        pub fn set_values(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.values = input;
            self
        }
        /// Consumes the builder and constructs a [`CategoricalParameterRange`](crate::model::CategoricalParameterRange)
        pub fn build(self) -> crate::model::CategoricalParameterRange {
            crate::model::CategoricalParameterRange {
                name: self.name,
                values: self.values,
            }
        }
    }
}
impl CategoricalParameterRange {
    /// Creates a new builder-style object to manufacture [`CategoricalParameterRange`](crate::model::CategoricalParameterRange)
    pub fn builder() -> crate::model::categorical_parameter_range::Builder {
        crate::model::categorical_parameter_range::Builder::default()
    }
}

/// A named input data channel for a training job.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct Channel {
    #[serde(rename = "ChannelName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub channel_name: std::option::Option<std::string::String>,
    #[serde(rename = "DataSource")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data_source: std::option::Option<crate::model::DataSource>,
    /// MIME type of the data.
    #[serde(rename = "ContentType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub content_type: std::option::Option<std::string::String>,
    #[serde(rename = "CompressionType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compression_type: std::option::Option<crate::model::CompressionType>,
    #[serde(rename = "RecordWrapperType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub record_wrapper_type: std::option::Option<crate::model::RecordWrapper>,
    #[serde(rename = "InputMode")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub input_mode: std::option::Option<crate::model::TrainingInputMode>,
    #[serde(rename = "ShuffleConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub shuffle_config: std::option::Option<crate::model::ShuffleConfig>,
}
impl Channel {
    pub fn channel_name(&self) -> std::option::Option<&str> {
        self.channel_name.as_deref()
    }

    pub fn data_source(&self) -> std::option::Option<&crate::model::DataSource> {
        self.data_source.as_ref()
    }

    pub fn content_type(&self) -> std::option::Option<&str> {
        self.content_type.as_deref()
    }

    pub fn compression_type(&self) -> std::option::Option<&crate::model::CompressionType> {
        self.compression_type.as_ref()
    }

    pub fn record_wrapper_type(&self) -> std::option::Option<&crate::model::RecordWrapper> {
        self.record_wrapper_type.as_ref()
    }

    pub fn input_mode(&self) -> std::option::Option<&crate::model::TrainingInputMode> {
        self.input_mode.as_ref()
    }

    pub fn shuffle_config(&self) -> std::option::Option<&crate::model::ShuffleConfig> {
        self.shuffle_config.as_ref()
    }
}
/// See [`Channel`](crate::model::Channel)
pub mod channel {
    /// A builder for [`Channel`](crate::model::Channel)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        channel_name: std::option::Option<std::string::String>,
        data_source: std::option::Option<crate::model::DataSource>,
        content_type: std::option::Option<std::string::String>,
        compression_type: std::option::Option<crate::model::CompressionType>,
        record_wrapper_type: std::option::Option<crate::model::RecordWrapper>,
        input_mode: std::option::Option<crate::model::TrainingInputMode>,
        shuffle_config: std::option::Option<crate::model::ShuffleConfig>,
    }
    impl Builder {
        pub fn channel_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.channel_name = Some(input.into());
            self
        }
        pub fn set_channel_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.channel_name = input;
            self
        }
        pub fn data_source(mut self, input: crate::model::DataSource) -> Self {
            self.data_source = Some(input);
            self
        }
        pub fn set_data_source(mut self, input: std::option::Option<crate::model::DataSource>) -> Self {
            self.data_source = input;
            self
        }
        pub fn content_type(mut self, input: impl Into<std::string::String>) -> Self {
            self.content_type = Some(input.into());
            self
        }
        pub fn set_content_type(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.content_type = input;
            self
        }
        pub fn compression_type(mut self, input: crate::model::CompressionType) -> Self {
            self.compression_type = Some(input);
            self
        }
        pub fn set_compression_type(mut self, input: std::option::Option<crate::model::CompressionType>) -> Self {
            self.compression_type = input;
            self
        }
        pub fn record_wrapper_type(mut self, input: crate::model::RecordWrapper) -> Self {
            self.record_wrapper_type = Some(input);
            self
        }
        pub fn set_record_wrapper_type(mut self, input: std::option::Option<crate::model::RecordWrapper>) -> Self {
            self.record_wrapper_type = input;
            self
        }
        pub fn input_mode(mut self, input: crate::model::TrainingInputMode) -> Self {
            self.input_mode = Some(input);
            self
        }
        pub fn set_input_mode(mut self, input: std::option::Option<crate::model::TrainingInputMode>) -> Self {
            self.input_mode = input;
            self
        }
        pub fn shuffle_config(mut self, input: crate::model::ShuffleConfig) -> Self {
            self.shuffle_config = Some(input);
            self
        }
        pub fn set_shuffle_config(mut self, input: std::option::Option<crate::model::ShuffleConfig>) -> Self {
            self.shuffle_config = input;
            self
        }
        /// Consumes the builder and constructs a [`Channel`](crate::model::Channel)
        pub fn build(self) -> crate::model::Channel {
            crate::model::Channel {
                channel_name: self.channel_name,
                data_source: self.data_source,
                content_type: self.content_type,
                compression_type: self.compression_type,
                record_wrapper_type: self.record_wrapper_type,
                input_mode: self.input_mode,
                shuffle_config: self.shuffle_config,
            }
        }
    }
}
impl Channel {
    /// Creates a new builder-style object to manufacture [`Channel`](crate::model::Channel)
    pub fn builder() -> crate::model::channel::Builder {
        crate::model::channel::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct CheckpointConfig {
    #[serde(rename = "S3Uri")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub s3_uri: std::option::Option<std::string::String>,
    #[serde(rename = "LocalPath")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub local_path: std::option::Option<std::string::String>,
}
impl CheckpointConfig {
    pub fn s3_uri(&self) -> std::option::Option<&str> {
        self.s3_uri.as_deref()
    }

    pub fn local_path(&self) -> std::option::Option<&str> {
        self.local_path.as_deref()
    }
}
/// See [`CheckpointConfig`](crate::model::CheckpointConfig)
pub mod checkpoint_config {
    /// A builder for [`CheckpointConfig`](crate::model::CheckpointConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        s3_uri: std::option::Option<std::string::String>,
        local_path: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn s3_uri(mut self, input: impl Into<std::string::String>) -> Self {
            self.s3_uri = Some(input.into());
            self
        }
        pub fn set_s3_uri(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.s3_uri = input;
            self
        }
        pub fn local_path(mut self, input: impl Into<std::string::String>) -> Self {
            self.local_path = Some(input.into());
            self
        }
        pub fn set_local_path(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.local_path = input;
            self
        }
        /// Consumes the builder and constructs a [`CheckpointConfig`](crate::model::CheckpointConfig)
        pub fn build(self) -> crate::model::CheckpointConfig {
            crate::model::CheckpointConfig {
                s3_uri: self.s3_uri,
                local_path: self.local_path,
            }
        }
    }
}
impl CheckpointConfig {
    /// Creates a new builder-style object to manufacture [`CheckpointConfig`](crate::model::CheckpointConfig)
    pub fn builder() -> crate::model::checkpoint_config::Builder {
        crate::model::checkpoint_config::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct CollectionConfiguration {
    #[serde(rename = "CollectionName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub collection_name: std::option::Option<std::string::String>,
    #[serde(rename = "CollectionParameters")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub collection_parameters: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>,
}
impl CollectionConfiguration {
    pub fn collection_name(&self) -> std::option::Option<&str> {
        self.collection_name.as_deref()
    }

    pub fn collection_parameters(&self) -> std::option::Option<&std::collections::BTreeMap<std::string::String, std::string::String>> {
        self.collection_parameters.as_ref()
    }
}
/// See [`CollectionConfiguration`](crate::model::CollectionConfiguration)
pub mod collection_configuration {
    /// A builder for [`CollectionConfiguration`](crate::model::CollectionConfiguration)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        collection_name: std::option::Option<std::string::String>,
        collection_parameters: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        pub fn collection_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.collection_name = Some(input.into());
            self
        }
        pub fn set_collection_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.collection_name = input;
            self
        }
        /// Adds a key-value pair to `CollectionParameters`.
        ///
        /// To override the contents of this collection use [`set_collection_parameters`](Self::set_collection_parameters).
        pub fn collection_parameters(mut self, k: impl Into<std::string::String>, v: impl Into<std::string::String>) -> Self {
            let mut hash_map = self.collection_parameters.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.collection_parameters = Some(hash_map);
            self
        }
        pub fn set_collection_parameters(mut self, input: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>) -> Self {
            self.collection_parameters = input;
            self
        }
        /// Consumes the builder and constructs a [`CollectionConfiguration`](crate::model::CollectionConfiguration)
        pub fn build(self) -> crate::model::CollectionConfiguration {
            crate::model::CollectionConfiguration {
                collection_name: self.collection_name,
                collection_parameters: self.collection_parameters,
            }
        }
    }
}
impl CollectionConfiguration {
    /// Creates a new builder-style object to manufacture [`CollectionConfiguration`](crate::model::CollectionConfiguration)
    pub fn builder() -> crate::model::collection_configuration::Builder {
        crate::model::collection_configuration::Builder::default()
    }
}

/// A Docker container that serves a model.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ContainerDefinition {
    #[serde(rename = "ContainerHostname")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub container_hostname: std::option::Option<std::string::String>,
    #[serde(rename = "Image")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image: std::option::Option<std::string::String>,
    #[serde(rename = "Mode")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub mode: std::option::Option<crate::model::ContainerMode>,
    /// S3 path of the model artifacts.
    #[serde(rename = "ModelDataUrl")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub model_data_url: std::option::Option<std::string::String>,
    /// Environment variables set in the container.
    #[serde(rename = "Environment")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub environment: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>,
    #[serde(rename = "ModelPackageName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub model_package_name: std::option::Option<std::string::String>,
}
impl ContainerDefinition {
    pub fn container_hostname(&self) -> std::option::Option<&str> {
        self.container_hostname.as_deref()
    }

    pub fn image(&self) -> std::option::Option<&str> {
        self.image.as_deref()
    }

    pub fn mode(&self) -> std::option::Option<&crate::model::ContainerMode> {
        self.mode.as_ref()
    }

    pub fn model_data_url(&self) -> std::option::Option<&str> {
        self.model_data_url.as_deref()
    }

    pub fn environment(&self) -> std::option::Option<&std::collections::BTreeMap<std::string::String, std::string::String>> {
        self.environment.as_ref()
    }

    pub fn model_package_name(&self) -> std::option::Option<&str> {
        self.model_package_name.as_deref()
    }
}
/// See [`ContainerDefinition`](crate::model::ContainerDefinition)
pub mod container_definition {
    /// A builder for [`ContainerDefinition`](crate::model::ContainerDefinition)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        container_hostname: std::option::Option<std::string::String>,
        image: std::option::Option<std::string::String>,
        mode: std::option::Option<crate::model::ContainerMode>,
        model_data_url: std::option::Option<std::string::String>,
        environment: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>,
        model_package_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn container_hostname(mut self, input: impl Into<std::string::String>) -> Self {
            self.container_hostname = Some(input.into());
            self
        }
        pub fn set_container_hostname(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.container_hostname = input;
            self
        }
        pub fn image(mut self, input: impl Into<std::string::String>) -> Self {
            self.image = Some(input.into());
            self
        }
        pub fn set_image(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image = input;
            self
        }
        pub fn mode(mut self, input: crate::model::ContainerMode) -> Self {
            self.mode = Some(input);
            self
        }
        pub fn set_mode(mut self, input: std::option::Option<crate::model::ContainerMode>) -> Self {
            self.mode = input;
            self
        }
        pub fn model_data_url(mut self, input: impl Into<std::string::String>) -> Self {
            self.model_data_url = Some(input.into());
            self
        }
        pub fn set_model_data_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.model_data_url = input;
            self
        }
        /// Adds a key-value pair to `Environment`.
        ///
        /// To override the contents of this collection use [`set_environment`](Self::set_environment).
        pub fn environment(mut self, k: impl Into<std::string::String>, v: impl Into<std::string::String>) -> Self {
            let mut hash_map = self.environment.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.environment = Some(hash_map);
            self
        }
        pub fn set_environment(mut self, input: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>) -> Self {
            self.environment = input;
            self
        }
        pub fn model_package_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.model_package_name = Some(input.into());
            self
        }
        pub fn set_model_package_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.model_package_name = input;
            self
        }
        /// Consumes the builder and constructs a [`ContainerDefinition`](crate::model::ContainerDefinition)
        pub fn build(self) -> crate::model::ContainerDefinition {
            crate::model::ContainerDefinition {
                container_hostname: self.container_hostname,
                image: self.image,
                mode: self.mode,
                model_data_url: self.model_data_url,
                environment: self.environment,
                model_package_name: self.model_package_name,
            }
        }
    }
}
impl ContainerDefinition {
    /// Creates a new builder-style object to manufacture [`ContainerDefinition`](crate::model::ContainerDefinition)
    pub fn builder() -> crate::model::container_definition::Builder {
        crate::model::container_definition::Builder::default()
    }
}

/// Bounds are sent as strings, the way the service expects them.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ContinuousParameterRange {
    #[serde(rename = "Name")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "MinValue")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub min_value: std::option::Option<std::string::String>,
    #[serde(rename = "MaxValue")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_value: std::option::Option<std::string::String>,
    #[serde(rename = "ScalingType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scaling_type: std::option::Option<crate::model::HyperParameterScalingType>,
}
impl ContinuousParameterRange {
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }

    pub fn min_value(&self) -> std::option::Option<&str> {
        self.min_value.as_deref()
    }

    pub fn max_value(&self) -> std::option::Option<&str> {
        self.max_value.as_deref()
    }

    pub fn scaling_type(&self) -> std::option::Option<&crate::model::HyperParameterScalingType> {
        self.scaling_type.as_ref()
    }
}
/// See [`ContinuousParameterRange`](crate::model::ContinuousParameterRange)
pub mod continuous_parameter_range {
    /// A builder for [`ContinuousParameterRange`](crate::model::ContinuousParameterRange)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        name: std::option::Option<std::string::String>,
        min_value: std::option::Option<std::string::String>,
        max_value: std::option::Option<std::string::String>,
        scaling_type: std::option::Option<crate::model::HyperParameterScalingType>,
    }
    impl Builder {
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn min_value(mut self, input: impl Into<std::string::String>) -> Self {
            self.min_value = Some(input.into());
            self
        }
        pub fn set_min_value(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.min_value = input;
            self
        }
        pub fn max_value(mut self, input: impl Into<std::string::String>) -> Self {
            self.max_value = Some(input.into());
            self
        }
        pub fn set_max_value(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.max_value = input;
            self
        }
        pub fn scaling_type(mut self, input: crate::model::HyperParameterScalingType) -> Self {
            self.scaling_type = Some(input);
            self
        }
        pub fn set_scaling_type(mut self, input: std::option::Option<crate::model::HyperParameterScalingType>) -> Self {
            self.scaling_type = input;
            self
        }
        /// Consumes the builder and constructs a [`ContinuousParameterRange`](crate::model::ContinuousParameterRange)
        pub fn build(self) -> crate::model::ContinuousParameterRange {
            crate::model::ContinuousParameterRange {
                name: self.name,
                min_value: self.min_value,
                max_value: self.max_value,
                scaling_type: self.scaling_type,
            }
        }
    }
}
impl ContinuousParameterRange {
    /// Creates a new builder-style object to manufacture [`ContinuousParameterRange`](crate::model::ContinuousParameterRange)
    pub fn builder() -> crate::model::continuous_parameter_range::Builder {
        crate::model::continuous_parameter_range::Builder::default()
    }
}

/// Captures endpoint requests and responses to S3.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DataCaptureConfig {
    #[serde(rename = "EnableCapture")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub enable_capture: std::option::Option<bool>,
    #[serde(rename = "InitialSamplingPercentage")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub initial_sampling_percentage: std::option::Option<i32>,
    #[serde(rename = "DestinationS3Uri")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub destination_s3_uri: std::option::Option<std::string::String>,
    #[serde(rename = "KmsKeyId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key_id: std::option::Option<std::string::String>,
    #[serde(rename = "CaptureOptions")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub capture_options: std::option::Option<std::vec::Vec<crate::model::CaptureOption>>,
    #[serde(rename = "CaptureContentTypeHeader")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub capture_content_type_header: std::option::Option<crate::model::CaptureContentTypeHeader>,
}
impl DataCaptureConfig {
    pub fn enable_capture(&self) -> std::option::Option<bool> {
        self.enable_capture
    }

    pub fn initial_sampling_percentage(&self) -> std::option::Option<i32> {
        self.initial_sampling_percentage
    }

    pub fn destination_s3_uri(&self) -> std::option::Option<&str> {
        self.destination_s3_uri.as_deref()
    }

    pub fn kms_key_id(&self) -> std::option::Option<&str> {
        self.kms_key_id.as_deref()
    }

    pub fn capture_options(&self) -> std::option::Option<&[crate::model::CaptureOption]> {
        self.capture_options.as_deref()
    }

    pub fn capture_content_type_header(&self) -> std::option::Option<&crate::model::CaptureContentTypeHeader> {
        self.capture_content_type_header.as_ref()
    }
}
/// See [`DataCaptureConfig`](crate::model::DataCaptureConfig)
pub mod data_capture_config {
    /// A builder for [`DataCaptureConfig`](crate::model::DataCaptureConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        enable_capture: std::option::Option<bool>,
        initial_sampling_percentage: std::option::Option<i32>,
        destination_s3_uri: std::option::Option<std::string::String>,
        kms_key_id: std::option::Option<std::string::String>,
        capture_options: std::option::Option<std::vec::Vec<crate::model::CaptureOption>>,
        capture_content_type_header: std::option::Option<crate::model::CaptureContentTypeHeader>,
    }
    impl Builder {
        pub fn enable_capture(mut self, input: bool) -> Self {
            self.enable_capture = Some(input);
            self
        }
        pub fn set_enable_capture(mut self, input: std::option::Option<bool>) -> Self {
            self.enable_capture = input;
            self
        }
        pub fn initial_sampling_percentage(mut self, input: i32) -> Self {
            self.initial_sampling_percentage = Some(input);
            self
        }
        pub fn set_initial_sampling_percentage(mut self, input: std::option::Option<i32>) -> Self {
            self.initial_sampling_percentage = input;
            self
        }
        pub fn destination_s3_uri(mut self, input: impl Into<std::string::String>) -> Self {
            self.destination_s3_uri = Some(input.into());
            self
        }
        pub fn set_destination_s3_uri(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.destination_s3_uri = input;
            self
        }
        pub fn kms_key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.kms_key_id = Some(input.into());
            self
        }
        pub fn set_kms_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.kms_key_id = input;
            self
        }
        /// Appends an item to `CaptureOptions`.
        ///
        /// To override the contents of this collection use [`set_capture_options`](Self::set_capture_options).
        pub fn capture_options(mut self, input: impl Into<crate::model::CaptureOption>) -> Self {
            let mut v = self.capture_options.unwrap_or_default();
            v.push(input.into());
            self.capture_options = Some(v);
            self
        }
        pub fn set_capture_options(mut self, input: std::option::Option<std::vec::Vec<crate::model::CaptureOption>>) -> Self {
            self.capture_options = input;
            self
        }
        pub fn capture_content_type_header(mut self, input: crate::model::CaptureContentTypeHeader) -> Self {
            self.capture_content_type_header = Some(input);
            self
        }
        pub fn set_capture_content_type_header(mut self, input: std::option::Option<crate::model::CaptureContentTypeHeader>) -> Self {
            self.capture_content_type_header = input;
            self
        }
        /// Consumes the builder and constructs a [`DataCaptureConfig`](crate::model::DataCaptureConfig)
        pub fn build(self) -> crate::model::DataCaptureConfig {
            crate::model::DataCaptureConfig {
                enable_capture: self.enable_capture,
                initial_sampling_percentage: self.initial_sampling_percentage,
                destination_s3_uri: self.destination_s3_uri,
                kms_key_id: self.kms_key_id,
                capture_options: self.capture_options,
                capture_content_type_header: self.capture_content_type_header,
            }
        }
    }
}
impl DataCaptureConfig {
    /// Creates a new builder-style object to manufacture [`DataCaptureConfig`](crate::model::DataCaptureConfig)
    pub fn builder() -> crate::model::data_capture_config::Builder {
        crate::model::data_capture_config::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DataCaptureConfigSummary {
    #[serde(rename = "EnableCapture")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub enable_capture: std::option::Option<bool>,
    #[serde(rename = "CaptureStatus")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub capture_status: std::option::Option<crate::model::CaptureStatus>,
    #[serde(rename = "CurrentSamplingPercentage")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub current_sampling_percentage: std::option::Option<i32>,
    #[serde(rename = "DestinationS3Uri")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub destination_s3_uri: std::option::Option<std::string::String>,
    #[serde(rename = "KmsKeyId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key_id: std::option::Option<std::string::String>,
}
impl DataCaptureConfigSummary {
    pub fn enable_capture(&self) -> std::option::Option<bool> {
        self.enable_capture
    }

    pub fn capture_status(&self) -> std::option::Option<&crate::model::CaptureStatus> {
        self.capture_status.as_ref()
    }

    pub fn current_sampling_percentage(&self) -> std::option::Option<i32> {
        self.current_sampling_percentage
    }

    pub fn destination_s3_uri(&self) -> std::option::Option<&str> {
        self.destination_s3_uri.as_deref()
    }

    pub fn kms_key_id(&self) -> std::option::Option<&str> {
        self.kms_key_id.as_deref()
    }
}
/// See [`DataCaptureConfigSummary`](crate::model::DataCaptureConfigSummary)
pub mod data_capture_config_summary {
    /// A builder for [`DataCaptureConfigSummary`](crate::model::DataCaptureConfigSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        enable_capture: std::option::Option<bool>,
        capture_status: std::option::Option<crate::model::CaptureStatus>,
        current_sampling_percentage: std::option::Option<i32>,
        destination_s3_uri: std::option::Option<std::string::String>,
        kms_key_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn enable_capture(mut self, input: bool) -> Self {
            self.enable_capture = Some(input);
            self
        }
        pub fn set_enable_capture(mut self, input: std::option::Option<bool>) -> Self {
            self.enable_capture = input;
            self
        }
        pub fn capture_status(mut self, input: crate::model::CaptureStatus) -> Self {
            self.capture_status = Some(input);
            self
        }
        pub fn set_capture_status(mut self, input: std::option::Option<crate::model::CaptureStatus>) -> Self {
            self.capture_status = input;
            self
        }
        pub fn current_sampling_percentage(mut self, input: i32) -> Self {
            self.current_sampling_percentage = Some(input);
            self
        }
        pub fn set_current_sampling_percentage(mut self, input: std::option::Option<i32>) -> Self {
            self.current_sampling_percentage = input;
            self
        }
        pub fn destination_s3_uri(mut self, input: impl Into<std::string::String>) -> Self {
            self.destination_s3_uri = Some(input.into());
            self
        }
        pub fn set_destination_s3_uri(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.destination_s3_uri = input;
            self
        }
        pub fn kms_key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.kms_key_id = Some(input.into());
            self
        }
        pub fn set_kms_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.kms_key_id = input;
            self
        }
        /// Consumes the builder and constructs a [`DataCaptureConfigSummary`](crate::model::DataCaptureConfigSummary)
        pub fn build(self) -> crate::model::DataCaptureConfigSummary {
            crate::model::DataCaptureConfigSummary {
                enable_capture: self.enable_capture,
                capture_status: self.capture_status,
                current_sampling_percentage: self.current_sampling_percentage,
                destination_s3_uri: self.destination_s3_uri,
                kms_key_id: self.kms_key_id,
            }
        }
    }
}
impl DataCaptureConfigSummary {
    /// Creates a new builder-style object to manufacture [`DataCaptureConfigSummary`](crate::model::DataCaptureConfigSummary)
    pub fn builder() -> crate::model::data_capture_config_summary::Builder {
        crate::model::data_capture_config_summary::Builder::default()
    }
}

/// JSONPath filters applied to the input and output of a transform job.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DataProcessing {
    #[serde(rename = "InputFilter")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub input_filter: std::option::Option<std::string::String>,
    #[serde(rename = "OutputFilter")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub output_filter: std::option::Option<std::string::String>,
    #[serde(rename = "JoinSource")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub join_source: std::option::Option<crate::model::JoinSource>,
}
impl DataProcessing {
    pub fn input_filter(&self) -> std::option::Option<&str> {
        self.input_filter.as_deref()
    }

    pub fn output_filter(&self) -> std::option::Option<&str> {
        self.output_filter.as_deref()
    }

    pub fn join_source(&self) -> std::option::Option<&crate::model::JoinSource> {
        self.join_source.as_ref()
    }
}
/// See [`DataProcessing`](crate::model::DataProcessing)
pub mod data_processing {
    /// A builder for [`DataProcessing`](crate::model::DataProcessing)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        input_filter: std::option::Option<std::string::String>,
        output_filter: std::option::Option<std::string::String>,
        join_source: std::option::Option<crate::model::JoinSource>,
    }
    impl Builder {
        pub fn input_filter(mut self, input: impl Into<std::string::String>) -> Self {
            self.input_filter = Some(input.into());
            self
        }
        pub fn set_input_filter(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.input_filter = input;
            self
        }
        pub fn output_filter(mut self, input: impl Into<std::string::String>) -> Self {
            self.output_filter = Some(input.into());
            self
        }
        pub fn set_output_filter(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.output_filter = input;
            self
        }
        pub fn join_source(mut self, input: crate::model::JoinSource) -> Self {
            self.join_source = Some(input);
            self
        }
        pub fn set_join_source(mut self, input: std::option::Option<crate::model::JoinSource>) -> Self {
            self.join_source = input;
            self
        }
        /// Consumes the builder and constructs a [`DataProcessing`](crate::model::DataProcessing)
        pub fn build(self) -> crate::model::DataProcessing {
            crate::model::DataProcessing {
                input_filter: self.input_filter,
                output_filter: self.output_filter,
                join_source: self.join_source,
            }
        }
    }
}
impl DataProcessing {
    /// Creates a new builder-style object to manufacture [`DataProcessing`](crate::model::DataProcessing)
    pub fn builder() -> crate::model::data_processing::Builder {
        crate::model::data_processing::Builder::default()
    }
}

/// Location of a channel's data. Exactly one source should be set.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DataSource {
    #[serde(rename = "S3DataSource")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub s3_data_source: std::option::Option<crate::model::S3DataSource>,
    #[serde(rename = "FileSystemDataSource")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub file_system_data_source: std::option::Option<crate::model::FileSystemDataSource>,
}
impl DataSource {
    pub fn s3_data_source(&self) -> std::option::Option<&crate::model::S3DataSource> {
        self.s3_data_source.as_ref()
    }

    pub fn file_system_data_source(&self) -> std::option::Option<&crate::model::FileSystemDataSource> {
        self.file_system_data_source.as_ref()
    }
}
/// See [`DataSource`](crate::model::DataSource)
pub mod data_source {
    /// A builder for [`DataSource`](crate::model::DataSource)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        s3_data_source: std::option::Option<crate::model::S3DataSource>,
        file_system_data_source: std::option::Option<crate::model::FileSystemDataSource>,
    }
    impl Builder {
        pub fn s3_data_source(mut self, input: crate::model::S3DataSource) -> Self {
            self.s3_data_source = Some(input);
            self
        }
        pub fn set_s3_data_source(mut self, input: std::option::Option<crate::model::S3DataSource>) -> Self {
            self.s3_data_source = input;
            self
        }
        pub fn file_system_data_source(mut self, input: crate::model::FileSystemDataSource) -> Self {
            self.file_system_data_source = Some(input);
            self
        }
        pub fn set_file_system_data_source(mut self, input: std::option::Option<crate::model::FileSystemDataSource>) -> Self {
            self.file_system_data_source = input;
            self
        }
        /// Consumes the builder and constructs a [`DataSource`](crate::model::DataSource)
        pub fn build(self) -> crate::model::DataSource {
            crate::model::DataSource {
                s3_data_source: self.s3_data_source,
                file_system_data_source: self.file_system_data_source,
            }
        }
    }
}
impl DataSource {
    /// Creates a new builder-style object to manufacture [`DataSource`](crate::model::DataSource)
    pub fn builder() -> crate::model::data_source::Builder {
        crate::model::data_source::Builder::default()
    }
}

/// Configuration of the debugger hook that saves tensors during training.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DebugHookConfig {
    /// Path inside the training container where tensors are written.
    #[serde(rename = "LocalPath")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub local_path: std::option::Option<std::string::String>,
    #[serde(rename = "S3OutputPath")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub s3_output_path: std::option::Option<std::string::String>,
    #[serde(rename = "HookParameters")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hook_parameters: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>,
    #[serde(rename = "CollectionConfigurations")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub collection_configurations: std::option::Option<std::vec::Vec<crate::model::CollectionConfiguration>>,
}
impl DebugHookConfig {
    pub fn local_path(&self) -> std::option::Option<&str> {
        self.local_path.as_deref()
    }

    pub fn s3_output_path(&self) -> std::option::Option<&str> {
        self.s3_output_path.as_deref()
    }

    pub fn hook_parameters(&self) -> std::option::Option<&std::collections::BTreeMap<std::string::String, std::string::String>> {
        self.hook_parameters.as_ref()
    }

    pub fn collection_configurations(&self) -> std::option::Option<&[crate::model::CollectionConfiguration]> {
        self.collection_configurations.as_deref()
    }
}
/// See [`DebugHookConfig`](crate::model::DebugHookConfig)
pub mod debug_hook_config {
    /// A builder for [`DebugHookConfig`](crate::model::DebugHookConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        local_path: std::option::Option<std::string::String>,
        s3_output_path: std::option::Option<std::string::String>,
        hook_parameters: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>,
        collection_configurations: std::option::Option<std::vec::Vec<crate::model::CollectionConfiguration>>,
    }
    impl Builder {
        pub fn local_path(mut self, input: impl Into<std::string::String>) -> Self {
            self.local_path = Some(input.into());
            self
        }
        pub fn set_local_path(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.local_path = input;
            self
        }
        pub fn s3_output_path(mut self, input: impl Into<std::string::String>) -> Self {
            self.s3_output_path = Some(input.into());
            self
        }
        pub fn set_s3_output_path(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.s3_output_path = input;
            self
        }
        /// Adds a key-value pair to `HookParameters`.
        ///
        /// To override the contents of this collection use [`set_hook_parameters`](Self::set_hook_parameters).
        pub fn hook_parameters(mut self, k: impl Into<std::string::String>, v: impl Into<std::string::String>) -> Self {
            let mut hash_map = self.hook_parameters.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.hook_parameters = Some(hash_map);
            self
        }
        pub fn set_hook_parameters(mut self, input: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>) -> Self {
            self.hook_parameters = input;
            self
        }
        /// Appends an item to `CollectionConfigurations`.
        ///
        /// To override the contents of this collection use [`set_collection_configurations`](Self::set_collection_configurations).
        pub fn collection_configurations(mut self, input: impl Into<crate::model::CollectionConfiguration>) -> Self {
            let mut v = self.collection_configurations.unwrap_or_default();
            v.push(input.into());
            self.collection_configurations = Some(v);
            self
        }
        pub fn set_collection_configurations(mut self, input: std::option::Option<std::vec::Vec<crate::model::CollectionConfiguration>>) -> Self {
            self.collection_configurations = input;
            self
        }
        /// Consumes the builder and constructs a [`DebugHookConfig`](crate::model::DebugHookConfig)
        pub fn build(self) -> crate::model::DebugHookConfig {
            crate::model::DebugHookConfig {
                local_path: self.local_path,
                s3_output_path: self.s3_output_path,
                hook_parameters: self.hook_parameters,
                collection_configurations: self.collection_configurations,
            }
        }
    }
}
impl DebugHookConfig {
    /// Creates a new builder-style object to manufacture [`DebugHookConfig`](crate::model::DebugHookConfig)
    pub fn builder() -> crate::model::debug_hook_config::Builder {
        crate::model::debug_hook_config::Builder::default()
    }
}

/// A rule evaluated against the tensors saved by the debugger hook.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DebugRuleConfiguration {
    #[serde(rename = "RuleConfigurationName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub rule_configuration_name: std::option::Option<std::string::String>,
    #[serde(rename = "LocalPath")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub local_path: std::option::Option<std::string::String>,
    #[serde(rename = "S3OutputPath")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub s3_output_path: std::option::Option<std::string::String>,
    /// Registry path of the container that evaluates the rule.
    #[serde(rename = "RuleEvaluatorImage")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub rule_evaluator_image: std::option::Option<std::string::String>,
    #[serde(rename = "InstanceType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub instance_type: std::option::Option<crate::model::ProcessingInstanceType>,
    #[serde(rename = "VolumeSizeInGB")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_size_in_gb: std::option::Option<i32>,
    #[serde(rename = "RuleParameters")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub rule_parameters: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>,
}
impl DebugRuleConfiguration {
    pub fn rule_configuration_name(&self) -> std::option::Option<&str> {
        self.rule_configuration_name.as_deref()
    }

    pub fn local_path(&self) -> std::option::Option<&str> {
        self.local_path.as_deref()
    }

    pub fn s3_output_path(&self) -> std::option::Option<&str> {
        self.s3_output_path.as_deref()
    }

    pub fn rule_evaluator_image(&self) -> std::option::Option<&str> {
        self.rule_evaluator_image.as_deref()
    }

    pub fn instance_type(&self) -> std::option::Option<&crate::model::ProcessingInstanceType> {
        self.instance_type.as_ref()
    }

    pub fn volume_size_in_gb(&self) -> std::option::Option<i32> {
        self.volume_size_in_gb
    }

    pub fn rule_parameters(&self) -> std::option::Option<&std::collections::BTreeMap<std::string::String, std::string::String>> {
        self.rule_parameters.as_ref()
    }
}
/// See [`DebugRuleConfiguration`](crate::model::DebugRuleConfiguration)
pub mod debug_rule_configuration {
    /// A builder for [`DebugRuleConfiguration`](crate::model::DebugRuleConfiguration)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        rule_configuration_name: std::option::Option<std::string::String>,
        local_path: std::option::Option<std::string::String>,
        s3_output_path: std::option::Option<std::string::String>,
        rule_evaluator_image: std::option::Option<std::string::String>,
        instance_type: std::option::Option<crate::model::ProcessingInstanceType>,
        volume_size_in_gb: std::option::Option<i32>,
        rule_parameters: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        pub fn rule_configuration_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.rule_configuration_name = Some(input.into());
            self
        }
        pub fn set_rule_configuration_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.rule_configuration_name = input;
            self
        }
        pub fn local_path(mut self, input: impl Into<std::string::String>) -> Self {
            self.local_path = Some(input.into());
            self
        }
        pub fn set_local_path(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.local_path = input;
            self
        }
        pub fn s3_output_path(mut self, input: impl Into<std::string::String>) -> Self {
            self.s3_output_path = Some(input.into());
            self
        }
        pub fn set_s3_output_path(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.s3_output_path = input;
            self
        }
        pub fn rule_evaluator_image(mut self, input: impl Into<std::string::String>) -> Self {
            self.rule_evaluator_image = Some(input.into());
            self
        }
        pub fn set_rule_evaluator_image(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.rule_evaluator_image = input;
            self
        }
        pub fn instance_type(mut self, input: crate::model::ProcessingInstanceType) -> Self {
            self.instance_type = Some(input);
            self
        }
        pub fn set_instance_type(mut self, input: std::option::Option<crate::model::ProcessingInstanceType>) -> Self {
            self.instance_type = input;
            self
        }
        pub fn volume_size_in_gb(mut self, input: i32) -> Self {
            self.volume_size_in_gb = Some(input);
            self
        }
        pub fn set_volume_size_in_gb(mut self, input: std::option::Option<i32>) -> Self {
            self.volume_size_in_gb = input;
            self
        }
        /// Adds a key-value pair to `RuleParameters`.
        ///
        /// To override the contents of this collection use [`set_rule_parameters`](Self::set_rule_parameters).
        pub fn rule_parameters(mut self, k: impl Into<std::string::String>, v: impl Into<std::string::String>) -> Self {
            let mut hash_map = self.rule_parameters.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.rule_parameters = Some(hash_map);
            self
        }
        pub fn set_rule_parameters(mut self, input: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>) -> Self {
            self.rule_parameters = input;
            self
        }
        /// Consumes the builder and constructs a [`DebugRuleConfiguration`](crate::model::DebugRuleConfiguration)
        pub fn build(self) -> crate::model::DebugRuleConfiguration {
            crate::model::DebugRuleConfiguration {
                rule_configuration_name: self.rule_configuration_name,
                local_path: self.local_path,
                s3_output_path: self.s3_output_path,
                rule_evaluator_image: self.rule_evaluator_image,
                instance_type: self.instance_type,
                volume_size_in_gb: self.volume_size_in_gb,
                rule_parameters: self.rule_parameters,
            }
        }
    }
}
impl DebugRuleConfiguration {
    /// Creates a new builder-style object to manufacture [`DebugRuleConfiguration`](crate::model::DebugRuleConfiguration)
    pub fn builder() -> crate::model::debug_rule_configuration::Builder {
        crate::model::debug_rule_configuration::Builder::default()
    }
}

/// Status of one debugger rule evaluation job.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DebugRuleEvaluationStatus {
    #[serde(rename = "RuleConfigurationName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub rule_configuration_name: std::option::Option<std::string::String>,
    #[serde(rename = "RuleEvaluationJobArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub rule_evaluation_job_arn: std::option::Option<std::string::String>,
    #[serde(rename = "RuleEvaluationStatus")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub rule_evaluation_status: std::option::Option<crate::model::RuleEvaluationStatus>,
    #[serde(rename = "StatusDetails")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status_details: std::option::Option<std::string::String>,
    #[serde(rename = "LastModifiedTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_modified_time: std::option::Option<smithy_types::Instant>,
}
impl DebugRuleEvaluationStatus {
    pub fn rule_configuration_name(&self) -> std::option::Option<&str> {
        self.rule_configuration_name.as_deref()
    }

    pub fn rule_evaluation_job_arn(&self) -> std::option::Option<&str> {
        self.rule_evaluation_job_arn.as_deref()
    }

    pub fn rule_evaluation_status(&self) -> std::option::Option<&crate::model::RuleEvaluationStatus> {
        self.rule_evaluation_status.as_ref()
    }

    pub fn status_details(&self) -> std::option::Option<&str> {
        self.status_details.as_deref()
    }

    pub fn last_modified_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.last_modified_time.as_ref()
    }
}
/// See [`DebugRuleEvaluationStatus`](crate::model::DebugRuleEvaluationStatus)
pub mod debug_rule_evaluation_status {
    /// A builder for [`DebugRuleEvaluationStatus`](crate::model::DebugRuleEvaluationStatus)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        rule_configuration_name: std::option::Option<std::string::String>,
        rule_evaluation_job_arn: std::option::Option<std::string::String>,
        rule_evaluation_status: std::option::Option<crate::model::RuleEvaluationStatus>,
        status_details: std::option::Option<std::string::String>,
        last_modified_time: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
        pub fn rule_configuration_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.rule_configuration_name = Some(input.into());
            self
        }
        pub fn set_rule_configuration_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.rule_configuration_name = input;
            self
        }
        pub fn rule_evaluation_job_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.rule_evaluation_job_arn = Some(input.into());
            self
        }
        pub fn set_rule_evaluation_job_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.rule_evaluation_job_arn = input;
            self
        }
        pub fn rule_evaluation_status(mut self, input: crate::model::RuleEvaluationStatus) -> Self {
            self.rule_evaluation_status = Some(input);
            self
        }
        pub fn set_rule_evaluation_status(mut self, input: std::option::Option<crate::model::RuleEvaluationStatus>) -> Self {
            self.rule_evaluation_status = input;
            self
        }
        pub fn status_details(mut self, input: impl Into<std::string::String>) -> Self {
            self.status_details = Some(input.into());
            self
        }
        pub fn set_status_details(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.status_details = input;
            self
        }
        pub fn last_modified_time(mut self, input: smithy_types::Instant) -> Self {
            self.last_modified_time = Some(input);
            self
        }
        pub fn set_last_modified_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified_time = input;
            self
        }
        /// Consumes the builder and constructs a [`DebugRuleEvaluationStatus`](crate::model::DebugRuleEvaluationStatus)
        pub fn build(self) -> crate::model::DebugRuleEvaluationStatus {
            crate::model::DebugRuleEvaluationStatus {
                rule_configuration_name: self.rule_configuration_name,
                rule_evaluation_job_arn: self.rule_evaluation_job_arn,
                rule_evaluation_status: self.rule_evaluation_status,
                status_details: self.status_details,
                last_modified_time: self.last_modified_time,
            }
        }
    }
}
impl DebugRuleEvaluationStatus {
    /// Creates a new builder-style object to manufacture [`DebugRuleEvaluationStatus`](crate::model::DebugRuleEvaluationStatus)
    pub fn builder() -> crate::model::debug_rule_evaluation_status::Builder {
        crate::model::debug_rule_evaluation_status::Builder::default()
    }
}

/// The image a variant was created with and the digest it resolved to.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DeployedImage {
    #[serde(rename = "SpecifiedImage")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub specified_image: std::option::Option<std::string::String>,
    #[serde(rename = "ResolvedImage")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resolved_image: std::option::Option<std::string::String>,
    #[serde(rename = "ResolutionTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resolution_time: std::option::Option<smithy_types::Instant>,
}
impl DeployedImage {
    pub fn specified_image(&self) -> std::option::Option<&str> {
        self.specified_image.as_deref()
    }

    pub fn resolved_image(&self) -> std::option::Option<&str> {
        self.resolved_image.as_deref()
    }

    pub fn resolution_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.resolution_time.as_ref()
    }
}
/// See [`DeployedImage`](crate::model::DeployedImage)
pub mod deployed_image {
    /// A builder for [`DeployedImage`](crate::model::DeployedImage)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        specified_image: std::option::Option<std::string::String>,
        resolved_image: std::option::Option<std::string::String>,
        resolution_time: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
        pub fn specified_image(mut self, input: impl Into<std::string::String>) -> Self {
            self.specified_image = Some(input.into());
            self
        }
        pub fn set_specified_image(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.specified_image = input;
            self
        }
        pub fn resolved_image(mut self, input: impl Into<std::string::String>) -> Self {
            self.resolved_image = Some(input.into());
            self
        }
        pub fn set_resolved_image(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resolved_image = input;
            self
        }
        pub fn resolution_time(mut self, input: smithy_types::Instant) -> Self {
            self.resolution_time = Some(input);
            self
        }
        pub fn set_resolution_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.resolution_time = input;
            self
        }
        /// Consumes the builder and constructs a [`DeployedImage`](crate::model::DeployedImage)
        pub fn build(self) -> crate::model::DeployedImage {
            crate::model::DeployedImage {
                specified_image: self.specified_image,
                resolved_image: self.resolved_image,
                resolution_time: self.resolution_time,
            }
        }
    }
}
impl DeployedImage {
    /// Creates a new builder-style object to manufacture [`DeployedImage`](crate::model::DeployedImage)
    pub fn builder() -> crate::model::deployed_image::Builder {
        crate::model::deployed_image::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct EndpointConfigSummary {
    #[serde(rename = "EndpointConfigName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub endpoint_config_name: std::option::Option<std::string::String>,
    #[serde(rename = "EndpointConfigArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub endpoint_config_arn: std::option::Option<std::string::String>,
    #[serde(rename = "CreationTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time: std::option::Option<smithy_types::Instant>,
}
impl EndpointConfigSummary {
    pub fn endpoint_config_name(&self) -> std::option::Option<&str> {
        self.endpoint_config_name.as_deref()
    }

    pub fn endpoint_config_arn(&self) -> std::option::Option<&str> {
        self.endpoint_config_arn.as_deref()
    }

    pub fn creation_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time.as_ref()
    }
}
/// See [`EndpointConfigSummary`](crate::model::EndpointConfigSummary)
pub mod endpoint_config_summary {
    /// A builder for [`EndpointConfigSummary`](crate::model::EndpointConfigSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        endpoint_config_name: std::option::Option<std::string::String>,
        endpoint_config_arn: std::option::Option<std::string::String>,
        creation_time: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
        pub fn endpoint_config_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.endpoint_config_name = Some(input.into());
            self
        }
        pub fn set_endpoint_config_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.endpoint_config_name = input;
            self
        }
        pub fn endpoint_config_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.endpoint_config_arn = Some(input.into());
            self
        }
        pub fn set_endpoint_config_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.endpoint_config_arn = input;
            self
        }
        pub fn creation_time(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time = Some(input);
            self
        }
        pub fn set_creation_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time = input;
            self
        }
        /// Consumes the builder and constructs a [`EndpointConfigSummary`](crate::model::EndpointConfigSummary)
        pub fn build(self) -> crate::model::EndpointConfigSummary {
            crate::model::EndpointConfigSummary {
                endpoint_config_name: self.endpoint_config_name,
                endpoint_config_arn: self.endpoint_config_arn,
                creation_time: self.creation_time,
            }
        }
    }
}
impl EndpointConfigSummary {
    /// Creates a new builder-style object to manufacture [`EndpointConfigSummary`](crate::model::EndpointConfigSummary)
    pub fn builder() -> crate::model::endpoint_config_summary::Builder {
        crate::model::endpoint_config_summary::Builder::default()
    }
}

/// Summary of an endpoint, as returned by `ListEndpoints`.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct EndpointSummary {
    #[serde(rename = "EndpointName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub endpoint_name: std::option::Option<std::string::String>,
    #[serde(rename = "EndpointArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub endpoint_arn: std::option::Option<std::string::String>,
    #[serde(rename = "CreationTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "LastModifiedTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_modified_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "EndpointStatus")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub endpoint_status: std::option::Option<crate::model::EndpointStatus>,
}
impl EndpointSummary {
    pub fn endpoint_name(&self) -> std::option::Option<&str> {
        self.endpoint_name.as_deref()
    }

    pub fn endpoint_arn(&self) -> std::option::Option<&str> {
        self.endpoint_arn.as_deref()
    }

    pub fn creation_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time.as_ref()
    }

    pub fn last_modified_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.last_modified_time.as_ref()
    }

    pub fn endpoint_status(&self) -> std::option::Option<&crate::model::EndpointStatus> {
        self.endpoint_status.as_ref()
    }
}
/// See [`EndpointSummary`](crate::model::EndpointSummary)
pub mod endpoint_summary {
    /// A builder for [`EndpointSummary`](crate::model::EndpointSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        endpoint_name: std::option::Option<std::string::String>,
        endpoint_arn: std::option::Option<std::string::String>,
        creation_time: std::option::Option<smithy_types::Instant>,
        last_modified_time: std::option::Option<smithy_types::Instant>,
        endpoint_status: std::option::Option<crate::model::EndpointStatus>,
    }
    impl Builder {
        pub fn endpoint_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.endpoint_name = Some(input.into());
            self
        }
        pub fn set_endpoint_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.endpoint_name = input;
            self
        }
        pub fn endpoint_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.endpoint_arn = Some(input.into());
            self
        }
        pub fn set_endpoint_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.endpoint_arn = input;
            self
        }
        pub fn creation_time(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time = Some(input);
            self
        }
        pub fn set_creation_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time = input;
            self
        }
        pub fn last_modified_time(mut self, input: smithy_types::Instant) -> Self {
            self.last_modified_time = Some(input);
            self
        }
        pub fn set_last_modified_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified_time = input;
            self
        }
        pub fn endpoint_status(mut self, input: crate::model::EndpointStatus) -> Self {
            self.endpoint_status = Some(input);
            self
        }
        pub fn set_endpoint_status(mut self, input: std::option::Option<crate::model::EndpointStatus>) -> Self {
            self.endpoint_status = input;
            self
        }
        /// Consumes the builder and constructs a [`EndpointSummary`](crate::model::EndpointSummary)
        pub fn build(self) -> crate::model::EndpointSummary {
            crate::model::EndpointSummary {
                endpoint_name: self.endpoint_name,
                endpoint_arn: self.endpoint_arn,
                creation_time: self.creation_time,
                last_modified_time: self.last_modified_time,
                endpoint_status: self.endpoint_status,
            }
        }
    }
}
impl EndpointSummary {
    /// Creates a new builder-style object to manufacture [`EndpointSummary`](crate::model::EndpointSummary)
    pub fn builder() -> crate::model::endpoint_summary::Builder {
        crate::model::endpoint_summary::Builder::default()
    }
}

/// Associates a job with an experiment, a trial and a trial component.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ExperimentConfig {
    #[serde(rename = "ExperimentName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub experiment_name: std::option::Option<std::string::String>,
    #[serde(rename = "TrialName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub trial_name: std::option::Option<std::string::String>,
    #[serde(rename = "TrialComponentDisplayName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub trial_component_display_name: std::option::Option<std::string::String>,
}
impl ExperimentConfig {
    pub fn experiment_name(&self) -> std::option::Option<&str> {
        self.experiment_name.as_deref()
    }

    pub fn trial_name(&self) -> std::option::Option<&str> {
        self.trial_name.as_deref()
    }

    pub fn trial_component_display_name(&self) -> std::option::Option<&str> {
        self.trial_component_display_name.as_deref()
    }
}
/// See [`ExperimentConfig`](crate::model::ExperimentConfig)
pub mod experiment_config {
    /// A builder for [`ExperimentConfig`](crate::model::ExperimentConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        experiment_name: std::option::Option<std::string::String>,
        trial_name: std::option::Option<std::string::String>,
        trial_component_display_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn experiment_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.experiment_name = Some(input.into());
            self
        }
        pub fn set_experiment_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.experiment_name = input;
            self
        }
        pub fn trial_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.trial_name = Some(input.into());
            self
        }
        pub fn set_trial_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.trial_name = input;
            self
        }
        pub fn trial_component_display_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.trial_component_display_name = Some(input.into());
            self
        }
        pub fn set_trial_component_display_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.trial_component_display_name = input;
            self
        }
        /// Consumes the builder and constructs a [`ExperimentConfig`](crate::model::ExperimentConfig)
        pub fn build(self) -> crate::model::ExperimentConfig {
            crate::model::ExperimentConfig {
                experiment_name: self.experiment_name,
                trial_name: self.trial_name,
                trial_component_display_name: self.trial_component_display_name,
            }
        }
    }
}
impl ExperimentConfig {
    /// Creates a new builder-style object to manufacture [`ExperimentConfig`](crate::model::ExperimentConfig)
    pub fn builder() -> crate::model::experiment_config::Builder {
        crate::model::experiment_config::Builder::default()
    }
}

/// An EFS or FSx for Lustre file system used as training input.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct FileSystemDataSource {
    #[serde(rename = "FileSystemId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub file_system_id: std::option::Option<std::string::String>,
    #[serde(rename = "FileSystemAccessMode")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub file_system_access_mode: std::option::Option<crate::model::FileSystemAccessMode>,
    #[serde(rename = "FileSystemType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub file_system_type: std::option::Option<crate::model::FileSystemType>,
    #[serde(rename = "DirectoryPath")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub directory_path: std::option::Option<std::string::String>,
}
impl FileSystemDataSource {
    pub fn file_system_id(&self) -> std::option::Option<&str> {
        self.file_system_id.as_deref()
    }

    pub fn file_system_access_mode(&self) -> std::option::Option<&crate::model::FileSystemAccessMode> {
        self.file_system_access_mode.as_ref()
    }

    pub fn file_system_type(&self) -> std::option::Option<&crate::model::FileSystemType> {
        self.file_system_type.as_ref()
    }

    pub fn directory_path(&self) -> std::option::Option<&str> {
        self.directory_path.as_deref()
    }
}
/// See [`FileSystemDataSource`](crate::model::FileSystemDataSource)
pub mod file_system_data_source {
    /// A builder for [`FileSystemDataSource`](crate::model::FileSystemDataSource)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        file_system_id: std::option::Option<std::string::String>,
        file_system_access_mode: std::option::Option<crate::model::FileSystemAccessMode>,
        file_system_type: std::option::Option<crate::model::FileSystemType>,
        directory_path: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn file_system_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.file_system_id = Some(input.into());
            self
        }
        pub fn set_file_system_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.file_system_id = input;
            self
        }
        pub fn file_system_access_mode(mut self, input: crate::model::FileSystemAccessMode) -> Self {
            self.file_system_access_mode = Some(input);
            self
        }
        pub fn set_file_system_access_mode(mut self, input: std::option::Option<crate::model::FileSystemAccessMode>) -> Self {
            self.file_system_access_mode = input;
            self
        }
        pub fn file_system_type(mut self, input: crate::model::FileSystemType) -> Self {
            self.file_system_type = Some(input);
            self
        }
        pub fn set_file_system_type(mut self, input: std::option::Option<crate::model::FileSystemType>) -> Self {
            self.file_system_type = input;
            self
        }
        pub fn directory_path(mut self, input: impl Into<std::string::String>) -> Self {
            self.directory_path = Some(input.into());
            self
        }
        pub fn set_directory_path(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.directory_path = input;
            self
        }
        /// Consumes the builder and constructs a [`FileSystemDataSource`](crate::model::FileSystemDataSource)
        pub fn build(self) -> crate::model::FileSystemDataSource {
            crate::model::FileSystemDataSource {
                file_system_id: self.file_system_id,
                file_system_access_mode: self.file_system_access_mode,
                file_system_type: self.file_system_type,
                directory_path: self.directory_path,
            }
        }
    }
}
impl FileSystemDataSource {
    /// Creates a new builder-style object to manufacture [`FileSystemDataSource`](crate::model::FileSystemDataSource)
    pub fn builder() -> crate::model::file_system_data_source::Builder {
        crate::model::file_system_data_source::Builder::default()
    }
}

/// The objective metric value a training job reached when it finished.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::fmt::Debug, std::default::Default)]
pub struct FinalHyperParameterTuningJobObjectiveMetric {
    #[serde(rename = "Type")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<crate::model::HyperParameterTuningJobObjectiveType>,
    #[serde(rename = "MetricName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub metric_name: std::option::Option<std::string::String>,
    #[serde(rename = "Value")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub value: std::option::Option<f32>,
}
impl std::cmp::PartialEq for FinalHyperParameterTuningJobObjectiveMetric {
    fn eq(&self, other: &Self) -> bool {
        self.r#type == other.r#type
            && self.metric_name == other.metric_name
            && self.value.map(f32::to_bits) == other.value.map(f32::to_bits)
    }
}
impl std::cmp::Eq for FinalHyperParameterTuningJobObjectiveMetric {}
impl std::hash::Hash for FinalHyperParameterTuningJobObjectiveMetric {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.r#type, state);
        std::hash::Hash::hash(&self.metric_name, state);
        std::hash::Hash::hash(&self.value.map(f32::to_bits), state);
    }
}
impl FinalHyperParameterTuningJobObjectiveMetric {
    pub fn r#type(&self) -> std::option::Option<&crate::model::HyperParameterTuningJobObjectiveType> {
        self.r#type.as_ref()
    }

    pub fn metric_name(&self) -> std::option::Option<&str> {
        self.metric_name.as_deref()
    }

    pub fn value(&self) -> std::option::Option<f32> {
        self.value
    }
}
/// See [`FinalHyperParameterTuningJobObjectiveMetric`](crate::model::FinalHyperParameterTuningJobObjectiveMetric)
pub mod final_hyper_parameter_tuning_job_objective_metric {
    /// A builder for [`FinalHyperParameterTuningJobObjectiveMetric`](crate::model::FinalHyperParameterTuningJobObjectiveMetric)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        r#type: std::option::Option<crate::model::HyperParameterTuningJobObjectiveType>,
        metric_name: std::option::Option<std::string::String>,
        value: std::option::Option<f32>,
    }
    impl Builder {
        pub fn r#type(mut self, input: crate::model::HyperParameterTuningJobObjectiveType) -> Self {
            self.r#type = Some(input);
            self
        }
        pub fn set_type(mut self, input: std::option::Option<crate::model::HyperParameterTuningJobObjectiveType>) -> Self {
            self.r#type = input;
            self
        }
        pub fn metric_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.metric_name = Some(input.into());
            self
        }
        pub fn set_metric_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.metric_name = input;
            self
        }
        pub fn value(mut self, input: f32) -> Self {
            self.value = Some(input);
            self
        }
        pub fn set_value(mut self, input: std::option::Option<f32>) -> Self {
            self.value = input;
            self
        }
        /// Consumes the builder and constructs a [`FinalHyperParameterTuningJobObjectiveMetric`](crate::model::FinalHyperParameterTuningJobObjectiveMetric)
        pub fn build(self) -> crate::model::FinalHyperParameterTuningJobObjectiveMetric {
            crate::model::FinalHyperParameterTuningJobObjectiveMetric {
                r#type: self.r#type,
                metric_name: self.metric_name,
                value: self.value,
            }
        }
    }
}
impl FinalHyperParameterTuningJobObjectiveMetric {
    /// Creates a new builder-style object to manufacture [`FinalHyperParameterTuningJobObjectiveMetric`](crate::model::FinalHyperParameterTuningJobObjectiveMetric)
    pub fn builder() -> crate::model::final_hyper_parameter_tuning_job_objective_metric::Builder {
        crate::model::final_hyper_parameter_tuning_job_objective_metric::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct FlowDefinitionOutputConfig {
    #[serde(rename = "S3OutputPath")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub s3_output_path: std::option::Option<std::string::String>,
    #[serde(rename = "KmsKeyId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key_id: std::option::Option<std::string::String>,
}
impl FlowDefinitionOutputConfig {
    pub fn s3_output_path(&self) -> std::option::Option<&str> {
        self.s3_output_path.as_deref()
    }

    pub fn kms_key_id(&self) -> std::option::Option<&str> {
        self.kms_key_id.as_deref()
    }
}
/// See [`FlowDefinitionOutputConfig`](crate::model::FlowDefinitionOutputConfig)
pub mod flow_definition_output_config {
    /// A builder for [`FlowDefinitionOutputConfig`](crate::model::FlowDefinitionOutputConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        s3_output_path: std::option::Option<std::string::String>,
        kms_key_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn s3_output_path(mut self, input: impl Into<std::string::String>) -> Self {
            self.s3_output_path = Some(input.into());
            self
        }
        pub fn set_s3_output_path(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.s3_output_path = input;
            self
        }
        pub fn kms_key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.kms_key_id = Some(input.into());
            self
        }
        pub fn set_kms_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.kms_key_id = input;
            self
        }
        /// Consumes the builder and constructs a [`FlowDefinitionOutputConfig`](crate::model::FlowDefinitionOutputConfig)
        pub fn build(self) -> crate::model::FlowDefinitionOutputConfig {
            crate::model::FlowDefinitionOutputConfig {
                s3_output_path: self.s3_output_path,
                kms_key_id: self.kms_key_id,
            }
        }
    }
}
impl FlowDefinitionOutputConfig {
    /// Creates a new builder-style object to manufacture [`FlowDefinitionOutputConfig`](crate::model::FlowDefinitionOutputConfig)
    pub fn builder() -> crate::model::flow_definition_output_config::Builder {
        crate::model::flow_definition_output_config::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct FlowDefinitionSummary {
    #[serde(rename = "FlowDefinitionName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub flow_definition_name: std::option::Option<std::string::String>,
    #[serde(rename = "FlowDefinitionArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub flow_definition_arn: std::option::Option<std::string::String>,
    #[serde(rename = "FlowDefinitionStatus")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub flow_definition_status: std::option::Option<crate::model::FlowDefinitionStatus>,
    #[serde(rename = "CreationTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "FailureReason")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub failure_reason: std::option::Option<std::string::String>,
}
impl FlowDefinitionSummary {
    pub fn flow_definition_name(&self) -> std::option::Option<&str> {
        self.flow_definition_name.as_deref()
    }

    pub fn flow_definition_arn(&self) -> std::option::Option<&str> {
        self.flow_definition_arn.as_deref()
    }

    pub fn flow_definition_status(&self) -> std::option::Option<&crate::model::FlowDefinitionStatus> {
        self.flow_definition_status.as_ref()
    }

    pub fn creation_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time.as_ref()
    }

    pub fn failure_reason(&self) -> std::option::Option<&str> {
        self.failure_reason.as_deref()
    }
}
/// See [`FlowDefinitionSummary`](crate::model::FlowDefinitionSummary)
pub mod flow_definition_summary {
    /// A builder for [`FlowDefinitionSummary`](crate::model::FlowDefinitionSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        flow_definition_name: std::option::Option<std::string::String>,
        flow_definition_arn: std::option::Option<std::string::String>,
        flow_definition_status: std::option::Option<crate::model::FlowDefinitionStatus>,
        creation_time: std::option::Option<smithy_types::Instant>,
        failure_reason: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn flow_definition_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.flow_definition_name = Some(input.into());
            self
        }
        pub fn set_flow_definition_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.flow_definition_name = input;
            self
        }
        pub fn flow_definition_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.flow_definition_arn = Some(input.into());
            self
        }
        pub fn set_flow_definition_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.flow_definition_arn = input;
            self
        }
        pub fn flow_definition_status(mut self, input: crate::model::FlowDefinitionStatus) -> Self {
            self.flow_definition_status = Some(input);
            self
        }
        pub fn set_flow_definition_status(mut self, input: std::option::Option<crate::model::FlowDefinitionStatus>) -> Self {
            self.flow_definition_status = input;
            self
        }
        pub fn creation_time(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time = Some(input);
            self
        }
        pub fn set_creation_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time = input;
            self
        }
        pub fn failure_reason(mut self, input: impl Into<std::string::String>) -> Self {
            self.failure_reason = Some(input.into());
            self
        }
        pub fn set_failure_reason(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.failure_reason = input;
            self
        }
        /// Consumes the builder and constructs a [`FlowDefinitionSummary`](crate::model::FlowDefinitionSummary)
        pub fn build(self) -> crate::model::FlowDefinitionSummary {
            crate::model::FlowDefinitionSummary {
                flow_definition_name: self.flow_definition_name,
                flow_definition_arn: self.flow_definition_arn,
                flow_definition_status: self.flow_definition_status,
                creation_time: self.creation_time,
                failure_reason: self.failure_reason,
            }
        }
    }
}
impl FlowDefinitionSummary {
    /// Creates a new builder-style object to manufacture [`FlowDefinitionSummary`](crate::model::FlowDefinitionSummary)
    pub fn builder() -> crate::model::flow_definition_summary::Builder {
        crate::model::flow_definition_summary::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct HumanLoopActivationConditionsConfig {
    /// JSON document of the conditions that start a human loop.
    #[serde(rename = "HumanLoopActivationConditions")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub human_loop_activation_conditions: std::option::Option<std::string::String>,
}
impl HumanLoopActivationConditionsConfig {
    pub fn human_loop_activation_conditions(&self) -> std::option::Option<&str> {
        self.human_loop_activation_conditions.as_deref()
    }
}
/// See [`HumanLoopActivationConditionsConfig`](crate::model::HumanLoopActivationConditionsConfig)
pub mod human_loop_activation_conditions_config {
    /// A builder for [`HumanLoopActivationConditionsConfig`](crate::model::HumanLoopActivationConditionsConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        human_loop_activation_conditions: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn human_loop_activation_conditions(mut self, input: impl Into<std::string::String>) -> Self {
            self.human_loop_activation_conditions = Some(input.into());
            self
        }
        pub fn set_human_loop_activation_conditions(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.human_loop_activation_conditions = input;
            self
        }
        /// Consumes the builder and constructs a [`HumanLoopActivationConditionsConfig`](crate::model::HumanLoopActivationConditionsConfig)
        pub fn build(self) -> crate::model::HumanLoopActivationConditionsConfig {
            crate::model::HumanLoopActivationConditionsConfig {
                human_loop_activation_conditions: self.human_loop_activation_conditions,
            }
        }
    }
}
impl HumanLoopActivationConditionsConfig {
    /// Creates a new builder-style object to manufacture [`HumanLoopActivationConditionsConfig`](crate::model::HumanLoopActivationConditionsConfig)
    pub fn builder() -> crate::model::human_loop_activation_conditions_config::Builder {
        crate::model::human_loop_activation_conditions_config::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct HumanLoopActivationConfig {
    #[serde(rename = "HumanLoopActivationConditionsConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub human_loop_activation_conditions_config: std::option::Option<crate::model::HumanLoopActivationConditionsConfig>,
}
impl HumanLoopActivationConfig {
    pub fn human_loop_activation_conditions_config(&self) -> std::option::Option<&crate::model::HumanLoopActivationConditionsConfig> {
        self.human_loop_activation_conditions_config.as_ref()
    }
}
/// See [`HumanLoopActivationConfig`](crate::model::HumanLoopActivationConfig)
pub mod human_loop_activation_config {
    /// A builder for [`HumanLoopActivationConfig`](crate::model::HumanLoopActivationConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        human_loop_activation_conditions_config: std::option::Option<crate::model::HumanLoopActivationConditionsConfig>,
    }
    impl Builder {
        pub fn human_loop_activation_conditions_config(mut self, input: crate::model::HumanLoopActivationConditionsConfig) -> Self {
            self.human_loop_activation_conditions_config = Some(input);
            self
        }
        pub fn set_human_loop_activation_conditions_config(mut self, input: std::option::Option<crate::model::HumanLoopActivationConditionsConfig>) -> Self {
            self.human_loop_activation_conditions_config = input;
            self
        }
        /// Consumes the builder and constructs a [`HumanLoopActivationConfig`](crate::model::HumanLoopActivationConfig)
        pub fn build(self) -> crate::model::HumanLoopActivationConfig {
            crate::model::HumanLoopActivationConfig {
                human_loop_activation_conditions_config: self.human_loop_activation_conditions_config,
            }
        }
    }
}
impl HumanLoopActivationConfig {
    /// Creates a new builder-style object to manufacture [`HumanLoopActivationConfig`](crate::model::HumanLoopActivationConfig)
    pub fn builder() -> crate::model::human_loop_activation_config::Builder {
        crate::model::human_loop_activation_config::Builder::default()
    }
}

/// The work team and task template used when a human loop starts.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct HumanLoopConfig {
    #[serde(rename = "WorkteamArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub workteam_arn: std::option::Option<std::string::String>,
    #[serde(rename = "HumanTaskUiArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub human_task_ui_arn: std::option::Option<std::string::String>,
    #[serde(rename = "TaskTitle")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub task_title: std::option::Option<std::string::String>,
    #[serde(rename = "TaskDescription")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub task_description: std::option::Option<std::string::String>,
    /// Number of distinct workers who review each object.
    #[serde(rename = "TaskCount")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub task_count: std::option::Option<i32>,
    #[serde(rename = "TaskAvailabilityLifetimeInSeconds")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub task_availability_lifetime_in_seconds: std::option::Option<i32>,
    #[serde(rename = "TaskTimeLimitInSeconds")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub task_time_limit_in_seconds: std::option::Option<i32>,
    #[serde(rename = "TaskKeywords")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub task_keywords: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "PublicWorkforceTaskPrice")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub public_workforce_task_price: std::option::Option<crate::model::PublicWorkforceTaskPrice>,
}
impl HumanLoopConfig {
    pub fn workteam_arn(&self) -> std::option::Option<&str> {
        self.workteam_arn.as_deref()
    }

    pub fn human_task_ui_arn(&self) -> std::option::Option<&str> {
        self.human_task_ui_arn.as_deref()
    }

    pub fn task_title(&self) -> std::option::Option<&str> {
        self.task_title.as_deref()
    }

    pub fn task_description(&self) -> std::option::Option<&str> {
        self.task_description.as_deref()
    }

    pub fn task_count(&self) -> std::option::Option<i32> {
        self.task_count
    }

    pub fn task_availability_lifetime_in_seconds(&self) -> std::option::Option<i32> {
        self.task_availability_lifetime_in_seconds
    }

    pub fn task_time_limit_in_seconds(&self) -> std::option::Option<i32> {
        self.task_time_limit_in_seconds
    }

    pub fn task_keywords(&self) -> std::option::Option<&[std::string::String]> {
        self.task_keywords.as_deref()
    }

    pub fn public_workforce_task_price(&self) -> std::option::Option<&crate::model::PublicWorkforceTaskPrice> {
        self.public_workforce_task_price.as_ref()
    }
}
/// See [`HumanLoopConfig`](crate::model::HumanLoopConfig)
pub mod human_loop_config {
    /// A builder for [`HumanLoopConfig`](crate::model::HumanLoopConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        workteam_arn: std::option::Option<std::string::String>,
        human_task_ui_arn: std::option::Option<std::string::String>,
        task_title: std::option::Option<std::string::String>,
        task_description: std::option::Option<std::string::String>,
        task_count: std::option::Option<i32>,
        task_availability_lifetime_in_seconds: std::option::Option<i32>,
        task_time_limit_in_seconds: std::option::Option<i32>,
        task_keywords: std::option::Option<std::vec::Vec<std::string::String>>,
        public_workforce_task_price: std::option::Option<crate::model::PublicWorkforceTaskPrice>,
    }
    impl Builder {
        pub fn workteam_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.workteam_arn = Some(input.into());
            self
        }
        pub fn set_workteam_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.workteam_arn = input;
            self
        }
        pub fn human_task_ui_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.human_task_ui_arn = Some(input.into());
            self
        }
        pub fn set_human_task_ui_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.human_task_ui_arn = input;
            self
        }
        pub fn task_title(mut self, input: impl Into<std::string::String>) -> Self {
            self.task_title = Some(input.into());
            self
        }
        pub fn set_task_title(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.task_title = input;
            self
        }
        pub fn task_description(mut self, input: impl Into<std::string::String>) -> Self {
            self.task_description = Some(input.into());
            self
        }
        pub fn set_task_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.task_description = input;
            self
        }
        pub fn task_count(mut self, input: i32) -> Self {
            self.task_count = Some(input);
            self
        }
        pub fn set_task_count(mut self, input: std::option::Option<i32>) -> Self {
            self.task_count = input;
            self
        }
        pub fn task_availability_lifetime_in_seconds(mut self, input: i32) -> Self {
            self.task_availability_lifetime_in_seconds = Some(input);
            self
        }
        pub fn set_task_availability_lifetime_in_seconds(mut self, input: std::option::Option<i32>) -> Self {
            self.task_availability_lifetime_in_seconds = input;
            self
        }
        pub fn task_time_limit_in_seconds(mut self, input: i32) -> Self {
            self.task_time_limit_in_seconds = Some(input);
            self
        }
        pub fn set_task_time_limit_in_seconds(mut self, input: std::option::Option<i32>) -> Self {
            self.task_time_limit_in_seconds = input;
            self
        }
        /// Appends an item to `TaskKeywords`.
        ///
        /// To override the contents of this collection use [`set_task_keywords`](Self::set_task_keywords).
        pub fn task_keywords(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.task_keywords.unwrap_or_default();
            v.push(input.into());
            self.task_keywords = Some(v);
            self
        }
        pub fn set_task_keywords(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.task_keywords = input;
            self
        }
        pub fn public_workforce_task_price(mut self, input: crate::model::PublicWorkforceTaskPrice) -> Self {
            self.public_workforce_task_price = Some(input);
            self
        }
        pub fn set_public_workforce_task_price(mut self, input: std::option::Option<crate::model::PublicWorkforceTaskPrice>) -> Self {
            self.public_workforce_task_price = input;
            self
        }
        /// Consumes the builder and constructs a [`HumanLoopConfig`](crate::model::HumanLoopConfig)
        pub fn build(self) -> crate::model::HumanLoopConfig {
            crate::model::HumanLoopConfig {
                workteam_arn: self.workteam_arn,
                human_task_ui_arn: self.human_task_ui_arn,
                task_title: self.task_title,
                task_description: self.task_description,
                task_count: self.task_count,
                task_availability_lifetime_in_seconds: self.task_availability_lifetime_in_seconds,
                task_time_limit_in_seconds: self.task_time_limit_in_seconds,
                task_keywords: self.task_keywords,
                public_workforce_task_price: self.public_workforce_task_price,
            }
        }
    }
}
impl HumanLoopConfig {
    /// Creates a new builder-style object to manufacture [`HumanLoopConfig`](crate::model::HumanLoopConfig)
    pub fn builder() -> crate::model::human_loop_config::Builder {
        crate::model::human_loop_config::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct HumanLoopRequestSource {
    #[serde(rename = "AwsManagedHumanLoopRequestSource")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub aws_managed_human_loop_request_source: std::option::Option<crate::model::AwsManagedHumanLoopRequestSource>,
}
impl HumanLoopRequestSource {
    pub fn aws_managed_human_loop_request_source(&self) -> std::option::Option<&crate::model::AwsManagedHumanLoopRequestSource> {
        self.aws_managed_human_loop_request_source.as_ref()
    }
}
/// See [`HumanLoopRequestSource`](crate::model::HumanLoopRequestSource)
pub mod human_loop_request_source {
    /// A builder for [`HumanLoopRequestSource`](crate::model::HumanLoopRequestSource)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        aws_managed_human_loop_request_source: std::option::Option<crate::model::AwsManagedHumanLoopRequestSource>,
    }
    impl Builder {
        pub fn aws_managed_human_loop_request_source(mut self, input: crate::model::AwsManagedHumanLoopRequestSource) -> Self {
            self.aws_managed_human_loop_request_source = Some(input);
            self
        }
        pub fn set_aws_managed_human_loop_request_source(mut self, input: std::option::Option<crate::model::AwsManagedHumanLoopRequestSource>) -> Self {
            self.aws_managed_human_loop_request_source = input;
            self
        }
        /// Consumes the builder and constructs a [`HumanLoopRequestSource`](crate::model::HumanLoopRequestSource)
        pub fn build(self) -> crate::model::HumanLoopRequestSource {
            crate::model::HumanLoopRequestSource {
                aws_managed_human_loop_request_source: self.aws_managed_human_loop_request_source,
            }
        }
    }
}
impl HumanLoopRequestSource {
    /// Creates a new builder-style object to manufacture [`HumanLoopRequestSource`](crate::model::HumanLoopRequestSource)
    pub fn builder() -> crate::model::human_loop_request_source::Builder {
        crate::model::human_loop_request_source::Builder::default()
    }
}

/// The work team, task template and pricing for the human part of a labeling job.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct HumanTaskConfig {
    #[serde(rename = "WorkteamArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub workteam_arn: std::option::Option<std::string::String>,
    #[serde(rename = "UiConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ui_config: std::option::Option<crate::model::UiConfig>,
    /// Lambda run before each data object is sent to a worker.
    #[serde(rename = "PreHumanTaskLambdaArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub pre_human_task_lambda_arn: std::option::Option<std::string::String>,
    #[serde(rename = "TaskKeywords")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub task_keywords: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "TaskTitle")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub task_title: std::option::Option<std::string::String>,
    #[serde(rename = "TaskDescription")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub task_description: std::option::Option<std::string::String>,
    #[serde(rename = "NumberOfHumanWorkersPerDataObject")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub number_of_human_workers_per_data_object: std::option::Option<i32>,
    #[serde(rename = "TaskTimeLimitInSeconds")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub task_time_limit_in_seconds: std::option::Option<i32>,
    #[serde(rename = "TaskAvailabilityLifetimeInSeconds")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub task_availability_lifetime_in_seconds: std::option::Option<i32>,
    #[serde(rename = "MaxConcurrentTaskCount")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_concurrent_task_count: std::option::Option<i32>,
    #[serde(rename = "AnnotationConsolidationConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub annotation_consolidation_config: std::option::Option<crate::model::AnnotationConsolidationConfig>,
    #[serde(rename = "PublicWorkforceTaskPrice")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub public_workforce_task_price: std::option::Option<crate::model::PublicWorkforceTaskPrice>,
}
impl HumanTaskConfig {
    pub fn workteam_arn(&self) -> std::option::Option<&str> {
        self.workteam_arn.as_deref()
    }

    pub fn ui_config(&self) -> std::option::Option<&crate::model::UiConfig> {
        self.ui_config.as_ref()
    }

    pub fn pre_human_task_lambda_arn(&self) -> std::option::Option<&str> {
        self.pre_human_task_lambda_arn.as_deref()
    }

    pub fn task_keywords(&self) -> std::option::Option<&[std::string::String]> {
        self.task_keywords.as_deref()
    }

    pub fn task_title(&self) -> std::option::Option<&str> {
        self.task_title.as_deref()
    }

    pub fn task_description(&self) -> std::option::Option<&str> {
        self.task_description.as_deref()
    }

    pub fn number_of_human_workers_per_data_object(&self) -> std::option::Option<i32> {
        self.number_of_human_workers_per_data_object
    }

    pub fn task_time_limit_in_seconds(&self) -> std::option::Option<i32> {
        self.task_time_limit_in_seconds
    }

    pub fn task_availability_lifetime_in_seconds(&self) -> std::option::Option<i32> {
        self.task_availability_lifetime_in_seconds
    }

    pub fn max_concurrent_task_count(&self) -> std::option::Option<i32> {
        self.max_concurrent_task_count
    }

    pub fn annotation_consolidation_config(&self) -> std::option::Option<&crate::model::AnnotationConsolidationConfig> {
        self.annotation_consolidation_config.as_ref()
    }

    pub fn public_workforce_task_price(&self) -> std::option::Option<&crate::model::PublicWorkforceTaskPrice> {
        self.public_workforce_task_price.as_ref()
    }
}
/// See [`HumanTaskConfig`](crate::model::HumanTaskConfig)
pub mod human_task_config {
    /// A builder for [`HumanTaskConfig`](crate::model::HumanTaskConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        workteam_arn: std::option::Option<std::string::String>,
        ui_config: std::option::Option<crate::model::UiConfig>,
        pre_human_task_lambda_arn: std::option::Option<std::string::String>,
        task_keywords: std::option::Option<std::vec::Vec<std::string::String>>,
        task_title: std::option::Option<std::string::String>,
        task_description: std::option::Option<std::string::String>,
        number_of_human_workers_per_data_object: std::option::Option<i32>,
        task_time_limit_in_seconds: std::option::Option<i32>,
        task_availability_lifetime_in_seconds: std::option::Option<i32>,
        max_concurrent_task_count: std::option::Option<i32>,
        annotation_consolidation_config: std::option::Option<crate::model::AnnotationConsolidationConfig>,
        public_workforce_task_price: std::option::Option<crate::model::PublicWorkforceTaskPrice>,
    }
    impl Builder {
        pub fn workteam_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.workteam_arn = Some(input.into());
            self
        }
        pub fn set_workteam_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.workteam_arn = input;
            self
        }
        pub fn ui_config(mut self, input: crate::model::UiConfig) -> Self {
            self.ui_config = Some(input);
            self
        }
        pub fn set_ui_config(mut self, input: std::option::Option<crate::model::UiConfig>) -> Self {
            self.ui_config = input;
            self
        }
        pub fn pre_human_task_lambda_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.pre_human_task_lambda_arn = Some(input.into());
            self
        }
        pub fn set_pre_human_task_lambda_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.pre_human_task_lambda_arn = input;
            self
        }
        /// Appends an item to `TaskKeywords`.
        ///
        /// To override the contents of this collection use [`set_task_keywords`](Self::set_task_keywords).
        pub fn task_keywords(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.task_keywords.unwrap_or_default();
            v.push(input.into());
            self.task_keywords = Some(v);
            self
        }
        pub fn set_task_keywords(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.task_keywords = input;
            self
        }
        pub fn task_title(mut self, input: impl Into<std::string::String>) -> Self {
            self.task_title = Some(input.into());
            self
        }
        pub fn set_task_title(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.task_title = input;
            self
        }
        pub fn task_description(mut self, input: impl Into<std::string::String>) -> Self {
            self.task_description = Some(input.into());
            self
        }
        pub fn set_task_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.task_description = input;
            self
        }
        pub fn number_of_human_workers_per_data_object(mut self, input: i32) -> Self {
            self.number_of_human_workers_per_data_object = Some(input);
            self
        }
        pub fn set_number_of_human_workers_per_data_object(mut self, input: std::option::Option<i32>) -> Self {
            self.number_of_human_workers_per_data_object = input;
            self
        }
        pub fn task_time_limit_in_seconds(mut self, input: i32) -> Self {
            self.task_time_limit_in_seconds = Some(input);
            self
        }
        pub fn set_task_time_limit_in_seconds(mut self, input: std::option::Option<i32>) -> Self {
            self.task_time_limit_in_seconds = input;
            self
        }
        pub fn task_availability_lifetime_in_seconds(mut self, input: i32) -> Self {
            self.task_availability_lifetime_in_seconds = Some(input);
            self
        }
        pub fn set_task_availability_lifetime_in_seconds(mut self, input: std::option::Option<i32>) -> Self {
            self.task_availability_lifetime_in_seconds = input;
            self
        }
        pub fn max_concurrent_task_count(mut self, input: i32) -> Self {
            self.max_concurrent_task_count = Some(input);
            self
        }
        pub fn set_max_concurrent_task_count(mut self, input: std::option::Option<i32>) -> Self {
            self.max_concurrent_task_count = input;
            self
        }
        pub fn annotation_consolidation_config(mut self, input: crate::model::AnnotationConsolidationConfig) -> Self {
            self.annotation_consolidation_config = Some(input);
            self
        }
        pub fn set_annotation_consolidation_config(mut self, input: std::option::Option<crate::model::AnnotationConsolidationConfig>) -> Self {
            self.annotation_consolidation_config = input;
            self
        }
        pub fn public_workforce_task_price(mut self, input: crate::model::PublicWorkforceTaskPrice) -> Self {
            self.public_workforce_task_price = Some(input);
            self
        }
        pub fn set_public_workforce_task_price(mut self, input: std::option::Option<crate::model::PublicWorkforceTaskPrice>) -> Self {
            self.public_workforce_task_price = input;
            self
        }
        /// Consumes the builder and constructs a [`HumanTaskConfig`](crate::model::HumanTaskConfig)
        pub fn build(self) -> crate::model::HumanTaskConfig {
            crate::model::HumanTaskConfig {
                workteam_arn: self.workteam_arn,
                ui_config: self.ui_config,
                pre_human_task_lambda_arn: self.pre_human_task_lambda_arn,
                task_keywords: self.task_keywords,
                task_title: self.task_title,
                task_description: self.task_description,
                number_of_human_workers_per_data_object: self.number_of_human_workers_per_data_object,
                task_time_limit_in_seconds: self.task_time_limit_in_seconds,
                task_availability_lifetime_in_seconds: self.task_availability_lifetime_in_seconds,
                max_concurrent_task_count: self.max_concurrent_task_count,
                annotation_consolidation_config: self.annotation_consolidation_config,
                public_workforce_task_price: self.public_workforce_task_price,
            }
        }
    }
}
impl HumanTaskConfig {
    /// Creates a new builder-style object to manufacture [`HumanTaskConfig`](crate::model::HumanTaskConfig)
    pub fn builder() -> crate::model::human_task_config::Builder {
        crate::model::human_task_config::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct HyperParameterAlgorithmSpecification {
    #[serde(rename = "TrainingImage")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub training_image: std::option::Option<std::string::String>,
    #[serde(rename = "TrainingInputMode")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub training_input_mode: std::option::Option<crate::model::TrainingInputMode>,
    #[serde(rename = "AlgorithmName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub algorithm_name: std::option::Option<std::string::String>,
    #[serde(rename = "MetricDefinitions")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub metric_definitions: std::option::Option<std::vec::Vec<crate::model::MetricDefinition>>,
}
impl HyperParameterAlgorithmSpecification {
    pub fn training_image(&self) -> std::option::Option<&str> {
        self.training_image.as_deref()
    }

    pub fn training_input_mode(&self) -> std::option::Option<&crate::model::TrainingInputMode> {
        self.training_input_mode.as_ref()
    }

    pub fn algorithm_name(&self) -> std::option::Option<&str> {
        self.algorithm_name.as_deref()
    }

    pub fn metric_definitions(&self) -> std::option::Option<&[crate::model::MetricDefinition]> {
        self.metric_definitions.as_deref()
    }
}
/// See [`HyperParameterAlgorithmSpecification`](crate::model::HyperParameterAlgorithmSpecification)
pub mod hyper_parameter_algorithm_specification {
    /// A builder for [`HyperParameterAlgorithmSpecification`](crate::model::HyperParameterAlgorithmSpecification)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        training_image: std::option::Option<std::string::String>,
        training_input_mode: std::option::Option<crate::model::TrainingInputMode>,
        algorithm_name: std::option::Option<std::string::String>,
        metric_definitions: std::option::Option<std::vec::Vec<crate::model::MetricDefinition>>,
    }
    impl Builder {
        pub fn training_image(mut self, input: impl Into<std::string::String>) -> Self {
            self.training_image = Some(input.into());
            self
        }
        pub fn set_training_image(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.training_image = input;
            self
        }
        pub fn training_input_mode(mut self, input: crate::model::TrainingInputMode) -> Self {
            self.training_input_mode = Some(input);
            self
        }
        pub fn set_training_input_mode(mut self, input: std::option::Option<crate::model::TrainingInputMode>) -> Self {
            self.training_input_mode = input;
            self
        }
        pub fn algorithm_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.algorithm_name = Some(input.into());
            self
        }
        pub fn set_algorithm_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.algorithm_name = input;
            self
        }
        /// Appends an item to `MetricDefinitions`.
        ///
        /// To override the contents of this collection use [`set_metric_definitions`](Self::set_metric_definitions).
        pub fn metric_definitions(mut self, input: impl Into<crate::model::MetricDefinition>) -> Self {
            let mut v = self.metric_definitions.unwrap_or_default();
            v.push(input.into());
            self.metric_definitions = Some(v);
            self
        }
        pub fn set_metric_definitions(mut self, input: std::option::Option<std::vec::Vec<crate::model::MetricDefinition>>) -> Self {
            self.metric_definitions = input;
            self
        }
        /// Consumes the builder and constructs a [`HyperParameterAlgorithmSpecification`](crate::model::HyperParameterAlgorithmSpecification)
        pub fn build(self) -> crate::model::HyperParameterAlgorithmSpecification {
            crate::model::HyperParameterAlgorithmSpecification {
                training_image: self.training_image,
                training_input_mode: self.training_input_mode,
                algorithm_name: self.algorithm_name,
                metric_definitions: self.metric_definitions,
            }
        }
    }
}
impl HyperParameterAlgorithmSpecification {
    /// Creates a new builder-style object to manufacture [`HyperParameterAlgorithmSpecification`](crate::model::HyperParameterAlgorithmSpecification)
    pub fn builder() -> crate::model::hyper_parameter_algorithm_specification::Builder {
        crate::model::hyper_parameter_algorithm_specification::Builder::default()
    }
}

/// The training jobs a tuning job launches, minus the hyperparameters being tuned.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct HyperParameterTrainingJobDefinition {
    #[serde(rename = "DefinitionName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub definition_name: std::option::Option<std::string::String>,
    #[serde(rename = "TuningObjective")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tuning_objective: std::option::Option<crate::model::HyperParameterTuningJobObjective>,
    #[serde(rename = "HyperParameterRanges")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hyper_parameter_ranges: std::option::Option<crate::model::ParameterRanges>,
    /// Hyperparameters that stay fixed across every training job.
    #[serde(rename = "StaticHyperParameters")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub static_hyper_parameters: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>,
    #[serde(rename = "AlgorithmSpecification")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub algorithm_specification: std::option::Option<crate::model::HyperParameterAlgorithmSpecification>,
    #[serde(rename = "RoleArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub role_arn: std::option::Option<std::string::String>,
    #[serde(rename = "InputDataConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub input_data_config: std::option::Option<std::vec::Vec<crate::model::Channel>>,
    #[serde(rename = "VpcConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub vpc_config: std::option::Option<crate::model::VpcConfig>,
    #[serde(rename = "OutputDataConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub output_data_config: std::option::Option<crate::model::OutputDataConfig>,
    #[serde(rename = "ResourceConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_config: std::option::Option<crate::model::ResourceConfig>,
    #[serde(rename = "StoppingCondition")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub stopping_condition: std::option::Option<crate::model::StoppingCondition>,
    #[serde(rename = "EnableNetworkIsolation")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub enable_network_isolation: std::option::Option<bool>,
    #[serde(rename = "EnableInterContainerTrafficEncryption")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub enable_inter_container_traffic_encryption: std::option::Option<bool>,
    #[serde(rename = "EnableManagedSpotTraining")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub enable_managed_spot_training: std::option::Option<bool>,
    #[serde(rename = "CheckpointConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub checkpoint_config: std::option::Option<crate::model::CheckpointConfig>,
}
impl HyperParameterTrainingJobDefinition {
    pub fn definition_name(&self) -> std::option::Option<&str> {
        self.definition_name.as_deref()
    }

    pub fn tuning_objective(&self) -> std::option::Option<&crate::model::HyperParameterTuningJobObjective> {
        self.tuning_objective.as_ref()
    }

    pub fn hyper_parameter_ranges(&self) -> std::option::Option<&crate::model::ParameterRanges> {
        self.hyper_parameter_ranges.as_ref()
    }

    pub fn static_hyper_parameters(&self) -> std::option::Option<&std::collections::BTreeMap<std::string::String, std::string::String>> {
        self.static_hyper_parameters.as_ref()
    }

    pub fn algorithm_specification(&self) -> std::option::Option<&crate::model::HyperParameterAlgorithmSpecification> {
        self.algorithm_specification.as_ref()
    }

    pub fn role_arn(&self) -> std::option::Option<&str> {
        self.role_arn.as_deref()
    }

    pub fn input_data_config(&self) -> std::option::Option<&[crate::model::Channel]> {
        self.input_data_config.as_deref()
    }

    pub fn vpc_config(&self) -> std::option::Option<&crate::model::VpcConfig> {
        self.vpc_config.as_ref()
    }

    pub fn output_data_config(&self) -> std::option::Option<&crate::model::OutputDataConfig> {
        self.output_data_config.as_ref()
    }

    pub fn resource_config(&self) -> std::option::Option<&crate::model::ResourceConfig> {
        self.resource_config.as_ref()
    }

    pub fn stopping_condition(&self) -> std::option::Option<&crate::model::StoppingCondition> {
        self.stopping_condition.as_ref()
    }

    pub fn enable_network_isolation(&self) -> std::option::Option<bool> {
        self.enable_network_isolation
    }

    pub fn enable_inter_container_traffic_encryption(&self) -> std::option::Option<bool> {
        self.enable_inter_container_traffic_encryption
    }

    pub fn enable_managed_spot_training(&self) -> std::option::Option<bool> {
        self.enable_managed_spot_training
    }

    pub fn checkpoint_config(&self) -> std::option::Option<&crate::model::CheckpointConfig> {
        self.checkpoint_config.as_ref()
    }
}
/// See [`HyperParameterTrainingJobDefinition`](crate::model::HyperParameterTrainingJobDefinition)
pub mod hyper_parameter_training_job_definition {
    /// A builder for [`HyperParameterTrainingJobDefinition`](crate::model::HyperParameterTrainingJobDefinition)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        definition_name: std::option::Option<std::string::String>,
        tuning_objective: std::option::Option<crate::model::HyperParameterTuningJobObjective>,
        hyper_parameter_ranges: std::option::Option<crate::model::ParameterRanges>,
        static_hyper_parameters: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>,
        algorithm_specification: std::option::Option<crate::model::HyperParameterAlgorithmSpecification>,
        role_arn: std::option::Option<std::string::String>,
        input_data_config: std::option::Option<std::vec::Vec<crate::model::Channel>>,
        vpc_config: std::option::Option<crate::model::VpcConfig>,
        output_data_config: std::option::Option<crate::model::OutputDataConfig>,
        resource_config: std::option::Option<crate::model::ResourceConfig>,
        stopping_condition: std::option::Option<crate::model::StoppingCondition>,
        enable_network_isolation: std::option::Option<bool>,
        enable_inter_container_traffic_encryption: std::option::Option<bool>,
        enable_managed_spot_training: std::option::Option<bool>,
        checkpoint_config: std::option::Option<crate::model::CheckpointConfig>,
    }
    impl Builder {
        pub fn definition_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.definition_name = Some(input.into());
            self
        }
        pub fn set_definition_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.definition_name = input;
            self
        }
        pub fn tuning_objective(mut self, input: crate::model::HyperParameterTuningJobObjective) -> Self {
            self.tuning_objective = Some(input);
            self
        }
        pub fn set_tuning_objective(mut self, input: std::option::Option<crate::model::HyperParameterTuningJobObjective>) -> Self {
            self.tuning_objective = input;
            self
        }
        pub fn hyper_parameter_ranges(mut self, input: crate::model::ParameterRanges) -> Self {
            self.hyper_parameter_ranges = Some(input);
            self
        }
        pub fn set_hyper_parameter_ranges(mut self, input: std::option::Option<crate::model::ParameterRanges>) -> Self {
            self.hyper_parameter_ranges = input;
            self
        }
        /// Adds a key-value pair to `StaticHyperParameters`.
        ///
        /// To override the contents of this collection use [`set_static_hyper_parameters`](Self::set_static_hyper_parameters).
        pub fn static_hyper_parameters(mut self, k: impl Into<std::string::String>, v: impl Into<std::string::String>) -> Self {
            let mut hash_map = self.static_hyper_parameters.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.static_hyper_parameters = Some(hash_map);
            self
        }
        pub fn set_static_hyper_parameters(mut self, input: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>) -> Self {
            self.static_hyper_parameters = input;
            self
        }
        pub fn algorithm_specification(mut self, input: crate::model::HyperParameterAlgorithmSpecification) -> Self {
            self.algorithm_specification = Some(input);
            self
        }
        pub fn set_algorithm_specification(mut self, input: std::option::Option<crate::model::HyperParameterAlgorithmSpecification>) -> Self {
            self.algorithm_specification = input;
            self
        }
        pub fn role_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.role_arn = Some(input.into());
            self
        }
        pub fn set_role_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.role_arn = input;
            self
        }
        /// Appends an item to `InputDataConfig`.
        ///
        /// To override the contents of this collection use [`set_input_data_config`](Self::set_input_data_config).
        pub fn input_data_config(mut self, input: impl Into<crate::model::Channel>) -> Self {
            let mut v = self.input_data_config.unwrap_or_default();
            v.push(input.into());
            self.input_data_config = Some(v);
            self
        }
        pub fn set_input_data_config(mut self, input: std::option::Option<std::vec::Vec<crate::model::Channel>>) -> Self {
            self.input_data_config = input;
            self
        }
        pub fn vpc_config(mut self, input: crate::model::VpcConfig) -> Self {
            self.vpc_config = Some(input);
            self
        }
        pub fn set_vpc_config(mut self, input: std::option::Option<crate::model::VpcConfig>) -> Self {
            self.vpc_config = input;
            self
        }
        pub fn output_data_config(mut self, input: crate::model::OutputDataConfig) -> Self {
            self.output_data_config = Some(input);
            self
        }
        pub fn set_output_data_config(mut self, input: std::option::Option<crate::model::OutputDataConfig>) -> Self {
            self.output_data_config = input;
            self
        }
        pub fn resource_config(mut self, input: crate::model::ResourceConfig) -> Self {
            self.resource_config = Some(input);
            self
        }
        pub fn set_resource_config(mut self, input: std::option::Option<crate::model::ResourceConfig>) -> Self {
            self.resource_config = input;
            self
        }
        pub fn stopping_condition(mut self, input: crate::model::StoppingCondition) -> Self {
            self.stopping_condition = Some(input);
            self
        }
        pub fn set_stopping_condition(mut self, input: std::option::Option<crate::model::StoppingCondition>) -> Self {
            self.stopping_condition = input;
            self
        }
        pub fn enable_network_isolation(mut self, input: bool) -> Self {
            self.enable_network_isolation = Some(input);
            self
        }
        pub fn set_enable_network_isolation(mut self, input: std::option::Option<bool>) -> Self {
            self.enable_network_isolation = input;
            self
        }
        pub fn enable_inter_container_traffic_encryption(mut self, input: bool) -> Self {
            self.enable_inter_container_traffic_encryption = Some(input);
            self
        }
        pub fn set_enable_inter_container_traffic_encryption(mut self, input: std::option::Option<bool>) -> Self {
            self.enable_inter_container_traffic_encryption = input;
            self
        }
        pub fn enable_managed_spot_training(mut self, input: bool) -> Self {
            self.enable_managed_spot_training = Some(input);
            self
        }
        pub fn set_enable_managed_spot_training(mut self, input: std::option::Option<bool>) -> Self {
            self.enable_managed_spot_training = input;
            self
        }
        pub fn checkpoint_config(mut self, input: crate::model::CheckpointConfig) -> Self {
            self.checkpoint_config = Some(input);
            self
        }
        pub fn set_checkpoint_config(mut self, input: std::option::Option<crate::model::CheckpointConfig>) -> Self {
            self.checkpoint_config = input;
            self
        }
        /// Consumes the builder and constructs a [`HyperParameterTrainingJobDefinition`](crate::model::HyperParameterTrainingJobDefinition)
        pub fn build(self) -> crate::model::HyperParameterTrainingJobDefinition {
            crate::model::HyperParameterTrainingJobDefinition {
                definition_name: self.definition_name,
                tuning_objective: self.tuning_objective,
                hyper_parameter_ranges: self.hyper_parameter_ranges,
                static_hyper_parameters: self.static_hyper_parameters,
                algorithm_specification: self.algorithm_specification,
                role_arn: self.role_arn,
                input_data_config: self.input_data_config,
                vpc_config: self.vpc_config,
                output_data_config: self.output_data_config,
                resource_config: self.resource_config,
                stopping_condition: self.stopping_condition,
                enable_network_isolation: self.enable_network_isolation,
                enable_inter_container_traffic_encryption: self.enable_inter_container_traffic_encryption,
                enable_managed_spot_training: self.enable_managed_spot_training,
                checkpoint_config: self.checkpoint_config,
            }
        }
    }
}
impl HyperParameterTrainingJobDefinition {
    /// Creates a new builder-style object to manufacture [`HyperParameterTrainingJobDefinition`](crate::model::HyperParameterTrainingJobDefinition)
    pub fn builder() -> crate::model::hyper_parameter_training_job_definition::Builder {
        crate::model::hyper_parameter_training_job_definition::Builder::default()
    }
}

/// A training job launched by a tuning job.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct HyperParameterTrainingJobSummary {
    #[serde(rename = "TrainingJobDefinitionName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub training_job_definition_name: std::option::Option<std::string::String>,
    #[serde(rename = "TrainingJobName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub training_job_name: std::option::Option<std::string::String>,
    #[serde(rename = "TrainingJobArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub training_job_arn: std::option::Option<std::string::String>,
    #[serde(rename = "TuningJobName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tuning_job_name: std::option::Option<std::string::String>,
    #[serde(rename = "CreationTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "TrainingStartTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub training_start_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "TrainingEndTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub training_end_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "TrainingJobStatus")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub training_job_status: std::option::Option<crate::model::TrainingJobStatus>,
    #[serde(rename = "TunedHyperParameters")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tuned_hyper_parameters: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>,
    #[serde(rename = "FailureReason")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub failure_reason: std::option::Option<std::string::String>,
    #[serde(rename = "FinalHyperParameterTuningJobObjectiveMetric")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub final_hyper_parameter_tuning_job_objective_metric: std::option::Option<crate::model::FinalHyperParameterTuningJobObjectiveMetric>,
    #[serde(rename = "ObjectiveStatus")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub objective_status: std::option::Option<crate::model::ObjectiveStatus>,
}
impl HyperParameterTrainingJobSummary {
    pub fn training_job_definition_name(&self) -> std::option::Option<&str> {
        self.training_job_definition_name.as_deref()
    }

    pub fn training_job_name(&self) -> std::option::Option<&str> {
        self.training_job_name.as_deref()
    }

    pub fn training_job_arn(&self) -> std::option::Option<&str> {
        self.training_job_arn.as_deref()
    }

    pub fn tuning_job_name(&self) -> std::option::Option<&str> {
        self.tuning_job_name.as_deref()
    }

    pub fn creation_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time.as_ref()
    }

    pub fn training_start_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.training_start_time.as_ref()
    }

    pub fn training_end_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.training_end_time.as_ref()
    }

    pub fn training_job_status(&self) -> std::option::Option<&crate::model::TrainingJobStatus> {
        self.training_job_status.as_ref()
    }

    pub fn tuned_hyper_parameters(&self) -> std::option::Option<&std::collections::BTreeMap<std::string::String, std::string::String>> {
        self.tuned_hyper_parameters.as_ref()
    }

    pub fn failure_reason(&self) -> std::option::Option<&str> {
        self.failure_reason.as_deref()
    }

    pub fn final_hyper_parameter_tuning_job_objective_metric(&self) -> std::option::Option<&crate::model::FinalHyperParameterTuningJobObjectiveMetric> {
        self.final_hyper_parameter_tuning_job_objective_metric.as_ref()
    }

    pub fn objective_status(&self) -> std::option::Option<&crate::model::ObjectiveStatus> {
        self.objective_status.as_ref()
    }
}
/// See [`HyperParameterTrainingJobSummary`](crate::model::HyperParameterTrainingJobSummary)
pub mod hyper_parameter_training_job_summary {
    /// A builder for [`HyperParameterTrainingJobSummary`](crate::model::HyperParameterTrainingJobSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        training_job_definition_name: std::option::Option<std::string::String>,
        training_job_name: std::option::Option<std::string::String>,
        training_job_arn: std::option::Option<std::string::String>,
        tuning_job_name: std::option::Option<std::string::String>,
        creation_time: std::option::Option<smithy_types::Instant>,
        training_start_time: std::option::Option<smithy_types::Instant>,
        training_end_time: std::option::Option<smithy_types::Instant>,
        training_job_status: std::option::Option<crate::model::TrainingJobStatus>,
        tuned_hyper_parameters: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>,
        failure_reason: std::option::Option<std::string::String>,
        final_hyper_parameter_tuning_job_objective_metric: std::option::Option<crate::model::FinalHyperParameterTuningJobObjectiveMetric>,
        objective_status: std::option::Option<crate::model::ObjectiveStatus>,
    }
    impl Builder {
        pub fn training_job_definition_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.training_job_definition_name = Some(input.into());
            self
        }
        pub fn set_training_job_definition_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.training_job_definition_name = input;
            self
        }
        pub fn training_job_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.training_job_name = Some(input.into());
            self
        }
        pub fn set_training_job_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.training_job_name = input;
            self
        }
        pub fn training_job_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.training_job_arn = Some(input.into());
            self
        }
        pub fn set_training_job_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.training_job_arn = input;
            self
        }
        pub fn tuning_job_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.tuning_job_name = Some(input.into());
            self
        }
        pub fn set_tuning_job_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.tuning_job_name = input;
            self
        }
        pub fn creation_time(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time = Some(input);
            self
        }
        pub fn set_creation_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time = input;
            self
        }
        pub fn training_start_time(mut self, input: smithy_types::Instant) -> Self {
            self.training_start_time = Some(input);
            self
        }
        pub fn set_training_start_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.training_start_time = input;
            self
        }
        pub fn training_end_time(mut self, input: smithy_types::Instant) -> Self {
            self.training_end_time = Some(input);
            self
        }
        pub fn set_training_end_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.training_end_time = input;
            self
        }
        pub fn training_job_status(mut self, input: crate::model::TrainingJobStatus) -> Self {
            self.training_job_status = Some(input);
            self
        }
        pub fn set_training_job_status(mut self, input: std::option::Option<crate::model::TrainingJobStatus>) -> Self {
            self.training_job_status = input;
            self
        }
        /// Adds a key-value pair to `TunedHyperParameters`.
        ///
        /// To override the contents of this collection use [`set_tuned_hyper_parameters`](Self::set_tuned_hyper_parameters).
        pub fn tuned_hyper_parameters(mut self, k: impl Into<std::string::String>, v: impl Into<std::string::String>) -> Self {
            let mut hash_map = self.tuned_hyper_parameters.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tuned_hyper_parameters = Some(hash_map);
            self
        }
        pub fn set_tuned_hyper_parameters(mut self, input: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>) -> Self {
            self.tuned_hyper_parameters = input;
            self
        }
        pub fn failure_reason(mut self, input: impl Into<std::string::String>) -> Self {
            self.failure_reason = Some(input.into());
            self
        }
        pub fn set_failure_reason(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.failure_reason = input;
            self
        }
        pub fn final_hyper_parameter_tuning_job_objective_metric(mut self, input: crate::model::FinalHyperParameterTuningJobObjectiveMetric) -> Self {
            self.final_hyper_parameter_tuning_job_objective_metric = Some(input);
            self
        }
        pub fn set_final_hyper_parameter_tuning_job_objective_metric(mut self, input: std::option::Option<crate::model::FinalHyperParameterTuningJobObjectiveMetric>) -> Self {
            self.final_hyper_parameter_tuning_job_objective_metric = input;
            self
        }
        pub fn objective_status(mut self, input: crate::model::ObjectiveStatus) -> Self {
            self.objective_status = Some(input);
            self
        }
        pub fn set_objective_status(mut self, input: std::option::Option<crate::model::ObjectiveStatus>) -> Self {
            self.objective_status = input;
            self
        }
        /// Consumes the builder and constructs a [`HyperParameterTrainingJobSummary`](crate::model::HyperParameterTrainingJobSummary)
        pub fn build(self) -> crate::model::HyperParameterTrainingJobSummary {
            crate::model::HyperParameterTrainingJobSummary {
                training_job_definition_name: self.training_job_definition_name,
                training_job_name: self.training_job_name,
                training_job_arn: self.training_job_arn,
                tuning_job_name: self.tuning_job_name,
                creation_time: self.creation_time,
                training_start_time: self.training_start_time,
                training_end_time: self.training_end_time,
                training_job_status: self.training_job_status,
                tuned_hyper_parameters: self.tuned_hyper_parameters,
                failure_reason: self.failure_reason,
                final_hyper_parameter_tuning_job_objective_metric: self.final_hyper_parameter_tuning_job_objective_metric,
                objective_status: self.objective_status,
            }
        }
    }
}
impl HyperParameterTrainingJobSummary {
    /// Creates a new builder-style object to manufacture [`HyperParameterTrainingJobSummary`](crate::model::HyperParameterTrainingJobSummary)
    pub fn builder() -> crate::model::hyper_parameter_training_job_summary::Builder {
        crate::model::hyper_parameter_training_job_summary::Builder::default()
    }
}

/// How a tuning job searches the hyperparameter space and when it stops.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct HyperParameterTuningJobConfig {
    #[serde(rename = "Strategy")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub strategy: std::option::Option<crate::model::HyperParameterTuningJobStrategyType>,
    #[serde(rename = "HyperParameterTuningJobObjective")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hyper_parameter_tuning_job_objective: std::option::Option<crate::model::HyperParameterTuningJobObjective>,
    #[serde(rename = "ResourceLimits")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_limits: std::option::Option<crate::model::ResourceLimits>,
    #[serde(rename = "ParameterRanges")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub parameter_ranges: std::option::Option<crate::model::ParameterRanges>,
    #[serde(rename = "TrainingJobEarlyStoppingType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub training_job_early_stopping_type: std::option::Option<crate::model::TrainingJobEarlyStoppingType>,
    #[serde(rename = "TuningJobCompletionCriteria")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tuning_job_completion_criteria: std::option::Option<crate::model::TuningJobCompletionCriteria>,
}
impl HyperParameterTuningJobConfig {
    pub fn strategy(&self) -> std::option::Option<&crate::model::HyperParameterTuningJobStrategyType> {
        self.strategy.as_ref()
    }

    pub fn hyper_parameter_tuning_job_objective(&self) -> std::option::Option<&crate::model::HyperParameterTuningJobObjective> {
        self.hyper_parameter_tuning_job_objective.as_ref()
    }

    pub fn resource_limits(&self) -> std::option::Option<&crate::model::ResourceLimits> {
        self.resource_limits.as_ref()
    }

    pub fn parameter_ranges(&self) -> std::option::Option<&crate::model::ParameterRanges> {
        self.parameter_ranges.as_ref()
    }

    pub fn training_job_early_stopping_type(&self) -> std::option::Option<&crate::model::TrainingJobEarlyStoppingType> {
        self.training_job_early_stopping_type.as_ref()
    }

    pub fn tuning_job_completion_criteria(&self) -> std::option::Option<&crate::model::TuningJobCompletionCriteria> {
        self.tuning_job_completion_criteria.as_ref()
    }
}
/// See [`HyperParameterTuningJobConfig`](crate::model::HyperParameterTuningJobConfig)
pub mod hyper_parameter_tuning_job_config {
    /// A builder for [`HyperParameterTuningJobConfig`](crate::model::HyperParameterTuningJobConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        strategy: std::option::Option<crate::model::HyperParameterTuningJobStrategyType>,
        hyper_parameter_tuning_job_objective: std::option::Option<crate::model::HyperParameterTuningJobObjective>,
        resource_limits: std::option::Option<crate::model::ResourceLimits>,
        parameter_ranges: std::option::Option<crate::model::ParameterRanges>,
        training_job_early_stopping_type: std::option::Option<crate::model::TrainingJobEarlyStoppingType>,
        tuning_job_completion_criteria: std::option::Option<crate::model::TuningJobCompletionCriteria>,
    }
    impl Builder {
        pub fn strategy(mut self, input: crate::model::HyperParameterTuningJobStrategyType) -> Self {
            self.strategy = Some(input);
            self
        }
        pub fn set_strategy(mut self, input: std::option::Option<crate::model::HyperParameterTuningJobStrategyType>) -> Self {
            self.strategy = input;
            self
        }
        pub fn hyper_parameter_tuning_job_objective(mut self, input: crate::model::HyperParameterTuningJobObjective) -> Self {
            self.hyper_parameter_tuning_job_objective = Some(input);
            self
        }
        pub fn set_hyper_parameter_tuning_job_objective(mut self, input: std::option::Option<crate::model::HyperParameterTuningJobObjective>) -> Self {
            self.hyper_parameter_tuning_job_objective = input;
            self
        }
        pub fn resource_limits(mut self, input: crate::model::ResourceLimits) -> Self {
            self.resource_limits = Some(input);
            self
        }
        pub fn set_resource_limits(mut self, input: std::option::Option<crate::model::ResourceLimits>) -> Self {
            self.resource_limits = input;
            self
        }
        pub fn parameter_ranges(mut self, input: crate::model::ParameterRanges) -> Self {
            self.parameter_ranges = Some(input);
            self
        }
        pub fn set_parameter_ranges(mut self, input: std::option::Option<crate::model::ParameterRanges>) -> Self {
            self.parameter_ranges = input;
            self
        }
        pub fn training_job_early_stopping_type(mut self, input: crate::model::TrainingJobEarlyStoppingType) -> Self {
            self.training_job_early_stopping_type = Some(input);
            self
        }
        pub fn set_training_job_early_stopping_type(mut self, input: std::option::Option<crate::model::TrainingJobEarlyStoppingType>) -> Self {
            self.training_job_early_stopping_type = input;
            self
        }
        pub fn tuning_job_completion_criteria(mut self, input: crate::model::TuningJobCompletionCriteria) -> Self {
            self.tuning_job_completion_criteria = Some(input);
            self
        }
        pub fn set_tuning_job_completion_criteria(mut self, input: std::option::Option<crate::model::TuningJobCompletionCriteria>) -> Self {
            self.tuning_job_completion_criteria = input;
            self
        }
        /// Consumes the builder and constructs a [`HyperParameterTuningJobConfig`](crate::model::HyperParameterTuningJobConfig)
        pub fn build(self) -> crate::model::HyperParameterTuningJobConfig {
            crate::model::HyperParameterTuningJobConfig {
                strategy: self.strategy,
                hyper_parameter_tuning_job_objective: self.hyper_parameter_tuning_job_objective,
                resource_limits: self.resource_limits,
                parameter_ranges: self.parameter_ranges,
                training_job_early_stopping_type: self.training_job_early_stopping_type,
                tuning_job_completion_criteria: self.tuning_job_completion_criteria,
            }
        }
    }
}
impl HyperParameterTuningJobConfig {
    /// Creates a new builder-style object to manufacture [`HyperParameterTuningJobConfig`](crate::model::HyperParameterTuningJobConfig)
    pub fn builder() -> crate::model::hyper_parameter_tuning_job_config::Builder {
        crate::model::hyper_parameter_tuning_job_config::Builder::default()
    }
}

/// The metric a tuning job optimizes, and in which direction.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct HyperParameterTuningJobObjective {
    #[serde(rename = "Type")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<crate::model::HyperParameterTuningJobObjectiveType>,
    #[serde(rename = "MetricName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub metric_name: std::option::Option<std::string::String>,
}
impl HyperParameterTuningJobObjective {
    pub fn r#type(&self) -> std::option::Option<&crate::model::HyperParameterTuningJobObjectiveType> {
        self.r#type.as_ref()
    }

    pub fn metric_name(&self) -> std::option::Option<&str> {
        self.metric_name.as_deref()
    }
}
/// See [`HyperParameterTuningJobObjective`](crate::model::HyperParameterTuningJobObjective)
pub mod hyper_parameter_tuning_job_objective {
    /// A builder for [`HyperParameterTuningJobObjective`](crate::model::HyperParameterTuningJobObjective)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        r#type: std::option::Option<crate::model::HyperParameterTuningJobObjectiveType>,
        metric_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn r#type(mut self, input: crate::model::HyperParameterTuningJobObjectiveType) -> Self {
            self.r#type = Some(input);
            self
        }
        pub fn set_type(mut self, input: std::option::Option<crate::model::HyperParameterTuningJobObjectiveType>) -> Self {
            self.r#type = input;
            self
        }
        pub fn metric_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.metric_name = Some(input.into());
            self
        }
        pub fn set_metric_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.metric_name = input;
            self
        }
        /// Consumes the builder and constructs a [`HyperParameterTuningJobObjective`](crate::model::HyperParameterTuningJobObjective)
        pub fn build(self) -> crate::model::HyperParameterTuningJobObjective {
            crate::model::HyperParameterTuningJobObjective {
                r#type: self.r#type,
                metric_name: self.metric_name,
            }
        }
    }
}
impl HyperParameterTuningJobObjective {
    /// Creates a new builder-style object to manufacture [`HyperParameterTuningJobObjective`](crate::model::HyperParameterTuningJobObjective)
    pub fn builder() -> crate::model::hyper_parameter_tuning_job_objective::Builder {
        crate::model::hyper_parameter_tuning_job_objective::Builder::default()
    }
}

/// Summary of a tuning job, as returned by `ListHyperParameterTuningJobs`.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct HyperParameterTuningJobSummary {
    #[serde(rename = "HyperParameterTuningJobName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hyper_parameter_tuning_job_name: std::option::Option<std::string::String>,
    #[serde(rename = "HyperParameterTuningJobArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hyper_parameter_tuning_job_arn: std::option::Option<std::string::String>,
    #[serde(rename = "HyperParameterTuningJobStatus")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hyper_parameter_tuning_job_status: std::option::Option<crate::model::HyperParameterTuningJobStatus>,
    #[serde(rename = "Strategy")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub strategy: std::option::Option<crate::model::HyperParameterTuningJobStrategyType>,
    #[serde(rename = "CreationTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "HyperParameterTuningEndTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hyper_parameter_tuning_end_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "LastModifiedTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_modified_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "TrainingJobStatusCounters")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub training_job_status_counters: std::option::Option<crate::model::TrainingJobStatusCounters>,
    #[serde(rename = "ObjectiveStatusCounters")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub objective_status_counters: std::option::Option<crate::model::ObjectiveStatusCounters>,
    #[serde(rename = "ResourceLimits")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_limits: std::option::Option<crate::model::ResourceLimits>,
}
impl HyperParameterTuningJobSummary {
    pub fn hyper_parameter_tuning_job_name(&self) -> std::option::Option<&str> {
        self.hyper_parameter_tuning_job_name.as_deref()
    }

    pub fn hyper_parameter_tuning_job_arn(&self) -> std::option::Option<&str> {
        self.hyper_parameter_tuning_job_arn.as_deref()
    }

    pub fn hyper_parameter_tuning_job_status(&self) -> std::option::Option<&crate::model::HyperParameterTuningJobStatus> {
        self.hyper_parameter_tuning_job_status.as_ref()
    }

    pub fn strategy(&self) -> std::option::Option<&crate::model::HyperParameterTuningJobStrategyType> {
        self.strategy.as_ref()
    }

    pub fn creation_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time.as_ref()
    }

    pub fn hyper_parameter_tuning_end_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.hyper_parameter_tuning_end_time.as_ref()
    }

    pub fn last_modified_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.last_modified_time.as_ref()
    }

    pub fn training_job_status_counters(&self) -> std::option::Option<&crate::model::TrainingJobStatusCounters> {
        self.training_job_status_counters.as_ref()
    }

    pub fn objective_status_counters(&self) -> std::option::Option<&crate::model::ObjectiveStatusCounters> {
        self.objective_status_counters.as_ref()
    }

    pub fn resource_limits(&self) -> std::option::Option<&crate::model::ResourceLimits> {
        self.resource_limits.as_ref()
    }
}
/// See [`HyperParameterTuningJobSummary`](crate::model::HyperParameterTuningJobSummary)
pub mod hyper_parameter_tuning_job_summary {
    /// A builder for [`HyperParameterTuningJobSummary`](crate::model::HyperParameterTuningJobSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        hyper_parameter_tuning_job_name: std::option::Option<std::string::String>,
        hyper_parameter_tuning_job_arn: std::option::Option<std::string::String>,
        hyper_parameter_tuning_job_status: std::option::Option<crate::model::HyperParameterTuningJobStatus>,
        strategy: std::option::Option<crate::model::HyperParameterTuningJobStrategyType>,
        creation_time: std::option::Option<smithy_types::Instant>,
        hyper_parameter_tuning_end_time: std::option::Option<smithy_types::Instant>,
        last_modified_time: std::option::Option<smithy_types::Instant>,
        training_job_status_counters: std::option::Option<crate::model::TrainingJobStatusCounters>,
        objective_status_counters: std::option::Option<crate::model::ObjectiveStatusCounters>,
        resource_limits: std::option::Option<crate::model::ResourceLimits>,
    }
    impl Builder {
        pub fn hyper_parameter_tuning_job_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.hyper_parameter_tuning_job_name = Some(input.into());
            self
        }
        pub fn set_hyper_parameter_tuning_job_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.hyper_parameter_tuning_job_name = input;
            self
        }
        pub fn hyper_parameter_tuning_job_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.hyper_parameter_tuning_job_arn = Some(input.into());
            self
        }
        pub fn set_hyper_parameter_tuning_job_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.hyper_parameter_tuning_job_arn = input;
            self
        }
        pub fn hyper_parameter_tuning_job_status(mut self, input: crate::model::HyperParameterTuningJobStatus) -> Self {
            self.hyper_parameter_tuning_job_status = Some(input);
            self
        }
        pub fn set_hyper_parameter_tuning_job_status(mut self, input: std::option::Option<crate::model::HyperParameterTuningJobStatus>) -> Self {
            self.hyper_parameter_tuning_job_status = input;
            self
        }
        pub fn strategy(mut self, input: crate::model::HyperParameterTuningJobStrategyType) -> Self {
            self.strategy = Some(input);
            self
        }
        pub fn set_strategy(mut self, input: std::option::Option<crate::model::HyperParameterTuningJobStrategyType>) -> Self {
            self.strategy = input;
            self
        }
        pub fn creation_time(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time = Some(input);
            self
        }
        pub fn set_creation_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time = input;
            self
        }
        pub fn hyper_parameter_tuning_end_time(mut self, input: smithy_types::Instant) -> Self {
            self.hyper_parameter_tuning_end_time = Some(input);
            self
        }
        pub fn set_hyper_parameter_tuning_end_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.hyper_parameter_tuning_end_time = input;
            self
        }
        pub fn last_modified_time(mut self, input: smithy_types::Instant) -> Self {
            self.last_modified_time = Some(input);
            self
        }
        pub fn set_last_modified_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified_time = input;
            self
        }
        pub fn training_job_status_counters(mut self, input: crate::model::TrainingJobStatusCounters) -> Self {
            self.training_job_status_counters = Some(input);
            self
        }
        pub fn set_training_job_status_counters(mut self, input: std::option::Option<crate::model::TrainingJobStatusCounters>) -> Self {
            self.training_job_status_counters = input;
            self
        }
        pub fn objective_status_counters(mut self, input: crate::model::ObjectiveStatusCounters) -> Self {
            self.objective_status_counters = Some(input);
            self
        }
        pub fn set_objective_status_counters(mut self, input: std::option::Option<crate::model::ObjectiveStatusCounters>) -> Self {
            self.objective_status_counters = input;
            self
        }
        pub fn resource_limits(mut self, input: crate::model::ResourceLimits) -> Self {
            self.resource_limits = Some(input);
            self
        }
        pub fn set_resource_limits(mut self, input: std::option::Option<crate::model::ResourceLimits>) -> Self {
            self.resource_limits = input;
            self
        }
        /// Consumes the builder and constructs a [`HyperParameterTuningJobSummary`](crate::model::HyperParameterTuningJobSummary)
        pub fn build(self) -> crate::model::HyperParameterTuningJobSummary {
            crate::model::HyperParameterTuningJobSummary {
                hyper_parameter_tuning_job_name: self.hyper_parameter_tuning_job_name,
                hyper_parameter_tuning_job_arn: self.hyper_parameter_tuning_job_arn,
                hyper_parameter_tuning_job_status: self.hyper_parameter_tuning_job_status,
                strategy: self.strategy,
                creation_time: self.creation_time,
                hyper_parameter_tuning_end_time: self.hyper_parameter_tuning_end_time,
                last_modified_time: self.last_modified_time,
                training_job_status_counters: self.training_job_status_counters,
                objective_status_counters: self.objective_status_counters,
                resource_limits: self.resource_limits,
            }
        }
    }
}
impl HyperParameterTuningJobSummary {
    /// Creates a new builder-style object to manufacture [`HyperParameterTuningJobSummary`](crate::model::HyperParameterTuningJobSummary)
    pub fn builder() -> crate::model::hyper_parameter_tuning_job_summary::Builder {
        crate::model::hyper_parameter_tuning_job_summary::Builder::default()
    }
}

/// Previous tuning jobs whose results seed a new tuning job.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct HyperParameterTuningJobWarmStartConfig {
    #[serde(rename = "ParentHyperParameterTuningJobs")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub parent_hyper_parameter_tuning_jobs: std::option::Option<std::vec::Vec<crate::model::ParentHyperParameterTuningJob>>,
    #[serde(rename = "WarmStartType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warm_start_type: std::option::Option<crate::model::HyperParameterTuningJobWarmStartType>,
}
impl HyperParameterTuningJobWarmStartConfig {
    pub fn parent_hyper_parameter_tuning_jobs(&self) -> std::option::Option<&[crate::model::ParentHyperParameterTuningJob]> {
        self.parent_hyper_parameter_tuning_jobs.as_deref()
    }

    pub fn warm_start_type(&self) -> std::option::Option<&crate::model::HyperParameterTuningJobWarmStartType> {
        self.warm_start_type.as_ref()
    }
}
/// See [`HyperParameterTuningJobWarmStartConfig`](crate::model::HyperParameterTuningJobWarmStartConfig)
pub mod hyper_parameter_tuning_job_warm_start_config {
    /// A builder for [`HyperParameterTuningJobWarmStartConfig`](crate::model::HyperParameterTuningJobWarmStartConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        parent_hyper_parameter_tuning_jobs: std::option::Option<std::vec::Vec<crate::model::ParentHyperParameterTuningJob>>,
        warm_start_type: std::option::Option<crate::model::HyperParameterTuningJobWarmStartType>,
    }
    impl Builder {
        /// Appends an item to `ParentHyperParameterTuningJobs`.
        ///
        /// To override the contents of this collection use [`set_parent_hyper_parameter_tuning_jobs`](Self::set_parent_hyper_parameter_tuning_jobs).
        pub fn parent_hyper_parameter_tuning_jobs(mut self, input: impl Into<crate::model::ParentHyperParameterTuningJob>) -> Self {
            let mut v = self.parent_hyper_parameter_tuning_jobs.unwrap_or_default();
            v.push(input.into());
            self.parent_hyper_parameter_tuning_jobs = Some(v);
            self
        }
        pub fn set_parent_hyper_parameter_tuning_jobs(mut self, input: std::option::Option<std::vec::Vec<crate::model::ParentHyperParameterTuningJob>>) -> Self {
            self.parent_hyper_parameter_tuning_jobs = input;
            self
        }
        pub fn warm_start_type(mut self, input: crate::model::HyperParameterTuningJobWarmStartType) -> Self {
            self.warm_start_type = Some(input);
            self
        }
        pub fn set_warm_start_type(mut self, input: std::option::Option<crate::model::HyperParameterTuningJobWarmStartType>) -> Self {
            self.warm_start_type = input;
            self
        }
        /// Consumes the builder and constructs a [`HyperParameterTuningJobWarmStartConfig`](crate::model::HyperParameterTuningJobWarmStartConfig)
        pub fn build(self) -> crate::model::HyperParameterTuningJobWarmStartConfig {
            crate::model::HyperParameterTuningJobWarmStartConfig {
                parent_hyper_parameter_tuning_jobs: self.parent_hyper_parameter_tuning_jobs,
                warm_start_type: self.warm_start_type,
            }
        }
    }
}
impl HyperParameterTuningJobWarmStartConfig {
    /// Creates a new builder-style object to manufacture [`HyperParameterTuningJobWarmStartConfig`](crate::model::HyperParameterTuningJobWarmStartConfig)
    pub fn builder() -> crate::model::hyper_parameter_tuning_job_warm_start_config::Builder {
        crate::model::hyper_parameter_tuning_job_warm_start_config::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct IntegerParameterRange {
    #[serde(rename = "Name")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "MinValue")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub min_value: std::option::Option<std::string::String>,
    #[serde(rename = "MaxValue")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_value: std::option::Option<std::string::String>,
    #[serde(rename = "ScalingType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scaling_type: std::option::Option<crate::model::HyperParameterScalingType>,
}
impl IntegerParameterRange {
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }

    pub fn min_value(&self) -> std::option::Option<&str> {
        self.min_value.as_deref()
    }

    pub fn max_value(&self) -> std::option::Option<&str> {
        self.max_value.as_deref()
    }

    pub fn scaling_type(&self) -> std::option::Option<&crate::model::HyperParameterScalingType> {
        self.scaling_type.as_ref()
    }
}
/// See [`IntegerParameterRange`](crate::model::IntegerParameterRange)
pub mod integer_parameter_range {
    /// A builder for [`IntegerParameterRange`](crate::model::IntegerParameterRange)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        name: std::option::Option<std::string::String>,
        min_value: std::option::Option<std::string::String>,
        max_value: std::option::Option<std::string::String>,
        scaling_type: std::option::Option<crate::model::HyperParameterScalingType>,
    }
    impl Builder {
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn min_value(mut self, input: impl Into<std::string::String>) -> Self {
            self.min_value = Some(input.into());
            self
        }
        pub fn set_min_value(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.min_value = input;
            self
        }
        pub fn max_value(mut self, input: impl Into<std::string::String>) -> Self {
            self.max_value = Some(input.into());
            self
        }
        pub fn set_max_value(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.max_value = input;
            self
        }
        pub fn scaling_type(mut self, input: crate::model::HyperParameterScalingType) -> Self {
            self.scaling_type = Some(input);
            self
        }
        pub fn set_scaling_type(mut self, input: std::option::Option<crate::model::HyperParameterScalingType>) -> Self {
            self.scaling_type = input;
            self
        }
        /// Consumes the builder and constructs a [`IntegerParameterRange`](crate::model::IntegerParameterRange)
        pub fn build(self) -> crate::model::IntegerParameterRange {
            crate::model::IntegerParameterRange {
                name: self.name,
                min_value: self.min_value,
                max_value: self.max_value,
                scaling_type: self.scaling_type,
            }
        }
    }
}
impl IntegerParameterRange {
    /// Creates a new builder-style object to manufacture [`IntegerParameterRange`](crate::model::IntegerParameterRange)
    pub fn builder() -> crate::model::integer_parameter_range::Builder {
        crate::model::integer_parameter_range::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct LabelCounters {
    #[serde(rename = "TotalLabeled")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub total_labeled: std::option::Option<i32>,
    #[serde(rename = "HumanLabeled")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub human_labeled: std::option::Option<i32>,
    #[serde(rename = "MachineLabeled")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub machine_labeled: std::option::Option<i32>,
    #[serde(rename = "FailedNonRetryableError")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub failed_non_retryable_error: std::option::Option<i32>,
    #[serde(rename = "Unlabeled")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub unlabeled: std::option::Option<i32>,
}
impl LabelCounters {
    pub fn total_labeled(&self) -> std::option::Option<i32> {
        self.total_labeled
    }

    pub fn human_labeled(&self) -> std::option::Option<i32> {
        self.human_labeled
    }

    pub fn machine_labeled(&self) -> std::option::Option<i32> {
        self.machine_labeled
    }

    pub fn failed_non_retryable_error(&self) -> std::option::Option<i32> {
        self.failed_non_retryable_error
    }

    pub fn unlabeled(&self) -> std::option::Option<i32> {
        self.unlabeled
    }
}
/// See [`LabelCounters`](crate::model::LabelCounters)
pub mod label_counters {
    /// A builder for [`LabelCounters`](crate::model::LabelCounters)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        total_labeled: std::option::Option<i32>,
        human_labeled: std::option::Option<i32>,
        machine_labeled: std::option::Option<i32>,
        failed_non_retryable_error: std::option::Option<i32>,
        unlabeled: std::option::Option<i32>,
    }
    impl Builder {
        pub fn total_labeled(mut self, input: i32) -> Self {
            self.total_labeled = Some(input);
            self
        }
        pub fn set_total_labeled(mut self, input: std::option::Option<i32>) -> Self {
            self.total_labeled = input;
            self
        }
        pub fn human_labeled(mut self, input: i32) -> Self {
            self.human_labeled = Some(input);
            self
        }
        pub fn set_human_labeled(mut self, input: std::option::Option<i32>) -> Self {
            self.human_labeled = input;
            self
        }
        pub fn machine_labeled(mut self, input: i32) -> Self {
            self.machine_labeled = Some(input);
            self
        }
        pub fn set_machine_labeled(mut self, input: std::option::Option<i32>) -> Self {
            self.machine_labeled = input;
            self
        }
        pub fn failed_non_retryable_error(mut self, input: i32) -> Self {
            self.failed_non_retryable_error = Some(input);
            self
        }
        pub fn set_failed_non_retryable_error(mut self, input: std::option::Option<i32>) -> Self {
            self.failed_non_retryable_error = input;
            self
        }
        pub fn unlabeled(mut self, input: i32) -> Self {
            self.unlabeled = Some(input);
            self
        }
        pub fn set_unlabeled(mut self, input: std::option::Option<i32>) -> Self {
            self.unlabeled = input;
            self
        }
        /// Consumes the builder and constructs a [`LabelCounters`](crate::model::LabelCounters)
        pub fn build(self) -> crate::model::LabelCounters {
            crate::model::LabelCounters {
                total_labeled: self.total_labeled,
                human_labeled: self.human_labeled,
                machine_labeled: self.machine_labeled,
                failed_non_retryable_error: self.failed_non_retryable_error,
                unlabeled: self.unlabeled,
            }
        }
    }
}
impl LabelCounters {
    /// Creates a new builder-style object to manufacture [`LabelCounters`](crate::model::LabelCounters)
    pub fn builder() -> crate::model::label_counters::Builder {
        crate::model::label_counters::Builder::default()
    }
}

/// Automated data labeling settings.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct LabelingJobAlgorithmsConfig {
    #[serde(rename = "LabelingJobAlgorithmSpecificationArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub labeling_job_algorithm_specification_arn: std::option::Option<std::string::String>,
    #[serde(rename = "InitialActiveLearningModelArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub initial_active_learning_model_arn: std::option::Option<std::string::String>,
    #[serde(rename = "LabelingJobResourceConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub labeling_job_resource_config: std::option::Option<crate::model::LabelingJobResourceConfig>,
}
impl LabelingJobAlgorithmsConfig {
    pub fn labeling_job_algorithm_specification_arn(&self) -> std::option::Option<&str> {
        self.labeling_job_algorithm_specification_arn.as_deref()
    }

    pub fn initial_active_learning_model_arn(&self) -> std::option::Option<&str> {
        self.initial_active_learning_model_arn.as_deref()
    }

    pub fn labeling_job_resource_config(&self) -> std::option::Option<&crate::model::LabelingJobResourceConfig> {
        self.labeling_job_resource_config.as_ref()
    }
}
/// See [`LabelingJobAlgorithmsConfig`](crate::model::LabelingJobAlgorithmsConfig)
pub mod labeling_job_algorithms_config {
    /// A builder for [`LabelingJobAlgorithmsConfig`](crate::model::LabelingJobAlgorithmsConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        labeling_job_algorithm_specification_arn: std::option::Option<std::string::String>,
        initial_active_learning_model_arn: std::option::Option<std::string::String>,
        labeling_job_resource_config: std::option::Option<crate::model::LabelingJobResourceConfig>,
    }
    impl Builder {
        pub fn labeling_job_algorithm_specification_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.labeling_job_algorithm_specification_arn = Some(input.into());
            self
        }
        pub fn set_labeling_job_algorithm_specification_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.labeling_job_algorithm_specification_arn = input;
            self
        }
        pub fn initial_active_learning_model_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.initial_active_learning_model_arn = Some(input.into());
            self
        }
        pub fn set_initial_active_learning_model_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.initial_active_learning_model_arn = input;
            self
        }
        pub fn labeling_job_resource_config(mut self, input: crate::model::LabelingJobResourceConfig) -> Self {
            self.labeling_job_resource_config = Some(input);
            self
        }
        pub fn set_labeling_job_resource_config(mut self, input: std::option::Option<crate::model::LabelingJobResourceConfig>) -> Self {
            self.labeling_job_resource_config = input;
            self
        }
        /// Consumes the builder and constructs a [`LabelingJobAlgorithmsConfig`](crate::model::LabelingJobAlgorithmsConfig)
        pub fn build(self) -> crate::model::LabelingJobAlgorithmsConfig {
            crate::model::LabelingJobAlgorithmsConfig {
                labeling_job_algorithm_specification_arn: self.labeling_job_algorithm_specification_arn,
                initial_active_learning_model_arn: self.initial_active_learning_model_arn,
                labeling_job_resource_config: self.labeling_job_resource_config,
            }
        }
    }
}
impl LabelingJobAlgorithmsConfig {
    /// Creates a new builder-style object to manufacture [`LabelingJobAlgorithmsConfig`](crate::model::LabelingJobAlgorithmsConfig)
    pub fn builder() -> crate::model::labeling_job_algorithms_config::Builder {
        crate::model::labeling_job_algorithms_config::Builder::default()
    }
}

/// Declarations about the content of the data objects being labeled.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct LabelingJobDataAttributes {
    #[serde(rename = "ContentClassifiers")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub content_classifiers: std::option::Option<std::vec::Vec<crate::model::ContentClassifier>>,
}
impl LabelingJobDataAttributes {
    pub fn content_classifiers(&self) -> std::option::Option<&[crate::model::ContentClassifier]> {
        self.content_classifiers.as_deref()
    }
}
/// See [`LabelingJobDataAttributes`](crate::model::LabelingJobDataAttributes)
pub mod labeling_job_data_attributes {
    /// A builder for [`LabelingJobDataAttributes`](crate::model::LabelingJobDataAttributes)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        content_classifiers: std::option::Option<std::vec::Vec<crate::model::ContentClassifier>>,
    }
    impl Builder {
        /// Appends an item to `ContentClassifiers`.
        ///
        /// To override the contents of this collection use [`set_content_classifiers`](Self::set_content_classifiers).
        pub fn content_classifiers(mut self, input: impl Into<crate::model::ContentClassifier>) -> Self {
            let mut v = self.content_classifiers.unwrap_or_default();
            v.push(input.into());
            self.content_classifiers = Some(v);
            self
        }
        pub fn set_content_classifiers(mut self, input: std::option::Option<std::vec::Vec<crate::model::ContentClassifier>>) -> Self {
            self.content_classifiers = input;
            self
        }
        /// Consumes the builder and constructs a [`LabelingJobDataAttributes`](crate::model::LabelingJobDataAttributes)
        pub fn build(self) -> crate::model::LabelingJobDataAttributes {
            crate::model::LabelingJobDataAttributes {
                content_classifiers: self.content_classifiers,
            }
        }
    }
}
impl LabelingJobDataAttributes {
    /// Creates a new builder-style object to manufacture [`LabelingJobDataAttributes`](crate::model::LabelingJobDataAttributes)
    pub fn builder() -> crate::model::labeling_job_data_attributes::Builder {
        crate::model::labeling_job_data_attributes::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct LabelingJobDataSource {
    #[serde(rename = "S3DataSource")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub s3_data_source: std::option::Option<crate::model::LabelingJobS3DataSource>,
}
impl LabelingJobDataSource {
    pub fn s3_data_source(&self) -> std::option::Option<&crate::model::LabelingJobS3DataSource> {
        self.s3_data_source.as_ref()
    }
}
/// See [`LabelingJobDataSource`](crate::model::LabelingJobDataSource)
pub mod labeling_job_data_source {
    /// A builder for [`LabelingJobDataSource`](crate::model::LabelingJobDataSource)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        s3_data_source: std::option::Option<crate::model::LabelingJobS3DataSource>,
    }
    impl Builder {
        pub fn s3_data_source(mut self, input: crate::model::LabelingJobS3DataSource) -> Self {
            self.s3_data_source = Some(input);
            self
        }
        pub fn set_s3_data_source(mut self, input: std::option::Option<crate::model::LabelingJobS3DataSource>) -> Self {
            self.s3_data_source = input;
            self
        }
        /// Consumes the builder and constructs a [`LabelingJobDataSource`](crate::model::LabelingJobDataSource)
        pub fn build(self) -> crate::model::LabelingJobDataSource {
            crate::model::LabelingJobDataSource {
                s3_data_source: self.s3_data_source,
            }
        }
    }
}
impl LabelingJobDataSource {
    /// Creates a new builder-style object to manufacture [`LabelingJobDataSource`](crate::model::LabelingJobDataSource)
    pub fn builder() -> crate::model::labeling_job_data_source::Builder {
        crate::model::labeling_job_data_source::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct LabelingJobInputConfig {
    #[serde(rename = "DataSource")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data_source: std::option::Option<crate::model::LabelingJobDataSource>,
    #[serde(rename = "DataAttributes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data_attributes: std::option::Option<crate::model::LabelingJobDataAttributes>,
}
impl LabelingJobInputConfig {
    pub fn data_source(&self) -> std::option::Option<&crate::model::LabelingJobDataSource> {
        self.data_source.as_ref()
    }

    pub fn data_attributes(&self) -> std::option::Option<&crate::model::LabelingJobDataAttributes> {
        self.data_attributes.as_ref()
    }
}
/// See [`LabelingJobInputConfig`](crate::model::LabelingJobInputConfig)
pub mod labeling_job_input_config {
    /// A builder for [`LabelingJobInputConfig`](crate::model::LabelingJobInputConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        data_source: std::option::Option<crate::model::LabelingJobDataSource>,
        data_attributes: std::option::Option<crate::model::LabelingJobDataAttributes>,
    }
    impl Builder {
        pub fn data_source(mut self, input: crate::model::LabelingJobDataSource) -> Self {
            self.data_source = Some(input);
            self
        }
        pub fn set_data_source(mut self, input: std::option::Option<crate::model::LabelingJobDataSource>) -> Self {
            self.data_source = input;
            self
        }
        pub fn data_attributes(mut self, input: crate::model::LabelingJobDataAttributes) -> Self {
            self.data_attributes = Some(input);
            self
        }
        pub fn set_data_attributes(mut self, input: std::option::Option<crate::model::LabelingJobDataAttributes>) -> Self {
            self.data_attributes = input;
            self
        }
        /// Consumes the builder and constructs a [`LabelingJobInputConfig`](crate::model::LabelingJobInputConfig)
        pub fn build(self) -> crate::model::LabelingJobInputConfig {
            crate::model::LabelingJobInputConfig {
                data_source: self.data_source,
                data_attributes: self.data_attributes,
            }
        }
    }
}
impl LabelingJobInputConfig {
    /// Creates a new builder-style object to manufacture [`LabelingJobInputConfig`](crate::model::LabelingJobInputConfig)
    pub fn builder() -> crate::model::labeling_job_input_config::Builder {
        crate::model::labeling_job_input_config::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct LabelingJobOutput {
    #[serde(rename = "OutputDatasetS3Uri")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub output_dataset_s3_uri: std::option::Option<std::string::String>,
    #[serde(rename = "FinalActiveLearningModelArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub final_active_learning_model_arn: std::option::Option<std::string::String>,
}
impl LabelingJobOutput {
    pub fn output_dataset_s3_uri(&self) -> std::option::Option<&str> {
        self.output_dataset_s3_uri.as_deref()
    }

    pub fn final_active_learning_model_arn(&self) -> std::option::Option<&str> {
        self.final_active_learning_model_arn.as_deref()
    }
}
/// See [`LabelingJobOutput`](crate::model::LabelingJobOutput)
pub mod labeling_job_output {
    /// A builder for [`LabelingJobOutput`](crate::model::LabelingJobOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        output_dataset_s3_uri: std::option::Option<std::string::String>,
        final_active_learning_model_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn output_dataset_s3_uri(mut self, input: impl Into<std::string::String>) -> Self {
            self.output_dataset_s3_uri = Some(input.into());
            self
        }
        pub fn set_output_dataset_s3_uri(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.output_dataset_s3_uri = input;
            self
        }
        pub fn final_active_learning_model_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.final_active_learning_model_arn = Some(input.into());
            self
        }
        pub fn set_final_active_learning_model_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.final_active_learning_model_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`LabelingJobOutput`](crate::model::LabelingJobOutput)
        pub fn build(self) -> crate::model::LabelingJobOutput {
            crate::model::LabelingJobOutput {
                output_dataset_s3_uri: self.output_dataset_s3_uri,
                final_active_learning_model_arn: self.final_active_learning_model_arn,
            }
        }
    }
}
impl LabelingJobOutput {
    /// Creates a new builder-style object to manufacture [`LabelingJobOutput`](crate::model::LabelingJobOutput)
    pub fn builder() -> crate::model::labeling_job_output::Builder {
        crate::model::labeling_job_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct LabelingJobOutputConfig {
    #[serde(rename = "S3OutputPath")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub s3_output_path: std::option::Option<std::string::String>,
    #[serde(rename = "KmsKeyId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key_id: std::option::Option<std::string::String>,
}
impl LabelingJobOutputConfig {
    pub fn s3_output_path(&self) -> std::option::Option<&str> {
        self.s3_output_path.as_deref()
    }

    pub fn kms_key_id(&self) -> std::option::Option<&str> {
        self.kms_key_id.as_deref()
    }
}
/// See [`LabelingJobOutputConfig`](crate::model::LabelingJobOutputConfig)
pub mod labeling_job_output_config {
    /// A builder for [`LabelingJobOutputConfig`](crate::model::LabelingJobOutputConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        s3_output_path: std::option::Option<std::string::String>,
        kms_key_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn s3_output_path(mut self, input: impl Into<std::string::String>) -> Self {
            self.s3_output_path = Some(input.into());
            self
        }
        pub fn set_s3_output_path(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.s3_output_path = input;
            self
        }
        pub fn kms_key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.kms_key_id = Some(input.into());
            self
        }
        pub fn set_kms_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.kms_key_id = input;
            self
        }
        /// Consumes the builder and constructs a [`LabelingJobOutputConfig`](crate::model::LabelingJobOutputConfig)
        pub fn build(self) -> crate::model::LabelingJobOutputConfig {
            crate::model::LabelingJobOutputConfig {
                s3_output_path: self.s3_output_path,
                kms_key_id: self.kms_key_id,
            }
        }
    }
}
impl LabelingJobOutputConfig {
    /// Creates a new builder-style object to manufacture [`LabelingJobOutputConfig`](crate::model::LabelingJobOutputConfig)
    pub fn builder() -> crate::model::labeling_job_output_config::Builder {
        crate::model::labeling_job_output_config::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct LabelingJobResourceConfig {
    #[serde(rename = "VolumeKmsKeyId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_kms_key_id: std::option::Option<std::string::String>,
}
impl LabelingJobResourceConfig {
    pub fn volume_kms_key_id(&self) -> std::option::Option<&str> {
        self.volume_kms_key_id.as_deref()
    }
}
/// See [`LabelingJobResourceConfig`](crate::model::LabelingJobResourceConfig)
pub mod labeling_job_resource_config {
    /// A builder for [`LabelingJobResourceConfig`](crate::model::LabelingJobResourceConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        volume_kms_key_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn volume_kms_key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.volume_kms_key_id = Some(input.into());
            self
        }
        pub fn set_volume_kms_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.volume_kms_key_id = input;
            self
        }
        /// Consumes the builder and constructs a [`LabelingJobResourceConfig`](crate::model::LabelingJobResourceConfig)
        pub fn build(self) -> crate::model::LabelingJobResourceConfig {
            crate::model::LabelingJobResourceConfig {
                volume_kms_key_id: self.volume_kms_key_id,
            }
        }
    }
}
impl LabelingJobResourceConfig {
    /// Creates a new builder-style object to manufacture [`LabelingJobResourceConfig`](crate::model::LabelingJobResourceConfig)
    pub fn builder() -> crate::model::labeling_job_resource_config::Builder {
        crate::model::labeling_job_resource_config::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct LabelingJobS3DataSource {
    /// S3 location of the manifest file describing the objects to label.
    #[serde(rename = "ManifestS3Uri")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub manifest_s3_uri: std::option::Option<std::string::String>,
}
impl LabelingJobS3DataSource {
    pub fn manifest_s3_uri(&self) -> std::option::Option<&str> {
        self.manifest_s3_uri.as_deref()
    }
}
/// See [`LabelingJobS3DataSource`](crate::model::LabelingJobS3DataSource)
pub mod labeling_job_s3_data_source {
    /// A builder for [`LabelingJobS3DataSource`](crate::model::LabelingJobS3DataSource)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        manifest_s3_uri: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn manifest_s3_uri(mut self, input: impl Into<std::string::String>) -> Self {
            self.manifest_s3_uri = Some(input.into());
            self
        }
        pub fn set_manifest_s3_uri(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.manifest_s3_uri = input;
            self
        }
        /// Consumes the builder and constructs a [`LabelingJobS3DataSource`](crate::model::LabelingJobS3DataSource)
        pub fn build(self) -> crate::model::LabelingJobS3DataSource {
            crate::model::LabelingJobS3DataSource {
                manifest_s3_uri: self.manifest_s3_uri,
            }
        }
    }
}
impl LabelingJobS3DataSource {
    /// Creates a new builder-style object to manufacture [`LabelingJobS3DataSource`](crate::model::LabelingJobS3DataSource)
    pub fn builder() -> crate::model::labeling_job_s3_data_source::Builder {
        crate::model::labeling_job_s3_data_source::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct LabelingJobStoppingConditions {
    #[serde(rename = "MaxHumanLabeledObjectCount")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_human_labeled_object_count: std::option::Option<i32>,
    #[serde(rename = "MaxPercentageOfInputDatasetLabeled")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_percentage_of_input_dataset_labeled: std::option::Option<i32>,
}
impl LabelingJobStoppingConditions {
    pub fn max_human_labeled_object_count(&self) -> std::option::Option<i32> {
        self.max_human_labeled_object_count
    }

    pub fn max_percentage_of_input_dataset_labeled(&self) -> std::option::Option<i32> {
        self.max_percentage_of_input_dataset_labeled
    }
}
/// See [`LabelingJobStoppingConditions`](crate::model::LabelingJobStoppingConditions)
pub mod labeling_job_stopping_conditions {
    /// A builder for [`LabelingJobStoppingConditions`](crate::model::LabelingJobStoppingConditions)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        max_human_labeled_object_count: std::option::Option<i32>,
        max_percentage_of_input_dataset_labeled: std::option::Option<i32>,
    }
    impl Builder {
        pub fn max_human_labeled_object_count(mut self, input: i32) -> Self {
            self.max_human_labeled_object_count = Some(input);
            self
        }
        pub fn set_max_human_labeled_object_count(mut self, input: std::option::Option<i32>) -> Self {
            self.max_human_labeled_object_count = input;
            self
        }
        pub fn max_percentage_of_input_dataset_labeled(mut self, input: i32) -> Self {
            self.max_percentage_of_input_dataset_labeled = Some(input);
            self
        }
        pub fn set_max_percentage_of_input_dataset_labeled(mut self, input: std::option::Option<i32>) -> Self {
            self.max_percentage_of_input_dataset_labeled = input;
            self
        }
        /// Consumes the builder and constructs a [`LabelingJobStoppingConditions`](crate::model::LabelingJobStoppingConditions)
        pub fn build(self) -> crate::model::LabelingJobStoppingConditions {
            crate::model::LabelingJobStoppingConditions {
                max_human_labeled_object_count: self.max_human_labeled_object_count,
                max_percentage_of_input_dataset_labeled: self.max_percentage_of_input_dataset_labeled,
            }
        }
    }
}
impl LabelingJobStoppingConditions {
    /// Creates a new builder-style object to manufacture [`LabelingJobStoppingConditions`](crate::model::LabelingJobStoppingConditions)
    pub fn builder() -> crate::model::labeling_job_stopping_conditions::Builder {
        crate::model::labeling_job_stopping_conditions::Builder::default()
    }
}

/// Summary of a labeling job, as returned by `ListLabelingJobs`.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct LabelingJobSummary {
    #[serde(rename = "LabelingJobName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub labeling_job_name: std::option::Option<std::string::String>,
    #[serde(rename = "LabelingJobArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub labeling_job_arn: std::option::Option<std::string::String>,
    #[serde(rename = "CreationTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "LastModifiedTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_modified_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "LabelingJobStatus")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub labeling_job_status: std::option::Option<crate::model::LabelingJobStatus>,
    #[serde(rename = "LabelCounters")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub label_counters: std::option::Option<crate::model::LabelCounters>,
    #[serde(rename = "WorkteamArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub workteam_arn: std::option::Option<std::string::String>,
    #[serde(rename = "PreHumanTaskLambdaArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub pre_human_task_lambda_arn: std::option::Option<std::string::String>,
    #[serde(rename = "AnnotationConsolidationLambdaArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub annotation_consolidation_lambda_arn: std::option::Option<std::string::String>,
    #[serde(rename = "FailureReason")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub failure_reason: std::option::Option<std::string::String>,
    #[serde(rename = "LabelingJobOutput")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub labeling_job_output: std::option::Option<crate::model::LabelingJobOutput>,
    #[serde(rename = "InputConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub input_config: std::option::Option<crate::model::LabelingJobInputConfig>,
}
impl LabelingJobSummary {
    pub fn labeling_job_name(&self) -> std::option::Option<&str> {
        self.labeling_job_name.as_deref()
    }

    pub fn labeling_job_arn(&self) -> std::option::Option<&str> {
        self.labeling_job_arn.as_deref()
    }

    pub fn creation_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time.as_ref()
    }

    pub fn last_modified_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.last_modified_time.as_ref()
    }

    pub fn labeling_job_status(&self) -> std::option::Option<&crate::model::LabelingJobStatus> {
        self.labeling_job_status.as_ref()
    }

    pub fn label_counters(&self) -> std::option::Option<&crate::model::LabelCounters> {
        self.label_counters.as_ref()
    }

    pub fn workteam_arn(&self) -> std::option::Option<&str> {
        self.workteam_arn.as_deref()
    }

    pub fn pre_human_task_lambda_arn(&self) -> std::option::Option<&str> {
        self.pre_human_task_lambda_arn.as_deref()
    }

    pub fn annotation_consolidation_lambda_arn(&self) -> std::option::Option<&str> {
        self.annotation_consolidation_lambda_arn.as_deref()
    }

    pub fn failure_reason(&self) -> std::option::Option<&str> {
        self.failure_reason.as_deref()
    }

    pub fn labeling_job_output(&self) -> std::option::Option<&crate::model::LabelingJobOutput> {
        self.labeling_job_output.as_ref()
    }

    pub fn input_config(&self) -> std::option::Option<&crate::model::LabelingJobInputConfig> {
        self.input_config.as_ref()
    }
}
/// See [`LabelingJobSummary`](crate::model::LabelingJobSummary)
pub mod labeling_job_summary {
    /// A builder for [`LabelingJobSummary`](crate::model::LabelingJobSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        labeling_job_name: std::option::Option<std::string::String>,
        labeling_job_arn: std::option::Option<std::string::String>,
        creation_time: std::option::Option<smithy_types::Instant>,
        last_modified_time: std::option::Option<smithy_types::Instant>,
        labeling_job_status: std::option::Option<crate::model::LabelingJobStatus>,
        label_counters: std::option::Option<crate::model::LabelCounters>,
        workteam_arn: std::option::Option<std::string::String>,
        pre_human_task_lambda_arn: std::option::Option<std::string::String>,
        annotation_consolidation_lambda_arn: std::option::Option<std::string::String>,
        failure_reason: std::option::Option<std::string::String>,
        labeling_job_output: std::option::Option<crate::model::LabelingJobOutput>,
        input_config: std::option::Option<crate::model::LabelingJobInputConfig>,
    }
    impl Builder {
        pub fn labeling_job_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.labeling_job_name = Some(input.into());
            self
        }
        pub fn set_labeling_job_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.labeling_job_name = input;
            self
        }
        pub fn labeling_job_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.labeling_job_arn = Some(input.into());
            self
        }
        pub fn set_labeling_job_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.labeling_job_arn = input;
            self
        }
        pub fn creation_time(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time = Some(input);
            self
        }
        pub fn set_creation_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time = input;
            self
        }
        pub fn last_modified_time(mut self, input: smithy_types::Instant) -> Self {
            self.last_modified_time = Some(input);
            self
        }
        pub fn set_last_modified_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified_time = input;
            self
        }
        pub fn labeling_job_status(mut self, input: crate::model::LabelingJobStatus) -> Self {
            self.labeling_job_status = Some(input);
            self
        }
        pub fn set_labeling_job_status(mut self, input: std::option::Option<crate::model::LabelingJobStatus>) -> Self {
            self.labeling_job_status = input;
            self
        }
        pub fn label_counters(mut self, input: crate::model::LabelCounters) -> Self {
            self.label_counters = Some(input);
            self
        }
        pub fn set_label_counters(mut self, input: std::option::Option<crate::model::LabelCounters>) -> Self {
            self.label_counters = input;
            self
        }
        pub fn workteam_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.workteam_arn = Some(input.into());
            self
        }
        pub fn set_workteam_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.workteam_arn = input;
            self
        }
        pub fn pre_human_task_lambda_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.pre_human_task_lambda_arn = Some(input.into());
            self
        }
        pub fn set_pre_human_task_lambda_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.pre_human_task_lambda_arn = input;
            self
        }
        pub fn annotation_consolidation_lambda_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.annotation_consolidation_lambda_arn = Some(input.into());
            self
        }
        pub fn set_annotation_consolidation_lambda_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.annotation_consolidation_lambda_arn = input;
            self
        }
        pub fn failure_reason(mut self, input: impl Into<std::string::String>) -> Self {
            self.failure_reason = Some(input.into());
            self
        }
        pub fn set_failure_reason(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.failure_reason = input;
            self
        }
        pub fn labeling_job_output(mut self, input: crate::model::LabelingJobOutput) -> Self {
            self.labeling_job_output = Some(input);
            self
        }
        pub fn set_labeling_job_output(mut self, input: std::option::Option<crate::model::LabelingJobOutput>) -> Self {
            self.labeling_job_output = input;
            self
        }
        pub fn input_config(mut self, input: crate::model::LabelingJobInputConfig) -> Self {
            self.input_config = Some(input);
            self
        }
        pub fn set_input_config(mut self, input: std::option::Option<crate::model::LabelingJobInputConfig>) -> Self {
            self.input_config = input;
            self
        }
        /// Consumes the builder and constructs a [`LabelingJobSummary`](crate::model::LabelingJobSummary)
        pub fn build(self) -> crate::model::LabelingJobSummary {
            crate::model::LabelingJobSummary {
                labeling_job_name: self.labeling_job_name,
                labeling_job_arn: self.labeling_job_arn,
                creation_time: self.creation_time,
                last_modified_time: self.last_modified_time,
                labeling_job_status: self.labeling_job_status,
                label_counters: self.label_counters,
                workteam_arn: self.workteam_arn,
                pre_human_task_lambda_arn: self.pre_human_task_lambda_arn,
                annotation_consolidation_lambda_arn: self.annotation_consolidation_lambda_arn,
                failure_reason: self.failure_reason,
                labeling_job_output: self.labeling_job_output,
                input_config: self.input_config,
            }
        }
    }
}
impl LabelingJobSummary {
    /// Creates a new builder-style object to manufacture [`LabelingJobSummary`](crate::model::LabelingJobSummary)
    pub fn builder() -> crate::model::labeling_job_summary::Builder {
        crate::model::labeling_job_summary::Builder::default()
    }
}

/// A metric value the training algorithm emitted, and when.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::fmt::Debug, std::default::Default)]
pub struct MetricData {
    #[serde(rename = "MetricName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub metric_name: std::option::Option<std::string::String>,
    #[serde(rename = "Value")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub value: std::option::Option<f32>,
    #[serde(rename = "Timestamp")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub timestamp: std::option::Option<smithy_types::Instant>,
}
impl std::cmp::PartialEq for MetricData {
    fn eq(&self, other: &Self) -> bool {
        self.metric_name == other.metric_name
            && self.value.map(f32::to_bits) == other.value.map(f32::to_bits)
            && self.timestamp == other.timestamp
    }
}
impl std::cmp::Eq for MetricData {}
impl std::hash::Hash for MetricData {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.metric_name, state);
        std::hash::Hash::hash(&self.value.map(f32::to_bits), state);
        std::hash::Hash::hash(&self.timestamp, state);
    }
}
impl MetricData {
    pub fn metric_name(&self) -> std::option::Option<&str> {
        self.metric_name.as_deref()
    }

    pub fn value(&self) -> std::option::Option<f32> {
        self.value
    }

    pub fn timestamp(&self) -> std::option::Option<&smithy_types::Instant> {
        self.timestamp.as_ref()
    }
}
/// See [`MetricData`](crate::model::MetricData)
pub mod metric_data {
    /// A builder for [`MetricData`](crate::model::MetricData)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        metric_name: std::option::Option<std::string::String>,
        value: std::option::Option<f32>,
        timestamp: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
        pub fn metric_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.metric_name = Some(input.into());
            self
        }
        pub fn set_metric_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.metric_name = input;
            self
        }
        pub fn value(mut self, input: f32) -> Self {
            self.value = Some(input);
            self
        }
        pub fn set_value(mut self, input: std::option::Option<f32>) -> Self {
            self.value = input;
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
        /// Consumes the builder and constructs a [`MetricData`](crate::model::MetricData)
        pub fn build(self) -> crate::model::MetricData {
            crate::model::MetricData {
                metric_name: self.metric_name,
                value: self.value,
                timestamp: self.timestamp,
            }
        }
    }
}
impl MetricData {
    /// Creates a new builder-style object to manufacture [`MetricData`](crate::model::MetricData)
    pub fn builder() -> crate::model::metric_data::Builder {
        crate::model::metric_data::Builder::default()
    }
}

/// A metric and the regular expression that extracts it from the algorithm's logs.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct MetricDefinition {
    #[serde(rename = "Name")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "Regex")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub regex: std::option::Option<std::string::String>,
}
impl MetricDefinition {
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }

    pub fn regex(&self) -> std::option::Option<&str> {
        self.regex.as_deref()
    }
}
/// See [`MetricDefinition`](crate::model::MetricDefinition)
pub mod metric_definition {
    /// A builder for [`MetricDefinition`](crate::model::MetricDefinition)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        name: std::option::Option<std::string::String>,
        regex: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn regex(mut self, input: impl Into<std::string::String>) -> Self {
            self.regex = Some(input.into());
            self
        }
        pub fn set_regex(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.regex = input;
            self
        }
        /// Consumes the builder and constructs a [`MetricDefinition`](crate::model::MetricDefinition)
        pub fn build(self) -> crate::model::MetricDefinition {
            crate::model::MetricDefinition {
                name: self.name,
                regex: self.regex,
            }
        }
    }
}
impl MetricDefinition {
    /// Creates a new builder-style object to manufacture [`MetricDefinition`](crate::model::MetricDefinition)
    pub fn builder() -> crate::model::metric_definition::Builder {
        crate::model::metric_definition::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ModelArtifacts {
    #[serde(rename = "S3ModelArtifacts")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub s3_model_artifacts: std::option::Option<std::string::String>,
}
impl ModelArtifacts {
    pub fn s3_model_artifacts(&self) -> std::option::Option<&str> {
        self.s3_model_artifacts.as_deref()
    }
}
/// See [`ModelArtifacts`](crate::model::ModelArtifacts)
pub mod model_artifacts {
    /// A builder for [`ModelArtifacts`](crate::model::ModelArtifacts)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        s3_model_artifacts: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn s3_model_artifacts(mut self, input: impl Into<std::string::String>) -> Self {
            self.s3_model_artifacts = Some(input.into());
            self
        }
        pub fn set_s3_model_artifacts(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.s3_model_artifacts = input;
            self
        }
        /// Consumes the builder and constructs a [`ModelArtifacts`](crate::model::ModelArtifacts)
        pub fn build(self) -> crate::model::ModelArtifacts {
            crate::model::ModelArtifacts {
                s3_model_artifacts: self.s3_model_artifacts,
            }
        }
    }
}
impl ModelArtifacts {
    /// Creates a new builder-style object to manufacture [`ModelArtifacts`](crate::model::ModelArtifacts)
    pub fn builder() -> crate::model::model_artifacts::Builder {
        crate::model::model_artifacts::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ModelSummary {
    #[serde(rename = "ModelName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub model_name: std::option::Option<std::string::String>,
    #[serde(rename = "ModelArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub model_arn: std::option::Option<std::string::String>,
    #[serde(rename = "CreationTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time: std::option::Option<smithy_types::Instant>,
}
impl ModelSummary {
    pub fn model_name(&self) -> std::option::Option<&str> {
        self.model_name.as_deref()
    }

    pub fn model_arn(&self) -> std::option::Option<&str> {
        self.model_arn.as_deref()
    }

    pub fn creation_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time.as_ref()
    }
}
/// See [`ModelSummary`](crate::model::ModelSummary)
pub mod model_summary {
    /// A builder for [`ModelSummary`](crate::model::ModelSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        model_name: std::option::Option<std::string::String>,
        model_arn: std::option::Option<std::string::String>,
        creation_time: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
        pub fn model_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.model_name = Some(input.into());
            self
        }
        pub fn set_model_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.model_name = input;
            self
        }
        pub fn model_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.model_arn = Some(input.into());
            self
        }
        pub fn set_model_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.model_arn = input;
            self
        }
        pub fn creation_time(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time = Some(input);
            self
        }
        pub fn set_creation_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time = input;
            self
        }
        /// Consumes the builder and constructs a [`ModelSummary`](crate::model::ModelSummary)
        pub fn build(self) -> crate::model::ModelSummary {
            crate::model::ModelSummary {
                model_name: self.model_name,
                model_arn: self.model_arn,
                creation_time: self.creation_time,
            }
        }
    }
}
impl ModelSummary {
    /// Creates a new builder-style object to manufacture [`ModelSummary`](crate::model::ModelSummary)
    pub fn builder() -> crate::model::model_summary::Builder {
        crate::model::model_summary::Builder::default()
    }
}

/// Summary of a notebook instance, as returned by `ListNotebookInstances`.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct NotebookInstanceSummary {
    #[serde(rename = "NotebookInstanceName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub notebook_instance_name: std::option::Option<std::string::String>,
    #[serde(rename = "NotebookInstanceArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub notebook_instance_arn: std::option::Option<std::string::String>,
    #[serde(rename = "NotebookInstanceStatus")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub notebook_instance_status: std::option::Option<crate::model::NotebookInstanceStatus>,
    #[serde(rename = "Url")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub url: std::option::Option<std::string::String>,
    #[serde(rename = "InstanceType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub instance_type: std::option::Option<crate::model::InstanceType>,
    #[serde(rename = "CreationTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "LastModifiedTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_modified_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "NotebookInstanceLifecycleConfigName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub notebook_instance_lifecycle_config_name: std::option::Option<std::string::String>,
    #[serde(rename = "DefaultCodeRepository")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub default_code_repository: std::option::Option<std::string::String>,
    #[serde(rename = "AdditionalCodeRepositories")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub additional_code_repositories: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl NotebookInstanceSummary {
    pub fn notebook_instance_name(&self) -> std::option::Option<&str> {
        self.notebook_instance_name.as_deref()
    }

    pub fn notebook_instance_arn(&self) -> std::option::Option<&str> {
        self.notebook_instance_arn.as_deref()
    }

    pub fn notebook_instance_status(&self) -> std::option::Option<&crate::model::NotebookInstanceStatus> {
        self.notebook_instance_status.as_ref()
    }

    pub fn url(&self) -> std::option::Option<&str> {
        self.url.as_deref()
    }

    pub fn instance_type(&self) -> std::option::Option<&crate::model::InstanceType> {
        self.instance_type.as_ref()
    }

    pub fn creation_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time.as_ref()
    }

    pub fn last_modified_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.last_modified_time.as_ref()
    }

    pub fn notebook_instance_lifecycle_config_name(&self) -> std::option::Option<&str> {
        self.notebook_instance_lifecycle_config_name.as_deref()
    }

    pub fn default_code_repository(&self) -> std::option::Option<&str> {
        self.default_code_repository.as_deref()
    }

    pub fn additional_code_repositories(&self) -> std::option::Option<&[std::string::String]> {
        self.additional_code_repositories.as_deref()
    }
}
/// See [`NotebookInstanceSummary`](crate::model::NotebookInstanceSummary)
pub mod notebook_instance_summary {
    /// A builder for [`NotebookInstanceSummary`](crate::model::NotebookInstanceSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        notebook_instance_name: std::option::Option<std::string::String>,
        notebook_instance_arn: std::option::Option<std::string::String>,
        notebook_instance_status: std::option::Option<crate::model::NotebookInstanceStatus>,
        url: std::option::Option<std::string::String>,
        instance_type: std::option::Option<crate::model::InstanceType>,
        creation_time: std::option::Option<smithy_types::Instant>,
        last_modified_time: std::option::Option<smithy_types::Instant>,
        notebook_instance_lifecycle_config_name: std::option::Option<std::string::String>,
        default_code_repository: std::option::Option<std::string::String>,
        additional_code_repositories: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        pub fn notebook_instance_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.notebook_instance_name = Some(input.into());
            self
        }
        pub fn set_notebook_instance_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.notebook_instance_name = input;
            self
        }
        pub fn notebook_instance_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.notebook_instance_arn = Some(input.into());
            self
        }
        pub fn set_notebook_instance_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.notebook_instance_arn = input;
            self
        }
        pub fn notebook_instance_status(mut self, input: crate::model::NotebookInstanceStatus) -> Self {
            self.notebook_instance_status = Some(input);
            self
        }
        pub fn set_notebook_instance_status(mut self, input: std::option::Option<crate::model::NotebookInstanceStatus>) -> Self {
            self.notebook_instance_status = input;
            self
        }
        pub fn url(mut self, input: impl Into<std::string::String>) -> Self {
            self.url = Some(input.into());
            self
        }
        pub fn set_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.url = input;
            self
        }
        pub fn instance_type(mut self, input: crate::model::InstanceType) -> Self {
            self.instance_type = Some(input);
            self
        }
        pub fn set_instance_type(mut self, input: std::option::Option<crate::model::InstanceType>) -> Self {
            self.instance_type = input;
            self
        }
        pub fn creation_time(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time = Some(input);
            self
        }
        pub fn set_creation_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time = input;
            self
        }
        pub fn last_modified_time(mut self, input: smithy_types::Instant) -> Self {
            self.last_modified_time = Some(input);
            self
        }
        pub fn set_last_modified_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified_time = input;
            self
        }
        pub fn notebook_instance_lifecycle_config_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.notebook_instance_lifecycle_config_name = Some(input.into());
            self
        }
        pub fn set_notebook_instance_lifecycle_config_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.notebook_instance_lifecycle_config_name = input;
            self
        }
        pub fn default_code_repository(mut self, input: impl Into<std::string::String>) -> Self {
            self.default_code_repository = Some(input.into());
            self
        }
        pub fn set_default_code_repository(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.default_code_repository = input;
            self
        }
        /// Appends an item to `AdditionalCodeRepositories`.
        ///
        /// To override the contents of this collection use [`set_additional_code_repositories`](Self::set_additional_code_repositories).
        pub fn additional_code_repositories(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.additional_code_repositories.unwrap_or_default();
            v.push(input.into());
            self.additional_code_repositories = Some(v);
            self
        }
        pub fn set_additional_code_repositories(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.additional_code_repositories = input;
            self
        }
        /// Consumes the builder and constructs a [`NotebookInstanceSummary`](crate::model::NotebookInstanceSummary)
        pub fn build(self) -> crate::model::NotebookInstanceSummary {
            crate::model::NotebookInstanceSummary {
                notebook_instance_name: self.notebook_instance_name,
                notebook_instance_arn: self.notebook_instance_arn,
                notebook_instance_status: self.notebook_instance_status,
                url: self.url,
                instance_type: self.instance_type,
                creation_time: self.creation_time,
                last_modified_time: self.last_modified_time,
                notebook_instance_lifecycle_config_name: self.notebook_instance_lifecycle_config_name,
                default_code_repository: self.default_code_repository,
                additional_code_repositories: self.additional_code_repositories,
            }
        }
    }
}
impl NotebookInstanceSummary {
    /// Creates a new builder-style object to manufacture [`NotebookInstanceSummary`](crate::model::NotebookInstanceSummary)
    pub fn builder() -> crate::model::notebook_instance_summary::Builder {
        crate::model::notebook_instance_summary::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ObjectiveStatusCounters {
    #[serde(rename = "Succeeded")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub succeeded: std::option::Option<i32>,
    #[serde(rename = "Pending")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub pending: std::option::Option<i32>,
    #[serde(rename = "Failed")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub failed: std::option::Option<i32>,
}
impl ObjectiveStatusCounters {
    pub fn succeeded(&self) -> std::option::Option<i32> {
        self.succeeded
    }

    pub fn pending(&self) -> std::option::Option<i32> {
        self.pending
    }

    pub fn failed(&self) -> std::option::Option<i32> {
        self.failed
    }
}
/// See [`ObjectiveStatusCounters`](crate::model::ObjectiveStatusCounters)
pub mod objective_status_counters {
    /// A builder for [`ObjectiveStatusCounters`](crate::model::ObjectiveStatusCounters)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        succeeded: std::option::Option<i32>,
        pending: std::option::Option<i32>,
        failed: std::option::Option<i32>,
    }
    impl Builder {
        pub fn succeeded(mut self, input: i32) -> Self {
            self.succeeded = Some(input);
            self
        }
        pub fn set_succeeded(mut self, input: std::option::Option<i32>) -> Self {
            self.succeeded = input;
            self
        }
        pub fn pending(mut self, input: i32) -> Self {
            self.pending = Some(input);
            self
        }
        pub fn set_pending(mut self, input: std::option::Option<i32>) -> Self {
            self.pending = input;
            self
        }
        pub fn failed(mut self, input: i32) -> Self {
            self.failed = Some(input);
            self
        }
        pub fn set_failed(mut self, input: std::option::Option<i32>) -> Self {
            self.failed = input;
            self
        }
        /// Consumes the builder and constructs a [`ObjectiveStatusCounters`](crate::model::ObjectiveStatusCounters)
        pub fn build(self) -> crate::model::ObjectiveStatusCounters {
            crate::model::ObjectiveStatusCounters {
                succeeded: self.succeeded,
                pending: self.pending,
                failed: self.failed,
            }
        }
    }
}
impl ObjectiveStatusCounters {
    /// Creates a new builder-style object to manufacture [`ObjectiveStatusCounters`](crate::model::ObjectiveStatusCounters)
    pub fn builder() -> crate::model::objective_status_counters::Builder {
        crate::model::objective_status_counters::Builder::default()
    }
}

/// Where model artifacts are written.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct OutputDataConfig {
    #[serde(rename = "KmsKeyId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key_id: std::option::Option<std::string::String>,
    #[serde(rename = "S3OutputPath")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub s3_output_path: std::option::Option<std::string::String>,
}
impl OutputDataConfig {
    pub fn kms_key_id(&self) -> std::option::Option<&str> {
        self.kms_key_id.as_deref()
    }

    pub fn s3_output_path(&self) -> std::option::Option<&str> {
        self.s3_output_path.as_deref()
    }
}
/// See [`OutputDataConfig`](crate::model::OutputDataConfig)
pub mod output_data_config {
    /// A builder for [`OutputDataConfig`](crate::model::OutputDataConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        kms_key_id: std::option::Option<std::string::String>,
        s3_output_path: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn kms_key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.kms_key_id = Some(input.into());
            self
        }
        pub fn set_kms_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.kms_key_id = input;
            self
        }
        pub fn s3_output_path(mut self, input: impl Into<std::string::String>) -> Self {
            self.s3_output_path = Some(input.into());
            self
        }
        pub fn set_s3_output_path(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.s3_output_path = input;
            self
        }
        /// Consumes the builder and constructs a [`OutputDataConfig`](crate::model::OutputDataConfig)
        pub fn build(self) -> crate::model::OutputDataConfig {
            crate::model::OutputDataConfig {
                kms_key_id: self.kms_key_id,
                s3_output_path: self.s3_output_path,
            }
        }
    }
}
impl OutputDataConfig {
    /// Creates a new builder-style object to manufacture [`OutputDataConfig`](crate::model::OutputDataConfig)
    pub fn builder() -> crate::model::output_data_config::Builder {
        crate::model::output_data_config::Builder::default()
    }
}

/// The ranges a tuning job searches, by hyperparameter type.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ParameterRanges {
    #[serde(rename = "IntegerParameterRanges")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub integer_parameter_ranges: std::option::Option<std::vec::Vec<crate::model::IntegerParameterRange>>,
    #[serde(rename = "ContinuousParameterRanges")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub continuous_parameter_ranges: std::option::Option<std::vec::Vec<crate::model::ContinuousParameterRange>>,
    #[serde(rename = "CategoricalParameterRanges")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub categorical_parameter_ranges: std::option::Option<std::vec::Vec<crate::model::CategoricalParameterRange>>,
}
impl ParameterRanges {
    pub fn integer_parameter_ranges(&self) -> std::option::Option<&[crate::model::IntegerParameterRange]> {
        self.integer_parameter_ranges.as_deref()
    }

    pub fn continuous_parameter_ranges(&self) -> std::option::Option<&[crate::model::ContinuousParameterRange]> {
        self.continuous_parameter_ranges.as_deref()
    }

    pub fn categorical_parameter_ranges(&self) -> std::option::Option<&[crate::model::CategoricalParameterRange]> {
        self.categorical_parameter_ranges.as_deref()
    }
}
/// See [`ParameterRanges`](crate::model::ParameterRanges)
pub mod parameter_ranges {
    /// A builder for [`ParameterRanges`](crate::model::ParameterRanges)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        integer_parameter_ranges: std::option::Option<std::vec::Vec<crate::model::IntegerParameterRange>>,
        continuous_parameter_ranges: std::option::Option<std::vec::Vec<crate::model::ContinuousParameterRange>>,
        categorical_parameter_ranges: std::option::Option<std::vec::Vec<crate::model::CategoricalParameterRange>>,
    }
    impl Builder {
        /// Appends an item to `IntegerParameterRanges`.
        ///
        /// To override the contents of this collection use [`set_integer_parameter_ranges`](Self::set_integer_parameter_ranges).
        pub fn integer_parameter_ranges(mut self, input: impl Into<crate::model::IntegerParameterRange>) -> Self {
            let mut v = self.integer_parameter_ranges.unwrap_or_default();
            v.push(input.into());
            self.integer_parameter_ranges = Some(v);
            self
        }
        pub fn set_integer_parameter_ranges(mut self, input: std::option::Option<std::vec::Vec<crate::model::IntegerParameterRange>>) -> Self {
            self.integer_parameter_ranges = input;
            self
        }
        /// Appends an item to `ContinuousParameterRanges`.
        ///
        /// To override the contents of this collection use [`set_continuous_parameter_ranges`](Self::set_continuous_parameter_ranges).
        pub fn continuous_parameter_ranges(mut self, input: impl Into<crate::model::ContinuousParameterRange>) -> Self {
            let mut v = self.continuous_parameter_ranges.unwrap_or_default();
            v.push(input.into());
            self.continuous_parameter_ranges = Some(v);
            self
        }
        pub fn set_continuous_parameter_ranges(mut self, input: std::option::Option<std::vec::Vec<crate::model::ContinuousParameterRange>>) -> Self {
            self.continuous_parameter_ranges = input;
            self
        }
        /// Appends an item to `CategoricalParameterRanges`.
        ///
        /// To override the contents of this collection use [`set_categorical_parameter_ranges`](Self::set_categorical_parameter_ranges).
        pub fn categorical_parameter_ranges(mut self, input: impl Into<crate::model::CategoricalParameterRange>) -> Self {
            let mut v = self.categorical_parameter_ranges.unwrap_or_default();
            v.push(input.into());
            self.categorical_parameter_ranges = Some(v);
            self
        }
        pub fn set_categorical_parameter_ranges(mut self, input: std::option::Option<std::vec::Vec<crate::model::CategoricalParameterRange>>) -> Self {
            self.categorical_parameter_ranges = input;
            self
        }
        /// Consumes the builder and constructs a [`ParameterRanges`](crate::model::ParameterRanges)
        pub fn build(self) -> crate::model::ParameterRanges {
            crate::model::ParameterRanges {
                integer_parameter_ranges: self.integer_parameter_ranges,
                continuous_parameter_ranges: self.continuous_parameter_ranges,
                categorical_parameter_ranges: self.categorical_parameter_ranges,
            }
        }
    }
}
impl ParameterRanges {
    /// Creates a new builder-style object to manufacture [`ParameterRanges`](crate::model::ParameterRanges)
    pub fn builder() -> crate::model::parameter_ranges::Builder {
        crate::model::parameter_ranges::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ParentHyperParameterTuningJob {
    #[serde(rename = "HyperParameterTuningJobName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hyper_parameter_tuning_job_name: std::option::Option<std::string::String>,
}
impl ParentHyperParameterTuningJob {
    pub fn hyper_parameter_tuning_job_name(&self) -> std::option::Option<&str> {
        self.hyper_parameter_tuning_job_name.as_deref()
    }
}
/// See [`ParentHyperParameterTuningJob`](crate::model::ParentHyperParameterTuningJob)
pub mod parent_hyper_parameter_tuning_job {
    /// A builder for [`ParentHyperParameterTuningJob`](crate::model::ParentHyperParameterTuningJob)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        hyper_parameter_tuning_job_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn hyper_parameter_tuning_job_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.hyper_parameter_tuning_job_name = Some(input.into());
            self
        }
        pub fn set_hyper_parameter_tuning_job_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.hyper_parameter_tuning_job_name = input;
            self
        }
        /// Consumes the builder and constructs a [`ParentHyperParameterTuningJob`](crate::model::ParentHyperParameterTuningJob)
        pub fn build(self) -> crate::model::ParentHyperParameterTuningJob {
            crate::model::ParentHyperParameterTuningJob {
                hyper_parameter_tuning_job_name: self.hyper_parameter_tuning_job_name,
            }
        }
    }
}
impl ParentHyperParameterTuningJob {
    /// Creates a new builder-style object to manufacture [`ParentHyperParameterTuningJob`](crate::model::ParentHyperParameterTuningJob)
    pub fn builder() -> crate::model::parent_hyper_parameter_tuning_job::Builder {
        crate::model::parent_hyper_parameter_tuning_job::Builder::default()
    }
}

/// A model to host and the resources to host it on.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::fmt::Debug, std::default::Default)]
pub struct ProductionVariant {
    #[serde(rename = "VariantName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub variant_name: std::option::Option<std::string::String>,
    #[serde(rename = "ModelName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub model_name: std::option::Option<std::string::String>,
    #[serde(rename = "InitialInstanceCount")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub initial_instance_count: std::option::Option<i32>,
    #[serde(rename = "InstanceType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub instance_type: std::option::Option<crate::model::ProductionVariantInstanceType>,
    /// Share of traffic routed to this variant, relative to the other variants.
    #[serde(rename = "InitialVariantWeight")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub initial_variant_weight: std::option::Option<f32>,
    #[serde(rename = "AcceleratorType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub accelerator_type: std::option::Option<crate::model::ProductionVariantAcceleratorType>,
}
impl std::cmp::PartialEq for ProductionVariant {
    fn eq(&self, other: &Self) -> bool {
        self.variant_name == other.variant_name
            && self.model_name == other.model_name
            && self.initial_instance_count == other.initial_instance_count
            && self.instance_type == other.instance_type
            && self.initial_variant_weight.map(f32::to_bits) == other.initial_variant_weight.map(f32::to_bits)
            && self.accelerator_type == other.accelerator_type
    }
}
impl std::cmp::Eq for ProductionVariant {}
impl std::hash::Hash for ProductionVariant {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.variant_name, state);
        std::hash::Hash::hash(&self.model_name, state);
        std::hash::Hash::hash(&self.initial_instance_count, state);
        std::hash::Hash::hash(&self.instance_type, state);
        std::hash::Hash::hash(&self.initial_variant_weight.map(f32::to_bits), state);
        std::hash::Hash::hash(&self.accelerator_type, state);
    }
}
impl ProductionVariant {
    pub fn variant_name(&self) -> std::option::Option<&str> {
        self.variant_name.as_deref()
    }

    pub fn model_name(&self) -> std::option::Option<&str> {
        self.model_name.as_deref()
    }

    pub fn initial_instance_count(&self) -> std::option::Option<i32> {
        self.initial_instance_count
    }

    pub fn instance_type(&self) -> std::option::Option<&crate::model::ProductionVariantInstanceType> {
        self.instance_type.as_ref()
    }

    pub fn initial_variant_weight(&self) -> std::option::Option<f32> {
        self.initial_variant_weight
    }

    pub fn accelerator_type(&self) -> std::option::Option<&crate::model::ProductionVariantAcceleratorType> {
        self.accelerator_type.as_ref()
    }
}
/// See [`ProductionVariant`](crate::model::ProductionVariant)
pub mod production_variant {
    /// A builder for [`ProductionVariant`](crate::model::ProductionVariant)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        variant_name: std::option::Option<std::string::String>,
        model_name: std::option::Option<std::string::String>,
        initial_instance_count: std::option::Option<i32>,
        instance_type: std::option::Option<crate::model::ProductionVariantInstanceType>,
        initial_variant_weight: std::option::Option<f32>,
        accelerator_type: std::option::Option<crate::model::ProductionVariantAcceleratorType>,
    }
    impl Builder {
        pub fn variant_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.variant_name = Some(input.into());
            self
        }
        pub fn set_variant_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.variant_name = input;
            self
        }
        pub fn model_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.model_name = Some(input.into());
            self
        }
        pub fn set_model_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.model_name = input;
            self
        }
        pub fn initial_instance_count(mut self, input: i32) -> Self {
            self.initial_instance_count = Some(input);
            self
        }
        pub fn set_initial_instance_count(mut self, input: std::option::Option<i32>) -> Self {
            self.initial_instance_count = input;
            self
        }
        pub fn instance_type(mut self, input: crate::model::ProductionVariantInstanceType) -> Self {
            self.instance_type = Some(input);
            self
        }
        pub fn set_instance_type(mut self, input: std::option::Option<crate::model::ProductionVariantInstanceType>) -> Self {
            self.instance_type = input;
            self
        }
        pub fn initial_variant_weight(mut self, input: f32) -> Self {
            self.initial_variant_weight = Some(input);
            self
        }
        pub fn set_initial_variant_weight(mut self, input: std::option::Option<f32>) -> Self {
            self.initial_variant_weight = input;
            self
        }
        pub fn accelerator_type(mut self, input: crate::model::ProductionVariantAcceleratorType) -> Self {
            self.accelerator_type = Some(input);
            self
        }
        pub fn set_accelerator_type(mut self, input: std::option::Option<crate::model::ProductionVariantAcceleratorType>) -> Self {
            self.accelerator_type = input;
            self
        }
        /// Consumes the builder and constructs a [`ProductionVariant`](crate::model::ProductionVariant)
        pub fn build(self) -> crate::model::ProductionVariant {
            crate::model::ProductionVariant {
                variant_name: self.variant_name,
                model_name: self.model_name,
                initial_instance_count: self.initial_instance_count,
                instance_type: self.instance_type,
                initial_variant_weight: self.initial_variant_weight,
                accelerator_type: self.accelerator_type,
            }
        }
    }
}
impl ProductionVariant {
    /// Creates a new builder-style object to manufacture [`ProductionVariant`](crate::model::ProductionVariant)
    pub fn builder() -> crate::model::production_variant::Builder {
        crate::model::production_variant::Builder::default()
    }
}

/// Deployed state of one production variant of an endpoint.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::fmt::Debug, std::default::Default)]
pub struct ProductionVariantSummary {
    #[serde(rename = "VariantName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub variant_name: std::option::Option<std::string::String>,
    #[serde(rename = "DeployedImages")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub deployed_images: std::option::Option<std::vec::Vec<crate::model::DeployedImage>>,
    #[serde(rename = "CurrentWeight")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub current_weight: std::option::Option<f32>,
    #[serde(rename = "DesiredWeight")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub desired_weight: std::option::Option<f32>,
    #[serde(rename = "CurrentInstanceCount")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub current_instance_count: std::option::Option<i32>,
    #[serde(rename = "DesiredInstanceCount")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub desired_instance_count: std::option::Option<i32>,
}
impl std::cmp::PartialEq for ProductionVariantSummary {
    fn eq(&self, other: &Self) -> bool {
        self.variant_name == other.variant_name
            && self.deployed_images == other.deployed_images
            && self.current_weight.map(f32::to_bits) == other.current_weight.map(f32::to_bits)
            && self.desired_weight.map(f32::to_bits) == other.desired_weight.map(f32::to_bits)
            && self.current_instance_count == other.current_instance_count
            && self.desired_instance_count == other.desired_instance_count
    }
}
impl std::cmp::Eq for ProductionVariantSummary {}
impl std::hash::Hash for ProductionVariantSummary {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.variant_name, state);
        std::hash::Hash::hash(&self.deployed_images, state);
        std::hash::Hash::hash(&self.current_weight.map(f32::to_bits), state);
        std::hash::Hash::hash(&self.desired_weight.map(f32::to_bits), state);
        std::hash::Hash::hash(&self.current_instance_count, state);
        std::hash::Hash::hash(&self.desired_instance_count, state);
    }
}
impl ProductionVariantSummary {
    pub fn variant_name(&self) -> std::option::Option<&str> {
        self.variant_name.as_deref()
    }

    pub fn deployed_images(&self) -> std::option::Option<&[crate::model::DeployedImage]> {
        self.deployed_images.as_deref()
    }

    pub fn current_weight(&self) -> std::option::Option<f32> {
        self.current_weight
    }

    pub fn desired_weight(&self) -> std::option::Option<f32> {
        self.desired_weight
    }

    pub fn current_instance_count(&self) -> std::option::Option<i32> {
        self.current_instance_count
    }

    pub fn desired_instance_count(&self) -> std::option::Option<i32> {
        self.desired_instance_count
    }
}
/// See [`ProductionVariantSummary`](crate::model::ProductionVariantSummary)
pub mod production_variant_summary {
    /// A builder for [`ProductionVariantSummary`](crate::model::ProductionVariantSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        variant_name: std::option::Option<std::string::String>,
        deployed_images: std::option::Option<std::vec::Vec<crate::model::DeployedImage>>,
        current_weight: std::option::Option<f32>,
        desired_weight: std::option::Option<f32>,
        current_instance_count: std::option::Option<i32>,
        desired_instance_count: std::option::Option<i32>,
    }
    impl Builder {
        pub fn variant_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.variant_name = Some(input.into());
            self
        }
        pub fn set_variant_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.variant_name = input;
            self
        }
        /// Appends an item to `DeployedImages`.
        ///
        /// To override the contents of this collection use [`set_deployed_images`](Self::set_deployed_images).
        pub fn deployed_images(mut self, input: impl Into<crate::model::DeployedImage>) -> Self {
            let mut v = self.deployed_images.unwrap_or_default();
            v.push(input.into());
            self.deployed_images = Some(v);
            self
        }
        pub fn set_deployed_images(mut self, input: std::option::Option<std::vec::Vec<crate::model::DeployedImage>>) -> Self {
            self.deployed_images = input;
            self
        }
        pub fn current_weight(mut self, input: f32) -> Self {
            self.current_weight = Some(input);
            self
        }
        pub fn set_current_weight(mut self, input: std::option::Option<f32>) -> Self {
            self.current_weight = input;
            self
        }
        pub fn desired_weight(mut self, input: f32) -> Self {
            self.desired_weight = Some(input);
            self
        }
        pub fn set_desired_weight(mut self, input: std::option::Option<f32>) -> Self {
            self.desired_weight = input;
            self
        }
        pub fn current_instance_count(mut self, input: i32) -> Self {
            self.current_instance_count = Some(input);
            self
        }
        pub fn set_current_instance_count(mut self, input: std::option::Option<i32>) -> Self {
            self.current_instance_count = input;
            self
        }
        pub fn desired_instance_count(mut self, input: i32) -> Self {
            self.desired_instance_count = Some(input);
            self
        }
        pub fn set_desired_instance_count(mut self, input: std::option::Option<i32>) -> Self {
            self.desired_instance_count = input;
            self
        }
        /// Consumes the builder and constructs a [`ProductionVariantSummary`](crate::model::ProductionVariantSummary)
        pub fn build(self) -> crate::model::ProductionVariantSummary {
            crate::model::ProductionVariantSummary {
                variant_name: self.variant_name,
                deployed_images: self.deployed_images,
                current_weight: self.current_weight,
                desired_weight: self.desired_weight,
                current_instance_count: self.current_instance_count,
                desired_instance_count: self.desired_instance_count,
            }
        }
    }
}
impl ProductionVariantSummary {
    /// Creates a new builder-style object to manufacture [`ProductionVariantSummary`](crate::model::ProductionVariantSummary)
    pub fn builder() -> crate::model::production_variant_summary::Builder {
        crate::model::production_variant_summary::Builder::default()
    }
}

/// What each public workforce worker is paid per task.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct PublicWorkforceTaskPrice {
    #[serde(rename = "AmountInUsd")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub amount_in_usd: std::option::Option<crate::model::USD>,
}
impl PublicWorkforceTaskPrice {
    pub fn amount_in_usd(&self) -> std::option::Option<&crate::model::USD> {
        self.amount_in_usd.as_ref()
    }
}
/// See [`PublicWorkforceTaskPrice`](crate::model::PublicWorkforceTaskPrice)
pub mod public_workforce_task_price {
    /// A builder for [`PublicWorkforceTaskPrice`](crate::model::PublicWorkforceTaskPrice)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        amount_in_usd: std::option::Option<crate::model::USD>,
    }
    impl Builder {
        pub fn amount_in_usd(mut self, input: crate::model::USD) -> Self {
            self.amount_in_usd = Some(input);
            self
        }
        pub fn set_amount_in_usd(mut self, input: std::option::Option<crate::model::USD>) -> Self {
            self.amount_in_usd = input;
            self
        }
        /// Consumes the builder and constructs a [`PublicWorkforceTaskPrice`](crate::model::PublicWorkforceTaskPrice)
        pub fn build(self) -> crate::model::PublicWorkforceTaskPrice {
            crate::model::PublicWorkforceTaskPrice {
                amount_in_usd: self.amount_in_usd,
            }
        }
    }
}
impl PublicWorkforceTaskPrice {
    /// Creates a new builder-style object to manufacture [`PublicWorkforceTaskPrice`](crate::model::PublicWorkforceTaskPrice)
    pub fn builder() -> crate::model::public_workforce_task_price::Builder {
        crate::model::public_workforce_task_price::Builder::default()
    }
}

/// The ML compute instances and storage volumes used for training.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ResourceConfig {
    #[serde(rename = "InstanceType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub instance_type: std::option::Option<crate::model::TrainingInstanceType>,
    #[serde(rename = "InstanceCount")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub instance_count: std::option::Option<i32>,
    #[serde(rename = "VolumeSizeInGB")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_size_in_gb: std::option::Option<i32>,
    #[serde(rename = "VolumeKmsKeyId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_kms_key_id: std::option::Option<std::string::String>,
}
impl ResourceConfig {
    pub fn instance_type(&self) -> std::option::Option<&crate::model::TrainingInstanceType> {
        self.instance_type.as_ref()
    }

    pub fn instance_count(&self) -> std::option::Option<i32> {
        self.instance_count
    }

    pub fn volume_size_in_gb(&self) -> std::option::Option<i32> {
        self.volume_size_in_gb
    }

    pub fn volume_kms_key_id(&self) -> std::option::Option<&str> {
        self.volume_kms_key_id.as_deref()
    }
}
/// See [`ResourceConfig`](crate::model::ResourceConfig)
pub mod resource_config {
    /// A builder for [`ResourceConfig`](crate::model::ResourceConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        instance_type: std::option::Option<crate::model::TrainingInstanceType>,
        instance_count: std::option::Option<i32>,
        volume_size_in_gb: std::option::Option<i32>,
        volume_kms_key_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn instance_type(mut self, input: crate::model::TrainingInstanceType) -> Self {
            self.instance_type = Some(input);
            self
        }
        pub fn set_instance_type(mut self, input: std::option::Option<crate::model::TrainingInstanceType>) -> Self {
            self.instance_type = input;
            self
        }
        pub fn instance_count(mut self, input: i32) -> Self {
            self.instance_count = Some(input);
            self
        }
        pub fn set_instance_count(mut self, input: std::option::Option<i32>) -> Self {
            self.instance_count = input;
            self
        }
        pub fn volume_size_in_gb(mut self, input: i32) -> Self {
            self.volume_size_in_gb = Some(input);
            self
        }
        pub fn set_volume_size_in_gb(mut self, input: std::option::Option<i32>) -> Self {
            self.volume_size_in_gb = input;
            self
        }
        pub fn volume_kms_key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.volume_kms_key_id = Some(input.into());
            self
        }
        pub fn set_volume_kms_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.volume_kms_key_id = input;
            self
        }
        /// Consumes the builder and constructs a [`ResourceConfig`](crate::model::ResourceConfig)
        pub fn build(self) -> crate::model::ResourceConfig {
            crate::model::ResourceConfig {
                instance_type: self.instance_type,
                instance_count: self.instance_count,
                volume_size_in_gb: self.volume_size_in_gb,
                volume_kms_key_id: self.volume_kms_key_id,
            }
        }
    }
}
impl ResourceConfig {
    /// Creates a new builder-style object to manufacture [`ResourceConfig`](crate::model::ResourceConfig)
    pub fn builder() -> crate::model::resource_config::Builder {
        crate::model::resource_config::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ResourceLimits {
    #[serde(rename = "MaxNumberOfTrainingJobs")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_number_of_training_jobs: std::option::Option<i32>,
    #[serde(rename = "MaxParallelTrainingJobs")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_parallel_training_jobs: std::option::Option<i32>,
}
impl ResourceLimits {
    pub fn max_number_of_training_jobs(&self) -> std::option::Option<i32> {
        self.max_number_of_training_jobs
    }

    pub fn max_parallel_training_jobs(&self) -> std::option::Option<i32> {
        self.max_parallel_training_jobs
    }
}
/// See [`ResourceLimits`](crate::model::ResourceLimits)
pub mod resource_limits {
    /// A builder for [`ResourceLimits`](crate::model::ResourceLimits)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        max_number_of_training_jobs: std::option::Option<i32>,
        max_parallel_training_jobs: std::option::Option<i32>,
    }
    impl Builder {
        pub fn max_number_of_training_jobs(mut self, input: i32) -> Self {
            self.max_number_of_training_jobs = Some(input);
            self
        }
        pub fn set_max_number_of_training_jobs(mut self, input: std::option::Option<i32>) -> Self {
            self.max_number_of_training_jobs = input;
            self
        }
        pub fn max_parallel_training_jobs(mut self, input: i32) -> Self {
            self.max_parallel_training_jobs = Some(input);
            self
        }
        pub fn set_max_parallel_training_jobs(mut self, input: std::option::Option<i32>) -> Self {
            self.max_parallel_training_jobs = input;
            self
        }
        /// Consumes the builder and constructs a [`ResourceLimits`](crate::model::ResourceLimits)
        pub fn build(self) -> crate::model::ResourceLimits {
            crate::model::ResourceLimits {
                max_number_of_training_jobs: self.max_number_of_training_jobs,
                max_parallel_training_jobs: self.max_parallel_training_jobs,
            }
        }
    }
}
impl ResourceLimits {
    /// Creates a new builder-style object to manufacture [`ResourceLimits`](crate::model::ResourceLimits)
    pub fn builder() -> crate::model::resource_limits::Builder {
        crate::model::resource_limits::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct S3DataSource {
    #[serde(rename = "S3DataType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub s3_data_type: std::option::Option<crate::model::S3DataType>,
    #[serde(rename = "S3Uri")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub s3_uri: std::option::Option<std::string::String>,
    #[serde(rename = "S3DataDistributionType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub s3_data_distribution_type: std::option::Option<crate::model::S3DataDistribution>,
    #[serde(rename = "AttributeNames")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub attribute_names: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl S3DataSource {
    pub fn s3_data_type(&self) -> std::option::Option<&crate::model::S3DataType> {
        self.s3_data_type.as_ref()
    }

    pub fn s3_uri(&self) -> std::option::Option<&str> {
        self.s3_uri.as_deref()
    }

    pub fn s3_data_distribution_type(&self) -> std::option::Option<&crate::model::S3DataDistribution> {
        self.s3_data_distribution_type.as_ref()
    }

    pub fn attribute_names(&self) -> std::option::Option<&[std::string::String]> {
        self.attribute_names.as_deref()
    }
}
/// See [`S3DataSource`](crate::model::S3DataSource)
pub mod s3_data_source {
    /// A builder for [`S3DataSource`](crate::model::S3DataSource)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        s3_data_type: std::option::Option<crate::model::S3DataType>,
        s3_uri: std::option::Option<std::string::String>,
        s3_data_distribution_type: std::option::Option<crate::model::S3DataDistribution>,
        attribute_names: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        pub fn s3_data_type(mut self, input: crate::model::S3DataType) -> Self {
            self.s3_data_type = Some(input);
            self
        }
        pub fn set_s3_data_type(mut self, input: std::option::Option<crate::model::S3DataType>) -> Self {
            self.s3_data_type = input;
            self
        }
        pub fn s3_uri(mut self, input: impl Into<std::string::String>) -> Self {
            self.s3_uri = Some(input.into());
            self
        }
        pub fn set_s3_uri(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.s3_uri = input;
            self
        }
        pub fn s3_data_distribution_type(mut self, input: crate::model::S3DataDistribution) -> Self {
            self.s3_data_distribution_type = Some(input);
            self
        }
        pub fn set_s3_data_distribution_type(mut self, input: std::option::Option<crate::model::S3DataDistribution>) -> Self {
            self.s3_data_distribution_type = input;
            self
        }
        /// Appends an item to `AttributeNames`.
        ///
        /// To override the contents of this collection use [`set_attribute_names`](Self::set_attribute_names).
        pub fn attribute_names(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.attribute_names.unwrap_or_default();
            v.push(input.into());
            self.attribute_names = Some(v);
            self
        }
        pub fn set_attribute_names(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.attribute_names = input;
            self
        }
        /// Consumes the builder and constructs a [`S3DataSource`](crate::model::S3DataSource)
        pub fn build(self) -> crate::model::S3DataSource {
            crate::model::S3DataSource {
                s3_data_type: self.s3_data_type,
                s3_uri: self.s3_uri,
                s3_data_distribution_type: self.s3_data_distribution_type,
                attribute_names: self.attribute_names,
            }
        }
    }
}
impl S3DataSource {
    /// Creates a new builder-style object to manufacture [`S3DataSource`](crate::model::S3DataSource)
    pub fn builder() -> crate::model::s3_data_source::Builder {
        crate::model::s3_data_source::Builder::default()
    }
}

/// A secondary status the training job passed through, with when it entered and left it.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct SecondaryStatusTransition {
    #[serde(rename = "Status")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::SecondaryStatus>,
    #[serde(rename = "StartTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub start_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "EndTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub end_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "StatusMessage")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status_message: std::option::Option<std::string::String>,
}
impl SecondaryStatusTransition {
    pub fn status(&self) -> std::option::Option<&crate::model::SecondaryStatus> {
        self.status.as_ref()
    }

    pub fn start_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.start_time.as_ref()
    }

    pub fn end_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.end_time.as_ref()
    }

    pub fn status_message(&self) -> std::option::Option<&str> {
        self.status_message.as_deref()
    }
}
/// See [`SecondaryStatusTransition`](crate::model::SecondaryStatusTransition)
pub mod secondary_status_transition {
    /// A builder for [`SecondaryStatusTransition`](crate::model::SecondaryStatusTransition)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        status: std::option::Option<crate::model::SecondaryStatus>,
        start_time: std::option::Option<smithy_types::Instant>,
        end_time: std::option::Option<smithy_types::Instant>,
        status_message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn status(mut self, input: crate::model::SecondaryStatus) -> Self {
            self.status = Some(input);
            self
        }
        pub fn set_status(mut self, input: std::option::Option<crate::model::SecondaryStatus>) -> Self {
            self.status = input;
            self
        }
        pub fn start_time(mut self, input: smithy_types::Instant) -> Self {
            self.start_time = Some(input);
            self
        }
        pub fn set_start_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.start_time = input;
            self
        }
        pub fn end_time(mut self, input: smithy_types::Instant) -> Self {
            self.end_time = Some(input);
            self
        }
        pub fn set_end_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.end_time = input;
            self
        }
        pub fn status_message(mut self, input: impl Into<std::string::String>) -> Self {
            self.status_message = Some(input.into());
            self
        }
        pub fn set_status_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.status_message = input;
            self
        }
        /// Consumes the builder and constructs a [`SecondaryStatusTransition`](crate::model::SecondaryStatusTransition)
        pub fn build(self) -> crate::model::SecondaryStatusTransition {
            crate::model::SecondaryStatusTransition {
                status: self.status,
                start_time: self.start_time,
                end_time: self.end_time,
                status_message: self.status_message,
            }
        }
    }
}
impl SecondaryStatusTransition {
    /// Creates a new builder-style object to manufacture [`SecondaryStatusTransition`](crate::model::SecondaryStatusTransition)
    pub fn builder() -> crate::model::secondary_status_transition::Builder {
        crate::model::secondary_status_transition::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ShuffleConfig {
    /// Seed used to shuffle the S3 key prefix list.
    #[serde(rename = "Seed")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub seed: std::option::Option<i64>,
}
impl ShuffleConfig {
    pub fn seed(&self) -> std::option::Option<i64> {
        self.seed
    }
}
/// See [`ShuffleConfig`](crate::model::ShuffleConfig)
pub mod shuffle_config {
    /// A builder for [`ShuffleConfig`](crate::model::ShuffleConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        seed: std::option::Option<i64>,
    }
    impl Builder {
        pub fn seed(mut self, input: i64) -> Self {
            self.seed = Some(input);
            self
        }
        pub fn set_seed(mut self, input: std::option::Option<i64>) -> Self {
            self.seed = input;
            self
        }
        /// Consumes the builder and constructs a [`ShuffleConfig`](crate::model::ShuffleConfig)
        pub fn build(self) -> crate::model::ShuffleConfig {
            crate::model::ShuffleConfig {
                seed: self.seed,
            }
        }
    }
}
impl ShuffleConfig {
    /// Creates a new builder-style object to manufacture [`ShuffleConfig`](crate::model::ShuffleConfig)
    pub fn builder() -> crate::model::shuffle_config::Builder {
        crate::model::shuffle_config::Builder::default()
    }
}

/// Limits on how long a training job may run.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct StoppingCondition {
    #[serde(rename = "MaxRuntimeInSeconds")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_runtime_in_seconds: std::option::Option<i32>,
    /// Maximum time to wait for spot capacity. Must be at least `MaxRuntimeInSeconds`.
    #[serde(rename = "MaxWaitTimeInSeconds")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_wait_time_in_seconds: std::option::Option<i32>,
}
impl StoppingCondition {
    pub fn max_runtime_in_seconds(&self) -> std::option::Option<i32> {
        self.max_runtime_in_seconds
    }

    pub fn max_wait_time_in_seconds(&self) -> std::option::Option<i32> {
        self.max_wait_time_in_seconds
    }
}
/// See [`StoppingCondition`](crate::model::StoppingCondition)
pub mod stopping_condition {
    /// A builder for [`StoppingCondition`](crate::model::StoppingCondition)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        max_runtime_in_seconds: std::option::Option<i32>,
        max_wait_time_in_seconds: std::option::Option<i32>,
    }
    impl Builder {
        pub fn max_runtime_in_seconds(mut self, input: i32) -> Self {
            self.max_runtime_in_seconds = Some(input);
            self
        }
        pub fn set_max_runtime_in_seconds(mut self, input: std::option::Option<i32>) -> Self {
            self.max_runtime_in_seconds = input;
            self
        }
        pub fn max_wait_time_in_seconds(mut self, input: i32) -> Self {
            self.max_wait_time_in_seconds = Some(input);
            self
        }
        pub fn set_max_wait_time_in_seconds(mut self, input: std::option::Option<i32>) -> Self {
            self.max_wait_time_in_seconds = input;
            self
        }
        /// Consumes the builder and constructs a [`StoppingCondition`](crate::model::StoppingCondition)
        pub fn build(self) -> crate::model::StoppingCondition {
            crate::model::StoppingCondition {
                max_runtime_in_seconds: self.max_runtime_in_seconds,
                max_wait_time_in_seconds: self.max_wait_time_in_seconds,
            }
        }
    }
}
impl StoppingCondition {
    /// Creates a new builder-style object to manufacture [`StoppingCondition`](crate::model::StoppingCondition)
    pub fn builder() -> crate::model::stopping_condition::Builder {
        crate::model::stopping_condition::Builder::default()
    }
}

/// A key-value pair attached to a SageMaker resource.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct Tag {
    #[serde(rename = "Key")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub key: std::option::Option<std::string::String>,
    #[serde(rename = "Value")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub value: std::option::Option<std::string::String>,
}
impl Tag {
    pub fn key(&self) -> std::option::Option<&str> {
        self.key.as_deref()
    }

    pub fn value(&self) -> std::option::Option<&str> {
        self.value.as_deref()
    }
}
/// See [`Tag`](crate::model::Tag)
pub mod tag {
    /// A builder for [`Tag`](crate::model::Tag)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        key: std::option::Option<std::string::String>,
        value: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn key(mut self, input: impl Into<std::string::String>) -> Self {
            self.key = Some(input.into());
            self
        }
        pub fn set_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.key = input;
            self
        }
        pub fn value(mut self, input: impl Into<std::string::String>) -> Self {
            self.value = Some(input.into());
            self
        }
        pub fn set_value(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.value = input;
            self
        }
        /// Consumes the builder and constructs a [`Tag`](crate::model::Tag)
        pub fn build(self) -> crate::model::Tag {
            crate::model::Tag {
                key: self.key,
                value: self.value,
            }
        }
    }
}
impl Tag {
    /// Creates a new builder-style object to manufacture [`Tag`](crate::model::Tag)
    pub fn builder() -> crate::model::tag::Builder {
        crate::model::tag::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct TensorBoardOutputConfig {
    #[serde(rename = "LocalPath")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub local_path: std::option::Option<std::string::String>,
    #[serde(rename = "S3OutputPath")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub s3_output_path: std::option::Option<std::string::String>,
}
impl TensorBoardOutputConfig {
    pub fn local_path(&self) -> std::option::Option<&str> {
        self.local_path.as_deref()
    }

    pub fn s3_output_path(&self) -> std::option::Option<&str> {
        self.s3_output_path.as_deref()
    }
}
/// See [`TensorBoardOutputConfig`](crate::model::TensorBoardOutputConfig)
pub mod tensor_board_output_config {
    /// A builder for [`TensorBoardOutputConfig`](crate::model::TensorBoardOutputConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        local_path: std::option::Option<std::string::String>,
        s3_output_path: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn local_path(mut self, input: impl Into<std::string::String>) -> Self {
            self.local_path = Some(input.into());
            self
        }
        pub fn set_local_path(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.local_path = input;
            self
        }
        pub fn s3_output_path(mut self, input: impl Into<std::string::String>) -> Self {
            self.s3_output_path = Some(input.into());
            self
        }
        pub fn set_s3_output_path(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.s3_output_path = input;
            self
        }
        /// Consumes the builder and constructs a [`TensorBoardOutputConfig`](crate::model::TensorBoardOutputConfig)
        pub fn build(self) -> crate::model::TensorBoardOutputConfig {
            crate::model::TensorBoardOutputConfig {
                local_path: self.local_path,
                s3_output_path: self.s3_output_path,
            }
        }
    }
}
impl TensorBoardOutputConfig {
    /// Creates a new builder-style object to manufacture [`TensorBoardOutputConfig`](crate::model::TensorBoardOutputConfig)
    pub fn builder() -> crate::model::tensor_board_output_config::Builder {
        crate::model::tensor_board_output_config::Builder::default()
    }
}

/// Number of training jobs launched by a tuning job, by status.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct TrainingJobStatusCounters {
    #[serde(rename = "Completed")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub completed: std::option::Option<i32>,
    #[serde(rename = "InProgress")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub in_progress: std::option::Option<i32>,
    #[serde(rename = "RetryableError")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub retryable_error: std::option::Option<i32>,
    #[serde(rename = "NonRetryableError")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub non_retryable_error: std::option::Option<i32>,
    #[serde(rename = "Stopped")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub stopped: std::option::Option<i32>,
}
impl TrainingJobStatusCounters {
    pub fn completed(&self) -> std::option::Option<i32> {
        self.completed
    }

    pub fn in_progress(&self) -> std::option::Option<i32> {
        self.in_progress
    }

    pub fn retryable_error(&self) -> std::option::Option<i32> {
        self.retryable_error
    }

    pub fn non_retryable_error(&self) -> std::option::Option<i32> {
        self.non_retryable_error
    }

    pub fn stopped(&self) -> std::option::Option<i32> {
        self.stopped
    }
}
/// See [`TrainingJobStatusCounters`](crate::model::TrainingJobStatusCounters)
pub mod training_job_status_counters {
    /// A builder for [`TrainingJobStatusCounters`](crate::model::TrainingJobStatusCounters)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        completed: std::option::Option<i32>,
        in_progress: std::option::Option<i32>,
        retryable_error: std::option::Option<i32>,
        non_retryable_error: std::option::Option<i32>,
        stopped: std::option::Option<i32>,
    }
    impl Builder {
        pub fn completed(mut self, input: i32) -> Self {
            self.completed = Some(input);
            self
        }
        pub fn set_completed(mut self, input: std::option::Option<i32>) -> Self {
            self.completed = input;
            self
        }
        pub fn in_progress(mut self, input: i32) -> Self {
            self.in_progress = Some(input);
            self
        }
        pub fn set_in_progress(mut self, input: std::option::Option<i32>) -> Self {
            self.in_progress = input;
            self
        }
        pub fn retryable_error(mut self, input: i32) -> Self {
            self.retryable_error = Some(input);
            self
        }
        pub fn set_retryable_error(mut self, input: std::option::Option<i32>) -> Self {
            self.retryable_error = input;
            self
        }
        pub fn non_retryable_error(mut self, input: i32) -> Self {
            self.non_retryable_error = Some(input);
            self
        }
        pub fn set_non_retryable_error(mut self, input: std::option::Option<i32>) -> Self {
            self.non_retryable_error = input;
            self
        }
        pub fn stopped(mut self, input: i32) -> Self {
            self.stopped = Some(input);
            self
        }
        pub fn set_stopped(mut self, input: std::option::Option<i32>) -> Self {
            self.stopped = input;
            self
        }
        /// Consumes the builder and constructs a [`TrainingJobStatusCounters`](crate::model::TrainingJobStatusCounters)
        pub fn build(self) -> crate::model::TrainingJobStatusCounters {
            crate::model::TrainingJobStatusCounters {
                completed: self.completed,
                in_progress: self.in_progress,
                retryable_error: self.retryable_error,
                non_retryable_error: self.non_retryable_error,
                stopped: self.stopped,
            }
        }
    }
}
impl TrainingJobStatusCounters {
    /// Creates a new builder-style object to manufacture [`TrainingJobStatusCounters`](crate::model::TrainingJobStatusCounters)
    pub fn builder() -> crate::model::training_job_status_counters::Builder {
        crate::model::training_job_status_counters::Builder::default()
    }
}

/// Summary of a training job, as returned by `ListTrainingJobs`.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct TrainingJobSummary {
    #[serde(rename = "TrainingJobName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub training_job_name: std::option::Option<std::string::String>,
    #[serde(rename = "TrainingJobArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub training_job_arn: std::option::Option<std::string::String>,
    #[serde(rename = "CreationTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time: std::option::Option<smithy_types::Instant>,
    /// Set once the job has completed, failed or been stopped.
    #[serde(rename = "TrainingEndTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub training_end_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "LastModifiedTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_modified_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "TrainingJobStatus")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub training_job_status: std::option::Option<crate::model::TrainingJobStatus>,
}
impl TrainingJobSummary {
    pub fn training_job_name(&self) -> std::option::Option<&str> {
        self.training_job_name.as_deref()
    }

    pub fn training_job_arn(&self) -> std::option::Option<&str> {
        self.training_job_arn.as_deref()
    }

    pub fn creation_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time.as_ref()
    }

    pub fn training_end_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.training_end_time.as_ref()
    }

    pub fn last_modified_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.last_modified_time.as_ref()
    }

    pub fn training_job_status(&self) -> std::option::Option<&crate::model::TrainingJobStatus> {
        self.training_job_status.as_ref()
    }
}
/// See [`TrainingJobSummary`](crate::model::TrainingJobSummary)
pub mod training_job_summary {
    /// A builder for [`TrainingJobSummary`](crate::model::TrainingJobSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        training_job_name: std::option::Option<std::string::String>,
        training_job_arn: std::option::Option<std::string::String>,
        creation_time: std::option::Option<smithy_types::Instant>,
        training_end_time: std::option::Option<smithy_types::Instant>,
        last_modified_time: std::option::Option<smithy_types::Instant>,
        training_job_status: std::option::Option<crate::model::TrainingJobStatus>,
    }
    impl Builder {
        pub fn training_job_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.training_job_name = Some(input.into());
            self
        }
        pub fn set_training_job_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.training_job_name = input;
            self
        }
        pub fn training_job_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.training_job_arn = Some(input.into());
            self
        }
        pub fn set_training_job_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.training_job_arn = input;
            self
        }
        pub fn creation_time(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time = Some(input);
            self
        }
        pub fn set_creation_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time = input;
            self
        }
        pub fn training_end_time(mut self, input: smithy_types::Instant) -> Self {
            self.training_end_time = Some(input);
            self
        }
        pub fn set_training_end_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.training_end_time = input;
            self
        }
        pub fn last_modified_time(mut self, input: smithy_types::Instant) -> Self {
            self.last_modified_time = Some(input);
            self
        }
        pub fn set_last_modified_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified_time = input;
            self
        }
        pub fn training_job_status(mut self, input: crate::model::TrainingJobStatus) -> Self {
            self.training_job_status = Some(input);
            self
        }
        pub fn set_training_job_status(mut self, input: std::option::Option<crate::model::TrainingJobStatus>) -> Self {
            self.training_job_status = input;
            self
        }
        /// Consumes the builder and constructs a [`TrainingJobSummary`](crate::model::TrainingJobSummary)
        pub fn build(self) -> crate::model::TrainingJobSummary {
            crate::model::TrainingJobSummary {
                training_job_name: self.training_job_name,
                training_job_arn: self.training_job_arn,
                creation_time: self.creation_time,
                training_end_time: self.training_end_time,
                last_modified_time: self.last_modified_time,
                training_job_status: self.training_job_status,
            }
        }
    }
}
impl TrainingJobSummary {
    /// Creates a new builder-style object to manufacture [`TrainingJobSummary`](crate::model::TrainingJobSummary)
    pub fn builder() -> crate::model::training_job_summary::Builder {
        crate::model::training_job_summary::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct TransformDataSource {
    #[serde(rename = "S3DataSource")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub s3_data_source: std::option::Option<crate::model::TransformS3DataSource>,
}
impl TransformDataSource {
    pub fn s3_data_source(&self) -> std::option::Option<&crate::model::TransformS3DataSource> {
        self.s3_data_source.as_ref()
    }
}
/// See [`TransformDataSource`](crate::model::TransformDataSource)
pub mod transform_data_source {
    /// A builder for [`TransformDataSource`](crate::model::TransformDataSource)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        s3_data_source: std::option::Option<crate::model::TransformS3DataSource>,
    }
    impl Builder {
        pub fn s3_data_source(mut self, input: crate::model::TransformS3DataSource) -> Self {
            self.s3_data_source = Some(input);
            self
        }
        pub fn set_s3_data_source(mut self, input: std::option::Option<crate::model::TransformS3DataSource>) -> Self {
            self.s3_data_source = input;
            self
        }
        /// Consumes the builder and constructs a [`TransformDataSource`](crate::model::TransformDataSource)
        pub fn build(self) -> crate::model::TransformDataSource {
            crate::model::TransformDataSource {
                s3_data_source: self.s3_data_source,
            }
        }
    }
}
impl TransformDataSource {
    /// Creates a new builder-style object to manufacture [`TransformDataSource`](crate::model::TransformDataSource)
    pub fn builder() -> crate::model::transform_data_source::Builder {
        crate::model::transform_data_source::Builder::default()
    }
}

/// The input data of a transform job and how to split it into records.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct TransformInput {
    #[serde(rename = "DataSource")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data_source: std::option::Option<crate::model::TransformDataSource>,
    #[serde(rename = "ContentType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub content_type: std::option::Option<std::string::String>,
    #[serde(rename = "CompressionType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compression_type: std::option::Option<crate::model::CompressionType>,
    #[serde(rename = "SplitType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub split_type: std::option::Option<crate::model::SplitType>,
}
impl TransformInput {
    pub fn data_source(&self) -> std::option::Option<&crate::model::TransformDataSource> {
        self.data_source.as_ref()
    }

    pub fn content_type(&self) -> std::option::Option<&str> {
        self.content_type.as_deref()
    }

    pub fn compression_type(&self) -> std::option::Option<&crate::model::CompressionType> {
        self.compression_type.as_ref()
    }

    pub fn split_type(&self) -> std::option::Option<&crate::model::SplitType> {
        self.split_type.as_ref()
    }
}
/// See [`TransformInput`](crate::model::TransformInput)
pub mod transform_input {
    /// A builder for [`TransformInput`](crate::model::TransformInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        data_source: std::option::Option<crate::model::TransformDataSource>,
        content_type: std::option::Option<std::string::String>,
        compression_type: std::option::Option<crate::model::CompressionType>,
        split_type: std::option::Option<crate::model::SplitType>,
    }
    impl Builder {
        pub fn data_source(mut self, input: crate::model::TransformDataSource) -> Self {
            self.data_source = Some(input);
            self
        }
        pub fn set_data_source(mut self, input: std::option::Option<crate::model::TransformDataSource>) -> Self {
            self.data_source = input;
            self
        }
        pub fn content_type(mut self, input: impl Into<std::string::String>) -> Self {
            self.content_type = Some(input.into());
            self
        }
        pub fn set_content_type(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.content_type = input;
            self
        }
        pub fn compression_type(mut self, input: crate::model::CompressionType) -> Self {
            self.compression_type = Some(input);
            self
        }
        pub fn set_compression_type(mut self, input: std::option::Option<crate::model::CompressionType>) -> Self {
            self.compression_type = input;
            self
        }
        pub fn split_type(mut self, input: crate::model::SplitType) -> Self {
            self.split_type = Some(input);
            self
        }
        pub fn set_split_type(mut self, input: std::option::Option<crate::model::SplitType>) -> Self {
            self.split_type = input;
            self
        }
        /// Consumes the builder and constructs a [`TransformInput`](crate::model::TransformInput)
        pub fn build(self) -> crate::model::TransformInput {
            crate::model::TransformInput {
                data_source: self.data_source,
                content_type: self.content_type,
                compression_type: self.compression_type,
                split_type: self.split_type,
            }
        }
    }
}
impl TransformInput {
    /// Creates a new builder-style object to manufacture [`TransformInput`](crate::model::TransformInput)
    pub fn builder() -> crate::model::transform_input::Builder {
        crate::model::transform_input::Builder::default()
    }
}

/// Summary of a transform job, as returned by `ListTransformJobs`.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct TransformJobSummary {
    #[serde(rename = "TransformJobName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub transform_job_name: std::option::Option<std::string::String>,
    #[serde(rename = "TransformJobArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub transform_job_arn: std::option::Option<std::string::String>,
    #[serde(rename = "CreationTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "TransformEndTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub transform_end_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "LastModifiedTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_modified_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "TransformJobStatus")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub transform_job_status: std::option::Option<crate::model::TransformJobStatus>,
    #[serde(rename = "FailureReason")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub failure_reason: std::option::Option<std::string::String>,
}
impl TransformJobSummary {
    pub fn transform_job_name(&self) -> std::option::Option<&str> {
        self.transform_job_name.as_deref()
    }

    pub fn transform_job_arn(&self) -> std::option::Option<&str> {
        self.transform_job_arn.as_deref()
    }

    pub fn creation_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time.as_ref()
    }

    pub fn transform_end_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.transform_end_time.as_ref()
    }

    pub fn last_modified_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.last_modified_time.as_ref()
    }

    pub fn transform_job_status(&self) -> std::option::Option<&crate::model::TransformJobStatus> {
        self.transform_job_status.as_ref()
    }

    pub fn failure_reason(&self) -> std::option::Option<&str> {
        self.failure_reason.as_deref()
    }
}
/// See [`TransformJobSummary`](crate::model::TransformJobSummary)
pub mod transform_job_summary {
    /// A builder for [`TransformJobSummary`](crate::model::TransformJobSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        transform_job_name: std::option::Option<std::string::String>,
        transform_job_arn: std::option::Option<std::string::String>,
        creation_time: std::option::Option<smithy_types::Instant>,
        transform_end_time: std::option::Option<smithy_types::Instant>,
        last_modified_time: std::option::Option<smithy_types::Instant>,
        transform_job_status: std::option::Option<crate::model::TransformJobStatus>,
        failure_reason: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn transform_job_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.transform_job_name = Some(input.into());
            self
        }
        pub fn set_transform_job_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.transform_job_name = input;
            self
        }
        pub fn transform_job_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.transform_job_arn = Some(input.into());
            self
        }
        pub fn set_transform_job_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.transform_job_arn = input;
            self
        }
        pub fn creation_time(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time = Some(input);
            self
        }
        pub fn set_creation_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time = input;
            self
        }
        pub fn transform_end_time(mut self, input: smithy_types::Instant) -> Self {
            self.transform_end_time = Some(input);
            self
        }
        pub fn set_transform_end_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.transform_end_time = input;
            self
        }
        pub fn last_modified_time(mut self, input: smithy_types::Instant) -> Self {
            self.last_modified_time = Some(input);
            self
        }
        pub fn set_last_modified_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified_time = input;
            self
        }
        pub fn transform_job_status(mut self, input: crate::model::TransformJobStatus) -> Self {
            self.transform_job_status = Some(input);
            self
        }
        pub fn set_transform_job_status(mut self, input: std::option::Option<crate::model::TransformJobStatus>) -> Self {
            self.transform_job_status = input;
            self
        }
        pub fn failure_reason(mut self, input: impl Into<std::string::String>) -> Self {
            self.failure_reason = Some(input.into());
            self
        }
        pub fn set_failure_reason(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.failure_reason = input;
            self
        }
        /// Consumes the builder and constructs a [`TransformJobSummary`](crate::model::TransformJobSummary)
        pub fn build(self) -> crate::model::TransformJobSummary {
            crate::model::TransformJobSummary {
                transform_job_name: self.transform_job_name,
                transform_job_arn: self.transform_job_arn,
                creation_time: self.creation_time,
                transform_end_time: self.transform_end_time,
                last_modified_time: self.last_modified_time,
                transform_job_status: self.transform_job_status,
                failure_reason: self.failure_reason,
            }
        }
    }
}
impl TransformJobSummary {
    /// Creates a new builder-style object to manufacture [`TransformJobSummary`](crate::model::TransformJobSummary)
    pub fn builder() -> crate::model::transform_job_summary::Builder {
        crate::model::transform_job_summary::Builder::default()
    }
}

/// Where the results of a transform job are stored.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct TransformOutput {
    #[serde(rename = "S3OutputPath")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub s3_output_path: std::option::Option<std::string::String>,
    /// MIME type of the transformed data.
    #[serde(rename = "Accept")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub accept: std::option::Option<std::string::String>,
    #[serde(rename = "AssembleWith")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub assemble_with: std::option::Option<crate::model::AssemblyType>,
    #[serde(rename = "KmsKeyId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key_id: std::option::Option<std::string::String>,
}
impl TransformOutput {
    pub fn s3_output_path(&self) -> std::option::Option<&str> {
        self.s3_output_path.as_deref()
    }

    pub fn accept(&self) -> std::option::Option<&str> {
        self.accept.as_deref()
    }

    pub fn assemble_with(&self) -> std::option::Option<&crate::model::AssemblyType> {
        self.assemble_with.as_ref()
    }

    pub fn kms_key_id(&self) -> std::option::Option<&str> {
        self.kms_key_id.as_deref()
    }
}
/// See [`TransformOutput`](crate::model::TransformOutput)
pub mod transform_output {
    /// A builder for [`TransformOutput`](crate::model::TransformOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        s3_output_path: std::option::Option<std::string::String>,
        accept: std::option::Option<std::string::String>,
        assemble_with: std::option::Option<crate::model::AssemblyType>,
        kms_key_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn s3_output_path(mut self, input: impl Into<std::string::String>) -> Self {
            self.s3_output_path = Some(input.into());
            self
        }
        pub fn set_s3_output_path(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.s3_output_path = input;
            self
        }
        pub fn accept(mut self, input: impl Into<std::string::String>) -> Self {
            self.accept = Some(input.into());
            self
        }
        pub fn set_accept(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.accept = input;
            self
        }
        pub fn assemble_with(mut self, input: crate::model::AssemblyType) -> Self {
            self.assemble_with = Some(input);
            self
        }
        pub fn set_assemble_with(mut self, input: std::option::Option<crate::model::AssemblyType>) -> Self {
            self.assemble_with = input;
            self
        }
        pub fn kms_key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.kms_key_id = Some(input.into());
            self
        }
        pub fn set_kms_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.kms_key_id = input;
            self
        }
        /// Consumes the builder and constructs a [`TransformOutput`](crate::model::TransformOutput)
        pub fn build(self) -> crate::model::TransformOutput {
            crate::model::TransformOutput {
                s3_output_path: self.s3_output_path,
                accept: self.accept,
                assemble_with: self.assemble_with,
                kms_key_id: self.kms_key_id,
            }
        }
    }
}
impl TransformOutput {
    /// Creates a new builder-style object to manufacture [`TransformOutput`](crate::model::TransformOutput)
    pub fn builder() -> crate::model::transform_output::Builder {
        crate::model::transform_output::Builder::default()
    }
}

/// The ML compute instances used for a transform job.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct TransformResources {
    #[serde(rename = "InstanceType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub instance_type: std::option::Option<crate::model::TransformInstanceType>,
    #[serde(rename = "InstanceCount")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub instance_count: std::option::Option<i32>,
    #[serde(rename = "VolumeKmsKeyId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_kms_key_id: std::option::Option<std::string::String>,
}
impl TransformResources {
    pub fn instance_type(&self) -> std::option::Option<&crate::model::TransformInstanceType> {
        self.instance_type.as_ref()
    }

    pub fn instance_count(&self) -> std::option::Option<i32> {
        self.instance_count
    }

    pub fn volume_kms_key_id(&self) -> std::option::Option<&str> {
        self.volume_kms_key_id.as_deref()
    }
}
/// See [`TransformResources`](crate::model::TransformResources)
pub mod transform_resources {
    /// A builder for [`TransformResources`](crate::model::TransformResources)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        instance_type: std::option::Option<crate::model::TransformInstanceType>,
        instance_count: std::option::Option<i32>,
        volume_kms_key_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn instance_type(mut self, input: crate::model::TransformInstanceType) -> Self {
            self.instance_type = Some(input);
            self
        }
        pub fn set_instance_type(mut self, input: std::option::Option<crate::model::TransformInstanceType>) -> Self {
            self.instance_type = input;
            self
        }
        pub fn instance_count(mut self, input: i32) -> Self {
            self.instance_count = Some(input);
            self
        }
        pub fn set_instance_count(mut self, input: std::option::Option<i32>) -> Self {
            self.instance_count = input;
            self
        }
        pub fn volume_kms_key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.volume_kms_key_id = Some(input.into());
            self
        }
        pub fn set_volume_kms_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.volume_kms_key_id = input;
            self
        }
        /// Consumes the builder and constructs a [`TransformResources`](crate::model::TransformResources)
        pub fn build(self) -> crate::model::TransformResources {
            crate::model::TransformResources {
                instance_type: self.instance_type,
                instance_count: self.instance_count,
                volume_kms_key_id: self.volume_kms_key_id,
            }
        }
    }
}
impl TransformResources {
    /// Creates a new builder-style object to manufacture [`TransformResources`](crate::model::TransformResources)
    pub fn builder() -> crate::model::transform_resources::Builder {
        crate::model::transform_resources::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct TransformS3DataSource {
    #[serde(rename = "S3DataType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub s3_data_type: std::option::Option<crate::model::S3DataType>,
    #[serde(rename = "S3Uri")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub s3_uri: std::option::Option<std::string::String>,
}
impl TransformS3DataSource {
    pub fn s3_data_type(&self) -> std::option::Option<&crate::model::S3DataType> {
        self.s3_data_type.as_ref()
    }

    pub fn s3_uri(&self) -> std::option::Option<&str> {
        self.s3_uri.as_deref()
    }
}
/// See [`TransformS3DataSource`](crate::model::TransformS3DataSource)
pub mod transform_s3_data_source {
    /// A builder for [`TransformS3DataSource`](crate::model::TransformS3DataSource)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        s3_data_type: std::option::Option<crate::model::S3DataType>,
        s3_uri: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn s3_data_type(mut self, input: crate::model::S3DataType) -> Self {
            self.s3_data_type = Some(input);
            self
        }
        pub fn set_s3_data_type(mut self, input: std::option::Option<crate::model::S3DataType>) -> Self {
            self.s3_data_type = input;
            self
        }
        pub fn s3_uri(mut self, input: impl Into<std::string::String>) -> Self {
            self.s3_uri = Some(input.into());
            self
        }
        pub fn set_s3_uri(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.s3_uri = input;
            self
        }
        /// Consumes the builder and constructs a [`TransformS3DataSource`](crate::model::TransformS3DataSource)
        pub fn build(self) -> crate::model::TransformS3DataSource {
            crate::model::TransformS3DataSource {
                s3_data_type: self.s3_data_type,
                s3_uri: self.s3_uri,
            }
        }
    }
}
impl TransformS3DataSource {
    /// Creates a new builder-style object to manufacture [`TransformS3DataSource`](crate::model::TransformS3DataSource)
    pub fn builder() -> crate::model::transform_s3_data_source::Builder {
        crate::model::transform_s3_data_source::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::fmt::Debug, std::default::Default)]
pub struct TuningJobCompletionCriteria {
    /// Stop tuning once a training job reaches this objective value.
    #[serde(rename = "TargetObjectiveMetricValue")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub target_objective_metric_value: std::option::Option<f32>,
}
impl std::cmp::PartialEq for TuningJobCompletionCriteria {
    fn eq(&self, other: &Self) -> bool {
        self.target_objective_metric_value.map(f32::to_bits) == other.target_objective_metric_value.map(f32::to_bits)
    }
}
impl std::cmp::Eq for TuningJobCompletionCriteria {}
impl std::hash::Hash for TuningJobCompletionCriteria {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.target_objective_metric_value.map(f32::to_bits), state);
    }
}
impl TuningJobCompletionCriteria {
    pub fn target_objective_metric_value(&self) -> std::option::Option<f32> {
        self.target_objective_metric_value
    }
}
/// See [`TuningJobCompletionCriteria`](crate::model::TuningJobCompletionCriteria)
pub mod tuning_job_completion_criteria {
    /// A builder for [`TuningJobCompletionCriteria`](crate::model::TuningJobCompletionCriteria)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        target_objective_metric_value: std::option::Option<f32>,
    }
    impl Builder {
        pub fn target_objective_metric_value(mut self, input: f32) -> Self {
            self.target_objective_metric_value = Some(input);
            self
        }
        pub fn set_target_objective_metric_value(mut self, input: std::option::Option<f32>) -> Self {
            self.target_objective_metric_value = input;
            self
        }
        /// Consumes the builder and constructs a [`TuningJobCompletionCriteria`](crate::model::TuningJobCompletionCriteria)
        pub fn build(self) -> crate::model::TuningJobCompletionCriteria {
            crate::model::TuningJobCompletionCriteria {
                target_objective_metric_value: self.target_objective_metric_value,
            }
        }
    }
}
impl TuningJobCompletionCriteria {
    /// Creates a new builder-style object to manufacture [`TuningJobCompletionCriteria`](crate::model::TuningJobCompletionCriteria)
    pub fn builder() -> crate::model::tuning_job_completion_criteria::Builder {
        crate::model::tuning_job_completion_criteria::Builder::default()
    }
}

/// An amount in US dollars, split into whole dollars, cents and tenths of a cent.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct USD {
    #[serde(rename = "Dollars")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub dollars: std::option::Option<i32>,
    #[serde(rename = "Cents")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub cents: std::option::Option<i32>,
    #[serde(rename = "TenthFractionsOfACent")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tenth_fractions_of_a_cent: std::option::Option<i32>,
}
impl USD {
    pub fn dollars(&self) -> std::option::Option<i32> {
        self.dollars
    }

    pub fn cents(&self) -> std::option::Option<i32> {
        self.cents
    }

    pub fn tenth_fractions_of_a_cent(&self) -> std::option::Option<i32> {
        self.tenth_fractions_of_a_cent
    }
}
/// See [`USD`](crate::model::USD)
pub mod usd {
    /// A builder for [`USD`](crate::model::USD)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        dollars: std::option::Option<i32>,
        cents: std::option::Option<i32>,
        tenth_fractions_of_a_cent: std::option::Option<i32>,
    }
    impl Builder {
        pub fn dollars(mut self, input: i32) -> Self {
            self.dollars = Some(input);
            self
        }
        pub fn set_dollars(mut self, input: std::option::Option<i32>) -> Self {
            self.dollars = input;
            self
        }
        pub fn cents(mut self, input: i32) -> Self {
            self.cents = Some(input);
            self
        }
        pub fn set_cents(mut self, input: std::option::Option<i32>) -> Self {
            self.cents = input;
            self
        }
        pub fn tenth_fractions_of_a_cent(mut self, input: i32) -> Self {
            self.tenth_fractions_of_a_cent = Some(input);
            self
        }
        pub fn set_tenth_fractions_of_a_cent(mut self, input: std::option::Option<i32>) -> Self {
            self.tenth_fractions_of_a_cent = input;
            self
        }
        /// Consumes the builder and constructs a [`USD`](crate::model::USD)
        pub fn build(self) -> crate::model::USD {
            crate::model::USD {
                dollars: self.dollars,
                cents: self.cents,
                tenth_fractions_of_a_cent: self.tenth_fractions_of_a_cent,
            }
        }
    }
}
impl USD {
    /// Creates a new builder-style object to manufacture [`USD`](crate::model::USD)
    pub fn builder() -> crate::model::usd::Builder {
        crate::model::usd::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct UiConfig {
    #[serde(rename = "UiTemplateS3Uri")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ui_template_s3_uri: std::option::Option<std::string::String>,
    #[serde(rename = "HumanTaskUiArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub human_task_ui_arn: std::option::Option<std::string::String>,
}
impl UiConfig {
    pub fn ui_template_s3_uri(&self) -> std::option::Option<&str> {
        self.ui_template_s3_uri.as_deref()
    }

    pub fn human_task_ui_arn(&self) -> std::option::Option<&str> {
        self.human_task_ui_arn.as_deref()
    }
}
/// See [`UiConfig`](crate::model::UiConfig)
pub mod ui_config {
    /// A builder for [`UiConfig`](crate::model::UiConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        ui_template_s3_uri: std::option::Option<std::string::String>,
        human_task_ui_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn ui_template_s3_uri(mut self, input: impl Into<std::string::String>) -> Self {
            self.ui_template_s3_uri = Some(input.into());
            self
        }
        pub fn set_ui_template_s3_uri(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.ui_template_s3_uri = input;
            self
        }
        pub fn human_task_ui_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.human_task_ui_arn = Some(input.into());
            self
        }
        pub fn set_human_task_ui_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.human_task_ui_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`UiConfig`](crate::model::UiConfig)
        pub fn build(self) -> crate::model::UiConfig {
            crate::model::UiConfig {
                ui_template_s3_uri: self.ui_template_s3_uri,
                human_task_ui_arn: self.human_task_ui_arn,
            }
        }
    }
}
impl UiConfig {
    /// Creates a new builder-style object to manufacture [`UiConfig`](crate::model::UiConfig)
    pub fn builder() -> crate::model::ui_config::Builder {
        crate::model::ui_config::Builder::default()
    }
}

/// A variant property that should not be retained when an endpoint is updated.
#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct VariantProperty {
    #[serde(rename = "VariantPropertyType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub variant_property_type: std::option::Option<crate::model::VariantPropertyType>,
}
impl VariantProperty {
    pub fn variant_property_type(&self) -> std::option::Option<&crate::model::VariantPropertyType> {
        self.variant_property_type.as_ref()
    }
}
/// See [`VariantProperty`](crate::model::VariantProperty)
pub mod variant_property {
    /// A builder for [`VariantProperty`](crate::model::VariantProperty)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        variant_property_type: std::option::Option<crate::model::VariantPropertyType>,
    }
    impl Builder {
        pub fn variant_property_type(mut self, input: crate::model::VariantPropertyType) -> Self {
            self.variant_property_type = Some(input);
            self
        }
        pub fn set_variant_property_type(mut self, input: std::option::Option<crate::model::VariantPropertyType>) -> Self {
            self.variant_property_type = input;
            self
        }
        /// Consumes the builder and constructs a [`VariantProperty`](crate::model::VariantProperty)
        pub fn build(self) -> crate::model::VariantProperty {
            crate::model::VariantProperty {
                variant_property_type: self.variant_property_type,
            }
        }
    }
}
impl VariantProperty {
    /// Creates a new builder-style object to manufacture [`VariantProperty`](crate::model::VariantProperty)
    pub fn builder() -> crate::model::variant_property::Builder {
        crate::model::variant_property::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct VpcConfig {
    #[serde(rename = "SecurityGroupIds")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub security_group_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "Subnets")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub subnets: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl VpcConfig {
    pub fn security_group_ids(&self) -> std::option::Option<&[std::string::String]> {
        self.security_group_ids.as_deref()
    }

    pub fn subnets(&self) -> std::option::Option<&[std::string::String]> {
        self.subnets.as_deref()
    }
}
/// See [`VpcConfig`](crate::model::VpcConfig)
pub mod vpc_config {
    /// A builder for [`VpcConfig`](crate::model::VpcConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        security_group_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        subnets: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        /// Appends an item to `SecurityGroupIds`.
        ///
        /// To override the contents of this collection use [`set_security_group_ids`](Self::set_security_group_ids).
        pub fn security_group_ids(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.security_group_ids.unwrap_or_default();
            v.push(input.into());
            self.security_group_ids = Some(v);
            self
        }
        pub fn set_security_group_ids(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.security_group_ids = input;
            self
        }
        /// Appends an item to `Subnets`.
        ///
        /// To override the contents of this collection use [`set_subnets`](Self::set_subnets).
        pub fn subnets(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.subnets.unwrap_or_default();
            v.push(input.into());
            self.subnets = Some(v);
            self
        }
        pub fn set_subnets(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.subnets = input;
            self
        }
        /// Consumes the builder and constructs a [`VpcConfig`](crate::model::VpcConfig)
        pub fn build(self) -> crate::model::VpcConfig {
            crate::model::VpcConfig {
                security_group_ids: self.security_group_ids,
                subnets: self.subnets,
            }
        }
    }
}
impl VpcConfig {
    /// Creates a new builder-style object to manufacture [`VpcConfig`](crate::model::VpcConfig)
    pub fn builder() -> crate::model::vpc_config::Builder {
        crate::model::vpc_config::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum AssemblyType {
    None,
    Line,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for AssemblyType {
    fn from(s: &str) -> Self {
        match s {
            "None" => AssemblyType::None,
            "Line" => AssemblyType::Line,
            other => AssemblyType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for AssemblyType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(AssemblyType::from(s))
    }
}
impl AssemblyType {
    pub fn as_str(&self) -> &str {
        match self {
            AssemblyType::None => "None",
            AssemblyType::Line => "Line",
            AssemblyType::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for AssemblyType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for AssemblyType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for AssemblyType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum AwsManagedHumanLoopRequestSource {
    AWSRekognitionDetectModerationLabelsImageV3,
    AWSTextractAnalyzeDocumentFormsV1,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for AwsManagedHumanLoopRequestSource {
    fn from(s: &str) -> Self {
        match s {
            "AWS/Rekognition/DetectModerationLabels/Image/V3" => AwsManagedHumanLoopRequestSource::AWSRekognitionDetectModerationLabelsImageV3,
            "AWS/Textract/AnalyzeDocument/Forms/V1" => AwsManagedHumanLoopRequestSource::AWSTextractAnalyzeDocumentFormsV1,
            other => AwsManagedHumanLoopRequestSource::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for AwsManagedHumanLoopRequestSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(AwsManagedHumanLoopRequestSource::from(s))
    }
}
impl AwsManagedHumanLoopRequestSource {
    pub fn as_str(&self) -> &str {
        match self {
            AwsManagedHumanLoopRequestSource::AWSRekognitionDetectModerationLabelsImageV3 => "AWS/Rekognition/DetectModerationLabels/Image/V3",
            AwsManagedHumanLoopRequestSource::AWSTextractAnalyzeDocumentFormsV1 => "AWS/Textract/AnalyzeDocument/Forms/V1",
            AwsManagedHumanLoopRequestSource::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for AwsManagedHumanLoopRequestSource {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for AwsManagedHumanLoopRequestSource {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for AwsManagedHumanLoopRequestSource {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum BatchStrategy {
    MultiRecord,
    SingleRecord,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for BatchStrategy {
    fn from(s: &str) -> Self {
        match s {
            "MultiRecord" => BatchStrategy::MultiRecord,
            "SingleRecord" => BatchStrategy::SingleRecord,
            other => BatchStrategy::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for BatchStrategy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(BatchStrategy::from(s))
    }
}
impl BatchStrategy {
    pub fn as_str(&self) -> &str {
        match self {
            BatchStrategy::MultiRecord => "MultiRecord",
            BatchStrategy::SingleRecord => "SingleRecord",
            BatchStrategy::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for BatchStrategy {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for BatchStrategy {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for BatchStrategy {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum CaptureMode {
    Input,
    Output,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for CaptureMode {
    fn from(s: &str) -> Self {
        match s {
            "Input" => CaptureMode::Input,
            "Output" => CaptureMode::Output,
            other => CaptureMode::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for CaptureMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(CaptureMode::from(s))
    }
}
impl CaptureMode {
    pub fn as_str(&self) -> &str {
        match self {
            CaptureMode::Input => "Input",
            CaptureMode::Output => "Output",
            CaptureMode::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for CaptureMode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for CaptureMode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for CaptureMode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum CaptureStatus {
    Started,
    Stopped,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for CaptureStatus {
    fn from(s: &str) -> Self {
        match s {
            "Started" => CaptureStatus::Started,
            "Stopped" => CaptureStatus::Stopped,
            other => CaptureStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for CaptureStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(CaptureStatus::from(s))
    }
}
impl CaptureStatus {
    pub fn as_str(&self) -> &str {
        match self {
            CaptureStatus::Started => "Started",
            CaptureStatus::Stopped => "Stopped",
            CaptureStatus::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for CaptureStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for CaptureStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for CaptureStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum CompressionType {
    None,
    Gzip,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for CompressionType {
    fn from(s: &str) -> Self {
        match s {
            "None" => CompressionType::None,
            "Gzip" => CompressionType::Gzip,
            other => CompressionType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for CompressionType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(CompressionType::from(s))
    }
}
impl CompressionType {
    pub fn as_str(&self) -> &str {
        match self {
            CompressionType::None => "None",
            CompressionType::Gzip => "Gzip",
            CompressionType::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for CompressionType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for CompressionType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for CompressionType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum ContainerMode {
    SingleModel,
    MultiModel,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for ContainerMode {
    fn from(s: &str) -> Self {
        match s {
            "SingleModel" => ContainerMode::SingleModel,
            "MultiModel" => ContainerMode::MultiModel,
            other => ContainerMode::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ContainerMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ContainerMode::from(s))
    }
}
impl ContainerMode {
    pub fn as_str(&self) -> &str {
        match self {
            ContainerMode::SingleModel => "SingleModel",
            ContainerMode::MultiModel => "MultiModel",
            ContainerMode::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for ContainerMode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for ContainerMode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for ContainerMode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum ContentClassifier {
    FreeOfPersonallyIdentifiableInformation,
    FreeOfAdultContent,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for ContentClassifier {
    fn from(s: &str) -> Self {
        match s {
            "FreeOfPersonallyIdentifiableInformation" => ContentClassifier::FreeOfPersonallyIdentifiableInformation,
            "FreeOfAdultContent" => ContentClassifier::FreeOfAdultContent,
            other => ContentClassifier::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ContentClassifier {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ContentClassifier::from(s))
    }
}
impl ContentClassifier {
    pub fn as_str(&self) -> &str {
        match self {
            ContentClassifier::FreeOfPersonallyIdentifiableInformation => "FreeOfPersonallyIdentifiableInformation",
            ContentClassifier::FreeOfAdultContent => "FreeOfAdultContent",
            ContentClassifier::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for ContentClassifier {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for ContentClassifier {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for ContentClassifier {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum DirectInternetAccess {
    Enabled,
    Disabled,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for DirectInternetAccess {
    fn from(s: &str) -> Self {
        match s {
            "Enabled" => DirectInternetAccess::Enabled,
            "Disabled" => DirectInternetAccess::Disabled,
            other => DirectInternetAccess::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for DirectInternetAccess {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(DirectInternetAccess::from(s))
    }
}
impl DirectInternetAccess {
    pub fn as_str(&self) -> &str {
        match self {
            DirectInternetAccess::Enabled => "Enabled",
            DirectInternetAccess::Disabled => "Disabled",
            DirectInternetAccess::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for DirectInternetAccess {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for DirectInternetAccess {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for DirectInternetAccess {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum EndpointConfigSortKey {
    Name,
    CreationTime,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for EndpointConfigSortKey {
    fn from(s: &str) -> Self {
        match s {
            "Name" => EndpointConfigSortKey::Name,
            "CreationTime" => EndpointConfigSortKey::CreationTime,
            other => EndpointConfigSortKey::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for EndpointConfigSortKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(EndpointConfigSortKey::from(s))
    }
}
impl EndpointConfigSortKey {
    pub fn as_str(&self) -> &str {
        match self {
            EndpointConfigSortKey::Name => "Name",
            EndpointConfigSortKey::CreationTime => "CreationTime",
            EndpointConfigSortKey::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for EndpointConfigSortKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for EndpointConfigSortKey {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for EndpointConfigSortKey {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum EndpointSortKey {
    Name,
    CreationTime,
    Status,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for EndpointSortKey {
    fn from(s: &str) -> Self {
        match s {
            "Name" => EndpointSortKey::Name,
            "CreationTime" => EndpointSortKey::CreationTime,
            "Status" => EndpointSortKey::Status,
            other => EndpointSortKey::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for EndpointSortKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(EndpointSortKey::from(s))
    }
}
impl EndpointSortKey {
    pub fn as_str(&self) -> &str {
        match self {
            EndpointSortKey::Name => "Name",
            EndpointSortKey::CreationTime => "CreationTime",
            EndpointSortKey::Status => "Status",
            EndpointSortKey::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for EndpointSortKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for EndpointSortKey {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for EndpointSortKey {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum EndpointStatus {
    OutOfService,
    Creating,
    Updating,
    SystemUpdating,
    RollingBack,
    InService,
    Deleting,
    Failed,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for EndpointStatus {
    fn from(s: &str) -> Self {
        match s {
            "OutOfService" => EndpointStatus::OutOfService,
            "Creating" => EndpointStatus::Creating,
            "Updating" => EndpointStatus::Updating,
            "SystemUpdating" => EndpointStatus::SystemUpdating,
            "RollingBack" => EndpointStatus::RollingBack,
            "InService" => EndpointStatus::InService,
            "Deleting" => EndpointStatus::Deleting,
            "Failed" => EndpointStatus::Failed,
            other => EndpointStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for EndpointStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(EndpointStatus::from(s))
    }
}
impl EndpointStatus {
    pub fn as_str(&self) -> &str {
        match self {
            EndpointStatus::OutOfService => "OutOfService",
            EndpointStatus::Creating => "Creating",
            EndpointStatus::Updating => "Updating",
            EndpointStatus::SystemUpdating => "SystemUpdating",
            EndpointStatus::RollingBack => "RollingBack",
            EndpointStatus::InService => "InService",
            EndpointStatus::Deleting => "Deleting",
            EndpointStatus::Failed => "Failed",
            EndpointStatus::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for EndpointStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for EndpointStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for EndpointStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum FileSystemAccessMode {
    Rw,
    Ro,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for FileSystemAccessMode {
    fn from(s: &str) -> Self {
        match s {
            "rw" => FileSystemAccessMode::Rw,
            "ro" => FileSystemAccessMode::Ro,
            other => FileSystemAccessMode::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for FileSystemAccessMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(FileSystemAccessMode::from(s))
    }
}
impl FileSystemAccessMode {
    pub fn as_str(&self) -> &str {
        match self {
            FileSystemAccessMode::Rw => "rw",
            FileSystemAccessMode::Ro => "ro",
            FileSystemAccessMode::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for FileSystemAccessMode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for FileSystemAccessMode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for FileSystemAccessMode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum FileSystemType {
    EFS,
    FSxLustre,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for FileSystemType {
    fn from(s: &str) -> Self {
        match s {
            "EFS" => FileSystemType::EFS,
            "FSxLustre" => FileSystemType::FSxLustre,
            other => FileSystemType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for FileSystemType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(FileSystemType::from(s))
    }
}
impl FileSystemType {
    pub fn as_str(&self) -> &str {
        match self {
            FileSystemType::EFS => "EFS",
            FileSystemType::FSxLustre => "FSxLustre",
            FileSystemType::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for FileSystemType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for FileSystemType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for FileSystemType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum FlowDefinitionStatus {
    Initializing,
    Active,
    Failed,
    Deleting,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for FlowDefinitionStatus {
    fn from(s: &str) -> Self {
        match s {
            "Initializing" => FlowDefinitionStatus::Initializing,
            "Active" => FlowDefinitionStatus::Active,
            "Failed" => FlowDefinitionStatus::Failed,
            "Deleting" => FlowDefinitionStatus::Deleting,
            other => FlowDefinitionStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for FlowDefinitionStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(FlowDefinitionStatus::from(s))
    }
}
impl FlowDefinitionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            FlowDefinitionStatus::Initializing => "Initializing",
            FlowDefinitionStatus::Active => "Active",
            FlowDefinitionStatus::Failed => "Failed",
            FlowDefinitionStatus::Deleting => "Deleting",
            FlowDefinitionStatus::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for FlowDefinitionStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for FlowDefinitionStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for FlowDefinitionStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum HyperParameterScalingType {
    Auto,
    Linear,
    Logarithmic,
    ReverseLogarithmic,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for HyperParameterScalingType {
    fn from(s: &str) -> Self {
        match s {
            "Auto" => HyperParameterScalingType::Auto,
            "Linear" => HyperParameterScalingType::Linear,
            "Logarithmic" => HyperParameterScalingType::Logarithmic,
            "ReverseLogarithmic" => HyperParameterScalingType::ReverseLogarithmic,
            other => HyperParameterScalingType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for HyperParameterScalingType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(HyperParameterScalingType::from(s))
    }
}
impl HyperParameterScalingType {
    pub fn as_str(&self) -> &str {
        match self {
            HyperParameterScalingType::Auto => "Auto",
            HyperParameterScalingType::Linear => "Linear",
            HyperParameterScalingType::Logarithmic => "Logarithmic",
            HyperParameterScalingType::ReverseLogarithmic => "ReverseLogarithmic",
            HyperParameterScalingType::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for HyperParameterScalingType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for HyperParameterScalingType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for HyperParameterScalingType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum HyperParameterTuningJobObjectiveType {
    Maximize,
    Minimize,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for HyperParameterTuningJobObjectiveType {
    fn from(s: &str) -> Self {
        match s {
            "Maximize" => HyperParameterTuningJobObjectiveType::Maximize,
            "Minimize" => HyperParameterTuningJobObjectiveType::Minimize,
            other => HyperParameterTuningJobObjectiveType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for HyperParameterTuningJobObjectiveType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(HyperParameterTuningJobObjectiveType::from(s))
    }
}
impl HyperParameterTuningJobObjectiveType {
    pub fn as_str(&self) -> &str {
        match self {
            HyperParameterTuningJobObjectiveType::Maximize => "Maximize",
            HyperParameterTuningJobObjectiveType::Minimize => "Minimize",
            HyperParameterTuningJobObjectiveType::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for HyperParameterTuningJobObjectiveType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for HyperParameterTuningJobObjectiveType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for HyperParameterTuningJobObjectiveType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum HyperParameterTuningJobSortByOptions {
    Name,
    Status,
    CreationTime,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for HyperParameterTuningJobSortByOptions {
    fn from(s: &str) -> Self {
        match s {
            "Name" => HyperParameterTuningJobSortByOptions::Name,
            "Status" => HyperParameterTuningJobSortByOptions::Status,
            "CreationTime" => HyperParameterTuningJobSortByOptions::CreationTime,
            other => HyperParameterTuningJobSortByOptions::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for HyperParameterTuningJobSortByOptions {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(HyperParameterTuningJobSortByOptions::from(s))
    }
}
impl HyperParameterTuningJobSortByOptions {
    pub fn as_str(&self) -> &str {
        match self {
            HyperParameterTuningJobSortByOptions::Name => "Name",
            HyperParameterTuningJobSortByOptions::Status => "Status",
            HyperParameterTuningJobSortByOptions::CreationTime => "CreationTime",
            HyperParameterTuningJobSortByOptions::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for HyperParameterTuningJobSortByOptions {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for HyperParameterTuningJobSortByOptions {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for HyperParameterTuningJobSortByOptions {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum HyperParameterTuningJobStatus {
    Completed,
    InProgress,
    Failed,
    Stopped,
    Stopping,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for HyperParameterTuningJobStatus {
    fn from(s: &str) -> Self {
        match s {
            "Completed" => HyperParameterTuningJobStatus::Completed,
            "InProgress" => HyperParameterTuningJobStatus::InProgress,
            "Failed" => HyperParameterTuningJobStatus::Failed,
            "Stopped" => HyperParameterTuningJobStatus::Stopped,
            "Stopping" => HyperParameterTuningJobStatus::Stopping,
            other => HyperParameterTuningJobStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for HyperParameterTuningJobStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(HyperParameterTuningJobStatus::from(s))
    }
}
impl HyperParameterTuningJobStatus {
    pub fn as_str(&self) -> &str {
        match self {
            HyperParameterTuningJobStatus::Completed => "Completed",
            HyperParameterTuningJobStatus::InProgress => "InProgress",
            HyperParameterTuningJobStatus::Failed => "Failed",
            HyperParameterTuningJobStatus::Stopped => "Stopped",
            HyperParameterTuningJobStatus::Stopping => "Stopping",
            HyperParameterTuningJobStatus::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for HyperParameterTuningJobStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for HyperParameterTuningJobStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for HyperParameterTuningJobStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum HyperParameterTuningJobStrategyType {
    Bayesian,
    Random,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for HyperParameterTuningJobStrategyType {
    fn from(s: &str) -> Self {
        match s {
            "Bayesian" => HyperParameterTuningJobStrategyType::Bayesian,
            "Random" => HyperParameterTuningJobStrategyType::Random,
            other => HyperParameterTuningJobStrategyType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for HyperParameterTuningJobStrategyType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(HyperParameterTuningJobStrategyType::from(s))
    }
}
impl HyperParameterTuningJobStrategyType {
    pub fn as_str(&self) -> &str {
        match self {
            HyperParameterTuningJobStrategyType::Bayesian => "Bayesian",
            HyperParameterTuningJobStrategyType::Random => "Random",
            HyperParameterTuningJobStrategyType::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for HyperParameterTuningJobStrategyType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for HyperParameterTuningJobStrategyType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for HyperParameterTuningJobStrategyType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum HyperParameterTuningJobWarmStartType {
    IdenticalDataAndAlgorithm,
    TransferLearning,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for HyperParameterTuningJobWarmStartType {
    fn from(s: &str) -> Self {
        match s {
            "IdenticalDataAndAlgorithm" => HyperParameterTuningJobWarmStartType::IdenticalDataAndAlgorithm,
            "TransferLearning" => HyperParameterTuningJobWarmStartType::TransferLearning,
            other => HyperParameterTuningJobWarmStartType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for HyperParameterTuningJobWarmStartType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(HyperParameterTuningJobWarmStartType::from(s))
    }
}
impl HyperParameterTuningJobWarmStartType {
    pub fn as_str(&self) -> &str {
        match self {
            HyperParameterTuningJobWarmStartType::IdenticalDataAndAlgorithm => "IdenticalDataAndAlgorithm",
            HyperParameterTuningJobWarmStartType::TransferLearning => "TransferLearning",
            HyperParameterTuningJobWarmStartType::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for HyperParameterTuningJobWarmStartType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for HyperParameterTuningJobWarmStartType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for HyperParameterTuningJobWarmStartType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum InstanceType {
    MlT2Medium,
    MlT2Large,
    MlT2Xlarge,
    MlT22xlarge,
    MlT3Medium,
    MlT3Large,
    MlT3Xlarge,
    MlT32xlarge,
    MlM4Xlarge,
    MlM42xlarge,
    MlM44xlarge,
    MlM410xlarge,
    MlM416xlarge,
    MlM5Xlarge,
    MlM52xlarge,
    MlM54xlarge,
    MlM512xlarge,
    MlM524xlarge,
    MlC4Xlarge,
    MlC42xlarge,
    MlC44xlarge,
    MlC48xlarge,
    MlC5Xlarge,
    MlC52xlarge,
    MlC54xlarge,
    MlC59xlarge,
    MlC518xlarge,
    MlP2Xlarge,
    MlP28xlarge,
    MlP216xlarge,
    MlP32xlarge,
    MlP38xlarge,
    MlP316xlarge,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for InstanceType {
    fn from(s: &str) -> Self {
        match s {
            "ml.t2.medium" => InstanceType::MlT2Medium,
            "ml.t2.large" => InstanceType::MlT2Large,
            "ml.t2.xlarge" => InstanceType::MlT2Xlarge,
            "ml.t2.2xlarge" => InstanceType::MlT22xlarge,
            "ml.t3.medium" => InstanceType::MlT3Medium,
            "ml.t3.large" => InstanceType::MlT3Large,
            "ml.t3.xlarge" => InstanceType::MlT3Xlarge,
            "ml.t3.2xlarge" => InstanceType::MlT32xlarge,
            "ml.m4.xlarge" => InstanceType::MlM4Xlarge,
            "ml.m4.2xlarge" => InstanceType::MlM42xlarge,
            "ml.m4.4xlarge" => InstanceType::MlM44xlarge,
            "ml.m4.10xlarge" => InstanceType::MlM410xlarge,
            "ml.m4.16xlarge" => InstanceType::MlM416xlarge,
            "ml.m5.xlarge" => InstanceType::MlM5Xlarge,
            "ml.m5.2xlarge" => InstanceType::MlM52xlarge,
            "ml.m5.4xlarge" => InstanceType::MlM54xlarge,
            "ml.m5.12xlarge" => InstanceType::MlM512xlarge,
            "ml.m5.24xlarge" => InstanceType::MlM524xlarge,
            "ml.c4.xlarge" => InstanceType::MlC4Xlarge,
            "ml.c4.2xlarge" => InstanceType::MlC42xlarge,
            "ml.c4.4xlarge" => InstanceType::MlC44xlarge,
            "ml.c4.8xlarge" => InstanceType::MlC48xlarge,
            "ml.c5.xlarge" => InstanceType::MlC5Xlarge,
            "ml.c5.2xlarge" => InstanceType::MlC52xlarge,
            "ml.c5.4xlarge" => InstanceType::MlC54xlarge,
            "ml.c5.9xlarge" => InstanceType::MlC59xlarge,
            "ml.c5.18xlarge" => InstanceType::MlC518xlarge,
            "ml.p2.xlarge" => InstanceType::MlP2Xlarge,
            "ml.p2.8xlarge" => InstanceType::MlP28xlarge,
            "ml.p2.16xlarge" => InstanceType::MlP216xlarge,
            "ml.p3.2xlarge" => InstanceType::MlP32xlarge,
            "ml.p3.8xlarge" => InstanceType::MlP38xlarge,
            "ml.p3.16xlarge" => InstanceType::MlP316xlarge,
            other => InstanceType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for InstanceType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(InstanceType::from(s))
    }
}
impl InstanceType {
    pub fn as_str(&self) -> &str {
        match self {
            InstanceType::MlT2Medium => "ml.t2.medium",
            InstanceType::MlT2Large => "ml.t2.large",
            InstanceType::MlT2Xlarge => "ml.t2.xlarge",
            InstanceType::MlT22xlarge => "ml.t2.2xlarge",
            InstanceType::MlT3Medium => "ml.t3.medium",
            InstanceType::MlT3Large => "ml.t3.large",
            InstanceType::MlT3Xlarge => "ml.t3.xlarge",
            InstanceType::MlT32xlarge => "ml.t3.2xlarge",
            InstanceType::MlM4Xlarge => "ml.m4.xlarge",
            InstanceType::MlM42xlarge => "ml.m4.2xlarge",
            InstanceType::MlM44xlarge => "ml.m4.4xlarge",
            InstanceType::MlM410xlarge => "ml.m4.10xlarge",
            InstanceType::MlM416xlarge => "ml.m4.16xlarge",
            InstanceType::MlM5Xlarge => "ml.m5.xlarge",
            InstanceType::MlM52xlarge => "ml.m5.2xlarge",
            InstanceType::MlM54xlarge => "ml.m5.4xlarge",
            InstanceType::MlM512xlarge => "ml.m5.12xlarge",
            InstanceType::MlM524xlarge => "ml.m5.24xlarge",
            InstanceType::MlC4Xlarge => "ml.c4.xlarge",
            InstanceType::MlC42xlarge => "ml.c4.2xlarge",
            InstanceType::MlC44xlarge => "ml.c4.4xlarge",
            InstanceType::MlC48xlarge => "ml.c4.8xlarge",
            InstanceType::MlC5Xlarge => "ml.c5.xlarge",
            InstanceType::MlC52xlarge => "ml.c5.2xlarge",
            InstanceType::MlC54xlarge => "ml.c5.4xlarge",
            InstanceType::MlC59xlarge => "ml.c5.9xlarge",
            InstanceType::MlC518xlarge => "ml.c5.18xlarge",
            InstanceType::MlP2Xlarge => "ml.p2.xlarge",
            InstanceType::MlP28xlarge => "ml.p2.8xlarge",
            InstanceType::MlP216xlarge => "ml.p2.16xlarge",
            InstanceType::MlP32xlarge => "ml.p3.2xlarge",
            InstanceType::MlP38xlarge => "ml.p3.8xlarge",
            InstanceType::MlP316xlarge => "ml.p3.16xlarge",
            InstanceType::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for InstanceType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for InstanceType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for InstanceType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum JoinSource {
    Input,
    None,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for JoinSource {
    fn from(s: &str) -> Self {
        match s {
            "Input" => JoinSource::Input,
            "None" => JoinSource::None,
            other => JoinSource::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for JoinSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(JoinSource::from(s))
    }
}
impl JoinSource {
    pub fn as_str(&self) -> &str {
        match self {
            JoinSource::Input => "Input",
            JoinSource::None => "None",
            JoinSource::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for JoinSource {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for JoinSource {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for JoinSource {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum LabelingJobStatus {
    Initializing,
    InProgress,
    Completed,
    Failed,
    Stopping,
    Stopped,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for LabelingJobStatus {
    fn from(s: &str) -> Self {
        match s {
            "Initializing" => LabelingJobStatus::Initializing,
            "InProgress" => LabelingJobStatus::InProgress,
            "Completed" => LabelingJobStatus::Completed,
            "Failed" => LabelingJobStatus::Failed,
            "Stopping" => LabelingJobStatus::Stopping,
            "Stopped" => LabelingJobStatus::Stopped,
            other => LabelingJobStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for LabelingJobStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(LabelingJobStatus::from(s))
    }
}
impl LabelingJobStatus {
    pub fn as_str(&self) -> &str {
        match self {
            LabelingJobStatus::Initializing => "Initializing",
            LabelingJobStatus::InProgress => "InProgress",
            LabelingJobStatus::Completed => "Completed",
            LabelingJobStatus::Failed => "Failed",
            LabelingJobStatus::Stopping => "Stopping",
            LabelingJobStatus::Stopped => "Stopped",
            LabelingJobStatus::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for LabelingJobStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for LabelingJobStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for LabelingJobStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum ModelSortKey {
    Name,
    CreationTime,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for ModelSortKey {
    fn from(s: &str) -> Self {
        match s {
            "Name" => ModelSortKey::Name,
            "CreationTime" => ModelSortKey::CreationTime,
            other => ModelSortKey::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ModelSortKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ModelSortKey::from(s))
    }
}
impl ModelSortKey {
    pub fn as_str(&self) -> &str {
        match self {
            ModelSortKey::Name => "Name",
            ModelSortKey::CreationTime => "CreationTime",
            ModelSortKey::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for ModelSortKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for ModelSortKey {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for ModelSortKey {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum NotebookInstanceAcceleratorType {
    MlEia1Medium,
    MlEia1Large,
    MlEia1Xlarge,
    MlEia2Medium,
    MlEia2Large,
    MlEia2Xlarge,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for NotebookInstanceAcceleratorType {
    fn from(s: &str) -> Self {
        match s {
            "ml.eia1.medium" => NotebookInstanceAcceleratorType::MlEia1Medium,
            "ml.eia1.large" => NotebookInstanceAcceleratorType::MlEia1Large,
            "ml.eia1.xlarge" => NotebookInstanceAcceleratorType::MlEia1Xlarge,
            "ml.eia2.medium" => NotebookInstanceAcceleratorType::MlEia2Medium,
            "ml.eia2.large" => NotebookInstanceAcceleratorType::MlEia2Large,
            "ml.eia2.xlarge" => NotebookInstanceAcceleratorType::MlEia2Xlarge,
            other => NotebookInstanceAcceleratorType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for NotebookInstanceAcceleratorType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(NotebookInstanceAcceleratorType::from(s))
    }
}
impl NotebookInstanceAcceleratorType {
    pub fn as_str(&self) -> &str {
        match self {
            NotebookInstanceAcceleratorType::MlEia1Medium => "ml.eia1.medium",
            NotebookInstanceAcceleratorType::MlEia1Large => "ml.eia1.large",
            NotebookInstanceAcceleratorType::MlEia1Xlarge => "ml.eia1.xlarge",
            NotebookInstanceAcceleratorType::MlEia2Medium => "ml.eia2.medium",
            NotebookInstanceAcceleratorType::MlEia2Large => "ml.eia2.large",
            NotebookInstanceAcceleratorType::MlEia2Xlarge => "ml.eia2.xlarge",
            NotebookInstanceAcceleratorType::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for NotebookInstanceAcceleratorType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for NotebookInstanceAcceleratorType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for NotebookInstanceAcceleratorType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum NotebookInstanceSortKey {
    Name,
    CreationTime,
    Status,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for NotebookInstanceSortKey {
    fn from(s: &str) -> Self {
        match s {
            "Name" => NotebookInstanceSortKey::Name,
            "CreationTime" => NotebookInstanceSortKey::CreationTime,
            "Status" => NotebookInstanceSortKey::Status,
            other => NotebookInstanceSortKey::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for NotebookInstanceSortKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(NotebookInstanceSortKey::from(s))
    }
}
impl NotebookInstanceSortKey {
    pub fn as_str(&self) -> &str {
        match self {
            NotebookInstanceSortKey::Name => "Name",
            NotebookInstanceSortKey::CreationTime => "CreationTime",
            NotebookInstanceSortKey::Status => "Status",
            NotebookInstanceSortKey::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for NotebookInstanceSortKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for NotebookInstanceSortKey {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for NotebookInstanceSortKey {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum NotebookInstanceSortOrder {
    Ascending,
    Descending,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for NotebookInstanceSortOrder {
    fn from(s: &str) -> Self {
        match s {
            "Ascending" => NotebookInstanceSortOrder::Ascending,
            "Descending" => NotebookInstanceSortOrder::Descending,
            other => NotebookInstanceSortOrder::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for NotebookInstanceSortOrder {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(NotebookInstanceSortOrder::from(s))
    }
}
impl NotebookInstanceSortOrder {
    pub fn as_str(&self) -> &str {
        match self {
            NotebookInstanceSortOrder::Ascending => "Ascending",
            NotebookInstanceSortOrder::Descending => "Descending",
            NotebookInstanceSortOrder::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for NotebookInstanceSortOrder {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for NotebookInstanceSortOrder {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for NotebookInstanceSortOrder {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum NotebookInstanceStatus {
    Pending,
    InService,
    Stopping,
    Stopped,
    Failed,
    Deleting,
    Updating,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for NotebookInstanceStatus {
    fn from(s: &str) -> Self {
        match s {
            "Pending" => NotebookInstanceStatus::Pending,
            "InService" => NotebookInstanceStatus::InService,
            "Stopping" => NotebookInstanceStatus::Stopping,
            "Stopped" => NotebookInstanceStatus::Stopped,
            "Failed" => NotebookInstanceStatus::Failed,
            "Deleting" => NotebookInstanceStatus::Deleting,
            "Updating" => NotebookInstanceStatus::Updating,
            other => NotebookInstanceStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for NotebookInstanceStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(NotebookInstanceStatus::from(s))
    }
}
impl NotebookInstanceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            NotebookInstanceStatus::Pending => "Pending",
            NotebookInstanceStatus::InService => "InService",
            NotebookInstanceStatus::Stopping => "Stopping",
            NotebookInstanceStatus::Stopped => "Stopped",
            NotebookInstanceStatus::Failed => "Failed",
            NotebookInstanceStatus::Deleting => "Deleting",
            NotebookInstanceStatus::Updating => "Updating",
            NotebookInstanceStatus::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for NotebookInstanceStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for NotebookInstanceStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for NotebookInstanceStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum ObjectiveStatus {
    Succeeded,
    Pending,
    Failed,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for ObjectiveStatus {
    fn from(s: &str) -> Self {
        match s {
            "Succeeded" => ObjectiveStatus::Succeeded,
            "Pending" => ObjectiveStatus::Pending,
            "Failed" => ObjectiveStatus::Failed,
            other => ObjectiveStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ObjectiveStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ObjectiveStatus::from(s))
    }
}
impl ObjectiveStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ObjectiveStatus::Succeeded => "Succeeded",
            ObjectiveStatus::Pending => "Pending",
            ObjectiveStatus::Failed => "Failed",
            ObjectiveStatus::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for ObjectiveStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for ObjectiveStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for ObjectiveStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum OrderKey {
    Ascending,
    Descending,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for OrderKey {
    fn from(s: &str) -> Self {
        match s {
            "Ascending" => OrderKey::Ascending,
            "Descending" => OrderKey::Descending,
            other => OrderKey::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for OrderKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(OrderKey::from(s))
    }
}
impl OrderKey {
    pub fn as_str(&self) -> &str {
        match self {
            OrderKey::Ascending => "Ascending",
            OrderKey::Descending => "Descending",
            OrderKey::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for OrderKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for OrderKey {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for OrderKey {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum ProcessingInstanceType {
    MlT3Medium,
    MlT3Large,
    MlT3Xlarge,
    MlT32xlarge,
    MlM4Xlarge,
    MlM42xlarge,
    MlM44xlarge,
    MlM410xlarge,
    MlM416xlarge,
    MlC4Xlarge,
    MlC42xlarge,
    MlC44xlarge,
    MlC48xlarge,
    MlP2Xlarge,
    MlP28xlarge,
    MlP216xlarge,
    MlP32xlarge,
    MlP38xlarge,
    MlP316xlarge,
    MlC5Xlarge,
    MlC52xlarge,
    MlC54xlarge,
    MlC59xlarge,
    MlC518xlarge,
    MlM5Large,
    MlM5Xlarge,
    MlM52xlarge,
    MlM54xlarge,
    MlM512xlarge,
    MlM524xlarge,
    MlR5Large,
    MlR5Xlarge,
    MlR52xlarge,
    MlR54xlarge,
    MlR58xlarge,
    MlR512xlarge,
    MlR516xlarge,
    MlR524xlarge,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for ProcessingInstanceType {
    fn from(s: &str) -> Self {
        match s {
            "ml.t3.medium" => ProcessingInstanceType::MlT3Medium,
            "ml.t3.large" => ProcessingInstanceType::MlT3Large,
            "ml.t3.xlarge" => ProcessingInstanceType::MlT3Xlarge,
            "ml.t3.2xlarge" => ProcessingInstanceType::MlT32xlarge,
            "ml.m4.xlarge" => ProcessingInstanceType::MlM4Xlarge,
            "ml.m4.2xlarge" => ProcessingInstanceType::MlM42xlarge,
            "ml.m4.4xlarge" => ProcessingInstanceType::MlM44xlarge,
            "ml.m4.10xlarge" => ProcessingInstanceType::MlM410xlarge,
            "ml.m4.16xlarge" => ProcessingInstanceType::MlM416xlarge,
            "ml.c4.xlarge" => ProcessingInstanceType::MlC4Xlarge,
            "ml.c4.2xlarge" => ProcessingInstanceType::MlC42xlarge,
            "ml.c4.4xlarge" => ProcessingInstanceType::MlC44xlarge,
            "ml.c4.8xlarge" => ProcessingInstanceType::MlC48xlarge,
            "ml.p2.xlarge" => ProcessingInstanceType::MlP2Xlarge,
            "ml.p2.8xlarge" => ProcessingInstanceType::MlP28xlarge,
            "ml.p2.16xlarge" => ProcessingInstanceType::MlP216xlarge,
            "ml.p3.2xlarge" => ProcessingInstanceType::MlP32xlarge,
            "ml.p3.8xlarge" => ProcessingInstanceType::MlP38xlarge,
            "ml.p3.16xlarge" => ProcessingInstanceType::MlP316xlarge,
            "ml.c5.xlarge" => ProcessingInstanceType::MlC5Xlarge,
            "ml.c5.2xlarge" => ProcessingInstanceType::MlC52xlarge,
            "ml.c5.4xlarge" => ProcessingInstanceType::MlC54xlarge,
            "ml.c5.9xlarge" => ProcessingInstanceType::MlC59xlarge,
            "ml.c5.18xlarge" => ProcessingInstanceType::MlC518xlarge,
            "ml.m5.large" => ProcessingInstanceType::MlM5Large,
            "ml.m5.xlarge" => ProcessingInstanceType::MlM5Xlarge,
            "ml.m5.2xlarge" => ProcessingInstanceType::MlM52xlarge,
            "ml.m5.4xlarge" => ProcessingInstanceType::MlM54xlarge,
            "ml.m5.12xlarge" => ProcessingInstanceType::MlM512xlarge,
            "ml.m5.24xlarge" => ProcessingInstanceType::MlM524xlarge,
            "ml.r5.large" => ProcessingInstanceType::MlR5Large,
            "ml.r5.xlarge" => ProcessingInstanceType::MlR5Xlarge,
            "ml.r5.2xlarge" => ProcessingInstanceType::MlR52xlarge,
            "ml.r5.4xlarge" => ProcessingInstanceType::MlR54xlarge,
            "ml.r5.8xlarge" => ProcessingInstanceType::MlR58xlarge,
            "ml.r5.12xlarge" => ProcessingInstanceType::MlR512xlarge,
            "ml.r5.16xlarge" => ProcessingInstanceType::MlR516xlarge,
            "ml.r5.24xlarge" => ProcessingInstanceType::MlR524xlarge,
            other => ProcessingInstanceType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ProcessingInstanceType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ProcessingInstanceType::from(s))
    }
}
impl ProcessingInstanceType {
    pub fn as_str(&self) -> &str {
        match self {
            ProcessingInstanceType::MlT3Medium => "ml.t3.medium",
            ProcessingInstanceType::MlT3Large => "ml.t3.large",
            ProcessingInstanceType::MlT3Xlarge => "ml.t3.xlarge",
            ProcessingInstanceType::MlT32xlarge => "ml.t3.2xlarge",
            ProcessingInstanceType::MlM4Xlarge => "ml.m4.xlarge",
            ProcessingInstanceType::MlM42xlarge => "ml.m4.2xlarge",
            ProcessingInstanceType::MlM44xlarge => "ml.m4.4xlarge",
            ProcessingInstanceType::MlM410xlarge => "ml.m4.10xlarge",
            ProcessingInstanceType::MlM416xlarge => "ml.m4.16xlarge",
            ProcessingInstanceType::MlC4Xlarge => "ml.c4.xlarge",
            ProcessingInstanceType::MlC42xlarge => "ml.c4.2xlarge",
            ProcessingInstanceType::MlC44xlarge => "ml.c4.4xlarge",
            ProcessingInstanceType::MlC48xlarge => "ml.c4.8xlarge",
            ProcessingInstanceType::MlP2Xlarge => "ml.p2.xlarge",
            ProcessingInstanceType::MlP28xlarge => "ml.p2.8xlarge",
            ProcessingInstanceType::MlP216xlarge => "ml.p2.16xlarge",
            ProcessingInstanceType::MlP32xlarge => "ml.p3.2xlarge",
            ProcessingInstanceType::MlP38xlarge => "ml.p3.8xlarge",
            ProcessingInstanceType::MlP316xlarge => "ml.p3.16xlarge",
            ProcessingInstanceType::MlC5Xlarge => "ml.c5.xlarge",
            ProcessingInstanceType::MlC52xlarge => "ml.c5.2xlarge",
            ProcessingInstanceType::MlC54xlarge => "ml.c5.4xlarge",
            ProcessingInstanceType::MlC59xlarge => "ml.c5.9xlarge",
            ProcessingInstanceType::MlC518xlarge => "ml.c5.18xlarge",
            ProcessingInstanceType::MlM5Large => "ml.m5.large",
            ProcessingInstanceType::MlM5Xlarge => "ml.m5.xlarge",
            ProcessingInstanceType::MlM52xlarge => "ml.m5.2xlarge",
            ProcessingInstanceType::MlM54xlarge => "ml.m5.4xlarge",
            ProcessingInstanceType::MlM512xlarge => "ml.m5.12xlarge",
            ProcessingInstanceType::MlM524xlarge => "ml.m5.24xlarge",
            ProcessingInstanceType::MlR5Large => "ml.r5.large",
            ProcessingInstanceType::MlR5Xlarge => "ml.r5.xlarge",
            ProcessingInstanceType::MlR52xlarge => "ml.r5.2xlarge",
            ProcessingInstanceType::MlR54xlarge => "ml.r5.4xlarge",
            ProcessingInstanceType::MlR58xlarge => "ml.r5.8xlarge",
            ProcessingInstanceType::MlR512xlarge => "ml.r5.12xlarge",
            ProcessingInstanceType::MlR516xlarge => "ml.r5.16xlarge",
            ProcessingInstanceType::MlR524xlarge => "ml.r5.24xlarge",
            ProcessingInstanceType::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for ProcessingInstanceType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for ProcessingInstanceType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for ProcessingInstanceType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum ProductionVariantAcceleratorType {
    MlEia1Medium,
    MlEia1Large,
    MlEia1Xlarge,
    MlEia2Medium,
    MlEia2Large,
    MlEia2Xlarge,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for ProductionVariantAcceleratorType {
    fn from(s: &str) -> Self {
        match s {
            "ml.eia1.medium" => ProductionVariantAcceleratorType::MlEia1Medium,
            "ml.eia1.large" => ProductionVariantAcceleratorType::MlEia1Large,
            "ml.eia1.xlarge" => ProductionVariantAcceleratorType::MlEia1Xlarge,
            "ml.eia2.medium" => ProductionVariantAcceleratorType::MlEia2Medium,
            "ml.eia2.large" => ProductionVariantAcceleratorType::MlEia2Large,
            "ml.eia2.xlarge" => ProductionVariantAcceleratorType::MlEia2Xlarge,
            other => ProductionVariantAcceleratorType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ProductionVariantAcceleratorType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ProductionVariantAcceleratorType::from(s))
    }
}
impl ProductionVariantAcceleratorType {
    pub fn as_str(&self) -> &str {
        match self {
            ProductionVariantAcceleratorType::MlEia1Medium => "ml.eia1.medium",
            ProductionVariantAcceleratorType::MlEia1Large => "ml.eia1.large",
            ProductionVariantAcceleratorType::MlEia1Xlarge => "ml.eia1.xlarge",
            ProductionVariantAcceleratorType::MlEia2Medium => "ml.eia2.medium",
            ProductionVariantAcceleratorType::MlEia2Large => "ml.eia2.large",
            ProductionVariantAcceleratorType::MlEia2Xlarge => "ml.eia2.xlarge",
            ProductionVariantAcceleratorType::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for ProductionVariantAcceleratorType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for ProductionVariantAcceleratorType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for ProductionVariantAcceleratorType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum ProductionVariantInstanceType {
    MlT2Medium,
    MlT2Large,
    MlT2Xlarge,
    MlT22xlarge,
    MlM4Xlarge,
    MlM42xlarge,
    MlM44xlarge,
    MlM410xlarge,
    MlM416xlarge,
    MlM5Large,
    MlM5Xlarge,
    MlM52xlarge,
    MlM54xlarge,
    MlM512xlarge,
    MlM524xlarge,
    MlC4Large,
    MlC4Xlarge,
    MlC42xlarge,
    MlC44xlarge,
    MlC48xlarge,
    MlP2Xlarge,
    MlP28xlarge,
    MlP216xlarge,
    MlP32xlarge,
    MlP38xlarge,
    MlP316xlarge,
    MlC5Large,
    MlC5Xlarge,
    MlC52xlarge,
    MlC54xlarge,
    MlC59xlarge,
    MlC518xlarge,
    MlG4dnXlarge,
    MlG4dn2xlarge,
    MlG4dn4xlarge,
    MlG4dn8xlarge,
    MlG4dn12xlarge,
    MlG4dn16xlarge,
    MlR5Large,
    MlR5Xlarge,
    MlR52xlarge,
    MlR54xlarge,
    MlR512xlarge,
    MlR524xlarge,
    MlInf1Xlarge,
    MlInf12xlarge,
    MlInf16xlarge,
    MlInf124xlarge,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for ProductionVariantInstanceType {
    fn from(s: &str) -> Self {
        match s {
            "ml.t2.medium" => ProductionVariantInstanceType::MlT2Medium,
            "ml.t2.large" => ProductionVariantInstanceType::MlT2Large,
            "ml.t2.xlarge" => ProductionVariantInstanceType::MlT2Xlarge,
            "ml.t2.2xlarge" => ProductionVariantInstanceType::MlT22xlarge,
            "ml.m4.xlarge" => ProductionVariantInstanceType::MlM4Xlarge,
            "ml.m4.2xlarge" => ProductionVariantInstanceType::MlM42xlarge,
            "ml.m4.4xlarge" => ProductionVariantInstanceType::MlM44xlarge,
            "ml.m4.10xlarge" => ProductionVariantInstanceType::MlM410xlarge,
            "ml.m4.16xlarge" => ProductionVariantInstanceType::MlM416xlarge,
            "ml.m5.large" => ProductionVariantInstanceType::MlM5Large,
            "ml.m5.xlarge" => ProductionVariantInstanceType::MlM5Xlarge,
            "ml.m5.2xlarge" => ProductionVariantInstanceType::MlM52xlarge,
            "ml.m5.4xlarge" => ProductionVariantInstanceType::MlM54xlarge,
            "ml.m5.12xlarge" => ProductionVariantInstanceType::MlM512xlarge,
            "ml.m5.24xlarge" => ProductionVariantInstanceType::MlM524xlarge,
            "ml.c4.large" => ProductionVariantInstanceType::MlC4Large,
            "ml.c4.xlarge" => ProductionVariantInstanceType::MlC4Xlarge,
            "ml.c4.2xlarge" => ProductionVariantInstanceType::MlC42xlarge,
            "ml.c4.4xlarge" => ProductionVariantInstanceType::MlC44xlarge,
            "ml.c4.8xlarge" => ProductionVariantInstanceType::MlC48xlarge,
            "ml.p2.xlarge" => ProductionVariantInstanceType::MlP2Xlarge,
            "ml.p2.8xlarge" => ProductionVariantInstanceType::MlP28xlarge,
            "ml.p2.16xlarge" => ProductionVariantInstanceType::MlP216xlarge,
            "ml.p3.2xlarge" => ProductionVariantInstanceType::MlP32xlarge,
            "ml.p3.8xlarge" => ProductionVariantInstanceType::MlP38xlarge,
            "ml.p3.16xlarge" => ProductionVariantInstanceType::MlP316xlarge,
            "ml.c5.large" => ProductionVariantInstanceType::MlC5Large,
            "ml.c5.xlarge" => ProductionVariantInstanceType::MlC5Xlarge,
            "ml.c5.2xlarge" => ProductionVariantInstanceType::MlC52xlarge,
            "ml.c5.4xlarge" => ProductionVariantInstanceType::MlC54xlarge,
            "ml.c5.9xlarge" => ProductionVariantInstanceType::MlC59xlarge,
            "ml.c5.18xlarge" => ProductionVariantInstanceType::MlC518xlarge,
            "ml.g4dn.xlarge" => ProductionVariantInstanceType::MlG4dnXlarge,
            "ml.g4dn.2xlarge" => ProductionVariantInstanceType::MlG4dn2xlarge,
            "ml.g4dn.4xlarge" => ProductionVariantInstanceType::MlG4dn4xlarge,
            "ml.g4dn.8xlarge" => ProductionVariantInstanceType::MlG4dn8xlarge,
            "ml.g4dn.12xlarge" => ProductionVariantInstanceType::MlG4dn12xlarge,
            "ml.g4dn.16xlarge" => ProductionVariantInstanceType::MlG4dn16xlarge,
            "ml.r5.large" => ProductionVariantInstanceType::MlR5Large,
            "ml.r5.xlarge" => ProductionVariantInstanceType::MlR5Xlarge,
            "ml.r5.2xlarge" => ProductionVariantInstanceType::MlR52xlarge,
            "ml.r5.4xlarge" => ProductionVariantInstanceType::MlR54xlarge,
            "ml.r5.12xlarge" => ProductionVariantInstanceType::MlR512xlarge,
            "ml.r5.24xlarge" => ProductionVariantInstanceType::MlR524xlarge,
            "ml.inf1.xlarge" => ProductionVariantInstanceType::MlInf1Xlarge,
            "ml.inf1.2xlarge" => ProductionVariantInstanceType::MlInf12xlarge,
            "ml.inf1.6xlarge" => ProductionVariantInstanceType::MlInf16xlarge,
            "ml.inf1.24xlarge" => ProductionVariantInstanceType::MlInf124xlarge,
            other => ProductionVariantInstanceType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ProductionVariantInstanceType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ProductionVariantInstanceType::from(s))
    }
}
impl ProductionVariantInstanceType {
    pub fn as_str(&self) -> &str {
        match self {
            ProductionVariantInstanceType::MlT2Medium => "ml.t2.medium",
            ProductionVariantInstanceType::MlT2Large => "ml.t2.large",
            ProductionVariantInstanceType::MlT2Xlarge => "ml.t2.xlarge",
            ProductionVariantInstanceType::MlT22xlarge => "ml.t2.2xlarge",
            ProductionVariantInstanceType::MlM4Xlarge => "ml.m4.xlarge",
            ProductionVariantInstanceType::MlM42xlarge => "ml.m4.2xlarge",
            ProductionVariantInstanceType::MlM44xlarge => "ml.m4.4xlarge",
            ProductionVariantInstanceType::MlM410xlarge => "ml.m4.10xlarge",
            ProductionVariantInstanceType::MlM416xlarge => "ml.m4.16xlarge",
            ProductionVariantInstanceType::MlM5Large => "ml.m5.large",
            ProductionVariantInstanceType::MlM5Xlarge => "ml.m5.xlarge",
            ProductionVariantInstanceType::MlM52xlarge => "ml.m5.2xlarge",
            ProductionVariantInstanceType::MlM54xlarge => "ml.m5.4xlarge",
            ProductionVariantInstanceType::MlM512xlarge => "ml.m5.12xlarge",
            ProductionVariantInstanceType::MlM524xlarge => "ml.m5.24xlarge",
            ProductionVariantInstanceType::MlC4Large => "ml.c4.large",
            ProductionVariantInstanceType::MlC4Xlarge => "ml.c4.xlarge",
            ProductionVariantInstanceType::MlC42xlarge => "ml.c4.2xlarge",
            ProductionVariantInstanceType::MlC44xlarge => "ml.c4.4xlarge",
            ProductionVariantInstanceType::MlC48xlarge => "ml.c4.8xlarge",
            ProductionVariantInstanceType::MlP2Xlarge => "ml.p2.xlarge",
            ProductionVariantInstanceType::MlP28xlarge => "ml.p2.8xlarge",
            ProductionVariantInstanceType::MlP216xlarge => "ml.p2.16xlarge",
            ProductionVariantInstanceType::MlP32xlarge => "ml.p3.2xlarge",
            ProductionVariantInstanceType::MlP38xlarge => "ml.p3.8xlarge",
            ProductionVariantInstanceType::MlP316xlarge => "ml.p3.16xlarge",
            ProductionVariantInstanceType::MlC5Large => "ml.c5.large",
            ProductionVariantInstanceType::MlC5Xlarge => "ml.c5.xlarge",
            ProductionVariantInstanceType::MlC52xlarge => "ml.c5.2xlarge",
            ProductionVariantInstanceType::MlC54xlarge => "ml.c5.4xlarge",
            ProductionVariantInstanceType::MlC59xlarge => "ml.c5.9xlarge",
            ProductionVariantInstanceType::MlC518xlarge => "ml.c5.18xlarge",
            ProductionVariantInstanceType::MlG4dnXlarge => "ml.g4dn.xlarge",
            ProductionVariantInstanceType::MlG4dn2xlarge => "ml.g4dn.2xlarge",
            ProductionVariantInstanceType::MlG4dn4xlarge => "ml.g4dn.4xlarge",
            ProductionVariantInstanceType::MlG4dn8xlarge => "ml.g4dn.8xlarge",
            ProductionVariantInstanceType::MlG4dn12xlarge => "ml.g4dn.12xlarge",
            ProductionVariantInstanceType::MlG4dn16xlarge => "ml.g4dn.16xlarge",
            ProductionVariantInstanceType::MlR5Large => "ml.r5.large",
            ProductionVariantInstanceType::MlR5Xlarge => "ml.r5.xlarge",
            ProductionVariantInstanceType::MlR52xlarge => "ml.r5.2xlarge",
            ProductionVariantInstanceType::MlR54xlarge => "ml.r5.4xlarge",
            ProductionVariantInstanceType::MlR512xlarge => "ml.r5.12xlarge",
            ProductionVariantInstanceType::MlR524xlarge => "ml.r5.24xlarge",
            ProductionVariantInstanceType::MlInf1Xlarge => "ml.inf1.xlarge",
            ProductionVariantInstanceType::MlInf12xlarge => "ml.inf1.2xlarge",
            ProductionVariantInstanceType::MlInf16xlarge => "ml.inf1.6xlarge",
            ProductionVariantInstanceType::MlInf124xlarge => "ml.inf1.24xlarge",
            ProductionVariantInstanceType::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for ProductionVariantInstanceType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for ProductionVariantInstanceType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for ProductionVariantInstanceType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum RecordWrapper {
    None,
    RecordIO,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for RecordWrapper {
    fn from(s: &str) -> Self {
        match s {
            "None" => RecordWrapper::None,
            "RecordIO" => RecordWrapper::RecordIO,
            other => RecordWrapper::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for RecordWrapper {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(RecordWrapper::from(s))
    }
}
impl RecordWrapper {
    pub fn as_str(&self) -> &str {
        match self {
            RecordWrapper::None => "None",
            RecordWrapper::RecordIO => "RecordIO",
            RecordWrapper::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for RecordWrapper {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for RecordWrapper {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for RecordWrapper {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum RootAccess {
    Enabled,
    Disabled,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for RootAccess {
    fn from(s: &str) -> Self {
        match s {
            "Enabled" => RootAccess::Enabled,
            "Disabled" => RootAccess::Disabled,
            other => RootAccess::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for RootAccess {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(RootAccess::from(s))
    }
}
impl RootAccess {
    pub fn as_str(&self) -> &str {
        match self {
            RootAccess::Enabled => "Enabled",
            RootAccess::Disabled => "Disabled",
            RootAccess::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for RootAccess {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for RootAccess {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for RootAccess {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum RuleEvaluationStatus {
    InProgress,
    NoIssuesFound,
    IssuesFound,
    Error,
    Stopping,
    Stopped,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for RuleEvaluationStatus {
    fn from(s: &str) -> Self {
        match s {
            "InProgress" => RuleEvaluationStatus::InProgress,
            "NoIssuesFound" => RuleEvaluationStatus::NoIssuesFound,
            "IssuesFound" => RuleEvaluationStatus::IssuesFound,
            "Error" => RuleEvaluationStatus::Error,
            "Stopping" => RuleEvaluationStatus::Stopping,
            "Stopped" => RuleEvaluationStatus::Stopped,
            other => RuleEvaluationStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for RuleEvaluationStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(RuleEvaluationStatus::from(s))
    }
}
impl RuleEvaluationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            RuleEvaluationStatus::InProgress => "InProgress",
            RuleEvaluationStatus::NoIssuesFound => "NoIssuesFound",
            RuleEvaluationStatus::IssuesFound => "IssuesFound",
            RuleEvaluationStatus::Error => "Error",
            RuleEvaluationStatus::Stopping => "Stopping",
            RuleEvaluationStatus::Stopped => "Stopped",
            RuleEvaluationStatus::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for RuleEvaluationStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for RuleEvaluationStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for RuleEvaluationStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum S3DataDistribution {
    FullyReplicated,
    ShardedByS3Key,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for S3DataDistribution {
    fn from(s: &str) -> Self {
        match s {
            "FullyReplicated" => S3DataDistribution::FullyReplicated,
            "ShardedByS3Key" => S3DataDistribution::ShardedByS3Key,
            other => S3DataDistribution::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for S3DataDistribution {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(S3DataDistribution::from(s))
    }
}
impl S3DataDistribution {
    pub fn as_str(&self) -> &str {
        match self {
            S3DataDistribution::FullyReplicated => "FullyReplicated",
            S3DataDistribution::ShardedByS3Key => "ShardedByS3Key",
            S3DataDistribution::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for S3DataDistribution {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for S3DataDistribution {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for S3DataDistribution {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum S3DataType {
    ManifestFile,
    S3Prefix,
    AugmentedManifestFile,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for S3DataType {
    fn from(s: &str) -> Self {
        match s {
            "ManifestFile" => S3DataType::ManifestFile,
            "S3Prefix" => S3DataType::S3Prefix,
            "AugmentedManifestFile" => S3DataType::AugmentedManifestFile,
            other => S3DataType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for S3DataType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(S3DataType::from(s))
    }
}
impl S3DataType {
    pub fn as_str(&self) -> &str {
        match self {
            S3DataType::ManifestFile => "ManifestFile",
            S3DataType::S3Prefix => "S3Prefix",
            S3DataType::AugmentedManifestFile => "AugmentedManifestFile",
            S3DataType::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for S3DataType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for S3DataType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for S3DataType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum SecondaryStatus {
    Starting,
    LaunchingMLInstances,
    PreparingTrainingStack,
    Downloading,
    DownloadingTrainingImage,
    Training,
    Uploading,
    Stopping,
    Stopped,
    MaxRuntimeExceeded,
    Completed,
    Failed,
    Interrupted,
    MaxWaitTimeExceeded,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for SecondaryStatus {
    fn from(s: &str) -> Self {
        match s {
            "Starting" => SecondaryStatus::Starting,
            "LaunchingMLInstances" => SecondaryStatus::LaunchingMLInstances,
            "PreparingTrainingStack" => SecondaryStatus::PreparingTrainingStack,
            "Downloading" => SecondaryStatus::Downloading,
            "DownloadingTrainingImage" => SecondaryStatus::DownloadingTrainingImage,
            "Training" => SecondaryStatus::Training,
            "Uploading" => SecondaryStatus::Uploading,
            "Stopping" => SecondaryStatus::Stopping,
            "Stopped" => SecondaryStatus::Stopped,
            "MaxRuntimeExceeded" => SecondaryStatus::MaxRuntimeExceeded,
            "Completed" => SecondaryStatus::Completed,
            "Failed" => SecondaryStatus::Failed,
            "Interrupted" => SecondaryStatus::Interrupted,
            "MaxWaitTimeExceeded" => SecondaryStatus::MaxWaitTimeExceeded,
            other => SecondaryStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for SecondaryStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(SecondaryStatus::from(s))
    }
}
impl SecondaryStatus {
    pub fn as_str(&self) -> &str {
        match self {
            SecondaryStatus::Starting => "Starting",
            SecondaryStatus::LaunchingMLInstances => "LaunchingMLInstances",
            SecondaryStatus::PreparingTrainingStack => "PreparingTrainingStack",
            SecondaryStatus::Downloading => "Downloading",
            SecondaryStatus::DownloadingTrainingImage => "DownloadingTrainingImage",
            SecondaryStatus::Training => "Training",
            SecondaryStatus::Uploading => "Uploading",
            SecondaryStatus::Stopping => "Stopping",
            SecondaryStatus::Stopped => "Stopped",
            SecondaryStatus::MaxRuntimeExceeded => "MaxRuntimeExceeded",
            SecondaryStatus::Completed => "Completed",
            SecondaryStatus::Failed => "Failed",
            SecondaryStatus::Interrupted => "Interrupted",
            SecondaryStatus::MaxWaitTimeExceeded => "MaxWaitTimeExceeded",
            SecondaryStatus::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for SecondaryStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for SecondaryStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for SecondaryStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum SortBy {
    Name,
    CreationTime,
    Status,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for SortBy {
    fn from(s: &str) -> Self {
        match s {
            "Name" => SortBy::Name,
            "CreationTime" => SortBy::CreationTime,
            "Status" => SortBy::Status,
            other => SortBy::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for SortBy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(SortBy::from(s))
    }
}
impl SortBy {
    pub fn as_str(&self) -> &str {
        match self {
            SortBy::Name => "Name",
            SortBy::CreationTime => "CreationTime",
            SortBy::Status => "Status",
            SortBy::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for SortBy {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for SortBy {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for SortBy {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum SortOrder {
    Ascending,
    Descending,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for SortOrder {
    fn from(s: &str) -> Self {
        match s {
            "Ascending" => SortOrder::Ascending,
            "Descending" => SortOrder::Descending,
            other => SortOrder::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for SortOrder {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(SortOrder::from(s))
    }
}
impl SortOrder {
    pub fn as_str(&self) -> &str {
        match self {
            SortOrder::Ascending => "Ascending",
            SortOrder::Descending => "Descending",
            SortOrder::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for SortOrder {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for SortOrder {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for SortOrder {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum SplitType {
    None,
    Line,
    RecordIO,
    TFRecord,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for SplitType {
    fn from(s: &str) -> Self {
        match s {
            "None" => SplitType::None,
            "Line" => SplitType::Line,
            "RecordIO" => SplitType::RecordIO,
            "TFRecord" => SplitType::TFRecord,
            other => SplitType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for SplitType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(SplitType::from(s))
    }
}
impl SplitType {
    pub fn as_str(&self) -> &str {
        match self {
            SplitType::None => "None",
            SplitType::Line => "Line",
            SplitType::RecordIO => "RecordIO",
            SplitType::TFRecord => "TFRecord",
            SplitType::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for SplitType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for SplitType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for SplitType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum TrainingInputMode {
    Pipe,
    File,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for TrainingInputMode {
    fn from(s: &str) -> Self {
        match s {
            "Pipe" => TrainingInputMode::Pipe,
            "File" => TrainingInputMode::File,
            other => TrainingInputMode::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for TrainingInputMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(TrainingInputMode::from(s))
    }
}
impl TrainingInputMode {
    pub fn as_str(&self) -> &str {
        match self {
            TrainingInputMode::Pipe => "Pipe",
            TrainingInputMode::File => "File",
            TrainingInputMode::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for TrainingInputMode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for TrainingInputMode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for TrainingInputMode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum TrainingInstanceType {
    MlM4Xlarge,
    MlM42xlarge,
    MlM44xlarge,
    MlM410xlarge,
    MlM416xlarge,
    MlG4dnXlarge,
    MlG4dn2xlarge,
    MlG4dn4xlarge,
    MlG4dn8xlarge,
    MlG4dn12xlarge,
    MlG4dn16xlarge,
    MlM5Large,
    MlM5Xlarge,
    MlM52xlarge,
    MlM54xlarge,
    MlM512xlarge,
    MlM524xlarge,
    MlC4Xlarge,
    MlC42xlarge,
    MlC44xlarge,
    MlC48xlarge,
    MlP2Xlarge,
    MlP28xlarge,
    MlP216xlarge,
    MlP32xlarge,
    MlP38xlarge,
    MlP316xlarge,
    MlP3dn24xlarge,
    MlC5Xlarge,
    MlC52xlarge,
    MlC54xlarge,
    MlC59xlarge,
    MlC518xlarge,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for TrainingInstanceType {
    fn from(s: &str) -> Self {
        match s {
            "ml.m4.xlarge" => TrainingInstanceType::MlM4Xlarge,
            "ml.m4.2xlarge" => TrainingInstanceType::MlM42xlarge,
            "ml.m4.4xlarge" => TrainingInstanceType::MlM44xlarge,
            "ml.m4.10xlarge" => TrainingInstanceType::MlM410xlarge,
            "ml.m4.16xlarge" => TrainingInstanceType::MlM416xlarge,
            "ml.g4dn.xlarge" => TrainingInstanceType::MlG4dnXlarge,
            "ml.g4dn.2xlarge" => TrainingInstanceType::MlG4dn2xlarge,
            "ml.g4dn.4xlarge" => TrainingInstanceType::MlG4dn4xlarge,
            "ml.g4dn.8xlarge" => TrainingInstanceType::MlG4dn8xlarge,
            "ml.g4dn.12xlarge" => TrainingInstanceType::MlG4dn12xlarge,
            "ml.g4dn.16xlarge" => TrainingInstanceType::MlG4dn16xlarge,
            "ml.m5.large" => TrainingInstanceType::MlM5Large,
            "ml.m5.xlarge" => TrainingInstanceType::MlM5Xlarge,
            "ml.m5.2xlarge" => TrainingInstanceType::MlM52xlarge,
            "ml.m5.4xlarge" => TrainingInstanceType::MlM54xlarge,
            "ml.m5.12xlarge" => TrainingInstanceType::MlM512xlarge,
            "ml.m5.24xlarge" => TrainingInstanceType::MlM524xlarge,
            "ml.c4.xlarge" => TrainingInstanceType::MlC4Xlarge,
            "ml.c4.2xlarge" => TrainingInstanceType::MlC42xlarge,
            "ml.c4.4xlarge" => TrainingInstanceType::MlC44xlarge,
            "ml.c4.8xlarge" => TrainingInstanceType::MlC48xlarge,
            "ml.p2.xlarge" => TrainingInstanceType::MlP2Xlarge,
            "ml.p2.8xlarge" => TrainingInstanceType::MlP28xlarge,
            "ml.p2.16xlarge" => TrainingInstanceType::MlP216xlarge,
            "ml.p3.2xlarge" => TrainingInstanceType::MlP32xlarge,
            "ml.p3.8xlarge" => TrainingInstanceType::MlP38xlarge,
            "ml.p3.16xlarge" => TrainingInstanceType::MlP316xlarge,
            "ml.p3dn.24xlarge" => TrainingInstanceType::MlP3dn24xlarge,
            "ml.c5.xlarge" => TrainingInstanceType::MlC5Xlarge,
            "ml.c5.2xlarge" => TrainingInstanceType::MlC52xlarge,
            "ml.c5.4xlarge" => TrainingInstanceType::MlC54xlarge,
            "ml.c5.9xlarge" => TrainingInstanceType::MlC59xlarge,
            "ml.c5.18xlarge" => TrainingInstanceType::MlC518xlarge,
            other => TrainingInstanceType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for TrainingInstanceType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(TrainingInstanceType::from(s))
    }
}
impl TrainingInstanceType {
    pub fn as_str(&self) -> &str {
        match self {
            TrainingInstanceType::MlM4Xlarge => "ml.m4.xlarge",
            TrainingInstanceType::MlM42xlarge => "ml.m4.2xlarge",
            TrainingInstanceType::MlM44xlarge => "ml.m4.4xlarge",
            TrainingInstanceType::MlM410xlarge => "ml.m4.10xlarge",
            TrainingInstanceType::MlM416xlarge => "ml.m4.16xlarge",
            TrainingInstanceType::MlG4dnXlarge => "ml.g4dn.xlarge",
            TrainingInstanceType::MlG4dn2xlarge => "ml.g4dn.2xlarge",
            TrainingInstanceType::MlG4dn4xlarge => "ml.g4dn.4xlarge",
            TrainingInstanceType::MlG4dn8xlarge => "ml.g4dn.8xlarge",
            TrainingInstanceType::MlG4dn12xlarge => "ml.g4dn.12xlarge",
            TrainingInstanceType::MlG4dn16xlarge => "ml.g4dn.16xlarge",
            TrainingInstanceType::MlM5Large => "ml.m5.large",
            TrainingInstanceType::MlM5Xlarge => "ml.m5.xlarge",
            TrainingInstanceType::MlM52xlarge => "ml.m5.2xlarge",
            TrainingInstanceType::MlM54xlarge => "ml.m5.4xlarge",
            TrainingInstanceType::MlM512xlarge => "ml.m5.12xlarge",
            TrainingInstanceType::MlM524xlarge => "ml.m5.24xlarge",
            TrainingInstanceType::MlC4Xlarge => "ml.c4.xlarge",
            TrainingInstanceType::MlC42xlarge => "ml.c4.2xlarge",
            TrainingInstanceType::MlC44xlarge => "ml.c4.4xlarge",
            TrainingInstanceType::MlC48xlarge => "ml.c4.8xlarge",
            TrainingInstanceType::MlP2Xlarge => "ml.p2.xlarge",
            TrainingInstanceType::MlP28xlarge => "ml.p2.8xlarge",
            TrainingInstanceType::MlP216xlarge => "ml.p2.16xlarge",
            TrainingInstanceType::MlP32xlarge => "ml.p3.2xlarge",
            TrainingInstanceType::MlP38xlarge => "ml.p3.8xlarge",
            TrainingInstanceType::MlP316xlarge => "ml.p3.16xlarge",
            TrainingInstanceType::MlP3dn24xlarge => "ml.p3dn.24xlarge",
            TrainingInstanceType::MlC5Xlarge => "ml.c5.xlarge",
            TrainingInstanceType::MlC52xlarge => "ml.c5.2xlarge",
            TrainingInstanceType::MlC54xlarge => "ml.c5.4xlarge",
            TrainingInstanceType::MlC59xlarge => "ml.c5.9xlarge",
            TrainingInstanceType::MlC518xlarge => "ml.c5.18xlarge",
            TrainingInstanceType::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for TrainingInstanceType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for TrainingInstanceType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for TrainingInstanceType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum TrainingJobEarlyStoppingType {
    Off,
    Auto,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for TrainingJobEarlyStoppingType {
    fn from(s: &str) -> Self {
        match s {
            "Off" => TrainingJobEarlyStoppingType::Off,
            "Auto" => TrainingJobEarlyStoppingType::Auto,
            other => TrainingJobEarlyStoppingType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for TrainingJobEarlyStoppingType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(TrainingJobEarlyStoppingType::from(s))
    }
}
impl TrainingJobEarlyStoppingType {
    pub fn as_str(&self) -> &str {
        match self {
            TrainingJobEarlyStoppingType::Off => "Off",
            TrainingJobEarlyStoppingType::Auto => "Auto",
            TrainingJobEarlyStoppingType::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for TrainingJobEarlyStoppingType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for TrainingJobEarlyStoppingType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for TrainingJobEarlyStoppingType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum TrainingJobSortByOptions {
    Name,
    CreationTime,
    Status,
    FinalObjectiveMetricValue,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for TrainingJobSortByOptions {
    fn from(s: &str) -> Self {
        match s {
            "Name" => TrainingJobSortByOptions::Name,
            "CreationTime" => TrainingJobSortByOptions::CreationTime,
            "Status" => TrainingJobSortByOptions::Status,
            "FinalObjectiveMetricValue" => TrainingJobSortByOptions::FinalObjectiveMetricValue,
            other => TrainingJobSortByOptions::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for TrainingJobSortByOptions {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(TrainingJobSortByOptions::from(s))
    }
}
impl TrainingJobSortByOptions {
    pub fn as_str(&self) -> &str {
        match self {
            TrainingJobSortByOptions::Name => "Name",
            TrainingJobSortByOptions::CreationTime => "CreationTime",
            TrainingJobSortByOptions::Status => "Status",
            TrainingJobSortByOptions::FinalObjectiveMetricValue => "FinalObjectiveMetricValue",
            TrainingJobSortByOptions::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for TrainingJobSortByOptions {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for TrainingJobSortByOptions {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for TrainingJobSortByOptions {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum TrainingJobStatus {
    InProgress,
    Completed,
    Failed,
    Stopping,
    Stopped,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for TrainingJobStatus {
    fn from(s: &str) -> Self {
        match s {
            "InProgress" => TrainingJobStatus::InProgress,
            "Completed" => TrainingJobStatus::Completed,
            "Failed" => TrainingJobStatus::Failed,
            "Stopping" => TrainingJobStatus::Stopping,
            "Stopped" => TrainingJobStatus::Stopped,
            other => TrainingJobStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for TrainingJobStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(TrainingJobStatus::from(s))
    }
}
impl TrainingJobStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TrainingJobStatus::InProgress => "InProgress",
            TrainingJobStatus::Completed => "Completed",
            TrainingJobStatus::Failed => "Failed",
            TrainingJobStatus::Stopping => "Stopping",
            TrainingJobStatus::Stopped => "Stopped",
            TrainingJobStatus::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for TrainingJobStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for TrainingJobStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for TrainingJobStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum TransformInstanceType {
    MlM4Xlarge,
    MlM42xlarge,
    MlM44xlarge,
    MlM410xlarge,
    MlM416xlarge,
    MlC4Xlarge,
    MlC42xlarge,
    MlC44xlarge,
    MlC48xlarge,
    MlP2Xlarge,
    MlP28xlarge,
    MlP216xlarge,
    MlP32xlarge,
    MlP38xlarge,
    MlP316xlarge,
    MlC5Xlarge,
    MlC52xlarge,
    MlC54xlarge,
    MlC59xlarge,
    MlC518xlarge,
    MlM5Large,
    MlM5Xlarge,
    MlM52xlarge,
    MlM54xlarge,
    MlM512xlarge,
    MlM524xlarge,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for TransformInstanceType {
    fn from(s: &str) -> Self {
        match s {
            "ml.m4.xlarge" => TransformInstanceType::MlM4Xlarge,
            "ml.m4.2xlarge" => TransformInstanceType::MlM42xlarge,
            "ml.m4.4xlarge" => TransformInstanceType::MlM44xlarge,
            "ml.m4.10xlarge" => TransformInstanceType::MlM410xlarge,
            "ml.m4.16xlarge" => TransformInstanceType::MlM416xlarge,
            "ml.c4.xlarge" => TransformInstanceType::MlC4Xlarge,
            "ml.c4.2xlarge" => TransformInstanceType::MlC42xlarge,
            "ml.c4.4xlarge" => TransformInstanceType::MlC44xlarge,
            "ml.c4.8xlarge" => TransformInstanceType::MlC48xlarge,
            "ml.p2.xlarge" => TransformInstanceType::MlP2Xlarge,
            "ml.p2.8xlarge" => TransformInstanceType::MlP28xlarge,
            "ml.p2.16xlarge" => TransformInstanceType::MlP216xlarge,
            "ml.p3.2xlarge" => TransformInstanceType::MlP32xlarge,
            "ml.p3.8xlarge" => TransformInstanceType::MlP38xlarge,
            "ml.p3.16xlarge" => TransformInstanceType::MlP316xlarge,
            "ml.c5.xlarge" => TransformInstanceType::MlC5Xlarge,
            "ml.c5.2xlarge" => TransformInstanceType::MlC52xlarge,
            "ml.c5.4xlarge" => TransformInstanceType::MlC54xlarge,
            "ml.c5.9xlarge" => TransformInstanceType::MlC59xlarge,
            "ml.c5.18xlarge" => TransformInstanceType::MlC518xlarge,
            "ml.m5.large" => TransformInstanceType::MlM5Large,
            "ml.m5.xlarge" => TransformInstanceType::MlM5Xlarge,
            "ml.m5.2xlarge" => TransformInstanceType::MlM52xlarge,
            "ml.m5.4xlarge" => TransformInstanceType::MlM54xlarge,
            "ml.m5.12xlarge" => TransformInstanceType::MlM512xlarge,
            "ml.m5.24xlarge" => TransformInstanceType::MlM524xlarge,
            other => TransformInstanceType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for TransformInstanceType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(TransformInstanceType::from(s))
    }
}
impl TransformInstanceType {
    pub fn as_str(&self) -> &str {
        match self {
            TransformInstanceType::MlM4Xlarge => "ml.m4.xlarge",
            TransformInstanceType::MlM42xlarge => "ml.m4.2xlarge",
            TransformInstanceType::MlM44xlarge => "ml.m4.4xlarge",
            TransformInstanceType::MlM410xlarge => "ml.m4.10xlarge",
            TransformInstanceType::MlM416xlarge => "ml.m4.16xlarge",
            TransformInstanceType::MlC4Xlarge => "ml.c4.xlarge",
            TransformInstanceType::MlC42xlarge => "ml.c4.2xlarge",
            TransformInstanceType::MlC44xlarge => "ml.c4.4xlarge",
            TransformInstanceType::MlC48xlarge => "ml.c4.8xlarge",
            TransformInstanceType::MlP2Xlarge => "ml.p2.xlarge",
            TransformInstanceType::MlP28xlarge => "ml.p2.8xlarge",
            TransformInstanceType::MlP216xlarge => "ml.p2.16xlarge",
            TransformInstanceType::MlP32xlarge => "ml.p3.2xlarge",
            TransformInstanceType::MlP38xlarge => "ml.p3.8xlarge",
            TransformInstanceType::MlP316xlarge => "ml.p3.16xlarge",
            TransformInstanceType::MlC5Xlarge => "ml.c5.xlarge",
            TransformInstanceType::MlC52xlarge => "ml.c5.2xlarge",
            TransformInstanceType::MlC54xlarge => "ml.c5.4xlarge",
            TransformInstanceType::MlC59xlarge => "ml.c5.9xlarge",
            TransformInstanceType::MlC518xlarge => "ml.c5.18xlarge",
            TransformInstanceType::MlM5Large => "ml.m5.large",
            TransformInstanceType::MlM5Xlarge => "ml.m5.xlarge",
            TransformInstanceType::MlM52xlarge => "ml.m5.2xlarge",
            TransformInstanceType::MlM54xlarge => "ml.m5.4xlarge",
            TransformInstanceType::MlM512xlarge => "ml.m5.12xlarge",
            TransformInstanceType::MlM524xlarge => "ml.m5.24xlarge",
            TransformInstanceType::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for TransformInstanceType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for TransformInstanceType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for TransformInstanceType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum TransformJobStatus {
    InProgress,
    Completed,
    Failed,
    Stopping,
    Stopped,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for TransformJobStatus {
    fn from(s: &str) -> Self {
        match s {
            "InProgress" => TransformJobStatus::InProgress,
            "Completed" => TransformJobStatus::Completed,
            "Failed" => TransformJobStatus::Failed,
            "Stopping" => TransformJobStatus::Stopping,
            "Stopped" => TransformJobStatus::Stopped,
            other => TransformJobStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for TransformJobStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(TransformJobStatus::from(s))
    }
}
impl TransformJobStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TransformJobStatus::InProgress => "InProgress",
            TransformJobStatus::Completed => "Completed",
            TransformJobStatus::Failed => "Failed",
            TransformJobStatus::Stopping => "Stopping",
            TransformJobStatus::Stopped => "Stopped",
            TransformJobStatus::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for TransformJobStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for TransformJobStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for TransformJobStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum VariantPropertyType {
    DesiredInstanceCount,
    DesiredWeight,
    DataCaptureConfig,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for VariantPropertyType {
    fn from(s: &str) -> Self {
        match s {
            "DesiredInstanceCount" => VariantPropertyType::DesiredInstanceCount,
            "DesiredWeight" => VariantPropertyType::DesiredWeight,
            "DataCaptureConfig" => VariantPropertyType::DataCaptureConfig,
            other => VariantPropertyType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for VariantPropertyType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(VariantPropertyType::from(s))
    }
}
impl VariantPropertyType {
    pub fn as_str(&self) -> &str {
        match self {
            VariantPropertyType::DesiredInstanceCount => "DesiredInstanceCount",
            VariantPropertyType::DesiredWeight => "DesiredWeight",
            VariantPropertyType::DataCaptureConfig => "DataCaptureConfig",
            VariantPropertyType::Unknown(s) => s.as_ref(),
        }
    }
}
impl AsRef<str> for VariantPropertyType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for VariantPropertyType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for VariantPropertyType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}
