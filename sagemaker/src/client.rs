/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[derive(std::fmt::Debug)]
pub(crate) struct Handle {
    client: aws_hyper::Client,
    conf: crate::Config,
}

/// Client for Amazon SageMaker Service
///
/// Each method returns a fluent builder for one operation. Finish with `send().await`.
#[derive(std::clone::Clone, std::fmt::Debug)]
pub struct Client {
    handle: std::sync::Arc<Handle>,
}

impl Client {
    /// A client configured from the environment, sending requests with `hyper` over TLS
    pub fn from_env() -> Self {
        Self::from_conf(crate::Config::from_env())
    }

    pub fn from_conf(conf: crate::Config) -> Self {
        Self::with_client(conf, aws_hyper::Client::https())
    }

    /// A client that sends requests through `conn`, eg. a [`TestConnection`](aws_hyper::test_connection::TestConnection)
    pub fn from_conf_conn(conf: crate::Config, conn: impl aws_hyper::conn::HttpService + 'static) -> Self {
        Self::with_client(conf, aws_hyper::Client::new(conn))
    }

    fn with_client(conf: crate::Config, client: aws_hyper::Client) -> Self {
        Self {
            handle: std::sync::Arc::new(Handle { client, conf }),
        }
    }

    pub fn conf(&self) -> &crate::Config {
        &self.handle.conf
    }

    pub fn add_tags(&self) -> fluent_builders::AddTags {
        fluent_builders::AddTags::new(self.handle.clone())
    }

    pub fn delete_tags(&self) -> fluent_builders::DeleteTags {
        fluent_builders::DeleteTags::new(self.handle.clone())
    }

    pub fn list_tags(&self) -> fluent_builders::ListTags {
        fluent_builders::ListTags::new(self.handle.clone())
    }

    pub fn create_notebook_instance(&self) -> fluent_builders::CreateNotebookInstance {
        fluent_builders::CreateNotebookInstance::new(self.handle.clone())
    }

    pub fn describe_notebook_instance(&self) -> fluent_builders::DescribeNotebookInstance {
        fluent_builders::DescribeNotebookInstance::new(self.handle.clone())
    }

    pub fn update_notebook_instance(&self) -> fluent_builders::UpdateNotebookInstance {
        fluent_builders::UpdateNotebookInstance::new(self.handle.clone())
    }

    pub fn delete_notebook_instance(&self) -> fluent_builders::DeleteNotebookInstance {
        fluent_builders::DeleteNotebookInstance::new(self.handle.clone())
    }

    pub fn start_notebook_instance(&self) -> fluent_builders::StartNotebookInstance {
        fluent_builders::StartNotebookInstance::new(self.handle.clone())
    }

    pub fn stop_notebook_instance(&self) -> fluent_builders::StopNotebookInstance {
        fluent_builders::StopNotebookInstance::new(self.handle.clone())
    }

    pub fn list_notebook_instances(&self) -> fluent_builders::ListNotebookInstances {
        fluent_builders::ListNotebookInstances::new(self.handle.clone())
    }

    pub fn create_presigned_notebook_instance_url(&self) -> fluent_builders::CreatePresignedNotebookInstanceUrl {
        fluent_builders::CreatePresignedNotebookInstanceUrl::new(self.handle.clone())
    }

    pub fn create_training_job(&self) -> fluent_builders::CreateTrainingJob {
        fluent_builders::CreateTrainingJob::new(self.handle.clone())
    }

    pub fn describe_training_job(&self) -> fluent_builders::DescribeTrainingJob {
        fluent_builders::DescribeTrainingJob::new(self.handle.clone())
    }

    pub fn list_training_jobs(&self) -> fluent_builders::ListTrainingJobs {
        fluent_builders::ListTrainingJobs::new(self.handle.clone())
    }

    pub fn stop_training_job(&self) -> fluent_builders::StopTrainingJob {
        fluent_builders::StopTrainingJob::new(self.handle.clone())
    }

    pub fn create_model(&self) -> fluent_builders::CreateModel {
        fluent_builders::CreateModel::new(self.handle.clone())
    }

    pub fn describe_model(&self) -> fluent_builders::DescribeModel {
        fluent_builders::DescribeModel::new(self.handle.clone())
    }

    pub fn delete_model(&self) -> fluent_builders::DeleteModel {
        fluent_builders::DeleteModel::new(self.handle.clone())
    }

    pub fn list_models(&self) -> fluent_builders::ListModels {
        fluent_builders::ListModels::new(self.handle.clone())
    }

    pub fn create_transform_job(&self) -> fluent_builders::CreateTransformJob {
        fluent_builders::CreateTransformJob::new(self.handle.clone())
    }

    pub fn describe_transform_job(&self) -> fluent_builders::DescribeTransformJob {
        fluent_builders::DescribeTransformJob::new(self.handle.clone())
    }

    pub fn list_transform_jobs(&self) -> fluent_builders::ListTransformJobs {
        fluent_builders::ListTransformJobs::new(self.handle.clone())
    }

    pub fn stop_transform_job(&self) -> fluent_builders::StopTransformJob {
        fluent_builders::StopTransformJob::new(self.handle.clone())
    }

    pub fn create_hyper_parameter_tuning_job(&self) -> fluent_builders::CreateHyperParameterTuningJob {
        fluent_builders::CreateHyperParameterTuningJob::new(self.handle.clone())
    }

    pub fn describe_hyper_parameter_tuning_job(&self) -> fluent_builders::DescribeHyperParameterTuningJob {
        fluent_builders::DescribeHyperParameterTuningJob::new(self.handle.clone())
    }

    pub fn list_hyper_parameter_tuning_jobs(&self) -> fluent_builders::ListHyperParameterTuningJobs {
        fluent_builders::ListHyperParameterTuningJobs::new(self.handle.clone())
    }

    pub fn stop_hyper_parameter_tuning_job(&self) -> fluent_builders::StopHyperParameterTuningJob {
        fluent_builders::StopHyperParameterTuningJob::new(self.handle.clone())
    }

    pub fn list_training_jobs_for_hyper_parameter_tuning_job(&self) -> fluent_builders::ListTrainingJobsForHyperParameterTuningJob {
        fluent_builders::ListTrainingJobsForHyperParameterTuningJob::new(self.handle.clone())
    }

    pub fn create_labeling_job(&self) -> fluent_builders::CreateLabelingJob {
        fluent_builders::CreateLabelingJob::new(self.handle.clone())
    }

    pub fn describe_labeling_job(&self) -> fluent_builders::DescribeLabelingJob {
        fluent_builders::DescribeLabelingJob::new(self.handle.clone())
    }

    pub fn list_labeling_jobs(&self) -> fluent_builders::ListLabelingJobs {
        fluent_builders::ListLabelingJobs::new(self.handle.clone())
    }

    pub fn stop_labeling_job(&self) -> fluent_builders::StopLabelingJob {
        fluent_builders::StopLabelingJob::new(self.handle.clone())
    }

    pub fn create_flow_definition(&self) -> fluent_builders::CreateFlowDefinition {
        fluent_builders::CreateFlowDefinition::new(self.handle.clone())
    }

    pub fn describe_flow_definition(&self) -> fluent_builders::DescribeFlowDefinition {
        fluent_builders::DescribeFlowDefinition::new(self.handle.clone())
    }

    pub fn list_flow_definitions(&self) -> fluent_builders::ListFlowDefinitions {
        fluent_builders::ListFlowDefinitions::new(self.handle.clone())
    }

    pub fn delete_flow_definition(&self) -> fluent_builders::DeleteFlowDefinition {
        fluent_builders::DeleteFlowDefinition::new(self.handle.clone())
    }

    pub fn create_endpoint_config(&self) -> fluent_builders::CreateEndpointConfig {
        fluent_builders::CreateEndpointConfig::new(self.handle.clone())
    }

    pub fn describe_endpoint_config(&self) -> fluent_builders::DescribeEndpointConfig {
        fluent_builders::DescribeEndpointConfig::new(self.handle.clone())
    }

    pub fn list_endpoint_configs(&self) -> fluent_builders::ListEndpointConfigs {
        fluent_builders::ListEndpointConfigs::new(self.handle.clone())
    }

    pub fn delete_endpoint_config(&self) -> fluent_builders::DeleteEndpointConfig {
        fluent_builders::DeleteEndpointConfig::new(self.handle.clone())
    }

    pub fn create_endpoint(&self) -> fluent_builders::CreateEndpoint {
        fluent_builders::CreateEndpoint::new(self.handle.clone())
    }

    pub fn describe_endpoint(&self) -> fluent_builders::DescribeEndpoint {
        fluent_builders::DescribeEndpoint::new(self.handle.clone())
    }

    pub fn list_endpoints(&self) -> fluent_builders::ListEndpoints {
        fluent_builders::ListEndpoints::new(self.handle.clone())
    }

    pub fn update_endpoint(&self) -> fluent_builders::UpdateEndpoint {
        fluent_builders::UpdateEndpoint::new(self.handle.clone())
    }

    pub fn delete_endpoint(&self) -> fluent_builders::DeleteEndpoint {
        fluent_builders::DeleteEndpoint::new(self.handle.clone())
    }
}

pub mod fluent_builders {
    /// Adds or overwrites tags on a SageMaker resource.
    #[derive(std::fmt::Debug)]
    pub struct AddTags {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::add_tags_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl AddTags {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::AddTagsOutput,
            smithy_http::result::SdkError<crate::error::AddTagsError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.resource_arn(input);
            self
        }
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_resource_arn(input);
            self
        }

        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            self.inner = self.inner.tags(input);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.inner = self.inner.set_tags(input);
            self
        }
    }
    /// Deletes the specified tags from a SageMaker resource.
    #[derive(std::fmt::Debug)]
    pub struct DeleteTags {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::delete_tags_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl DeleteTags {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteTagsOutput,
            smithy_http::result::SdkError<crate::error::DeleteTagsError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.resource_arn(input);
            self
        }
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_resource_arn(input);
            self
        }

        pub fn tag_keys(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.tag_keys(input);
            self
        }
        pub fn set_tag_keys(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.inner = self.inner.set_tag_keys(input);
            self
        }
    }
    /// Returns the tags for a SageMaker resource.
    #[derive(std::fmt::Debug)]
    pub struct ListTags {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_tags_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl ListTags {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListTagsOutput,
            smithy_http::result::SdkError<crate::error::ListTagsError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.resource_arn(input);
            self
        }
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_resource_arn(input);
            self
        }

        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }

        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }
    }
    /// Creates a notebook instance: an ML compute instance running the Jupyter Notebook App.
    #[derive(std::fmt::Debug)]
    pub struct CreateNotebookInstance {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::create_notebook_instance_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl CreateNotebookInstance {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateNotebookInstanceOutput,
            smithy_http::result::SdkError<crate::error::CreateNotebookInstanceError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn notebook_instance_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.notebook_instance_name(input);
            self
        }
        pub fn set_notebook_instance_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_notebook_instance_name(input);
            self
        }

        pub fn instance_type(mut self, input: crate::model::InstanceType) -> Self {
            self.inner = self.inner.instance_type(input);
            self
        }
        pub fn set_instance_type(mut self, input: std::option::Option<crate::model::InstanceType>) -> Self {
            self.inner = self.inner.set_instance_type(input);
            self
        }

        pub fn subnet_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.subnet_id(input);
            self
        }
        pub fn set_subnet_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_subnet_id(input);
            self
        }

        pub fn security_group_ids(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.security_group_ids(input);
            self
        }
        pub fn set_security_group_ids(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.inner = self.inner.set_security_group_ids(input);
            self
        }

        pub fn role_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.role_arn(input);
            self
        }
        pub fn set_role_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_role_arn(input);
            self
        }

        pub fn kms_key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.kms_key_id(input);
            self
        }
        pub fn set_kms_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_kms_key_id(input);
            self
        }

        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            self.inner = self.inner.tags(input);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.inner = self.inner.set_tags(input);
            self
        }

        pub fn lifecycle_config_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.lifecycle_config_name(input);
            self
        }
        pub fn set_lifecycle_config_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_lifecycle_config_name(input);
            self
        }

        pub fn direct_internet_access(mut self, input: crate::model::DirectInternetAccess) -> Self {
            self.inner = self.inner.direct_internet_access(input);
            self
        }
        pub fn set_direct_internet_access(mut self, input: std::option::Option<crate::model::DirectInternetAccess>) -> Self {
            self.inner = self.inner.set_direct_internet_access(input);
            self
        }

        pub fn volume_size_in_gb(mut self, input: i32) -> Self {
            self.inner = self.inner.volume_size_in_gb(input);
            self
        }
        pub fn set_volume_size_in_gb(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_volume_size_in_gb(input);
            self
        }

        pub fn accelerator_types(mut self, input: impl Into<crate::model::NotebookInstanceAcceleratorType>) -> Self {
            self.inner = self.inner.accelerator_types(input);
            self
        }
        pub fn set_accelerator_types(mut self, input: std::option::Option<std::vec::Vec<crate::model::NotebookInstanceAcceleratorType>>) -> Self {
            self.inner = self.inner.set_accelerator_types(input);
            self
        }

        pub fn default_code_repository(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.default_code_repository(input);
            self
        }
        pub fn set_default_code_repository(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_default_code_repository(input);
            self
        }

        pub fn additional_code_repositories(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.additional_code_repositories(input);
            self
        }
        pub fn set_additional_code_repositories(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.inner = self.inner.set_additional_code_repositories(input);
            self
        }

        pub fn root_access(mut self, input: crate::model::RootAccess) -> Self {
            self.inner = self.inner.root_access(input);
            self
        }
        pub fn set_root_access(mut self, input: std::option::Option<crate::model::RootAccess>) -> Self {
            self.inner = self.inner.set_root_access(input);
            self
        }
    }
    /// Returns information about a notebook instance.
    #[derive(std::fmt::Debug)]
    pub struct DescribeNotebookInstance {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_notebook_instance_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl DescribeNotebookInstance {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeNotebookInstanceOutput,
            smithy_http::result::SdkError<crate::error::DescribeNotebookInstanceError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn notebook_instance_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.notebook_instance_name(input);
            self
        }
        pub fn set_notebook_instance_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_notebook_instance_name(input);
            self
        }
    }
    /// Updates a notebook instance. The instance must be stopped.
    #[derive(std::fmt::Debug)]
    pub struct UpdateNotebookInstance {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::update_notebook_instance_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl UpdateNotebookInstance {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::UpdateNotebookInstanceOutput,
            smithy_http::result::SdkError<crate::error::UpdateNotebookInstanceError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn notebook_instance_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.notebook_instance_name(input);
            self
        }
        pub fn set_notebook_instance_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_notebook_instance_name(input);
            self
        }

        pub fn instance_type(mut self, input: crate::model::InstanceType) -> Self {
            self.inner = self.inner.instance_type(input);
            self
        }
        pub fn set_instance_type(mut self, input: std::option::Option<crate::model::InstanceType>) -> Self {
            self.inner = self.inner.set_instance_type(input);
            self
        }

        pub fn role_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.role_arn(input);
            self
        }
        pub fn set_role_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_role_arn(input);
            self
        }

        pub fn lifecycle_config_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.lifecycle_config_name(input);
            self
        }
        pub fn set_lifecycle_config_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_lifecycle_config_name(input);
            self
        }

        pub fn disassociate_lifecycle_config(mut self, input: bool) -> Self {
            self.inner = self.inner.disassociate_lifecycle_config(input);
            self
        }
        pub fn set_disassociate_lifecycle_config(mut self, input: std::option::Option<bool>) -> Self {
            self.inner = self.inner.set_disassociate_lifecycle_config(input);
            self
        }

        pub fn volume_size_in_gb(mut self, input: i32) -> Self {
            self.inner = self.inner.volume_size_in_gb(input);
            self
        }
        pub fn set_volume_size_in_gb(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_volume_size_in_gb(input);
            self
        }

        pub fn default_code_repository(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.default_code_repository(input);
            self
        }
        pub fn set_default_code_repository(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_default_code_repository(input);
            self
        }

        pub fn additional_code_repositories(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.additional_code_repositories(input);
            self
        }
        pub fn set_additional_code_repositories(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.inner = self.inner.set_additional_code_repositories(input);
            self
        }

        pub fn accelerator_types(mut self, input: impl Into<crate::model::NotebookInstanceAcceleratorType>) -> Self {
            self.inner = self.inner.accelerator_types(input);
            self
        }
        pub fn set_accelerator_types(mut self, input: std::option::Option<std::vec::Vec<crate::model::NotebookInstanceAcceleratorType>>) -> Self {
            self.inner = self.inner.set_accelerator_types(input);
            self
        }

        pub fn disassociate_accelerator_types(mut self, input: bool) -> Self {
            self.inner = self.inner.disassociate_accelerator_types(input);
            self
        }
        pub fn set_disassociate_accelerator_types(mut self, input: std::option::Option<bool>) -> Self {
            self.inner = self.inner.set_disassociate_accelerator_types(input);
            self
        }

        pub fn disassociate_default_code_repository(mut self, input: bool) -> Self {
            self.inner = self.inner.disassociate_default_code_repository(input);
            self
        }
        pub fn set_disassociate_default_code_repository(mut self, input: std::option::Option<bool>) -> Self {
            self.inner = self.inner.set_disassociate_default_code_repository(input);
            self
        }

        pub fn disassociate_additional_code_repositories(mut self, input: bool) -> Self {
            self.inner = self.inner.disassociate_additional_code_repositories(input);
            self
        }
        pub fn set_disassociate_additional_code_repositories(mut self, input: std::option::Option<bool>) -> Self {
            self.inner = self.inner.set_disassociate_additional_code_repositories(input);
            self
        }

        pub fn root_access(mut self, input: crate::model::RootAccess) -> Self {
            self.inner = self.inner.root_access(input);
            self
        }
        pub fn set_root_access(mut self, input: std::option::Option<crate::model::RootAccess>) -> Self {
            self.inner = self.inner.set_root_access(input);
            self
        }
    }
    /// Deletes a stopped notebook instance.
    #[derive(std::fmt::Debug)]
    pub struct DeleteNotebookInstance {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::delete_notebook_instance_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl DeleteNotebookInstance {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteNotebookInstanceOutput,
            smithy_http::result::SdkError<crate::error::DeleteNotebookInstanceError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn notebook_instance_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.notebook_instance_name(input);
            self
        }
        pub fn set_notebook_instance_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_notebook_instance_name(input);
            self
        }
    }
    /// Launches an ML compute instance for a stopped notebook instance.
    #[derive(std::fmt::Debug)]
    pub struct StartNotebookInstance {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::start_notebook_instance_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl StartNotebookInstance {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::StartNotebookInstanceOutput,
            smithy_http::result::SdkError<crate::error::StartNotebookInstanceError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn notebook_instance_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.notebook_instance_name(input);
            self
        }
        pub fn set_notebook_instance_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_notebook_instance_name(input);
            self
        }
    }
    /// Terminates the ML compute instance of a notebook instance.
    #[derive(std::fmt::Debug)]
    pub struct StopNotebookInstance {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::stop_notebook_instance_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl StopNotebookInstance {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::StopNotebookInstanceOutput,
            smithy_http::result::SdkError<crate::error::StopNotebookInstanceError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn notebook_instance_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.notebook_instance_name(input);
            self
        }
        pub fn set_notebook_instance_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_notebook_instance_name(input);
            self
        }
    }
    /// Returns a page of notebook instance summaries.
    #[derive(std::fmt::Debug)]
    pub struct ListNotebookInstances {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_notebook_instances_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl ListNotebookInstances {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListNotebookInstancesOutput,
            smithy_http::result::SdkError<crate::error::ListNotebookInstancesError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }

        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }

        pub fn sort_by(mut self, input: crate::model::NotebookInstanceSortKey) -> Self {
            self.inner = self.inner.sort_by(input);
            self
        }
        pub fn set_sort_by(mut self, input: std::option::Option<crate::model::NotebookInstanceSortKey>) -> Self {
            self.inner = self.inner.set_sort_by(input);
            self
        }

        pub fn sort_order(mut self, input: crate::model::NotebookInstanceSortOrder) -> Self {
            self.inner = self.inner.sort_order(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::NotebookInstanceSortOrder>) -> Self {
            self.inner = self.inner.set_sort_order(input);
            self
        }

        pub fn name_contains(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.name_contains(input);
            self
        }
        pub fn set_name_contains(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_name_contains(input);
            self
        }

        pub fn creation_time_before(mut self, input: smithy_types::Instant) -> Self {
            self.inner = self.inner.creation_time_before(input);
            self
        }
        pub fn set_creation_time_before(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_creation_time_before(input);
            self
        }

        pub fn creation_time_after(mut self, input: smithy_types::Instant) -> Self {
            self.inner = self.inner.creation_time_after(input);
            self
        }
        pub fn set_creation_time_after(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_creation_time_after(input);
            self
        }

        pub fn last_modified_time_before(mut self, input: smithy_types::Instant) -> Self {
            self.inner = self.inner.last_modified_time_before(input);
            self
        }
        pub fn set_last_modified_time_before(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_last_modified_time_before(input);
            self
        }

        pub fn last_modified_time_after(mut self, input: smithy_types::Instant) -> Self {
            self.inner = self.inner.last_modified_time_after(input);
            self
        }
        pub fn set_last_modified_time_after(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_last_modified_time_after(input);
            self
        }

        pub fn status_equals(mut self, input: crate::model::NotebookInstanceStatus) -> Self {
            self.inner = self.inner.status_equals(input);
            self
        }
        pub fn set_status_equals(mut self, input: std::option::Option<crate::model::NotebookInstanceStatus>) -> Self {
            self.inner = self.inner.set_status_equals(input);
            self
        }

        pub fn notebook_instance_lifecycle_config_name_contains(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.notebook_instance_lifecycle_config_name_contains(input);
            self
        }
        pub fn set_notebook_instance_lifecycle_config_name_contains(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_notebook_instance_lifecycle_config_name_contains(input);
            self
        }

        pub fn default_code_repository_contains(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.default_code_repository_contains(input);
            self
        }
        pub fn set_default_code_repository_contains(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_default_code_repository_contains(input);
            self
        }

        pub fn additional_code_repository_equals(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.additional_code_repository_equals(input);
            self
        }
        pub fn set_additional_code_repository_equals(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_additional_code_repository_equals(input);
            self
        }
    }
    /// Returns a URL that connects to the Jupyter server of a notebook instance.
    #[derive(std::fmt::Debug)]
    pub struct CreatePresignedNotebookInstanceUrl {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::create_presigned_notebook_instance_url_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl CreatePresignedNotebookInstanceUrl {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreatePresignedNotebookInstanceUrlOutput,
            smithy_http::result::SdkError<crate::error::CreatePresignedNotebookInstanceUrlError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn notebook_instance_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.notebook_instance_name(input);
            self
        }
        pub fn set_notebook_instance_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_notebook_instance_name(input);
            self
        }

        pub fn session_expiration_duration_in_seconds(mut self, input: i32) -> Self {
            self.inner = self.inner.session_expiration_duration_in_seconds(input);
            self
        }
        pub fn set_session_expiration_duration_in_seconds(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_session_expiration_duration_in_seconds(input);
            self
        }
    }
    /// Starts a model training job.
    #[derive(std::fmt::Debug)]
    pub struct CreateTrainingJob {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::create_training_job_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl CreateTrainingJob {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateTrainingJobOutput,
            smithy_http::result::SdkError<crate::error::CreateTrainingJobError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn training_job_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.training_job_name(input);
            self
        }
        pub fn set_training_job_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_training_job_name(input);
            self
        }

        pub fn hyper_parameters(mut self, k: impl Into<std::string::String>, v: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.hyper_parameters(k, v);
            self
        }
        pub fn set_hyper_parameters(mut self, input: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>) -> Self {
            self.inner = self.inner.set_hyper_parameters(input);
            self
        }

        pub fn algorithm_specification(mut self, input: crate::model::AlgorithmSpecification) -> Self {
            self.inner = self.inner.algorithm_specification(input);
            self
        }
        pub fn set_algorithm_specification(mut self, input: std::option::Option<crate::model::AlgorithmSpecification>) -> Self {
            self.inner = self.inner.set_algorithm_specification(input);
            self
        }

        pub fn role_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.role_arn(input);
            self
        }
        pub fn set_role_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_role_arn(input);
            self
        }

        pub fn input_data_config(mut self, input: impl Into<crate::model::Channel>) -> Self {
            self.inner = self.inner.input_data_config(input);
            self
        }
        pub fn set_input_data_config(mut self, input: std::option::Option<std::vec::Vec<crate::model::Channel>>) -> Self {
            self.inner = self.inner.set_input_data_config(input);
            self
        }

        pub fn output_data_config(mut self, input: crate::model::OutputDataConfig) -> Self {
            self.inner = self.inner.output_data_config(input);
            self
        }
        pub fn set_output_data_config(mut self, input: std::option::Option<crate::model::OutputDataConfig>) -> Self {
            self.inner = self.inner.set_output_data_config(input);
            self
        }

        pub fn resource_config(mut self, input: crate::model::ResourceConfig) -> Self {
            self.inner = self.inner.resource_config(input);
            self
        }
        pub fn set_resource_config(mut self, input: std::option::Option<crate::model::ResourceConfig>) -> Self {
            self.inner = self.inner.set_resource_config(input);
            self
        }

        pub fn vpc_config(mut self, input: crate::model::VpcConfig) -> Self {
            self.inner = self.inner.vpc_config(input);
            self
        }
        pub fn set_vpc_config(mut self, input: std::option::Option<crate::model::VpcConfig>) -> Self {
            self.inner = self.inner.set_vpc_config(input);
            self
        }

        pub fn stopping_condition(mut self, input: crate::model::StoppingCondition) -> Self {
            self.inner = self.inner.stopping_condition(input);
            self
        }
        pub fn set_stopping_condition(mut self, input: std::option::Option<crate::model::StoppingCondition>) -> Self {
            self.inner = self.inner.set_stopping_condition(input);
            self
        }

        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            self.inner = self.inner.tags(input);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.inner = self.inner.set_tags(input);
            self
        }

        pub fn enable_network_isolation(mut self, input: bool) -> Self {
            self.inner = self.inner.enable_network_isolation(input);
            self
        }
        pub fn set_enable_network_isolation(mut self, input: std::option::Option<bool>) -> Self {
            self.inner = self.inner.set_enable_network_isolation(input);
            self
        }

        pub fn enable_inter_container_traffic_encryption(mut self, input: bool) -> Self {
            self.inner = self.inner.enable_inter_container_traffic_encryption(input);
            self
        }
        pub fn set_enable_inter_container_traffic_encryption(mut self, input: std::option::Option<bool>) -> Self {
            self.inner = self.inner.set_enable_inter_container_traffic_encryption(input);
            self
        }

        pub fn enable_managed_spot_training(mut self, input: bool) -> Self {
            self.inner = self.inner.enable_managed_spot_training(input);
            self
        }
        pub fn set_enable_managed_spot_training(mut self, input: std::option::Option<bool>) -> Self {
            self.inner = self.inner.set_enable_managed_spot_training(input);
            self
        }

        pub fn checkpoint_config(mut self, input: crate::model::CheckpointConfig) -> Self {
            self.inner = self.inner.checkpoint_config(input);
            self
        }
        pub fn set_checkpoint_config(mut self, input: std::option::Option<crate::model::CheckpointConfig>) -> Self {
            self.inner = self.inner.set_checkpoint_config(input);
            self
        }

        pub fn debug_hook_config(mut self, input: crate::model::DebugHookConfig) -> Self {
            self.inner = self.inner.debug_hook_config(input);
            self
        }
        pub fn set_debug_hook_config(mut self, input: std::option::Option<crate::model::DebugHookConfig>) -> Self {
            self.inner = self.inner.set_debug_hook_config(input);
            self
        }

        pub fn debug_rule_configurations(mut self, input: impl Into<crate::model::DebugRuleConfiguration>) -> Self {
            self.inner = self.inner.debug_rule_configurations(input);
            self
        }
        pub fn set_debug_rule_configurations(mut self, input: std::option::Option<std::vec::Vec<crate::model::DebugRuleConfiguration>>) -> Self {
            self.inner = self.inner.set_debug_rule_configurations(input);
            self
        }

        pub fn tensor_board_output_config(mut self, input: crate::model::TensorBoardOutputConfig) -> Self {
            self.inner = self.inner.tensor_board_output_config(input);
            self
        }
        pub fn set_tensor_board_output_config(mut self, input: std::option::Option<crate::model::TensorBoardOutputConfig>) -> Self {
            self.inner = self.inner.set_tensor_board_output_config(input);
            self
        }

        pub fn experiment_config(mut self, input: crate::model::ExperimentConfig) -> Self {
            self.inner = self.inner.experiment_config(input);
            self
        }
        pub fn set_experiment_config(mut self, input: std::option::Option<crate::model::ExperimentConfig>) -> Self {
            self.inner = self.inner.set_experiment_config(input);
            self
        }
    }
    /// Returns information about a training job.
    #[derive(std::fmt::Debug)]
    pub struct DescribeTrainingJob {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_training_job_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl DescribeTrainingJob {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeTrainingJobOutput,
            smithy_http::result::SdkError<crate::error::DescribeTrainingJobError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn training_job_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.training_job_name(input);
            self
        }
        pub fn set_training_job_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_training_job_name(input);
            self
        }
    }
    /// Returns a page of training job summaries.
    #[derive(std::fmt::Debug)]
    pub struct ListTrainingJobs {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_training_jobs_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl ListTrainingJobs {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListTrainingJobsOutput,
            smithy_http::result::SdkError<crate::error::ListTrainingJobsError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }

        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }

        pub fn creation_time_after(mut self, input: smithy_types::Instant) -> Self {
            self.inner = self.inner.creation_time_after(input);
            self
        }
        pub fn set_creation_time_after(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_creation_time_after(input);
            self
        }

        pub fn creation_time_before(mut self, input: smithy_types::Instant) -> Self {
            self.inner = self.inner.creation_time_before(input);
            self
        }
        pub fn set_creation_time_before(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_creation_time_before(input);
            self
        }

        pub fn last_modified_time_after(mut self, input: smithy_types::Instant) -> Self {
            self.inner = self.inner.last_modified_time_after(input);
            self
        }
        pub fn set_last_modified_time_after(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_last_modified_time_after(input);
            self
        }

        pub fn last_modified_time_before(mut self, input: smithy_types::Instant) -> Self {
            self.inner = self.inner.last_modified_time_before(input);
            self
        }
        pub fn set_last_modified_time_before(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_last_modified_time_before(input);
            self
        }

        pub fn name_contains(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.name_contains(input);
            self
        }
        pub fn set_name_contains(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_name_contains(input);
            self
        }

        pub fn status_equals(mut self, input: crate::model::TrainingJobStatus) -> Self {
            self.inner = self.inner.status_equals(input);
            self
        }
        pub fn set_status_equals(mut self, input: std::option::Option<crate::model::TrainingJobStatus>) -> Self {
            self.inner = self.inner.set_status_equals(input);
            self
        }

        pub fn sort_by(mut self, input: crate::model::SortBy) -> Self {
            self.inner = self.inner.sort_by(input);
            self
        }
        pub fn set_sort_by(mut self, input: std::option::Option<crate::model::SortBy>) -> Self {
            self.inner = self.inner.set_sort_by(input);
            self
        }

        pub fn sort_order(mut self, input: crate::model::SortOrder) -> Self {
            self.inner = self.inner.sort_order(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::SortOrder>) -> Self {
            self.inner = self.inner.set_sort_order(input);
            self
        }
    }
    /// Stops a training job. The algorithm receives `SIGTERM` and may save its state.
    #[derive(std::fmt::Debug)]
    pub struct StopTrainingJob {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::stop_training_job_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl StopTrainingJob {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::StopTrainingJobOutput,
            smithy_http::result::SdkError<crate::error::StopTrainingJobError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn training_job_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.training_job_name(input);
            self
        }
        pub fn set_training_job_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_training_job_name(input);
            self
        }
    }
    /// Creates a model from one or more inference containers.
    #[derive(std::fmt::Debug)]
    pub struct CreateModel {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::create_model_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl CreateModel {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateModelOutput,
            smithy_http::result::SdkError<crate::error::CreateModelError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn model_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.model_name(input);
            self
        }
        pub fn set_model_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_model_name(input);
            self
        }

        pub fn primary_container(mut self, input: crate::model::ContainerDefinition) -> Self {
            self.inner = self.inner.primary_container(input);
            self
        }
        pub fn set_primary_container(mut self, input: std::option::Option<crate::model::ContainerDefinition>) -> Self {
            self.inner = self.inner.set_primary_container(input);
            self
        }

        pub fn containers(mut self, input: impl Into<crate::model::ContainerDefinition>) -> Self {
            self.inner = self.inner.containers(input);
            self
        }
        pub fn set_containers(mut self, input: std::option::Option<std::vec::Vec<crate::model::ContainerDefinition>>) -> Self {
            self.inner = self.inner.set_containers(input);
            self
        }

        pub fn execution_role_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.execution_role_arn(input);
            self
        }
        pub fn set_execution_role_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_execution_role_arn(input);
            self
        }

        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            self.inner = self.inner.tags(input);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.inner = self.inner.set_tags(input);
            self
        }

        pub fn vpc_config(mut self, input: crate::model::VpcConfig) -> Self {
            self.inner = self.inner.vpc_config(input);
            self
        }
        pub fn set_vpc_config(mut self, input: std::option::Option<crate::model::VpcConfig>) -> Self {
            self.inner = self.inner.set_vpc_config(input);
            self
        }

        pub fn enable_network_isolation(mut self, input: bool) -> Self {
            self.inner = self.inner.enable_network_isolation(input);
            self
        }
        pub fn set_enable_network_isolation(mut self, input: std::option::Option<bool>) -> Self {
            self.inner = self.inner.set_enable_network_isolation(input);
            self
        }
    }
    /// Describes a model created with `CreateModel`.
    #[derive(std::fmt::Debug)]
    pub struct DescribeModel {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_model_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl DescribeModel {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeModelOutput,
            smithy_http::result::SdkError<crate::error::DescribeModelError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn model_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.model_name(input);
            self
        }
        pub fn set_model_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_model_name(input);
            self
        }
    }
    /// Deletes a model. Artifacts in S3 and the inference image are not deleted.
    #[derive(std::fmt::Debug)]
    pub struct DeleteModel {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::delete_model_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl DeleteModel {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteModelOutput,
            smithy_http::result::SdkError<crate::error::DeleteModelError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn model_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.model_name(input);
            self
        }
        pub fn set_model_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_model_name(input);
            self
        }
    }
    /// Returns a page of model summaries.
    #[derive(std::fmt::Debug)]
    pub struct ListModels {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_models_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl ListModels {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListModelsOutput,
            smithy_http::result::SdkError<crate::error::ListModelsError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn sort_by(mut self, input: crate::model::ModelSortKey) -> Self {
            self.inner = self.inner.sort_by(input);
            self
        }
        pub fn set_sort_by(mut self, input: std::option::Option<crate::model::ModelSortKey>) -> Self {
            self.inner = self.inner.set_sort_by(input);
            self
        }

        pub fn sort_order(mut self, input: crate::model::OrderKey) -> Self {
            self.inner = self.inner.sort_order(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::OrderKey>) -> Self {
            self.inner = self.inner.set_sort_order(input);
            self
        }

        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }

        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }

        pub fn name_contains(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.name_contains(input);
            self
        }
        pub fn set_name_contains(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_name_contains(input);
            self
        }

        pub fn creation_time_before(mut self, input: smithy_types::Instant) -> Self {
            self.inner = self.inner.creation_time_before(input);
            self
        }
        pub fn set_creation_time_before(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_creation_time_before(input);
            self
        }

        pub fn creation_time_after(mut self, input: smithy_types::Instant) -> Self {
            self.inner = self.inner.creation_time_after(input);
            self
        }
        pub fn set_creation_time_after(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_creation_time_after(input);
            self
        }
    }
    /// Starts a batch transform job that runs a model over a dataset in S3.
    #[derive(std::fmt::Debug)]
    pub struct CreateTransformJob {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::create_transform_job_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl CreateTransformJob {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateTransformJobOutput,
            smithy_http::result::SdkError<crate::error::CreateTransformJobError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn transform_job_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.transform_job_name(input);
            self
        }
        pub fn set_transform_job_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_transform_job_name(input);
            self
        }

        pub fn model_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.model_name(input);
            self
        }
        pub fn set_model_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_model_name(input);
            self
        }

        pub fn max_concurrent_transforms(mut self, input: i32) -> Self {
            self.inner = self.inner.max_concurrent_transforms(input);
            self
        }
        pub fn set_max_concurrent_transforms(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_concurrent_transforms(input);
            self
        }

        pub fn max_payload_in_mb(mut self, input: i32) -> Self {
            self.inner = self.inner.max_payload_in_mb(input);
            self
        }
        pub fn set_max_payload_in_mb(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_payload_in_mb(input);
            self
        }

        pub fn batch_strategy(mut self, input: crate::model::BatchStrategy) -> Self {
            self.inner = self.inner.batch_strategy(input);
            self
        }
        pub fn set_batch_strategy(mut self, input: std::option::Option<crate::model::BatchStrategy>) -> Self {
            self.inner = self.inner.set_batch_strategy(input);
            self
        }

        pub fn environment(mut self, k: impl Into<std::string::String>, v: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.environment(k, v);
            self
        }
        pub fn set_environment(mut self, input: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>) -> Self {
            self.inner = self.inner.set_environment(input);
            self
        }

        pub fn transform_input(mut self, input: crate::model::TransformInput) -> Self {
            self.inner = self.inner.transform_input(input);
            self
        }
        pub fn set_transform_input(mut self, input: std::option::Option<crate::model::TransformInput>) -> Self {
            self.inner = self.inner.set_transform_input(input);
            self
        }

        pub fn transform_output(mut self, input: crate::model::TransformOutput) -> Self {
            self.inner = self.inner.transform_output(input);
            self
        }
        pub fn set_transform_output(mut self, input: std::option::Option<crate::model::TransformOutput>) -> Self {
            self.inner = self.inner.set_transform_output(input);
            self
        }

        pub fn transform_resources(mut self, input: crate::model::TransformResources) -> Self {
            self.inner = self.inner.transform_resources(input);
            self
        }
        pub fn set_transform_resources(mut self, input: std::option::Option<crate::model::TransformResources>) -> Self {
            self.inner = self.inner.set_transform_resources(input);
            self
        }

        pub fn data_processing(mut self, input: crate::model::DataProcessing) -> Self {
            self.inner = self.inner.data_processing(input);
            self
        }
        pub fn set_data_processing(mut self, input: std::option::Option<crate::model::DataProcessing>) -> Self {
            self.inner = self.inner.set_data_processing(input);
            self
        }

        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            self.inner = self.inner.tags(input);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.inner = self.inner.set_tags(input);
            self
        }

        pub fn experiment_config(mut self, input: crate::model::ExperimentConfig) -> Self {
            self.inner = self.inner.experiment_config(input);
            self
        }
        pub fn set_experiment_config(mut self, input: std::option::Option<crate::model::ExperimentConfig>) -> Self {
            self.inner = self.inner.set_experiment_config(input);
            self
        }
    }
    /// Returns information about a transform job.
    #[derive(std::fmt::Debug)]
    pub struct DescribeTransformJob {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_transform_job_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl DescribeTransformJob {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeTransformJobOutput,
            smithy_http::result::SdkError<crate::error::DescribeTransformJobError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn transform_job_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.transform_job_name(input);
            self
        }
        pub fn set_transform_job_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_transform_job_name(input);
            self
        }
    }
    /// Returns a page of transform job summaries.
    #[derive(std::fmt::Debug)]
    pub struct ListTransformJobs {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_transform_jobs_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl ListTransformJobs {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListTransformJobsOutput,
            smithy_http::result::SdkError<crate::error::ListTransformJobsError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn creation_time_after(mut self, input: smithy_types::Instant) -> Self {
            self.inner = self.inner.creation_time_after(input);
            self
        }
        pub fn set_creation_time_after(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_creation_time_after(input);
            self
        }

        pub fn creation_time_before(mut self, input: smithy_types::Instant) -> Self {
            self.inner = self.inner.creation_time_before(input);
            self
        }
        pub fn set_creation_time_before(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_creation_time_before(input);
            self
        }

        pub fn last_modified_time_after(mut self, input: smithy_types::Instant) -> Self {
            self.inner = self.inner.last_modified_time_after(input);
            self
        }
        pub fn set_last_modified_time_after(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_last_modified_time_after(input);
            self
        }

        pub fn last_modified_time_before(mut self, input: smithy_types::Instant) -> Self {
            self.inner = self.inner.last_modified_time_before(input);
            self
        }
        pub fn set_last_modified_time_before(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_last_modified_time_before(input);
            self
        }

        pub fn name_contains(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.name_contains(input);
            self
        }
        pub fn set_name_contains(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_name_contains(input);
            self
        }

        pub fn status_equals(mut self, input: crate::model::TransformJobStatus) -> Self {
            self.inner = self.inner.status_equals(input);
            self
        }
        pub fn set_status_equals(mut self, input: std::option::Option<crate::model::TransformJobStatus>) -> Self {
            self.inner = self.inner.set_status_equals(input);
            self
        }

        pub fn sort_by(mut self, input: crate::model::SortBy) -> Self {
            self.inner = self.inner.sort_by(input);
            self
        }
        pub fn set_sort_by(mut self, input: std::option::Option<crate::model::SortBy>) -> Self {
            self.inner = self.inner.set_sort_by(input);
            self
        }

        pub fn sort_order(mut self, input: crate::model::SortOrder) -> Self {
            self.inner = self.inner.sort_order(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::SortOrder>) -> Self {
            self.inner = self.inner.set_sort_order(input);
            self
        }

        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }

        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }
    }
    /// Stops a transform job. Output already written to S3 is kept.
    #[derive(std::fmt::Debug)]
    pub struct StopTransformJob {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::stop_transform_job_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl StopTransformJob {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::StopTransformJobOutput,
            smithy_http::result::SdkError<crate::error::StopTransformJobError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn transform_job_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.transform_job_name(input);
            self
        }
        pub fn set_transform_job_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_transform_job_name(input);
            self
        }
    }
    /// Starts a hyperparameter tuning job that runs many training jobs to find the best hyperparameters.
    #[derive(std::fmt::Debug)]
    pub struct CreateHyperParameterTuningJob {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::create_hyper_parameter_tuning_job_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl CreateHyperParameterTuningJob {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateHyperParameterTuningJobOutput,
            smithy_http::result::SdkError<crate::error::CreateHyperParameterTuningJobError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn hyper_parameter_tuning_job_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.hyper_parameter_tuning_job_name(input);
            self
        }
        pub fn set_hyper_parameter_tuning_job_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_hyper_parameter_tuning_job_name(input);
            self
        }

        pub fn hyper_parameter_tuning_job_config(mut self, input: crate::model::HyperParameterTuningJobConfig) -> Self {
            self.inner = self.inner.hyper_parameter_tuning_job_config(input);
            self
        }
        pub fn set_hyper_parameter_tuning_job_config(mut self, input: std::option::Option<crate::model::HyperParameterTuningJobConfig>) -> Self {
            self.inner = self.inner.set_hyper_parameter_tuning_job_config(input);
            self
        }

        pub fn training_job_definition(mut self, input: crate::model::HyperParameterTrainingJobDefinition) -> Self {
            self.inner = self.inner.training_job_definition(input);
            self
        }
        pub fn set_training_job_definition(mut self, input: std::option::Option<crate::model::HyperParameterTrainingJobDefinition>) -> Self {
            self.inner = self.inner.set_training_job_definition(input);
            self
        }

        pub fn training_job_definitions(mut self, input: impl Into<crate::model::HyperParameterTrainingJobDefinition>) -> Self {
            self.inner = self.inner.training_job_definitions(input);
            self
        }
        pub fn set_training_job_definitions(mut self, input: std::option::Option<std::vec::Vec<crate::model::HyperParameterTrainingJobDefinition>>) -> Self {
            self.inner = self.inner.set_training_job_definitions(input);
            self
        }

        pub fn warm_start_config(mut self, input: crate::model::HyperParameterTuningJobWarmStartConfig) -> Self {
            self.inner = self.inner.warm_start_config(input);
            self
        }
        pub fn set_warm_start_config(mut self, input: std::option::Option<crate::model::HyperParameterTuningJobWarmStartConfig>) -> Self {
            self.inner = self.inner.set_warm_start_config(input);
            self
        }

        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            self.inner = self.inner.tags(input);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.inner = self.inner.set_tags(input);
            self
        }
    }
    /// Returns information about a hyperparameter tuning job.
    #[derive(std::fmt::Debug)]
    pub struct DescribeHyperParameterTuningJob {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_hyper_parameter_tuning_job_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl DescribeHyperParameterTuningJob {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeHyperParameterTuningJobOutput,
            smithy_http::result::SdkError<crate::error::DescribeHyperParameterTuningJobError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn hyper_parameter_tuning_job_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.hyper_parameter_tuning_job_name(input);
            self
        }
        pub fn set_hyper_parameter_tuning_job_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_hyper_parameter_tuning_job_name(input);
            self
        }
    }
    /// Returns a page of hyperparameter tuning job summaries.
    #[derive(std::fmt::Debug)]
    pub struct ListHyperParameterTuningJobs {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_hyper_parameter_tuning_jobs_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl ListHyperParameterTuningJobs {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListHyperParameterTuningJobsOutput,
            smithy_http::result::SdkError<crate::error::ListHyperParameterTuningJobsError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }

        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }

        pub fn sort_by(mut self, input: crate::model::HyperParameterTuningJobSortByOptions) -> Self {
            self.inner = self.inner.sort_by(input);
            self
        }
        pub fn set_sort_by(mut self, input: std::option::Option<crate::model::HyperParameterTuningJobSortByOptions>) -> Self {
            self.inner = self.inner.set_sort_by(input);
            self
        }

        pub fn sort_order(mut self, input: crate::model::SortOrder) -> Self {
            self.inner = self.inner.sort_order(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::SortOrder>) -> Self {
            self.inner = self.inner.set_sort_order(input);
            self
        }

        pub fn name_contains(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.name_contains(input);
            self
        }
        pub fn set_name_contains(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_name_contains(input);
            self
        }

        pub fn creation_time_after(mut self, input: smithy_types::Instant) -> Self {
            self.inner = self.inner.creation_time_after(input);
            self
        }
        pub fn set_creation_time_after(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_creation_time_after(input);
            self
        }

        pub fn creation_time_before(mut self, input: smithy_types::Instant) -> Self {
            self.inner = self.inner.creation_time_before(input);
            self
        }
        pub fn set_creation_time_before(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_creation_time_before(input);
            self
        }

        pub fn last_modified_time_after(mut self, input: smithy_types::Instant) -> Self {
            self.inner = self.inner.last_modified_time_after(input);
            self
        }
        pub fn set_last_modified_time_after(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_last_modified_time_after(input);
            self
        }

        pub fn last_modified_time_before(mut self, input: smithy_types::Instant) -> Self {
            self.inner = self.inner.last_modified_time_before(input);
            self
        }
        pub fn set_last_modified_time_before(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_last_modified_time_before(input);
            self
        }

        pub fn status_equals(mut self, input: crate::model::HyperParameterTuningJobStatus) -> Self {
            self.inner = self.inner.status_equals(input);
            self
        }
        pub fn set_status_equals(mut self, input: std::option::Option<crate::model::HyperParameterTuningJobStatus>) -> Self {
            self.inner = self.inner.set_status_equals(input);
            self
        }
    }
    /// Stops a hyperparameter tuning job and every training job it launched.
    #[derive(std::fmt::Debug)]
    pub struct StopHyperParameterTuningJob {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::stop_hyper_parameter_tuning_job_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl StopHyperParameterTuningJob {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::StopHyperParameterTuningJobOutput,
            smithy_http::result::SdkError<crate::error::StopHyperParameterTuningJobError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn hyper_parameter_tuning_job_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.hyper_parameter_tuning_job_name(input);
            self
        }
        pub fn set_hyper_parameter_tuning_job_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_hyper_parameter_tuning_job_name(input);
            self
        }
    }
    /// Returns a page of the training jobs launched by a hyperparameter tuning job.
    #[derive(std::fmt::Debug)]
    pub struct ListTrainingJobsForHyperParameterTuningJob {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_training_jobs_for_hyper_parameter_tuning_job_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl ListTrainingJobsForHyperParameterTuningJob {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListTrainingJobsForHyperParameterTuningJobOutput,
            smithy_http::result::SdkError<crate::error::ListTrainingJobsForHyperParameterTuningJobError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn hyper_parameter_tuning_job_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.hyper_parameter_tuning_job_name(input);
            self
        }
        pub fn set_hyper_parameter_tuning_job_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_hyper_parameter_tuning_job_name(input);
            self
        }

        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }

        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }

        pub fn status_equals(mut self, input: crate::model::TrainingJobStatus) -> Self {
            self.inner = self.inner.status_equals(input);
            self
        }
        pub fn set_status_equals(mut self, input: std::option::Option<crate::model::TrainingJobStatus>) -> Self {
            self.inner = self.inner.set_status_equals(input);
            self
        }

        pub fn sort_by(mut self, input: crate::model::TrainingJobSortByOptions) -> Self {
            self.inner = self.inner.sort_by(input);
            self
        }
        pub fn set_sort_by(mut self, input: std::option::Option<crate::model::TrainingJobSortByOptions>) -> Self {
            self.inner = self.inner.set_sort_by(input);
            self
        }

        pub fn sort_order(mut self, input: crate::model::SortOrder) -> Self {
            self.inner = self.inner.sort_order(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::SortOrder>) -> Self {
            self.inner = self.inner.set_sort_order(input);
            self
        }
    }
    /// Starts a labeling job that has people, and optionally a model, label a dataset.
    #[derive(std::fmt::Debug)]
    pub struct CreateLabelingJob {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::create_labeling_job_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl CreateLabelingJob {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateLabelingJobOutput,
            smithy_http::result::SdkError<crate::error::CreateLabelingJobError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn labeling_job_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.labeling_job_name(input);
            self
        }
        pub fn set_labeling_job_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_labeling_job_name(input);
            self
        }

        pub fn label_attribute_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.label_attribute_name(input);
            self
        }
        pub fn set_label_attribute_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_label_attribute_name(input);
            self
        }

        pub fn input_config(mut self, input: crate::model::LabelingJobInputConfig) -> Self {
            self.inner = self.inner.input_config(input);
            self
        }
        pub fn set_input_config(mut self, input: std::option::Option<crate::model::LabelingJobInputConfig>) -> Self {
            self.inner = self.inner.set_input_config(input);
            self
        }

        pub fn output_config(mut self, input: crate::model::LabelingJobOutputConfig) -> Self {
            self.inner = self.inner.output_config(input);
            self
        }
        pub fn set_output_config(mut self, input: std::option::Option<crate::model::LabelingJobOutputConfig>) -> Self {
            self.inner = self.inner.set_output_config(input);
            self
        }

        pub fn role_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.role_arn(input);
            self
        }
        pub fn set_role_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_role_arn(input);
            self
        }

        pub fn label_category_config_s3_uri(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.label_category_config_s3_uri(input);
            self
        }
        pub fn set_label_category_config_s3_uri(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_label_category_config_s3_uri(input);
            self
        }

        pub fn stopping_conditions(mut self, input: crate::model::LabelingJobStoppingConditions) -> Self {
            self.inner = self.inner.stopping_conditions(input);
            self
        }
        pub fn set_stopping_conditions(mut self, input: std::option::Option<crate::model::LabelingJobStoppingConditions>) -> Self {
            self.inner = self.inner.set_stopping_conditions(input);
            self
        }

        pub fn labeling_job_algorithms_config(mut self, input: crate::model::LabelingJobAlgorithmsConfig) -> Self {
            self.inner = self.inner.labeling_job_algorithms_config(input);
            self
        }
        pub fn set_labeling_job_algorithms_config(mut self, input: std::option::Option<crate::model::LabelingJobAlgorithmsConfig>) -> Self {
            self.inner = self.inner.set_labeling_job_algorithms_config(input);
            self
        }

        pub fn human_task_config(mut self, input: crate::model::HumanTaskConfig) -> Self {
            self.inner = self.inner.human_task_config(input);
            self
        }
        pub fn set_human_task_config(mut self, input: std::option::Option<crate::model::HumanTaskConfig>) -> Self {
            self.inner = self.inner.set_human_task_config(input);
            self
        }

        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            self.inner = self.inner.tags(input);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.inner = self.inner.set_tags(input);
            self
        }
    }
    /// Returns information about a labeling job.
    #[derive(std::fmt::Debug)]
    pub struct DescribeLabelingJob {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_labeling_job_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl DescribeLabelingJob {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeLabelingJobOutput,
            smithy_http::result::SdkError<crate::error::DescribeLabelingJobError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn labeling_job_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.labeling_job_name(input);
            self
        }
        pub fn set_labeling_job_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_labeling_job_name(input);
            self
        }
    }
    /// Returns a page of labeling job summaries.
    #[derive(std::fmt::Debug)]
    pub struct ListLabelingJobs {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_labeling_jobs_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl ListLabelingJobs {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListLabelingJobsOutput,
            smithy_http::result::SdkError<crate::error::ListLabelingJobsError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn creation_time_after(mut self, input: smithy_types::Instant) -> Self {
            self.inner = self.inner.creation_time_after(input);
            self
        }
        pub fn set_creation_time_after(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_creation_time_after(input);
            self
        }

        pub fn creation_time_before(mut self, input: smithy_types::Instant) -> Self {
            self.inner = self.inner.creation_time_before(input);
            self
        }
        pub fn set_creation_time_before(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_creation_time_before(input);
            self
        }

        pub fn last_modified_time_after(mut self, input: smithy_types::Instant) -> Self {
            self.inner = self.inner.last_modified_time_after(input);
            self
        }
        pub fn set_last_modified_time_after(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_last_modified_time_after(input);
            self
        }

        pub fn last_modified_time_before(mut self, input: smithy_types::Instant) -> Self {
            self.inner = self.inner.last_modified_time_before(input);
            self
        }
        pub fn set_last_modified_time_before(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_last_modified_time_before(input);
            self
        }

        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }

        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }

        pub fn name_contains(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.name_contains(input);
            self
        }
        pub fn set_name_contains(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_name_contains(input);
            self
        }

        pub fn sort_by(mut self, input: crate::model::SortBy) -> Self {
            self.inner = self.inner.sort_by(input);
            self
        }
        pub fn set_sort_by(mut self, input: std::option::Option<crate::model::SortBy>) -> Self {
            self.inner = self.inner.set_sort_by(input);
            self
        }

        pub fn sort_order(mut self, input: crate::model::SortOrder) -> Self {
            self.inner = self.inner.sort_order(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::SortOrder>) -> Self {
            self.inner = self.inner.set_sort_order(input);
            self
        }

        pub fn status_equals(mut self, input: crate::model::LabelingJobStatus) -> Self {
            self.inner = self.inner.status_equals(input);
            self
        }
        pub fn set_status_equals(mut self, input: std::option::Option<crate::model::LabelingJobStatus>) -> Self {
            self.inner = self.inner.set_status_equals(input);
            self
        }
    }
    /// Stops a running labeling job. Objects already labeled are written to the output.
    #[derive(std::fmt::Debug)]
    pub struct StopLabelingJob {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::stop_labeling_job_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl StopLabelingJob {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::StopLabelingJobOutput,
            smithy_http::result::SdkError<crate::error::StopLabelingJobError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn labeling_job_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.labeling_job_name(input);
            self
        }
        pub fn set_labeling_job_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_labeling_job_name(input);
            self
        }
    }
    /// Creates a flow definition, which decides when a human reviews a prediction.
    #[derive(std::fmt::Debug)]
    pub struct CreateFlowDefinition {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::create_flow_definition_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl CreateFlowDefinition {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateFlowDefinitionOutput,
            smithy_http::result::SdkError<crate::error::CreateFlowDefinitionError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn flow_definition_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.flow_definition_name(input);
            self
        }
        pub fn set_flow_definition_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_flow_definition_name(input);
            self
        }

        pub fn human_loop_request_source(mut self, input: crate::model::HumanLoopRequestSource) -> Self {
            self.inner = self.inner.human_loop_request_source(input);
            self
        }
        pub fn set_human_loop_request_source(mut self, input: std::option::Option<crate::model::HumanLoopRequestSource>) -> Self {
            self.inner = self.inner.set_human_loop_request_source(input);
            self
        }

        pub fn human_loop_activation_config(mut self, input: crate::model::HumanLoopActivationConfig) -> Self {
            self.inner = self.inner.human_loop_activation_config(input);
            self
        }
        pub fn set_human_loop_activation_config(mut self, input: std::option::Option<crate::model::HumanLoopActivationConfig>) -> Self {
            self.inner = self.inner.set_human_loop_activation_config(input);
            self
        }

        pub fn human_loop_config(mut self, input: crate::model::HumanLoopConfig) -> Self {
            self.inner = self.inner.human_loop_config(input);
            self
        }
        pub fn set_human_loop_config(mut self, input: std::option::Option<crate::model::HumanLoopConfig>) -> Self {
            self.inner = self.inner.set_human_loop_config(input);
            self
        }

        pub fn output_config(mut self, input: crate::model::FlowDefinitionOutputConfig) -> Self {
            self.inner = self.inner.output_config(input);
            self
        }
        pub fn set_output_config(mut self, input: std::option::Option<crate::model::FlowDefinitionOutputConfig>) -> Self {
            self.inner = self.inner.set_output_config(input);
            self
        }

        pub fn role_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.role_arn(input);
            self
        }
        pub fn set_role_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_role_arn(input);
            self
        }

        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            self.inner = self.inner.tags(input);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.inner = self.inner.set_tags(input);
            self
        }
    }
    /// Returns information about a flow definition.
    #[derive(std::fmt::Debug)]
    pub struct DescribeFlowDefinition {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_flow_definition_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl DescribeFlowDefinition {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeFlowDefinitionOutput,
            smithy_http::result::SdkError<crate::error::DescribeFlowDefinitionError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn flow_definition_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.flow_definition_name(input);
            self
        }
        pub fn set_flow_definition_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_flow_definition_name(input);
            self
        }
    }
    /// Returns a page of flow definition summaries.
    #[derive(std::fmt::Debug)]
    pub struct ListFlowDefinitions {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_flow_definitions_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl ListFlowDefinitions {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListFlowDefinitionsOutput,
            smithy_http::result::SdkError<crate::error::ListFlowDefinitionsError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn creation_time_after(mut self, input: smithy_types::Instant) -> Self {
            self.inner = self.inner.creation_time_after(input);
            self
        }
        pub fn set_creation_time_after(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_creation_time_after(input);
            self
        }

        pub fn creation_time_before(mut self, input: smithy_types::Instant) -> Self {
            self.inner = self.inner.creation_time_before(input);
            self
        }
        pub fn set_creation_time_before(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_creation_time_before(input);
            self
        }

        pub fn sort_order(mut self, input: crate::model::SortOrder) -> Self {
            self.inner = self.inner.sort_order(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::SortOrder>) -> Self {
            self.inner = self.inner.set_sort_order(input);
            self
        }

        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }

        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }
    }
    /// Deletes a flow definition.
    #[derive(std::fmt::Debug)]
    pub struct DeleteFlowDefinition {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::delete_flow_definition_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl DeleteFlowDefinition {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteFlowDefinitionOutput,
            smithy_http::result::SdkError<crate::error::DeleteFlowDefinitionError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn flow_definition_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.flow_definition_name(input);
            self
        }
        pub fn set_flow_definition_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_flow_definition_name(input);
            self
        }
    }
    /// Creates the configuration an endpoint is deployed from: which models to host and on what.
    #[derive(std::fmt::Debug)]
    pub struct CreateEndpointConfig {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::create_endpoint_config_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl CreateEndpointConfig {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateEndpointConfigOutput,
            smithy_http::result::SdkError<crate::error::CreateEndpointConfigError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn endpoint_config_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.endpoint_config_name(input);
            self
        }
        pub fn set_endpoint_config_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_endpoint_config_name(input);
            self
        }

        pub fn production_variants(mut self, input: impl Into<crate::model::ProductionVariant>) -> Self {
            self.inner = self.inner.production_variants(input);
            self
        }
        pub fn set_production_variants(mut self, input: std::option::Option<std::vec::Vec<crate::model::ProductionVariant>>) -> Self {
            self.inner = self.inner.set_production_variants(input);
            self
        }

        pub fn data_capture_config(mut self, input: crate::model::DataCaptureConfig) -> Self {
            self.inner = self.inner.data_capture_config(input);
            self
        }
        pub fn set_data_capture_config(mut self, input: std::option::Option<crate::model::DataCaptureConfig>) -> Self {
            self.inner = self.inner.set_data_capture_config(input);
            self
        }

        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            self.inner = self.inner.tags(input);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.inner = self.inner.set_tags(input);
            self
        }

        pub fn kms_key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.kms_key_id(input);
            self
        }
        pub fn set_kms_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_kms_key_id(input);
            self
        }
    }
    /// Returns information about an endpoint configuration.
    #[derive(std::fmt::Debug)]
    pub struct DescribeEndpointConfig {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_endpoint_config_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl DescribeEndpointConfig {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeEndpointConfigOutput,
            smithy_http::result::SdkError<crate::error::DescribeEndpointConfigError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn endpoint_config_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.endpoint_config_name(input);
            self
        }
        pub fn set_endpoint_config_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_endpoint_config_name(input);
            self
        }
    }
    /// Returns a page of endpoint configuration summaries.
    #[derive(std::fmt::Debug)]
    pub struct ListEndpointConfigs {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_endpoint_configs_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl ListEndpointConfigs {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListEndpointConfigsOutput,
            smithy_http::result::SdkError<crate::error::ListEndpointConfigsError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn sort_by(mut self, input: crate::model::EndpointConfigSortKey) -> Self {
            self.inner = self.inner.sort_by(input);
            self
        }
        pub fn set_sort_by(mut self, input: std::option::Option<crate::model::EndpointConfigSortKey>) -> Self {
            self.inner = self.inner.set_sort_by(input);
            self
        }

        pub fn sort_order(mut self, input: crate::model::OrderKey) -> Self {
            self.inner = self.inner.sort_order(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::OrderKey>) -> Self {
            self.inner = self.inner.set_sort_order(input);
            self
        }

        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }

        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }

        pub fn name_contains(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.name_contains(input);
            self
        }
        pub fn set_name_contains(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_name_contains(input);
            self
        }

        pub fn creation_time_before(mut self, input: smithy_types::Instant) -> Self {
            self.inner = self.inner.creation_time_before(input);
            self
        }
        pub fn set_creation_time_before(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_creation_time_before(input);
            self
        }

        pub fn creation_time_after(mut self, input: smithy_types::Instant) -> Self {
            self.inner = self.inner.creation_time_after(input);
            self
        }
        pub fn set_creation_time_after(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_creation_time_after(input);
            self
        }
    }
    /// Deletes an endpoint configuration. Endpoints already deployed from it are not affected.
    #[derive(std::fmt::Debug)]
    pub struct DeleteEndpointConfig {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::delete_endpoint_config_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl DeleteEndpointConfig {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteEndpointConfigOutput,
            smithy_http::result::SdkError<crate::error::DeleteEndpointConfigError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn endpoint_config_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.endpoint_config_name(input);
            self
        }
        pub fn set_endpoint_config_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_endpoint_config_name(input);
            self
        }
    }
    /// Deploys an endpoint from an endpoint configuration.
    #[derive(std::fmt::Debug)]
    pub struct CreateEndpoint {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::create_endpoint_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl CreateEndpoint {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateEndpointOutput,
            smithy_http::result::SdkError<crate::error::CreateEndpointError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn endpoint_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.endpoint_name(input);
            self
        }
        pub fn set_endpoint_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_endpoint_name(input);
            self
        }

        pub fn endpoint_config_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.endpoint_config_name(input);
            self
        }
        pub fn set_endpoint_config_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_endpoint_config_name(input);
            self
        }

        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            self.inner = self.inner.tags(input);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.inner = self.inner.set_tags(input);
            self
        }
    }
    /// Returns information about an endpoint.
    #[derive(std::fmt::Debug)]
    pub struct DescribeEndpoint {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_endpoint_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl DescribeEndpoint {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeEndpointOutput,
            smithy_http::result::SdkError<crate::error::DescribeEndpointError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn endpoint_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.endpoint_name(input);
            self
        }
        pub fn set_endpoint_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_endpoint_name(input);
            self
        }
    }
    /// Returns a page of endpoint summaries.
    #[derive(std::fmt::Debug)]
    pub struct ListEndpoints {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_endpoints_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl ListEndpoints {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListEndpointsOutput,
            smithy_http::result::SdkError<crate::error::ListEndpointsError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn sort_by(mut self, input: crate::model::EndpointSortKey) -> Self {
            self.inner = self.inner.sort_by(input);
            self
        }
        pub fn set_sort_by(mut self, input: std::option::Option<crate::model::EndpointSortKey>) -> Self {
            self.inner = self.inner.set_sort_by(input);
            self
        }

        pub fn sort_order(mut self, input: crate::model::OrderKey) -> Self {
            self.inner = self.inner.sort_order(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::OrderKey>) -> Self {
            self.inner = self.inner.set_sort_order(input);
            self
        }

        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }

        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }

        pub fn name_contains(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.name_contains(input);
            self
        }
        pub fn set_name_contains(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_name_contains(input);
            self
        }

        pub fn creation_time_before(mut self, input: smithy_types::Instant) -> Self {
            self.inner = self.inner.creation_time_before(input);
            self
        }
        pub fn set_creation_time_before(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_creation_time_before(input);
            self
        }

        pub fn creation_time_after(mut self, input: smithy_types::Instant) -> Self {
            self.inner = self.inner.creation_time_after(input);
            self
        }
        pub fn set_creation_time_after(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_creation_time_after(input);
            self
        }

        pub fn last_modified_time_before(mut self, input: smithy_types::Instant) -> Self {
            self.inner = self.inner.last_modified_time_before(input);
            self
        }
        pub fn set_last_modified_time_before(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_last_modified_time_before(input);
            self
        }

        pub fn last_modified_time_after(mut self, input: smithy_types::Instant) -> Self {
            self.inner = self.inner.last_modified_time_after(input);
            self
        }
        pub fn set_last_modified_time_after(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_last_modified_time_after(input);
            self
        }

        pub fn status_equals(mut self, input: crate::model::EndpointStatus) -> Self {
            self.inner = self.inner.status_equals(input);
            self
        }
        pub fn set_status_equals(mut self, input: std::option::Option<crate::model::EndpointStatus>) -> Self {
            self.inner = self.inner.set_status_equals(input);
            self
        }
    }
    /// Moves an endpoint to a new endpoint configuration without taking it out of service.
    #[derive(std::fmt::Debug)]
    pub struct UpdateEndpoint {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::update_endpoint_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl UpdateEndpoint {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::UpdateEndpointOutput,
            smithy_http::result::SdkError<crate::error::UpdateEndpointError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn endpoint_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.endpoint_name(input);
            self
        }
        pub fn set_endpoint_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_endpoint_name(input);
            self
        }

        pub fn endpoint_config_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.endpoint_config_name(input);
            self
        }
        pub fn set_endpoint_config_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_endpoint_config_name(input);
            self
        }

        pub fn retain_all_variant_properties(mut self, input: bool) -> Self {
            self.inner = self.inner.retain_all_variant_properties(input);
            self
        }
        pub fn set_retain_all_variant_properties(mut self, input: std::option::Option<bool>) -> Self {
            self.inner = self.inner.set_retain_all_variant_properties(input);
            self
        }

        pub fn exclude_retained_variant_properties(mut self, input: impl Into<crate::model::VariantProperty>) -> Self {
            self.inner = self.inner.exclude_retained_variant_properties(input);
            self
        }
        pub fn set_exclude_retained_variant_properties(mut self, input: std::option::Option<std::vec::Vec<crate::model::VariantProperty>>) -> Self {
            self.inner = self.inner.set_exclude_retained_variant_properties(input);
            self
        }
    }
    /// Deletes an endpoint and the resources deployed for it.
    #[derive(std::fmt::Debug)]
    pub struct DeleteEndpoint {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::delete_endpoint_input::Builder,
        credentials_override: std::option::Option<aws_auth::SharedCredentialsProvider>,
    }
    impl DeleteEndpoint {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
                credentials_override: None,
            }
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteEndpointOutput,
            smithy_http::result::SdkError<crate::error::DeleteEndpointError>,
        > {
            let input = self.inner.build();
            let mut op = match input.make_operation(&self.handle.conf) {
                Ok(op) => op,
                Err(err) => {
                    return Err(smithy_http::result::SdkError::ConstructionFailure(err.into()))
                }
            };
            if let Some(provider) = self.credentials_override {
                aws_auth::set_request_provider(op.properties_mut(), provider);
            }
            self.handle.client.call(op).await
        }

        /// Use `provider` for this request instead of the client's credentials provider
        pub fn credentials_override(
            mut self,
            provider: impl aws_auth::ProvideCredentials + 'static,
        ) -> Self {
            self.credentials_override = Some(aws_auth::SharedCredentialsProvider::new(provider));
            self
        }

        pub fn endpoint_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.endpoint_name(input);
            self
        }
        pub fn set_endpoint_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_endpoint_name(input);
            self
        }
    }
}
