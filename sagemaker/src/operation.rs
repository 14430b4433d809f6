/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Adds or overwrites tags on a SageMaker resource.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct AddTags {
    _private: (),
}
impl AddTags {
    /// Creates a new builder-style object to manufacture [`AddTagsInput`](crate::input::AddTagsInput)
    pub fn builder() -> crate::input::add_tags_input::Builder {
        crate::input::add_tags_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for AddTags {
    type Output = std::result::Result<
        crate::output::AddTagsOutput,
        smithy_http::result::ParseFailure<crate::error::AddTagsError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_add_tags_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_add_tags_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Deletes the specified tags from a SageMaker resource.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteTags {
    _private: (),
}
impl DeleteTags {
    /// Creates a new builder-style object to manufacture [`DeleteTagsInput`](crate::input::DeleteTagsInput)
    pub fn builder() -> crate::input::delete_tags_input::Builder {
        crate::input::delete_tags_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteTags {
    type Output = std::result::Result<
        crate::output::DeleteTagsOutput,
        smithy_http::result::ParseFailure<crate::error::DeleteTagsError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_delete_tags_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_delete_tags_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Returns the tags for a SageMaker resource.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListTags {
    _private: (),
}
impl ListTags {
    /// Creates a new builder-style object to manufacture [`ListTagsInput`](crate::input::ListTagsInput)
    pub fn builder() -> crate::input::list_tags_input::Builder {
        crate::input::list_tags_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListTags {
    type Output = std::result::Result<
        crate::output::ListTagsOutput,
        smithy_http::result::ParseFailure<crate::error::ListTagsError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_list_tags_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_list_tags_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Creates a notebook instance: an ML compute instance running the Jupyter Notebook App.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateNotebookInstance {
    _private: (),
}
impl CreateNotebookInstance {
    /// Creates a new builder-style object to manufacture [`CreateNotebookInstanceInput`](crate::input::CreateNotebookInstanceInput)
    pub fn builder() -> crate::input::create_notebook_instance_input::Builder {
        crate::input::create_notebook_instance_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateNotebookInstance {
    type Output = std::result::Result<
        crate::output::CreateNotebookInstanceOutput,
        smithy_http::result::ParseFailure<crate::error::CreateNotebookInstanceError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_create_notebook_instance_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_create_notebook_instance_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Returns information about a notebook instance.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeNotebookInstance {
    _private: (),
}
impl DescribeNotebookInstance {
    /// Creates a new builder-style object to manufacture [`DescribeNotebookInstanceInput`](crate::input::DescribeNotebookInstanceInput)
    pub fn builder() -> crate::input::describe_notebook_instance_input::Builder {
        crate::input::describe_notebook_instance_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeNotebookInstance {
    type Output = std::result::Result<
        crate::output::DescribeNotebookInstanceOutput,
        smithy_http::result::ParseFailure<crate::error::DescribeNotebookInstanceError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_describe_notebook_instance_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_describe_notebook_instance_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Updates a notebook instance. The instance must be stopped.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct UpdateNotebookInstance {
    _private: (),
}
impl UpdateNotebookInstance {
    /// Creates a new builder-style object to manufacture [`UpdateNotebookInstanceInput`](crate::input::UpdateNotebookInstanceInput)
    pub fn builder() -> crate::input::update_notebook_instance_input::Builder {
        crate::input::update_notebook_instance_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for UpdateNotebookInstance {
    type Output = std::result::Result<
        crate::output::UpdateNotebookInstanceOutput,
        smithy_http::result::ParseFailure<crate::error::UpdateNotebookInstanceError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_update_notebook_instance_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_update_notebook_instance_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Deletes a stopped notebook instance.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteNotebookInstance {
    _private: (),
}
impl DeleteNotebookInstance {
    /// Creates a new builder-style object to manufacture [`DeleteNotebookInstanceInput`](crate::input::DeleteNotebookInstanceInput)
    pub fn builder() -> crate::input::delete_notebook_instance_input::Builder {
        crate::input::delete_notebook_instance_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteNotebookInstance {
    type Output = std::result::Result<
        crate::output::DeleteNotebookInstanceOutput,
        smithy_http::result::ParseFailure<crate::error::DeleteNotebookInstanceError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_delete_notebook_instance_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_delete_notebook_instance_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Launches an ML compute instance for a stopped notebook instance.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct StartNotebookInstance {
    _private: (),
}
impl StartNotebookInstance {
    /// Creates a new builder-style object to manufacture [`StartNotebookInstanceInput`](crate::input::StartNotebookInstanceInput)
    pub fn builder() -> crate::input::start_notebook_instance_input::Builder {
        crate::input::start_notebook_instance_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for StartNotebookInstance {
    type Output = std::result::Result<
        crate::output::StartNotebookInstanceOutput,
        smithy_http::result::ParseFailure<crate::error::StartNotebookInstanceError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_start_notebook_instance_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_start_notebook_instance_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Terminates the ML compute instance of a notebook instance.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct StopNotebookInstance {
    _private: (),
}
impl StopNotebookInstance {
    /// Creates a new builder-style object to manufacture [`StopNotebookInstanceInput`](crate::input::StopNotebookInstanceInput)
    pub fn builder() -> crate::input::stop_notebook_instance_input::Builder {
        crate::input::stop_notebook_instance_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for StopNotebookInstance {
    type Output = std::result::Result<
        crate::output::StopNotebookInstanceOutput,
        smithy_http::result::ParseFailure<crate::error::StopNotebookInstanceError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_stop_notebook_instance_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_stop_notebook_instance_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Returns a page of notebook instance summaries.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListNotebookInstances {
    _private: (),
}
impl ListNotebookInstances {
    /// Creates a new builder-style object to manufacture [`ListNotebookInstancesInput`](crate::input::ListNotebookInstancesInput)
    pub fn builder() -> crate::input::list_notebook_instances_input::Builder {
        crate::input::list_notebook_instances_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListNotebookInstances {
    type Output = std::result::Result<
        crate::output::ListNotebookInstancesOutput,
        smithy_http::result::ParseFailure<crate::error::ListNotebookInstancesError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_list_notebook_instances_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_list_notebook_instances_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Returns a URL that connects to the Jupyter server of a notebook instance.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreatePresignedNotebookInstanceUrl {
    _private: (),
}
impl CreatePresignedNotebookInstanceUrl {
    /// Creates a new builder-style object to manufacture [`CreatePresignedNotebookInstanceUrlInput`](crate::input::CreatePresignedNotebookInstanceUrlInput)
    pub fn builder() -> crate::input::create_presigned_notebook_instance_url_input::Builder {
        crate::input::create_presigned_notebook_instance_url_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreatePresignedNotebookInstanceUrl {
    type Output = std::result::Result<
        crate::output::CreatePresignedNotebookInstanceUrlOutput,
        smithy_http::result::ParseFailure<crate::error::CreatePresignedNotebookInstanceUrlError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_create_presigned_notebook_instance_url_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_create_presigned_notebook_instance_url_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Starts a model training job.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateTrainingJob {
    _private: (),
}
impl CreateTrainingJob {
    /// Creates a new builder-style object to manufacture [`CreateTrainingJobInput`](crate::input::CreateTrainingJobInput)
    pub fn builder() -> crate::input::create_training_job_input::Builder {
        crate::input::create_training_job_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateTrainingJob {
    type Output = std::result::Result<
        crate::output::CreateTrainingJobOutput,
        smithy_http::result::ParseFailure<crate::error::CreateTrainingJobError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_create_training_job_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_create_training_job_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Returns information about a training job.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeTrainingJob {
    _private: (),
}
impl DescribeTrainingJob {
    /// Creates a new builder-style object to manufacture [`DescribeTrainingJobInput`](crate::input::DescribeTrainingJobInput)
    pub fn builder() -> crate::input::describe_training_job_input::Builder {
        crate::input::describe_training_job_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeTrainingJob {
    type Output = std::result::Result<
        crate::output::DescribeTrainingJobOutput,
        smithy_http::result::ParseFailure<crate::error::DescribeTrainingJobError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_describe_training_job_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_describe_training_job_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Returns a page of training job summaries.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListTrainingJobs {
    _private: (),
}
impl ListTrainingJobs {
    /// Creates a new builder-style object to manufacture [`ListTrainingJobsInput`](crate::input::ListTrainingJobsInput)
    pub fn builder() -> crate::input::list_training_jobs_input::Builder {
        crate::input::list_training_jobs_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListTrainingJobs {
    type Output = std::result::Result<
        crate::output::ListTrainingJobsOutput,
        smithy_http::result::ParseFailure<crate::error::ListTrainingJobsError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_list_training_jobs_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_list_training_jobs_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Stops a training job. The algorithm receives `SIGTERM` and may save its state.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct StopTrainingJob {
    _private: (),
}
impl StopTrainingJob {
    /// Creates a new builder-style object to manufacture [`StopTrainingJobInput`](crate::input::StopTrainingJobInput)
    pub fn builder() -> crate::input::stop_training_job_input::Builder {
        crate::input::stop_training_job_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for StopTrainingJob {
    type Output = std::result::Result<
        crate::output::StopTrainingJobOutput,
        smithy_http::result::ParseFailure<crate::error::StopTrainingJobError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_stop_training_job_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_stop_training_job_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Creates a model from one or more inference containers.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateModel {
    _private: (),
}
impl CreateModel {
    /// Creates a new builder-style object to manufacture [`CreateModelInput`](crate::input::CreateModelInput)
    pub fn builder() -> crate::input::create_model_input::Builder {
        crate::input::create_model_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateModel {
    type Output = std::result::Result<
        crate::output::CreateModelOutput,
        smithy_http::result::ParseFailure<crate::error::CreateModelError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_create_model_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_create_model_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Describes a model created with `CreateModel`.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeModel {
    _private: (),
}
impl DescribeModel {
    /// Creates a new builder-style object to manufacture [`DescribeModelInput`](crate::input::DescribeModelInput)
    pub fn builder() -> crate::input::describe_model_input::Builder {
        crate::input::describe_model_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeModel {
    type Output = std::result::Result<
        crate::output::DescribeModelOutput,
        smithy_http::result::ParseFailure<crate::error::DescribeModelError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_describe_model_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_describe_model_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Deletes a model. Artifacts in S3 and the inference image are not deleted.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteModel {
    _private: (),
}
impl DeleteModel {
    /// Creates a new builder-style object to manufacture [`DeleteModelInput`](crate::input::DeleteModelInput)
    pub fn builder() -> crate::input::delete_model_input::Builder {
        crate::input::delete_model_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteModel {
    type Output = std::result::Result<
        crate::output::DeleteModelOutput,
        smithy_http::result::ParseFailure<crate::error::DeleteModelError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_delete_model_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_delete_model_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Returns a page of model summaries.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListModels {
    _private: (),
}
impl ListModels {
    /// Creates a new builder-style object to manufacture [`ListModelsInput`](crate::input::ListModelsInput)
    pub fn builder() -> crate::input::list_models_input::Builder {
        crate::input::list_models_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListModels {
    type Output = std::result::Result<
        crate::output::ListModelsOutput,
        smithy_http::result::ParseFailure<crate::error::ListModelsError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_list_models_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_list_models_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Starts a batch transform job that runs a model over a dataset in S3.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateTransformJob {
    _private: (),
}
impl CreateTransformJob {
    /// Creates a new builder-style object to manufacture [`CreateTransformJobInput`](crate::input::CreateTransformJobInput)
    pub fn builder() -> crate::input::create_transform_job_input::Builder {
        crate::input::create_transform_job_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateTransformJob {
    type Output = std::result::Result<
        crate::output::CreateTransformJobOutput,
        smithy_http::result::ParseFailure<crate::error::CreateTransformJobError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_create_transform_job_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_create_transform_job_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Returns information about a transform job.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeTransformJob {
    _private: (),
}
impl DescribeTransformJob {
    /// Creates a new builder-style object to manufacture [`DescribeTransformJobInput`](crate::input::DescribeTransformJobInput)
    pub fn builder() -> crate::input::describe_transform_job_input::Builder {
        crate::input::describe_transform_job_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeTransformJob {
    type Output = std::result::Result<
        crate::output::DescribeTransformJobOutput,
        smithy_http::result::ParseFailure<crate::error::DescribeTransformJobError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_describe_transform_job_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_describe_transform_job_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Returns a page of transform job summaries.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListTransformJobs {
    _private: (),
}
impl ListTransformJobs {
    /// Creates a new builder-style object to manufacture [`ListTransformJobsInput`](crate::input::ListTransformJobsInput)
    pub fn builder() -> crate::input::list_transform_jobs_input::Builder {
        crate::input::list_transform_jobs_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListTransformJobs {
    type Output = std::result::Result<
        crate::output::ListTransformJobsOutput,
        smithy_http::result::ParseFailure<crate::error::ListTransformJobsError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_list_transform_jobs_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_list_transform_jobs_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Stops a transform job. Output already written to S3 is kept.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct StopTransformJob {
    _private: (),
}
impl StopTransformJob {
    /// Creates a new builder-style object to manufacture [`StopTransformJobInput`](crate::input::StopTransformJobInput)
    pub fn builder() -> crate::input::stop_transform_job_input::Builder {
        crate::input::stop_transform_job_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for StopTransformJob {
    type Output = std::result::Result<
        crate::output::StopTransformJobOutput,
        smithy_http::result::ParseFailure<crate::error::StopTransformJobError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_stop_transform_job_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_stop_transform_job_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Starts a hyperparameter tuning job that runs many training jobs to find the best hyperparameters.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateHyperParameterTuningJob {
    _private: (),
}
impl CreateHyperParameterTuningJob {
    /// Creates a new builder-style object to manufacture [`CreateHyperParameterTuningJobInput`](crate::input::CreateHyperParameterTuningJobInput)
    pub fn builder() -> crate::input::create_hyper_parameter_tuning_job_input::Builder {
        crate::input::create_hyper_parameter_tuning_job_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateHyperParameterTuningJob {
    type Output = std::result::Result<
        crate::output::CreateHyperParameterTuningJobOutput,
        smithy_http::result::ParseFailure<crate::error::CreateHyperParameterTuningJobError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_create_hyper_parameter_tuning_job_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_create_hyper_parameter_tuning_job_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Returns information about a hyperparameter tuning job.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeHyperParameterTuningJob {
    _private: (),
}
impl DescribeHyperParameterTuningJob {
    /// Creates a new builder-style object to manufacture [`DescribeHyperParameterTuningJobInput`](crate::input::DescribeHyperParameterTuningJobInput)
    pub fn builder() -> crate::input::describe_hyper_parameter_tuning_job_input::Builder {
        crate::input::describe_hyper_parameter_tuning_job_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeHyperParameterTuningJob {
    type Output = std::result::Result<
        crate::output::DescribeHyperParameterTuningJobOutput,
        smithy_http::result::ParseFailure<crate::error::DescribeHyperParameterTuningJobError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_describe_hyper_parameter_tuning_job_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_describe_hyper_parameter_tuning_job_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Returns a page of hyperparameter tuning job summaries.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListHyperParameterTuningJobs {
    _private: (),
}
impl ListHyperParameterTuningJobs {
    /// Creates a new builder-style object to manufacture [`ListHyperParameterTuningJobsInput`](crate::input::ListHyperParameterTuningJobsInput)
    pub fn builder() -> crate::input::list_hyper_parameter_tuning_jobs_input::Builder {
        crate::input::list_hyper_parameter_tuning_jobs_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListHyperParameterTuningJobs {
    type Output = std::result::Result<
        crate::output::ListHyperParameterTuningJobsOutput,
        smithy_http::result::ParseFailure<crate::error::ListHyperParameterTuningJobsError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_list_hyper_parameter_tuning_jobs_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_list_hyper_parameter_tuning_jobs_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Stops a hyperparameter tuning job and every training job it launched.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct StopHyperParameterTuningJob {
    _private: (),
}
impl StopHyperParameterTuningJob {
    /// Creates a new builder-style object to manufacture [`StopHyperParameterTuningJobInput`](crate::input::StopHyperParameterTuningJobInput)
    pub fn builder() -> crate::input::stop_hyper_parameter_tuning_job_input::Builder {
        crate::input::stop_hyper_parameter_tuning_job_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for StopHyperParameterTuningJob {
    type Output = std::result::Result<
        crate::output::StopHyperParameterTuningJobOutput,
        smithy_http::result::ParseFailure<crate::error::StopHyperParameterTuningJobError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_stop_hyper_parameter_tuning_job_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_stop_hyper_parameter_tuning_job_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Returns a page of the training jobs launched by a hyperparameter tuning job.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListTrainingJobsForHyperParameterTuningJob {
    _private: (),
}
impl ListTrainingJobsForHyperParameterTuningJob {
    /// Creates a new builder-style object to manufacture [`ListTrainingJobsForHyperParameterTuningJobInput`](crate::input::ListTrainingJobsForHyperParameterTuningJobInput)
    pub fn builder() -> crate::input::list_training_jobs_for_hyper_parameter_tuning_job_input::Builder {
        crate::input::list_training_jobs_for_hyper_parameter_tuning_job_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListTrainingJobsForHyperParameterTuningJob {
    type Output = std::result::Result<
        crate::output::ListTrainingJobsForHyperParameterTuningJobOutput,
        smithy_http::result::ParseFailure<crate::error::ListTrainingJobsForHyperParameterTuningJobError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_list_training_jobs_for_hyper_parameter_tuning_job_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_list_training_jobs_for_hyper_parameter_tuning_job_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Starts a labeling job that has people, and optionally a model, label a dataset.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateLabelingJob {
    _private: (),
}
impl CreateLabelingJob {
    /// Creates a new builder-style object to manufacture [`CreateLabelingJobInput`](crate::input::CreateLabelingJobInput)
    pub fn builder() -> crate::input::create_labeling_job_input::Builder {
        crate::input::create_labeling_job_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateLabelingJob {
    type Output = std::result::Result<
        crate::output::CreateLabelingJobOutput,
        smithy_http::result::ParseFailure<crate::error::CreateLabelingJobError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_create_labeling_job_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_create_labeling_job_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Returns information about a labeling job.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeLabelingJob {
    _private: (),
}
impl DescribeLabelingJob {
    /// Creates a new builder-style object to manufacture [`DescribeLabelingJobInput`](crate::input::DescribeLabelingJobInput)
    pub fn builder() -> crate::input::describe_labeling_job_input::Builder {
        crate::input::describe_labeling_job_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeLabelingJob {
    type Output = std::result::Result<
        crate::output::DescribeLabelingJobOutput,
        smithy_http::result::ParseFailure<crate::error::DescribeLabelingJobError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_describe_labeling_job_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_describe_labeling_job_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Returns a page of labeling job summaries.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListLabelingJobs {
    _private: (),
}
impl ListLabelingJobs {
    /// Creates a new builder-style object to manufacture [`ListLabelingJobsInput`](crate::input::ListLabelingJobsInput)
    pub fn builder() -> crate::input::list_labeling_jobs_input::Builder {
        crate::input::list_labeling_jobs_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListLabelingJobs {
    type Output = std::result::Result<
        crate::output::ListLabelingJobsOutput,
        smithy_http::result::ParseFailure<crate::error::ListLabelingJobsError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_list_labeling_jobs_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_list_labeling_jobs_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Stops a running labeling job. Objects already labeled are written to the output.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct StopLabelingJob {
    _private: (),
}
impl StopLabelingJob {
    /// Creates a new builder-style object to manufacture [`StopLabelingJobInput`](crate::input::StopLabelingJobInput)
    pub fn builder() -> crate::input::stop_labeling_job_input::Builder {
        crate::input::stop_labeling_job_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for StopLabelingJob {
    type Output = std::result::Result<
        crate::output::StopLabelingJobOutput,
        smithy_http::result::ParseFailure<crate::error::StopLabelingJobError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_stop_labeling_job_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_stop_labeling_job_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Creates a flow definition, which decides when a human reviews a prediction.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateFlowDefinition {
    _private: (),
}
impl CreateFlowDefinition {
    /// Creates a new builder-style object to manufacture [`CreateFlowDefinitionInput`](crate::input::CreateFlowDefinitionInput)
    pub fn builder() -> crate::input::create_flow_definition_input::Builder {
        crate::input::create_flow_definition_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateFlowDefinition {
    type Output = std::result::Result<
        crate::output::CreateFlowDefinitionOutput,
        smithy_http::result::ParseFailure<crate::error::CreateFlowDefinitionError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_create_flow_definition_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_create_flow_definition_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Returns information about a flow definition.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeFlowDefinition {
    _private: (),
}
impl DescribeFlowDefinition {
    /// Creates a new builder-style object to manufacture [`DescribeFlowDefinitionInput`](crate::input::DescribeFlowDefinitionInput)
    pub fn builder() -> crate::input::describe_flow_definition_input::Builder {
        crate::input::describe_flow_definition_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeFlowDefinition {
    type Output = std::result::Result<
        crate::output::DescribeFlowDefinitionOutput,
        smithy_http::result::ParseFailure<crate::error::DescribeFlowDefinitionError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_describe_flow_definition_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_describe_flow_definition_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Returns a page of flow definition summaries.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListFlowDefinitions {
    _private: (),
}
impl ListFlowDefinitions {
    /// Creates a new builder-style object to manufacture [`ListFlowDefinitionsInput`](crate::input::ListFlowDefinitionsInput)
    pub fn builder() -> crate::input::list_flow_definitions_input::Builder {
        crate::input::list_flow_definitions_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListFlowDefinitions {
    type Output = std::result::Result<
        crate::output::ListFlowDefinitionsOutput,
        smithy_http::result::ParseFailure<crate::error::ListFlowDefinitionsError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_list_flow_definitions_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_list_flow_definitions_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Deletes a flow definition.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteFlowDefinition {
    _private: (),
}
impl DeleteFlowDefinition {
    /// Creates a new builder-style object to manufacture [`DeleteFlowDefinitionInput`](crate::input::DeleteFlowDefinitionInput)
    pub fn builder() -> crate::input::delete_flow_definition_input::Builder {
        crate::input::delete_flow_definition_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteFlowDefinition {
    type Output = std::result::Result<
        crate::output::DeleteFlowDefinitionOutput,
        smithy_http::result::ParseFailure<crate::error::DeleteFlowDefinitionError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_delete_flow_definition_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_delete_flow_definition_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Creates the configuration an endpoint is deployed from: which models to host and on what.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateEndpointConfig {
    _private: (),
}
impl CreateEndpointConfig {
    /// Creates a new builder-style object to manufacture [`CreateEndpointConfigInput`](crate::input::CreateEndpointConfigInput)
    pub fn builder() -> crate::input::create_endpoint_config_input::Builder {
        crate::input::create_endpoint_config_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateEndpointConfig {
    type Output = std::result::Result<
        crate::output::CreateEndpointConfigOutput,
        smithy_http::result::ParseFailure<crate::error::CreateEndpointConfigError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_create_endpoint_config_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_create_endpoint_config_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Returns information about an endpoint configuration.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeEndpointConfig {
    _private: (),
}
impl DescribeEndpointConfig {
    /// Creates a new builder-style object to manufacture [`DescribeEndpointConfigInput`](crate::input::DescribeEndpointConfigInput)
    pub fn builder() -> crate::input::describe_endpoint_config_input::Builder {
        crate::input::describe_endpoint_config_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeEndpointConfig {
    type Output = std::result::Result<
        crate::output::DescribeEndpointConfigOutput,
        smithy_http::result::ParseFailure<crate::error::DescribeEndpointConfigError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_describe_endpoint_config_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_describe_endpoint_config_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Returns a page of endpoint configuration summaries.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListEndpointConfigs {
    _private: (),
}
impl ListEndpointConfigs {
    /// Creates a new builder-style object to manufacture [`ListEndpointConfigsInput`](crate::input::ListEndpointConfigsInput)
    pub fn builder() -> crate::input::list_endpoint_configs_input::Builder {
        crate::input::list_endpoint_configs_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListEndpointConfigs {
    type Output = std::result::Result<
        crate::output::ListEndpointConfigsOutput,
        smithy_http::result::ParseFailure<crate::error::ListEndpointConfigsError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_list_endpoint_configs_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_list_endpoint_configs_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Deletes an endpoint configuration. Endpoints already deployed from it are not affected.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteEndpointConfig {
    _private: (),
}
impl DeleteEndpointConfig {
    /// Creates a new builder-style object to manufacture [`DeleteEndpointConfigInput`](crate::input::DeleteEndpointConfigInput)
    pub fn builder() -> crate::input::delete_endpoint_config_input::Builder {
        crate::input::delete_endpoint_config_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteEndpointConfig {
    type Output = std::result::Result<
        crate::output::DeleteEndpointConfigOutput,
        smithy_http::result::ParseFailure<crate::error::DeleteEndpointConfigError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_delete_endpoint_config_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_delete_endpoint_config_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Deploys an endpoint from an endpoint configuration.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateEndpoint {
    _private: (),
}
impl CreateEndpoint {
    /// Creates a new builder-style object to manufacture [`CreateEndpointInput`](crate::input::CreateEndpointInput)
    pub fn builder() -> crate::input::create_endpoint_input::Builder {
        crate::input::create_endpoint_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateEndpoint {
    type Output = std::result::Result<
        crate::output::CreateEndpointOutput,
        smithy_http::result::ParseFailure<crate::error::CreateEndpointError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_create_endpoint_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_create_endpoint_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Returns information about an endpoint.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeEndpoint {
    _private: (),
}
impl DescribeEndpoint {
    /// Creates a new builder-style object to manufacture [`DescribeEndpointInput`](crate::input::DescribeEndpointInput)
    pub fn builder() -> crate::input::describe_endpoint_input::Builder {
        crate::input::describe_endpoint_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeEndpoint {
    type Output = std::result::Result<
        crate::output::DescribeEndpointOutput,
        smithy_http::result::ParseFailure<crate::error::DescribeEndpointError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_describe_endpoint_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_describe_endpoint_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Returns a page of endpoint summaries.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListEndpoints {
    _private: (),
}
impl ListEndpoints {
    /// Creates a new builder-style object to manufacture [`ListEndpointsInput`](crate::input::ListEndpointsInput)
    pub fn builder() -> crate::input::list_endpoints_input::Builder {
        crate::input::list_endpoints_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListEndpoints {
    type Output = std::result::Result<
        crate::output::ListEndpointsOutput,
        smithy_http::result::ParseFailure<crate::error::ListEndpointsError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_list_endpoints_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_list_endpoints_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Moves an endpoint to a new endpoint configuration without taking it out of service.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct UpdateEndpoint {
    _private: (),
}
impl UpdateEndpoint {
    /// Creates a new builder-style object to manufacture [`UpdateEndpointInput`](crate::input::UpdateEndpointInput)
    pub fn builder() -> crate::input::update_endpoint_input::Builder {
        crate::input::update_endpoint_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for UpdateEndpoint {
    type Output = std::result::Result<
        crate::output::UpdateEndpointOutput,
        smithy_http::result::ParseFailure<crate::error::UpdateEndpointError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_update_endpoint_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_update_endpoint_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}

/// Deletes an endpoint and the resources deployed for it.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteEndpoint {
    _private: (),
}
impl DeleteEndpoint {
    /// Creates a new builder-style object to manufacture [`DeleteEndpointInput`](crate::input::DeleteEndpointInput)
    pub fn builder() -> crate::input::delete_endpoint_input::Builder {
        crate::input::delete_endpoint_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteEndpoint {
    type Output = std::result::Result<
        crate::output::DeleteEndpointOutput,
        smithy_http::result::ParseFailure<crate::error::DeleteEndpointError>,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_delete_endpoint_error(response)
                .map_err(smithy_http::result::ParseFailure::ServiceError)
        } else {
            crate::operation_deser::parse_delete_endpoint_response(response)
                .map_err(|err| smithy_http::result::ParseFailure::DeserializeError(err.into()))
        }
    }
}
