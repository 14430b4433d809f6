/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub fn parse_add_tags_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::AddTagsOutput, crate::error::AddTagsError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::AddTagsError::unhandled)?;
    Err(crate::error::AddTagsError::generic(generic))
}

pub fn parse_add_tags_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::AddTagsOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_delete_tags_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteTagsOutput, crate::error::DeleteTagsError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::DeleteTagsError::unhandled)?;
    Err(crate::error::DeleteTagsError::generic(generic))
}

pub fn parse_delete_tags_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteTagsOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_list_tags_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListTagsOutput, crate::error::ListTagsError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::ListTagsError::unhandled)?;
    Err(crate::error::ListTagsError::generic(generic))
}

pub fn parse_list_tags_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListTagsOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_create_notebook_instance_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateNotebookInstanceOutput, crate::error::CreateNotebookInstanceError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::CreateNotebookInstanceError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::CreateNotebookInstanceError::generic(generic)),
    };
    Err(match error_code {
        "ResourceLimitExceeded" => crate::error::CreateNotebookInstanceError::new(
            crate::error::CreateNotebookInstanceErrorKind::ResourceLimitExceeded(
                crate::error::ResourceLimitExceeded::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        _ => crate::error::CreateNotebookInstanceError::generic(generic),
    })
}

pub fn parse_create_notebook_instance_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateNotebookInstanceOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_describe_notebook_instance_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeNotebookInstanceOutput, crate::error::DescribeNotebookInstanceError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::DescribeNotebookInstanceError::unhandled)?;
    Err(crate::error::DescribeNotebookInstanceError::generic(generic))
}

pub fn parse_describe_notebook_instance_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeNotebookInstanceOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_update_notebook_instance_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateNotebookInstanceOutput, crate::error::UpdateNotebookInstanceError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::UpdateNotebookInstanceError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::UpdateNotebookInstanceError::generic(generic)),
    };
    Err(match error_code {
        "ResourceLimitExceeded" => crate::error::UpdateNotebookInstanceError::new(
            crate::error::UpdateNotebookInstanceErrorKind::ResourceLimitExceeded(
                crate::error::ResourceLimitExceeded::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        _ => crate::error::UpdateNotebookInstanceError::generic(generic),
    })
}

pub fn parse_update_notebook_instance_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateNotebookInstanceOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_delete_notebook_instance_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteNotebookInstanceOutput, crate::error::DeleteNotebookInstanceError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::DeleteNotebookInstanceError::unhandled)?;
    Err(crate::error::DeleteNotebookInstanceError::generic(generic))
}

pub fn parse_delete_notebook_instance_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteNotebookInstanceOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_start_notebook_instance_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::StartNotebookInstanceOutput, crate::error::StartNotebookInstanceError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::StartNotebookInstanceError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::StartNotebookInstanceError::generic(generic)),
    };
    Err(match error_code {
        "ResourceLimitExceeded" => crate::error::StartNotebookInstanceError::new(
            crate::error::StartNotebookInstanceErrorKind::ResourceLimitExceeded(
                crate::error::ResourceLimitExceeded::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        _ => crate::error::StartNotebookInstanceError::generic(generic),
    })
}

pub fn parse_start_notebook_instance_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::StartNotebookInstanceOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_stop_notebook_instance_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::StopNotebookInstanceOutput, crate::error::StopNotebookInstanceError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::StopNotebookInstanceError::unhandled)?;
    Err(crate::error::StopNotebookInstanceError::generic(generic))
}

pub fn parse_stop_notebook_instance_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::StopNotebookInstanceOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_list_notebook_instances_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListNotebookInstancesOutput, crate::error::ListNotebookInstancesError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::ListNotebookInstancesError::unhandled)?;
    Err(crate::error::ListNotebookInstancesError::generic(generic))
}

pub fn parse_list_notebook_instances_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListNotebookInstancesOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_create_presigned_notebook_instance_url_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreatePresignedNotebookInstanceUrlOutput, crate::error::CreatePresignedNotebookInstanceUrlError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::CreatePresignedNotebookInstanceUrlError::unhandled)?;
    Err(crate::error::CreatePresignedNotebookInstanceUrlError::generic(generic))
}

pub fn parse_create_presigned_notebook_instance_url_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreatePresignedNotebookInstanceUrlOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_create_training_job_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateTrainingJobOutput, crate::error::CreateTrainingJobError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::CreateTrainingJobError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::CreateTrainingJobError::generic(generic)),
    };
    Err(match error_code {
        "ResourceInUse" => crate::error::CreateTrainingJobError::new(
            crate::error::CreateTrainingJobErrorKind::ResourceInUse(
                crate::error::ResourceInUse::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        "ResourceLimitExceeded" => crate::error::CreateTrainingJobError::new(
            crate::error::CreateTrainingJobErrorKind::ResourceLimitExceeded(
                crate::error::ResourceLimitExceeded::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        "ResourceNotFound" => crate::error::CreateTrainingJobError::new(
            crate::error::CreateTrainingJobErrorKind::ResourceNotFound(
                crate::error::ResourceNotFound::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        _ => crate::error::CreateTrainingJobError::generic(generic),
    })
}

pub fn parse_create_training_job_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateTrainingJobOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_describe_training_job_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeTrainingJobOutput, crate::error::DescribeTrainingJobError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::DescribeTrainingJobError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DescribeTrainingJobError::generic(generic)),
    };
    Err(match error_code {
        "ResourceNotFound" => crate::error::DescribeTrainingJobError::new(
            crate::error::DescribeTrainingJobErrorKind::ResourceNotFound(
                crate::error::ResourceNotFound::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        _ => crate::error::DescribeTrainingJobError::generic(generic),
    })
}

pub fn parse_describe_training_job_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeTrainingJobOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_list_training_jobs_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListTrainingJobsOutput, crate::error::ListTrainingJobsError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::ListTrainingJobsError::unhandled)?;
    Err(crate::error::ListTrainingJobsError::generic(generic))
}

pub fn parse_list_training_jobs_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListTrainingJobsOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_stop_training_job_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::StopTrainingJobOutput, crate::error::StopTrainingJobError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::StopTrainingJobError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::StopTrainingJobError::generic(generic)),
    };
    Err(match error_code {
        "ResourceNotFound" => crate::error::StopTrainingJobError::new(
            crate::error::StopTrainingJobErrorKind::ResourceNotFound(
                crate::error::ResourceNotFound::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        _ => crate::error::StopTrainingJobError::generic(generic),
    })
}

pub fn parse_stop_training_job_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::StopTrainingJobOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_create_model_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateModelOutput, crate::error::CreateModelError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::CreateModelError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::CreateModelError::generic(generic)),
    };
    Err(match error_code {
        "ResourceLimitExceeded" => crate::error::CreateModelError::new(
            crate::error::CreateModelErrorKind::ResourceLimitExceeded(
                crate::error::ResourceLimitExceeded::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        _ => crate::error::CreateModelError::generic(generic),
    })
}

pub fn parse_create_model_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateModelOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_describe_model_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeModelOutput, crate::error::DescribeModelError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::DescribeModelError::unhandled)?;
    Err(crate::error::DescribeModelError::generic(generic))
}

pub fn parse_describe_model_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeModelOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_delete_model_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteModelOutput, crate::error::DeleteModelError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::DeleteModelError::unhandled)?;
    Err(crate::error::DeleteModelError::generic(generic))
}

pub fn parse_delete_model_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteModelOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_list_models_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListModelsOutput, crate::error::ListModelsError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::ListModelsError::unhandled)?;
    Err(crate::error::ListModelsError::generic(generic))
}

pub fn parse_list_models_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListModelsOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_create_transform_job_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateTransformJobOutput, crate::error::CreateTransformJobError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::CreateTransformJobError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::CreateTransformJobError::generic(generic)),
    };
    Err(match error_code {
        "ResourceInUse" => crate::error::CreateTransformJobError::new(
            crate::error::CreateTransformJobErrorKind::ResourceInUse(
                crate::error::ResourceInUse::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        "ResourceLimitExceeded" => crate::error::CreateTransformJobError::new(
            crate::error::CreateTransformJobErrorKind::ResourceLimitExceeded(
                crate::error::ResourceLimitExceeded::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        "ResourceNotFound" => crate::error::CreateTransformJobError::new(
            crate::error::CreateTransformJobErrorKind::ResourceNotFound(
                crate::error::ResourceNotFound::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        _ => crate::error::CreateTransformJobError::generic(generic),
    })
}

pub fn parse_create_transform_job_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateTransformJobOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_describe_transform_job_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeTransformJobOutput, crate::error::DescribeTransformJobError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::DescribeTransformJobError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DescribeTransformJobError::generic(generic)),
    };
    Err(match error_code {
        "ResourceNotFound" => crate::error::DescribeTransformJobError::new(
            crate::error::DescribeTransformJobErrorKind::ResourceNotFound(
                crate::error::ResourceNotFound::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        _ => crate::error::DescribeTransformJobError::generic(generic),
    })
}

pub fn parse_describe_transform_job_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeTransformJobOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_list_transform_jobs_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListTransformJobsOutput, crate::error::ListTransformJobsError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::ListTransformJobsError::unhandled)?;
    Err(crate::error::ListTransformJobsError::generic(generic))
}

pub fn parse_list_transform_jobs_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListTransformJobsOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_stop_transform_job_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::StopTransformJobOutput, crate::error::StopTransformJobError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::StopTransformJobError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::StopTransformJobError::generic(generic)),
    };
    Err(match error_code {
        "ResourceNotFound" => crate::error::StopTransformJobError::new(
            crate::error::StopTransformJobErrorKind::ResourceNotFound(
                crate::error::ResourceNotFound::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        _ => crate::error::StopTransformJobError::generic(generic),
    })
}

pub fn parse_stop_transform_job_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::StopTransformJobOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_create_hyper_parameter_tuning_job_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateHyperParameterTuningJobOutput, crate::error::CreateHyperParameterTuningJobError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::CreateHyperParameterTuningJobError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::CreateHyperParameterTuningJobError::generic(generic)),
    };
    Err(match error_code {
        "ResourceInUse" => crate::error::CreateHyperParameterTuningJobError::new(
            crate::error::CreateHyperParameterTuningJobErrorKind::ResourceInUse(
                crate::error::ResourceInUse::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        "ResourceLimitExceeded" => crate::error::CreateHyperParameterTuningJobError::new(
            crate::error::CreateHyperParameterTuningJobErrorKind::ResourceLimitExceeded(
                crate::error::ResourceLimitExceeded::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        _ => crate::error::CreateHyperParameterTuningJobError::generic(generic),
    })
}

pub fn parse_create_hyper_parameter_tuning_job_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateHyperParameterTuningJobOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_describe_hyper_parameter_tuning_job_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeHyperParameterTuningJobOutput, crate::error::DescribeHyperParameterTuningJobError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::DescribeHyperParameterTuningJobError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DescribeHyperParameterTuningJobError::generic(generic)),
    };
    Err(match error_code {
        "ResourceNotFound" => crate::error::DescribeHyperParameterTuningJobError::new(
            crate::error::DescribeHyperParameterTuningJobErrorKind::ResourceNotFound(
                crate::error::ResourceNotFound::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        _ => crate::error::DescribeHyperParameterTuningJobError::generic(generic),
    })
}

pub fn parse_describe_hyper_parameter_tuning_job_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeHyperParameterTuningJobOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_list_hyper_parameter_tuning_jobs_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListHyperParameterTuningJobsOutput, crate::error::ListHyperParameterTuningJobsError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::ListHyperParameterTuningJobsError::unhandled)?;
    Err(crate::error::ListHyperParameterTuningJobsError::generic(generic))
}

pub fn parse_list_hyper_parameter_tuning_jobs_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListHyperParameterTuningJobsOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_stop_hyper_parameter_tuning_job_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::StopHyperParameterTuningJobOutput, crate::error::StopHyperParameterTuningJobError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::StopHyperParameterTuningJobError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::StopHyperParameterTuningJobError::generic(generic)),
    };
    Err(match error_code {
        "ResourceNotFound" => crate::error::StopHyperParameterTuningJobError::new(
            crate::error::StopHyperParameterTuningJobErrorKind::ResourceNotFound(
                crate::error::ResourceNotFound::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        _ => crate::error::StopHyperParameterTuningJobError::generic(generic),
    })
}

pub fn parse_stop_hyper_parameter_tuning_job_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::StopHyperParameterTuningJobOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_list_training_jobs_for_hyper_parameter_tuning_job_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListTrainingJobsForHyperParameterTuningJobOutput, crate::error::ListTrainingJobsForHyperParameterTuningJobError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::ListTrainingJobsForHyperParameterTuningJobError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::ListTrainingJobsForHyperParameterTuningJobError::generic(generic)),
    };
    Err(match error_code {
        "ResourceNotFound" => crate::error::ListTrainingJobsForHyperParameterTuningJobError::new(
            crate::error::ListTrainingJobsForHyperParameterTuningJobErrorKind::ResourceNotFound(
                crate::error::ResourceNotFound::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        _ => crate::error::ListTrainingJobsForHyperParameterTuningJobError::generic(generic),
    })
}

pub fn parse_list_training_jobs_for_hyper_parameter_tuning_job_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListTrainingJobsForHyperParameterTuningJobOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_create_labeling_job_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateLabelingJobOutput, crate::error::CreateLabelingJobError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::CreateLabelingJobError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::CreateLabelingJobError::generic(generic)),
    };
    Err(match error_code {
        "ResourceInUse" => crate::error::CreateLabelingJobError::new(
            crate::error::CreateLabelingJobErrorKind::ResourceInUse(
                crate::error::ResourceInUse::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        "ResourceLimitExceeded" => crate::error::CreateLabelingJobError::new(
            crate::error::CreateLabelingJobErrorKind::ResourceLimitExceeded(
                crate::error::ResourceLimitExceeded::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        _ => crate::error::CreateLabelingJobError::generic(generic),
    })
}

pub fn parse_create_labeling_job_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateLabelingJobOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_describe_labeling_job_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeLabelingJobOutput, crate::error::DescribeLabelingJobError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::DescribeLabelingJobError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DescribeLabelingJobError::generic(generic)),
    };
    Err(match error_code {
        "ResourceNotFound" => crate::error::DescribeLabelingJobError::new(
            crate::error::DescribeLabelingJobErrorKind::ResourceNotFound(
                crate::error::ResourceNotFound::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        _ => crate::error::DescribeLabelingJobError::generic(generic),
    })
}

pub fn parse_describe_labeling_job_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeLabelingJobOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_list_labeling_jobs_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListLabelingJobsOutput, crate::error::ListLabelingJobsError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::ListLabelingJobsError::unhandled)?;
    Err(crate::error::ListLabelingJobsError::generic(generic))
}

pub fn parse_list_labeling_jobs_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListLabelingJobsOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_stop_labeling_job_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::StopLabelingJobOutput, crate::error::StopLabelingJobError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::StopLabelingJobError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::StopLabelingJobError::generic(generic)),
    };
    Err(match error_code {
        "ResourceNotFound" => crate::error::StopLabelingJobError::new(
            crate::error::StopLabelingJobErrorKind::ResourceNotFound(
                crate::error::ResourceNotFound::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        _ => crate::error::StopLabelingJobError::generic(generic),
    })
}

pub fn parse_stop_labeling_job_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::StopLabelingJobOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_create_flow_definition_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateFlowDefinitionOutput, crate::error::CreateFlowDefinitionError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::CreateFlowDefinitionError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::CreateFlowDefinitionError::generic(generic)),
    };
    Err(match error_code {
        "ResourceLimitExceeded" => crate::error::CreateFlowDefinitionError::new(
            crate::error::CreateFlowDefinitionErrorKind::ResourceLimitExceeded(
                crate::error::ResourceLimitExceeded::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        "ResourceInUse" => crate::error::CreateFlowDefinitionError::new(
            crate::error::CreateFlowDefinitionErrorKind::ResourceInUse(
                crate::error::ResourceInUse::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        _ => crate::error::CreateFlowDefinitionError::generic(generic),
    })
}

pub fn parse_create_flow_definition_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateFlowDefinitionOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_describe_flow_definition_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeFlowDefinitionOutput, crate::error::DescribeFlowDefinitionError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::DescribeFlowDefinitionError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DescribeFlowDefinitionError::generic(generic)),
    };
    Err(match error_code {
        "ResourceNotFound" => crate::error::DescribeFlowDefinitionError::new(
            crate::error::DescribeFlowDefinitionErrorKind::ResourceNotFound(
                crate::error::ResourceNotFound::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        _ => crate::error::DescribeFlowDefinitionError::generic(generic),
    })
}

pub fn parse_describe_flow_definition_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeFlowDefinitionOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_list_flow_definitions_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListFlowDefinitionsOutput, crate::error::ListFlowDefinitionsError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::ListFlowDefinitionsError::unhandled)?;
    Err(crate::error::ListFlowDefinitionsError::generic(generic))
}

pub fn parse_list_flow_definitions_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListFlowDefinitionsOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_delete_flow_definition_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteFlowDefinitionOutput, crate::error::DeleteFlowDefinitionError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::DeleteFlowDefinitionError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DeleteFlowDefinitionError::generic(generic)),
    };
    Err(match error_code {
        "ResourceNotFound" => crate::error::DeleteFlowDefinitionError::new(
            crate::error::DeleteFlowDefinitionErrorKind::ResourceNotFound(
                crate::error::ResourceNotFound::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        _ => crate::error::DeleteFlowDefinitionError::generic(generic),
    })
}

pub fn parse_delete_flow_definition_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteFlowDefinitionOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_create_endpoint_config_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateEndpointConfigOutput, crate::error::CreateEndpointConfigError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::CreateEndpointConfigError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::CreateEndpointConfigError::generic(generic)),
    };
    Err(match error_code {
        "ResourceLimitExceeded" => crate::error::CreateEndpointConfigError::new(
            crate::error::CreateEndpointConfigErrorKind::ResourceLimitExceeded(
                crate::error::ResourceLimitExceeded::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        _ => crate::error::CreateEndpointConfigError::generic(generic),
    })
}

pub fn parse_create_endpoint_config_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateEndpointConfigOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_describe_endpoint_config_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeEndpointConfigOutput, crate::error::DescribeEndpointConfigError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::DescribeEndpointConfigError::unhandled)?;
    Err(crate::error::DescribeEndpointConfigError::generic(generic))
}

pub fn parse_describe_endpoint_config_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeEndpointConfigOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_list_endpoint_configs_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListEndpointConfigsOutput, crate::error::ListEndpointConfigsError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::ListEndpointConfigsError::unhandled)?;
    Err(crate::error::ListEndpointConfigsError::generic(generic))
}

pub fn parse_list_endpoint_configs_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListEndpointConfigsOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_delete_endpoint_config_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteEndpointConfigOutput, crate::error::DeleteEndpointConfigError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::DeleteEndpointConfigError::unhandled)?;
    Err(crate::error::DeleteEndpointConfigError::generic(generic))
}

pub fn parse_delete_endpoint_config_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteEndpointConfigOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_create_endpoint_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateEndpointOutput, crate::error::CreateEndpointError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::CreateEndpointError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::CreateEndpointError::generic(generic)),
    };
    Err(match error_code {
        "ResourceLimitExceeded" => crate::error::CreateEndpointError::new(
            crate::error::CreateEndpointErrorKind::ResourceLimitExceeded(
                crate::error::ResourceLimitExceeded::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        _ => crate::error::CreateEndpointError::generic(generic),
    })
}

pub fn parse_create_endpoint_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateEndpointOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_describe_endpoint_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeEndpointOutput, crate::error::DescribeEndpointError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::DescribeEndpointError::unhandled)?;
    Err(crate::error::DescribeEndpointError::generic(generic))
}

pub fn parse_describe_endpoint_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeEndpointOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_list_endpoints_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListEndpointsOutput, crate::error::ListEndpointsError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::ListEndpointsError::unhandled)?;
    Err(crate::error::ListEndpointsError::generic(generic))
}

pub fn parse_list_endpoints_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListEndpointsOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_update_endpoint_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateEndpointOutput, crate::error::UpdateEndpointError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::UpdateEndpointError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::UpdateEndpointError::generic(generic)),
    };
    Err(match error_code {
        "ResourceLimitExceeded" => crate::error::UpdateEndpointError::new(
            crate::error::UpdateEndpointErrorKind::ResourceLimitExceeded(
                crate::error::ResourceLimitExceeded::builder()
                    .set_message(generic.message().map(|m| m.to_string()))
                    .build(),
            ),
            generic,
        ),
        _ => crate::error::UpdateEndpointError::generic(generic),
    })
}

pub fn parse_update_endpoint_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateEndpointOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}

pub fn parse_delete_endpoint_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteEndpointOutput, crate::error::DeleteEndpointError> {
    let generic = aws_http::json_errors::parse_generic_error(response)
        .map_err(crate::error::DeleteEndpointError::unhandled)?;
    Err(crate::error::DeleteEndpointError::generic(generic))
}

pub fn parse_delete_endpoint_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteEndpointOutput, serde_json::Error> {
    crate::serde_util::deserialize_body(response.body())
}
