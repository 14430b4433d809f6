/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// All possible error types for this service.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum Error {
    ResourceInUse(crate::error::ResourceInUse),
    ResourceLimitExceeded(crate::error::ResourceLimitExceeded),
    ResourceNotFound(crate::error::ResourceNotFound),
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ResourceInUse(inner) => std::fmt::Display::fmt(inner, f),
            Error::ResourceLimitExceeded(inner) => std::fmt::Display::fmt(inner, f),
            Error::ResourceNotFound(inner) => std::fmt::Display::fmt(inner, f),
            Error::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::AddTagsError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::AddTagsError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::AddTagsErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::DeleteTagsError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::DeleteTagsError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DeleteTagsErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::ListTagsError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::ListTagsError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListTagsErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::CreateNotebookInstanceError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::CreateNotebookInstanceError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateNotebookInstanceErrorKind::ResourceLimitExceeded(inner) => Error::ResourceLimitExceeded(inner),
                crate::error::CreateNotebookInstanceErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::DescribeNotebookInstanceError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeNotebookInstanceError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeNotebookInstanceErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::UpdateNotebookInstanceError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::UpdateNotebookInstanceError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::UpdateNotebookInstanceErrorKind::ResourceLimitExceeded(inner) => Error::ResourceLimitExceeded(inner),
                crate::error::UpdateNotebookInstanceErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::DeleteNotebookInstanceError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::DeleteNotebookInstanceError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DeleteNotebookInstanceErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::StartNotebookInstanceError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::StartNotebookInstanceError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::StartNotebookInstanceErrorKind::ResourceLimitExceeded(inner) => Error::ResourceLimitExceeded(inner),
                crate::error::StartNotebookInstanceErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::StopNotebookInstanceError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::StopNotebookInstanceError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::StopNotebookInstanceErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::ListNotebookInstancesError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::ListNotebookInstancesError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListNotebookInstancesErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::CreatePresignedNotebookInstanceUrlError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::CreatePresignedNotebookInstanceUrlError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreatePresignedNotebookInstanceUrlErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::CreateTrainingJobError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::CreateTrainingJobError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateTrainingJobErrorKind::ResourceInUse(inner) => Error::ResourceInUse(inner),
                crate::error::CreateTrainingJobErrorKind::ResourceLimitExceeded(inner) => Error::ResourceLimitExceeded(inner),
                crate::error::CreateTrainingJobErrorKind::ResourceNotFound(inner) => Error::ResourceNotFound(inner),
                crate::error::CreateTrainingJobErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::DescribeTrainingJobError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeTrainingJobError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeTrainingJobErrorKind::ResourceNotFound(inner) => Error::ResourceNotFound(inner),
                crate::error::DescribeTrainingJobErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::ListTrainingJobsError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::ListTrainingJobsError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListTrainingJobsErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::StopTrainingJobError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::StopTrainingJobError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::StopTrainingJobErrorKind::ResourceNotFound(inner) => Error::ResourceNotFound(inner),
                crate::error::StopTrainingJobErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::CreateModelError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::CreateModelError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateModelErrorKind::ResourceLimitExceeded(inner) => Error::ResourceLimitExceeded(inner),
                crate::error::CreateModelErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::DescribeModelError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeModelError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeModelErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::DeleteModelError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::DeleteModelError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DeleteModelErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::ListModelsError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::ListModelsError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListModelsErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::CreateTransformJobError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::CreateTransformJobError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateTransformJobErrorKind::ResourceInUse(inner) => Error::ResourceInUse(inner),
                crate::error::CreateTransformJobErrorKind::ResourceLimitExceeded(inner) => Error::ResourceLimitExceeded(inner),
                crate::error::CreateTransformJobErrorKind::ResourceNotFound(inner) => Error::ResourceNotFound(inner),
                crate::error::CreateTransformJobErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::DescribeTransformJobError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeTransformJobError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeTransformJobErrorKind::ResourceNotFound(inner) => Error::ResourceNotFound(inner),
                crate::error::DescribeTransformJobErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::ListTransformJobsError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::ListTransformJobsError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListTransformJobsErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::StopTransformJobError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::StopTransformJobError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::StopTransformJobErrorKind::ResourceNotFound(inner) => Error::ResourceNotFound(inner),
                crate::error::StopTransformJobErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::CreateHyperParameterTuningJobError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::CreateHyperParameterTuningJobError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateHyperParameterTuningJobErrorKind::ResourceInUse(inner) => Error::ResourceInUse(inner),
                crate::error::CreateHyperParameterTuningJobErrorKind::ResourceLimitExceeded(inner) => Error::ResourceLimitExceeded(inner),
                crate::error::CreateHyperParameterTuningJobErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::DescribeHyperParameterTuningJobError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeHyperParameterTuningJobError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeHyperParameterTuningJobErrorKind::ResourceNotFound(inner) => Error::ResourceNotFound(inner),
                crate::error::DescribeHyperParameterTuningJobErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::ListHyperParameterTuningJobsError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::ListHyperParameterTuningJobsError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListHyperParameterTuningJobsErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::StopHyperParameterTuningJobError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::StopHyperParameterTuningJobError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::StopHyperParameterTuningJobErrorKind::ResourceNotFound(inner) => Error::ResourceNotFound(inner),
                crate::error::StopHyperParameterTuningJobErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::ListTrainingJobsForHyperParameterTuningJobError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::ListTrainingJobsForHyperParameterTuningJobError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListTrainingJobsForHyperParameterTuningJobErrorKind::ResourceNotFound(inner) => Error::ResourceNotFound(inner),
                crate::error::ListTrainingJobsForHyperParameterTuningJobErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::CreateLabelingJobError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::CreateLabelingJobError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateLabelingJobErrorKind::ResourceInUse(inner) => Error::ResourceInUse(inner),
                crate::error::CreateLabelingJobErrorKind::ResourceLimitExceeded(inner) => Error::ResourceLimitExceeded(inner),
                crate::error::CreateLabelingJobErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::DescribeLabelingJobError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeLabelingJobError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeLabelingJobErrorKind::ResourceNotFound(inner) => Error::ResourceNotFound(inner),
                crate::error::DescribeLabelingJobErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::ListLabelingJobsError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::ListLabelingJobsError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListLabelingJobsErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::StopLabelingJobError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::StopLabelingJobError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::StopLabelingJobErrorKind::ResourceNotFound(inner) => Error::ResourceNotFound(inner),
                crate::error::StopLabelingJobErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::CreateFlowDefinitionError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::CreateFlowDefinitionError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateFlowDefinitionErrorKind::ResourceLimitExceeded(inner) => Error::ResourceLimitExceeded(inner),
                crate::error::CreateFlowDefinitionErrorKind::ResourceInUse(inner) => Error::ResourceInUse(inner),
                crate::error::CreateFlowDefinitionErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::DescribeFlowDefinitionError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeFlowDefinitionError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeFlowDefinitionErrorKind::ResourceNotFound(inner) => Error::ResourceNotFound(inner),
                crate::error::DescribeFlowDefinitionErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::ListFlowDefinitionsError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::ListFlowDefinitionsError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListFlowDefinitionsErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::DeleteFlowDefinitionError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::DeleteFlowDefinitionError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DeleteFlowDefinitionErrorKind::ResourceNotFound(inner) => Error::ResourceNotFound(inner),
                crate::error::DeleteFlowDefinitionErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::CreateEndpointConfigError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::CreateEndpointConfigError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateEndpointConfigErrorKind::ResourceLimitExceeded(inner) => Error::ResourceLimitExceeded(inner),
                crate::error::CreateEndpointConfigErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::DescribeEndpointConfigError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeEndpointConfigError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeEndpointConfigErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::ListEndpointConfigsError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::ListEndpointConfigsError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListEndpointConfigsErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::DeleteEndpointConfigError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::DeleteEndpointConfigError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DeleteEndpointConfigErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::CreateEndpointError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::CreateEndpointError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateEndpointErrorKind::ResourceLimitExceeded(inner) => Error::ResourceLimitExceeded(inner),
                crate::error::CreateEndpointErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::DescribeEndpointError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeEndpointError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeEndpointErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::ListEndpointsError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::ListEndpointsError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListEndpointsErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::UpdateEndpointError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::UpdateEndpointError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::UpdateEndpointErrorKind::ResourceLimitExceeded(inner) => Error::ResourceLimitExceeded(inner),
                crate::error::UpdateEndpointErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl From<smithy_http::result::SdkError<crate::error::DeleteEndpointError>> for Error {
    fn from(err: smithy_http::result::SdkError<crate::error::DeleteEndpointError>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DeleteEndpointErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl std::error::Error for Error {}
