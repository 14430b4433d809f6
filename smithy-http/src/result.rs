/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

type BoxError = Box<dyn Error + Send + Sync>;

/// A parsed operation output along with the raw HTTP response it came from
#[derive(Debug)]
pub struct SdkSuccess<O> {
    pub raw: http::Response<Bytes>,
    pub parsed: O,
}

/// Failure of an operation, classified by where in the round trip it happened
///
/// Responses are always loaded into memory before parsing, so `raw` carries the full body.
#[derive(Debug)]
pub enum SdkError<E> {
    /// The request failed during construction. It was not dispatched over the network.
    ConstructionFailure(BoxError),

    /// The request failed during dispatch. An HTTP response was not received. The request MAY
    /// have been sent.
    DispatchFailure(BoxError),

    /// A response was received but its body could not be read or deserialized
    ResponseError { raw: http::Response<Bytes>, err: BoxError },

    /// An error response was received from the service
    ServiceError { raw: http::Response<Bytes>, err: E },
}

/// Why a response could not be turned into an operation output
#[derive(Debug)]
pub enum ParseFailure<E> {
    /// The service returned an error response
    ServiceError(E),

    /// A successful response carried a body that could not be deserialized
    DeserializeError(BoxError),
}

impl<E> From<E> for ParseFailure<E> {
    fn from(err: E) -> Self {
        ParseFailure::ServiceError(err)
    }
}

impl<E> SdkError<E> {
    /// The raw response, if one was received
    pub fn raw_response(&self) -> Option<&http::Response<Bytes>> {
        match self {
            SdkError::ResponseError { raw, .. } | SdkError::ServiceError { raw, .. } => Some(raw),
            _ => None,
        }
    }

    /// The modeled service error, if the service returned one
    pub fn service_error(&self) -> Option<&E> {
        match self {
            SdkError::ServiceError { err, .. } => Some(err),
            _ => None,
        }
    }

    pub fn into_service_error(self) -> Option<E> {
        match self {
            SdkError::ServiceError { err, .. } => Some(err),
            _ => None,
        }
    }
}

impl<E> Display for SdkError<E>
where
    E: Error,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::ConstructionFailure(err) => write!(f, "failed to construct request: {}", err),
            SdkError::DispatchFailure(err) => write!(f, "dispatch failure: {}", err),
            SdkError::ResponseError { raw, err } => write!(
                f,
                "failed to read response (status {}): {}",
                raw.status(),
                err
            ),
            SdkError::ServiceError { raw, err } => {
                write!(f, "service error (status {}): {}", raw.status(), err)
            }
        }
    }
}

impl<E> Error for SdkError<E>
where
    E: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SdkError::ConstructionFailure(err)
            | SdkError::DispatchFailure(err)
            | SdkError::ResponseError { err, .. } => Some(err.as_ref()),
            SdkError::ServiceError { err, .. } => Some(err),
        }
    }
}
