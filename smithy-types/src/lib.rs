/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Shared types used by generated service crates and the runtime.

pub mod instant;

pub use crate::instant::Instant;

use std::fmt;
use std::fmt::{Display, Formatter};

/// Generic error metadata returned by an AWS service
///
/// Every operation error retains one of these, whether or not the service returned an error
/// code that maps to a modeled error shape.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct Error {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

/// Builder for [`Error`].
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct Builder {
    inner: Error,
}

impl Builder {
    pub fn message(&mut self, message: impl Into<String>) -> &mut Self {
        self.inner.message = Some(message.into());
        self
    }

    pub fn code(&mut self, code: impl Into<String>) -> &mut Self {
        self.inner.code = Some(code.into());
        self
    }

    pub fn request_id(&mut self, request_id: impl Into<String>) -> &mut Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    pub fn build(&mut self) -> Error {
        std::mem::take(&mut self.inner)
    }
}

impl Error {
    /// The error code returned by the service, with any namespace stripped
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn builder() -> Builder {
        Builder::default()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(request_id) = &self.request_id {
            fmt.field("request_id", request_id);
        }
        fmt.finish()
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use crate::Error;

    #[test]
    fn builder_populates_all_fields() {
        let err = Error::builder()
            .code("ResourceNotFound")
            .message("Could not find training job")
            .request_id("abc-123")
            .build();
        assert_eq!(err.code(), Some("ResourceNotFound"));
        assert_eq!(err.message(), Some("Could not find training job"));
        assert_eq!(err.request_id(), Some("abc-123"));
    }

    #[test]
    fn display_only_includes_present_fields() {
        let err = Error::builder().code("ThrottlingException").build();
        assert_eq!(format!("{}", err), "Error { code: \"ThrottlingException\" }");
        assert_eq!(format!("{}", Error::default()), "Error");
    }
}
