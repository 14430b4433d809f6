/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Amazon SageMaker Service
//!
//! Management API for notebook instances, training, tuning, batch transform and labeling jobs,
//! human review workflows, models, hosting endpoints and resource tags.
//!
//! ```rust,no_run
//! # async fn docs() {
//! let client = sagemaker::Client::from_env();
//! let jobs = client.list_training_jobs().max_results(10).send().await;
//! # }
//! ```

#![allow(clippy::module_inception)]
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::large_enum_variant)]
#![allow(clippy::wrong_self_convention)]
#![allow(clippy::should_implement_trait)]

#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod error;
mod error_meta;
pub mod input;
pub mod model;
pub mod operation;
mod operation_deser;
pub mod output;
mod serde_util;

pub static PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "client")]
pub use client::Client;
pub use config::Config;
pub use error_meta::Error;

pub use aws_auth::Credentials;
pub use aws_types::region::Region;
pub use smithy_http::result::SdkError;
pub use smithy_types::Instant;

static API_METADATA: aws_http::user_agent::ApiMetadata =
    aws_http::user_agent::ApiMetadata::new("sagemaker", PKG_VERSION);
