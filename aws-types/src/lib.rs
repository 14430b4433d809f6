/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Types shared by every AWS service crate.

pub mod build_metadata;
pub mod credentials;
pub mod os_shim_internal;
pub mod region;

pub use credentials::Credentials;
