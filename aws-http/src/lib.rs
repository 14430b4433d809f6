/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! HTTP behaviors shared by AWS services: the user agent and awsJson error parsing.

pub mod json_errors;
pub mod user_agent;
