/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Assertions for requests produced by service crates.

use http::Request;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProtocolTestFailure {
    #[error("invalid header value for key `{key}`: expected `{expected}`, found `{found}`")]
    InvalidHeader {
        key: String,
        expected: String,
        found: String,
    },
    #[error("missing required header: `{expected}`")]
    MissingHeader { expected: String },
    #[error("forbidden header present: `{forbidden}`")]
    ForbiddenHeader { forbidden: String },
    #[error("uri mismatch: expected `{expected}`, found `{found}`")]
    UriMismatch { expected: String, found: String },
    #[error("body did not match. hint:\n{hint}\nexpected: {expected}\nfound: {found}")]
    BodyDidNotMatch {
        expected: String,
        found: String,
        hint: String,
    },
    #[error("expected body to be valid {expected} but instead: {found}")]
    InvalidBodyFormat { expected: String, found: String },
}

/// Media types with format-aware body comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaType {
    /// Compared structurally, so key order and whitespace do not matter
    Json,
    /// Compared byte for byte
    Other(String),
}

impl<T: AsRef<str>> From<T> for MediaType {
    fn from(inp: T) -> Self {
        let inp = inp.as_ref();
        if inp.contains("json") {
            MediaType::Json
        } else {
            MediaType::Other(inp.to_string())
        }
    }
}

/// Check that the protocol test succeeded & print the pretty error if it did not
#[track_caller]
pub fn assert_ok(inp: Result<(), ProtocolTestFailure>) {
    if let Err(e) = inp {
        panic!("Protocol test failed: {}", e);
    }
}

pub fn validate_headers<B>(
    request: &Request<B>,
    expected_headers: &[(&str, &str)],
) -> Result<(), ProtocolTestFailure> {
    for (key, expected_value) in expected_headers {
        if !request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::MissingHeader {
                expected: key.to_string(),
            });
        }
        // multiple values of the same header are compared as a comma-delimited list
        let actual_value: String = request
            .headers()
            .get_all(*key)
            .iter()
            .map(|hv| String::from_utf8_lossy(hv.as_bytes()).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        if *expected_value != actual_value {
            return Err(ProtocolTestFailure::InvalidHeader {
                key: key.to_string(),
                expected: expected_value.to_string(),
                found: actual_value,
            });
        }
    }
    Ok(())
}

pub fn forbid_headers<B>(
    request: &Request<B>,
    forbidden_headers: &[&str],
) -> Result<(), ProtocolTestFailure> {
    for key in forbidden_headers {
        if request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::ForbiddenHeader {
                forbidden: key.to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_uri<B>(request: &Request<B>, expected: &str) -> Result<(), ProtocolTestFailure> {
    let found = request.uri().to_string();
    if found != expected {
        return Err(ProtocolTestFailure::UriMismatch {
            expected: expected.to_string(),
            found,
        });
    }
    Ok(())
}

pub fn validate_body<T: AsRef<[u8]>>(
    actual_body: T,
    expected_body: &str,
    media_type: MediaType,
) -> Result<(), ProtocolTestFailure> {
    let actual_body = actual_body.as_ref();
    match media_type {
        MediaType::Json => {
            let actual: Value = serde_json::from_slice(actual_body).map_err(|e| {
                ProtocolTestFailure::InvalidBodyFormat {
                    expected: "json".to_owned(),
                    found: format!("{}: {}", e, String::from_utf8_lossy(actual_body)),
                }
            })?;
            let expected: Value = serde_json::from_str(expected_body).map_err(|e| {
                ProtocolTestFailure::InvalidBodyFormat {
                    expected: "json".to_owned(),
                    found: format!("expected body is not json ({}): {}", e, expected_body),
                }
            })?;
            if actual != expected {
                return Err(ProtocolTestFailure::BodyDidNotMatch {
                    expected: expected.to_string(),
                    found: actual.to_string(),
                    hint: json_hint(&expected, &actual, "$"),
                });
            }
            Ok(())
        }
        MediaType::Other(media_type) => {
            if actual_body != expected_body.as_bytes() {
                return Err(ProtocolTestFailure::BodyDidNotMatch {
                    expected: expected_body.to_string(),
                    found: String::from_utf8_lossy(actual_body).to_string(),
                    hint: format!("media type: {}", media_type),
                });
            }
            Ok(())
        }
    }
}

/// Points at the first location where two JSON documents differ
fn json_hint(expected: &Value, actual: &Value, path: &str) -> String {
    match (expected, actual) {
        (Value::Object(expected), Value::Object(actual)) => {
            for (key, expected_value) in expected {
                let child = format!("{}.{}", path, key);
                match actual.get(key) {
                    None => return format!("{} is missing", child),
                    Some(actual_value) if actual_value != expected_value => {
                        return json_hint(expected_value, actual_value, &child)
                    }
                    _ => {}
                }
            }
            match actual.keys().find(|key| !expected.contains_key(*key)) {
                Some(key) => format!("{}.{} was not expected", path, key),
                None => format!("{} differs", path),
            }
        }
        (Value::Array(expected), Value::Array(actual)) if expected.len() == actual.len() => {
            for (idx, (e, a)) in expected.iter().zip(actual.iter()).enumerate() {
                if e != a {
                    return json_hint(e, a, &format!("{}[{}]", path, idx));
                }
            }
            format!("{} differs", path)
        }
        _ => format!("{}: expected {}, found {}", path, expected, actual),
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        forbid_headers, validate_body, validate_headers, validate_uri, MediaType,
        ProtocolTestFailure,
    };
    use http::Request;

    #[test]
    fn test_validate_headers() {
        let request = Request::builder()
            .header("X-Amz-Target", "SageMaker.ListTags")
            .header("X-Foo", "foo")
            .header("X-Foo", "bar")
            .body(())
            .unwrap();
        validate_headers(&request, &[("X-Amz-Target", "SageMaker.ListTags")])
            .expect("header present");
        validate_headers(&request, &[("X-Foo", "foo, bar")]).expect("multi-value header");
        assert_eq!(
            validate_headers(&request, &[("content-type", "application/x-amz-json-1.1")]),
            Err(ProtocolTestFailure::MissingHeader {
                expected: "content-type".to_string()
            })
        );
        assert!(forbid_headers(&request, &["x-foo"]).is_err());
        forbid_headers(&request, &["authorization"]).expect("not present");
    }

    #[test]
    fn test_validate_uri() {
        let request = Request::builder()
            .uri("https://api.sagemaker.us-east-1.amazonaws.com/")
            .body(())
            .unwrap();
        validate_uri(&request, "https://api.sagemaker.us-east-1.amazonaws.com/").expect("same uri");
        assert!(validate_uri(&request, "https://example.com/").is_err());
    }

    #[test]
    fn json_bodies_compare_structurally() {
        validate_body(
            r#"{"ProductCode":"abc","UsageRecords":[{"Quantity":1}]}"#,
            r#"{ "UsageRecords": [ { "Quantity": 1 } ], "ProductCode": "abc" }"#,
            MediaType::from("application/x-amz-json-1.1"),
        )
        .expect("bodies are equivalent");
    }

    #[test]
    fn json_mismatches_have_hints() {
        let err = validate_body(
            r#"{"UsageRecords":[{"Quantity":2}]}"#,
            r#"{"UsageRecords":[{"Quantity":1}]}"#,
            MediaType::Json,
        )
        .expect_err("bodies differ");
        match err {
            ProtocolTestFailure::BodyDidNotMatch { hint, .. } => {
                assert_eq!(hint, "$.UsageRecords[0].Quantity: expected 1, found 2")
            }
            other => panic!("unexpected failure: {}", other),
        }
    }

    #[test]
    fn invalid_json_is_reported() {
        let err = validate_body("not json", "{}", MediaType::Json).expect_err("invalid");
        assert!(matches!(err, ProtocolTestFailure::InvalidBodyFormat { .. }));
    }

    #[test]
    fn other_media_types_compare_bytes() {
        validate_body("a=b", "a=b", MediaType::from("text/plain")).expect("identical");
        assert!(validate_body("a=b", "a=c", MediaType::Other("text/plain".into())).is_err());
    }
}
