/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Error parsing for the awsJson 1.0 and 1.1 protocols.

use bytes::Bytes;
use http::header::HeaderName;
use http::Response;
use serde::Deserialize;
use smithy_types::Error as GenericError;

const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";
const REQUEST_ID_HEADER: &str = "x-amzn-requestid";

#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(rename = "__type", alias = "code")]
    code: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
}

/// Strip the namespace and any trailing URI from an error code
///
/// Services may return `aws.protocoltests.restjson#FooError:http://internal.amazon.com/...`
/// where the modeled code is `FooError`.
pub fn sanitize_error_code(error_code: &str) -> &str {
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

fn header<'a>(response: &'a Response<Bytes>, name: &'static str) -> Option<&'a str> {
    response
        .headers()
        .get(HeaderName::from_static(name))
        .and_then(|value| value.to_str().ok())
}

/// Extract the error code, message and request id from an error response
///
/// The `x-amzn-ErrorType` header takes precedence over the `__type` body field. An empty body
/// is treated as `{}`.
pub fn parse_generic_error(response: &Response<Bytes>) -> Result<GenericError, serde_json::Error> {
    let body = response.body();
    let parsed: ErrorBody = if body.iter().all(u8::is_ascii_whitespace) {
        ErrorBody::default()
    } else {
        serde_json::from_slice(body)?
    };
    let code = header(response, ERROR_TYPE_HEADER)
        .map(str::to_string)
        .or(parsed.code);

    let mut err_builder = GenericError::builder();
    if let Some(code) = code {
        err_builder.code(sanitize_error_code(&code));
    }
    if let Some(message) = parsed.message {
        err_builder.message(message);
    }
    if let Some(request_id) = header(response, REQUEST_ID_HEADER) {
        err_builder.request_id(request_id);
    }
    Ok(err_builder.build())
}

#[cfg(test)]
mod test {
    use crate::json_errors::{parse_generic_error, sanitize_error_code};
    use bytes::Bytes;

    fn response(body: &'static str) -> http::Response<Bytes> {
        http::Response::builder()
            .status(400)
            .header("x-amzn-requestid", "1234")
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap()
    }

    #[test]
    fn error_type_from_body() {
        let err = parse_generic_error(&response(
            r#"{"__type":"com.amazonaws.sagemaker#ResourceNotFound","Message":"Could not find training job"}"#,
        ))
        .expect("valid error");
        assert_eq!(err.code(), Some("ResourceNotFound"));
        assert_eq!(err.message(), Some("Could not find training job"));
        assert_eq!(err.request_id(), Some("1234"));
    }

    #[test]
    fn header_takes_precedence() {
        let mut resp = response(r#"{"__type":"Wrong","message":"throttled"}"#);
        resp.headers_mut().insert(
            "x-amzn-errortype",
            "ThrottlingException:http://internal.amazon.com/coral/com.amazon.coral.availability/"
                .parse()
                .unwrap(),
        );
        let err = parse_generic_error(&resp).expect("valid error");
        assert_eq!(err.code(), Some("ThrottlingException"));
        assert_eq!(err.message(), Some("throttled"));
    }

    #[test]
    fn empty_body() {
        let err = parse_generic_error(&response("")).expect("empty bodies are allowed");
        assert_eq!(err.code(), None);
        assert_eq!(err.request_id(), Some("1234"));
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(parse_generic_error(&response("<html>")).is_err());
    }

    #[test]
    fn sanitize_namespace_and_uri() {
        assert_eq!(sanitize_error_code("aws.protocoltests.restjson#FooError"), "FooError");
        assert_eq!(
            sanitize_error_code("FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"),
            "FooError"
        );
        assert_eq!(
            sanitize_error_code(
                "aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"
            ),
            "FooError"
        );
        assert_eq!(sanitize_error_code("FooError"), "FooError");
    }
}
