/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;

/// Turns an HTTP response into an operation result
///
/// Parsing is synchronous. The caller reads the body to the end and hands over the loaded
/// response, unless `parse_unloaded` claims the response first.
pub trait ParseHttpResponse<B> {
    type Output;

    /// Parse without touching the body. Returning `None` asks the caller to load the body and
    /// call `parse_loaded`.
    fn parse_unloaded(&self, response: &mut http::Response<B>) -> Option<Self::Output>;

    fn parse_loaded(&self, response: &http::Response<Bytes>) -> Self::Output;
}

/// Parser for operations whose responses are always read fully into memory
///
/// Every awsJson operation falls in this category. A blanket impl provides
/// [`ParseHttpResponse`] for all implementors.
pub trait ParseStrictResponse {
    type Output;
    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output;
}

impl<B, T> ParseHttpResponse<B> for T
where
    T: ParseStrictResponse,
{
    type Output = T::Output;

    fn parse_unloaded(&self, _response: &mut http::Response<B>) -> Option<Self::Output> {
        None
    }

    fn parse_loaded(&self, response: &http::Response<Bytes>) -> Self::Output {
        self.parse(response)
    }
}

#[cfg(test)]
mod test {
    use crate::response::{ParseHttpResponse, ParseStrictResponse};
    use bytes::Bytes;

    struct StatusParser;

    impl ParseStrictResponse for StatusParser {
        type Output = Result<u16, String>;

        fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
            match response.status().as_u16() {
                status @ 200..=299 => Ok(status),
                _ => Err(String::from_utf8_lossy(response.body()).to_string()),
            }
        }
    }

    #[test]
    fn strict_parsers_never_parse_unloaded() {
        let mut response = http::Response::new(());
        assert!(ParseHttpResponse::<()>::parse_unloaded(&StatusParser, &mut response).is_none());
        let loaded = http::Response::builder()
            .status(404)
            .body(Bytes::from_static(b"missing"))
            .expect("valid response");
        assert_eq!(
            ParseHttpResponse::<()>::parse_loaded(&StatusParser, &loaded),
            Err("missing".to_string())
        );
    }
}
