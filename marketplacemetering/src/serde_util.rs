/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Body (de)serialization shared by every operation

use smithy_http::body::SdkBody;
use smithy_http::operation::BuildError;

pub(crate) fn serialize_body<T: serde::Serialize>(input: &T) -> Result<SdkBody, BuildError> {
    serde_json::to_vec(input)
        .map(SdkBody::from)
        .map_err(|err| BuildError::SerializationError(err.into()))
}

/// An empty body is read as `{}`
pub(crate) fn deserialize_body<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_slice(b"{}")
    } else {
        serde_json::from_slice(body)
    }
}

/// Timestamps on the wire are seconds since the epoch, fractional when they carry sub-second precision
pub(crate) mod epoch_seconds {
    use serde::{Deserialize, Deserializer, Serializer};
    use smithy_types::Instant;

    pub fn serialize<S>(value: &Option<Instant>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(instant) if instant.has_nanos() => {
                serializer.serialize_f64(instant.epoch_fractional_seconds())
            }
            Some(instant) => serializer.serialize_i64(instant.epoch_seconds()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Instant>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<f64>::deserialize(deserializer)?.map(Instant::from_f64))
    }
}

#[cfg(test)]
mod test {
    use super::deserialize_body;
    use smithy_types::Instant;

    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
    struct Stamped {
        #[serde(default, with = "super::epoch_seconds", skip_serializing_if = "Option::is_none")]
        at: Option<Instant>,
    }

    #[test]
    fn whole_seconds_serialize_as_integers() {
        let stamped = Stamped {
            at: Some(Instant::from_epoch_seconds(1_576_540_098)),
        };
        assert_eq!(serde_json::to_string(&stamped).unwrap(), r#"{"at":1576540098}"#);
    }

    #[test]
    fn fractional_seconds_round_trip() {
        let stamped: Stamped = serde_json::from_str(r#"{"at":1576540098.52}"#).unwrap();
        assert_eq!(
            stamped.at,
            Some(Instant::from_secs_and_nanos(1_576_540_098, 520_000_000))
        );
        assert_eq!(serde_json::to_string(&stamped).unwrap(), r#"{"at":1576540098.52}"#);
    }

    #[test]
    fn missing_and_empty() {
        let stamped: Stamped = deserialize_body(b"").unwrap();
        assert_eq!(stamped.at, None);
        assert_eq!(serde_json::to_string(&stamped).unwrap(), "{}");
        let stamped: Stamped = deserialize_body(br#"{"at": null}"#).unwrap();
        assert_eq!(stamped.at, None);
    }
}
