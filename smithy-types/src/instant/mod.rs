/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use std::time::{SystemTime, UNIX_EPOCH};

/// A point in time, stored as seconds since the Unix epoch plus a sub-second component
///
/// awsJson protocols put timestamps on the wire as (possibly fractional) epoch seconds.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: (fraction * 1_000_000_000_f64) as u32,
        }
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds,
            subsecond_nanos,
        }
    }

    /// Builds an `Instant` from epoch seconds as sent by the service
    ///
    /// Sub-second precision is truncated to milliseconds, which is the most any AWS JSON
    /// protocol carries and keeps `0.1`-style floats from becoming `99999999` nanos.
    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor() as i64;
        let millis = ((epoch_seconds - epoch_seconds.floor()) * 1_000_f64).round() as u32;
        if millis >= 1_000 {
            return Instant::from_epoch_seconds(seconds + 1);
        }
        Instant::from_secs_and_nanos(seconds, millis * 1_000_000)
    }

    /// Converts a `SystemTime`, clamping times before the epoch to the epoch
    pub fn from_system_time(system_time: SystemTime) -> Self {
        let duration = system_time.duration_since(UNIX_EPOCH).unwrap_or_default();
        Instant {
            seconds: duration.as_secs() as i64,
            subsecond_nanos: duration.subsec_nanos(),
        }
    }

    fn to_chrono(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.seconds, self.subsecond_nanos).single()
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / 1_000_000_000_f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn subsec_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => match self.to_chrono() {
                Some(datetime) => datetime.to_rfc3339_opts(SecondsFormat::AutoSi, true),
                // outside chrono's representable range
                None => self.fmt(Format::EpochSeconds),
            },
            Format::EpochSeconds => {
                if self.subsecond_nanos == 0 {
                    return format!("{}", self.seconds);
                }
                // nanos always count forward from `seconds`, so negative instants borrow a second
                let (sign, whole, nanos) = if self.seconds < 0 {
                    ("-", -(self.seconds + 1), 1_000_000_000 - self.subsecond_nanos)
                } else {
                    ("", self.seconds, self.subsecond_nanos)
                };
                let fraction = format!("{:0>9}", nanos);
                format!("{}{}.{}", sign, whole, fraction.trim_end_matches('0'))
            }
        }
    }
}

impl From<SystemTime> for Instant {
    fn from(time: SystemTime) -> Self {
        Instant::from_system_time(time)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// RFC-3339, eg. `2021-02-01T12:00:00Z`
    DateTime,
    /// Seconds since the epoch with an optional fractional component
    EpochSeconds,
}

#[cfg(test)]
mod test {
    use crate::instant::Format;
    use crate::Instant;
    use proptest::proptest;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn format_epoch_seconds() {
        assert_eq!(Instant::from_epoch_seconds(1576540098).fmt(Format::EpochSeconds), "1576540098");
        assert_eq!(
            Instant::from_secs_and_nanos(1576540098, 520_000_000).fmt(Format::EpochSeconds),
            "1576540098.52"
        );
    }

    #[test]
    fn format_negative_epoch_seconds() {
        assert_eq!(Instant::from_epoch_seconds(-2).fmt(Format::EpochSeconds), "-2");
        assert_eq!(
            Instant::from_secs_and_nanos(-2, 500_000_000).fmt(Format::EpochSeconds),
            "-1.5"
        );
        assert_eq!(
            Instant::from_secs_and_nanos(-1, 250_000_000).fmt(Format::EpochSeconds),
            "-0.75"
        );
        assert_eq!(
            Instant::from_secs_and_nanos(-1, 999_000_000).fmt(Format::EpochSeconds),
            "-0.001"
        );
    }

    #[test]
    fn format_date_time() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18Z");
        let instant = Instant::from_secs_and_nanos(1576540098, 520_000_000);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18.520Z");
    }

    #[test]
    fn from_f64_keeps_millisecond_precision() {
        let instant = Instant::from_f64(1576540098.52);
        assert_eq!(instant.epoch_seconds(), 1576540098);
        assert_eq!(instant.subsec_nanos(), 520_000_000);
        assert_eq!(Instant::from_f64(-1.5), Instant::from_secs_and_nanos(-2, 500_000_000));
    }

    #[test]
    fn from_system_time() {
        let time = UNIX_EPOCH + Duration::new(1576540098, 1_000);
        let instant = Instant::from(time);
        assert_eq!(instant, Instant::from_secs_and_nanos(1576540098, 1_000));
        assert!(instant.has_nanos());
    }

    proptest! {
        #[test]
        fn epoch_seconds_text_parses_back(seconds in -10_000_000_000i64..10_000_000_000i64, millis in 0u32..1000) {
            let instant = Instant::from_secs_and_nanos(seconds, millis * 1_000_000);
            let text = instant.fmt(Format::EpochSeconds);
            let parsed: f64 = text.parse().expect("formatted epoch seconds are valid floats");
            assert_eq!(Instant::from_f64(parsed), instant);
        }
    }
}
