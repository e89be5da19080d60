/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::error::Error;
use std::fmt;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

#[derive(Debug)]
pub(super) enum DateTimeParseErrorKind {
    /// The given date-time string was invalid.
    Invalid(&'static str),
    /// Failed to parse an integer or fraction inside the given date-time string.
    IntParseError,
    /// The `time` crate rejected the input.
    Rfc3339(time::error::Parse),
}

/// Error returned when date-time parsing fails.
#[derive(Debug)]
pub struct DateTimeParseError {
    kind: DateTimeParseErrorKind,
}

impl Error for DateTimeParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            DateTimeParseErrorKind::Rfc3339(source) => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for DateTimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use DateTimeParseErrorKind::*;
        match &self.kind {
            Invalid(msg) => write!(f, "invalid date-time: {}", msg),
            IntParseError => write!(f, "failed to parse int"),
            Rfc3339(_) => write!(f, "invalid RFC-3339 date-time"),
        }
    }
}

impl From<DateTimeParseErrorKind> for DateTimeParseError {
    fn from(kind: DateTimeParseErrorKind) -> Self {
        Self { kind }
    }
}

/// Error returned when date-time formatting fails.
#[derive(Debug)]
pub struct DateTimeFormatError {
    message: &'static str,
}

impl Error for DateTimeFormatError {}

impl fmt::Display for DateTimeFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to format date-time: {}", self.message)
    }
}

/// Writes `nanos` as a fraction of a second with trailing zeros removed. Writes nothing for zero.
fn push_fraction(out: &mut String, nanos: u32) {
    if nanos == 0 {
        return;
    }
    let digits = format!("{:09}", nanos);
    out.push('.');
    out.push_str(digits.trim_end_matches('0'));
}

/// Parses up to nine fractional digits into nanoseconds.
fn parse_fraction(digits: &str) -> Result<u32, DateTimeParseError> {
    if digits.is_empty() || digits.len() > 9 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateTimeParseErrorKind::Invalid("malformed fractional seconds").into());
    }
    let value: u32 = digits
        .parse()
        .map_err(|_| DateTimeParseErrorKind::IntParseError)?;
    Ok(value * 10_u32.pow(9 - digits.len() as u32))
}

pub(crate) mod epoch_seconds {
    use super::{parse_fraction, push_fraction, DateTimeParseError, DateTimeParseErrorKind};
    use crate::DateTime;

    /// Formats a `DateTime` into the Smithy epoch seconds date-time format.
    pub(crate) fn format(date_time: &DateTime) -> String {
        let mut out = String::new();
        if date_time.secs() < 0 && date_time.has_subsec_nanos() {
            out.push('-');
            out.push_str(&(date_time.secs() + 1).unsigned_abs().to_string());
            push_fraction(
                &mut out,
                super::NANOS_PER_SECOND - date_time.subsec_nanos(),
            );
        } else {
            out.push_str(&date_time.secs().to_string());
            push_fraction(&mut out, date_time.subsec_nanos());
        }
        out
    }

    /// Parses the Smithy epoch seconds date-time format into a `DateTime`.
    pub(crate) fn parse(value: &str) -> Result<DateTime, DateTimeParseError> {
        let negative = value.starts_with('-');
        let mut parts = value.splitn(2, '.');
        let (whole, fraction) = (parts.next().unwrap_or_default(), parts.next());
        if whole.is_empty() || whole == "-" {
            return Err(DateTimeParseErrorKind::Invalid("missing whole seconds").into());
        }
        let secs: i64 = whole
            .parse()
            .map_err(|_| DateTimeParseErrorKind::IntParseError)?;
        let nanos = match fraction {
            Some(digits) => parse_fraction(digits)?,
            None => 0,
        };
        if negative && nanos > 0 {
            let secs = secs
                .checked_sub(1)
                .ok_or(DateTimeParseErrorKind::Invalid("epoch seconds out of range"))?;
            Ok(DateTime::from_secs_and_nanos(
                secs,
                super::NANOS_PER_SECOND - nanos,
            ))
        } else {
            Ok(DateTime::from_secs_and_nanos(secs, nanos))
        }
    }
}

pub(crate) mod rfc3339 {
    use super::{push_fraction, DateTimeFormatError, DateTimeParseError, DateTimeParseErrorKind};
    use crate::DateTime;
    use time::format_description::well_known::Rfc3339;
    use time::OffsetDateTime;

    /// Parses an RFC-3339 date-time, applying any offset so the result is in UTC.
    pub(crate) fn parse(s: &str) -> Result<DateTime, DateTimeParseError> {
        let parsed = OffsetDateTime::parse(s, &Rfc3339).map_err(DateTimeParseErrorKind::Rfc3339)?;
        Ok(DateTime::from_secs_and_nanos(
            parsed.unix_timestamp(),
            parsed.nanosecond(),
        ))
    }

    /// Formats a `DateTime` as RFC-3339 in UTC, trimming trailing zeros from the fraction.
    pub(crate) fn format(date_time: &DateTime) -> Result<String, DateTimeFormatError> {
        let out_of_range = || DateTimeFormatError {
            message: "RFC-3339 only supports years from 0001 to 9999",
        };
        let utc =
            OffsetDateTime::from_unix_timestamp(date_time.secs()).map_err(|_| out_of_range())?;
        if !(1..=9999).contains(&utc.year()) {
            return Err(out_of_range());
        }
        let mut out = format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            utc.year(),
            u8::from(utc.month()),
            utc.day(),
            utc.hour(),
            utc.minute(),
            utc.second()
        );
        push_fraction(&mut out, date_time.subsec_nanos());
        out.push('Z');
        Ok(out)
    }
}

#[cfg(test)]
mod test {
    use super::{epoch_seconds, rfc3339};
    use crate::DateTime;
    use proptest::prelude::*;

    #[test]
    fn epoch_seconds_handles_negative_fractions() {
        let date_time = DateTime::from_secs_and_nanos(-2, 750_000_000);
        assert_eq!(epoch_seconds::format(&date_time), "-1.25");
        assert_eq!(epoch_seconds::parse("-1.25").unwrap(), date_time);
        assert_eq!(
            epoch_seconds::parse("-0.5").unwrap(),
            DateTime::from_secs_and_nanos(-1, 500_000_000)
        );
    }

    #[test]
    fn epoch_seconds_rejects_garbage() {
        assert!(epoch_seconds::parse("").is_err());
        assert!(epoch_seconds::parse("-").is_err());
        assert!(epoch_seconds::parse("12.").is_err());
        assert!(epoch_seconds::parse("12.0000000001").is_err());
        assert!(epoch_seconds::parse("twelve").is_err());
    }

    #[test]
    fn rfc3339_rejects_out_of_range_years() {
        assert!(rfc3339::format(&DateTime::from_secs(-62_135_596_801)).is_err());
        assert_eq!(
            rfc3339::format(&DateTime::from_secs(-62_135_596_800)).unwrap(),
            "0001-01-01T00:00:00Z"
        );
    }

    #[test]
    fn rfc3339_parses_fractions() {
        assert_eq!(
            rfc3339::parse("2020-07-10T19:25:44.123Z").unwrap(),
            DateTime::from_secs_and_nanos(1594409144, 123_000_000)
        );
        assert!(rfc3339::parse("2020-07-10 19:25:44Z").is_err());
    }

    proptest! {
        #[test]
        fn rfc3339_survives_format_and_parse(secs in -62_135_596_800_i64..253_402_300_799, nanos in 0..1_000_000_000_u32) {
            let date_time = DateTime::from_secs_and_nanos(secs, nanos);
            let formatted = rfc3339::format(&date_time).unwrap();
            prop_assert_eq!(rfc3339::parse(&formatted).unwrap(), date_time);
        }

        #[test]
        fn epoch_seconds_survives_format_and_parse(secs in proptest::num::i64::ANY, nanos in 0..1_000_000_000_u32) {
            let date_time = DateTime::from_secs_and_nanos(secs, nanos);
            prop_assert_eq!(epoch_seconds::parse(&epoch_seconds::format(&date_time)).unwrap(), date_time);
        }
    }
}
