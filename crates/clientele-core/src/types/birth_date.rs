//! Birth date type with textual and ISO forms.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A calendar date entered as `DD/MM/YYYY` and transmitted as `YYYY-MM-DD`.
///
/// Parsing is strict: two-digit day and month, four-digit year, and the
/// date must exist (`31/02/2020` is rejected).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Parse the `DD/MM/YYYY` textual form.
    pub fn parse_dmy(text: &str) -> Result<Self, Error> {
        let invalid = |reason: &str| -> Error {
            InvalidInputError::Date {
                value: text.to_string(),
                reason: reason.to_string(),
            }
            .into()
        };

        let bytes = text.as_bytes();
        let shape_ok = bytes.len() == 10
            && bytes[2] == b'/'
            && bytes[5] == b'/'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
        if !shape_ok {
            return Err(invalid("expected DD/MM/YYYY"));
        }

        // Shape check guarantees ASCII digits in these ranges.
        let number = |range: std::ops::Range<usize>| -> u32 {
            text[range]
                .bytes()
                .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
        };
        let day = number(0..2);
        let month = number(3..5);
        let year = number(6..10) as i32;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| invalid("no such calendar date"))
    }

    /// Parse the ISO `YYYY-MM-DD` form.
    pub fn parse_iso(text: &str) -> Result<Self, Error> {
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(Self)
            .map_err(|e| {
                InvalidInputError::Date {
                    value: text.to_string(),
                    reason: e.to_string(),
                }
                .into()
            })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the `DD/MM/YYYY` form used for display and editing.
    pub fn to_dmy(&self) -> String {
        format!(
            "{:02}/{:02}/{:04}",
            self.0.day(),
            self.0.month(),
            self.0.year()
        )
    }

    /// Returns the ISO calendar form used on the wire.
    pub fn to_iso(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_dmy())
    }
}

impl FromStr for BirthDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_dmy(s)
    }
}
