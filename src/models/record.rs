use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use csv::StringRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StampError};
use crate::query::parse;

/// On-disk date layout
pub const DATE_FMT: &str = "%Y-%m-%d";

/// Number of fields in a page row: index, date, time, text
pub const FIELD_COUNT: usize = 4;

/// Textual representation of the time field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockFormat {
    /// `08:30:00.PM`
    #[serde(rename = "12h")]
    H12,
    /// `20:30:00`
    #[default]
    #[serde(rename = "24h")]
    H24,
}

impl ClockFormat {
    fn pattern(self) -> &'static str {
        match self {
            ClockFormat::H12 => "%I:%M:%S.%p",
            ClockFormat::H24 => "%H:%M:%S",
        }
    }

    /// Render a time of day in this format
    pub fn format_time(self, time: NaiveTime) -> String {
        time.format(self.pattern()).to_string()
    }

    /// Guess the format a stored time field was written in
    pub fn detect(text: &str) -> Self {
        let upper = text.to_ascii_uppercase();
        if upper.ends_with("AM") || upper.ends_with("PM") {
            ClockFormat::H12
        } else {
            ClockFormat::H24
        }
    }
}

impl FromStr for ClockFormat {
    type Err = StampError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "12h" => Ok(ClockFormat::H12),
            "24h" => Ok(ClockFormat::H24),
            _ => Err(StampError::UnsupportedClockFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ClockFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockFormat::H12 => write!(f, "12h"),
            ClockFormat::H24 => write!(f, "24h"),
        }
    }
}

/// A single timestamped note on a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based position on the page
    pub index: u64,
    pub date: NaiveDate,
    /// Time of day, whole seconds
    pub time: NaiveTime,
    /// How `time` is written to disk
    pub clock: ClockFormat,
    /// Single-line note text
    pub text: String,
}

impl Record {
    /// Build a record, flattening the text to one line and dropping sub-second precision
    pub fn new(index: u64, at: NaiveDateTime, clock: ClockFormat, text: &str) -> Self {
        let time = at.time();
        Self {
            index,
            date: at.date(),
            time: time.with_nanosecond(0).unwrap_or(time),
            clock,
            text: single_line(text),
        }
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    pub fn date_text(&self) -> String {
        self.date.format(DATE_FMT).to_string()
    }

    pub fn time_text(&self) -> String {
        self.clock.format_time(self.time)
    }

    /// Fields in on-disk order
    pub fn to_row(&self) -> [String; FIELD_COUNT] {
        [
            self.index.to_string(),
            self.date_text(),
            self.time_text(),
            self.text.clone(),
        ]
    }

    /// Parse one CSV row; `line` is only used for error reporting
    pub fn from_row(row: &StringRecord, line: u64) -> Result<Self> {
        let malformed = |reason: String| StampError::MalformedRecord { line, reason };

        if row.len() != FIELD_COUNT {
            return Err(malformed(format!(
                "expected {} fields, found {}",
                FIELD_COUNT,
                row.len()
            )));
        }

        let index = row[0]
            .trim()
            .parse::<u64>()
            .map_err(|_| malformed(format!("bad index '{}'", &row[0])))?;
        let date = NaiveDate::parse_from_str(row[1].trim(), DATE_FMT)
            .map_err(|_| malformed(format!("bad date '{}'", &row[1])))?;
        let time = parse::time_from_any(&row[2])
            .map_err(|_| malformed(format!("bad time '{}'", &row[2])))?;

        Ok(Self {
            index,
            date,
            time,
            clock: ClockFormat::detect(row[2].trim()),
            text: row[3].to_string(),
        })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {} {}  {}",
            self.index,
            self.date_text(),
            self.time_text(),
            self.text
        )
    }
}

/// Replace line terminators with spaces
pub fn single_line(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\r', '\n'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_new_flattens_newlines() {
        let record = Record::new(1, at(8, 0, 0), ClockFormat::H24, "one\ntwo\r\nthree\rfour");
        assert_eq!(record.text, "one two three four");
    }

    #[test]
    fn test_new_drops_subseconds() {
        let precise = at(8, 0, 5).with_nanosecond(123_456_789).unwrap();
        let record = Record::new(1, precise, ClockFormat::H24, "x");
        assert_eq!(record.time_text(), "08:00:05");
    }

    #[test]
    fn test_time_text_12h() {
        let record = Record::new(1, at(20, 30, 0), ClockFormat::H12, "x");
        assert_eq!(record.time_text(), "08:30:00.PM");
        let morning = Record::new(2, at(0, 15, 9), ClockFormat::H12, "x");
        assert_eq!(morning.time_text(), "12:15:09.AM");
    }

    #[test]
    fn test_from_row_24h() {
        let row = StringRecord::from(vec!["3", "2025-01-01", "08:30:47", "hello, world"]);
        let record = Record::from_row(&row, 3).unwrap();
        assert_eq!(record.index, 3);
        assert_eq!(record.time, NaiveTime::from_hms_opt(8, 30, 47).unwrap());
        assert_eq!(record.clock, ClockFormat::H24);
        assert_eq!(record.text, "hello, world");
    }

    #[test]
    fn test_from_row_12h() {
        let row = StringRecord::from(vec!["1", "2025-01-01", "08:30:00.PM", "evening"]);
        let record = Record::from_row(&row, 1).unwrap();
        assert_eq!(record.time, NaiveTime::from_hms_opt(20, 30, 0).unwrap());
        assert_eq!(record.clock, ClockFormat::H12);
        assert_eq!(record.to_row()[2], "08:30:00.PM");
    }

    #[test]
    fn test_from_row_wrong_field_count() {
        let row = StringRecord::from(vec!["2025-01-01", "08:30:00", "old layout"]);
        let err = Record::from_row(&row, 4).unwrap_err();
        match err {
            StampError::MalformedRecord { line, reason } => {
                assert_eq!(line, 4);
                assert!(reason.contains("expected 4 fields"));
            }
            other => panic!("Expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_from_row_bad_time() {
        let row = StringRecord::from(vec!["1", "2025-01-01", "lunch", "x"]);
        assert!(matches!(
            Record::from_row(&row, 1),
            Err(StampError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_clock_format_from_str() {
        assert_eq!("12h".parse::<ClockFormat>().unwrap(), ClockFormat::H12);
        assert_eq!(" 24H ".parse::<ClockFormat>().unwrap(), ClockFormat::H24);
        assert!(matches!(
            "13h".parse::<ClockFormat>(),
            Err(StampError::UnsupportedClockFormat(_))
        ));
    }

    #[test]
    fn test_display() {
        let record = Record::new(12, at(9, 5, 0), ClockFormat::H24, "coffee");
        assert_eq!(record.to_string(), "12  2025-01-01 09:05:00  coffee");
    }
}
