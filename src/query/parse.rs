//! Time and date parsing for query arguments
//!
//! Only ever run over query text, never over note text.

use chrono::{NaiveDate, NaiveTime, Timelike};
use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Result, StampError};

/// Surface forms accepted for a time of day, most specific first.
/// Input is normalized (periods and whitespace removed, uppercased) before matching.
const TIME_FORMATS: [&str; 4] = ["%H:%M:%S", "%H:%M", "%I:%M:%S%p", "%I:%M%p"];

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{4}-\d{2}-\d{2}|\d{4}/\d{2}/\d{2}").expect("date pattern compiles")
});

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d{1,2}:\d{2}(?::\d{2})?(?:\.?\s?(?:[ap]\.m\b\.?|[ap]m\b))?")
        .expect("time pattern compiles")
});

/// A time of day plus whether the user gave seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub time: NaiveTime,
    /// When false, comparisons happen at minute granularity
    pub seconds_explicit: bool,
}

impl TimeOfDay {
    pub fn new(time: NaiveTime, seconds_explicit: bool) -> Self {
        Self {
            time,
            seconds_explicit,
        }
    }

    /// Project a stored time onto this query's granularity
    pub fn key(&self, time: NaiveTime) -> NaiveTime {
        if self.seconds_explicit {
            time
        } else {
            truncate_to_minute(time)
        }
    }

    pub fn matches(&self, time: NaiveTime) -> bool {
        self.key(time) == self.key(self.time)
    }
}

/// What a single query endpoint names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeQuery {
    Empty,
    Date(NaiveDate),
    Time(TimeOfDay),
    DateTime(NaiveDate, TimeOfDay),
}

impl TimeQuery {
    fn from_parts(date: Option<NaiveDate>, time: Option<TimeOfDay>) -> Self {
        match (date, time) {
            (None, None) => TimeQuery::Empty,
            (Some(d), None) => TimeQuery::Date(d),
            (None, Some(t)) => TimeQuery::Time(t),
            (Some(d), Some(t)) => TimeQuery::DateTime(d, t),
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            TimeQuery::Date(d) | TimeQuery::DateTime(d, _) => Some(*d),
            _ => None,
        }
    }

    pub fn time(&self) -> Option<TimeOfDay> {
        match self {
            TimeQuery::Time(t) | TimeQuery::DateTime(_, t) => Some(*t),
            _ => None,
        }
    }
}

/// "from X to Y"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeQuery {
    pub start: TimeQuery,
    pub end: TimeQuery,
}

/// A full `times` argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    Single(TimeQuery),
    Range(RangeQuery),
}

/// Split on `" to "`, falling back to `" - "`
pub fn split_range(text: &str) -> (&str, Option<&str>) {
    if let Some((from, to)) = text.split_once(" to ") {
        return (from, Some(to));
    }
    if let Some((from, to)) = text.split_once(" - ") {
        return (from, Some(to));
    }
    (text, None)
}

/// Parse a `times` argument into a point or range query
pub fn parse_query(text: &str) -> Result<Query> {
    match split_range(text) {
        (from, Some(to)) => Ok(Query::Range(RangeQuery {
            start: parse_input(from)?,
            end: parse_input(to)?,
        })),
        (from, None) => Ok(Query::Single(parse_input(from)?)),
    }
}

/// Pull at most one date and one time out of free text
pub fn parse_input(text: &str) -> Result<TimeQuery> {
    let date = match DATE_RE.find(text) {
        Some(m) => {
            let normalized = m.as_str().replace('/', "-");
            let date = NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                .map_err(|_| StampError::InvalidDateFormat(m.as_str().to_string()))?;
            Some(date)
        }
        None => None,
    };

    let time = match TIME_RE.find(text) {
        Some(m) => {
            let raw = m.as_str();
            let time = time_from_any(raw)?;
            Some(TimeOfDay::new(time, raw.matches(':').count() == 2))
        }
        None => None,
    };

    tracing::debug!(input = text, ?date, ?time, "parsed query endpoint");
    Ok(TimeQuery::from_parts(date, time))
}

/// Parse any accepted time surface form (24h or 12h, seconds optional)
pub fn time_from_any(text: &str) -> Result<NaiveTime> {
    let normalized: String = text
        .chars()
        .filter(|c| *c != '.' && !c.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase();

    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(&normalized, fmt).ok())
        .ok_or_else(|| StampError::InvalidTimeFormat(text.trim().to_string()))
}

/// Strict `HH:MM:SS`, else `HH:MM` at minute granularity
pub fn parse_time(text: &str) -> Result<TimeOfDay> {
    let text = text.trim();
    if let Ok(time) = NaiveTime::parse_from_str(text, "%H:%M:%S") {
        return Ok(TimeOfDay::new(time, true));
    }
    NaiveTime::parse_from_str(text, "%H:%M")
        .map(|time| TimeOfDay::new(time, false))
        .map_err(|_| StampError::InvalidTimeFormat(text.to_string()))
}

/// Normalize any accepted time form to `HH:MM:SS`
#[cfg(test)]
pub fn to_24h(text: &str) -> Result<String> {
    Ok(time_from_any(text)?.format("%H:%M:%S").to_string())
}

pub fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}
