//! Time/date query resolution over a page's records
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::parse::{Query, RangeQuery, TimeOfDay, TimeQuery};
use crate::models::Record;

/// Outcome of a `times` query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Matching records in stored order (possibly empty)
    Matches(Vec<Record>),
    /// No unique exact match: the closest records on either side
    Nearest {
        before: Option<Record>,
        after: Option<Record>,
    },
}

/// Resolve a parsed query; `today` stands in for any missing date
pub fn resolve(query: &Query, records: &[Record], today: NaiveDate) -> Resolution {
    match query {
        Query::Range(range) => Resolution::Matches(resolve_range(range, records, today)),
        Query::Single(point) => match point.time() {
            Some(tod) => resolve_instant(point.date().unwrap_or(today), tod, records),
            None => {
                let date = point.date().unwrap_or(today);
                Resolution::Matches(
                    records
                        .iter()
                        .filter(|r| r.date == date)
                        .cloned()
                        .collect(),
                )
            }
        },
    }
}

fn resolve_range(range: &RangeQuery, records: &[Record], today: NaiveDate) -> Vec<Record> {
    let (start_date, end_date) = range_dates(&range.start, &range.end, today);

    let start_tod = range.start.time().unwrap_or(TimeOfDay::new(NaiveTime::default(), true));
    let end_tod = range.end.time().unwrap_or(TimeOfDay::new(end_of_day(), true));

    let start = start_date.and_time(start_tod.time);
    let end = end_date.and_time(end_tod.time);

    if start > end {
        tracing::debug!(%start, %end, "range start is after its end");
        return Vec::new();
    }

    records
        .iter()
        .filter(|r| {
            r.date.and_time(start_tod.key(r.time)) >= start
                && r.date.and_time(end_tod.key(r.time)) <= end
        })
        .cloned()
        .collect()
}

/// An endpoint without a date borrows the other endpoint's
fn range_dates(start: &TimeQuery, end: &TimeQuery, today: NaiveDate) -> (NaiveDate, NaiveDate) {
    match (start.date(), end.date()) {
        (Some(s), Some(e)) => (s, e),
        (Some(s), None) => (s, s),
        (None, Some(e)) => (e, e),
        (None, None) => (today, today),
    }
}

fn resolve_instant(date: NaiveDate, tod: TimeOfDay, records: &[Record]) -> Resolution {
    let target = date.and_time(tod.key(tod.time));
    let key = |r: &Record| -> NaiveDateTime { r.date.and_time(tod.key(r.time)) };

    let mut exact = records.iter().filter(|r| key(r) == target);
    if let (Some(only), None) = (exact.next(), exact.next()) {
        return Resolution::Matches(vec![only.clone()]);
    }

    // Zero or tied exact matches both fall through to the neighbours
    let before = records
        .iter()
        .filter(|r| key(r) < target)
        .max_by_key(|r| r.datetime())
        .cloned();
    let after = records
        .iter()
        .filter(|r| key(r) > target)
        .min_by_key(|r| r.datetime())
        .cloned();

    tracing::debug!(%target, found_before = before.is_some(), found_after = after.is_some(), "no unique exact match");
    Resolution::Nearest { before, after }
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).unwrap_or_default()
}
