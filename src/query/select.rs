//! Positional selection for `show`
use crate::config::Limits;
use crate::error::{Result, StampError};
use crate::models::Record;

/// Records picked by a `show` argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub records: Vec<Record>,
    /// Number of records on the page
    pub total: usize,
    /// Set when `all` hit its cap
    pub truncated: bool,
}

/// Resolve a `show` argument against a page's records
///
/// Keywords (case-insensitive): `foot` or empty, `head`, `all`, `first`, `last`.
/// Anything else is `<n>` or `<n> to <m>`, 1-based and inclusive, in either order.
pub fn select(arg: &str, records: Vec<Record>, limits: &Limits) -> Result<Selection> {
    let total = records.len();
    let keyword = arg.trim().to_ascii_lowercase();
    let mut truncated = false;

    let picked = match keyword.as_str() {
        "" | "foot" => {
            let skip = total.saturating_sub(limits.foot);
            records.into_iter().skip(skip).collect()
        }
        "head" => records.into_iter().take(limits.head).collect(),
        "all" => {
            truncated = total > limits.all;
            records.into_iter().take(limits.all).collect()
        }
        "first" => records.into_iter().take(1).collect(),
        "last" => records.into_iter().next_back().into_iter().collect(),
        _ => {
            let (start, end) = index_range(&keyword, total)?;
            records
                .into_iter()
                .skip(start - 1)
                .take(end - start + 1)
                .collect()
        }
    };

    Ok(Selection {
        records: picked,
        total,
        truncated,
    })
}

/// Parse `<n>` or `<n> to <m>` into an ordered, bounds-checked 1-based pair
fn index_range(text: &str, count: usize) -> Result<(usize, usize)> {
    let (first, second) = match text.split_once(" to ") {
        Some((a, b)) => (a, Some(b)),
        None => (text, None),
    };

    let start = checked_index(first, count)?;
    let end = match second {
        Some(token) => checked_index(token, count)?,
        None => start,
    };

    Ok(if start > end { (end, start) } else { (start, end) })
}

/// Parse one 1-based index and check it against the page size
pub fn checked_index(token: &str, count: usize) -> Result<usize> {
    let token = token.trim();
    let index = token
        .parse::<i64>()
        .map_err(|_| StampError::InvalidIndex(token.to_string()))?;

    if index < 1 || index as u64 > count as u64 {
        return Err(StampError::IndexOutOfRange { index, count });
    }
    Ok(index as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClockFormat;
    use chrono::NaiveDate;

    fn page(n: u64) -> Vec<Record> {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        (1..=n)
            .map(|i| {
                Record::new(
                    i,
                    start + chrono::Duration::minutes(i as i64),
                    ClockFormat::H24,
                    &format!("n{}", i),
                )
            })
            .collect()
    }

    fn indices(selection: &Selection) -> Vec<u64> {
        selection.records.iter().map(|r| r.index).collect()
    }

    #[test]
    fn test_foot_default() {
        let limits = Limits::default();
        let s = select("", page(15), &limits).unwrap();
        assert_eq!(indices(&s), (6..=15).collect::<Vec<_>>());
        let s = select("FOOT", page(15), &limits).unwrap();
        assert_eq!(indices(&s), (6..=15).collect::<Vec<_>>());
    }

    #[test]
    fn test_foot_short_page() {
        let s = select("foot", page(3), &Limits::default()).unwrap();
        assert_eq!(indices(&s), vec![1, 2, 3]);
    }

    #[test]
    fn test_head() {
        let s = select("head", page(15), &Limits::default()).unwrap();
        assert_eq!(indices(&s), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_all_truncates_at_limit() {
        let s = select("all", page(150), &Limits::default()).unwrap();
        assert_eq!(s.records.len(), 100);
        assert_eq!(s.total, 150);
        assert!(s.truncated);

        let s = select("All", page(15), &Limits::default()).unwrap();
        assert_eq!(s.records.len(), 15);
        assert!(!s.truncated);
    }

    #[test]
    fn test_first_and_last() {
        let limits = Limits::default();
        assert_eq!(indices(&select("first", page(5), &limits).unwrap()), vec![1]);
        assert_eq!(indices(&select("last", page(5), &limits).unwrap()), vec![5]);
        assert!(select("first", page(0), &limits).unwrap().records.is_empty());
        assert!(select("last", page(0), &limits).unwrap().records.is_empty());
    }

    #[test]
    fn test_single_index() {
        let s = select("2", page(5), &Limits::default()).unwrap();
        assert_eq!(indices(&s), vec![2]);
    }

    #[test]
    fn test_range_is_order_independent() {
        let limits = Limits::default();
        let forward = select("2 to 5", page(6), &limits).unwrap();
        let backward = select("5 to 2", page(6), &limits).unwrap();
        assert_eq!(indices(&forward), vec![2, 3, 4, 5]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_invalid_index() {
        let limits = Limits::default();
        assert!(matches!(
            select("two", page(5), &limits),
            Err(StampError::InvalidIndex(t)) if t == "two"
        ));
        assert!(matches!(
            select("2 to x", page(5), &limits),
            Err(StampError::InvalidIndex(t)) if t == "x"
        ));
    }

    #[test]
    fn test_checked_index_rejects_keywords() {
        assert_eq!(checked_index(" 3 ", 5).unwrap(), 3);
        assert!(matches!(
            checked_index("head", 5),
            Err(StampError::InvalidIndex(t)) if t == "head"
        ));
        assert!(matches!(
            checked_index("2 to 4", 5),
            Err(StampError::InvalidIndex(_))
        ));
    }

    #[test]
    fn test_out_of_range() {
        let limits = Limits::default();
        assert!(matches!(
            select("0", page(5), &limits),
            Err(StampError::IndexOutOfRange { index: 0, count: 5 })
        ));
        assert!(matches!(
            select("2 to 6", page(5), &limits),
            Err(StampError::IndexOutOfRange { index: 6, count: 5 })
        ));
        assert!(matches!(
            select("-1", page(5), &limits),
            Err(StampError::IndexOutOfRange { index: -1, .. })
        ));
    }
}
