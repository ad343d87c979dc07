//! Date handling for range bounds.
//!
//! Bounds that look like dates are rewritten into a sortable
//! `yyyyMMddHHmmssSSS` string truncated to a resolution.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Granularity of date strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateResolution {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl DateResolution {
    /// Number of characters of `yyyyMMddHHmmssSSS` kept at this resolution.
    fn width(&self) -> usize {
        match self {
            DateResolution::Year => 4,
            DateResolution::Month => 6,
            DateResolution::Day => 8,
            DateResolution::Hour => 10,
            DateResolution::Minute => 12,
            DateResolution::Second => 14,
            DateResolution::Millisecond => 17,
        }
    }
}

/// Parse `M/D/YYYY`, `M/D/YY` or `YYYY-MM-DD`.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }

    let year = text.rsplit('/').next()?;
    if text.split('/').count() != 3 || !year.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let format = if year.len() <= 2 { "%m/%d/%y" } else { "%m/%d/%Y" };
    NaiveDate::parse_from_str(text, format).ok()
}

/// Format a timestamp as `yyyyMMddHHmmssSSS` truncated to `resolution`.
pub fn date_to_string(datetime: NaiveDateTime, resolution: DateResolution) -> String {
    let full = datetime.format("%Y%m%d%H%M%S%3f").to_string();
    full[..resolution.width().min(full.len())].to_string()
}

/// Convert a range bound if it parses as a date.
///
/// An inclusive upper bound covers the whole day, so it moves to
/// 23:59:59.999.
pub fn convert_bound(text: &str, resolution: DateResolution, inclusive_upper: bool) -> Option<String> {
    let date = parse_date(text)?;
    let time = if inclusive_upper {
        NaiveTime::from_hms_milli_opt(23, 59, 59, 999)?
    } else {
        NaiveTime::MIN
    };
    Some(date_to_string(date.and_time(time), resolution))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2005, 2, 1).unwrap();
        assert_eq!(parse_date("2/1/2005"), Some(expected));
        assert_eq!(parse_date("2/1/05"), Some(expected));
        assert_eq!(parse_date("2005-02-01"), Some(expected));
        assert_eq!(parse_date("abc"), None);
        assert_eq!(parse_date("1/2/3/4"), None);
    }

    #[test]
    fn test_convert_bound() {
        assert_eq!(
            convert_bound("2/1/2005", DateResolution::Millisecond, false).unwrap(),
            "20050201000000000"
        );
        assert_eq!(
            convert_bound("2/1/2005", DateResolution::Millisecond, true).unwrap(),
            "20050201235959999"
        );
        assert_eq!(convert_bound("2/1/2005", DateResolution::Day, true).unwrap(), "20050201");
        assert_eq!(convert_bound("2/1/2005", DateResolution::Year, false).unwrap(), "2005");
        assert_eq!(convert_bound("2/1/2005", DateResolution::Hour, true).unwrap(), "2005020123");
        assert!(convert_bound("hello", DateResolution::Day, false).is_none());
    }
}
