//! Timestamp normalization
//!
//! Tweets carry their creation date in the classic Ruby date layout
//! (weekday, month, day, time, numeric offset, year). The layout is fixed
//! and locale-independent; anything else is a parse error.

use chrono::DateTime;

use crate::{Error, Result};

/// Ruby date layout: `Mon Jan 02 15:04:05 -0700 2006`
const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Parse a tweet creation date into epoch seconds.
pub fn parse_created_at(value: &str) -> Result<i64> {
    DateTime::parse_from_str(value, CREATED_AT_FORMAT)
        .map(|dt| dt.timestamp())
        .map_err(|e| Error::Timestamp(format!("created_at={value:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reference_date() {
        // 2006-01-02 15:04:05 -0700 is 22:04:05 UTC
        let epoch = parse_created_at("Mon Jan 02 15:04:05 -0700 2006").unwrap();
        assert_eq!(epoch, 1136239445);
    }

    #[test]
    fn test_parse_positive_offset() {
        let utc = parse_created_at("Mon Jan 02 15:04:05 +0000 2006").unwrap();
        let shifted = parse_created_at("Mon Jan 02 16:04:05 +0100 2006").unwrap();
        assert_eq!(utc, shifted);
    }

    #[test]
    fn test_rejects_other_layouts() {
        assert!(parse_created_at("2018-08-18T09:12:45Z").is_err());
        assert!(parse_created_at("Aug 18 09:12:45 2018").is_err());
        assert!(parse_created_at("not a date").is_err());
        assert!(parse_created_at("").is_err());
    }

    #[test]
    fn test_error_carries_input() {
        let err = parse_created_at("garbage").unwrap_err();
        assert!(err.to_string().contains("garbage"));
    }
}
