//! Display Formatters - Birthday and phone strings for the modal
//!
//! Both formatters are validated parses: they either produce the display
//! string or fail with a format error. The API contract says these fields
//! are well-formed, so a failure here is a defect to surface, not to paper
//! over with partial output.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{GalleryError, GalleryResult};

/// Exactly three, three, and four digits, each group separated by one or
/// more non-digits; leading/trailing non-digits allowed.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\D*(\d{3})\D+(\d{3})\D+(\d{4})\D*$").expect("valid phone regex"));

/// Format an ISO-8601-like date-of-birth string as "MM/DD/YYYY".
///
/// Only the first 10 characters (the calendar date) are considered; the
/// time component is ignored. Fails if the input is shorter than 10
/// characters or does not split into year, month, and day on `-`.
pub fn format_birthday(raw: &str) -> GalleryResult<String> {
    let date: String = raw.chars().take(10).collect();
    if date.chars().count() < 10 {
        return Err(GalleryError::BadBirthday(raw.to_string()));
    }

    let mut parts = date.split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day)) => Ok(format!("{}/{}/{}", month, day, year)),
        _ => Err(GalleryError::BadBirthday(raw.to_string())),
    }
}

/// Format a loosely formatted phone string as "(AAA) BBB-CCCC".
///
/// The input must carry a 3-3-4 digit grouping with non-digit separators
/// between groups; any other grouping fails with no partial-match fallback.
pub fn format_phone(raw: &str) -> GalleryResult<String> {
    let captures = PHONE_RE
        .captures(raw)
        .ok_or_else(|| GalleryError::BadPhone(raw.to_string()))?;

    Ok(format!(
        "({}) {}-{}",
        &captures[1], &captures[2], &captures[3]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_from_iso_timestamp() {
        assert_eq!(
            format_birthday("1990-05-02T00:00:00Z").unwrap(),
            "05/02/1990"
        );
        assert_eq!(
            format_birthday("1957-11-28T04:40:18.554Z").unwrap(),
            "11/28/1957"
        );
    }

    #[test]
    fn test_birthday_from_bare_date() {
        assert_eq!(format_birthday("1990-05-02").unwrap(), "05/02/1990");
    }

    #[test]
    fn test_birthday_too_short() {
        let err = format_birthday("1990-05").unwrap_err();
        assert!(matches!(err, GalleryError::BadBirthday(_)));
        assert!(format_birthday("").is_err());
    }

    #[test]
    fn test_birthday_without_dashes() {
        let err = format_birthday("1990/05/02T00").unwrap_err();
        assert!(matches!(err, GalleryError::BadBirthday(_)));
    }

    #[test]
    fn test_phone_accepted_groupings() {
        assert_eq!(format_phone("(555) 123-4567").unwrap(), "(555) 123-4567");
        assert_eq!(format_phone("555.123.4567").unwrap(), "(555) 123-4567");
        assert_eq!(format_phone("555-123-4567").unwrap(), "(555) 123-4567");
    }

    #[test]
    fn test_phone_rejects_other_groupings() {
        // No separators at all
        assert!(format_phone("5551234567").is_err());
        // Wrong group sizes
        assert!(format_phone("55-5123-4567").is_err());
        // Extra digits trailing the grouping
        assert!(format_phone("555.123.45678").is_err());
        // Too few digits
        assert!(format_phone("123-4567").is_err());
        // No digits
        assert!(format_phone("call me maybe").is_err());
        assert!(format_phone("").is_err());
    }
}
