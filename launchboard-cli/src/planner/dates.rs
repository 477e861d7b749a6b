//! Launch date resolution and due date arithmetic
//!
//! Spreadsheet exports hand us launch dates in several shapes: Excel serial
//! day counts (`46062`), ISO dates, US and European slash dates, and the
//! occasional timestamp. Everything funnels through [`parse_launch_date`].

use chrono::{Days, NaiveDate, NaiveDateTime};

/// Presentation format for every date written to a board or CSV
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar formats tried in order after the serial-number check.
///
/// `%m/%d/%Y` is deliberately ahead of `%d/%m/%Y`: a value like `03/04/2026`
/// resolves to March 4th. Existing sheets were produced with this order, so
/// it stays.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y"];

/// Timestamp formats; the time component is dropped
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S"];

/// Day zero of the Excel 1900 date system as spreadsheets actually count it.
///
/// Excel believes 1900-02-29 existed, so serials after February 1900 line up
/// with 1899-12-30 rather than 1899-12-31. Keep it that way or dates shift a day
/// against what the sheet displays.
const EXCEL_EPOCH: (i32, u32, u32) = (1899, 12, 30);

/// Convert an Excel serial day count to a calendar date
pub fn from_excel_serial(serial: u64) -> Option<NaiveDate> {
    let (year, month, day) = EXCEL_EPOCH;
    NaiveDate::from_ymd_opt(year, month, day)?.checked_add_days(Days::new(serial))
}

/// Parse a launch date from an untyped sheet cell.
///
/// Returns `None` for empty input and for anything that matches no known
/// shape. Callers treat `None` as "no schedule for this record".
pub fn parse_launch_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Excel serial date numbers (e.g. 46062)
    if trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return match trimmed.parse::<u64>() {
            Ok(serial) => from_excel_serial(serial),
            Err(_) => {
                log::debug!("Serial date out of range: {}", trimmed);
                None
            }
        };
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt.date());
        }
    }

    log::debug!("Could not parse launch date: {}", trimmed);
    None
}

/// Subtract a lead time in weeks from a launch date.
///
/// No floor is applied: a due date in the past just means the item is late.
pub fn calculate_due_date(launch_date: Option<NaiveDate>, lead_time_weeks: u32) -> Option<NaiveDate> {
    let launch_date = launch_date?;
    launch_date.checked_sub_days(Days::new(u64::from(lead_time_weeks) * 7))
}

/// Format a date the way boards and the interchange CSV expect it
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Format an optional date, empty when absent
pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_excel_serial() {
        let expected = ymd(1899, 12, 30) + chrono::Duration::days(46062);
        assert_eq!(parse_launch_date("46062"), Some(expected));
        assert_eq!(parse_launch_date("46062"), Some(ymd(2026, 2, 9)));
        assert_eq!(parse_launch_date("45658"), Some(ymd(2025, 1, 1)));
        assert_eq!(parse_launch_date("  45658 "), Some(ymd(2025, 1, 1)));
    }

    #[test]
    fn test_parse_excel_serial_keeps_1900_leap_bug() {
        // Serial 61 is 1900-03-01 in Excel
        assert_eq!(parse_launch_date("61"), Some(ymd(1900, 3, 1)));
        assert_eq!(parse_launch_date("0"), Some(ymd(1899, 12, 30)));
    }

    #[test]
    fn test_parse_serial_out_of_range() {
        assert_eq!(parse_launch_date("99999999999999999999999"), None);
        assert_eq!(parse_launch_date("999999999999"), None);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_launch_date(""), None);
        assert_eq!(parse_launch_date("   "), None);
        assert_eq!(parse_launch_date("\t\n"), None);
    }

    #[test]
    fn test_parse_calendar_formats() {
        assert_eq!(parse_launch_date("2025-01-15"), Some(ymd(2025, 1, 15)));
        assert_eq!(parse_launch_date("01/15/2025"), Some(ymd(2025, 1, 15)));
        assert_eq!(parse_launch_date("15/01/2025"), Some(ymd(2025, 1, 15)));
        assert_eq!(
            parse_launch_date("2025-01-15 10:30:00"),
            Some(ymd(2025, 1, 15))
        );
    }

    #[test]
    fn test_parse_ambiguous_slash_date_is_us_first() {
        assert_eq!(parse_launch_date("03/04/2026"), Some(ymd(2026, 3, 4)));
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_launch_date("not a date"), None);
        assert_eq!(parse_launch_date("2025-13-45"), None);
        assert_eq!(parse_launch_date("-42"), None);
    }

    #[test]
    fn test_calculate_due_date() {
        assert_eq!(
            calculate_due_date(Some(ymd(2025, 12, 1)), 12),
            Some(ymd(2025, 9, 8))
        );
        assert_eq!(
            calculate_due_date(Some(ymd(2026, 6, 1)), 40),
            Some(ymd(2025, 8, 25))
        );
        assert_eq!(
            calculate_due_date(Some(ymd(2026, 6, 1)), 0),
            Some(ymd(2026, 6, 1))
        );
    }

    #[test]
    fn test_calculate_due_date_without_launch() {
        for weeks in [0, 1, 12, 40, 520] {
            assert_eq!(calculate_due_date(None, weeks), None);
        }
    }

    #[test]
    fn test_due_date_never_after_launch() {
        let launch = ymd(2026, 2, 9);
        for weeks in 0..60 {
            let due = calculate_due_date(Some(launch), weeks).unwrap();
            assert!(due <= launch);
        }
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(ymd(2025, 9, 8)), "2025-09-08");
        assert_eq!(format_optional_date(None), "");
    }
}
