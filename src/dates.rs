use crate::error::{Result, TaskError};
use chrono::{Days, Months, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses `YYYY-MM-DD` or one of `today`, `tomorrow`, `next week`,
/// `next month` (case-insensitive) relative to `today`.
pub fn parse_due_date_from(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let trimmed = input.trim();
    let relative = match trimmed.to_lowercase().as_str() {
        "today" => Some(today),
        "tomorrow" => today.checked_add_days(Days::new(1)),
        "next week" => today.checked_add_days(Days::new(7)),
        // chrono clamps to the last day of a shorter month
        "next month" => today.checked_add_months(Months::new(1)),
        _ => None,
    };

    match relative {
        Some(date) => Ok(date),
        None => NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map_err(|_| TaskError::InvalidDate(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_literal_dates() {
        let today = day(2024, 3, 10);
        assert_eq!(
            parse_due_date_from("2024-12-25", today).unwrap(),
            day(2024, 12, 25)
        );
        assert_eq!(
            parse_due_date_from("  2023-01-02 ", today).unwrap(),
            day(2023, 1, 2)
        );
    }

    #[test]
    fn parses_relative_keywords_case_insensitively() {
        let today = day(2024, 3, 10);
        assert_eq!(parse_due_date_from("Today", today).unwrap(), today);
        assert_eq!(
            parse_due_date_from("TOMORROW", today).unwrap(),
            day(2024, 3, 11)
        );
        assert_eq!(
            parse_due_date_from("next Week", today).unwrap(),
            day(2024, 3, 17)
        );
        assert_eq!(
            parse_due_date_from("next month", today).unwrap(),
            day(2024, 4, 10)
        );
    }

    #[test]
    fn next_month_clamps_to_month_end() {
        assert_eq!(
            parse_due_date_from("next month", day(2024, 1, 31)).unwrap(),
            day(2024, 2, 29)
        );
        assert_eq!(
            parse_due_date_from("tomorrow", day(2024, 12, 31)).unwrap(),
            day(2025, 1, 1)
        );
    }

    #[test]
    fn rejects_anything_else() {
        let today = day(2024, 3, 10);
        for input in ["", "yesterday", "2024/03/10", "2024-13-01", "next year", "10-03-2024"] {
            let err = parse_due_date_from(input, today).unwrap_err();
            assert!(matches!(err, TaskError::InvalidDate(_)), "{input:?}");
        }
    }
}
