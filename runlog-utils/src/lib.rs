//! Shared utility functions for runlog crates.

/// Date utility functions
pub mod dates {
    use crate::error::DateError;
    use chrono::{Datelike, Duration, Months, NaiveDate};

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> Result<NaiveDate, DateError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|_| DateError::Unparsable(s.to_string()))
    }

    /// Parse a spreadsheet date in "DD/MM/YYYY" format.
    ///
    /// Day and month need not be zero-padded ("5/6/2024" is accepted).
    /// Anything that is not exactly three numeric parts naming a real
    /// calendar day is rejected.
    pub fn parse_day_month_year(s: &str) -> Result<NaiveDate, DateError> {
        let parts: Vec<&str> = s.trim().split('/').collect();
        if parts.len() != 3 {
            return Err(DateError::Unparsable(s.to_string()));
        }
        let day = parts[0].trim().parse::<u32>();
        let month = parts[1].trim().parse::<u32>();
        let year = parts[2].trim().parse::<i32>();
        match (day, month, year) {
            (Ok(d), Ok(m), Ok(y)) => {
                NaiveDate::from_ymd_opt(y, m, d).ok_or(DateError::OutOfRange {
                    year: y,
                    month: m,
                    day: d,
                })
            }
            _ => Err(DateError::Unparsable(s.to_string())),
        }
    }

    /// ISO-8601 (year, week) for a date.
    ///
    /// The date is moved to the Thursday of its Monday-based week and the
    /// week number is `ceil((days since Jan 1 of that Thursday's year + 1) / 7)`.
    /// The returned year is the Thursday's year, which differs from the
    /// calendar year around New Year (Dec 31 2024 is week 1 of 2025).
    pub fn iso_year_week(date: &NaiveDate) -> (i32, u32) {
        let dow = i64::from(date.weekday().number_from_monday());
        let thursday = *date + Duration::days(4 - dow);
        let days_since_jan1 = thursday.ordinal0();
        (thursday.year(), (days_since_jan1 + 1).div_ceil(7))
    }

    /// Move a date back by whole months, clamping to the end of the target
    /// month (Jul 31 minus 5 months is Feb 29 in a leap year).
    pub fn months_back(date: &NaiveDate, months: u32) -> Result<NaiveDate, DateError> {
        date.checked_sub_months(Months::new(months))
            .ok_or(DateError::MonthShift {
                date: *date,
                months: -i64::from(months),
            })
    }

    /// Move a date forward by whole months, clamping like [`months_back`].
    pub fn months_forward(date: &NaiveDate, months: u32) -> Result<NaiveDate, DateError> {
        date.checked_add_months(Months::new(months))
            .ok_or(DateError::MonthShift {
                date: *date,
                months: i64::from(months),
            })
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
            NaiveDate::from_ymd_opt(y, m, d).unwrap()
        }

        #[test]
        fn test_parse_day_month_year() {
            assert_eq!(parse_day_month_year("12/06/2024").unwrap(), ymd(2024, 6, 12));
            assert_eq!(parse_day_month_year("5/6/2024").unwrap(), ymd(2024, 6, 5));
            assert_eq!(parse_day_month_year(" 01/01/2023 ").unwrap(), ymd(2023, 1, 1));
        }

        #[test]
        fn test_parse_day_month_year_rejects_garbage() {
            assert!(parse_day_month_year("").is_err());
            assert!(parse_day_month_year("2024-06-12").is_err());
            assert!(parse_day_month_year("12/06").is_err());
            assert!(parse_day_month_year("aa/06/2024").is_err());
            assert!(matches!(
                parse_day_month_year("31/02/2024"),
                Err(DateError::OutOfRange { month: 2, day: 31, .. })
            ));
        }

        #[test]
        fn test_iso_year_week_boundaries() {
            // Tuesday, lands in week 1 of the next ISO year
            assert_eq!(iso_year_week(&ymd(2024, 12, 31)), (2025, 1));
            // Sunday, belongs to the last week of the previous ISO year
            assert_eq!(iso_year_week(&ymd(2023, 1, 1)), (2022, 52));
            assert_eq!(iso_year_week(&ymd(2024, 6, 12)), (2024, 24));
            // 2020 has 53 ISO weeks
            assert_eq!(iso_year_week(&ymd(2021, 1, 3)), (2020, 53));
        }

        #[test]
        fn test_iso_year_week_agrees_with_chrono() {
            let mut date = ymd(2018, 12, 1);
            let end = ymd(2026, 2, 1);
            while date <= end {
                let iso = date.iso_week();
                assert_eq!(iso_year_week(&date), (iso.year(), iso.week()), "{date}");
                date = date.succ_opt().unwrap();
            }
        }

        #[test]
        fn test_months_back() {
            assert_eq!(months_back(&ymd(2024, 7, 15), 5).unwrap(), ymd(2024, 2, 15));
            assert_eq!(months_back(&ymd(2024, 7, 15), 6).unwrap(), ymd(2024, 1, 15));
            assert_eq!(months_back(&ymd(2024, 7, 31), 5).unwrap(), ymd(2024, 2, 29));
            assert_eq!(months_back(&ymd(2023, 7, 31), 5).unwrap(), ymd(2023, 2, 28));
        }

        #[test]
        fn test_months_forward() {
            assert_eq!(months_forward(&ymd(2023, 7, 15), 1).unwrap(), ymd(2023, 8, 15));
            assert_eq!(months_forward(&ymd(2023, 12, 31), 2).unwrap(), ymd(2024, 2, 29));
        }

        #[test]
        fn test_format_and_parse() {
            let date = ymd(2023, 6, 15);
            let formatted = format_date(&date);
            assert_eq!(formatted, "2023-06-15");
            assert_eq!(parse_date(&formatted).unwrap(), date);
            assert!(parse_date("15/06/2023").is_err());
        }
    }
}

/// Error types
pub mod error {
    use chrono::NaiveDate;
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum DateError {
        #[error("Date error: cannot parse {0:?}")]
        Unparsable(String),

        #[error("Date error: {year:04}-{month:02}-{day:02} is not a calendar day")]
        OutOfRange { year: i32, month: u32, day: u32 },

        #[error("Date error: cannot shift {date} by {months} months")]
        MonthShift { date: NaiveDate, months: i64 },
    }
}
