use crate::error::SheetError;
use chrono::NaiveDate;
use runlog_utils::dates::iso_year_week;
use serde::{Serialize, Serializer};
use std::{fmt, str::FromStr};

/// ISO-8601 year and week a workout falls in, written as "YYYY-WW".
///
/// Field order makes the derived `Ord` chronological, which is also the
/// order of the zero-padded string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeekKey {
    pub year: i32,
    pub week: u32,
}

impl WeekKey {
    pub fn from_date(date: &NaiveDate) -> WeekKey {
        let (year, week) = iso_year_week(date);
        WeekKey { year, week }
    }

    /// Axis tick label: the week number without the year.
    pub fn week_label(&self) -> String {
        format!("{:02}", self.week)
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.week)
    }
}

impl FromStr for WeekKey {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SheetError::InvalidWeekKey(s.to_string());
        let (year, week) = s.split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let week = week.parse::<u32>().map_err(|_| invalid())?;
        if !(1..=53).contains(&week) {
            return Err(invalid());
        }
        Ok(WeekKey { year, week })
    }
}

impl Serialize for WeekKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::WeekKey;
    use chrono::NaiveDate;

    fn key(y: i32, m: u32, d: u32) -> WeekKey {
        WeekKey::from_date(&NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_year_boundaries_use_iso_year() {
        assert_eq!(key(2024, 12, 31).to_string(), "2025-01");
        assert_eq!(key(2023, 1, 1).to_string(), "2022-52");
        assert_eq!(key(2024, 6, 12).to_string(), "2024-24");
    }

    #[test]
    fn test_ordering_matches_string_ordering() {
        let mut keys = vec![key(2025, 1, 8), key(2024, 12, 31), key(2024, 3, 1), key(2023, 1, 1)];
        let mut strings: Vec<String> = keys.iter().map(ToString::to_string).collect();
        keys.sort();
        strings.sort();
        let sorted: Vec<String> = keys.iter().map(ToString::to_string).collect();
        assert_eq!(sorted, strings);
    }

    #[test]
    fn test_parse_and_label() {
        let k: WeekKey = "2024-07".parse().unwrap();
        assert_eq!(k, WeekKey { year: 2024, week: 7 });
        assert_eq!(k.week_label(), "07");
        assert!("2024".parse::<WeekKey>().is_err());
        assert!("2024-54".parse::<WeekKey>().is_err());
        assert!("x-01".parse::<WeekKey>().is_err());
    }

    #[test]
    fn test_serializes_as_string() {
        let k = key(2024, 6, 12);
        assert_eq!(serde_json::to_string(&k).unwrap(), "\"2024-24\"");
    }
}
