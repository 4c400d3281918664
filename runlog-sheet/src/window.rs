use crate::error::{Result, SheetError};
use chrono::NaiveDate;
use runlog_utils::dates::{months_back, months_forward};
use std::{fmt, str::FromStr};

/// Trailing time window selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WindowOption {
    #[default]
    SixMonths,
    TwelveMonths,
    All,
}

impl WindowOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowOption::SixMonths => "6months",
            WindowOption::TwelveMonths => "12months",
            WindowOption::All => "all",
        }
    }
}

impl fmt::Display for WindowOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindowOption {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "6months" => Ok(WindowOption::SixMonths),
            "12months" => Ok(WindowOption::TwelveMonths),
            "all" => Ok(WindowOption::All),
            other => Err(SheetError::UnknownWindow(other.to_string())),
        }
    }
}

/// How a window turns into a cutoff date.
///
/// The distance charts and the VO2 max chart have always computed their
/// windows differently; both rules are kept as-is.
///
/// | rule     | 6months   | 12months              |
/// |----------|-----------|-----------------------|
/// | `Volume` | −5 months | −1 year, then +1 month |
/// | `Vo2Max` | −6 months | −1 year               |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CutoffRule {
    Volume,
    Vo2Max,
}

impl CutoffRule {
    /// Earliest date kept for `window`, relative to `today`.
    /// Rows dated strictly before it are discarded. `All` has no cutoff.
    pub fn cutoff(&self, window: WindowOption, today: NaiveDate) -> Result<Option<NaiveDate>> {
        let cutoff = match (self, window) {
            (_, WindowOption::All) => return Ok(None),
            (CutoffRule::Volume, WindowOption::SixMonths) => months_back(&today, 5)?,
            (CutoffRule::Volume, WindowOption::TwelveMonths) => {
                months_forward(&months_back(&today, 12)?, 1)?
            }
            (CutoffRule::Vo2Max, WindowOption::SixMonths) => months_back(&today, 6)?,
            (CutoffRule::Vo2Max, WindowOption::TwelveMonths) => months_back(&today, 12)?,
        };
        Ok(Some(cutoff))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_volume_cutoffs() {
        let today = ymd(2024, 7, 15);
        let rule = CutoffRule::Volume;
        assert_eq!(rule.cutoff(WindowOption::SixMonths, today).unwrap(), Some(ymd(2024, 2, 15)));
        assert_eq!(rule.cutoff(WindowOption::TwelveMonths, today).unwrap(), Some(ymd(2023, 8, 15)));
        assert_eq!(rule.cutoff(WindowOption::All, today).unwrap(), None);
    }

    #[test]
    fn test_vo2_max_cutoffs() {
        let today = ymd(2024, 7, 15);
        let rule = CutoffRule::Vo2Max;
        assert_eq!(rule.cutoff(WindowOption::SixMonths, today).unwrap(), Some(ymd(2024, 1, 15)));
        assert_eq!(rule.cutoff(WindowOption::TwelveMonths, today).unwrap(), Some(ymd(2023, 7, 15)));
        assert_eq!(rule.cutoff(WindowOption::All, today).unwrap(), None);
    }

    #[test]
    fn test_cutoff_clamps_to_month_end() {
        let today = ymd(2024, 7, 31);
        assert_eq!(
            CutoffRule::Volume.cutoff(WindowOption::SixMonths, today).unwrap(),
            Some(ymd(2024, 2, 29))
        );
    }

    #[test]
    fn test_window_names() {
        assert_eq!("6months".parse::<WindowOption>().unwrap(), WindowOption::SixMonths);
        assert_eq!("12months".parse::<WindowOption>().unwrap(), WindowOption::TwelveMonths);
        assert_eq!("all".parse::<WindowOption>().unwrap(), WindowOption::All);
        assert!("3months".parse::<WindowOption>().is_err());
        assert_eq!(WindowOption::default(), WindowOption::SixMonths);
        assert_eq!(WindowOption::TwelveMonths.to_string(), "12months");
    }
}
