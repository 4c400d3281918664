use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A numeric spreadsheet cell.
/// - `Value(f64)`: a finite number
/// - `Invalid`: empty, unparsable or non-finite cell
///
/// Sums containing an `Invalid` term stay `Invalid`, so one bad distance
/// poisons the weekly total instead of silently counting as zero.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum Measure {
    Value(f64),
    Invalid,
}

impl Measure {
    pub const ZERO: Measure = Measure::Value(0.0);

    /// Parse the leading number of a cell, so `"12 km"` reads as 12.
    /// Cells with no numeric prefix are `Invalid`.
    pub fn parse(cell: &str) -> Measure {
        match numeric_prefix(cell.trim()).parse::<f64>() {
            Ok(v) if v.is_finite() => Measure::Value(v),
            _ => Measure::Invalid,
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Measure::Value(v) => Some(v),
            Measure::Invalid => None,
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, Measure::Value(_))
    }

    /// Chart value: `Invalid` becomes NaN.
    pub fn to_f64(self) -> f64 {
        self.value().unwrap_or(f64::NAN)
    }

    /// Mean over `count` contributions.
    pub fn per(self, count: u32) -> Measure {
        match self {
            Measure::Value(v) if count > 0 => Measure::Value(v / f64::from(count)),
            _ => Measure::Invalid,
        }
    }
}

/// Longest prefix of `text` shaped like a decimal float: optional sign,
/// digits with an optional fraction, optional exponent. Empty when there
/// are no digits before the exponent.
fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        let frac_digits = frac_end - (end + 1);
        if mantissa_digits + frac_digits > 0 {
            mantissa_digits += frac_digits;
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    &text[..end]
}

impl Default for Measure {
    fn default() -> Self {
        Measure::ZERO
    }
}

impl Add for Measure {
    type Output = Measure;

    fn add(self, rhs: Measure) -> Measure {
        match (self, rhs) {
            (Measure::Value(a), Measure::Value(b)) => Measure::Value(a + b),
            _ => Measure::Invalid,
        }
    }
}

impl AddAssign for Measure {
    fn add_assign(&mut self, rhs: Measure) {
        *self = *self + rhs;
    }
}

impl Sum for Measure {
    fn sum<I: Iterator<Item = Measure>>(iter: I) -> Measure {
        iter.fold(Measure::ZERO, Add::add)
    }
}
