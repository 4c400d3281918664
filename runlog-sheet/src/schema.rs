use crate::error::{Result, SheetError};
use csv::StringRecord;
use serde::{Deserialize, Serialize};

/// Column positions in the published workout sheet.
///
/// The sheet has no stable header names, so rows are read by index.
/// Reordering columns upstream only needs a change here.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Distance in km (column F)
    pub distance_km: usize,
    /// VO2 max estimate (column H)
    pub vo2_max: usize,
    /// Workout date, DD/MM/YYYY (column J)
    pub date: usize,
    /// Running sum in km (column K)
    pub running_sum_km: usize,
    /// Activity category (column L)
    pub category: usize,
}

impl Default for ColumnSchema {
    fn default() -> Self {
        ColumnSchema {
            distance_km: 5,
            vo2_max: 7,
            date: 9,
            running_sum_km: 10,
            category: 11,
        }
    }
}

impl ColumnSchema {
    /// Minimum number of columns a row needs to carry every field.
    pub fn required_width(&self) -> usize {
        [
            self.distance_km,
            self.vo2_max,
            self.date,
            self.running_sum_km,
            self.category,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
            + 1
    }

    /// Check that a header row is wide enough for this schema.
    pub fn check_header(&self, header: &StringRecord) -> Result<()> {
        let expected = self.required_width();
        if header.len() < expected {
            return Err(SheetError::HeaderTooNarrow {
                expected,
                found: header.len(),
            });
        }
        Ok(())
    }
}
