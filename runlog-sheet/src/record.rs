use crate::{category::Category, measure::Measure, schema::ColumnSchema, week_key::WeekKey};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use log::{debug, warn};
use runlog_utils::dates::parse_day_month_year;
use runlog_utils::error::DateError;
use serde::Serialize;

/// A single workout row from the sheet export.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutRecord {
    pub date: NaiveDate,
    pub distance_km: Measure,
    pub running_sum_km: Measure,
    pub vo2_max: Measure,
    pub category: Category,
}

/// Counters collected while parsing an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Data rows seen (header excluded)
    pub rows: usize,
    /// Rows dropped because the date cell could not be parsed
    pub dropped_dates: usize,
    /// Kept rows with at least one unparsable number
    pub invalid_numbers: usize,
}

impl WorkoutRecord {
    /// Build a record from a CSV row. Missing cells read as empty strings,
    /// so short rows only fail when the date is missing.
    pub fn from_string_record(
        record: &StringRecord,
        schema: &ColumnSchema,
    ) -> Result<WorkoutRecord, DateError> {
        let cell = |index: usize| record.get(index).unwrap_or("");
        let date = parse_day_month_year(cell(schema.date))?;
        Ok(WorkoutRecord {
            date,
            distance_km: Measure::parse(cell(schema.distance_km)),
            running_sum_km: Measure::parse(cell(schema.running_sum_km)),
            vo2_max: Measure::parse(cell(schema.vo2_max)),
            category: Category::parse(cell(schema.category)),
        })
    }

    pub fn week_key(&self) -> WeekKey {
        WeekKey::from_date(&self.date)
    }

    fn has_invalid_number(&self) -> bool {
        !(self.distance_km.is_valid() && self.running_sum_km.is_valid())
    }

    /// Parse a whole export body into records.
    ///
    /// The first line is a header and is discarded. Cells are split on bare
    /// commas; quoting is not interpreted, so a quoted cell containing a
    /// comma shifts the remaining columns. Rows with unparsable dates are
    /// dropped and counted; nothing here fails.
    pub fn parse_export(body: &str, schema: &ColumnSchema) -> (Vec<WorkoutRecord>, ParseStats) {
        let mut stats = ParseStats::default();
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .quoting(false)
            .flexible(true)
            .from_reader(body.as_bytes());

        if let Ok(header) = rdr.headers() {
            if let Err(e) = schema.check_header(header) {
                warn!("Sheet header does not match column schema: {}", e);
            }
        }

        let mut records = Vec::new();
        for result in rdr.records() {
            let row = match result {
                Ok(r) => r,
                Err(e) => {
                    warn!("Skipping unreadable row: {}", e);
                    continue;
                }
            };
            stats.rows += 1;
            match WorkoutRecord::from_string_record(&row, schema) {
                Ok(record) => {
                    if record.has_invalid_number() {
                        stats.invalid_numbers += 1;
                    }
                    records.push(record);
                }
                Err(e) => {
                    debug!("Dropping row {}: {}", stats.rows, e);
                    stats.dropped_dates += 1;
                }
            }
        }
        (records, stats)
    }
}
