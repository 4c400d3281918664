use runlog_sheet::{Measure, WorkoutRecord};

/// Running totals for one week (or one week and category).
///
/// Buckets only exist once a record lands in them, so `count` is never 0
/// for a bucket held by an aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekBucket {
    pub total_distance: Measure,
    pub running_sum_total: Measure,
    pub count: u32,
    /// Highest valid VO2 max seen this week
    pub max_vo2_max: Option<f64>,
}

impl WeekBucket {
    pub fn from_record(record: &WorkoutRecord) -> WeekBucket {
        let mut bucket = WeekBucket {
            total_distance: Measure::ZERO,
            running_sum_total: Measure::ZERO,
            count: 0,
            max_vo2_max: None,
        };
        bucket.add(record);
        bucket
    }

    pub fn add(&mut self, record: &WorkoutRecord) {
        self.total_distance += record.distance_km;
        self.running_sum_total += record.running_sum_km;
        self.count += 1;
        if let Some(vo2) = record.vo2_max.value() {
            self.max_vo2_max = Some(self.max_vo2_max.map_or(vo2, |m| m.max(vo2)));
        }
    }

    pub fn average_running_sum(&self) -> Measure {
        self.running_sum_total.per(self.count)
    }
}
