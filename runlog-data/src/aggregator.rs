use crate::bucket::WeekBucket;
use chrono::NaiveDate;
use log::{debug, warn};
use runlog_sheet::{
    Category, ColumnSchema, CutoffRule, ParseStats, SheetError, WeekKey, WindowOption,
    WorkoutRecord,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::{fmt, str::FromStr};

pub const DISTANCE_SERIES: &str = "distance";
pub const AVERAGE_RUNNING_SUM_SERIES: &str = "average_running_sum";
pub const MAX_VO2_MAX_SERIES: &str = "max_vo2_max";

/// Which weekly view to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    /// Weekly total distance and average running sum
    Volume,
    /// Weekly distance per charted category
    Categories,
    /// Weekly maximum VO2 max
    Vo2Max,
}

impl SeriesKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeriesKind::Volume => "volume",
            SeriesKind::Categories => "categories",
            SeriesKind::Vo2Max => "vo2max",
        }
    }

    /// The cutoff rule each chart has historically used.
    pub fn default_cutoff_rule(&self) -> CutoffRule {
        match self {
            SeriesKind::Volume | SeriesKind::Categories => CutoffRule::Volume,
            SeriesKind::Vo2Max => CutoffRule::Vo2Max,
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeriesKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "volume" => Ok(SeriesKind::Volume),
            "categories" => Ok(SeriesKind::Categories),
            "vo2max" => Ok(SeriesKind::Vo2Max),
            other => Err(format!(
                "unknown series kind {other:?} (expected volume, categories or vo2max)"
            )),
        }
    }
}

/// A named value sequence aligned with `AggregationResult::ordered_week_keys`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    /// NaN where the week's input was invalid (serialized as `null`)
    pub values: Vec<f64>,
}

/// Headline number for the most recent week.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatestSummary {
    pub week: WeekKey,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregationResult {
    pub kind: SeriesKind,
    #[serde(serialize_with = "serialize_window")]
    pub window: WindowOption,
    pub cutoff: Option<NaiveDate>,
    pub ordered_week_keys: Vec<WeekKey>,
    pub series: Vec<Series>,
    pub latest: Option<LatestSummary>,
    pub stats: ParseStats,
}

fn serialize_window<S: serde::Serializer>(
    window: &WindowOption,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(window.as_str())
}

impl AggregationResult {
    pub fn series(&self, name: &str) -> Option<&[f64]> {
        self.series
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.values.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.ordered_week_keys.is_empty()
    }
}

/// Buckets a sheet export into ISO weeks.
///
/// Aggregation is a pure function of the export body, the window and the
/// configured reference date; nothing is kept between calls.
#[derive(Debug, Clone)]
pub struct WeeklyAggregator {
    kind: SeriesKind,
    schema: ColumnSchema,
    rule: CutoffRule,
    today: NaiveDate,
}

impl WeeklyAggregator {
    pub fn new(kind: SeriesKind, today: NaiveDate) -> Self {
        Self {
            kind,
            schema: ColumnSchema::default(),
            rule: kind.default_cutoff_rule(),
            today,
        }
    }

    pub fn with_schema(mut self, schema: ColumnSchema) -> Self {
        self.schema = schema;
        self
    }

    pub fn with_cutoff_rule(mut self, rule: CutoffRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn kind(&self) -> SeriesKind {
        self.kind
    }

    /// Cutoff date for `window`. Dates outside chrono's range fall back to
    /// no cutoff.
    pub fn cutoff(&self, window: WindowOption) -> Option<NaiveDate> {
        match self.rule.cutoff(window, self.today) {
            Ok(cutoff) => cutoff,
            Err(e) => {
                warn!("{}", SheetError::from(e));
                None
            }
        }
    }

    /// Parse and aggregate a raw CSV export. Malformed rows are dropped or
    /// carried as NaN; this never fails.
    pub fn aggregate(&self, raw_csv: &str, window: WindowOption) -> AggregationResult {
        let (records, stats) = WorkoutRecord::parse_export(raw_csv, &self.schema);
        debug!(
            "Parsed {} rows ({} dropped, {} with invalid numbers)",
            stats.rows, stats.dropped_dates, stats.invalid_numbers
        );
        self.aggregate_records(&records, window, stats)
    }

    pub fn aggregate_records(
        &self,
        records: &[WorkoutRecord],
        window: WindowOption,
        stats: ParseStats,
    ) -> AggregationResult {
        let cutoff = self.cutoff(window);
        let mut weeks: BTreeMap<WeekKey, WeekBucket> = BTreeMap::new();
        let mut by_category: BTreeMap<(WeekKey, Category), WeekBucket> = BTreeMap::new();
        let mut most_recent_vo2_max: Option<f64> = None;

        for record in records {
            if cutoff.is_some_and(|c| record.date < c) {
                continue;
            }
            let key = record.week_key();
            weeks
                .entry(key)
                .and_modify(|b| b.add(record))
                .or_insert_with(|| WeekBucket::from_record(record));

            if self.kind == SeriesKind::Categories {
                by_category
                    .entry((key, record.category.clone()))
                    .and_modify(|b| b.add(record))
                    .or_insert_with(|| WeekBucket::from_record(record));
            }

            if cutoff.map_or(true, |c| record.date > c) {
                if let Some(vo2) = record.vo2_max.value() {
                    most_recent_vo2_max =
                        Some(most_recent_vo2_max.map_or(vo2, |m: f64| m.max(vo2)));
                }
            }
        }

        let ordered_week_keys: Vec<WeekKey> = weeks.keys().copied().collect();
        let last = weeks.iter().next_back();

        let (series, latest) = match self.kind {
            SeriesKind::Volume => {
                let distance = weeks.values().map(|b| b.total_distance.to_f64()).collect();
                let running_sum = weeks
                    .values()
                    .map(|b| b.average_running_sum().to_f64())
                    .collect();
                (
                    vec![
                        Series {
                            name: DISTANCE_SERIES.to_string(),
                            values: distance,
                        },
                        Series {
                            name: AVERAGE_RUNNING_SUM_SERIES.to_string(),
                            values: running_sum,
                        },
                    ],
                    last.map(|(week, b)| LatestSummary {
                        week: *week,
                        value: b.total_distance.to_f64(),
                    }),
                )
            }
            SeriesKind::Categories => {
                let series = Category::CHARTED
                    .iter()
                    .map(|category| Series {
                        name: category.to_string(),
                        values: ordered_week_keys
                            .iter()
                            .map(|week| {
                                by_category
                                    .get(&(*week, category.clone()))
                                    .map_or(0.0, |b| b.total_distance.to_f64())
                            })
                            .collect(),
                    })
                    .collect::<Vec<_>>();
                // Headline matches the stacked bars: charted categories only.
                let latest = last.map(|(week, _)| LatestSummary {
                    week: *week,
                    value: series.iter().filter_map(|s| s.values.last()).sum(),
                });
                (series, latest)
            }
            SeriesKind::Vo2Max => {
                let values = weeks
                    .values()
                    .map(|b| b.max_vo2_max.unwrap_or(f64::NAN))
                    .collect();
                let latest = match (last, most_recent_vo2_max) {
                    (Some((week, _)), Some(value)) => Some(LatestSummary { week: *week, value }),
                    _ => None,
                };
                (
                    vec![Series {
                        name: MAX_VO2_MAX_SERIES.to_string(),
                        values,
                    }],
                    latest,
                )
            }
        };

        AggregationResult {
            kind: self.kind,
            window,
            cutoff,
            ordered_week_keys,
            series,
            latest,
            stats,
        }
    }
}
