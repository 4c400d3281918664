//! Chart payload model structs.
//!
//! All structs derive `Serialize` so they can be handed to Chart.js as JSON.
//! Field names follow Chart.js option names (camelCase).

use crate::palette::{self, Swatch};
use runlog_data::aggregator::{AVERAGE_RUNNING_SUM_SERIES, DISTANCE_SERIES, MAX_VO2_MAX_SERIES};
use runlog_data::{AggregationResult, SeriesKind};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
}

/// One Chart.js dataset. `data` is index-aligned with `ChartData::labels`;
/// NaN values serialize as `null` and show as gaps.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    pub fill: bool,
    pub span_gaps: bool,
}

impl Dataset {
    fn new(label: &str, data: Vec<f64>, kind: ChartKind, swatch: Swatch) -> Self {
        Dataset {
            label: label.to_string(),
            data,
            kind,
            background_color: swatch.background.to_string(),
            border_color: swatch.border.to_string(),
            border_width: 1,
            border_radius: None,
            border_dash: None,
            tension: None,
            fill: false,
            span_gaps: false,
        }
    }
}

/// Chart.js `data` block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Everything needed to draw one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub subtitle: String,
    pub data: ChartData,
    /// Week numbers shown under each bar ("2024-24" -> "24")
    pub tick_labels: Vec<String>,
    pub y_axis_title: Option<String>,
    pub stacked: bool,
    pub begin_at_zero: bool,
    /// Drop x-axis ticks when the chart is narrower than 600px
    pub hide_ticks_when_narrow: bool,
}

pub const EMPTY_SUBTITLE: &str = "No data in selected window";

fn series_or_empty(result: &AggregationResult, name: &str) -> Vec<f64> {
    result.series(name).map(<[f64]>::to_vec).unwrap_or_default()
}

impl ChartSpec {
    pub fn from_result(result: &AggregationResult) -> ChartSpec {
        let labels: Vec<String> = result
            .ordered_week_keys
            .iter()
            .map(ToString::to_string)
            .collect();
        let tick_labels = result
            .ordered_week_keys
            .iter()
            .map(|k| k.week_label())
            .collect();
        let spec = match result.kind {
            SeriesKind::Volume => Self::volume(result, labels),
            SeriesKind::Categories => Self::categories(result, labels),
            SeriesKind::Vo2Max => Self::vo2_max(result, labels),
        };
        ChartSpec { tick_labels, ..spec }
    }

    fn volume(result: &AggregationResult, labels: Vec<String>) -> ChartSpec {
        let distance = series_or_empty(result, DISTANCE_SERIES);
        let running_sum = series_or_empty(result, AVERAGE_RUNNING_SUM_SERIES);
        let subtitle = match (result.latest, running_sum.last()) {
            (Some(latest), Some(sum)) => format!(
                "This week volume {:.2} km | Running Sum {:.2} km",
                latest.value, sum
            ),
            _ => EMPTY_SUBTITLE.to_string(),
        };

        let mut bars = Dataset::new("# Distance", distance, ChartKind::Bar, palette::DISTANCE);
        bars.border_radius = Some(5);
        let mut line = Dataset::new(
            "Average Running Sum (km)",
            running_sum,
            ChartKind::Line,
            palette::RUNNING_SUM,
        );
        line.border_width = 3;
        line.tension = Some(0.2);
        line.fill = true;

        ChartSpec {
            kind: ChartKind::Bar,
            title: "Running volume overview".to_string(),
            subtitle,
            data: ChartData {
                labels,
                datasets: vec![bars, line],
            },
            tick_labels: Vec::new(),
            y_axis_title: Some("Distance (km)".to_string()),
            stacked: false,
            begin_at_zero: true,
            hide_ticks_when_narrow: true,
        }
    }

    fn categories(result: &AggregationResult, labels: Vec<String>) -> ChartSpec {
        let datasets = result
            .series
            .iter()
            .map(|s| {
                let mut bars = Dataset::new(
                    &s.name,
                    s.values.clone(),
                    ChartKind::Bar,
                    palette::category(&s.name),
                );
                bars.border_radius = Some(5);
                bars
            })
            .collect();
        let subtitle = match result.latest {
            Some(latest) => format!("This week volume {:.2} km", latest.value),
            None => EMPTY_SUBTITLE.to_string(),
        };
        ChartSpec {
            kind: ChartKind::Bar,
            title: "Weekly volume by activity".to_string(),
            subtitle,
            data: ChartData { labels, datasets },
            tick_labels: Vec::new(),
            y_axis_title: Some("Distance (km)".to_string()),
            stacked: true,
            begin_at_zero: true,
            hide_ticks_when_narrow: true,
        }
    }

    fn vo2_max(result: &AggregationResult, labels: Vec<String>) -> ChartSpec {
        let mut line = Dataset::new(
            "Max VO2 Max",
            series_or_empty(result, MAX_VO2_MAX_SERIES),
            ChartKind::Line,
            palette::VO2_MAX,
        );
        line.border_width = 2;
        line.border_dash = Some(vec![5, 5]);
        line.tension = Some(0.3);
        line.fill = true;
        line.span_gaps = true;

        let subtitle = match result.latest {
            Some(latest) => format!("{:.2}", latest.value),
            None => EMPTY_SUBTITLE.to_string(),
        };
        ChartSpec {
            kind: ChartKind::Line,
            title: "vO2 Max".to_string(),
            subtitle,
            data: ChartData {
                labels,
                datasets: vec![line],
            },
            tick_labels: Vec::new(),
            y_axis_title: None,
            stacked: false,
            begin_at_zero: false,
            hide_ticks_when_narrow: false,
        }
    }

    /// Full Chart.js configuration object (`{type, data, options}`).
    pub fn to_chartjs_config(&self) -> Value {
        let y_title = match &self.y_axis_title {
            Some(text) => json!({ "display": true, "text": text }),
            None => json!({ "display": false }),
        };
        json!({
            "type": self.kind,
            "data": self.data,
            "options": {
                "responsive": true,
                "maintainAspectRatio": false,
                "scales": {
                    "x": {
                        "stacked": self.stacked,
                        "grid": { "display": false }
                    },
                    "y": {
                        "stacked": self.stacked,
                        "beginAtZero": self.begin_at_zero,
                        "title": y_title
                    }
                },
                "plugins": {
                    "legend": {
                        "display": self.data.datasets.len() > 1,
                        "position": "top"
                    },
                    "title": {
                        "display": true,
                        "color": palette::TITLE_COLOR,
                        "align": "start",
                        "font": { "size": 18 },
                        "text": self.title
                    },
                    "subtitle": {
                        "display": true,
                        "color": palette::TITLE_COLOR,
                        "align": "start",
                        "text": self.subtitle
                    },
                    "tooltip": { "enabled": true }
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use runlog_data::WeeklyAggregator;
    use runlog_sheet::WindowOption;

    const FIXTURE: &str = include_str!("../../fixtures/workouts.csv");

    fn spec_for(kind: SeriesKind, today: NaiveDate) -> ChartSpec {
        let result = WeeklyAggregator::new(kind, today).aggregate(FIXTURE, WindowOption::SixMonths);
        ChartSpec::from_result(&result)
    }

    fn july_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()
    }

    #[test]
    fn test_volume_spec() {
        let spec = spec_for(SeriesKind::Volume, july_15());
        assert_eq!(spec.data.labels, vec!["2024-07", "2024-24", "2024-27", "2024-28"]);
        assert_eq!(spec.tick_labels, vec!["07", "24", "27", "28"]);
        assert_eq!(spec.data.datasets.len(), 2);
        assert_eq!(spec.data.datasets[0].label, "# Distance");
        assert_eq!(spec.data.datasets[1].kind, ChartKind::Line);
        assert_eq!(spec.subtitle, "This week volume 6.50 km | Running Sum 6.50 km");
    }

    #[test]
    fn test_categories_spec_is_stacked() {
        let spec = spec_for(SeriesKind::Categories, july_15());
        let labels: Vec<&str> = spec.data.datasets.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["Run", "Cycling", "Swim"]);
        assert!(spec.stacked);
        assert!(spec.hide_ticks_when_narrow);
        assert_eq!(spec.data.datasets[1].background_color, palette::category("Cycling").background);
    }

    #[test]
    fn test_vo2_max_spec() {
        let spec = spec_for(SeriesKind::Vo2Max, july_15());
        assert_eq!(spec.title, "vO2 Max");
        assert_eq!(spec.subtitle, "49.20");
        assert!(spec.data.datasets[0].span_gaps);
        assert!(!spec.hide_ticks_when_narrow);
    }

    #[test]
    fn test_empty_spec() {
        let spec = spec_for(SeriesKind::Volume, NaiveDate::from_ymd_opt(2030, 1, 1).unwrap());
        assert!(spec.data.labels.is_empty());
        assert_eq!(spec.subtitle, EMPTY_SUBTITLE);
    }

    #[test]
    fn test_config_json_shape() {
        let spec = spec_for(SeriesKind::Volume, july_15());
        let config = spec.to_chartjs_config();
        assert_eq!(config["type"], "bar");
        assert_eq!(config["data"]["labels"][1], "2024-24");
        assert_eq!(config["data"]["datasets"][0]["label"], "# Distance");
        assert_eq!(config["data"]["datasets"][0]["data"][1], 25.0);
        // the "abc" distance week is a gap, not zero
        assert!(config["data"]["datasets"][0]["data"][2].is_null());
        assert_eq!(config["data"]["datasets"][1]["type"], "line");
        assert_eq!(config["options"]["plugins"]["title"]["text"], "Running volume overview");
        assert_eq!(config["options"]["scales"]["y"]["title"]["text"], "Distance (km)");
    }
}
