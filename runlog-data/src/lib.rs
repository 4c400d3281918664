//! Weekly aggregation of workout records.
//!
//! This crate turns the raw sheet export into ISO-week buckets and
//! index-aligned series suitable for charting.

pub mod aggregator;
pub mod bucket;

pub use aggregator::{AggregationResult, LatestSummary, Series, SeriesKind, WeeklyAggregator};
pub use bucket::WeekBucket;
