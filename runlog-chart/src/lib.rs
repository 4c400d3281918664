//! Chart rendering for weekly workout aggregations.
//!
//! This crate provides:
//! - `models`: serializable Chart.js payloads built from an `AggregationResult`
//! - `palette`: colors for each dataset
//! - `html`: a standalone page embedding the Chart.js config
//! - `slot`: single-owner handle for the currently displayed chart

pub mod html;
pub mod models;
pub mod palette;
pub mod slot;

pub use models::{ChartData, ChartKind, ChartSpec, Dataset};
pub use slot::{ChartSlot, Dispose, FileRenderer, PageFormat, Renderer};
