//! Core types for workout spreadsheet exports.
//!
//! - `schema`: column index mapping of the published sheet
//! - `record`: typed rows parsed from the CSV export
//! - `measure` / `category`: cell value types
//! - `week_key`: ISO year-week bucket keys
//! - `window`: trailing time-window options and cutoff rules
//! - `sheet`: where the CSV comes from (published URL or local file)

pub mod category;
pub mod error;
pub mod measure;
pub mod record;
pub mod schema;
pub mod sheet;
pub mod week_key;
pub mod window;

pub use category::Category;
pub use error::{Result, SheetError};
pub use measure::Measure;
pub use record::{ParseStats, WorkoutRecord};
pub use schema::ColumnSchema;
pub use week_key::WeekKey;
pub use window::{CutoffRule, WindowOption};
