//! Command implementations for the runlog CLI.
//!
//! Provides subcommands for printing weekly aggregations of the workout
//! sheet and rendering them as Chart.js pages, once or on an interval.

use clap::Subcommand;
use std::path::PathBuf;

pub mod args;
pub mod render;
pub mod summary;

pub use args::ChartArgs;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print weekly totals for the selected time window
    Summary {
        #[command(flatten)]
        chart: ChartArgs,

        /// Print the aggregation as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Render a chart page once
    Render {
        #[command(flatten)]
        chart: ChartArgs,

        /// Output path for the chart page
        #[arg(short = 'o', long, default_value = "chart.html")]
        out: PathBuf,

        /// Write the Chart.js config as JSON instead of an HTML page
        #[arg(long)]
        json: bool,
    },

    /// Re-fetch and re-render the chart page on an interval
    Watch {
        #[command(flatten)]
        chart: ChartArgs,

        /// Output path for the chart page (replaced on every refresh)
        #[arg(short = 'o', long, default_value = "chart.html")]
        out: PathBuf,

        /// Write the Chart.js config as JSON instead of an HTML page
        #[arg(long)]
        json: bool,

        /// Seconds between refreshes
        #[arg(long, default_value_t = 300)]
        interval_secs: u64,

        /// Stop after this many refreshes (runs until interrupted if unset)
        #[arg(long)]
        iterations: Option<usize>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { chart, json } => summary::run_summary(&chart, json).await,
        Command::Render { chart, out, json } => render::run_render(&chart, &out, json).await,
        Command::Watch {
            chart,
            out,
            json,
            interval_secs,
            iterations,
        } => render::run_watch(&chart, &out, json, interval_secs, iterations).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use runlog_data::SeriesKind;
    use runlog_sheet::WindowOption;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn test_parse_watch_defaults() {
        let cli = TestCli::try_parse_from(["runlog", "watch"]).unwrap();
        match cli.command {
            Command::Watch {
                chart,
                out,
                json,
                interval_secs,
                iterations,
            } => {
                assert_eq!(chart.kind, SeriesKind::Volume);
                assert_eq!(chart.window, WindowOption::SixMonths);
                assert_eq!(out, PathBuf::from("chart.html"));
                assert!(!json);
                assert_eq!(interval_secs, 300);
                assert_eq!(iterations, None);
            }
            _ => panic!("expected watch"),
        }
    }

    #[test]
    fn test_parse_render_options() {
        let cli = TestCli::try_parse_from([
            "runlog", "render", "-k", "vo2max", "-w", "12months", "-o", "vo2.html",
        ])
        .unwrap();
        match cli.command {
            Command::Render { chart, out, .. } => {
                assert_eq!(chart.kind, SeriesKind::Vo2Max);
                assert_eq!(chart.window, WindowOption::TwelveMonths);
                assert_eq!(out, PathBuf::from("vo2.html"));
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_rejects_unknown_window() {
        assert!(TestCli::try_parse_from(["runlog", "summary", "-w", "3months"]).is_err());
        assert!(TestCli::try_parse_from(["runlog", "summary", "-k", "weekly"]).is_err());
    }
}
