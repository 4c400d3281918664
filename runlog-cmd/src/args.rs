//! Arguments shared by every subcommand.

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Args;
use log::info;
use runlog_data::{AggregationResult, SeriesKind, WeeklyAggregator};
use runlog_sheet::sheet::{build_client, SheetSource};
use runlog_sheet::WindowOption;
use runlog_utils::dates::{format_date, parse_date};
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ChartArgs {
    /// Weekly view: volume, categories or vo2max
    #[arg(short = 'k', long, default_value = "volume")]
    pub kind: SeriesKind,

    /// Time window: 6months, 12months or all
    #[arg(short = 'w', long, default_value = "6months")]
    pub window: WindowOption,

    /// Published CSV export URL (defaults to the workout log sheet)
    #[arg(long, conflicts_with = "file")]
    pub url: Option<String>,

    /// Read a local CSV export instead of fetching
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Reference date for the time window, YYYY-MM-DD (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub today: Option<NaiveDate>,
}

impl ChartArgs {
    pub fn source(&self) -> SheetSource {
        match (&self.file, &self.url) {
            (Some(path), _) => SheetSource::File(path.clone()),
            (None, Some(url)) => SheetSource::Url(url.clone()),
            (None, None) => SheetSource::default(),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| Local::now().naive_local().date())
    }

    pub fn aggregator(&self) -> WeeklyAggregator {
        WeeklyAggregator::new(self.kind, self.today())
    }
}

/// Fetch the export once and aggregate it. A retrieval failure is returned
/// before any aggregation happens.
pub async fn load_and_aggregate(
    client: &reqwest::Client,
    args: &ChartArgs,
) -> anyhow::Result<AggregationResult> {
    let source = args.source();
    let body = source
        .load(client)
        .await
        .with_context(|| format!("Error fetching data from {source}"))?;
    let aggregator = args.aggregator();
    let result = aggregator.aggregate(&body, args.window);
    info!(
        "Aggregated {} weeks of {} data ({} window, today {})",
        result.ordered_week_keys.len(),
        args.kind,
        args.window,
        format_date(&args.today())
    );
    Ok(result)
}

/// Build the HTTP client used for every fetch in a command.
pub fn client() -> anyhow::Result<reqwest::Client> {
    Ok(build_client()?)
}
