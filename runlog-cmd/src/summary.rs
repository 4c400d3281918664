//! Weekly summary printed to stdout.

use crate::args::{client, load_and_aggregate, ChartArgs};
use runlog_data::AggregationResult;
use std::fmt::{self, Write};

/// Print the weekly aggregation as a table, or as JSON.
pub async fn run_summary(args: &ChartArgs, json: bool) -> anyhow::Result<()> {
    let client = client()?;
    let result = load_and_aggregate(&client, args).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", format_table(&result)?);
    }
    Ok(())
}

/// One row per week, one column per series. Invalid weeks print as NaN.
pub fn format_table(result: &AggregationResult) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write!(out, "{:<8}", "week")?;
    for series in &result.series {
        write!(out, " {:>20}", series.name)?;
    }
    writeln!(out)?;

    for (i, week) in result.ordered_week_keys.iter().enumerate() {
        write!(out, "{:<8}", week.to_string())?;
        for series in &result.series {
            write!(out, " {:>20.2}", series.values[i])?;
        }
        writeln!(out)?;
    }

    match result.latest {
        Some(latest) => writeln!(out, "latest {}: {:.2}", latest.week, latest.value)?,
        None => writeln!(out, "no data in selected window")?,
    }
    Ok(out)
}
