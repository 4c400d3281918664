//! Chart page rendering, once or on a refresh interval.

use crate::args::{client, load_and_aggregate, ChartArgs};
use log::{error, info};
use runlog_chart::{ChartSlot, ChartSpec, FileRenderer, PageFormat};
use std::path::Path;
use std::time::Duration;

fn page_format(json: bool) -> PageFormat {
    if json {
        PageFormat::Json
    } else {
        PageFormat::Html
    }
}

/// Fetch, aggregate and write one chart page.
pub async fn run_render(args: &ChartArgs, out: &Path, json: bool) -> anyhow::Result<()> {
    let client = client()?;
    let result = load_and_aggregate(&client, args).await?;
    let mut slot = ChartSlot::new(FileRenderer::new(out, page_format(json)));
    let handle = slot.render(&ChartSpec::from_result(&result))?;
    info!("Chart written to {}", handle.path.display());
    Ok(())
}

/// Refresh the chart page every `interval_secs`.
///
/// Each refresh runs to completion before the next starts. A failed fetch
/// or render is logged and the previous page stays in place.
pub async fn run_watch(
    args: &ChartArgs,
    out: &Path,
    json: bool,
    interval_secs: u64,
    iterations: Option<usize>,
) -> anyhow::Result<()> {
    let client = client()?;
    let mut slot = ChartSlot::new(FileRenderer::new(out, page_format(json)));
    let mut refreshes = 0usize;

    loop {
        match load_and_aggregate(&client, args).await {
            Ok(result) => {
                if let Err(e) = slot.render(&ChartSpec::from_result(&result)) {
                    error!("Failed to render chart: {:#}", e);
                }
            }
            Err(e) => error!("{:#}", e),
        }

        refreshes += 1;
        if iterations.is_some_and(|n| refreshes >= n) {
            break;
        }
        info!("Sleeping for {} seconds before refresh", interval_secs);
        tokio::time::sleep(Duration::from_secs(interval_secs)).await;
    }

    if let Some(handle) = slot.current() {
        info!(
            "Last chart generation {} at {}",
            handle.generation,
            handle.path.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::tests::fixture_args;
    use runlog_data::SeriesKind;
    use std::path::PathBuf;

    fn temp_out(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("runlog-cmd-{}-{}", std::process::id(), name))
    }

    #[tokio::test]
    async fn test_render_writes_page() {
        let out = temp_out("render.html");
        run_render(&fixture_args(SeriesKind::Vo2Max), &out, false)
            .await
            .unwrap();
        let page = std::fs::read_to_string(&out).unwrap();
        assert!(page.contains("<title>vO2 Max</title>"));
        assert!(page.contains("49.20"));
        std::fs::remove_file(&out).unwrap();
    }

    #[tokio::test]
    async fn test_watch_runs_requested_iterations() {
        let out = temp_out("watch.json");
        run_watch(&fixture_args(SeriesKind::Categories), &out, true, 0, Some(2))
            .await
            .unwrap();
        let config: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(config["data"]["datasets"][0]["label"], "Run");
        std::fs::remove_file(&out).unwrap();
    }

    #[tokio::test]
    async fn test_watch_keeps_stale_page_on_fetch_failure() {
        let out = temp_out("stale.html");
        std::fs::write(&out, "stale").unwrap();
        let mut args = fixture_args(SeriesKind::Volume);
        args.file = Some(PathBuf::from("/nonexistent/workouts.csv"));
        run_watch(&args, &out, false, 0, Some(1)).await.unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "stale");
        std::fs::remove_file(&out).unwrap();
    }
}
