//! Standalone HTML page for a chart.
//!
//! The page template is embedded at compile time and loads Chart.js from a
//! CDN. The chart config is inlined as JSON.

use crate::models::ChartSpec;

static PAGE_TEMPLATE: &str = include_str!("../assets/chart-page.html");

/// Escape text for use inside HTML element content.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Serialize for inlining in a `<script>` block; `</` would end the block.
fn script_json<T: serde::Serialize>(value: &T) -> serde_json::Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// Render a complete HTML page for `spec`.
pub fn render_page(spec: &ChartSpec) -> serde_json::Result<String> {
    let config = script_json(&spec.to_chartjs_config())?;
    let ticks = script_json(&spec.tick_labels)?;
    Ok(PAGE_TEMPLATE
        .replace("{{TITLE}}", &escape_html(&spec.title))
        .replace("{{CONFIG_JSON}}", &config)
        .replace("{{TICKS_JSON}}", &ticks)
        .replace(
            "{{HIDE_NARROW_TICKS}}",
            if spec.hide_ticks_when_narrow { "true" } else { "false" },
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChartData, ChartKind};

    fn spec(title: &str) -> ChartSpec {
        spec_with_ticks(title, true)
    }

    fn spec_with_ticks(title: &str, hide_ticks_when_narrow: bool) -> ChartSpec {
        ChartSpec {
            kind: ChartKind::Bar,
            title: title.to_string(),
            subtitle: "</script><b>".to_string(),
            data: ChartData {
                labels: vec!["2024-24".to_string()],
                datasets: Vec::new(),
            },
            tick_labels: vec!["24".to_string()],
            y_axis_title: None,
            stacked: false,
            begin_at_zero: true,
            hide_ticks_when_narrow,
        }
    }

    #[test]
    fn test_render_page_fills_template() {
        let page = render_page(&spec("Running volume overview")).unwrap();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Running volume overview</title>"));
        assert!(page.contains("\"labels\":[\"2024-24\"]"));
        assert!(page.contains("var ticks = [\"24\"];"));
        assert!(!page.contains("{{"));
    }

    #[test]
    fn test_narrow_tick_flag() {
        let page = render_page(&spec_with_ticks("Volume", true)).unwrap();
        assert!(page.contains("var hideNarrowTicks = true;"));
        let page = render_page(&spec_with_ticks("vO2 Max", false)).unwrap();
        assert!(page.contains("var hideNarrowTicks = false;"));
    }

    #[test]
    fn test_render_page_escapes() {
        let page = render_page(&spec("A <b> & B")).unwrap();
        assert!(page.contains("<title>A &lt;b&gt; &amp; B</title>"));
        // only the template's own closing tags remain
        assert_eq!(page.matches("</script>").count(), 2);
    }
}
