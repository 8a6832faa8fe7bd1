/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Static HTML export of the dashboard
//!
//! The page carries the same element ids as the hosted front end
//! (`message-display`, `data-display`, `separate-pay`, `total-pay`) and draws
//! the charts with Chart.js loaded from a CDN.

use crate::error::AppError;
use crate::presentation::dashboard::{ChartSlot, Dashboard};
use std::fmt::Write;

const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js";

/// Escapes text for use inside HTML element content
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the dashboard as a self-contained HTML page
pub fn render_html(dashboard: &Dashboard) -> Result<String, AppError> {
    let mut scripts = String::new();
    for slot in ChartSlot::ALL {
        if let Some(chart) = dashboard.chart(slot) {
            // `</` must not appear inside an inline script
            let config = serde_json::to_string(&chart.to_chartjs())?.replace("</", "<\\/");
            writeln!(
                scripts,
                "new Chart(document.getElementById('{}'), {});",
                slot.element_id(),
                config
            )
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;
        }
    }

    let message = dashboard.message().map(escape_html).unwrap_or_default();
    let data = dashboard.data().map(escape_html).unwrap_or_default();

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Crypto ETL Dashboard</title>
<script src="{CHART_JS_CDN}"></script>
</head>
<body>
<h2 id="message-display">{message}</h2>
<div style="display:flex;gap:2rem">
<div style="flex:7"><canvas id="{price}"></canvas></div>
<div style="flex:5"><canvas id="{volume}"></canvas></div>
</div>
<pre id="data-display">{data}</pre>
<script>
{scripts}</script>
</body>
</html>
"#,
        price = ChartSlot::PriceBreakdown.element_id(),
        volume = ChartSlot::VolumeShare.element_id(),
    ))
}
