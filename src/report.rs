use std::time::Instant;
use tracing::info;
use url::Url;

use crate::args::OutputFormat;
use crate::dataset::{self, Dataset};
use crate::error::Result;
use crate::stats::AnalysisResult;
use crate::{agents, fetch, hours, images};

pub fn analyze_url(url: &Url) -> Result<AnalysisResult> {
    let total_start_time = Instant::now();
    info!(
        action = "start",
        component = "analysis",
        "Starting access log analysis"
    );

    let text = fetch::fetch_text(url)?;
    let dataset = dataset::parse_rows(&text)?;
    let result = analyze_dataset(&dataset)?;

    info!(
        action = "complete",
        component = "analysis",
        duration_ms = total_start_time.elapsed().as_millis(),
        "Analysis completed successfully"
    );
    Ok(result)
}

/// Runs all three analyses; any failure discards the others.
pub fn analyze_dataset(dataset: &Dataset) -> Result<AnalysisResult> {
    let image_ratio = images::image_ratio(dataset)?;
    let browsers = agents::browser_ranking(dataset)?;
    let hourly = hours::hourly_hits(dataset)?;

    Ok(AnalysisResult {
        image_ratio,
        browsers,
        hourly,
    })
}

pub fn render_text(result: &AnalysisResult) -> String {
    let mut out = format!(
        "Image requests account for {:.2} % of all requests\n\n",
        result.image_ratio.percentage
    );

    if let Some(top) = result.browsers.top() {
        out.push_str(&format!(
            "The most popular browser is {} with {} hits\n\n",
            top.browser, top.hits
        ));
    }

    out.push_str("Browser Ranking\n===============\n");
    for entry in result.browsers.entries() {
        out.push_str(&format!("{}\t= {}\n", entry.browser, entry.hits));
    }

    out.push_str("\nHits per Hour\n=============\n");
    for bucket in result.hourly.buckets() {
        out.push_str(&format!("Hour {} has {} hits.\n", bucket.hour, bucket.hits));
    }

    out
}

pub fn render_json(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

pub fn print_analysis_results(result: &AnalysisResult, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text => render_text(result),
        OutputFormat::Json => render_json(result)? + "\n",
    };
    print!("{}", rendered);
    Ok(())
}
