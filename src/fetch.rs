use reqwest::blocking::Client;
use std::time::Instant;
use tracing::{info, warn};
use url::Url;

use crate::error::Result;

/// Downloads `url` with a single GET and decodes the body as UTF-8.
///
/// The status code is not checked: whatever body the server returns is
/// handed to the parser. The client lives only for this call.
pub fn fetch_text(url: &Url) -> Result<String> {
    let start_time = Instant::now();
    info!(action = "start", component = "fetch", url = %url, "Downloading access log");

    let client = Client::builder().build()?;
    let response = client.get(url.as_str()).send()?;

    let status = response.status();
    if !status.is_success() {
        warn!(
            action = "response",
            component = "fetch",
            status = %status,
            "Server returned a non-success status, using body as-is"
        );
    }

    let body = response.bytes()?;
    let text = String::from_utf8(body.to_vec())?;

    info!(
        action = "complete",
        component = "fetch",
        bytes = text.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Access log downloaded"
    );
    Ok(text)
}
