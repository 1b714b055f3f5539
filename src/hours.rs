use chrono::{NaiveDateTime, Timelike};
use tracing::info;

use crate::dataset::Dataset;
use crate::error::{ReportError, Result};
use crate::patterns;
use crate::stats::HourlyHits;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Accepts only zero-padded `YYYY-MM-DD HH:MM:SS` that is also a real date.
pub fn parse_hour(line: usize, value: &str) -> Result<u32> {
    if !patterns::is_exact_timestamp(value) {
        return Err(ReportError::Parse {
            line,
            value: value.to_string(),
            source: None,
        });
    }

    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map(|timestamp| timestamp.hour())
        .map_err(|source| ReportError::Parse {
            line,
            value: value.to_string(),
            source: Some(source),
        })
}

/// Requests per hour of day, in the order each hour is first seen.
pub fn hourly_hits(dataset: &Dataset) -> Result<HourlyHits> {
    let mut hourly = HourlyHits::default();
    for row in dataset.rows() {
        hourly.record(parse_hour(row.line, row.timestamp()?)?);
    }

    info!(
        action = "complete",
        component = "hourly_hits",
        distinct_hours = hourly.buckets().len(),
        total_hits = hourly.total(),
        "Hourly histogram computed"
    );

    Ok(hourly)
}
