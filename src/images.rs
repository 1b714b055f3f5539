use tracing::info;

use crate::dataset::Dataset;
use crate::error::{ReportError, Result};
use crate::patterns;
use crate::stats::ImageRatio;

/// Share of rows whose path names a `.jpg`, `.gif` or `.png` file.
pub fn image_ratio(dataset: &Dataset) -> Result<ImageRatio> {
    let mut image_count = 0;
    for row in dataset.rows() {
        if patterns::is_image_path(row.path()?) {
            image_count += 1;
        }
    }

    let total_count = dataset.len();
    let percentage = percentage(image_count, total_count)?;

    info!(
        action = "complete",
        component = "image_ratio",
        image_count,
        total_count,
        percentage,
        "Image request ratio computed"
    );

    Ok(ImageRatio {
        image_count,
        total_count,
        percentage,
    })
}

pub fn percentage(part: usize, total: usize) -> Result<f64> {
    if total == 0 {
        return Err(ReportError::Division);
    }
    Ok(part as f64 / total as f64 * 100.0)
}
