use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to fetch access log: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Access log is not valid UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),

    #[error("Row {line} has no column {column} (found {found} fields)")]
    RowShape {
        line: usize,
        column: usize,
        found: usize,
    },

    #[error("Row {line} is not a valid CSV record: {source}")]
    Csv { line: usize, source: csv::Error },

    #[error("Row {line} has an invalid timestamp {value:?}, expected YYYY-MM-DD HH:MM:SS")]
    Parse {
        line: usize,
        value: String,
        #[source]
        source: Option<chrono::ParseError>,
    },

    #[error("Cannot compute a percentage over an empty dataset")]
    Division,

    #[error("Failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
