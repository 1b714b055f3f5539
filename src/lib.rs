pub mod agents;
pub mod args;
pub mod dataset;
pub mod error;
pub mod fetch;
pub mod hours;
pub mod images;
pub mod patterns;
pub mod report;
pub mod stats;
pub mod utils;

pub use args::{Args, OutputFormat};
pub use dataset::{parse_rows, Dataset, Row};
pub use error::ReportError;
pub use report::{analyze_dataset, analyze_url, print_analysis_results};
pub use stats::{AnalysisResult, Browser, BrowserRanking, HourlyHits, ImageRatio};
