use clap::{Parser, ValueEnum};
use url::Url;

#[derive(Parser, Debug)]
#[command(
    name = "logstat",
    about = "Download a CSV access log and report image share, browser ranking and hourly hits",
    version,
    long_about = None
)]
pub struct Args {
    /// URL of the CSV access log (path,timestamp,user-agent per row)
    pub url: Url,

    /// Output format of the report
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
