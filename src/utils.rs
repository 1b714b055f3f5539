use time::macros::format_description;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

use crate::args::Args;

/// Logs go to stderr so the report on stdout stays clean.
pub fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("logstat=info")
    } else {
        EnvFilter::new("error")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::new(format_description!(
            "[hour]:[minute]:[second].[subsecond digits:3]"
        )))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn validate_args(args: &Args) -> anyhow::Result<()> {
    match args.url.scheme() {
        "http" | "https" => {}
        scheme => anyhow::bail!("Unsupported URL scheme '{}', expected http or https", scheme),
    }

    if args.url.host_str().is_none() {
        anyhow::bail!("URL '{}' has no host", args.url);
    }

    Ok(())
}
