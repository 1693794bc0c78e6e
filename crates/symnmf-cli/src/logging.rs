//! Structured logging for the command line host
//!
//! Logs go to stderr so stdout carries only results.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter used when no `-v` flag is given (default `warn`)
//! - `SYMNMF_LOG_FORMAT`: `pretty`, `compact` or `json` (default `compact`)

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line human-readable format
    Pretty,
    /// Single line per event
    Compact,
    /// JSON, one object per event
    Json,
}

impl LogFormat {
    /// Parse from string, falling back to compact
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Compact,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub format: LogFormat,
    /// Filter directive (e.g. `symnmf_decomp=debug,warn`)
    pub filter: String,
}

impl LogConfig {
    /// Build from the `-v` count and the environment
    pub fn from_env(verbose: u8) -> Self {
        let format = std::env::var("SYMNMF_LOG_FORMAT")
            .map(|s| LogFormat::parse(&s))
            .unwrap_or(LogFormat::Compact);
        let filter = filter_directive(verbose, std::env::var("RUST_LOG").ok());
        Self { format, filter }
    }
}

/// `-v` → info, `-vv` → debug, `-vvv` → trace; otherwise `RUST_LOG` or `warn`
pub fn filter_directive(verbose: u8, env: Option<String>) -> String {
    match verbose {
        0 => env
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "warn".to_string()),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber
///
/// Call once at startup.
pub fn init_tracing(config: &LogConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.filter)?;

    match config.format {
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .pretty()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(filter);
            tracing_subscriber::registry().with(layer).try_init()?;
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(filter);
            tracing_subscriber::registry().with(layer).try_init()?;
        }
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(filter);
            tracing_subscriber::registry().with(layer).try_init()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("compact"), LogFormat::Compact);
        assert_eq!(LogFormat::parse("unknown"), LogFormat::Compact);
    }

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(0, None), "warn");
        assert_eq!(filter_directive(0, Some(String::new())), "warn");
        assert_eq!(
            filter_directive(0, Some("symnmf_decomp=debug".to_string())),
            "symnmf_decomp=debug"
        );
        assert_eq!(filter_directive(1, Some("error".to_string())), "info");
        assert_eq!(filter_directive(2, None), "debug");
        assert_eq!(filter_directive(5, None), "trace");
    }
}
