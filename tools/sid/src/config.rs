//! Runtime configuration for the `sid` tool.

use clap::ValueEnum;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one result per line.
    #[default]
    Text,
    /// JSON.
    Json,
}

/// Settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct Config {
    /// Output format for command results.
    pub format: OutputFormat,

    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Config {
    /// Installs the global tracing subscriber.
    ///
    /// `RUST_LOG` wins over the configured level. Logs go to stderr so they
    /// never mix with command output.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.log_level));

        let installed = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init();

        // Only fails when a global subscriber exists; log through that one.
        if let Err(e) = installed {
            tracing::warn!(error = %e, "tracing subscriber already installed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice_keeps_first_subscriber() {
        let config = Config {
            format: OutputFormat::Text,
            log_level: "debug".to_string(),
        };
        config.init_logging();
        config.init_logging();
        assert!(tracing::dispatcher::has_been_set());
    }
}
