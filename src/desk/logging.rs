//! Logging and tracing configuration
//!
//! This module provides centralized logging configuration for the allocator binary.

use crate::types::config::CliArgs;
use std::io;
use tracing::{info, Level};
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Tracing target of the library crate
pub const LIBRARY_TARGET: &str = "hotel_room_allocator";

/// Tracing target of the `hotel-allocator` binary
pub const BINARY_TARGET: &str = "hotel_allocator";

const LOG_FILE_PREFIX: &str = "hotel-allocator";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for the crate
    pub level: Level,
    /// Whether to emit JSON instead of the pretty console format
    pub json_format: bool,
    /// Log file directory, when logging to a daily rolling file
    pub log_directory: Option<String>,
    /// Whether to log span open/close events
    pub enable_span_events: bool,
    /// Whether to use ANSI colors on the console
    pub enable_ansi: bool,
    /// Custom environment filter, overrides `level`
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json_format: false,
            log_directory: None,
            enable_span_events: false,
            enable_ansi: true,
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Enable JSON formatting
    pub fn with_json_format(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Also log to a daily rolling file in `directory`
    pub fn with_file_logging(mut self, directory: impl Into<String>) -> Self {
        self.log_directory = Some(directory.into());
        self
    }

    /// Enable span events
    pub fn with_span_events(mut self) -> Self {
        self.enable_span_events = true;
        self
    }

    /// Disable ANSI colors
    pub fn without_ansi(mut self) -> Self {
        self.enable_ansi = false;
        self
    }

    /// Set custom environment filter
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Build the configuration selected by the command line flags
    ///
    /// `--debug` wins over `--verbose`; without either only warnings and errors are
    /// shown.
    pub fn from_cli_args(args: &CliArgs) -> Self {
        let mut config = if args.debug {
            Self::new().with_level(Level::DEBUG).with_span_events()
        } else if args.verbose {
            Self::new().with_level(Level::INFO).with_span_events()
        } else {
            Self::new().with_level(Level::WARN)
        };

        if args.log_json {
            config = config.with_json_format();
        }
        if let Some(directory) = &args.log_dir {
            config = config.with_file_logging(directory.clone());
        }
        config
    }

    /// Filter directive used when neither a custom filter nor `RUST_LOG` is set
    ///
    /// Covers the library and the binary, which is a separate tracing target.
    pub fn default_directive(&self) -> String {
        format!("{}={level},{}={level}", LIBRARY_TARGET, BINARY_TARGET, level = self.level)
    }

    fn span_events(&self) -> FmtSpan {
        if self.enable_span_events {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// Initialize the global tracing subscriber
    pub fn init(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let env_filter = match &self.env_filter {
            Some(filter) => EnvFilter::try_new(filter)?,
            None => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(self.default_directive())),
        };

        let registry = Registry::default().with(env_filter);

        // Console output always goes to stderr so stdout carries only results
        let console_layer = if self.json_format {
            fmt::layer()
                .json()
                .with_writer(io::stderr)
                .with_span_events(self.span_events())
                .boxed()
        } else {
            fmt::layer()
                .pretty()
                .with_writer(io::stderr)
                .with_ansi(self.enable_ansi)
                .with_span_events(self.span_events())
                .boxed()
        };

        match &self.log_directory {
            Some(directory) => {
                let file_appender = rolling::daily(directory, LOG_FILE_PREFIX);
                let (file_writer, guard) = non_blocking(file_appender);
                let file_layer = fmt::layer()
                    .json()
                    .with_writer(file_writer)
                    .with_span_events(self.span_events());

                registry.with(console_layer).with(file_layer).try_init()?;

                // The writer thread must outlive every log call in the process
                std::mem::forget(guard);
            }
            None => registry.with(console_layer).try_init()?,
        }

        info!("Logging initialized at {}", self.level);
        Ok(())
    }
}
