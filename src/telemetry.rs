//! Tracing subscriber setup
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! binary's job. `api-coverage` calls [`init_subscriber`] at startup.
//!
//! ```rust,ignore
//! use elevenlabs_client::telemetry::{init_subscriber, OutputFormat, SubscriberConfig};
//!
//! let config = SubscriberConfig::builder()
//!     .log_level(tracing::Level::DEBUG)
//!     .output_format(OutputFormat::Json)
//!     .build();
//! let _guard = init_subscriber(config)?;
//! ```

use std::path::PathBuf;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Subscriber initialization failure
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("invalid log level: {0} (valid: trace, debug, info, warn, error)")]
    InvalidLevel(String),
    #[error("invalid log format: {0} (valid: text, json, json-compact)")]
    InvalidFormat(String),
    #[error("failed to initialize tracing: {0}")]
    Init(String),
}

/// Output format for tracing logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text format
    #[default]
    Text,
    /// One JSON object per event
    Json,
    /// JSON with event fields flattened to the top level
    JsonCompact,
}

/// Configuration for the tracing subscriber
#[derive(Debug, Clone)]
pub struct SubscriberConfig {
    /// Level applied to this crate's targets when `RUST_LOG` is unset
    pub log_level: tracing::Level,
    pub output_format: OutputFormat,
    /// Write to this file instead of stderr
    pub log_file: Option<PathBuf>,
}

impl Default for SubscriberConfig {
    fn default() -> Self {
        Self {
            log_level: tracing::Level::WARN,
            output_format: OutputFormat::Text,
            log_file: None,
        }
    }
}

impl SubscriberConfig {
    /// Create a new builder
    pub fn builder() -> SubscriberConfigBuilder {
        SubscriberConfigBuilder::default()
    }

    /// Debug-level text output on stderr
    pub fn debug() -> Self {
        Self {
            log_level: tracing::Level::DEBUG,
            ..Self::default()
        }
    }
}

/// Builder for [`SubscriberConfig`]
#[derive(Debug, Default)]
pub struct SubscriberConfigBuilder {
    log_level: Option<tracing::Level>,
    output_format: Option<OutputFormat>,
    log_file: Option<PathBuf>,
}

impl SubscriberConfigBuilder {
    /// Set the log level
    pub fn log_level(mut self, level: tracing::Level) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Set the log level from a string
    pub fn log_level_str(mut self, level: &str) -> Result<Self, TelemetryError> {
        let level = match level.to_lowercase().as_str() {
            "trace" => tracing::Level::TRACE,
            "debug" => tracing::Level::DEBUG,
            "info" => tracing::Level::INFO,
            "warn" => tracing::Level::WARN,
            "error" => tracing::Level::ERROR,
            _ => return Err(TelemetryError::InvalidLevel(level.to_string())),
        };
        self.log_level = Some(level);
        Ok(self)
    }

    /// Set the output format
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    /// Set the output format from a string
    pub fn output_format_str(self, format: &str) -> Result<Self, TelemetryError> {
        let format = match format.to_lowercase().as_str() {
            "text" => OutputFormat::Text,
            "json" => OutputFormat::Json,
            "json-compact" => OutputFormat::JsonCompact,
            _ => return Err(TelemetryError::InvalidFormat(format.to_string())),
        };
        Ok(self.output_format(format))
    }

    /// Set the log file path
    pub fn log_file(mut self, path: PathBuf) -> Self {
        self.log_file = Some(path);
        self
    }

    /// Build the configuration
    pub fn build(self) -> SubscriberConfig {
        SubscriberConfig {
            log_level: self.log_level.unwrap_or(tracing::Level::WARN),
            output_format: self.output_format.unwrap_or_default(),
            log_file: self.log_file,
        }
    }
}

fn default_filter(level: tracing::Level) -> String {
    let level = level.as_str().to_lowercase();
    format!("elevenlabs_client={level},api_coverage={level}")
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `config.log_level`. The returned guard must
/// be kept alive for the duration of the program when file logging is enabled.
/// Calling this twice is not an error; the first subscriber stays installed.
pub fn init_subscriber(config: SubscriberConfig) -> Result<Option<WorkerGuard>, TelemetryError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(config.log_level)));

    let (writer, guard) = match &config.log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            let file_name = path
                .file_name()
                .ok_or_else(|| TelemetryError::Init(format!("not a file path: {}", path.display())))?;
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(non_blocking), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    let init_result = match config.output_format {
        OutputFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_target(true)
            .json()
            .try_init(),
        OutputFormat::JsonCompact => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_target(true)
            .json()
            .flatten_event(true)
            .try_init(),
        OutputFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_target(true)
            .try_init(),
    };

    match init_result {
        Ok(()) => Ok(guard),
        Err(e) => {
            let message = e.to_string();
            if message.contains("already been set") || message.contains("already initialized") {
                Ok(None)
            } else {
                Err(TelemetryError::Init(message))
            }
        }
    }
}
