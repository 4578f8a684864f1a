// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};
use xrpl_normalizer_config::LogConfig;

const LOG_FILE_NAME: &str = "logs.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level '{level}': {source}")]
    InvalidLogLevel {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to create log directory or file appender: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A global subscriber is already installed: {0}")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}

/// Configuration for logging initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggingConfig<'a> {
    pub level: &'a str,
    pub json_format: bool,
    pub strip_ansi: bool,
    pub write_to_file: bool,
    pub write_path: &'a str,
    pub write_max_file_size: u64,
    pub write_max_files: usize,
}

impl<'a> From<&'a LogConfig> for LoggingConfig<'a> {
    fn from(config: &'a LogConfig) -> Self {
        Self {
            level: &config.level,
            json_format: config.json,
            strip_ansi: config.strip_ansi,
            write_to_file: config.write,
            write_path: &config.write_path,
            write_max_file_size: config.write_max_file_size,
            write_max_files: config.write_max_files,
        }
    }
}

/// Installs the global subscriber described by `config`.
pub fn init(config: &LogConfig) -> Result<(), LoggingError> {
    init_with_config(LoggingConfig::from(config))
}

/// Initialize tracing/logging with the specified configuration
///
/// # Examples
/// ```no_run
/// use xrpl_normalizer::logging::{self, LoggingConfig};
///
/// logging::init_with_config(LoggingConfig {
///     level: "debug",
///     json_format: false,
///     strip_ansi: false,
///     write_to_file: true,
///     write_path: "./logs",
///     write_max_file_size: 5242880,
///     write_max_files: 5,
/// })?;
/// # Ok::<(), xrpl_normalizer::logging::LoggingError>(())
/// ```
///
/// # Log Rotation
/// When a log file reaches `write_max_file_size`, it is rotated:
/// - Current: logs.log
/// - After rotation: logs.log.1, logs.log.2, etc.
/// - Keeps `write_max_files` files in total, the current one included
pub fn init_with_config(config: LoggingConfig) -> Result<(), LoggingError> {
    let filter =
        EnvFilter::try_new(config.level).map_err(|source| LoggingError::InvalidLogLevel {
            level: config.level.to_string(),
            source,
        })?;

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    if config.json_format {
        layers.push(fmt::layer().json().with_ansi(!config.strip_ansi).boxed());
    } else {
        layers.push(fmt::layer().with_ansi(!config.strip_ansi).boxed());
    }

    if config.write_to_file {
        std::fs::create_dir_all(config.write_path)?;

        let log_file_path = PathBuf::from(config.write_path).join(LOG_FILE_NAME);
        // The appender counts rotated files only.
        let file_appender = BasicRollingFileAppender::new(
            log_file_path,
            RollingConditionBasic::new().max_size(config.write_max_file_size),
            config.write_max_files.saturating_sub(1),
        )?;

        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        // The writer flushes until the guard drops; keep it for the process lifetime.
        std::mem::forget(guard);

        if config.json_format {
            layers.push(fmt::layer().json().with_writer(non_blocking).boxed());
        } else {
            layers.push(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking)
                    .boxed(),
            );
        }
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()?;

    Ok(())
}
