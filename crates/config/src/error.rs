// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration from environment: {0}")]
    EnvError(#[from] envy::Error),

    #[error("Failed to read env file: {0}")]
    EnvFileError(#[from] dotenv::Error),

    #[error("Invalid embedded network reserves JSON: {0}")]
    ReservesJsonError(#[from] serde_json::Error),

    #[error("No reserve schedule configured for network '{0}'")]
    UnknownNetwork(String),

    #[error("Configuration validation failed: {0}")]
    ValidateError(String),
}
