// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod error;
mod ledger;
mod log;
mod network;

pub use error::ConfigError;
pub use ledger::LedgerConfig;
pub use log::LogConfig;
pub use network::{Network, NetworkReserves, ReserveSchedule};

use serde::Deserialize;
use std::path::Path;

const ENV_PREFIX: &str = "XRPL_";

/// Flat view of the `XRPL_*` environment, as envy reads it.
#[derive(Debug, Default, Deserialize)]
struct EnvVars {
    log_level: Option<String>,
    log_json: Option<bool>,
    log_strip_ansi: Option<bool>,
    log_write: Option<bool>,
    log_write_path: Option<String>,
    log_write_max_file_size: Option<u64>,
    log_write_max_files: Option<usize>,
    network: Option<String>,
    reserve_base_drops: Option<u64>,
    reserve_increment_drops: Option<u64>,
    time_format: Option<String>,
    ipfs_gateway: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizerConfig {
    pub log: LogConfig,
    pub ledger: LedgerConfig,
}

impl NormalizerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let vars = envy::prefixed(ENV_PREFIX).from_env::<EnvVars>()?;
        let config = Self::from_vars(vars)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` into the process environment, then reads it like
    /// [`NormalizerConfig::from_env`]. Variables already set take precedence.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenv::from_path(path.as_ref())?;
        Self::from_env()
    }

    fn from_vars(vars: EnvVars) -> Result<Self, ConfigError> {
        let log_defaults = LogConfig::default();
        let log = LogConfig {
            level: vars.log_level.unwrap_or(log_defaults.level),
            json: vars.log_json.unwrap_or(log_defaults.json),
            strip_ansi: vars.log_strip_ansi.unwrap_or(log_defaults.strip_ansi),
            write: vars.log_write.unwrap_or(log_defaults.write),
            write_path: vars.log_write_path.unwrap_or(log_defaults.write_path),
            write_max_file_size: vars
                .log_write_max_file_size
                .unwrap_or(log_defaults.write_max_file_size),
            write_max_files: vars
                .log_write_max_files
                .unwrap_or(log_defaults.write_max_files),
        };

        let network = match vars.network {
            Some(name) => name.parse::<Network>()?,
            None => Network::default(),
        };
        let schedule = *NetworkReserves::load()?.get_or_error(network)?;

        let ledger_defaults = LedgerConfig::default();
        let ledger = LedgerConfig {
            network,
            reserves: ReserveSchedule {
                base_drops: vars.reserve_base_drops.unwrap_or(schedule.base_drops),
                increment_drops: vars
                    .reserve_increment_drops
                    .unwrap_or(schedule.increment_drops),
            },
            time_format: vars.time_format.unwrap_or(ledger_defaults.time_format),
            ipfs_gateway: vars.ipfs_gateway.unwrap_or(ledger_defaults.ipfs_gateway),
        };

        Ok(Self { log, ledger })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.log.validate()?;
        self.ledger.validate()?;
        Ok(())
    }
}
