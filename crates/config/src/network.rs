// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-network account reserve schedules.
//!
//! Reserve values are embedded at compile time from `network_reserves.json`
//! and can be overridden with `XRPL_RESERVE_BASE_DROPS` and
//! `XRPL_RESERVE_INCREMENT_DROPS`.

use crate::ConfigError;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

const RESERVES_JSON: &str = include_str!("network_reserves.json");

/// The ledger network a deployment talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
    Devnet,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "devnet" => Ok(Network::Devnet),
            other => Err(ConfigError::ValidateError(format!(
                "Invalid network '{}'. Must be one of: mainnet, testnet, devnet",
                other
            ))),
        }
    }
}

/// Base and owner reserves, in drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveSchedule {
    /// Reserve every funded account must hold.
    pub base_drops: u64,
    /// Additional reserve per owned ledger object.
    pub increment_drops: u64,
}

impl ReserveSchedule {
    /// Total reserve held by an account owning `owner_count` objects.
    pub fn total_for(&self, owner_count: u32) -> u64 {
        self.base_drops
            .saturating_add(self.increment_drops.saturating_mul(u64::from(owner_count)))
    }
}

impl Default for ReserveSchedule {
    fn default() -> Self {
        Self {
            base_drops: 1_000_000,
            increment_drops: 200_000,
        }
    }
}

/// All embedded reserve schedules keyed by network name.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct NetworkReserves {
    schedules: HashMap<String, ReserveSchedule>,
}

impl NetworkReserves {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(RESERVES_JSON)?)
    }

    pub fn get(&self, network: Network) -> Option<&ReserveSchedule> {
        self.schedules.get(network.as_str())
    }

    pub fn get_or_error(&self, network: Network) -> Result<&ReserveSchedule, ConfigError> {
        self.get(network)
            .ok_or_else(|| ConfigError::UnknownNetwork(network.to_string()))
    }
}
