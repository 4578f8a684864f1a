// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;
use crate::network::{Network, ReserveSchedule};
use chrono::format::{Item, StrftimeItems};

pub(crate) const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%:z";
pub(crate) const DEFAULT_IPFS_GATEWAY: &str = "https://ipfs.io/ipfs/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Network whose reserve schedule applies
    ///
    /// Env: XRPL_NETWORK
    /// Valid values: mainnet, testnet, devnet
    /// Default: mainnet
    pub network: Network,

    /// Base and owner reserves used for spendable balances
    ///
    /// Env: XRPL_RESERVE_BASE_DROPS, XRPL_RESERVE_INCREMENT_DROPS
    /// Default: the embedded schedule for `network`
    pub reserves: ReserveSchedule,

    /// strftime pattern used when rendering ledger timestamps
    ///
    /// Env: XRPL_TIME_FORMAT
    /// Default: %Y-%m-%d %H:%M:%S%:z
    pub time_format: String,

    /// Gateway prefix that `ipfs://` NFT URIs are rewritten to
    ///
    /// Env: XRPL_IPFS_GATEWAY
    /// Valid schemes: http://, https://
    /// Default: https://ipfs.io/ipfs/
    pub ipfs_gateway: String,
}

impl LedgerConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.time_format.trim().is_empty() {
            return Err(ConfigError::ValidateError(
                "Time format cannot be empty".to_string(),
            ));
        }

        if StrftimeItems::new(&self.time_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::ValidateError(format!(
                "Invalid time format '{}'",
                self.time_format
            )));
        }

        Self::validate_gateway(&self.ipfs_gateway)
    }

    fn validate_gateway(gateway: &str) -> Result<(), ConfigError> {
        let parsed = url::Url::parse(gateway).map_err(|e| {
            ConfigError::ValidateError(format!("Invalid IPFS gateway '{}': {}", gateway, e))
        })?;

        match parsed.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ConfigError::ValidateError(format!(
                    "Invalid IPFS gateway scheme '{}'. Must be http:// or https://",
                    scheme
                )));
            }
        }

        if !gateway.ends_with('/') {
            return Err(ConfigError::ValidateError(format!(
                "IPFS gateway '{}' must end with '/'",
                gateway
            )));
        }

        Ok(())
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            network: Network::default(),
            reserves: ReserveSchedule::default(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            ipfs_gateway: DEFAULT_IPFS_GATEWAY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ledger_config() {
        let config = LedgerConfig::default();
        assert_eq!(config.network, Network::Mainnet);
        assert_eq!(config.reserves.base_drops, 1_000_000);
        assert_eq!(config.time_format, "%Y-%m-%d %H:%M:%S%:z");
        assert_eq!(config.ipfs_gateway, "https://ipfs.io/ipfs/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_time_format() {
        let config = LedgerConfig {
            time_format: " ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_invalid_time_format() {
        let config = LedgerConfig {
            time_format: "%Y-%Q".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_custom_time_format() {
        let config = LedgerConfig {
            time_format: "%d/%m/%Y %H:%M".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_gateway_invalid_url() {
        let config = LedgerConfig {
            ipfs_gateway: "not-a-url".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_gateway_invalid_scheme() {
        let config = LedgerConfig {
            ipfs_gateway: "ftp://gateway.example/ipfs/".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_gateway_requires_trailing_slash() {
        let config = LedgerConfig {
            ipfs_gateway: "https://cloudflare-ipfs.com/ipfs".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = LedgerConfig {
            ipfs_gateway: "https://cloudflare-ipfs.com/ipfs/".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
