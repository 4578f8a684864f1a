// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Normalizers that turn raw ledger/RPC JSON into canonical records.
//!
//! Every record carries every field. Absent optional wire fields become
//! `""`, `0` or an empty list, so consumers never need existence checks.
//! A missing identity field (account, index, ...) is always an error.

mod account;
mod check;
mod did;
mod escrow;
mod fields;
mod mpt;
mod nft;
mod nft_offer;
mod offer;
mod oracle;
mod payment;
mod payment_channel;
mod ticket;
mod trust_line;

pub use account::{AccountInfo, LSF_AMM, TokenIssuer};
pub use check::Check;
pub use did::Did;
pub use escrow::Escrow;
pub use mpt::{MptHolding, MptIssuance};
pub use nft::{NfToken, NfTokenDetails, metadata_url};
pub use nft_offer::NfTokenOffer;
pub use offer::{AccountOffer, Offer, sort_by_quality};
pub use oracle::{OraclePrice, PriceData, PriceOracle};
pub use payment::{PaymentHistory, PaymentTransaction};
pub use payment_channel::PaymentChannel;
pub use ticket::Ticket;
pub use trust_line::TrustLine;

use crate::codec::LedgerClock;
use crate::error::{CodecError, NormalizeError};
use fields::Fields;
use serde_json::Value;
use std::borrow::Cow;
use xrpl_normalizer_config::{LedgerConfig, ReserveSchedule};

const DEFAULT_IPFS_GATEWAY: &str = "https://ipfs.io/ipfs/";

/// A record backed by a single ledger entry.
pub trait LedgerObject: Sized {
    /// The `LedgerEntryType` this record is built from.
    const LEDGER_ENTRY_TYPE: &'static str;

    fn from_node(node: &Value, normalizer: &Normalizer) -> Result<Self, NormalizeError>;
}

/// Holds the settings records are rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    clock: LedgerClock,
    reserves: ReserveSchedule,
    ipfs_gateway: String,
}

impl Normalizer {
    pub fn new(config: &LedgerConfig) -> Result<Self, CodecError> {
        Ok(Self {
            clock: LedgerClock::new(config.time_format.clone())?,
            reserves: config.reserves,
            ipfs_gateway: config.ipfs_gateway.clone(),
        })
    }

    pub fn clock(&self) -> &LedgerClock {
        &self.clock
    }

    pub fn reserves(&self) -> &ReserveSchedule {
        &self.reserves
    }

    pub fn ipfs_gateway(&self) -> &str {
        &self.ipfs_gateway
    }

    /// Normalizes a `ledger_entry` response.
    ///
    /// The object id is read from `node.index`, falling back to the
    /// response-level `index`.
    pub fn ledger_entry<T: LedgerObject>(&self, response: &Value) -> Result<T, NormalizeError> {
        let node = response
            .get("node")
            .ok_or_else(|| NormalizeError::MissingField("node".to_string()))?;

        if let Some(found) = node.get("LedgerEntryType").and_then(Value::as_str)
            && found != T::LEDGER_ENTRY_TYPE
        {
            return Err(NormalizeError::unexpected(
                "LedgerEntryType",
                T::LEDGER_ENTRY_TYPE,
            ));
        }

        let node = match (node.get("index"), response.get("index")) {
            (None, Some(index)) => {
                let mut owned = node.clone();
                if let Some(map) = owned.as_object_mut() {
                    map.insert("index".to_string(), index.clone());
                }
                Cow::Owned(owned)
            }
            _ => Cow::Borrowed(node),
        };

        T::from_node(&node, self)
    }

    /// Normalizes the entries of an `account_objects` response that are of
    /// type `T`. Entries of other types are skipped.
    pub fn account_objects<T: LedgerObject>(
        &self,
        response: &Value,
    ) -> Result<Vec<T>, NormalizeError> {
        let objects = required_array(response, "account_objects")?;

        objects
            .iter()
            .filter(|object| {
                match object.get("LedgerEntryType").and_then(Value::as_str) {
                    Some(found) if found != T::LEDGER_ENTRY_TYPE => {
                        tracing::debug!(
                            expected = T::LEDGER_ENTRY_TYPE,
                            found = %found,
                            "Skipping account object of another type"
                        );
                        false
                    }
                    _ => true,
                }
            })
            .map(|object| T::from_node(object, self))
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            clock: LedgerClock::default(),
            reserves: ReserveSchedule::default(),
            ipfs_gateway: DEFAULT_IPFS_GATEWAY.to_string(),
        }
    }
}

fn required_array<'a>(response: &'a Value, key: &str) -> Result<&'a Vec<Value>, NormalizeError> {
    response
        .get(key)
        .ok_or_else(|| NormalizeError::MissingField(key.to_string()))?
        .as_array()
        .ok_or_else(|| NormalizeError::unexpected(key, "array"))
}
