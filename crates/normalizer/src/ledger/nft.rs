// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Fields, Normalizer, required_array};
use crate::error::NormalizeError;
use crate::flags::{FlagEntry, NFTOKEN_FLAGS};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

const IPFS_SCHEME: &str = "ipfs://";
const PUBLIC_IPFS_GATEWAY: &str = "https://ipfs.io/ipfs/";

/// An NFToken held by an account, from `account_nfts`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NfToken {
    pub nft_id: String,
    pub issuer: String,
    pub taxon: u32,
    pub serial: u32,
    pub uri: String,
    pub transfer_fee: Decimal,
    pub flags: Vec<FlagEntry>,
}

/// An NFToken as described by an external NFT indexer (`data.nft`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NfTokenDetails {
    pub nft_id: String,
    pub issuer: String,
    pub owner: String,
    pub taxon: u32,
    pub sequence: u32,
    pub transfer_fee: Decimal,
    pub uri: String,
    pub flags: Vec<FlagEntry>,
}

impl NfToken {
    fn from_item(item: &Value) -> Result<Self, NormalizeError> {
        let fields = Fields::new(item, "account_nfts")?;

        Ok(Self {
            nft_id: fields.required_string("NFTokenID")?,
            issuer: fields.required_string("Issuer")?,
            taxon: fields.required_u32("NFTokenTaxon")?,
            serial: fields.u32_or_default("nft_serial")?,
            uri: fields.text_or_default("URI")?,
            transfer_fee: fields.nft_fee_or_zero("TransferFee")?,
            flags: fields.flags("Flags", NFTOKEN_FLAGS)?,
        })
    }
}

impl NfTokenDetails {
    fn from_item(item: &Value) -> Result<Self, NormalizeError> {
        let fields = Fields::new(item, "nft")?;

        Ok(Self {
            nft_id: fields.str_or_default("NFTokenID")?,
            issuer: fields.required_string("Issuer")?,
            owner: fields.required_string("Owner")?,
            taxon: fields.required_u32("Taxon")?,
            sequence: fields.u32_or_default("Sequence")?,
            transfer_fee: fields.nft_fee_or_zero("TransferFee")?,
            uri: fields.text_or_default("URI")?,
            flags: fields.flags("Flags", NFTOKEN_FLAGS)?,
        })
    }
}

impl Normalizer {
    /// Normalizes an `account_nfts` response.
    pub fn account_nfts(&self, response: &Value) -> Result<Vec<NfToken>, NormalizeError> {
        required_array(response, "account_nfts")?
            .iter()
            .map(NfToken::from_item)
            .collect()
    }

    /// Normalizes an NFT indexer lookup of the form `{ "data": { "nft": {..} } }`.
    pub fn nft_info(&self, response: &Value) -> Result<NfTokenDetails, NormalizeError> {
        let data = response
            .get("data")
            .ok_or_else(|| NormalizeError::MissingField("data".to_string()))?;
        let nft = data
            .get("nft")
            .ok_or_else(|| NormalizeError::MissingField("nft".to_string()))?;
        NfTokenDetails::from_item(nft)
    }

    /// [`metadata_url`] against the configured gateway.
    pub fn nft_metadata_url(&self, uri: &str) -> String {
        metadata_url(uri, self.ipfs_gateway())
    }
}

/// Rewrites IPFS URIs (`ipfs://CID` or the public `ipfs.io` gateway) onto
/// `gateway`. Other URIs come back unchanged.
pub fn metadata_url(uri: &str, gateway: &str) -> String {
    match uri
        .strip_prefix(IPFS_SCHEME)
        .or_else(|| uri.strip_prefix(PUBLIC_IPFS_GATEWAY))
    {
        Some(path) => format!("{}{}", gateway, path),
        None => uri.to_string(),
    }
}
