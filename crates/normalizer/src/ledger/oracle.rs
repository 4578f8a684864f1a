// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Price oracles, in both directions.
//!
//! Reading: an `Oracle` ledger entry becomes a [`PriceOracle`] whose prices
//! are decoded from hex mantissa + scale. Writing: [`PriceData`] builds the
//! `PriceDataSeries` entries an `OracleSet` transaction carries.

use super::{Fields, LedgerObject, Normalizer};
use crate::codec::{decode_price, encode_price, validate_encode};
use crate::error::{CodecError, NormalizeError};
use serde::Serialize;
use serde_json::Value;

// ================================================================================================
// Read side
// ================================================================================================

/// An `Oracle` ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceOracle {
    pub oracle_id: String,
    pub owner: String,
    pub provider: String,
    pub asset_class: String,
    pub uri: String,
    /// `LastUpdateTime` is Unix time, not ledger time.
    pub last_update_time: String,
    pub object_type: String,
    pub price_data_series: Vec<OraclePrice>,
}

/// One pair of a `PriceDataSeries`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OraclePrice {
    pub base_asset: String,
    pub quote_asset: String,
    pub scale: u32,
    /// Raw hex mantissa, empty when the pair carries no price.
    pub scaled_asset_price: String,
    /// Decoded decimal price, empty when the pair carries no price.
    pub asset_price: String,
}

impl LedgerObject for PriceOracle {
    const LEDGER_ENTRY_TYPE: &'static str = "Oracle";

    fn from_node(node: &Value, normalizer: &Normalizer) -> Result<Self, NormalizeError> {
        let fields = Fields::new(node, "oracle")?;

        let last_update_time = match fields.optional_u64("LastUpdateTime")? {
            Some(time) => {
                let unix = i64::try_from(time)
                    .map_err(|_| NormalizeError::unexpected("LastUpdateTime", "unix time"))?;
                normalizer
                    .clock()
                    .format_unix_time(unix)
                    .map_err(|e| NormalizeError::codec("LastUpdateTime", e))?
            }
            None => String::new(),
        };

        let price_data_series = match fields.get("PriceDataSeries") {
            None => Vec::new(),
            Some(series) => series
                .as_array()
                .ok_or_else(|| NormalizeError::unexpected("PriceDataSeries", "array"))?
                .iter()
                .filter_map(|entry| {
                    let price_data = entry.get("PriceData");
                    if price_data.is_none() {
                        tracing::warn!(entry = %entry, "Skipping PriceDataSeries entry without PriceData");
                    }
                    price_data
                })
                .map(OraclePrice::from_price_data)
                .collect::<Result<Vec<_>, _>>()?,
        };

        Ok(Self {
            oracle_id: fields.required_string("index")?,
            owner: fields.required_string("Owner")?,
            provider: fields.required_text("Provider")?,
            asset_class: fields.required_text("AssetClass")?,
            uri: fields.text_or_default("URI")?,
            last_update_time,
            object_type: fields.str_or_default("LedgerEntryType")?,
            price_data_series,
        })
    }
}

impl OraclePrice {
    fn from_price_data(price_data: &Value) -> Result<Self, NormalizeError> {
        let fields = Fields::new(price_data, "PriceData")?;
        let scale = fields.u32_or_default("Scale")?;

        let (scaled_asset_price, asset_price) = match fields.optional_str("AssetPrice")? {
            Some(mantissa) => {
                let price =
                    decode_price(mantissa, scale).map_err(|e| NormalizeError::codec("AssetPrice", e))?;
                (mantissa.to_string(), price.to_string())
            }
            None => (String::new(), String::new()),
        };

        Ok(Self {
            base_asset: fields.required_text("BaseAsset")?,
            quote_asset: fields.required_text("QuoteAsset")?,
            scale,
            scaled_asset_price,
            asset_price,
        })
    }
}

// ================================================================================================
// Write side
// ================================================================================================

/// Wire fields of one `PriceData` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PriceData {
    pub base_asset: String,
    pub quote_asset: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
}

/// A `PriceDataSeries` element: `{ "PriceData": { ... } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PriceDataEntry {
    pub price_data: PriceData,
}

impl PriceData {
    /// Builds a pair. Without a price the pair is removed from the oracle
    /// when submitted.
    pub fn new(base: &str, quote: &str, price: Option<&str>) -> Result<Self, CodecError> {
        let scaled = price.map(encode_price).transpose()?;

        Ok(Self {
            base_asset: validate_encode(base),
            quote_asset: validate_encode(quote),
            asset_price: scaled.map(|p| p.mantissa_hex()),
            scale: scaled.map(|p| p.scale),
        })
    }

    pub fn into_entry(self) -> PriceDataEntry {
        PriceDataEntry { price_data: self }
    }
}
