// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! DEX offers, from ledger entries, `book_offers` and `account_offers`.

use super::{Fields, LedgerObject, Normalizer, required_array};
use crate::codec::amount::parse_decimal;
use crate::codec::{Amount, Drops};
use crate::error::NormalizeError;
use crate::flags::{FlagEntry, OFFER_FLAGS};
use serde::Serialize;
use serde_json::Value;
use std::cmp::Ordering;

const TF_PASSIVE: u32 = 0x0001_0000;

/// An `Offer` ledger entry or `book_offers` item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Offer {
    pub offer_id: String,
    pub creator: String,
    pub sequence: u32,
    pub object_type: String,
    pub expiry_date: String,
    pub flags: Vec<FlagEntry>,
    pub buy_token: String,
    pub buy_issuer: String,
    pub buy_amount: String,
    pub sell_token: String,
    pub sell_issuer: String,
    pub sell_amount: String,
    /// `quality` from `book_offers`, empty for plain ledger entries.
    pub rate: String,
    /// Funds the creator holds in the sell token (`owner_funds`), in
    /// display units. Empty when not reported.
    pub creator_liquidity: String,
}

/// An item of an `account_offers` response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountOffer {
    pub sequence: u32,
    pub flags: Vec<FlagEntry>,
    pub quality: String,
    pub expiry_date: String,
    pub buy_token: String,
    pub buy_issuer: String,
    pub buy_amount: String,
    pub sell_token: String,
    pub sell_issuer: String,
    pub sell_amount: String,
    /// Sell amount per unit bought. Empty when the buy amount is zero.
    pub rate: String,
}

impl LedgerObject for Offer {
    const LEDGER_ENTRY_TYPE: &'static str = "Offer";

    fn from_node(node: &Value, normalizer: &Normalizer) -> Result<Self, NormalizeError> {
        let fields = Fields::new(node, "offer")?;

        let buy = fields.amount_parts("TakerPays")?;
        let sell_amount = fields.amount("TakerGets")?;
        let creator_liquidity = match fields.get("owner_funds") {
            None => String::new(),
            Some(funds) => owner_funds(funds, &sell_amount)?,
        };
        let sell = sell_amount.parts();

        Ok(Self {
            offer_id: fields.required_string("index")?,
            creator: fields.required_string("Account")?,
            sequence: fields.required_u32("Sequence")?,
            object_type: fields.str_or_default("LedgerEntryType")?,
            expiry_date: fields.ripple_time_or_default("Expiration", normalizer.clock())?,
            flags: fields.flags("Flags", OFFER_FLAGS)?,
            buy_token: buy.token,
            buy_issuer: buy.issuer,
            buy_amount: buy.amount,
            sell_token: sell.token,
            sell_issuer: sell.issuer,
            sell_amount: sell.amount,
            rate: fields.str_or_default("quality")?,
            creator_liquidity,
        })
    }
}

// owner_funds is in drops when the offer sells XRP.
fn owner_funds(funds: &Value, sell: &Amount) -> Result<String, NormalizeError> {
    let funds = funds
        .as_str()
        .ok_or_else(|| NormalizeError::unexpected("owner_funds", "string"))?;

    if sell.is_xrp() {
        funds
            .parse::<Drops>()
            .map(|drops| drops.to_xrp().to_string())
            .map_err(|e| NormalizeError::codec("owner_funds", e))
    } else {
        Ok(funds.to_string())
    }
}

impl AccountOffer {
    pub fn is_passive(&self) -> bool {
        self.flags.iter().any(|flag| flag.value == TF_PASSIVE)
    }

    fn from_item(item: &Value, normalizer: &Normalizer) -> Result<Self, NormalizeError> {
        let fields = Fields::new(item, "offer")?;

        let buy = fields.amount("taker_pays")?;
        let sell = fields.amount("taker_gets")?;
        let rate = match (sell.display_value(), buy.display_value()) {
            (Some(sell), Some(buy)) if !buy.is_zero() => sell
                .checked_div(buy)
                .map(|rate| rate.normalize().to_string())
                .unwrap_or_default(),
            _ => String::new(),
        };
        let buy = buy.parts();
        let sell = sell.parts();

        Ok(Self {
            sequence: fields.required_u32("seq")?,
            flags: fields.flags("flags", OFFER_FLAGS)?,
            quality: fields.str_or_default("quality")?,
            expiry_date: fields.ripple_time_or_default("expiration", normalizer.clock())?,
            buy_token: buy.token,
            buy_issuer: buy.issuer,
            buy_amount: buy.amount,
            sell_token: sell.token,
            sell_issuer: sell.issuer,
            sell_amount: sell.amount,
            rate,
        })
    }
}

impl Normalizer {
    /// Normalizes a `book_offers` response, keeping the server's order.
    pub fn book_offers(&self, response: &Value) -> Result<Vec<Offer>, NormalizeError> {
        required_array(response, "offers")?
            .iter()
            .map(|offer| Offer::from_node(offer, self))
            .collect()
    }

    /// Normalizes an `account_offers` response.
    pub fn account_offers(&self, response: &Value) -> Result<Vec<AccountOffer>, NormalizeError> {
        required_array(response, "offers")?
            .iter()
            .map(|offer| AccountOffer::from_item(offer, self))
            .collect()
    }

    /// The passive offers of an `account_offers` response, i.e. the
    /// liquidity the account provides to the order book.
    pub fn liquidity_offers(
        &self,
        response: &Value,
    ) -> Result<Vec<AccountOffer>, NormalizeError> {
        let mut offers = self.account_offers(response)?;
        offers.retain(AccountOffer::is_passive);
        Ok(offers)
    }
}

/// Sorts offers by `rate`, highest first when `best_first`. Offers whose
/// rate does not parse sort last in both directions.
pub fn sort_by_quality(offers: &mut [Offer], best_first: bool) {
    offers.sort_by(|a, b| {
        match (parse_decimal(&a.rate), parse_decimal(&b.rate)) {
            (Some(a), Some(b)) if best_first => b.cmp(&a),
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}
