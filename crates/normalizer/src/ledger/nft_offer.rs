// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Fields, LedgerObject, Normalizer, required_array};
use crate::codec::AmountParts;
use crate::error::NormalizeError;
use crate::flags::{FlagEntry, NFTOKEN_OFFER_FLAGS};
use serde::Serialize;
use serde_json::Value;

/// A buy or sell offer for an NFToken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NfTokenOffer {
    pub offer_id: String,
    pub nftoken_id: String,
    pub owner: String,
    pub flags: Vec<FlagEntry>,
    /// Only this account may accept the offer. Empty when anyone may.
    pub receiver: String,
    pub expiry_date: String,
    pub token: String,
    pub issuer: String,
    pub amount: String,
}

/// Wire keys differ between the ledger entry and the `nft_*_offers` listing.
struct OfferKeys {
    offer_id: &'static str,
    owner: &'static str,
    flags: &'static str,
    amount: &'static str,
    destination: &'static str,
    expiration: &'static str,
}

const LEDGER_KEYS: OfferKeys = OfferKeys {
    offer_id: "index",
    owner: "Owner",
    flags: "Flags",
    amount: "Amount",
    destination: "Destination",
    expiration: "Expiration",
};

const LISTING_KEYS: OfferKeys = OfferKeys {
    offer_id: "nft_offer_index",
    owner: "owner",
    flags: "flags",
    amount: "amount",
    destination: "destination",
    expiration: "expiration",
};

impl NfTokenOffer {
    fn build(
        fields: Fields<'_>,
        keys: &OfferKeys,
        nftoken_id: String,
        normalizer: &Normalizer,
    ) -> Result<Self, NormalizeError> {
        let AmountParts {
            token,
            issuer,
            amount,
        } = fields.amount_parts(keys.amount)?;

        Ok(Self {
            offer_id: fields.required_string(keys.offer_id)?,
            nftoken_id,
            owner: fields.required_string(keys.owner)?,
            flags: fields.flags(keys.flags, NFTOKEN_OFFER_FLAGS)?,
            receiver: fields.str_or_default(keys.destination)?,
            expiry_date: fields.ripple_time_or_default(keys.expiration, normalizer.clock())?,
            token,
            issuer,
            amount,
        })
    }
}

impl LedgerObject for NfTokenOffer {
    const LEDGER_ENTRY_TYPE: &'static str = "NFTokenOffer";

    fn from_node(node: &Value, normalizer: &Normalizer) -> Result<Self, NormalizeError> {
        let fields = Fields::new(node, "nft_offer")?;
        let nftoken_id = fields.required_string("NFTokenID")?;
        Self::build(fields, &LEDGER_KEYS, nftoken_id, normalizer)
    }
}

impl Normalizer {
    /// Normalizes an `nft_buy_offers` or `nft_sell_offers` response.
    pub fn nft_offers(&self, response: &Value) -> Result<Vec<NfTokenOffer>, NormalizeError> {
        let nft_id = Fields::new(response, "response")?.required_string("nft_id")?;

        required_array(response, "offers")?
            .iter()
            .map(|offer| {
                let fields = Fields::new(offer, "offers")?;
                NfTokenOffer::build(fields, &LISTING_KEYS, nft_id.clone(), self)
            })
            .collect()
    }
}
