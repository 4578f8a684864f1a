// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Fields, LedgerObject, Normalizer};
use crate::error::NormalizeError;
use serde::Serialize;
use serde_json::Value;

/// An `Escrow` ledger entry. XRP and token escrows share one shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Escrow {
    pub escrow_id: String,
    pub sender: String,
    pub receiver: String,
    pub token: String,
    pub issuer: String,
    pub amount: String,
    pub object_type: String,
    pub prev_txn_id: String,
    /// Earliest time the escrow can be finished (`FinishAfter`).
    pub redeem_date: String,
    /// Time after which the escrow can be cancelled (`CancelAfter`).
    pub expiry_date: String,
    pub condition: String,
    pub destination_tag: String,
}

impl LedgerObject for Escrow {
    const LEDGER_ENTRY_TYPE: &'static str = "Escrow";

    fn from_node(node: &Value, normalizer: &Normalizer) -> Result<Self, NormalizeError> {
        let fields = Fields::new(node, "escrow")?;
        let clock = normalizer.clock();
        let amount = fields.amount_parts("Amount")?;

        Ok(Self {
            escrow_id: fields.required_string("index")?,
            sender: fields.required_string("Account")?,
            receiver: fields.required_string("Destination")?,
            token: amount.token,
            issuer: amount.issuer,
            amount: amount.amount,
            object_type: fields.str_or_default("LedgerEntryType")?,
            prev_txn_id: fields.str_or_default("PreviousTxnID")?,
            redeem_date: fields.ripple_time_or_default("FinishAfter", clock)?,
            expiry_date: fields.ripple_time_or_default("CancelAfter", clock)?,
            condition: fields.str_or_default("Condition")?,
            destination_tag: fields
                .optional_u32("DestinationTag")?
                .map(|tag| tag.to_string())
                .unwrap_or_default(),
        })
    }
}
