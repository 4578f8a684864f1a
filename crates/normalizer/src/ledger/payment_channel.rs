// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Fields, LedgerObject, Normalizer};
use crate::codec::format_settle_delay;
use crate::error::{CodecError, NormalizeError};
use serde::Serialize;
use serde_json::Value;

/// A `PayChannel` ledger entry. Amounts are in XRP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentChannel {
    pub channel_id: String,
    pub sender: String,
    pub receiver: String,
    pub amount_deposited: String,
    pub amount_paid_out: String,
    pub amount_remaining: String,
    pub settle_delay: String,
    pub public_key: String,
    /// Fixed expiry set at creation (`CancelAfter`).
    pub immutable_expiry_date: String,
    /// Expiry set by closing the channel (`Expiration`).
    pub expiry_date: String,
    pub destination_tag: String,
}

impl LedgerObject for PaymentChannel {
    const LEDGER_ENTRY_TYPE: &'static str = "PayChannel";

    fn from_node(node: &Value, normalizer: &Normalizer) -> Result<Self, NormalizeError> {
        let fields = Fields::new(node, "pay_channel")?;
        let clock = normalizer.clock();

        let deposited = fields.drops("Amount")?;
        let paid_out = fields.drops_or_zero("Balance")?;
        let remaining = deposited.checked_sub(paid_out).ok_or_else(|| {
            NormalizeError::codec(
                "Balance",
                CodecError::range("channel balance", paid_out, 0, deposited),
            )
        })?;

        Ok(Self {
            channel_id: fields.required_string("index")?,
            sender: fields.required_string("Account")?,
            receiver: fields.required_string("Destination")?,
            amount_deposited: deposited.to_xrp().to_string(),
            amount_paid_out: paid_out.to_xrp().to_string(),
            amount_remaining: remaining.to_xrp().to_string(),
            settle_delay: format_settle_delay(fields.required_u64("SettleDelay")?),
            public_key: fields.required_string("PublicKey")?,
            immutable_expiry_date: fields.ripple_time_or_default("CancelAfter", clock)?,
            expiry_date: fields.ripple_time_or_default("Expiration", clock)?,
            destination_tag: fields
                .optional_u32("DestinationTag")?
                .map(|tag| tag.to_string())
                .unwrap_or_default(),
        })
    }
}
