// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Payment transactions from `tx` and `account_tx` responses.
//!
//! Both API versions are accepted: the transaction either sits at the top
//! level (`tx` v1), under `tx` (`account_tx` v1) or under `tx_json` (v2,
//! with `hash` beside it).

use super::{Fields, Normalizer, required_array};
use crate::codec::{Amount, AmountParts, MemoText, decode_memos};
use crate::error::NormalizeError;
use crate::flags::{FlagEntry, PAYMENT_FLAGS};
use serde::Serialize;
use serde_json::Value;

const PAYMENT: &str = "Payment";

/// `delivered_amount` placeholder for payments older than 2014.
const DELIVERED_UNAVAILABLE: &str = "unavailable";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentTransaction {
    pub txid: String,
    pub tx_type: String,
    pub sender: String,
    pub receiver: String,
    pub token: String,
    pub issuer: String,
    /// Delivered amount when the ledger reports one, else the requested one.
    pub amount: String,
    /// Fee in XRP.
    pub fee: String,
    pub date: String,
    pub flags: Vec<FlagEntry>,
    pub sequence: u32,
    pub in_ledger: u32,
    pub signature: String,
    /// Position of the transaction in its ledger.
    pub index: u32,
    pub result: String,
    pub validated: bool,
    pub memos: Vec<MemoText>,
}

/// Payments of one account, split by direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaymentHistory {
    pub sent: Vec<PaymentTransaction>,
    pub received: Vec<PaymentTransaction>,
}

fn transaction_of(item: &Value) -> &Value {
    item.get("tx_json")
        .or_else(|| item.get("tx"))
        .unwrap_or(item)
}

fn transaction_type(item: &Value) -> Option<&str> {
    transaction_of(item)
        .get("TransactionType")
        .and_then(Value::as_str)
}

impl PaymentTransaction {
    fn from_item(item: &Value, normalizer: &Normalizer) -> Result<Self, NormalizeError> {
        let outer = Fields::new(item, "transaction")?;
        let tx = Fields::new(transaction_of(item), "tx")?;
        let meta = Fields::required_object(item, "meta")?;
        let clock = normalizer.clock();

        let tx_type = tx.required_string("TransactionType")?;
        if tx_type != PAYMENT {
            return Err(NormalizeError::unexpected("TransactionType", PAYMENT));
        }

        let delivered = meta
            .get("delivered_amount")
            .filter(|value| value.as_str() != Some(DELIVERED_UNAVAILABLE));
        let amount = match delivered {
            Some(value) => Amount::classify(value)
                .map_err(|e| NormalizeError::codec("delivered_amount", e))?,
            None if tx.contains("Amount") => tx.amount("Amount")?,
            None => tx.amount("DeliverMax")?,
        };
        let AmountParts {
            token,
            issuer,
            amount,
        } = amount.parts();

        let txid = match tx.optional_str("hash")? {
            Some(hash) => hash.to_string(),
            None => outer.required_string("hash")?,
        };
        let date = if tx.contains("date") {
            tx.ripple_time_or_default("date", clock)?
        } else {
            outer.ripple_time_or_default("date", clock)?
        };
        let in_ledger = match tx.optional_u32("inLedger")? {
            Some(ledger) => ledger,
            None => match tx.optional_u32("ledger_index")? {
                Some(ledger) => ledger,
                None => outer.u32_or_default("ledger_index")?,
            },
        };

        Ok(Self {
            txid,
            tx_type,
            sender: tx.required_string("Account")?,
            receiver: tx.required_string("Destination")?,
            token,
            issuer,
            amount,
            fee: tx.drops("Fee")?.to_xrp().to_string(),
            date,
            flags: tx.flags("Flags", PAYMENT_FLAGS)?,
            sequence: tx.required_u32("Sequence")?,
            in_ledger,
            signature: tx.str_or_default("TxnSignature")?,
            index: meta.u32_or_default("TransactionIndex")?,
            result: meta.str_or_default("TransactionResult")?,
            validated: outer.bool_or_default("validated")?,
            memos: tx.get("Memos").map(decode_memos).unwrap_or_default(),
        })
    }
}

impl Normalizer {
    /// Normalizes a `tx` response. Fails for anything but a payment.
    pub fn payment_transaction(
        &self,
        response: &Value,
    ) -> Result<PaymentTransaction, NormalizeError> {
        PaymentTransaction::from_item(response, self)
    }

    /// Splits the payments of an `account_tx` response by whether `wallet`
    /// sent them. Other transaction types are ignored. Malformed payments
    /// are logged and skipped.
    pub fn payment_history(
        &self,
        response: &Value,
        wallet: &str,
    ) -> Result<PaymentHistory, NormalizeError> {
        let mut history = PaymentHistory::default();

        for item in required_array(response, "transactions")? {
            if transaction_type(item) != Some(PAYMENT) {
                continue;
            }

            match PaymentTransaction::from_item(item, self) {
                Ok(payment) if payment.sender == wallet => history.sent.push(payment),
                Ok(payment) => history.received.push(payment),
                Err(e) => {
                    tracing::warn!(error = %e, wallet = %wallet, "Skipping malformed payment");
                }
            }
        }

        Ok(history)
    }
}

impl PaymentHistory {
    /// [`Normalizer::payment_history`] with default settings.
    pub fn from_account_tx(response: &Value, wallet: &str) -> Result<Self, NormalizeError> {
        Normalizer::default().payment_history(response, wallet)
    }
}
