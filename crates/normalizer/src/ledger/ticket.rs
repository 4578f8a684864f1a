// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Fields, LedgerObject, Normalizer};
use crate::error::NormalizeError;
use serde::Serialize;
use serde_json::Value;

/// A `Ticket` ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    pub ticket_id: String,
    pub account: String,
    pub ticket_sequence: u32,
}

impl LedgerObject for Ticket {
    const LEDGER_ENTRY_TYPE: &'static str = "Ticket";

    fn from_node(node: &Value, _normalizer: &Normalizer) -> Result<Self, NormalizeError> {
        let fields = Fields::new(node, "ticket")?;

        Ok(Self {
            ticket_id: fields.required_string("index")?,
            account: fields.required_string("Account")?,
            ticket_sequence: fields.required_u32("TicketSequence")?,
        })
    }
}
