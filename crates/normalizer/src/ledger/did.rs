// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Fields, LedgerObject, Normalizer};
use crate::error::NormalizeError;
use serde::Serialize;
use serde_json::Value;

/// A `DID` ledger entry, with its hex fields decoded to text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Did {
    pub index: String,
    pub account: String,
    pub did_document: String,
    pub data: String,
    pub uri: String,
}

impl LedgerObject for Did {
    const LEDGER_ENTRY_TYPE: &'static str = "DID";

    fn from_node(node: &Value, _normalizer: &Normalizer) -> Result<Self, NormalizeError> {
        let fields = Fields::new(node, "did")?;

        Ok(Self {
            index: fields.required_string("index")?,
            account: fields.required_string("Account")?,
            did_document: fields.text_or_default("DIDDocument")?,
            data: fields.text_or_default("Data")?,
            uri: fields.text_or_default("URI")?,
        })
    }
}
