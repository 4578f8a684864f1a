// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Fields, LedgerObject, Normalizer};
use crate::error::NormalizeError;
use serde::Serialize;
use serde_json::Value;

/// A `Check` ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Check {
    pub check_id: String,
    pub sender: String,
    pub receiver: String,
    pub sequence: u32,
    pub object_type: String,
    pub expiry_date: String,
    /// The most the check can debit, from `SendMax`.
    pub token: String,
    pub issuer: String,
    pub amount: String,
}

impl LedgerObject for Check {
    const LEDGER_ENTRY_TYPE: &'static str = "Check";

    fn from_node(node: &Value, normalizer: &Normalizer) -> Result<Self, NormalizeError> {
        let fields = Fields::new(node, "check")?;
        let send_max = fields.amount_parts("SendMax")?;

        Ok(Self {
            check_id: fields.required_string("index")?,
            sender: fields.required_string("Account")?,
            receiver: fields.required_string("Destination")?,
            sequence: fields.required_u32("Sequence")?,
            object_type: fields.str_or_default("LedgerEntryType")?,
            expiry_date: fields.ripple_time_or_default("Expiration", normalizer.clock())?,
            token: send_max.token,
            issuer: send_max.issuer,
            amount: send_max.amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check() {
        let response = json!({
            "index": "49647F0D748DC3FE26BDACBC57F251AADEFFF391403EC9BF87C97F67E9977FB0",
            "node": {
                "Account": "rUn84CUYbNjRoTQ6mSW7BVJPSVJNLb1QLo",
                "Destination": "rfkE1aSy9G8Upk4JssnwBxhEv5p4mn2KTy",
                "DestinationNode": "0000000000000000",
                "Expiration": 763821045,
                "Flags": 0,
                "LedgerEntryType": "Check",
                "OwnerNode": "0000000000000000",
                "SendMax": "100000000",
                "Sequence": 2,
                "index": "49647F0D748DC3FE26BDACBC57F251AADEFFF391403EC9BF87C97F67E9977FB0"
            }
        });
        let check = Normalizer::default().ledger_entry::<Check>(&response).unwrap();

        assert_eq!(
            check.check_id,
            "49647F0D748DC3FE26BDACBC57F251AADEFFF391403EC9BF87C97F67E9977FB0"
        );
        assert_eq!(check.sender, "rUn84CUYbNjRoTQ6mSW7BVJPSVJNLb1QLo");
        assert_eq!(check.receiver, "rfkE1aSy9G8Upk4JssnwBxhEv5p4mn2KTy");
        assert_eq!(check.sequence, 2);
        assert_eq!(check.expiry_date, "2024-03-15 12:30:45+00:00");
        assert_eq!(check.token, "");
        assert_eq!(check.amount, "100");
    }

    #[test]
    fn test_check_issued_send_max() {
        let node = json!({
            "Account": "rUn84CUYbNjRoTQ6mSW7BVJPSVJNLb1QLo",
            "Destination": "rfkE1aSy9G8Upk4JssnwBxhEv5p4mn2KTy",
            "SendMax": {
                "currency": "534F4C4F00000000000000000000000000000000",
                "issuer": "rsoLo2S1kiGeCcn6hCUXVrCpGMWLrRrLZz",
                "value": "300"
            },
            "Sequence": 9,
            "index": "B1"
        });
        let check = Check::from_node(&node, &Normalizer::default()).unwrap();

        assert_eq!(check.token, "SOLO");
        assert_eq!(check.issuer, "rsoLo2S1kiGeCcn6hCUXVrCpGMWLrRrLZz");
        assert_eq!(check.amount, "300");
        assert_eq!(check.expiry_date, "");
        assert_eq!(check.object_type, "");
    }
}
