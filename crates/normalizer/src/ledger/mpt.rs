// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Fields, LedgerObject, Normalizer};
use crate::error::NormalizeError;
use crate::flags::{FlagEntry, MPTOKEN_FLAGS, MPTOKEN_ISSUANCE_FLAGS};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

/// An `MPTokenIssuance` entry, owned by the issuer.
///
/// Supplies are UInt64 amounts and stay decimal strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MptIssuance {
    pub index: String,
    pub mpt_issuance_id: String,
    pub issuer: String,
    /// `MaximumAmount`, `"0"` when uncapped.
    pub total_supply: String,
    /// `OutstandingAmount`.
    pub circulating_supply: String,
    pub scale: u32,
    pub transfer_fee: Decimal,
    pub flags: Vec<FlagEntry>,
    pub metadata: String,
}

/// An `MPToken` entry: one holder's balance of an issuance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MptHolding {
    pub index: String,
    pub mpt_issuance_id: String,
    pub balance: String,
    pub flags: Vec<FlagEntry>,
}

impl LedgerObject for MptIssuance {
    const LEDGER_ENTRY_TYPE: &'static str = "MPTokenIssuance";

    fn from_node(node: &Value, _normalizer: &Normalizer) -> Result<Self, NormalizeError> {
        let fields = Fields::new(node, "mpt_issuance")?;

        Ok(Self {
            index: fields.required_string("index")?,
            mpt_issuance_id: fields.required_string("mpt_issuance_id")?,
            issuer: fields.required_string("Issuer")?,
            total_supply: fields.integer_string_or_zero("MaximumAmount")?,
            circulating_supply: fields.integer_string_or_zero("OutstandingAmount")?,
            scale: fields.u32_or_default("AssetScale")?,
            transfer_fee: fields.nft_fee_or_zero("TransferFee")?,
            flags: fields.flags("Flags", MPTOKEN_ISSUANCE_FLAGS)?,
            metadata: fields.text_or_default("MPTokenMetadata")?,
        })
    }
}

impl LedgerObject for MptHolding {
    const LEDGER_ENTRY_TYPE: &'static str = "MPToken";

    fn from_node(node: &Value, _normalizer: &Normalizer) -> Result<Self, NormalizeError> {
        let fields = Fields::new(node, "mptoken")?;

        Ok(Self {
            index: fields.required_string("index")?,
            mpt_issuance_id: fields.required_string("MPTokenIssuanceID")?,
            balance: fields.integer_string_or_zero("MPTAmount")?,
            flags: fields.flags("Flags", MPTOKEN_FLAGS)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ISSUANCE_ID: &str = "0000012FFD9EE5DA93AC614B4DB94D7E0FCE415CA51BED47";

    #[test]
    fn test_mpt_issuances() {
        let response = json!({
            "account": "rfKsmLP6sTfVGDvga6rW6XbmSFUzc3G9f3",
            "account_objects": [
                {
                    "AssetScale": 2,
                    "Flags": 98,
                    "Issuer": "rfKsmLP6sTfVGDvga6rW6XbmSFUzc3G9f3",
                    "LedgerEntryType": "MPTokenIssuance",
                    "MPTokenMetadata": "7B227469636B6572223A2254425338227D",
                    "MaximumAmount": "100000000",
                    "OutstandingAmount": "2500",
                    "Sequence": 303,
                    "TransferFee": 1500,
                    "index": "A738A1E6E8505E1FC77BBB9FEF84FF9A9C609F2739E0F9573CDD6367100A0AA9",
                    "mpt_issuance_id": ISSUANCE_ID
                },
                {
                    "Issuer": "rfKsmLP6sTfVGDvga6rW6XbmSFUzc3G9f3",
                    "LedgerEntryType": "MPTokenIssuance",
                    "Sequence": 304,
                    "index": "B738A1E6E8505E1FC77BBB9FEF84FF9A9C609F2739E0F9573CDD6367100A0AA9",
                    "mpt_issuance_id": "00000130FD9EE5DA93AC614B4DB94D7E0FCE415CA51BED47"
                }
            ]
        });
        let issuances = Normalizer::default()
            .account_objects::<MptIssuance>(&response)
            .unwrap();

        assert_eq!(issuances.len(), 2);
        let first = &issuances[0];
        assert_eq!(first.mpt_issuance_id, ISSUANCE_ID);
        assert_eq!(first.total_supply, "100000000");
        assert_eq!(first.circulating_supply, "2500");
        assert_eq!(first.scale, 2);
        assert_eq!(first.transfer_fee.to_string(), "1.5");
        assert_eq!(first.metadata, r#"{"ticker":"TBS8"}"#);
        let codes: Vec<_> = first.flags.iter().map(|f| f.code).collect();
        assert_eq!(
            codes,
            vec!["lsfMPTCanLock", "lsfMPTCanTransfer", "lsfMPTCanClawback"]
        );

        let bare = &issuances[1];
        assert_eq!(bare.total_supply, "0");
        assert_eq!(bare.circulating_supply, "0");
        assert_eq!(bare.scale, 0);
        assert_eq!(bare.transfer_fee, Decimal::ZERO);
        assert_eq!(bare.metadata, "");
        assert!(bare.flags.is_empty());
    }

    #[test]
    fn test_mpt_holding() {
        let response = json!({
            "node": {
                "Account": "rPEZyTnSyQyXBCwMVYyaafSVPL8oMtfG6a",
                "Flags": 2,
                "LedgerEntryType": "MPToken",
                "MPTAmount": "150",
                "MPTokenIssuanceID": ISSUANCE_ID,
                "index": "C1A8B1E5E8505E1FC77BBB9FEF84FF9A9C609F2739E0F9573CDD6367100A0AA9"
            }
        });
        let holding = Normalizer::default()
            .ledger_entry::<MptHolding>(&response)
            .unwrap();

        assert_eq!(holding.mpt_issuance_id, ISSUANCE_ID);
        assert_eq!(holding.balance, "150");
        assert_eq!(holding.flags.len(), 1);
        assert_eq!(holding.flags[0].name, "Authorized");
    }

    #[test]
    fn test_mpt_holding_defaults_balance() {
        let node = json!({
            "MPTokenIssuanceID": ISSUANCE_ID,
            "index": "C1A8B1E5E8505E1FC77BBB9FEF84FF9A9C609F2739E0F9573CDD6367100A0AA9"
        });
        let holding = MptHolding::from_node(&node, &Normalizer::default()).unwrap();
        assert_eq!(holding.balance, "0");
        assert!(holding.flags.is_empty());
    }
}
