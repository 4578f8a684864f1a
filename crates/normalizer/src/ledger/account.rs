// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Fields, LedgerObject, Normalizer};
use crate::codec::{Drops, decode_transfer_fee};
use crate::error::NormalizeError;
use crate::flags::{ACCOUNT_ROOT_FLAGS, FlagEntry, has_flag};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

/// Set on the pseudo-accounts that hold AMM pools.
pub const LSF_AMM: u32 = 0x0200_0000;

// ================================================================================================
// Records
// ================================================================================================

/// An `AccountRoot`, as returned under `account_data` by `account_info`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountInfo {
    pub index: String,
    pub address: String,
    /// Total balance in XRP.
    pub balance: String,
    /// Balance minus the base and owner reserves, in XRP. Never negative.
    pub spendable_balance: String,
    pub object_type: String,
    /// Number of ledger objects the account owns (`OwnerCount`).
    pub account_objects: u32,
    pub sequence: u32,
    pub tick_size: u32,
    /// Transfer fee in percent.
    pub transfer_rate: Decimal,
    pub domain: String,
    pub email: String,
    pub message_key: String,
    pub is_amm: bool,
    pub flags: Vec<FlagEntry>,
}

/// The issuer-facing subset of an account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenIssuer {
    pub index: String,
    pub issuer: String,
    pub tick_size: u32,
    pub domain: String,
    pub email: String,
    pub transfer_fee: Decimal,
}

// ================================================================================================
// Normalization
// ================================================================================================

impl LedgerObject for AccountInfo {
    const LEDGER_ENTRY_TYPE: &'static str = "AccountRoot";

    fn from_node(node: &Value, normalizer: &Normalizer) -> Result<Self, NormalizeError> {
        let fields = Fields::new(node, "account_data")?;

        let balance = fields.drops("Balance")?;
        let owner_count = fields.u32_or_default("OwnerCount")?;
        let raw_flags = fields.u32_or_default("Flags")?;
        let transfer_rate = decode_transfer_fee(fields.u32_or_default("TransferRate")?)
            .map_err(|e| NormalizeError::codec("TransferRate", e))?;

        Ok(Self {
            index: fields.required_string("index")?,
            address: fields.required_string("Account")?,
            balance: balance.to_xrp().to_string(),
            spendable_balance: normalizer
                .spendable_balance(balance, owner_count)
                .to_xrp()
                .to_string(),
            object_type: fields.str_or_default("LedgerEntryType")?,
            account_objects: owner_count,
            sequence: fields.required_u32("Sequence")?,
            tick_size: fields.u32_or_default("TickSize")?,
            transfer_rate,
            domain: fields.text_or_default("Domain")?,
            email: fields.text_or_default("EmailHash")?,
            message_key: fields.text_or_default("MessageKey")?,
            is_amm: has_flag(raw_flags, LSF_AMM),
            flags: fields.flags("Flags", ACCOUNT_ROOT_FLAGS)?,
        })
    }
}

impl From<AccountInfo> for TokenIssuer {
    fn from(account: AccountInfo) -> Self {
        Self {
            index: account.index,
            issuer: account.address,
            tick_size: account.tick_size,
            domain: account.domain,
            email: account.email,
            transfer_fee: account.transfer_rate,
        }
    }
}

impl Normalizer {
    /// Normalizes an `account_info` response.
    pub fn account_info(&self, response: &Value) -> Result<AccountInfo, NormalizeError> {
        let account_data = response
            .get("account_data")
            .ok_or_else(|| NormalizeError::MissingField("account_data".to_string()))?;
        AccountInfo::from_node(account_data, self)
    }

    /// Normalizes an `account_info` response for an issuing account.
    pub fn token_issuer(&self, response: &Value) -> Result<TokenIssuer, NormalizeError> {
        self.account_info(response).map(TokenIssuer::from)
    }

    /// `balance` less the reserve for an account owning `owner_count`
    /// objects, floored at zero.
    pub fn spendable_balance(&self, balance: Drops, owner_count: u32) -> Drops {
        balance.saturating_sub(Drops::new(self.reserves().total_for(owner_count)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn account_info_response() -> Value {
        json!({
            "account_data": {
                "Account": "rsoLo2S1kiGeCcn6hCUXVrCpGMWLrRrLZz",
                "Balance": "26004931",
                "Domain": "736F6C6F67656E69632E636F6D",
                "EmailHash": "7AC3878BF42A5329698F468A6AAA03B9",
                "Flags": 8388608,
                "LedgerEntryType": "AccountRoot",
                "OwnerCount": 3,
                "PreviousTxnID": "9E43DB1B7A8D0A45DCB1A2E0D4CBDC1A4FE6A9FA2C5A3F4F1A77A3F5D7A9B0C1",
                "PreviousTxnLgrSeq": 85301470,
                "Sequence": 67108864,
                "TickSize": 5,
                "TransferRate": 1001500000,
                "index": "ED3EE6FAB9822943809FBCBEEC44F418D76292A355B38C1224A378AEB3A65D6D"
            },
            "ledger_current_index": 85301500,
            "validated": false
        })
    }

    #[test]
    fn test_account_info() {
        let account = Normalizer::default()
            .account_info(&account_info_response())
            .unwrap();

        assert_eq!(account.address, "rsoLo2S1kiGeCcn6hCUXVrCpGMWLrRrLZz");
        assert_eq!(account.balance, "26.004931");
        // 26.004931 - 1 - 3 * 0.2
        assert_eq!(account.spendable_balance, "24.404931");
        assert_eq!(account.object_type, "AccountRoot");
        assert_eq!(account.account_objects, 3);
        assert_eq!(account.sequence, 67_108_864);
        assert_eq!(account.tick_size, 5);
        assert_eq!(account.transfer_rate.to_string(), "0.15");
        assert_eq!(account.domain, "sologenic.com");
        assert_eq!(account.email, "7AC3878BF42A5329698F468A6AAA03B9");
        assert!(!account.is_amm);
        assert_eq!(account.flags.len(), 1);
        assert_eq!(account.flags[0].name, "Default Ripple");
    }

    #[test]
    fn test_account_info_defaults() {
        let response = json!({
            "account_data": {
                "Account": "rf1BiGeXwwQoi8Z2ueFYTEXSwuJYfV2Jpn",
                "Balance": "100000000",
                "Sequence": 1,
                "index": "13F1A95D7AAB7108D5CE7EEAF504B2894B8C674E6D68499076441C4837282BF8"
            }
        });
        let account = Normalizer::default().account_info(&response).unwrap();

        assert_eq!(account.tick_size, 0);
        assert_eq!(account.domain, "");
        assert_eq!(account.email, "");
        assert_eq!(account.message_key, "");
        assert_eq!(account.transfer_rate, Decimal::ZERO);
        assert_eq!(account.account_objects, 0);
        assert!(account.flags.is_empty());
        assert_eq!(account.spendable_balance, "99");
    }

    #[test]
    fn test_account_info_missing_account_data() {
        let err = Normalizer::default()
            .account_info(&json!({"error": "actNotFound"}))
            .unwrap_err();
        assert_eq!(err, NormalizeError::MissingField("account_data".to_string()));
    }

    #[test]
    fn test_account_info_missing_identity() {
        let mut response = account_info_response();
        response["account_data"]
            .as_object_mut()
            .unwrap()
            .remove("Account");
        let err = Normalizer::default().account_info(&response).unwrap_err();
        assert_eq!(err, NormalizeError::MissingField("Account".to_string()));
    }

    #[test]
    fn test_account_info_invalid_transfer_rate() {
        let mut response = account_info_response();
        response["account_data"]["TransferRate"] = json!(999);
        let err = Normalizer::default().account_info(&response).unwrap_err();
        assert!(matches!(err, NormalizeError::Codec { ref field, .. } if field == "TransferRate"));
    }

    #[test]
    fn test_amm_account() {
        let mut response = account_info_response();
        response["account_data"]["Flags"] = json!(LSF_AMM);
        let account = Normalizer::default().account_info(&response).unwrap();
        assert!(account.is_amm);
        assert!(account.flags.is_empty());
    }

    #[test]
    fn test_spendable_balance_floors_at_zero() {
        let normalizer = Normalizer::default();
        assert_eq!(
            normalizer.spendable_balance(Drops::new(1_500_000), 5),
            Drops::ZERO
        );
        assert_eq!(
            normalizer.spendable_balance(Drops::new(1_500_000), 1),
            Drops::new(300_000)
        );
    }

    #[test]
    fn test_token_issuer() {
        let issuer = Normalizer::default()
            .token_issuer(&account_info_response())
            .unwrap();
        assert_eq!(issuer.issuer, "rsoLo2S1kiGeCcn6hCUXVrCpGMWLrRrLZz");
        assert_eq!(issuer.tick_size, 5);
        assert_eq!(issuer.domain, "sologenic.com");
        assert_eq!(issuer.transfer_fee.to_string(), "0.15");
    }
}
