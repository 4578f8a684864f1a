// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Fields, Normalizer, required_array};
use crate::codec::symbol::CURRENCY_CODE_HEX_LEN;
use crate::codec::validate_decode;
use crate::error::NormalizeError;
use serde::Serialize;
use serde_json::Value;

/// AMM pool shares use a 160-bit currency code starting with this byte.
const LP_TOKEN_PREFIX: &str = "03";

/// One line of an `account_lines` response, seen from the queried account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrustLine {
    /// Decoded currency code. LP tokens keep their raw 40-hex code.
    pub token: String,
    /// The counterparty (`account`).
    pub issuer: String,
    pub amount: String,
    pub limit: String,
    pub freeze_status: bool,
    /// `true` when rippling is disabled on this side (`no_ripple`).
    pub ripple_status: bool,
    pub lp_token: bool,
}

impl TrustLine {
    fn from_line(line: &Value) -> Result<Self, NormalizeError> {
        let fields = Fields::new(line, "lines")?;
        let currency = fields.required_str("currency")?;
        let lp_token = is_lp_token(currency);

        Ok(Self {
            token: if lp_token {
                currency.to_string()
            } else {
                validate_decode(currency)
            },
            issuer: fields.required_string("account")?,
            amount: fields.required_string("balance")?,
            limit: fields.str_or_default("limit")?,
            freeze_status: fields.bool_or_default("freeze")?,
            ripple_status: fields.bool_or_default("no_ripple")?,
            lp_token,
        })
    }
}

fn is_lp_token(currency: &str) -> bool {
    currency.len() == CURRENCY_CODE_HEX_LEN
        && currency.starts_with(LP_TOKEN_PREFIX)
        && currency.bytes().all(|b| b.is_ascii_hexdigit())
}

impl Normalizer {
    /// Normalizes every line of an `account_lines` response.
    pub fn account_lines(&self, response: &Value) -> Result<Vec<TrustLine>, NormalizeError> {
        required_array(response, "lines")?
            .iter()
            .map(TrustLine::from_line)
            .collect()
    }

    /// Like [`Normalizer::account_lines`], without AMM LP token lines.
    pub fn account_tokens(&self, response: &Value) -> Result<Vec<TrustLine>, NormalizeError> {
        let mut lines = self.account_lines(response)?;
        lines.retain(|line| !line.lp_token);
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn account_lines_response() -> Value {
        json!({
            "account": "rf1BiGeXwwQoi8Z2ueFYTEXSwuJYfV2Jpn",
            "lines": [
                {
                    "account": "rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B",
                    "balance": "4.6",
                    "currency": "USD",
                    "limit": "1000000000",
                    "limit_peer": "0",
                    "no_ripple": true,
                    "quality_in": 0,
                    "quality_out": 0
                },
                {
                    "account": "rsoLo2S1kiGeCcn6hCUXVrCpGMWLrRrLZz",
                    "balance": "-12.25",
                    "currency": "534F4C4F00000000000000000000000000000000",
                    "limit": "0",
                    "limit_peer": "0",
                    "freeze": true,
                    "quality_in": 0,
                    "quality_out": 0
                },
                {
                    "account": "rHUpaqUPbwzKZdzQ8ZQCme18FrgW9pB4am",
                    "balance": "100",
                    "currency": "03B2DB2FE0B5F0A2A1E8C1E0B3A4D2F1C6E7A8B9",
                    "limit": "0",
                    "limit_peer": "0",
                    "quality_in": 0,
                    "quality_out": 0
                }
            ]
        })
    }

    #[test]
    fn test_account_lines() {
        let lines = Normalizer::default()
            .account_lines(&account_lines_response())
            .unwrap();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            TrustLine {
                token: "USD".to_string(),
                issuer: "rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B".to_string(),
                amount: "4.6".to_string(),
                limit: "1000000000".to_string(),
                freeze_status: false,
                ripple_status: true,
                lp_token: false,
            }
        );
        assert_eq!(lines[1].token, "SOLO");
        assert_eq!(lines[1].amount, "-12.25");
        assert!(lines[1].freeze_status);
        assert!(!lines[1].ripple_status);
        assert!(lines[2].lp_token);
        assert_eq!(lines[2].token, "03B2DB2FE0B5F0A2A1E8C1E0B3A4D2F1C6E7A8B9");
    }

    #[test]
    fn test_account_tokens_skips_lp_tokens() {
        let tokens = Normalizer::default()
            .account_tokens(&account_lines_response())
            .unwrap();
        assert_eq!(tokens.len(), 2);
        assert!(tokens.iter().all(|line| !line.lp_token));
    }

    #[test]
    fn test_account_lines_requires_balance() {
        let response = json!({
            "lines": [{"account": "rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B", "currency": "USD"}]
        });
        let err = Normalizer::default().account_lines(&response).unwrap_err();
        assert_eq!(err, NormalizeError::MissingField("balance".to_string()));
    }
}
