// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed access to the fields of a ledger JSON object.
//!
//! Required accessors fail with [`NormalizeError::MissingField`]. Optional
//! accessors fall back to an empty/zero default when the field is absent,
//! but still reject a field of the wrong JSON type.

use crate::codec::{Amount, AmountParts, Drops, LedgerClock, decode_nft_fee, validate_decode};
use crate::error::NormalizeError;
use crate::flags::{FlagEntry, decode_flags};
use rust_decimal::Decimal;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy)]
pub(crate) struct Fields<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// Wraps `value`, which must be a JSON object. `name` is used in the
    /// error when it is not.
    pub(crate) fn new(value: &'a Value, name: &str) -> Result<Self, NormalizeError> {
        value
            .as_object()
            .map(|map| Self { map })
            .ok_or_else(|| NormalizeError::unexpected(name, "object"))
    }

    /// Wraps the object stored under `key` of `parent`.
    pub(crate) fn required_object(parent: &'a Value, key: &str) -> Result<Self, NormalizeError> {
        let value = parent
            .get(key)
            .ok_or_else(|| NormalizeError::MissingField(key.to_string()))?;
        Self::new(value, key)
    }

    pub(crate) fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub(crate) fn required(&self, key: &str) -> Result<&'a Value, NormalizeError> {
        self.get(key)
            .ok_or_else(|| NormalizeError::MissingField(key.to_string()))
    }

    pub(crate) fn required_str(&self, key: &str) -> Result<&'a str, NormalizeError> {
        self.required(key)?
            .as_str()
            .ok_or_else(|| NormalizeError::unexpected(key, "string"))
    }

    pub(crate) fn required_string(&self, key: &str) -> Result<String, NormalizeError> {
        self.required_str(key).map(str::to_string)
    }

    pub(crate) fn required_u64(&self, key: &str) -> Result<u64, NormalizeError> {
        as_u64(key, self.required(key)?)
    }

    pub(crate) fn required_u32(&self, key: &str) -> Result<u32, NormalizeError> {
        u32::try_from(self.required_u64(key)?).map_err(|_| NormalizeError::unexpected(key, "u32"))
    }

    pub(crate) fn optional_str(&self, key: &str) -> Result<Option<&'a str>, NormalizeError> {
        self.get(key)
            .map(|v| v.as_str().ok_or_else(|| NormalizeError::unexpected(key, "string")))
            .transpose()
    }

    pub(crate) fn optional_u64(&self, key: &str) -> Result<Option<u64>, NormalizeError> {
        self.get(key).map(|v| as_u64(key, v)).transpose()
    }

    pub(crate) fn optional_u32(&self, key: &str) -> Result<Option<u32>, NormalizeError> {
        self.optional_u64(key)?
            .map(|v| u32::try_from(v).map_err(|_| NormalizeError::unexpected(key, "u32")))
            .transpose()
    }

    pub(crate) fn str_or_default(&self, key: &str) -> Result<String, NormalizeError> {
        Ok(self.optional_str(key)?.unwrap_or_default().to_string())
    }

    pub(crate) fn u32_or_default(&self, key: &str) -> Result<u32, NormalizeError> {
        Ok(self.optional_u32(key)?.unwrap_or_default())
    }

    pub(crate) fn bool_or_default(&self, key: &str) -> Result<bool, NormalizeError> {
        self.get(key)
            .map(|v| v.as_bool().ok_or_else(|| NormalizeError::unexpected(key, "bool")))
            .transpose()
            .map(Option::unwrap_or_default)
    }

    /// Integer fields the API sends as strings (UInt64) or numbers, kept
    /// as a decimal string. Absent fields become `"0"`.
    pub(crate) fn integer_string_or_zero(&self, key: &str) -> Result<String, NormalizeError> {
        match self.get(key) {
            None => Ok("0".to_string()),
            Some(Value::Number(n)) if n.is_u64() => Ok(n.to_string()),
            Some(Value::String(s)) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
                Ok(s.clone())
            }
            Some(_) => Err(NormalizeError::unexpected(key, "integer")),
        }
    }

    /// Free-text field, decoded from hex when it is hex.
    pub(crate) fn text_or_default(&self, key: &str) -> Result<String, NormalizeError> {
        Ok(self.optional_str(key)?.map(validate_decode).unwrap_or_default())
    }

    pub(crate) fn required_text(&self, key: &str) -> Result<String, NormalizeError> {
        self.required_str(key).map(validate_decode)
    }

    pub(crate) fn amount(&self, key: &str) -> Result<Amount, NormalizeError> {
        Amount::classify(self.required(key)?).map_err(|e| NormalizeError::codec(key, e))
    }

    pub(crate) fn amount_parts(&self, key: &str) -> Result<AmountParts, NormalizeError> {
        self.amount(key).map(|amount| amount.parts())
    }

    pub(crate) fn drops(&self, key: &str) -> Result<Drops, NormalizeError> {
        Drops::from_value(self.required(key)?).map_err(|e| NormalizeError::codec(key, e))
    }

    pub(crate) fn drops_or_zero(&self, key: &str) -> Result<Drops, NormalizeError> {
        match self.get(key) {
            Some(value) => Drops::from_value(value).map_err(|e| NormalizeError::codec(key, e)),
            None => Ok(Drops::ZERO),
        }
    }

    /// Ledger timestamp rendered with `clock`, or `""` when absent.
    pub(crate) fn ripple_time_or_default(
        &self,
        key: &str,
        clock: &LedgerClock,
    ) -> Result<String, NormalizeError> {
        match self.optional_u64(key)? {
            Some(time) => clock
                .format_ripple_time(time)
                .map_err(|e| NormalizeError::codec(key, e)),
            None => Ok(String::new()),
        }
    }

    /// Flags decoded against `table`, or empty when absent.
    pub(crate) fn flags(
        &self,
        key: &str,
        table: &[FlagEntry],
    ) -> Result<Vec<FlagEntry>, NormalizeError> {
        Ok(decode_flags(table, self.u32_or_default(key)?))
    }

    /// NFT/MPT `TransferFee` in percent, zero when absent.
    pub(crate) fn nft_fee_or_zero(&self, key: &str) -> Result<Decimal, NormalizeError> {
        let Some(encoded) = self.optional_u64(key)? else {
            return Ok(Decimal::ZERO);
        };
        let encoded = u16::try_from(encoded).map_err(|_| NormalizeError::unexpected(key, "u16"))?;
        decode_nft_fee(encoded).map_err(|e| NormalizeError::codec(key, e))
    }
}

fn as_u64(key: &str, value: &Value) -> Result<u64, NormalizeError> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| NormalizeError::unexpected(key, "unsigned integer")),
        Value::String(s) => s
            .parse::<u64>()
            .map_err(|_| NormalizeError::unexpected(key, "unsigned integer")),
        _ => Err(NormalizeError::unexpected(key, "unsigned integer")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::NFTOKEN_FLAGS;
    use serde_json::json;

    #[test]
    fn test_new_requires_object() {
        let err = Fields::new(&json!([1, 2]), "node").unwrap_err();
        assert_eq!(
            err,
            NormalizeError::UnexpectedType {
                field: "node".to_string(),
                expected: "object"
            }
        );
    }

    #[test]
    fn test_required_and_optional() {
        let value = json!({"Account": "rAlice", "Sequence": 7, "Domain": null, "Fee": "12"});
        let fields = Fields::new(&value, "node").unwrap();

        assert_eq!(fields.required_str("Account").unwrap(), "rAlice");
        assert_eq!(fields.required_u32("Sequence").unwrap(), 7);
        assert_eq!(fields.required_u64("Fee").unwrap(), 12);
        assert_eq!(
            fields.required_str("Destination").unwrap_err(),
            NormalizeError::MissingField("Destination".to_string())
        );
        assert_eq!(fields.str_or_default("Domain").unwrap(), "");
        assert_eq!(fields.u32_or_default("TickSize").unwrap(), 0);
        assert!(!fields.contains("Domain"));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let value = json!({"Account": 5, "Sequence": -1, "Flags": "x"});
        let fields = Fields::new(&value, "node").unwrap();

        assert!(matches!(
            fields.required_str("Account"),
            Err(NormalizeError::UnexpectedType { .. })
        ));
        assert!(fields.required_u32("Sequence").is_err());
        assert!(fields.flags("Flags", NFTOKEN_FLAGS).is_err());
    }

    #[test]
    fn test_integer_string_or_zero() {
        let value = json!({"MaximumAmount": "1000", "Outstanding": 5, "Bad": "1.5"});
        let fields = Fields::new(&value, "node").unwrap();

        assert_eq!(fields.integer_string_or_zero("MaximumAmount").unwrap(), "1000");
        assert_eq!(fields.integer_string_or_zero("Outstanding").unwrap(), "5");
        assert_eq!(fields.integer_string_or_zero("Missing").unwrap(), "0");
        assert!(fields.integer_string_or_zero("Bad").is_err());
    }

    #[test]
    fn test_time_and_text() {
        let value = json!({"Expiration": 763821045, "Domain": "6578616D706C652E636F6D"});
        let fields = Fields::new(&value, "node").unwrap();
        let clock = LedgerClock::default();

        assert_eq!(
            fields.ripple_time_or_default("Expiration", &clock).unwrap(),
            "2024-03-15 12:30:45+00:00"
        );
        assert_eq!(fields.ripple_time_or_default("CancelAfter", &clock).unwrap(), "");
        assert_eq!(fields.text_or_default("Domain").unwrap(), "example.com");
        assert_eq!(fields.text_or_default("EmailHash").unwrap(), "");
    }

    #[test]
    fn test_amount_errors_carry_field() {
        let value = json!({"Amount": {"currency": "USD"}});
        let fields = Fields::new(&value, "node").unwrap();

        let err = fields.amount("Amount").unwrap_err();
        assert_eq!(err.field(), "Amount");
        assert!(matches!(err, NormalizeError::Codec { .. }));
    }

    #[test]
    fn test_nft_fee_or_zero() {
        let value = json!({"TransferFee": 25000, "Wide": 70000, "High": 60000});
        let fields = Fields::new(&value, "node").unwrap();

        assert_eq!(fields.nft_fee_or_zero("TransferFee").unwrap().to_string(), "25");
        assert_eq!(fields.nft_fee_or_zero("Missing").unwrap(), Decimal::ZERO);
        assert!(matches!(
            fields.nft_fee_or_zero("Wide"),
            Err(NormalizeError::UnexpectedType { .. })
        ));
        assert!(matches!(
            fields.nft_fee_or_zero("High"),
            Err(NormalizeError::Codec { .. })
        ));
    }
}
