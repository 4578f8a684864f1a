// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ledger amounts.
//!
//! XRP travels as a decimal string of drops (1 XRP = 1_000_000 drops).
//! Issued tokens travel as `{ "currency", "issuer", "value" }`.

use crate::codec::symbol::validate_decode;
use crate::error::CodecError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub const DROPS_PER_XRP: u64 = 1_000_000;

const XRP_DECIMALS: u32 = 6;

/// A quantity of drops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Drops(u64);

impl Drops {
    pub const ZERO: Drops = Drops(0);

    pub const fn new(drops: u64) -> Self {
        Drops(drops)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    pub fn to_xrp(self) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(self.0), XRP_DECIMALS).normalize()
    }

    pub fn checked_sub(self, other: Drops) -> Option<Drops> {
        self.0.checked_sub(other.0).map(Drops)
    }

    pub fn saturating_sub(self, other: Drops) -> Drops {
        Drops(self.0.saturating_sub(other.0))
    }

    /// Reads drops from a JSON string or non-negative integer.
    pub fn from_value(value: &Value) -> Result<Self, CodecError> {
        match value {
            Value::String(s) => s.parse(),
            Value::Number(n) => n
                .as_u64()
                .map(Drops)
                .ok_or_else(|| CodecError::invalid_number("drops", n.to_string())),
            other => Err(CodecError::invalid_number("drops", other.to_string())),
        }
    }
}

impl FromStr for Drops {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Drops)
            .map_err(|_| CodecError::invalid_number("drops", s))
    }
}

impl fmt::Display for Drops {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Drops {
    fn from(drops: u64) -> Self {
        Drops(drops)
    }
}

/// Convert a drops string to XRP.
pub fn drops_to_xrp(drops: &str) -> Result<Decimal, CodecError> {
    Ok(drops.parse::<Drops>()?.to_xrp())
}

/// Convert an XRP quantity to a drops string, rounding half away from zero
/// at the sixth decimal.
pub fn xrp_to_drops<T>(xrp: T) -> Result<String, CodecError>
where
    T: TryInto<Decimal>,
{
    let xrp: Decimal = xrp
        .try_into()
        .map_err(|_| CodecError::invalid_number("XRP", "value not representable as a decimal"))?;

    let out_of_range = || CodecError::range("XRP", xrp, 0, Drops(u64::MAX).to_xrp());

    let drops = xrp
        .checked_mul(Decimal::from(DROPS_PER_XRP))
        .ok_or_else(out_of_range)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    if drops.is_zero() {
        return Ok("0".to_string());
    }
    if drops.is_sign_negative() {
        return Err(out_of_range());
    }

    drops.to_u64().map(|d| d.to_string()).ok_or_else(out_of_range)
}

/// Parses a decimal string, accepting the exponent notation rippled uses
/// for offer qualities.
pub(crate) fn parse_decimal(literal: &str) -> Option<Decimal> {
    let literal = literal.trim();
    Decimal::from_str(literal)
        .or_else(|_| Decimal::from_scientific(literal))
        .ok()
}

/// A classified wire amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Amount {
    Xrp {
        drops: Drops,
    },
    Issued {
        currency: String,
        issuer: String,
        value: String,
    },
}

/// The `(token, issuer, amount)` triple records carry.
///
/// XRP has an empty token and issuer, and its amount in XRP rather than
/// drops. Issued tokens copy their value verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AmountParts {
    pub token: String,
    pub issuer: String,
    pub amount: String,
}

impl Amount {
    pub fn classify(wire: &Value) -> Result<Self, CodecError> {
        match wire {
            Value::String(drops) => Ok(Amount::Xrp {
                drops: drops.parse()?,
            }),
            Value::Object(map) => {
                let field = |name: &str| -> Result<String, CodecError> {
                    map.get(name)
                        .and_then(Value::as_str)
                        .map(str::to_string)
                        .ok_or_else(|| {
                            CodecError::MalformedAmount(format!(
                                "issued amount has no string '{}'",
                                name
                            ))
                        })
                };
                Ok(Amount::Issued {
                    currency: validate_decode(&field("currency")?),
                    issuer: field("issuer")?,
                    value: field("value")?,
                })
            }
            other => Err(CodecError::MalformedAmount(format!(
                "expected a drops string or an issued amount object, got {}",
                other
            ))),
        }
    }

    pub fn is_xrp(&self) -> bool {
        matches!(self, Amount::Xrp { .. })
    }

    /// The numeric amount in display units: XRP for native, the token
    /// value otherwise.
    pub fn display_value(&self) -> Option<Decimal> {
        match self {
            Amount::Xrp { drops } => Some(drops.to_xrp()),
            Amount::Issued { value, .. } => parse_decimal(value),
        }
    }

    pub fn parts(&self) -> AmountParts {
        match self {
            Amount::Xrp { drops } => AmountParts {
                token: String::new(),
                issuer: String::new(),
                amount: drops.to_xrp().to_string(),
            },
            Amount::Issued {
                currency,
                issuer,
                value,
            } => AmountParts {
                token: currency.clone(),
                issuer: issuer.clone(),
                amount: value.clone(),
            },
        }
    }
}

pub fn classify_amount(wire: &Value) -> Result<Amount, CodecError> {
    Amount::classify(wire)
}
