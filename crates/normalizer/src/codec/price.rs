// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Oracle price codec.
//!
//! Price oracles store an asset price as an integer mantissa, written as
//! hex, plus a decimal scale: `value = mantissa / 10^scale`. The scale is
//! taken from the number of fractional digits in the literal and capped
//! at [`MAX_PRICE_SCALE`].

use crate::error::CodecError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::str::FromStr;

pub const MAX_PRICE_SCALE: u32 = 10;

/// Number of digits after the decimal point in `literal`, capped at 10.
pub fn scale_of(literal: &str) -> u32 {
    match literal.trim().split_once('.') {
        None => 0,
        Some((_, fraction)) => {
            let digits = fraction.chars().take_while(|c| c.is_ascii_digit()).count();
            u32::try_from(digits).map_or(MAX_PRICE_SCALE, |d| d.min(MAX_PRICE_SCALE))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScaledPrice {
    pub mantissa: i128,
    pub scale: u32,
}

impl ScaledPrice {
    /// Upper-case hex mantissa, as stored in `AssetPrice`.
    pub fn mantissa_hex(&self) -> String {
        if self.mantissa < 0 {
            format!("-{:X}", self.mantissa.unsigned_abs())
        } else {
            format!("{:X}", self.mantissa)
        }
    }

    pub fn value(&self) -> Result<Decimal, CodecError> {
        Decimal::try_from_i128_with_scale(self.mantissa, self.scale)
            .map(|d| d.normalize())
            .map_err(|_| CodecError::range("price mantissa", self.mantissa, i64::MIN, i64::MAX))
    }
}

/// Scale a decimal literal into an integer mantissa, rounding half away
/// from zero when the literal has more than 10 fractional digits.
pub fn encode_price(literal: &str) -> Result<ScaledPrice, CodecError> {
    let value = Decimal::from_str(literal.trim())
        .map_err(|_| CodecError::invalid_number("price", literal))?;
    let scale = scale_of(literal);

    let factor = Decimal::from(10u64.pow(scale));
    let out_of_range = || CodecError::range("price mantissa", literal, 0, u64::MAX);

    // AssetPrice is a UInt64 on ledger, so the magnitude must fit in 64 bits.
    let mantissa = value
        .checked_mul(factor)
        .map(|v| v.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|v| v.to_i128())
        .filter(|m| m.unsigned_abs() <= u128::from(u64::MAX))
        .ok_or_else(out_of_range)?;

    Ok(ScaledPrice { mantissa, scale })
}

/// Decode a hex mantissa (optional `0x` prefix, optional leading `-`) at
/// the given scale.
pub fn decode_price(mantissa_hex: &str, scale: u32) -> Result<Decimal, CodecError> {
    if scale > MAX_PRICE_SCALE {
        return Err(CodecError::range("price scale", scale, 0, MAX_PRICE_SCALE));
    }

    let mantissa = parse_mantissa(mantissa_hex)?;
    ScaledPrice { mantissa, scale }.value()
}

fn parse_mantissa(input: &str) -> Result<i128, CodecError> {
    let trimmed = input.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits);

    // AssetPrice is a UInt64 on ledger.
    let magnitude = u64::from_str_radix(digits, 16)
        .map_err(|_| CodecError::invalid_number("hex mantissa", input))?;
    let magnitude = i128::from(magnitude);

    Ok(if negative { -magnitude } else { magnitude })
}
