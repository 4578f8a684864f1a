// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fixed-point fee codecs.
//!
//! The ledger stores fees as integers. Each fee family has its own offset
//! and resolution:
//!
//! | Family                 | Percent range | Encoded range                   |
//! |------------------------|---------------|---------------------------------|
//! | Issuer transfer rate   | 0 – 100       | 1_000_000_000 – 2_000_000_000   |
//! | NFT / MPT transfer fee | 0 – 50        | 0 – 50_000                      |
//! | AMM trading fee        | 0 – 1         | 0 – 1_000                       |
//!
//! Encoding truncates toward zero. Decoding is exact.

use crate::error::CodecError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Parameters of one fee family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeCodec {
    name: &'static str,
    offset: u32,
    units_per_percent: u32,
    max_percent: u32,
}

/// `TransferRate` on an issuing account. `0` on ledger means "not set".
pub const TRANSFER_FEE: FeeCodec = FeeCodec {
    name: "transfer fee",
    offset: 1_000_000_000,
    units_per_percent: 10_000_000,
    max_percent: 100,
};

/// `TransferFee` on NFTokens and MPT issuances.
pub const NFT_FEE: FeeCodec = FeeCodec {
    name: "NFT transfer fee",
    offset: 0,
    units_per_percent: 1_000,
    max_percent: 50,
};

/// `TradingFee` on AMM pools.
pub const AMM_FEE: FeeCodec = FeeCodec {
    name: "AMM trading fee",
    offset: 0,
    units_per_percent: 1_000,
    max_percent: 1,
};

impl FeeCodec {
    pub fn min_encoded(&self) -> u32 {
        self.offset
    }

    pub fn max_encoded(&self) -> u32 {
        self.offset + self.units_per_percent * self.max_percent
    }

    pub fn encode(&self, percent: Decimal) -> Result<u32, CodecError> {
        let max = Decimal::from(self.max_percent);
        if percent < Decimal::ZERO || percent > max {
            return Err(CodecError::range(self.name, percent, 0, max));
        }

        (percent * Decimal::from(self.units_per_percent))
            .trunc()
            .to_u32()
            .map(|units| self.offset + units)
            .ok_or_else(|| CodecError::range(self.name, percent, 0, max))
    }

    pub fn decode(&self, encoded: u32) -> Result<Decimal, CodecError> {
        if encoded < self.min_encoded() || encoded > self.max_encoded() {
            return Err(CodecError::range(
                self.name,
                encoded,
                self.min_encoded(),
                self.max_encoded(),
            ));
        }

        let units = Decimal::from(encoded - self.offset);
        Ok((units / Decimal::from(self.units_per_percent)).normalize())
    }
}

pub fn encode_transfer_fee(percent: Decimal) -> Result<u32, CodecError> {
    TRANSFER_FEE.encode(percent)
}

/// Decodes an account `TransferRate`. The unset value `0` decodes to 0%.
pub fn decode_transfer_fee(encoded: u32) -> Result<Decimal, CodecError> {
    if encoded == 0 {
        return Ok(Decimal::ZERO);
    }
    TRANSFER_FEE.decode(encoded)
}

pub fn encode_nft_fee(percent: Decimal) -> Result<u16, CodecError> {
    NFT_FEE.encode(percent).and_then(|encoded| narrow(&NFT_FEE, encoded))
}

pub fn decode_nft_fee(encoded: u16) -> Result<Decimal, CodecError> {
    NFT_FEE.decode(u32::from(encoded))
}

pub fn encode_amm_fee(percent: Decimal) -> Result<u16, CodecError> {
    AMM_FEE.encode(percent).and_then(|encoded| narrow(&AMM_FEE, encoded))
}

pub fn decode_amm_fee(encoded: u16) -> Result<Decimal, CodecError> {
    AMM_FEE.decode(u32::from(encoded))
}

// NFT and AMM fees are UInt16 fields on ledger.
fn narrow(codec: &FeeCodec, encoded: u32) -> Result<u16, CodecError> {
    u16::try_from(encoded).map_err(|_| CodecError::range(codec.name, encoded, 0, u16::MAX))
}
