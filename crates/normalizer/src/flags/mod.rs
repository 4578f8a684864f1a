// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Bit-flag decoding against static per-entity tables.

mod tables;

pub use tables::{
    ACCOUNT_ROOT_FLAGS, MPTOKEN_FLAGS, MPTOKEN_ISSUANCE_FLAGS, NFTOKEN_FLAGS, NFTOKEN_OFFER_FLAGS,
    OFFER_FLAGS, PAYMENT_FLAGS,
};

use serde::Serialize;

/// One named bit of a flags field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlagEntry {
    pub value: u32,
    pub name: &'static str,
    pub code: &'static str,
    pub description: &'static str,
}

/// Every entry of `table` whose bits are all set in `value`, in table
/// order. Zero-valued entries never match.
pub fn decode_flags(table: &[FlagEntry], value: u32) -> Vec<FlagEntry> {
    table
        .iter()
        .filter(|entry| has_flag(value, entry.value))
        .copied()
        .collect()
}

pub fn flag_names(table: &[FlagEntry], value: u32) -> Vec<&'static str> {
    decode_flags(table, value)
        .into_iter()
        .map(|entry| entry.name)
        .collect()
}

pub fn has_flag(value: u32, mask: u32) -> bool {
    mask != 0 && value & mask == mask
}
