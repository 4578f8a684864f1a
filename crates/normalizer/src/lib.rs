// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Codecs and normalizers for XRP Ledger JSON.
//!
//! [`codec`] converts single wire values (drops, hex symbols, fixed-point
//! fees, scaled prices, ledger timestamps, memos). [`flags`] decodes packed
//! flag fields. [`ledger`] composes both into flat records via a
//! [`Normalizer`] configured from [`config::LedgerConfig`].

pub mod codec;
pub mod error;
pub mod flags;
pub mod ledger;
pub mod logging;

pub use xrpl_normalizer_config as config;

pub use codec::{Amount, AmountParts, Drops, LedgerClock};
pub use error::{CodecError, NormalizeError};
pub use flags::{FlagEntry, decode_flags};
pub use ledger::{LedgerObject, Normalizer};
