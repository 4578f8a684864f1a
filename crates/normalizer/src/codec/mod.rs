// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pure value codecs between ledger wire values and display values.

pub mod amount;
pub mod fee;
pub mod memo;
pub mod price;
pub mod symbol;
pub mod time;

pub use amount::{
    Amount, AmountParts, DROPS_PER_XRP, Drops, classify_amount, drops_to_xrp, xrp_to_drops,
};
pub use fee::{
    AMM_FEE, FeeCodec, NFT_FEE, TRANSFER_FEE, decode_amm_fee, decode_nft_fee, decode_transfer_fee,
    encode_amm_fee, encode_nft_fee, encode_transfer_fee,
};
pub use memo::{Memo, MemoText, decode_memos, encode_memo};
pub use price::{MAX_PRICE_SCALE, ScaledPrice, decode_price, encode_price, scale_of};
pub use symbol::{decode_symbol, encode_symbol, is_hex, validate_decode, validate_encode};
pub use time::{
    LedgerClock, RIPPLE_EPOCH_OFFSET, datetime_to_ripple_time, format_settle_delay,
    ripple_time_to_datetime,
};
