// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Flag tables, one per entity type. Entries are decoded in the order
//! they are declared here.

use super::FlagEntry;

const fn flag(
    value: u32,
    name: &'static str,
    code: &'static str,
    description: &'static str,
) -> FlagEntry {
    FlagEntry {
        value,
        name,
        code,
        description,
    }
}

// ================================================================================================
// NFTs
// ================================================================================================

pub static NFTOKEN_FLAGS: &[FlagEntry] = &[
    flag(
        0x0000_0001,
        "Issuer Burn",
        "lsfBurnable",
        "The issuer, or an entity it authorizes, may destroy the NFToken. The owner can always burn it.",
    ),
    flag(
        0x0000_0002,
        "Only XRP",
        "lsfOnlyXRP",
        "The NFToken can only be bought or sold for XRP.",
    ),
    flag(
        0x0000_0008,
        "Transferable",
        "lsfTransferable",
        "The NFToken can be transferred between holders. Without it, transfers must involve the issuer.",
    ),
];

pub static NFTOKEN_OFFER_FLAGS: &[FlagEntry] = &[flag(
    0x0000_0001,
    "Sell NFToken",
    "tfSellNFToken",
    "The offer is a sell offer. Otherwise it is a buy offer.",
)];

// ================================================================================================
// Payments and offers
// ================================================================================================

pub static PAYMENT_FLAGS: &[FlagEntry] = &[
    flag(
        0x0001_0000,
        "No Direct Ripple",
        "tfNoRippleDirect",
        "Only the paths in the Paths field are used; the default path is skipped.",
    ),
    flag(
        0x0002_0000,
        "Partial Payment",
        "tfPartialPayment",
        "The payment may succeed by delivering less than the Amount field.",
    ),
    flag(
        0x0004_0000,
        "Limit Quality",
        "tfLimitQuality",
        "Only conversions at or better than the SendMax to Amount ratio are taken.",
    ),
];

pub static OFFER_FLAGS: &[FlagEntry] = &[
    flag(
        0x0001_0000,
        "Passive Offer",
        "tfPassive",
        "The offer does not consume offers that exactly match it and rests on the books instead.",
    ),
    flag(
        0x0002_0000,
        "Immediate or Cancel Offer",
        "tfImmediateOrCancel",
        "The offer trades what it can on submission and never rests on the books.",
    ),
    flag(
        0x0004_0000,
        "Fill Or Kill",
        "tfFillOrKill",
        "The offer is cancelled unless it can be filled in full on submission.",
    ),
    flag(
        0x0008_0000,
        "Sell All",
        "tfSell",
        "The whole TakerGets amount is exchanged, even if that returns more than TakerPays.",
    ),
];

// ================================================================================================
// Accounts
// ================================================================================================

pub static ACCOUNT_ROOT_FLAGS: &[FlagEntry] = &[
    flag(
        0x0001_0000,
        "Free Regular Key Transaction",
        "lsfPasswordSpent",
        "The account has used its free SetRegularKey transaction.",
    ),
    flag(
        0x0080_0000,
        "Default Ripple",
        "lsfDefaultRipple",
        "Rippling is enabled on this account's trust lines by default.",
    ),
    flag(
        0x0100_0000,
        "Deposit Authorization",
        "lsfDepositAuth",
        "The account only receives funds from transactions it sends and from preauthorized accounts.",
    ),
    flag(
        0x0010_0000,
        "Disable Master Key",
        "lsfDisableMaster",
        "The master key pair cannot sign transactions for this account.",
    ),
    flag(
        0x0800_0000,
        "Block Incoming Checks",
        "lsfDisallowIncomingCheck",
        "Other accounts cannot create checks directed to this account.",
    ),
    flag(
        0x0400_0000,
        "Block Incoming NFTokenOffers",
        "lsfDisallowIncomingNFTokenOffer",
        "Other accounts cannot create NFToken offers directed to this account.",
    ),
    flag(
        0x1000_0000,
        "Block Incoming Payment Channels",
        "lsfDisallowIncomingPayChan",
        "Other accounts cannot create payment channels directed to this account.",
    ),
    flag(
        0x2000_0000,
        "Block Incoming Trustlines",
        "lsfDisallowIncomingTrustline",
        "Other accounts cannot create trust lines to this account.",
    ),
    flag(
        0x0008_0000,
        "Block XRP",
        "lsfDisallowXRP",
        "The account asks not to receive XRP. Not enforced by the protocol.",
    ),
    flag(
        0x0040_0000,
        "Global Freeze",
        "lsfGlobalFreeze",
        "All tokens issued by this account are frozen.",
    ),
    flag(
        0x0020_0000,
        "No Freeze",
        "lsfNoFreeze",
        "The account has permanently given up the ability to freeze trust lines.",
    ),
    flag(
        0x0004_0000,
        "Require Authorization",
        "lsfRequireAuth",
        "Holders of this account's tokens must be individually authorized.",
    ),
    flag(
        0x0002_0000,
        "Require Destination Tag",
        "lsfRequireDestTag",
        "Incoming payments must carry a destination tag.",
    ),
    flag(
        0x8000_0000,
        "Trustline Clawback",
        "lsfAllowTrustLineClawback",
        "The account may claw back tokens it has issued. Cannot be disabled once set.",
    ),
];

// ================================================================================================
// Multi-purpose tokens
// ================================================================================================

pub static MPTOKEN_ISSUANCE_FLAGS: &[FlagEntry] = &[
    flag(
        0x0000_0001,
        "Locked",
        "lsfMPTLocked",
        "All balances of this issuance are locked.",
    ),
    flag(
        0x0000_0002,
        "Can Lock",
        "lsfMPTCanLock",
        "The issuer can lock individual balances or the whole issuance.",
    ),
    flag(
        0x0000_0004,
        "Requires Authorization",
        "lsfMPTRequireAuth",
        "Holders must be individually authorized by the issuer.",
    ),
    flag(
        0x0000_0008,
        "Can Escrow",
        "lsfMPTCanEscrow",
        "Holders can place their balances in escrow.",
    ),
    flag(
        0x0000_0010,
        "Can Trade",
        "lsfMPTCanTrade",
        "Holders can trade their balances on the DEX or AMM.",
    ),
    flag(
        0x0000_0020,
        "Can Transfer",
        "lsfMPTCanTransfer",
        "Holders can transfer balances to accounts other than the issuer.",
    ),
    flag(
        0x0000_0040,
        "Can Clawback",
        "lsfMPTCanClawback",
        "The issuer can claw back value from individual holders.",
    ),
];

pub static MPTOKEN_FLAGS: &[FlagEntry] = &[
    flag(
        0x0000_0001,
        "Locked",
        "lsfMPTLocked",
        "This holder's balance is locked and can only be returned to the issuer.",
    ),
    flag(
        0x0000_0002,
        "Authorized",
        "lsfMPTAuthorized",
        "The issuer has authorized this holder.",
    ),
];
