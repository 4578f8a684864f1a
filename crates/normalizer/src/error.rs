// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt::Display;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors raised by the value codecs.
///
/// Two families exist: range errors for well-formed values outside a
/// codec's domain, and format errors for input that cannot be parsed at all.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    #[error("{what} {value} is outside the valid range [{min}, {max}]")]
    Range {
        what: &'static str,
        value: String,
        min: String,
        max: String,
    },

    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Decoded bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),

    #[error("Invalid {what} '{literal}'")]
    InvalidNumber { what: &'static str, literal: String },

    #[error("Malformed amount: {0}")]
    MalformedAmount(String),

    #[error("Invalid time format '{0}'")]
    InvalidTimeFormat(String),
}

impl CodecError {
    pub(crate) fn range(
        what: &'static str,
        value: impl Display,
        min: impl Display,
        max: impl Display,
    ) -> Self {
        CodecError::Range {
            what,
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    pub(crate) fn invalid_number(what: &'static str, literal: impl Into<String>) -> Self {
        CodecError::InvalidNumber {
            what,
            literal: literal.into(),
        }
    }

    pub fn is_range_error(&self) -> bool {
        matches!(self, CodecError::Range { .. })
    }

    pub fn is_format_error(&self) -> bool {
        !self.is_range_error()
    }
}

/// Errors raised while normalizing a ledger response into a record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Field '{field}' has an unexpected type, expected {expected}")]
    UnexpectedType {
        field: String,
        expected: &'static str,
    },

    #[error("Failed to decode field '{field}': {source}")]
    Codec {
        field: String,
        #[source]
        source: CodecError,
    },
}

impl NormalizeError {
    pub(crate) fn codec(field: impl Into<String>, source: CodecError) -> Self {
        NormalizeError::Codec {
            field: field.into(),
            source,
        }
    }

    pub(crate) fn unexpected(field: impl Into<String>, expected: &'static str) -> Self {
        NormalizeError::UnexpectedType {
            field: field.into(),
            expected,
        }
    }

    /// The field the error refers to.
    pub fn field(&self) -> &str {
        match self {
            NormalizeError::MissingField(field) => field,
            NormalizeError::UnexpectedType { field, .. } => field,
            NormalizeError::Codec { field, .. } => field,
        }
    }
}
