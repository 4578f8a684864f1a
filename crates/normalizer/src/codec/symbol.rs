// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Conversion between human-readable symbols and their on-ledger hex form.
//!
//! Currency codes of more than three characters, account domains, URIs and
//! oracle provider names are stored as hex. Non-standard currency codes
//! occupy exactly 20 bytes, so encoded output is right-padded with `0` to
//! 40 hex characters. Strings of three characters or fewer are standard
//! currency codes and pass through unchanged in both directions.

use crate::error::CodecError;

/// Hex length of a 160-bit currency code.
pub const CURRENCY_CODE_HEX_LEN: usize = 40;

/// Longest string treated as a standard (ISO-style) currency code.
pub const STANDARD_CODE_MAX_LEN: usize = 3;

fn is_standard_code(s: &str) -> bool {
    s.chars().count() <= STANDARD_CODE_MAX_LEN
}

/// Encode a symbol to hex.
///
/// Output shorter than 40 characters is right-padded with `0`. Longer output
/// is returned in full.
pub fn encode_symbol(symbol: &str) -> String {
    if is_standard_code(symbol) {
        return symbol.to_string();
    }

    format!(
        "{:0<width$}",
        hex::encode(symbol.as_bytes()),
        width = CURRENCY_CODE_HEX_LEN
    )
}

/// Decode a hex symbol back to text, dropping trailing NUL padding.
pub fn decode_symbol(hex_str: &str) -> Result<String, CodecError> {
    if is_standard_code(hex_str) {
        return Ok(hex_str.to_string());
    }

    let bytes = hex::decode(hex_str)?;
    let decoded = String::from_utf8(bytes)?;
    Ok(decoded.trim_end_matches('\0').to_string())
}

/// Encode without failing. Encoding a `&str` cannot fail, so this is
/// [`encode_symbol`] under the name callers pair with [`validate_decode`].
pub fn validate_encode(symbol: &str) -> String {
    encode_symbol(symbol)
}

/// Decode if `input` is hex text, otherwise hand it back unchanged.
///
/// Ledger fields such as `Domain` or `URI` are usually hex but not always,
/// so normalizers route every free-text field through here.
pub fn validate_decode(input: &str) -> String {
    match decode_symbol(input) {
        Ok(decoded) => decoded,
        Err(e) => {
            tracing::trace!(input = %input, error = %e, "Value is not hex text, passing through");
            input.to_string()
        }
    }
}

/// `true` if `input` decodes as hex text.
pub fn is_hex(input: &str) -> bool {
    decode_symbol(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_codes_pass_through() {
        for code in ["", "X", "EU", "USD", "€$£"] {
            assert_eq!(encode_symbol(code), code);
            assert_eq!(decode_symbol(code).unwrap(), code);
        }
    }

    #[test]
    fn test_encode_pads_to_currency_width() {
        let encoded = encode_symbol("SOLO");
        assert_eq!(encoded, "534f4c4f00000000000000000000000000000000");
        assert_eq!(encoded.len(), CURRENCY_CODE_HEX_LEN);
    }

    #[test]
    fn test_encode_long_symbol_not_truncated() {
        let symbol = "https://example.com/metadata.json";
        let encoded = encode_symbol(symbol);
        assert_eq!(encoded.len(), symbol.len() * 2);
        assert_eq!(decode_symbol(&encoded).unwrap(), symbol);
    }

    #[test]
    fn test_round_trip() {
        for symbol in ["SOLO", "Coreum", "xrpl.example", "ÆØÅ coin"] {
            assert_eq!(decode_symbol(&encode_symbol(symbol)).unwrap(), symbol);
        }
    }

    #[test]
    fn test_decode_padded_three_letter_code() {
        let padded = format!("{:0<40}", "555344");
        assert_eq!(decode_symbol(&padded).unwrap(), "USD");
    }

    #[test]
    fn test_decode_uppercase_hex() {
        assert_eq!(
            decode_symbol("6578616D706C652E636F6D").unwrap(),
            "example.com"
        );
    }

    #[test]
    fn test_decode_errors() {
        let err = decode_symbol("not hex at all").unwrap_err();
        assert!(matches!(err, CodecError::InvalidHex(_)));

        let err = decode_symbol("abc").map(|_| ()).err();
        assert!(err.is_none(), "three characters pass through");

        let err = decode_symbol("fffe").unwrap_err();
        assert!(matches!(err, CodecError::InvalidUtf8(_)));
    }

    #[test]
    fn test_validate_decode_passes_through() {
        let address = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";
        assert_eq!(validate_decode(address), address);
        assert_eq!(validate_decode("736F6C6F"), "solo");
    }

    #[test]
    fn test_is_hex() {
        assert!(is_hex("736F6C6F"));
        assert!(is_hex("USD"));
        assert!(!is_hex("rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh"));
        assert!(!is_hex("fffe"));
    }

    #[test]
    fn test_validate_encode() {
        assert_eq!(validate_encode("USD"), "USD");
        assert_eq!(validate_encode("SOLO"), encode_symbol("SOLO"));
    }
}
