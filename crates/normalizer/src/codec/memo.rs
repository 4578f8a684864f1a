// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Transaction memos. Every memo field is arbitrary bytes written as hex.

use serde::Serialize;
use serde_json::Value;

/// A memo in wire form: upper-case hex, no padding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Memo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo_format: Option<String>,
}

/// A memo decoded back to text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MemoText {
    pub memo_type: String,
    pub memo_data: String,
    pub memo_format: String,
}

pub fn encode_memo(memo_type: Option<&str>, memo_data: &str, memo_format: Option<&str>) -> Memo {
    Memo {
        memo_type: memo_type.map(encode_field),
        memo_data: Some(encode_field(memo_data)),
        memo_format: memo_format.map(encode_field),
    }
}

fn encode_field(text: &str) -> String {
    hex::encode_upper(text.as_bytes())
}

// Memo bytes need not be UTF-8; fall back to the raw hex.
fn decode_field(hex_str: &str) -> String {
    hex::decode(hex_str)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .unwrap_or_else(|| hex_str.to_string())
}

/// Decodes the `Memos` array of a transaction. Entries without a `Memo`
/// object are skipped.
pub fn decode_memos(memos: &Value) -> Vec<MemoText> {
    let Some(entries) = memos.as_array() else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| entry.get("Memo"))
        .map(|memo| {
            let field = |name: &str| {
                memo.get(name)
                    .and_then(Value::as_str)
                    .map(decode_field)
                    .unwrap_or_default()
            };
            MemoText {
                memo_type: field("MemoType"),
                memo_data: field("MemoData"),
                memo_format: field("MemoFormat"),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encode_memo() {
        let memo = encode_memo(Some("invoice"), "paid in full", Some("text/plain"));
        assert_eq!(memo.memo_type.as_deref(), Some("696E766F696365"));
        assert_eq!(memo.memo_data.as_deref(), Some("7061696420696E2066756C6C"));
        assert_eq!(memo.memo_format.as_deref(), Some("746578742F706C61696E"));
    }

    #[test]
    fn test_encode_memo_serializes_wire_names() {
        let memo = encode_memo(None, "hi", None);
        assert_eq!(serde_json::to_value(&memo).unwrap(), json!({"MemoData": "6869"}));
    }

    #[test]
    fn test_decode_memos() {
        let wire = json!([
            {"Memo": {"MemoType": "696E766F696365", "MemoData": "6869"}},
            {"NotAMemo": {}},
            {"Memo": {"MemoData": "FFFE"}}
        ]);
        let memos = decode_memos(&wire);
        assert_eq!(memos.len(), 2);
        assert_eq!(memos[0].memo_type, "invoice");
        assert_eq!(memos[0].memo_data, "hi");
        assert_eq!(memos[0].memo_format, "");
        assert_eq!(memos[1].memo_data, "FFFE");
    }

    #[test]
    fn test_decode_memos_not_an_array() {
        assert!(decode_memos(&json!(null)).is_empty());
    }
}
