//! Bilingual (Urdu/English) free-text search
//!
//! Records are flattened into one string, normalized, and matched by plain
//! substring containment. There is no tokenization or ranking: [`filter`]
//! keeps the input order.

use serde::Serialize;
use serde_json::Value;
use unicode_normalization::UnicodeNormalization;

/// Bidi and format controls: ZWNJ, ZWJ, LRM, RLM, ALM, embeddings,
/// overrides and isolates
fn is_format_control(c: char) -> bool {
    matches!(
        c,
        '\u{200C}'
            | '\u{200D}'
            | '\u{200E}'
            | '\u{200F}'
            | '\u{061C}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2066}'..='\u{2069}'
    )
}

/// Arabic harakat, superscript alef, Quranic marks and tatweel
fn is_arabic_mark(c: char) -> bool {
    matches!(
        c,
        '\u{064B}'..='\u{065F}' | '\u{0670}' | '\u{06D6}'..='\u{06ED}' | '\u{0640}'
    )
}

/// Arabic letter variants and digits folded to their Urdu/ASCII form
fn fold_char(c: char) -> char {
    match c {
        '\u{064A}' | '\u{0649}' => '\u{06CC}',
        '\u{0643}' => '\u{06A9}',
        '\u{0660}'..='\u{0669}' => ascii_digit(c as u32 - 0x0660),
        '\u{06F0}'..='\u{06F9}' => ascii_digit(c as u32 - 0x06F0),
        _ => c,
    }
}

fn ascii_digit(offset: u32) -> char {
    char::from_digit(offset, 10).unwrap_or('0')
}

/// Normalize text for matching
///
/// Strip format controls and diacritics, NFKC, strip again (compatibility
/// forms can expand into marks), fold letter variants and digits, collapse
/// whitespace, lowercase.
///
/// Controls and marks must be gone before NFKC runs, since they block
/// canonical composition.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .chars()
        .filter(|&c| keep(c))
        .nfkc()
        .filter(|&c| keep(c))
        .map(fold_char)
        .collect();

    folded
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn keep(c: char) -> bool {
    !is_format_control(c) && !is_arabic_mark(c)
}

/// Flatten a JSON value into space separated leaves, keys ignored
pub fn flatten(value: &Value) -> String {
    let mut leaves = Vec::new();
    collect_leaves(value, &mut leaves);
    leaves.join(" ")
}

fn collect_leaves(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Null => {}
        Value::String(s) => out.push(s.clone()),
        Value::Array(items) => items.iter().for_each(|v| collect_leaves(v, out)),
        Value::Object(map) => map.values().for_each(|v| collect_leaves(v, out)),
        other => out.push(other.to_string()),
    }
}

/// Normalized search text for any serializable record
///
/// Dates go through their serde form, which for `chrono` types is ISO-8601.
pub fn haystack<T: Serialize>(record: &T) -> String {
    match serde_json::to_value(record) {
        Ok(value) => normalize(&flatten(&value)),
        Err(e) => {
            tracing::warn!(error = %e, "record could not be serialized for search");
            String::new()
        }
    }
}

/// Substring match of a raw query against a normalized haystack
pub fn matches(query: &str, haystack: &str) -> bool {
    haystack.contains(&normalize(query))
}

/// Records matching `query`, in their original order
///
/// A query that normalizes to nothing matches every record.
pub fn filter<'a, T: Serialize>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = normalize(query);
    if needle.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| haystack(*item).contains(&needle))
        .collect()
}
