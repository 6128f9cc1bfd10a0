//! Query string encoding.
//!
//! Values are form-encoded: ASCII alphanumerics and `-_.` pass through, a
//! space becomes `+`, every other byte becomes `%XX`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Form-encode a single key or value.
pub fn encode_component(value: &str) -> String {
    // A literal '%' is itself escaped to %25, so every %20 here came from a space.
    utf8_percent_encode(value, FORM_VALUE)
        .to_string()
        .replace("%20", "+")
}

/// Join `key=value` pairs with `&`, preserving their order.
pub fn build_query(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}
