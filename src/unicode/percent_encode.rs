use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Query component percent-encode set: C0 controls, space, characters
/// that are unsafe in URLs, and the separators that would change pair
/// structure (`&`, `=`) plus the characters with their own escape
/// semantics (`%`, `+`, `#`).
const QUERY_COMPONENT_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'#')
    .add(b'&')
    .add(b'=')
    .add(b'%')
    .add(b'+');

/// Percent-encode a query key or value.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, QUERY_COMPONENT_SET).to_string()
}

/// Decode a query key or value: '+' means space, then percent-decode.
/// Invalid UTF-8 after decoding falls back to the plus-substituted input.
pub fn decode_component(input: &str) -> String {
    let replaced = input.replace('+', " ");
    match percent_encoding::percent_decode_str(&replaced).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => replaced,
    }
}
