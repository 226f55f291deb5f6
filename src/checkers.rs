/// Check the absolute-path decision rule: exactly one leading '/'
/// followed by a non-'/' character or end of string.
///
/// Inputs matching this rule are split as a bare path with no scheme,
/// authority or public-suffix lookup. Protocol-relative (`//host`) and
/// malformed double-slash forms do not match.
pub fn is_absolute_path(input: &str) -> bool {
    match input.as_bytes() {
        [b'/'] => true,
        [b'/', next, ..] => *next != b'/',
        _ => false,
    }
}

/// Check whether a string has the shape of a URI scheme:
/// ALPHA followed by ALPHA / DIGIT / '+' / '-' / '.'
pub fn is_scheme(input: &str) -> bool {
    let bytes = input.as_bytes();
    match bytes.first() {
        Some(first) if first.is_ascii_alphabetic() => bytes[1..]
            .iter()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')),
        _ => false,
    }
}

/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
pub fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse::<u16>().ok()
}

/// Check if a string could be an IPv4 address (fast preliminary check).
/// Used to skip public-suffix derivation for numeric hosts.
pub fn is_ipv4(input: &str) -> bool {
    let input = input.strip_suffix('.').unwrap_or(input);
    if input.is_empty() {
        return false;
    }
    // Last segment all digits is enough of a signal; domains never end in
    // a purely numeric label.
    let last_segment = input.rsplit('.').next().unwrap_or(input);
    !last_segment.is_empty() && last_segment.bytes().all(|b| b.is_ascii_digit())
}
