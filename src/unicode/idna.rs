/// Check if 4 bytes match "xn--" (case insensitive)
fn is_punycode_prefix(slice: &[u8]) -> bool {
    slice.len() >= 4
        && matches!(slice[0], b'x' | b'X')
        && matches!(slice[1], b'n' | b'N')
        && slice[2] == b'-'
        && slice[3] == b'-'
}

/// Check if a label or domain contains Punycode (xn-- prefix, case insensitive)
pub fn has_punycode(domain: &str) -> bool {
    let bytes = domain.as_bytes();
    if bytes.len() < 4 {
        return false;
    }

    if is_punycode_prefix(bytes) {
        return true;
    }

    memchr::memchr_iter(b'.', bytes).any(|pos| is_punycode_prefix(&bytes[pos + 1..]))
}

/// Normalize a single domain label to its IDNA-ASCII form.
///
/// Suffix rules and host labels are both pushed through this so that a
/// Unicode rule (`中国`) matches a Punycode host label (`xn--fiqs8s`) and
/// vice versa. Returns None when the label cannot be normalized.
pub fn normalize_label(label: &str) -> Option<String> {
    // Fast path: plain ASCII hostname characters, just lowercase.
    // Punycode labels take the slow path for validation.
    if label.is_ascii() && !has_punycode(label) {
        let mut result = String::with_capacity(label.len());
        for b in label.bytes() {
            match b {
                b'A'..=b'Z' => result.push((b + 32) as char),
                b'a'..=b'z' | b'0'..=b'9' | b'-' => result.push(b as char),
                _ => return None,
            }
        }
        if result.is_empty() {
            return None;
        }
        return Some(result);
    }

    idna::domain_to_ascii(label).ok().filter(|s| !s.is_empty())
}
