use std::borrow::Cow;

/// Prune fragment (#fragment) from URL string.
/// Returns (`url_without_fragment`, `fragment_without_hash`).
/// The fragment keeps everything after the first '#', including any '?',
/// so `#frag?x=1` yields the fragment `frag?x=1`.
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Prune query (?query) from a fragment-free URL string.
/// Returns (`url_without_query`, `query_without_question_mark`).
pub fn prune_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Trim leading/trailing C0 controls and spaces, remove internal tabs
/// and newlines. Returns a Cow to avoid allocation when possible.
pub fn trim_whitespace(input: &str) -> Cow<'_, str> {
    let bytes = input.as_bytes();

    // Fast path: no C0/space at all
    if !bytes.iter().any(|&b| b <= 0x20) {
        return Cow::Borrowed(input);
    }

    let start = bytes.iter().position(|&b| b > 0x20).unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|&b| b > 0x20)
        .map_or(0, |pos| pos + 1);

    if start >= end {
        return Cow::Borrowed("");
    }

    let trimmed = &input[start..end];
    if memchr::memchr3(b'\t', b'\n', b'\r', trimmed.as_bytes()).is_none() {
        return Cow::Borrowed(trimmed);
    }

    Cow::Owned(
        trimmed
            .chars()
            .filter(|&c| !matches!(c, '\t' | '\n' | '\r'))
            .collect(),
    )
}

/// Map an empty string to `None`, owning the value otherwise.
pub fn non_empty(input: &str) -> Option<String> {
    if input.is_empty() {
        None
    } else {
        Some(input.to_string())
    }
}
