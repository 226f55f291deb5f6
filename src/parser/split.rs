use crate::checkers::{is_absolute_path, is_scheme, parse_port};
use crate::error::{ParseError, Result};
use crate::helpers::{non_empty, prune_fragment, prune_query, trim_whitespace};

/// Raw string components of a URL, split without any domain knowledge.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct RawParts {
    pub scheme: Option<String>,
    pub user: Option<String>,
    pub pass: Option<String>,
    pub host: Option<String>,
    pub port: Option<String>,
    pub path: Option<String>,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

/// Split a string into scheme/authority/path/query/fragment.
///
/// An input matching the absolute-path rule (single leading slash) is
/// split as path-only. Anything else is treated as a full URL with an
/// optional `scheme://` and an optional protocol-relative `//` prefix.
/// Fails with [`ParseError::InvalidUrl`] when nothing can be decomposed:
/// empty input, an empty authority after a scheme (`http:///x`), or an
/// unparseable port.
pub(crate) fn split_url(input: &str) -> Result<RawParts> {
    let cleaned = trim_whitespace(input);
    let input = cleaned.as_ref();
    if input.is_empty() {
        return Err(ParseError::InvalidUrl);
    }

    if is_absolute_path(input) {
        return Ok(split_path_only(input));
    }

    let (rest, fragment) = prune_fragment(input);
    let (rest, query) = prune_query(rest);

    let (scheme, rest) = match find_scheme(rest) {
        Some((scheme, rest)) => (Some(scheme), rest),
        // Protocol-relative form keeps its host, just no scheme
        None => (None, rest.strip_prefix("//").unwrap_or(rest)),
    };

    let (authority, path) = match memchr::memchr(b'/', rest.as_bytes()) {
        Some(pos) => (&rest[..pos], Some(&rest[pos..])),
        None => (rest, None),
    };
    if authority.is_empty() {
        return Err(ParseError::InvalidUrl);
    }

    let mut parts = RawParts {
        scheme: scheme.map(str::to_string),
        path: path.map(str::to_string),
        // Empty captures ("?" or "#" with nothing after) count as absent
        query: query.and_then(non_empty),
        fragment: fragment.and_then(non_empty),
        ..RawParts::default()
    };

    let hostport = match memchr::memrchr(b'@', authority.as_bytes()) {
        Some(pos) => {
            let userinfo = &authority[..pos];
            match userinfo.split_once(':') {
                Some((user, pass)) => {
                    parts.user = non_empty(user);
                    parts.pass = non_empty(pass);
                }
                None => parts.user = non_empty(userinfo),
            }
            &authority[pos + 1..]
        }
        None => authority,
    };

    let (host, port) = split_host_port(hostport);
    if host.is_empty() {
        return Err(ParseError::InvalidUrl);
    }
    if let Some(port) = port {
        if parse_port(port).is_none() {
            return Err(ParseError::InvalidUrl);
        }
        parts.port = Some(port.to_string());
    }
    parts.host = Some(host.to_string());

    Ok(parts)
}

/// Split an authority remainder into hostname and optional port text.
/// Bracketed IPv6 hosts keep their colons.
fn split_host_port(hostport: &str) -> (&str, Option<&str>) {
    if hostport.starts_with('[') {
        if let Some(bracket_end) = hostport.find(']') {
            let host = &hostport[..=bracket_end];
            let port = hostport[bracket_end + 1..].strip_prefix(':');
            return (host, port);
        }
        return (hostport, None);
    }
    match memchr::memrchr(b':', hostport.as_bytes()) {
        Some(pos) => (&hostport[..pos], Some(&hostport[pos + 1..])),
        None => (hostport, None),
    }
}

/// Bare path form: path plus optional query and fragment, nothing else.
fn split_path_only(input: &str) -> RawParts {
    let (rest, fragment) = prune_fragment(input);
    let (path, query) = prune_query(rest);
    RawParts {
        path: non_empty(path),
        query: query.and_then(non_empty),
        fragment: fragment.and_then(non_empty),
        ..RawParts::default()
    }
}

/// Recognize a leading `scheme://`, returning the scheme and the rest.
/// A colon without slashes is left for authority parsing (`host:port`).
fn find_scheme(input: &str) -> Option<(&str, &str)> {
    let pos = input.find("://")?;
    let candidate = &input[..pos];
    is_scheme(candidate).then(|| (candidate, &input[pos + 3..]))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_full_url() {
        let parts =
            split_url("https://user:pw@sub.example.com:8443/a/b?x=1&y=2#frag?z").unwrap();
        assert_eq!(parts.scheme.as_deref(), Some("https"));
        assert_eq!(parts.user.as_deref(), Some("user"));
        assert_eq!(parts.pass.as_deref(), Some("pw"));
        assert_eq!(parts.host.as_deref(), Some("sub.example.com"));
        assert_eq!(parts.port.as_deref(), Some("8443"));
        assert_eq!(parts.path.as_deref(), Some("/a/b"));
        assert_eq!(parts.query.as_deref(), Some("x=1&y=2"));
        assert_eq!(parts.fragment.as_deref(), Some("frag?z"));
    }

    #[test]
    fn test_bare_path_skips_authority() {
        let parts = split_url("/one/two?x=1#f").unwrap();
        assert_eq!(parts.scheme, None);
        assert_eq!(parts.host, None);
        assert_eq!(parts.path.as_deref(), Some("/one/two"));
        assert_eq!(parts.query.as_deref(), Some("x=1"));
        assert_eq!(parts.fragment.as_deref(), Some("f"));
    }

    #[test]
    fn test_root_path() {
        let parts = split_url("/").unwrap();
        assert_eq!(parts.path.as_deref(), Some("/"));
        assert_eq!(parts.host, None);
    }

    #[test]
    fn test_schemeless_host() {
        let parts = split_url("example.COM").unwrap();
        assert_eq!(parts.scheme, None);
        assert_eq!(parts.host.as_deref(), Some("example.COM"));
        assert_eq!(parts.path, None);
    }

    #[test]
    fn test_protocol_relative() {
        let parts = split_url("//www.example.com/path").unwrap();
        assert_eq!(parts.scheme, None);
        assert_eq!(parts.host.as_deref(), Some("www.example.com"));
        assert_eq!(parts.path.as_deref(), Some("/path"));
    }

    #[test]
    fn test_host_with_port_no_scheme() {
        let parts = split_url("example.com:8080/path").unwrap();
        assert_eq!(parts.host.as_deref(), Some("example.com"));
        assert_eq!(parts.port.as_deref(), Some("8080"));
    }

    #[test]
    fn test_empty_authority_after_scheme() {
        assert_eq!(split_url("http:///example.com"), Err(ParseError::InvalidUrl));
        assert_eq!(split_url("http://"), Err(ParseError::InvalidUrl));
    }

    #[test]
    fn test_empty_and_double_slash_inputs() {
        assert_eq!(split_url(""), Err(ParseError::InvalidUrl));
        assert_eq!(split_url("   "), Err(ParseError::InvalidUrl));
        assert_eq!(split_url("//"), Err(ParseError::InvalidUrl));
    }

    #[test]
    fn test_bad_port() {
        assert_eq!(
            split_url("http://example.com:80a/"),
            Err(ParseError::InvalidUrl)
        );
        assert_eq!(
            split_url("http://example.com:99999/"),
            Err(ParseError::InvalidUrl)
        );
    }

    #[test]
    fn test_ipv6_host_keeps_colons() {
        let parts = split_url("http://[2001:db8::1]:8080/p").unwrap();
        assert_eq!(parts.host.as_deref(), Some("[2001:db8::1]"));
        assert_eq!(parts.port.as_deref(), Some("8080"));
    }

    #[test]
    fn test_fragment_pruned_before_query() {
        let parts = split_url("http://e.com/about?p=v#frag?p=v").unwrap();
        assert_eq!(parts.query.as_deref(), Some("p=v"));
        assert_eq!(parts.fragment.as_deref(), Some("frag?p=v"));
    }

    #[test]
    fn test_whitespace_trimmed() {
        let parts = split_url("  http://example.com/  ").unwrap();
        assert_eq!(parts.host.as_deref(), Some("example.com"));
    }
}
