mod split;

use std::fmt::Write;
use std::sync::Arc;

use crate::checkers::is_ipv4;
use crate::domain::split_domain;
use crate::error::Result;
use crate::path::Path;
use crate::query::Query;
use crate::suffix_list::SuffixList;
use crate::url_parts::Parts;

/// Parses raw URL strings into a [`Parts`] map, deriving public-suffix
/// fields from an immutable rule set.
///
/// The rule set is injected, not ambient: every parser call reads the
/// same shared, read-only [`SuffixList`] it was constructed with.
#[derive(Debug, Clone)]
pub struct Parser {
    rules: Arc<SuffixList>,
}

impl Default for Parser {
    /// A parser over the bundled suffix list snapshot.
    fn default() -> Self {
        Self {
            rules: SuffixList::shared(),
        }
    }
}

impl Parser {
    pub fn new(rules: Arc<SuffixList>) -> Self {
        Self { rules }
    }

    pub fn suffix_list(&self) -> &SuffixList {
        &self.rules
    }

    /// Parse a URL string into a full part map.
    ///
    /// Inputs matching the absolute-path rule are split as a bare path
    /// with no host and no suffix lookup. For anything else the host is
    /// lowercased and decomposed against the rule set, and `canonical`
    /// (reversed-label host + path + `?query`, fragment excluded) and
    /// `resource` (path + `?query`) are computed.
    pub fn parse_url(&self, url: &str) -> Result<Parts> {
        let raw = split::split_url(url)?;

        let mut parts = Parts {
            scheme: raw.scheme.map(|s| s.to_ascii_lowercase()),
            port: raw.port,
            user: raw.user,
            pass: raw.pass,
            path: raw.path.map(Path::from),
            query: raw.query.map(Query::from),
            fragment: raw.fragment,
            ..Parts::default()
        };

        if let Some(host) = raw.host {
            let host = host.to_lowercase();

            // Numeric and bracketed hosts have no registrable boundary
            if !host.starts_with('[') && !is_ipv4(&host) {
                let domain = split_domain(&self.rules, &host);
                parts.public_suffix = domain.public_suffix;
                parts.registrable_domain = domain.registrable_domain;
                parts.subdomain = domain.subdomain;
            }

            let resource = render_resource(&parts);
            let mut canonical = String::with_capacity(host.len() + resource.len());
            for (i, label) in host.split('.').rev().enumerate() {
                if i > 0 {
                    canonical.push('.');
                }
                canonical.push_str(label);
            }
            let _ = write!(canonical, "{resource}");

            parts.canonical = Some(canonical);
            parts.resource = Some(resource);
            parts.host = Some(host);
        }

        Ok(parts)
    }
}

/// Path plus `?query`, both empty-tolerant. Fragment never participates.
fn render_resource(parts: &Parts) -> String {
    let mut out = parts
        .path
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();
    if let Some(query) = &parts.query {
        if !query.is_empty() {
            let _ = write!(out, "?{query}");
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    #[test]
    fn test_parse_full_url() {
        let parts = Parser::default()
            .parse_url("https://www.example.co.uk/a/b?x=1#f")
            .unwrap();
        assert_eq!(parts.scheme.as_deref(), Some("https"));
        assert_eq!(parts.host.as_deref(), Some("www.example.co.uk"));
        assert_eq!(parts.public_suffix.as_deref(), Some("co.uk"));
        assert_eq!(parts.registrable_domain.as_deref(), Some("example.co.uk"));
        assert_eq!(parts.subdomain.as_deref(), Some("www"));
        assert_eq!(
            parts.canonical.as_deref(),
            Some("uk.co.example.www/a/b?x=1")
        );
        assert_eq!(parts.resource.as_deref(), Some("/a/b?x=1"));
    }

    #[test]
    fn test_host_is_lowercased() {
        let parts = Parser::default().parse_url("HTTP://Example.COM/").unwrap();
        assert_eq!(parts.scheme.as_deref(), Some("http"));
        assert_eq!(parts.host.as_deref(), Some("example.com"));
        assert_eq!(parts.registrable_domain.as_deref(), Some("example.com"));
    }

    #[test]
    fn test_bare_path_has_no_derived_fields() {
        let parts = Parser::default().parse_url("/one/two").unwrap();
        assert_eq!(parts.host, None);
        assert_eq!(parts.public_suffix, None);
        assert_eq!(parts.canonical, None);
        assert_eq!(parts.resource, None);
        assert_eq!(parts.get(crate::Field::Path), Some("/one/two".to_string()));
    }

    #[test]
    fn test_host_without_path_has_empty_resource() {
        let parts = Parser::default().parse_url("http://localhost").unwrap();
        assert_eq!(parts.host.as_deref(), Some("localhost"));
        assert_eq!(parts.public_suffix, None);
        assert_eq!(parts.registrable_domain, None);
        assert_eq!(parts.subdomain, None);
        assert_eq!(parts.canonical.as_deref(), Some("localhost"));
        assert_eq!(parts.resource.as_deref(), Some(""));
    }

    #[test]
    fn test_ipv4_host_skips_suffix_lookup() {
        let parts = Parser::default().parse_url("http://192.168.1.1/x").unwrap();
        assert_eq!(parts.host.as_deref(), Some("192.168.1.1"));
        assert_eq!(parts.public_suffix, None);
        assert_eq!(parts.registrable_domain, None);
        assert_eq!(parts.canonical.as_deref(), Some("1.1.168.192/x"));
    }

    #[test]
    fn test_invalid_url() {
        assert_eq!(
            Parser::default().parse_url("http:///example.com"),
            Err(ParseError::InvalidUrl)
        );
    }
}
