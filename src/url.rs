use crate::error::Result;
use crate::parser::Parser;
use crate::path::Path;
use crate::query::Query;
use crate::url_parts::{Field, Parts};

/// A lazily parsed, mutable URL.
///
/// Construction from a string never parses; the first accessor or
/// mutator materializes the part map from the raw string, and the entity
/// stays materialized until [`Url::set_raw`] replaces the raw string and
/// discards every part. Accessors are therefore `&mut self` and
/// fallible: a parse error surfaces on first access, not at
/// construction.
///
/// A `Url` is not safe for unsynchronized concurrent mutation, but
/// independent instances share nothing mutable (the suffix list behind
/// the parser is read-only).
#[derive(Debug, Clone)]
pub struct Url {
    raw: Option<String>,
    parts: Parts,
    parser: Parser,
    materialized: bool,
}

impl Url {
    /// Create an unmaterialized URL over the bundled suffix list.
    pub fn new(raw: impl Into<String>) -> Self {
        Self::with_parser(raw, Parser::default())
    }

    /// Static convenience constructor mirroring [`Url::new`].
    pub fn parse(raw: impl Into<String>) -> Self {
        Self::new(raw)
    }

    /// Create an unmaterialized URL with an explicit parser.
    pub fn with_parser(raw: impl Into<String>, parser: Parser) -> Self {
        Self {
            raw: Some(raw.into()),
            parts: Parts::default(),
            parser,
            materialized: false,
        }
    }

    /// Build a URL directly from a part map; no raw string, already
    /// materialized.
    pub fn from_parts(parts: Parts) -> Self {
        Self {
            raw: None,
            parts,
            parser: Parser::default(),
            materialized: true,
        }
    }

    /// The raw source string, if the parts were not constructed directly.
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    pub fn is_materialized(&self) -> bool {
        self.materialized
    }

    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    /// Parse the raw string into the part map. Idempotent; every
    /// accessor and mutator calls this first.
    pub fn materialize(&mut self) -> Result<()> {
        if self.materialized {
            return Ok(());
        }
        if let Some(raw) = &self.raw {
            let parsed = self.parser.parse_url(raw)?;
            self.parts.merge(parsed);
        }
        self.materialized = true;
        Ok(())
    }

    /// Replace the raw source string, discard all parts, and return to
    /// the unmaterialized state.
    pub fn set_raw(&mut self, raw: impl Into<String>) {
        self.raw = Some(raw.into());
        self.parts = Parts::default();
        self.materialized = false;
    }

    /// Render a field as a string, if present.
    pub fn get(&mut self, field: Field) -> Result<Option<String>> {
        self.materialize()?;
        Ok(self.parts.get(field))
    }

    /// Overwrite one field, returning the entity for chaining.
    ///
    /// Derived fields are not recomputed: setting `host` leaves
    /// `public_suffix`, `registrable_domain`, `subdomain`, `canonical`
    /// and `resource` at their last parsed values until the next full
    /// parse (via [`Url::set_raw`]). This staleness is intentional.
    pub fn set(&mut self, field: Field, value: &str) -> Result<&mut Self> {
        self.materialize()?;
        self.parts.set(field, value);
        Ok(self)
    }

    /// Merge another URL string over this one: the argument is parsed
    /// with this URL's parser and every field it defines overwrites the
    /// current value. This is an overwrite-merge, not RFC 3986 relative
    /// reference resolution.
    pub fn join(&mut self, other: &str) -> Result<&mut Self> {
        self.materialize()?;
        let parsed = self.parser.parse_url(other)?;
        self.parts.merge(parsed);
        Ok(self)
    }

    /// Merge another URL entity over this one, same rules as
    /// [`Url::join`].
    pub fn join_url(&mut self, other: &mut Url) -> Result<&mut Self> {
        self.materialize()?;
        other.materialize()?;
        self.parts.merge(other.parts.clone());
        Ok(self)
    }

    /// Direct access to the materialized part map.
    pub fn parts(&mut self) -> Result<&Parts> {
        self.materialize()?;
        Ok(&self.parts)
    }

    pub fn scheme(&mut self) -> Result<Option<&str>> {
        self.materialize()?;
        Ok(self.parts.scheme.as_deref())
    }

    pub fn host(&mut self) -> Result<Option<&str>> {
        self.materialize()?;
        Ok(self.parts.host.as_deref())
    }

    pub fn port(&mut self) -> Result<Option<&str>> {
        self.materialize()?;
        Ok(self.parts.port.as_deref())
    }

    pub fn user(&mut self) -> Result<Option<&str>> {
        self.materialize()?;
        Ok(self.parts.user.as_deref())
    }

    pub fn pass(&mut self) -> Result<Option<&str>> {
        self.materialize()?;
        Ok(self.parts.pass.as_deref())
    }

    pub fn path(&mut self) -> Result<Option<&Path>> {
        self.materialize()?;
        Ok(self.parts.path.as_ref())
    }

    /// The path value object, created empty on demand.
    pub fn path_mut(&mut self) -> Result<&mut Path> {
        self.materialize()?;
        Ok(self.parts.path.get_or_insert_with(Path::new))
    }

    pub fn query(&mut self) -> Result<Option<&Query>> {
        self.materialize()?;
        Ok(self.parts.query.as_ref())
    }

    /// The query value object, created empty on demand.
    pub fn query_mut(&mut self) -> Result<&mut Query> {
        self.materialize()?;
        Ok(self.parts.query.get_or_insert_with(Query::new))
    }

    pub fn fragment(&mut self) -> Result<Option<&str>> {
        self.materialize()?;
        Ok(self.parts.fragment.as_deref())
    }

    pub fn public_suffix(&mut self) -> Result<Option<&str>> {
        self.materialize()?;
        Ok(self.parts.public_suffix.as_deref())
    }

    pub fn registrable_domain(&mut self) -> Result<Option<&str>> {
        self.materialize()?;
        Ok(self.parts.registrable_domain.as_deref())
    }

    pub fn subdomain(&mut self) -> Result<Option<&str>> {
        self.materialize()?;
        Ok(self.parts.subdomain.as_deref())
    }

    pub fn canonical(&mut self) -> Result<Option<&str>> {
        self.materialize()?;
        Ok(self.parts.canonical.as_deref())
    }

    pub fn resource(&mut self) -> Result<Option<&str>> {
        self.materialize()?;
        Ok(self.parts.resource.as_deref())
    }

    /// Whether both scheme and host are present.
    pub fn is_absolute(&mut self) -> Result<bool> {
        self.materialize()?;
        Ok(self.parts.scheme.is_some() && self.parts.host.is_some())
    }

    /// The `user[:pass]@host[:port]` portion as a string.
    pub fn netloc(&mut self) -> Result<String> {
        self.materialize()?;
        let mut out = String::new();
        if let Some(user) = &self.parts.user {
            out.push_str(user);
            if let Some(pass) = &self.parts.pass {
                out.push(':');
                out.push_str(pass);
            }
            out.push('@');
        }
        if let Some(host) = &self.parts.host {
            out.push_str(host);
        }
        if let Some(port) = &self.parts.port {
            out.push(':');
            out.push_str(port);
        }
        Ok(out)
    }

    /// Serialize the part map back into a URL string.
    ///
    /// Absolute URLs render as
    /// `scheme://[user[:pass]@]host[:port]/path[?query][#fragment]`;
    /// everything else renders the relative form
    /// `/path[?query][#fragment]`, with the path's leading slash
    /// normalized to exactly one. Absent pieces emit no separators.
    pub fn to_url_string(&mut self) -> Result<String> {
        self.materialize()?;
        let relative = render_relative(&self.parts);

        let (Some(scheme), Some(host)) = (&self.parts.scheme, &self.parts.host) else {
            return Ok(relative);
        };

        let mut out = String::with_capacity(scheme.len() + host.len() + relative.len() + 8);
        out.push_str(scheme);
        out.push_str("://");
        if let Some(user) = &self.parts.user {
            out.push_str(user);
            if let Some(pass) = &self.parts.pass {
                out.push(':');
                out.push_str(pass);
            }
            out.push('@');
        }
        out.push_str(host);
        if let Some(port) = &self.parts.port {
            out.push(':');
            out.push_str(port);
        }
        out.push_str(&relative);
        Ok(out)
    }
}

/// `/path[?query][#fragment]`, always with exactly one leading slash.
fn render_relative(parts: &Parts) -> String {
    let path = parts
        .path
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();

    let mut out = String::with_capacity(path.len() + 1);
    out.push('/');
    out.push_str(path.trim_start_matches('/'));
    if let Some(query) = &parts.query {
        if !query.is_empty() {
            out.push('?');
            out.push_str(&query.to_string());
        }
    }
    if let Some(fragment) = &parts.fragment {
        if !fragment.is_empty() {
            out.push('#');
            out.push_str(fragment);
        }
    }
    out
}

impl From<&str> for Url {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Url {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}
