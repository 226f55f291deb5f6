use crate::path::Path;
use crate::query::Query;

/// Field names for the tagged get/set access contract on [`Parts`]
/// and [`Url`](crate::Url).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Scheme,
    Host,
    Port,
    User,
    Pass,
    Path,
    Query,
    Fragment,
    PublicSuffix,
    RegistrableDomain,
    Subdomain,
    Canonical,
    Resource,
}

/// The URL part map: raw components plus fields derived from the host.
/// Every field defaults to absent.
///
/// The derived fields (`public_suffix` through `resource`) are a pure
/// function of `host`, `path` and `query` and are only filled in by a
/// full parse; mutating a raw field does not refresh them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parts {
    pub scheme: Option<String>,
    pub host: Option<String>,
    pub port: Option<String>,
    pub user: Option<String>,
    pub pass: Option<String>,
    pub path: Option<Path>,
    pub query: Option<Query>,
    pub fragment: Option<String>,
    pub public_suffix: Option<String>,
    pub registrable_domain: Option<String>,
    pub subdomain: Option<String>,
    pub canonical: Option<String>,
    pub resource: Option<String>,
}

impl Parts {
    /// Overwrite every field the other map defines; fields absent in
    /// `other` keep their current value.
    pub fn merge(&mut self, other: Parts) {
        macro_rules! take {
            ($($field:ident),*) => {
                $(if let Some(value) = other.$field {
                    self.$field = Some(value);
                })*
            };
        }
        take!(
            scheme,
            host,
            port,
            user,
            pass,
            path,
            query,
            fragment,
            public_suffix,
            registrable_domain,
            subdomain,
            canonical,
            resource
        );
    }

    /// Render a field as a string, if present.
    pub fn get(&self, field: Field) -> Option<String> {
        match field {
            Field::Scheme => self.scheme.clone(),
            Field::Host => self.host.clone(),
            Field::Port => self.port.clone(),
            Field::User => self.user.clone(),
            Field::Pass => self.pass.clone(),
            Field::Path => self.path.as_ref().map(ToString::to_string),
            Field::Query => self.query.as_ref().map(ToString::to_string),
            Field::Fragment => self.fragment.clone(),
            Field::PublicSuffix => self.public_suffix.clone(),
            Field::RegistrableDomain => self.registrable_domain.clone(),
            Field::Subdomain => self.subdomain.clone(),
            Field::Canonical => self.canonical.clone(),
            Field::Resource => self.resource.clone(),
        }
    }

    /// Set a field from a string, coercing `path` and `query` into
    /// their value types.
    pub fn set(&mut self, field: Field, value: &str) {
        match field {
            Field::Scheme => self.scheme = Some(value.to_string()),
            Field::Host => self.host = Some(value.to_string()),
            Field::Port => self.port = Some(value.to_string()),
            Field::User => self.user = Some(value.to_string()),
            Field::Pass => self.pass = Some(value.to_string()),
            Field::Path => self.path = Some(Path::from(value)),
            Field::Query => self.query = Some(Query::from(value)),
            Field::Fragment => self.fragment = Some(value.to_string()),
            Field::PublicSuffix => self.public_suffix = Some(value.to_string()),
            Field::RegistrableDomain => self.registrable_domain = Some(value.to_string()),
            Field::Subdomain => self.subdomain = Some(value.to_string()),
            Field::Canonical => self.canonical = Some(value.to_string()),
            Field::Resource => self.resource = Some(value.to_string()),
        }
    }
}
