//! URL manipulation with Public Suffix List aware domain parsing.
//!
//! A [`Url`] is built from a raw string and parsed lazily on first access.
//! Its host is decomposed into public suffix, registrable domain and
//! subdomain against an immutable [`SuffixList`], either the bundled
//! snapshot or one supplied by the caller.

// Internal modules (not public API)
mod checkers;
mod domain;
mod error;
mod helpers;
mod parser;
mod path;
mod query;
mod suffix_list;
mod unicode;
mod url;
mod url_parts;

// Public API
pub use domain::{DomainParts, split_domain};
pub use error::ParseError;
pub use parser::Parser;
pub use path::Path;
pub use query::Query;
pub use suffix_list::{Rule, RuleType, SuffixList};
pub use url::Url;
pub use url_parts::{Field, Parts};

pub type Result<T> = core::result::Result<T, ParseError>;
