use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use crate::unicode::percent_encode::{decode_component, encode_component};

/// Query value type: an ordered list of key/value pairs.
/// Keys and values are stored decoded; serialization re-encodes them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a query string (with or without leading `?`).
    /// A pair without `=` becomes a key with an empty value.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((key, value)) => (decode_component(key), decode_component(value)),
                None => (decode_component(pair), String::new()),
            })
            .collect();
        Self { pairs }
    }

    /// Get the first value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Get all values for a key.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn append(&mut self, key: &str, value: &str) -> &mut Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Replace every pair with `key` by a single pair, or append it.
    pub fn set(&mut self, key: &str, value: &str) -> &mut Self {
        self.remove(key);
        self.append(key, value)
    }

    /// Remove all pairs with the given key.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.pairs.retain(|(k, _)| k != key);
        self
    }

    pub fn has(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}

impl From<&str> for Query {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for Query {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl FromStr for Query {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            f.write_str(&encode_component(key))?;
            f.write_str("=")?;
            f.write_str(&encode_component(value))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs() {
        let query = Query::parse("param=value&other=data");
        assert_eq!(query.get("param"), Some("value"));
        assert_eq!(query.get("other"), Some("data"));
        assert_eq!(query.len(), 2);
    }

    #[test]
    fn test_parse_leading_question_mark() {
        let query = Query::parse("?a=1");
        assert_eq!(query.get("a"), Some("1"));
    }

    #[test]
    fn test_pair_without_value() {
        let query = Query::parse("flag&key=value");
        assert_eq!(query.get("flag"), Some(""));
        assert_eq!(query.get("key"), Some("value"));
    }

    #[test]
    fn test_empty_pairs_ignored() {
        let query = Query::parse("&&a=1&&");
        assert_eq!(query.len(), 1);
    }

    #[test]
    fn test_decoding_and_reencoding() {
        let query = Query::parse("q=hello%20world&r=a+b");
        assert_eq!(query.get("q"), Some("hello world"));
        assert_eq!(query.get("r"), Some("a b"));
        assert_eq!(query.to_string(), "q=hello%20world&r=a%20b");
    }

    #[test]
    fn test_repeated_keys() {
        let query = Query::parse("k=1&k=2");
        assert_eq!(query.get("k"), Some("1"));
        assert_eq!(query.get_all("k"), ["1", "2"]);
    }

    #[test]
    fn test_set_and_remove() {
        let mut query = Query::parse("k=1&k=2&other=x");
        query.set("k", "3");
        assert_eq!(query.get_all("k"), ["3"]);
        query.remove("other");
        assert!(!query.has("other"));
        assert_eq!(query.to_string(), "k=3");
    }

    #[test]
    fn test_display_round_trip() {
        let query = Query::parse("param=value");
        assert_eq!(query.to_string(), "param=value");
        assert!(Query::parse("").is_empty());
        assert_eq!(Query::parse("").to_string(), "");
    }
}
