use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::error::{ParseError, Result};
use crate::unicode::idna::normalize_label;

/// Bundled snapshot of the Public Suffix List, trimmed to the rule
/// families the test suite and common lookups rely on.
const BUNDLED_RULES: &str = include_str!("../data/public_suffix_list.dat");

static SHARED: OnceLock<Arc<SuffixList>> = OnceLock::new();

/// How a rule claims labels, per the Public Suffix List format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleType {
    Plain,
    /// `*.` prefix: claims one extra label beyond the listed ones
    Wildcard,
    /// `!` prefix: cancels a wildcard claim, leaving one label registrable
    Exception,
}

/// A single suffix rule. Labels are stored right-to-left (rightmost label
/// first) and IDNA-ASCII normalized, so matching is a right-anchored
/// prefix comparison against reversed host labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    labels: Vec<String>,
    rule_type: RuleType,
}

impl Rule {
    /// Parse one non-comment line of the list.
    /// Returns None for lines that do not form a usable rule.
    fn parse(line: &str) -> Option<Self> {
        let (rule_type, rest) = if let Some(rest) = line.strip_prefix("*.") {
            (RuleType::Wildcard, rest)
        } else if let Some(rest) = line.strip_prefix('!') {
            (RuleType::Exception, rest)
        } else {
            (RuleType::Plain, line)
        };

        if rest.is_empty() {
            return None;
        }

        let mut labels = Vec::new();
        for label in rest.rsplit('.') {
            labels.push(normalize_label(label)?);
        }

        // An exception must leave at least one label as the suffix
        if rule_type == RuleType::Exception && labels.len() < 2 {
            return None;
        }

        Some(Self { labels, rule_type })
    }

    pub fn rule_type(&self) -> RuleType {
        self.rule_type
    }

    /// Labels in reversed (rightmost-first) order, normalized.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of host labels claimed as public suffix when this rule wins.
    pub(crate) fn claim_len(&self) -> usize {
        match self.rule_type {
            RuleType::Plain => self.labels.len(),
            RuleType::Wildcard => self.labels.len() + 1,
            RuleType::Exception => self.labels.len() - 1,
        }
    }

    /// Whether the reversed, normalized host labels fall under this rule.
    pub(crate) fn matches(&self, reversed_host: &[String]) -> bool {
        let required = match self.rule_type {
            // The star must consume a concrete label
            RuleType::Wildcard => self.labels.len() + 1,
            RuleType::Plain | RuleType::Exception => self.labels.len(),
        };
        reversed_host.len() >= required
            && reversed_host[..self.labels.len()] == self.labels[..]
    }
}

/// An immutable index of public suffix rules, keyed by rightmost label.
///
/// Built once from list text and read-only thereafter; wrap it in an
/// [`Arc`] (or use [`SuffixList::shared`]) to share it across threads.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SuffixList {
    rules: HashMap<String, Vec<Rule>>,
}

impl SuffixList {
    /// Build a suffix list from Public Suffix List text.
    ///
    /// Comment (`//`) and blank lines are skipped, as are individually
    /// malformed rules. Fails with [`ParseError::EmptySuffixList`] only
    /// when no usable rule remains.
    pub fn parse(source: &str) -> Result<Self> {
        let mut rules: HashMap<String, Vec<Rule>> = HashMap::new();
        let mut count = 0usize;

        for line in source.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with("//") {
                continue;
            }
            // The list format scopes each rule to the first whitespace
            let line = line.split_whitespace().next().unwrap_or_default();
            let Some(rule) = Rule::parse(line) else {
                continue;
            };
            rules.entry(rule.labels[0].clone()).or_default().push(rule);
            count += 1;
        }

        if count == 0 {
            return Err(ParseError::EmptySuffixList);
        }
        Ok(Self { rules })
    }

    /// Build from the bundled snapshot.
    pub fn bundled() -> Result<Self> {
        Self::parse(BUNDLED_RULES)
    }

    /// Process-wide shared list built once from the bundled snapshot.
    pub fn shared() -> Arc<Self> {
        SHARED
            .get_or_init(|| Arc::new(Self::bundled().unwrap_or_default()))
            .clone()
    }

    /// All rules whose rightmost normalized label is `tld`.
    pub(crate) fn rules_for(&self, tld: &str) -> &[Rule] {
        self.rules.get(tld).map_or(&[], Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of indexed rules.
    pub fn len(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_classification() {
        let plain = Rule::parse("kyoto.jp").unwrap();
        assert_eq!(plain.rule_type(), RuleType::Plain);
        assert_eq!(plain.labels(), ["jp", "kyoto"]);

        let wildcard = Rule::parse("*.kawasaki.jp").unwrap();
        assert_eq!(wildcard.rule_type(), RuleType::Wildcard);
        assert_eq!(wildcard.labels(), ["jp", "kawasaki"]);

        let exception = Rule::parse("!city.kawasaki.jp").unwrap();
        assert_eq!(exception.rule_type(), RuleType::Exception);
        assert_eq!(exception.labels(), ["jp", "kawasaki", "city"]);
    }

    #[test]
    fn test_rule_claim_len() {
        assert_eq!(Rule::parse("com").unwrap().claim_len(), 1);
        assert_eq!(Rule::parse("*.ck").unwrap().claim_len(), 2);
        assert_eq!(Rule::parse("!www.ck").unwrap().claim_len(), 1);
    }

    #[test]
    fn test_malformed_rules_skipped() {
        assert!(Rule::parse("").is_none());
        assert!(Rule::parse("*.").is_none());
        assert!(Rule::parse("!").is_none());
        assert!(Rule::parse("a..b").is_none());
        assert!(Rule::parse("!com").is_none()); // nothing left registrable
    }

    #[test]
    fn test_unicode_rule_normalized() {
        let rule = Rule::parse("中国").unwrap();
        assert_eq!(rule.labels(), ["xn--fiqs8s"]);
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let list = SuffixList::parse("// a comment\n\ncom\n  \nco.uk\n").unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.rules_for("com").len(), 1);
        assert_eq!(list.rules_for("uk").len(), 1);
        assert!(list.rules_for("jp").is_empty());
    }

    #[test]
    fn test_parse_requires_at_least_one_rule() {
        assert_eq!(
            SuffixList::parse("// only comments\n\n"),
            Err(ParseError::EmptySuffixList)
        );
        assert_eq!(SuffixList::parse(""), Err(ParseError::EmptySuffixList));
    }

    #[test]
    fn test_bundled_snapshot_loads() {
        let list = SuffixList::bundled().unwrap();
        assert!(!list.is_empty());
        assert!(!list.rules_for("com").is_empty());
        assert!(!list.rules_for("jp").is_empty());
    }
}
