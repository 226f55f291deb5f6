use crate::suffix_list::{RuleType, SuffixList};
use crate::unicode::idna::normalize_label;

/// Domain components derived from a hostname by public suffix matching.
/// All fields are absent for single-label hosts (e.g. `localhost`);
/// `registrable_domain` and `subdomain` are additionally absent when the
/// host has no labels left of the matched suffix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainParts {
    pub public_suffix: Option<String>,
    pub registrable_domain: Option<String>,
    pub subdomain: Option<String>,
}

/// Split a hostname at its public suffix boundary.
///
/// The host must already be lowercased the same way the rule source was;
/// labels are compared in IDNA-ASCII form, while the output keeps the
/// host's own label spelling (a Unicode host stays Unicode even when it
/// matched a Punycode-normalized rule, and vice versa).
///
/// Matching walks the host's reversed labels against the rule index:
/// the longest Plain or Wildcard claim wins, an Exception rule overrides
/// any Wildcard claim it nests under, and a host matching no rule at all
/// falls back to the implicit `*` rule (last label is the suffix).
pub fn split_domain(list: &SuffixList, host: &str) -> DomainParts {
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return DomainParts::default();
    }

    let reversed: Vec<String> = labels
        .iter()
        .rev()
        .map(|label| {
            // Unmatchable labels still participate positionally
            normalize_label(label).unwrap_or_else(|| label.to_ascii_lowercase())
        })
        .collect();

    // Implicit "*" default for unlisted TLDs
    let mut best_claim = 1;
    let mut exception_claim = None;

    for rule in list.rules_for(&reversed[0]) {
        if !rule.matches(&reversed) {
            continue;
        }
        match rule.rule_type() {
            RuleType::Exception => {
                exception_claim = Some(rule.claim_len());
            }
            RuleType::Plain | RuleType::Wildcard => {
                best_claim = best_claim.max(rule.claim_len());
            }
        }
    }

    let suffix_len = exception_claim.unwrap_or(best_claim);

    let join = |count: usize| labels[labels.len() - count..].join(".");

    let public_suffix = Some(join(suffix_len));
    let registrable_domain = (labels.len() > suffix_len).then(|| join(suffix_len + 1));
    let subdomain = (labels.len() > suffix_len + 1)
        .then(|| labels[..labels.len() - suffix_len - 1].join("."));

    DomainParts {
        public_suffix,
        registrable_domain,
        subdomain,
    }
}
