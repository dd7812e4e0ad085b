//! Registry of built-in rules.
//!
//! This is the surface an embedding host uses to enumerate the rules this
//! crate ships, or to select one by its kebab-case name.

use crate::SortRequires;
use require_lint_core::RuleBox;

/// Returns every built-in rule with default settings.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![Box::new(SortRequires::new())]
}

/// Looks up a built-in rule by name.
#[must_use]
pub fn find_rule(name: &str) -> Option<RuleBox> {
    all_rules().into_iter().find(|rule| rule.name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn registry_is_not_empty() {
        assert!(!all_rules().is_empty());
    }

    #[test]
    fn rule_names_and_codes_are_unique() {
        let rules = all_rules();
        let names: HashSet<&str> = rules.iter().map(|r| r.name()).collect();
        let codes: HashSet<&str> = rules.iter().map(|r| r.code()).collect();
        assert_eq!(names.len(), rules.len());
        assert_eq!(codes.len(), rules.len());
    }

    #[test]
    fn find_rule_by_name() {
        let rule = find_rule("sort-requires").expect("rule should exist");
        assert_eq!(rule.code(), "RL001");
        assert!(find_rule("no-such-rule").is_none());
    }
}
