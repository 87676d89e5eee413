//! The prioritized naming-rule table.
//!
//! Each rule is a data record (name, pattern) evaluated in declaration order,
//! most constrained first: a rule that requires an explicit volume/chapter
//! keyword always wins over a looser one, so a series title containing a year
//! or catalogue number can't shadow an explicitly-marked volume token. New
//! conventions are added by inserting a row at the right rank, not by
//! branching code.

use regex::Regex;
use std::sync::LazyLock;

pub(crate) struct Rule {
    pub(crate) name: &'static str,
    pub(crate) pattern: Regex,
}

pub(crate) static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    [
        // "Series Name v03", "Series Name Vol. 3", "Series_Volume 12.5"
        ("volume-keyword", r"(?i)^(?P<series>.+?)[\s._-]+(?:v|vol\.?|volume)[\s._]*(?P<number>\d+(?:\.\d+)?)\b"),
        // "Series Name - c012", "Series Name ch.12", "Series Name Chapter 4"
        ("chapter-keyword", r"(?i)^(?P<series>.+?)[\s._-]+(?:c|ch\.?|chap(?:ter)?\.?)[\s._]*(?P<number>\d+(?:\.\d+)?)\b"),
        // "Series Name #12"
        ("issue-number", r"^(?P<series>.+?)\s*#\s*(?P<number>\d+(?:\.\d+)?)\b"),
        // "Series Name - 012"
        ("dashed-number", r"^(?P<series>.+?)\s+-\s+(?P<number>\d+(?:\.\d+)?)\b"),
    ]
    .into_iter()
    .map(|(name, pattern)| Rule { name, pattern: Regex::new(pattern).unwrap() })
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_compile_and_capture() {
        for rule in RULES.iter() {
            assert!(rule.pattern.capture_names().flatten().any(|n| n == "series"), "{} lacks series", rule.name);
            assert!(rule.pattern.capture_names().flatten().any(|n| n == "number"), "{} lacks number", rule.name);
        }
    }

    #[test]
    fn test_keyword_rules_rank_above_bare_number_rules() {
        let rank = |name: &str| RULES.iter().position(|r| r.name == name).unwrap();
        assert!(rank("volume-keyword") < rank("dashed-number"));
        assert!(rank("chapter-keyword") < rank("dashed-number"));
    }
}
