//! Name patterns for type, namespace and module selection.
//!
//! A value starting with `regex:` (any ASCII case) is a regular expression;
//! anything else is a literal name.

use regex::Regex;

use crate::args::NameComparison;

const REGEX_PREFIX: &str = "regex:";

/// A literal name or a regular expression.
#[derive(Debug, Clone)]
pub enum Pattern {
    Exact(String),
    Regex(Regex),
}

impl Pattern {
    pub fn parse(text: &str) -> Result<Self, regex::Error> {
        match strip_regex_prefix(text) {
            Some(expr) => Ok(Self::Regex(Regex::new(expr)?)),
            None => Ok(Self::Exact(text.to_string())),
        }
    }

    pub fn is_match(&self, candidate: &str, comparison: NameComparison) -> bool {
        match self {
            Self::Exact(name) => comparison.equals(candidate, name),
            Self::Regex(re) => re.is_match(candidate),
        }
    }
}

/// The expression after a `regex:` prefix, if there is one.
pub fn strip_regex_prefix(text: &str) -> Option<&str> {
    let prefix = text.get(..REGEX_PREFIX.len())?;
    prefix
        .eq_ignore_ascii_case(REGEX_PREFIX)
        .then(|| &text[REGEX_PREFIX.len()..])
}

/// A namespace selector. A trailing `+` also selects nested namespaces.
#[derive(Debug, Clone)]
pub struct NamespacePattern {
    pattern: Pattern,
    recursive: bool,
}

impl NamespacePattern {
    pub fn parse(text: &str) -> Result<Self, regex::Error> {
        let (text, recursive) = match text.strip_suffix('+') {
            Some(stripped) => (stripped, true),
            None => (text, false),
        };
        Ok(Self {
            pattern: Pattern::parse(text)?,
            recursive,
        })
    }

    pub fn is_recursive(&self) -> bool {
        self.recursive
    }

    pub fn is_match(&self, namespace: &str, comparison: NameComparison) -> bool {
        match &self.pattern {
            Pattern::Exact(name) if self.recursive => comparison.starts_with(namespace, name),
            pattern => pattern.is_match(namespace, comparison),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORD: NameComparison = NameComparison::Ordinal;
    const ICASE: NameComparison = NameComparison::IgnoreCase;

    #[test]
    fn regex_prefix_is_case_insensitive() {
        assert_eq!(strip_regex_prefix("regex:^A"), Some("^A"));
        assert_eq!(strip_regex_prefix("REGEX:^A"), Some("^A"));
        assert_eq!(strip_regex_prefix("regex"), None);
        assert_eq!(strip_regex_prefix("Button"), None);
        assert_eq!(strip_regex_prefix("ré"), None);
    }

    #[test]
    fn exact_pattern_uses_comparison() {
        let p = Pattern::parse("Button").unwrap();
        assert!(p.is_match("Button", ORD));
        assert!(!p.is_match("button", ORD));
        assert!(p.is_match("button", ICASE));
    }

    #[test]
    fn regex_pattern_matches_anywhere() {
        let p = Pattern::parse("regex:Box$").unwrap();
        assert!(p.is_match("ComboBox", ORD));
        assert!(!p.is_match("ComboBoxItem", ORD));
    }

    #[test]
    fn invalid_regex_is_an_error() {
        assert!(Pattern::parse("regex:(").is_err());
    }

    #[test]
    fn namespace_exact_and_recursive() {
        let exact = NamespacePattern::parse("System.Windows").unwrap();
        assert!(!exact.is_recursive());
        assert!(exact.is_match("System.Windows", ORD));
        assert!(!exact.is_match("System.Windows.Controls", ORD));

        let nested = NamespacePattern::parse("System.Windows+").unwrap();
        assert!(nested.is_recursive());
        assert!(nested.is_match("System.Windows", ORD));
        assert!(nested.is_match("System.Windows.Controls", ORD));
        assert!(!nested.is_match("system.windows.controls", ORD));
        assert!(nested.is_match("system.windows.controls", ICASE));
    }

    #[test]
    fn namespace_regex_strips_plus() {
        let p = NamespacePattern::parse("regex:Controls$+").unwrap();
        assert!(p.is_recursive());
        assert!(p.is_match("System.Windows.Controls", ORD));
        assert!(!p.is_match("System.Windows.Controls.Primitives", ORD));
    }
}
