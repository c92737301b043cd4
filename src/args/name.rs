//! Argument names: explicit labels compared under a caller-chosen mode.

use std::fmt;

/// How two names are compared during a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameComparison {
    /// Exact, code point by code point.
    #[default]
    Ordinal,
    /// Case-insensitive (Unicode lowercase folding).
    IgnoreCase,
}

impl NameComparison {
    /// Pick the comparison for an "ignore case" switch.
    pub fn from_ignore_case(ignore_case: bool) -> Self {
        if ignore_case {
            Self::IgnoreCase
        } else {
            Self::Ordinal
        }
    }

    /// Compare two strings for equality.
    pub fn equals(self, a: &str, b: &str) -> bool {
        match self {
            Self::Ordinal => a == b,
            Self::IgnoreCase => folded(a).eq(folded(b)),
        }
    }

    /// Check whether `haystack` starts with `prefix`.
    pub fn starts_with(self, haystack: &str, prefix: &str) -> bool {
        match self {
            Self::Ordinal => haystack.starts_with(prefix),
            Self::IgnoreCase => {
                let mut hay = folded(haystack);
                folded(prefix).all(|c| hay.next() == Some(c))
            }
        }
    }
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

/// A label naming a flag (`'o'`), an option (`"output"`) or a parameter.
///
/// Built explicitly with `ArgName::from`, or in bulk with [`names!`](crate::names).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArgName(String);

impl ArgName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compare against a record name.
    pub fn matches(&self, name: &str, comparison: NameComparison) -> bool {
        comparison.equals(&self.0, name)
    }
}

impl From<char> for ArgName {
    fn from(c: char) -> Self {
        Self(c.to_string())
    }
}

impl From<&str> for ArgName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ArgName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ArgName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// True if any of `names` matches `name` under `comparison`.
pub fn any_matches(names: &[ArgName], name: &str, comparison: NameComparison) -> bool {
    names.iter().any(|n| n.matches(name, comparison))
}

/// Build a `[ArgName; N]` from mixed characters and strings.
///
/// ```
/// use template_exporter::names;
/// let out = names!['o', "out", "output"];
/// assert_eq!(out.len(), 3);
/// ```
#[macro_export]
macro_rules! names {
    ($($name:expr),* $(,)?) => {
        [$($crate::args::ArgName::from($name)),*]
    };
}
