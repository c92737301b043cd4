//! Query engine over the parsed command line.

use crate::args::classifier::parse;
use crate::args::name::{any_matches, ArgName, NameComparison};
use crate::args::record::{ArgRecord, KindMask};

/// The ordered, read-only records of one invocation.
///
/// Lookups never fail: a missing argument is `None` or an empty `Vec`.
/// Order is command-line order, so the first match of a lookup is the
/// leftmost one. Queries made directly on the set compare names ordinally;
/// [`ArgSet::compare_with`] picks the comparison for a query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgSet {
    records: Vec<ArgRecord>,
}

impl ArgSet {
    pub fn new(records: Vec<ArgRecord>) -> Self {
        Self { records }
    }

    /// Classify `tokens` and wrap the result.
    pub fn parse<I, S>(tokens: I, implicit_capture: &[ArgName]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(parse(tokens, implicit_capture))
    }

    /// Borrow the records for queries that compare names with `comparison`.
    pub fn compare_with(&self, comparison: NameComparison) -> ArgQuery<'_> {
        ArgQuery {
            records: &self.records,
            comparison,
        }
    }

    fn ordinal(&self) -> ArgQuery<'_> {
        self.compare_with(NameComparison::Ordinal)
    }

    pub fn records(&self) -> &[ArgRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The captured value of a flag or option, or a parameter's own name.
    pub fn value_of(record: &ArgRecord) -> Option<&str> {
        match record {
            ArgRecord::Parameter(name) => Some(name),
            ArgRecord::Flag { value, .. } | ArgRecord::Option { value, .. } => value.as_deref(),
        }
    }

    pub fn find_first(&self, mask: KindMask, names: &[ArgName]) -> Option<&ArgRecord> {
        self.ordinal().find_first(mask, names)
    }

    pub fn find_first_any(&self, names: &[ArgName]) -> Option<&ArgRecord> {
        self.ordinal().find_first_any(names)
    }

    pub fn find_all(&self, mask: KindMask, names: &[ArgName]) -> Vec<&ArgRecord> {
        self.ordinal().find_all(mask, names)
    }

    pub fn find_all_of_kind(&self, mask: KindMask) -> Vec<&ArgRecord> {
        self.ordinal().find_all_of_kind(mask)
    }

    pub fn find_all_named(&self, names: &[ArgName]) -> Vec<&ArgRecord> {
        self.ordinal().find_all_named(names)
    }

    pub fn first_value(&self, mask: KindMask, names: &[ArgName]) -> Option<&str> {
        self.ordinal().first_value(mask, names)
    }

    pub fn first_value_any(&self, names: &[ArgName]) -> Option<&str> {
        self.ordinal().first_value_any(names)
    }

    pub fn all_values(&self, mask: KindMask, names: &[ArgName]) -> Vec<&str> {
        self.ordinal().all_values(mask, names)
    }

    pub fn all_values_named(&self, names: &[ArgName]) -> Vec<&str> {
        self.ordinal().all_values_named(names)
    }

    pub fn all_values_where<P>(&self, mask: KindMask, predicate: P) -> Vec<&str>
    where
        P: FnMut(Option<&str>) -> bool,
    {
        self.ordinal().all_values_where(mask, predicate)
    }

    pub fn contains_any(&self, mask: KindMask, names: &[ArgName]) -> bool {
        self.ordinal().contains_any(mask, names)
    }

    pub fn contains_any_named(&self, names: &[ArgName]) -> bool {
        self.ordinal().contains_any_named(names)
    }

    pub fn contains_all(&self, mask: KindMask, names: &[ArgName]) -> bool {
        self.ordinal().contains_all(mask, names)
    }

    pub fn contains_all_named(&self, names: &[ArgName]) -> bool {
        self.ordinal().contains_all_named(names)
    }
}

/// Queries over borrowed records under one name comparison.
#[derive(Debug, Clone, Copy)]
pub struct ArgQuery<'a> {
    records: &'a [ArgRecord],
    comparison: NameComparison,
}

impl<'a> ArgQuery<'a> {
    fn is_match(&self, record: &ArgRecord, mask: KindMask, names: &[ArgName]) -> bool {
        mask.includes(record.kind()) && any_matches(names, record.name(), self.comparison)
    }

    fn of_kind(self, mask: KindMask) -> impl Iterator<Item = &'a ArgRecord> {
        self.records.iter().filter(move |r| mask.includes(r.kind()))
    }

    // --- lookup ---

    /// First record of a kind in `mask` whose name is one of `names`.
    pub fn find_first(self, mask: KindMask, names: &[ArgName]) -> Option<&'a ArgRecord> {
        self.records.iter().find(|r| self.is_match(r, mask, names))
    }

    /// First record of any kind whose name is one of `names`.
    pub fn find_first_any(self, names: &[ArgName]) -> Option<&'a ArgRecord> {
        self.find_first(KindMask::ALL, names)
    }

    pub fn find_all(self, mask: KindMask, names: &[ArgName]) -> Vec<&'a ArgRecord> {
        self.records
            .iter()
            .filter(|r| self.is_match(r, mask, names))
            .collect()
    }

    pub fn find_all_of_kind(self, mask: KindMask) -> Vec<&'a ArgRecord> {
        self.of_kind(mask).collect()
    }

    pub fn find_all_named(self, names: &[ArgName]) -> Vec<&'a ArgRecord> {
        self.find_all(KindMask::ALL, names)
    }

    // --- values ---

    pub fn first_value(self, mask: KindMask, names: &[ArgName]) -> Option<&'a str> {
        self.find_first(mask, names).and_then(ArgSet::value_of)
    }

    pub fn first_value_any(self, names: &[ArgName]) -> Option<&'a str> {
        self.first_value(KindMask::ALL, names)
    }

    /// Values of every match, in order. Matches without a value are skipped.
    pub fn all_values(self, mask: KindMask, names: &[ArgName]) -> Vec<&'a str> {
        self.find_all(mask, names)
            .into_iter()
            .filter_map(ArgSet::value_of)
            .collect()
    }

    pub fn all_values_named(self, names: &[ArgName]) -> Vec<&'a str> {
        self.all_values(KindMask::ALL, names)
    }

    /// Values of every record of a kind in `mask` that pass `predicate`.
    ///
    /// The predicate sees the extracted value before missing values are
    /// dropped, so it may reject or accept `None`; accepted `None`s are still
    /// left out of the result.
    pub fn all_values_where<P>(self, mask: KindMask, mut predicate: P) -> Vec<&'a str>
    where
        P: FnMut(Option<&str>) -> bool,
    {
        self.of_kind(mask)
            .map(ArgSet::value_of)
            .filter(|v| predicate(*v))
            .flatten()
            .collect()
    }

    // --- existence ---

    pub fn contains_any(self, mask: KindMask, names: &[ArgName]) -> bool {
        self.records.iter().any(|r| self.is_match(r, mask, names))
    }

    pub fn contains_any_named(self, names: &[ArgName]) -> bool {
        self.contains_any(KindMask::ALL, names)
    }

    /// True if every name in `names` is matched by some record of a kind in
    /// `mask`. Each record satisfies at most one pending name.
    pub fn contains_all(self, mask: KindMask, names: &[ArgName]) -> bool {
        let mut pending: Vec<&ArgName> = names.iter().collect();

        for record in self.of_kind(mask) {
            if pending.is_empty() {
                break;
            }
            if let Some(pos) = pending
                .iter()
                .position(|n| n.matches(record.name(), self.comparison))
            {
                pending.remove(pos);
            }
        }

        pending.is_empty()
    }

    pub fn contains_all_named(self, names: &[ArgName]) -> bool {
        self.contains_all(KindMask::ALL, names)
    }
}
