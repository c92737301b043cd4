//! Argument classifier: raw tokens → argument records.

use std::iter::Peekable;

use crate::args::name::{any_matches, ArgName, NameComparison};
use crate::args::record::ArgRecord;

/// Classify raw command-line tokens.
///
/// `implicit_capture` lists flag characters and option words that take the
/// following token as their value when no `=value` is given inline and the
/// following token does not start with `-`.
pub fn parse<I, S>(tokens: I, implicit_capture: &[ArgName]) -> Vec<ArgRecord>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut records = Vec::new();
    let mut iter = tokens.into_iter().map(Into::into).peekable();

    while let Some(token) = iter.next() {
        if !token.starts_with('-') {
            records.push(ArgRecord::Parameter(token));
            continue;
        }
        let rest = &token[1..];

        let (text, inline) = match rest.split_once('=') {
            Some((text, capture)) => (text, Some(capture.to_string())),
            None => (rest, None),
        };

        if let Some(name) = text.strip_prefix('-') {
            let value = inline.or_else(|| take_capture(&mut iter, name, implicit_capture));
            records.push(ArgRecord::option(name, value));
            continue;
        }

        // Chained flags: every character but the last is a bare flag.
        let mut chars = text.chars();
        let Some(last) = chars.next_back() else {
            tracing::trace!(token = %token, "empty flag group ignored");
            continue;
        };
        records.extend(chars.map(|c| ArgRecord::flag(c, None)));

        let value = inline.or_else(|| take_capture(&mut iter, &last.to_string(), implicit_capture));
        records.push(ArgRecord::flag(last, value));
    }

    records
}

fn take_capture<I>(iter: &mut Peekable<I>, name: &str, implicit_capture: &[ArgName]) -> Option<String>
where
    I: Iterator<Item = String>,
{
    if !any_matches(implicit_capture, name, NameComparison::Ordinal) {
        return None;
    }
    iter.next_if(|next| !next.starts_with('-'))
}
