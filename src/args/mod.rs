//! Command-line argument engine.
//!
//! ```text
//! raw tokens → classify → ArgRecord* → ArgSet (read-only queries)
//! ```
//!
//! Classification is purely lexical. There is no declared grammar: callers
//! only say which switches take the following token as a value, then ask the
//! [`ArgSet`] what was given.

mod classifier;
mod name;
mod record;
mod set;

pub use classifier::parse;
pub use name::{any_matches, ArgName, NameComparison};
pub use record::{ArgKind, ArgRecord, KindMask};
pub use set::{ArgQuery, ArgSet};
