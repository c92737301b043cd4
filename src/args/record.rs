//! Parsed argument records and the kind mask used to query them.

use std::fmt;
use std::ops::BitOr;

use bitflags::bitflags;

/// The lexical kind of an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ArgKind {
    /// Bare token, no leading `-`.
    Parameter = 1,
    /// Single character after one `-`.
    Flag = 2,
    /// Word after `--`.
    Option = 4,
}

bitflags! {
    /// A set of [`ArgKind`]s, combined with `|`.
    ///
    /// `ArgKind::Flag | ArgKind::Option` matches either switch form.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KindMask: u8 {
        const PARAMETER = ArgKind::Parameter as u8;
        const FLAG = ArgKind::Flag as u8;
        const OPTION = ArgKind::Option as u8;
    }
}

impl KindMask {
    /// Flags and options.
    pub const SWITCH: KindMask = KindMask::FLAG.union(KindMask::OPTION);
    /// Every kind.
    pub const ALL: KindMask = KindMask::PARAMETER.union(KindMask::SWITCH);

    pub fn includes(self, kind: ArgKind) -> bool {
        self.intersects(kind.into())
    }
}

impl From<ArgKind> for KindMask {
    fn from(kind: ArgKind) -> Self {
        Self::from_bits_retain(kind as u8)
    }
}

impl BitOr for ArgKind {
    type Output = KindMask;

    fn bitor(self, rhs: ArgKind) -> KindMask {
        KindMask::from(self) | KindMask::from(rhs)
    }
}

/// One classified command-line argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArgRecord {
    /// Positional value; its name is the whole token.
    Parameter(String),
    /// `-x`, possibly with a captured value.
    Flag { name: String, value: Option<String> },
    /// `--name`, possibly with a captured value.
    Option { name: String, value: Option<String> },
}

impl ArgRecord {
    pub fn parameter(name: impl Into<String>) -> Self {
        Self::Parameter(name.into())
    }

    pub fn flag(name: char, value: Option<String>) -> Self {
        Self::Flag {
            name: name.to_string(),
            value,
        }
    }

    pub fn option(name: impl Into<String>, value: Option<String>) -> Self {
        Self::Option {
            name: name.into(),
            value,
        }
    }

    pub fn kind(&self) -> ArgKind {
        match self {
            Self::Parameter(_) => ArgKind::Parameter,
            Self::Flag { .. } => ArgKind::Flag,
            Self::Option { .. } => ArgKind::Option,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Parameter(name) | Self::Flag { name, .. } | Self::Option { name, .. } => name,
        }
    }

    /// Captured value. Always `None` for parameters.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Parameter(_) => None,
            Self::Flag { value, .. } | Self::Option { value, .. } => value.as_deref(),
        }
    }
}

impl fmt::Display for ArgRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (prefix, name, value) = match self {
            Self::Parameter(name) => return f.write_str(name),
            Self::Flag { name, value } => ("-", name, value),
            Self::Option { name, value } => ("--", name, value),
        };
        write!(f, "{prefix}{name}")?;
        if let Some(value) = value {
            write!(f, "={value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_combines_kinds() {
        let mask = ArgKind::Flag | ArgKind::Option;
        assert_eq!(mask, KindMask::SWITCH);
        assert!(mask.includes(ArgKind::Flag));
        assert!(mask.includes(ArgKind::Option));
        assert!(!mask.includes(ArgKind::Parameter));
        assert_eq!(mask | KindMask::PARAMETER, KindMask::ALL);
        assert!(!KindMask::empty().includes(ArgKind::Parameter));
    }

    #[test]
    fn mask_rejects_unknown_bits() {
        assert_eq!(KindMask::from_bits(7), Some(KindMask::ALL));
        assert_eq!(KindMask::from_bits(8), None);
        assert!(KindMask::from_bits(0).is_some_and(|m| m.is_empty()));
        assert_eq!(KindMask::ALL.bits(), 7);
    }

    #[test]
    fn parameter_has_no_value() {
        let record = ArgRecord::parameter("Button");
        assert_eq!(record.kind(), ArgKind::Parameter);
        assert_eq!(record.name(), "Button");
        assert_eq!(record.value(), None);
    }

    #[test]
    fn empty_capture_differs_from_none() {
        let empty = ArgRecord::option("out", Some(String::new()));
        let absent = ArgRecord::option("out", None);
        assert_eq!(empty.value(), Some(""));
        assert_eq!(absent.value(), None);
        assert_ne!(empty, absent);
    }

    #[test]
    fn display_renders_command_line_form() {
        assert_eq!(ArgRecord::flag('o', Some("a.xml".into())).to_string(), "-o=a.xml");
        assert_eq!(ArgRecord::option("quiet", None).to_string(), "--quiet");
        assert_eq!(ArgRecord::parameter("Button").to_string(), "Button");
    }
}
