//! Crate error type.

use std::fmt;

use thiserror::Error;

/// Which lookup table a failed name lookup went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    PitchClass,
    Interval,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKind::PitchClass => write!(f, "pitch class"),
            NameKind::Interval => write!(f, "interval"),
        }
    }
}

/// Errors from name lookups and text decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown {kind} name '{name}'")]
    UnknownName { kind: NameKind, name: String },

    #[error("expected {expected}, got '{input}'")]
    InvalidValue {
        expected: &'static str,
        input: String,
    },
}

impl Error {
    pub(crate) fn unknown(kind: NameKind, name: impl Into<String>) -> Self {
        Error::UnknownName {
            kind,
            name: name.into(),
        }
    }

    pub(crate) fn invalid(expected: &'static str, input: impl Into<String>) -> Self {
        Error::InvalidValue {
            expected,
            input: input.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_table_and_input() {
        assert_eq!(
            Error::unknown(NameKind::Interval, "P9").to_string(),
            "unknown interval name 'P9'"
        );
        assert_eq!(
            Error::invalid("an integer", "sixty").to_string(),
            "expected an integer, got 'sixty'"
        );
        let boxed: Box<dyn std::error::Error> = Box::new(Error::unknown(NameKind::PitchClass, "H"));
        assert_eq!(boxed.to_string(), "unknown pitch class name 'H'");
    }
}
