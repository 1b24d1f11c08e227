//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid configuration, undersized palettes, unrecognized option strings, and generic errors.
//! Normal generation never produces an error; these surface only while building or parsing
//! configuration.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("palette too small: {needed} roles need distinct colors but only {available} available")]
    PaletteTooSmall { needed: usize, available: usize },

    #[error("unknown {option} '{value}'")]
    UnknownOption { option: &'static str, value: String },

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_string_uses_other_variant() {
        let err: Error = String::from("boom").into();
        matches!(err, Error::Other(_))
            .then_some(())
            .expect("expected Other variant");
    }

    #[test]
    fn from_str_allocates_owned_message() {
        let err: Error = "issue".into();
        assert!(matches!(err, Error::Other(ref msg) if msg == "issue"));
    }

    #[test]
    fn palette_error_mentions_both_counts() {
        let err = Error::PaletteTooSmall {
            needed: 11,
            available: 8,
        };
        let msg = err.to_string();
        assert!(msg.contains("11"));
        assert!(msg.contains('8'));
    }
}
