//! Error types for the addrsense core.

use thiserror::Error;

/// A malformed configuration value.
///
/// The `Display` text names the offending field and is embedded verbatim in
/// the `"Invalid options: ..."` result description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// The options value is neither `null` nor an object.
    #[error("options must be an object")]
    NotAnObject,

    /// `network` is not an array, or holds a non-string.
    #[error("network must be an array of strings")]
    NetworkNotStrings,

    /// A top-level flag is present but not a boolean.
    #[error("{0} must be a boolean")]
    NotBoolean(&'static str),

    /// `nsDomains` is not an array.
    #[error("nsDomains must be an array")]
    NsDomainsNotArray,

    /// An `nsDomains` entry is an empty string or some other shape.
    #[error("nsDomains[{0}] must be a non-empty string or a domain configuration object")]
    NsDomainEntry(usize),

    /// A domain record has a missing or empty `domain`.
    #[error("nsDomains[{0}].domain must be a non-empty string")]
    DomainName(usize),

    /// A domain record has a non-boolean `emojiAllowed`.
    #[error("nsDomains[{0}].emojiAllowed must be a boolean")]
    DomainEmojiAllowed(usize),

    /// A length limit is zero, negative, fractional or not a number.
    #[error("nsDomains[{index}].{field} must be a positive integer")]
    DomainLength { index: usize, field: &'static str },

    /// The label limit is larger than the total limit.
    #[error("nsDomains[{0}].maxLabelLength must not exceed maxTotalLength")]
    LabelExceedsTotal(usize),
}

/// Checksum computation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecksumError {
    /// A character the checksum alphabet has no value for.
    #[error("invalid character {0:?} in checksummed body")]
    InvalidCharacter(char),

    /// The input is too short, or not the 40 hex digits EIP-55 needs.
    #[error("hex body must be {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Internal faults. These never reach callers of [`crate::validate`]; they are
/// folded into a `"Validation failed: ..."` result at the boundary.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// A registry pattern failed to compile.
    #[error("pattern registry unavailable: {0}")]
    Registry(String),

    /// A checksum routine rejected input a pattern had already accepted.
    #[error("checksum error: {0}")]
    Checksum(#[from] ChecksumError),
}
