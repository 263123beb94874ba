//! The uniform classification record and its constructors.

use serde::Serialize;

use crate::error::{EngineError, OptionsError};
use crate::types::{Metadata, Network};

pub const INVALID_INPUT: &str = "Invalid input";
pub const UNKNOWN_FORMAT: &str = "Unknown address format";
pub const TESTNET_NOT_ALLOWED: &str = "Testnet address not allowed";
pub const LEGACY_NOT_ALLOWED: &str = "Legacy address format not allowed";
pub const VALIDATION_FAILED: &str = "Validation failed";

/// The outcome of classifying one string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInfo {
    /// The network the string (structurally) belongs to.
    pub network: Option<Network>,
    /// Matched and passed every checksum and policy gate.
    pub is_valid: bool,
    /// Classification or failure reason.
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl NetworkInfo {
    /// A fully accepted address.
    pub fn valid(network: Network, description: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            network: Some(network),
            is_valid: true,
            description: description.into(),
            metadata: Some(metadata),
        }
    }

    /// A string that resembles `network` but failed a structural or
    /// checksum check.
    pub fn invalid(network: Network, description: impl Into<String>) -> Self {
        Self {
            network: Some(network),
            is_valid: false,
            description: description.into(),
            metadata: None,
        }
    }

    /// A string with no network attribution at all.
    pub fn unattributed(description: impl Into<String>) -> Self {
        Self {
            network: None,
            is_valid: false,
            description: description.into(),
            metadata: None,
        }
    }

    pub fn invalid_input() -> Self {
        Self::unattributed(INVALID_INPUT)
    }

    pub fn unknown() -> Self {
        Self::unattributed(UNKNOWN_FORMAT)
    }

    pub fn invalid_options(err: &OptionsError) -> Self {
        Self::unattributed(format!("Invalid options: {err}"))
    }

    pub fn internal_failure(err: &EngineError) -> Self {
        Self::unattributed(format!("{VALIDATION_FAILED}: {err}"))
    }

    /// Attach metadata (kept on invalid results to aid error messages).
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Demote an otherwise valid result to a policy rejection.
    pub fn rejected(mut self, reason: impl Into<String>) -> Self {
        self.is_valid = false;
        self.description = reason.into();
        self
    }

    pub fn is_unknown(&self) -> bool {
        self.network.is_none() && self.description == UNKNOWN_FORMAT
    }

    /// Whether this result stands in for an internal fault.
    pub fn is_internal_failure(&self) -> bool {
        self.network.is_none() && self.description.starts_with(VALIDATION_FAILED)
    }
}
