//! # Addrsense Core
//!
//! Pure classification of blockchain address strings: given an arbitrary
//! string and a configuration, report which network it belongs to, whether
//! it is valid, and family-specific metadata.
//!
//! This crate contains no I/O and no logging. The only shared state is the
//! compiled pattern table, built once and read-only afterwards.
//!
//! ## Key Types
//!
//! - [`ValidationOptions`] - Caller configuration (allow-list, testnet and
//!   legacy policy, name-service suffixes)
//! - [`ResolvedOptions`] - The same configuration with every default applied
//! - [`NetworkInfo`] - The uniform classification record
//! - [`Network`] - The supported address families
//!
//! ## Pipeline
//!
//! Options are resolved first. The address then runs through an ordered
//! chain of recognizer stages (see [`disambiguator`]); the first stage that
//! claims it decides the result.

pub mod checksum;
pub mod disambiguator;
pub mod engine;
pub mod error;
pub mod name_service;
pub mod options;
pub mod recognizers;
pub mod registry;
pub mod result;
pub mod types;

pub use checksum::{to_checksum_address, verify_eip55, verify_ican};
pub use disambiguator::{classify, stages, Stage};
pub use engine::{validate, validate_resolved};
pub use error::{ChecksumError, EngineError, OptionsError};
pub use options::{DomainConfig, DomainRule, NsDomain, ResolvedOptions, ValidationOptions};
pub use registry::{registry, PatternId, Registry, ReservedPrefix};
pub use result::NetworkInfo;
pub use types::{AddressFormat, CardanoKind, CashAddrKind, Metadata, Network};
