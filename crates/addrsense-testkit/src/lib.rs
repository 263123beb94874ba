//! # Addrsense Testkit
//!
//! Testing utilities for addrsense.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known inputs with pinned classifications
//! - **Generators**: Proptest strategies for checksummed addresses and junk
//! - **Fixtures**: Resolved configurations for common scenarios
//!
//! ## Golden Vectors
//!
//! ```rust
//! use addrsense_testkit::vectors::verify_all_vectors;
//!
//! for (name, matched, description) in verify_all_vectors() {
//!     assert!(matched, "{name}: {description}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use addrsense_testkit::generators::checksummed_evm;
//!
//! proptest! {
//!     #[test]
//!     fn checksummed_addresses_verify(address in checksummed_evm()) {
//!         prop_assert!(addrsense_core::verify_eip55(&address).unwrap());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use addrsense_testkit::fixtures::OptionsFixture;
//!
//! let fixture = OptionsFixture::ens();
//! assert!(fixture.classify("vitalik.eth").is_valid);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{all_fixtures, OptionsFixture};
pub use generators::{checksummed_evm, ican_address, junk, reserved_prefixed};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
