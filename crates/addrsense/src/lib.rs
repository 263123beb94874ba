//! # Addrsense
//!
//! The unified API for classifying blockchain address strings.
//!
//! ## Overview
//!
//! Given an arbitrary string, addrsense reports which network it belongs to,
//! whether it is valid, and family-specific metadata:
//!
//! - **Hex families**: EVM (EIP-55 checksum), Core Coin (ICAN mod-97)
//! - **UTXO families**: Bitcoin and Litecoin legacy, segwit and native segwit,
//!   Bitcoin Cash CashAddr
//! - **Bech32 families**: Cosmos chains, Cardano payment and stake addresses
//! - **Base58/Base32 families**: Ripple, Tron, Solana, Polkadot, Stellar, Algorand
//! - **Name-service domains**: opt-in, per configured suffix
//!
//! Classification never fails. Malformed input, malformed options and
//! internal faults all come back as a [`NetworkInfo`] with a reason.
//!
//! ## Usage
//!
//! ```rust
//! use addrsense::{ValidationOptions, Validator};
//!
//! let validator = Validator::new(ValidationOptions::new().ns_domain("eth")).unwrap();
//!
//! let info = validator.validate("vitalik.eth");
//! assert!(info.is_valid);
//!
//! let info = validator.validate("0x4838B106FCe9647Bdf1E7877BF73cE8B0BAD5f97");
//! assert_eq!(info.network.map(|n| n.as_str()), Some("evm"));
//! ```
//!
//! ## Re-exports
//!
//! - `addrsense::core` - The pure engine (registry, recognizers, checksums)

pub mod error;
pub mod validator;

pub use addrsense_core as core;

pub use error::{AddrsenseError, Result};
pub use validator::{checksum_address, try_checksum_address, validate_value, Validator};

pub use addrsense_core::{
    validate, AddressFormat, CardanoKind, CashAddrKind, DomainConfig, Metadata, Network,
    NetworkInfo, NsDomain, ValidationOptions,
};
