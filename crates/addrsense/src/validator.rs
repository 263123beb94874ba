//! The Validator: options resolved once, reused for many classifications.

use addrsense_core::{
    to_checksum_address, validate, validate_resolved, NetworkInfo, ResolvedOptions,
    ValidationOptions,
};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::Result;

/// A reusable classifier bound to one configuration.
///
/// Resolving options walks the domain list and parses the allow-list, so
/// callers classifying many strings under the same configuration should
/// build one `Validator` and share it. It holds no mutable state and is
/// `Send + Sync`.
#[derive(Debug, Clone)]
pub struct Validator {
    /// The configuration as supplied.
    options: ValidationOptions,
    /// The same configuration with defaults applied.
    resolved: ResolvedOptions,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            options: ValidationOptions::default(),
            resolved: ResolvedOptions::default(),
        }
    }
}

impl Validator {
    /// Create a validator, rejecting malformed configuration up front.
    pub fn new(options: ValidationOptions) -> Result<Self> {
        let resolved = options.resolve().map_err(|err| {
            debug!(error = %err, "options rejected");
            err
        })?;
        Ok(Self { options, resolved })
    }

    /// Create a validator from an untyped JSON configuration.
    pub fn from_value(options: &Value) -> Result<Self> {
        let options = ValidationOptions::from_value(options).map_err(|err| {
            debug!(error = %err, "options rejected");
            err
        })?;
        Self::new(options)
    }

    /// The configuration as supplied.
    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// The configuration every stage reads.
    pub fn resolved(&self) -> &ResolvedOptions {
        &self.resolved
    }

    /// Classify `address`.
    pub fn validate(&self, address: &str) -> NetworkInfo {
        self.classify(address, false)
    }

    /// Classify `address`, re-checking EIP-55 even on uniform-case hex.
    pub fn validate_with_checksum(&self, address: &str) -> NetworkInfo {
        self.classify(address, true)
    }

    fn classify(&self, address: &str, force_checksum: bool) -> NetworkInfo {
        let info = validate_resolved(address, &self.resolved, force_checksum);
        trace_result(&info);
        info
    }
}

fn trace_result(info: &NetworkInfo) {
    if info.is_internal_failure() {
        warn!(description = %info.description, "classification fault");
        return;
    }
    debug!(
        network = info.network.map_or("none", |n| n.as_str()),
        valid = info.is_valid,
        description = %info.description,
        "classified"
    );
}

/// Classify a loosely typed address under a loosely typed configuration.
///
/// A non-string or blank `address` is "Invalid input"; a malformed
/// `options` is "Invalid options: ...". `null` options mean defaults.
pub fn validate_value(address: &Value, options: &Value, force_checksum: bool) -> NetworkInfo {
    let address = match address.as_str() {
        Some(address) => address,
        None => return NetworkInfo::invalid_input(),
    };

    let options = match ValidationOptions::from_value(options) {
        Ok(options) => options,
        Err(err) => {
            debug!(error = %err, "options rejected");
            return NetworkInfo::invalid_options(&err);
        }
    };

    let info = validate(address, &options, force_checksum);
    trace_result(&info);
    info
}

/// EIP-55 form of a 40-digit hex address, or an error for a malformed body.
pub fn try_checksum_address(address: &str) -> Result<String> {
    Ok(to_checksum_address(address)?)
}

/// EIP-55 form of a 40-digit hex address (with or without `0x`).
pub fn checksum_address(address: &str) -> Option<String> {
    try_checksum_address(address).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use addrsense_core::{DomainConfig, Network};
    use serde_json::json;

    use crate::error::AddrsenseError;

    #[test]
    fn test_validator_reuses_options() {
        let validator = Validator::new(ValidationOptions::new().ns_domain("eth")).unwrap();
        assert_eq!(validator.validate("vitalik.eth").network, Some(Network::Ns));
        assert_eq!(
            validator
                .validate("0x4838B106FCe9647Bdf1E7877BF73cE8B0BAD5f97")
                .network,
            Some(Network::Evm)
        );
        assert_eq!(validator.resolved().ns_domains.len(), 1);
    }

    #[test]
    fn test_validator_rejects_bad_options() {
        let options = ValidationOptions::new()
            .ns_domain(DomainConfig::new("eth").max_total_length(10).max_label_length(20));
        let err = Validator::new(options).unwrap_err();
        assert!(matches!(err, AddrsenseError::Options(_)));
    }

    #[test]
    fn test_validate_with_checksum() {
        let validator = Validator::default();
        let lower = "0x4838b106fce9647bdf1e7877bf73ce8b0bad5f97";
        assert!(validator.validate(lower).is_valid);
        assert!(!validator.validate_with_checksum(lower).is_valid);
    }

    #[test]
    fn test_validate_value_non_string() {
        for address in [json!(42), json!(null), json!(["0x"]), json!({})] {
            let info = validate_value(&address, &Value::Null, false);
            assert_eq!(info.network, None);
            assert_eq!(info.description, "Invalid input");
        }
    }

    #[test]
    fn test_validate_value_bad_options() {
        let info = validate_value(&json!("vitalik.eth"), &json!({ "testnet": "yes" }), false);
        assert_eq!(info.description, "Invalid options: testnet must be a boolean");

        let info = validate_value(&json!("vitalik.eth"), &json!({ "network": "evm" }), false);
        assert_eq!(
            info.description,
            "Invalid options: network must be an array of strings"
        );
    }

    #[test]
    fn test_validate_value_shape() {
        let info = validate_value(
            &json!("cb7147879011ea207df5b35a24ca6f0859dcfb145999"),
            &json!({ "network": ["xcb"] }),
            false,
        );
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["network"], "xcb");
        assert_eq!(value["isValid"], true);
        assert_eq!(value["metadata"]["format"], "ican");
        assert_eq!(value["metadata"]["codename"], "Mainnet");
        assert_eq!(
            value["metadata"]["electronicFormat"],
            "CB7147879011EA207DF5B35A24CA6F0859DCFB145999"
        );
    }

    #[test]
    fn test_checksum_address() {
        assert_eq!(
            checksum_address("4838b106fce9647bdf1e7877bf73ce8b0bad5f97").as_deref(),
            Some("0x4838B106FCe9647Bdf1E7877BF73cE8B0BAD5f97")
        );
        assert_eq!(checksum_address("0x1234"), None);
        assert!(matches!(
            try_checksum_address("0x1234"),
            Err(AddrsenseError::Checksum(_))
        ));
    }
}
