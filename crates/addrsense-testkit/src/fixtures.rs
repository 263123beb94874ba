//! Test fixtures and helpers.
//!
//! Common configurations for integration tests, resolved once.

use addrsense_core::{
    validate_resolved, DomainConfig, NetworkInfo, ResolvedOptions, ValidationOptions,
};

/// A configuration and its resolved form.
#[derive(Debug, Clone)]
pub struct OptionsFixture {
    pub options: ValidationOptions,
    pub resolved: ResolvedOptions,
}

impl OptionsFixture {
    /// Resolve `options`. Panics on malformed configuration; fixtures are
    /// always well formed.
    pub fn new(options: ValidationOptions) -> Self {
        let resolved = options
            .resolve()
            .unwrap_or_else(|err| panic!("fixture options rejected: {err}"));
        Self { options, resolved }
    }

    /// Library defaults.
    pub fn defaults() -> Self {
        Self::new(ValidationOptions::default())
    }

    /// Testnet addresses accepted.
    pub fn testnet() -> Self {
        Self::new(ValidationOptions::new().testnet(true))
    }

    /// Legacy UTXO addresses rejected.
    pub fn no_legacy() -> Self {
        Self::new(ValidationOptions::new().enabled_legacy(false))
    }

    /// Only the hex families.
    pub fn hex_only() -> Self {
        Self::new(ValidationOptions::new().networks(["evm", "xcb"]))
    }

    /// `.eth` and `.base.eth` names, emoji allowed.
    pub fn ens() -> Self {
        Self::new(
            ValidationOptions::new()
                .ns_domain("base.eth")
                .ns_domain("eth"),
        )
    }

    /// `.eth` names with tight limits and no emoji.
    pub fn strict_ens() -> Self {
        Self::new(
            ValidationOptions::new().ns_domain(
                DomainConfig::new("eth")
                    .max_total_length(32)
                    .max_label_length(16)
                    .emoji_allowed(false),
            ),
        )
    }

    /// Classify `address` under this fixture.
    pub fn classify(&self, address: &str) -> NetworkInfo {
        validate_resolved(address, &self.resolved, false)
    }

    /// Classify with the EIP-55 check forced.
    pub fn classify_forced(&self, address: &str) -> NetworkInfo {
        validate_resolved(address, &self.resolved, true)
    }
}

impl Default for OptionsFixture {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Every named fixture, for tests that sweep configurations.
pub fn all_fixtures() -> Vec<(&'static str, OptionsFixture)> {
    vec![
        ("defaults", OptionsFixture::defaults()),
        ("testnet", OptionsFixture::testnet()),
        ("no_legacy", OptionsFixture::no_legacy()),
        ("hex_only", OptionsFixture::hex_only()),
        ("ens", OptionsFixture::ens()),
        ("strict_ens", OptionsFixture::strict_ens()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use addrsense_core::Network;

    #[test]
    fn test_fixtures_resolve() {
        assert_eq!(all_fixtures().len(), 6);
    }

    #[test]
    fn test_ens_prefers_longer_suffix() {
        let fixture = OptionsFixture::ens();
        let info = fixture.classify("jesse.base.eth");
        assert_eq!(info.network, Some(Network::Ns));
        assert_eq!(info.description, "Name service domain (.base.eth)");
    }

    #[test]
    fn test_strict_ens_limits() {
        let fixture = OptionsFixture::strict_ens();
        let info = fixture.classify("abcdefghijklmnopq.eth");
        assert_eq!(
            info.description,
            "Domain label exceeds maximum length of 16 characters"
        );
        let info = fixture.classify("🦊.eth");
        assert_eq!(
            info.description,
            "Emoji characters are not allowed in .eth domains"
        );
    }

    #[test]
    fn test_hex_only_reports_filtered_network() {
        let info = OptionsFixture::hex_only().classify("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa");
        assert_eq!(info.network, Some(Network::Bitcoin));
        assert_eq!(info.description, "Network not allowed: bitcoin");
    }
}
