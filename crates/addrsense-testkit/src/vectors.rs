//! Golden classification vectors.
//!
//! Each vector pins the network, validity and (where it matters) the exact
//! description produced for one input under one configuration. Options are
//! stored as JSON text so the vectors also exercise the untyped boundary.

use addrsense_core::{validate, Network, NetworkInfo, ValidationOptions};
use serde::Serialize;
use serde_json::Value;

/// A golden test vector.
#[derive(Debug, Clone, Serialize)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// The string to classify.
    pub address: &'static str,
    /// Configuration as JSON text; empty means defaults.
    pub options: &'static str,
    /// Re-check EIP-55 on uniform-case hex.
    pub force_checksum: bool,
    pub expected_network: Option<Network>,
    pub expected_valid: bool,
    /// Exact description, when pinned.
    pub expected_description: Option<&'static str>,
}

impl GoldenVector {
    fn valid(name: &'static str, address: &'static str, network: Network) -> Self {
        Self {
            name,
            address,
            options: "",
            force_checksum: false,
            expected_network: Some(network),
            expected_valid: true,
            expected_description: None,
        }
    }

    fn invalid(
        name: &'static str,
        address: &'static str,
        network: Option<Network>,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            address,
            options: "",
            force_checksum: false,
            expected_network: network,
            expected_valid: false,
            expected_description: Some(description),
        }
    }

    fn with_options(mut self, options: &'static str) -> Self {
        self.options = options;
        self
    }

    fn forced(mut self) -> Self {
        self.force_checksum = true;
        self
    }

    /// The vector's options as a JSON value (`null` when unset).
    pub fn options_value(&self) -> Value {
        if self.options.is_empty() {
            return Value::Null;
        }
        serde_json::from_str(self.options).unwrap_or(Value::Null)
    }

    /// Classify the vector's input under its options.
    pub fn classify(&self) -> NetworkInfo {
        match ValidationOptions::from_value(&self.options_value()) {
            Ok(options) => validate(self.address, &options, self.force_checksum),
            Err(err) => NetworkInfo::invalid_options(&err),
        }
    }

    /// Whether `info` is what this vector expects.
    pub fn matches(&self, info: &NetworkInfo) -> bool {
        info.network == self.expected_network
            && info.is_valid == self.expected_valid
            && self
                .expected_description
                .map_or(true, |expected| info.description == expected)
    }
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    use GoldenVector as V;

    vec![
        // Hex families
        V::valid(
            "evm checksummed",
            "0x4838B106FCe9647Bdf1E7877BF73cE8B0BAD5f97",
            Network::Evm,
        ),
        V::valid(
            "evm lower-case unforced",
            "0x4838b106fce9647bdf1e7877bf73ce8b0bad5f97",
            Network::Evm,
        ),
        V::invalid(
            "evm lower-case forced",
            "0x4838b106fce9647bdf1e7877bf73ce8b0bad5f97",
            Some(Network::Evm),
            "Invalid EVM address checksum",
        )
        .forced(),
        V::invalid(
            "evm flipped letter",
            "0x5AAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            Some(Network::Evm),
            "Invalid EVM address checksum",
        ),
        V::valid(
            "core coin mainnet",
            "cb7147879011ea207df5b35a24ca6f0859dcfb145999",
            Network::Xcb,
        ),
        V::valid(
            "core coin enterprise",
            "ce450000000000000000000000000000000000000000",
            Network::Xcb,
        ),
        V::invalid(
            "core coin testnet disallowed",
            "ab792215c43fc213c02182c8389f2bc32408e2c50922",
            Some(Network::Xcb),
            "Testnet address not allowed",
        ),
        V::valid(
            "core coin testnet allowed",
            "ab792215c43fc213c02182c8389f2bc32408e2c50922",
            Network::Xcb,
        )
        .with_options(r#"{"testnet": true}"#),
        V::invalid(
            "core coin bad check digits",
            "cb7147879011ea207df5b35a24ca6f0859dcfb145998",
            Some(Network::Xcb),
            "Invalid Core Coin address checksum",
        ),
        // UTXO families
        V::valid(
            "bitcoin legacy",
            "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa",
            Network::Bitcoin,
        ),
        V::valid(
            "bitcoin segwit",
            "3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy",
            Network::Bitcoin,
        ),
        V::invalid(
            "bitcoin legacy bad checksum",
            "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNb",
            Some(Network::Bitcoin),
            "Invalid Bitcoin Legacy address",
        ),
        V::invalid(
            "bitcoin legacy disabled",
            "1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2",
            Some(Network::Bitcoin),
            "Legacy address format not allowed",
        )
        .with_options(r#"{"enabledLegacy": false}"#),
        V::valid(
            "bitcoin native segwit",
            "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4",
            Network::Bitcoin,
        ),
        V::invalid(
            "bitcoin testnet native segwit disallowed",
            "tb1qw508d6qejxtdg4y5r3zarvary0c5xw7kxpjzsx",
            Some(Network::Bitcoin),
            "Testnet address not allowed",
        )
        .with_options(r#"{"testnet": false}"#),
        V::valid(
            "bitcoin testnet native segwit allowed",
            "tb1qw508d6qejxtdg4y5r3zarvary0c5xw7kxpjzsx",
            Network::Bitcoin,
        )
        .with_options(r#"{"testnet": true}"#),
        V::valid(
            "litecoin legacy",
            "LKDyUEtTR1HXamkiEphisSiBJu6o3ZPE34",
            Network::Litecoin,
        ),
        V::valid(
            "litecoin segwit",
            "M7uBSTV2qNDHDe2tHfNMqhFkZucgRMpJQk",
            Network::Litecoin,
        ),
        V::valid(
            "bitcoin cash prefixed",
            "bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a",
            Network::BitcoinCash,
        ),
        V::valid(
            "bitcoin cash upper-case",
            "BITCOINCASH:QPM2QSZNHKS23Z7629MMS6S4CWEF74VCWVY22GDX6A",
            Network::BitcoinCash,
        ),
        V::invalid(
            "bitcoin cash mixed case",
            "bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdX6a",
            Some(Network::BitcoinCash),
            "Invalid Bitcoin Cash address: mixed case",
        ),
        V::valid(
            "bitcoin cash testnet allowed",
            "bchtest:qr95sy3j9xwd2ap32xkykttr4cvcu7as4yc93ky28e",
            Network::BitcoinCash,
        )
        .with_options(r#"{"testnet": true}"#),
        // A bare CashAddr payload is all base58, so the loose family gets it.
        V::valid(
            "bare cashaddr payload",
            "qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a",
            Network::Solana,
        ),
        // Bech32 families
        V::valid(
            "cosmos hub",
            "cosmos1hsk6jryyqjfhp5dhc55tc9jtckygx0eph6dd02",
            Network::Cosmos,
        ),
        V::valid(
            "cardano payment",
            "addr1qx2fxv2umyhttkxyxp8x0dlpdt3k6cwng5pxj3jhsydzer3n0d3vllmyqwsx5wktcd8cc3sq835lu7drv2xwl2wywfgse35a3x",
            Network::Cardano,
        ),
        V::valid(
            "cardano stake",
            "stake1uyehkck0lajq8gr28t9uxnuvgcqrc6070x3k9r8048z8y5gh6ffgw",
            Network::Cardano,
        ),
        V::invalid(
            "cardano truncated",
            "addr1qx2fxv2umyhttkxyxp8x0dlpdt3k6cwng5pxj3jhsydzer3n0d3vllm",
            Some(Network::Cardano),
            "Invalid Cardano address format",
        ),
        // Base58 and Base32 families
        V::valid(
            "ripple",
            "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh",
            Network::Ripple,
        ),
        V::valid(
            "tron",
            "TLa2f6VPqDgRE67v1736s7bJ8Ray5wYjU7",
            Network::Tron,
        ),
        V::invalid(
            "tron with zero",
            "TLa2f6VPqDgRE67v1736s7bJ8Ray5wYjU0",
            Some(Network::Tron),
            "Invalid Tron address format",
        ),
        V::valid(
            "solana",
            "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM",
            Network::Solana,
        ),
        V::valid(
            "solana wrapped sol mint",
            "So11111111111111111111111111111111111111112",
            Network::Solana,
        ),
        V::valid(
            "polkadot",
            "1FRMM8PEiWXYax7rpS6X4XZX1aAAxSWx1CrKTyrVYhV24fg",
            Network::Polkadot,
        ),
        V::valid(
            "kusama",
            "HNZata7iMYWmk5RvZRTiAsSDhV8366zq2YGb3tLH5Upf74F",
            Network::Polkadot,
        ),
        V::invalid(
            "reserved ripple prefix in loose window",
            "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyThabcdef",
            None,
            "Ambiguous address: prefix 'r' is reserved for ripple",
        ),
        V::invalid(
            "bitcoin legacy under solana-only allow-list",
            "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa",
            None,
            "Ambiguous address: prefix '1' is reserved for bitcoin",
        )
        .with_options(r#"{"network": ["solana"]}"#),
        V::valid(
            "stellar",
            "GAHK7EEG2WWHVKDNT4CEQFZGKF2LGDSW2IVM4S5DP42RBW3K6BTODB4A",
            Network::Stellar,
        ),
        V::valid(
            "algorand",
            "VCMJKWOY5P5P7SKMZFFOCEROPJCZOTIJMNIYNUCKH7LRO45JMJP6UYBIJA",
            Network::Algorand,
        ),
        // Name service
        V::valid("ens name", "vitalik.eth", Network::Ns).with_options(r#"{"nsDomains": ["eth"]}"#),
        V::invalid(
            "ens consecutive dots",
            "🦊..eth",
            Some(Network::Ns),
            "Invalid domain format: consecutive dots",
        )
        .with_options(r#"{"nsDomains": ["eth"]}"#),
        V::invalid(
            "ens not configured",
            "vitalik.eth",
            None,
            "Unknown address format",
        ),
        // Policy and boundary
        V::invalid(
            "network filtered out",
            "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh",
            Some(Network::Ripple),
            "Network not allowed: ripple",
        )
        .with_options(r#"{"network": ["evm", "bitcoin"]}"#),
        V::invalid("empty input", "", None, "Invalid input"),
        V::invalid("whitespace input", "   ", None, "Invalid input"),
        V::invalid(
            "malformed options",
            "vitalik.eth",
            None,
            "Invalid options: testnet must be a boolean",
        )
        .with_options(r#"{"testnet": "yes"}"#),
        V::invalid(
            "garbage",
            "hello world",
            None,
            "Unknown address format",
        ),
    ]
}

/// Classify every golden vector and report whether each matched.
///
/// Returns `(name, matched, description)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let info = v.classify();
            (v.name.to_string(), v.matches(&info), info.description)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vector_names_are_unique() {
        let vectors = all_vectors();
        let names: HashSet<_> = vectors.iter().map(|v| v.name).collect();
        assert_eq!(names.len(), vectors.len());
    }

    #[test]
    fn test_vector_options_parse() {
        for vector in all_vectors() {
            if !vector.options.is_empty() {
                assert!(
                    serde_json::from_str::<Value>(vector.options).is_ok(),
                    "{}: options are not JSON",
                    vector.name
                );
            }
        }
    }

    #[test]
    fn test_vectors_are_deterministic() {
        for vector in all_vectors() {
            assert_eq!(vector.classify(), vector.classify(), "{}", vector.name);
        }
    }
}
