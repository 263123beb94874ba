//! Network identifiers and per-family metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A supported network (or address family) identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Name-service domains (`vitalik.eth`).
    Ns,
    Evm,
    /// Core Coin ICAN addresses.
    Xcb,
    Bitcoin,
    Litecoin,
    Cosmos,
    Cardano,
    Ripple,
    Tron,
    Solana,
    Polkadot,
    Stellar,
    Algorand,
    BitcoinCash,
}

impl Network {
    /// Every network, in disambiguation priority order.
    pub const ALL: [Network; 14] = [
        Network::Ns,
        Network::Evm,
        Network::Xcb,
        Network::Bitcoin,
        Network::Litecoin,
        Network::Cosmos,
        Network::Cardano,
        Network::Ripple,
        Network::Tron,
        Network::Solana,
        Network::Polkadot,
        Network::Stellar,
        Network::Algorand,
        Network::BitcoinCash,
    ];

    /// The wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Ns => "ns",
            Network::Evm => "evm",
            Network::Xcb => "xcb",
            Network::Bitcoin => "bitcoin",
            Network::Litecoin => "litecoin",
            Network::Cosmos => "cosmos",
            Network::Cardano => "cardano",
            Network::Ripple => "ripple",
            Network::Tron => "tron",
            Network::Solana => "solana",
            Network::Polkadot => "polkadot",
            Network::Stellar => "stellar",
            Network::Algorand => "algorand",
            Network::BitcoinCash => "bitcoincash",
        }
    }

    /// Human-readable name used in descriptions.
    pub fn display_name(&self) -> &'static str {
        match self {
            Network::Ns => "Name Service",
            Network::Evm => "EVM",
            Network::Xcb => "Core Coin",
            Network::Bitcoin => "Bitcoin",
            Network::Litecoin => "Litecoin",
            Network::Cosmos => "Cosmos",
            Network::Cardano => "Cardano",
            Network::Ripple => "Ripple",
            Network::Tron => "Tron",
            Network::Solana => "Solana",
            Network::Polkadot => "Polkadot",
            Network::Stellar => "Stellar",
            Network::Algorand => "Algorand",
            Network::BitcoinCash => "Bitcoin Cash",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ();

    /// Case-insensitive lookup by wire identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::ALL
            .iter()
            .copied()
            .find(|n| n.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

/// Encoding family of a recognized string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddressFormat {
    Domain,
    Hex,
    Ican,
    Legacy,
    Segwit,
    NativeSegwit,
    Bech32,
    Base58,
    Base32,
    Cashaddr,
}

/// Cardano address role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardanoKind {
    Payment,
    Stake,
}

/// CashAddr payload type, taken from the leading `q`/`p`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CashAddrKind {
    P2pkh,
    P2sh,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameServiceMetadata {
    pub format: AddressFormat,
    /// The configured suffix that matched.
    pub domain: String,
    pub is_subdomain: bool,
    pub is_emoji: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvmMetadata {
    pub format: AddressFormat,
    pub is_checksum_valid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IcanMetadata {
    pub format: AddressFormat,
    pub is_checksum_valid: bool,
    pub is_testnet: bool,
    pub is_enterprise: bool,
    pub codename: String,
    /// Upper-cased, grouped in blocks of four separated by U+00A0.
    pub print_format: String,
    /// Upper-cased, ungrouped.
    pub electronic_format: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtxoMetadata {
    pub format: AddressFormat,
    pub is_testnet: bool,
    /// Networks that share this exact encoding.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compatible_with: Vec<Network>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmosMetadata {
    pub format: AddressFormat,
    pub chain: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardanoMetadata {
    pub format: AddressFormat,
    pub is_testnet: bool,
    pub kind: CardanoKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedMetadata {
    pub format: AddressFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashAddrMetadata {
    pub format: AddressFormat,
    pub is_testnet: bool,
    pub kind: CashAddrKind,
}

/// Family-specific metadata.
///
/// Serialized untagged, so callers see one flat record whose fields depend
/// on the family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Metadata {
    NameService(NameServiceMetadata),
    Evm(EvmMetadata),
    Ican(IcanMetadata),
    Utxo(UtxoMetadata),
    Cosmos(CosmosMetadata),
    Cardano(CardanoMetadata),
    Encoded(EncodedMetadata),
    CashAddr(CashAddrMetadata),
}

impl Metadata {
    pub fn format(&self) -> AddressFormat {
        match self {
            Metadata::NameService(m) => m.format,
            Metadata::Evm(m) => m.format,
            Metadata::Ican(m) => m.format,
            Metadata::Utxo(m) => m.format,
            Metadata::Cosmos(m) => m.format,
            Metadata::Cardano(m) => m.format,
            Metadata::Encoded(m) => m.format,
            Metadata::CashAddr(m) => m.format,
        }
    }

    /// Whether the address belongs to a test environment, for families that
    /// distinguish one.
    pub fn is_testnet(&self) -> bool {
        match self {
            Metadata::Ican(m) => m.is_testnet,
            Metadata::Utxo(m) => m.is_testnet,
            Metadata::Cardano(m) => m.is_testnet,
            Metadata::CashAddr(m) => m.is_testnet,
            _ => false,
        }
    }

    pub fn is_checksum_valid(&self) -> Option<bool> {
        match self {
            Metadata::Evm(m) => Some(m.is_checksum_valid),
            Metadata::Ican(m) => Some(m.is_checksum_valid),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_roundtrip_through_str() {
        for network in Network::ALL {
            assert_eq!(network.as_str().parse::<Network>(), Ok(network));
        }
        assert_eq!("EVM".parse::<Network>(), Ok(Network::Evm));
        assert!("dogecoin".parse::<Network>().is_err());
    }

    #[test]
    fn test_network_serializes_lowercase() {
        let json = serde_json::to_string(&Network::BitcoinCash).unwrap();
        assert_eq!(json, "\"bitcoincash\"");
    }

    #[test]
    fn test_format_serializes_kebab_case() {
        let json = serde_json::to_string(&AddressFormat::NativeSegwit).unwrap();
        assert_eq!(json, "\"native-segwit\"");
    }

    #[test]
    fn test_metadata_is_flat() {
        let metadata = Metadata::Evm(EvmMetadata {
            format: AddressFormat::Hex,
            is_checksum_valid: true,
        });
        let value = serde_json::to_value(&metadata).unwrap();
        assert_eq!(value["format"], "hex");
        assert_eq!(value["isChecksumValid"], true);
    }

    #[test]
    fn test_empty_compatible_with_is_omitted() {
        let metadata = Metadata::Utxo(UtxoMetadata {
            format: AddressFormat::Segwit,
            is_testnet: false,
            compatible_with: vec![],
        });
        let value = serde_json::to_value(&metadata).unwrap();
        assert!(value.get("compatibleWith").is_none());
    }
}
