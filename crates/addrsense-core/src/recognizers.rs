//! Per-family recognizers.
//!
//! Each recognizer either declines a string (`Ok(None)`), letting the next
//! stage look at it, or claims it and returns the finished result, valid or
//! not. Claiming is final.

use crate::checksum::{
    decode_base58check, ican_print_format, is_uniform_case, verify_eip55, verify_ican,
};
use crate::error::EngineError;
use crate::name_service;
use crate::options::ResolvedOptions;
use crate::registry::{PatternId, Registry, BECH32_CHARSET, COSMOS_CHAINS};
use crate::result::{NetworkInfo, LEGACY_NOT_ALLOWED, TESTNET_NOT_ALLOWED};
use crate::types::{
    AddressFormat, CardanoKind, CardanoMetadata, CashAddrKind, CashAddrMetadata, CosmosMetadata,
    EncodedMetadata, EvmMetadata, IcanMetadata, Metadata, Network, UtxoMetadata,
};

/// Everything a recognizer may read.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub registry: &'a Registry,
    pub options: &'a ResolvedOptions,
    /// Re-check EIP-55 even for uniform-case input.
    pub force_checksum: bool,
}

pub type Recognition = Result<Option<NetworkInfo>, EngineError>;

/// Applies the testnet policy to an otherwise final result.
fn gate_testnet(info: NetworkInfo, is_testnet: bool, ctx: &Context<'_>) -> NetworkInfo {
    if is_testnet && !ctx.options.testnet && info.is_valid {
        info.rejected(TESTNET_NOT_ALLOWED)
    } else {
        info
    }
}

fn encoded(format: AddressFormat) -> Metadata {
    Metadata::Encoded(EncodedMetadata { format })
}

pub fn name_service(address: &str, ctx: &Context<'_>) -> Recognition {
    Ok(name_service::recognize(address, ctx.options, ctx.registry))
}

// ─────────────────────────────────────────────────────────────────────────────
// Hex families
// ─────────────────────────────────────────────────────────────────────────────

pub fn evm(address: &str, ctx: &Context<'_>) -> Recognition {
    if !ctx.registry.is_match(PatternId::Evm, address) {
        return Ok(None);
    }

    let is_checksum_valid = if !ctx.force_checksum && is_uniform_case(address) {
        true
    } else {
        verify_eip55(address)?
    };

    let metadata = Metadata::Evm(EvmMetadata {
        format: AddressFormat::Hex,
        is_checksum_valid,
    });

    Ok(Some(if is_checksum_valid {
        NetworkInfo::valid(Network::Evm, "EVM-compatible address", metadata)
    } else {
        NetworkInfo::invalid(Network::Evm, "Invalid EVM address checksum").with_metadata(metadata)
    }))
}

pub fn ican(address: &str, ctx: &Context<'_>) -> Recognition {
    let caps = match ctx.registry.get(PatternId::Ican).captures(address) {
        Some(caps) => caps,
        None => return Ok(None),
    };

    let (codename, label, is_testnet, is_enterprise) =
        match caps[1].to_ascii_lowercase().as_str() {
            "ab" => ("Devin", "testnet", true, false),
            "ce" => ("Enterprise", "enterprise", false, true),
            _ => ("Mainnet", "mainnet", false, false),
        };

    let is_checksum_valid = verify_ican(address)?;
    let electronic_format = address.to_ascii_uppercase();
    let metadata = Metadata::Ican(IcanMetadata {
        format: AddressFormat::Ican,
        is_checksum_valid,
        is_testnet,
        is_enterprise,
        codename: codename.to_string(),
        print_format: ican_print_format(&electronic_format),
        electronic_format,
    });

    if !is_checksum_valid {
        return Ok(Some(
            NetworkInfo::invalid(Network::Xcb, "Invalid Core Coin address checksum")
                .with_metadata(metadata),
        ));
    }

    let info = NetworkInfo::valid(
        Network::Xcb,
        format!("Core Coin {label} address"),
        metadata,
    );
    Ok(Some(gate_testnet(info, is_testnet, ctx)))
}

// ─────────────────────────────────────────────────────────────────────────────
// UTXO families: legacy / segwit / native segwit
// ─────────────────────────────────────────────────────────────────────────────

/// One coin family's three address tiers.
#[derive(Debug, Clone, Copy)]
pub struct UtxoFamily {
    pub network: Network,
    pub legacy: PatternId,
    pub segwit: PatternId,
    pub native_segwit: PatternId,
    /// Version byte of a decoded legacy (P2PKH) payload.
    pub legacy_version: u8,
    /// Version byte of a decoded segwit-compatible (P2SH) payload.
    pub segwit_version: u8,
    /// Native segwit human-readable part reserved for testnet.
    pub testnet_hrp: &'static str,
    /// Networks whose legacy addresses are byte-for-byte identical.
    pub legacy_compatible_with: &'static [Network],
}

pub const BITCOIN: UtxoFamily = UtxoFamily {
    network: Network::Bitcoin,
    legacy: PatternId::BitcoinLegacy,
    segwit: PatternId::BitcoinSegwit,
    native_segwit: PatternId::BitcoinNativeSegwit,
    legacy_version: 0x00,
    segwit_version: 0x05,
    testnet_hrp: "tb1",
    legacy_compatible_with: &[Network::BitcoinCash],
};

pub const LITECOIN: UtxoFamily = UtxoFamily {
    network: Network::Litecoin,
    legacy: PatternId::LitecoinLegacy,
    segwit: PatternId::LitecoinSegwit,
    native_segwit: PatternId::LitecoinNativeSegwit,
    legacy_version: 0x30,
    segwit_version: 0x32,
    testnet_hrp: "tltc1",
    legacy_compatible_with: &[],
};

/// Hash160 plus one version byte.
const BASE58_PAYLOAD_LEN: usize = 21;

fn base58_tier(
    address: &str,
    family: &UtxoFamily,
    format: AddressFormat,
    label: &str,
    version: u8,
    compatible_with: &[Network],
) -> NetworkInfo {
    let name = family.network.display_name();
    match decode_base58check(address) {
        Some(payload) if payload.len() == BASE58_PAYLOAD_LEN && payload[0] == version => {
            NetworkInfo::valid(
                family.network,
                format!("{name} {label} address"),
                Metadata::Utxo(UtxoMetadata {
                    format,
                    is_testnet: false,
                    compatible_with: compatible_with.to_vec(),
                }),
            )
        }
        _ => NetworkInfo::invalid(family.network, format!("Invalid {name} {label} address")),
    }
}

pub fn utxo(address: &str, ctx: &Context<'_>, family: &UtxoFamily) -> Recognition {
    let registry = ctx.registry;

    if registry.is_match(family.legacy, address) {
        let info = base58_tier(
            address,
            family,
            AddressFormat::Legacy,
            "Legacy",
            family.legacy_version,
            family.legacy_compatible_with,
        );
        if info.is_valid && !ctx.options.enabled_legacy {
            return Ok(Some(info.rejected(LEGACY_NOT_ALLOWED)));
        }
        return Ok(Some(info));
    }

    if registry.is_match(family.segwit, address) {
        return Ok(Some(base58_tier(
            address,
            family,
            AddressFormat::Segwit,
            "SegWit",
            family.segwit_version,
            &[],
        )));
    }

    if let Some(caps) = registry.get(family.native_segwit).captures(address) {
        let is_testnet = &caps[1] == family.testnet_hrp;
        let name = family.network.display_name();
        let description = if is_testnet {
            format!("{name} Testnet Native SegWit address")
        } else {
            format!("{name} Native SegWit address")
        };
        let info = NetworkInfo::valid(
            family.network,
            description,
            Metadata::Utxo(UtxoMetadata {
                format: AddressFormat::NativeSegwit,
                is_testnet,
                compatible_with: Vec::new(),
            }),
        );
        return Ok(Some(gate_testnet(info, is_testnet, ctx)));
    }

    Ok(None)
}

pub fn bitcoin(address: &str, ctx: &Context<'_>) -> Recognition {
    utxo(address, ctx, &BITCOIN)
}

pub fn litecoin(address: &str, ctx: &Context<'_>) -> Recognition {
    utxo(address, ctx, &LITECOIN)
}

// ─────────────────────────────────────────────────────────────────────────────
// Bech32 families
// ─────────────────────────────────────────────────────────────────────────────

pub fn cosmos(address: &str, ctx: &Context<'_>) -> Recognition {
    let caps = match ctx.registry.get(PatternId::Cosmos).captures(address) {
        Some(caps) => caps,
        None => return Ok(None),
    };

    let hrp = &caps[1];
    let chain_name = COSMOS_CHAINS
        .iter()
        .find(|(prefix, _)| *prefix == hrp)
        .map_or(hrp, |(_, name)| *name);

    Ok(Some(NetworkInfo::valid(
        Network::Cosmos,
        format!("{chain_name} address"),
        Metadata::Cosmos(CosmosMetadata {
            format: AddressFormat::Bech32,
            chain: hrp.to_string(),
        }),
    )))
}

const CARDANO_PAYMENT_DATA_LEN: usize = 98;
const CARDANO_STAKE_DATA_LEN: usize = 53;

pub fn cardano(address: &str, ctx: &Context<'_>) -> Recognition {
    let caps = match ctx.registry.get(PatternId::CardanoPrefix).captures(address) {
        Some(caps) => caps,
        None => return Ok(None),
    };

    let (kind, is_testnet) = match &caps[1] {
        "addr" => (CardanoKind::Payment, false),
        "addr_test" => (CardanoKind::Payment, true),
        "stake" => (CardanoKind::Stake, false),
        _ => (CardanoKind::Stake, true),
    };
    let expected_len = match kind {
        CardanoKind::Payment => CARDANO_PAYMENT_DATA_LEN,
        CardanoKind::Stake => CARDANO_STAKE_DATA_LEN,
    };

    let data = &caps[2];
    if data.len() != expected_len || !data.chars().all(|c| BECH32_CHARSET.contains(c)) {
        return Ok(Some(NetworkInfo::invalid(
            Network::Cardano,
            "Invalid Cardano address format",
        )));
    }

    let role = match kind {
        CardanoKind::Payment => "payment",
        CardanoKind::Stake => "stake",
    };
    let description = if is_testnet {
        format!("Cardano testnet {role} address")
    } else {
        format!("Cardano {role} address")
    };

    let info = NetworkInfo::valid(
        Network::Cardano,
        description,
        Metadata::Cardano(CardanoMetadata {
            format: AddressFormat::Bech32,
            is_testnet,
            kind,
        }),
    );
    Ok(Some(gate_testnet(info, is_testnet, ctx)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Base58 families
// ─────────────────────────────────────────────────────────────────────────────

pub fn ripple(address: &str, ctx: &Context<'_>) -> Recognition {
    if !ctx.registry.is_match(PatternId::Ripple, address) {
        return Ok(None);
    }
    Ok(Some(NetworkInfo::valid(
        Network::Ripple,
        "Ripple (XRP) address",
        encoded(AddressFormat::Base58),
    )))
}

pub fn tron(address: &str, ctx: &Context<'_>) -> Recognition {
    if !ctx.registry.is_match(PatternId::TronCandidate, address) {
        return Ok(None);
    }
    if !ctx.registry.is_match(PatternId::Tron, address) {
        return Ok(Some(NetworkInfo::invalid(
            Network::Tron,
            "Invalid Tron address format",
        )));
    }
    Ok(Some(NetworkInfo::valid(
        Network::Tron,
        "Tron address",
        encoded(AddressFormat::Base58),
    )))
}

/// Length-range-only base58 families. A candidate starting with a prefix
/// reserved by a strict family is claimed as ambiguous, never attributed.
fn loose_base58(
    address: &str,
    ctx: &Context<'_>,
    network: Network,
    pattern: PatternId,
    description: &str,
) -> Recognition {
    if !ctx.registry.is_match(pattern, address) {
        return Ok(None);
    }
    if let Some(reserved) = ctx.options.reserved_prefix(address) {
        return Ok(Some(NetworkInfo::unattributed(format!(
            "Ambiguous address: prefix '{}' is reserved for {}",
            reserved.prefix, reserved.owner
        ))));
    }
    Ok(Some(NetworkInfo::valid(
        network,
        description,
        encoded(AddressFormat::Base58),
    )))
}

pub fn solana(address: &str, ctx: &Context<'_>) -> Recognition {
    loose_base58(address, ctx, Network::Solana, PatternId::Solana, "Solana address")
}

pub fn polkadot(address: &str, ctx: &Context<'_>) -> Recognition {
    loose_base58(
        address,
        ctx,
        Network::Polkadot,
        PatternId::Polkadot,
        "Polkadot (SS58) address",
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Base32 families
// ─────────────────────────────────────────────────────────────────────────────

pub fn stellar(address: &str, ctx: &Context<'_>) -> Recognition {
    if !ctx.registry.is_match(PatternId::Stellar, address) {
        return Ok(None);
    }
    Ok(Some(NetworkInfo::valid(
        Network::Stellar,
        "Stellar address",
        encoded(AddressFormat::Base32),
    )))
}

pub fn algorand(address: &str, ctx: &Context<'_>) -> Recognition {
    if !ctx.registry.is_match(PatternId::Algorand, address) {
        return Ok(None);
    }
    Ok(Some(NetworkInfo::valid(
        Network::Algorand,
        "Algorand address",
        encoded(AddressFormat::Base32),
    )))
}

// ─────────────────────────────────────────────────────────────────────────────
// CashAddr
// ─────────────────────────────────────────────────────────────────────────────

pub fn bitcoin_cash(address: &str, ctx: &Context<'_>) -> Recognition {
    let caps = match ctx.registry.get(PatternId::CashAddr).captures(address) {
        Some(caps) => caps,
        None => return Ok(None),
    };

    let has_upper = address.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = address.chars().any(|c| c.is_ascii_lowercase());
    if has_upper && has_lower {
        return Ok(Some(NetworkInfo::invalid(
            Network::BitcoinCash,
            "Invalid Bitcoin Cash address: mixed case",
        )));
    }

    let payload = caps[2].to_ascii_lowercase();
    if !ctx.registry.is_match(PatternId::CashAddrPayload, &payload) {
        return Ok(Some(NetworkInfo::invalid(
            Network::BitcoinCash,
            "Invalid Bitcoin Cash address",
        )));
    }

    let is_testnet = caps
        .get(1)
        .map_or(false, |prefix| prefix.as_str().eq_ignore_ascii_case("bchtest"));
    let kind = if payload.starts_with('q') {
        CashAddrKind::P2pkh
    } else {
        CashAddrKind::P2sh
    };
    let description = if is_testnet {
        "Bitcoin Cash Testnet address"
    } else {
        "Bitcoin Cash address"
    };

    let info = NetworkInfo::valid(
        Network::BitcoinCash,
        description,
        Metadata::CashAddr(CashAddrMetadata {
            format: AddressFormat::Cashaddr,
            is_testnet,
            kind,
        }),
    );
    Ok(Some(gate_testnet(info, is_testnet, ctx)))
}
