//! Network disambiguation: an ordered list of recognizer stages where the
//! first stage to claim a string decides its classification.
//!
//! Order matters. Strict, prefix-anchored families run before the loose
//! length-only base58 families, and name-service domains run before all of
//! them. A stage only runs when one of its networks is allowed.

use crate::error::EngineError;
use crate::options::ResolvedOptions;
use crate::recognizers::{self, Context, Recognition};
use crate::registry::registry;
use crate::result::NetworkInfo;
use crate::types::Network;

/// One entry in the recognition chain.
#[derive(Clone, Copy)]
pub struct Stage {
    pub name: &'static str,
    /// Networks this stage can attribute a string to.
    pub networks: &'static [Network],
    pub recognize: fn(&str, &Context<'_>) -> Recognition,
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage")
            .field("name", &self.name)
            .field("networks", &self.networks)
            .finish()
    }
}

impl Stage {
    fn is_enabled(&self, options: &ResolvedOptions) -> bool {
        self.networks.iter().any(|n| options.allows(*n))
    }
}

static STAGES: &[Stage] = &[
    Stage {
        name: "name-service",
        networks: &[Network::Ns],
        recognize: recognizers::name_service,
    },
    Stage {
        name: "evm",
        networks: &[Network::Evm],
        recognize: recognizers::evm,
    },
    Stage {
        name: "xcb",
        networks: &[Network::Xcb],
        recognize: recognizers::ican,
    },
    Stage {
        name: "bitcoin",
        networks: &[Network::Bitcoin],
        recognize: recognizers::bitcoin,
    },
    Stage {
        name: "litecoin",
        networks: &[Network::Litecoin],
        recognize: recognizers::litecoin,
    },
    Stage {
        name: "cosmos",
        networks: &[Network::Cosmos],
        recognize: recognizers::cosmos,
    },
    Stage {
        name: "cardano",
        networks: &[Network::Cardano],
        recognize: recognizers::cardano,
    },
    Stage {
        name: "ripple",
        networks: &[Network::Ripple],
        recognize: recognizers::ripple,
    },
    Stage {
        name: "tron",
        networks: &[Network::Tron],
        recognize: recognizers::tron,
    },
    Stage {
        name: "solana",
        networks: &[Network::Solana],
        recognize: recognizers::solana,
    },
    Stage {
        name: "polkadot",
        networks: &[Network::Polkadot],
        recognize: recognizers::polkadot,
    },
    Stage {
        name: "stellar",
        networks: &[Network::Stellar],
        recognize: recognizers::stellar,
    },
    Stage {
        name: "algorand",
        networks: &[Network::Algorand],
        recognize: recognizers::algorand,
    },
    Stage {
        name: "bitcoincash",
        networks: &[Network::BitcoinCash],
        recognize: recognizers::bitcoin_cash,
    },
];

/// The recognition chain, in evaluation order.
pub fn stages() -> &'static [Stage] {
    STAGES
}

/// Run every enabled stage in order and return the first claim.
fn first_claim(address: &str, ctx: &Context<'_>) -> Result<Option<NetworkInfo>, EngineError> {
    for stage in STAGES {
        if !stage.is_enabled(ctx.options) {
            continue;
        }
        if let Some(info) = (stage.recognize)(address, ctx)? {
            return Ok(Some(info));
        }
    }
    Ok(None)
}

/// Classify `address` under already-resolved options.
///
/// With an allow-list in effect, a string no permitted stage claims is run
/// through the unrestricted chain once more so the caller learns which
/// excluded network it belongs to.
pub fn classify(
    address: &str,
    options: &ResolvedOptions,
    force_checksum: bool,
) -> Result<NetworkInfo, EngineError> {
    let ctx = Context {
        registry: registry()?,
        options,
        force_checksum,
    };

    if let Some(info) = first_claim(address, &ctx)? {
        return Ok(info);
    }
    if !options.is_restricted() {
        return Ok(NetworkInfo::unknown());
    }

    let unrestricted = options.unrestricted();
    let open = Context {
        options: &unrestricted,
        ..ctx
    };
    match first_claim(address, &open)? {
        Some(NetworkInfo {
            network: Some(network),
            ..
        }) => Ok(NetworkInfo::invalid(
            network,
            format!("Network not allowed: {network}"),
        )),
        _ => Ok(NetworkInfo::unknown()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ValidationOptions;

    fn classify_with(address: &str, options: ValidationOptions) -> NetworkInfo {
        classify(address, &options.resolve().unwrap(), false).unwrap()
    }

    fn classify_default(address: &str) -> NetworkInfo {
        classify_with(address, ValidationOptions::default())
    }

    #[test]
    fn test_every_network_has_a_stage() {
        for network in Network::ALL {
            assert!(
                stages().iter().any(|s| s.networks.contains(&network)),
                "{network} has no stage"
            );
        }
    }

    #[test]
    fn test_name_service_runs_first() {
        assert_eq!(stages()[0].networks, &[Network::Ns]);
    }

    #[test]
    fn test_strict_families_precede_loose_ones() {
        let position = |name: &str| stages().iter().position(|s| s.name == name).unwrap();
        for strict in ["bitcoin", "litecoin", "ripple", "tron"] {
            assert!(position(strict) < position("solana"), "{strict}");
            assert!(position(strict) < position("polkadot"), "{strict}");
        }
    }

    #[test]
    fn test_classifies_each_family() {
        let cases = [
            ("0x4838B106FCe9647Bdf1E7877BF73cE8B0BAD5f97", Network::Evm),
            ("cb7147879011ea207df5b35a24ca6f0859dcfb145999", Network::Xcb),
            ("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", Network::Bitcoin),
            ("LKDyUEtTR1HXamkiEphisSiBJu6o3ZPE34", Network::Litecoin),
            ("cosmos1hsk6jryyqjfhp5dhc55tc9jtckygx0eph6dd02", Network::Cosmos),
            ("rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh", Network::Ripple),
            ("TLa2f6VPqDgRE67v1736s7bJ8Ray5wYjU7", Network::Tron),
            ("9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM", Network::Solana),
            ("1FRMM8PEiWXYax7rpS6X4XZX1aAAxSWx1CrKTyrVYhV24fg", Network::Polkadot),
            ("GAHK7EEG2WWHVKDNT4CEQFZGKF2LGDSW2IVM4S5DP42RBW3K6BTODB4A", Network::Stellar),
            ("VCMJKWOY5P5P7SKMZFFOCEROPJCZOTIJMNIYNUCKH7LRO45JMJP6UYBIJA", Network::Algorand),
            ("bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a", Network::BitcoinCash),
        ];
        for (address, network) in cases {
            let info = classify_default(address);
            assert_eq!(info.network, Some(network), "{address}");
            assert!(info.is_valid, "{address}: {}", info.description);
        }
    }

    #[test]
    fn test_unknown() {
        let info = classify_default("definitely not an address");
        assert!(info.is_unknown());
    }

    #[test]
    fn test_reserved_prefix_in_loose_window_is_ambiguous() {
        // 40 base58 characters starting with 'r': too long for Ripple.
        let address = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyThabcdef";
        let info = classify_default(address);
        assert_eq!(info.network, None);
        assert_eq!(
            info.description,
            "Ambiguous address: prefix 'r' is reserved for ripple"
        );
    }

    #[test]
    fn test_bitcoin_address_not_taken_by_loose_family() {
        let genesis = "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa";
        let info = classify_with(genesis, ValidationOptions::new().networks(["solana"]));
        assert!(!info.is_valid);
        assert_eq!(info.network, None);
        assert_eq!(
            info.description,
            "Ambiguous address: prefix '1' is reserved for bitcoin"
        );

        // Too short for Polkadot, so the excluded owner is reported.
        let info = classify_with(genesis, ValidationOptions::new().networks(["polkadot"]));
        assert!(!info.is_valid);
        assert_eq!(info.network, Some(Network::Bitcoin));
        assert_eq!(info.description, "Network not allowed: bitcoin");
    }

    #[test]
    fn test_allow_list_skips_stages() {
        let options = ValidationOptions::new().networks(["evm"]);
        let info = classify_with("0x4838B106FCe9647Bdf1E7877BF73cE8B0BAD5f97", options);
        assert!(info.is_valid);
    }

    #[test]
    fn test_filtered_network_reported() {
        let options = ValidationOptions::new().networks(["evm"]);
        let info = classify_with("rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh", options);
        assert_eq!(info.network, Some(Network::Ripple));
        assert!(!info.is_valid);
        assert_eq!(info.description, "Network not allowed: ripple");
    }

    #[test]
    fn test_filtered_unknown_stays_unknown() {
        let options = ValidationOptions::new().networks(["evm"]);
        assert!(classify_with("nope", options).is_unknown());
    }

    #[test]
    fn test_unknown_network_names_still_restrict() {
        let options = ValidationOptions::new().networks(["dogecoin"]);
        let info = classify_with("0x4838B106FCe9647Bdf1E7877BF73cE8B0BAD5f97", options);
        assert_eq!(info.network, Some(Network::Evm));
        assert_eq!(info.description, "Network not allowed: evm");
    }

    #[test]
    fn test_force_checksum_reaches_evm() {
        let resolved = ValidationOptions::default().resolve().unwrap();
        let lower = "0x4838b106fce9647bdf1e7877bf73ce8b0bad5f97";
        assert!(classify(lower, &resolved, false).unwrap().is_valid);
        assert!(!classify(lower, &resolved, true).unwrap().is_valid);
    }
}
