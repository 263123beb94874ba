//! The pattern registry: every recognizer's regular expression, compiled
//! once and shared read-only by all callers.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::EngineError;
use crate::types::Network;

/// Identifies one compiled pattern in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternId {
    NsDomain,
    Emoji,
    Evm,
    Ican,
    BitcoinLegacy,
    BitcoinSegwit,
    BitcoinNativeSegwit,
    LitecoinLegacy,
    LitecoinSegwit,
    LitecoinNativeSegwit,
    Cosmos,
    CardanoPrefix,
    Ripple,
    TronCandidate,
    Tron,
    Solana,
    Polkadot,
    Stellar,
    Algorand,
    CashAddr,
    CashAddrPayload,
}

const BASE58: &str = "1-9A-HJ-NP-Za-km-z";
pub const BECH32_CHARSET: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";
/// A visible emoji base: pictographs and regional indicators.
const PICTOGRAPH: &str = r"[\p{Extended_Pictographic}\x{1F1E6}-\x{1F1FF}]";
/// Skin-tone modifiers and VS16, only ever after a base.
const EMOJI_MODIFIERS: &str = r"[\x{1F3FB}-\x{1F3FF}\x{FE0F}]*";
/// `0`-`9`, `#` or `*`, optional VS16, then the keycap combiner.
const KEYCAP: &str = r"[0-9#*]\x{FE0F}?\x{20E3}";

/// One emoji in a label: a keycap, or a base with its modifiers, optionally
/// joined to further bases by ZWJ. The joiner and selectors never stand alone.
fn emoji_sequence() -> String {
    format!(
        r"{KEYCAP}|{PICTOGRAPH}{EMOJI_MODIFIERS}(?:\x{{200D}}{PICTOGRAPH}{EMOJI_MODIFIERS})*"
    )
}

/// Source table, in `PatternId` declaration order.
fn sources() -> Vec<(PatternId, String)> {
    vec![
        (
            PatternId::NsDomain,
            format!(r"^(?:(?:[A-Za-z0-9\-]|{})+\.)+[A-Za-z]+$", emoji_sequence()),
        ),
        (PatternId::Emoji, format!(r"{PICTOGRAPH}|\x{{20E3}}")),
        (PatternId::Evm, r"^0x[0-9a-fA-F]{40}$".to_string()),
        (
            PatternId::Ican,
            r"(?i)^(cb|ab|ce)([0-9]{2})([0-9a-f]{40})$".to_string(),
        ),
        (PatternId::BitcoinLegacy, format!("^1[{BASE58}]{{25,34}}$")),
        (PatternId::BitcoinSegwit, format!("^3[{BASE58}]{{25,34}}$")),
        (
            PatternId::BitcoinNativeSegwit,
            format!("^(bc1|tb1)[{BECH32_CHARSET}]{{39,59}}$"),
        ),
        (PatternId::LitecoinLegacy, format!("^L[{BASE58}]{{26,33}}$")),
        (PatternId::LitecoinSegwit, format!("^M[{BASE58}]{{26,33}}$")),
        (
            PatternId::LitecoinNativeSegwit,
            format!("^(ltc1|tltc1)[{BECH32_CHARSET}]{{39,59}}$"),
        ),
        (
            PatternId::Cosmos,
            format!(
                "^(cosmos|osmo|juno|axelar|stars|celestia|akash|kava|secret|inj)1[{BECH32_CHARSET}]{{38,58}}$"
            ),
        ),
        (
            PatternId::CardanoPrefix,
            r"^(addr_test|addr|stake_test|stake)1(.*)$".to_string(),
        ),
        (PatternId::Ripple, format!("^r[{BASE58}]{{24,34}}$")),
        (PatternId::TronCandidate, "^T[0-9A-Za-z]{33}$".to_string()),
        (PatternId::Tron, format!("^T[{BASE58}]{{33}}$")),
        (PatternId::Solana, format!("^[{BASE58}]{{32,44}}$")),
        (PatternId::Polkadot, format!("^[{BASE58}]{{47,48}}$")),
        (PatternId::Stellar, "^G[A-Z2-7]{55}$".to_string()),
        (PatternId::Algorand, "^[A-Z2-7]{58}$".to_string()),
        (
            PatternId::CashAddr,
            r"(?i)^(?:(bitcoincash|bchtest):)?([qp][0-9a-z]{41})$".to_string(),
        ),
        (
            PatternId::CashAddrPayload,
            format!("^[qp][{BECH32_CHARSET}]{{41}}$"),
        ),
    ]
}

/// A literal prefix owned by a strict family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedPrefix {
    pub prefix: &'static str,
    pub owner: Network,
    /// Total lengths the reservation covers, inclusive. `None` covers all.
    pub lengths: Option<(usize, usize)>,
}

impl ReservedPrefix {
    pub const fn new(prefix: &'static str, owner: Network) -> Self {
        Self {
            prefix,
            owner,
            lengths: None,
        }
    }

    /// Limit the reservation to inputs of `min..=max` characters.
    pub const fn within(self, min: usize, max: usize) -> Self {
        Self {
            lengths: Some((min, max)),
            ..self
        }
    }

    pub fn covers(&self, input: &str) -> bool {
        input.starts_with(self.prefix)
            && self.lengths.map_or(true, |(min, max)| {
                (min..=max).contains(&input.chars().count())
            })
    }
}

/// Prefixes a loose base58 family may not claim, longest first.
///
/// Bitcoin's `1` and `3` only hold inside its 26..=35 window: `1` is also
/// the SS58 mainnet prefix, and both start ordinary Solana keys.
pub const RESERVED_PREFIXES: &[ReservedPrefix] = &[
    ReservedPrefix::new("tltc1", Network::Litecoin),
    ReservedPrefix::new("ltc1", Network::Litecoin),
    ReservedPrefix::new("bc1", Network::Bitcoin),
    ReservedPrefix::new("tb1", Network::Bitcoin),
    ReservedPrefix::new("1", Network::Bitcoin).within(26, 35),
    ReservedPrefix::new("3", Network::Bitcoin).within(26, 35),
    ReservedPrefix::new("L", Network::Litecoin),
    ReservedPrefix::new("M", Network::Litecoin),
    ReservedPrefix::new("r", Network::Ripple),
    ReservedPrefix::new("T", Network::Tron),
];

/// Bech32 human-readable parts of the Cosmos family and the chain each names.
pub const COSMOS_CHAINS: &[(&str, &str)] = &[
    ("cosmos", "Cosmos Hub"),
    ("osmo", "Osmosis"),
    ("juno", "Juno"),
    ("axelar", "Axelar"),
    ("stars", "Stargaze"),
    ("celestia", "Celestia"),
    ("akash", "Akash"),
    ("kava", "Kava"),
    ("secret", "Secret Network"),
    ("inj", "Injective"),
];

/// Compiled patterns.
#[derive(Debug)]
pub struct Registry {
    compiled: Vec<(PatternId, Regex)>,
}

impl Registry {
    /// Compile the whole table.
    pub fn compile() -> Result<Self, regex::Error> {
        let compiled = sources()
            .into_iter()
            .map(|(id, source)| Regex::new(&source).map(|re| (id, re)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { compiled })
    }

    /// Look up a compiled pattern.
    pub fn get(&self, id: PatternId) -> &Regex {
        // The table is built in declaration order.
        let (found, re) = &self.compiled[id as usize];
        debug_assert_eq!(*found, id);
        re
    }

    pub fn is_match(&self, id: PatternId, input: &str) -> bool {
        self.get(id).is_match(input)
    }
}

static REGISTRY: Lazy<Result<Registry, String>> =
    Lazy::new(|| Registry::compile().map_err(|e| e.to_string()));

/// The process-wide registry.
pub fn registry() -> Result<&'static Registry, EngineError> {
    REGISTRY
        .as_ref()
        .map_err(|e| EngineError::Registry(e.clone()))
}
