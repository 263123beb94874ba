//! Caller configuration: shape validation, semantic checks, and resolution
//! into the immutable [`ResolvedOptions`] every stage reads from.

use std::borrow::Cow;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::OptionsError;
use crate::registry::{ReservedPrefix, RESERVED_PREFIXES};
use crate::types::Network;

pub const DEFAULT_MAX_TOTAL_LENGTH: usize = 255;
pub const DEFAULT_MAX_LABEL_LENGTH: usize = 63;

/// Per-domain name-service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainConfig {
    pub domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_total_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_label_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji_allowed: Option<bool>,
}

impl DomainConfig {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Self::default()
        }
    }

    pub fn max_total_length(mut self, len: usize) -> Self {
        self.max_total_length = Some(len);
        self
    }

    pub fn max_label_length(mut self, len: usize) -> Self {
        self.max_label_length = Some(len);
        self
    }

    pub fn emoji_allowed(mut self, allowed: bool) -> Self {
        self.emoji_allowed = Some(allowed);
        self
    }
}

/// A name-service suffix entry: either a bare suffix or a full record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NsDomain {
    Suffix(String),
    Config(DomainConfig),
}

impl From<&str> for NsDomain {
    fn from(suffix: &str) -> Self {
        NsDomain::Suffix(suffix.to_string())
    }
}

impl From<DomainConfig> for NsDomain {
    fn from(config: DomainConfig) -> Self {
        NsDomain::Config(config)
    }
}

/// Caller-supplied configuration. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOptions {
    /// Allowed network identifiers; absent or empty means no restriction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testnet: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled_legacy: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji_allowed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ns_domains: Option<Vec<NsDomain>>,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn networks<I, S>(mut self, networks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.network = Some(networks.into_iter().map(Into::into).collect());
        self
    }

    pub fn testnet(mut self, allowed: bool) -> Self {
        self.testnet = Some(allowed);
        self
    }

    pub fn enabled_legacy(mut self, enabled: bool) -> Self {
        self.enabled_legacy = Some(enabled);
        self
    }

    pub fn emoji_allowed(mut self, allowed: bool) -> Self {
        self.emoji_allowed = Some(allowed);
        self
    }

    pub fn ns_domain(mut self, domain: impl Into<NsDomain>) -> Self {
        self.ns_domains
            .get_or_insert_with(Vec::new)
            .push(domain.into());
        self
    }

    /// Parse untyped configuration, reporting the first malformed field.
    ///
    /// `null` (at the top level or for any field) means "use the default".
    pub fn from_value(value: &Value) -> Result<Self, OptionsError> {
        let obj = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(obj) => obj,
            _ => return Err(OptionsError::NotAnObject),
        };

        let network = match present(obj, "network") {
            None => None,
            Some(Value::Array(items)) => Some(
                items
                    .iter()
                    .map(|item| item.as_str().map(str::to_string))
                    .collect::<Option<Vec<_>>>()
                    .ok_or(OptionsError::NetworkNotStrings)?,
            ),
            Some(_) => return Err(OptionsError::NetworkNotStrings),
        };

        let testnet = optional_bool(obj, "testnet")?;
        let enabled_legacy = optional_bool(obj, "enabledLegacy")?;
        let emoji_allowed = optional_bool(obj, "emojiAllowed")?;

        let ns_domains = match present(obj, "nsDomains") {
            None => None,
            Some(Value::Array(entries)) => Some(
                entries
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| parse_ns_domain(index, entry))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            Some(_) => return Err(OptionsError::NsDomainsNotArray),
        };

        let options = Self {
            network,
            testnet,
            enabled_legacy,
            emoji_allowed,
            ns_domains,
        };
        options.check()?;
        Ok(options)
    }

    /// Semantic checks that typed construction cannot rule out.
    pub fn check(&self) -> Result<(), OptionsError> {
        for (index, entry) in self.ns_domains.iter().flatten().enumerate() {
            match entry {
                NsDomain::Suffix(suffix) => {
                    if normalize_suffix(suffix).is_empty() {
                        return Err(OptionsError::NsDomainEntry(index));
                    }
                }
                NsDomain::Config(config) => {
                    if normalize_suffix(&config.domain).is_empty() {
                        return Err(OptionsError::DomainName(index));
                    }
                    if config.max_total_length == Some(0) {
                        return Err(OptionsError::DomainLength {
                            index,
                            field: "maxTotalLength",
                        });
                    }
                    if config.max_label_length == Some(0) {
                        return Err(OptionsError::DomainLength {
                            index,
                            field: "maxLabelLength",
                        });
                    }
                    if let (Some(label), Some(total)) =
                        (config.max_label_length, config.max_total_length)
                    {
                        if label > total {
                            return Err(OptionsError::LabelExceedsTotal(index));
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Apply every default and produce the configuration stages read from.
    pub fn resolve(&self) -> Result<ResolvedOptions, OptionsError> {
        self.check()?;

        let emoji_allowed = self.emoji_allowed.unwrap_or(true);

        let allowed = match &self.network {
            Some(names) if !names.is_empty() => Some(
                names
                    .iter()
                    .filter_map(|name| name.parse::<Network>().ok())
                    .collect(),
            ),
            _ => None,
        };

        let ns_domains = self
            .ns_domains
            .iter()
            .flatten()
            .map(|entry| match entry {
                NsDomain::Suffix(suffix) => DomainRule {
                    suffix: normalize_suffix(suffix),
                    max_total_length: DEFAULT_MAX_TOTAL_LENGTH,
                    max_label_length: DEFAULT_MAX_LABEL_LENGTH,
                    emoji_allowed,
                    emoji_overridden: false,
                },
                NsDomain::Config(config) => DomainRule {
                    suffix: normalize_suffix(&config.domain),
                    max_total_length: config.max_total_length.unwrap_or(DEFAULT_MAX_TOTAL_LENGTH),
                    max_label_length: config.max_label_length.unwrap_or(DEFAULT_MAX_LABEL_LENGTH),
                    emoji_allowed: config.emoji_allowed.unwrap_or(emoji_allowed),
                    emoji_overridden: config.emoji_allowed.is_some(),
                },
            })
            .collect();

        Ok(ResolvedOptions {
            allowed,
            testnet: self.testnet.unwrap_or(false),
            enabled_legacy: self.enabled_legacy.unwrap_or(true),
            emoji_allowed,
            ns_domains,
            reserved_prefixes: Cow::Borrowed(RESERVED_PREFIXES),
        })
    }
}

/// A name-service suffix with every limit resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainRule {
    /// Lower-cased, without trailing dots.
    pub suffix: String,
    pub max_total_length: usize,
    pub max_label_length: usize,
    pub emoji_allowed: bool,
    /// `emoji_allowed` came from the per-domain record, not the global default.
    pub emoji_overridden: bool,
}

impl DomainRule {
    pub fn label_count(&self) -> usize {
        self.suffix.split('.').count()
    }
}

/// Fully populated, immutable configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    /// `None` means every network is allowed.
    pub allowed: Option<BTreeSet<Network>>,
    pub testnet: bool,
    pub enabled_legacy: bool,
    pub emoji_allowed: bool,
    pub ns_domains: Vec<DomainRule>,
    /// Prefixes the loose base58 families refuse. Defaults to
    /// [`RESERVED_PREFIXES`]; not settable from JSON.
    pub reserved_prefixes: Cow<'static, [ReservedPrefix]>,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Self {
            allowed: None,
            testnet: false,
            enabled_legacy: true,
            emoji_allowed: true,
            ns_domains: Vec::new(),
            reserved_prefixes: Cow::Borrowed(RESERVED_PREFIXES),
        }
    }
}

impl ResolvedOptions {
    pub fn allows(&self, network: Network) -> bool {
        self.allowed
            .as_ref()
            .map_or(true, |allowed| allowed.contains(&network))
    }

    pub fn is_restricted(&self) -> bool {
        self.allowed.is_some()
    }

    /// Replace the reserved-prefix list.
    pub fn with_reserved_prefixes(mut self, prefixes: Vec<ReservedPrefix>) -> Self {
        self.reserved_prefixes = Cow::Owned(prefixes);
        self
    }

    /// The first reserved prefix covering `input`, if any.
    pub fn reserved_prefix(&self, input: &str) -> Option<&ReservedPrefix> {
        self.reserved_prefixes.iter().find(|r| r.covers(input))
    }

    /// The same configuration with the allow-list lifted.
    pub fn unrestricted(&self) -> Self {
        Self {
            allowed: None,
            ..self.clone()
        }
    }
}

fn normalize_suffix(suffix: &str) -> String {
    suffix
        .trim()
        .trim_start_matches('.')
        .trim_end_matches('.')
        .to_lowercase()
}

fn present<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

fn optional_bool(obj: &Map<String, Value>, key: &'static str) -> Result<Option<bool>, OptionsError> {
    match present(obj, key) {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(OptionsError::NotBoolean(key)),
    }
}

fn parse_ns_domain(index: usize, entry: &Value) -> Result<NsDomain, OptionsError> {
    match entry {
        Value::String(suffix) if !suffix.trim().is_empty() => Ok(NsDomain::Suffix(suffix.clone())),
        Value::Object(obj) => {
            let domain = match obj.get("domain") {
                Some(Value::String(d)) if !d.trim().is_empty() => d.clone(),
                _ => return Err(OptionsError::DomainName(index)),
            };
            let emoji_allowed = match present(obj, "emojiAllowed") {
                None => None,
                Some(Value::Bool(b)) => Some(*b),
                Some(_) => return Err(OptionsError::DomainEmojiAllowed(index)),
            };
            Ok(NsDomain::Config(DomainConfig {
                domain,
                max_total_length: positive_integer(obj, index, "maxTotalLength")?,
                max_label_length: positive_integer(obj, index, "maxLabelLength")?,
                emoji_allowed,
            }))
        }
        _ => Err(OptionsError::NsDomainEntry(index)),
    }
}

fn positive_integer(
    obj: &Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<Option<usize>, OptionsError> {
    match present(obj, field) {
        None => Ok(None),
        Some(value) => value
            .as_u64()
            .filter(|n| *n > 0)
            .and_then(|n| usize::try_from(n).ok())
            .map(Some)
            .ok_or(OptionsError::DomainLength { index, field }),
    }
}
