//! Name-service domain recognition (`label(.label)*.suffix`).
//!
//! Runs ahead of every address recognizer: domain labels share characters
//! with the base58 and bech32 alphabets, so this check has to claim its
//! strings first, and must be exact about its grammar so it never absorbs
//! something that is not a domain.
//!
//! Matching is opt-in. With no configured suffixes nothing is ever treated
//! as a domain, and a string whose suffix is not configured falls through
//! to the address recognizers untouched.

use crate::options::{DomainRule, ResolvedOptions};
use crate::registry::{PatternId, Registry};
use crate::result::NetworkInfo;
use crate::types::{AddressFormat, Metadata, NameServiceMetadata, Network};

/// The suffix-matching form: trimmed, trailing dots dropped, lower-cased.
fn normalize(address: &str) -> String {
    address.trim().trim_end_matches('.').to_lowercase()
}

/// The first configured rule whose suffix `address` ends with.
pub fn match_rule<'a>(address: &str, options: &'a ResolvedOptions) -> Option<&'a DomainRule> {
    let normalized = normalize(address);
    options.ns_domains.iter().find(|rule| {
        normalized == rule.suffix
            || normalized
                .strip_suffix(rule.suffix.as_str())
                .map_or(false, |head| head.ends_with('.'))
    })
}

/// Structural problems, checked in order.
fn format_error(address: &str) -> Option<&'static str> {
    if address != address.trim() {
        return Some("Invalid domain format: leading or trailing whitespace");
    }
    if address.chars().any(char::is_whitespace) {
        return Some("Invalid domain format: embedded whitespace");
    }
    if address.contains("..") {
        return Some("Invalid domain format: consecutive dots");
    }
    if address.starts_with('.') || address.ends_with('.') {
        return Some("Invalid domain format: leading or trailing dot");
    }
    None
}

/// Classify `address` as a name-service domain.
///
/// Returns `None` when no configured suffix matches, leaving the string to
/// the address recognizers.
pub fn recognize(
    address: &str,
    options: &ResolvedOptions,
    registry: &Registry,
) -> Option<NetworkInfo> {
    let rule = match_rule(address, options)?;

    let total = address.chars().count();
    if total > rule.max_total_length {
        return Some(NetworkInfo::invalid(
            Network::Ns,
            format!(
                "Domain exceeds maximum length of {} characters",
                rule.max_total_length
            ),
        ));
    }

    if address
        .split('.')
        .any(|label| label.chars().count() > rule.max_label_length)
    {
        return Some(NetworkInfo::invalid(
            Network::Ns,
            format!(
                "Domain label exceeds maximum length of {} characters",
                rule.max_label_length
            ),
        ));
    }

    if let Some(reason) = format_error(address) {
        return Some(NetworkInfo::invalid(Network::Ns, reason));
    }

    if !registry.is_match(PatternId::NsDomain, address) {
        return Some(NetworkInfo::invalid(Network::Ns, "Invalid domain format"));
    }

    let is_emoji = registry.is_match(PatternId::Emoji, address);
    let labels = address.split('.').count();
    let metadata = Metadata::NameService(NameServiceMetadata {
        format: AddressFormat::Domain,
        domain: rule.suffix.clone(),
        is_subdomain: labels.saturating_sub(rule.label_count()) > 1,
        is_emoji,
    });

    if is_emoji && !rule.emoji_allowed {
        let reason = if rule.emoji_overridden {
            format!("Emoji characters are not allowed in .{} domains", rule.suffix)
        } else {
            "Emoji characters are not allowed".to_string()
        };
        return Some(NetworkInfo::invalid(Network::Ns, reason).with_metadata(metadata));
    }

    Some(NetworkInfo::valid(
        Network::Ns,
        format!("Name service domain (.{})", rule.suffix),
        metadata,
    ))
}
