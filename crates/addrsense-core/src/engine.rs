//! The public entry point: input and option checks, then disambiguation,
//! with every internal fault folded into a result.

use crate::disambiguator::classify;
use crate::options::{ResolvedOptions, ValidationOptions};
use crate::result::NetworkInfo;

/// Classify `address` under `options`.
///
/// Never fails. Blank input, malformed options and internal faults all come
/// back as a `NetworkInfo` with `network: None` and a descriptive reason.
pub fn validate(address: &str, options: &ValidationOptions, force_checksum: bool) -> NetworkInfo {
    if address.trim().is_empty() {
        return NetworkInfo::invalid_input();
    }

    match options.resolve() {
        Ok(resolved) => validate_resolved(address, &resolved, force_checksum),
        Err(err) => NetworkInfo::invalid_options(&err),
    }
}

/// Like [`validate`], for options that were resolved ahead of time.
pub fn validate_resolved(
    address: &str,
    options: &ResolvedOptions,
    force_checksum: bool,
) -> NetworkInfo {
    if address.trim().is_empty() {
        return NetworkInfo::invalid_input();
    }

    classify(address, options, force_checksum)
        .unwrap_or_else(|err| NetworkInfo::internal_failure(&err))
}
