//! Proptest generators for property-based testing.

use proptest::prelude::*;

use addrsense_core::checksum::{ican_check_digits, to_checksum_address};
use addrsense_core::registry::RESERVED_PREFIXES;

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Generate a lower-case 40-digit hex body.
pub fn hex_body() -> impl Strategy<Value = String> {
    "[0-9a-f]{40}".prop_map(String::from)
}

/// Generate a hex body containing at least one letter.
pub fn hex_body_with_letter() -> impl Strategy<Value = String> {
    hex_body().prop_filter("needs a letter", |body| {
        body.chars().any(|c| c.is_ascii_alphabetic())
    })
}

/// Generate an EIP-55 checksummed EVM address.
pub fn checksummed_evm() -> impl Strategy<Value = String> {
    hex_body_with_letter()
        .prop_filter_map("body must encode", |body| to_checksum_address(&body).ok())
}

/// Flip the case of the `n`th letter (modulo the letter count) of a hex address.
pub fn flip_letter_case(address: &str, n: usize) -> String {
    let body_start = if address.starts_with("0x") { 2 } else { 0 };
    let letters: Vec<usize> = address
        .char_indices()
        .skip(body_start)
        .filter(|(_, c)| c.is_ascii_alphabetic())
        .map(|(i, _)| i)
        .collect();
    if letters.is_empty() {
        return address.to_string();
    }
    let target = letters[n % letters.len()];
    address
        .char_indices()
        .map(|(i, c)| {
            if i != target {
                c
            } else if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}

/// Generate an ICAN network prefix.
pub fn ican_prefix() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("cb"), Just("ab"), Just("ce")]
}

/// Generate an ICAN address with correct check digits.
pub fn ican_address() -> impl Strategy<Value = String> {
    (ican_prefix(), hex_body()).prop_filter_map("check digits", |(prefix, body)| {
        ican_check_digits(prefix, &body)
            .ok()
            .map(|digits| format!("{prefix}{digits}{body}"))
    })
}

/// Replace the character at `index` (from 2 on) with a different one of the
/// same class: digits stay digits, hex letters stay hex letters.
pub fn corrupt_ican(address: &str, index: usize, shift: u8) -> String {
    let bytes = address.as_bytes();
    let index = 2 + index % (bytes.len() - 2);
    let shift = 1 + shift % 5;
    let mut out = bytes.to_vec();
    out[index] = match bytes[index] {
        d @ b'0'..=b'9' => b'0' + (d - b'0' + shift) % 10,
        l @ b'a'..=b'f' => b'a' + (l - b'a' + shift) % 6,
        l @ b'A'..=b'F' => b'A' + (l - b'A' + shift) % 6,
        other => other,
    };
    String::from_utf8(out).unwrap_or_else(|_| address.to_string())
}

/// Generate a base58 string of the given length range.
pub fn base58_string(len: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    let alphabet: Vec<char> = BASE58_ALPHABET.chars().collect();
    prop::collection::vec(prop::sample::select(alphabet), len)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Generate a string that starts with a reserved prefix, sized to the
/// prefix's own length window and the loose base58 windows.
pub fn reserved_prefixed() -> impl Strategy<Value = String> {
    let cases: Vec<(&'static str, usize, usize)> = RESERVED_PREFIXES
        .iter()
        .map(|reserved| {
            let (min, max) = reserved.lengths.unwrap_or((28, 48));
            (reserved.prefix, min.max(28), max.min(48))
        })
        .collect();
    prop::sample::select(cases).prop_flat_map(|(prefix, min, max)| {
        base58_string(min - prefix.len()..=max - prefix.len())
            .prop_map(move |tail| format!("{prefix}{tail}"))
    })
}

/// Generate a plausible name-service label.
pub fn domain_label() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9-]{0,20}[a-z0-9]".prop_map(String::from)
}

/// Generate arbitrary printable junk.
pub fn junk() -> impl Strategy<Value = String> {
    "\\PC{0,80}".prop_map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_letter_case() {
        assert_eq!(flip_letter_case("0xaB00", 0), "0xAB00");
        assert_eq!(flip_letter_case("0xaB00", 1), "0xab00");
        assert_eq!(flip_letter_case("0x0000", 3), "0x0000");
    }

    #[test]
    fn test_corrupt_ican_stays_in_class() {
        let address = "cb7147879011ea207df5b35a24ca6f0859dcfb145999";
        let corrupted = corrupt_ican(address, 0, 0);
        assert_eq!(&corrupted[..2], "cb");
        assert_eq!(&corrupted[2..3], "8");
        assert_eq!(corrupted.len(), address.len());

        // Offset 10 past the prefix is the 'e' of "11ea".
        let corrupted = corrupt_ican(address, 10, 0);
        assert_eq!(&corrupted[12..13], "f");
    }

    proptest! {
        #[test]
        fn ican_generator_produces_valid_addresses(address in ican_address()) {
            prop_assert!(addrsense_core::verify_ican(&address).unwrap());
        }

        #[test]
        fn reserved_prefixed_fits_window(s in reserved_prefixed()) {
            let len = s.chars().count();
            prop_assert!((28..=48).contains(&len));
            prop_assert!(RESERVED_PREFIXES.iter().any(|r| r.covers(&s)), "{}", s);
        }
    }
}
