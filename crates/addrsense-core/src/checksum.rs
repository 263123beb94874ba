//! Checksum validators: EIP-55 mixed-case hex, ICAN mod-97, and the
//! Base58Check payload decoder used by the UTXO families.

use sha2::{Digest, Sha256};
use sha3::Keccak256;

use crate::error::ChecksumError;

/// Number of hex digits in an EVM address body.
pub const HEX_BODY_LEN: usize = 40;

/// Keccak-256 digest of `bytes`.
pub fn keccak256(bytes: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(bytes);
    let result = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&result);
    out
}

fn hex_body(address: &str) -> Result<&str, ChecksumError> {
    let body = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address);
    if body.len() != HEX_BODY_LEN {
        return Err(ChecksumError::InvalidLength {
            expected: HEX_BODY_LEN,
            actual: body.len(),
        });
    }
    if let Some(bad) = body.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ChecksumError::InvalidCharacter(bad));
    }
    Ok(body)
}

/// Nibbles of the Keccak-256 hash of the lower-cased body, one per hex digit.
fn checksum_nibbles(body: &str) -> Vec<u8> {
    let digest = keccak256(body.to_ascii_lowercase().as_bytes());
    digest
        .iter()
        .flat_map(|byte| [byte >> 4, byte & 0x0f])
        .take(HEX_BODY_LEN)
        .collect()
}

/// True when every letter in the body has the same case (or there are no
/// letters). Such addresses carry no checksum information.
pub fn is_uniform_case(address: &str) -> bool {
    let body = address.strip_prefix("0x").unwrap_or(address);
    let has_upper = body.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = body.chars().any(|c| c.is_ascii_lowercase());
    !(has_upper && has_lower)
}

/// Verify the EIP-55 letter-case checksum of a `0x`-prefixed (or bare)
/// 40-digit hex address.
///
/// A letter must be upper-case exactly when the matching hash nibble is
/// greater than 7. Digits are unconstrained.
pub fn verify_eip55(address: &str) -> Result<bool, ChecksumError> {
    let body = hex_body(address)?;
    let nibbles = checksum_nibbles(body);

    Ok(body.chars().zip(nibbles).all(|(ch, nibble)| {
        if ch.is_ascii_alphabetic() {
            ch.is_ascii_uppercase() == (nibble > 7)
        } else {
            true
        }
    }))
}

/// Encode a 40-digit hex address in EIP-55 form (with `0x` prefix).
pub fn to_checksum_address(address: &str) -> Result<String, ChecksumError> {
    let body = hex_body(address)?.to_ascii_lowercase();
    let nibbles = checksum_nibbles(&body);

    let mut out = String::with_capacity(2 + HEX_BODY_LEN);
    out.push_str("0x");
    for (ch, nibble) in body.chars().zip(nibbles) {
        if ch.is_ascii_alphabetic() && nibble > 7 {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
    }
    Ok(out)
}

/// Map an ICAN string to its decimal form: upper-case, move the first four
/// characters to the end, and replace each letter with two digits
/// (`A` = 10 ... `Z` = 35).
fn ican_digits(address: &str) -> Result<String, ChecksumError> {
    let upper = address.to_ascii_uppercase();
    if upper.len() < 4 || !upper.is_char_boundary(4) {
        return Err(ChecksumError::InvalidLength {
            expected: 4,
            actual: upper.len(),
        });
    }
    let (head, tail) = upper.split_at(4);

    let mut digits = String::with_capacity(upper.len() * 2);
    for ch in tail.chars().chain(head.chars()) {
        match ch {
            '0'..='9' => digits.push(ch),
            'A'..='Z' => digits.push_str(&(ch as u32 - 'A' as u32 + 10).to_string()),
            other => return Err(ChecksumError::InvalidCharacter(other)),
        }
    }
    Ok(digits)
}

/// The mod-97 remainder of an ICAN address.
///
/// Works through the digit string in nine-digit blocks, carrying each
/// block's remainder into the next, so no intermediate exceeds `u64`.
pub fn ican_remainder(address: &str) -> Result<u32, ChecksumError> {
    let mut remaining = ican_digits(address)?;

    while remaining.len() > 2 {
        let split = remaining.len().min(9);
        let (block, rest) = remaining.split_at(split);
        let value: u64 = block
            .parse()
            .map_err(|_| ChecksumError::InvalidCharacter(block.chars().next().unwrap_or('?')))?;
        remaining = format!("{}{}", value % 97, rest);
    }

    let value: u32 = remaining
        .parse()
        .map_err(|_| ChecksumError::InvalidCharacter('?'))?;
    Ok(value % 97)
}

/// Whether an ICAN address passes the mod-97 check.
pub fn verify_ican(address: &str) -> Result<bool, ChecksumError> {
    Ok(ican_remainder(address)? == 1)
}

/// Compute the two check digits that make `prefix || digits || body` valid.
///
/// `prefix` is the two-letter network prefix and `body` the account part.
pub fn ican_check_digits(prefix: &str, body: &str) -> Result<String, ChecksumError> {
    let candidate = format!("{prefix}00{body}");
    let remainder = ican_remainder(&candidate)?;
    Ok(format!("{:02}", 98 - remainder))
}

/// Group an electronic-format ICAN into blocks of four separated by
/// non-breaking spaces.
pub fn ican_print_format(electronic: &str) -> String {
    electronic
        .chars()
        .collect::<Vec<_>>()
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\u{00A0}")
}

/// Decode a Base58Check string and return the payload (without the
/// checksum) when the double SHA-256 checksum matches.
pub fn decode_base58check(input: &str) -> Option<Vec<u8>> {
    let bytes = bs58::decode(input).into_vec().ok()?;
    if bytes.len() < 5 {
        return None;
    }

    let checksum_start = bytes.len() - 4;
    let (payload, provided) = bytes.split_at(checksum_start);
    let computed = double_sha256_checksum(payload);
    if provided != computed {
        return None;
    }
    Some(payload.to_vec())
}

/// First four bytes of SHA-256(SHA-256(payload)).
pub fn double_sha256_checksum(payload: &[u8]) -> [u8; 4] {
    let first = Sha256::digest(payload);
    let second = Sha256::digest(first);
    let mut checksum = [0u8; 4];
    checksum.copy_from_slice(&second[..4]);
    checksum
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_keccak_empty() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_eip55_known_vectors() {
        for addr in [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
            "0x4838B106FCe9647Bdf1E7877BF73cE8B0BAD5f97",
        ] {
            assert!(verify_eip55(addr).unwrap(), "{addr}");
            assert_eq!(to_checksum_address(&addr.to_lowercase()).unwrap(), addr);
        }
    }

    #[test]
    fn test_eip55_uniform_vectors_that_happen_to_verify() {
        assert!(verify_eip55("0x52908400098527886E0F7030069857D2E4169EE7").unwrap());
        assert!(verify_eip55("0xde709f2102306220921060314715629080e2fb77").unwrap());
    }

    #[test]
    fn test_eip55_case_flip_fails() {
        assert!(!verify_eip55("0x5AAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").unwrap());
        assert!(!verify_eip55("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap());
    }

    #[test]
    fn test_eip55_rejects_bad_body() {
        assert!(matches!(
            verify_eip55("0x1234"),
            Err(ChecksumError::InvalidLength { actual: 4, .. })
        ));
        assert!(matches!(
            verify_eip55("0xg000000000000000000000000000000000000000"),
            Err(ChecksumError::InvalidCharacter('g'))
        ));
    }

    #[test]
    fn test_uniform_case() {
        assert!(is_uniform_case("0xabcdef0000000000000000000000000000000000"));
        assert!(is_uniform_case("0xABCDEF0000000000000000000000000000000000"));
        assert!(is_uniform_case("0x0000000000000000000000000000000000000000"));
        assert!(!is_uniform_case("0xAbcdef0000000000000000000000000000000000"));
    }

    #[test]
    fn test_ican_known_addresses() {
        assert!(verify_ican("cb7147879011ea207df5b35a24ca6f0859dcfb145999").unwrap());
        assert!(verify_ican("CB7147879011EA207DF5B35A24CA6F0859DCFB145999").unwrap());
        assert!(verify_ican("ab792215c43fc213c02182c8389f2bc32408e2c50922").unwrap());
        assert!(verify_ican("ce450000000000000000000000000000000000000000").unwrap());
    }

    #[test]
    fn test_ican_corruption_detected() {
        assert!(!verify_ican("cb7147879011ea207df5b35a24ca6f0859dcfb145998").unwrap());
        assert!(!verify_ican("cb7247879011ea207df5b35a24ca6f0859dcfb145999").unwrap());
    }

    #[test]
    fn test_ican_check_digits_roundtrip() {
        let body = "47879011ea207df5b35a24ca6f0859dcfb145999";
        assert_eq!(ican_check_digits("cb", body).unwrap(), "71");
        assert_eq!(
            ican_check_digits("ce", "0000000000000000000000000000000000000000").unwrap(),
            "45"
        );
    }

    #[test]
    fn test_ican_rejects_non_alphanumeric() {
        assert_eq!(
            ican_remainder("cb71-7879"),
            Err(ChecksumError::InvalidCharacter('-'))
        );
    }

    #[test]
    fn test_print_format_groups_by_four() {
        let printed = ican_print_format("CB7147879011");
        assert_eq!(printed, "CB71\u{00A0}4787\u{00A0}9011");
    }

    #[test]
    fn test_base58check_decode() {
        let payload = decode_base58check("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa").unwrap();
        assert_eq!(payload.len(), 21);
        assert_eq!(payload[0], 0x00);

        assert!(decode_base58check("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNb").is_none());
        assert!(decode_base58check("0OIl").is_none());
    }

    proptest! {
        #[test]
        fn checksum_encoding_verifies(body in "[0-9a-f]{40}") {
            let encoded = to_checksum_address(&body).unwrap();
            prop_assert!(verify_eip55(&encoded).unwrap());
            prop_assert_eq!(encoded.to_lowercase(), format!("0x{body}"));
        }

        #[test]
        fn computed_check_digits_verify(body in "[0-9a-f]{40}") {
            let digits = ican_check_digits("cb", &body).unwrap();
            let address = format!("cb{digits}{body}");
            prop_assert!(verify_ican(&address).unwrap());
        }
    }
}
