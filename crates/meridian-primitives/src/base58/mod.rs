//! Base58 encoding and decoding with optional checksum support.
//!
//! Provides raw Base58 encode/decode and Base58Check encode/decode
//! (with double-SHA-256 checksum) used for Meridian private keys and
//! account addresses.

use crate::hash::sha256d;
use crate::PrimitivesError;

/// Encode a byte slice to a Base58 string.
///
/// Uses the Bitcoin-style Base58 alphabet (no 0, O, I, l). Leading zero
/// bytes are encoded as leading '1' characters.
///
/// # Arguments
/// * `data` - The bytes to encode.
///
/// # Returns
/// A Base58-encoded string.
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data).with_alphabet(bs58::Alphabet::BITCOIN).into_string()
}

/// Decode a Base58 string to a byte vector.
///
/// # Arguments
/// * `s` - The Base58 string to decode.
///
/// # Returns
/// `Ok(Vec<u8>)` on success, or an error for invalid characters.
pub fn decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    bs58::decode(s)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
        .map_err(|e| PrimitivesError::InvalidBase58(e.to_string()))
}

/// Encode a byte slice with a 4-byte double-SHA-256 checksum appended (Base58Check).
///
/// The checksum is the first 4 bytes of SHA-256d(data). The result
/// is `encode(data || checksum)`.
///
/// # Arguments
/// * `data` - The bytes to encode (version prefix + payload).
///
/// # Returns
/// A Base58Check-encoded string.
pub fn check_encode(data: &[u8]) -> String {
    let checksum = sha256d(data);
    let mut payload = data.to_vec();
    payload.extend_from_slice(&checksum[..4]);
    encode(&payload)
}

/// Decode a Base58Check string, verifying the 4-byte checksum.
///
/// Strips and validates the trailing 4-byte double-SHA-256 checksum.
///
/// # Arguments
/// * `s` - The Base58Check string to decode.
///
/// # Returns
/// `Ok(Vec<u8>)` of the payload (without checksum) on success, or an
/// error for invalid encoding or checksum mismatch.
pub fn check_decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    let decoded = decode(s)?;
    if decoded.len() < 4 {
        return Err(PrimitivesError::InvalidBase58(
            "data too short for checksum".to_string(),
        ));
    }
    let (payload, checksum) = decoded.split_at(decoded.len() - 4);
    let expected = sha256d(payload);
    if checksum != &expected[..4] {
        return Err(PrimitivesError::ChecksumMismatch);
    }
    Ok(payload.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base58_empty() {
        assert_eq!(encode(&[]), "");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_base58_leading_zero() {
        assert_eq!(encode(&[0x00]), "1");
        assert_eq!(decode("1").unwrap(), vec![0x00]);
    }

    #[test]
    fn test_base58_roundtrip() {
        let input = hex::decode("0f4d01deadbeefcafebabe00112233445566778899").unwrap();
        let encoded = encode(&input);
        assert_eq!(decode(&encoded).unwrap(), input);
    }

    #[test]
    fn test_base58_rejects_invalid_char() {
        // '0' and 'O' are not in the alphabet
        assert!(decode("0OIl").is_err());
    }

    #[test]
    fn test_check_encode_roundtrip() {
        let payload = b"meridian payload";
        let encoded = check_encode(payload);
        let decoded = check_decode(&encoded).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_check_decode_rejects_corruption() {
        let encoded = check_encode(b"meridian payload");
        // Flip one character; either the base58 decode or the checksum must fail.
        let mut chars: Vec<char> = encoded.chars().collect();
        chars[2] = if chars[2] == '2' { '3' } else { '2' };
        let corrupted: String = chars.into_iter().collect();
        assert!(check_decode(&corrupted).is_err());
    }

    #[test]
    fn test_check_decode_too_short() {
        // "1" decodes to a single zero byte, shorter than a checksum.
        assert!(check_decode("1").is_err());
    }
}
