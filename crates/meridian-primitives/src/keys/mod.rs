//! Ed25519 account keys with Meridian-specific encodings.
//!
//! Meridian accounts are Ed25519 keypairs. The network uses three
//! string encodings, each carrying a version prefix, a key-type tag,
//! and a 4-byte double-SHA-256 checksum:
//!
//! | Encoding    | Form                                                       |
//! |-------------|------------------------------------------------------------|
//! | private key | Base58Check(`0xda 0x4d` + `0x01` + 32 seed bytes)          |
//! | public key  | hex(`0xb0` + `0x01` + 32 public bytes + checksum)          |
//! | address     | Base58Check(`0x0f 0x4d` + `0x01` + SHA-256(pub)[12..32])   |
//!
//! The `check_*` predicates validate these formats without exposing key
//! material and are what the client layer consumes for request
//! validation.

mod private_key;
mod public_key;

pub use private_key::PrivateKey;
pub use public_key::PublicKey;

use crate::base58;
use crate::PrimitivesError;

/// Version prefix bytes of an encoded private key.
pub(crate) const PRIVATE_KEY_PREFIX: [u8; 2] = [0xda, 0x4d];

/// Version prefix byte of an encoded public key.
pub(crate) const PUBLIC_KEY_PREFIX: u8 = 0xb0;

/// Version prefix bytes of an encoded address.
pub(crate) const ADDRESS_PREFIX: [u8; 2] = [0x0f, 0x4d];

/// Key-type tag for Ed25519, the only signature scheme currently defined.
pub(crate) const KEY_TYPE_ED25519: u8 = 0x01;

/// Decoded address payload length: 2-byte prefix + type tag + 20-byte digest.
pub(crate) const ADDRESS_PAYLOAD_LEN: usize = 23;

/// Check whether a string is a well-formed Meridian account address.
///
/// Validates the Base58Check checksum, payload length, version prefix,
/// and key-type tag. Pure predicate; performs no I/O.
pub fn check_address(address: &str) -> bool {
    decode_address(address).is_ok()
}

/// Check whether a string is a well-formed encoded private key.
///
/// Pure predicate; the key material is decoded only to validate format
/// and is not retained.
pub fn check_private_key(private_key: &str) -> bool {
    PrivateKey::from_encoded(private_key).is_ok()
}

/// Check whether a string is a well-formed encoded public key.
pub fn check_public_key(public_key: &str) -> bool {
    PublicKey::from_encoded(public_key).is_ok()
}

/// Decode and validate an encoded address, returning its 20-byte digest.
pub(crate) fn decode_address(address: &str) -> Result<[u8; 20], PrimitivesError> {
    let payload = base58::check_decode(address)
        .map_err(|e| PrimitivesError::InvalidAddress(e.to_string()))?;
    if payload.len() != ADDRESS_PAYLOAD_LEN {
        return Err(PrimitivesError::InvalidAddress(format!(
            "expected {} payload bytes, got {}",
            ADDRESS_PAYLOAD_LEN,
            payload.len()
        )));
    }
    if payload[..2] != ADDRESS_PREFIX {
        return Err(PrimitivesError::InvalidAddress(
            "wrong version prefix".to_string(),
        ));
    }
    if payload[2] != KEY_TYPE_ED25519 {
        return Err(PrimitivesError::InvalidAddress(
            "unknown key type".to_string(),
        ));
    }
    let mut digest = [0u8; 20];
    digest.copy_from_slice(&payload[3..]);
    Ok(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_key_encodings_validate() {
        let private = PrivateKey::generate();
        let public = private.public_key();

        assert!(check_private_key(&private.to_encoded()));
        assert!(check_public_key(&public.to_encoded()));
        assert!(check_address(&public.to_address()));
    }

    #[test]
    fn test_check_address_rejects_garbage() {
        assert!(!check_address(""));
        assert!(!check_address("not-an-address"));
        assert!(!check_address("1111111111111111111111111"));
    }

    #[test]
    fn test_check_address_rejects_corrupted_checksum() {
        let address = PrivateKey::generate().public_key().to_address();
        let mut chars: Vec<char> = address.chars().collect();
        let last = chars.len() - 1;
        chars[last] = if chars[last] == '2' { '3' } else { '2' };
        let corrupted: String = chars.into_iter().collect();
        assert!(!check_address(&corrupted));
    }

    #[test]
    fn test_check_private_key_rejects_public_key() {
        let private = PrivateKey::generate();
        // Wrong encoding family entirely.
        assert!(!check_private_key(&private.public_key().to_encoded()));
    }

    #[test]
    fn test_check_public_key_rejects_truncation() {
        let encoded = PrivateKey::generate().public_key().to_encoded();
        assert!(!check_public_key(&encoded[..encoded.len() - 2]));
    }

    #[test]
    fn test_sign_verify_roundtrip() {
        let private = PrivateKey::generate();
        let public = private.public_key();
        let msg = b"canonical transaction bytes";
        let sig = private.sign(msg);
        assert!(public.verify(msg, &sig));
        assert!(!public.verify(b"different bytes", &sig));
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let private = PrivateKey::generate();
        let encoded = private.to_encoded();
        let restored = PrivateKey::from_encoded(&encoded).unwrap();
        assert_eq!(
            private.public_key().to_encoded(),
            restored.public_key().to_encoded()
        );
        assert_eq!(
            private.public_key().to_address(),
            restored.public_key().to_address()
        );
    }

    #[test]
    fn test_signatures_are_deterministic() {
        // Ed25519 signatures are deterministic for a fixed key and message.
        let private = PrivateKey::generate();
        assert_eq!(private.sign(b"msg"), private.sign(b"msg"));
    }
}
