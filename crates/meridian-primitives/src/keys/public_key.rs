//! Ed25519 public key with the Meridian hex encoding and address derivation.

use ed25519_dalek::{Signature, Verifier, VerifyingKey};

use crate::base58;
use crate::hash::{sha256, sha256d};
use crate::keys::{ADDRESS_PREFIX, KEY_TYPE_ED25519, PUBLIC_KEY_PREFIX};
use crate::PrimitivesError;

/// Length of the raw Ed25519 public key in bytes.
const RAW_LEN: usize = 32;

/// Encoded public key byte length: prefix + type tag + raw key + checksum.
const ENCODED_LEN: usize = 1 + 1 + RAW_LEN + 4;

/// An Ed25519 public key for signature verification and address derivation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    raw: [u8; RAW_LEN],
}

impl PublicKey {
    /// Create a public key from raw 32-byte Ed25519 key material.
    pub fn from_raw(raw: [u8; RAW_LEN]) -> Self {
        PublicKey { raw }
    }

    /// Decode a public key from its Meridian hex string encoding.
    ///
    /// The encoding is `hex(prefix + type tag + 32 raw bytes + 4-byte
    /// SHA-256d checksum)`, 76 hex characters total. The raw bytes must
    /// additionally decode to a valid Ed25519 curve point.
    ///
    /// # Arguments
    /// * `encoded` - The hex-encoded public key string.
    ///
    /// # Returns
    /// `Ok(PublicKey)` on success, or an error describing the defect.
    pub fn from_encoded(encoded: &str) -> Result<Self, PrimitivesError> {
        if encoded.is_empty() {
            return Err(PrimitivesError::InvalidPublicKey(
                "public key string is empty".to_string(),
            ));
        }
        let bytes = hex::decode(encoded)
            .map_err(|e| PrimitivesError::InvalidPublicKey(format!("invalid hex: {}", e)))?;
        if bytes.len() != ENCODED_LEN {
            return Err(PrimitivesError::InvalidPublicKey(format!(
                "expected {} bytes, got {}",
                ENCODED_LEN,
                bytes.len()
            )));
        }
        if bytes[0] != PUBLIC_KEY_PREFIX {
            return Err(PrimitivesError::InvalidPublicKey(
                "wrong version prefix".to_string(),
            ));
        }
        if bytes[1] != KEY_TYPE_ED25519 {
            return Err(PrimitivesError::InvalidPublicKey(
                "unknown key type".to_string(),
            ));
        }
        let (payload, checksum) = bytes.split_at(ENCODED_LEN - 4);
        if checksum != &sha256d(payload)[..4] {
            return Err(PrimitivesError::ChecksumMismatch);
        }
        let mut raw = [0u8; RAW_LEN];
        raw.copy_from_slice(&payload[2..]);
        // Reject encodings that pass the checksum but are not valid curve points.
        VerifyingKey::from_bytes(&raw)
            .map_err(|_| PrimitivesError::InvalidPublicKey("not a valid point".to_string()))?;
        Ok(PublicKey { raw })
    }

    /// Encode the public key as a lowercase Meridian hex string.
    pub fn to_encoded(&self) -> String {
        let mut payload = Vec::with_capacity(ENCODED_LEN);
        payload.push(PUBLIC_KEY_PREFIX);
        payload.push(KEY_TYPE_ED25519);
        payload.extend_from_slice(&self.raw);
        let checksum = sha256d(&payload);
        payload.extend_from_slice(&checksum[..4]);
        hex::encode(payload)
    }

    /// Derive the Meridian account address for this public key.
    ///
    /// The address payload is the version prefix, the key-type tag, and
    /// the trailing 20 bytes of SHA-256 of the raw public key,
    /// Base58Check-encoded.
    pub fn to_address(&self) -> String {
        let digest = sha256(&self.raw);
        let mut payload = Vec::with_capacity(2 + 1 + 20);
        payload.extend_from_slice(&ADDRESS_PREFIX);
        payload.push(KEY_TYPE_ED25519);
        payload.extend_from_slice(&digest[12..]);
        base58::check_encode(&payload)
    }

    /// Return the raw 32-byte key material.
    pub fn as_raw(&self) -> &[u8; RAW_LEN] {
        &self.raw
    }

    /// Verify a detached 64-byte signature over a message.
    ///
    /// Returns `false` for any invalid signature, including key material
    /// that does not decode to a curve point.
    pub fn verify(&self, message: &[u8], signature: &[u8; 64]) -> bool {
        let Ok(key) = VerifyingKey::from_bytes(&self.raw) else {
            return false;
        };
        key.verify(message, &Signature::from_bytes(signature)).is_ok()
    }
}
