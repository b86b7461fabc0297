//! Ed25519 private key with the Meridian string encoding.

use ed25519_dalek::{Signer, SigningKey};
use rand::rngs::OsRng;

use crate::base58;
use crate::keys::public_key::PublicKey;
use crate::keys::{KEY_TYPE_ED25519, PRIVATE_KEY_PREFIX};
use crate::PrimitivesError;

/// Length of the raw Ed25519 seed in bytes.
const SEED_LEN: usize = 32;

/// Decoded private key payload length: 2-byte prefix + type tag + seed.
const PAYLOAD_LEN: usize = 2 + 1 + SEED_LEN;

/// An Ed25519 private key for signing Meridian transactions.
///
/// Wraps an `ed25519-dalek` signing key and provides the Meridian
/// Base58Check string encoding. The public half is re-derived on demand.
#[derive(Clone)]
pub struct PrivateKey {
    inner: SigningKey,
}

impl PrivateKey {
    /// Generate a new random private key using the OS random number generator.
    pub fn generate() -> Self {
        PrivateKey {
            inner: SigningKey::generate(&mut OsRng),
        }
    }

    /// Create a private key from a raw 32-byte seed.
    ///
    /// # Arguments
    /// * `seed` - The 32-byte Ed25519 seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        PrivateKey {
            inner: SigningKey::from_bytes(seed),
        }
    }

    /// Decode a private key from its Meridian Base58Check string encoding.
    ///
    /// Validates the checksum, payload length, version prefix, and
    /// key-type tag.
    ///
    /// # Arguments
    /// * `encoded` - The Base58Check-encoded private key string.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` on success, or an error describing the defect.
    pub fn from_encoded(encoded: &str) -> Result<Self, PrimitivesError> {
        if encoded.is_empty() {
            return Err(PrimitivesError::InvalidPrivateKey(
                "private key string is empty".to_string(),
            ));
        }
        let payload = base58::check_decode(encoded)
            .map_err(|e| PrimitivesError::InvalidPrivateKey(e.to_string()))?;
        if payload.len() != PAYLOAD_LEN {
            return Err(PrimitivesError::InvalidPrivateKey(format!(
                "expected {} payload bytes, got {}",
                PAYLOAD_LEN,
                payload.len()
            )));
        }
        if payload[..2] != PRIVATE_KEY_PREFIX {
            return Err(PrimitivesError::InvalidPrivateKey(
                "wrong version prefix".to_string(),
            ));
        }
        if payload[2] != KEY_TYPE_ED25519 {
            return Err(PrimitivesError::InvalidPrivateKey(
                "unknown key type".to_string(),
            ));
        }
        let mut seed = [0u8; SEED_LEN];
        seed.copy_from_slice(&payload[3..]);
        Ok(Self::from_seed(&seed))
    }

    /// Encode the private key as a Meridian Base58Check string.
    pub fn to_encoded(&self) -> String {
        let mut payload = Vec::with_capacity(PAYLOAD_LEN);
        payload.extend_from_slice(&PRIVATE_KEY_PREFIX);
        payload.push(KEY_TYPE_ED25519);
        payload.extend_from_slice(&self.inner.to_bytes());
        base58::check_encode(&payload)
    }

    /// Derive the corresponding public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_raw(self.inner.verifying_key().to_bytes())
    }

    /// Produce a detached Ed25519 signature over the given message bytes.
    ///
    /// # Arguments
    /// * `message` - The bytes to sign (for transactions, the decoded blob).
    ///
    /// # Returns
    /// The 64-byte signature.
    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        self.inner.sign(message).to_bytes()
    }
}

impl std::fmt::Debug for PrivateKey {
    // Secret bytes stay out of debug output.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrivateKey(pub={})", self.public_key().to_encoded())
    }
}
