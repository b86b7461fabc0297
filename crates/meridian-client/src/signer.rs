//! Detached signing of encoded transaction blobs.

use meridian_primitives::keys::{check_private_key, PrivateKey};

use crate::error::ClientError;
use crate::types::Signature;

/// Sign an encoded transaction blob with one or more private keys.
///
/// Signing is atomic: every key's format is validated before any
/// cryptographic work, and any failure aborts the call with no partial
/// signature list. The returned signatures mirror the input key order;
/// duplicate keys produce duplicate signatures.
///
/// # Arguments
/// * `blob` - The hex-encoded canonical transaction bytes.
/// * `private_keys` - The encoded private keys to sign with.
///
/// # Returns
/// One [`Signature`] per key, or the first error encountered:
/// [`ClientError::InvalidBlob`] for an empty blob,
/// [`ClientError::MissingPrivateKeys`] for an empty key list,
/// [`ClientError::InvalidPrivateKey`] for a malformed key, and
/// [`ClientError::Internal`] if the blob is not valid hex.
pub fn sign(blob: &str, private_keys: &[&str]) -> Result<Vec<Signature>, ClientError> {
    if blob.is_empty() {
        return Err(ClientError::InvalidBlob);
    }
    if private_keys.is_empty() {
        return Err(ClientError::MissingPrivateKeys);
    }
    for key in private_keys {
        if !check_private_key(key) {
            return Err(ClientError::InvalidPrivateKey);
        }
    }

    // Decode once; every key signs the same raw bytes.
    let raw = hex::decode(blob)
        .map_err(|e| ClientError::Internal(format!("transaction blob is not valid hex: {}", e)))?;

    let mut signatures = Vec::with_capacity(private_keys.len());
    for key in private_keys {
        let private = PrivateKey::from_encoded(key).map_err(|_| ClientError::InvalidPrivateKey)?;
        let sign_data = hex::encode(private.sign(&raw));
        signatures.push(Signature {
            public_key: private.public_key().to_encoded(),
            sign_data,
        });
    }
    Ok(signatures)
}
