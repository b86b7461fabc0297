/// Meridian Ledger SDK - Hashing, encoding, and account key primitives.
///
/// This crate provides the foundational building blocks for the Meridian SDK:
/// - Hash functions (SHA-256, SHA-256d)
/// - Base58 and Base58Check encoding/decoding
/// - Wire codec primitives (VarInt, cursor reader/writer)
/// - Ed25519 account keys with Meridian address and key encodings

pub mod hash;
pub mod base58;
pub mod util;
pub mod keys;

mod error;
pub use error::PrimitivesError;
