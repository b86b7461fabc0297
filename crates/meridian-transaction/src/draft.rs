//! The unsigned transaction draft and its canonical serialization.
//!
//! A draft is serialized into a versioned, deterministic byte layout
//! ("the blob") that is independently signable and hash-verifiable:
//! identical drafts always produce byte-identical output. The layout
//! embeds no timestamps and has a fixed field order.

use meridian_primitives::hash::sha256;
use meridian_primitives::util::{VarInt, WireReader, WireWriter};
use serde_json::{json, Map, Value};

use crate::operation::Operation;
use crate::TransactionError;

/// Current blob format version.
const FORMAT_VERSION: u8 = 1;

/// An unsigned Meridian transaction.
///
/// # Wire format (version 1)
///
/// | Field            | Size                          |
/// |------------------|-------------------------------|
/// | format version   | 1 byte                        |
/// | source_address   | VarInt length + UTF-8 bytes   |
/// | nonce            | 8 bytes (LE)                  |
/// | ceil_ledger_seq  | 8 bytes (LE)                  |
/// | fee_limit        | 8 bytes (LE)                  |
/// | gas_price        | 8 bytes (LE)                  |
/// | metadata         | VarInt length + bytes         |
/// | operation count  | VarInt                        |
/// | operations       | variable (per operation)      |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    /// Address of the account submitting and paying for the transaction.
    pub source_address: String,

    /// Per-account sequence number; must be strictly greater than the
    /// account's last applied nonce.
    pub nonce: i64,

    /// Upper bound ledger height after which the transaction is no
    /// longer valid. Zero means unbounded.
    pub ceil_ledger_seq: i64,

    /// Maximum total fee the source authorizes, in base units.
    pub fee_limit: i64,

    /// Unit gas price offered, in base units.
    pub gas_price: i64,

    /// Opaque metadata attached to the transaction.
    pub metadata: String,

    /// Ordered, non-empty operation sequence.
    pub operations: Vec<Operation>,
}

impl TransactionDraft {
    // -----------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------

    /// Serialize this draft to canonical bytes.
    ///
    /// # Returns
    /// The version-1 wire-format bytes. Deterministic: identical drafts
    /// yield identical output.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = WireWriter::with_capacity(256);
        writer.write_u8(FORMAT_VERSION);
        writer.write_var_bytes(self.source_address.as_bytes());
        writer.write_i64_le(self.nonce);
        writer.write_i64_le(self.ceil_ledger_seq);
        writer.write_i64_le(self.fee_limit);
        writer.write_i64_le(self.gas_price);
        writer.write_var_bytes(self.metadata.as_bytes());
        writer.write_varint(VarInt::from(self.operations.len()));
        for operation in &self.operations {
            operation.write_to(&mut writer);
        }
        writer.into_bytes()
    }

    /// Serialize this draft to a lowercase hex string (the blob).
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    // -----------------------------------------------------------------
    // Deserialization
    // -----------------------------------------------------------------

    /// Parse a draft from canonical bytes.
    ///
    /// Requires the slice to contain exactly one transaction with no
    /// trailing data.
    ///
    /// # Arguments
    /// * `bytes` - The raw blob bytes.
    ///
    /// # Returns
    /// `Ok(TransactionDraft)` on success, or a `TransactionError` if
    /// the data is truncated, malformed, or has trailing bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TransactionError> {
        let mut reader = WireReader::new(bytes);
        let draft = Self::read_from(&mut reader)?;
        if reader.remaining() != 0 {
            return Err(TransactionError::SerializationError(format!(
                "trailing {} bytes after transaction",
                reader.remaining()
            )));
        }
        Ok(draft)
    }

    /// Parse a draft from a hex-encoded blob string.
    ///
    /// # Arguments
    /// * `hex_str` - The hex blob.
    pub fn from_hex(hex_str: &str) -> Result<Self, TransactionError> {
        let bytes = hex::decode(hex_str).map_err(|e| {
            TransactionError::SerializationError(format!("invalid hex: {}", e))
        })?;
        Self::from_bytes(&bytes)
    }

    fn read_from(reader: &mut WireReader) -> Result<Self, TransactionError> {
        let version = reader.read_u8().map_err(read_err)?;
        if version != FORMAT_VERSION {
            return Err(TransactionError::SerializationError(format!(
                "unsupported format version {}",
                version
            )));
        }
        let source_address = read_string(reader)?;
        let nonce = reader.read_i64_le().map_err(read_err)?;
        let ceil_ledger_seq = reader.read_i64_le().map_err(read_err)?;
        let fee_limit = reader.read_i64_le().map_err(read_err)?;
        let gas_price = reader.read_i64_le().map_err(read_err)?;
        let metadata = read_string(reader)?;

        let count = reader.read_varint().map_err(read_err)?.value();
        let mut operations = Vec::with_capacity(count as usize);
        for _ in 0..count {
            operations.push(Operation::read_from(reader)?);
        }

        Ok(TransactionDraft {
            source_address,
            nonce,
            ceil_ledger_seq,
            fee_limit,
            gas_price,
            metadata,
            operations,
        })
    }

    // -----------------------------------------------------------------
    // Transaction hash
    // -----------------------------------------------------------------

    /// Compute the network transaction hash (SHA-256 of the canonical
    /// bytes) as a 64-character lowercase hex string.
    pub fn tx_hash_hex(&self) -> String {
        hex::encode(sha256(&self.to_bytes()))
    }

    // -----------------------------------------------------------------
    // JSON projection
    // -----------------------------------------------------------------

    /// Project this draft into the node's `transaction_json` shape used
    /// by the fee simulation endpoint. Fee fields are omitted — the
    /// simulation's purpose is to quote them.
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("source_address".to_string(), json!(self.source_address));
        obj.insert("nonce".to_string(), json!(self.nonce));
        if self.ceil_ledger_seq > 0 {
            obj.insert("ceil_ledger_seq".to_string(), json!(self.ceil_ledger_seq));
        }
        if !self.metadata.is_empty() {
            obj.insert("metadata".to_string(), json!(self.metadata));
        }
        obj.insert(
            "operations".to_string(),
            Value::Array(self.operations.iter().map(Operation::to_json).collect()),
        );
        Value::Object(obj)
    }
}

fn read_string(reader: &mut WireReader) -> Result<String, TransactionError> {
    let bytes = reader.read_var_bytes().map_err(read_err)?;
    String::from_utf8(bytes.to_vec())
        .map_err(|e| TransactionError::SerializationError(format!("invalid utf-8: {}", e)))
}

fn read_err(e: meridian_primitives::PrimitivesError) -> TransactionError {
    TransactionError::SerializationError(e.to_string())
}
