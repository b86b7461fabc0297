//! Operation records carried by a transaction.
//!
//! An [`Operation`] is a tagged union: exactly one [`OperationKind`]
//! variant per instance, plus the source address and metadata common to
//! every operation type. The resolver ([`resolve_operations`]) turns a
//! caller-supplied operation list into a validated sequence, failing
//! fast on the first malformed entry.

use meridian_primitives::keys::check_address;
use meridian_primitives::util::{VarInt, WireReader, WireWriter};
use serde_json::{json, Map, Value};

use crate::TransactionError;

/// Maximum length of an asset code in characters.
const MAX_ASSET_CODE_LEN: usize = 64;

/// Maximum length of a metadata key in characters.
const MAX_METADATA_KEY_LEN: usize = 1024;

/// Maximum length of a log topic in characters.
const MAX_LOG_TOPIC_LEN: usize = 128;

/// The variant-specific payload of an operation.
///
/// Exactly one variant is populated per [`Operation`]; the wire and
/// JSON encodings carry the matching [`type_code`](Self::type_code).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationKind {
    /// Create a new account funded from the source account.
    CreateAccount {
        /// Address of the account to create.
        dest_address: String,
        /// Initial balance transferred to the new account, in base units.
        init_balance: i64,
    },
    /// Issue a new asset under the source account as issuer.
    IssueAsset {
        /// Asset code, unique per issuer.
        code: String,
        /// Amount to issue.
        amount: i64,
    },
    /// Transfer units of an issued asset.
    PayAsset {
        /// Recipient address.
        dest_address: String,
        /// Asset code.
        code: String,
        /// Address of the asset's issuer.
        issuer: String,
        /// Amount to transfer.
        amount: i64,
    },
    /// Transfer native coin.
    PayCoin {
        /// Recipient address.
        dest_address: String,
        /// Amount to transfer, in base units.
        amount: i64,
    },
    /// Write a key/value entry into the source account's metadata store.
    SetMetadata {
        /// Metadata key.
        key: String,
        /// Metadata value; empty deletes the entry.
        value: String,
        /// Expected current version of the entry, for optimistic locking.
        version: i64,
    },
    /// Change the source account's master weight and transaction threshold.
    SetPrivilege {
        /// New master weight.
        master_weight: i64,
        /// New transaction threshold.
        tx_threshold: i64,
    },
    /// Set or clear the weight of a cosigner on the source account.
    SetSignerWeight {
        /// Address of the cosigner.
        signer_address: String,
        /// New weight; zero removes the signer.
        weight: i64,
    },
    /// Change the source account's transaction threshold.
    SetThreshold {
        /// New transaction threshold.
        tx_threshold: i64,
    },
    /// Record opaque log entries on the ledger.
    Log {
        /// Log topic.
        topic: String,
        /// Log payload strings.
        datas: Vec<String>,
    },
}

impl OperationKind {
    /// Return the stable wire/JSON type code of this variant.
    pub fn type_code(&self) -> u16 {
        match self {
            Self::CreateAccount { .. } => 1,
            Self::IssueAsset { .. } => 2,
            Self::PayAsset { .. } => 3,
            Self::PayCoin { .. } => 4,
            Self::SetMetadata { .. } => 5,
            Self::SetPrivilege { .. } => 6,
            Self::SetSignerWeight { .. } => 7,
            Self::SetThreshold { .. } => 8,
            Self::Log { .. } => 9,
        }
    }

    /// Return the JSON object key used for this variant's payload.
    fn json_key(&self) -> &'static str {
        match self {
            Self::CreateAccount { .. } => "create_account",
            Self::IssueAsset { .. } => "issue_asset",
            Self::PayAsset { .. } => "pay_asset",
            Self::PayCoin { .. } => "pay_coin",
            Self::SetMetadata { .. } => "set_metadata",
            Self::SetPrivilege { .. } => "set_privilege",
            Self::SetSignerWeight { .. } => "set_signer_weight",
            Self::SetThreshold { .. } => "set_threshold",
            Self::Log { .. } => "log",
        }
    }
}

/// A single operation within a transaction.
///
/// Carries the fields common to every operation type — an optional
/// per-operation source address (defaulting to the transaction source
/// when unset) and opaque metadata — plus the variant payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// Per-operation source address; `None` inherits the transaction source.
    pub source_address: Option<String>,
    /// Opaque metadata attached to this operation.
    pub metadata: String,
    /// The variant payload.
    pub kind: OperationKind,
}

impl Operation {
    /// Create an operation with no source override and empty metadata.
    pub fn new(kind: OperationKind) -> Self {
        Operation {
            source_address: None,
            metadata: String::new(),
            kind,
        }
    }

    /// Validate this operation's fields against the protocol rules.
    ///
    /// Checks the optional source address format and the variant payload:
    /// destination/issuer/signer addresses must be well-formed, transfer
    /// amounts strictly positive, balances/weights/thresholds/versions
    /// non-negative, and string fields non-empty within their bounds.
    pub fn validate(&self) -> Result<(), TransactionError> {
        if let Some(source) = &self.source_address {
            if !check_address(source) {
                return Err(TransactionError::InvalidOperation(format!(
                    "malformed operation source address: {}",
                    source
                )));
            }
        }
        match &self.kind {
            OperationKind::CreateAccount {
                dest_address,
                init_balance,
            } => {
                require_address("create_account dest_address", dest_address)?;
                require_non_negative("create_account init_balance", *init_balance)?;
            }
            OperationKind::IssueAsset { code, amount } => {
                require_asset_code("issue_asset code", code)?;
                require_positive("issue_asset amount", *amount)?;
            }
            OperationKind::PayAsset {
                dest_address,
                code,
                issuer,
                amount,
            } => {
                require_address("pay_asset dest_address", dest_address)?;
                require_asset_code("pay_asset code", code)?;
                require_address("pay_asset issuer", issuer)?;
                require_positive("pay_asset amount", *amount)?;
            }
            OperationKind::PayCoin {
                dest_address,
                amount,
            } => {
                require_address("pay_coin dest_address", dest_address)?;
                require_positive("pay_coin amount", *amount)?;
            }
            OperationKind::SetMetadata { key, version, .. } => {
                if key.is_empty() || key.len() > MAX_METADATA_KEY_LEN {
                    return Err(TransactionError::InvalidOperation(format!(
                        "set_metadata key must be 1..={} characters",
                        MAX_METADATA_KEY_LEN
                    )));
                }
                require_non_negative("set_metadata version", *version)?;
            }
            OperationKind::SetPrivilege {
                master_weight,
                tx_threshold,
            } => {
                require_non_negative("set_privilege master_weight", *master_weight)?;
                require_non_negative("set_privilege tx_threshold", *tx_threshold)?;
            }
            OperationKind::SetSignerWeight {
                signer_address,
                weight,
            } => {
                require_address("set_signer_weight signer_address", signer_address)?;
                require_non_negative("set_signer_weight weight", *weight)?;
            }
            OperationKind::SetThreshold { tx_threshold } => {
                require_non_negative("set_threshold tx_threshold", *tx_threshold)?;
            }
            OperationKind::Log { topic, .. } => {
                if topic.is_empty() || topic.len() > MAX_LOG_TOPIC_LEN {
                    return Err(TransactionError::InvalidOperation(format!(
                        "log topic must be 1..={} characters",
                        MAX_LOG_TOPIC_LEN
                    )));
                }
            }
        }
        Ok(())
    }

    /// Serialize this operation into the canonical wire layout.
    ///
    /// Layout: u16 type code, source address ("" when unset), metadata,
    /// then the variant payload fields in declared order.
    pub fn write_to(&self, writer: &mut WireWriter) {
        writer.write_u16_le(self.kind.type_code());
        writer.write_var_bytes(self.source_address.as_deref().unwrap_or("").as_bytes());
        writer.write_var_bytes(self.metadata.as_bytes());
        match &self.kind {
            OperationKind::CreateAccount {
                dest_address,
                init_balance,
            } => {
                writer.write_var_bytes(dest_address.as_bytes());
                writer.write_i64_le(*init_balance);
            }
            OperationKind::IssueAsset { code, amount } => {
                writer.write_var_bytes(code.as_bytes());
                writer.write_i64_le(*amount);
            }
            OperationKind::PayAsset {
                dest_address,
                code,
                issuer,
                amount,
            } => {
                writer.write_var_bytes(dest_address.as_bytes());
                writer.write_var_bytes(code.as_bytes());
                writer.write_var_bytes(issuer.as_bytes());
                writer.write_i64_le(*amount);
            }
            OperationKind::PayCoin {
                dest_address,
                amount,
            } => {
                writer.write_var_bytes(dest_address.as_bytes());
                writer.write_i64_le(*amount);
            }
            OperationKind::SetMetadata {
                key,
                value,
                version,
            } => {
                writer.write_var_bytes(key.as_bytes());
                writer.write_var_bytes(value.as_bytes());
                writer.write_i64_le(*version);
            }
            OperationKind::SetPrivilege {
                master_weight,
                tx_threshold,
            } => {
                writer.write_i64_le(*master_weight);
                writer.write_i64_le(*tx_threshold);
            }
            OperationKind::SetSignerWeight {
                signer_address,
                weight,
            } => {
                writer.write_var_bytes(signer_address.as_bytes());
                writer.write_i64_le(*weight);
            }
            OperationKind::SetThreshold { tx_threshold } => {
                writer.write_i64_le(*tx_threshold);
            }
            OperationKind::Log { topic, datas } => {
                writer.write_var_bytes(topic.as_bytes());
                writer.write_varint(VarInt::from(datas.len()));
                for data in datas {
                    writer.write_var_bytes(data.as_bytes());
                }
            }
        }
    }

    /// Deserialize an operation from the canonical wire layout.
    ///
    /// # Returns
    /// The operation, or a `SerializationError` for truncated data,
    /// unknown type codes, or non-UTF-8 string fields.
    pub fn read_from(reader: &mut WireReader) -> Result<Self, TransactionError> {
        let type_code = reader.read_u16_le().map_err(read_err)?;
        let source = read_string(reader)?;
        let metadata = read_string(reader)?;
        let kind = match type_code {
            1 => OperationKind::CreateAccount {
                dest_address: read_string(reader)?,
                init_balance: reader.read_i64_le().map_err(read_err)?,
            },
            2 => OperationKind::IssueAsset {
                code: read_string(reader)?,
                amount: reader.read_i64_le().map_err(read_err)?,
            },
            3 => OperationKind::PayAsset {
                dest_address: read_string(reader)?,
                code: read_string(reader)?,
                issuer: read_string(reader)?,
                amount: reader.read_i64_le().map_err(read_err)?,
            },
            4 => OperationKind::PayCoin {
                dest_address: read_string(reader)?,
                amount: reader.read_i64_le().map_err(read_err)?,
            },
            5 => OperationKind::SetMetadata {
                key: read_string(reader)?,
                value: read_string(reader)?,
                version: reader.read_i64_le().map_err(read_err)?,
            },
            6 => OperationKind::SetPrivilege {
                master_weight: reader.read_i64_le().map_err(read_err)?,
                tx_threshold: reader.read_i64_le().map_err(read_err)?,
            },
            7 => OperationKind::SetSignerWeight {
                signer_address: read_string(reader)?,
                weight: reader.read_i64_le().map_err(read_err)?,
            },
            8 => OperationKind::SetThreshold {
                tx_threshold: reader.read_i64_le().map_err(read_err)?,
            },
            9 => {
                let topic = read_string(reader)?;
                let count = reader.read_varint().map_err(read_err)?.value();
                let mut datas = Vec::with_capacity(count as usize);
                for _ in 0..count {
                    datas.push(read_string(reader)?);
                }
                OperationKind::Log { topic, datas }
            }
            code => {
                return Err(TransactionError::SerializationError(format!(
                    "unknown operation type code {}",
                    code
                )));
            }
        };
        Ok(Operation {
            source_address: if source.is_empty() { None } else { Some(source) },
            metadata,
            kind,
        })
    }

    /// Project this operation into the node's JSON shape.
    ///
    /// The result carries the numeric `type` code, the optional
    /// `source_address` and `metadata` fields, and the variant payload
    /// under its snake_case key — the form expected inside the
    /// simulation endpoint's `transaction_json`.
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("type".to_string(), json!(self.kind.type_code()));
        if let Some(source) = &self.source_address {
            obj.insert("source_address".to_string(), json!(source));
        }
        if !self.metadata.is_empty() {
            obj.insert("metadata".to_string(), json!(self.metadata));
        }
        let payload = match &self.kind {
            OperationKind::CreateAccount {
                dest_address,
                init_balance,
            } => json!({ "dest_address": dest_address, "init_balance": init_balance }),
            OperationKind::IssueAsset { code, amount } => {
                json!({ "code": code, "amount": amount })
            }
            OperationKind::PayAsset {
                dest_address,
                code,
                issuer,
                amount,
            } => json!({
                "dest_address": dest_address,
                "asset": { "key": { "code": code, "issuer": issuer }, "amount": amount },
            }),
            OperationKind::PayCoin {
                dest_address,
                amount,
            } => json!({ "dest_address": dest_address, "amount": amount }),
            OperationKind::SetMetadata {
                key,
                value,
                version,
            } => json!({ "key": key, "value": value, "version": version }),
            OperationKind::SetPrivilege {
                master_weight,
                tx_threshold,
            } => json!({ "master_weight": master_weight, "tx_threshold": tx_threshold }),
            OperationKind::SetSignerWeight {
                signer_address,
                weight,
            } => json!({ "address": signer_address, "weight": weight }),
            OperationKind::SetThreshold { tx_threshold } => {
                json!({ "tx_threshold": tx_threshold })
            }
            OperationKind::Log { topic, datas } => {
                json!({ "topic": topic, "datas": datas })
            }
        };
        obj.insert(self.kind.json_key().to_string(), payload);
        Value::Object(obj)
    }
}

/// Validate a caller-supplied operation list in order.
///
/// Fails fast: the first malformed operation aborts resolution and no
/// partial error report is produced. An empty list is accepted here —
/// the non-empty requirement is a transaction-level rule enforced by
/// the client entry points.
pub fn resolve_operations(operations: &[Operation]) -> Result<(), TransactionError> {
    for operation in operations {
        operation.validate()?;
    }
    Ok(())
}

fn require_address(field: &str, address: &str) -> Result<(), TransactionError> {
    if !check_address(address) {
        return Err(TransactionError::InvalidOperation(format!(
            "{} is not a well-formed address",
            field
        )));
    }
    Ok(())
}

fn require_asset_code(field: &str, code: &str) -> Result<(), TransactionError> {
    if code.is_empty() || code.len() > MAX_ASSET_CODE_LEN {
        return Err(TransactionError::InvalidOperation(format!(
            "{} must be 1..={} characters",
            field, MAX_ASSET_CODE_LEN
        )));
    }
    Ok(())
}

fn require_positive(field: &str, value: i64) -> Result<(), TransactionError> {
    if value <= 0 {
        return Err(TransactionError::InvalidOperation(format!(
            "{} must be positive, got {}",
            field, value
        )));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: i64) -> Result<(), TransactionError> {
    if value < 0 {
        return Err(TransactionError::InvalidOperation(format!(
            "{} must be non-negative, got {}",
            field, value
        )));
    }
    Ok(())
}

fn read_string(reader: &mut WireReader) -> Result<String, TransactionError> {
    let bytes = reader.read_var_bytes().map_err(read_err)?;
    String::from_utf8(bytes.to_vec())
        .map_err(|e| TransactionError::SerializationError(format!("invalid utf-8: {}", e)))
}

fn read_err(e: meridian_primitives::PrimitivesError) -> TransactionError {
    TransactionError::SerializationError(e.to_string())
}
