//! Error types for node client operations.

/// Errors returned by the transaction lifecycle entry points.
///
/// Every variant maps to a stable numeric [`code`](ClientError::code)
/// so callers can branch without string matching. Input validation
/// errors are produced before any network call; `NodeRejected`
/// preserves the node's own code and description.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The source address is not a well-formed account address.
    #[error("invalid source address")]
    InvalidSourceAddress,

    /// The nonce is zero or negative.
    #[error("nonce must be a positive integer")]
    InvalidNonce,

    /// The ceil ledger sequence is negative.
    #[error("ceil ledger sequence must be non-negative")]
    InvalidCeilLedgerSeq,

    /// The gas price is below the network minimum.
    #[error("gas price is below the network minimum")]
    InvalidGasPrice,

    /// The fee limit is below the network's worst-case operation cost.
    #[error("fee limit is below 1000x the network minimum gas price")]
    InvalidFeeLimit,

    /// The operations list is empty.
    #[error("transaction must carry at least one operation")]
    MissingOperations,

    /// An operation failed resolver validation.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// The transaction hash is not exactly 64 hex characters.
    #[error("transaction hash must be 64 hex characters")]
    InvalidHash,

    /// The transaction blob is empty.
    #[error("transaction blob must not be empty")]
    InvalidBlob,

    /// The private key list is empty or absent.
    #[error("private key list must not be empty")]
    MissingPrivateKeys,

    /// A private key failed format validation.
    #[error("invalid private key")]
    InvalidPrivateKey,

    /// A signature's public key failed format validation.
    #[error("invalid signature public key")]
    InvalidPublicKey,

    /// A signature carries empty signature data.
    #[error("signature data must not be empty")]
    InvalidSignature,

    /// The signature-count hint is not a positive integer.
    #[error("signature number must be a positive integer")]
    InvalidSignatureNumber,

    /// Transport-level failure (connection, timeout, body read).
    #[error("connectivity error: {0}")]
    Connectivity(#[from] reqwest::Error),

    /// The node responded with a non-success HTTP status.
    #[error("connectivity error: node returned HTTP {0}")]
    HttpStatus(u16),

    /// The node accepted the request but rejected its content.
    #[error("node rejected ({code}): {description}")]
    NodeRejected {
        /// The node's error code.
        code: i64,
        /// Human-readable description, as supplied (or overridden) by
        /// the lookup path.
        description: String,
    },

    /// The call succeeded but the node matched no transaction.
    #[error("query returned no matching transaction")]
    QueryEmpty,

    /// A serialization or decoding defect on an otherwise valid exchange.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ClientError {
    /// Return the stable numeric code for this error.
    ///
    /// Node-level rejections pass the node's own code through; every
    /// other variant has a fixed SDK-assigned code.
    pub fn code(&self) -> i64 {
        match self {
            Self::InvalidSourceAddress => 1101,
            Self::InvalidNonce => 1102,
            Self::InvalidCeilLedgerSeq => 1103,
            Self::InvalidGasPrice => 1104,
            Self::InvalidFeeLimit => 1105,
            Self::MissingOperations => 1106,
            Self::InvalidOperation(_) => 1107,
            Self::InvalidHash => 1108,
            Self::InvalidBlob => 1109,
            Self::MissingPrivateKeys => 1110,
            Self::InvalidPrivateKey => 1111,
            Self::InvalidPublicKey => 1112,
            Self::InvalidSignature => 1113,
            Self::InvalidSignatureNumber => 1114,
            Self::Connectivity(_) => 2001,
            Self::HttpStatus(_) => 2002,
            Self::NodeRejected { code, .. } => *code,
            Self::QueryEmpty => 3001,
            Self::Internal(_) => 5001,
        }
    }

    /// Return the human-readable description for this error.
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl From<meridian_transaction::TransactionError> for ClientError {
    fn from(e: meridian_transaction::TransactionError) -> Self {
        match e {
            meridian_transaction::TransactionError::InvalidOperation(msg) => {
                ClientError::InvalidOperation(msg)
            }
            other => ClientError::Internal(other.to_string()),
        }
    }
}
