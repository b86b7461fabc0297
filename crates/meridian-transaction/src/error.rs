/// Error types for transaction operations.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// An operation failed resolver validation (bad address, amount, or field).
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
    /// An error occurred during binary/hex serialization or deserialization.
    #[error("serialization error: {0}")]
    SerializationError(String),
}
