/// Meridian Ledger SDK - Transaction drafts and the canonical blob codec.
///
/// Provides the TransactionDraft type, the Operation tagged union with
/// per-variant validation (the operation resolver), deterministic
/// binary/hex serialization, and transaction hash computation.

pub mod draft;
pub mod operation;

mod error;
pub use draft::TransactionDraft;
pub use error::TransactionError;
pub use operation::{resolve_operations, Operation, OperationKind};
