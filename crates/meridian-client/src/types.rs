//! Node client data types: configuration, request envelopes, and
//! response models.
//!
//! Response integers are modeled as `i64` throughout so that values are
//! parsed at full precision — the node serializes fees, nonces, and
//! sequence numbers as JSON numbers that exceed f64's safe integer
//! range.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Configuration for a [`TransactionClient`](crate::TransactionClient).
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Base URL of the node's HTTP API (e.g. `https://node.meridian.example`).
    pub base_url: String,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://node.meridian.example".to_string(),
        }
    }
}

/// A detached signature over a transaction blob.
///
/// Pairs the signer's encoded public key with the hex-encoded signature
/// bytes. Signature lists preserve insertion order end to end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// The signer's encoded public key.
    pub public_key: String,
    /// Hex-encoded detached signature bytes.
    pub sign_data: String,
}

/// A fee quote returned by the node's simulation endpoint.
///
/// Advisory only; the node's eventual charge is not bound by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeQuote {
    /// Quoted fee limit, in base units.
    pub fee_limit: i64,
    /// Quoted gas price, in base units.
    pub gas_price: i64,
}

/// Current network fee parameters fetched from the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkFees {
    /// Minimum gas price accepted by the network.
    pub gas_price: i64,
    /// Base reserve required per account.
    pub base_reserve: i64,
}

// ---------------------------------------------------------------------------
// /getLedger response
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct LedgerResponse {
    #[serde(default)]
    pub error_code: i64,
    #[serde(default)]
    pub error_desc: String,
    #[serde(default)]
    pub result: Option<LedgerResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LedgerResult {
    #[serde(default)]
    pub fees: Option<LedgerFees>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LedgerFees {
    #[serde(default)]
    pub gas_price: i64,
    #[serde(default)]
    pub base_reserve: i64,
}

// ---------------------------------------------------------------------------
// /testTransaction request and response
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub(crate) struct SimulationRequest {
    pub items: Vec<SimulationItem>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SimulationItem {
    pub transaction_json: Value,
    pub signature_number: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SimulationResponse {
    #[serde(default)]
    pub error_code: i64,
    #[serde(default)]
    pub error_desc: String,
    #[serde(default)]
    pub result: Option<SimulationResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SimulationResult {
    #[serde(default)]
    pub txs: Option<Vec<SimulatedTx>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SimulatedTx {
    pub transaction_env: SimulatedEnv,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SimulatedEnv {
    pub transaction: SimulatedFees,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SimulatedFees {
    #[serde(default)]
    pub fee_limit: i64,
    #[serde(default)]
    pub gas_price: i64,
}

// ---------------------------------------------------------------------------
// /submitTransaction request and response
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub(crate) struct SubmitRequest {
    pub items: Vec<SubmitItem>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SubmitItem {
    pub transaction_blob: String,
    pub signatures: Vec<Signature>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SubmitResponse {
    #[serde(default)]
    pub results: Vec<SubmitResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SubmitResult {
    #[serde(default)]
    pub error_code: i64,
    #[serde(default)]
    pub error_desc: String,
    #[serde(default)]
    pub hash: String,
}

// ---------------------------------------------------------------------------
// /getTransactionHistory response
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct HistoryResponse {
    #[serde(default)]
    pub error_code: i64,
    #[serde(default)]
    pub error_desc: String,
    #[serde(default)]
    pub result: Option<TransactionHistory>,
}

/// Transaction history matching a lookup hash.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionHistory {
    /// Total number of matching transactions.
    #[serde(default)]
    pub total_count: i64,
    /// The matching transaction records.
    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,
}

/// One applied transaction as stored by the node.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRecord {
    /// The transaction hash.
    #[serde(default)]
    pub hash: String,
    /// Height of the ledger that applied the transaction.
    #[serde(default)]
    pub ledger_seq: i64,
    /// Close time of the applying ledger, in microseconds.
    #[serde(default)]
    pub close_time: i64,
    /// The node's execution result code for this transaction.
    #[serde(default)]
    pub error_code: i64,
    /// The node's execution result description.
    #[serde(default)]
    pub error_desc: String,
    /// Signatures the transaction was submitted with.
    #[serde(default)]
    pub signatures: Vec<Signature>,
    /// The transaction content.
    pub transaction: TransactionMeta,
}

/// Transaction content fields as stored by the node.
///
/// `metadata` (here and per operation) arrives hex-encoded and is
/// decoded back to its raw representation by the lookup entry point
/// before the record reaches the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionMeta {
    /// Source account address.
    #[serde(default)]
    pub source_address: String,
    /// Transaction nonce.
    #[serde(default)]
    pub nonce: i64,
    /// Authorized fee limit.
    #[serde(default)]
    pub fee_limit: i64,
    /// Offered gas price.
    #[serde(default)]
    pub gas_price: i64,
    /// Ceil ledger sequence; zero when unbounded.
    #[serde(default)]
    pub ceil_ledger_seq: i64,
    /// Transaction metadata (decoded to raw text by lookup).
    #[serde(default)]
    pub metadata: String,
    /// The transaction's operations.
    #[serde(default)]
    pub operations: Vec<OperationRecord>,
}

/// One operation inside a stored transaction.
///
/// Only the fields this client interprets are typed; the variant
/// payload is kept as opaque JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct OperationRecord {
    /// Numeric operation type code.
    #[serde(rename = "type", default)]
    pub op_type: i64,
    /// Per-operation source address, when set.
    #[serde(default)]
    pub source_address: String,
    /// Operation metadata (decoded to raw text by lookup).
    #[serde(default)]
    pub metadata: String,
    /// The variant payload, untouched.
    #[serde(flatten)]
    pub payload: serde_json::Map<String, Value>,
}
