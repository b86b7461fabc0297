#![deny(missing_docs)]

//! # meridian-client
//!
//! HTTP client for a Meridian ledger node covering the client-side
//! transaction lifecycle: building the canonical blob, quoting fees
//! against the node's simulation endpoint, signing, submitting, and
//! looking transactions up by hash.
//!
//! All entry points are stateless between calls, perform at most one
//! network round trip (plus the fee fetch inside
//! [`TransactionClient::build_blob`]), and surface every failure as a
//! [`ClientError`] carrying a stable numeric code.
//!
//! # Example
//!
//! ```no_run
//! use meridian_client::{NodeConfig, TransactionClient};
//!
//! let client = TransactionClient::new(NodeConfig {
//!     base_url: "https://node.meridian.example".to_string(),
//! });
//! ```

pub mod client;
pub mod error;
pub mod signer;
pub mod types;


pub use client::TransactionClient;
pub use error::ClientError;
pub use signer::sign;
pub use types::{
    FeeQuote, NetworkFees, NodeConfig, OperationRecord, Signature, TransactionHistory,
    TransactionMeta, TransactionRecord,
};
