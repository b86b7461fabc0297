//! Node HTTP client for the transaction lifecycle.

use meridian_primitives::keys::{check_address, check_public_key};
use meridian_transaction::{resolve_operations, TransactionDraft};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::ClientError;
use crate::signer;
use crate::types::{
    FeeQuote, HistoryResponse, LedgerResponse, NetworkFees, NodeConfig, Signature,
    SimulationItem, SimulationRequest, SimulationResponse, SubmitItem, SubmitRequest,
    SubmitResponse, TransactionHistory,
};

/// The protocol's worst-case operation cost heuristic: a transaction's
/// fee limit must cover at least this many gas units at the minimum
/// gas price.
const FEE_LIMIT_GAS_FLOOR: i64 = 1000;

/// HTTP client for a Meridian ledger node.
///
/// Stateless between calls apart from the connection pool inside the
/// underlying `reqwest::Client`; safe to share and call concurrently.
#[derive(Debug, Clone)]
pub struct TransactionClient {
    /// Client configuration.
    config: NodeConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl TransactionClient {
    /// Create a new client with the given configuration.
    pub fn new(config: NodeConfig) -> Self {
        let client = reqwest::Client::new();
        Self { config, client }
    }

    // -----------------------------------------------------------------
    // Fee policy
    // -----------------------------------------------------------------

    /// Fetch the network's current fee parameters.
    ///
    /// # Returns
    /// The minimum gas price and base reserve, or a connectivity /
    /// node-rejection error.
    pub async fn get_network_fees(&self) -> Result<NetworkFees, ClientError> {
        let url = format!("{}/getLedger?with_fee=true", self.config.base_url);
        debug!(url = %url, "fetching network fees");

        let resp = self.client.get(&url).send().await?;
        let body: LedgerResponse = read_json(resp).await?;
        if body.error_code != 0 {
            return Err(ClientError::NodeRejected {
                code: body.error_code,
                description: body.error_desc,
            });
        }
        let fees = body
            .result
            .and_then(|r| r.fees)
            .ok_or_else(|| ClientError::Internal("ledger response carried no fees".to_string()))?;
        Ok(NetworkFees {
            gas_price: fees.gas_price,
            base_reserve: fees.base_reserve,
        })
    }

    // -----------------------------------------------------------------
    // BuildBlob
    // -----------------------------------------------------------------

    /// Build the canonical hex blob for an unsigned transaction draft.
    ///
    /// Validates the draft field by field, checks its fee fields
    /// against the network's current minimum gas price, resolves the
    /// operations, and serializes deterministically. Identical drafts
    /// always produce identical blobs.
    ///
    /// # Arguments
    /// * `draft` - The unsigned transaction draft.
    ///
    /// # Returns
    /// The lowercase hex blob, or the first validation / connectivity
    /// error encountered.
    pub async fn build_blob(&self, draft: &TransactionDraft) -> Result<String, ClientError> {
        if !check_address(&draft.source_address) {
            return Err(ClientError::InvalidSourceAddress);
        }
        let fees = self.get_network_fees().await?;
        if draft.nonce <= 0 {
            return Err(ClientError::InvalidNonce);
        }
        if draft.ceil_ledger_seq < 0 {
            return Err(ClientError::InvalidCeilLedgerSeq);
        }
        if draft.gas_price < fees.gas_price {
            return Err(ClientError::InvalidGasPrice);
        }
        if draft.fee_limit < fees.gas_price * FEE_LIMIT_GAS_FLOOR {
            return Err(ClientError::InvalidFeeLimit);
        }
        if draft.operations.is_empty() {
            return Err(ClientError::MissingOperations);
        }
        resolve_operations(&draft.operations)?;
        Ok(draft.to_hex())
    }

    // -----------------------------------------------------------------
    // EvaluateFee
    // -----------------------------------------------------------------

    /// Obtain a fee quote for a draft from the node's simulation endpoint.
    ///
    /// The optional `signature_number` hint (string-encoded positive
    /// integer, default `"1"`) tells the node how many signatures to
    /// price in; malformed or non-positive values are rejected before
    /// any network call. The quote is advisory.
    ///
    /// # Arguments
    /// * `draft` - The draft to simulate. Its fee fields are ignored.
    /// * `signature_number` - Optional expected signer count.
    ///
    /// # Returns
    /// The quoted fee limit and gas price, [`ClientError::QueryEmpty`]
    /// when the simulation matched no transaction, or the first
    /// validation / connectivity / node error.
    pub async fn evaluate_fee(
        &self,
        draft: &TransactionDraft,
        signature_number: Option<&str>,
    ) -> Result<FeeQuote, ClientError> {
        if !check_address(&draft.source_address) {
            return Err(ClientError::InvalidSourceAddress);
        }
        if draft.nonce <= 0 {
            return Err(ClientError::InvalidNonce);
        }
        if draft.operations.is_empty() {
            return Err(ClientError::MissingOperations);
        }
        let signature_number = match signature_number {
            None | Some("") => 1,
            Some(raw) => match raw.parse::<i64>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ClientError::InvalidSignatureNumber),
            },
        };
        resolve_operations(&draft.operations)?;

        let request = SimulationRequest {
            items: vec![SimulationItem {
                transaction_json: draft.to_json(),
                signature_number,
            }],
        };
        let url = format!("{}/testTransaction", self.config.base_url);
        debug!(url = %url, signature_number, "requesting fee quote");

        let resp = self.client.post(&url).json(&request).send().await?;
        let body: SimulationResponse = read_json(resp).await?;
        if body.error_code != 0 {
            warn!(code = body.error_code, "fee simulation rejected");
            return Err(ClientError::NodeRejected {
                code: body.error_code,
                description: body.error_desc,
            });
        }
        // Success with no transactions: the node matched nothing.
        let quoted = body
            .result
            .and_then(|r| r.txs)
            .and_then(|mut txs| if txs.is_empty() { None } else { Some(txs.remove(0)) })
            .ok_or(ClientError::QueryEmpty)?;
        Ok(FeeQuote {
            fee_limit: quoted.transaction_env.transaction.fee_limit,
            gas_price: quoted.transaction_env.transaction.gas_price,
        })
    }

    // -----------------------------------------------------------------
    // Sign
    // -----------------------------------------------------------------

    /// Sign a blob with one or more private keys.
    ///
    /// Purely local; see [`signer::sign`] for the full contract.
    pub fn sign(
        &self,
        blob: &str,
        private_keys: &[&str],
    ) -> Result<Vec<Signature>, ClientError> {
        signer::sign(blob, private_keys)
    }

    // -----------------------------------------------------------------
    // Submit
    // -----------------------------------------------------------------

    /// Submit a signed transaction to the node.
    ///
    /// Every signature is re-validated here (public key format,
    /// non-empty signature data) independently of [`sign`](Self::sign),
    /// since blob/signature pairs may arrive from storage rather than
    /// this client. The submission envelope is batch-shaped but this
    /// entry point always carries exactly one transaction.
    ///
    /// # Arguments
    /// * `blob` - The hex blob produced by [`build_blob`](Self::build_blob).
    /// * `signatures` - The detached signatures over the blob.
    ///
    /// # Returns
    /// The transaction hash on acceptance; [`ClientError::NodeRejected`]
    /// with the node's code when the node refuses the transaction on an
    /// otherwise-successful call.
    pub async fn submit(
        &self,
        blob: &str,
        signatures: &[Signature],
    ) -> Result<String, ClientError> {
        if blob.is_empty() {
            return Err(ClientError::InvalidBlob);
        }
        for signature in signatures {
            if !check_public_key(&signature.public_key) {
                return Err(ClientError::InvalidPublicKey);
            }
            if signature.sign_data.is_empty() {
                return Err(ClientError::InvalidSignature);
            }
        }

        let request = SubmitRequest {
            items: vec![SubmitItem {
                transaction_blob: blob.to_string(),
                signatures: signatures.to_vec(),
            }],
        };
        let url = format!("{}/submitTransaction", self.config.base_url);
        debug!(url = %url, signatures = signatures.len(), "submitting transaction");

        let resp = self.client.post(&url).json(&request).send().await?;
        let body: SubmitResponse = read_json(resp).await?;
        // One result per submitted transaction; we submitted one.
        let result = body.results.into_iter().next().ok_or(ClientError::QueryEmpty)?;
        if result.error_code != 0 {
            warn!(code = result.error_code, "node rejected transaction");
            return Err(ClientError::NodeRejected {
                code: result.error_code,
                description: result.error_desc,
            });
        }
        Ok(result.hash)
    }

    // -----------------------------------------------------------------
    // GetInfo
    // -----------------------------------------------------------------

    /// Look up a previously submitted transaction by hash.
    ///
    /// The hash must be 64 characters long ([`ClientError::InvalidHash`]
    /// otherwise) and decode as hex ([`ClientError::Internal`] for a
    /// correctly sized but non-hex value). Metadata fields arrive
    /// hex-encoded and are decoded back to raw text; a decode failure at
    /// any single field aborts the whole response with
    /// [`ClientError::Internal`], since a partially decoded record
    /// would be misleading.
    ///
    /// # Arguments
    /// * `hash` - The 64-character transaction hash.
    ///
    /// # Returns
    /// The matching history records, or an error. The node's reserved
    /// not-found code (4) is reported as `NodeRejected` with the fixed
    /// description `"Get Transaction failed"`.
    pub async fn get_info(&self, hash: &str) -> Result<TransactionHistory, ClientError> {
        if hash.len() != 64 {
            return Err(ClientError::InvalidHash);
        }
        hex::decode(hash)
            .map_err(|e| ClientError::Internal(format!("transaction hash is not valid hex: {}", e)))?;
        let url = format!(
            "{}/getTransactionHistory?hash={}",
            self.config.base_url, hash
        );
        debug!(url = %url, "fetching transaction history");

        let resp = self.client.get(&url).send().await?;
        let body: HistoryResponse = read_json(resp).await?;
        if body.error_code != 0 {
            if body.error_code == 4 {
                // Reserved not-found code; the description is normalized.
                return Err(ClientError::NodeRejected {
                    code: 4,
                    description: "Get Transaction failed".to_string(),
                });
            }
            return Err(ClientError::NodeRejected {
                code: body.error_code,
                description: body.error_desc,
            });
        }
        let mut history = body
            .result
            .ok_or_else(|| ClientError::Internal("history response carried no result".to_string()))?;
        for record in &mut history.transactions {
            record.transaction.metadata = decode_metadata(&record.transaction.metadata)?;
            for operation in &mut record.transaction.operations {
                operation.metadata = decode_metadata(&operation.metadata)?;
            }
        }
        Ok(history)
    }
}

/// Decode a stored hex metadata field back to raw text.
///
/// Empty fields pass through; anything else must be valid hex over
/// valid UTF-8 or the whole lookup fails.
fn decode_metadata(stored: &str) -> Result<String, ClientError> {
    if stored.is_empty() {
        return Ok(String::new());
    }
    let bytes = hex::decode(stored)
        .map_err(|e| ClientError::Internal(format!("metadata is not valid hex: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| ClientError::Internal(format!("metadata is not valid utf-8: {}", e)))
}

/// Read a JSON response body, distinguishing error classes.
///
/// Non-success statuses are connectivity errors (the node's JSON error
/// envelope only rides on 200s); body read failures are connectivity;
/// parse failures on a successful status are internal defects.
async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ClientError::HttpStatus(status.as_u16()));
    }
    let text = resp.text().await?;
    serde_json::from_str(&text)
        .map_err(|e| ClientError::Internal(format!("malformed node response: {}", e)))
}
