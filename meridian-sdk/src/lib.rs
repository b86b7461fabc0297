#![deny(missing_docs)]

//! Meridian Ledger SDK - Complete SDK.
//!
//! Re-exports all Meridian SDK components for convenient single-crate usage.

pub use meridian_client as client;
pub use meridian_primitives as primitives;
pub use meridian_transaction as transaction;
