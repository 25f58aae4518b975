//!
//! Block data as committed by the node: headers, bodies, mini blocks
//! and the transaction pool.
//!

/// shard and meta block headers
pub mod header;

/// block body and mini blocks
pub mod body;

/// transaction payload variants
pub mod transaction;

/// per-block transaction pool
pub mod pool;

use crate::ledger::body::BodyHandler;
use crate::ledger::header::HeaderHandler;
use crate::ledger::pool::Pool;

///
/// Everything the node hands over when a block is committed.
///
#[derive(Clone, Debug)]
pub struct ArgsSaveBlockData {
    pub header_hash: Vec<u8>,
    pub header: HeaderHandler,
    pub body: BodyHandler,
    pub pool: Pool,
    pub notarized_headers_hashes: Vec<Vec<u8>>,
    pub signers_indexes: Vec<u64>,
}
