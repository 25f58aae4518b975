//!
//! ## Indexed Records
//!
//! Records handed to the serialization layer after a block commit:
//! - `Block`: one per committed block, with its mini block summaries
//!   and, for metachain epoch-start blocks, an `EpochStartInfo`.
//! - `Transaction`: one per normal, invalid or reward transaction.
//!
//! `BlockResult` pairs both for one commit.
//!

/// block, mini block summary and epoch-start records
pub mod block;

/// transaction record
pub mod transaction;

pub use block::{Block, EpochStartInfo, MiniBlock};
pub use transaction::Transaction;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct BlockResult {
    pub block: Block,
    pub transactions: Vec<Transaction>,
}
