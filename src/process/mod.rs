//!
//! Record assembly: turns the data of a committed block into
//! the records defined in `schema`.
//!
//! The block and transaction processors read the same
//! `ArgsSaveBlockData` and run independently of each other.
//!

/// block record assembly
pub mod block;

/// transaction record assembly
pub mod transactions;

/// mini block summaries
pub mod mini_blocks;

/// error handling
pub mod errors;

/// encoding helpers shared by the processors
pub mod utility;

#[cfg(test)]
pub(crate) mod testutil;

use crate::ledger::body::BodyHandler;
use crate::ledger::header::HeaderHandler;
use crate::ledger::pool::Pool;
use crate::ledger::ArgsSaveBlockData;
use crate::process::errors::ProcessResult;
use crate::schema;

/// Builds the block record of a commit.
pub trait BlockHandler: Send + Sync {
    fn process_block(&self, args: &ArgsSaveBlockData) -> ProcessResult<schema::Block>;
}

/// Builds the mini block summaries embedded in a block record.
pub trait MiniBlockHandler: Send + Sync {
    fn process_mini_blocks(
        &self,
        header_hash: &[u8],
        header: &HeaderHandler,
        body: &BodyHandler,
    ) -> ProcessResult<Vec<schema::MiniBlock>>;
}

/// Builds the transaction records of a commit.
pub trait TransactionHandler: Send + Sync {
    fn process_transactions(
        &self,
        header: &HeaderHandler,
        header_hash: &[u8],
        body: &BodyHandler,
        pool: &Pool,
    ) -> ProcessResult<Vec<schema::Transaction>>;
}
