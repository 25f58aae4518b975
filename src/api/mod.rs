//!
//! Crate APIs: the `DataProcessor` a host drives on every block commit,
//! and the factory wiring it from an `IndexerConfig`.
//!
//! # Example
//!
//! ```rust
//! use covalent_indexer::{create_data_processor, IndexerConfig};
//!
//! let processor = create_data_processor(&IndexerConfig::default()).unwrap();
//!
//! // on every committed block
//! let result = processor.process_data(&args)?;
//! ```
//!

mod batch;

use crate::codec::MarshalerKind;
use crate::config::{ConfigError, IndexerConfig};
use crate::ledger::ArgsSaveBlockData;
use crate::logging::LogTarget;
use crate::process::block::{self, BlockProcessor};
use crate::process::errors::ProcessResult;
use crate::process::mini_blocks::{self, MiniBlocksProcessor};
use crate::process::transactions::{self, TransactionProcessor};
use crate::process::{BlockHandler, TransactionHandler};
use crate::schema::BlockResult;
use log::info;
use std::sync::Arc;

// re-exports
pub use crate::ledger::body::{Body, BodyHandler, MiniBlock, MiniBlockType};
pub use crate::ledger::header::{HeaderHandler, MetaBlock, ShardHeader, METACHAIN_SHARD_ID};
pub use crate::ledger::pool::Pool;
pub use crate::ledger::transaction::{RewardTx, TxPayload};
pub use crate::process::errors::ProcessError;
pub use crate::process::utility::METACHAIN_SENDER_ADDRESS;

///
/// Runs the block and the transaction processors over the same commit.
///
/// Holds no state between calls, a single instance can serve
/// any number of blocks, from any number of threads.
///
pub struct DataProcessor {
    block_handler: Arc<dyn BlockHandler>,
    transactions_handler: Arc<dyn TransactionHandler>,
}

impl DataProcessor {
    pub fn new(
        block_handler: Arc<dyn BlockHandler>,
        transactions_handler: Arc<dyn TransactionHandler>,
    ) -> Self {
        DataProcessor {
            block_handler,
            transactions_handler,
        }
    }

    ///
    /// Build the records of one committed block.
    ///
    /// Fails without any partial result if the body is not decoded,
    /// if header or body cannot be marshaled, or if the mini block
    /// summaries cannot be built.
    ///
    pub fn process_data(&self, args: &ArgsSaveBlockData) -> ProcessResult<BlockResult> {
        let block = self.block_handler.process_block(args)?;
        let transactions = self.transactions_handler.process_transactions(
            &args.header,
            &args.header_hash,
            &args.body,
            &args.pool,
        )?;

        Ok(BlockResult {
            block,
            transactions,
        })
    }
}

///
/// Wire the default processors from configuration.
///
/// Each processor logs under its own target, e.g. `covalent/process/block`.
///
pub fn create_data_processor(config: &IndexerConfig) -> Result<DataProcessor, ConfigError> {
    let marshaler: MarshalerKind = config.marshaler;
    let hasher = config.hasher.build();
    let address_encoder = config.address.build_encoder()?;

    let mini_blocks_handler = Arc::new(MiniBlocksProcessor::new(
        hasher.clone(),
        marshaler,
        Arc::new(LogTarget::new(mini_blocks::LOG_TARGET)),
    ));
    let block_handler = BlockProcessor::new(
        marshaler,
        mini_blocks_handler,
        Arc::new(LogTarget::new(block::LOG_TARGET)),
    );
    let transactions_handler = TransactionProcessor::new(
        address_encoder,
        hasher,
        marshaler,
        Arc::new(LogTarget::new(transactions::LOG_TARGET)),
    );

    info!(
        "data processor ready: marshaler {:?}, hasher {:?}, address encoding {:?}",
        config.marshaler, config.hasher, config.address.encoding
    );
    Ok(DataProcessor::new(
        Arc::new(block_handler),
        Arc::new(transactions_handler),
    ))
}
