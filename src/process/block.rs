use crate::codec::Marshaler;
use crate::ledger::body::Body;
use crate::ledger::header::{HeaderHandler, METACHAIN_SHARD_ID};
use crate::ledger::pool::{Pool, TxMap};
use crate::ledger::ArgsSaveBlockData;
use crate::logging::Logger;
use crate::process::errors::{ProcessError, ProcessResult};
use crate::process::utility::{get_bytes, u64_slice_to_i64_vec};
use crate::process::{BlockHandler, MiniBlockHandler};
use crate::schema::{Block, EpochStartInfo};
use std::sync::Arc;

pub const LOG_TARGET: &str = "covalent/process/block";

pub struct BlockProcessor<M> {
    marshaler: M,
    mini_blocks_handler: Arc<dyn MiniBlockHandler>,
    log: Arc<dyn Logger>,
}

impl<M: Marshaler> BlockProcessor<M> {
    pub fn new(
        marshaler: M,
        mini_blocks_handler: Arc<dyn MiniBlockHandler>,
        log: Arc<dyn Logger>,
    ) -> Self {
        BlockProcessor {
            marshaler,
            mini_blocks_handler,
            log,
        }
    }

    fn compute_block_size(&self, header: &HeaderHandler, body: &Body) -> ProcessResult<i64> {
        let header_bytes = self.marshaler.marshal(header)?;
        let body_bytes = self.marshaler.marshal(body)?;
        Ok((header_bytes.len() + body_bytes.len()) as i64)
    }

    fn compute_size_of_txs(&self, pool: &Pool) -> i64 {
        pool.partitions()
            .iter()
            .map(|txs| self.compute_size_of_map(txs))
            .sum::<usize>() as i64
    }

    /// entries that fail to marshal are left out of the sum
    fn compute_size_of_map(&self, txs: &TxMap) -> usize {
        let mut size = 0;
        for (hash, tx) in txs.iter() {
            match self.marshaler.marshal(tx) {
                Ok(bytes) => size += bytes.len(),
                Err(e) => {
                    self.log.debug(format_args!(
                        "block processor, compute size of map: hash {}, error {}",
                        hex::encode(hash),
                        e
                    ));
                }
            }
        }
        size
    }
}

impl<M: Marshaler> BlockHandler for BlockProcessor<M> {
    fn process_block(&self, args: &ArgsSaveBlockData) -> ProcessResult<Block> {
        let body = args.body.as_block_body().ok_or(ProcessError::BodyType)?;
        let header = &args.header;

        let size = self.compute_block_size(header, body)?;
        let mini_blocks = self
            .mini_blocks_handler
            .process_mini_blocks(&args.header_hash, header, &args.body)?;

        Ok(Block {
            nonce: header.nonce() as i64,
            round: header.round() as i64,
            epoch: header.epoch() as i32,
            hash: args.header_hash.clone(),
            mini_blocks,
            notarized_blocks_hashes: args.notarized_headers_hashes.clone(),
            proposer: get_proposer_index(&args.signers_indexes),
            validators: u64_slice_to_i64_vec(&args.signers_indexes),
            pub_keys_bitmap: header.pub_keys_bitmap().to_vec(),
            size,
            size_txs: self.compute_size_of_txs(&args.pool),
            timestamp: header.timestamp() as i64,
            state_root_hash: header.root_hash().to_vec(),
            prev_hash: header.prev_hash().to_vec(),
            shard_id: header.shard_id() as i32,
            tx_count: header.tx_count() as i32,
            accumulated_fees: get_bytes(header.accumulated_fees()),
            developer_fees: get_bytes(header.developer_fees()),
            epoch_start_block: header.is_start_of_epoch_block(),
            epoch_start_info: get_epoch_start_info(header),
        })
    }
}

/// the first signer proposed the block
fn get_proposer_index(signers_indexes: &[u64]) -> i64 {
    signers_indexes.first().map_or(0, |index| *index as i64)
}

///
/// Economics of a metachain epoch-start block, `None` for any other header.
///
fn get_epoch_start_info(header: &HeaderHandler) -> Option<EpochStartInfo> {
    if header.shard_id() != METACHAIN_SHARD_ID {
        return None;
    }
    let meta_block = header.as_meta_block()?;
    if !meta_block.is_start_of_epoch_block() {
        return None;
    }

    let economics = &meta_block.epoch_start.economics;
    Some(EpochStartInfo {
        total_supply: get_bytes(economics.total_supply.as_ref()),
        total_to_distribute: get_bytes(economics.total_to_distribute.as_ref()),
        total_newly_minted: get_bytes(economics.total_newly_minted.as_ref()),
        rewards_per_block: get_bytes(economics.rewards_per_block.as_ref()),
        rewards_for_protocol_sustainability: get_bytes(
            economics.rewards_for_protocol_sustainability.as_ref(),
        ),
        node_price: get_bytes(economics.node_price.as_ref()),
        prev_epoch_start_round: economics.prev_epoch_start_round as i64,
        prev_epoch_start_hash: economics.prev_epoch_start_hash.clone(),
    })
}
