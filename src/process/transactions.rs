use crate::codec::{AddressEncoder, Hasher, Marshaler};
use crate::ledger::body::{BodyHandler, MiniBlock, MiniBlockType};
use crate::ledger::header::HeaderHandler;
use crate::ledger::pool::{Pool, TxMap};
use crate::ledger::transaction::{RewardTx, Transaction, TxPayload};
use crate::logging::Logger;
use crate::process::errors::{ProcessError, ProcessResult};
use crate::process::utility::{
    calculate_hash, encode_pub_key, get_bytes, METACHAIN_SENDER_ADDRESS,
};
use crate::process::TransactionHandler;
use crate::schema;
use std::sync::Arc;

pub const LOG_TARGET: &str = "covalent/process/transactions";

/// References that tie a transaction record to its mini block and block.
struct TxContext<'a> {
    mini_block: &'a MiniBlock,
    mini_block_hash: &'a [u8],
    block_hash: &'a [u8],
    header: &'a HeaderHandler,
}

pub struct TransactionProcessor<M> {
    marshaler: M,
    hasher: Arc<dyn Hasher>,
    address_encoder: Arc<dyn AddressEncoder>,
    log: Arc<dyn Logger>,
}

impl<M: Marshaler> TransactionProcessor<M> {
    pub fn new(
        address_encoder: Arc<dyn AddressEncoder>,
        hasher: Arc<dyn Hasher>,
        marshaler: M,
        log: Arc<dyn Logger>,
    ) -> Self {
        TransactionProcessor {
            marshaler,
            hasher,
            address_encoder,
            log,
        }
    }

    ///
    /// Records of the transactions listed by one mini block, in listed order.
    ///
    /// Fails only if the mini block itself cannot be hashed. Hashes missing
    /// from the pool are logged and skipped, payloads of the wrong kind are
    /// skipped.
    ///
    fn process_txs_from_mini_block(
        &self,
        index: usize,
        transactions: &TxMap,
        mini_block: &MiniBlock,
        header: &HeaderHandler,
        block_hash: &[u8],
    ) -> ProcessResult<Vec<schema::Transaction>> {
        let mini_block_hash =
            calculate_hash(&self.marshaler, self.hasher.as_ref(), mini_block)
                .map_err(|source| ProcessError::MiniBlockHash { index, source })?;
        let ctx = TxContext {
            mini_block,
            mini_block_hash: &mini_block_hash,
            block_hash,
            header,
        };

        let mut txs = Vec::with_capacity(mini_block.tx_hashes.len());
        for tx_hash in &mini_block.tx_hashes {
            let tx = match transactions.get(tx_hash) {
                Some(tx) => tx,
                None => {
                    self.log.warn(format_args!(
                        "transaction processor: tx hash not found in tx pool, hash {}",
                        hex::encode(tx_hash)
                    ));
                    continue;
                }
            };
            if let Some(processed) = self.process_transaction(tx, tx_hash, &ctx) {
                txs.push(processed);
            }
        }
        Ok(txs)
    }

    fn process_transaction(
        &self,
        tx: &TxPayload,
        tx_hash: &[u8],
        ctx: &TxContext,
    ) -> Option<schema::Transaction> {
        match ctx.mini_block.mb_type {
            MiniBlockType::Normal | MiniBlockType::Invalid => {
                Some(self.process_normal_transaction(tx.as_normal()?, tx_hash, ctx))
            }
            MiniBlockType::Rewards => {
                Some(self.process_reward_transaction(tx.as_reward()?, tx_hash, ctx))
            }
            _ => None,
        }
    }

    fn process_normal_transaction(
        &self,
        tx: &Transaction,
        tx_hash: &[u8],
        ctx: &TxContext,
    ) -> schema::Transaction {
        schema::Transaction {
            hash: tx_hash.to_vec(),
            mini_block_hash: ctx.mini_block_hash.to_vec(),
            block_hash: ctx.block_hash.to_vec(),
            nonce: tx.nonce as i64,
            round: ctx.header.round() as i64,
            value: get_bytes(tx.value.as_ref()),
            receiver: encode_pub_key(self.address_encoder.as_ref(), &tx.rcv_addr),
            sender: encode_pub_key(self.address_encoder.as_ref(), &tx.snd_addr),
            receiver_shard: ctx.mini_block.receiver_shard_id as i32,
            sender_shard: ctx.mini_block.sender_shard_id as i32,
            gas_price: tx.gas_price as i64,
            gas_limit: tx.gas_limit as i64,
            data: tx.data.clone(),
            signature: tx.signature.clone(),
            timestamp: ctx.header.timestamp() as i64,
            sender_user_name: tx.snd_user_name.clone(),
            receiver_user_name: tx.rcv_user_name.clone(),
        }
    }

    ///
    /// Rewards are stamped with the round of the epoch boundary they pay
    /// for, not the round of the block carrying them.
    ///
    fn process_reward_transaction(
        &self,
        tx: &RewardTx,
        tx_hash: &[u8],
        ctx: &TxContext,
    ) -> schema::Transaction {
        schema::Transaction {
            hash: tx_hash.to_vec(),
            mini_block_hash: ctx.mini_block_hash.to_vec(),
            block_hash: ctx.block_hash.to_vec(),
            nonce: 0,
            round: tx.round as i64,
            value: get_bytes(tx.value.as_ref()),
            receiver: encode_pub_key(self.address_encoder.as_ref(), &tx.rcv_addr),
            sender: METACHAIN_SENDER_ADDRESS.to_vec(),
            receiver_shard: ctx.mini_block.receiver_shard_id as i32,
            sender_shard: ctx.mini_block.sender_shard_id as i32,
            gas_price: 0,
            gas_limit: 0,
            data: Vec::new(),
            signature: Vec::new(),
            timestamp: ctx.header.timestamp() as i64,
            sender_user_name: None,
            receiver_user_name: None,
        }
    }
}

impl<M: Marshaler> TransactionHandler for TransactionProcessor<M> {
    fn process_transactions(
        &self,
        header: &HeaderHandler,
        header_hash: &[u8],
        body: &BodyHandler,
        pool: &Pool,
    ) -> ProcessResult<Vec<schema::Transaction>> {
        let body = body.as_block_body().ok_or(ProcessError::BodyType)?;

        let mut all_txs =
            Vec::with_capacity(pool.txs.len() + pool.rewards.len() + pool.invalid.len());
        for (index, mini_block) in body.mini_blocks.iter().enumerate() {
            let transactions = match pool.partition_for(mini_block.mb_type) {
                Some(transactions) => transactions,
                None => continue,
            };

            match self.process_txs_from_mini_block(
                index,
                transactions,
                mini_block,
                header,
                header_hash,
            ) {
                Ok(txs) => all_txs.extend(txs),
                Err(e) => self.log.warn(format_args!("transaction processor: {}", e)),
            }
        }

        Ok(all_txs)
    }
}
