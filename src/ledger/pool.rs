use crate::ledger::body::MiniBlockType;
use crate::ledger::transaction::TxPayload;
use ahash::AHashMap;

/// transaction hash -> payload
pub type TxMap = AHashMap<Vec<u8>, TxPayload>;

///
/// Transactions committed with one block, split by category.
///
/// Valid for a single block-processing call.
///
#[derive(Clone, Debug, Default)]
pub struct Pool {
    pub txs: TxMap,
    pub rewards: TxMap,
    pub invalid: TxMap,
    pub receipts: TxMap,
    pub scrs: TxMap,
}

impl Pool {
    ///
    /// Partition holding the payloads of a mini block of type `mb_type`.
    ///
    /// Only normal, rewards and invalid mini blocks are indexed as
    /// transactions, other types have no partition here.
    ///
    pub fn partition_for(&self, mb_type: MiniBlockType) -> Option<&TxMap> {
        match mb_type {
            MiniBlockType::Normal => Some(&self.txs),
            MiniBlockType::Rewards => Some(&self.rewards),
            MiniBlockType::Invalid => Some(&self.invalid),
            _ => None,
        }
    }

    /// all five partitions, in a fixed order
    pub fn partitions(&self) -> [&TxMap; 5] {
        [
            &self.txs,
            &self.receipts,
            &self.invalid,
            &self.rewards,
            &self.scrs,
        ]
    }
}
