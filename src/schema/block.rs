use serde::{Deserialize, Serialize};

///
/// Indexed form of a committed block.
///
/// Big integer fields hold minimal big-endian bytes: `None` when the
/// header carries no value, an empty vector for a zero value.
///
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct Block {
    pub nonce: i64,
    pub round: i64,
    pub epoch: i32,
    pub hash: Vec<u8>,
    pub mini_blocks: Vec<MiniBlock>,
    pub notarized_blocks_hashes: Vec<Vec<u8>>,
    pub proposer: i64,
    pub validators: Vec<i64>,
    pub pub_keys_bitmap: Vec<u8>,
    /// marshaled header plus marshaled body, in bytes
    pub size: i64,
    /// marshaled pool entries, in bytes
    pub size_txs: i64,
    pub timestamp: i64,
    pub state_root_hash: Vec<u8>,
    pub prev_hash: Vec<u8>,
    pub shard_id: i32,
    pub tx_count: i32,
    pub accumulated_fees: Option<Vec<u8>>,
    pub developer_fees: Option<Vec<u8>>,
    pub epoch_start_block: bool,
    pub epoch_start_info: Option<EpochStartInfo>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct MiniBlock {
    pub hash: Vec<u8>,
    pub sender_shard_id: i32,
    pub receiver_shard_id: i32,
    pub mb_type: i32,
    pub timestamp: i64,
}

/// Economics snapshot of a metachain epoch-start block.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct EpochStartInfo {
    pub total_supply: Option<Vec<u8>>,
    pub total_to_distribute: Option<Vec<u8>>,
    pub total_newly_minted: Option<Vec<u8>>,
    pub rewards_per_block: Option<Vec<u8>>,
    pub rewards_for_protocol_sustainability: Option<Vec<u8>>,
    pub node_price: Option<Vec<u8>>,
    pub prev_epoch_start_round: i64,
    pub prev_epoch_start_hash: Vec<u8>,
}
