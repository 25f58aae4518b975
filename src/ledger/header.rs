use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Shard id of the coordinating chain.
pub const METACHAIN_SHARD_ID: u32 = u32::MAX;

///
/// Header of a committed block.
///
/// Shard chains and the metachain commit different header layouts,
/// the indexer reads both through the accessors below.
///
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub enum HeaderHandler {
    Shard(ShardHeader),
    Meta(MetaBlock),
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct ShardHeader {
    pub nonce: u64,
    pub round: u64,
    pub epoch: u32,
    pub shard_id: u32,
    pub timestamp: u64,
    pub root_hash: Vec<u8>,
    pub prev_hash: Vec<u8>,
    pub pub_keys_bitmap: Vec<u8>,
    pub tx_count: u32,
    pub accumulated_fees: Option<U256>,
    pub developer_fees: Option<U256>,
    /// hash of the metachain epoch-start block this header follows, if any
    pub epoch_start_meta_hash: Vec<u8>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct MetaBlock {
    pub nonce: u64,
    pub round: u64,
    pub epoch: u32,
    pub timestamp: u64,
    pub root_hash: Vec<u8>,
    pub prev_hash: Vec<u8>,
    pub pub_keys_bitmap: Vec<u8>,
    pub tx_count: u32,
    pub accumulated_fees: Option<U256>,
    pub developer_fees: Option<U256>,
    pub epoch_start: EpochStart,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct EpochStart {
    pub last_finalized_headers: Vec<EpochStartShardData>,
    pub economics: Economics,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct EpochStartShardData {
    pub shard_id: u32,
    pub epoch: u32,
    pub round: u64,
    pub nonce: u64,
    pub header_hash: Vec<u8>,
    pub root_hash: Vec<u8>,
}

///
/// Protocol-wide monetary figures recorded at an epoch boundary.
///
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct Economics {
    pub total_supply: Option<U256>,
    pub total_to_distribute: Option<U256>,
    pub total_newly_minted: Option<U256>,
    pub rewards_per_block: Option<U256>,
    pub rewards_for_protocol_sustainability: Option<U256>,
    pub node_price: Option<U256>,
    pub prev_epoch_start_round: u64,
    pub prev_epoch_start_hash: Vec<u8>,
}

impl HeaderHandler {
    pub fn nonce(&self) -> u64 {
        match self {
            HeaderHandler::Shard(h) => h.nonce,
            HeaderHandler::Meta(h) => h.nonce,
        }
    }

    pub fn round(&self) -> u64 {
        match self {
            HeaderHandler::Shard(h) => h.round,
            HeaderHandler::Meta(h) => h.round,
        }
    }

    pub fn epoch(&self) -> u32 {
        match self {
            HeaderHandler::Shard(h) => h.epoch,
            HeaderHandler::Meta(h) => h.epoch,
        }
    }

    pub fn shard_id(&self) -> u32 {
        match self {
            HeaderHandler::Shard(h) => h.shard_id,
            HeaderHandler::Meta(_) => METACHAIN_SHARD_ID,
        }
    }

    pub fn timestamp(&self) -> u64 {
        match self {
            HeaderHandler::Shard(h) => h.timestamp,
            HeaderHandler::Meta(h) => h.timestamp,
        }
    }

    pub fn root_hash(&self) -> &[u8] {
        match self {
            HeaderHandler::Shard(h) => &h.root_hash,
            HeaderHandler::Meta(h) => &h.root_hash,
        }
    }

    pub fn prev_hash(&self) -> &[u8] {
        match self {
            HeaderHandler::Shard(h) => &h.prev_hash,
            HeaderHandler::Meta(h) => &h.prev_hash,
        }
    }

    pub fn pub_keys_bitmap(&self) -> &[u8] {
        match self {
            HeaderHandler::Shard(h) => &h.pub_keys_bitmap,
            HeaderHandler::Meta(h) => &h.pub_keys_bitmap,
        }
    }

    pub fn tx_count(&self) -> u32 {
        match self {
            HeaderHandler::Shard(h) => h.tx_count,
            HeaderHandler::Meta(h) => h.tx_count,
        }
    }

    pub fn accumulated_fees(&self) -> Option<&U256> {
        match self {
            HeaderHandler::Shard(h) => h.accumulated_fees.as_ref(),
            HeaderHandler::Meta(h) => h.accumulated_fees.as_ref(),
        }
    }

    pub fn developer_fees(&self) -> Option<&U256> {
        match self {
            HeaderHandler::Shard(h) => h.developer_fees.as_ref(),
            HeaderHandler::Meta(h) => h.developer_fees.as_ref(),
        }
    }

    ///
    /// A shard header starts an epoch when it references the metachain
    /// epoch-start block, a meta block when it finalizes shard headers.
    ///
    pub fn is_start_of_epoch_block(&self) -> bool {
        match self {
            HeaderHandler::Shard(h) => !h.epoch_start_meta_hash.is_empty(),
            HeaderHandler::Meta(h) => h.is_start_of_epoch_block(),
        }
    }

    /// view this header as a meta block
    pub fn as_meta_block(&self) -> Option<&MetaBlock> {
        match self {
            HeaderHandler::Meta(h) => Some(h),
            HeaderHandler::Shard(_) => None,
        }
    }
}

impl MetaBlock {
    pub fn is_start_of_epoch_block(&self) -> bool {
        !self.epoch_start.last_finalized_headers.is_empty()
    }
}

impl From<ShardHeader> for HeaderHandler {
    fn from(header: ShardHeader) -> Self {
        HeaderHandler::Shard(header)
    }
}

impl From<MetaBlock> for HeaderHandler {
    fn from(header: MetaBlock) -> Self {
        HeaderHandler::Meta(header)
    }
}
