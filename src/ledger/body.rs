use serde::{Deserialize, Serialize};

///
/// Block body as handed over by the node.
///
/// Only a decoded `Body` can be indexed; a body still in its
/// wire encoding is rejected by every processor.
///
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub enum BodyHandler {
    Block(Body),
    Encoded(Vec<u8>),
}

impl BodyHandler {
    pub fn as_block_body(&self) -> Option<&Body> {
        match self {
            BodyHandler::Block(body) => Some(body),
            BodyHandler::Encoded(_) => None,
        }
    }
}

impl From<Body> for BodyHandler {
    fn from(body: Body) -> Self {
        BodyHandler::Block(body)
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct Body {
    pub mini_blocks: Vec<MiniBlock>,
}

///
/// Typed batch of transaction references moving from one shard to another.
///
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct MiniBlock {
    pub tx_hashes: Vec<Vec<u8>>,
    pub receiver_shard_id: u32,
    pub sender_shard_id: u32,
    pub mb_type: MiniBlockType,
    pub reserved: Vec<u8>,
}

impl MiniBlock {
    pub fn new(mb_type: MiniBlockType, sender_shard_id: u32, receiver_shard_id: u32) -> Self {
        MiniBlock {
            tx_hashes: Vec::new(),
            receiver_shard_id,
            sender_shard_id,
            mb_type,
            reserved: Vec::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MiniBlockType {
    Normal,
    State,
    Peer,
    SmartContractResult,
    Invalid,
    Receipt,
    Rewards,
}

impl MiniBlockType {
    /// numeric tag used by the node
    pub fn code(self) -> i32 {
        match self {
            MiniBlockType::Normal => 0,
            MiniBlockType::State => 30,
            MiniBlockType::Peer => 60,
            MiniBlockType::SmartContractResult => 90,
            MiniBlockType::Invalid => 120,
            MiniBlockType::Receipt => 150,
            MiniBlockType::Rewards => 255,
        }
    }
}
