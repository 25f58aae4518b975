use serde::{Deserialize, Serialize};

///
/// Indexed form of a normal, invalid or reward transaction.
///
/// `sender` and `receiver` hold the display form of the address.
///
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct Transaction {
    pub hash: Vec<u8>,
    pub mini_block_hash: Vec<u8>,
    pub block_hash: Vec<u8>,
    pub nonce: i64,
    pub round: i64,
    pub value: Option<Vec<u8>>,
    pub receiver: Vec<u8>,
    pub sender: Vec<u8>,
    pub receiver_shard: i32,
    pub sender_shard: i32,
    pub gas_price: i64,
    pub gas_limit: i64,
    pub data: Vec<u8>,
    pub signature: Vec<u8>,
    pub timestamp: i64,
    pub sender_user_name: Option<Vec<u8>>,
    pub receiver_user_name: Option<Vec<u8>>,
}
