use primitive_types::U256;
use serde::{Deserialize, Serialize};

///
/// Pool entry, one variant per kind of transaction the node commits.
///
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub enum TxPayload {
    Normal(Transaction),
    Reward(RewardTx),
    SmartContractResult(SmartContractResult),
    Receipt(Receipt),
}

impl TxPayload {
    pub fn as_normal(&self) -> Option<&Transaction> {
        match self {
            TxPayload::Normal(tx) => Some(tx),
            _ => None,
        }
    }

    pub fn as_reward(&self) -> Option<&RewardTx> {
        match self {
            TxPayload::Reward(tx) => Some(tx),
            _ => None,
        }
    }
}

/// User transaction, also the payload of invalid mini blocks.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct Transaction {
    pub nonce: u64,
    pub value: Option<U256>,
    pub rcv_addr: Vec<u8>,
    pub rcv_user_name: Option<Vec<u8>>,
    pub snd_addr: Vec<u8>,
    pub snd_user_name: Option<Vec<u8>>,
    pub gas_price: u64,
    pub gas_limit: u64,
    pub data: Vec<u8>,
    pub chain_id: Vec<u8>,
    pub version: u32,
    pub signature: Vec<u8>,
}

///
/// Protocol reward paid at an epoch boundary. Rewards have no sender,
/// nonce or gas.
///
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct RewardTx {
    pub round: u64,
    pub epoch: u32,
    pub value: Option<U256>,
    pub rcv_addr: Vec<u8>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct SmartContractResult {
    pub nonce: u64,
    pub value: Option<U256>,
    pub rcv_addr: Vec<u8>,
    pub snd_addr: Vec<u8>,
    pub relayer_addr: Vec<u8>,
    pub relayed_value: Option<U256>,
    pub code: Vec<u8>,
    pub data: Vec<u8>,
    pub prev_tx_hash: Vec<u8>,
    pub original_tx_hash: Vec<u8>,
    pub gas_limit: u64,
    pub gas_price: u64,
    pub call_type: i32,
    pub return_message: Vec<u8>,
    pub original_sender: Vec<u8>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct Receipt {
    pub value: Option<U256>,
    pub snd_addr: Vec<u8>,
    pub data: Vec<u8>,
    pub tx_hash: Vec<u8>,
}
