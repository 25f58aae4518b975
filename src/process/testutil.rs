//!
//! Stubs and fixtures shared by the processor tests.
//!
use crate::codec::{MarshalError, Marshaler};
use crate::ledger::body::{Body, BodyHandler, MiniBlock, MiniBlockType};
use crate::ledger::header::{HeaderHandler, ShardHeader};
use crate::ledger::pool::Pool;
use crate::ledger::transaction::{RewardTx, Transaction, TxPayload};
use crate::ledger::ArgsSaveBlockData;
use crate::logging::Logger;
use crate::process::errors::{ProcessError, ProcessResult};
use crate::process::MiniBlockHandler;
use crate::schema;
use log::Level;
use primitive_types::U256;
use serde::Serialize;
use std::fmt;
use std::sync::Mutex;

pub const HEADER_HASH: &[u8] = b"header-hash";

/// marker making `PoisonMarshaler` fail
pub const POISON: &[u8] = b"\xde\xad-poison-\xbe\xef";

pub fn shard_header(nonce: u64, round: u64, epoch: u32, shard_id: u32) -> ShardHeader {
    ShardHeader {
        nonce,
        round,
        epoch,
        shard_id,
        ..Default::default()
    }
}

pub fn mini_block<H: AsRef<[u8]>>(
    mb_type: MiniBlockType,
    sender_shard_id: u32,
    receiver_shard_id: u32,
    hashes: &[H],
) -> MiniBlock {
    let mut mb = MiniBlock::new(mb_type, sender_shard_id, receiver_shard_id);
    mb.tx_hashes = hashes.iter().map(|h| h.as_ref().to_vec()).collect();
    mb
}

pub fn body_of(mini_blocks: Vec<MiniBlock>) -> Body {
    Body { mini_blocks }
}

pub fn block_args(header: impl Into<HeaderHandler>, body: Body) -> ArgsSaveBlockData {
    ArgsSaveBlockData {
        header_hash: HEADER_HASH.to_vec(),
        header: header.into(),
        body: BodyHandler::Block(body),
        pool: Pool::default(),
        notarized_headers_hashes: Vec::new(),
        signers_indexes: Vec::new(),
    }
}

pub fn normal_tx(nonce: u64, value: u64, snd_addr: &[u8], rcv_addr: &[u8]) -> Transaction {
    Transaction {
        nonce,
        value: Some(U256::from(value)),
        snd_addr: snd_addr.to_vec(),
        rcv_addr: rcv_addr.to_vec(),
        gas_price: 1_000_000_000,
        gas_limit: 50_000,
        data: b"data".to_vec(),
        signature: b"signature".to_vec(),
        ..Default::default()
    }
}

pub fn normal_payload(nonce: u64, value: u64, snd_addr: &[u8], rcv_addr: &[u8]) -> TxPayload {
    TxPayload::Normal(normal_tx(nonce, value, snd_addr, rcv_addr))
}

pub fn reward_payload(round: u64, value: u64, rcv_addr: &[u8]) -> TxPayload {
    TxPayload::Reward(RewardTx {
        round,
        epoch: 1,
        value: Some(U256::from(value)),
        rcv_addr: rcv_addr.to_vec(),
    })
}

#[derive(Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<(Level, String)>>,
}

impl RecordingLogger {
    pub fn count(&self, level: Level) -> usize {
        let entries = self.entries.lock().unwrap();
        entries.iter().filter(|(l, _)| *l == level).count()
    }

    pub fn contains(&self, needle: &str) -> bool {
        let entries = self.entries.lock().unwrap();
        entries.iter().any(|(_, message)| message.contains(needle))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, level: Level, message: fmt::Arguments<'_>) {
        self.entries.lock().unwrap().push((level, message.to_string()));
    }
}

fn type_ends_with<T: ?Sized>(suffix: &str) -> bool {
    std::any::type_name::<T>().ends_with(suffix)
}

/// Returns zero-filled output of a fixed size per marshaled type.
pub struct SizedMarshaler {
    header: usize,
    body: usize,
    other: usize,
}

impl SizedMarshaler {
    pub fn new(header: usize, body: usize, other: usize) -> Self {
        SizedMarshaler {
            header,
            body,
            other,
        }
    }
}

impl Marshaler for SizedMarshaler {
    fn marshal<T: Serialize + ?Sized>(&self, _obj: &T) -> Result<Vec<u8>, MarshalError> {
        let len = if type_ends_with::<T>("::HeaderHandler") {
            self.header
        } else if type_ends_with::<T>("::Body") {
            self.body
        } else {
            self.other
        };
        Ok(vec![0; len])
    }
}

/// Fails for one type, bincode for the rest.
pub struct FailingMarshaler {
    suffix: &'static str,
}

impl FailingMarshaler {
    pub fn on_type(suffix: &'static str) -> Self {
        FailingMarshaler { suffix }
    }
}

impl Marshaler for FailingMarshaler {
    fn marshal<T: Serialize + ?Sized>(&self, obj: &T) -> Result<Vec<u8>, MarshalError> {
        if type_ends_with::<T>(self.suffix) {
            return Err(MarshalError::from("marshal failure"));
        }
        Ok(bincode::serialize(obj)?)
    }
}

/// Fails for every object whose bincode encoding contains the marker.
pub struct PoisonMarshaler {
    marker: Vec<u8>,
}

impl PoisonMarshaler {
    pub fn new(marker: &[u8]) -> Self {
        PoisonMarshaler {
            marker: marker.to_vec(),
        }
    }
}

impl Marshaler for PoisonMarshaler {
    fn marshal<T: Serialize + ?Sized>(&self, obj: &T) -> Result<Vec<u8>, MarshalError> {
        let bytes = bincode::serialize(obj)?;
        if bytes.windows(self.marker.len()).any(|w| w == self.marker.as_slice()) {
            return Err(MarshalError::from("poisoned object"));
        }
        Ok(bytes)
    }
}

pub struct StubMiniBlocks {
    fail: bool,
}

impl StubMiniBlocks {
    pub fn ok() -> Self {
        StubMiniBlocks { fail: false }
    }

    pub fn failing() -> Self {
        StubMiniBlocks { fail: true }
    }
}

impl MiniBlockHandler for StubMiniBlocks {
    fn process_mini_blocks(
        &self,
        header_hash: &[u8],
        header: &HeaderHandler,
        _body: &BodyHandler,
    ) -> ProcessResult<Vec<schema::MiniBlock>> {
        if self.fail {
            return Err(ProcessError::MiniBlockHash {
                index: 3,
                source: MarshalError::from("summary"),
            });
        }
        Ok(vec![schema::MiniBlock {
            hash: header_hash.to_vec(),
            timestamp: header.timestamp() as i64,
            ..Default::default()
        }])
    }
}
