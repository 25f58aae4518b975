use crate::codec::{Hasher, Marshaler};
use crate::ledger::body::{BodyHandler, MiniBlock};
use crate::ledger::header::HeaderHandler;
use crate::logging::Logger;
use crate::process::errors::{ProcessError, ProcessResult};
use crate::process::utility::calculate_hash;
use crate::process::MiniBlockHandler;
use crate::schema;
use std::sync::Arc;

pub const LOG_TARGET: &str = "covalent/process/miniblocks";

///
/// Summarizes every mini block of a body, whatever its type.
///
pub struct MiniBlocksProcessor<M> {
    marshaler: M,
    hasher: Arc<dyn Hasher>,
    log: Arc<dyn Logger>,
}

impl<M: Marshaler> MiniBlocksProcessor<M> {
    pub fn new(hasher: Arc<dyn Hasher>, marshaler: M, log: Arc<dyn Logger>) -> Self {
        MiniBlocksProcessor {
            marshaler,
            hasher,
            log,
        }
    }

    fn process_mini_block(
        &self,
        index: usize,
        mini_block: &MiniBlock,
        header: &HeaderHandler,
    ) -> ProcessResult<schema::MiniBlock> {
        let hash = calculate_hash(&self.marshaler, self.hasher.as_ref(), mini_block)
            .map_err(|source| ProcessError::MiniBlockHash { index, source })?;

        Ok(schema::MiniBlock {
            hash,
            sender_shard_id: mini_block.sender_shard_id as i32,
            receiver_shard_id: mini_block.receiver_shard_id as i32,
            mb_type: mini_block.mb_type.code(),
            timestamp: header.timestamp() as i64,
        })
    }
}

impl<M: Marshaler> MiniBlockHandler for MiniBlocksProcessor<M> {
    fn process_mini_blocks(
        &self,
        _header_hash: &[u8],
        header: &HeaderHandler,
        body: &BodyHandler,
    ) -> ProcessResult<Vec<schema::MiniBlock>> {
        let body = body.as_block_body().ok_or(ProcessError::BodyType)?;

        let mut mini_blocks = Vec::with_capacity(body.mini_blocks.len());
        for (index, mini_block) in body.mini_blocks.iter().enumerate() {
            match self.process_mini_block(index, mini_block, header) {
                Ok(summary) => mini_blocks.push(summary),
                Err(e) => self.log.warn(format_args!("mini blocks processor: {}", e)),
            }
        }
        Ok(mini_blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{BincodeMarshaler, Blake2bHasher};
    use crate::ledger::body::MiniBlockType;
    use crate::process::testutil::*;
    use log::Level;

    #[test]
    fn test_summaries_follow_body_order() {
        let processor = MiniBlocksProcessor::new(
            Arc::new(Blake2bHasher),
            BincodeMarshaler,
            Arc::new(RecordingLogger::default()),
        );
        let first = mini_block(MiniBlockType::Normal, 0, 1, &[b"a"]);
        let second = mini_block(MiniBlockType::Rewards, u32::MAX, 0, &[b"r"]);
        let mut header = shard_header(5, 10, 2, 0);
        header.timestamp = 42;

        let summaries = processor
            .process_mini_blocks(
                HEADER_HASH,
                &header.into(),
                &body_of(vec![first.clone(), second]).into(),
            )
            .unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(
            summaries[0].hash,
            calculate_hash(&BincodeMarshaler, &Blake2bHasher, &first).unwrap()
        );
        assert_eq!(summaries[0].sender_shard_id, 0);
        assert_eq!(summaries[0].receiver_shard_id, 1);
        assert_eq!(summaries[0].mb_type, 0);
        assert_eq!(summaries[0].timestamp, 42);
        assert_eq!(summaries[1].mb_type, 255);
        assert_eq!(summaries[1].sender_shard_id, -1);
    }

    #[test]
    fn test_rejects_encoded_body() {
        let processor = MiniBlocksProcessor::new(
            Arc::new(Blake2bHasher),
            BincodeMarshaler,
            Arc::new(RecordingLogger::default()),
        );
        let err = processor
            .process_mini_blocks(
                HEADER_HASH,
                &shard_header(5, 10, 2, 0).into(),
                &BodyHandler::Encoded(vec![0]),
            )
            .unwrap_err();
        assert!(matches!(err, ProcessError::BodyType));
    }

    #[test]
    fn test_unhashable_mini_block_is_skipped() {
        let log = Arc::new(RecordingLogger::default());
        let processor = MiniBlocksProcessor::new(
            Arc::new(Blake2bHasher),
            PoisonMarshaler::new(POISON),
            log.clone(),
        );
        let mut poisoned = mini_block(MiniBlockType::Normal, 0, 0, &[b"a"]);
        poisoned.reserved = POISON.to_vec();
        let healthy = mini_block(MiniBlockType::Invalid, 0, 0, &[b"b"]);

        let summaries = processor
            .process_mini_blocks(
                HEADER_HASH,
                &shard_header(5, 10, 2, 0).into(),
                &body_of(vec![poisoned, healthy]).into(),
            )
            .unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].mb_type, 120);
        assert_eq!(log.count(Level::Warn), 1);
    }
}
