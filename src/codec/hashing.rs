use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use bitcoin_hashes::{sha256, Hash};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Deterministic bytes to digest function.
pub trait Hasher: Send + Sync {
    fn compute(&self, data: &[u8]) -> Vec<u8>;

    /// digest length in bytes
    fn size(&self) -> usize;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Hasher;

impl Hasher for Sha256Hasher {
    fn compute(&self, data: &[u8]) -> Vec<u8> {
        sha256::Hash::hash(data).into_inner().to_vec()
    }

    fn size(&self) -> usize {
        sha256::Hash::LEN
    }
}

/// 256 bit blake2b, the digest used by the node for block data
#[derive(Clone, Copy, Debug, Default)]
pub struct Blake2bHasher;

impl Hasher for Blake2bHasher {
    fn compute(&self, data: &[u8]) -> Vec<u8> {
        let mut hasher = Blake2b::<U32>::new();
        hasher.update(data);
        hasher.finalize().to_vec()
    }

    fn size(&self) -> usize {
        32
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum HasherKind {
    #[default]
    Blake2b,
    Sha256,
}

impl HasherKind {
    pub fn build(self) -> Arc<dyn Hasher> {
        match self {
            HasherKind::Blake2b => Arc::new(Blake2bHasher),
            HasherKind::Sha256 => Arc::new(Sha256Hasher),
        }
    }
}
