use crate::codec::{AddressEncoder, Hasher, MarshalError, Marshaler};
use crate::ledger::header::METACHAIN_SHARD_ID;
use primitive_types::U256;
use serde::Serialize;

///
/// Sender recorded for reward transactions, which are issued by the
/// protocol rather than an account: the metachain shard id, big-endian.
///
pub const METACHAIN_SENDER_ADDRESS: [u8; 4] = METACHAIN_SHARD_ID.to_be_bytes();

///
/// Minimal big-endian bytes of a big integer.
///
/// `None` stays `None`; zero becomes an empty vector, so an absent
/// value and a zero value remain distinguishable downstream.
///
pub fn get_bytes(val: Option<&U256>) -> Option<Vec<u8>> {
    let val = val?;
    let mut buf = [0u8; 32];
    val.to_big_endian(&mut buf);
    let len = (val.bits() + 7) / 8;
    Some(buf[32 - len..].to_vec())
}

/// hash of the marshaled object
pub fn calculate_hash<M, T>(
    marshaler: &M,
    hasher: &dyn Hasher,
    obj: &T,
) -> Result<Vec<u8>, MarshalError>
where
    M: Marshaler,
    T: Serialize + ?Sized,
{
    let bytes = marshaler.marshal(obj)?;
    Ok(hasher.compute(&bytes))
}

/// empty keys encode to empty addresses
pub fn encode_pub_key(encoder: &dyn AddressEncoder, pub_key: &[u8]) -> Vec<u8> {
    if pub_key.is_empty() {
        return Vec::new();
    }
    encoder.encode(pub_key).into_bytes()
}

pub fn u64_slice_to_i64_vec(values: &[u64]) -> Vec<i64> {
    values.iter().map(|v| *v as i64).collect()
}
