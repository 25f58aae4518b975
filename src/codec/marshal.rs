use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarshalError {
    #[error("bincode: {0}")]
    Bincode(#[from] bincode::Error),
    #[cfg(feature = "json")]
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Custom(String),
}

impl From<&str> for MarshalError {
    fn from(msg: &str) -> Self {
        MarshalError::Custom(msg.to_owned())
    }
}

///
/// Deterministic object to bytes encoder.
///
/// The same object must always marshal to the same bytes, since
/// block sizes and mini block hashes are derived from the output.
///
pub trait Marshaler: Send + Sync {
    fn marshal<T: Serialize + ?Sized>(&self, obj: &T) -> Result<Vec<u8>, MarshalError>;
}

/// compact binary encoding
#[derive(Clone, Copy, Debug, Default)]
pub struct BincodeMarshaler;

impl Marshaler for BincodeMarshaler {
    fn marshal<T: Serialize + ?Sized>(&self, obj: &T) -> Result<Vec<u8>, MarshalError> {
        Ok(bincode::serialize(obj)?)
    }
}

#[cfg(feature = "json")]
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonMarshaler;

#[cfg(feature = "json")]
impl Marshaler for JsonMarshaler {
    fn marshal<T: Serialize + ?Sized>(&self, obj: &T) -> Result<Vec<u8>, MarshalError> {
        Ok(serde_json::to_vec(obj)?)
    }
}

///
/// Marshaler picked at runtime from configuration.
///
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum MarshalerKind {
    #[default]
    Bincode,
    #[cfg(feature = "json")]
    Json,
}

impl Marshaler for MarshalerKind {
    fn marshal<T: Serialize + ?Sized>(&self, obj: &T) -> Result<Vec<u8>, MarshalError> {
        match self {
            MarshalerKind::Bincode => BincodeMarshaler.marshal(obj),
            #[cfg(feature = "json")]
            MarshalerKind::Json => JsonMarshaler.marshal(obj),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::body::{Body, MiniBlock, MiniBlockType};

    fn body() -> Body {
        let mut mb = MiniBlock::new(MiniBlockType::Normal, 0, 1);
        mb.tx_hashes.push(b"h1".to_vec());
        Body {
            mini_blocks: vec![mb],
        }
    }

    #[test]
    fn test_bincode_is_deterministic() {
        let first = BincodeMarshaler.marshal(&body()).unwrap();
        let second = MarshalerKind::Bincode.marshal(&body()).unwrap();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_kind_dispatch() {
        let bytes = MarshalerKind::Json.marshal(&body()).unwrap();
        assert_eq!(bytes, serde_json::to_vec(&body()).unwrap());
    }
}
