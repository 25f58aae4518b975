use crate::codec::marshal::MarshalError;
use thiserror::Error;

pub type ProcessResult<T> = Result<T, ProcessError>;

#[derive(Error, Debug)]
pub enum ProcessError {
    /// the body is not a decoded block body
    #[error("block body assertion failed: body is not a decoded block body")]
    BodyType,
    #[error("serialization failed: {0}")]
    Serialization(#[from] MarshalError),
    /// hashing of a single mini block failed, only that mini block is lost
    #[error("cannot compute hash of mini block #{index}: {source}")]
    MiniBlockHash {
        index: usize,
        #[source]
        source: MarshalError,
    },
}
