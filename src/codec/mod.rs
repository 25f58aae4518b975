//!
//! Collaborators the processors are built from: marshaling,
//! hashing and address encoding.
//!

/// object to bytes encoders
pub mod marshal;

/// digest functions
pub mod hashing;

/// public key display forms
pub mod address;

pub use address::{AddressEncoder, Bech32AddressEncoder, HexAddressEncoder};
pub use hashing::{Blake2bHasher, Hasher, HasherKind, Sha256Hasher};
pub use marshal::{BincodeMarshaler, MarshalError, Marshaler, MarshalerKind};
#[cfg(feature = "json")]
pub use marshal::JsonMarshaler;
