//!
//! Indexer configuration, read from TOML.
//!
//! ```toml
//! marshaler = "bincode"
//! hasher = "blake2b"
//!
//! [address]
//! encoding = "bech32"
//! hrp = "erd"
//! ```
//!
use crate::codec::address::AddressPrefixError;
use crate::codec::{
    AddressEncoder, Bech32AddressEncoder, HasherKind, HexAddressEncoder, MarshalerKind,
};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

pub const DEFAULT_ADDRESS_HRP: &str = "erd";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    AddressPrefix(#[from] AddressPrefixError),
}

#[derive(Deserialize, Clone, PartialEq, Eq, Debug, Default)]
#[serde(default, deny_unknown_fields)]
pub struct IndexerConfig {
    pub marshaler: MarshalerKind,
    pub hasher: HasherKind,
    pub address: AddressConfig,
}

#[derive(Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct AddressConfig {
    pub encoding: AddressEncoding,
    /// human readable part, bech32 only
    pub hrp: String,
}

impl Default for AddressConfig {
    fn default() -> Self {
        AddressConfig {
            encoding: AddressEncoding::Bech32,
            hrp: DEFAULT_ADDRESS_HRP.to_owned(),
        }
    }
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum AddressEncoding {
    Bech32,
    Hex,
}

impl IndexerConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        IndexerConfig::from_toml_str(&content)
    }
}

impl AddressConfig {
    pub fn build_encoder(&self) -> Result<Arc<dyn AddressEncoder>, ConfigError> {
        Ok(match self.encoding {
            AddressEncoding::Bech32 => Arc::new(Bech32AddressEncoder::new(&self.hrp)?),
            AddressEncoding::Hex => Arc::new(HexAddressEncoder),
        })
    }
}
