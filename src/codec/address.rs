use bitcoin::bech32::{self, ToBase32, Variant};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid bech32 prefix {hrp:?}: {reason}")]
pub struct AddressPrefixError {
    pub hrp: String,
    pub reason: String,
}

///
/// Turns raw public key bytes into the address form shown to users.
///
pub trait AddressEncoder: Send + Sync {
    fn encode(&self, pub_key: &[u8]) -> String;
}

///
/// Bech32 addresses with a fixed human readable part, e.g. `erd1...`.
///
#[derive(Clone, Debug)]
pub struct Bech32AddressEncoder {
    hrp: String,
}

impl Bech32AddressEncoder {
    /// the prefix is checked once here, so that `encode` cannot fail later
    pub fn new(hrp: &str) -> Result<Self, AddressPrefixError> {
        match bech32::encode(hrp, [0u8; 32].to_base32(), Variant::Bech32) {
            Ok(_) => Ok(Bech32AddressEncoder {
                hrp: hrp.to_owned(),
            }),
            Err(e) => Err(AddressPrefixError {
                hrp: hrp.to_owned(),
                reason: e.to_string(),
            }),
        }
    }

    pub fn hrp(&self) -> &str {
        &self.hrp
    }
}

impl AddressEncoder for Bech32AddressEncoder {
    fn encode(&self, pub_key: &[u8]) -> String {
        bech32::encode(&self.hrp, pub_key.to_base32(), Variant::Bech32).unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct HexAddressEncoder;

impl AddressEncoder for HexAddressEncoder {
    fn encode(&self, pub_key: &[u8]) -> String {
        hex::encode(pub_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bech32_prefix() {
        let encoder = Bech32AddressEncoder::new("erd").unwrap();
        assert_eq!(encoder.hrp(), "erd");
        let address = encoder.encode(&[7u8; 32]);
        assert!(address.starts_with("erd1"));
        // 3 hrp + separator + 52 data + 6 checksum
        assert_eq!(address.len(), 62);
    }

    #[test]
    fn test_bech32_invalid_prefix() {
        assert!(Bech32AddressEncoder::new("").is_err());
        assert!(Bech32AddressEncoder::new("Erd").is_err());
    }

    #[test]
    fn test_hex() {
        assert_eq!(HexAddressEncoder.encode(&[0xab, 0x01]), "ab01");
    }
}
