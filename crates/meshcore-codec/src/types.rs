//! Common types used in command arguments.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::CodecError;

/// A 6-byte public key prefix, the short destination form used by direct
/// messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PublicKeyPrefix(pub [u8; PUB_KEY_PREFIX_SIZE]);

impl PublicKeyPrefix {
    /// Create a new prefix from bytes.
    pub fn new(bytes: [u8; PUB_KEY_PREFIX_SIZE]) -> Self {
        PublicKeyPrefix(bytes)
    }

    /// Create from a slice holding at least 6 bytes (a full public key is
    /// fine). Returns None if the slice is too short.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() >= PUB_KEY_PREFIX_SIZE {
            let mut bytes = [0u8; PUB_KEY_PREFIX_SIZE];
            bytes.copy_from_slice(&slice[..PUB_KEY_PREFIX_SIZE]);
            Some(PublicKeyPrefix(bytes))
        } else {
            None
        }
    }

    /// Parse from a hex string of at least 6 bytes.
    pub fn from_hex(s: &str) -> Result<Self, CodecError> {
        let bytes = decode_hex("destination", s)?;
        Self::from_slice(&bytes).ok_or_else(|| {
            CodecError::invalid_argument(
                "destination",
                format!(
                    "key prefix needs {} bytes, got {}",
                    PUB_KEY_PREFIX_SIZE,
                    bytes.len()
                ),
            )
        })
    }

    /// Get the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; PUB_KEY_PREFIX_SIZE] {
        &self.0
    }

    /// Get the bytes as a hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl TryFrom<String> for PublicKeyPrefix {
    type Error = CodecError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<PublicKeyPrefix> for String {
    fn from(prefix: PublicKeyPrefix) -> Self {
        prefix.to_hex()
    }
}

impl fmt::Display for PublicKeyPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A destination identity for session-oriented commands (login, logout,
/// status, path discovery).
///
/// Holds between 1 and 32 bytes of a public key; it is always written to the
/// wire as a 32-byte field, zero-padded on the right.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Destination(Vec<u8>);

impl Destination {
    /// Create from a key or key prefix of 1..=32 bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, CodecError> {
        let bytes = bytes.into();
        if bytes.is_empty() || bytes.len() > PUB_KEY_SIZE {
            return Err(CodecError::invalid_argument(
                "destination",
                format!(
                    "identity must be 1..={} bytes, got {}",
                    PUB_KEY_SIZE,
                    bytes.len()
                ),
            ));
        }
        Ok(Destination(bytes))
    }

    /// Parse from a hex string.
    pub fn from_hex(s: &str) -> Result<Self, CodecError> {
        Self::new(decode_hex("destination", s)?)
    }

    /// The bytes as supplied, before padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The 32-byte wire form.
    pub fn padded(&self) -> [u8; PUB_KEY_SIZE] {
        let mut out = [0u8; PUB_KEY_SIZE];
        out[..self.0.len()].copy_from_slice(&self.0);
        out
    }

    /// Get the bytes as a hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl From<PublicKeyPrefix> for Destination {
    fn from(prefix: PublicKeyPrefix) -> Self {
        Destination(prefix.0.to_vec())
    }
}

impl From<[u8; PUB_KEY_SIZE]> for Destination {
    fn from(key: [u8; PUB_KEY_SIZE]) -> Self {
        Destination(key.to_vec())
    }
}

impl TryFrom<String> for Destination {
    type Error = CodecError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<Destination> for String {
    fn from(dest: Destination) -> Self {
        dest.to_hex()
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Statistics group selected by CMD_GET_STATS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatsKind {
    /// Battery, uptime, queue length.
    Core,
    /// Noise floor, RSSI, air time.
    Radio,
    /// Sent/received packet counters.
    Packets,
}

impl From<StatsKind> for u8 {
    fn from(kind: StatsKind) -> Self {
        match kind {
            StatsKind::Core => STATS_TYPE_CORE,
            StatsKind::Radio => STATS_TYPE_RADIO,
            StatsKind::Packets => STATS_TYPE_PACKETS,
        }
    }
}

fn decode_hex(field: &'static str, s: &str) -> Result<Vec<u8>, CodecError> {
    let s = s.trim();
    let s = s.strip_prefix("0x").unwrap_or(s);
    hex::decode(s).map_err(|e| CodecError::invalid_argument(field, format!("bad hex: {}", e)))
}

/// Serde adapter writing byte buffers as hex strings.
///
/// Works for `Vec<u8>` and the fixed-size arrays `hex` implements
/// [`hex::FromHex`] for.
pub mod hex_serde {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize bytes as a lowercase hex string.
    pub fn serialize<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: AsRef<[u8]>,
    {
        serializer.serialize_str(&hex::encode(value))
    }

    /// Deserialize bytes from a hex string.
    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: hex::FromHex,
        T::Error: std::fmt::Display,
    {
        let s = String::deserialize(deserializer)?;
        let s = s.trim();
        T::from_hex(s.strip_prefix("0x").unwrap_or(s)).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_from_full_key() {
        let key: Vec<u8> = (0u8..32).collect();
        let prefix = PublicKeyPrefix::from_slice(&key).unwrap();
        assert_eq!(prefix.as_bytes(), &[0, 1, 2, 3, 4, 5]);
        assert!(PublicKeyPrefix::from_slice(&key[..5]).is_none());
    }

    #[test]
    fn test_prefix_from_hex() {
        let prefix = PublicKeyPrefix::from_hex("0123456789AB").unwrap();
        assert_eq!(prefix.to_hex(), "0123456789ab");
        assert!(PublicKeyPrefix::from_hex("0123").is_err());
        assert!(PublicKeyPrefix::from_hex("zz23456789AB").is_err());
    }

    #[test]
    fn test_destination_padding() {
        let dest = Destination::from_hex("0123456789AB").unwrap();
        let padded = dest.padded();
        assert_eq!(padded.len(), PUB_KEY_SIZE);
        assert_eq!(&padded[..6], &[0x01, 0x23, 0x45, 0x67, 0x89, 0xAB]);
        assert!(padded[6..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_destination_bounds() {
        assert!(Destination::new(Vec::new()).is_err());
        assert!(Destination::new(vec![0xAA; 33]).is_err());
        assert!(Destination::new(vec![0xAA; 32]).is_ok());
    }

    #[test]
    fn test_stats_kind_selector() {
        assert_eq!(u8::from(StatsKind::Core), 0);
        assert_eq!(u8::from(StatsKind::Radio), 1);
        assert_eq!(u8::from(StatsKind::Packets), 2);
    }
}
