//! Encoded output frames.
//!
//! An [`EncodedFrame`] is the payload of exactly one command. It carries no
//! length prefix or start byte; the transport that sends it is responsible
//! for delimiting it on the wire.

use std::fmt;
use std::ops::Deref;

use bytes::Bytes;

/// An immutable, fully laid out command payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedFrame(Bytes);

impl EncodedFrame {
    pub(crate) fn new(bytes: impl Into<Bytes>) -> Self {
        EncodedFrame(bytes.into())
    }

    /// The command code (first byte).
    pub fn opcode(&self) -> u8 {
        self.0[0]
    }

    /// Borrow the frame bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Convert into the underlying shared buffer.
    pub fn into_bytes(self) -> Bytes {
        self.0
    }

    /// Copy the frame into a `Vec`.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Lowercase hex rendering with no separators.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl Deref for EncodedFrame {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for EncodedFrame {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<EncodedFrame> for Vec<u8> {
    fn from(frame: EncodedFrame) -> Self {
        frame.0.to_vec()
    }
}

impl fmt::Display for EncodedFrame {
    /// Space separated uppercase hex, e.g. `06 80 00 92 65`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_accessors() {
        let frame = EncodedFrame::new(vec![0x06, 0x80, 0x00, 0x92, 0x65]);
        assert_eq!(frame.opcode(), 0x06);
        assert_eq!(frame.len(), 5);
        assert_eq!(frame.to_hex(), "0680009265");
        assert_eq!(frame.to_string(), "06 80 00 92 65");
        assert_eq!(Vec::from(frame.clone()), frame.to_vec());
    }
}
