//! Encode/decode capabilities shared by every wire type
//!
//! A type that knows how to write itself to a byte sink implements
//! [`Encodable`]; a type that can be rebuilt from a byte source implements
//! [`Decodable`]. Containers such as [`crate::Block`] only rely on these
//! capabilities, never on the concrete layout of what they contain.

use crate::{CodecError, CodecResult};
use std::io::{Read, Write};

/// Types with a canonical binary encoding
pub trait Encodable {
    /// Write the canonical bytes of `self` to `w`
    fn encode<W: Write>(&self, w: &mut W) -> CodecResult<()>;

    /// Encode into a fresh buffer
    fn to_bytes(&self) -> CodecResult<Vec<u8>> {
        let mut buf = Vec::new();
        self.encode(&mut buf)?;
        Ok(buf)
    }

    /// Encode and render as lowercase hex
    fn to_hex(&self) -> CodecResult<String> {
        Ok(hex::encode(self.to_bytes()?))
    }
}

/// Types that can be rebuilt from their canonical binary encoding
pub trait Decodable: Sized {
    /// Read exactly one value from `r`, consuming only its bytes
    fn decode<R: Read>(r: &mut R) -> CodecResult<Self>;

    /// Decode a value that must span the whole of `bytes`
    fn from_bytes(bytes: &[u8]) -> CodecResult<Self> {
        let mut cursor = bytes;
        let value = Self::decode(&mut cursor)?;
        if !cursor.is_empty() {
            return Err(CodecError::TrailingBytes {
                remaining: cursor.len(),
            });
        }
        Ok(value)
    }

    /// Decode from a hex string, as returned by the node's RPC
    fn from_hex(hex_str: &str) -> CodecResult<Self> {
        let bytes = hex::decode(hex_str.trim())?;
        Self::from_bytes(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTx;
    use crate::ErrorKind;

    #[test]
    fn test_to_bytes_and_back() {
        let tx = TestTx(vec![1, 2, 3]);
        let bytes = tx.to_bytes().unwrap();
        assert_eq!(bytes, vec![3, 1, 2, 3]);
        assert_eq!(TestTx::from_bytes(&bytes).unwrap(), tx);
        assert_eq!(tx.to_hex().unwrap(), "03010203");
        assert_eq!(TestTx::from_hex("03010203").unwrap(), tx);
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let err = TestTx::from_bytes(&[1, 9, 9]).unwrap_err();
        assert!(matches!(err, CodecError::TrailingBytes { remaining: 1 }));
        assert_eq!(err.kind(), ErrorKind::Malformed);
    }

    #[test]
    fn test_bad_hex_rejected() {
        let err = TestTx::from_hex("zz").unwrap_err();
        assert!(matches!(err, CodecError::HexDecode(_)));
    }
}
