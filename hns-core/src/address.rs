//! On-chain addresses: a versioned hash commitment

use crate::encoding::{read_bytes, read_u8, write_bytes, write_u8};
use crate::types::hex_serde;
use crate::{CodecError, CodecResult, Decodable, Encodable};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use tracing::debug;

/// Highest address version accepted on decode
pub const MAX_ADDRESS_VERSION: u8 = 31;

/// Shortest address hash accepted on decode
pub const MIN_ADDRESS_HASH_SIZE: usize = 2;

/// Longest address hash accepted on decode
pub const MAX_ADDRESS_HASH_SIZE: usize = 40;

/// Versioned address hash.
///
/// Wire layout: `version:u8 | len:u8 | hash[len]`. The version and length
/// bounds are enforced when decoding; encoding writes whatever the value
/// holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    /// Address scheme version (0..=31)
    pub version: u8,
    /// Hash commitment (2..=40 bytes)
    #[serde(with = "hex_serde")]
    pub hash: Vec<u8>,
}

impl Address {
    /// Create a new address without validating it
    pub fn new(version: u8, hash: impl Into<Vec<u8>>) -> Self {
        Self {
            version,
            hash: hash.into(),
        }
    }

    /// Whether this address would survive a decode
    pub fn is_valid(&self) -> bool {
        self.version <= MAX_ADDRESS_VERSION
            && (MIN_ADDRESS_HASH_SIZE..=MAX_ADDRESS_HASH_SIZE).contains(&self.hash.len())
    }
}

impl Encodable for Address {
    fn encode<W: Write>(&self, w: &mut W) -> CodecResult<()> {
        // The length byte cannot represent more than 255
        let len = u8::try_from(self.hash.len())
            .map_err(|_| CodecError::InvalidAddressLength(self.hash.len()))?;
        write_u8(w, self.version)?;
        write_u8(w, len)?;
        write_bytes(w, &self.hash)
    }
}

impl Decodable for Address {
    fn decode<R: Read>(r: &mut R) -> CodecResult<Self> {
        let version = read_u8(r)?;
        if version > MAX_ADDRESS_VERSION {
            debug!(version, "rejecting address version");
            return Err(CodecError::InvalidAddressVersion(version));
        }

        let size = usize::from(read_u8(r)?);
        if !(MIN_ADDRESS_HASH_SIZE..=MAX_ADDRESS_HASH_SIZE).contains(&size) {
            debug!(size, "rejecting address length");
            return Err(CodecError::InvalidAddressLength(size));
        }

        let hash = read_bytes(r, size)?;
        Ok(Self { version, hash })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use proptest::prelude::*;

    fn raw(version: u8, len: u8, fill: u8) -> Vec<u8> {
        let mut bytes = vec![version, len];
        bytes.extend(std::iter::repeat(fill).take(usize::from(len)));
        bytes
    }

    #[test]
    fn test_address_wire_layout() {
        let addr = Address::new(0, vec![0xaa; 20]);
        let bytes = addr.to_bytes().unwrap();
        assert_eq!(bytes.len(), 22);
        assert_eq!(bytes[0], 0);
        assert_eq!(bytes[1], 20);
        assert_eq!(&bytes[2..], &[0xaa; 20][..]);
    }

    #[test]
    fn test_version_bounds() {
        assert_eq!(Address::from_bytes(&raw(0, 20, 1)).unwrap().version, 0);
        assert_eq!(Address::from_bytes(&raw(31, 20, 1)).unwrap().version, 31);

        let err = Address::from_bytes(&raw(32, 20, 1)).unwrap_err();
        assert!(matches!(err, CodecError::InvalidAddressVersion(32)));
        assert_eq!(err.kind(), ErrorKind::Malformed);
    }

    #[test]
    fn test_length_bounds() {
        assert_eq!(Address::from_bytes(&raw(0, 2, 1)).unwrap().hash.len(), 2);
        assert_eq!(Address::from_bytes(&raw(0, 40, 1)).unwrap().hash.len(), 40);

        for len in [0, 1, 41, 255] {
            let err = Address::from_bytes(&raw(0, len, 1)).unwrap_err();
            assert!(matches!(err, CodecError::InvalidAddressLength(_)));
            assert_eq!(err.kind(), ErrorKind::Malformed);
        }
    }

    #[test]
    fn test_truncated_hash() {
        let mut bytes = raw(0, 20, 1);
        bytes.truncate(10);
        let err = Address::from_bytes(&bytes).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Truncated);

        assert_eq!(
            Address::from_bytes(&[0]).unwrap_err().kind(),
            ErrorKind::Truncated
        );
    }

    #[test]
    fn test_encode_does_not_validate() {
        let addr = Address::new(99, vec![1]);
        assert!(!addr.is_valid());
        assert_eq!(addr.to_bytes().unwrap(), vec![99, 1, 1]);
        assert!(Address::from_bytes(&[99, 1, 1]).is_err());
    }

    #[test]
    fn test_oversized_hash_not_encodable() {
        let addr = Address::new(0, vec![0; 256]);
        assert!(matches!(
            addr.to_bytes(),
            Err(CodecError::InvalidAddressLength(256))
        ));
    }

    #[test]
    fn test_address_json() {
        let addr = Address::new(0, vec![0x01, 0x02]);
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, r#"{"version":0,"hash":"0102"}"#);
        assert_eq!(serde_json::from_str::<Address>(&json).unwrap(), addr);
    }

    fn valid_address() -> impl Strategy<Value = Address> {
        (
            0..=MAX_ADDRESS_VERSION,
            proptest::collection::vec(any::<u8>(), MIN_ADDRESS_HASH_SIZE..=MAX_ADDRESS_HASH_SIZE),
        )
            .prop_map(|(version, hash)| Address::new(version, hash))
    }

    proptest! {
        #[test]
        fn address_roundtrip(addr in valid_address()) {
            let bytes = addr.to_bytes().unwrap();
            prop_assert_eq!(Address::from_bytes(&bytes).unwrap(), addr);
        }

        #[test]
        fn address_decode_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
            let _ = Address::decode(&mut bytes.as_slice());
        }
    }
}
