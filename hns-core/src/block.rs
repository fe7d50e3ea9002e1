//! Block data structures and their wire codec

use crate::encoding::{
    read_array, read_u32, read_u64, read_varint, write_bytes, write_u32, write_u64, write_varint,
};
use crate::types::hex_serde;
use crate::{CodecResult, Decodable, DecodeConfig, Encodable, Hash};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use tracing::{debug, trace};

/// Size of the miner's extra nonce
pub const EXTRA_NONCE_SIZE: usize = 24;

/// Size of the header mask
pub const MASK_SIZE: usize = 32;

/// Encoded size of a block header
pub const HEADER_SIZE: usize =
    4 + 8 + 32 + 32 + EXTRA_NONCE_SIZE + 32 + 32 + 32 + 4 + 4 + MASK_SIZE;

/// Upper bound on the transaction vector preallocated from a wire count
const MAX_PREALLOC_TRANSACTIONS: u64 = 1024;

/// Block header.
///
/// Fields are listed in wire order; encoding and decoding walk them in
/// exactly this sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    /// Proof-of-work nonce
    pub nonce: u32,
    /// Block timestamp in seconds
    pub time: u64,
    /// Hash of the previous block
    pub hash: Hash,
    /// Root of the name tree
    pub tree_root: Hash,
    /// Miner-controlled extra nonce
    #[serde(with = "hex_serde")]
    pub extra_nonce: [u8; EXTRA_NONCE_SIZE],
    /// Reserved for future use
    pub reserved_root: Hash,
    /// Root of the witness merkle tree
    pub witness_root: Hash,
    /// Root of the transaction merkle tree
    pub merkle_root: Hash,
    /// Block version
    pub version: u32,
    /// Compact difficulty target
    pub bits: u32,
    /// Mask applied by mining pools
    #[serde(with = "hex_serde")]
    pub mask: [u8; MASK_SIZE],
}

impl Default for BlockHeader {
    fn default() -> Self {
        Self {
            nonce: 0,
            time: 0,
            hash: Hash::zero(),
            tree_root: Hash::zero(),
            extra_nonce: [0u8; EXTRA_NONCE_SIZE],
            reserved_root: Hash::zero(),
            witness_root: Hash::zero(),
            merkle_root: Hash::zero(),
            version: 0,
            bits: 0,
            mask: [0u8; MASK_SIZE],
        }
    }
}

impl Encodable for BlockHeader {
    fn encode<W: Write>(&self, w: &mut W) -> CodecResult<()> {
        write_u32(w, self.nonce)?;
        write_u64(w, self.time)?;
        write_bytes(w, self.hash.as_bytes())?;
        write_bytes(w, self.tree_root.as_bytes())?;
        write_bytes(w, &self.extra_nonce)?;
        write_bytes(w, self.reserved_root.as_bytes())?;
        write_bytes(w, self.witness_root.as_bytes())?;
        write_bytes(w, self.merkle_root.as_bytes())?;
        write_u32(w, self.version)?;
        write_u32(w, self.bits)?;
        write_bytes(w, &self.mask)
    }
}

impl Decodable for BlockHeader {
    fn decode<R: Read>(r: &mut R) -> CodecResult<Self> {
        Ok(Self {
            nonce: read_u32(r)?,
            time: read_u64(r)?,
            hash: Hash::new(read_array(r)?),
            tree_root: Hash::new(read_array(r)?),
            extra_nonce: read_array(r)?,
            reserved_root: Hash::new(read_array(r)?),
            witness_root: Hash::new(read_array(r)?),
            merkle_root: Hash::new(read_array(r)?),
            version: read_u32(r)?,
            bits: read_u32(r)?,
            mask: read_array(r)?,
        })
    }
}

/// Complete block with header and transactions.
///
/// The block is generic over its transaction type; it only needs the
/// transaction to know how to encode and decode itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block<T> {
    /// Block header
    pub header: BlockHeader,
    /// Transactions, in canonical order
    pub transactions: Vec<T>,
}

impl<T> Block<T> {
    /// Create a new block
    pub fn new(header: BlockHeader, transactions: Vec<T>) -> Self {
        Self {
            header,
            transactions,
        }
    }
}

impl<T: Decodable> Block<T> {
    /// Decode a block, enforcing the limits in `config`.
    ///
    /// A transaction that fails to decode aborts the whole block.
    pub fn decode_with_config<R: Read>(r: &mut R, config: &DecodeConfig) -> CodecResult<Self> {
        let header = BlockHeader::decode(r)?;

        let count = read_varint(r)?;
        config.check_transaction_count(count)?;
        debug!(count, "decoding block transactions");

        let mut transactions = Vec::with_capacity(count.min(MAX_PREALLOC_TRANSACTIONS) as usize);
        for index in 0..count {
            trace!(index, "decoding transaction");
            transactions.push(T::decode(r)?);
        }

        Ok(Self {
            header,
            transactions,
        })
    }
}

impl<T: Encodable> Encodable for Block<T> {
    fn encode<W: Write>(&self, w: &mut W) -> CodecResult<()> {
        self.header.encode(w)?;
        write_varint(w, self.transactions.len() as u64)?;
        for tx in &self.transactions {
            tx.encode(w)?;
        }
        Ok(())
    }
}

impl<T: Decodable> Decodable for Block<T> {
    fn decode<R: Read>(r: &mut R) -> CodecResult<Self> {
        Self::decode_with_config(r, &DecodeConfig::default())
    }
}
