//! Shared helpers for unit tests

use crate::encoding::{read_var_bytes, write_var_bytes};
use crate::{CodecError, CodecResult, Decodable, Encodable};
use std::io::{self, Read, Write};

/// Reader that hands out at most one byte per `read` call
pub struct Trickle<'a>(pub &'a [u8]);

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.0.is_empty() || buf.is_empty() {
            return Ok(0);
        }
        buf[0] = self.0[0];
        self.0 = &self.0[1..];
        Ok(1)
    }
}

/// Writer that accepts `budget` bytes, then fails every write.
///
/// A write that would cross the budget is rejected whole, so `written`
/// holds exactly what the encoder got out before the failure.
pub struct FailingWriter {
    pub written: Vec<u8>,
    budget: usize,
}

impl FailingWriter {
    pub fn new(budget: usize) -> Self {
        Self {
            written: Vec::new(),
            budget,
        }
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written.len() + buf.len() > self.budget {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "write budget exhausted"));
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Stand-in transaction: a single length-prefixed payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestTx(pub Vec<u8>);

impl Encodable for TestTx {
    fn encode<W: Write>(&self, w: &mut W) -> CodecResult<()> {
        write_var_bytes(w, &self.0)
    }
}

impl Decodable for TestTx {
    fn decode<R: Read>(r: &mut R) -> CodecResult<Self> {
        Ok(Self(read_var_bytes(r)?))
    }
}

/// Message carried by [`FlakyTx::Broken`] encode failures
pub const BROKEN_TX: &str = "broken transaction";

/// Encode-only transaction that can be told to fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlakyTx {
    Ok(Vec<u8>),
    Broken,
}

impl Encodable for FlakyTx {
    fn encode<W: Write>(&self, w: &mut W) -> CodecResult<()> {
        match self {
            Self::Ok(payload) => write_var_bytes(w, payload),
            Self::Broken => Err(CodecError::Config(BROKEN_TX.to_string())),
        }
    }
}
