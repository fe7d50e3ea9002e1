//! Name hashing and sealed-bid commitments for the name auction
//!
//! Both functions use unkeyed BLAKE2b with a 32-byte digest length (not a
//! truncated 64-byte digest; the output length is part of the parameter
//! block and changes every byte of the result).

use crate::encoding::write_u64;
use crate::{CodecError, CodecResult, Hash};
use blake2b_simd::{Params, State};

/// Required length of a blind nonce
pub const BLIND_NONCE_SIZE: usize = 32;

fn blake2b_256() -> State {
    Params::new().hash_length(32).to_state()
}

fn finalize(state: &State) -> Hash {
    let digest = state.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(digest.as_bytes());
    Hash::new(out)
}

/// Hash a name into its lookup key in the auction state.
///
/// Accepts any bytes; no normalisation is applied.
pub fn hash_name<N: AsRef<[u8]>>(name: N) -> Hash {
    let mut state = blake2b_256();
    state.update(name.as_ref());
    finalize(&state)
}

/// Commit to a bid `value` under a 32-byte `nonce`.
///
/// The digest input is the little-endian `value` followed by the nonce.
/// The nonce must be uniformly random and never reused; generating it is
/// the caller's job.
pub fn create_blind(value: u64, nonce: &[u8]) -> CodecResult<Hash> {
    if nonce.len() != BLIND_NONCE_SIZE {
        return Err(CodecError::InvalidNonceLength(nonce.len()));
    }

    let mut state = blake2b_256();
    write_u64(&mut state, value)?;
    state.update(nonce);
    Ok(finalize(&state))
}

/// Check that `(value, nonce)` opens `blind`
pub fn verify_blind(blind: &Hash, value: u64, nonce: &[u8]) -> CodecResult<bool> {
    Ok(create_blind(value, nonce)? == *blind)
}
