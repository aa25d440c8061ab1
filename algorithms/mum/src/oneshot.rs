//! Public API layer
//!
//! One-shot hashing over a contiguous byte range. Every entry point is a
//! pure function of `(key bytes, length, seed)`: no allocation, no I/O, no
//! observable intermediate state.

use crate::engine::dispatcher;
use crate::kernels::constants::{
    BLOCK_SIZE, DEFAULT_SEED, INIT_PRIME, LEN_PRIME, TAIL_PRIMES, VECTOR_BLOCK, VECTOR_THRESHOLD,
};
use crate::kernels::portable;
use crate::kernels::portable::mum;
use subtle::ConstantTimeEq;

// =============================================================================
// MUM64 / VMUM
// =============================================================================

/// Compute the 64-bit MUM digest of `input` under `seed`.
///
/// The digest is stable: for the same `(input, seed)` it is identical on
/// every supported architecture, whichever vector kernel is available.
///
/// # Example
/// ```rust
/// let digest = mum::hash64(b"performance matters", 42);
/// assert_eq!(digest, mum::hash64(b"performance matters", 42));
/// ```
#[must_use]
pub fn hash64(input: &[u8], seed: u64) -> u64 {
    let mut state = mum(seed ^ INIT_PRIME, input.len() as u64 ^ LEN_PRIME);
    let mut rest = input;
    if input.len() >= VECTOR_THRESHOLD {
        let split = input.len() - input.len() % VECTOR_BLOCK;
        state = dispatcher::get_vector_kernel()(state, &input[..split]);
        rest = &input[split..];
    }
    let mut blocks = rest.chunks_exact(BLOCK_SIZE);
    for block in blocks.by_ref() {
        state = portable::mix_block(state, block);
    }
    state = portable::mix_tail(state, blocks.remainder());
    portable::finish(state)
}

/// Compute the VMUM digest of `input` under `seed`.
///
/// VMUM is MUM64 with the long-key vector layer spelled out in its name: for
/// any input it produces exactly the digest of [`hash64`] — the vector path
/// is a throughput optimisation, not a distinct hash — so this is the same
/// function under the contract-documenting name.
#[must_use]
#[inline]
pub fn vhash64(input: &[u8], seed: u64) -> u64 {
    hash64(input, seed)
}

/// Compute the MUM digest of `input` under the default seed.
///
/// # Example
/// ```rust
/// let digest = mum::hash(b"hello");
/// assert_ne!(digest, mum::hash(b"hello "));
/// ```
#[must_use]
#[inline]
pub fn hash(input: &[u8]) -> u64 {
    hash64(input, DEFAULT_SEED)
}

/// Hash a single 64-bit word. Equivalent to hashing its eight little-endian
/// bytes with [`hash64`], skipping the general driver. This is the MUM-PRNG
/// step function.
#[must_use]
#[inline]
pub fn hash_u64(key: u64, seed: u64) -> u64 {
    let mut state = mum(seed ^ INIT_PRIME, 8 ^ LEN_PRIME);
    state ^= mum(key, TAIL_PRIMES[0]);
    portable::finish(state)
}

// =============================================================================
// MUM512
// =============================================================================

/// Compute the 512-bit MUM512 digest of `input` under a 512-bit seed.
///
/// The digest is returned as eight 64-bit limbs; serialising each limb
/// little-endian in order yields the canonical byte form. MUM512 is a
/// candidate cryptographic hash: no differential or timing analysis is
/// claimed, and multiplication is not constant-time on every platform.
#[must_use]
#[inline]
pub fn hash512(input: &[u8], seed: &[u64; 8]) -> [u64; 8] {
    crate::wide::hash512(input, seed)
}

/// Recompute the MUM512 digest of `input` and compare it with `expected` in
/// constant time. Use for integrity checks where the comparison itself must
/// not leak how many limbs matched.
#[must_use]
pub fn verify512(input: &[u8], seed: &[u64; 8], expected: &[u64; 8]) -> bool {
    let computed = hash512(input, seed);
    computed.ct_eq(expected).into()
}
