#![cfg_attr(not(feature = "std"), no_std)]

//! # MUM
//!
//! The MUM family of multiply-and-mix hash functions: a fast, seedable,
//! architecture-stable 64-bit hash (MUM64/VMUM), a 512-bit candidate
//! cryptographic hash (MUM512), and the pseudo-random generators derived
//! from them.
//!
//! Digests are bit-identical on every supported platform: keys are read
//! little-endian everywhere, and the SIMD vector layer (engaged for keys of
//! 512 bytes and up) has a scalar fallback that executes the same multiply
//! and fold sequence in the same order.
//!
//! # Usage
//! ```rust
//! // One-shot hashing
//! let digest = mum::hash(b"performance matters");
//!
//! // Seeded, e.g. for hash-flooding resistance in a table
//! let seeded = mum::hash64(b"performance matters", 0xDEAD_BEEF);
//! assert_ne!(digest, seeded);
//!
//! // Deterministic pseudo-random stream
//! let mut rng = mum::MumRng::new(42);
//! let a = rng.next();
//! let b = rng.next();
//! assert_ne!(a, b);
//! ```

// =============================================================================
// MODULES
// =============================================================================

mod engine;
// Re-export internal kernels for differential tests, but hide from docs
#[doc(hidden)]
pub mod kernels; // Public for test use only
mod oneshot;
mod prng;
pub(crate) mod types;
mod wide;

// =============================================================================
// EXPORTS
// =============================================================================

pub use oneshot::{hash, hash512, hash64, hash_u64, verify512, vhash64};
pub use prng::{Mum512Rng, MumRng, Seed512};

/// Returns the name of the vector-layer backend in use for long keys.
#[must_use]
pub fn active_backend() -> &'static str {
    engine::get_active_backend_name()
}
