//! Shared types used across the library.

/// Unified vector-layer kernel signature: `(state, vector_region) -> state`.
///
/// The region length is a whole number of vector blocks. All hardware
/// backends (AVX2, SSE2) and the scalar fallback implement this same
/// signature so the dispatcher can swap them freely; every kernel returns
/// the same state for the same inputs.
pub type VectorKernel = fn(u64, &[u8]) -> u64;
