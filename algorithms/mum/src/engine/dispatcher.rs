//! Hardware dispatcher
//!
//! Selects the widest available vector-layer kernel (AVX2, SSE2, or the
//! scalar fallback) for the current CPU. Selection never fails: the scalar
//! kernel is always available and bit-identical, so kernel choice is a
//! throughput decision, not a correctness one.

use crate::kernels;
use crate::types::VectorKernel;

// =============================================================================
// DISPATCHER
// =============================================================================

/// Returns the widest vector kernel for this CPU.
#[must_use]
#[allow(unreachable_code)] // the fallback is dead when a kernel is fixed at compile time
pub fn get_vector_kernel() -> VectorKernel {
    // 1. Runtime dispatch (std only)
    #[cfg(all(feature = "std", any(target_arch = "x86", target_arch = "x86_64")))]
    {
        if is_x86_feature_detected!("avx2") {
            return safe_avx2_wrapper;
        }
        if is_x86_feature_detected!("sse2") {
            return safe_sse2_wrapper;
        }
    }

    // 2. Compile-time dispatch (no_std)
    #[cfg(not(feature = "std"))]
    {
        #[cfg(all(
            any(target_arch = "x86", target_arch = "x86_64"),
            target_feature = "avx2"
        ))]
        return safe_avx2_wrapper;

        #[cfg(all(
            any(target_arch = "x86", target_arch = "x86_64"),
            target_feature = "sse2",
            not(target_feature = "avx2")
        ))]
        return safe_sse2_wrapper;
    }

    // 3. Scalar fallback (non-x86 CPUs, or x86 without SSE2)
    kernels::portable::vector_blocks
}

/// Returns the name of the active vector-layer backend.
#[must_use]
#[allow(unreachable_code)] // the fallback is dead when a kernel is fixed at compile time
pub fn get_active_backend_name() -> &'static str {
    #[cfg(all(feature = "std", any(target_arch = "x86", target_arch = "x86_64")))]
    {
        if is_x86_feature_detected!("avx2") {
            return "AVX2";
        }
        if is_x86_feature_detected!("sse2") {
            return "SSE2";
        }
    }
    #[cfg(not(feature = "std"))]
    {
        #[cfg(all(
            any(target_arch = "x86", target_arch = "x86_64"),
            target_feature = "avx2"
        ))]
        return "AVX2";

        #[cfg(all(
            any(target_arch = "x86", target_arch = "x86_64"),
            target_feature = "sse2",
            not(target_feature = "avx2")
        ))]
        return "SSE2";
    }
    "Portable"
}

// =============================================================================
// WRAPPERS
// =============================================================================

/// AVX2 wrapper with the safe `VectorKernel` signature.
#[inline]
#[allow(unsafe_code)]
#[allow(dead_code)]
fn safe_avx2_wrapper(state: u64, data: &[u8]) -> u64 {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    // SAFETY: only installed by `get_vector_kernel` after AVX2 was detected
    // at runtime (std) or guaranteed by target_feature (no_std).
    unsafe {
        kernels::avx2::vector_blocks(state, data)
    }
    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
    unreachable!("AVX2 wrapper selected on a non-x86 target");
}

/// SSE2 wrapper with the safe `VectorKernel` signature.
#[inline]
#[allow(unsafe_code)]
#[allow(dead_code)]
fn safe_sse2_wrapper(state: u64, data: &[u8]) -> u64 {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    // SAFETY: only installed by `get_vector_kernel` after SSE2 was detected
    // at runtime (std) or guaranteed by target_feature (no_std).
    unsafe {
        kernels::sse2::vector_blocks(state, data)
    }
    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
    unreachable!("SSE2 wrapper selected on a non-x86 target");
}
