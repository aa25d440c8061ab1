//! AVX2 vector layer: eight lanes across two 256-bit registers.
//!
//! Executes exactly the multiply/fold sequence of the scalar fallback, four
//! lanes per register, so the digest is identical whichever kernel ran.

#![allow(clippy::cast_possible_wrap)]

use crate::kernels::constants::{VEC_FOLD_PRIMES, VEC_MUL_PRIMES, VEC_SEED_PRIMES};
use crate::kernels::portable::mum;

#[cfg(target_arch = "x86")]
use core::arch::x86::{
    __m256i, _mm256_and_si256, _mm256_loadu_si256, _mm256_mul_epu32, _mm256_or_si256,
    _mm256_set1_epi64x, _mm256_set_epi64x, _mm256_slli_epi64, _mm256_srli_epi64,
    _mm256_storeu_si256, _mm256_xor_si256,
};
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::{
    __m256i, _mm256_and_si256, _mm256_loadu_si256, _mm256_mul_epu32, _mm256_or_si256,
    _mm256_set1_epi64x, _mm256_set_epi64x, _mm256_slli_epi64, _mm256_srli_epi64,
    _mm256_storeu_si256, _mm256_xor_si256,
};

/// Lane step on four lanes at once: two 32×32→64 products per lane, each
/// folded hi⊕lo into its low 32 bits, packed back into a 64-bit lane.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
unsafe fn mul_fold(v: __m256i, c: __m256i, mask32: __m256i) -> __m256i {
    let p_lo = _mm256_mul_epu32(v, c);
    let p_hi = _mm256_mul_epu32(_mm256_srli_epi64(v, 32), _mm256_srli_epi64(c, 32));
    let t_lo = _mm256_xor_si256(p_lo, _mm256_srli_epi64(p_lo, 32));
    let t_hi = _mm256_xor_si256(p_hi, _mm256_srli_epi64(p_hi, 32));
    _mm256_or_si256(_mm256_and_si256(t_lo, mask32), _mm256_slli_epi64(t_hi, 32))
}

/// Consume a whole number of vector blocks and fold the lanes back into the
/// scalar state.
///
/// # Safety
///
/// Requires AVX2; only reachable through the dispatcher after feature
/// detection (or a compile-time `target_feature` gate).
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
pub unsafe fn vector_blocks(mut state: u64, data: &[u8]) -> u64 {
    debug_assert_eq!(data.len() % crate::kernels::constants::VECTOR_BLOCK, 0);

    let mul_lo = _mm256_set_epi64x(
        VEC_MUL_PRIMES[3] as i64,
        VEC_MUL_PRIMES[2] as i64,
        VEC_MUL_PRIMES[1] as i64,
        VEC_MUL_PRIMES[0] as i64,
    );
    let mul_hi = _mm256_set_epi64x(
        VEC_MUL_PRIMES[7] as i64,
        VEC_MUL_PRIMES[6] as i64,
        VEC_MUL_PRIMES[5] as i64,
        VEC_MUL_PRIMES[4] as i64,
    );
    let mask32 = _mm256_set1_epi64x(0xFFFF_FFFF);

    let mut acc_lo = _mm256_set_epi64x(
        (state ^ VEC_SEED_PRIMES[3]) as i64,
        (state ^ VEC_SEED_PRIMES[2]) as i64,
        (state ^ VEC_SEED_PRIMES[1]) as i64,
        (state ^ VEC_SEED_PRIMES[0]) as i64,
    );
    let mut acc_hi = _mm256_set_epi64x(
        (state ^ VEC_SEED_PRIMES[7]) as i64,
        (state ^ VEC_SEED_PRIMES[6]) as i64,
        (state ^ VEC_SEED_PRIMES[5]) as i64,
        (state ^ VEC_SEED_PRIMES[4]) as i64,
    );

    for chunk in data.chunks_exact(64) {
        let ptr = chunk.as_ptr();
        let v_lo = _mm256_loadu_si256(ptr.cast());
        let v_hi = _mm256_loadu_si256(ptr.add(32).cast());
        acc_lo = _mm256_xor_si256(acc_lo, mul_fold(v_lo, mul_lo, mask32));
        acc_hi = _mm256_xor_si256(acc_hi, mul_fold(v_hi, mul_hi, mask32));
    }

    let mut lanes = [0u64; 8];
    _mm256_storeu_si256(lanes.as_mut_ptr().cast(), acc_lo);
    _mm256_storeu_si256(lanes.as_mut_ptr().add(4).cast(), acc_hi);
    for (i, lane) in lanes.iter().enumerate() {
        state ^= mum(*lane, VEC_FOLD_PRIMES[i]);
    }
    state
}
