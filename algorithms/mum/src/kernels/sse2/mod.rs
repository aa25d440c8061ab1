//! SSE2 vector layer: eight lanes across four 128-bit registers.
//!
//! Same multiply/fold sequence and lane order as the scalar fallback and the
//! AVX2 kernel, two lanes per register.

#![allow(clippy::cast_possible_wrap)]

use crate::kernels::constants::{VEC_FOLD_PRIMES, VEC_MUL_PRIMES, VEC_SEED_PRIMES};
use crate::kernels::portable::mum;

#[cfg(target_arch = "x86")]
use core::arch::x86::{
    __m128i, _mm_and_si128, _mm_loadu_si128, _mm_mul_epu32, _mm_or_si128, _mm_set1_epi64x,
    _mm_set_epi64x, _mm_slli_epi64, _mm_srli_epi64, _mm_storeu_si128, _mm_xor_si128,
};
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::{
    __m128i, _mm_and_si128, _mm_loadu_si128, _mm_mul_epu32, _mm_or_si128, _mm_set1_epi64x,
    _mm_set_epi64x, _mm_slli_epi64, _mm_srli_epi64, _mm_storeu_si128, _mm_xor_si128,
};

/// Lane step on two lanes at once; see the scalar `lane_fold`.
#[inline]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
unsafe fn mul_fold(v: __m128i, c: __m128i, mask32: __m128i) -> __m128i {
    let p_lo = _mm_mul_epu32(v, c);
    let p_hi = _mm_mul_epu32(_mm_srli_epi64(v, 32), _mm_srli_epi64(c, 32));
    let t_lo = _mm_xor_si128(p_lo, _mm_srli_epi64(p_lo, 32));
    let t_hi = _mm_xor_si128(p_hi, _mm_srli_epi64(p_hi, 32));
    _mm_or_si128(_mm_and_si128(t_lo, mask32), _mm_slli_epi64(t_hi, 32))
}

/// Consume a whole number of vector blocks and fold the lanes back into the
/// scalar state.
///
/// # Safety
///
/// Requires SSE2; only reachable through the dispatcher after feature
/// detection (or a compile-time `target_feature` gate).
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
pub unsafe fn vector_blocks(mut state: u64, data: &[u8]) -> u64 {
    debug_assert_eq!(data.len() % crate::kernels::constants::VECTOR_BLOCK, 0);

    let mul: [__m128i; 4] = [
        _mm_set_epi64x(VEC_MUL_PRIMES[1] as i64, VEC_MUL_PRIMES[0] as i64),
        _mm_set_epi64x(VEC_MUL_PRIMES[3] as i64, VEC_MUL_PRIMES[2] as i64),
        _mm_set_epi64x(VEC_MUL_PRIMES[5] as i64, VEC_MUL_PRIMES[4] as i64),
        _mm_set_epi64x(VEC_MUL_PRIMES[7] as i64, VEC_MUL_PRIMES[6] as i64),
    ];
    let mask32 = _mm_set1_epi64x(0xFFFF_FFFF);

    let mut acc: [__m128i; 4] = [
        _mm_set_epi64x(
            (state ^ VEC_SEED_PRIMES[1]) as i64,
            (state ^ VEC_SEED_PRIMES[0]) as i64,
        ),
        _mm_set_epi64x(
            (state ^ VEC_SEED_PRIMES[3]) as i64,
            (state ^ VEC_SEED_PRIMES[2]) as i64,
        ),
        _mm_set_epi64x(
            (state ^ VEC_SEED_PRIMES[5]) as i64,
            (state ^ VEC_SEED_PRIMES[4]) as i64,
        ),
        _mm_set_epi64x(
            (state ^ VEC_SEED_PRIMES[7]) as i64,
            (state ^ VEC_SEED_PRIMES[6]) as i64,
        ),
    ];

    for chunk in data.chunks_exact(64) {
        let ptr = chunk.as_ptr();
        for (r, lane_acc) in acc.iter_mut().enumerate() {
            let v = _mm_loadu_si128(ptr.add(r * 16).cast());
            *lane_acc = _mm_xor_si128(*lane_acc, mul_fold(v, mul[r], mask32));
        }
    }

    let mut lanes = [0u64; 8];
    for (r, lane_acc) in acc.iter().enumerate() {
        _mm_storeu_si128(lanes.as_mut_ptr().add(r * 2).cast(), *lane_acc);
    }
    for (i, lane) in lanes.iter().enumerate() {
        state ^= mum(*lane, VEC_FOLD_PRIMES[i]);
    }
    state
}
