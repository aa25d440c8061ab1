//! Differential properties between the hash entry points and kernels.

#![allow(unsafe_code)]

use bolero::check;

#[test]
fn fuzz_vector_kernels_agree() {
    check!()
        .with_type::<(u64, Vec<u8>)>()
        .for_each(|(state, data)| {
            // whole vector blocks only, as the driver guarantees
            let keep = data.len() - data.len() % 256;
            let region = &data[..keep];

            let scalar = mum::kernels::portable::vector_blocks(*state, region);

            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            {
                if is_x86_feature_detected!("sse2") {
                    let sse2 = unsafe { mum::kernels::sse2::vector_blocks(*state, region) };
                    assert_eq!(scalar, sse2, "SSE2 diverged from scalar");
                }
                if is_x86_feature_detected!("avx2") {
                    let avx2 = unsafe { mum::kernels::avx2::vector_blocks(*state, region) };
                    assert_eq!(scalar, avx2, "AVX2 diverged from scalar");
                }
            }

            let _ = scalar;
        });
}

#[test]
fn fuzz_word_fast_path_matches_byte_hash() {
    check!().with_type::<(u64, u64)>().for_each(|(key, seed)| {
        assert_eq!(
            mum::hash_u64(*key, *seed),
            mum::hash64(&key.to_le_bytes(), *seed),
            "hash_u64 fast path diverged"
        );
    });
}

#[test]
fn fuzz_vhash_is_hash() {
    check!().with_type::<(Vec<u8>, u64)>().for_each(|(data, seed)| {
        assert_eq!(mum::hash64(data, *seed), mum::vhash64(data, *seed));
    });
}

#[test]
fn fuzz_verify512_accepts_and_rejects() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        let seed = [0u64; 8];
        let digest = mum::hash512(data, &seed);
        assert!(mum::verify512(data, &seed, &digest));

        let mut corrupted = digest;
        corrupted[0] ^= 1;
        assert!(!mum::verify512(data, &seed, &corrupted));
    });
}
