//! Official test vectors for the MUM family
//!
//! Verifies the implementation against the canonical JSON vectors. These
//! digests were recorded by the first conforming implementation and are
//! frozen: any change here is a new hash, not a revision of this one.

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;

#[derive(Deserialize)]
struct Vector {
    name: String,
    input: String,
    seed: String,
    hash: String,
}

#[derive(Deserialize)]
struct TestVectors {
    mum64: Vec<Vector>,
    mum512: Vec<Vector>,
}

/// Expand the input token into key material.
fn material(token: &str) -> Vec<u8> {
    match token {
        "EXACT_64_ZERO" => vec![0u8; 64],
        "UNALIGNED_63_ZERO" => vec![0u8; 63],
        "ZERO_511" => vec![0u8; 511],
        "EXACT_512_ZERO" => vec![0u8; 512],
        "ZERO_513" => vec![0u8; 513],
        counting if counting.starts_with("COUNTING_") => {
            let n: usize = counting["COUNTING_".len()..].parse().unwrap();
            (0..n).map(|i| i as u8).collect()
        }
        literal => literal.as_bytes().to_vec(),
    }
}

fn load() -> TestVectors {
    let file = File::open("tests/test_vectors.json").expect("failed to open test_vectors.json");
    serde_json::from_reader(BufReader::new(file)).expect("failed to parse JSON")
}

#[test]
fn test_official_vectors_mum64() {
    for vector in load().mum64 {
        let input = material(&vector.input);
        let seed = u64::from_str_radix(&vector.seed, 16).unwrap();
        let digest = mum::hash64(&input, seed);
        assert_eq!(
            hex::encode(digest.to_le_bytes()),
            vector.hash,
            "vector mismatch: {}",
            vector.name
        );
        // the VMUM entry point must agree on every vector
        assert_eq!(digest, mum::vhash64(&input, seed), "vhash64 diverged: {}", vector.name);
    }
}

#[test]
fn test_official_vectors_mum512() {
    for vector in load().mum512 {
        let input = material(&vector.input);
        let seed = match vector.seed.as_str() {
            "zero" => [0u64; 8],
            "default" => mum::kernels::constants::DEFAULT_SEED_512,
            other => panic!("unknown seed token {other}"),
        };
        let digest = mum::hash512(&input, &seed);
        let mut bytes = Vec::with_capacity(64);
        for limb in digest {
            bytes.extend_from_slice(&limb.to_le_bytes());
        }
        assert_eq!(hex::encode(bytes), vector.hash, "vector mismatch: {}", vector.name);
        assert!(mum::verify512(&input, &seed, &digest), "verify512 failed: {}", vector.name);
    }
}

/// Regenerate the vector file contents after an intentional change of hash
/// identity: `cargo test dump_test_vectors -- --ignored --nocapture`
#[test]
#[ignore]
fn dump_test_vectors() {
    for vector in load().mum64 {
        let input = material(&vector.input);
        let seed = u64::from_str_radix(&vector.seed, 16).unwrap();
        println!(
            "{}: {}",
            vector.name,
            hex::encode(mum::hash64(&input, seed).to_le_bytes())
        );
    }
}
