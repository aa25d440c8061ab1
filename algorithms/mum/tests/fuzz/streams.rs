//! PRNG stream properties under arbitrary seeds.

use bolero::check;
use mum::{Mum512Rng, MumRng};
use rand_core::RngCore;

#[test]
fn fuzz_streams_replay() {
    check!().with_type::<u64>().for_each(|seed| {
        let mut a = MumRng::new(*seed);
        let mut b = MumRng::new(*seed);
        for _ in 0..8 {
            assert_eq!(a.next(), b.next());
        }
    });
}

#[test]
fn fuzz_fill_bytes_matches_word_stream() {
    check!().with_type::<(u64, u8)>().for_each(|(seed, len)| {
        let len = usize::from(*len);
        let mut words = MumRng::new(*seed);
        let mut expected = Vec::with_capacity(len + 8);
        while expected.len() < len {
            expected.extend_from_slice(&words.next().to_le_bytes());
        }

        let mut bytes = MumRng::new(*seed);
        let mut buf = vec![0u8; len];
        bytes.fill_bytes(&mut buf);
        assert_eq!(buf[..], expected[..len]);
    });
}

#[test]
fn fuzz_wide_limb_stream_is_block_stream() {
    check!().with_type::<[u64; 8]>().for_each(|seed| {
        let mut blocks = Mum512Rng::new(seed);
        let mut limbs = Mum512Rng::new(seed);
        for _ in 0..2 {
            for expected in blocks.next_block() {
                assert_eq!(limbs.next_u64(), expected);
            }
        }
    });
}
