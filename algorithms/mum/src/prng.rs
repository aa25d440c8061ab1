//! Hash-iterated pseudo-random generators.
//!
//! Both generators follow the same shape: `next()` hashes `state ⊕ counter`,
//! bumps the counter, and adopts the output as the new state. The stream is
//! a pure function of the seed; nothing is persisted.
//!
//! These are statistical-quality generators, not cryptographic ones. The
//! 64-bit stream is the one that has been run through the external
//! batteries (PractRand, NIST STS); see the repository documentation.

use crate::kernels::constants::{DEFAULT_SEED, DEFAULT_SEED_512};
use crate::oneshot::hash_u64;
use crate::wide;
use rand_core::{Error, RngCore, SeedableRng};

// =============================================================================
// MUM-PRNG
// =============================================================================

/// MUM-PRNG: the 64-bit hash iterated over its own output.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MumRng {
    state: u64,
    counter: u64,
}

impl MumRng {
    /// Creates a generator with the given seed. Counter starts at zero; all
    /// seeds work equally well.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            state: seed,
            counter: 0,
        }
    }

    /// Generates the next 64-bit random number.
    #[inline]
    pub fn next(&mut self) -> u64 {
        let value = hash_u64(self.state ^ self.counter, DEFAULT_SEED);
        self.counter = self.counter.wrapping_add(1);
        self.state = value;
        value
    }
}

impl RngCore for MumRng {
    fn next_u32(&mut self) -> u32 {
        self.next() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let bytes = dest.len();
        let mut i = 0;
        while i < bytes {
            let x = self.next();
            let j = bytes.min(i + 8);
            // Always little-endian.
            dest[i..j].copy_from_slice(&x.to_le_bytes()[..j - i]);
            i = j;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for MumRng {
    type Seed = [u8; 8];

    /// Always little-endian, so a serialised seed means the same thing on
    /// every architecture.
    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }
}

// =============================================================================
// MUM512-PRNG
// =============================================================================

/// MUM512-PRNG: the 512-bit hash iterated over its own output, 512 bits per
/// step.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Mum512Rng {
    state: [u64; 8],
    counter: u64,
    buf: [u64; 8],
    pos: usize,
}

impl Mum512Rng {
    /// Creates a generator from a 512-bit seed. Counter starts at zero.
    #[must_use]
    pub const fn new(seed: &[u64; 8]) -> Self {
        Self {
            state: *seed,
            counter: 0,
            buf: [0; 8],
            pos: 8,
        }
    }

    /// Generates the next 512 random bits as eight 64-bit limbs.
    pub fn next_block(&mut self) -> [u64; 8] {
        let mut block = [0u8; 64];
        for (i, limb) in self.state.iter().enumerate() {
            block[i * 8..(i + 1) * 8].copy_from_slice(&(limb ^ self.counter).to_le_bytes());
        }
        let value = wide::hash512(&block, &DEFAULT_SEED_512);
        self.counter = self.counter.wrapping_add(1);
        self.state = value;
        value
    }
}

impl RngCore for Mum512Rng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    /// Draws limbs out of the most recent block, refilling as needed.
    fn next_u64(&mut self) -> u64 {
        if self.pos == 8 {
            self.buf = self.next_block();
            self.pos = 0;
        }
        let value = self.buf[self.pos];
        self.pos += 1;
        value
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let bytes = dest.len();
        let mut i = 0;
        while i < bytes {
            let x = self.next_u64();
            let j = bytes.min(i + 8);
            dest[i..j].copy_from_slice(&x.to_le_bytes()[..j - i]);
            i = j;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// 512-bit seed wrapper; arrays this large do not implement `Default`, which
/// `SeedableRng` requires of its seed type.
#[derive(Clone)]
pub struct Seed512(pub [u8; 64]);

impl Default for Seed512 {
    fn default() -> Self {
        Self([0; 64])
    }
}

impl AsMut<[u8]> for Seed512 {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl SeedableRng for Mum512Rng {
    type Seed = Seed512;

    /// Little-endian limb order, matching the digest serialisation.
    fn from_seed(seed: Self::Seed) -> Self {
        let mut limbs = [0u64; 8];
        for (i, limb) in limbs.iter_mut().enumerate() {
            let mut w = [0u8; 8];
            w.copy_from_slice(&seed.0[i * 8..(i + 1) * 8]);
            *limb = u64::from_le_bytes(w);
        }
        Self::new(&limbs)
    }
}

// =============================================================================
// TESTS
// =============================================================================
