//! Hash kernels
//!
//! The portable scalar implementation plus the hardware-specific renditions
//! of the vector layer. Every kernel produces bit-identical digests.

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod avx2;
pub mod constants;
pub mod portable;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod sse2;
