//! MUM multiplier constants
//!
//! Every 64-bit constant (except the structural sizes) is derived from a
//! single rule:
//!
//! ```text
//! constant = floor(frac(ln(p)) * 2^64)
//! ```
//!
//! where p is a prime number and frac(x) = x - floor(x).
//!
//! This ensures "nothing up my sleeve" — every multiplier is independently
//! reproducible from the natural logarithm of a prime, and the table is
//! identical on every architecture, which is what makes the digests stable
//! bit-for-bit.
//!
//! Verify: `python3 scripts/generate_constants.py`
//!
//! Prime assignment (consecutive, partitioned by purpose):
//!   `INIT_PRIME`, `LEN_PRIME`, `FINISH_PRIME_1/2` : ln(2, 3, 5, 7)
//!   `BLOCK_PRIMES`     : ln(11..37)
//!   `TAIL_PRIMES`      : ln(41..71)
//!   `VEC_MUL_PRIMES`   : ln(73..107)
//!   `VEC_SEED_PRIMES`  : ln(109..151)
//!   `VEC_FOLD_PRIMES`  : ln(157..193)
//!   MUM512 tables      : ln(197..541)
//!   `DEFAULT_SEED_512` : ln(547..593)
//!   `DEFAULT_SEED`     : ln(9973), deliberately outside the table's run

// =============================================================================
// STRUCTURAL SIZES
// =============================================================================

/// Bytes consumed per block-mixer iteration (eight 64-bit words).
pub const BLOCK_SIZE: usize = 64;

/// Key length at and above which the vector layer engages.
pub const VECTOR_THRESHOLD: usize = 512;

/// Bytes consumed per vector-layer iteration. The 0–255 byte remainder of a
/// long key still flows through the scalar block mixer and the tail mixer.
pub const VECTOR_BLOCK: usize = 256;

/// Number of 64-bit lanes in the vector-layer accumulator.
pub const LANES: usize = 8;

/// Bytes consumed per MUM512 block (four 128-bit words).
pub const WIDE_BLOCK: usize = 64;

// =============================================================================
// MUM64 / VMUM
// =============================================================================

/// Folded into the seed before anything else: ln(2).
pub const INIT_PRIME: u64 = 0xB172_17F7_D1CF_79AB;
/// Folded into the key length, so length enters the state first: ln(3).
pub const LEN_PRIME: u64 = 0x193E_A7AA_D030_A976;
/// First finalisation round multiplier: ln(5).
pub const FINISH_PRIME_1: u64 = 0x9C04_1F7E_D8D3_36AF;
/// Second finalisation round multiplier: ln(7).
pub const FINISH_PRIME_2: u64 = 0xF227_2AE3_25A5_7546;

/// Block-mixer multipliers, one per word of a 64-byte block.
pub const BLOCK_PRIMES: [u64; 8] = [
    0x65DC_76EF_E6E9_76F7, // ln(11)
    0x90A0_8566_318A_1FD0, // ln(13)
    0xD54D_783F_4FEF_39DF, // ln(17)
    0xF1C6_C0C0_9665_8E40, // ln(19)
    0x22AF_BFBA_367E_0122, // ln(23)
    0x5E07_1979_BFC3_D7AC, // ln(29)
    0x6F19_C912_256B_3E22, // ln(31)
    0x9C65_1DC7_58F7_A6F2, // ln(37)
];

/// Tail-mixer multipliers. Indices 0..=6 serve the full trailing words (a
/// 0–63 byte tail holds at most seven); index 7 is reserved for the partial
/// word, so the tail never repeats a block-mixer constant pattern.
pub const TAIL_PRIMES: [u64; 8] = [
    0xB6AC_A8B1_D589_B575, // ln(41)
    0xC2DE_02C2_9D82_22CB, // ln(43)
    0xD9A3_45F2_1E16_CB31, // ln(47)
    0xF865_0D04_4795_568F, // ln(53)
    0x13D9_7E71_CA5E_2DA9, // ln(59)
    0x1C62_3AC4_9B03_386C, // ln(61)
    0x3466_BC4A_044B_5829, // ln(67)
    0x433E_FD09_35B2_3D6B, // ln(71)
];

// =============================================================================
// VECTOR LAYER
// =============================================================================

/// Per-lane 32×32 multipliers (lo and hi half-words used independently).
pub const VEC_MUL_PRIMES: [u64; 8] = [
    0x4A5B_8CC8_8BF9_8CD3, // ln(73)
    0x5E94_226B_EC5C_BFB8, // ln(79)
    0x6B39_2358_B920_6784, // ln(83)
    0x7D17_45EB_A2BD_8E2D, // ln(89)
    0x9320_4239_52FE_003B, // ln(97)
    0x9D78_89C6_EE8C_2F8E, // ln(101)
    0xA27D_9956_44FA_F994, // ln(103)
    0xAC3E_82AF_D1D6_DC79, // ln(107)
];

/// Per-lane accumulator seeds, xored with the incoming scalar state.
pub const VEC_SEED_PRIMES: [u64; 8] = [
    0xB0FC_2CC0_5541_91F5, // ln(109)
    0xBA36_168C_E0D6_EE1D, // ln(113)
    0xD81C_A518_0B90_858D, // ln(127)
    0xE00C_EE88_B218_9A5C, // ln(131)
    0xEB83_DEB5_6027_349A, // ln(137)
    0xEF39_AF05_C2C4_931B, // ln(139)
    0x0102_A006_F9CB_3C2A, // ln(149)
    0x046C_738E_0014_C2F8, // ln(151)
];

/// Multipliers for folding the eight lane accumulators back into the scalar
/// state once the vector region is consumed.
pub const VEC_FOLD_PRIMES: [u64; 8] = [
    0x0E66_2006_8217_19E4, // ln(157)
    0x1800_035E_755E_C056, // ln(163)
    0x1E34_D7AD_75D7_A815, // ln(167)
    0x273E_1E31_1EA1_A70B, // ln(173)
    0x2FF8_8423_D216_0504, // ln(179)
    0x32D0_B391_A3CA_A870, // ln(181)
    0x4094_FDCB_1C2E_7EE1, // ln(191)
    0x433F_AA0A_5398_7C62, // ln(193)
];

// =============================================================================
// MUM512
// =============================================================================
//
// Each pair of consecutive entries forms one 128-bit constant, little-endian
// limb order (entry 2i is the low limb of constant i).

/// Seed whitening for the four 128-bit state registers.
pub const INIT128: [u64; 8] = [
    0x4880_0A21_08F0_4118, // ln(197)
    0x4B16_0665_F361_8981, // ln(199)
    0x5A13_5FE8_1C7E_B508, // ln(211)
    0x683C_68C2_468D_7997, // ln(223)
    0x6CC9_863B_846A_AD92, // ln(227)
    0x6F08_67BC_D230_A9F5, // ln(229)
    0x7377_418F_4D97_DD42, // ln(233)
    0x79F9_83ED_4826_668C, // ln(239)
];

/// Length whitening for the four 128-bit state registers.
pub const LEN128: [u64; 8] = [
    0x7C1B_A6DE_8B1F_8F86, // ln(241)
    0x8684_1575_2878_9D37, // ln(251)
    0x8C90_4013_A404_2B60, // ln(257)
    0x9278_AFC8_7A60_335D, // ln(263)
    0x983F_0145_F2ED_C31D, // ln(269)
    0x9A24_7583_FC01_7667, // ln(271)
    0x9FBF_9C7D_34C2_BD9A, // ln(277)
    0xA36B_362C_098E_99E2, // ln(281)
];

/// Block multipliers, one 128-bit constant per 16-byte word of a block.
pub const BLOCK128: [u64; 8] = [
    0xA53C_0204_AEAF_7A3A, // ln(283)
    0xAE1F_CAC7_5D01_262F, // ln(293)
    0xBA12_B1A9_0EEB_16F1, // ln(307)
    0xBD63_117B_9F56_4EB3, // ln(311)
    0xBF07_2C1B_8A72_D409, // ln(313)
    0xC247_62FB_ADE7_163B, // ln(317)
    0xCD57_A13D_C3E0_01D2, // ln(331)
    0xD1F0_F475_DF09_8AFB, // ln(337)
];

/// Cross-rotation multipliers applied after each block.
pub const ROT128: [u64; 8] = [
    0xD96D_5949_8DDD_3927, // ln(347)
    0xDAE5_FE55_9658_0B7B, // ln(349)
    0xDDD0_D9BF_8EA3_108E, // ln(353)
    0xE221_6A82_61BB_53CF, // ln(359)
    0xE7C5_CB48_70C4_A4B4, // ln(367)
    0xEBEC_9035_11CE_2435, // ln(373)
    0xF002_5F6B_A51C_C37D, // ln(379)
    0xF2B2_6BC9_FE9D_57CC, // ln(383)
];

/// Tail multipliers; constant 3 (entries 6 and 7) is reserved for the
/// partial word, as in the 64-bit tail mixer.
pub const TAIL128: [u64; 8] = [
    0xF6AD_22C7_F13F_5D8E, // ln(389)
    0xFBE3_3F82_E63C_6811, // ln(397)
    0xFE74_418F_C466_F554, // ln(401)
    0x0382_D622_A9D2_A260, // ln(409)
    0x09B1_E89A_88F6_D60F, // ln(419)
    0x0AE9_FC42_66D1_9487, // ln(421)
    0x10EC_75B4_FF22_5B60, // ln(431)
    0x121B_DE24_5D31_8C62, // ln(433)
];

/// First finalisation rotation pass.
pub const FIN128_A: [u64; 8] = [
    0x15A1_C0E7_B065_F4F3, // ln(439)
    0x17F4_303E_3CF3_FDBB, // ln(443)
    0x1B65_DA1A_C6C6_2DBE, // ln(449)
    0x1FEB_402E_3EB7_E2D6, // ln(457)
    0x2226_5FC8_0560_BABC, // ln(461)
    0x2342_1489_1325_FECA, // ln(463)
    0x2575_D590_22C8_739F, // ln(467)
    0x2BF4_9202_9563_1673, // ln(479)
];

/// Second finalisation rotation pass.
pub const FIN128_B: [u64; 8] = [
    0x3032_13DB_A65C_0938, // ln(487)
    0x324A_2990_5E63_CF97, // ln(491)
    0x366D_5A64_2EDA_3742, // ln(499)
    0x3878_98EE_65BF_BD18, // ln(503)
    0x3B81_B695_1AC4_91C9, // ln(509)
    0x4178_D5B1_4806_40BB, // ln(521)
    0x4273_EE4A_CE80_292F, // ln(523)
    0x4B1D_869E_A95A_DD70, // ln(541)
];

// =============================================================================
// DEFAULT SEEDS
// =============================================================================

/// Seed used by the seedless `hash` convenience entry point and the
/// MUM-PRNG step: ln(9973).
pub const DEFAULT_SEED: u64 = 0x3527_AE1B_9320_C5B8;

/// Seed used by the MUM512-PRNG step.
pub const DEFAULT_SEED_512: [u64; 8] = [
    0x4DF0_5B51_B572_4515, // ln(547)
    0x5293_A2B4_5067_6F59, // ln(557)
    0x5551_D04F_4873_713C, // ln(563)
    0x5808_8C52_4E8F_454F, // ln(569)
    0x58EE_7FCE_74B2_AB91, // ln(571)
    0x5B9B_8CFF_C75F_AE7E, // ln(577)
    0x6001_A068_5997_6907, // ln(587)
    0x629C_19A2_4C2F_E818, // ln(593)
];
