//! Runtime parameter sets
//!
//! FIPS-205 defines twelve standard parameter sets: two hash families
//! (SHA2 and SHAKE256) at three security levels, each with a
//! small-signature `s` and a fast-signing `f` geometry. All twelve are
//! driven by the same code paths through a shared, immutable
//! [`ParameterSet`] reference; nothing in the hot loops branches on the
//! algorithm name.

use crate::error::Error;
use crate::hashes::HashFamily;

/// Largest security parameter (hash output bytes) of any standard set.
pub(crate) const MAX_N: usize = 32;
/// Largest WOTS+ chain count (`2 * MAX_N + 3` for `lg_w = 4`).
pub(crate) const MAX_LEN: usize = 2 * MAX_N + 3;
/// Largest FORS tree count.
pub(crate) const MAX_K: usize = 35;
/// Largest message-digest length.
pub(crate) const MAX_M: usize = 49;
/// Largest per-layer tree height.
pub(crate) const MAX_HP: usize = 9;
/// Largest FORS tree height.
pub(crate) const MAX_A: usize = 14;

/// An SLH-DSA parameter set: the fixed geometry and hash family of one
/// algorithm variant.
///
/// One instance exists per standard variant (see the `SLH_DSA_*`
/// statics); every key, signature and verification operation consults
/// the same shared reference. Instances are immutable after
/// construction.
#[derive(Debug, PartialEq, Eq)]
pub struct ParameterSet {
    alg_id: &'static str,
    n: usize,
    h: usize,
    d: usize,
    hp: usize,
    a: usize,
    k: usize,
    lg_w: usize,
    m: usize,
    family: HashFamily,
}

macro_rules! params {
    ($id:literal, $family:ident, $n:literal, $h:literal, $d:literal, $hp:literal,
     $a:literal, $k:literal, $m:literal) => {
        ParameterSet {
            alg_id: $id,
            n: $n,
            h: $h,
            d: $d,
            hp: $hp,
            a: $a,
            k: $k,
            lg_w: 4,
            m: $m,
            family: HashFamily::$family,
        }
    };
}

/// SLH-DSA-SHA2-128s
pub static SLH_DSA_SHA2_128S: ParameterSet =
    params!("SLH-DSA-SHA2-128s", Sha2, 16, 63, 7, 9, 12, 14, 30);
/// SLH-DSA-SHA2-128f
pub static SLH_DSA_SHA2_128F: ParameterSet =
    params!("SLH-DSA-SHA2-128f", Sha2, 16, 66, 22, 3, 6, 33, 34);
/// SLH-DSA-SHA2-192s
pub static SLH_DSA_SHA2_192S: ParameterSet =
    params!("SLH-DSA-SHA2-192s", Sha2, 24, 63, 7, 9, 14, 17, 39);
/// SLH-DSA-SHA2-192f
pub static SLH_DSA_SHA2_192F: ParameterSet =
    params!("SLH-DSA-SHA2-192f", Sha2, 24, 66, 22, 3, 8, 33, 42);
/// SLH-DSA-SHA2-256s
pub static SLH_DSA_SHA2_256S: ParameterSet =
    params!("SLH-DSA-SHA2-256s", Sha2, 32, 64, 8, 8, 14, 22, 47);
/// SLH-DSA-SHA2-256f
pub static SLH_DSA_SHA2_256F: ParameterSet =
    params!("SLH-DSA-SHA2-256f", Sha2, 32, 68, 17, 4, 9, 35, 49);
/// SLH-DSA-SHAKE-128s
pub static SLH_DSA_SHAKE_128S: ParameterSet =
    params!("SLH-DSA-SHAKE-128s", Shake, 16, 63, 7, 9, 12, 14, 30);
/// SLH-DSA-SHAKE-128f
pub static SLH_DSA_SHAKE_128F: ParameterSet =
    params!("SLH-DSA-SHAKE-128f", Shake, 16, 66, 22, 3, 6, 33, 34);
/// SLH-DSA-SHAKE-192s
pub static SLH_DSA_SHAKE_192S: ParameterSet =
    params!("SLH-DSA-SHAKE-192s", Shake, 24, 63, 7, 9, 14, 17, 39);
/// SLH-DSA-SHAKE-192f
pub static SLH_DSA_SHAKE_192F: ParameterSet =
    params!("SLH-DSA-SHAKE-192f", Shake, 24, 66, 22, 3, 8, 33, 42);
/// SLH-DSA-SHAKE-256s
pub static SLH_DSA_SHAKE_256S: ParameterSet =
    params!("SLH-DSA-SHAKE-256s", Shake, 32, 64, 8, 8, 14, 22, 47);
/// SLH-DSA-SHAKE-256f
pub static SLH_DSA_SHAKE_256F: ParameterSet =
    params!("SLH-DSA-SHAKE-256f", Shake, 32, 68, 17, 4, 9, 35, 49);

/// All twelve standard parameter sets.
pub static ALL_PARAMETER_SETS: [&ParameterSet; 12] = [
    &SLH_DSA_SHAKE_128S,
    &SLH_DSA_SHAKE_128F,
    &SLH_DSA_SHAKE_192S,
    &SLH_DSA_SHAKE_192F,
    &SLH_DSA_SHAKE_256S,
    &SLH_DSA_SHAKE_256F,
    &SLH_DSA_SHA2_128S,
    &SLH_DSA_SHA2_128F,
    &SLH_DSA_SHA2_192S,
    &SLH_DSA_SHA2_192F,
    &SLH_DSA_SHA2_256S,
    &SLH_DSA_SHA2_256F,
];

impl ParameterSet {
    /// Construct a non-standard parameter set, validating the
    /// structural bounds.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameters`] if any field exceeds its
    /// structural maximum, if `h != d * hp`, or if the message digest
    /// length `m` cannot hold the FORS indices plus the hypertree leaf
    /// index.
    #[allow(clippy::too_many_arguments)]
    pub fn custom(
        alg_id: &'static str,
        family: HashFamily,
        n: usize,
        h: usize,
        d: usize,
        hp: usize,
        a: usize,
        k: usize,
        lg_w: usize,
        m: usize,
    ) -> Result<Self, Error> {
        let prm = ParameterSet {
            alg_id,
            n,
            h,
            d,
            hp,
            a,
            k,
            lg_w,
            m,
            family,
        };
        prm.validate()?;
        Ok(prm)
    }

    /// Look up a standard parameter set by its FIPS-205 name, e.g.
    /// `"SLH-DSA-SHAKE-128f"`.
    #[must_use]
    pub fn by_name(name: &str) -> Option<&'static ParameterSet> {
        ALL_PARAMETER_SETS
            .iter()
            .find(|prm| prm.alg_id == name)
            .copied()
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        let ok = (1..=MAX_N).contains(&self.n)
            && self.d > 0
            && (1..=MAX_HP).contains(&self.hp)
            && self.h == self.d * self.hp
            && self.h - self.hp <= 64
            && (1..=MAX_A).contains(&self.a)
            && (1..=MAX_K).contains(&self.k)
            && matches!(self.lg_w, 1 | 2 | 4 | 8)
            && self.wots_len() <= MAX_LEN
            && self.m <= MAX_M
            && self.m >= self.md_len() + self.tree_idx_len() + self.leaf_idx_len();
        if ok {
            Ok(())
        } else {
            Err(Error::InvalidParameters)
        }
    }

    /// The FIPS-205 algorithm designation, e.g. `"SLH-DSA-SHA2-128s"`.
    #[must_use]
    pub fn alg_id(&self) -> &'static str {
        self.alg_id
    }

    /// Security parameter: hash output length in bytes.
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Total hypertree height.
    #[must_use]
    pub fn h(&self) -> usize {
        self.h
    }

    /// Number of hypertree layers.
    #[must_use]
    pub fn d(&self) -> usize {
        self.d
    }

    /// Height of each layer tree (`h / d`).
    #[must_use]
    pub fn hp(&self) -> usize {
        self.hp
    }

    /// FORS tree height.
    #[must_use]
    pub fn a(&self) -> usize {
        self.a
    }

    /// Number of FORS trees.
    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Base-2 logarithm of the WOTS+ chain length.
    #[must_use]
    pub fn lg_w(&self) -> usize {
        self.lg_w
    }

    /// Message digest length in bytes.
    #[must_use]
    pub fn m(&self) -> usize {
        self.m
    }

    pub(crate) fn family(&self) -> HashFamily {
        self.family
    }

    /// Number of WOTS+ chains covering the message digest.
    pub(crate) fn wots_len1(&self) -> usize {
        (8 * self.n).div_ceil(self.lg_w)
    }

    /// Number of WOTS+ checksum chains.
    pub(crate) fn wots_len2(&self) -> usize {
        let max_csum = self.wots_len1() * ((1 << self.lg_w) - 1);
        let bits = usize::BITS - max_csum.leading_zeros();
        (bits as usize - 1) / self.lg_w + 1
    }

    /// Total number of WOTS+ chains.
    pub(crate) fn wots_len(&self) -> usize {
        self.wots_len1() + self.wots_len2()
    }

    /// Serialized length of one XMSS layer signature.
    pub(crate) fn xmss_sig_len(&self) -> usize {
        (self.wots_len() + self.hp) * self.n
    }

    /// Serialized length of the FORS signature.
    pub(crate) fn fors_sig_len(&self) -> usize {
        self.k * (self.a + 1) * self.n
    }

    /// Bytes of the message digest consumed as FORS indices.
    pub(crate) fn md_len(&self) -> usize {
        (self.k * self.a).div_ceil(8)
    }

    /// Bytes of the message digest consumed as the hypertree index.
    pub(crate) fn tree_idx_len(&self) -> usize {
        (self.h - self.hp).div_ceil(8)
    }

    /// Bytes of the message digest consumed as the leaf index.
    pub(crate) fn leaf_idx_len(&self) -> usize {
        self.hp.div_ceil(8)
    }

    /// Public key length in bytes (`2n`).
    #[must_use]
    pub fn pk_len(&self) -> usize {
        2 * self.n
    }

    /// Secret key length in bytes (`4n`).
    #[must_use]
    pub fn sk_len(&self) -> usize {
        4 * self.n
    }

    /// Signature length in bytes.
    #[must_use]
    pub fn sig_len(&self) -> usize {
        self.n + self.fors_sig_len() + self.d * self.xmss_sig_len()
    }
}
