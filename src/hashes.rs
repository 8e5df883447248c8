//! Tweakable hash functions used in the SLH-DSA signature scheme
//!
//! Each parameter set derives five functions from its core hash family
//! (SHA2 or SHAKE256), defined in FIPS-205 section 11: the secret-value
//! PRF, the message-randomizer PRF, the message digest `H_msg`, the
//! chain step `F`, and the node/compression functions `H`/`T_l`. All of
//! them incorporate `pk_seed` and the full [`Address`] bytes as a
//! domain-separating prefix.
//!
//! Because `pk_seed` (plus, for SHA2, its zero padding to a full
//! compression block) prefixes almost every call, its absorption is
//! precomputed once per context as a [`Midstate`] and cloned per call.
//! Outputs are bit-identical to re-absorbing the prefix every time.

mod sha2;
mod shake;

use ::sha2::{Sha256, Sha512};
use ::sha3::Shake256;

use crate::address::Address;
use crate::params::{ParameterSet, MAX_M, MAX_N};

/// The hash family driving a parameter set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashFamily {
    /// SHA-256 (plus SHA-512 at the higher security categories).
    Sha2,
    /// SHAKE256.
    Shake,
}

/// Precomputed hash states with `pk_seed` already absorbed.
///
/// Only the first `n` bytes of each returned buffer are meaningful;
/// callers slice to the parameter set's `n`.
#[derive(Clone, Debug)]
pub(crate) enum Midstate {
    Shake(Shake256),
    Sha2 {
        s256: Sha256,
        /// Present for the security categories 3 and 5, where `H`, `T_l`,
        /// `H_msg` and `PRF_msg` move to SHA-512.
        s512: Option<Sha512>,
    },
}

impl Midstate {
    pub fn new(prm: &ParameterSet, pk_seed: &[u8]) -> Self {
        debug_assert_eq!(pk_seed.len(), prm.n());
        match prm.family() {
            HashFamily::Shake => Midstate::Shake(shake::midstate(pk_seed)),
            HashFamily::Sha2 => Midstate::Sha2 {
                s256: sha2::midstate_256(pk_seed),
                s512: (prm.n() > 16).then(|| sha2::midstate_512(pk_seed)),
            },
        }
    }

    /// `F` / `PRF` class: stays on the narrow hash in the SHA2 family.
    pub fn short(&self, n: usize, adrs: &Address, parts: &[&[u8]]) -> [u8; MAX_N] {
        match self {
            Midstate::Shake(mid) => shake::thash(mid, n, adrs, parts),
            Midstate::Sha2 { s256, .. } => sha2::thash_256(s256, n, adrs, parts),
        }
    }

    /// `H` / `T_l` class: uses the wide hash at categories 3 and 5.
    pub fn wide(&self, n: usize, adrs: &Address, parts: &[&[u8]]) -> [u8; MAX_N] {
        match self {
            Midstate::Shake(mid) => shake::thash(mid, n, adrs, parts),
            Midstate::Sha2 { s256, s512: None } => sha2::thash_256(s256, n, adrs, parts),
            Midstate::Sha2 {
                s512: Some(s512), ..
            } => sha2::thash_512(s512, n, adrs, parts),
        }
    }
}

/// Pseudorandom function generating the randomizer for the randomized
/// hashing of the message to be signed.
pub(crate) fn prf_msg(
    prm: &ParameterSet,
    sk_prf: &[u8],
    opt_rand: &[u8],
    msg: &[&[u8]],
) -> [u8; MAX_N] {
    match prm.family() {
        HashFamily::Shake => shake::prf_msg(prm.n(), sk_prf, opt_rand, msg),
        HashFamily::Sha2 => sha2::prf_msg(prm.n(), sk_prf, opt_rand, msg),
    }
}

/// Hashes a message under a given randomizer into the m-byte digest
/// consumed by FORS and the hypertree index derivation.
pub(crate) fn h_msg(
    prm: &ParameterSet,
    rand: &[u8],
    pk_seed: &[u8],
    pk_root: &[u8],
    msg: &[&[u8]],
) -> [u8; MAX_M] {
    match prm.family() {
        HashFamily::Shake => shake::h_msg(prm.m(), rand, pk_seed, pk_root, msg),
        HashFamily::Sha2 => sha2::h_msg(prm.n(), prm.m(), rand, pk_seed, pk_root, msg),
    }
}
