//! Expanded key material plus the cached hash midstate.
//!
//! Every signing or verifying operation runs against an [`SlhContext`]:
//! the parameter set, the seeds actually present (a verifying context
//! carries only `pk_seed` and `pk_root`), and a [`Midstate`] with
//! `pk_seed` pre-absorbed. The context is built once per key and shared
//! by all hash calls made on its behalf.

use crate::address::Address;
use crate::hashes::{self, Midstate};
use crate::params::{ParameterSet, MAX_M, MAX_N};

pub(crate) struct SlhContext<'a> {
    prm: &'a ParameterSet,
    sk_seed: [u8; MAX_N],
    sk_prf: [u8; MAX_N],
    pk_seed: [u8; MAX_N],
    pk_root: [u8; MAX_N],
    mid: Midstate,
}

impl Clone for SlhContext<'_> {
    fn clone(&self) -> Self {
        SlhContext {
            prm: self.prm,
            sk_seed: self.sk_seed,
            sk_prf: self.sk_prf,
            pk_seed: self.pk_seed,
            pk_root: self.pk_root,
            mid: self.mid.clone(),
        }
    }
}

impl<'a> SlhContext<'a> {
    /// Context holding the full secret key. `pk_root` starts zeroed and
    /// is filled in once the top-layer tree root has been computed.
    pub fn for_signing(
        prm: &'a ParameterSet,
        sk_seed: &[u8],
        sk_prf: &[u8],
        pk_seed: &[u8],
    ) -> Self {
        let n = prm.n();
        debug_assert_eq!(sk_seed.len(), n);
        debug_assert_eq!(sk_prf.len(), n);
        debug_assert_eq!(pk_seed.len(), n);

        let mut ctx = SlhContext {
            prm,
            sk_seed: [0u8; MAX_N],
            sk_prf: [0u8; MAX_N],
            pk_seed: [0u8; MAX_N],
            pk_root: [0u8; MAX_N],
            mid: Midstate::new(prm, pk_seed),
        };
        ctx.sk_seed[..n].copy_from_slice(sk_seed);
        ctx.sk_prf[..n].copy_from_slice(sk_prf);
        ctx.pk_seed[..n].copy_from_slice(pk_seed);
        ctx
    }

    /// Public-only context; the secret seed slots stay zero and the PRF
    /// operations must not be called on it.
    pub fn for_verifying(prm: &'a ParameterSet, pk_seed: &[u8], pk_root: &[u8]) -> Self {
        let n = prm.n();
        debug_assert_eq!(pk_seed.len(), n);
        debug_assert_eq!(pk_root.len(), n);

        let mut ctx = SlhContext {
            prm,
            sk_seed: [0u8; MAX_N],
            sk_prf: [0u8; MAX_N],
            pk_seed: [0u8; MAX_N],
            pk_root: [0u8; MAX_N],
            mid: Midstate::new(prm, pk_seed),
        };
        ctx.pk_seed[..n].copy_from_slice(pk_seed);
        ctx.pk_root[..n].copy_from_slice(pk_root);
        ctx
    }

    pub fn set_pk_root(&mut self, pk_root: &[u8]) {
        debug_assert_eq!(pk_root.len(), self.prm.n());
        self.pk_root[..self.prm.n()].copy_from_slice(pk_root);
    }

    pub fn prm(&self) -> &'a ParameterSet {
        self.prm
    }

    pub fn n(&self) -> usize {
        self.prm.n()
    }

    pub fn sk_seed(&self) -> &[u8] {
        &self.sk_seed[..self.prm.n()]
    }

    pub fn sk_prf(&self) -> &[u8] {
        &self.sk_prf[..self.prm.n()]
    }

    pub fn pk_seed(&self) -> &[u8] {
        &self.pk_seed[..self.prm.n()]
    }

    pub fn pk_root(&self) -> &[u8] {
        &self.pk_root[..self.prm.n()]
    }

    /// `PRF(pk_seed, sk_seed, ADRS)`: derives a chain-start or FORS
    /// leaf secret.
    pub fn prf(&self, adrs: &Address) -> [u8; MAX_N] {
        self.mid.short(self.prm.n(), adrs, &[self.sk_seed()])
    }

    /// `F(pk_seed, ADRS, m)`: one step along a WOTS+ chain or a FORS
    /// leaf hash.
    pub fn f(&self, adrs: &Address, m: &[u8]) -> [u8; MAX_N] {
        self.mid.short(self.prm.n(), adrs, &[m])
    }

    /// `H(pk_seed, ADRS, m1 ∥ m2)`: combines two sibling tree nodes.
    pub fn h(&self, adrs: &Address, m1: &[u8], m2: &[u8]) -> [u8; MAX_N] {
        self.mid.wide(self.prm.n(), adrs, &[m1, m2])
    }

    /// `T_l(pk_seed, ADRS, m)`: compresses an l·n-byte concatenation.
    pub fn t(&self, adrs: &Address, m: &[u8]) -> [u8; MAX_N] {
        self.mid.wide(self.prm.n(), adrs, &[m])
    }

    /// `PRF_msg(sk_prf, opt_rand, M)` where M is supplied in parts to
    /// avoid assembling the prefixed message in a contiguous buffer.
    pub fn prf_msg(&self, opt_rand: &[u8], msg: &[&[u8]]) -> [u8; MAX_N] {
        hashes::prf_msg(self.prm, self.sk_prf(), opt_rand, msg)
    }

    /// `H_msg(R, pk_seed, pk_root, M)` with M supplied in parts.
    pub fn h_msg(&self, rand: &[u8], msg: &[&[u8]]) -> [u8; MAX_M] {
        hashes::h_msg(self.prm, rand, self.pk_seed(), self.pk_root(), msg)
    }
}

#[cfg(feature = "zeroize")]
impl Drop for SlhContext<'_> {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        self.sk_seed.zeroize();
        self.sk_prf.zeroize();
    }
}
