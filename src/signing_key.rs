//! SLH-DSA signing keys.

use core::fmt;

use rand_core::CryptoRngCore;
use signature::{KeypairRef, RandomizedSigner, Signer};

use crate::address::{Address, AddressType};
use crate::context::SlhContext;
use crate::error::Error;
use crate::fors;
use crate::hypertree;
use crate::params::ParameterSet;
use crate::prehash::PreHash;
use crate::signature_encoding::Signature;
use crate::util::split_digest;
use crate::verifying_key::VerifyingKey;
use crate::xmss;

/// A `SigningKey` allows signing messages under a fixed parameter set.
///
/// The deterministic `sign` methods use `pk_seed` as the signing
/// randomizer, the FIPS-205 hedged-variant fallback; the
/// `*_randomized` methods draw a fresh n-byte randomizer per
/// signature.
#[derive(Clone)]
pub struct SigningKey<'a> {
    ctx: SlhContext<'a>,
    verifying_key: VerifyingKey<'a>,
}

/// Domain prefix for the context-framed message forms: the domain byte
/// (0 pure, 1 pre-hashed) followed by the context length.
fn context_prefix(domain: u8, ctx_str: &[u8]) -> Result<[u8; 2], Error> {
    let len = u8::try_from(ctx_str.len()).map_err(|_| Error::ContextTooLong)?;
    Ok([domain, len])
}

impl<'a> SigningKey<'a> {
    /// Generate a fresh key: Algorithm 21, drawing `sk_seed`, `sk_prf`
    /// and `pk_seed` from the given generator.
    pub fn new(prm: &'a ParameterSet, rng: &mut impl CryptoRngCore) -> Self {
        let n = prm.n();
        let mut seeds = [0u8; 3 * crate::params::MAX_N];
        rng.fill_bytes(&mut seeds[..3 * n]);
        let (sk_seed, rest) = seeds[..3 * n].split_at(n);
        let (sk_prf, pk_seed) = rest.split_at(n);
        Self::keygen(prm, sk_seed, sk_prf, pk_seed)
    }

    /// Algorithm 18: expand explicit seeds into a key pair, computing
    /// `pk_root` as the top-layer XMSS root.
    ///
    /// # Errors
    /// Returns [`Error::SizeMismatch`] if any seed is not n bytes.
    pub fn from_seeds(
        prm: &'a ParameterSet,
        sk_seed: &[u8],
        sk_prf: &[u8],
        pk_seed: &[u8],
    ) -> Result<Self, Error> {
        let n = prm.n();
        if sk_seed.len() != n || sk_prf.len() != n || pk_seed.len() != n {
            return Err(Error::SizeMismatch);
        }
        Ok(Self::keygen(prm, sk_seed, sk_prf, pk_seed))
    }

    fn keygen(prm: &'a ParameterSet, sk_seed: &[u8], sk_prf: &[u8], pk_seed: &[u8]) -> Self {
        let mut ctx = SlhContext::for_signing(prm, sk_seed, sk_prf, pk_seed);
        let mut adrs = Address::new();
        adrs.set_layer(prm.d() as u32 - 1);
        let root = xmss::xmss_node(&ctx, 0, prm.hp() as u32, &adrs);
        ctx.set_pk_root(&root[..prm.n()]);

        let verifying_key = VerifyingKey::from_ctx(SlhContext::for_verifying(
            prm,
            ctx.pk_seed(),
            ctx.pk_root(),
        ));
        SigningKey { ctx, verifying_key }
    }

    /// Deserialize a 4n-byte secret key
    /// (`sk_seed ∥ sk_prf ∥ pk_seed ∥ pk_root`). The stored `pk_root`
    /// is trusted rather than recomputed.
    ///
    /// # Errors
    /// Returns [`Error::SizeMismatch`] on any other length.
    pub fn from_bytes(prm: &'a ParameterSet, bytes: &[u8]) -> Result<Self, Error> {
        let n = prm.n();
        if bytes.len() != prm.sk_len() {
            return Err(Error::SizeMismatch);
        }
        let mut ctx = SlhContext::for_signing(prm, &bytes[..n], &bytes[n..2 * n], &bytes[2 * n..3 * n]);
        ctx.set_pk_root(&bytes[3 * n..]);
        let verifying_key = VerifyingKey::from_ctx(SlhContext::for_verifying(
            prm,
            ctx.pk_seed(),
            ctx.pk_root(),
        ));
        Ok(SigningKey { ctx, verifying_key })
    }

    /// Serialize to the 4n-byte secret key encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.ctx.prm().sk_len());
        bytes.extend_from_slice(self.ctx.sk_seed());
        bytes.extend_from_slice(self.ctx.sk_prf());
        bytes.extend_from_slice(self.ctx.pk_seed());
        bytes.extend_from_slice(self.ctx.pk_root());
        bytes
    }

    /// The parameter set this key was generated under.
    pub fn parameter_set(&self) -> &'a ParameterSet {
        self.ctx.prm()
    }

    /// The corresponding public key.
    pub fn verifying_key(&self) -> VerifyingKey<'a> {
        self.verifying_key.clone()
    }

    /// Algorithm 19 (`slh_sign_internal`): sign a raw message with an
    /// explicit randomizer. Published for test-vector validation; the
    /// context-framed `sign` methods are the intended interface.
    ///
    /// # Errors
    /// Returns [`Error::SizeMismatch`] if `opt_rand` is not n bytes.
    #[doc(hidden)]
    pub fn sign_internal(&self, msg: &[u8], opt_rand: &[u8]) -> Result<Signature, Error> {
        self.sign_internal_parts(&[msg], opt_rand)
    }

    /// The message arrives in parts so the context-framed forms avoid
    /// assembling `M'` in a contiguous buffer.
    fn sign_internal_parts(&self, msg: &[&[u8]], opt_rand: &[u8]) -> Result<Signature, Error> {
        let ctx = &self.ctx;
        let prm = ctx.prm();
        let n = prm.n();
        if opt_rand.len() != n {
            return Err(Error::SizeMismatch);
        }

        let rand = ctx.prf_msg(opt_rand, msg);
        let digest = ctx.h_msg(&rand[..n], msg);
        let (md, idx_tree, idx_leaf) = split_digest(prm, &digest[..prm.m()]);

        let mut adrs = Address::new();
        adrs.set_tree(idx_tree);
        adrs.set_type_and_clear(AddressType::ForsTree);
        adrs.set_key_pair(idx_leaf);

        let mut sig = vec![0u8; prm.sig_len()].into_boxed_slice();
        let (r, rest) = sig.split_at_mut(n);
        r.copy_from_slice(&rand[..n]);
        let (fors_sig, ht_sig) = rest.split_at_mut(prm.fors_sig_len());

        fors::fors_sign(ctx, md, &adrs, fors_sig);
        let fors_pk = fors::fors_pk_from_sig(ctx, fors_sig, md, &adrs);
        hypertree::ht_sign(ctx, &fors_pk[..n], idx_tree, idx_leaf, ht_sig);

        Ok(Signature::from_boxed(sig))
    }

    /// Algorithm 22 (`slh_sign`), deterministic variant: signs
    /// `0x00 ∥ len(ctx) ∥ ctx ∥ M` with `opt_rand = pk_seed`.
    ///
    /// # Errors
    /// Returns [`Error::ContextTooLong`] if `ctx_str` exceeds 255
    /// bytes.
    pub fn sign(&self, msg: &[u8], ctx_str: &[u8]) -> Result<Signature, Error> {
        let prefix = context_prefix(0, ctx_str)?;
        self.sign_internal_parts(&[&prefix, ctx_str, msg], self.ctx.pk_seed())
    }

    /// Algorithm 22 with a fresh n-byte randomizer from `rng`.
    ///
    /// # Errors
    /// Returns [`Error::ContextTooLong`] if `ctx_str` exceeds 255
    /// bytes.
    pub fn sign_randomized(
        &self,
        msg: &[u8],
        ctx_str: &[u8],
        rng: &mut impl CryptoRngCore,
    ) -> Result<Signature, Error> {
        let prefix = context_prefix(0, ctx_str)?;
        let mut opt_rand = [0u8; crate::params::MAX_N];
        rng.fill_bytes(&mut opt_rand[..self.ctx.n()]);
        self.sign_internal_parts(&[&prefix, ctx_str, msg], &opt_rand[..self.ctx.n()])
    }

    /// Algorithm 23 (`hash_slh_sign`), deterministic variant: signs
    /// `0x01 ∥ len(ctx) ∥ ctx ∥ OID(ph) ∥ PH(M)`.
    ///
    /// # Errors
    /// Returns [`Error::ContextTooLong`] if `ctx_str` exceeds 255
    /// bytes.
    pub fn hash_sign(&self, msg: &[u8], ctx_str: &[u8], ph: PreHash) -> Result<Signature, Error> {
        let prefix = context_prefix(1, ctx_str)?;
        let digest = ph.digest(msg);
        self.sign_internal_parts(
            &[&prefix, ctx_str, ph.oid(), &digest[..ph.output_len()]],
            self.ctx.pk_seed(),
        )
    }

    /// Algorithm 23 with a fresh n-byte randomizer from `rng`.
    ///
    /// # Errors
    /// Returns [`Error::ContextTooLong`] if `ctx_str` exceeds 255
    /// bytes.
    pub fn hash_sign_randomized(
        &self,
        msg: &[u8],
        ctx_str: &[u8],
        ph: PreHash,
        rng: &mut impl CryptoRngCore,
    ) -> Result<Signature, Error> {
        let prefix = context_prefix(1, ctx_str)?;
        let digest = ph.digest(msg);
        let mut opt_rand = [0u8; crate::params::MAX_N];
        rng.fill_bytes(&mut opt_rand[..self.ctx.n()]);
        self.sign_internal_parts(
            &[&prefix, ctx_str, ph.oid(), &digest[..ph.output_len()]],
            &opt_rand[..self.ctx.n()],
        )
    }
}

// Key material stays out of debug output
impl fmt::Debug for SigningKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("alg", &self.ctx.prm().alg_id())
            .finish_non_exhaustive()
    }
}

impl Signer<Signature> for SigningKey<'_> {
    fn try_sign(&self, msg: &[u8]) -> Result<Signature, signature::Error> {
        self.sign(msg, &[]).map_err(Into::into)
    }
}

impl RandomizedSigner<Signature> for SigningKey<'_> {
    fn try_sign_with_rng(
        &self,
        rng: &mut impl signature::rand_core::CryptoRngCore,
        msg: &[u8],
    ) -> Result<Signature, signature::Error> {
        self.sign_randomized(msg, &[], rng).map_err(Into::into)
    }
}

impl<'a> AsRef<VerifyingKey<'a>> for SigningKey<'a> {
    fn as_ref(&self) -> &VerifyingKey<'a> {
        &self.verifying_key
    }
}

impl<'a> KeypairRef for SigningKey<'a> {
    type VerifyingKey = VerifyingKey<'a>;
}
