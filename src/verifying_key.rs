//! SLH-DSA verifying keys.

use core::fmt;

use signature::Verifier;

use crate::address::{Address, AddressType};
use crate::context::SlhContext;
use crate::error::Error;
use crate::fors;
use crate::hypertree;
use crate::params::ParameterSet;
use crate::prehash::PreHash;
use crate::signature_encoding::Signature;
use crate::util::split_digest;

/// A `VerifyingKey` is an SLH-DSA public key, allowing verification of
/// signatures created with the corresponding [`SigningKey`].
///
/// The `verify*` methods distinguish outcomes: `Ok(true)` for a valid
/// signature, `Ok(false)` for one that does not check out, and `Err`
/// only for structurally malformed inputs.
///
/// [`SigningKey`]: crate::SigningKey
#[derive(Clone)]
pub struct VerifyingKey<'a> {
    ctx: SlhContext<'a>,
}

impl<'a> VerifyingKey<'a> {
    pub(crate) fn from_ctx(ctx: SlhContext<'a>) -> Self {
        VerifyingKey { ctx }
    }

    /// Deserialize a 2n-byte public key (`pk_seed ∥ pk_root`).
    ///
    /// # Errors
    /// Returns [`Error::SizeMismatch`] on any other length.
    pub fn from_bytes(prm: &'a ParameterSet, bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != prm.pk_len() {
            return Err(Error::SizeMismatch);
        }
        let n = prm.n();
        Ok(VerifyingKey {
            ctx: SlhContext::for_verifying(prm, &bytes[..n], &bytes[n..]),
        })
    }

    /// Serialize to the 2n-byte public key encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.ctx.prm().pk_len());
        bytes.extend_from_slice(self.ctx.pk_seed());
        bytes.extend_from_slice(self.ctx.pk_root());
        bytes
    }

    /// The parameter set this key belongs to.
    pub fn parameter_set(&self) -> &'a ParameterSet {
        self.ctx.prm()
    }

    /// Algorithm 20 (`slh_verify_internal`): verify a raw message.
    /// Published for test-vector validation; the context-framed
    /// `verify` methods are the intended interface.
    ///
    /// # Errors
    /// Returns [`Error::SizeMismatch`] if the signature length does not
    /// match the parameter set.
    #[doc(hidden)]
    pub fn verify_internal(&self, msg: &[u8], signature: &Signature) -> Result<bool, Error> {
        self.verify_internal_parts(&[msg], signature)
    }

    fn verify_internal_parts(&self, msg: &[&[u8]], signature: &Signature) -> Result<bool, Error> {
        let ctx = &self.ctx;
        let prm = ctx.prm();
        let n = prm.n();
        if signature.len() != prm.sig_len() {
            return Err(Error::SizeMismatch);
        }
        let (rand, fors_sig, ht_sig) = signature.parts(prm);

        let digest = ctx.h_msg(rand, msg);
        let (md, idx_tree, idx_leaf) = split_digest(prm, &digest[..prm.m()]);

        let mut adrs = Address::new();
        adrs.set_tree(idx_tree);
        adrs.set_type_and_clear(AddressType::ForsTree);
        adrs.set_key_pair(idx_leaf);

        let fors_pk = fors::fors_pk_from_sig(ctx, fors_sig, md, &adrs);
        Ok(hypertree::ht_verify(
            ctx,
            &fors_pk[..n],
            ht_sig,
            idx_tree,
            idx_leaf,
        ))
    }

    /// Algorithm 24 (`slh_verify`): verify against
    /// `0x00 ∥ len(ctx) ∥ ctx ∥ M`.
    ///
    /// # Errors
    /// Returns [`Error::ContextTooLong`] if `ctx_str` exceeds 255
    /// bytes, [`Error::SizeMismatch`] for a malformed signature length.
    pub fn verify(&self, msg: &[u8], ctx_str: &[u8], signature: &Signature) -> Result<bool, Error> {
        let len = u8::try_from(ctx_str.len()).map_err(|_| Error::ContextTooLong)?;
        self.verify_internal_parts(&[&[0, len], ctx_str, msg], signature)
    }

    /// Algorithm 25 (`hash_slh_verify`): verify against
    /// `0x01 ∥ len(ctx) ∥ ctx ∥ OID(ph) ∥ PH(M)`.
    ///
    /// # Errors
    /// Returns [`Error::ContextTooLong`] if `ctx_str` exceeds 255
    /// bytes, [`Error::SizeMismatch`] for a malformed signature length.
    pub fn hash_verify(
        &self,
        msg: &[u8],
        ctx_str: &[u8],
        ph: PreHash,
        signature: &Signature,
    ) -> Result<bool, Error> {
        let len = u8::try_from(ctx_str.len()).map_err(|_| Error::ContextTooLong)?;
        let digest = ph.digest(msg);
        self.verify_internal_parts(
            &[&[1, len], ctx_str, ph.oid(), &digest[..ph.output_len()]],
            signature,
        )
    }
}

impl PartialEq for VerifyingKey<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.ctx.prm().alg_id() == other.ctx.prm().alg_id()
            && self.ctx.pk_seed() == other.ctx.pk_seed()
            && self.ctx.pk_root() == other.ctx.pk_root()
    }
}

impl Eq for VerifyingKey<'_> {}

impl fmt::Debug for VerifyingKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerifyingKey")
            .field("alg", &self.ctx.prm().alg_id())
            .finish_non_exhaustive()
    }
}

impl Verifier<Signature> for VerifyingKey<'_> {
    fn verify(&self, msg: &[u8], signature: &Signature) -> Result<(), signature::Error> {
        match VerifyingKey::verify(self, msg, &[], signature) {
            Ok(true) => Ok(()),
            Ok(false) => Err(signature::Error::new()),
            Err(e) => Err(e.into()),
        }
    }
}
