//! Signature container and its byte layout.
//!
//! A serialized signature is `R ∥ SIG_FORS ∥ SIG_HT`:
//! the n-byte randomizer, then k blocks of `(a + 1)·n` FORS bytes,
//! then d blocks of `(len + h')·n` hypertree bytes. The container keeps
//! the flat encoding; the component views are sliced out on demand.

use crate::error::Error;
use crate::params::ParameterSet;

/// A signature tied to the parameter set that produced it.
///
/// Heap-allocated: the standard sets range from 7 856 to 49 856 bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    bytes: Box<[u8]>,
}

impl Signature {
    /// Wraps signature bytes after checking them against the parameter
    /// set's signature size.
    pub fn new(prm: &ParameterSet, bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != prm.sig_len() {
            return Err(Error::SizeMismatch);
        }
        Ok(Signature {
            bytes: bytes.into(),
        })
    }

    pub(crate) fn from_boxed(bytes: Box<[u8]>) -> Self {
        Signature { bytes }
    }

    /// The flat `R ∥ SIG_FORS ∥ SIG_HT` encoding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The encoding as an owned byte vector.
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    /// Encoded length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the encoding is empty (never the case for a signature
    /// produced by this crate).
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// `(R, SIG_FORS, SIG_HT)` component views.
    pub(crate) fn parts(&self, prm: &ParameterSet) -> (&[u8], &[u8], &[u8]) {
        debug_assert_eq!(self.bytes.len(), prm.sig_len());
        let (rand, rest) = self.bytes.split_at(prm.n());
        let (fors_sig, ht_sig) = rest.split_at(prm.fors_sig_len());
        (rand, fors_sig, ht_sig)
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Signature> for Vec<u8> {
    fn from(sig: Signature) -> Vec<u8> {
        sig.bytes.into_vec()
    }
}
