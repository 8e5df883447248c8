//! Pre-hash registry for the HashSLH-DSA variants (FIPS-205
//! section 10.2.2).
//!
//! `hash_sign` and `hash_verify` sign `PH(M)` prefixed with the DER
//! encoding of the hash's OID, binding the signature to the algorithm
//! that produced the digest.

use digest::{Digest, ExtendableOutput, Update};
use sha2::{Sha256, Sha512};
use sha3::{Shake128, Shake256};

use crate::error::Error;

/// Approved pre-hash functions.
///
/// The XOFs use the output lengths fixed by FIPS-205: 256 bits for
/// SHAKE128 and 512 bits for SHAKE256.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum PreHash {
    /// SHA-256.
    Sha2_256,
    /// SHA-512.
    Sha2_512,
    /// SHAKE128 with 256-bit output.
    Shake128,
    /// SHAKE256 with 512-bit output.
    Shake256,
}

impl PreHash {
    /// Look up a pre-hash by its ACVP algorithm name, e.g.
    /// `"SHA2-256"` or `"SHAKE-128"`.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedHash`] for names outside the
    /// registry.
    pub fn by_name(name: &str) -> Result<Self, Error> {
        match name {
            "SHA2-256" => Ok(PreHash::Sha2_256),
            "SHA2-512" => Ok(PreHash::Sha2_512),
            "SHAKE-128" => Ok(PreHash::Shake128),
            "SHAKE-256" => Ok(PreHash::Shake256),
            _ => Err(Error::UnsupportedHash),
        }
    }

    /// DER-encoded OID identifying the hash, as prefixed to the digest
    /// in the signed message.
    pub(crate) fn oid(self) -> &'static [u8] {
        match self {
            // 2.16.840.1.101.3.4.2.x under the NIST hashAlgs arc
            PreHash::Sha2_256 => &[0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x01],
            PreHash::Sha2_512 => &[0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x03],
            PreHash::Shake128 => &[0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x0b],
            PreHash::Shake256 => &[0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x0c],
        }
    }

    /// Digest length in bytes.
    pub fn output_len(self) -> usize {
        match self {
            PreHash::Sha2_256 | PreHash::Shake128 => 32,
            PreHash::Sha2_512 | PreHash::Shake256 => 64,
        }
    }

    /// `PH(M)`.
    pub(crate) fn digest(self, msg: &[u8]) -> [u8; 64] {
        let mut out = [0u8; 64];
        match self {
            PreHash::Sha2_256 => out[..32].copy_from_slice(&Sha256::digest(msg)),
            PreHash::Sha2_512 => out.copy_from_slice(&Sha512::digest(msg)),
            PreHash::Shake128 => {
                let mut xof = Shake128::default();
                xof.update(msg);
                xof.finalize_xof_into(&mut out[..32]);
            }
            PreHash::Shake256 => {
                let mut xof = Shake256::default();
                xof.update(msg);
                xof.finalize_xof_into(&mut out);
            }
        }
        out
    }
}
