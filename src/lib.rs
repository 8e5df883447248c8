//! # SLH-DSA: the stateless hash-based digital signature standard
//!
//! Pure-Rust implementation of SLH-DSA (formerly SPHINCS+) as
//! specified in FIPS-205, covering all twelve standard parameter sets
//! over the SHA2 and SHAKE hash families.
//!
//! Parameter sets are plain runtime values: every key and signature
//! operation borrows a shared [`ParameterSet`] reference, so one
//! compiled code path serves all variants and non-standard geometries
//! can be built with [`ParameterSet::custom`].
//!
//! ```
//! use slh_dsa_rt::{SigningKey, SLH_DSA_SHAKE_128F};
//! use rand::thread_rng;
//!
//! let sk = SigningKey::new(&SLH_DSA_SHAKE_128F, &mut thread_rng());
//! let vk = sk.verifying_key();
//!
//! let sig = sk.sign(b"message", b"").unwrap();
//! assert!(vk.verify(b"message", b"", &sig).unwrap());
//! ```
//!
//! ## ⚠️ Security Warning
//!
//! The implementation contained in this crate has never been
//! independently audited. USE AT YOUR OWN RISK!

#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::missing_panics_doc)]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/6ee8e381/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/6ee8e381/logo.svg"
)]

mod address;
mod context;
mod error;
mod fors;
mod hashes;
mod hypertree;
mod params;
mod prehash;
mod signature_encoding;
mod signing_key;
mod util;
mod verifying_key;
mod wots;
mod xmss;

pub use error::Error;
pub use hashes::HashFamily;
pub use params::{
    ParameterSet, ALL_PARAMETER_SETS, SLH_DSA_SHA2_128F, SLH_DSA_SHA2_128S, SLH_DSA_SHA2_192F,
    SLH_DSA_SHA2_192S, SLH_DSA_SHA2_256F, SLH_DSA_SHA2_256S, SLH_DSA_SHAKE_128F,
    SLH_DSA_SHAKE_128S, SLH_DSA_SHAKE_192F, SLH_DSA_SHAKE_192S, SLH_DSA_SHAKE_256F,
    SLH_DSA_SHAKE_256S,
};
pub use prehash::PreHash;
pub use signature_encoding::Signature;
pub use signing_key::SigningKey;
pub use verifying_key::VerifyingKey;

pub use signature;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::thread_rng;
    use signature::{Keypair, RandomizedSigner, Signer, Verifier};

    #[test]
    fn sign_verify_round_trips_across_parameter_sets() {
        // The s geometries recompute full trees per signature; keep the
        // loop to the f variants and one s variant per family.
        let sets = [
            &SLH_DSA_SHAKE_128F,
            &SLH_DSA_SHA2_128F,
            &SLH_DSA_SHAKE_192F,
            &SLH_DSA_SHA2_192F,
            &SLH_DSA_SHAKE_128S,
            &SLH_DSA_SHA2_128S,
        ];
        for prm in sets {
            let sk = SigningKey::new(prm, &mut thread_rng());
            let vk = sk.verifying_key();
            let sig = sk.sign(b"hello world", b"").unwrap();
            assert_eq!(sig.len(), prm.sig_len(), "{}", prm.alg_id());
            assert!(vk.verify(b"hello world", b"", &sig).unwrap(), "{}", prm.alg_id());
        }
    }

    #[test]
    fn deterministic_signing_is_reproducible() {
        let sk = SigningKey::new(&SLH_DSA_SHAKE_128F, &mut thread_rng());
        let a = sk.sign(b"msg", b"ctx").unwrap();
        let b = sk.sign(b"msg", b"ctx").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn randomized_signing_differs_but_verifies() {
        let sk = SigningKey::new(&SLH_DSA_SHAKE_128F, &mut thread_rng());
        let vk = sk.verifying_key();
        let a = sk.sign_randomized(b"msg", b"", &mut thread_rng()).unwrap();
        let b = sk.sign_randomized(b"msg", b"", &mut thread_rng()).unwrap();
        assert_ne!(a, b);
        assert!(vk.verify(b"msg", b"", &a).unwrap());
        assert!(vk.verify(b"msg", b"", &b).unwrap());
    }

    #[test]
    fn tampered_signature_fails() {
        let prm = &SLH_DSA_SHAKE_128F;
        let sk = SigningKey::new(prm, &mut thread_rng());
        let vk = sk.verifying_key();
        let sig = sk.sign(b"msg", b"").unwrap();

        // One corrupted byte in each region: the randomizer, the FORS
        // signature, and the hypertree signature
        let fors_off = prm.n();
        let ht_off = prm.sig_len() - 1;
        for off in [0, fors_off, ht_off] {
            let mut bytes = sig.to_vec();
            bytes[off] ^= 0xff;
            let bad = Signature::new(prm, &bytes).unwrap();
            assert!(!vk.verify(b"msg", b"", &bad).unwrap(), "offset {off}");
        }
    }

    #[test]
    fn tampered_message_fails() {
        let sk = SigningKey::new(&SLH_DSA_SHAKE_128F, &mut thread_rng());
        let vk = sk.verifying_key();
        let sig = sk.sign(b"msg", b"").unwrap();
        assert!(!vk.verify(b"msh", b"", &sig).unwrap());
    }

    #[test]
    fn wrong_key_fails() {
        let prm = &SLH_DSA_SHAKE_128F;
        let sk = SigningKey::new(prm, &mut thread_rng());
        let other = SigningKey::new(prm, &mut thread_rng());
        let sig = sk.sign(b"msg", b"").unwrap();
        assert!(!other.verifying_key().verify(b"msg", b"", &sig).unwrap());
    }

    #[test]
    fn context_string_is_bound() {
        let sk = SigningKey::new(&SLH_DSA_SHAKE_128F, &mut thread_rng());
        let vk = sk.verifying_key();
        let sig = sk.sign(b"msg", b"context-a").unwrap();
        assert!(vk.verify(b"msg", b"context-a", &sig).unwrap());
        assert!(!vk.verify(b"msg", b"context-b", &sig).unwrap());
        // A pure signature never verifies as a pre-hashed one
        assert!(!vk
            .hash_verify(b"msg", b"context-a", PreHash::Sha2_256, &sig)
            .unwrap());
    }

    #[test]
    fn empty_message_signs_and_verifies() {
        let sk = SigningKey::new(&SLH_DSA_SHAKE_128F, &mut thread_rng());
        let vk = sk.verifying_key();
        let sig = sk.sign(b"", b"").unwrap();
        assert!(vk.verify(b"", b"", &sig).unwrap());
    }

    #[test]
    fn prehashed_round_trip() {
        let sk = SigningKey::new(&SLH_DSA_SHAKE_128F, &mut thread_rng());
        let vk = sk.verifying_key();
        for ph in [
            PreHash::Sha2_256,
            PreHash::Sha2_512,
            PreHash::Shake128,
            PreHash::Shake256,
        ] {
            let sig = sk.hash_sign(b"a longer message to pre-hash", b"ctx", ph).unwrap();
            assert!(vk
                .hash_verify(b"a longer message to pre-hash", b"ctx", ph, &sig)
                .unwrap());
            // The pre-hash algorithm is bound via its OID
            let other = if ph == PreHash::Sha2_256 {
                PreHash::Shake128
            } else {
                PreHash::Sha2_256
            };
            assert!(!vk
                .hash_verify(b"a longer message to pre-hash", b"ctx", other, &sig)
                .unwrap());
        }
    }

    #[test]
    fn signature_trait_interop() {
        let sk = SigningKey::new(&SLH_DSA_SHAKE_128F, &mut thread_rng());
        let vk = sk.verifying_key();
        let sig = sk.try_sign(b"msg").unwrap();
        Verifier::verify(&vk, b"msg", &sig).unwrap();
        assert_eq!(sk.verifying_key(), Keypair::verifying_key(&sk));

        let sig = sk.try_sign_with_rng(&mut thread_rng(), b"msg").unwrap();
        Verifier::verify(&vk, b"msg", &sig).unwrap();
    }

    #[test]
    fn internal_forms_reject_bad_randomizer_length() {
        let sk = SigningKey::new(&SLH_DSA_SHAKE_128F, &mut thread_rng());
        assert_eq!(
            sk.sign_internal(b"msg", &[0u8; 15]).unwrap_err(),
            Error::SizeMismatch
        );
    }

    #[test]
    fn custom_parameter_set_round_trips() {
        // A toy geometry: tiny hypertree, single-digit FORS
        let prm = ParameterSet::custom("toy-shake", HashFamily::Shake, 16, 6, 2, 3, 4, 8, 4, 12)
            .unwrap();
        let sk = SigningKey::new(&prm, &mut thread_rng());
        let vk = sk.verifying_key();
        let sig = sk.sign(b"toy", b"").unwrap();
        assert!(vk.verify(b"toy", b"", &sig).unwrap());
    }
}
