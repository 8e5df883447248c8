//! SHA2 instantiation of the tweakable hashes.
//!
//! The security category 1 sets (n = 16) run everything on SHA-256. At
//! categories 3 and 5 the functions `H`, `T_l`, `H_msg` and `PRF_msg`
//! move to SHA-512 while `F` and `PRF` stay on SHA-256. The tweakable
//! hashes use the 22-byte compressed address and pad `pk_seed` with
//! zeros to a full compression block so the midstate can be cached.

use digest::Digest;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha512};

use crate::address::Address;
use crate::params::{MAX_M, MAX_N};

static ZEROS: [u8; 128] = [0u8; 128];

pub(super) fn midstate_256(pk_seed: &[u8]) -> Sha256 {
    Sha256::new_with_prefix(pk_seed).chain_update(&ZEROS[..64 - pk_seed.len()])
}

pub(super) fn midstate_512(pk_seed: &[u8]) -> Sha512 {
    Sha512::new_with_prefix(pk_seed).chain_update(&ZEROS[..128 - pk_seed.len()])
}

pub(super) fn thash_256(mid: &Sha256, n: usize, adrs: &Address, parts: &[&[u8]]) -> [u8; MAX_N] {
    let mut state = mid.clone();
    state.update(adrs.compressed());
    for part in parts {
        state.update(part);
    }
    let digest = state.finalize();
    let mut out = [0u8; MAX_N];
    out[..n].copy_from_slice(&digest[..n]);
    out
}

pub(super) fn thash_512(mid: &Sha512, n: usize, adrs: &Address, parts: &[&[u8]]) -> [u8; MAX_N] {
    let mut state = mid.clone();
    state.update(adrs.compressed());
    for part in parts {
        state.update(part);
    }
    let digest = state.finalize();
    let mut out = [0u8; MAX_N];
    out[..n].copy_from_slice(&digest[..n]);
    out
}

pub(super) fn prf_msg(n: usize, sk_prf: &[u8], opt_rand: &[u8], msg: &[&[u8]]) -> [u8; MAX_N] {
    let mut out = [0u8; MAX_N];
    if n > 16 {
        // HMAC accepts keys of any length
        let mut mac = Hmac::<Sha512>::new_from_slice(sk_prf).expect("any key length is valid");
        mac.update(opt_rand);
        for part in msg {
            mac.update(part);
        }
        out[..n].copy_from_slice(&mac.finalize().into_bytes()[..n]);
    } else {
        let mut mac = Hmac::<Sha256>::new_from_slice(sk_prf).expect("any key length is valid");
        mac.update(opt_rand);
        for part in msg {
            mac.update(part);
        }
        out[..n].copy_from_slice(&mac.finalize().into_bytes()[..n]);
    }
    out
}

/// `H_msg = MGF1(R ∥ pk_seed ∥ SHA(R ∥ pk_seed ∥ pk_root ∥ M), m)` with
/// the hash matched to the security category.
pub(super) fn h_msg(
    n: usize,
    m: usize,
    rand: &[u8],
    pk_seed: &[u8],
    pk_root: &[u8],
    msg: &[&[u8]],
) -> [u8; MAX_M] {
    let mut out = [0u8; MAX_M];
    if n > 16 {
        let mut state = Sha512::new_with_prefix(rand)
            .chain_update(pk_seed)
            .chain_update(pk_root);
        for part in msg {
            state.update(part);
        }
        let inner = state.finalize();
        let mut seed = Vec::with_capacity(2 * n + inner.len());
        seed.extend_from_slice(rand);
        seed.extend_from_slice(pk_seed);
        seed.extend_from_slice(&inner);
        mgf1::<Sha512>(&seed, &mut out[..m]);
    } else {
        let mut state = Sha256::new_with_prefix(rand)
            .chain_update(pk_seed)
            .chain_update(pk_root);
        for part in msg {
            state.update(part);
        }
        let inner = state.finalize();
        let mut seed = Vec::with_capacity(2 * n + inner.len());
        seed.extend_from_slice(rand);
        seed.extend_from_slice(pk_seed);
        seed.extend_from_slice(&inner);
        mgf1::<Sha256>(&seed, &mut out[..m]);
    }
    out
}

/// NIST SP 800-56B MGF1 mask generation over the given digest.
fn mgf1<D: Digest>(seed: &[u8], out: &mut [u8]) {
    for (counter, chunk) in out.chunks_mut(<D as Digest>::output_size()).enumerate() {
        let digest = D::new_with_prefix(seed)
            .chain_update((counter as u32).to_be_bytes())
            .finalize();
        chunk.copy_from_slice(&digest[..chunk.len()]);
    }
}
