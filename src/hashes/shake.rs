//! SHAKE256 instantiation of the tweakable hashes.
//!
//! All five functions are plain SHAKE256 over the concatenated inputs,
//! squeezed to the required length. The tweakable ones prefix
//! `pk_seed ∥ ADRS` with the full 32-byte address encoding.

use digest::{ExtendableOutput, Update};
use sha3::Shake256;

use crate::address::Address;
use crate::params::{MAX_M, MAX_N};

pub(super) fn midstate(pk_seed: &[u8]) -> Shake256 {
    let mut state = Shake256::default();
    state.update(pk_seed);
    state
}

pub(super) fn thash(mid: &Shake256, n: usize, adrs: &Address, parts: &[&[u8]]) -> [u8; MAX_N] {
    let mut state = mid.clone();
    state.update(adrs.as_bytes());
    for part in parts {
        state.update(part);
    }
    let mut out = [0u8; MAX_N];
    state.finalize_xof_into(&mut out[..n]);
    out
}

pub(super) fn prf_msg(n: usize, sk_prf: &[u8], opt_rand: &[u8], msg: &[&[u8]]) -> [u8; MAX_N] {
    let mut state = Shake256::default();
    state.update(sk_prf);
    state.update(opt_rand);
    for part in msg {
        state.update(part);
    }
    let mut out = [0u8; MAX_N];
    state.finalize_xof_into(&mut out[..n]);
    out
}

pub(super) fn h_msg(
    m: usize,
    rand: &[u8],
    pk_seed: &[u8],
    pk_root: &[u8],
    msg: &[&[u8]],
) -> [u8; MAX_M] {
    let mut state = Shake256::default();
    state.update(rand);
    state.update(pk_seed);
    state.update(pk_root);
    for part in msg {
        state.update(part);
    }
    let mut out = [0u8; MAX_M];
    state.finalize_xof_into(&mut out[..m]);
    out
}
