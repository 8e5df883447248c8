//! WOTS+ one-time signatures (FIPS-205 section 5).
//!
//! A WOTS+ key signs a single n-byte message by walking hash chains to
//! depths given by the base-w digits of the message plus a checksum.
//! The chain-start secrets are derived on the fly from `sk_seed` via
//! PRF, so no WOTS+ key material is ever stored.

use crate::address::{Address, AddressType};
use crate::context::SlhContext;
use crate::params::{MAX_LEN, MAX_N};
use crate::util::base_2b;

/// Algorithm 4: `steps` applications of F starting at chain position
/// `start`.
fn chain(
    ctx: &SlhContext<'_>,
    x: &[u8],
    start: u16,
    steps: u16,
    adrs: &mut Address,
) -> [u8; MAX_N] {
    let n = ctx.n();
    let mut tmp = [0u8; MAX_N];
    tmp[..n].copy_from_slice(x);
    for j in start..start + steps {
        adrs.set_hash(u32::from(j));
        tmp = ctx.f(adrs, &tmp[..n]);
    }
    tmp
}

/// Base-w digits of the message followed by the checksum digits
/// (Algorithm 6 lines 1-7).
fn msg_digits(ctx: &SlhContext<'_>, m: &[u8], digits: &mut [u16]) {
    let prm = ctx.prm();
    let (lg_w, len1, len2) = (prm.lg_w(), prm.wots_len1(), prm.wots_len2());
    let w = 1u16 << lg_w;

    base_2b(m, lg_w, &mut digits[..len1]);

    let mut csum: u32 = digits[..len1].iter().map(|&d| u32::from(w - 1 - d)).sum();
    csum <<= (8 - (len2 * lg_w) % 8) % 8;
    let csum_bytes = csum.to_be_bytes();
    let cb = (len2 * lg_w).div_ceil(8);
    base_2b(&csum_bytes[4 - cb..], lg_w, &mut digits[len1..len1 + len2]);
}

/// Algorithm 6: writes the len·n-byte signature of the n-byte message
/// into `sig`.
pub(crate) fn wots_sign(ctx: &SlhContext<'_>, m: &[u8], adrs: &Address, sig: &mut [u8]) {
    let prm = ctx.prm();
    let (n, len) = (prm.n(), prm.wots_len());
    debug_assert_eq!(sig.len(), len * n);

    let mut digits = [0u16; MAX_LEN];
    msg_digits(ctx, m, &mut digits[..len]);

    let kp = adrs.key_pair();
    let mut sk_adrs = *adrs;
    sk_adrs.set_type_and_clear(AddressType::WotsPrf);
    sk_adrs.set_key_pair(kp);
    let mut adrs = *adrs;

    for (i, chunk) in sig.chunks_exact_mut(n).enumerate() {
        sk_adrs.set_chain(i as u32);
        adrs.set_chain(i as u32);
        let sk = ctx.prf(&sk_adrs);
        let node = chain(ctx, &sk[..n], 0, digits[i], &mut adrs);
        chunk.copy_from_slice(&node[..n]);
    }
}

/// Algorithm 5: the compressed WOTS+ public key for the key pair the
/// address points at.
pub(crate) fn wots_pk_gen(ctx: &SlhContext<'_>, adrs: &Address) -> [u8; MAX_N] {
    let prm = ctx.prm();
    let (n, len) = (prm.n(), prm.wots_len());
    let w = 1u16 << prm.lg_w();

    let kp = adrs.key_pair();
    let mut sk_adrs = *adrs;
    sk_adrs.set_type_and_clear(AddressType::WotsPrf);
    sk_adrs.set_key_pair(kp);
    let mut adrs = *adrs;

    let mut tmp = [0u8; MAX_LEN * MAX_N];
    for i in 0..len {
        sk_adrs.set_chain(i as u32);
        adrs.set_chain(i as u32);
        let sk = ctx.prf(&sk_adrs);
        let node = chain(ctx, &sk[..n], 0, w - 1, &mut adrs);
        tmp[i * n..(i + 1) * n].copy_from_slice(&node[..n]);
    }

    let mut pk_adrs = adrs;
    pk_adrs.set_type_and_clear(AddressType::WotsPk);
    pk_adrs.set_key_pair(kp);
    ctx.t(&pk_adrs, &tmp[..len * n])
}

/// Algorithm 8: completes each chain from the signature and compresses
/// the chain tops into a candidate public key.
pub(crate) fn wots_pk_from_sig(
    ctx: &SlhContext<'_>,
    sig: &[u8],
    m: &[u8],
    adrs: &Address,
) -> [u8; MAX_N] {
    let prm = ctx.prm();
    let (n, len) = (prm.n(), prm.wots_len());
    let w = 1u16 << prm.lg_w();
    debug_assert_eq!(sig.len(), len * n);

    let mut digits = [0u16; MAX_LEN];
    msg_digits(ctx, m, &mut digits[..len]);

    let kp = adrs.key_pair();
    let mut adrs = *adrs;

    let mut tmp = [0u8; MAX_LEN * MAX_N];
    for (i, chunk) in sig.chunks_exact(n).enumerate() {
        adrs.set_chain(i as u32);
        let node = chain(ctx, chunk, digits[i], w - 1 - digits[i], &mut adrs);
        tmp[i * n..(i + 1) * n].copy_from_slice(&node[..n]);
    }

    let mut pk_adrs = adrs;
    pk_adrs.set_type_and_clear(AddressType::WotsPk);
    pk_adrs.set_key_pair(kp);
    ctx.t(&pk_adrs, &tmp[..len * n])
}
