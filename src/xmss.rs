//! XMSS fixed-height Merkle trees over WOTS+ leaves (FIPS-205
//! section 6).
//!
//! Each hypertree layer is an XMSS tree of height h'. A leaf is the
//! compressed public key of one WOTS+ key pair; an XMSS signature is
//! that leaf's WOTS+ signature followed by the authentication path to
//! the root.

use crate::address::{Address, AddressType};
use crate::context::SlhContext;
use crate::params::MAX_N;
use crate::wots;

/// Algorithm 9: node `i` at height `z` of the tree the address points
/// at. The whole subtree below the node is recomputed, so `z = h'`
/// yields the root at the cost of the full tree.
pub(crate) fn xmss_node(ctx: &SlhContext<'_>, i: u32, z: u32, adrs: &Address) -> [u8; MAX_N] {
    let n = ctx.n();
    let mut adrs = *adrs;
    if z == 0 {
        adrs.set_type_and_clear(AddressType::WotsHash);
        adrs.set_key_pair(i);
        wots::wots_pk_gen(ctx, &adrs)
    } else {
        let lnode = xmss_node(ctx, 2 * i, z - 1, &adrs);
        let rnode = xmss_node(ctx, 2 * i + 1, z - 1, &adrs);
        adrs.set_type_and_clear(AddressType::Tree);
        adrs.set_tree_height(z);
        adrs.set_tree_index(i);
        ctx.h(&adrs, &lnode[..n], &rnode[..n])
    }
}

/// Algorithm 10: writes the (len + h')·n-byte XMSS signature of the
/// n-byte message under leaf `idx_leaf` into `sig`.
pub(crate) fn xmss_sign(
    ctx: &SlhContext<'_>,
    m: &[u8],
    idx_leaf: u32,
    adrs: &Address,
    sig: &mut [u8],
) {
    let prm = ctx.prm();
    let (n, hp) = (prm.n(), prm.hp());
    let wots_bytes = prm.wots_len() * n;
    debug_assert_eq!(sig.len(), prm.xmss_sig_len());

    let (wots_sig, auth) = sig.split_at_mut(wots_bytes);
    for (j, chunk) in auth.chunks_exact_mut(n).enumerate() {
        let sibling = (idx_leaf >> j) ^ 1;
        let node = xmss_node(ctx, sibling, j as u32, adrs);
        chunk.copy_from_slice(&node[..n]);
    }
    debug_assert_eq!(auth.len(), hp * n);

    let mut adrs = *adrs;
    adrs.set_type_and_clear(AddressType::WotsHash);
    adrs.set_key_pair(idx_leaf);
    wots::wots_sign(ctx, m, &adrs, wots_sig);
}

/// Algorithm 11: recomputes the tree root a signature commits to.
pub(crate) fn xmss_pk_from_sig(
    ctx: &SlhContext<'_>,
    idx_leaf: u32,
    sig: &[u8],
    m: &[u8],
    adrs: &Address,
) -> [u8; MAX_N] {
    let prm = ctx.prm();
    let n = prm.n();
    debug_assert_eq!(sig.len(), prm.xmss_sig_len());
    let (wots_sig, auth) = sig.split_at(prm.wots_len() * n);

    let mut adrs = *adrs;
    adrs.set_type_and_clear(AddressType::WotsHash);
    adrs.set_key_pair(idx_leaf);
    let mut node = wots::wots_pk_from_sig(ctx, wots_sig, m, &adrs);

    adrs.set_type_and_clear(AddressType::Tree);
    let mut idx = idx_leaf;
    for (k, sibling) in auth.chunks_exact(n).enumerate() {
        adrs.set_tree_height(k as u32 + 1);
        let odd = idx & 1 == 1;
        idx >>= 1;
        adrs.set_tree_index(idx);
        node = if odd {
            ctx.h(&adrs, sibling, &node[..n])
        } else {
            ctx.h(&adrs, &node[..n], sibling)
        };
    }
    node
}
