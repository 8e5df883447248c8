//! The d-layer hypertree (FIPS-205 section 7).
//!
//! Layer 0 trees sign FORS public keys; each higher layer signs the
//! root of the tree below it. The top-layer root is `pk_root`.

use crate::address::Address;
use crate::context::SlhContext;
use crate::xmss;

/// Algorithm 12: writes the d·(len + h')·n-byte hypertree signature of
/// the n-byte message into `sig`.
pub(crate) fn ht_sign(
    ctx: &SlhContext<'_>,
    m: &[u8],
    mut idx_tree: u64,
    mut idx_leaf: u32,
    sig: &mut [u8],
) {
    let prm = ctx.prm();
    let (n, hp, d) = (prm.n(), prm.hp(), prm.d());
    let xmss_bytes = prm.xmss_sig_len();
    debug_assert_eq!(sig.len(), d * xmss_bytes);

    let mut adrs = Address::new();
    adrs.set_tree(idx_tree);

    let mut layers = sig.chunks_exact_mut(xmss_bytes);
    let first = layers.next().expect("d >= 1");
    xmss::xmss_sign(ctx, m, idx_leaf, &adrs, first);
    let mut root = xmss::xmss_pk_from_sig(ctx, idx_leaf, first, m, &adrs);

    for (j, layer_sig) in layers.enumerate() {
        idx_leaf = (idx_tree & ((1 << hp) - 1)) as u32;
        idx_tree >>= hp;

        adrs.set_layer(j as u32 + 1);
        adrs.set_tree(idx_tree);

        xmss::xmss_sign(ctx, &root[..n], idx_leaf, &adrs, layer_sig);
        if j + 2 < d {
            let prev = root;
            root = xmss::xmss_pk_from_sig(ctx, idx_leaf, layer_sig, &prev[..n], &adrs);
        }
    }
}

/// Algorithm 13: walks the layers bottom-up and compares the final
/// root against the context's `pk_root`.
pub(crate) fn ht_verify(
    ctx: &SlhContext<'_>,
    m: &[u8],
    sig: &[u8],
    mut idx_tree: u64,
    mut idx_leaf: u32,
) -> bool {
    let prm = ctx.prm();
    let (n, hp) = (prm.n(), prm.hp());
    let xmss_bytes = prm.xmss_sig_len();
    debug_assert_eq!(sig.len(), prm.d() * xmss_bytes);

    let mut adrs = Address::new();
    adrs.set_tree(idx_tree);

    let mut layers = sig.chunks_exact(xmss_bytes);
    let first = layers.next().expect("d >= 1");
    let mut root = xmss::xmss_pk_from_sig(ctx, idx_leaf, first, m, &adrs);

    for (j, layer_sig) in layers.enumerate() {
        idx_leaf = (idx_tree & ((1 << hp) - 1)) as u32;
        idx_tree >>= hp;

        adrs.set_layer(j as u32 + 1);
        adrs.set_tree(idx_tree);

        let prev = root;
        root = xmss::xmss_pk_from_sig(ctx, idx_leaf, layer_sig, &prev[..n], &adrs);
    }
    root[..n] == *ctx.pk_root()
}
