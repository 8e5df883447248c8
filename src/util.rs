use crate::params::ParameterSet;

/// Algorithm 3: interpret a byte string as `out.len()` base-2^b digits.
pub(crate) fn base_2b(x: &[u8], b: usize, out: &mut [u16]) {
    debug_assert!(x.len() >= (out.len() * b).div_ceil(8));
    debug_assert!(b <= 16);

    let mut bits = 0usize;
    let mut i = 0usize;
    let mut total = 0usize;

    for digit in out.iter_mut() {
        while bits < b {
            total = (total << 8) + x[i] as usize;
            bits += 8;
            i += 1;
        }
        bits -= b;
        *digit = ((total >> bits) & ((1 << b) - 1)) as u16;
        // Clear the consumed component to prevent usize overflow
        total &= (1 << bits) - 1;
    }
}

/// Separates the message digest into the FORS message, the hypertree
/// tree index, and the leaf index within that tree.
pub(crate) fn split_digest<'a>(prm: &ParameterSet, digest: &'a [u8]) -> (&'a [u8], u64, u32) {
    debug_assert_eq!(digest.len(), prm.m());

    let md = &digest[..prm.md_len()];
    let tree_sz = prm.tree_idx_len();
    let leaf_sz = prm.leaf_idx_len();

    let mut tree_bytes = [0u8; 8];
    let mut leaf_bytes = [0u8; 4];
    tree_bytes[8 - tree_sz..].copy_from_slice(&digest[prm.md_len()..prm.md_len() + tree_sz]);
    leaf_bytes[4 - leaf_sz..]
        .copy_from_slice(&digest[prm.md_len() + tree_sz..prm.md_len() + tree_sz + leaf_sz]);

    // For the 256-bit parameter sets h - h' = 64, so the shift saturates
    let tree_bits = (prm.h() - prm.hp()) as u32;
    let tree_mask = 1u64.checked_shl(tree_bits).unwrap_or(0).wrapping_sub(1);
    let idx_tree = u64::from_be_bytes(tree_bytes) & tree_mask;
    let idx_leaf = u32::from_be_bytes(leaf_bytes) & ((1 << prm.hp()) - 1);
    (md, idx_tree, idx_leaf)
}
