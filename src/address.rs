//! Hash address definitions and serialization
//!
//! From FIPS-205 section 4.2:
//! > An ADRS consists of public values that indicate the position of
//! > the value being computed by the function. A different ADRS value
//! > is used for each call to each function. In the case of PRF, this
//! > is in order to generate a large number of different secret values
//! > from a single seed. In the case of Tℓ, H, and F, it is used to
//! > mitigate multi-target attacks.
//!
//! The address is a 32-byte buffer of big-endian words. The first
//! twenty bytes (layer, tree index, type) are stable across a
//! substructure; `set_type_and_clear` zeroes the final twelve bytes on
//! every type switch, so no field of one type can alias a field of
//! another. Note that the upper four bytes of the 12-byte tree index
//! are unused by all parameter sets currently defined by FIPS-205.

/// Address type constants from FIPS-205 section 4.2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub(crate) enum AddressType {
    /// Hashing within a WOTS+ chain.
    WotsHash = 0,
    /// Compression of a WOTS+ public key.
    WotsPk = 1,
    /// A hash-tree (XMSS) node.
    Tree = 2,
    /// A FORS tree node.
    ForsTree = 3,
    /// Compression of the FORS tree roots.
    ForsRoots = 4,
    /// Derivation of a WOTS+ chain-start secret.
    WotsPrf = 5,
    /// Derivation of a FORS leaf secret.
    ForsPrf = 6,
}

/// A hash address as defined by FIPS-205 section 4.2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Address([u8; 32]);

impl Address {
    pub fn new() -> Self {
        Address([0u8; 32])
    }

    fn set_word(&mut self, word: usize, value: u32) {
        self.0[4 * word..4 * word + 4].copy_from_slice(&value.to_be_bytes());
    }

    fn word(&self, word: usize) -> u32 {
        u32::from_be_bytes(self.0[4 * word..4 * word + 4].try_into().expect("4 bytes"))
    }

    /// Hypertree layer (word 0).
    pub fn set_layer(&mut self, layer: u32) {
        self.set_word(0, layer);
    }

    /// Tree index within a layer (bytes 4..16; the upper four bytes
    /// stay zero since no parameter set exceeds 2^64 trees).
    pub fn set_tree(&mut self, tree: u64) {
        self.set_word(1, 0);
        self.0[8..16].copy_from_slice(&tree.to_be_bytes());
    }

    /// Switch the address type, zeroing all type-specific fields.
    pub fn set_type_and_clear(&mut self, kind: AddressType) {
        self.set_word(4, kind as u32);
        self.0[20..32].fill(0);
    }

    /// WOTS+ / FORS key pair index (word 5).
    pub fn set_key_pair(&mut self, idx: u32) {
        self.set_word(5, idx);
    }

    pub fn key_pair(&self) -> u32 {
        self.word(5)
    }

    /// WOTS+ chain index (word 6).
    pub fn set_chain(&mut self, idx: u32) {
        self.set_word(6, idx);
    }

    /// Position within a WOTS+ chain (word 7).
    pub fn set_hash(&mut self, idx: u32) {
        self.set_word(7, idx);
    }

    /// Node height within a hash tree (word 6).
    pub fn set_tree_height(&mut self, height: u32) {
        self.set_word(6, height);
    }

    /// Node index within a hash tree (word 7).
    pub fn set_tree_index(&mut self, idx: u32) {
        self.set_word(7, idx);
    }

    /// The full 32-byte encoding, used as the tweak by the SHAKE family.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// The compressed 22-byte encoding used by the SHA2 family:
    /// `ADRSc = ADRS[3] ∥ ADRS[8:16] ∥ ADRS[19] ∥ ADRS[20:32]`.
    pub fn compressed(&self) -> [u8; 22] {
        let mut c = [0u8; 22];
        c[0] = self.0[3];
        c[1..9].copy_from_slice(&self.0[8..16]);
        c[9] = self.0[19];
        c[10..22].copy_from_slice(&self.0[20..32]);
        c
    }
}
