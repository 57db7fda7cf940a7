//! AES-128 key schedule. Expands a 16-byte [`Key`] into the 11 round keys used by
//! the cipher, stored as an [`ExpandedKey`].

use crate::aes::core::constants::{BLOCK_LEN, EXPANDED_KEY_LEN, NB, NK, NR, RCON, SBOX};
use crate::aes::core::util::xor_words;
use crate::aes::error::{Error, Result};
use crate::aes::key::Key;

/// The full AES-128 key schedule: `Nr + 1` round keys of 16 bytes each (176 bytes).
///
/// Round key `r` is words `w[4r..4r+3]` of the schedule, laid out column-major
/// (word `c` of the round key occupies bytes `4c..4c+3`), which is the same
/// layout as the state it is XOR'd into.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ExpandedKey {
    round_keys: [[u8; BLOCK_LEN]; NR + 1],
}

impl ExpandedKey {
    /// Runs the key schedule on a validated key.
    pub fn new(key: &Key) -> Self {
        Self {
            round_keys: expand(key.as_bytes()),
        }
    }

    /// Round key for round `round` (0 is the initial whitening key, 10 the final round).
    ///
    /// Panics if `round > 10`.
    pub fn round_key(&self, round: usize) -> &[u8; BLOCK_LEN] {
        &self.round_keys[round]
    }

    /// All round keys in round order.
    pub fn round_keys(&self) -> &[[u8; BLOCK_LEN]] {
        &self.round_keys
    }

    /// The schedule as one flat 176-byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        self.round_keys.as_flattened()
    }
}

impl TryFrom<&[u8]> for ExpandedKey {
    type Error = Error;

    /// Rebuilds a schedule from its flat 176-byte form, e.g. the output of
    /// [`ExpandedKey::as_bytes`].
    fn try_from(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != EXPANDED_KEY_LEN {
            return Err(Error::InvalidKeyScheduleLength { len: bytes.len() });
        }

        let mut round_keys = [[0u8; BLOCK_LEN]; NR + 1];
        for (rk, chunk) in round_keys.iter_mut().zip(bytes.chunks_exact(BLOCK_LEN)) {
            rk.copy_from_slice(chunk);
        }
        Ok(Self { round_keys })
    }
}

/// Expands a raw 16-byte key. Returns an InvalidKeyLength error for any other length.
///
/// ```
/// # fn main() -> aes128::Result<()> {
/// let key = [0u8; 16];
/// let schedule = aes128::expand_key(&key)?;
/// assert_eq!(schedule.as_bytes().len(), 176);
/// assert_eq!(&schedule.as_bytes()[..16], &key);
/// # Ok(())
/// # }
/// ```
pub fn expand_key(key: &[u8]) -> Result<ExpandedKey> {
    let key = Key::try_from_slice(key)?;
    Ok(ExpandedKey::new(&key))
}

/// Cyclic left rotation of a word by one byte: `[a0, a1, a2, a3] -> [a1, a2, a3, a0]`.
#[inline(always)]
fn rot_word(w: [u8; 4]) -> [u8; 4] {
    [w[1], w[2], w[3], w[0]]
}

/// Applies the S-box to each byte of a word.
#[inline(always)]
fn sub_word(w: [u8; 4]) -> [u8; 4] {
    w.map(|b| SBOX[b as usize])
}

fn expand(key: &[u8; NK * 4]) -> [[u8; BLOCK_LEN]; NR + 1] {
    // Variable names match FIPS-197, NIST specification: https://doi.org/10.6028/NIST.FIPS.197-upd1
    // w    The result of the key schedule, an array of words that form round keys
    // Nw   The total number of words generated by the key schedule (including initial key)
    const NW: usize = NB * (NR + 1);
    let mut w = [[0u8; 4]; NW];

    // first nk words of w are filled with the initial key
    for (i, word) in key.chunks_exact(4).enumerate() {
        w[i].copy_from_slice(word);
    }

    for i in NK..NW {
        let mut temp = w[i - 1];
        if i % NK == 0 {
            temp = sub_word(rot_word(temp));
            temp[0] ^= RCON[i / NK];
        }
        // w[i] = w[i − Nk] ⊕ temp
        w[i] = xor_words(&w[i - NK], &temp);
    }

    // group words into round keys, word c of a round key is column c
    let mut round_keys = [[0u8; BLOCK_LEN]; NR + 1];
    for (round, rk) in round_keys.iter_mut().enumerate() {
        for col in 0..NB {
            rk[col * 4..col * 4 + 4].copy_from_slice(&w[round * NB + col]);
        }
    }

    round_keys
}
