//! AES-128 block encryption (FIPS-197), forward direction only.
//!
//! The three entry points are [expand_key], [encrypt_block] and [encrypt]. [Cipher] keeps an
//! expanded key around for repeated use. No mode of operation is applied: blocks are encrypted
//! independently and the final block is zero padded.

mod aes;

pub use aes::{
    BLOCK_LEN, Cipher, EXPANDED_KEY_LEN, Error, ExpandedKey, KEY_LEN, Key, NB, NK, NR,
    PARALLEL_THRESHOLD, Result, State, encrypt, encrypt_block, expand_key, frame, gmul,
    padded_len, random_key, unframe,
};
