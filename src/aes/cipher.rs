use rayon::prelude::*;

use crate::aes::core::constants::BLOCK_LEN;
use crate::aes::core::encrypt_state;
use crate::aes::error::{Error, Result};
use crate::aes::framing::{State, frame, load_state, store_state, unframe};
use crate::aes::key::Key;
use crate::aes::schedule::ExpandedKey;

pub const PARALLEL_THRESHOLD: usize = 4 * 1024; // encrypt in parallel if input size ge 4 KiB

/// AES-128 block encryption. Instantiated with a [Key], which is expanded into round keys
/// and stored in the instance. The schedule is never modified afterwards, so a `Cipher`
/// can be shared freely between threads.
///
/// Blocks are encrypted independently with no chaining between them (raw block cipher
/// output). **Identical plaintext blocks produce identical ciphertext blocks.**
///
/// ## Examples
/// ```
/// # fn main() -> aes128::Result<()> {
/// use aes128::{Cipher, Key};
///
/// let key = Key::rand_key()?;
/// let cipher = Cipher::new(&key);
///
/// // 13 bytes are zero padded to one 16-byte block
/// let ciphertext = cipher.encrypt(b"Hello, World!");
/// assert_eq!(ciphertext.len(), 16);
/// # Ok(())
/// # }
/// ```
pub struct Cipher {
    keys: ExpandedKey,
}

impl Cipher {
    /// Generates round keys from provided key and stores in the returned instance.
    pub fn new(key: &Key) -> Self {
        Self {
            keys: ExpandedKey::new(key),
        }
    }

    /// Getter for the internal key schedule.
    pub fn expanded_key(&self) -> &ExpandedKey {
        &self.keys
    }

    /// Getter for internal round keys. Returned as a slice of 16-byte arrays.
    pub fn get_round_keys(&self) -> &[[u8; 16]] {
        self.keys.round_keys()
    }

    /// Encrypts one 16-byte block.
    pub fn encrypt_block(&self, block: &[u8; BLOCK_LEN]) -> [u8; BLOCK_LEN] {
        store_state(&encrypt_state(load_state(block), &self.keys))
    }

    /// Encrypts a sequence of states, returning them in the same order.
    ///
    /// Inputs of at least [PARALLEL_THRESHOLD] bytes are spread across the rayon
    /// thread pool, anything smaller is encrypted on the calling thread.
    pub fn encrypt_states(&self, mut states: Vec<State>) -> Vec<State> {
        if states.len() * BLOCK_LEN >= PARALLEL_THRESHOLD {
            states
                .par_iter_mut()
                .for_each(|state| *state = encrypt_state(*state, &self.keys));
        } else {
            for state in states.iter_mut() {
                *state = encrypt_state(*state, &self.keys);
            }
        }
        states
    }

    /// Encrypts arbitrary-length plaintext. The final block is zero padded, so the output
    /// is `ceil(len / 16) * 16` bytes long. Padding is not removed by any part of this crate.
    pub fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        unframe(&self.encrypt_states(frame(plaintext)))
    }
}

/// Encrypts a single 16-byte block with a 176-byte expanded key (see [expand_key](crate::expand_key)).
///
/// Returns:
/// - [InvalidBlockLength](crate::Error::InvalidBlockLength) if `block` is not 16 bytes.
/// - [InvalidKeyScheduleLength](crate::Error::InvalidKeyScheduleLength) if `expanded_key` is not 176 bytes.
pub fn encrypt_block(block: &[u8], expanded_key: &[u8]) -> Result<[u8; BLOCK_LEN]> {
    let block: &[u8; BLOCK_LEN] = block
        .try_into()
        .map_err(|_| Error::InvalidBlockLength { len: block.len() })?;
    let keys = ExpandedKey::try_from(expanded_key)?;

    Ok(store_state(&encrypt_state(load_state(block), &keys)))
}

/// Encrypts arbitrary-length plaintext with a raw 16-byte key. Zero pads the final block.
///
/// ```
/// # fn main() -> aes128::Result<()> {
/// let key = [0u8; 16];
/// let ciphertext = aes128::encrypt(&[0u8; 20], &key)?;
/// assert_eq!(ciphertext.len(), 32);
///
/// assert!(aes128::encrypt(b"data", &key[..8]).is_err());
/// # Ok(())
/// # }
/// ```
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let key = Key::try_from_slice(key)?;
    Ok(Cipher::new(&key).encrypt(plaintext))
}
