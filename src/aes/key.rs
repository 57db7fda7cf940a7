//! Defines the [`Key`] struct, which holds a valid 128-bit AES key.
//! Keys can be randomly generated or constructed from an existing byte slice.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::aes::core::constants::KEY_LEN;
use crate::aes::error::{Error, Result};

/// Contains a valid AES-128 key. Can be instantiated with a random key, or built from a
/// slice of exactly 16 bytes.
/// A `Key` object is required to instantiate a [Cipher](crate::Cipher).
///
/// ## Examples
/// ```
/// # fn main() -> aes128::Result<()> {
/// use aes128::Key;
///
/// // Instantiate a random key:
/// let rk = Key::rand_key()?;
/// assert_eq!(rk.as_bytes().len(), 16);
///
/// // Instantiate a key from a slice:
/// let key_bytes: [u8; 16] = [0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6,
///                            0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c];
/// let my_key = Key::try_from_slice(&key_bytes)?;
/// assert_eq!(my_key.as_bytes(), &key_bytes);
///
/// // Anything other than 16 bytes returns an InvalidKeyLength error:
/// assert!(Key::try_from_slice(&key_bytes[..15]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Key {
    bytes: [u8; KEY_LEN],
}

impl Key {
    /// Generate a random 128-bit key. Returns Error if OsRng fails.
    pub fn rand_key() -> Result<Self> {
        let mut k = [0u8; KEY_LEN];
        OsRng.try_fill_bytes(&mut k)?;
        Ok(Self { bytes: k })
    }

    /// Attempts to build a key from a slice of bytes. Will return an InvalidKeyLength error
    /// if the input slice is anything other than 16 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; KEY_LEN] = bytes
            .try_into()
            .map_err(|_| Error::InvalidKeyLength { len: bytes.len() })?;
        Ok(Self { bytes })
    }

    /// Returns a reference to the internal key as an array of bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

impl From<[u8; KEY_LEN]> for Key {
    fn from(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }
}

/// Generates a random 16-byte key as raw bytes.
pub fn random_key() -> Result<Vec<u8>> {
    Ok(Key::rand_key()?.as_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_lengths() {
        let bytes = [0u8; 33];
        for len in [0, 1, 15, 17, 24, 32, 33] {
            match Key::try_from_slice(&bytes[..len]) {
                Err(Error::InvalidKeyLength { len: l }) => assert_eq!(l, len),
                other => panic!("expected InvalidKeyLength for {len} bytes, got {other:?}"),
            }
        }
    }

    #[test]
    fn accepts_16_bytes() -> Result<()> {
        let bytes: [u8; 16] = std::array::from_fn(|i| i as u8);
        let key = Key::try_from_slice(&bytes)?;
        assert_eq!(key.as_bytes(), &bytes);
        assert_eq!(key, Key::from(bytes));
        Ok(())
    }

    #[test]
    fn random_keys_differ() -> Result<()> {
        let a = Key::rand_key()?;
        let b = Key::rand_key()?;
        assert_ne!(a, b, "two random 128-bit keys should not collide");
        assert_eq!(random_key()?.len(), 16);
        Ok(())
    }
}
