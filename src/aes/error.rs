use thiserror::Error;
use rand::rand_core;

/// AES Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// AES Error type. All variants except [Rng](Error::Rng) are input-validation
/// errors, raised before any byte of the input is transformed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to use a cipher key that is not exactly 128 bits.
    #[error("invalid key length: {len} bytes (expected 16)")]
    InvalidKeyLength { len: usize },

    /// Attempted to encrypt a single block that is not exactly 16 bytes.
    #[error("invalid block length: {len} bytes (expected 16)")]
    InvalidBlockLength { len: usize },

    /// Provided an expanded key that is not 11 round keys of 16 bytes.
    #[error("invalid key schedule length: {len} bytes (expected 176)")]
    InvalidKeyScheduleLength { len: usize },

    /// OS RNG failed during random key generation.
    #[error("OS RNG failed in random key generation")]
    Rng(#[from] rand_core::OsError),
}
