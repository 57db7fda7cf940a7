mod cipher;
mod core;
mod error;
mod framing;
mod key;
mod schedule;

pub use cipher::{Cipher, PARALLEL_THRESHOLD, encrypt, encrypt_block};
pub use self::core::constants::{BLOCK_LEN, EXPANDED_KEY_LEN, KEY_LEN, NB, NK, NR};
pub use self::core::gmul;
pub use error::{Error, Result};
pub use framing::{State, frame, padded_len, unframe};
pub use key::{Key, random_key};
pub use schedule::{ExpandedKey, expand_key};
