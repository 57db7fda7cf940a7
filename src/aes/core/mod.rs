//! Core AES-128 implementation for encryption of a single 16 byte state. Exports encrypt_state and gmul.

pub mod constants;
pub(crate) mod util;
mod encryption;

pub use encryption::encrypt_state;
pub use util::gmul;
