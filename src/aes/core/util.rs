// used by the key schedule and every round of encryption
#[inline(always)]
pub(crate) fn add_round_key(state: &mut [u8; 16], round_key: &[u8; 16]) {
    for i in 0..16 {
        state[i] ^= round_key[i];
    }
}

#[inline(always)]
pub(crate) fn xor_words(a: &[u8; 4], b: &[u8; 4]) -> [u8; 4] {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}

// adapted from https://crypto.stackexchange.com/a/71206
/// Multiply by x (i.e. {02}) in GF(2^8), reducing by x^8 + x^4 + x^3 + x + 1.
#[inline(always)]
pub(crate) fn dbl(a: u8) -> u8 {
    (a << 1) ^ (0x1B & (0u8).wrapping_sub((a >> 7) & 1))
}

/// Multiplication in GF(2^8) modulo the AES polynomial `x^8 + x^4 + x^3 + x + 1` (0x11B).
///
/// Shift-and-add: for each of the 8 bits of `b` (low to high), the running
/// product picks up `a` when the bit is set, then `a` is doubled with reduction.
/// ```
/// use aes128::gmul;
///
/// assert_eq!(gmul(0x57, 0x83), 0xc1); // FIPS-197 section 4.2
/// assert_eq!(gmul(0x57, 0x13), 0xfe); // FIPS-197 section 4.2.1
/// ```
#[inline(always)]
pub fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut p = 0u8;
    for _ in 0..8 {
        if b & 1 == 1 {
            p ^= a;
        }
        a = dbl(a);
        b >>= 1;
    }
    p
}
