use super::constants::{NR, SBOX};
use super::util::{add_round_key, gmul};
use crate::aes::framing::{State, idx};
use crate::aes::schedule::ExpandedKey;

/// Core AES encryption function. Encrypts one state using the provided key schedule.
///
/// The state is moved through the rounds and handed back, never aliased:
/// initial round key, `Nr - 1` full rounds, then a final round without MixColumns.
#[inline(always)]
pub fn encrypt_state(mut state: State, keys: &ExpandedKey) -> State {
    // add first round key to state
    add_round_key(&mut state, keys.round_key(0));

    // perform all rounds except for the last
    for round in 1..NR {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, keys.round_key(round));
    }

    // last round skips mixcolumns step
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, keys.round_key(NR));

    state
}

/// SubBytes step. Each byte is substituted using the SBOX.
#[inline(always)]
pub(crate) fn sub_bytes(state: &mut State) {
    for byte in state {
        *byte = SBOX[*byte as usize];
    }
}

/// ShiftRows step.
/// The 0th row does not change.
/// The first row shifts left by one position.
/// The second row shifts left by two positions.
/// The third row shifts left by three positions.
/// [
///     00 04 08 12   ---->   00 04 08 12
///     01 05 09 13   ---->   05 09 13 01
///     02 06 10 14   ---->   10 14 02 06
///     03 07 11 15   ---->   15 03 07 11
/// ]
#[inline(always)]
pub(crate) fn shift_rows(state: &mut State) {
    let s = *state;
    for row in 0..4 {
        for col in 0..4 {
            state[idx(row, col)] = s[idx(row, (col + row) & 3)];
        }
    }
}

/// MixColumns step. Each column is multiplied by a constant matrix using Galois field multiplication.
/// [ d0 ]      [ 2  3  1  1 ]  [ b0 ]
/// | d1 |  =   | 1  2  3  1 |  | b1 |
/// | d2 |      | 1  1  2  3 |  | b2 |
/// [ d3 ]      [ 3  1  1  2 ]  [ b3 ]
#[inline(always)]
pub(crate) fn mix_columns(state: &mut State) {
    for col in 0..4 {
        let i = idx(0, col);
        // snapshot the column before overwriting it
        let (a, b, c, d) = (state[i], state[i + 1], state[i + 2], state[i + 3]);
        state[i] = gmul(a, 2) ^ gmul(b, 3) ^ c ^ d;
        state[i + 1] = a ^ gmul(b, 2) ^ gmul(c, 3) ^ d;
        state[i + 2] = a ^ b ^ gmul(c, 2) ^ gmul(d, 3);
        state[i + 3] = gmul(a, 3) ^ b ^ c ^ gmul(d, 2);
    }
}
