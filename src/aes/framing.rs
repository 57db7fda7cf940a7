//! Maps a flat byte stream onto 4x4 AES states and back.
//!
//! A state is stored as a flat `[u8; 16]` in column-major order, so the byte at
//! `(row, col)` lives at [`idx`]`(row, col) = col * 4 + row`. Input bytes are
//! placed into a state with the FIPS-197 input mapping `s[r, c] = in[r + 4c]`,
//! and read back out with the inverse `out[r + 4c] = s[r, c]`.

use crate::aes::core::constants::{BLOCK_LEN, NB};

/// One 16-byte block arranged as a column-major 4x4 matrix.
pub type State = [u8; BLOCK_LEN];

/// Position of `(row, col)` within a column-major [State].
#[inline(always)]
pub const fn idx(row: usize, col: usize) -> usize {
    col * 4 + row
}

/// Number of bytes `n` bytes of input occupy once zero padded to whole blocks.
#[inline]
pub const fn padded_len(n: usize) -> usize {
    n.div_ceil(BLOCK_LEN) * BLOCK_LEN
}

/// Loads one 16-byte chunk of input into a state.
#[inline(always)]
pub fn load_state(chunk: &[u8; BLOCK_LEN]) -> State {
    let mut state = [0u8; BLOCK_LEN];
    for col in 0..NB {
        for row in 0..4 {
            state[idx(row, col)] = chunk[row + 4 * col];
        }
    }
    state
}

/// Writes a state back out as 16 bytes of output.
#[inline(always)]
pub fn store_state(state: &State) -> [u8; BLOCK_LEN] {
    let mut out = [0u8; BLOCK_LEN];
    for col in 0..NB {
        for row in 0..4 {
            out[row + 4 * col] = state[idx(row, col)];
        }
    }
    out
}

/// Zero pads `input` on the right to a multiple of 16 bytes and splits it into states.
/// Empty input yields no states.
pub fn frame(input: &[u8]) -> Vec<State> {
    let mut states = Vec::with_capacity(padded_len(input.len()) / BLOCK_LEN);

    let mut chunks = input.chunks_exact(BLOCK_LEN);
    for c in &mut chunks {
        // safe unwrap, chunks_exact guarantees 16 bytes
        states.push(load_state(c.try_into().unwrap()));
    }

    let r = chunks.remainder(); // len = rem (0..15)
    if !r.is_empty() {
        let mut last = [0u8; BLOCK_LEN];
        last[..r.len()].copy_from_slice(r);
        states.push(load_state(&last));
    }

    states
}

/// Concatenates states back into a flat byte stream, in block order.
/// Padding added by [frame] is kept.
pub fn unframe(states: &[State]) -> Vec<u8> {
    let mut out = Vec::with_capacity(states.len() * BLOCK_LEN);
    for state in states {
        out.extend_from_slice(&store_state(state));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idx_is_column_major() {
        assert_eq!(idx(0, 0), 0);
        assert_eq!(idx(1, 0), 1);
        assert_eq!(idx(0, 1), 4);
        assert_eq!(idx(3, 3), 15);
        assert_eq!(idx(2, 1), 6);
    }

    #[test]
    fn frame_pads_with_zeros() {
        let input: Vec<u8> = (1..=20).collect();
        let states = frame(&input);

        assert_eq!(states.len(), 2);
        // second block holds bytes 17..=20 then zeros
        let tail = store_state(&states[1]);
        assert_eq!(&tail[..4], &[17, 18, 19, 20]);
        assert!(tail[4..].iter().all(|&b| b == 0), "padding must be zero bytes");
    }

    #[test]
    fn frame_places_bytes_by_column() {
        let input: [u8; 16] = std::array::from_fn(|i| i as u8);
        let state = frame(&input)[0];

        // in[r + 4c] lands at (row r, col c)
        for col in 0..4 {
            for row in 0..4 {
                assert_eq!(state[idx(row, col)], (row + 4 * col) as u8);
            }
        }
    }

    #[test]
    fn frame_empty_input() {
        assert!(frame(&[]).is_empty());
        assert!(unframe(&[]).is_empty());
    }

    #[test]
    fn unframe_recovers_padded_input() {
        for len in [1usize, 15, 16, 17, 31, 32, 33, 100] {
            let input: Vec<u8> = (0..len).map(|i| (i * 7 + 3) as u8).collect();
            let out = unframe(&frame(&input));

            assert_eq!(out.len(), padded_len(len), "wrong padded length for {len} bytes");
            assert_eq!(&out[..len], &input[..]);
            assert!(out[len..].iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn padded_len_rounds_up() {
        assert_eq!(padded_len(0), 0);
        assert_eq!(padded_len(1), 16);
        assert_eq!(padded_len(16), 16);
        assert_eq!(padded_len(17), 32);
    }
}
