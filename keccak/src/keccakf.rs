//! Keccak-f[1600] permutation.
//!
//! The state is 25 lanes of 64 bits, lane `(x, y)` stored at index `x + 5y`.
//! Byte views of the state are little-endian per lane.

use crate::STATE_BYTES;

/// Number of rounds of Keccak-f[1600].
pub const ROUNDS: usize = 24;

/// Iota round constants.
pub const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Rho rotation offsets, in the order lanes are visited by pi.
pub const ROTATION_OFFSETS: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Pi lane walk starting from lane 1.
pub const PI_LANES: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// Apply the 24-round Keccak-f[1600] permutation to a lane array.
pub fn keccak_f1600(lanes: &mut [u64; 25]) {
    let mut bc = [0u64; 5];

    for &rc in ROUND_CONSTANTS.iter() {
        // Theta
        for i in 0..5 {
            bc[i] = lanes[i] ^ lanes[i + 5] ^ lanes[i + 10] ^ lanes[i + 15] ^ lanes[i + 20];
        }
        for i in 0..5 {
            let t = bc[(i + 4) % 5] ^ bc[(i + 1) % 5].rotate_left(1);
            for j in (0..25).step_by(5) {
                lanes[j + i] ^= t;
            }
        }

        // Rho and pi
        let mut t = lanes[1];
        for (&j, &rot) in PI_LANES.iter().zip(ROTATION_OFFSETS.iter()) {
            let next = lanes[j];
            lanes[j] = t.rotate_left(rot);
            t = next;
        }

        // Chi
        for j in (0..25).step_by(5) {
            bc.copy_from_slice(&lanes[j..j + 5]);
            for i in 0..5 {
                lanes[j + i] ^= !bc[(i + 1) % 5] & bc[(i + 2) % 5];
            }
        }

        // Iota
        lanes[0] ^= rc;
    }
}

/// Apply Keccak-f[1600] to a byte-oriented state.
pub fn permute(state: &mut [u8; STATE_BYTES]) {
    let mut lanes = [0u64; 25];
    for (lane, chunk) in lanes.iter_mut().zip(state.chunks_exact(8)) {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        *lane = u64::from_le_bytes(bytes);
    }

    keccak_f1600(&mut lanes);

    for (lane, chunk) in lanes.iter().zip(state.chunks_exact_mut(8)) {
        chunk.copy_from_slice(&lane.to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_state_first_lanes() {
        // Keccak-f[1600] applied once to the all-zero state.
        let mut lanes = [0u64; 25];
        keccak_f1600(&mut lanes);
        assert_eq!(lanes[0], 0xf1258f7940e1dde7);
        assert_eq!(lanes[1], 0x84d5ccf933c0478a);
        assert_eq!(lanes[2], 0xd598261ea65aa9ee);
    }

    #[test]
    fn test_byte_and_lane_views_agree() {
        let mut state = [0u8; STATE_BYTES];
        state[0] = 0x1f;
        state[135] = 0x80;
        permute(&mut state);

        let mut lanes = [0u64; 25];
        lanes[0] = 0x1f;
        lanes[16] = 0x80 << 56;
        keccak_f1600(&mut lanes);

        for (i, lane) in lanes.iter().enumerate() {
            assert_eq!(&state[i * 8..i * 8 + 8], &lane.to_le_bytes());
        }
    }

    #[test]
    fn test_permutation_is_not_identity() {
        let mut state = [0u8; STATE_BYTES];
        permute(&mut state);
        assert_ne!(state, [0u8; STATE_BYTES]);
    }
}
