//! The Keccak-f\[1600\] permutation.
//!
//! The state is an array of 25 little-endian 64-bit lanes, logically a 5x5
//! grid indexed as `lane[x + 5 * y]`. Each of the 24 rounds applies the five
//! step mappings theta, rho, pi, chi and iota in that order. The rotation
//! offsets and round constants below are the standardized tables; changing a
//! single bit yields a different, incompatible hash function.

/// Number of 64-bit lanes in the state.
pub const LANES: usize = 25;

/// State width in bits.
pub const WIDTH: usize = 1600;

const ROUNDS: usize = 24;

/// Round constants XORed into lane (0, 0) by the iota step.
const ROUND_CONSTANTS: [u64; ROUNDS] = [
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

/// Per-lane rotation offsets for the rho step, in the order the combined
/// rho-pi walk below visits the lanes.
const RHO: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Lane-index walk implementing the pi rearrangement.
const PI: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// Apply the full 24-round Keccak-f\[1600\] permutation in place.
///
/// Pure and allocation-free; this is where nearly all hashing time is spent.
pub fn keccak_f1600(lanes: &mut [u64; LANES]) {
    for &rc in &ROUND_CONSTANTS {
        let mut parity = [0u64; 5];

        // theta: XOR each lane with the parities of two nearby columns
        for x in 0..5 {
            parity[x] = lanes[x] ^ lanes[x + 5] ^ lanes[x + 10] ^ lanes[x + 15] ^ lanes[x + 20];
        }
        for x in 0..5 {
            let d = parity[(x + 4) % 5] ^ parity[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                lanes[x + 5 * y] ^= d;
            }
        }

        // rho and pi: rotate each lane and move it to its new position
        let mut carry = lanes[1];
        for (&target, &offset) in PI.iter().zip(&RHO) {
            let tmp = lanes[target];
            lanes[target] = carry.rotate_left(offset);
            carry = tmp;
        }

        // chi: nonlinear row-wise combination
        for y in 0..5 {
            let row = [
                lanes[5 * y],
                lanes[5 * y + 1],
                lanes[5 * y + 2],
                lanes[5 * y + 3],
                lanes[5 * y + 4],
            ];
            for x in 0..5 {
                lanes[x + 5 * y] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
            }
        }

        // iota
        lanes[0] ^= rc;
    }
}
