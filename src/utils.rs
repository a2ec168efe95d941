//! Small free functions shared by the magic-bitboard generator and the
//! pseudo-legal move generator. Kept separate from `bitboard` because these
//! operate on (rank, file) pairs rather than raw bitboards.

use crate::bitboard::BitboardExt;

#[inline(always)]
pub const fn square_index(rank: usize, file: usize) -> usize {
    rank * 8 + file
}

/// Pops the least-significant set square out of `bb` and returns its index.
#[inline(always)]
pub fn pop_lsb(bb: &mut u64) -> u8 {
    bb.pop_lsb() as u8
}
