//! Bitboard implementation for fast line matching

use super::TOTAL_CELLS;

/// Bitboard over the 9 cells, one bit per cell (bit i = cell i).
/// A single u16 covers the whole board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: u16,
}

/// Mask with all 9 board bits set
pub const FULL_MASK: u16 = (1u16 << TOTAL_CELLS) - 1;

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Build a bitboard from a raw cell mask
    pub const fn from_mask(bits: u16) -> Self {
        Self { bits }
    }

    /// Set the bit for a cell
    #[inline]
    pub fn set(&mut self, idx: usize) {
        debug_assert!(idx < TOTAL_CELLS);
        self.bits |= 1u16 << idx;
    }

    /// Clear the bit for a cell
    #[inline]
    pub fn clear(&mut self, idx: usize) {
        debug_assert!(idx < TOTAL_CELLS);
        self.bits &= !(1u16 << idx);
    }

    /// Check if the bit for a cell is set
    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        debug_assert!(idx < TOTAL_CELLS);
        (self.bits >> idx) & 1 == 1
    }

    /// Count set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Check if no bits are set
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Check if every bit of `mask` is set in this bitboard
    #[inline]
    pub fn covers(&self, mask: u16) -> bool {
        self.bits & mask == mask
    }

    /// Raw cell mask
    #[inline]
    pub fn mask(&self) -> u16 {
        self.bits
    }

    /// Iterate over set cell indices in ascending order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

/// Iterator over set bits in a Bitboard, lowest index first
pub struct BitboardIter {
    bits: u16,
}

impl Iterator for BitboardIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;
        Some(idx)
    }
}
