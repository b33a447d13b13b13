//! Deterministic per-index random stream
//!
//! Each record seeds its own stream from `index + 1`, so generating row `i`
//! never depends on what was generated before it and two calls with the same
//! index are identical byte for byte. The draw order inside a generator is
//! part of its contract: reordering draws changes every field after the move.

const LCG_A: u64 = 1_103_515_245;
const LCG_C: u64 = 12_345;
const LCG_M: u64 = 1 << 31;

/// Linear-congruential stream keyed by a record index
#[derive(Debug, Clone)]
pub struct IndexedRng {
    seed: u64,
}

impl IndexedRng {
    /// Stream for record `index`.
    pub fn for_index(index: usize) -> Self {
        Self {
            seed: index as u64 + 1,
        }
    }

    /// Next raw draw in `[0, 2^31)`.
    pub fn next_u32(&mut self) -> u32 {
        self.seed = (self.seed.wrapping_mul(LCG_A).wrapping_add(LCG_C)) % LCG_M;
        self.seed as u32
    }

    /// Draw in `[0, bound)`. `bound` must be non-zero.
    pub fn below(&mut self, bound: usize) -> usize {
        self.next_u32() as usize % bound
    }

    /// Draw in `[lo, hi)`. `hi` must be greater than `lo`.
    pub fn in_range(&mut self, lo: i64, hi: i64) -> i64 {
        lo + (self.next_u32() as i64) % (hi - lo)
    }

    /// Pick one element of a non-empty pool.
    pub fn pick<'a, T>(&mut self, pool: &'a [T]) -> &'a T {
        &pool[self.below(pool.len())]
    }

    /// True with roughly `percent` in 100 odds.
    pub fn chance(&mut self, percent: u32) -> bool {
        self.next_u32() % 100 < percent
    }
}
