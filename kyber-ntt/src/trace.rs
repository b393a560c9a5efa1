//! Instrumentation of the butterfly network.
//!
//! Both transforms report every butterfly block to an [`NttObserver`] before applying it.  The
//! unit type is the no-op observer used by [`Ntt::ntt`](crate::Ntt::ntt) and
//! [`NttInverse::ntt_inverse`](crate::NttInverse::ntt_inverse); [`ZetaTrace`] records which
//! twiddle factor last touched each coefficient.

use crate::algebra::{Elem, Int, N};
use crate::twiddle::table_position;

/// One butterfly block, as seen by an observer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButterflyBlock {
    /// Layer number, `0..7`, in execution order
    pub layer: usize,
    /// Half-length of the block
    pub len: usize,
    /// Index of the first coefficient in the block
    pub start: usize,
    /// Value of the twiddle counter for this block
    pub k: usize,
    /// `BitRev_7(k)`
    pub exponent: u8,
    /// `zeta^{BitRev_7(k)}`
    pub zeta: Elem,
}

impl ButterflyBlock {
    /// The coefficient indices covered by this block
    pub fn span(&self) -> core::ops::Range<usize> {
        self.start..self.start + 2 * self.len
    }
}

/// Receives one event per butterfly block, in execution order.
pub trait NttObserver {
    /// Called before the butterflies of `block` are applied.
    fn block(&mut self, block: &ButterflyBlock);
}

impl NttObserver for () {
    #[allow(clippy::inline_always)]
    #[inline(always)]
    fn block(&mut self, _block: &ButterflyBlock) {}
}

/// The twiddle factor recorded against one coefficient
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZetaUse {
    /// Exponent of the primitive root
    pub exponent: u8,
    /// The twiddle factor itself
    pub zeta: Int,
    /// Index of `zeta` in the precomputed table, if present there
    pub position: Option<usize>,
}

/// Per-coefficient record of the twiddle factor most recently applied.
///
/// After a complete forward transform every entry reflects the final (`len = 2`) layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZetaTrace {
    entries: [Option<ZetaUse>; N],
}

impl Default for ZetaTrace {
    fn default() -> Self {
        Self { entries: [None; N] }
    }
}

impl ZetaTrace {
    /// An empty trace
    pub fn new() -> Self {
        Self::default()
    }

    /// The entry for coefficient `index`, if any block has touched it
    pub fn get(&self, index: usize) -> Option<ZetaUse> {
        self.entries.get(index).copied().flatten()
    }

    /// All entries, in coefficient order
    pub fn entries(&self) -> &[Option<ZetaUse>; N] {
        &self.entries
    }
}

impl NttObserver for ZetaTrace {
    fn block(&mut self, block: &ButterflyBlock) {
        let entry = ZetaUse {
            exponent: block.exponent,
            zeta: block.zeta.0,
            position: table_position(block.zeta),
        };
        for slot in &mut self.entries[block.span()] {
            *slot = Some(entry);
        }
    }
}
