// src/fixed/buffer.rs

use super::types::ComplexQ14;
use crate::common::FFT_SIZE;
use core::mem;

pub type Block = [ComplexQ14; FFT_SIZE];

/// Working and scratch buffers of one transform.
///
/// A stage reads only `current` and writes only `next`; [`PingPong::swap`] is
/// the barrier between stages. Keeping the two apart is what lets sibling
/// butterflies of one stage run in any order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PingPong {
    current: Block,
    next: Block,
}

impl PingPong {
    pub const fn new() -> Self {
        Self {
            current: [ComplexQ14::ZERO; FFT_SIZE],
            next: [ComplexQ14::ZERO; FFT_SIZE],
        }
    }

    #[inline]
    pub fn current(&self) -> &Block {
        &self.current
    }

    #[inline]
    pub fn current_mut(&mut self) -> &mut Block {
        &mut self.current
    }

    /// Splits into (read-only current, writable next) for one stage.
    #[inline]
    pub fn stage_view(&mut self) -> (&Block, &mut Block) {
        (&self.current, &mut self.next)
    }

    /// Commits the stage: scratch becomes current.
    #[inline]
    pub fn swap(&mut self) {
        mem::swap(&mut self.current, &mut self.next);
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn is_clear(&self) -> bool {
        self.current.iter().chain(self.next.iter()).all(|s| *s == ComplexQ14::ZERO)
    }
}

impl Default for PingPong {
    fn default() -> Self {
        Self::new()
    }
}
