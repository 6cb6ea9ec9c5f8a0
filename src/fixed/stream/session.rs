use crate::fixed::buffer::{Block, PingPong};

/// State of the one transform currently in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub(super) buffers: PingPong,
    /// Samples loaded so far (0..=32).
    pub(super) fill: usize,
    pub(super) stage: usize,
    pub(super) butterfly: usize,
    /// Bins handed to the consumer so far (0..=32).
    pub(super) drain: usize,
}

impl Session {
    pub fn fill(&self) -> usize {
        self.fill
    }

    pub fn stage(&self) -> usize {
        self.stage
    }

    pub fn butterfly(&self) -> usize {
        self.butterfly
    }

    pub fn drain(&self) -> usize {
        self.drain
    }

    /// The working buffer: bit-reversed samples while loading, the spectrum
    /// once draining.
    pub fn buffer(&self) -> &Block {
        self.buffers.current()
    }

    /// True when both buffers and every counter are zero.
    pub fn is_empty(&self) -> bool {
        self.buffers.is_clear()
            && self.fill == 0
            && self.stage == 0
            && self.butterfly == 0
            && self.drain == 0
    }

    pub(super) fn clear(&mut self) {
        *self = Self::default();
    }
}
