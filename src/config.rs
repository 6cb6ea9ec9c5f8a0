//! Engine configuration.
//!
//! Both knobs cover behavior the hardware design leaves open: how butterfly
//! sums are kept inside 16 bits and what happens to a sample offered while the
//! engine is not ready.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How butterfly outputs are kept inside the 16-bit range.
///
/// The policy applies to all five stages of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OverflowPolicy {
    /// Both butterfly outputs are shifted right by one bit, so the transform
    /// carries an overall 1/32 scale and never overflows.
    #[default]
    HalvePerStage,
    /// Plain 16-bit two's-complement adds. Large inputs wrap.
    Wrapping,
}

/// What the loader does with a sample offered while it is not ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BackpressurePolicy {
    /// Discard the sample, count it and carry on with the tick.
    #[default]
    Drop,
    /// Refuse the tick with [`crate::FftError::NotReady`]; nothing advances.
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FftConfig {
    pub overflow: OverflowPolicy,
    pub backpressure: BackpressurePolicy,
}

impl FftConfig {
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn with_backpressure(mut self, backpressure: BackpressurePolicy) -> Self {
        self.backpressure = backpressure;
        self
    }
}
