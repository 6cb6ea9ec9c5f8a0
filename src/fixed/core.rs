// src/fixed/core.rs

use super::buffer::{Block, PingPong};
use super::twiddle::twiddle;
use super::types::ComplexQ14;
use crate::common::{BUTTERFLIES_PER_STAGE, FFT_SIZE, STAGES};
use crate::config::OverflowPolicy;

/// Reverses the low 5 bits of `i`: the DIT load address of arrival number `i`.
#[inline]
pub const fn reverse_bits_5(i: usize) -> usize {
    (((i & (FFT_SIZE - 1)) as u8).reverse_bits() >> 3) as usize
}

/// Buffer slots and twiddle index touched by one butterfly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButterflyAddr {
    pub idx1: usize,
    pub idx2: usize,
    pub tw_index: usize,
}

/// Addresses of butterfly `n` (0..16) in `stage` (0..5).
///
/// Butterflies pair slots `span = 2^stage` apart. `k` is the position inside a
/// group of `2 * span` slots and selects twiddle `k << (4 - stage)`, so stage 0
/// only uses W^0 and stage 4 walks W^0..W^15.
#[inline]
pub const fn butterfly_addr(stage: usize, n: usize) -> ButterflyAddr {
    let span = 1 << stage;
    let group_size = span << 1;
    let k = n % span;
    let group = n / span;
    let idx1 = group * group_size + k;
    ButterflyAddr {
        idx1,
        idx2: idx1 + span,
        tw_index: (k << (STAGES - 1 - stage)) % FFT_SIZE,
    }
}

/// The radix-2 butterfly: `(a + b·w, a - b·w)` under `policy`.
#[inline]
pub fn butterfly(
    a: ComplexQ14,
    b: ComplexQ14,
    w: ComplexQ14,
    policy: OverflowPolicy,
) -> (ComplexQ14, ComplexQ14) {
    let t = b * w;
    match policy {
        OverflowPolicy::HalvePerStage => (a.halving_add(t), a.halving_sub(t)),
        OverflowPolicy::Wrapping => (a + t, a - t),
    }
}

/// Runs butterfly `n` of `stage`, reading `current` and writing `next`.
pub(crate) fn compute_butterfly(
    current: &Block,
    next: &mut Block,
    stage: usize,
    n: usize,
    policy: OverflowPolicy,
) {
    let addr = butterfly_addr(stage, n);
    let (hi, lo) = butterfly(
        current[addr.idx1],
        current[addr.idx2],
        twiddle(addr.tw_index),
        policy,
    );
    log::trace!(
        "stage {} butterfly {}: slots ({}, {}) twiddle {}",
        stage,
        n,
        addr.idx1,
        addr.idx2,
        addr.tw_index
    );
    next[addr.idx1] = hi;
    next[addr.idx2] = lo;
}

/// All 16 butterflies of one stage followed by the buffer swap barrier.
pub(crate) fn run_stage(buffers: &mut PingPong, stage: usize, policy: OverflowPolicy) {
    let (current, next) = buffers.stage_view();
    for n in 0..BUTTERFLIES_PER_STAGE {
        compute_butterfly(current, next, stage, n, policy);
    }
    buffers.swap();
}

/// Writes `input` into `dest` in bit-reversed order.
pub(crate) fn load_bit_reversed(input: &Block, dest: &mut Block) {
    for (i, sample) in input.iter().enumerate() {
        dest[reverse_bits_5(i)] = *sample;
    }
}

/// 32-point radix-2 DIT FFT on bit-reversed data held in `buffers.current()`.
/// The naturally ordered spectrum is left in `buffers.current()`.
pub(crate) fn radix_2_dit_fft32_core(buffers: &mut PingPong, policy: OverflowPolicy) {
    for stage in 0..STAGES {
        run_stage(buffers, stage, policy);
    }
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
