// src/fixed/stream/mod.rs

//! Cycle-stepped transform engine.
//!
//! [`StreamingFft::tick`] advances the engine by one clock. Each tick does at
//! most one unit of work: load one sample, compute one butterfly or hand one
//! bin to the consumer. With a producer and consumer that are always ready a
//! session takes 32 load ticks, 80 compute ticks and 32 drain ticks.

mod session;

pub use session::Session;

use super::core::{compute_butterfly, reverse_bits_5};
use super::spectrum::Spectrum;
use super::types::ComplexQ14;
use crate::common::{BUTTERFLIES_PER_STAGE, FFT_SIZE, FftError, STAGES};
use crate::config::{BackpressurePolicy, FftConfig};
use core::fmt;

/// Controller state as seen from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Loading,
    Computing { stage: u8 },
    Draining,
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineState::Idle => write!(f, "idle"),
            EngineState::Loading => write!(f, "loading"),
            EngineState::Computing { stage } => write!(f, "computing stage {}", stage),
            EngineState::Draining => write!(f, "draining"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Loading,
    Computing,
    Draining,
}

/// One output bin, valid for the tick that carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bin {
    pub index: usize,
    pub value: ComplexQ14,
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tick {
    /// The offered sample was written into the working buffer.
    pub accepted: bool,
    /// A bin was transferred to the consumer.
    pub out: Option<Bin>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    pub ticks: u64,
    pub sessions_completed: u64,
    pub samples_dropped: u64,
    pub output_stalls: u64,
    pub resets: u64,
}

#[derive(Debug)]
pub struct StreamingFft {
    config: FftConfig,
    phase: Phase,
    session: Session,
    stats: StreamStats,
}

impl StreamingFft {
    pub fn new(config: FftConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            session: Session::default(),
            stats: StreamStats::default(),
        }
    }

    pub fn config(&self) -> FftConfig {
        self.config
    }

    pub fn state(&self) -> EngineState {
        match self.phase {
            Phase::Idle => EngineState::Idle,
            Phase::Loading => EngineState::Loading,
            Phase::Computing => EngineState::Computing {
                stage: self.session.stage as u8,
            },
            Phase::Draining => EngineState::Draining,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn stats(&self) -> StreamStats {
        self.stats
    }

    /// Input readiness: true until the 32nd sample of a session is accepted.
    pub fn in_ready(&self) -> bool {
        matches!(self.phase, Phase::Idle | Phase::Loading)
    }

    /// Output validity: a bin is presented to the consumer.
    pub fn out_valid(&self) -> bool {
        self.phase == Phase::Draining
    }

    /// The bin presented this cycle, if any. Peeking does not consume it.
    pub fn peek_output(&self) -> Option<Bin> {
        self.out_valid().then(|| Bin {
            index: self.session.drain,
            value: self.session.buffer()[self.session.drain],
        })
    }

    /// Advances the engine by one clock.
    ///
    /// `sample` is the value the producer offers this cycle and `out_ready`
    /// tells whether the consumer takes a presented bin. A sample offered
    /// while [`Self::in_ready`] is false is dropped or rejected according to
    /// [`BackpressurePolicy`]; a rejected tick leaves the engine untouched.
    pub fn tick(&mut self, sample: Option<ComplexQ14>, out_ready: bool) -> Result<Tick, FftError> {
        if sample.is_some() && !self.in_ready() {
            let state = self.state();
            match self.config.backpressure {
                BackpressurePolicy::Reject => {
                    log::warn!("sample rejected: engine is {}", state);
                    return Err(FftError::NotReady { state });
                }
                BackpressurePolicy::Drop => {
                    log::warn!("sample dropped: engine is {}", state);
                    self.stats.samples_dropped += 1;
                }
            }
        }

        self.stats.ticks += 1;
        let mut tick = Tick::default();
        match self.phase {
            Phase::Idle | Phase::Loading => {
                if let Some(sample) = sample {
                    self.load(sample);
                    tick.accepted = true;
                }
            }
            Phase::Computing => self.compute(),
            Phase::Draining => tick.out = self.drain(out_ready),
        }
        Ok(tick)
    }

    /// Hard reset: back to idle with both buffers and all counters cleared.
    pub fn reset(&mut self) {
        if self.phase != Phase::Idle {
            log::info!("reset discards the session in flight ({})", self.state());
        }
        self.session.clear();
        self.phase = Phase::Idle;
        self.stats.resets += 1;
    }

    /// Streams one block through the engine and collects its 32 bins.
    ///
    /// Producer and consumer are always ready, so this takes exactly one
    /// session's worth of ticks.
    pub fn process_block(&mut self, input: &[ComplexQ14]) -> Result<Spectrum, FftError> {
        if input.len() != FFT_SIZE {
            return Err(FftError::SizeMismatch {
                expected: FFT_SIZE,
                actual: input.len(),
            });
        }
        if self.phase != Phase::Idle {
            return Err(FftError::Busy { state: self.state() });
        }

        for sample in input {
            self.tick(Some(*sample), true)?;
        }

        let mut bins = [ComplexQ14::ZERO; FFT_SIZE];
        let mut received = 0;
        while received < FFT_SIZE {
            if let Some(bin) = self.tick(None, true)?.out {
                bins[bin.index] = bin.value;
                received += 1;
            }
        }
        Ok(Spectrum(bins))
    }

    fn load(&mut self, sample: ComplexQ14) {
        if self.phase == Phase::Idle {
            log::debug!("session started");
            self.phase = Phase::Loading;
        }

        let slot = reverse_bits_5(self.session.fill);
        self.session.buffers.current_mut()[slot] = sample;
        log::trace!("sample {} -> slot {}", self.session.fill, slot);
        self.session.fill += 1;

        if self.session.fill == FFT_SIZE {
            log::debug!("block loaded, computing");
            self.session.stage = 0;
            self.session.butterfly = 0;
            self.phase = Phase::Computing;
        }
    }

    fn compute(&mut self) {
        let session = &mut self.session;
        let (stage, n) = (session.stage, session.butterfly);
        let (current, next) = session.buffers.stage_view();
        compute_butterfly(current, next, stage, n, self.config.overflow);

        if n + 1 < BUTTERFLIES_PER_STAGE {
            session.butterfly += 1;
            return;
        }

        // Stage barrier: every write of this stage has landed.
        session.buffers.swap();
        session.butterfly = 0;
        log::debug!("stage {} committed", stage);

        if stage + 1 == STAGES {
            session.drain = 0;
            self.phase = Phase::Draining;
        } else {
            session.stage += 1;
        }
    }

    fn drain(&mut self, out_ready: bool) -> Option<Bin> {
        if !out_ready {
            self.stats.output_stalls += 1;
            return None;
        }

        let bin = Bin {
            index: self.session.drain,
            value: self.session.buffer()[self.session.drain],
        };
        self.session.drain += 1;

        if self.session.drain == FFT_SIZE {
            self.session.clear();
            self.phase = Phase::Idle;
            self.stats.sessions_completed += 1;
            log::debug!("session complete");
        }
        Some(bin)
    }
}

impl Default for StreamingFft {
    fn default() -> Self {
        Self::new(FftConfig::default())
    }
}

#[cfg(test)]
#[path = "stream_tests.rs"]
mod tests;
