//! Crosswalk on/off oscillator.

use crate::colors;
use crate::time::Duration;
use crate::timing::TimingAccumulator;
use crate::types::BlinkPhase;
use palette::Srgb;

/// Alternates between the crosswalk color and dark while crosswalk is stable.
///
/// Phases end when their accumulated time reaches the configured minimum,
/// so durations that are not a whole number of ticks simply round up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkCycle {
    phase: BlinkPhase,
    on: Duration,
    off: Duration,
}

impl BlinkCycle {
    /// Creates a cycle starting in the on phase.
    pub const fn new(on: Duration, off: Duration) -> Self {
        Self {
            phase: BlinkPhase::On,
            on,
            off,
        }
    }

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> BlinkPhase {
        self.phase
    }

    /// Color rendered during the current phase.
    #[inline]
    pub fn color(&self) -> Srgb<u8> {
        match self.phase {
            BlinkPhase::On => colors::CROSSWALK,
            BlinkPhase::Off => colors::OFF,
        }
    }

    /// Restarts in the on phase.
    pub fn restart(&mut self, timing: &mut TimingAccumulator) {
        self.phase = BlinkPhase::On;
        timing.reset_blink_on();
        timing.reset_blink_off();
    }

    /// Flips the phase if the current one has run its minimum time.
    ///
    /// Resets the counter of the phase that just ended and returns the new
    /// phase, or `None` if the phase continues.
    pub fn poll(&mut self, timing: &mut TimingAccumulator) -> Option<BlinkPhase> {
        match self.phase {
            BlinkPhase::On if timing.elapsed_blink_on() >= self.on => {
                timing.reset_blink_on();
            }
            BlinkPhase::Off if timing.elapsed_blink_off() >= self.off => {
                timing.reset_blink_off();
            }
            _ => return None,
        }

        self.phase = self.phase.flipped();
        Some(self.phase)
    }
}
