//! Tick counters behind every dwell, fade and blink threshold.

use crate::time::{Duration, span_of};
use crate::types::{BlinkPhase, Status};

/// What the controller was doing during the tick being counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Activity {
    /// Settled, not blinking.
    Stable,

    /// Settled in crosswalk, in the given blink phase.
    Blinking(BlinkPhase),

    /// Fading between modes.
    Transitioning,
}

impl Activity {
    /// Controller status this activity belongs to.
    #[inline]
    pub const fn status(self) -> Status {
        match self {
            Activity::Stable | Activity::Blinking(_) => Status::Stable,
            Activity::Transitioning => Status::Transitioning,
        }
    }
}

/// Elapsed-tick counters, converted to time with a fixed tick period.
///
/// Counters wrap instead of overflowing and are only ever compared with
/// `>=` against a threshold, never for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingAccumulator {
    tick_period: Duration,
    since_startup: u32,
    stable: u32,
    transitioning: u32,
    blink_on: u32,
    blink_off: u32,
}

impl TimingAccumulator {
    /// Creates an accumulator with every counter at zero.
    pub const fn new(tick_period: Duration) -> Self {
        Self {
            tick_period,
            since_startup: 0,
            stable: 0,
            transitioning: 0,
            blink_on: 0,
            blink_off: 0,
        }
    }

    /// Records one elapsed tick.
    pub fn on_tick(&mut self, activity: Activity) {
        self.since_startup = self.since_startup.wrapping_add(1);

        match activity {
            Activity::Stable => {
                self.stable = self.stable.wrapping_add(1);
            }
            Activity::Blinking(phase) => {
                self.stable = self.stable.wrapping_add(1);
                match phase {
                    BlinkPhase::On => self.blink_on = self.blink_on.wrapping_add(1),
                    BlinkPhase::Off => self.blink_off = self.blink_off.wrapping_add(1),
                }
            }
            Activity::Transitioning => {
                self.transitioning = self.transitioning.wrapping_add(1);
            }
        }
    }

    /// Time spent settled since the current dwell began.
    #[inline]
    pub fn elapsed_stable(&self) -> Duration {
        span_of(self.tick_period, self.stable)
    }

    /// Time spent in the current fade.
    #[inline]
    pub fn elapsed_transitioning(&self) -> Duration {
        span_of(self.tick_period, self.transitioning)
    }

    /// Time spent in the current blink-on phase.
    #[inline]
    pub fn elapsed_blink_on(&self) -> Duration {
        span_of(self.tick_period, self.blink_on)
    }

    /// Time spent in the current blink-off phase.
    #[inline]
    pub fn elapsed_blink_off(&self) -> Duration {
        span_of(self.tick_period, self.blink_off)
    }

    /// Time since startup, used for diagnostic timestamps only.
    #[inline]
    pub fn uptime(&self) -> Duration {
        span_of(self.tick_period, self.since_startup)
    }

    /// Raw tick count since startup.
    #[inline]
    pub fn ticks_since_startup(&self) -> u32 {
        self.since_startup
    }

    /// Raw tick count of the current dwell.
    #[inline]
    pub fn stable_ticks(&self) -> u32 {
        self.stable
    }

    /// Raw tick count of the current fade.
    #[inline]
    pub fn transitioning_ticks(&self) -> u32 {
        self.transitioning
    }

    /// Starts a new dwell.
    #[inline]
    pub fn reset_stable(&mut self) {
        self.stable = 0;
    }

    /// Starts a new fade.
    #[inline]
    pub fn reset_transitioning(&mut self) {
        self.transitioning = 0;
    }

    /// Starts a new blink-on phase.
    #[inline]
    pub fn reset_blink_on(&mut self) {
        self.blink_on = 0;
    }

    /// Starts a new blink-off phase.
    #[inline]
    pub fn reset_blink_off(&mut self) {
        self.blink_off = 0;
    }

    /// Resets everything except the uptime counter.
    pub fn reset_phase_counters(&mut self) {
        self.stable = 0;
        self.transitioning = 0;
        self.blink_on = 0;
        self.blink_off = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::micros(62_500);

    #[test]
    fn stable_ticks_do_not_touch_transition_counter() {
        let mut timing = TimingAccumulator::new(TICK);
        for _ in 0..80 {
            timing.on_tick(Activity::Stable);
        }
        assert_eq!(timing.elapsed_stable(), Duration::secs(5));
        assert_eq!(timing.elapsed_transitioning(), Duration::from_ticks(0));
        assert_eq!(timing.uptime(), Duration::secs(5));
    }

    #[test]
    fn blinking_counts_toward_dwell_and_one_phase() {
        let mut timing = TimingAccumulator::new(TICK);
        for _ in 0..12 {
            timing.on_tick(Activity::Blinking(BlinkPhase::On));
        }
        for _ in 0..4 {
            timing.on_tick(Activity::Blinking(BlinkPhase::Off));
        }
        assert_eq!(timing.elapsed_blink_on(), Duration::millis(750));
        assert_eq!(timing.elapsed_blink_off(), Duration::millis(250));
        assert_eq!(timing.elapsed_stable(), Duration::secs(1));
    }

    #[test]
    fn reset_phase_counters_keeps_uptime() {
        let mut timing = TimingAccumulator::new(TICK);
        timing.on_tick(Activity::Stable);
        timing.on_tick(Activity::Transitioning);
        timing.on_tick(Activity::Blinking(BlinkPhase::Off));
        timing.reset_phase_counters();

        assert_eq!(timing.ticks_since_startup(), 3);
        assert_eq!(timing.stable_ticks(), 0);
        assert_eq!(timing.transitioning_ticks(), 0);
        assert_eq!(timing.elapsed_blink_off(), Duration::from_ticks(0));
    }

    #[test]
    fn counters_wrap_instead_of_panicking() {
        let mut timing = TimingAccumulator::new(TICK);
        timing.since_startup = u32::MAX;
        timing.on_tick(Activity::Stable);
        assert_eq!(timing.ticks_since_startup(), 0);
    }
}
