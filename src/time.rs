//! Microsecond durations and tick/duration conversion.
//!
//! Tick periods such as 62.5 ms are not whole milliseconds, so every
//! threshold in the controller is a [`fugit::MicrosDurationU64`].

/// A span of time with microsecond resolution.
pub type Duration = fugit::MicrosDurationU64;

/// Time covered by `ticks` periods of length `period`, saturating at the
/// largest representable duration.
#[inline]
pub const fn span_of(period: Duration, ticks: u32) -> Duration {
    Duration::from_ticks(period.ticks().saturating_mul(ticks as u64))
}

/// Number of whole ticks of length `period` needed to cover `duration`.
///
/// Rounds up and never returns less than one, so a fade always has at
/// least one step and a threshold is never reached before it has elapsed.
/// A zero `period` is rejected by config validation; here it yields one.
pub const fn ticks_for(duration: Duration, period: Duration) -> u32 {
    if period.is_zero() {
        return 1;
    }
    let ticks = duration.ticks().div_ceil(period.ticks());
    if ticks == 0 {
        1
    } else if ticks > u32::MAX as u64 {
        u32::MAX
    } else {
        ticks as u32
    }
}
