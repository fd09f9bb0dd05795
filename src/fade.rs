//! Linear color fades over a fixed number of ticks.

use palette::Srgb;

/// An in-progress fade from one color to another.
///
/// Each [`step`](Fade::step) recomputes the per-channel increment as
/// `(target - value) / ticks_remaining`. Integer division truncates toward
/// zero, so no increment ever passes the target, and with one tick left the
/// increment is the whole residual: the last step lands exactly on the
/// target regardless of rounding in earlier steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fade {
    value: Srgb<u8>,
    target: Srgb<u8>,
    remaining: u32,
}

impl Fade {
    /// Starts a fade from `from` to `to` spread over `ticks` steps.
    ///
    /// A zero tick count is treated as one step.
    pub fn new(from: Srgb<u8>, to: Srgb<u8>, ticks: u32) -> Self {
        Self {
            value: from,
            target: to,
            remaining: ticks.max(1),
        }
    }

    /// Advances one tick and returns the color to render.
    pub fn step(&mut self) -> Srgb<u8> {
        if self.remaining == 0 {
            return self.value;
        }

        let remaining = self.remaining as i32;
        self.value = Srgb::new(
            channel_step(self.value.red, self.target.red, remaining),
            channel_step(self.value.green, self.target.green, remaining),
            channel_step(self.value.blue, self.target.blue, remaining),
        );
        self.remaining -= 1;

        if self.remaining == 0 {
            debug_assert_eq!(self.value, self.target);
        }
        self.value
    }

    /// Color after the most recent step.
    #[inline]
    pub fn value(&self) -> Srgb<u8> {
        self.value
    }

    /// Color the fade ends on.
    #[inline]
    pub fn target(&self) -> Srgb<u8> {
        self.target
    }

    /// Steps left before the target is reached.
    #[inline]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Returns true once the target has been reached.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }
}

#[inline]
fn channel_step(value: u8, target: u8, remaining: i32) -> u8 {
    let delta = (target as i32 - value as i32) / remaining;
    // |delta| <= |target - value|, so the sum stays between value and target
    (value as i32 + delta) as u8
}
