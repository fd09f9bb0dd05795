//! Interrupt-to-loop signalling.
//!
//! Interrupt handlers call [`EventFlag::set`]; the polling loop consumes the
//! flag with [`EventFlag::take`], which reads and clears it inside one
//! critical section. Neither side ever does the other's half.

use core::cell::Cell;
use critical_section::Mutex;

/// Source of tick boundary events.
pub trait TickSource {
    /// Returns true, once, for each tick that has elapsed since the last call.
    fn take_tick(&self) -> bool;
}

/// A boolean event flag shared between an interrupt handler and the main loop.
///
/// Suitable for `static` storage:
///
/// ```
/// use touch_traffic_light::EventFlag;
///
/// static TICK: EventFlag = EventFlag::new();
///
/// // in the timer interrupt
/// TICK.set();
///
/// // in the main loop
/// assert!(TICK.take());
/// assert!(!TICK.take());
/// ```
pub struct EventFlag {
    raised: Mutex<Cell<bool>>,
}

impl EventFlag {
    /// Creates a lowered flag.
    pub const fn new() -> Self {
        Self {
            raised: Mutex::new(Cell::new(false)),
        }
    }

    /// Raises the flag. Called from interrupt context.
    pub fn set(&self) {
        critical_section::with(|cs| self.raised.borrow(cs).set(true));
    }

    /// Reads and lowers the flag. Called from the polling loop.
    pub fn take(&self) -> bool {
        critical_section::with(|cs| self.raised.borrow(cs).replace(false))
    }
}

impl Default for EventFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for EventFlag {
    #[inline]
    fn take_tick(&self) -> bool {
        self.take()
    }
}

impl<T: TickSource + ?Sized> TickSource for &T {
    #[inline]
    fn take_tick(&self) -> bool {
        (**self).take_tick()
    }
}
