//! Core types for the traffic light state machine.

use crate::colors;
use palette::Srgb;

/// Operating mode of the light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Traffic must stop.
    Stop,

    /// Traffic may proceed.
    Go,

    /// Traffic should prepare to stop.
    Warning,

    /// Pedestrian crossing, entered only by touch.
    Crosswalk,
}

impl Mode {
    /// All modes, in declaration order.
    pub const ALL: [Mode; 4] = [Mode::Stop, Mode::Go, Mode::Warning, Mode::Crosswalk];

    /// The mode that follows this one once the light has settled in it.
    ///
    /// Stop, Go and Warning form the normal cycle. Crosswalk always
    /// hands back to Go.
    #[inline]
    pub const fn successor(self) -> Mode {
        match self {
            Mode::Stop => Mode::Go,
            Mode::Go => Mode::Warning,
            Mode::Warning => Mode::Stop,
            Mode::Crosswalk => Mode::Go,
        }
    }

    /// Canonical color for this mode.
    #[inline]
    pub const fn color(self) -> Srgb<u8> {
        match self {
            Mode::Stop => colors::STOP,
            Mode::Go => colors::GO,
            Mode::Warning => colors::WARNING,
            Mode::Crosswalk => colors::CROSSWALK,
        }
    }

    /// Upper-case name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Stop => "STOP",
            Mode::Go => "GO",
            Mode::Warning => "WARNING",
            Mode::Crosswalk => "CROSSWALK",
        }
    }
}

impl core::fmt::Display for Mode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A mode paired with its canonical color.
///
/// Only constructible through [`ColorState::of`], so the color always
/// matches the lookup table for the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorState {
    mode: Mode,
    color: Srgb<u8>,
}

impl ColorState {
    /// Creates the state for `mode`.
    #[inline]
    pub const fn of(mode: Mode) -> Self {
        Self {
            mode,
            color: mode.color(),
        }
    }

    /// The mode.
    #[inline]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Canonical color of the mode.
    #[inline]
    pub const fn color(&self) -> Srgb<u8> {
        self.color
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ColorState {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "{}({=u8:#x}, {=u8:#x}, {=u8:#x})",
            self.mode,
            self.color.red,
            self.color.green,
            self.color.blue
        );
    }
}

/// Whether the light is settled on `current` or fading toward `next`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    /// Settled on the current mode's color.
    Stable,

    /// Fading from the current mode to the next.
    Transitioning,
}

/// Phase of the crosswalk blink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkPhase {
    /// Crosswalk color shown.
    On,

    /// Light dark.
    Off,
}

impl BlinkPhase {
    /// The other phase.
    #[inline]
    pub const fn flipped(self) -> Self {
        match self {
            BlinkPhase::On => BlinkPhase::Off,
            BlinkPhase::Off => BlinkPhase::On,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_cycle_closes_after_three_steps() {
        let mut mode = Mode::Stop;
        for expected in [Mode::Go, Mode::Warning, Mode::Stop] {
            mode = mode.successor();
            assert_eq!(mode, expected);
        }
    }

    #[test]
    fn no_mode_is_its_own_successor() {
        for mode in Mode::ALL {
            assert_ne!(mode, mode.successor());
        }
    }

    #[test]
    fn crosswalk_is_never_a_successor() {
        for mode in Mode::ALL {
            assert_ne!(mode.successor(), Mode::Crosswalk);
        }
    }

    #[test]
    fn color_state_uses_lookup_table() {
        for mode in Mode::ALL {
            assert_eq!(ColorState::of(mode).color(), mode.color());
        }
    }
}
