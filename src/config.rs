//! Timing configuration for the controller.

use crate::time::{Duration, ticks_for};
use crate::types::Mode;

/// Dwell, fade and blink timings, plus the tick period they are measured in.
///
/// Fixed for the lifetime of a controller. Use one of the presets, or
/// [`TrafficConfig::builder`] to validate custom values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TrafficConfig {
    tick_period: Duration,
    stop: Duration,
    go: Duration,
    warning: Duration,
    crosswalk: Duration,
    transition: Duration,
    blink_on: Duration,
    blink_off: Duration,
}

impl TrafficConfig {
    /// Short dwells for bench testing.
    pub const DEVELOPMENT: Self = Self {
        tick_period: Duration::micros(62_500),
        stop: Duration::secs(5),
        go: Duration::secs(5),
        warning: Duration::secs(3),
        crosswalk: Duration::secs(10),
        transition: Duration::secs(1),
        blink_on: Duration::millis(750),
        blink_off: Duration::millis(250),
    };

    /// Street timings.
    pub const PRODUCTION: Self = Self {
        tick_period: Duration::micros(62_500),
        stop: Duration::secs(20),
        go: Duration::secs(20),
        warning: Duration::secs(5),
        crosswalk: Duration::secs(10),
        transition: Duration::secs(1),
        blink_on: Duration::millis(750),
        blink_off: Duration::millis(250),
    };

    /// Starts a builder seeded with [`TrafficConfig::DEVELOPMENT`].
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Period between tick events.
    #[inline]
    pub const fn tick_period(&self) -> Duration {
        self.tick_period
    }

    /// Minimum stable time in `mode` before fading to the next mode.
    #[inline]
    pub const fn dwell(&self, mode: Mode) -> Duration {
        match mode {
            Mode::Stop => self.stop,
            Mode::Go => self.go,
            Mode::Warning => self.warning,
            Mode::Crosswalk => self.crosswalk,
        }
    }

    /// Length of every fade between modes.
    #[inline]
    pub const fn transition(&self) -> Duration {
        self.transition
    }

    /// Number of ticks a fade is spread over.
    #[inline]
    pub const fn transition_ticks(&self) -> u32 {
        ticks_for(self.transition, self.tick_period)
    }

    /// Minimum time the crosswalk color is shown per blink.
    #[inline]
    pub const fn blink_on(&self) -> Duration {
        self.blink_on
    }

    /// Minimum time the light is dark per blink.
    #[inline]
    pub const fn blink_off(&self) -> Duration {
        self.blink_off
    }
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self::PRODUCTION
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Tick period is zero.
    ZeroTickPeriod,

    /// A mode has a zero dwell time.
    ZeroDwell(Mode),

    /// Fade duration is zero.
    ZeroTransition,

    /// A blink phase has zero duration.
    ZeroBlinkPhase,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroTickPeriod => {
                write!(f, "tick period must be non-zero")
            }
            ConfigError::ZeroDwell(mode) => {
                write!(f, "dwell time for {} must be non-zero", mode)
            }
            ConfigError::ZeroTransition => {
                write!(f, "transition duration must be non-zero")
            }
            ConfigError::ZeroBlinkPhase => {
                write!(f, "crosswalk blink phases must be non-zero")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Builder for validated [`TrafficConfig`] values.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: TrafficConfig,
}

impl ConfigBuilder {
    /// Creates a builder seeded with the development timings.
    pub fn new() -> Self {
        Self {
            config: TrafficConfig::DEVELOPMENT,
        }
    }

    /// Sets the tick period.
    pub fn tick_period(mut self, period: Duration) -> Self {
        self.config.tick_period = period;
        self
    }

    /// Sets the dwell time for one mode.
    pub fn dwell(mut self, mode: Mode, dwell: Duration) -> Self {
        match mode {
            Mode::Stop => self.config.stop = dwell,
            Mode::Go => self.config.go = dwell,
            Mode::Warning => self.config.warning = dwell,
            Mode::Crosswalk => self.config.crosswalk = dwell,
        }
        self
    }

    /// Sets the fade duration.
    pub fn transition(mut self, transition: Duration) -> Self {
        self.config.transition = transition;
        self
    }

    /// Sets the crosswalk on and off phase durations.
    pub fn blink(mut self, on: Duration, off: Duration) -> Self {
        self.config.blink_on = on;
        self.config.blink_off = off;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// * `ZeroTickPeriod` - The tick period is zero
    /// * `ZeroDwell` - A mode would transition on the tick it was entered
    /// * `ZeroTransition` - Fades would have no duration
    /// * `ZeroBlinkPhase` - A blink phase would last no time
    pub fn build(self) -> Result<TrafficConfig, ConfigError> {
        let config = self.config;

        if config.tick_period.is_zero() {
            return Err(ConfigError::ZeroTickPeriod);
        }

        for mode in Mode::ALL {
            if config.dwell(mode).is_zero() {
                return Err(ConfigError::ZeroDwell(mode));
            }
        }

        if config.transition.is_zero() {
            return Err(ConfigError::ZeroTransition);
        }

        if config.blink_on.is_zero() || config.blink_off.is_zero() {
            return Err(ConfigError::ZeroBlinkPhase);
        }

        Ok(config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
