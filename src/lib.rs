#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`TrafficLight`**: The tick-driven controller owning `current` and `next` modes
//! - **`Mode`**: STOP, GO, WARNING and the touch-only CROSSWALK
//! - **`ColorState`**: A mode paired with its canonical color
//! - **`TrafficConfig`**: Dwell, fade and blink timings, validated by `ConfigBuilder`
//! - **`TimingAccumulator`**: Tick counters converted to elapsed time
//! - **`Fade`**: Integer linear interpolation that lands exactly on its target
//! - **`BlinkCycle`**: Crosswalk on/off oscillation
//! - **`RgbOutput`** / **`TouchSensor`** / **`TickSource`**: Traits to implement for your hardware
//! - **`EventFlag`**: Interrupt-safe flag for tick and touch signalling
//! - **`DiagnosticSink`**: Write-only transition reporting
//!
//! Colors are `Srgb<u8>`. When implementing `RgbOutput` for PWM hardware,
//! [`colors::duty_cycle`] maps a channel level onto your timer's duty range.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod blink;
pub mod colors;
pub mod config;
pub mod controller;
pub mod diagnostics;
pub mod fade;
pub mod signal;
pub mod time;
pub mod timing;
pub mod types;

pub use blink::BlinkCycle;
pub use config::{ConfigBuilder, ConfigError, TrafficConfig};
pub use controller::{RgbOutput, TouchSensor, TrafficLight};
#[cfg(feature = "defmt")]
pub use diagnostics::DefmtSink;
pub use diagnostics::{
    DiagnosticSink, FmtSink, NoopSink, TransitionEvent, TransitionKind, TransitionLog,
};
pub use fade::Fade;
pub use signal::{EventFlag, TickSource};
pub use time::{Duration, span_of, ticks_for};
pub use timing::{Activity, TimingAccumulator};
pub use types::{BlinkPhase, ColorState, Mode, Status};
