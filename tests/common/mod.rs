//! Shared test infrastructure for touch-traffic-light integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use palette::Srgb;
use touch_traffic_light::{
    DiagnosticSink, RgbOutput, TouchSensor, TrafficConfig, TrafficLight, TransitionEvent,
};

// ============================================================================
// Mock Output
// ============================================================================

/// Mock output that records every color it is sent
pub struct MockOutput {
    current_color: Srgb<u8>,
    init_calls: u32,
    color_history: heapless::Vec<Srgb<u8>, 1024>,
}

impl MockOutput {
    pub fn new() -> Self {
        Self {
            current_color: Srgb::new(0, 0, 0),
            init_calls: 0,
            color_history: heapless::Vec::new(),
        }
    }

    pub fn get_last_color(&self) -> Srgb<u8> {
        self.current_color
    }

    pub fn color_history(&self) -> &[Srgb<u8>] {
        &self.color_history
    }

    pub fn init_calls(&self) -> u32 {
        self.init_calls
    }

    pub fn clear_history(&mut self) {
        self.color_history.clear();
    }
}

impl RgbOutput for MockOutput {
    fn init(&mut self) {
        self.init_calls += 1;
    }

    fn set_color(&mut self, color: Srgb<u8>) {
        self.current_color = color;
        let _ = self.color_history.push(color);
    }
}

// ============================================================================
// Mock Diagnostic Sink
// ============================================================================

/// Sink that keeps every event
pub struct RecordingSink {
    events: heapless::Vec<TransitionEvent, 256>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            events: heapless::Vec::new(),
        }
    }

    pub fn events(&self) -> &[TransitionEvent] {
        &self.events
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&mut self, event: &TransitionEvent) {
        let _ = self.events.push(*event);
    }
}

// ============================================================================
// Scripted Touch Sensor
// ============================================================================

/// Touch sensor that reports a touch on selected samples (1-based)
pub struct ScriptedTouch {
    samples: u32,
    touches: &'static [u32],
}

impl ScriptedTouch {
    pub fn new(touches: &'static [u32]) -> Self {
        Self {
            samples: 0,
            touches,
        }
    }

    pub fn samples(&self) -> u32 {
        self.samples
    }
}

impl TouchSensor for ScriptedTouch {
    fn is_touched(&mut self) -> bool {
        self.samples += 1;
        self.touches.contains(&self.samples)
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub type TestLight = TrafficLight<MockOutput, RecordingSink>;

/// Controller with development timings and a recording sink
pub fn development_light() -> TestLight {
    TrafficLight::with_sink(
        MockOutput::new(),
        RecordingSink::new(),
        TrafficConfig::DEVELOPMENT,
    )
}

/// Runs `n` ticks without touch
pub fn run_ticks<S: DiagnosticSink>(light: &mut TrafficLight<MockOutput, S>, n: u32) {
    for _ in 0..n {
        light.tick(false);
    }
}

/// Runs ticks until `done` holds, returning how many were needed
pub fn ticks_until<S, F>(light: &mut TrafficLight<MockOutput, S>, limit: u32, done: F) -> Option<u32>
where
    S: DiagnosticSink,
    F: Fn(&TrafficLight<MockOutput, S>) -> bool,
{
    for n in 1..=limit {
        light.tick(false);
        if done(light) {
            return Some(n);
        }
    }
    None
}
