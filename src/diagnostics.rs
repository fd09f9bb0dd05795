//! Write-only transition reporting.
//!
//! The controller reports every mode change to a [`DiagnosticSink`]. Sinks
//! never feed back into control flow; [`NoopSink`] disables reporting
//! without changing behaviour.

use crate::time::Duration;
use crate::types::Mode;
use heapless::Deque;

/// Kind of mode change being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransitionKind {
    /// A fade from `from` toward `to` has begun.
    Started,

    /// A fade finished and the light is now settled in `to`.
    Settled,

    /// Touch forced an immediate switch to crosswalk.
    TouchOverride,
}

/// A single reported mode change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TransitionEvent {
    /// Time since startup.
    pub uptime: Duration,
    /// What happened.
    pub kind: TransitionKind,
    /// Mode the light was in.
    pub from: Mode,
    /// Mode the light is moving to or has reached.
    pub to: Mode,
}

impl core::fmt::Display for TransitionEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let ms = self.uptime.to_millis();
        match self.kind {
            TransitionKind::Started => {
                write!(f, "{:07} ms: Transitioning from {} to {}", ms, self.from, self.to)
            }
            TransitionKind::Settled => {
                write!(f, "{:07} ms: Settled in {}", ms, self.to)
            }
            TransitionKind::TouchOverride => {
                write!(f, "{:07} ms: Touch override from {} to {}", ms, self.from, self.to)
            }
        }
    }
}

/// Receives transition events from the controller.
pub trait DiagnosticSink {
    /// Records one event. Must not fail and must not block.
    fn record(&mut self, event: &TransitionEvent);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    #[inline]
    fn record(&mut self, _event: &TransitionEvent) {}
}

/// Writes each event as a text line to a [`core::fmt::Write`] target,
/// such as a UART or RTT channel.
#[derive(Debug)]
pub struct FmtSink<W: core::fmt::Write> {
    writer: W,
}

impl<W: core::fmt::Write> FmtSink<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Consumes the sink, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: core::fmt::Write> DiagnosticSink for FmtSink<W> {
    fn record(&mut self, event: &TransitionEvent) {
        // A full or failing console must not stall the light
        let _ = write!(self.writer, "{}\r\n", event);
    }
}

/// Keeps the most recent `N` events, dropping the oldest when full.
#[derive(Debug, Clone, Default)]
pub struct TransitionLog<const N: usize> {
    events: Deque<TransitionEvent, N>,
}

impl<const N: usize> TransitionLog<N> {
    /// Creates an empty log.
    pub const fn new() -> Self {
        Self {
            events: Deque::new(),
        }
    }

    /// Iterates over retained events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TransitionEvent> {
        self.events.iter()
    }

    /// Most recent event.
    pub fn last(&self) -> Option<&TransitionEvent> {
        self.events.back()
    }

    /// Number of retained events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drops all retained events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<const N: usize> DiagnosticSink for TransitionLog<N> {
    fn record(&mut self, event: &TransitionEvent) {
        if self.events.is_full() {
            self.events.pop_front();
        }
        let _ = self.events.push_back(*event);
    }
}

/// Logs each event at info level through `defmt`.
#[cfg(feature = "defmt")]
#[derive(Debug, Clone, Copy, Default)]
pub struct DefmtSink;

#[cfg(feature = "defmt")]
impl DiagnosticSink for DefmtSink {
    fn record(&mut self, event: &TransitionEvent) {
        let ms = event.uptime.to_millis();
        match event.kind {
            TransitionKind::Started => {
                defmt::info!("{=u64} ms: Transitioning from {} to {}", ms, event.from, event.to)
            }
            TransitionKind::Settled => {
                defmt::info!("{=u64} ms: Settled in {}", ms, event.to)
            }
            TransitionKind::TouchOverride => {
                defmt::info!("{=u64} ms: Touch override from {} to {}", ms, event.from, event.to)
            }
        }
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    #[inline]
    fn record(&mut self, event: &TransitionEvent) {
        (**self).record(event);
    }
}
