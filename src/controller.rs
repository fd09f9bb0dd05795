//! Tick-driven traffic light controller.
//!
//! Provides [`TrafficLight`], which owns the current and next modes, the
//! timing counters, the active fade and the crosswalk blink, and drives an
//! [`RgbOutput`] once per tick. Also defines the [`RgbOutput`] and
//! [`TouchSensor`] traits for hardware abstraction.

use crate::blink::BlinkCycle;
use crate::colors;
use crate::config::TrafficConfig;
use crate::diagnostics::{DiagnosticSink, NoopSink, TransitionEvent, TransitionKind};
use crate::fade::Fade;
use crate::signal::{EventFlag, TickSource};
use crate::timing::{Activity, TimingAccumulator};
use crate::types::{BlinkPhase, ColorState, Mode, Status};
use palette::Srgb;

/// Trait for abstracting the RGB output hardware.
///
/// Implement this for your LED hardware (PWM channels, GPIO pins, a smart
/// LED driver) so the controller can drive it.
pub trait RgbOutput {
    /// Prepares the device. Called once, before the first color is set.
    fn init(&mut self) {}

    /// Sets the output to the given 8-bit intensities.
    ///
    /// Handle any hardware errors internally - this method cannot fail.
    fn set_color(&mut self, color: Srgb<u8>);
}

/// Trait for abstracting the pedestrian touch input.
pub trait TouchSensor {
    /// Returns true if a (debounced) touch is asserted right now.
    fn is_touched(&mut self) -> bool;
}

impl TouchSensor for &EventFlag {
    #[inline]
    fn is_touched(&mut self) -> bool {
        self.take()
    }
}

impl<T: TouchSensor + ?Sized> TouchSensor for &mut T {
    #[inline]
    fn is_touched(&mut self) -> bool {
        (**self).is_touched()
    }
}

/// Controls a single three-color light through the STOP, GO, WARNING cycle,
/// with touch-triggered CROSSWALK.
///
/// Call [`tick`](TrafficLight::tick) once per timer period, or let
/// [`poll`](TrafficLight::poll) pull ticks and touches from their sources.
///
/// # Type Parameters
/// * `O` - Output implementation type
/// * `S` - Diagnostic sink type
pub struct TrafficLight<O: RgbOutput, S: DiagnosticSink = NoopSink> {
    output: O,
    sink: S,
    config: TrafficConfig,
    current: ColorState,
    next: ColorState,
    timing: TimingAccumulator,
    fade: Option<Fade>,
    blink: BlinkCycle,
    rendered: Srgb<u8>,
}

impl<O: RgbOutput> TrafficLight<O, NoopSink> {
    /// Creates a controller with diagnostics disabled.
    pub fn new(output: O, config: TrafficConfig) -> Self {
        Self::with_sink(output, NoopSink, config)
    }
}

impl<O: RgbOutput, S: DiagnosticSink> TrafficLight<O, S> {
    /// Creates a controller settled in STOP, heading for GO.
    ///
    /// Initializes the output and renders the STOP color.
    pub fn with_sink(mut output: O, sink: S, config: TrafficConfig) -> Self {
        output.init();
        output.set_color(colors::STOP);

        Self {
            output,
            sink,
            config,
            current: ColorState::of(Mode::Stop),
            next: ColorState::of(Mode::Go),
            timing: TimingAccumulator::new(config.tick_period()),
            fade: None,
            blink: BlinkCycle::new(config.blink_on(), config.blink_off()),
            rendered: colors::STOP,
        }
    }

    /// Runs one polling-loop iteration.
    ///
    /// If a tick is pending, samples the touch sensor and advances the
    /// state machine. Returns true if a tick was processed.
    pub fn poll<T, P>(&mut self, ticks: &T, touch: &mut P) -> bool
    where
        T: TickSource + ?Sized,
        P: TouchSensor + ?Sized,
    {
        if !ticks.take_tick() {
            return false;
        }

        let touched = touch.is_touched();
        self.tick(touched);
        true
    }

    /// Polls forever.
    pub fn run<T, P>(&mut self, ticks: &T, touch: &mut P) -> !
    where
        T: TickSource + ?Sized,
        P: TouchSensor + ?Sized,
    {
        loop {
            if !self.poll(ticks, touch) {
                core::hint::spin_loop();
            }
        }
    }

    /// Advances the state machine by one tick.
    ///
    /// `touched` is the touch sensor sample for this tick. Touch always
    /// wins over timing; it is ignored while already in crosswalk.
    pub fn tick(&mut self, touched: bool) {
        self.timing.on_tick(self.activity());

        if touched && self.current.mode() != Mode::Crosswalk {
            self.enter_crosswalk();
            return;
        }

        if self.fade.is_some() {
            self.advance_transition();
            return;
        }

        if self.timing.elapsed_stable() >= self.config.dwell(self.current.mode()) {
            self.begin_transition();
        } else if self.current.mode() == Mode::Crosswalk
            && self.blink.poll(&mut self.timing).is_some()
        {
            let color = self.blink.color();
            self.render(color);
        }
    }

    /// Re-initializes to STOP heading for GO, as after a reset.
    pub fn restart(&mut self) {
        self.current = ColorState::of(Mode::Stop);
        self.next = ColorState::of(Mode::Go);
        self.timing = TimingAccumulator::new(self.config.tick_period());
        self.fade = None;
        self.blink.restart(&mut self.timing);
        self.render(colors::STOP);
    }

    /// Hard cut to crosswalk, abandoning any fade in progress.
    fn enter_crosswalk(&mut self) {
        let from = self.current.mode();

        self.fade = None;
        self.current = ColorState::of(Mode::Crosswalk);
        self.next = ColorState::of(Mode::Crosswalk.successor());
        self.timing.reset_phase_counters();
        self.blink.restart(&mut self.timing);
        self.render(colors::CROSSWALK);

        self.report(TransitionKind::TouchOverride, from, Mode::Crosswalk);
    }

    /// Starts fading toward `next` from the rendered color, which is dark
    /// when crosswalk's dwell ends during an off phase.
    fn begin_transition(&mut self) {
        self.timing.reset_stable();
        self.timing.reset_transitioning();

        self.fade = Some(Fade::new(
            self.rendered,
            self.next.color(),
            self.config.transition_ticks(),
        ));

        self.report(TransitionKind::Started, self.current.mode(), self.next.mode());
    }

    fn advance_transition(&mut self) {
        let Some(fade) = self.fade.as_mut() else {
            return;
        };
        let color = fade.step();

        if self.timing.elapsed_transitioning() >= self.config.transition() {
            self.commit(color);
        } else {
            self.render(color);
        }
    }

    fn commit(&mut self, color: Srgb<u8>) {
        debug_assert_eq!(color, self.next.color());

        let from = self.current.mode();
        self.current = self.next;
        self.next = ColorState::of(self.current.mode().successor());
        self.fade = None;
        self.timing.reset_transitioning();
        self.timing.reset_stable();
        self.render(color);

        debug_assert_ne!(self.current.mode(), self.next.mode());
        self.report(TransitionKind::Settled, from, self.current.mode());
    }

    fn activity(&self) -> Activity {
        match (self.fade, self.current.mode()) {
            (Some(_), _) => Activity::Transitioning,
            (None, Mode::Crosswalk) => Activity::Blinking(self.blink.phase()),
            (None, _) => Activity::Stable,
        }
    }

    /// Updates the output only if the color changed.
    fn render(&mut self, color: Srgb<u8>) {
        if color != self.rendered {
            self.output.set_color(color);
            self.rendered = color;
        }
    }

    fn report(&mut self, kind: TransitionKind, from: Mode, to: Mode) {
        self.sink.record(&TransitionEvent {
            uptime: self.timing.uptime(),
            kind,
            from,
            to,
        });
    }

    /// The mode the light is settled in, or fading away from.
    pub fn current(&self) -> ColorState {
        self.current
    }

    /// The mode the light will fade to next.
    pub fn next(&self) -> ColorState {
        self.next
    }

    /// Whether the light is settled or fading.
    pub fn status(&self) -> Status {
        self.activity().status()
    }

    /// Blink phase, while settled in crosswalk.
    pub fn blink_phase(&self) -> Option<BlinkPhase> {
        match self.activity() {
            Activity::Blinking(phase) => Some(phase),
            _ => None,
        }
    }

    /// The fade in progress, if any.
    pub fn fade(&self) -> Option<&Fade> {
        self.fade.as_ref()
    }

    /// The color last sent to the output.
    pub fn rendered(&self) -> Srgb<u8> {
        self.rendered
    }

    /// Tick counters.
    pub fn timing(&self) -> &TimingAccumulator {
        &self.timing
    }

    /// Timing configuration.
    pub fn config(&self) -> &TrafficConfig {
        &self.config
    }

    /// The output device.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Mutable access to the output device.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// The diagnostic sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the controller, returning the output and sink.
    pub fn into_parts(self) -> (O, S) {
        (self.output, self.sink)
    }
}
