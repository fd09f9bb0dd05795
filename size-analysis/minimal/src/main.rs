#![no_std]
#![no_main]

use cortex_m_rt::{entry, exception};
use panic_halt as _;
use touch_traffic_light::{
    EventFlag, RgbOutput, Srgb, TouchSensor, TrafficConfig, TrafficLight, TransitionLog, colors,
};

// ============================================================================
// Boundary Flags
// ============================================================================

static TICK: EventFlag = EventFlag::new();
static TOUCH: EventFlag = EventFlag::new();

#[exception]
fn SysTick() {
    TICK.set();
}

// ============================================================================
// Minimal Output Implementation
// ============================================================================

/// Output that only converts to duty cycles, for measuring library overhead
pub struct MinimalOutput;

impl RgbOutput for MinimalOutput {
    fn set_color(&mut self, color: Srgb<u8>) {
        let duties = [
            colors::duty_cycle(color.red, 255, true),
            colors::duty_cycle(color.green, 255, true),
            colors::duty_cycle(color.blue, 255, true),
        ];
        core::hint::black_box(duties);
    }
}

// ============================================================================
// Minimal Touch Implementation
// ============================================================================

pub struct MinimalTouch;

impl TouchSensor for MinimalTouch {
    fn is_touched(&mut self) -> bool {
        TOUCH.take()
    }
}

#[entry]
fn main() -> ! {
    let mut peripherals = cortex_m::Peripherals::take().unwrap();
    // 16 Hz from an 8 MHz core clock
    peripherals.SYST.set_reload(500_000 - 1);
    peripherals.SYST.clear_current();
    peripherals.SYST.enable_interrupt();
    peripherals.SYST.enable_counter();

    let mut light = TrafficLight::with_sink(
        MinimalOutput,
        TransitionLog::<8>::new(),
        TrafficConfig::PRODUCTION,
    );

    light.run(&TICK, &mut MinimalTouch)
}
