//! Integration tests for Fade

use palette::Srgb;
use proptest::prelude::*;
use touch_traffic_light::colors::{CROSSWALK, GO, OFF, STOP, WARNING};
use touch_traffic_light::{Duration, Fade, ticks_for};

fn gray(level: u8) -> Srgb<u8> {
    Srgb::new(level, level, level)
}

/// Steps a fade to completion, checking every intermediate value stays
/// between the previous value and the target.
fn run_checked(from: Srgb<u8>, to: Srgb<u8>, ticks: u32) -> Srgb<u8> {
    let mut fade = Fade::new(from, to, ticks);
    let mut prev = from;

    for _ in 0..ticks.max(1) {
        let next = fade.step();
        for (p, n, t) in [
            (prev.red, next.red, to.red),
            (prev.green, next.green, to.green),
            (prev.blue, next.blue, to.blue),
        ] {
            assert!(
                (p <= n && n <= t) || (t <= n && n <= p),
                "channel moved from {} to {} heading for {}",
                p,
                n,
                t
            );
        }
        prev = next;
    }

    assert!(fade.is_complete());
    prev
}

#[test]
fn every_8bit_pair_lands_exactly() {
    for ticks in [1u32, 2, 3, 5, 16, 17, 64] {
        for start in 0..=255u8 {
            for end in 0..=255u8 {
                let last = run_checked(gray(start), gray(end), ticks);
                assert_eq!(last, gray(end), "{} -> {} over {} ticks", start, end, ticks);
            }
        }
    }
}

#[test]
fn mode_to_mode_fades_land_on_canonical_colors() {
    let ticks = ticks_for(Duration::secs(1), Duration::micros(62_500));
    assert_eq!(ticks, 16);

    for (from, to) in [
        (STOP, GO),
        (GO, WARNING),
        (WARNING, STOP),
        (CROSSWALK, GO),
        (OFF, GO),
    ] {
        assert_eq!(run_checked(from, to, ticks), to);
    }
}

#[test]
fn fade_longer_than_channel_range_holds_then_moves() {
    // 1000 steps for a 10-level change: most steps are zero
    let mut fade = Fade::new(gray(0), gray(10), 1000);
    let mut changes = 0;
    let mut prev = gray(0);
    for _ in 0..1000 {
        let next = fade.step();
        if next != prev {
            changes += 1;
        }
        prev = next;
    }
    assert_eq!(prev, gray(10));
    assert_eq!(changes, 10);
}

#[test]
fn identical_endpoints_never_change() {
    let mut fade = Fade::new(WARNING, WARNING, 16);
    for _ in 0..16 {
        assert_eq!(fade.step(), WARNING);
    }
}

proptest! {
    /// Any start, any target, any length: the last step is the target.
    #[test]
    fn lands_on_target_for_any_length(
        from in any::<(u8, u8, u8)>(),
        to in any::<(u8, u8, u8)>(),
        ticks in 1u32..=5_000,
    ) {
        let from = Srgb::new(from.0, from.1, from.2);
        let to = Srgb::new(to.0, to.1, to.2);
        prop_assert_eq!(run_checked(from, to, ticks), to);
    }

    /// Remaining ticks count down by one per step and stop at zero.
    #[test]
    fn remaining_counts_down(ticks in 1u32..=200, extra in 0u32..5) {
        let mut fade = Fade::new(OFF, CROSSWALK, ticks);
        for expected in (0..ticks).rev() {
            fade.step();
            prop_assert_eq!(fade.remaining(), expected);
        }
        for _ in 0..extra {
            prop_assert_eq!(fade.step(), CROSSWALK);
            prop_assert_eq!(fade.remaining(), 0);
        }
    }
}
