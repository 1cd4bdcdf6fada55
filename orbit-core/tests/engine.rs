use std::time::{Duration, Instant};

use orbit_config::CarouselConfig;
use orbit_core::{
    Carousel, CarouselMessage, Effect, Mode, NavKey, PointerId, PointerKind,
    PointerSample,
};
use proptest::prelude::*;

const FRAME: Duration = Duration::from_millis(16);

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

/// Five slides, 480px wide with a 20px gap: one slide of drag is 500px.
fn flick_config() -> CarouselConfig {
    CarouselConfig {
        gap: 20.0,
        peek: 0.0,
        max_slide_width: 480.0,
        ..CarouselConfig::without_breakpoints()
    }
}

fn carousel(t0: Instant) -> Carousel {
    Carousel::new(5, flick_config(), 480.0, 400.0, t0)
}

fn pointer(id: i32, x: f32, t: Instant) -> PointerSample {
    PointerSample {
        id: PointerId(id),
        x,
        y: 200.0,
        kind: PointerKind::Touch,
        button: 0,
        t,
    }
}

/// Tick frames until the engine is idle again. Returns the time reached.
fn run_until_idle(carousel: &mut Carousel, mut now: Instant) -> Instant {
    for _ in 0..500 {
        if carousel.mode() == Mode::Idle {
            break;
        }
        now += FRAME;
        carousel.update(CarouselMessage::Frame(now));
    }
    now
}

#[test]
fn go_to_lands_exactly_on_wrapped_index() {
    let t0 = Instant::now();
    let mut c = carousel(t0);
    c.update(CarouselMessage::GoTo {
        index: 7,
        animate: true,
        t: t0,
    });
    assert_eq!(c.mode(), Mode::Snapping);
    run_until_idle(&mut c, t0);
    assert_eq!(c.index(), 2);
    assert_eq!(c.position(), 2.0);
}

#[test]
fn three_nexts_reach_index_three() {
    let t0 = Instant::now();
    let mut c = carousel(t0);
    c.update(CarouselMessage::Next(t0));
    c.update(CarouselMessage::Next(t0 + ms(5)));
    c.update(CarouselMessage::Next(t0 + ms(10)));
    run_until_idle(&mut c, t0 + ms(10));
    assert_eq!(c.index(), 3);
    assert_eq!(c.active_index(), 3);
}

#[test]
fn index_only_changes_when_snap_completes() {
    let t0 = Instant::now();
    let mut c = carousel(t0);
    c.next(t0);
    let mut now = t0;
    while c.mode() == Mode::Snapping {
        assert_eq!(c.index(), 0);
        now += FRAME;
        c.update(CarouselMessage::Frame(now));
    }
    assert_eq!(c.index(), 1);
}

#[test]
fn prev_wraps_backwards_through_the_seam() {
    let t0 = Instant::now();
    let mut c = carousel(t0);
    c.prev(t0);
    let snap = c.state().motion.snap().copied();
    assert_eq!(snap.map(|s| s.end()), Some(-1.0));
    run_until_idle(&mut c, t0);
    assert_eq!(c.index(), 4);
    assert_eq!(c.position(), 4.0);
}

#[test]
fn flick_left_steps_one_past_nearest() {
    let t0 = Instant::now();
    let mut c = carousel(t0);

    let effects = c.update(CarouselMessage::PointerDown(pointer(1, 600.0, t0)));
    assert!(effects.iter().any(|e| *e == Effect::CapturePointer(PointerId(1))));
    assert_eq!(c.mode(), Mode::Dragging);

    let t1 = t0 + ms(200);
    let effects = c.update(CarouselMessage::PointerMove(pointer(1, 200.0, t1)));
    assert!(effects.needs_render());
    let velocity = c.state().motion.drag().map(|d| d.velocity);
    assert!(velocity.is_some_and(|v| (v - -2.0).abs() < 1e-5));
    assert!((c.position() - 0.8).abs() < 1e-5);
    // Index is untouched mid-drag.
    assert_eq!(c.index(), 0);

    let effects = c.update(CarouselMessage::PointerUp(pointer(1, 200.0, t1)));
    assert!(effects.iter().any(|e| *e == Effect::ReleasePointer(PointerId(1))));
    // round(0.8) - sign(-2.0) = 2
    let target = c.state().motion.snap().map(|s| s.target());
    assert_eq!(target, Some(2));

    run_until_idle(&mut c, t1);
    assert_eq!(c.index(), 2);
    assert_eq!(c.position(), 2.0);
}

#[test]
fn slow_release_settles_on_nearest() {
    let t0 = Instant::now();
    let mut c = carousel(t0);
    c.update(CarouselMessage::PointerDown(pointer(1, 600.0, t0)));
    let t1 = t0 + ms(5_000);
    c.update(CarouselMessage::PointerMove(pointer(1, 200.0, t1)));
    c.update(CarouselMessage::PointerUp(pointer(1, 200.0, t1)));
    run_until_idle(&mut c, t1);
    assert_eq!(c.index(), 1);
}

#[test]
fn rightward_flick_goes_back_across_the_seam() {
    let t0 = Instant::now();
    let mut c = carousel(t0);
    c.update(CarouselMessage::PointerDown(pointer(1, 100.0, t0)));
    let t1 = t0 + ms(100);
    c.update(CarouselMessage::PointerMove(pointer(1, 200.0, t1)));
    // position = wrap(0 - 0.2) = 4.8, velocity = +1 px/ms
    assert!((c.position() - 4.8).abs() < 1e-4);
    c.update(CarouselMessage::PointerUp(pointer(1, 200.0, t1)));
    run_until_idle(&mut c, t1);
    // round(4.8) - 1 = 4
    assert_eq!(c.index(), 4);
}

#[test]
fn cancel_resolves_like_up() {
    let t0 = Instant::now();
    let mut c = carousel(t0);
    c.update(CarouselMessage::PointerDown(pointer(3, 600.0, t0)));
    let t1 = t0 + ms(200);
    c.update(CarouselMessage::PointerMove(pointer(3, 200.0, t1)));
    let effects =
        c.update(CarouselMessage::PointerCancel(pointer(3, 200.0, t1)));
    assert!(effects.iter().any(|e| *e == Effect::ReleasePointer(PointerId(3))));
    run_until_idle(&mut c, t1);
    assert_eq!(c.index(), 2);
}

#[test]
fn mismatched_pointer_is_ignored() {
    let t0 = Instant::now();
    let mut c = carousel(t0);
    c.update(CarouselMessage::PointerDown(pointer(1, 300.0, t0)));
    assert!(
        c.update(CarouselMessage::PointerDown(pointer(2, 100.0, t0)))
            .is_empty()
    );
    assert!(
        c.update(CarouselMessage::PointerUp(pointer(2, 100.0, t0 + ms(50))))
            .is_empty()
    );
    assert_eq!(c.mode(), Mode::Dragging);

    // A move from the other pointer only changes tilt, never the position.
    c.update(CarouselMessage::PointerMove(pointer(2, 0.0, t0 + ms(60))));
    assert_eq!(c.position(), 0.0);
}

#[test]
fn secondary_mouse_button_does_not_drag() {
    let t0 = Instant::now();
    let mut c = carousel(t0);
    let mut sample = pointer(1, 300.0, t0);
    sample.kind = PointerKind::Mouse;
    sample.button = 2;
    c.update(CarouselMessage::PointerDown(sample));
    assert_eq!(c.mode(), Mode::Idle);
}

#[test]
fn pointer_down_interrupts_snap() {
    let t0 = Instant::now();
    let mut c = carousel(t0);
    c.next(t0);
    c.update(CarouselMessage::Frame(t0 + FRAME));
    c.update(CarouselMessage::PointerDown(pointer(1, 300.0, t0 + ms(20))));
    assert_eq!(c.mode(), Mode::Dragging);
    assert_eq!(c.index(), 0);
    c.update(CarouselMessage::PointerUp(pointer(1, 300.0, t0 + ms(30))));
    run_until_idle(&mut c, t0 + ms(30));
    assert!(c.index() < 5);
    assert_eq!(c.position(), c.index() as f32);
}

#[test]
fn navigation_is_ignored_while_dragging() {
    let t0 = Instant::now();
    let mut c = carousel(t0);
    c.update(CarouselMessage::PointerDown(pointer(1, 300.0, t0)));
    assert!(c.update(CarouselMessage::Next(t0)).is_empty());
    assert!(
        c.update(CarouselMessage::GoTo {
            index: 3,
            animate: false,
            t: t0,
        })
        .is_empty()
    );
    assert_eq!(c.mode(), Mode::Dragging);
}

#[test]
fn autoplay_advances_after_interval() {
    let t0 = Instant::now();
    let mut c = carousel(t0);
    let effects = c.update(CarouselMessage::Frame(t0 + ms(2_250)));
    let progress = effects.progress();
    assert!(progress.is_some_and(|p| (p - 0.5).abs() < 1e-4));

    c.update(CarouselMessage::Frame(t0 + ms(4_500)));
    assert_eq!(c.mode(), Mode::Snapping);
    let now = run_until_idle(&mut c, t0 + ms(4_500));
    assert_eq!(c.index(), 1);
    // The cycle restarts at completion.
    assert!(c.progress(now) < 0.01);
}

#[test]
fn hover_pause_preserves_progress() {
    let t0 = Instant::now();
    let mut c = carousel(t0);
    c.update(CarouselMessage::SetHovering {
        hovering: true,
        t: t0 + ms(1_000),
    });
    let frozen = c.progress(t0 + ms(1_000));
    let effects = c.update(CarouselMessage::Frame(t0 + ms(8_000)));
    assert_eq!(effects.progress(), Some(frozen));
    assert_eq!(c.mode(), Mode::Idle);

    c.update(CarouselMessage::SetHovering {
        hovering: false,
        t: t0 + ms(8_000),
    });
    c.update(CarouselMessage::Frame(t0 + ms(11_499)));
    assert_eq!(c.mode(), Mode::Idle);
    c.update(CarouselMessage::Frame(t0 + ms(11_500)));
    assert_eq!(c.mode(), Mode::Snapping);
}

#[test]
fn drag_freezes_autoplay() {
    let t0 = Instant::now();
    let mut c = carousel(t0);
    c.update(CarouselMessage::PointerDown(pointer(1, 300.0, t0 + ms(1_000))));
    assert!(
        c.update(CarouselMessage::Frame(t0 + ms(9_000)))
            .is_empty()
    );
    assert_eq!(c.mode(), Mode::Dragging);
    assert!((c.progress(t0 + ms(9_000)) - 1_000.0 / 4_500.0).abs() < 1e-4);
}

#[test]
fn drag_over_a_snap_keeps_progress_held() {
    let t0 = Instant::now();
    let mut c = carousel(t0);
    let held = 1_000.0 / 4_500.0;
    c.next(t0 + ms(1_000));
    let effects = c.update(CarouselMessage::Frame(t0 + ms(1_100)));
    assert_eq!(c.mode(), Mode::Snapping);
    assert!(effects.progress().is_none_or(|p| (p - held).abs() < 1e-4));
    assert!((c.frame(t0 + ms(1_100)).progress - held).abs() < 1e-4);

    c.update(CarouselMessage::PointerDown(pointer(1, 300.0, t0 + ms(1_200))));
    c.update(CarouselMessage::Frame(t0 + ms(6_000)));
    assert_eq!(c.mode(), Mode::Dragging);
    assert!((c.progress(t0 + ms(6_000)) - held).abs() < 1e-4);

    c.update(CarouselMessage::PointerUp(pointer(1, 300.0, t0 + ms(6_000))));
    let now = run_until_idle(&mut c, t0 + ms(6_000));
    assert!(c.progress(now) < 0.01);
}

#[test]
fn breakpoint_change_keeps_index() {
    let t0 = Instant::now();
    let mut c =
        Carousel::new(5, CarouselConfig::default(), 1300.0, 800.0, t0);
    c.go_to(3, false, t0);
    let before = *c.geometry();

    let effects = c.update(CarouselMessage::Resize {
        width: 700.0,
        height: 800.0,
    });
    assert!(effects.needs_render());
    assert_eq!(c.index(), 3);
    assert_eq!(c.position(), 3.0);
    assert_ne!(c.geometry().gap, before.gap);
    assert_ne!(c.geometry().slide_width, before.slide_width);

    // Host-pushed notifications take over matching.
    let effects = c.update(CarouselMessage::BreakpointChanged {
        index: 3,
        matches: true,
    });
    assert!(effects.needs_render());
    assert_eq!(c.geometry().gap, 12.0);
    assert_eq!(c.index(), 3);

    // Unknown breakpoint indices change nothing.
    assert!(
        c.update(CarouselMessage::BreakpointChanged {
            index: 99,
            matches: true,
        })
        .is_empty()
    );
}

#[test]
fn keyboard_maps_to_navigation_when_enabled() {
    let t0 = Instant::now();
    let mut c = carousel(t0);
    c.update(CarouselMessage::Key {
        key: NavKey::Left,
        t: t0,
    });
    run_until_idle(&mut c, t0);
    assert_eq!(c.index(), 4);

    let config = CarouselConfig {
        keyboard: false,
        ..flick_config()
    };
    let mut c = Carousel::new(5, config, 480.0, 400.0, t0);
    assert!(
        c.update(CarouselMessage::Key {
            key: NavKey::Right,
            t: t0,
        })
        .is_empty()
    );
}

#[test]
fn pointer_move_updates_tilt_without_drag() {
    let t0 = Instant::now();
    let mut c = carousel(t0);
    let effects =
        c.update(CarouselMessage::PointerMove(pointer(1, 480.0, t0)));
    assert!(effects.needs_render());
    let frame = c.frame(t0);
    assert!((frame.tilt.y - 3.0).abs() < 1e-4);
    assert_eq!(frame.tilt.x, 0.0);
    assert_eq!(c.mode(), Mode::Idle);
}

#[test]
fn settled_marker_follows_canonical_index() {
    let t0 = Instant::now();
    let mut c = carousel(t0);
    c.go_to(2, false, t0);
    let frame = c.frame(t0);
    assert_eq!(frame.active_index, 2);
    let settled: Vec<_> = frame
        .slides
        .iter()
        .enumerate()
        .filter_map(|(i, s)| s.settled.then_some(i))
        .collect();
    assert_eq!(settled, vec![2]);

    c.next(t0);
    assert!(c.frame(t0).slides.iter().all(|s| !s.settled));
}

#[test]
fn empty_carousel_is_inert() {
    let t0 = Instant::now();
    let mut c = Carousel::new(0, flick_config(), 480.0, 400.0, t0);
    let messages = [
        CarouselMessage::PointerDown(pointer(1, 10.0, t0)),
        CarouselMessage::PointerMove(pointer(1, 200.0, t0)),
        CarouselMessage::PointerUp(pointer(1, 200.0, t0)),
        CarouselMessage::Frame(t0 + ms(10_000)),
        CarouselMessage::Next(t0),
        CarouselMessage::GoTo {
            index: 3,
            animate: true,
            t: t0,
        },
        CarouselMessage::Resize {
            width: 100.0,
            height: 100.0,
        },
    ];
    for msg in messages {
        assert!(c.update(msg).is_empty());
    }
    assert_eq!(c.index(), 0);
    assert_eq!(c.mode(), Mode::Idle);
}

#[test]
fn teardown_releases_capture_and_stops() {
    let t0 = Instant::now();
    let mut c = carousel(t0);
    c.arm_frame(41);
    c.arm_frame(42);
    c.update(CarouselMessage::PointerDown(pointer(9, 300.0, t0)));

    let teardown = c.teardown();
    assert_eq!(teardown.handle, Some(42));
    assert!(
        teardown
            .effects
            .iter()
            .any(|e| *e == Effect::ReleasePointer(PointerId(9)))
    );
    assert!(!c.wants_frames());
    assert_eq!(c.mode(), Mode::Idle);

    assert!(c.update(CarouselMessage::Frame(t0 + ms(10_000))).is_empty());
    assert!(c.update(CarouselMessage::Next(t0)).is_empty());
    assert_eq!(c.index(), 0);
}

#[derive(Debug, Clone)]
enum Op {
    Down(f32),
    Move(f32),
    Up,
    Cancel,
    Next,
    Prev,
    GoTo(i64, bool),
    Hover(bool),
    Frame,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0.0f32..480.0).prop_map(Op::Down),
        (-2_000.0f32..2_000.0).prop_map(Op::Move),
        Just(Op::Up),
        Just(Op::Cancel),
        Just(Op::Next),
        Just(Op::Prev),
        (-20i64..20, any::<bool>()).prop_map(|(i, a)| Op::GoTo(i, a)),
        any::<bool>().prop_map(Op::Hover),
        Just(Op::Frame),
    ]
}

proptest! {
    #[test]
    fn never_stuck_and_always_in_range(
        ops in proptest::collection::vec((op(), 0u64..400), 1..64),
        n in 1usize..9,
    ) {
        let t0 = Instant::now();
        let mut c = Carousel::new(n, flick_config(), 480.0, 400.0, t0);
        let mut now = t0;
        for (op, dt) in ops {
            now += ms(dt);
            let msg = match op {
                Op::Down(x) => CarouselMessage::PointerDown(pointer(1, x, now)),
                Op::Move(x) => CarouselMessage::PointerMove(pointer(1, x, now)),
                Op::Up => CarouselMessage::PointerUp(pointer(1, 0.0, now)),
                Op::Cancel => {
                    CarouselMessage::PointerCancel(pointer(1, 0.0, now))
                }
                Op::Next => CarouselMessage::Next(now),
                Op::Prev => CarouselMessage::Prev(now),
                Op::GoTo(index, animate) => {
                    CarouselMessage::GoTo { index, animate, t: now }
                }
                Op::Hover(hovering) => {
                    CarouselMessage::SetHovering { hovering, t: now }
                }
                Op::Frame => CarouselMessage::Frame(now),
            };
            c.update(msg);
            prop_assert!(c.index() < n);
            prop_assert!((0.0..n as f32).contains(&c.position()));
            prop_assert!(c.active_index() < n);
        }

        // Every drag and snap has a way out.
        c.update(CarouselMessage::PointerUp(pointer(1, 0.0, now)));
        run_until_idle(&mut c, now);
        prop_assert_eq!(c.mode(), Mode::Idle);
        prop_assert_eq!(c.position(), c.index() as f32);
    }
}
