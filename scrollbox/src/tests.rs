use crate::*;

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;
use std::sync::{Arc, Mutex};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_f64(&mut self, start: f64, end: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        start + (end - start) * unit
    }
}

struct CaptureGuard(Rc<Cell<i32>>);

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        self.0.set(self.0.get() - 1);
    }
}

#[derive(Debug)]
struct MockHost {
    offset: Vec2,
    client: Vec2,
    content: Vec2,
    track: Vec2,
    writes: usize,
    placed: Vec<(Axis, HandleLayout)>,
    shown: [bool; 2],
    dragged: [bool; 2],
    compensation: Vec2,
    thickness: Vec2,
    captures: Rc<Cell<i32>>,
}

impl MockHost {
    fn new(client: Vec2, content: Vec2, track: Vec2) -> Self {
        Self {
            offset: Vec2::ZERO,
            client,
            content,
            track,
            writes: 0,
            placed: Vec::new(),
            shown: [false; 2],
            dragged: [false; 2],
            compensation: Vec2::ZERO,
            thickness: Vec2::ZERO,
            captures: Rc::new(Cell::new(0)),
        }
    }

    /// 100x100 viewport over 400x400 content, 100px tracks.
    fn square() -> Self {
        Self::new(
            Vec2::new(100.0, 100.0),
            Vec2::new(400.0, 400.0),
            Vec2::new(100.0, 100.0),
        )
    }
}

fn idx(axis: Axis) -> usize {
    match axis {
        Axis::X => 0,
        Axis::Y => 1,
    }
}

impl Viewport for MockHost {
    fn scroll_offset(&self) -> Vec2 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: Vec2) {
        self.writes += 1;
        let max = Vec2::new(
            (self.content.x - self.client.x).max(0.0),
            (self.content.y - self.client.y).max(0.0),
        );
        self.offset = offset.clamp_to(max);
    }

    fn client_extent(&self) -> Vec2 {
        self.client
    }

    fn content_extent(&self) -> Vec2 {
        self.content
    }

    fn native_scrollbar_thickness(&self) -> Vec2 {
        self.thickness
    }

    fn set_extent_compensation(&mut self, extra: Vec2) {
        self.compensation = extra;
    }
}

impl Surface for MockHost {
    type Capture = CaptureGuard;

    fn track_extent(&self, axis: Axis) -> f64 {
        self.track.get(axis)
    }

    fn place_handle(&mut self, axis: Axis, layout: HandleLayout) {
        self.placed.push((axis, layout));
    }

    fn capture_pointer(&mut self, _axis: Axis) -> CaptureGuard {
        self.captures.set(self.captures.get() + 1);
        CaptureGuard(Rc::clone(&self.captures))
    }

    fn set_axis_shown(&mut self, axis: Axis, shown: bool) {
        self.shown[idx(axis)] = shown;
    }

    fn set_track_dragged(&mut self, axis: Axis, dragged: bool) {
        self.dragged[idx(axis)] = dragged;
    }
}

fn counting_options(counter: &Arc<Mutex<Vec<ScrollState>>>) -> ScrollBoxOptions {
    let sink = Arc::clone(counter);
    ScrollBoxOptions::default().with_on_viewport_scroll(Some(move |s: &ScrollState| {
        sink.lock().unwrap().push(*s);
    }))
}

fn mounted(options: ScrollBoxOptions) -> ScrollBox<MockHost> {
    ScrollBox::with_host(options, MockHost::square(), 0)
}

#[test]
fn mount_computes_bounds_and_shows_overflowing_axes() {
    let sb = mounted(ScrollBoxOptions::default());
    assert!(sb.is_mounted());
    assert_eq!(sb.scroll_max(), Vec2::new(300.0, 300.0));
    let host = sb.host().unwrap();
    assert_eq!(host.shown, [true, true]);
    assert_eq!(sb.handle(Axis::Y).extent, 25.0);
    assert_eq!(sb.handle(Axis::Y).track_max, 75.0);
}

#[test]
fn scroll_to_clamps_out_of_range_requests() {
    let mut sb = mounted(ScrollBoxOptions::default());
    let mut rng = Lcg::new(7);
    for i in 0..200u64 {
        let x = rng.gen_range_f64(-5_000.0, 5_000.0);
        let y = rng.gen_range_f64(-5_000.0, 5_000.0);
        sb.scroll_to(ScrollRequest::new(x, y), i);
        let cur = sb.current();
        let max = sb.scroll_max();
        assert!((0.0..=max.x).contains(&cur.x), "x={x} -> {cur:?}");
        assert!((0.0..=max.y).contains(&cur.y), "y={y} -> {cur:?}");
        assert_eq!(cur, sb.target());
        assert_eq!(cur, cur.round());
    }
}

#[test]
fn clamped_target_places_handle_at_track_end() {
    let mut host = MockHost::square();
    // handle = track / 4, so track_max = 3/4 * track = 80.
    host.track = Vec2::new(320.0 / 3.0, 320.0 / 3.0);
    let mut sb = ScrollBox::with_host(ScrollBoxOptions::default(), host, 0);
    assert_eq!(sb.scroll_max().y, 300.0);

    sb.scroll_to(ScrollRequest::y(1_000.0), 0);
    assert_eq!(sb.target().y, 300.0);
    assert_eq!(sb.current().y, 300.0);
    let handle = sb.handle(Axis::Y);
    assert!((handle.track_max - 80.0).abs() < 1e-9);
    assert!((handle.position - 80.0).abs() < 1e-9);
}

#[test]
fn partial_and_non_finite_requests_leave_axis_unchanged() {
    let mut sb = mounted(ScrollBoxOptions::default());
    sb.scroll_to(ScrollRequest::new(40.0, 60.0), 0);
    sb.scroll_to(ScrollRequest::x(10.0), 1);
    assert_eq!(sb.current(), Vec2::new(10.0, 60.0));
    sb.scroll_to(ScrollRequest::new(f64::NAN, f64::INFINITY), 2);
    assert_eq!(sb.current(), Vec2::new(10.0, 60.0));
    sb.scroll_by(ScrollRequest::new(f64::NAN, 5.0), 3);
    assert_eq!(sb.current(), Vec2::new(10.0, 65.0));
}

#[test]
fn repeated_identical_request_does_not_notify() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut sb = mounted(counting_options(&calls));
    sb.scroll_to(ScrollRequest::new(50.0, 50.0), 0);
    let after_first = calls.lock().unwrap().len();

    sb.scroll_to(ScrollRequest::new(50.0, 50.0), 1);
    sb.reconcile(2);
    assert_eq!(calls.lock().unwrap().len(), after_first);
}

#[test]
fn notifications_carry_current_state() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut sb = mounted(counting_options(&calls));
    sb.scroll_to(ScrollRequest::new(120.0, 30.0), 0);
    let last = *calls.lock().unwrap().last().unwrap();
    assert_eq!(last.current, Vec2::new(120.0, 30.0));
    assert_eq!(last.scroll_max, Vec2::new(300.0, 300.0));
    assert!(!last.animating);
}

#[test]
fn animation_eases_towards_target_and_settles() {
    let mut sb = mounted(ScrollBoxOptions::default());
    sb.scroll_to(ScrollRequest::y(300.0).with_duration_ms(100), 0);
    assert!(sb.is_animating());
    assert_eq!(sb.current().y, 0.0);

    let mut last = 0.0;
    for now in [10, 25, 50, 75, 99] {
        assert_eq!(sb.frame(now), FrameStatus::Rearm);
        let y = sb.current().y;
        assert!(y >= last && y <= 300.0);
        last = y;
    }
    // Circ-out covers most of the distance early.
    assert!(last > 250.0);

    sb.frame(100);
    assert!(!sb.is_animating());
    assert_eq!(sb.current().y, 300.0);
    assert_eq!(sb.host().unwrap().offset.y, 300.0);
}

#[test]
fn both_axes_share_the_eased_ratio() {
    let mut sb = mounted(ScrollBoxOptions::default().with_easing(Easing::Linear));
    sb.scroll_to(ScrollRequest::new(100.0, 200.0).with_duration_ms(100), 0);
    sb.frame(50);
    assert_eq!(sb.current(), Vec2::new(50.0, 100.0));
}

#[test]
fn retargeting_rebases_from_current_offset() {
    let mut sb = mounted(ScrollBoxOptions::default().with_easing(Easing::Linear));
    sb.scroll_to(ScrollRequest::y(200.0).with_duration_ms(100), 0);
    sb.frame(50);
    let mid = sb.current().y;
    assert_eq!(mid, 100.0);

    sb.scroll_to(ScrollRequest::y(0.0).with_duration_ms(100), 50);
    let state = sb.state();
    assert_eq!(state.previous.y, mid);
    assert_eq!(state.current.y, mid);
    assert_eq!(state.target.y, 0.0);

    sb.frame(60);
    let y = sb.current().y;
    assert!(y < mid && y > 80.0, "no jump expected, got {y}");
}

#[test]
fn quiet_request_is_silent_until_it_settles() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut sb = mounted(counting_options(&calls));
    let base = calls.lock().unwrap().len();

    sb.scroll_to(
        ScrollRequest::y(200.0).with_duration_ms(100).with_quiet(true),
        0,
    );
    for now in [20, 40, 60, 80, 100] {
        sb.frame(now);
    }
    assert_eq!(sb.current().y, 200.0);
    assert!(sb.is_quiet());
    assert_eq!(calls.lock().unwrap().len(), base);

    // Steady frame clears the flag.
    sb.frame(116);
    assert!(!sb.is_quiet());

    sb.scroll_to(ScrollRequest::y(10.0), 120);
    assert_eq!(calls.lock().unwrap().len(), base + 1);
}

#[test]
fn external_scroll_is_adopted_without_animation() {
    let mut sb = mounted(ScrollBoxOptions::default());
    sb.scroll_to(ScrollRequest::new(10.0, 10.0), 0);
    sb.scroll_to(ScrollRequest::new(200.0, 200.0).with_duration_ms(500), 1);

    sb.host_mut().unwrap().offset = Vec2::new(50.0, 50.0);
    sb.frame(16);

    assert!(!sb.is_animating());
    assert_eq!(sb.current(), Vec2::new(50.0, 50.0));
    assert_eq!(sb.target(), Vec2::new(50.0, 50.0));
}

#[test]
fn sub_pixel_viewport_offset_is_not_drift() {
    let mut sb = mounted(ScrollBoxOptions::default().with_easing(Easing::Linear));
    sb.scroll_to(ScrollRequest::y(10.0), 0);
    sb.scroll_to(ScrollRequest::y(110.0).with_duration_ms(100), 0);
    sb.host_mut().unwrap().offset.y = 10.4;
    sb.frame(50);
    assert!(sb.is_animating());
    assert_eq!(sb.current().y, 60.0);
}

#[test]
fn shrinking_content_clamps_target() {
    let mut sb = mounted(ScrollBoxOptions::default());
    sb.scroll_to(ScrollRequest::y(300.0), 0);
    {
        let host = sb.host_mut().unwrap();
        host.content.y = 250.0;
        // Browsers clamp the offset themselves when content shrinks.
        host.offset.y = 150.0;
    }
    sb.frame(16);
    assert_eq!(sb.scroll_max().y, 150.0);
    assert_eq!(sb.current().y, 150.0);
    assert_eq!(sb.target().y, 150.0);
}

#[test]
fn inactive_axis_is_pinned_to_zero() {
    let mut sb = mounted(ScrollBoxOptions::default().with_axes(Axes::Y));
    assert_eq!(sb.scroll_max().x, 0.0);
    sb.scroll_to(ScrollRequest::new(200.0, 200.0), 0);
    assert_eq!(sb.current(), Vec2::new(0.0, 200.0));
    assert_eq!(sb.host().unwrap().shown, [false, true]);
    assert_eq!(sb.handle(Axis::X).extent, 100.0);
    assert!(!sb.begin_drag(Axis::X, 10.0));
    assert!(!sb.fast_track(Axis::X, 90.0, 0));
}

#[test]
fn round_trip_mapping_recovers_offsets() {
    let mut rng = Lcg::new(42);
    for _ in 0..500 {
        let scroll_max = rng.gen_range_f64(1.0, 100_000.0).round();
        let track_max = rng.gen_range_f64(1.0, 2_000.0);
        let offset = rng.gen_range_f64(0.0, scroll_max).round();
        let pos = mapper::offset_to_track(offset, scroll_max, track_max);
        let back = mapper::track_to_offset(pos, scroll_max, track_max);
        assert!((back.round() - offset).abs() < 1e-6, "{offset} -> {pos} -> {back}");
    }
}

#[test]
fn drag_tracks_pointer_without_animation() {
    let mut sb = mounted(ScrollBoxOptions::default());
    let track_max = sb.handle(Axis::Y).track_max;

    // Grab the handle 5px from its start.
    assert!(sb.begin_drag(Axis::Y, 5.0));
    assert_eq!(sb.active_handle(), Some(Axis::Y));
    assert!(sb.host().unwrap().dragged[1]);
    assert_eq!(sb.host().unwrap().captures.get(), 1);

    for step in 0..=10 {
        let pos = track_max * step as f64 / 10.0;
        assert!(sb.drag_to(pos + 5.0, step));
        assert!(!sb.is_animating());
    }
    assert_eq!(sb.current().y, 300.0);
    assert_eq!(sb.current().x, 0.0);

    assert!(sb.end_drag());
    assert_eq!(sb.active_handle(), None);
    assert!(!sb.host().unwrap().dragged[1]);
    assert_eq!(sb.host().unwrap().captures.get(), 0);
    assert!(!sb.end_drag());
    assert!(!sb.drag_to(10.0, 20));
}

#[test]
fn drag_keeps_grip_offset() {
    let mut sb = mounted(ScrollBoxOptions::default());
    sb.scroll_to(ScrollRequest::y(150.0), 0);
    let start = sb.handle(Axis::Y).position;
    assert_eq!(start, 37.5);

    sb.begin_drag(Axis::Y, start + 10.0);
    // Not moving the pointer keeps the offset.
    sb.drag_to(start + 10.0, 1);
    assert_eq!(sb.current().y, 150.0);
    sb.drag_to(start + 10.0 + 7.5, 2);
    assert_eq!(sb.current().y, 180.0);
    sb.end_drag();
}

#[test]
fn drag_start_ends_fast_track() {
    let mut sb = mounted(ScrollBoxOptions::default().with_fast_track(FastTrack::Paging));
    assert!(sb.fast_track(Axis::Y, 90.0, 0));
    sb.frame(100);
    assert!(sb.is_fast_tracking());
    let here = sb.current();

    assert!(sb.pointer_down(Axis::Y, PointerTarget::Handle, 40.0, 120));
    assert!(!sb.is_fast_tracking());
    assert!(!sb.is_animating());
    assert_eq!(sb.target(), here);

    // Track clicks are ignored while dragging.
    assert!(!sb.fast_track(Axis::Y, 90.0, 130));
    sb.end_drag();
}

#[test]
fn paging_moves_target_by_one_client_extent() {
    let mut sb = mounted(ScrollBoxOptions::default().with_fast_track(FastTrack::Paging));
    sb.scroll_to(ScrollRequest::y(20.0), 0);
    sb.scroll_to(ScrollRequest::y(60.0).with_duration_ms(200), 0);
    sb.frame(50);
    assert_ne!(sb.current().y, sb.target().y);

    // Pointer after the handle.
    assert!(sb.pointer_down(Axis::Y, PointerTarget::Track, 95.0, 50));
    assert_eq!(sb.target().y, 160.0);
    assert!(sb.is_fast_tracking());
    assert!(sb.is_animating());

    for now in (66..=600).step_by(16) {
        sb.frame(now);
    }
    assert_eq!(sb.current().y, 160.0);
    // Once settled, a steady frame ends the fast-track.
    assert!(!sb.is_fast_tracking());

    // Pointer before the handle pages back.
    sb.fast_track(Axis::Y, 0.0, 700);
    assert_eq!(sb.target().y, 60.0);
}

#[test]
fn rewind_centers_viewport_on_click() {
    let mut sb = mounted(ScrollBoxOptions::default().with_fast_track_duration_ms(0));
    assert!(sb.fast_track(Axis::Y, 50.0, 0));
    // 50/100 * 400 - 100/2
    assert_eq!(sb.current().y, 150.0);
    sb.fast_track(Axis::Y, 0.0, 1);
    assert_eq!(sb.current().y, 0.0);
    sb.fast_track(Axis::Y, 100.0, 2);
    assert_eq!(sb.current().y, 300.0);
}

#[test]
fn fast_track_none_is_a_no_op() {
    let mut sb = mounted(ScrollBoxOptions::default().with_fast_track(FastTrack::None));
    assert!(!sb.fast_track(Axis::Y, 80.0, 0));
    assert_eq!(sb.target().y, 0.0);
    assert!(!sb.is_fast_tracking());
}

#[test]
fn disabled_blocks_pointer_input_but_not_api() {
    let mut sb = mounted(ScrollBoxOptions::default().with_disabled(true));
    assert!(!sb.begin_drag(Axis::Y, 1.0));
    assert!(!sb.fast_track(Axis::Y, 80.0, 0));
    assert!(sb.scroll_to(ScrollRequest::y(42.0), 0));
    assert_eq!(sb.current().y, 42.0);
}

#[test]
fn disabling_mid_drag_releases_capture() {
    let mut sb = mounted(ScrollBoxOptions::default());
    sb.begin_drag(Axis::X, 3.0);
    let captures = Rc::clone(&sb.host().unwrap().captures);
    assert_eq!(captures.get(), 1);
    sb.update_options(|o| o.disabled = true, 5);
    assert_eq!(captures.get(), 0);
    assert!(!sb.is_dragging_handle());
}

#[test]
fn unmount_stops_frames_and_releases_drag() {
    let mut sb = mounted(ScrollBoxOptions::default());
    let liveness = sb.liveness();
    assert!(liveness.is_alive());

    sb.begin_drag(Axis::Y, 2.0);
    sb.scroll_to(ScrollRequest::y(100.0).with_duration_ms(100), 0);
    let host = sb.unmount().unwrap();
    assert_eq!(host.captures.get(), 0);
    assert!(!host.dragged[1]);

    assert!(!liveness.is_alive());
    assert_eq!(sb.frame(16), FrameStatus::Stop);
    assert!(!sb.scroll_to(ScrollRequest::y(10.0), 20));
    assert!(!sb.drag_to(50.0, 20));
    assert!(!sb.reconcile(20));
}

#[test]
fn dropping_the_box_clears_liveness() {
    let sb = mounted(ScrollBoxOptions::default());
    let liveness = sb.liveness();
    drop(sb);
    assert!(!liveness.is_alive());
}

#[test]
fn remount_starts_from_zero_and_adopts_viewport() {
    let mut sb = mounted(ScrollBoxOptions::default());
    sb.scroll_to(ScrollRequest::y(120.0), 0);
    let old = sb.liveness();
    let mut host = sb.unmount().unwrap();
    host.offset = Vec2::new(0.0, 80.0);

    sb.mount(host, 10);
    assert!(!old.is_alive());
    assert!(sb.liveness().is_alive());
    assert_eq!(sb.current().y, 80.0);
    assert_eq!(sb.target().y, 80.0);
}

#[test]
fn steady_frames_skip_handle_layout() {
    let mut sb = mounted(ScrollBoxOptions::default());
    sb.scroll_to(ScrollRequest::y(30.0), 0);
    let placed = sb.host().unwrap().placed.len();
    let writes = sb.host().unwrap().writes;
    for now in 1..10 {
        sb.frame(now * 16);
    }
    assert_eq!(sb.host().unwrap().placed.len(), placed);
    // The viewport is still written every frame while under control.
    assert_eq!(sb.host().unwrap().writes, writes + 9);

    // A resized track is laid out again.
    sb.host_mut().unwrap().track.y = 200.0;
    sb.frame(200);
    assert_eq!(sb.host().unwrap().placed.len(), placed + 2);
    assert_eq!(sb.handle(Axis::Y).extent, 50.0);
}

#[test]
fn native_mode_skips_handles_and_compensates_outset() {
    let mut host = MockHost::square();
    host.thickness = Vec2::new(15.0, 12.0);
    let options = ScrollBoxOptions::default().with_native(true).with_outset(true);
    let mut sb = ScrollBox::with_host(options, host, 0);
    sb.scroll_to(ScrollRequest::y(100.0), 0);

    let host = sb.host().unwrap();
    assert!(host.placed.is_empty());
    assert_eq!(host.compensation, Vec2::new(15.0, 12.0));
    assert_eq!(sb.state().handle_extent, Vec2::ZERO);
    assert!(!sb.begin_drag(Axis::Y, 0.0));
    assert!(!sb.fast_track(Axis::Y, 90.0, 1));
}

#[test]
fn custom_easing_is_used() {
    let called = Arc::new(Mutex::new(0usize));
    let sink = Arc::clone(&called);
    let easing = Easing::custom(move |t| {
        *sink.lock().unwrap() += 1;
        t * t
    });
    let mut sb = mounted(ScrollBoxOptions::default().with_easing(easing));
    sb.scroll_to(ScrollRequest::x(200.0).with_duration_ms(100), 0);
    sb.frame(50);
    assert_eq!(sb.current().x, 50.0);
    assert!(*called.lock().unwrap() >= 2);
}

#[test]
fn scroll_to_end_and_start() {
    let mut sb = mounted(ScrollBoxOptions::default());
    sb.scroll_to_end(0);
    assert_eq!(sb.current(), Vec2::new(300.0, 300.0));
    sb.scroll_to_start(1);
    assert_eq!(sb.current(), Vec2::ZERO);
}

#[test]
fn parse_config_values() {
    assert_eq!("xy".parse::<Axes>(), Ok(Axes::XY));
    assert_eq!(" Y ".parse::<Axes>(), Ok(Axes::Y));
    assert_eq!("paging".parse::<FastTrack>(), Ok(FastTrack::Paging));
    assert_eq!("none".parse::<FastTrack>(), Ok(FastTrack::None));
    let err = "diagonal".parse::<Axes>().unwrap_err();
    assert_eq!(err.to_string(), "unrecognized axes `diagonal`");
    assert_eq!(Axes::X.to_string(), "x");
}

#[test]
fn unmounted_box_ignores_requests() {
    let mut sb: ScrollBox<MockHost> = ScrollBox::new(ScrollBoxOptions::default());
    assert!(!sb.is_mounted());
    assert!(!sb.scroll_to(ScrollRequest::y(10.0), 0));
    assert!(!sb.fast_track(Axis::Y, 10.0, 0));
    assert!(!sb.begin_drag(Axis::Y, 10.0));
    assert_eq!(sb.frame(0), FrameStatus::Stop);
    assert!(!sb.liveness().is_alive());
    assert_eq!(sb.state(), ScrollState::default());
}
