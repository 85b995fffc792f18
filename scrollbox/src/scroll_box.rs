use core::fmt;
use core::mem;

use crate::mapper::{self, HandleLayout};
use crate::state::{Animation, Gesture, Grip, Motion};
use crate::{
    Axis, FastTrack, FrameStatus, Host, Liveness, PointerTarget, ScrollBoxOptions, ScrollState,
    Vec2,
};

/// A scroll request. Absent (or non-finite) axis values leave that axis unchanged.
///
/// For [`ScrollBox::scroll_to`] the values are absolute offsets; for [`ScrollBox::scroll_by`]
/// they are deltas from the current offset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollRequest {
    pub x: Option<f64>,
    pub y: Option<f64>,
    /// Animation length; `0` applies the request immediately.
    pub duration_ms: u64,
    /// Suppresses `on_viewport_scroll` until the request settles.
    pub quiet: bool,
}

impl ScrollRequest {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn x(x: f64) -> Self {
        Self {
            x: Some(x),
            ..Self::default()
        }
    }

    pub fn y(y: f64) -> Self {
        Self {
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn axis(axis: Axis, value: f64) -> Self {
        match axis {
            Axis::X => Self::x(value),
            Axis::Y => Self::y(value),
        }
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

fn finite(v: Option<f64>) -> Option<f64> {
    v.filter(|v| v.is_finite())
}

/// A headless scrollbar engine.
///
/// The box owns its target/previous/current offsets and reconciles them against a host
/// [`crate::Viewport`], which stays the ground truth: any offset change the box did not write is
/// adopted on the next [`ScrollBox::reconcile`].
///
/// Every input path (programmatic requests, wheel/keys, handle drags, track clicks) ends in
/// [`ScrollBox::scroll_to`]. Adapters call [`ScrollBox::frame`] once per display refresh.
///
/// For input translation and a frame loop, see the `scrollbox-adapter` crate.
pub struct ScrollBox<H: Host> {
    options: ScrollBoxOptions,
    host: Option<H>,
    liveness: Liveness,

    target: Vec2,
    previous: Vec2,
    current: Vec2,
    scroll_max: Vec2,
    track_extent: Vec2,
    handle_x: HandleLayout,
    handle_y: HandleLayout,

    motion: Motion,
    gesture: Gesture<H::Capture>,
    quiet: bool,
}

impl<H: Host> ScrollBox<H> {
    /// Creates an unmounted scroll box. Call [`ScrollBox::mount`] once the host is available.
    pub fn new(options: ScrollBoxOptions) -> Self {
        sbdebug!(
            axes = ?options.axes,
            fast_track = ?options.fast_track,
            native = options.native,
            "ScrollBox::new"
        );
        Self {
            options,
            host: None,
            liveness: Liveness::new(false),
            target: Vec2::ZERO,
            previous: Vec2::ZERO,
            current: Vec2::ZERO,
            scroll_max: Vec2::ZERO,
            track_extent: Vec2::ZERO,
            handle_x: HandleLayout::default(),
            handle_y: HandleLayout::default(),
            motion: Motion::Settled,
            gesture: Gesture::Idle,
            quiet: false,
        }
    }

    /// Creates a scroll box and mounts it on `host` right away.
    pub fn with_host(options: ScrollBoxOptions, host: H, now_ms: u64) -> Self {
        let mut sb = Self::new(options);
        sb.mount(host, now_ms);
        sb
    }

    /// Attaches a host, resets all offsets to 0 and reconciles immediately.
    ///
    /// Returns the previously mounted host, if any.
    pub fn mount(&mut self, host: H, now_ms: u64) -> Option<H> {
        let prev = self.unmount();
        sbdebug!(now_ms, "ScrollBox::mount");
        self.host = Some(host);
        self.liveness = Liveness::new(true);
        self.target = Vec2::ZERO;
        self.previous = Vec2::ZERO;
        self.current = Vec2::ZERO;
        self.scroll_max = Vec2::ZERO;
        self.track_extent = Vec2::ZERO;
        self.handle_x = HandleLayout::default();
        self.handle_y = HandleLayout::default();
        self.reconcile(now_ms);
        prev
    }

    /// Detaches the host. Ends any drag, stops any animation and flips the liveness flag so
    /// frame callbacks stop rescheduling themselves.
    pub fn unmount(&mut self) -> Option<H> {
        self.end_drag();
        self.liveness.set(false);
        self.motion = Motion::Settled;
        self.gesture = Gesture::Idle;
        self.quiet = false;
        let host = self.host.take();
        if host.is_some() {
            sbdebug!("ScrollBox::unmount");
        }
        host
    }

    pub fn is_mounted(&self) -> bool {
        self.host.is_some()
    }

    /// A clone of the "still mounted" flag for frame loops and pointer listeners.
    pub fn liveness(&self) -> Liveness {
        self.liveness.clone()
    }

    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    pub fn host_mut(&mut self) -> Option<&mut H> {
        self.host.as_mut()
    }

    pub fn options(&self) -> &ScrollBoxOptions {
        &self.options
    }

    /// Replaces the options and reconciles. Disabling the box ends a drag in progress.
    pub fn set_options(&mut self, options: ScrollBoxOptions, now_ms: u64) {
        self.options = options;
        sbtrace!(
            axes = ?self.options.axes,
            disabled = self.options.disabled,
            "ScrollBox::set_options"
        );
        if self.options.disabled {
            self.end_drag();
        }
        self.reconcile(now_ms);
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ScrollBoxOptions), now_ms: u64) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next, now_ms);
    }

    pub fn has_axis(&self, axis: Axis) -> bool {
        self.options.axes.has(axis)
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn current(&self) -> Vec2 {
        self.current
    }

    pub fn scroll_max(&self) -> Vec2 {
        self.scroll_max
    }

    pub fn handle(&self, axis: Axis) -> HandleLayout {
        match axis {
            Axis::X => self.handle_x,
            Axis::Y => self.handle_y,
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.motion, Motion::Animating(_))
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn is_fast_tracking(&self) -> bool {
        matches!(self.gesture, Gesture::FastTracking)
    }

    /// The axis whose handle is being dragged, if any.
    pub fn active_handle(&self) -> Option<Axis> {
        self.gesture.grip().map(|g| g.axis)
    }

    pub fn is_dragging_handle(&self) -> bool {
        self.active_handle().is_some()
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> ScrollState {
        ScrollState {
            target: self.target,
            previous: self.previous,
            current: self.current,
            scroll_max: self.scroll_max,
            handle_extent: Vec2::new(self.handle_x.extent, self.handle_y.extent),
            handle_position: Vec2::new(self.handle_x.position, self.handle_y.position),
            track_max: Vec2::new(self.handle_x.track_max, self.handle_y.track_max),
            animating: self.is_animating(),
            quiet: self.quiet,
            fast_tracking: self.is_fast_tracking(),
            active_handle: self.active_handle(),
        }
    }

    /// Requests a new scroll position and reconciles immediately.
    ///
    /// The animation (if `duration_ms > 0`) departs from the instantaneous current offset, so
    /// re-targeting an in-flight animation never jumps. The newest request always wins.
    ///
    /// Returns `false` when the box is not mounted.
    pub fn scroll_to(&mut self, request: ScrollRequest, now_ms: u64) -> bool {
        if self.host.is_none() {
            return false;
        }
        sbtrace!(
            x = ?request.x,
            y = ?request.y,
            duration_ms = request.duration_ms,
            quiet = request.quiet,
            now_ms,
            "ScrollBox::scroll_to"
        );

        self.previous = self.current;
        self.motion = if request.duration_ms > 0 {
            Motion::Animating(Animation {
                previous: self.current,
                start_ms: now_ms,
                duration_ms: request.duration_ms,
            })
        } else {
            Motion::Settled
        };
        if let Some(x) = finite(request.x) {
            self.target.x = x;
        }
        if let Some(y) = finite(request.y) {
            self.target.y = y;
        }
        self.quiet = request.quiet;
        self.reconcile(now_ms);
        true
    }

    /// Scrolls by a delta relative to the current offset (not the target).
    pub fn scroll_by(&mut self, delta: ScrollRequest, now_ms: u64) -> bool {
        let request = ScrollRequest {
            x: finite(delta.x).map(|dx| self.current.x + dx),
            y: finite(delta.y).map(|dy| self.current.y + dy),
            ..delta
        };
        self.scroll_to(request, now_ms)
    }

    pub fn scroll_to_start(&mut self, now_ms: u64) -> bool {
        self.scroll_to(ScrollRequest::new(0.0, 0.0), now_ms)
    }

    pub fn scroll_to_end(&mut self, now_ms: u64) -> bool {
        let max = self.scroll_max;
        self.scroll_to(ScrollRequest::new(max.x, max.y), now_ms)
    }

    /// One frame-loop tick: reconciles and reports whether the loop should re-arm.
    pub fn frame(&mut self, now_ms: u64) -> FrameStatus {
        if self.host.is_none() || !self.liveness.is_alive() {
            return FrameStatus::Stop;
        }
        self.reconcile(now_ms);
        FrameStatus::Rearm
    }

    /// Synchronizes the viewport, handles and notification state.
    ///
    /// - Recomputes bounds from the viewport extents and clamps the target into them.
    /// - If the viewport still shows what was last written, advances the animation (or applies
    ///   the target) and writes the result.
    /// - Otherwise something else scrolled the viewport: the animation is dropped and the
    ///   observed offset becomes both target and current.
    ///
    /// Returns `true` when offsets or geometry changed (and `on_viewport_scroll` was eligible to
    /// fire).
    pub fn reconcile(&mut self, now_ms: u64) -> bool {
        let Some(host) = self.host.as_mut() else {
            return false;
        };
        let options = &self.options;

        let compensation = if options.native && options.outset {
            host.native_scrollbar_thickness()
        } else {
            Vec2::ZERO
        };
        host.set_extent_compensation(compensation);

        let client = host.client_extent();
        let content = host.content_extent();
        let axes = options.axes;
        let scroll_max = mapper::scroll_max(client, content, |axis| axes.has(axis));

        self.target = self.target.round().clamp_to(scroll_max);
        host.set_axis_shown(Axis::X, scroll_max.x > 0.0);
        host.set_axis_shown(Axis::Y, scroll_max.y > 0.0);

        let observed = host.scroll_offset();
        let observed = Vec2::new(
            if observed.x.is_finite() { observed.x } else { self.current.x },
            if observed.y.is_finite() { observed.y } else { self.current.y },
        );

        let next = if observed.max_abs_diff(self.current) <= options.drift_tolerance {
            let mut next = self.target;
            if let Motion::Animating(animation) = self.motion {
                match animation.progress(now_ms) {
                    Some(t) => {
                        let ratio = options.easing.sample(t);
                        let from = animation.previous;
                        next = Vec2::new(
                            from.x + ratio * (self.target.x - from.x),
                            from.y + ratio * (self.target.y - from.y),
                        )
                        .round()
                        .clamp_to(scroll_max);
                    }
                    None => self.motion = Motion::Settled,
                }
            }
            host.set_scroll_offset(next);
            next
        } else {
            sbdebug!(
                observed_x = observed.x,
                observed_y = observed.y,
                current_x = self.current.x,
                current_y = self.current.y,
                "external scroll detected, adopting viewport offset"
            );
            self.motion = Motion::Settled;
            let adopted = observed.round().clamp_to(scroll_max);
            self.target = adopted;
            adopted
        };

        let track_extent = if options.native {
            Vec2::ZERO
        } else {
            Vec2::new(host.track_extent(Axis::X), host.track_extent(Axis::Y))
        };

        if next == self.current && scroll_max == self.scroll_max && track_extent == self.track_extent
        {
            if self.motion == Motion::Settled {
                self.quiet = false;
                if matches!(self.gesture, Gesture::FastTracking) {
                    self.gesture = Gesture::Idle;
                }
            }
            return false;
        }

        if options.native {
            self.handle_x = HandleLayout::default();
            self.handle_y = HandleLayout::default();
        } else {
            let min_extent = options.min_handle_extent;
            let layout = |axis: Axis| {
                // An inactive axis never overflows, so its handle fills the track.
                let content = if axes.has(axis) {
                    content.get(axis)
                } else {
                    client.get(axis)
                };
                HandleLayout::compute(
                    track_extent.get(axis),
                    client.get(axis),
                    content,
                    min_extent,
                    next.get(axis),
                    scroll_max.get(axis),
                )
            };
            self.handle_x = layout(Axis::X);
            self.handle_y = layout(Axis::Y);
            host.place_handle(Axis::X, self.handle_x);
            host.place_handle(Axis::Y, self.handle_y);
        }

        self.current = next;
        self.scroll_max = scroll_max;
        self.track_extent = track_extent;
        sbtrace!(
            x = next.x,
            y = next.y,
            max_x = scroll_max.x,
            max_y = scroll_max.y,
            quiet = self.quiet,
            "ScrollBox::reconcile"
        );

        if !self.quiet {
            if let Some(cb) = &self.options.on_viewport_scroll {
                cb(&self.state());
            }
        }
        true
    }

    /// Routes a pointer-down on a scrollbar: handles start a drag, the bare track fast-tracks.
    pub fn pointer_down(
        &mut self,
        axis: Axis,
        target: PointerTarget,
        pointer: f64,
        now_ms: u64,
    ) -> bool {
        match target {
            PointerTarget::Handle => self.begin_drag(axis, pointer),
            PointerTarget::Track => self.fast_track(axis, pointer, now_ms),
        }
    }

    fn can_interact(&self, axis: Axis) -> bool {
        !self.options.disabled
            && !self.options.native
            && self.host.is_some()
            && self.options.axes.has(axis)
            && self.scroll_max.get(axis) > 0.0
    }

    /// Grabs the handle of `axis`. `pointer` is a position along the axis in any coordinate
    /// space that stays fixed relative to the track during the gesture.
    ///
    /// Any animation in flight (including a fast-track) stops at the current offset. The host's
    /// pointer capture is held until the drag ends.
    pub fn begin_drag(&mut self, axis: Axis, pointer: f64) -> bool {
        if !self.can_interact(axis) || !pointer.is_finite() {
            return false;
        }
        self.end_drag();

        let grip = Grip {
            axis,
            offset: pointer - self.handle(axis).position,
        };
        let Some(host) = self.host.as_mut() else {
            return false;
        };
        sbdebug!(axis = ?axis, grip_offset = grip.offset, "ScrollBox::begin_drag");

        let capture = host.capture_pointer(axis);
        host.set_track_dragged(axis, true);
        self.motion = Motion::Settled;
        self.target = self.current;
        self.gesture = Gesture::Dragging {
            grip,
            _capture: capture,
        };
        true
    }

    /// Moves the grabbed handle so that it follows the pointer. Never animated.
    pub fn drag_to(&mut self, pointer: f64, now_ms: u64) -> bool {
        let Some(grip) = self.gesture.grip() else {
            return false;
        };
        if self.host.is_none() {
            self.end_drag();
            return false;
        }
        if !pointer.is_finite() {
            return false;
        }
        let offset = mapper::track_to_offset(
            pointer - grip.offset,
            self.scroll_max.get(grip.axis),
            self.handle(grip.axis).track_max,
        );
        self.scroll_to(ScrollRequest::axis(grip.axis, offset), now_ms)
    }

    /// Releases the grabbed handle (pointer-up, blur or teardown).
    ///
    /// Returns `false` if no drag was in progress.
    pub fn end_drag(&mut self) -> bool {
        match mem::replace(&mut self.gesture, Gesture::Idle) {
            Gesture::Dragging {
                grip,
                _capture: capture,
            } => {
                drop(capture);
                if let Some(host) = self.host.as_mut() {
                    host.set_track_dragged(grip.axis, false);
                }
                sbdebug!(axis = ?grip.axis, "ScrollBox::end_drag");
                true
            }
            other => {
                self.gesture = other;
                false
            }
        }
    }

    /// Handles a pointer-down on the bare track of `axis` at a track-local `pointer` position,
    /// according to the configured [`FastTrack`] policy.
    pub fn fast_track(&mut self, axis: Axis, pointer: f64, now_ms: u64) -> bool {
        if !self.can_interact(axis) || self.is_dragging_handle() || !pointer.is_finite() {
            return false;
        }
        let Some(host) = self.host.as_ref() else {
            return false;
        };
        let client = host.client_extent().get(axis);

        let target = match self.options.fast_track {
            FastTrack::Paging => {
                let direction = if self.handle(axis).is_before(pointer) {
                    -1.0
                } else {
                    1.0
                };
                self.target.get(axis) + direction * client
            }
            FastTrack::Rewind => {
                let track = host.track_extent(axis);
                if track <= 0.0 {
                    return false;
                }
                pointer / track * host.content_extent().get(axis) - client / 2.0
            }
            FastTrack::None => return false,
        };
        sbdebug!(
            axis = ?axis,
            policy = ?self.options.fast_track,
            target,
            "ScrollBox::fast_track"
        );

        self.gesture = Gesture::FastTracking;
        let request = ScrollRequest::axis(axis, target)
            .with_duration_ms(self.options.fast_track_duration_ms);
        self.scroll_to(request, now_ms)
    }
}

impl<H: Host> Drop for ScrollBox<H> {
    fn drop(&mut self) {
        self.liveness.set(false);
    }
}

impl<H: Host + fmt::Debug> fmt::Debug for ScrollBox<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollBox")
            .field("options", &self.options)
            .field("host", &self.host)
            .field("target", &self.target)
            .field("previous", &self.previous)
            .field("current", &self.current)
            .field("scroll_max", &self.scroll_max)
            .field("motion", &self.motion)
            .field("gesture", &self.gesture)
            .field("quiet", &self.quiet)
            .finish_non_exhaustive()
    }
}
