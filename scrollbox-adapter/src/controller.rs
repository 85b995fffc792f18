use scrollbox::{
    Axis, Host, PointerTarget, ScrollBox, ScrollBoxOptions, ScrollRequest, Vec2,
};

use crate::{FrameLoop, FrameScheduler, KeyAction, KeyInput, WheelInput, key_action, wheel_delta};

/// A framework-neutral controller that wraps a `scrollbox::ScrollBox` and routes raw UI events
/// into it.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `mount` / `unmount` when the widget appears or goes away
/// - `on_wheel`, `on_key_down` and the `on_pointer_*` family when UI events occur
/// - `on_frame(scheduler, now_ms)` from every scheduled frame callback
///
/// Event handlers return `true` when the event was consumed, i.e. the adapter should prevent the
/// platform's default handling.
#[derive(Debug)]
pub struct Controller<H: Host> {
    sb: ScrollBox<H>,
    frames: FrameLoop,
    swap_axes_on_shift: bool,
}

impl<H: Host> Controller<H> {
    pub fn new(options: ScrollBoxOptions) -> Self {
        Self::from_scroll_box(ScrollBox::new(options))
    }

    pub fn from_scroll_box(sb: ScrollBox<H>) -> Self {
        Self {
            sb,
            frames: FrameLoop::new(),
            swap_axes_on_shift: true,
        }
    }

    /// Whether shift+wheel scrolls along the other axis. Disable this on platforms that already
    /// swap wheel deltas natively.
    pub fn with_swap_axes_on_shift(mut self, swap: bool) -> Self {
        self.swap_axes_on_shift = swap;
        self
    }

    pub fn scroll_box(&self) -> &ScrollBox<H> {
        &self.sb
    }

    pub fn scroll_box_mut(&mut self) -> &mut ScrollBox<H> {
        &mut self.sb
    }

    pub fn into_scroll_box(self) -> ScrollBox<H> {
        self.sb
    }

    pub fn frame_loop(&self) -> &FrameLoop {
        &self.frames
    }

    /// Mounts the scroll box on `host` and starts its frame loop.
    ///
    /// Returns the previously mounted host, if any.
    pub fn mount(
        &mut self,
        host: H,
        scheduler: &mut impl FrameScheduler,
        now_ms: u64,
    ) -> Option<H> {
        let prev = self.sb.mount(host, now_ms);
        self.frames.start(self.sb.liveness(), scheduler);
        prev
    }

    /// Unmounts the scroll box. Pending frame callbacks stop on their next tick.
    pub fn unmount(&mut self) -> Option<H> {
        self.sb.unmount()
    }

    pub fn scroll_to(&mut self, request: ScrollRequest, now_ms: u64) -> bool {
        self.sb.scroll_to(request, now_ms)
    }

    pub fn scroll_by(&mut self, delta: ScrollRequest, now_ms: u64) -> bool {
        self.sb.scroll_by(delta, now_ms)
    }

    /// Applies a wheel event immediately (no animation).
    pub fn on_wheel(&mut self, input: &WheelInput, now_ms: u64) -> bool {
        if self.sb.options().disabled || !self.sb.is_mounted() {
            return false;
        }
        let Some(delta) = wheel_delta(input, self.sb.options().axes, self.swap_axes_on_shift)
        else {
            return false;
        };
        atrace!(dx = delta.x, dy = delta.y, "Controller::on_wheel");
        self.sb.scroll_by(ScrollRequest::new(delta.x, delta.y), now_ms)
    }

    /// Applies a navigation key. Recognized keys are consumed even when the box is already at
    /// the requested edge, so the page around it does not scroll instead.
    pub fn on_key_down(&mut self, input: &KeyInput, now_ms: u64) -> bool {
        let options = self.sb.options();
        if options.disabled || !options.capture_keyboard || input.default_prevented {
            return false;
        }
        let step = Vec2::new(options.step_x, options.step_y);
        let Some(client) = self.sb.host().map(|host| host.client_extent()) else {
            return false;
        };
        let action = key_action(input.key, input.shift, step, client, self.sb.scroll_max());
        adebug!(key = ?input.key, action = ?action, "Controller::on_key_down");
        match action {
            KeyAction::ScrollTo(to) => self.sb.scroll_to(ScrollRequest::new(to.x, to.y), now_ms),
            KeyAction::ScrollBy(by) => self.sb.scroll_by(ScrollRequest::new(by.x, by.y), now_ms),
        };
        true
    }

    /// Pointer-down on a scrollbar. `pointer` is track-local along `axis`.
    pub fn on_pointer_down(
        &mut self,
        axis: Axis,
        target: PointerTarget,
        pointer: f64,
        now_ms: u64,
    ) -> bool {
        self.sb.pointer_down(axis, target, pointer, now_ms)
    }

    /// Pointer motion anywhere while a handle is grabbed. Use the same coordinate space as the
    /// `on_pointer_down` that started the drag.
    pub fn on_pointer_move(&mut self, pointer: f64, now_ms: u64) -> bool {
        self.sb.drag_to(pointer, now_ms)
    }

    pub fn on_pointer_up(&mut self) -> bool {
        self.sb.end_drag()
    }

    /// Window focus loss ends a drag just like a pointer-up.
    pub fn on_blur(&mut self) -> bool {
        self.sb.end_drag()
    }

    /// Runs one scheduled frame callback. Returns `false` once the loop stopped.
    pub fn on_frame(&mut self, scheduler: &mut impl FrameScheduler, now_ms: u64) -> bool {
        self.frames.on_frame(&mut self.sb, scheduler, now_ms)
    }
}
