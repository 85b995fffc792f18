//! An in-memory host, for demos, tests and headless integration.

use std::cell::Cell;
use std::rc::Rc;

use scrollbox::{Axis, HandleLayout, Surface, Vec2, Viewport};

use crate::FrameScheduler;

fn idx(axis: Axis) -> usize {
    match axis {
        Axis::X => 0,
        Axis::Y => 1,
    }
}

/// A headless [`scrollbox::Host`] that behaves like a browser scroll container: its offset is
/// clamped into `[0, content - client]` on every write.
#[derive(Clone, Debug)]
pub struct SimHost {
    offset: Vec2,
    client: Vec2,
    content: Vec2,
    track: Vec2,
    native_thickness: Vec2,
    compensation: Vec2,
    handles: [HandleLayout; 2],
    shown: [bool; 2],
    dragged: [bool; 2],
    writes: u64,
    captures: Rc<Cell<usize>>,
}

impl SimHost {
    /// Creates a host whose tracks span the whole viewport.
    pub fn new(client: Vec2, content: Vec2) -> Self {
        Self {
            offset: Vec2::ZERO,
            client,
            content,
            track: client,
            native_thickness: Vec2::ZERO,
            compensation: Vec2::ZERO,
            handles: [HandleLayout::default(); 2],
            shown: [false; 2],
            dragged: [false; 2],
            writes: 0,
            captures: Rc::new(Cell::new(0)),
        }
    }

    pub fn with_track(mut self, track: Vec2) -> Self {
        self.track = track;
        self
    }

    pub fn with_native_thickness(mut self, thickness: Vec2) -> Self {
        self.native_thickness = thickness;
        self
    }

    pub fn set_client(&mut self, client: Vec2) {
        self.client = client;
        self.offset = self.offset.clamp_to(self.max_offset());
    }

    /// Replaces the content extent. Shrinking content pulls the offset back in bounds, the way
    /// a browser does.
    pub fn set_content(&mut self, content: Vec2) {
        self.content = content;
        self.offset = self.offset.clamp_to(self.max_offset());
    }

    pub fn set_track(&mut self, track: Vec2) {
        self.track = track;
    }

    /// Scrolls the viewport behind the engine's back (OS scrolling, scroll-into-view...).
    pub fn scroll_externally(&mut self, offset: Vec2) {
        self.offset = offset.clamp_to(self.max_offset());
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn max_offset(&self) -> Vec2 {
        Vec2::new(
            (self.content.x - self.client.x).max(0.0),
            (self.content.y - self.client.y).max(0.0),
        )
    }

    /// Number of `set_scroll_offset` calls so far.
    pub fn writes(&self) -> u64 {
        self.writes
    }

    pub fn handle(&self, axis: Axis) -> HandleLayout {
        self.handles[idx(axis)]
    }

    pub fn is_shown(&self, axis: Axis) -> bool {
        self.shown[idx(axis)]
    }

    pub fn is_track_dragged(&self, axis: Axis) -> bool {
        self.dragged[idx(axis)]
    }

    pub fn compensation(&self) -> Vec2 {
        self.compensation
    }

    /// Pointer captures handed out and not yet released.
    pub fn active_captures(&self) -> usize {
        self.captures.get()
    }
}

/// Pointer capture guard returned by [`SimHost`].
#[derive(Debug)]
pub struct SimCapture {
    axis: Axis,
    active: Rc<Cell<usize>>,
}

impl SimCapture {
    pub fn axis(&self) -> Axis {
        self.axis
    }
}

impl Drop for SimCapture {
    fn drop(&mut self) {
        self.active.set(self.active.get().saturating_sub(1));
    }
}

impl Viewport for SimHost {
    fn scroll_offset(&self) -> Vec2 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: Vec2) {
        self.writes += 1;
        self.offset = offset.clamp_to(self.max_offset());
    }

    fn client_extent(&self) -> Vec2 {
        self.client
    }

    fn content_extent(&self) -> Vec2 {
        self.content
    }

    fn native_scrollbar_thickness(&self) -> Vec2 {
        self.native_thickness
    }

    fn set_extent_compensation(&mut self, extra: Vec2) {
        self.compensation = extra;
    }
}

impl Surface for SimHost {
    type Capture = SimCapture;

    fn track_extent(&self, axis: Axis) -> f64 {
        self.track.get(axis)
    }

    fn place_handle(&mut self, axis: Axis, layout: HandleLayout) {
        self.handles[idx(axis)] = layout;
    }

    fn capture_pointer(&mut self, axis: Axis) -> SimCapture {
        self.captures.set(self.captures.get() + 1);
        SimCapture {
            axis,
            active: Rc::clone(&self.captures),
        }
    }

    fn set_axis_shown(&mut self, axis: Axis, shown: bool) {
        self.shown[idx(axis)] = shown;
    }

    fn set_track_dragged(&mut self, axis: Axis, dragged: bool) {
        self.dragged[idx(axis)] = dragged;
    }
}

/// A [`FrameScheduler`] that only records what was requested.
#[derive(Clone, Debug)]
pub struct SimScheduler {
    animation_frames: bool,
    frames_requested: u64,
    timeouts: Vec<u64>,
}

impl Default for SimScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl SimScheduler {
    pub fn new() -> Self {
        Self {
            animation_frames: true,
            frames_requested: 0,
            timeouts: Vec::new(),
        }
    }

    /// A scheduler for hosts without refresh-synchronized callbacks.
    pub fn timer_only() -> Self {
        Self {
            animation_frames: false,
            ..Self::new()
        }
    }

    pub fn frames_requested(&self) -> u64 {
        self.frames_requested
    }

    /// Delays of every `set_timeout` call, oldest first.
    pub fn timeouts(&self) -> &[u64] {
        &self.timeouts
    }

    /// Total number of callbacks armed by either mechanism.
    pub fn armed(&self) -> u64 {
        self.frames_requested + self.timeouts.len() as u64
    }
}

impl FrameScheduler for SimScheduler {
    fn request_animation_frame(&mut self) -> bool {
        if self.animation_frames {
            self.frames_requested += 1;
        }
        self.animation_frames
    }

    fn set_timeout(&mut self, delay_ms: u64) {
        self.timeouts.push(delay_ms);
    }
}
