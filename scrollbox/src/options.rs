use alloc::sync::Arc;

use crate::{Axes, Easing, FastTrack, ScrollState};

/// A callback fired after a reconcile changed offsets or bounds, unless the request was quiet.
pub type OnViewportScroll = Arc<dyn Fn(&ScrollState) + Send + Sync>;

/// Configuration for [`crate::ScrollBox`].
///
/// This type is cheap to clone: the callback is stored in an `Arc`, so adapters can update a few
/// fields and call `ScrollBox::set_options` without reallocating closures.
#[derive(Clone)]
pub struct ScrollBoxOptions {
    /// Axes the box scrolls along. An inactive axis is pinned to offset 0.
    pub axes: Axes,
    pub fast_track: FastTrack,
    pub fast_track_duration_ms: u64,

    /// Suppresses input-driven scrolling (wheel, keys, drag, fast-track). Programmatic
    /// `scroll_to`/`scroll_by` keep working.
    pub disabled: bool,
    pub capture_keyboard: bool,

    /// Place native scrollbars outside the clip area (only meaningful with `native`).
    pub outset: bool,
    /// The host renders its own scrollbars; handle geometry is not computed.
    pub native: bool,

    /// Per-keypress scroll deltas.
    pub step_x: f64,
    pub step_y: f64,

    pub easing: Easing,
    pub on_viewport_scroll: Option<OnViewportScroll>,

    /// Maximum distance (per axis, in pixels) between the observed viewport offset and the last
    /// written one that is still considered "under control". Anything further is external drift.
    pub drift_tolerance: f64,
    /// Smallest handle extent, as long as the track is large enough.
    pub min_handle_extent: f64,
}

impl Default for ScrollBoxOptions {
    fn default() -> Self {
        Self {
            axes: Axes::XY,
            fast_track: FastTrack::Rewind,
            fast_track_duration_ms: 500,
            disabled: false,
            capture_keyboard: true,
            outset: false,
            native: false,
            step_x: 30.0,
            step_y: 30.0,
            easing: Easing::CircOut,
            on_viewport_scroll: None,
            drift_tolerance: 0.5,
            min_handle_extent: 0.0,
        }
    }
}

impl ScrollBoxOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_axes(mut self, axes: Axes) -> Self {
        self.axes = axes;
        self
    }

    pub fn with_fast_track(mut self, fast_track: FastTrack) -> Self {
        self.fast_track = fast_track;
        self
    }

    pub fn with_fast_track_duration_ms(mut self, duration_ms: u64) -> Self {
        self.fast_track_duration_ms = duration_ms;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_capture_keyboard(mut self, capture_keyboard: bool) -> Self {
        self.capture_keyboard = capture_keyboard;
        self
    }

    pub fn with_outset(mut self, outset: bool) -> Self {
        self.outset = outset;
        self
    }

    pub fn with_native(mut self, native: bool) -> Self {
        self.native = native;
        self
    }

    pub fn with_steps(mut self, step_x: f64, step_y: f64) -> Self {
        self.step_x = step_x;
        self.step_y = step_y;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_on_viewport_scroll(
        mut self,
        on_viewport_scroll: Option<impl Fn(&ScrollState) + Send + Sync + 'static>,
    ) -> Self {
        self.on_viewport_scroll = on_viewport_scroll.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_drift_tolerance(mut self, tolerance: f64) -> Self {
        self.drift_tolerance = tolerance;
        self
    }

    pub fn with_min_handle_extent(mut self, min_extent: f64) -> Self {
        self.min_handle_extent = min_extent;
        self
    }
}

impl core::fmt::Debug for ScrollBoxOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollBoxOptions")
            .field("axes", &self.axes)
            .field("fast_track", &self.fast_track)
            .field("fast_track_duration_ms", &self.fast_track_duration_ms)
            .field("disabled", &self.disabled)
            .field("capture_keyboard", &self.capture_keyboard)
            .field("outset", &self.outset)
            .field("native", &self.native)
            .field("step_x", &self.step_x)
            .field("step_y", &self.step_y)
            .field("easing", &self.easing)
            .field("drift_tolerance", &self.drift_tolerance)
            .field("min_handle_extent", &self.min_handle_extent)
            .finish_non_exhaustive()
    }
}
