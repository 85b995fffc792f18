use crate::{Axis, HandleLayout, Vec2};

/// The scrollable surface whose offset a [`crate::ScrollBox`] controls and observes.
///
/// The viewport is ground truth: other parties (OS scrolling, layout) may change its offset at
/// any time, and the engine re-validates it on every reconcile.
pub trait Viewport {
    fn scroll_offset(&self) -> Vec2;
    fn set_scroll_offset(&mut self, offset: Vec2);
    /// Visible extents (`clientWidth`/`clientHeight`).
    fn client_extent(&self) -> Vec2;
    /// Total scrollable extents (`scrollWidth`/`scrollHeight`).
    fn content_extent(&self) -> Vec2;

    /// Thickness of the host's native scrollbars, if any.
    fn native_scrollbar_thickness(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Grows the viewport by `extra` pixels so native scrollbars end up outside the clip area.
    fn set_extent_compensation(&mut self, extra: Vec2) {
        let _ = extra;
    }
}

/// The rendered tracks and handles.
pub trait Surface {
    /// Guard for a global pointer capture (move/up/blur listeners). Dropping it releases the
    /// capture.
    type Capture;

    /// Inner extent of the track along `axis`.
    fn track_extent(&self, axis: Axis) -> f64;
    fn place_handle(&mut self, axis: Axis, layout: HandleLayout);
    fn capture_pointer(&mut self, axis: Axis) -> Self::Capture;

    /// Called with `true` when the axis overflows and its scrollbar should be shown.
    fn set_axis_shown(&mut self, axis: Axis, shown: bool) {
        let _ = (axis, shown);
    }

    fn set_track_dragged(&mut self, axis: Axis, dragged: bool) {
        let _ = (axis, dragged);
    }
}

/// Everything a [`crate::ScrollBox`] needs from its host.
pub trait Host: Viewport + Surface {}

impl<T: Viewport + Surface> Host for T {}
