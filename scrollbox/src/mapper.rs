//! Conversions between scroll-offset space (`[0, scroll_max]`) and handle/track space
//! (`[0, track_max]`).

use crate::{Axis, Vec2};

/// Maps a scroll offset to a handle position along its track.
///
/// Returns `0` when the axis cannot scroll (`scroll_max == 0`).
pub fn offset_to_track(offset: f64, scroll_max: f64, track_max: f64) -> f64 {
    if scroll_max <= 0.0 {
        return 0.0;
    }
    track_max * offset / scroll_max
}

/// Maps a handle position along its track back to a scroll offset.
///
/// Returns `0` when the handle cannot travel (`track_max == 0`).
pub fn track_to_offset(position: f64, scroll_max: f64, track_max: f64) -> f64 {
    if track_max <= 0.0 {
        return 0.0;
    }
    scroll_max * position / track_max
}

/// Size of a handle proportional to the visible share of the content.
///
/// The result never exceeds the track; when the content fits into the viewport the handle fills
/// the whole track. `min_extent` is honored as long as the track is large enough.
pub fn handle_extent(
    track_extent: f64,
    client_extent: f64,
    content_extent: f64,
    min_extent: f64,
) -> f64 {
    let track_extent = track_extent.max(0.0);
    let extent = if content_extent <= client_extent || content_extent <= 0.0 {
        track_extent
    } else {
        track_extent * client_extent.max(0.0) / content_extent
    };
    extent.max(min_extent.min(track_extent)).min(track_extent)
}

/// Geometry of one handle inside its track.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandleLayout {
    /// Handle size along the axis.
    pub extent: f64,
    /// Distance from the track start to the handle start.
    pub position: f64,
    /// Travel distance available to the handle: `track_extent - extent`.
    pub track_max: f64,
}

impl HandleLayout {
    pub fn compute(
        track_extent: f64,
        client_extent: f64,
        content_extent: f64,
        min_extent: f64,
        offset: f64,
        scroll_max: f64,
    ) -> Self {
        let extent = handle_extent(track_extent, client_extent, content_extent, min_extent);
        let track_max = (track_extent - extent).max(0.0);
        Self {
            extent,
            position: offset_to_track(offset, scroll_max, track_max),
            track_max,
        }
    }

    /// Whether a track-local pointer position lies before the handle.
    pub fn is_before(&self, pointer: f64) -> bool {
        pointer < self.position
    }
}

/// Per-axis scroll bounds: `max(0, content - client)`, or `0` for an inactive axis.
pub fn scroll_max(client: Vec2, content: Vec2, active: impl Fn(Axis) -> bool) -> Vec2 {
    let bound = |axis: Axis| {
        if active(axis) {
            (content.get(axis) - client.get(axis)).max(0.0)
        } else {
            0.0
        }
    };
    Vec2::new(bound(Axis::X), bound(Axis::Y))
}
