use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::{Axis, Vec2};

/// A lightweight snapshot of a scroll box, passed to `on_viewport_scroll`.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    /// Last requested destination, clamped and rounded.
    pub target: Vec2,
    /// Where the current (or last) animation departed from.
    pub previous: Vec2,
    /// Last offset written to (or adopted from) the viewport.
    pub current: Vec2,
    pub scroll_max: Vec2,
    pub handle_extent: Vec2,
    pub handle_position: Vec2,
    pub track_max: Vec2,
    pub animating: bool,
    pub quiet: bool,
    pub fast_tracking: bool,
    pub active_handle: Option<Axis>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Animation {
    pub(crate) previous: Vec2,
    pub(crate) start_ms: u64,
    pub(crate) duration_ms: u64,
}

impl Animation {
    /// Elapsed ratio in `[0, 1)`, or `None` once the animation is over.
    pub(crate) fn progress(&self, now_ms: u64) -> Option<f64> {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= self.duration_ms {
            return None;
        }
        Some(elapsed as f64 / self.duration_ms as f64)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Motion {
    Settled,
    Animating(Animation),
}

/// A handle grabbed by the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Grip {
    pub(crate) axis: Axis,
    /// Pointer position minus handle position at the moment of the grab.
    pub(crate) offset: f64,
}

pub(crate) enum Gesture<C> {
    Idle,
    Dragging { grip: Grip, _capture: C },
    FastTracking,
}

impl<C> Gesture<C> {
    pub(crate) fn grip(&self) -> Option<Grip> {
        match self {
            Self::Dragging { grip, .. } => Some(*grip),
            _ => None,
        }
    }
}

impl<C> core::fmt::Debug for Gesture<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Idle => f.write_str("Idle"),
            Self::Dragging { grip, .. } => f
                .debug_struct("Dragging")
                .field("grip", grip)
                .finish_non_exhaustive(),
            Self::FastTracking => f.write_str("FastTracking"),
        }
    }
}

/// Shared "still mounted" flag owned by a scroll box's lifecycle.
///
/// Frame callbacks and global pointer listeners hold a clone and stop doing work once the box was
/// unmounted or dropped.
#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    pub(crate) fn new(alive: bool) -> Self {
        Self(Arc::new(AtomicBool::new(alive)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub(crate) fn set(&self, alive: bool) {
        self.0.store(alive, Ordering::Release);
    }
}
