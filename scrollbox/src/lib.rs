//! A headless scrollbar engine.
//!
//! For adapter-level utilities (input translation, frame loop, an in-memory host), see the
//! `scrollbox-adapter` crate.
//!
//! This crate owns the part of a custom scrollbar that has real invariants: target/previous/current
//! offsets, eased animation with interruption, conversions between scroll-offset space and
//! handle/track space, handle dragging and track fast-tracking. Every reconcile re-validates the
//! viewport's actual offset, so external scrolling (OS, resize, content changes) is adopted
//! instead of fought.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide (via [`Viewport`] and [`Surface`]):
//! - the viewport's scroll offset and its client/content extents
//! - track extents, and somewhere to place handles
//! - a pointer capture for the duration of a handle drag
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod macros;

mod easing;
mod host;
pub mod mapper;
mod options;
mod scroll_box;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use easing::{Easing, EasingFn};
pub use host::{Host, Surface, Viewport};
pub use mapper::HandleLayout;
pub use options::{OnViewportScroll, ScrollBoxOptions};
pub use scroll_box::{ScrollBox, ScrollRequest};
pub use state::{Liveness, ScrollState};
pub use types::{Axes, Axis, FastTrack, FrameStatus, ParseError, PointerTarget, Vec2};
