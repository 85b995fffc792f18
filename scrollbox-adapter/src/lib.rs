//! Adapter utilities for the `scrollbox` crate.
//!
//! The `scrollbox` crate is UI-agnostic and owns the scroll state machine. This crate provides
//! small, framework-neutral helpers commonly needed by adapters:
//!
//! - Wheel and keyboard translation into scroll requests
//! - A self-rescheduling frame loop that stops once its scroll box is torn down
//! - A [`Controller`] that routes raw UI events into a scroll box
//! - [`SimHost`], an in-memory host for tests and headless use
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod controller;
mod frame;
mod input;
mod sim;


pub use controller::Controller;
pub use frame::{Cadence, FALLBACK_FRAME_INTERVAL_MS, FrameLoop, FrameScheduler};
pub use input::{Key, KeyAction, KeyInput, WheelInput, key_action, wheel_delta};
pub use sim::{SimCapture, SimHost, SimScheduler};
