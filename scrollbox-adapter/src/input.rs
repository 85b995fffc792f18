//! Translation of raw wheel and keyboard input into scroll requests.

use core::str::FromStr;

use scrollbox::{Axes, Axis, ParseError, Vec2};

/// A wheel event as delivered by the host, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WheelInput {
    pub delta_x: f64,
    pub delta_y: f64,
    pub shift: bool,
    /// Another handler already consumed the event.
    pub default_prevented: bool,
}

/// Converts a wheel event into a scroll delta.
///
/// With `swap_on_shift`, holding shift turns vertical wheel motion into horizontal motion (and
/// vice versa), matching browsers that do so natively. Deltas along inactive axes are dropped
/// after the swap, so a horizontal-only box scrolls on shift + vertical wheel while a
/// vertical-only box leaves that event alone.
///
/// Returns `None` when there is nothing to scroll; the host should then let the event propagate.
pub fn wheel_delta(input: &WheelInput, axes: Axes, swap_on_shift: bool) -> Option<Vec2> {
    if input.default_prevented {
        return None;
    }
    let (mut dx, mut dy) = (input.delta_x, input.delta_y);
    if input.shift && swap_on_shift {
        core::mem::swap(&mut dx, &mut dy);
    }
    let dx = if axes.has(Axis::X) && dx.is_finite() { dx } else { 0.0 };
    let dy = if axes.has(Axis::Y) && dy.is_finite() { dy } else { 0.0 };
    if dx == 0.0 && dy == 0.0 {
        return None;
    }
    Some(Vec2::new(dx, dy))
}

/// Keys a scroll box reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    Home,
    End,
    PageUp,
    PageDown,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

impl Key {
    /// Maps a legacy DOM `keyCode`.
    pub fn from_key_code(code: u32) -> Option<Self> {
        Some(match code {
            33 => Self::PageUp,
            34 => Self::PageDown,
            35 => Self::End,
            36 => Self::Home,
            37 => Self::ArrowLeft,
            38 => Self::ArrowUp,
            39 => Self::ArrowRight,
            40 => Self::ArrowDown,
            _ => return None,
        })
    }
}

impl FromStr for Key {
    type Err = ParseError;

    /// Parses DOM `KeyboardEvent.key` names (`"PageDown"`, `"ArrowUp"`, ...), plus the legacy
    /// short arrow names (`"Up"`, `"Down"`, `"Left"`, `"Right"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Home" => Ok(Self::Home),
            "End" => Ok(Self::End),
            "PageUp" => Ok(Self::PageUp),
            "PageDown" => Ok(Self::PageDown),
            "ArrowUp" | "Up" => Ok(Self::ArrowUp),
            "ArrowDown" | "Down" => Ok(Self::ArrowDown),
            "ArrowLeft" | "Left" => Ok(Self::ArrowLeft),
            "ArrowRight" | "Right" => Ok(Self::ArrowRight),
            _ => Err(ParseError::new("key", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyInput {
    pub key: Key,
    pub shift: bool,
    pub default_prevented: bool,
}

impl KeyInput {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            shift: false,
            default_prevented: false,
        }
    }

    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }
}

/// What a key press asks the scroll box to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyAction {
    ScrollTo(Vec2),
    ScrollBy(Vec2),
}

/// Resolves a key press.
///
/// - Home/End jump to the start/end on both axes.
/// - PageUp/PageDown move by one viewport height, or one viewport width with shift.
/// - Arrows move by `step`.
pub fn key_action(key: Key, shift: bool, step: Vec2, client: Vec2, scroll_max: Vec2) -> KeyAction {
    match key {
        Key::Home => KeyAction::ScrollTo(Vec2::ZERO),
        Key::End => KeyAction::ScrollTo(scroll_max),
        Key::PageUp | Key::PageDown => {
            let sign = if key == Key::PageUp { -1.0 } else { 1.0 };
            if shift {
                KeyAction::ScrollBy(Vec2::new(sign * client.x, 0.0))
            } else {
                KeyAction::ScrollBy(Vec2::new(0.0, sign * client.y))
            }
        }
        Key::ArrowUp => KeyAction::ScrollBy(Vec2::new(0.0, -step.y)),
        Key::ArrowDown => KeyAction::ScrollBy(Vec2::new(0.0, step.y)),
        Key::ArrowLeft => KeyAction::ScrollBy(Vec2::new(-step.x, 0.0)),
        Key::ArrowRight => KeyAction::ScrollBy(Vec2::new(step.x, 0.0)),
    }
}
