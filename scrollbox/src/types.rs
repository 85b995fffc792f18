use core::fmt;
use core::str::FromStr;

/// Returned when parsing a configuration value from a string fails.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {kind} `{value}`")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}

/// One scroll axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// The set of axes a scroll box is allowed to scroll along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axes {
    X,
    Y,
    #[default]
    XY,
}

impl Axes {
    pub fn has(self, axis: Axis) -> bool {
        matches!(
            (self, axis),
            (Self::XY, _) | (Self::X, Axis::X) | (Self::Y, Axis::Y)
        )
    }
}

impl FromStr for Axes {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "xy" | "yx" => Ok(Self::XY),
            _ => Err(ParseError::new("axes", s)),
        }
    }
}

impl fmt::Display for Axes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
            Self::XY => "xy",
        })
    }
}

/// What a pointer-down on the bare track (outside the handle) does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FastTrack {
    /// Move by one viewport extent towards the pointer.
    Paging,
    /// Jump so that the viewport is centered on the clicked point.
    #[default]
    Rewind,
    /// Pointer-down on the track is ignored.
    None,
}

impl FromStr for FastTrack {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paging" => Ok(Self::Paging),
            "rewind" => Ok(Self::Rewind),
            "none" | "" => Ok(Self::None),
            _ => Err(ParseError::new("fast track policy", s)),
        }
    }
}

impl fmt::Display for FastTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Paging => "paging",
            Self::Rewind => "rewind",
            Self::None => "none",
        })
    }
}

/// Which part of a scrollbar a pointer-down landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerTarget {
    Handle,
    Track,
}

/// A per-axis pair of pixel values (offsets, extents or track positions).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    pub fn set(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
        }
    }

    pub fn round(self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }

    /// Clamps each component into `[0, max]`.
    pub fn clamp_to(self, max: Vec2) -> Self {
        Self::new(self.x.clamp(0.0, max.x), self.y.clamp(0.0, max.y))
    }

    pub fn max_abs_diff(self, other: Vec2) -> f64 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

/// The result of one frame-loop tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    /// The box is still mounted; schedule the next tick.
    Rearm,
    /// The box was torn down; stop rescheduling.
    Stop,
}
