use alloc::sync::Arc;
use core::fmt;

/// A user-provided easing curve. Receives the elapsed ratio in `[0, 1]` and returns the eased
/// ratio (`0` at the start, `1` at the end).
pub type EasingFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Easing curve applied to scroll animations.
///
/// Both axes share one eased ratio, so diagonal scrolls move in lock-step.
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Easing {
    /// Quarter-circle deceleration: `sqrt(1 - (p - 1)^2)`.
    #[default]
    CircOut,
    Linear,
    SmoothStep,
    EaseInOutCubic,
    #[cfg_attr(feature = "serde", serde(skip))]
    Custom(EasingFn),
}

impl Easing {
    pub fn custom(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    pub fn sample(&self, t: f64) -> f64 {
        let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::CircOut => {
                let p = t - 1.0;
                (1.0 - p * p).sqrt()
            }
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
            Self::Custom(f) => {
                let eased = f(t);
                if eased.is_finite() {
                    eased
                } else {
                    sbwarn!(t, "custom easing returned a non-finite ratio");
                    1.0
                }
            }
        }
    }
}

impl fmt::Debug for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CircOut => f.write_str("CircOut"),
            Self::Linear => f.write_str("Linear"),
            Self::SmoothStep => f.write_str("SmoothStep"),
            Self::EaseInOutCubic => f.write_str("EaseInOutCubic"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl PartialEq for Easing {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            (a, b) => core::mem::discriminant(a) == core::mem::discriminant(b),
        }
    }
}
