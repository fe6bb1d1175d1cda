use crate::foundation::error::{ScrollfxError, ScrollfxResult};

/// Easing curve applied to a normalized fraction in `[0, 1]`.
///
/// JSON form: unit variants are snake_case strings (`"linear"`, `"ease_out"`), the
/// CSS-style curve is `{"cubic_bezier": [x1, y1, x2, y2]}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicBezier([f64; 4]),
}

impl Ease {
    /// The entrance curve used for the landing page's staggered items.
    pub const EXPO_OUT: Self = Self::CubicBezier([0.16, 1.0, 0.3, 1.0]);

    pub fn apply(self, t: f64) -> f64 {
        if t.is_nan() {
            return 0.0;
        }
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::EaseIn => cubic_bezier_ease(t, 0.42, 0.0, 1.0, 1.0),
            Self::EaseOut => cubic_bezier_ease(t, 0.0, 0.0, 0.58, 1.0),
            Self::EaseInOut => cubic_bezier_ease(t, 0.42, 0.0, 0.58, 1.0),
            Self::CubicBezier([x1, y1, x2, y2]) => cubic_bezier_ease(t, x1, y1, x2, y2),
        }
    }

    pub fn validate(self) -> ScrollfxResult<()> {
        if let Self::CubicBezier(p) = self {
            if !p.iter().all(|v| v.is_finite()) {
                return Err(ScrollfxError::animation(
                    "cubic_bezier control points must be finite",
                ));
            }
            if !(0.0..=1.0).contains(&p[0]) || !(0.0..=1.0).contains(&p[2]) {
                return Err(ScrollfxError::animation(
                    "cubic_bezier x1 and x2 must be within [0, 1]",
                ));
            }
        }
        Ok(())
    }

    pub fn is_linear(&self) -> bool {
        matches!(self, Self::Linear)
    }
}

fn cubic_bezier_ease(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    // CSS cubic-bezier: solve u with bx(u) = x, then return by(u).
    fn sample_curve(a1: f64, a2: f64, t: f64) -> f64 {
        let omt = 1.0 - t;
        3.0 * omt * omt * t * a1 + 3.0 * omt * t * t * a2 + t * t * t
    }
    fn sample_curve_derivative(a1: f64, a2: f64, t: f64) -> f64 {
        let omt = 1.0 - t;
        3.0 * omt * omt * a1 + 6.0 * omt * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    let mut t = x;
    for _ in 0..8 {
        let err = sample_curve(x1, x2, t) - x;
        if err.abs() < 1e-9 {
            return sample_curve(y1, y2, t);
        }
        let d = sample_curve_derivative(x1, x2, t);
        if d.abs() < 1e-7 {
            break;
        }
        t = (t - err / d).clamp(0.0, 1.0);
    }

    // bx is monotonic for x1, x2 in [0, 1]; bisection always converges.
    let mut lo = 0.0;
    let mut hi = 1.0;
    t = x;
    for _ in 0..48 {
        let x_t = sample_curve(x1, x2, t);
        if (x_t - x).abs() < 1e-9 {
            break;
        }
        if x_t < x {
            lo = t;
        } else {
            hi = t;
        }
        t = 0.5 * (lo + hi);
    }

    sample_curve(y1, y2, t)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
