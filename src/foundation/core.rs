use crate::foundation::error::{ScrollfxError, ScrollfxResult};

pub use kurbo::{Affine, Rect, Vec2};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> ScrollfxResult<Self> {
        if den == 0 {
            return Err(ScrollfxError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(ScrollfxError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }
}

/// Visible area of the host environment, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> ScrollfxResult<Self> {
        let vp = Self { width, height };
        if !vp.is_valid() {
            return Err(ScrollfxError::validation(
                "viewport dimensions must be finite and > 0",
            ));
        }
        Ok(vp)
    }

    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// The page-space rectangle visible when the page is scrolled to `scroll_y`.
    pub fn visible_rect(self, scroll_y: f64) -> Rect {
        Rect::new(0.0, scroll_y, self.width, scroll_y + self.height)
    }
}

/// Fraction of `region`'s height that intersects `visible`, in `[0, 1]`.
///
/// Empty or non-finite regions report `0.0`.
pub fn visible_fraction(region: Rect, visible: Rect) -> f64 {
    let h = region.height();
    if !h.is_finite() || h <= 0.0 {
        return 0.0;
    }
    let top = region.y0.max(visible.y0);
    let bottom = region.y1.min(visible.y1);
    ((bottom - top) / h).clamp(0.0, 1.0)
}
