use crate::{
    foundation::core::{Rect, Viewport},
    scroll::offset::ScrollOffset,
};

/// Reports how far a tracked region has scrolled through the viewport, in `[0, 1]`.
///
/// Progress is `0.0` at the start boundary and `1.0` at the end boundary and holds
/// those values outside the range. An absent, empty or otherwise unmeasurable region
/// yields a constant `0.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollProgressSource {
    region: Option<Rect>,
    viewport: Viewport,
    offset: ScrollOffset,
}

impl ScrollProgressSource {
    pub fn new(region: Option<Rect>, viewport: Viewport, offset: ScrollOffset) -> Self {
        Self {
            region,
            viewport,
            offset,
        }
    }

    pub fn region(&self) -> Option<Rect> {
        self.region
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn offset(&self) -> ScrollOffset {
        self.offset
    }

    /// Scroll positions of the start and end boundaries, or `None` when the geometry
    /// cannot produce a non-empty range.
    pub fn scroll_range(&self) -> Option<(f64, f64)> {
        let region = self.region?;
        let top = region.y0;
        let height = region.height();
        let vh = self.viewport.height;
        if !top.is_finite() || !height.is_finite() || height <= 0.0 || !vh.is_finite() {
            return None;
        }

        let s0 = self.offset.start.scroll_position(top, height, vh);
        let s1 = self.offset.end.scroll_position(top, height, vh);
        if !(s0.is_finite() && s1.is_finite()) || s1 <= s0 {
            return None;
        }
        Some((s0, s1))
    }

    pub fn is_degenerate(&self) -> bool {
        self.scroll_range().is_none()
    }

    pub fn progress_at(&self, scroll_y: f64) -> f64 {
        let Some((s0, s1)) = self.scroll_range() else {
            return 0.0;
        };
        if !scroll_y.is_finite() {
            return 0.0;
        }
        ((scroll_y - s0) / (s1 - s0)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/source.rs"]
mod tests;
