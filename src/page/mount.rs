use std::collections::BTreeMap;

use crate::{
    animation::transition::{InView, Pose},
    foundation::core::visible_fraction,
    foundation::error::ScrollfxResult,
    layer::consumer::RenderLayer,
    layer::style::LayerStyle,
    page::model::Page,
    scroll::driver::{ScrollDriver, ScrollSnapshot, SubscriptionId},
    scroll::source::ScrollProgressSource,
};

/// Reveal state of one section.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SectionState {
    pub in_view: bool,
    /// Clock time at which the section was first revealed.
    pub revealed_at_s: Option<f64>,
}

struct SectionTracker {
    in_view: Option<InView>, // None: revealed on mount
    state: SectionState,
}

struct LayerSub {
    layer: String,
    id: SubscriptionId,
}

/// A page view with live scroll subscriptions. Dropping it tears them down.
pub struct MountedPage<'p> {
    page: &'p Page,
    driver: ScrollDriver,
    layers: Vec<LayerSub>,
    sections: Vec<SectionTracker>,
    clock_s: f64,
}

impl Page {
    #[tracing::instrument(skip(self), fields(bindings = self.bindings.len()))]
    pub fn mount(&self) -> ScrollfxResult<MountedPage<'_>> {
        self.validate()?;

        let source = ScrollProgressSource::new(self.tracked_region, self.viewport, self.offset);
        if source.is_degenerate() {
            tracing::warn!(
                region = ?self.tracked_region,
                "tracked region is unmeasurable; scroll progress pinned to 0"
            );
        }

        let mut driver = ScrollDriver::new(source);
        let layers = self
            .bindings
            .iter()
            .map(|b| LayerSub {
                layer: b.layer.clone(),
                id: driver.subscribe(
                    b.table.clone(),
                    b.property,
                    Box::new(RenderLayer::new(b.layer.clone())),
                ),
            })
            .collect();

        let sections = self
            .sections
            .iter()
            .map(|s| SectionTracker {
                in_view: s.reveal.map(InView::new),
                state: SectionState {
                    in_view: s.reveal.is_none(),
                    revealed_at_s: s.reveal.is_none().then_some(0.0),
                },
            })
            .collect();

        let mut mounted = MountedPage {
            page: self,
            driver,
            layers,
            sections,
            clock_s: 0.0,
        };
        mounted.observe_sections(0.0);
        Ok(mounted)
    }
}

impl<'p> MountedPage<'p> {
    pub fn page(&self) -> &'p Page {
        self.page
    }

    pub fn driver(&self) -> &ScrollDriver {
        &self.driver
    }

    pub fn clock_s(&self) -> f64 {
        self.clock_s
    }

    /// Advance the presentation clock used by time-based effects. Time never runs
    /// backwards.
    pub fn tick(&mut self, secs: f64) {
        if secs.is_finite() && secs > self.clock_s {
            self.clock_s = secs;
        }
    }

    pub fn scroll_to(&mut self, scroll_y: f64) -> ScrollSnapshot {
        let snap = self.driver.on_scroll(scroll_y);
        self.observe_sections(scroll_y);
        snap
    }

    /// Scroll so that `section_id` sits at the top of the viewport.
    pub fn scroll_to_section(&mut self, section_id: &str) -> Option<ScrollSnapshot> {
        let y = self.page.anchor_scroll(section_id)?;
        Some(self.scroll_to(y))
    }

    pub fn snapshot(&self) -> ScrollSnapshot {
        self.driver.latest()
    }

    /// Style of `layer`, composed from the consumers bound to it.
    pub fn layer_style(&self, layer: &str) -> Option<LayerStyle> {
        let mut style: Option<LayerStyle> = None;
        for sub in self.layers.iter().filter(|l| l.layer == layer) {
            let (Some(consumer), Some(property)) =
                (self.driver.consumer(sub.id), self.driver.property(sub.id))
            else {
                continue;
            };
            style
                .get_or_insert_with(LayerStyle::default)
                .set(property, consumer.style().get(property));
        }
        style
    }

    pub fn layer_styles(&self) -> BTreeMap<String, LayerStyle> {
        let mut out = BTreeMap::new();
        for sub in &self.layers {
            if !out.contains_key(&sub.layer)
                && let Some(style) = self.layer_style(&sub.layer)
            {
                out.insert(sub.layer.clone(), style);
            }
        }
        out
    }

    pub fn section_state(&self, id: &str) -> Option<SectionState> {
        let idx = self.page.sections.iter().position(|s| s.id == id)?;
        Some(self.sections[idx].state)
    }

    pub fn revealed_sections(&self) -> Vec<String> {
        self.page
            .sections
            .iter()
            .zip(&self.sections)
            .filter(|(_, t)| t.state.revealed_at_s.is_some())
            .map(|(s, _)| s.id.clone())
            .collect()
    }

    /// Entrance pose of item `index` of `section_id` at the current clock. Items of
    /// unrevealed sections stay in the hidden pose.
    pub fn entrance_pose(&self, section_id: &str, index: usize) -> Option<Pose> {
        let idx = self.page.sections.iter().position(|s| s.id == section_id)?;
        let state = self.sections[idx].state;
        let entrance = self.page.entrance_for(&self.page.sections[idx]);
        Some(match state.revealed_at_s {
            Some(t0) => entrance.pose_at(index, self.clock_s - t0),
            None => entrance.variants.hidden,
        })
    }

    pub fn marquee_offset_pct(&self) -> f64 {
        self.page.motion.marquee.offset_pct(self.clock_s)
    }

    fn observe_sections(&mut self, scroll_y: f64) {
        let visible = self.page.viewport.visible_rect(scroll_y);
        for (section, tracker) in self.page.sections.iter().zip(&mut self.sections) {
            let Some(in_view) = tracker.in_view.as_mut() else {
                continue;
            };
            let active = in_view.observe(visible_fraction(section.region, visible));
            tracker.state.in_view = active;
            if active && tracker.state.revealed_at_s.is_none() {
                tracker.state.revealed_at_s = Some(self.clock_s);
                tracing::debug!(section = %section.id, at_s = self.clock_s, "section revealed");
            }
        }
    }
}

impl Drop for MountedPage<'_> {
    fn drop(&mut self) {
        tracing::debug!(layers = self.layers.len(), "unmounting page");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/mount.rs"]
mod tests;
