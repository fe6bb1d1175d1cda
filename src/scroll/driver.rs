use crate::{
    animation::table::{DerivedTransform, InterpolationTable},
    foundation::core::{Rect, Viewport},
    layer::consumer::LayerConsumer,
    layer::style::StyleProperty,
    scroll::source::ScrollProgressSource,
};

/// The value published for one scroll event. Every subscription sees the same
/// snapshot for a given `seq`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollSnapshot {
    pub seq: u64,
    pub scroll_y: f64,
    pub progress: f64, // [0, 1]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

struct Subscription {
    id: SubscriptionId,
    property: StyleProperty,
    transform: DerivedTransform,
    consumer: Box<dyn LayerConsumer>,
}

/// Owns the progress source and fans each snapshot out to independent subscriptions.
///
/// Data only flows source -> transform -> consumer; consumers cannot reach the source
/// or each other.
pub struct ScrollDriver {
    source: ScrollProgressSource,
    subs: Vec<Subscription>,
    next_id: u64,
    latest: ScrollSnapshot,
}

impl ScrollDriver {
    pub fn new(source: ScrollProgressSource) -> Self {
        let latest = ScrollSnapshot {
            seq: 0,
            scroll_y: 0.0,
            progress: source.progress_at(0.0),
        };
        Self {
            source,
            subs: Vec::new(),
            next_id: 0,
            latest,
        }
    }

    pub fn source(&self) -> &ScrollProgressSource {
        &self.source
    }

    pub fn latest(&self) -> ScrollSnapshot {
        self.latest
    }

    pub fn len(&self) -> usize {
        self.subs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subs.is_empty()
    }

    /// Bind `table`'s output to `property` on `consumer`. The consumer immediately
    /// receives the value for the latest snapshot.
    pub fn subscribe(
        &mut self,
        table: InterpolationTable,
        property: StyleProperty,
        mut consumer: Box<dyn LayerConsumer>,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        let mut transform = DerivedTransform::new(table);
        consumer.apply(property, transform.update(self.latest.progress));
        self.subs.push(Subscription {
            id,
            property,
            transform,
            consumer,
        });
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subs.len();
        self.subs.retain(|s| s.id != id);
        before != self.subs.len()
    }

    pub fn on_scroll(&mut self, scroll_y: f64) -> ScrollSnapshot {
        let snapshot = ScrollSnapshot {
            seq: self.latest.seq + 1,
            scroll_y,
            progress: self.source.progress_at(scroll_y),
        };
        self.publish(snapshot);
        snapshot
    }

    /// Replace the tracked geometry (resize, relayout) and republish at the current
    /// scroll position.
    pub fn set_geometry(&mut self, region: Option<Rect>, viewport: Viewport) -> ScrollSnapshot {
        self.source = ScrollProgressSource::new(region, viewport, self.source.offset());
        if self.source.is_degenerate() {
            tracing::warn!("tracked region is unmeasurable after relayout; progress pinned to 0");
        }
        self.on_scroll(self.latest.scroll_y)
    }

    fn publish(&mut self, snapshot: ScrollSnapshot) {
        for sub in &mut self.subs {
            let v = sub.transform.update(snapshot.progress);
            sub.consumer.apply(sub.property, v);
        }
        tracing::trace!(
            seq = snapshot.seq,
            scroll_y = snapshot.scroll_y,
            progress = snapshot.progress,
            subscribers = self.subs.len(),
            "published scroll snapshot"
        );
        self.latest = snapshot;
    }

    pub fn output(&self, id: SubscriptionId) -> Option<f64> {
        self.find(id).map(|s| s.transform.current())
    }

    pub fn property(&self, id: SubscriptionId) -> Option<StyleProperty> {
        self.find(id).map(|s| s.property)
    }

    pub fn consumer(&self, id: SubscriptionId) -> Option<&dyn LayerConsumer> {
        self.find(id).map(|s| s.consumer.as_ref())
    }

    fn find(&self, id: SubscriptionId) -> Option<&Subscription> {
        self.subs.iter().find(|s| s.id == id)
    }
}

impl Drop for ScrollDriver {
    fn drop(&mut self) {
        if !self.subs.is_empty() {
            tracing::debug!(subscriptions = self.subs.len(), "releasing scroll subscriptions");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/driver.rs"]
mod tests;
