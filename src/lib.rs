//! Scrollfx turns page scroll position into layer style values.
//!
//! A page tracks one region of its layout. As the page scrolls, the region's scroll
//! progress (a number in `[0, 1]`) is fed through per-layer [`InterpolationTable`]s
//! whose outputs drive a translate, opacity or scale property of a named layer.
//!
//! # Pipeline overview
//!
//! 1. **Measure**: `Rect + Viewport + ScrollOffset -> scroll range` ([`ScrollProgressSource`])
//! 2. **Map**: `progress -> value` per binding ([`DerivedTransform`])
//! 3. **Apply**: `value -> LayerStyle` on an independent [`LayerConsumer`]
//!
//! [`ScrollDriver`] owns one source and fans every scroll event out to its
//! subscriptions. [`Page::mount`] wires a whole [`Page`] description this way, and
//! [`simulate`] drives a mounted page through a scripted scroll for inspection.
//!
//! Everything is synchronous and deterministic: identical input always produces
//! identical output, and degenerate geometry yields progress `0.0` rather than an
//! error.
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod layer;
mod page;
mod scroll;
mod session;

pub use animation::ease::Ease;
pub use animation::spring::Spring;
pub use animation::table::{ControlPoint, DerivedTransform, InterpolationTable};
pub use animation::transition::{
    Entrance, Hover, InView, Lerp, Marquee, Pose, Repeat, Transition, Tween, Variants,
    ViewportTrigger,
};
pub use foundation::core::{Affine, Fps, FrameIndex, Rect, Vec2, Viewport, visible_fraction};
pub use foundation::error::{ScrollfxError, ScrollfxResult};
pub use layer::consumer::{LayerConsumer, RecordingLayer, RenderLayer};
pub use layer::style::{LayerStyle, StyleProperty};
pub use page::dsl::PageBuilder;
pub use page::form::{ACKNOWLEDGMENT, Acknowledgment, ContactForm};
pub use page::model::{
    LayerBinding, MotionConfig, NavLink, PAGE_VERSION, Page, SceneEmbed, Section,
};
pub use page::mount::{MountedPage, SectionState};
pub use scroll::driver::{ScrollDriver, ScrollSnapshot, SubscriptionId};
pub use scroll::offset::{Edge, Intersection, ScrollOffset};
pub use scroll::source::ScrollProgressSource;
pub use session::simulate::{FrameSample, ScrollSweep, SweepStats, simulate};
pub use session::sink::{InMemorySink, JsonLinesSink, SampleSink, SweepConfig};
