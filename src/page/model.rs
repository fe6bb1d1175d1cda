use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    animation::{
        spring::Spring,
        table::InterpolationTable,
        transition::{Entrance, Hover, Marquee, ViewportTrigger},
    },
    foundation::core::{Rect, Viewport},
    foundation::error::{ScrollfxError, ScrollfxResult},
    layer::style::StyleProperty,
    page::validate::{join_issues, validate_page},
    scroll::offset::ScrollOffset,
};

/// Current page description format version.
pub const PAGE_VERSION: &str = "1";

/// A complete scroll-driven page description.
///
/// A page is pure data that can be:
/// - built programmatically (see [`crate::PageBuilder`] and [`Page::landing`])
/// - serialized/deserialized via Serde (JSON)
///
/// Driving it is done by [`Page::mount`] or the [`crate::simulate`] sweep.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Page {
    /// Format version, must equal [`PAGE_VERSION`].
    pub version: String,
    /// Visible area of the host environment.
    pub viewport: Viewport,
    /// Region whose scroll drives every binding, in page coordinates.
    ///
    /// `None` (absent element) pins progress at 0.
    #[serde(default)]
    pub tracked_region: Option<Rect>,
    /// Start/end boundaries of the progress signal.
    #[serde(default)]
    pub offset: ScrollOffset,
    /// Scroll-linked layer bindings.
    #[serde(default)]
    pub bindings: Vec<LayerBinding>,
    /// Page sections in document order.
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Navigation bar links.
    #[serde(default)]
    pub nav: Vec<NavLink>,
    /// Time-based presentation effects.
    #[serde(default)]
    pub motion: MotionConfig,
}

/// Binds one table's output to one style property of one layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerBinding {
    pub layer: String,
    pub property: StyleProperty,
    pub table: InterpolationTable,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Section {
    /// Anchor id (`#about`).
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overline: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Layout box in page coordinates.
    pub region: Rect,
    /// Children revealed with the entrance stagger, in order.
    #[serde(default)]
    pub items: Vec<String>,
    /// Reveal condition; `None` reveals on mount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reveal: Option<ViewportTrigger>,
    /// Entrance for this section's items; `None` uses `motion.entrance`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrance: Option<Entrance>,
    /// Opaque 3D scene reference; only carried, never interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene: Option<SceneEmbed>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SceneEmbed {
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NavLink {
    pub label: String,
    /// Section id this link scrolls to.
    pub target: String,
}

/// Declarative effects applied by the render layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub entrance: Entrance,
    pub card_hover: Hover,
    pub solution_hover: Hover,
    pub marquee: Marquee,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            entrance: Entrance::default(),
            card_hover: Hover::lift(-6.0),
            solution_hover: Hover::tilt(
                6.0,
                Spring {
                    stiffness: 120.0,
                    damping: 15.0,
                    mass: 1.0,
                },
            ),
            marquee: Marquee::default(),
        }
    }
}

impl Page {
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> ScrollfxResult<Self> {
        let f = File::open(path).with_context(|| format!("open page '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn from_reader(r: impl std::io::Read) -> ScrollfxResult<Self> {
        let page: Self = serde_json::from_reader(r)
            .map_err(|e| ScrollfxError::serde(format!("parse page JSON: {e}")))?;
        page.validate()?;
        Ok(page)
    }

    pub fn from_json_str(s: &str) -> ScrollfxResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    pub fn to_json_pretty(&self) -> ScrollfxResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> ScrollfxResult<()> {
        validate_page(self)
            .map_err(|issues| ScrollfxError::validation(join_issues(&issues)))
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Entrance used for the items of `section`.
    pub fn entrance_for<'a>(&'a self, section: &'a Section) -> &'a Entrance {
        section.entrance.as_ref().unwrap_or(&self.motion.entrance)
    }

    /// Scroll position that brings `section_id` to the top of the viewport, clamped
    /// to the scrollable extent of the tracked region.
    pub fn anchor_scroll(&self, section_id: &str) -> Option<f64> {
        let section = self.section(section_id)?;
        let max = self
            .tracked_region
            .map(|r| (r.y1 - self.viewport.height).max(0.0))
            .unwrap_or(0.0);
        Some(section.region.y0.clamp(0.0, max))
    }
}
