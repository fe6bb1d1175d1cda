//! Declarative, time-based transition configs consumed by the render layer.
//!
//! These cover the presentation effects that are not scroll-linked: staggered entrance
//! of section items, hover lift, the looping testimonial marquee and the in-view
//! trigger that starts an entrance. Every config is plain data with a pure `sample`
//! style accessor; none of them own timers.

use crate::{
    animation::{ease::Ease, spring::Spring},
    foundation::error::{ScrollfxError, ScrollfxResult},
};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// Fixed-duration transition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tween {
    pub duration_s: f64,
    #[serde(default)]
    pub delay_s: f64,
    #[serde(default)]
    pub ease: Ease,
}

impl Tween {
    pub fn progress(self, secs: f64) -> f64 {
        if secs.is_nan() || secs < self.delay_s {
            return 0.0;
        }
        if self.duration_s <= 0.0 {
            return 1.0;
        }
        self.ease.apply((secs - self.delay_s) / self.duration_s)
    }

    pub fn validate(self) -> ScrollfxResult<()> {
        if !(self.duration_s.is_finite() && self.duration_s >= 0.0) {
            return Err(ScrollfxError::animation("tween duration_s must be >= 0"));
        }
        if !(self.delay_s.is_finite() && self.delay_s >= 0.0) {
            return Err(ScrollfxError::animation("tween delay_s must be >= 0"));
        }
        self.ease.validate()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Transition {
    Tween(Tween),
    Spring(Spring),
}

impl Transition {
    /// Progress from the start pose (0) toward the end pose (1) at `secs` after the
    /// transition began. Springs may overshoot 1.
    pub fn progress(self, secs: f64) -> f64 {
        match self {
            Self::Tween(t) => t.progress(secs),
            Self::Spring(s) => s.step(secs),
        }
    }

    pub fn validate(self) -> ScrollfxResult<()> {
        match self {
            Self::Tween(t) => t.validate(),
            Self::Spring(s) => s.validate(),
        }
    }
}

/// A visual pose of one element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate_y_deg: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            rotate_y_deg: 0.0,
        }
    }
}

impl Lerp for Pose {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            opacity: f64::lerp(&a.opacity, &b.opacity, t),
            x: f64::lerp(&a.x, &b.x, t),
            y: f64::lerp(&a.y, &b.y, t),
            scale: f64::lerp(&a.scale, &b.scale, t),
            rotate_y_deg: f64::lerp(&a.rotate_y_deg, &b.rotate_y_deg, t),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Variants {
    pub hidden: Pose,
    pub show: Pose,
}

impl Variants {
    pub fn at(&self, progress: f64) -> Pose {
        Pose::lerp(&self.hidden, &self.show, progress)
    }
}

/// Staggered entrance of a container's children.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Entrance {
    pub variants: Variants,
    pub transition: Transition,
    #[serde(default)]
    pub stagger_s: f64,
}

impl Default for Entrance {
    fn default() -> Self {
        Self {
            variants: Variants {
                hidden: Pose {
                    opacity: 0.0,
                    y: 20.0,
                    ..Pose::default()
                },
                show: Pose::default(),
            },
            transition: Transition::Tween(Tween {
                duration_s: 0.6,
                delay_s: 0.0,
                ease: Ease::EXPO_OUT,
            }),
            stagger_s: 0.08,
        }
    }
}

impl Entrance {
    /// Pose of child `index` at `secs` after the container was revealed.
    pub fn pose_at(&self, index: usize, secs: f64) -> Pose {
        let local = secs - (index as f64) * self.stagger_s;
        self.variants.at(self.transition.progress(local))
    }

    /// Time at which the last of `children` reaches its end pose (tweens only).
    pub fn total_duration_s(&self, children: usize) -> Option<f64> {
        let Transition::Tween(t) = self.transition else {
            return None;
        };
        let last = children.saturating_sub(1) as f64;
        Some(last * self.stagger_s + t.delay_s + t.duration_s)
    }

    pub fn validate(&self) -> ScrollfxResult<()> {
        if !(self.stagger_s.is_finite() && self.stagger_s >= 0.0) {
            return Err(ScrollfxError::animation("entrance stagger_s must be >= 0"));
        }
        self.transition.validate()
    }
}

/// Pointer-hover effect: `rest` while idle, `hovered` while the pointer is over.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hover {
    #[serde(default)]
    pub rest: Pose,
    pub hovered: Pose,
    pub transition: Transition,
}

impl Hover {
    pub fn lift(dy: f64) -> Self {
        Self {
            rest: Pose::default(),
            hovered: Pose {
                y: dy,
                ..Pose::default()
            },
            transition: Transition::Tween(Tween {
                duration_s: 0.2,
                delay_s: 0.0,
                ease: Ease::EaseOut,
            }),
        }
    }

    pub fn tilt(rotate_y_deg: f64, spring: Spring) -> Self {
        Self {
            rest: Pose::default(),
            hovered: Pose {
                rotate_y_deg,
                ..Pose::default()
            },
            transition: Transition::Spring(spring),
        }
    }

    /// Pose at `secs` since the pointer entered (`hovered == true`) or left.
    pub fn pose_at(&self, hovered: bool, secs: f64) -> Pose {
        let p = self.transition.progress(secs);
        if hovered {
            Pose::lerp(&self.rest, &self.hovered, p)
        } else {
            Pose::lerp(&self.hovered, &self.rest, p)
        }
    }

    pub fn validate(&self) -> ScrollfxResult<()> {
        self.transition.validate()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Repeat {
    #[default]
    Infinite,
    /// Extra cycles after the first; `Count(0)` plays once and holds the end.
    Count(u32),
}

/// Horizontal looping track (the testimonial carousel).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Marquee {
    pub from_pct: f64,
    pub to_pct: f64,
    pub duration_s: f64,
    #[serde(default)]
    pub repeat: Repeat,
    #[serde(default)]
    pub ease: Ease,
}

impl Default for Marquee {
    fn default() -> Self {
        Self {
            from_pct: 0.0,
            to_pct: -50.0,
            duration_s: 24.0,
            repeat: Repeat::Infinite,
            ease: Ease::Linear,
        }
    }
}

impl Marquee {
    /// Horizontal offset, in percent of the track width, at `secs` after start.
    pub fn offset_pct(&self, secs: f64) -> f64 {
        if secs.is_nan() || secs <= 0.0 || self.duration_s <= 0.0 {
            return self.from_pct;
        }
        let cycles = secs / self.duration_s;
        let frac = match self.repeat {
            Repeat::Count(n) if cycles >= f64::from(n) + 1.0 => 1.0,
            _ => cycles.fract(),
        };
        f64::lerp(&self.from_pct, &self.to_pct, self.ease.apply(frac))
    }

    pub fn validate(&self) -> ScrollfxResult<()> {
        if !(self.duration_s.is_finite() && self.duration_s > 0.0) {
            return Err(ScrollfxError::animation("marquee duration_s must be > 0"));
        }
        if !(self.from_pct.is_finite() && self.to_pct.is_finite()) {
            return Err(ScrollfxError::animation("marquee offsets must be finite"));
        }
        self.ease.validate()
    }
}

/// Reveal condition for a section: enough of it must be inside the viewport.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewportTrigger {
    #[serde(default = "default_once")]
    pub once: bool,
    /// Fraction of the element that must be visible; `0` means any visible pixel.
    #[serde(default = "default_amount")]
    pub amount: f64,
}

fn default_once() -> bool {
    true
}

fn default_amount() -> f64 {
    0.2
}

impl Default for ViewportTrigger {
    fn default() -> Self {
        Self {
            once: default_once(),
            amount: default_amount(),
        }
    }
}

impl ViewportTrigger {
    pub fn validate(&self) -> ScrollfxResult<()> {
        if !(0.0..=1.0).contains(&self.amount) {
            return Err(ScrollfxError::animation(
                "viewport trigger amount must be within [0, 1]",
            ));
        }
        Ok(())
    }
}

/// Tracks one element against a [`ViewportTrigger`].
#[derive(Clone, Copy, Debug)]
pub struct InView {
    trigger: ViewportTrigger,
    active: bool,
}

impl InView {
    pub fn new(trigger: ViewportTrigger) -> Self {
        Self {
            trigger,
            active: false,
        }
    }

    /// Feed the currently visible fraction; returns whether the element counts as in
    /// view. With `once`, the first activation latches.
    pub fn observe(&mut self, visible_fraction: f64) -> bool {
        if self.trigger.once && self.active {
            return true;
        }
        let hit = if self.trigger.amount <= 0.0 {
            visible_fraction > 0.0
        } else {
            visible_fraction >= self.trigger.amount
        };
        self.active = hit;
        hit
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transition.rs"]
mod tests;
