use std::{fmt, str::FromStr};

use crate::foundation::error::{ScrollfxError, ScrollfxResult};

/// A point along the vertical axis of an element, as a fraction of its height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    Start,
    Center,
    End,
    Fraction(f64),
}

impl Edge {
    pub fn fraction(self) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::Center => 0.5,
            Self::End => 1.0,
            Self::Fraction(f) => f,
        }
    }
}

impl FromStr for Edge {
    type Err = ScrollfxError;

    fn from_str(s: &str) -> ScrollfxResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(Self::Start),
            "center" => Ok(Self::Center),
            "end" => Ok(Self::End),
            other => {
                let f: f64 = other
                    .parse()
                    .map_err(|_| ScrollfxError::validation(format!("unknown edge '{other}'")))?;
                if !f.is_finite() {
                    return Err(ScrollfxError::validation(format!(
                        "edge fraction '{other}' must be finite"
                    )));
                }
                Ok(Self::Fraction(f))
            }
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Center => f.write_str("center"),
            Self::End => f.write_str("end"),
            Self::Fraction(v) => write!(f, "{v}"),
        }
    }
}

/// The moment a point of the tracked region meets a point of the viewport.
///
/// `"start end"` reads as: the region's top edge meets the viewport's bottom edge.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Intersection {
    pub target: Edge,
    pub container: Edge,
}

impl Intersection {
    pub const fn new(target: Edge, container: Edge) -> Self {
        Self { target, container }
    }

    /// Scroll position at which this intersection happens for a region spanning
    /// `top..top + height` in page space and a viewport of `viewport_height`.
    pub fn scroll_position(self, top: f64, height: f64, viewport_height: f64) -> f64 {
        top + self.target.fraction() * height - self.container.fraction() * viewport_height
    }
}

impl FromStr for Intersection {
    type Err = ScrollfxError;

    fn from_str(s: &str) -> ScrollfxResult<Self> {
        let mut parts = s.split_whitespace();
        let (Some(a), b, None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ScrollfxError::validation(format!(
                "scroll intersection '{s}' must be one or two edges"
            )));
        };
        let target: Edge = a.parse()?;
        let container = match b {
            Some(b) => b.parse()?,
            None => target,
        };
        Ok(Self { target, container })
    }
}

impl TryFrom<String> for Intersection {
    type Error = ScrollfxError;

    fn try_from(s: String) -> ScrollfxResult<Self> {
        s.parse()
    }
}

impl From<Intersection> for String {
    fn from(i: Intersection) -> Self {
        i.to_string()
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.target, self.container)
    }
}

/// Start and end boundaries of a scroll-progress source.
///
/// JSON form: `["start start", "end end"]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "[Intersection; 2]", into = "[Intersection; 2]")]
pub struct ScrollOffset {
    pub start: Intersection,
    pub end: Intersection,
}

impl Default for ScrollOffset {
    fn default() -> Self {
        Self {
            start: Intersection::new(Edge::Start, Edge::Start),
            end: Intersection::new(Edge::End, Edge::End),
        }
    }
}

impl From<[Intersection; 2]> for ScrollOffset {
    fn from([start, end]: [Intersection; 2]) -> Self {
        Self { start, end }
    }
}

impl From<ScrollOffset> for [Intersection; 2] {
    fn from(o: ScrollOffset) -> Self {
        [o.start, o.end]
    }
}

impl ScrollOffset {
    pub fn parse(start: &str, end: &str) -> ScrollfxResult<Self> {
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/offset.rs"]
mod tests;
