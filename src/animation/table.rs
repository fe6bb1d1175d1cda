use smallvec::SmallVec;

use crate::{
    animation::ease::Ease,
    foundation::error::{ScrollfxError, ScrollfxResult},
};

/// One knot of an [`InterpolationTable`].
///
/// JSON form is the pair `[domain, range]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct ControlPoint {
    pub domain: f64,
    pub range: f64,
}

impl From<[f64; 2]> for ControlPoint {
    fn from([domain, range]: [f64; 2]) -> Self {
        Self { domain, range }
    }
}

impl From<ControlPoint> for [f64; 2] {
    fn from(p: ControlPoint) -> Self {
        [p.domain, p.range]
    }
}

impl From<(f64, f64)> for ControlPoint {
    fn from((domain, range): (f64, f64)) -> Self {
        Self { domain, range }
    }
}

/// Piecewise-linear map from scroll progress to an output scalar.
///
/// Tables are immutable once built and always hold at least two finite control points
/// in non-decreasing domain order. Inputs outside the domain clamp to the boundary
/// range values; nothing is extrapolated.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct InterpolationTable {
    points: SmallVec<[ControlPoint; 4]>,
    #[serde(skip_serializing_if = "Ease::is_linear")]
    ease: Ease, // applied within each segment
}

impl InterpolationTable {
    pub fn new<P>(points: impl IntoIterator<Item = P>) -> ScrollfxResult<Self>
    where
        P: Into<ControlPoint>,
    {
        let table = Self {
            points: points.into_iter().map(Into::into).collect(),
            ease: Ease::Linear,
        };
        table.validate()?;
        Ok(table)
    }

    /// Pair `domain` and `range` element-wise, the way scroll transforms are usually
    /// written (`[0, 0.4, 1] -> [1, 0.8, 0.6]`).
    pub fn from_domain_range(domain: &[f64], range: &[f64]) -> ScrollfxResult<Self> {
        if domain.len() != range.len() {
            return Err(ScrollfxError::animation(format!(
                "domain has {} entries but range has {}",
                domain.len(),
                range.len()
            )));
        }
        Self::new(domain.iter().copied().zip(range.iter().copied()))
    }

    pub fn with_ease(mut self, ease: Ease) -> ScrollfxResult<Self> {
        ease.validate()?;
        self.ease = ease;
        Ok(self)
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    pub fn ease(&self) -> Ease {
        self.ease
    }

    fn validate(&self) -> ScrollfxResult<()> {
        if self.points.len() < 2 {
            return Err(ScrollfxError::animation(
                "interpolation table needs at least two control points",
            ));
        }
        if !self
            .points
            .iter()
            .all(|p| p.domain.is_finite() && p.range.is_finite())
        {
            return Err(ScrollfxError::animation(
                "interpolation control points must be finite",
            ));
        }
        if !self.points.windows(2).all(|w| w[0].domain <= w[1].domain) {
            return Err(ScrollfxError::animation(
                "interpolation control points must be sorted by domain",
            ));
        }
        self.ease.validate()
    }

    /// Map `input` through the table.
    pub fn sample(&self, input: f64) -> f64 {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if input.is_nan() || input <= first.domain {
            return first.range;
        }
        if input >= last.domain {
            return last.range;
        }

        // first.domain < input < last.domain, so 1 <= idx < len.
        let idx = self.points.partition_point(|p| p.domain <= input);
        let a = self.points[idx - 1];
        let b = self.points[idx];
        let span = b.domain - a.domain;
        if span <= 0.0 {
            return b.range;
        }

        let t = (input - a.domain) / span;
        a.range + (b.range - a.range) * self.ease.apply(t)
    }
}

impl<'de> serde::Deserialize<'de> for InterpolationTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            List(Vec<ControlPoint>),
            Obj {
                points: Vec<ControlPoint>,
                #[serde(default)]
                ease: Ease,
            },
            Split {
                domain: Vec<f64>,
                range: Vec<f64>,
                #[serde(default)]
                ease: Ease,
            },
        }

        let table = match Repr::deserialize(deserializer)? {
            Repr::List(points) => Self::new(points),
            Repr::Obj { points, ease } => Self::new(points).and_then(|t| t.with_ease(ease)),
            Repr::Split {
                domain,
                range,
                ease,
            } => Self::from_domain_range(&domain, &range).and_then(|t| t.with_ease(ease)),
        };
        table.map_err(serde::de::Error::custom)
    }
}

/// A table paired with the output it last produced.
///
/// The output is a cache of `table.sample(progress)` for the most recent progress; it
/// never feeds back into later samples.
#[derive(Clone, Debug)]
pub struct DerivedTransform {
    table: InterpolationTable,
    current: f64,
}

impl DerivedTransform {
    pub fn new(table: InterpolationTable) -> Self {
        let current = table.sample(0.0);
        Self { table, current }
    }

    pub fn update(&mut self, progress: f64) -> f64 {
        self.current = self.table.sample(progress);
        self.current
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn table(&self) -> &InterpolationTable {
        &self.table
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/table.rs"]
mod tests;
