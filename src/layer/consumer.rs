use crate::layer::style::{LayerStyle, StyleProperty};

/// Render-side endpoint of one scroll binding.
///
/// A consumer owns its style state exclusively. It is handed each new output value
/// synchronously and must not block.
pub trait LayerConsumer {
    fn apply(&mut self, property: StyleProperty, value: f64);

    fn style(&self) -> &LayerStyle;
}

/// A named visual layer that keeps the latest applied style.
#[derive(Clone, Debug)]
pub struct RenderLayer {
    name: String,
    style: LayerStyle,
    applied: u64,
}

impl RenderLayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            style: LayerStyle::default(),
            applied: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of values applied so far.
    pub fn applied(&self) -> u64 {
        self.applied
    }
}

impl LayerConsumer for RenderLayer {
    fn apply(&mut self, property: StyleProperty, value: f64) {
        self.style.set(property, value);
        self.applied += 1;
    }

    fn style(&self) -> &LayerStyle {
        &self.style
    }
}

/// Keeps every applied value, in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingLayer {
    style: LayerStyle,
    pub history: Vec<(StyleProperty, f64)>,
}

impl RecordingLayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LayerConsumer for RecordingLayer {
    fn apply(&mut self, property: StyleProperty, value: f64) {
        self.style.set(property, value);
        self.history.push((property, value));
    }

    fn style(&self) -> &LayerStyle {
        &self.style
    }
}
