use crate::foundation::core::{Affine, Vec2};

/// A render-time style property a scroll binding can drive.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum StyleProperty {
    TranslateX, // px
    TranslateY, // px
    Opacity,    // clamped to [0, 1] when applied
    Scale,
    RotateDeg,
}

/// Computed style of one layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerStyle {
    pub translate: Vec2,
    pub opacity: f64,
    pub scale: f64,
    pub rotate_deg: f64,
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            opacity: 1.0,
            scale: 1.0,
            rotate_deg: 0.0,
        }
    }
}

impl LayerStyle {
    /// Non-finite values are ignored and leave the previous value in place.
    pub fn set(&mut self, property: StyleProperty, value: f64) {
        if !value.is_finite() {
            return;
        }
        match property {
            StyleProperty::TranslateX => self.translate.x = value,
            StyleProperty::TranslateY => self.translate.y = value,
            StyleProperty::Opacity => self.opacity = value.clamp(0.0, 1.0),
            StyleProperty::Scale => self.scale = value,
            StyleProperty::RotateDeg => self.rotate_deg = value,
        }
    }

    pub fn get(&self, property: StyleProperty) -> f64 {
        match property {
            StyleProperty::TranslateX => self.translate.x,
            StyleProperty::TranslateY => self.translate.y,
            StyleProperty::Opacity => self.opacity,
            StyleProperty::Scale => self.scale,
            StyleProperty::RotateDeg => self.rotate_deg,
        }
    }

    /// Layer-local transform, applied as translate * rotate * scale about the origin.
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translate)
            * Affine::rotate(self.rotate_deg.to_radians())
            * Affine::scale(self.scale)
    }

    /// CSS declarations for this style; identity components are omitted.
    pub fn to_css(&self) -> String {
        let mut transform = Vec::new();
        match (self.translate.x != 0.0, self.translate.y != 0.0) {
            (true, true) => transform.push(format!(
                "translate({}px, {}px)",
                self.translate.x, self.translate.y
            )),
            (true, false) => transform.push(format!("translateX({}px)", self.translate.x)),
            (false, true) => transform.push(format!("translateY({}px)", self.translate.y)),
            (false, false) => {}
        }
        if self.rotate_deg != 0.0 {
            transform.push(format!("rotate({}deg)", self.rotate_deg));
        }
        if self.scale != 1.0 {
            transform.push(format!("scale({})", self.scale));
        }

        let mut decls = Vec::new();
        if !transform.is_empty() {
            decls.push(format!("transform: {}", transform.join(" ")));
        }
        if self.opacity != 1.0 {
            decls.push(format!("opacity: {}", self.opacity));
        }
        decls.join("; ")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layer/style.rs"]
mod tests;
