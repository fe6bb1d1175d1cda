use super::*;

#[test]
fn default_style_renders_no_declarations() {
    assert_eq!(LayerStyle::default().to_css(), "");
    assert_eq!(LayerStyle::default().to_affine(), Affine::IDENTITY);
}

#[test]
fn css_for_parallax_and_fade() {
    let mut s = LayerStyle::default();
    s.set(StyleProperty::TranslateY, -75.0);
    s.set(StyleProperty::Opacity, 0.9);
    assert_eq!(s.to_css(), "transform: translateY(-75px); opacity: 0.9");

    s.set(StyleProperty::TranslateX, 10.0);
    s.set(StyleProperty::Scale, 1.5);
    assert_eq!(
        s.to_css(),
        "transform: translate(10px, -75px) scale(1.5); opacity: 0.9"
    );
}

#[test]
fn opacity_is_clamped_and_non_finite_values_ignored() {
    let mut s = LayerStyle::default();
    s.set(StyleProperty::Opacity, 1.4);
    assert_eq!(s.opacity, 1.0);
    s.set(StyleProperty::Opacity, -0.2);
    assert_eq!(s.opacity, 0.0);
    s.set(StyleProperty::TranslateY, f64::NAN);
    assert_eq!(s.get(StyleProperty::TranslateY), 0.0);
}

#[test]
fn affine_translates_layer_origin() {
    let mut s = LayerStyle::default();
    s.set(StyleProperty::TranslateY, 100.0);
    let p = s.to_affine() * kurbo::Point::new(5.0, 5.0);
    assert_eq!(p, kurbo::Point::new(5.0, 105.0));
}
