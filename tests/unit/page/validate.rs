use super::*;
use crate::{
    animation::transition::ViewportTrigger,
    page::model::{LayerBinding, NavLink},
};

fn messages(page: &Page) -> Vec<String> {
    match validate_page(page) {
        Ok(()) => Vec::new(),
        Err(issues) => issues.iter().map(ToString::to_string).collect(),
    }
}

#[test]
fn landing_page_has_no_issues() {
    let page = Page::landing().unwrap();
    assert!(messages(&page).is_empty());
}

#[test]
fn wrong_version_is_reported_at_root_field() {
    let mut page = Page::landing().unwrap();
    page.version = "2".to_string();
    assert_eq!(messages(&page), vec!["$.version: version must be \"1\""]);
}

#[test]
fn duplicate_binding_for_same_layer_property_is_rejected() {
    let mut page = Page::landing().unwrap();
    let dup: LayerBinding = page.bindings[0].clone();
    page.bindings.push(dup);
    let msgs = messages(&page);
    assert_eq!(msgs.len(), 1);
    assert!(msgs[0].starts_with("$.bindings[3]: layer 'hero' already has a binding"));
}

#[test]
fn same_layer_may_bind_different_properties() {
    let mut page = Page::landing().unwrap();
    let mut fade = page.bindings[0].clone();
    fade.property = crate::layer::style::StyleProperty::Opacity;
    page.bindings.push(fade);
    assert!(messages(&page).is_empty());
}

#[test]
fn all_issues_are_collected_with_paths() {
    let mut page = Page::landing().unwrap();
    page.bindings[1].layer = " ".to_string();
    page.sections[2].region = Rect::new(0.0, 500.0, 1440.0, 100.0);
    page.sections[3].reveal = Some(ViewportTrigger {
        once: true,
        amount: 1.5,
    });
    page.nav.push(NavLink {
        label: "Pricing".to_string(),
        target: "pricing".to_string(),
    });
    page.motion.marquee.duration_s = 0.0;

    let msgs = messages(&page);
    let paths: Vec<&str> = msgs
        .iter()
        .map(|m| m.split(':').next().unwrap())
        .collect();
    assert_eq!(
        paths,
        vec![
            "$.bindings[1]",
            "$.sections[2].region",
            "$.sections[3].reveal",
            "$.nav[5].target",
            "$.motion.marquee",
        ]
    );
}

#[test]
fn duplicate_and_empty_section_ids() {
    let mut page = Page::landing().unwrap();
    page.sections[1].id = "hero".to_string();
    page.sections[2].id = String::new();
    let msgs = messages(&page);
    assert!(msgs.contains(&"$.sections[1]: duplicate section id 'hero'".to_string()));
    assert!(msgs.contains(&"$.sections[2]: section id must be non-empty".to_string()));
}

#[test]
fn empty_tracked_region_is_allowed_but_non_finite_is_not() {
    let mut page = Page::landing().unwrap();
    page.tracked_region = Some(Rect::new(0.0, 100.0, 1440.0, 100.0));
    assert!(messages(&page).is_empty());

    page.tracked_region = Some(Rect::new(0.0, f64::NAN, 1440.0, 100.0));
    assert_eq!(
        messages(&page),
        vec!["$.tracked_region: tracked_region coordinates must be finite"]
    );
}

#[test]
fn issues_join_one_per_line_in_the_error() {
    let mut page = Page::landing().unwrap();
    page.version = "x".to_string();
    page.viewport.height = 0.0;
    let err = page.validate().unwrap_err().to_string();
    assert!(err.contains("$.version"));
    assert!(err.contains("\n$.viewport"));
}

#[test]
fn section_entrance_override_is_checked() {
    let mut page = Page::landing().unwrap();
    let mut entrance = page.sections[3].entrance.unwrap();
    entrance.stagger_s = -0.5;
    page.sections[3].entrance = Some(entrance);
    let msgs = messages(&page);
    assert_eq!(msgs.len(), 1);
    assert!(msgs[0].starts_with("$.sections[3].entrance: "), "{}", msgs[0]);
}
