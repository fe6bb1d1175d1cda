use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ScrollfxError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ScrollfxError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        ScrollfxError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        ScrollfxError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ScrollfxError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_map_to_serde_variant() {
    let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = ScrollfxError::from(bad);
    assert!(matches!(err, ScrollfxError::Serde(_)));
}
