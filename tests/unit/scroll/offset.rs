use super::*;

#[test]
fn parses_keyword_pairs() {
    let i: Intersection = "start end".parse().unwrap();
    assert_eq!(i, Intersection::new(Edge::Start, Edge::End));
    let i: Intersection = "  Center   0.25 ".parse().unwrap();
    assert_eq!(i, Intersection::new(Edge::Center, Edge::Fraction(0.25)));
}

#[test]
fn single_edge_applies_to_both_sides() {
    let i: Intersection = "end".parse().unwrap();
    assert_eq!(i, Intersection::new(Edge::End, Edge::End));
}

#[test]
fn rejects_malformed_intersections() {
    assert!("".parse::<Intersection>().is_err());
    assert!("start end center".parse::<Intersection>().is_err());
    assert!("top bottom".parse::<Intersection>().is_err());
    assert!("inf start".parse::<Intersection>().is_err());
}

#[test]
fn scroll_position_for_default_offsets() {
    let o = ScrollOffset::default();
    // Region 2000px tall starting 100px down, viewport 800px.
    assert_eq!(o.start.scroll_position(100.0, 2000.0, 800.0), 100.0);
    assert_eq!(o.end.scroll_position(100.0, 2000.0, 800.0), 1300.0);
}

#[test]
fn json_roundtrips_through_strings() {
    let o: ScrollOffset = serde_json::from_str(r#"["start end", "end start"]"#).unwrap();
    assert_eq!(o, ScrollOffset::parse("start end", "end start").unwrap());
    let s = serde_json::to_string(&ScrollOffset::default()).unwrap();
    assert_eq!(s, r#"["start start","end end"]"#);
}
