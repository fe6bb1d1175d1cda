use super::*;

#[test]
fn tween_respects_delay_and_duration() {
    let t = Tween {
        duration_s: 1.0,
        delay_s: 0.5,
        ease: Ease::Linear,
    };
    assert_eq!(t.progress(0.0), 0.0);
    assert_eq!(t.progress(0.5), 0.0);
    assert!((t.progress(1.0) - 0.5).abs() < 1e-12);
    assert_eq!(t.progress(10.0), 1.0);

    let instant = Tween {
        duration_s: 0.0,
        delay_s: 0.0,
        ease: Ease::Linear,
    };
    assert_eq!(instant.progress(0.0), 1.0);
}

#[test]
fn entrance_staggers_children() {
    let e = Entrance::default();
    let first = e.pose_at(0, 0.0);
    assert_eq!(first, e.variants.hidden);

    // Child 2 starts 0.16s later than child 0.
    let c0 = e.pose_at(0, 0.2);
    let c2 = e.pose_at(2, 0.2);
    assert!(c0.opacity > c2.opacity);
    assert!(c0.y < c2.y);

    let done = e.pose_at(3, 5.0);
    assert!((done.opacity - 1.0).abs() < 1e-9);
    assert!(done.y.abs() < 1e-9);
}

#[test]
fn entrance_total_duration_accounts_for_stagger() {
    let e = Entrance::default();
    let d = e.total_duration_s(3).unwrap();
    assert!((d - (2.0 * 0.08 + 0.6)).abs() < 1e-12);
    assert!((e.total_duration_s(0).unwrap() - 0.6).abs() < 1e-12);
}

#[test]
fn hover_lift_moves_up_and_back() {
    let h = Hover::lift(-6.0);
    assert_eq!(h.pose_at(true, 0.0).y, 0.0);
    assert!((h.pose_at(true, 1.0).y + 6.0).abs() < 1e-9);
    assert_eq!(h.pose_at(false, 0.0).y, -6.0);
    assert!(h.pose_at(false, 1.0).y.abs() < 1e-9);
}

#[test]
fn hover_tilt_uses_spring() {
    let h = Hover::tilt(
        6.0,
        Spring {
            stiffness: 120.0,
            damping: 15.0,
            mass: 1.0,
        },
    );
    assert!((h.pose_at(true, 5.0).rotate_y_deg - 6.0).abs() < 1e-5);
    let overshoot = (1..100)
        .map(|i| h.pose_at(true, f64::from(i) * 0.02).rotate_y_deg)
        .fold(f64::MIN, f64::max);
    assert!(overshoot > 6.0);
}

#[test]
fn marquee_loops_forever_by_default() {
    let m = Marquee::default();
    assert_eq!(m.offset_pct(0.0), 0.0);
    assert!((m.offset_pct(12.0) + 25.0).abs() < 1e-9);
    assert!((m.offset_pct(36.0) + 25.0).abs() < 1e-9);
    assert!(m.offset_pct(24.0).abs() < 1e-9);
}

#[test]
fn marquee_with_count_holds_end() {
    let m = Marquee {
        repeat: Repeat::Count(2),
        ..Marquee::default()
    };
    assert!((m.offset_pct(30.0) + 12.5).abs() < 1e-9);
    assert!((m.offset_pct(60.0) + 25.0).abs() < 1e-9);
    assert_eq!(m.offset_pct(72.0), -50.0);
    assert_eq!(m.offset_pct(100.0), -50.0);
}

#[test]
fn marquee_count_repeats_after_the_first_cycle() {
    let once = Marquee {
        repeat: Repeat::Count(0),
        ..Marquee::default()
    };
    assert!((once.offset_pct(12.0) + 25.0).abs() < 1e-9);
    assert_eq!(once.offset_pct(24.0), -50.0);
    assert_eq!(once.offset_pct(30.0), -50.0);

    let twice = Marquee {
        repeat: Repeat::Count(1),
        ..Marquee::default()
    };
    assert!((twice.offset_pct(36.0) + 25.0).abs() < 1e-9);
    assert_eq!(twice.offset_pct(48.0), -50.0);
}

#[test]
fn in_view_latches_when_once() {
    let mut v = InView::new(ViewportTrigger {
        once: true,
        amount: 0.2,
    });
    assert!(!v.observe(0.1));
    assert!(v.observe(0.25));
    assert!(v.observe(0.0));
    assert!(v.is_active());
}

#[test]
fn in_view_toggles_without_once() {
    let mut v = InView::new(ViewportTrigger {
        once: false,
        amount: 0.5,
    });
    assert!(v.observe(0.6));
    assert!(!v.observe(0.4));
    assert!(!v.is_active());
}

#[test]
fn zero_amount_needs_any_visibility() {
    let mut v = InView::new(ViewportTrigger {
        once: false,
        amount: 0.0,
    });
    assert!(!v.observe(0.0));
    assert!(v.observe(0.01));
}

#[test]
fn transition_json_is_tagged_by_type() {
    let t: Transition =
        serde_json::from_str(r#"{"type": "spring", "stiffness": 120, "damping": 15}"#).unwrap();
    assert_eq!(
        t,
        Transition::Spring(Spring {
            stiffness: 120.0,
            damping: 15.0,
            mass: 1.0,
        })
    );
    let t: Transition = serde_json::from_str(
        r#"{"type": "tween", "duration_s": 0.6, "ease": {"cubic_bezier": [0.16, 1, 0.3, 1]}}"#,
    )
    .unwrap();
    assert!(matches!(t, Transition::Tween(tw) if tw.ease == Ease::EXPO_OUT));
}

#[test]
fn validation_catches_bad_configs() {
    assert!(Entrance::default().validate().is_ok());
    let bad = Entrance {
        stagger_s: -1.0,
        ..Entrance::default()
    };
    assert!(bad.validate().is_err());
    let m = Marquee {
        duration_s: 0.0,
        ..Marquee::default()
    };
    assert!(m.validate().is_err());
    let v = ViewportTrigger {
        once: true,
        amount: 1.5,
    };
    assert!(v.validate().is_err());
}

#[test]
fn viewport_trigger_json_defaults_match_rust_default() {
    let t: ViewportTrigger = serde_json::from_str("{}").unwrap();
    assert_eq!(t, ViewportTrigger::default());
    let t: ViewportTrigger = serde_json::from_str(r#"{"once": false}"#).unwrap();
    assert_eq!(t.amount, 0.2);
    assert!(!t.once);
}
