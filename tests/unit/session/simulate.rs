use super::*;
use crate::session::sink::InMemorySink;

fn fps60() -> Fps {
    Fps::new(60, 1).unwrap()
}

#[test]
fn default_sweep_covers_the_whole_scroll_range() {
    let page = Page::landing().unwrap();
    let mut sink = InMemorySink::new();
    let stats = simulate(&page, ScrollSweep::new(fps60(), 5), &mut sink).unwrap();

    assert_eq!(stats.frames, 5);
    assert_eq!(stats.first_progress, 0.0);
    assert_eq!(stats.last_progress, 1.0);

    let cfg = sink.config().unwrap();
    assert_eq!((cfg.from_y, cfg.to_y), (0.0, 3648.0));
    assert!(sink.is_ended());

    let ys: Vec<f64> = sink.samples.iter().map(|s| s.snapshot.scroll_y).collect();
    assert_eq!(ys, vec![0.0, 912.0, 1824.0, 2736.0, 3648.0]);
    let hero: Vec<f64> = sink
        .samples
        .iter()
        .map(|s| s.layers["hero"].translate.y)
        .collect();
    assert_eq!(hero, vec![0.0, -37.5, -75.0, -112.5, -150.0]);
}

#[test]
fn frames_are_pushed_in_order_with_frame_times() {
    let page = Page::landing().unwrap();
    let mut sink = InMemorySink::new();
    simulate(&page, ScrollSweep::new(fps60(), 61), &mut sink).unwrap();

    for (i, s) in sink.samples.iter().enumerate() {
        assert_eq!(s.frame, FrameIndex(i as u64));
        assert_eq!(s.snapshot.seq, i as u64 + 1);
    }
    assert!((sink.samples[60].time_s - 1.0).abs() < 1e-12);
}

#[test]
fn progress_is_monotonic_for_a_downward_sweep() {
    let page = Page::landing().unwrap();
    let mut sink = InMemorySink::new();
    simulate(
        &page,
        ScrollSweep::new(fps60(), 120).between(-200.0, 5000.0),
        &mut sink,
    )
    .unwrap();

    let progress: Vec<f64> = sink.samples.iter().map(|s| s.snapshot.progress).collect();
    assert!(progress.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(progress[0], 0.0);
    assert_eq!(progress[119], 1.0);

    let fades: Vec<f64> = sink
        .samples
        .iter()
        .map(|s| s.layers["background"].opacity)
        .collect();
    assert!(fades.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn sections_are_revealed_along_the_way() {
    let page = Page::landing().unwrap();
    let mut sink = InMemorySink::new();
    simulate(&page, ScrollSweep::new(fps60(), 30), &mut sink).unwrap();

    let first = &sink.samples[0].revealed;
    assert!(!first.contains(&"about".to_string()));
    let last = &sink.samples[29].revealed;
    for id in ["hero", "about", "why", "solutions", "testimonials", "contact"] {
        assert!(last.contains(&id.to_string()), "{id}");
    }
}

#[test]
fn single_frame_sweep_samples_the_start() {
    let page = Page::landing().unwrap();
    let mut sink = InMemorySink::new();
    let stats = simulate(
        &page,
        ScrollSweep::new(fps60(), 1).between(1824.0, 3648.0),
        &mut sink,
    )
    .unwrap();
    assert_eq!(sink.samples.len(), 1);
    assert!((stats.first_progress - 0.5).abs() < 1e-12);
}

#[test]
fn empty_and_non_finite_sweeps_are_rejected() {
    let page = Page::landing().unwrap();
    let mut sink = InMemorySink::new();
    assert!(simulate(&page, ScrollSweep::new(fps60(), 0), &mut sink).is_err());
    assert!(
        simulate(
            &page,
            ScrollSweep::new(fps60(), 3).between(0.0, f64::INFINITY),
            &mut sink
        )
        .is_err()
    );
    assert!(sink.config().is_none());
}

#[test]
fn simulation_is_deterministic() {
    let page = Page::landing().unwrap();
    let run = || {
        let mut sink = InMemorySink::new();
        simulate(&page, ScrollSweep::new(fps60(), 40), &mut sink).unwrap();
        sink.samples
    };
    assert_eq!(run(), run());
}
