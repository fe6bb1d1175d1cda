use super::*;
use crate::{
    foundation::core::FrameIndex,
    layer::style::LayerStyle,
    scroll::driver::ScrollSnapshot,
};

fn cfg() -> SweepConfig {
    SweepConfig {
        fps: Fps::new(30, 1).unwrap(),
        frames: 2,
        viewport: Viewport::new(800.0, 600.0).unwrap(),
        from_y: 0.0,
        to_y: 100.0,
    }
}

fn sample(i: u64) -> FrameSample {
    let mut layers = std::collections::BTreeMap::new();
    layers.insert("hero".to_string(), LayerStyle::default());
    FrameSample {
        frame: FrameIndex(i),
        time_s: i as f64 * 0.5,
        snapshot: ScrollSnapshot {
            seq: i + 1,
            scroll_y: 100.0 * i as f64,
            progress: i as f64,
        },
        layers,
        revealed: vec!["hero".to_string()],
        marquee_pct: 0.0,
    }
}

#[test]
fn in_memory_sink_resets_on_begin() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push(&sample(0)).unwrap();
    sink.end().unwrap();
    assert!(sink.is_ended());

    sink.begin(cfg()).unwrap();
    assert!(sink.samples.is_empty());
    assert!(!sink.is_ended());
    assert_eq!(sink.config(), Some(cfg()));
}

#[test]
fn jsonl_sink_writes_one_object_per_line() {
    let mut sink = JsonLinesSink::new(Vec::new());
    sink.begin(cfg()).unwrap();
    sink.push(&sample(0)).unwrap();
    sink.push(&sample(1)).unwrap();
    sink.end().unwrap();
    assert_eq!(sink.written(), 2);

    let text = String::from_utf8(sink.into_inner()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    let back: FrameSample = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(back, sample(1));

    let v: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(v["frame"], 0);
    assert_eq!(v["snapshot"]["seq"], 1);
    assert_eq!(v["layers"]["hero"]["opacity"], 1.0);
}
