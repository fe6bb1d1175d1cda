use std::collections::BTreeMap;

use crate::{
    foundation::core::{Fps, FrameIndex},
    foundation::error::{ScrollfxError, ScrollfxResult},
    layer::style::LayerStyle,
    page::model::Page,
    scroll::driver::ScrollSnapshot,
    session::sink::{SampleSink, SweepConfig},
};

/// A scripted scroll from `from` to `to`, evenly spread over `frames` frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSweep {
    pub fps: Fps,
    pub frames: u64,
    /// Defaults to the start of the tracked scroll range.
    pub from: Option<f64>,
    /// Defaults to the end of the tracked scroll range.
    pub to: Option<f64>,
}

impl ScrollSweep {
    pub fn new(fps: Fps, frames: u64) -> Self {
        Self {
            fps,
            frames,
            from: None,
            to: None,
        }
    }

    pub fn between(mut self, from: f64, to: f64) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    /// Scroll position of frame `i` in a sweep from `from` to `to`.
    fn scroll_at(&self, i: u64, from: f64, to: f64) -> f64 {
        if self.frames <= 1 {
            return from;
        }
        let t = (i as f64) / ((self.frames - 1) as f64);
        from + (to - from) * t
    }
}

/// Everything observable about the page at one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameSample {
    pub frame: FrameIndex,
    pub time_s: f64,
    pub snapshot: ScrollSnapshot,
    pub layers: BTreeMap<String, LayerStyle>,
    /// Ids of sections revealed so far.
    pub revealed: Vec<String>,
    pub marquee_pct: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SweepStats {
    pub frames: u64,
    pub first_progress: f64,
    pub last_progress: f64,
}

/// Mount `page`, drive it through `sweep`, and stream one sample per frame to `sink`.
#[tracing::instrument(skip(page, sink), fields(frames = sweep.frames))]
pub fn simulate(
    page: &Page,
    sweep: ScrollSweep,
    sink: &mut dyn SampleSink,
) -> ScrollfxResult<SweepStats> {
    if sweep.frames == 0 {
        return Err(ScrollfxError::evaluation("sweep frames must be > 0"));
    }
    let from_to = [sweep.from, sweep.to];
    if from_to.iter().flatten().any(|y| !y.is_finite()) {
        return Err(ScrollfxError::evaluation("sweep bounds must be finite"));
    }

    let mut mounted = page.mount()?;
    let (s0, s1) = mounted.driver().source().scroll_range().unwrap_or((0.0, 0.0));
    let from = sweep.from.unwrap_or(s0);
    let to = sweep.to.unwrap_or(s1);

    sink.begin(SweepConfig {
        fps: sweep.fps,
        frames: sweep.frames,
        viewport: page.viewport,
        from_y: from,
        to_y: to,
    })?;

    let mut stats = SweepStats {
        frames: sweep.frames,
        ..SweepStats::default()
    };
    for i in 0..sweep.frames {
        let time_s = sweep.fps.frames_to_secs(i);
        mounted.tick(time_s);
        let snapshot = mounted.scroll_to(sweep.scroll_at(i, from, to));
        if i == 0 {
            stats.first_progress = snapshot.progress;
        }
        stats.last_progress = snapshot.progress;

        let sample = FrameSample {
            frame: FrameIndex(i),
            time_s,
            snapshot,
            layers: mounted.layer_styles(),
            revealed: mounted.revealed_sections(),
            marquee_pct: mounted.marquee_offset_pct(),
        };
        sink.push(&sample)?;
    }
    sink.end()?;

    tracing::debug!(
        first = stats.first_progress,
        last = stats.last_progress,
        "sweep finished"
    );
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/session/simulate.rs"]
mod tests;
