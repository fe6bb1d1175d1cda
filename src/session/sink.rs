use std::io::Write;

use anyhow::Context as _;

use crate::{
    foundation::core::{Fps, Viewport},
    foundation::error::ScrollfxResult,
    session::simulate::FrameSample,
};

/// Configuration provided to a [`SampleSink`] at the start of a sweep.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SweepConfig {
    pub fps: Fps,
    pub frames: u64,
    pub viewport: Viewport,
    pub from_y: f64,
    pub to_y: f64,
}

/// Sink contract for consuming frame samples in sweep order.
///
/// Ordering contract: `push` is called in strictly increasing `FrameIndex` order,
/// between one `begin` and one `end`.
pub trait SampleSink {
    fn begin(&mut self, cfg: SweepConfig) -> ScrollfxResult<()>;
    fn push(&mut self, sample: &FrameSample) -> ScrollfxResult<()>;
    fn end(&mut self) -> ScrollfxResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SweepConfig>,
    /// Samples in sweep order.
    pub samples: Vec<FrameSample>,
    ended: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> Option<SweepConfig> {
        self.cfg
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl SampleSink for InMemorySink {
    fn begin(&mut self, cfg: SweepConfig) -> ScrollfxResult<()> {
        self.cfg = Some(cfg);
        self.samples.clear();
        self.ended = false;
        Ok(())
    }

    fn push(&mut self, sample: &FrameSample) -> ScrollfxResult<()> {
        self.samples.push(sample.clone());
        Ok(())
    }

    fn end(&mut self) -> ScrollfxResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Writes one JSON object per sample, newline-delimited.
pub struct JsonLinesSink<W: Write> {
    out: W,
    written: u64,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SampleSink for JsonLinesSink<W> {
    fn begin(&mut self, cfg: SweepConfig) -> ScrollfxResult<()> {
        tracing::debug!(frames = cfg.frames, fps = cfg.fps.as_f64(), "jsonl sink begin");
        self.written = 0;
        Ok(())
    }

    fn push(&mut self, sample: &FrameSample) -> ScrollfxResult<()> {
        serde_json::to_writer(&mut self.out, sample)?;
        self.out
            .write_all(b"\n")
            .with_context(|| format!("write sample for frame {}", sample.frame.0))?;
        self.written += 1;
        Ok(())
    }

    fn end(&mut self) -> ScrollfxResult<()> {
        self.out.flush().context("flush jsonl output")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/sink.rs"]
mod tests;
