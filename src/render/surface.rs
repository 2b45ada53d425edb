use std::fs;
use std::path::PathBuf;

use anyhow::Context as _;

use crate::foundation::error::{PlotlineError, PlotlineResult};
use crate::render::frame::Frame;

/// The rendering-surface boundary.
///
/// A surface paints whatever instruction list it is handed; presenting a new
/// frame fully replaces the prior visual state, so no instructions leak
/// between scenes. No engine logic lives behind this trait.
pub trait RenderSurface {
    /// Present a compiled frame.
    fn present(&mut self, frame: &Frame) -> PlotlineResult<()>;
}

/// [`RenderSurface`] that collects presented frames in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemorySurface {
    frames: Vec<Frame>,
}

impl InMemorySurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// All presented frames, in presentation order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The most recently presented frame.
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Consume the surface, returning the presented frames.
    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }
}

impl RenderSurface for InMemorySurface {
    fn present(&mut self, frame: &Frame) -> PlotlineResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

/// [`RenderSurface`] writing each presented frame as `frame-NNN.json` into a
/// directory.
#[derive(Debug)]
pub struct JsonDirSurface {
    dir: PathBuf,
    next: usize,
}

impl JsonDirSurface {
    /// Create the target directory (if needed) and an empty surface.
    pub fn new(dir: impl Into<PathBuf>) -> PlotlineResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("create frame directory '{}'", dir.display()))?;
        Ok(Self { dir, next: 0 })
    }

    /// Number of frames written so far.
    pub fn frames_written(&self) -> usize {
        self.next
    }
}

impl RenderSurface for JsonDirSurface {
    fn present(&mut self, frame: &Frame) -> PlotlineResult<()> {
        let path = self.dir.join(format!("frame-{:03}.json", self.next));
        let json =
            serde_json::to_string_pretty(frame).map_err(|e| PlotlineError::serde(e.to_string()))?;
        fs::write(&path, json).with_context(|| format!("write '{}'", path.display()))?;
        self.next += 1;
        Ok(())
    }
}
