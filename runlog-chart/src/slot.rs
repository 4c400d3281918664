//! Ownership of the currently displayed chart.
//!
//! A `ChartSlot` holds at most one live chart handle. Rendering into the
//! slot replaces the previous handle and disposes it; a failed render
//! leaves the previous chart in place.

use crate::html::render_page;
use crate::models::ChartSpec;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// A rendered chart that must be torn down when replaced.
pub trait Dispose {
    fn dispose(self);
}

/// Something that can draw a `ChartSpec` and hand back a handle to it.
pub trait Renderer {
    type Handle: Dispose;

    fn draw(&mut self, spec: &ChartSpec) -> anyhow::Result<Self::Handle>;
}

pub struct ChartSlot<R: Renderer> {
    renderer: R,
    current: Option<R::Handle>,
}

impl<R: Renderer> ChartSlot<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            current: None,
        }
    }

    /// Draw `spec` and make it the current chart, disposing the old one.
    pub fn render(&mut self, spec: &ChartSpec) -> anyhow::Result<&R::Handle> {
        let handle = self.renderer.draw(spec)?;
        if let Some(previous) = self.current.take() {
            previous.dispose();
        }
        Ok(&*self.current.insert(handle))
    }

    pub fn current(&self) -> Option<&R::Handle> {
        self.current.as_ref()
    }

    /// Dispose the current chart, if any.
    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            previous.dispose();
        }
    }
}

/// Output written by `FileRenderer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageFormat {
    /// Standalone page with Chart.js
    #[default]
    Html,
    /// Chart.js config object only
    Json,
}

/// Writes charts to a single file, replacing it atomically on each draw.
#[derive(Debug, Clone)]
pub struct FileRenderer {
    path: PathBuf,
    format: PageFormat,
    generation: u64,
}

impl FileRenderer {
    pub fn new(path: impl Into<PathBuf>, format: PageFormat) -> Self {
        Self {
            path: path.into(),
            format,
            generation: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A page written by `FileRenderer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub generation: u64,
    pub bytes: usize,
}

impl Dispose for RenderedFile {
    fn dispose(self) {
        // The next generation already overwrote the file.
        debug!(
            "Released chart generation {} at {}",
            self.generation,
            self.path.display()
        );
    }
}

impl Renderer for FileRenderer {
    type Handle = RenderedFile;

    fn draw(&mut self, spec: &ChartSpec) -> anyhow::Result<RenderedFile> {
        let contents = match self.format {
            PageFormat::Html => render_page(spec)?,
            PageFormat::Json => serde_json::to_string_pretty(&spec.to_chartjs_config())?,
        };
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        std::fs::write(&tmp, &contents)?;
        if let Err(e) = std::fs::rename(&tmp, &self.path) {
            if let Err(cleanup) = std::fs::remove_file(&tmp) {
                warn!("Failed to remove {}: {}", tmp.display(), cleanup);
            }
            return Err(e.into());
        }
        self.generation += 1;
        info!(
            "Wrote chart generation {} ({} bytes) to {}",
            self.generation,
            contents.len(),
            self.path.display()
        );
        Ok(RenderedFile {
            path: self.path.clone(),
            generation: self.generation,
            bytes: contents.len(),
        })
    }
}
