//! Where rendered frames go: numbered PNG files on disk, and the current view.

use {
  crate::error::Result,
  chrono::Utc,
  image::RgbaImage,
  std::{fs, path::{Path, PathBuf}},
  tracing::{debug, info}
};

/// Timestamp format of export directories.
pub const DIR_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

/// Receives every frame of a progressive render, numbered from 1.
pub trait FrameSink {
  fn save_frame(&mut self, index: usize, frame: &RgbaImage) -> Result<()>;
}

impl<F> FrameSink for F where F: FnMut(usize, &RgbaImage) -> Result<()> {
  fn save_frame(&mut self, index: usize, frame: &RgbaImage) -> Result<()> {
    self(index, frame)
  }
}

/// Writes `<root>/<UTC timestamp>/<index>.png`.
#[derive(Debug)]
pub struct DirectoryExporter {
  dir: PathBuf,
  frames: usize,
  bytes: u64
}

impl DirectoryExporter {
  /// Creates `root` if needed, and a fresh timestamped directory inside it.
  pub fn create(root: impl AsRef<Path>) -> Result<Self> {
    let root = root.as_ref();
    fs::create_dir_all(root)?;
    let dir = root.join(Utc::now().format(DIR_FORMAT).to_string());
    fs::create_dir(&dir)?;
    info!(dir = %dir.display(), "exporting frames");
    Ok(Self { dir, frames: 0, bytes: 0 })
  }

  pub fn dir(&self) -> &Path {
    &self.dir
  }

  pub fn frames(&self) -> usize {
    self.frames
  }

  /// Human readable size of everything written so far.
  pub fn written(&self) -> String {
    use humansize::{FileSize, file_size_opts as options};
    self.bytes.file_size(options::BINARY).unwrap_or_else(|e| e)
  }
}

impl FrameSink for DirectoryExporter {
  fn save_frame(&mut self, index: usize, frame: &RgbaImage) -> Result<()> {
    let path = self.dir.join(format!("{}.png", index));
    frame.save(&path)?;
    self.frames += 1;
    self.bytes += fs::metadata(&path)?.len();
    debug!(path = %path.display(), total = %self.written(), "frame saved");
    Ok(())
  }
}

/// Shows the composited screen.
pub trait Display {
  fn present(&mut self, frame: &RgbaImage) -> Result<()>;
}

/// Overwrites a single PNG with the latest view.
#[derive(Debug, Clone)]
pub struct PngDisplay {
  pub path: PathBuf
}

impl PngDisplay {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }
}

impl Display for PngDisplay {
  fn present(&mut self, frame: &RgbaImage) -> Result<()> {
    frame.save(&self.path)?;
    debug!(path = %self.path.display(), "view updated");
    Ok(())
  }
}
