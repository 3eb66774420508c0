use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
  Chunk,
  SourceMap,
}

/// A file written by the bundler, as found on disk after the build.
#[derive(Debug, Clone)]
pub struct OutputAsset {
  pub path: PathBuf,
  /// `path` relative to the project root, slash separated.
  pub filename: String,
  pub size: u64,
  pub kind: AssetKind,
}

impl OutputAsset {
  pub fn filename(&self) -> &str {
    &self.filename
  }

  pub fn is_chunk(&self) -> bool {
    matches!(self.kind, AssetKind::Chunk)
  }
}
