use std::path::{Path, PathBuf};

use sugar_path::SugarPath;

/// The directories a build reads from and writes to. All three are absolute
/// and fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
  pub cwd: PathBuf,
  pub src: PathBuf,
  pub dist: PathBuf,
}

impl ProjectPaths {
  /// Relative `src` and `dist` are taken relative to `cwd`, which is itself
  /// taken relative to the process working directory.
  pub fn new(cwd: &Path, src: &Path, dist: &Path) -> Self {
    let cwd = cwd.absolutize();
    let src = cwd.join(src).normalize();
    let dist = cwd.join(dist).normalize();
    Self { cwd, src, dist }
  }

  pub fn source_file(&self, import: &str) -> PathBuf {
    self.src.join(import).normalize()
  }

  pub fn output_file(&self, filename: &str) -> PathBuf {
    self.dist.join(filename).normalize()
  }
}
