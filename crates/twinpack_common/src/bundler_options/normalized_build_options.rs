use std::path::PathBuf;

use crate::{BuildMode, ESTarget, EntryPoint, LogLevel, Platform, ProjectPaths};

#[derive(Debug, Clone)]
pub struct NormalizedBuildOptions {
  // --- Input
  pub paths: ProjectPaths,
  pub entries: Vec<EntryPoint>,
  pub platform: Platform,
  pub external: Vec<String>,

  // --- Output
  pub target: ESTarget,
  pub log_level: LogLevel,

  // --- Environment
  pub mode: BuildMode,
  pub esbuild: Option<PathBuf>,
}
