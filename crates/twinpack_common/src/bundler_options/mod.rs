pub mod entry_point;
pub mod es_target;
pub mod log_level;
pub mod normalized_build_options;
pub mod output_format;
pub mod platform;

use std::path::PathBuf;

use crate::{BuildMode, ESTarget, EntryPoint, LogLevel, Platform};

#[derive(Default, Debug, Clone)]
pub struct BuildOptions {
  // --- Input
  pub cwd: Option<PathBuf>,
  pub src_dir: Option<PathBuf>,
  pub entries: Option<Vec<EntryPoint>>,
  pub platform: Option<Platform>,
  pub external: Option<Vec<String>>,

  // --- Output
  pub out_dir: Option<PathBuf>,
  pub target: Option<ESTarget>,
  pub log_level: Option<LogLevel>,

  // --- Environment
  pub mode: Option<BuildMode>,
  pub esbuild: Option<PathBuf>,
}
