mod bundler_options;
mod types;

pub use bundler_options::{
  BuildOptions, entry_point::EntryPoint, es_target::ESTarget, log_level::LogLevel,
  normalized_build_options::NormalizedBuildOptions, output_format::OutputFormat,
  platform::Platform,
};

pub use crate::types::{
  build_mode::{BuildMode, MODE_ENV_VAR},
  build_step::BuildStep,
  build_task::BuildTask,
  output_asset::{AssetKind, OutputAsset},
  project_paths::ProjectPaths,
};
