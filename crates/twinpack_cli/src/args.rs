use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::types::{build_mode::BuildMode, es_target::ESTarget, platform::Platform};

#[derive(Subcommand, Debug)]
pub enum Script {
  /// Bundle every entry point into the output directory
  Build,
  /// Run one step of the staged build: `bundle`, then `minify`
  Run {
    /// `bundle` or `minify`; anything else does nothing
    step: Option<String>,
  },
}

#[derive(Args, Debug)]
pub struct InputArgs {
  /// Project root, defaults to the current directory
  #[clap(long, global = true)]
  pub cwd: Option<PathBuf>,

  /// Configuration file, defaults to `twinpack.json` in the project root
  #[clap(long, short = 'c', global = true)]
  pub config: Option<PathBuf>,

  #[clap(long, short = 'p', global = true)]
  pub platform: Option<Platform>,

  /// Module names left out of the bundles
  #[clap(long, short = 'e', global = true, action = clap::ArgAction::Append)]
  pub external: Option<Vec<String>>,
}

#[derive(Args, Debug)]
pub struct EnhanceArgs {
  /// Overrides `NODE_ENV`
  #[clap(long, short = 'm', global = true)]
  pub mode: Option<BuildMode>,

  #[clap(long, global = true)]
  pub target: Option<ESTarget>,

  /// Do not print the written files
  #[clap(long, short = 's', global = true)]
  pub silent: bool,
}
