mod backend;
mod builder;
mod config;
mod plan;
mod types;
mod utils;

use std::sync::Arc;

pub use crate::{
  backend::{esbuild::EsbuildBackend, BuildBackend},
  builder::Builder,
  config::{ProjectConfig, CONFIG_FILE_NAME},
  plan::{plan_standard, plan_step, plan_step_arg},
  types::build_output::BuildOutput,
  utils::normalize_options::normalize_options,
};
pub use twinpack_common::*;
pub use twinpack_error::{BuildError, BuildResult};
pub use twinpack_fs::{FileSystem, OsFileSystem};

pub(crate) type SharedOptions = Arc<NormalizedBuildOptions>;
