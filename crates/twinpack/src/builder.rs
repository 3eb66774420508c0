use std::sync::Arc;

use anyhow::{bail, Context};
use futures::future::join_all;
use itertools::Itertools;

use twinpack_common::{BuildOptions, BuildTask, NormalizedBuildOptions, OutputAsset};
use twinpack_error::BuildResult;
use twinpack_fs::{FileSystem, OsFileSystem};
use twinpack_utils::path_ext::PathExt;

use crate::{
  normalize_options, plan_standard, plan_step_arg, types::build_output::BuildOutput,
  BuildBackend, EsbuildBackend, SharedOptions,
};

pub struct Builder<B: BuildBackend = EsbuildBackend, F: FileSystem = OsFileSystem> {
  pub(crate) fs: F,
  pub(crate) options: SharedOptions,
  pub(crate) backend: B,
}

impl Builder {
  pub fn new(options: BuildOptions) -> Self {
    let options = normalize_options(options);
    let backend = EsbuildBackend::resolve(&options, &OsFileSystem);
    Builder { fs: OsFileSystem, options: Arc::new(options), backend }
  }
}

impl<B: BuildBackend, F: FileSystem> Builder<B, F> {
  pub fn with_backend(options: BuildOptions, backend: B, fs: F) -> Self {
    Builder { fs, options: Arc::new(normalize_options(options)), backend }
  }

  pub fn options(&self) -> &NormalizedBuildOptions {
    &self.options
  }

  pub fn backend(&self) -> &B {
    &self.backend
  }

  pub fn plan_standard(&self) -> Vec<BuildTask> {
    plan_standard(&self.options)
  }

  pub fn plan_step(&self, arg: Option<&str>) -> Vec<BuildTask> {
    plan_step_arg(&self.options, arg)
  }

  /// Issues every task at once and waits for all of them.
  ///
  /// A failing task does not stop the others; the error lists every failure.
  pub async fn build(&self, tasks: &[BuildTask]) -> BuildResult<BuildOutput> {
    if tasks.is_empty() {
      return Ok(BuildOutput::default());
    }

    let dist = &self.options.paths.dist;
    self
      .fs
      .create_dir_all(dist)
      .with_context(|| format!("Failed to create output directory {}", dist.display()))?;

    tracing::debug!(mode = %self.options.mode, tasks = tasks.len(), "Starting build");

    let results = join_all(tasks.iter().map(|task| async move {
      tracing::debug!(
        task = %task.name,
        entry = %task.entry.display(),
        outfile = %task.outfile.display(),
        minify = task.minify,
        sourcemap = task.sourcemap,
        format = %task.format,
        "Building"
      );
      if task.is_in_place() && !self.fs.is_file(&task.entry) {
        bail!(
          "Failed to build `{}`: {} does not exist, run the bundle step first",
          task.name,
          task.entry.relative_display(&self.options.paths.cwd)
        );
      }
      self.backend.build(task).await.with_context(|| format!("Failed to build `{}`", task.name))
    }))
    .await;

    let errors = results.into_iter().filter_map(Result::err).collect_vec();
    if !errors.is_empty() {
      return Err(errors.into());
    }

    Ok(self.collect_output(tasks))
  }

  fn collect_output(&self, tasks: &[BuildTask]) -> BuildOutput {
    let cwd = &self.options.paths.cwd;
    let mut output = BuildOutput::default();

    for (path, kind) in tasks.iter().flat_map(BuildTask::outputs) {
      let filename = path.relative_display(cwd);
      match self.fs.file_size(&path) {
        Ok(size) => output.assets.push(OutputAsset { path, filename, size, kind }),
        Err(err) => {
          tracing::warn!(%filename, "Expected output was not written");
          let warning = anyhow::Error::new(err).context(format!("Missing output {filename}"));
          output.warnings.push(warning);
        }
      }
    }

    output
  }
}
