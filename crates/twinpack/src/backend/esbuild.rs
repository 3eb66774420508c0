use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use tokio::process::Command;

use twinpack_common::{BuildTask, NormalizedBuildOptions};
use twinpack_fs::FileSystem;

use crate::BuildBackend;

#[cfg(windows)]
const LOCAL_BIN: &str = "esbuild.cmd";
#[cfg(not(windows))]
const LOCAL_BIN: &str = "esbuild";

/// Runs the `esbuild` command line tool once per task.
#[derive(Debug, Clone)]
pub struct EsbuildBackend {
  program: PathBuf,
  cwd: PathBuf,
}

impl EsbuildBackend {
  pub fn new(program: PathBuf, cwd: PathBuf) -> Self {
    Self { program, cwd }
  }

  /// The configured binary, else the project's `node_modules/.bin/esbuild`,
  /// else `esbuild` from `PATH`.
  pub fn resolve<F: FileSystem>(options: &NormalizedBuildOptions, fs: &F) -> Self {
    let cwd = options.paths.cwd.clone();

    if let Some(program) = &options.esbuild {
      return Self::new(program.clone(), cwd);
    }

    let local = cwd.join("node_modules").join(".bin").join(LOCAL_BIN);
    let program = if fs.is_file(&local) { local } else { PathBuf::from("esbuild") };
    Self::new(program, cwd)
  }

  pub fn program(&self) -> &Path {
    &self.program
  }
}

impl BuildBackend for EsbuildBackend {
  async fn build(&self, task: &BuildTask) -> anyhow::Result<()> {
    let args = task.to_esbuild_args()?;
    tracing::debug!(program = %self.program.display(), ?args, "Spawning esbuild");

    let output = Command::new(&self.program)
      .args(&args)
      .current_dir(&self.cwd)
      .output()
      .await
      .with_context(|| format!("Failed to run {}", self.program.display()))?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();

    if !output.status.success() {
      if stderr.is_empty() {
        bail!("esbuild exited with {}", output.status);
      }
      bail!("esbuild exited with {}\n{stderr}", output.status);
    }

    if !stderr.is_empty() {
      tracing::info!(task = %task.name, "{stderr}");
    }

    Ok(())
  }
}
