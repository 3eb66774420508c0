use std::path::PathBuf;

use twinpack_utils::path_ext::PathExt;

use crate::{AssetKind, ESTarget, LogLevel, OutputFormat, Platform};

/// One call to the external bundler: a single entry point and the flat set of
/// options it is built with.
#[allow(clippy::struct_excessive_bools)] // Mirrors the bundler's own flags one to one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTask {
  pub name: String,
  pub entry: PathBuf,
  pub outfile: PathBuf,
  pub bundle: bool,
  pub minify: bool,
  pub sourcemap: bool,
  pub tree_shaking: bool,
  pub allow_overwrite: bool,
  pub target: ESTarget,
  pub format: OutputFormat,
  pub platform: Platform,
  pub external: Vec<String>,
  pub log_level: LogLevel,
}

impl BuildTask {
  /// The task rendered as esbuild command line arguments.
  pub fn to_esbuild_args(&self) -> anyhow::Result<Vec<String>> {
    let mut args = vec![self.entry.try_to_str()?.to_string()];

    if self.bundle {
      args.push("--bundle".to_string());
    }
    if self.minify {
      args.push("--minify".to_string());
    }
    if self.sourcemap {
      args.push("--sourcemap".to_string());
    }
    if self.tree_shaking {
      args.push("--tree-shaking=true".to_string());
    }
    if self.allow_overwrite {
      args.push("--allow-overwrite".to_string());
    }

    args.push(format!("--target={}", self.target));
    args.push(format!("--format={}", self.format));
    args.push(format!("--platform={}", self.platform));
    args.extend(self.external.iter().map(|name| format!("--external:{name}")));
    args.push(format!("--log-level={}", self.log_level));
    args.push(format!("--outfile={}", self.outfile.try_to_str()?));

    Ok(args)
  }

  /// Every file the task is expected to write.
  pub fn outputs(&self) -> Vec<(PathBuf, AssetKind)> {
    let mut outputs = vec![(self.outfile.clone(), AssetKind::Chunk)];
    if self.sourcemap {
      outputs.push((self.outfile.with_appended_extension("map"), AssetKind::SourceMap));
    }
    outputs
  }

  /// The task rewrites its own input, so the input must already exist.
  pub fn is_in_place(&self) -> bool {
    self.entry == self.outfile
  }
}
