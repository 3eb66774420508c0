use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use twinpack_common::{BuildOptions, EntryPoint};
use twinpack_fs::FileSystem;

pub const CONFIG_FILE_NAME: &str = "twinpack.json";

/// The declarative project configuration, read from `twinpack.json`.
///
/// ```json
/// {
///   "srcDir": "src",
///   "outDir": "dist",
///   "entries": [{ "name": "main", "import": "App.bs.js" }],
///   "target": "es2020",
///   "logLevel": "errors-only"
/// }
/// ```
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectConfig {
  pub src_dir: Option<PathBuf>,
  pub out_dir: Option<PathBuf>,
  pub entries: Option<Vec<EntryPoint>>,
  pub target: Option<String>,
  pub platform: Option<String>,
  pub external: Option<Vec<String>>,
  pub log_level: Option<String>,
  pub esbuild: Option<PathBuf>,
}

impl ProjectConfig {
  /// Reads the configuration of the project at `cwd`.
  ///
  /// Without an explicit `path`, a missing `twinpack.json` means an empty
  /// configuration. An explicit path must exist.
  pub fn load<F: FileSystem>(fs: &F, cwd: &Path, path: Option<&Path>) -> anyhow::Result<Self> {
    let (path, required) = match path {
      Some(path) => (cwd.join(path), true),
      None => (cwd.join(CONFIG_FILE_NAME), false),
    };

    if !required && !fs.is_file(&path) {
      tracing::debug!(path = %path.display(), "No project configuration");
      return Ok(Self::default());
    }

    let content = fs
      .read_to_string(&path)
      .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: Self = serde_json::from_str(&content)
      .with_context(|| format!("Invalid config file {}", path.display()))?;

    tracing::debug!(path = %path.display(), "Loaded project configuration");
    Ok(config)
  }

  /// Converts the configuration into raw build options rooted at `cwd`.
  pub fn into_build_options(self, cwd: &Path) -> anyhow::Result<BuildOptions> {
    fn parse<T: std::str::FromStr<Err = String>>(
      value: Option<String>,
    ) -> anyhow::Result<Option<T>> {
      value.map(|value| value.parse::<T>().map_err(anyhow::Error::msg)).transpose()
    }

    Ok(BuildOptions {
      cwd: Some(cwd.to_path_buf()),
      src_dir: self.src_dir,
      entries: self.entries,
      platform: parse(self.platform).context("Invalid `platform` in config")?,
      external: self.external,
      out_dir: self.out_dir,
      target: parse(self.target).context("Invalid `target` in config")?,
      log_level: parse(self.log_level).context("Invalid `logLevel` in config")?,
      mode: None,
      esbuild: self.esbuild,
    })
  }
}
