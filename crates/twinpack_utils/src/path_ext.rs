use std::{
  ffi::OsString,
  path::{Path, PathBuf},
};

use anyhow::Context;
use sugar_path::SugarPath;

pub trait PathExt {
  /// Fails instead of replacing non UTF-8 sequences, so the path handed to
  /// another program is the one on disk.
  fn try_to_str(&self) -> anyhow::Result<&str>;

  /// `dist/main.js` -> `dist/main.js.map`. Unlike `Path::with_extension`,
  /// the existing extension is kept.
  fn with_appended_extension(&self, extension: &str) -> PathBuf;

  /// Slash-separated form of `self` relative to `base`, for reporting.
  fn relative_display(&self, base: &Path) -> String;
}

impl PathExt for Path {
  fn try_to_str(&self) -> anyhow::Result<&str> {
    self.to_str().with_context(|| format!("{} is not valid UTF-8", self.display()))
  }

  fn with_appended_extension(&self, extension: &str) -> PathBuf {
    let mut path = OsString::from(self.as_os_str());
    path.push(".");
    path.push(extension);
    PathBuf::from(path)
  }

  fn relative_display(&self, base: &Path) -> String {
    self.relative(base).to_slash_lossy().into_owned()
  }
}

#[test]
fn test_with_appended_extension() {
  let path = Path::new("project").join("dist").join("main.js");
  assert_eq!(
    path.with_appended_extension("map"),
    Path::new("project").join("dist").join("main.js.map")
  );

  let path = Path::new("worker");
  assert_eq!(path.with_appended_extension("js"), Path::new("worker.js"));
}

#[test]
fn test_relative_display() {
  let cwd = std::env::temp_dir().join("project");
  let path = cwd.join("dist").join("worker.js");
  assert_eq!(path.relative_display(&cwd), "dist/worker.js");
}

#[cfg(unix)]
#[test]
fn test_try_to_str_rejects_invalid_utf8() {
  use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

  assert_eq!(Path::new("dist/main.js").try_to_str().unwrap(), "dist/main.js");

  let path = Path::new(OsStr::from_bytes(b"dist/ma\xffin.js"));
  assert!(path.try_to_str().unwrap_err().to_string().ends_with("is not valid UTF-8"));
}
