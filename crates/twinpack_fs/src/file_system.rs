use std::{io, path::Path};

/// The filesystem operations the build driver performs itself. Everything
/// else is read and written by the external bundler.
pub trait FileSystem: Send + Sync {
  fn is_file(&self, path: &Path) -> bool;

  fn read_to_string(&self, path: &Path) -> io::Result<String>;

  fn create_dir_all(&self, path: &Path) -> io::Result<()>;

  /// Size in bytes of the file at `path`.
  fn file_size(&self, path: &Path) -> io::Result<u64>;
}
