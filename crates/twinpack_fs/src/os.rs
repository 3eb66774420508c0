use std::{io, path::Path};

use crate::FileSystem;

#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
  fn is_file(&self, path: &Path) -> bool {
    path.metadata().is_ok_and(|meta| meta.is_file())
  }

  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    std::fs::read_to_string(path)
  }

  fn create_dir_all(&self, path: &Path) -> io::Result<()> {
    std::fs::create_dir_all(path)
  }

  fn file_size(&self, path: &Path) -> io::Result<u64> {
    std::fs::metadata(path).map(|meta| meta.len())
  }
}
