use std::{
  fmt::Display,
  ops::{Deref, DerefMut},
};

/// Every error collected while issuing a set of builds.
///
/// Builds run concurrently and none of them is cancelled when another fails,
/// so a single invocation can end with several unrelated errors.
#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

impl Display for BuildError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self.0.as_slice() {
      [] => write!(f, "build failed"),
      [error] => write!(f, "{error:#}"),
      errors => {
        write!(f, "{} builds failed", errors.len())?;
        for error in errors {
          write!(f, "\n  {error:#}")?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for BuildError {}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn single_error_displays_its_chain() {
    let error = BuildError::from(anyhow::anyhow!("exit code 1").context("esbuild failed"));
    assert_eq!(error.to_string(), "esbuild failed: exit code 1");
  }

  #[test]
  fn several_errors_are_listed() {
    let error = BuildError::from(vec![anyhow::anyhow!("main.js"), anyhow::anyhow!("worker.js")]);
    assert_eq!(error.len(), 2);
    assert_eq!(error.to_string(), "2 builds failed\n  main.js\n  worker.js");
  }
}
