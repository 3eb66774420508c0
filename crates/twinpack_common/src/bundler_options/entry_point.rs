use serde::Deserialize;

/// A source file the bundler starts tracing from.
///
/// `import` is relative to the source directory and `name` is the stem of the
/// emitted file, so `{ name: "main", import: "App.bs.js" }` turns
/// `src/App.bs.js` into `dist/main.js`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EntryPoint {
  pub name: String,
  pub import: String,
}

impl EntryPoint {
  pub fn new(name: impl Into<String>, import: impl Into<String>) -> Self {
    Self { name: name.into(), import: import.into() }
  }

  pub fn output_filename(&self) -> String {
    format!("{}.js", self.name)
  }

  /// The application and worker entries every project starts with.
  pub fn defaults() -> Vec<Self> {
    vec![Self::new("main", "App.bs.js"), Self::new("worker", "Intelligence.bs.js")]
  }
}

impl From<(&str, &str)> for EntryPoint {
  fn from((name, import): (&str, &str)) -> Self {
    Self::new(name, import)
  }
}
