use std::{fmt::Display, str::FromStr};

/// How much the bundler itself reports. `Error` matches an "errors-only"
/// stats preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
  Verbose,
  Debug,
  Info,
  #[default]
  Warning,
  Error,
  Silent,
}

impl FromStr for LogLevel {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "verbose" => Ok(Self::Verbose),
      "debug" => Ok(Self::Debug),
      "info" => Ok(Self::Info),
      "warning" => Ok(Self::Warning),
      "error" | "errors-only" => Ok(Self::Error),
      "silent" => Ok(Self::Silent),
      _ => Err(format!("Invalid log level \"{s}\".")),
    }
  }
}

impl Display for LogLevel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let name = match self {
      Self::Verbose => "verbose",
      Self::Debug => "debug",
      Self::Info => "info",
      Self::Warning => "warning",
      Self::Error => "error",
      Self::Silent => "silent",
    };
    f.write_str(name)
  }
}

#[test]
fn test_errors_only_alias() {
  assert_eq!("errors-only".parse::<LogLevel>(), Ok(LogLevel::Error));
  assert_eq!(LogLevel::Error.to_string(), "error");
}
