use std::{fmt::Display, str::FromStr};

/// The environment variable the mode is read from.
pub const MODE_ENV_VAR: &str = "NODE_ENV";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuildMode {
  #[default]
  Development,
  Production,
}

impl BuildMode {
  /// Only the exact value `production` selects a production build. Anything
  /// else, including an unset variable, is a development build.
  pub fn from_env_value(value: Option<&str>) -> Self {
    match value {
      Some("production") => Self::Production,
      _ => Self::Development,
    }
  }

  pub fn from_env() -> Self {
    Self::from_env_value(std::env::var(MODE_ENV_VAR).ok().as_deref())
  }

  #[inline]
  pub fn is_production(self) -> bool {
    matches!(self, Self::Production)
  }
}

impl FromStr for BuildMode {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "development" => Ok(Self::Development),
      "production" => Ok(Self::Production),
      _ => Err(format!("Invalid mode \"{s}\".")),
    }
  }
}

impl Display for BuildMode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Development => write!(f, "development"),
      Self::Production => write!(f, "production"),
    }
  }
}
