use std::{fmt::Display, str::FromStr};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Platform {
  #[default]
  Browser,
  Node,
  Neutral,
}

impl FromStr for Platform {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "browser" => Ok(Self::Browser),
      "node" => Ok(Self::Node),
      "neutral" => Ok(Self::Neutral),
      _ => Err(format!("Invalid platform \"{s}\".")),
    }
  }
}

impl Display for Platform {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Browser => write!(f, "browser"),
      Self::Node => write!(f, "node"),
      Self::Neutral => write!(f, "neutral"),
    }
  }
}
