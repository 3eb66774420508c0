use std::{fmt::Display, str::FromStr};

/// A step of the staged build: first bundle the sources, then minify the
/// bundles in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStep {
  Bundle,
  Minify,
}

impl FromStr for BuildStep {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "bundle" => Ok(Self::Bundle),
      "minify" => Ok(Self::Minify),
      _ => Err(format!("Unknown step \"{s}\", expected \"bundle\" or \"minify\".")),
    }
  }
}

impl Display for BuildStep {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Bundle => write!(f, "bundle"),
      Self::Minify => write!(f, "minify"),
    }
  }
}

#[test]
fn test_step_names() {
  assert_eq!("bundle".parse::<BuildStep>(), Ok(BuildStep::Bundle));
  assert_eq!("minify".parse::<BuildStep>(), Ok(BuildStep::Minify));
  assert!("Bundle".parse::<BuildStep>().is_err());
  assert!("watch".parse::<BuildStep>().is_err());
}
