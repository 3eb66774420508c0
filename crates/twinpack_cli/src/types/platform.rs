use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum Platform {
  Browser,
  Node,
  Neutral,
}

impl From<Platform> for twinpack::Platform {
  fn from(value: Platform) -> Self {
    match value {
      Platform::Browser => twinpack::Platform::Browser,
      Platform::Node => twinpack::Platform::Node,
      Platform::Neutral => twinpack::Platform::Neutral,
    }
  }
}
