use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum BuildMode {
  Development,
  Production,
}

impl From<BuildMode> for twinpack::BuildMode {
  fn from(value: BuildMode) -> Self {
    match value {
      BuildMode::Development => twinpack::BuildMode::Development,
      BuildMode::Production => twinpack::BuildMode::Production,
    }
  }
}
