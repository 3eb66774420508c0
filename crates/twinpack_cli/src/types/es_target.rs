use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum ESTarget {
  Es5,
  Es2015,
  Es2016,
  Es2017,
  Es2018,
  Es2019,
  Es2020,
  Es2021,
  Es2022,
  Es2023,
  Es2024,
  EsNext,
}

impl From<ESTarget> for twinpack::ESTarget {
  fn from(value: ESTarget) -> Self {
    match value {
      ESTarget::Es5 => twinpack::ESTarget::Es5,
      ESTarget::Es2015 => twinpack::ESTarget::Es2015,
      ESTarget::Es2016 => twinpack::ESTarget::Es2016,
      ESTarget::Es2017 => twinpack::ESTarget::Es2017,
      ESTarget::Es2018 => twinpack::ESTarget::Es2018,
      ESTarget::Es2019 => twinpack::ESTarget::Es2019,
      ESTarget::Es2020 => twinpack::ESTarget::Es2020,
      ESTarget::Es2021 => twinpack::ESTarget::Es2021,
      ESTarget::Es2022 => twinpack::ESTarget::Es2022,
      ESTarget::Es2023 => twinpack::ESTarget::Es2023,
      ESTarget::Es2024 => twinpack::ESTarget::Es2024,
      ESTarget::EsNext => twinpack::ESTarget::EsNext,
    }
  }
}
