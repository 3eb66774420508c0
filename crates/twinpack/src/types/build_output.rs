use twinpack_common::OutputAsset;

#[derive(Debug, Default)]
pub struct BuildOutput {
  pub assets: Vec<OutputAsset>,
  pub warnings: Vec<anyhow::Error>,
}
