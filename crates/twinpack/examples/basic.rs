use std::path::PathBuf;

use twinpack::{BuildMode, Builder, OsFileSystem, ProjectConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("examples/basic");

  let mut options = ProjectConfig::load(&OsFileSystem, &root, None)?.into_build_options(&root)?;
  options.mode = Some(BuildMode::Development);

  let builder = Builder::new(options);
  let output = builder.build(&builder.plan_standard()).await?;

  for asset in output.assets {
    eprintln!("{} {} bytes", asset.filename, asset.size);
  }

  Ok(())
}
