mod args;
mod types;

use std::{path::PathBuf, process::ExitCode, time::Instant};

use ansi_term::Colour;
use args::{EnhanceArgs, InputArgs, Script};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use twinpack::{BuildOptions, BuildResult, Builder, OsFileSystem, OutputAsset, ProjectConfig};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Commands {
  #[command(subcommand)]
  script: Script,

  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  enhance: EnhanceArgs,
}

fn print_output_assets(outputs: &[OutputAsset]) {
  let mut left = 0;
  let mut right = 0;

  let mut assets = Vec::with_capacity(outputs.len());

  for output in outputs {
    let size = format!("{:.2}", output.size as f64 / 1024.0);

    if size.len() > right {
      right = size.len();
    }

    if output.filename.len() > left {
      left = output.filename.len();
    }

    let (dir, name) = output.filename.rsplit_once('/').unwrap_or(("", output.filename.as_str()));
    assets.push((dir, name, size, output.is_chunk()));
  }

  let dim = Colour::White.dimmed();
  let color = Colour::Cyan;

  for (dir, name, size, is_chunk) in assets {
    let asset_type = if is_chunk { "chunk" } else { "map  " };
    let dir = if dir.is_empty() { String::new() } else { format!("{dir}/") };
    let filename_len = dir.len() + name.len();

    println!(
      "{}{}{:left$} {}{}{:right$}{} kB",
      dim.paint(dir),
      color.paint(name),
      "",
      dim.paint(asset_type),
      dim.paint(" │ size: "),
      "",
      size,
      left = left - filename_len,
      right = right - size.len()
    );
  }
}

fn init_tracing() {
  let filter = EnvFilter::try_from_env("TWINPACK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .without_time()
    .init();
}

/// Project configuration with the command line flags layered on top.
fn resolve_options(input: InputArgs, enhance: &EnhanceArgs) -> anyhow::Result<BuildOptions> {
  let cwd = input.cwd.unwrap_or_else(|| PathBuf::from("."));

  let config = ProjectConfig::load(&OsFileSystem, &cwd, input.config.as_deref())?;
  let mut options = config.into_build_options(&cwd)?;

  if let Some(mode) = enhance.mode {
    options.mode = Some(mode.into());
  }
  if let Some(target) = enhance.target {
    options.target = Some(target.into());
  }
  if let Some(platform) = input.platform {
    options.platform = Some(platform.into());
  }
  if let Some(external) = input.external {
    options.external.get_or_insert_with(Vec::new).extend(external);
  }

  Ok(options)
}

async fn run(args: Commands) -> BuildResult<()> {
  let Commands { script, input, enhance } = args;
  let options = resolve_options(input, &enhance)?;

  let builder = Builder::new(options);
  let tasks = match &script {
    Script::Build => builder.plan_standard(),
    Script::Run { step } => builder.plan_step(step.as_deref()),
  };

  if tasks.is_empty() {
    return Ok(());
  }

  let start = Instant::now();
  let output = builder.build(&tasks).await?;

  if !enhance.silent {
    for warning in &output.warnings {
      eprintln!("{} {warning:#}", Colour::Yellow.paint("Warning:"));
    }

    if !output.assets.is_empty() {
      print_output_assets(&output.assets);
    }
  }

  let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
  println!(
    "\n{} Finished {} build in {}",
    Colour::Green.paint("✔"),
    builder.options().mode,
    Colour::White.bold().paint(elapsed)
  );

  Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
  init_tracing();

  match run(Commands::parse()).await {
    Ok(()) => ExitCode::SUCCESS,
    Err(errors) => {
      for error in &*errors {
        eprintln!("{} {error:#}", Colour::Red.paint("Error:"));
      }
      ExitCode::FAILURE
    }
  }
}
