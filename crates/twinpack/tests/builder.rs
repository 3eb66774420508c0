use std::{path::Path, sync::Mutex, time::Duration};

use anyhow::bail;
use tokio::sync::Barrier;
use twinpack::{
  AssetKind, BuildBackend, BuildMode, BuildOptions, BuildTask, Builder, OsFileSystem,
  OutputFormat,
};

/// Stands in for esbuild: records every task and writes the files the task
/// would produce, unless told to fail it.
#[derive(Default)]
struct RecordingBackend {
  calls: Mutex<Vec<BuildTask>>,
  fail: Option<&'static str>,
  skip_sourcemaps: bool,
}

impl RecordingBackend {
  fn failing(name: &'static str) -> Self {
    Self { fail: Some(name), ..Default::default() }
  }

  fn calls(&self) -> Vec<BuildTask> {
    self.calls.lock().unwrap().clone()
  }
}

impl BuildBackend for RecordingBackend {
  async fn build(&self, task: &BuildTask) -> anyhow::Result<()> {
    self.calls.lock().unwrap().push(task.clone());

    if self.fail == Some(task.name.as_str()) {
      bail!("esbuild exited with exit status: 1");
    }

    for (path, kind) in task.outputs() {
      if self.skip_sourcemaps && kind == AssetKind::SourceMap {
        continue;
      }
      std::fs::write(path, format!("// {}", task.name))?;
    }
    Ok(())
  }
}

/// Only completes once every task has started.
struct BarrierBackend(Barrier);

impl BuildBackend for BarrierBackend {
  async fn build(&self, task: &BuildTask) -> anyhow::Result<()> {
    self.0.wait().await;
    std::fs::write(&task.outfile, "")?;
    Ok(())
  }
}

fn options(cwd: &Path, mode: BuildMode) -> BuildOptions {
  BuildOptions { cwd: Some(cwd.to_path_buf()), mode: Some(mode), ..Default::default() }
}

#[tokio::test]
async fn standard_build_issues_both_entries() {
  let dir = tempfile::tempdir().unwrap();
  let builder = Builder::with_backend(
    options(dir.path(), BuildMode::Development),
    RecordingBackend::default(),
    OsFileSystem,
  );

  let tasks = builder.plan_standard();
  let output = builder.build(&tasks).await.unwrap();

  let calls = builder.backend().calls();
  assert_eq!(calls.len(), 2);
  assert!(calls.iter().all(|task| !task.minify && task.sourcemap));
  assert!(calls.iter().all(|task| task.format == OutputFormat::Iife));

  let filenames = output.assets.iter().map(|asset| asset.filename()).collect::<Vec<_>>();
  assert_eq!(
    filenames,
    ["dist/main.js", "dist/main.js.map", "dist/worker.js", "dist/worker.js.map"]
  );
  assert_eq!(output.assets[0].size, "// main".len() as u64);
  assert!(output.assets[0].is_chunk());
  assert!(!output.assets[1].is_chunk());
  assert!(output.warnings.is_empty());
}

#[tokio::test]
async fn production_minify_step_rewrites_bundles() {
  let dir = tempfile::tempdir().unwrap();
  let builder = Builder::with_backend(
    options(dir.path(), BuildMode::Production),
    RecordingBackend::default(),
    OsFileSystem,
  );

  let bundle = builder.plan_step(Some("bundle"));
  builder.build(&bundle).await.unwrap();

  let minify = builder.plan_step(Some("minify"));
  let output = builder.build(&minify).await.unwrap();

  let calls = builder.backend().calls();
  assert_eq!(calls.len(), 4);

  let main = &calls[2];
  assert!(main.minify);
  assert!(main.allow_overwrite);
  assert_eq!(main.format, OutputFormat::Iife);
  assert_eq!(main.entry, dir.path().join("dist").join("main.js"));
  assert_eq!(main.outfile, main.entry);

  assert_eq!(output.assets.len(), 2);
}

#[tokio::test]
async fn minify_step_requires_bundled_inputs() {
  let dir = tempfile::tempdir().unwrap();
  let builder = Builder::with_backend(
    options(dir.path(), BuildMode::Production),
    RecordingBackend::default(),
    OsFileSystem,
  );

  let tasks = builder.plan_step(Some("minify"));
  let errors = builder.build(&tasks).await.unwrap_err();

  assert!(builder.backend().calls().is_empty());
  assert_eq!(errors.len(), 2);
  assert_eq!(
    errors[0].to_string(),
    "Failed to build `main`: dist/main.js does not exist, run the bundle step first"
  );
}

#[tokio::test]
async fn unknown_step_issues_no_build() {
  let dir = tempfile::tempdir().unwrap();
  let builder = Builder::with_backend(
    options(dir.path(), BuildMode::Development),
    RecordingBackend::default(),
    OsFileSystem,
  );

  let tasks = builder.plan_step(Some("deploy"));
  let output = builder.build(&tasks).await.unwrap();

  assert!(builder.backend().calls().is_empty());
  assert!(output.assets.is_empty());
  assert!(!dir.path().join("dist").exists());
}

#[tokio::test]
async fn one_failure_does_not_stop_the_other_build() {
  let dir = tempfile::tempdir().unwrap();
  let builder = Builder::with_backend(
    options(dir.path(), BuildMode::Development),
    RecordingBackend::failing("worker"),
    OsFileSystem,
  );

  let tasks = builder.plan_standard();
  let errors = builder.build(&tasks).await.unwrap_err();

  assert_eq!(builder.backend().calls().len(), 2);
  assert_eq!(errors.len(), 1);
  assert_eq!(
    format!("{:#}", errors[0]),
    "Failed to build `worker`: esbuild exited with exit status: 1"
  );
  assert!(dir.path().join("dist").join("main.js").exists());
}

#[tokio::test]
async fn missing_outputs_become_warnings() {
  let dir = tempfile::tempdir().unwrap();
  let backend = RecordingBackend { skip_sourcemaps: true, ..Default::default() };
  let builder =
    Builder::with_backend(options(dir.path(), BuildMode::Development), backend, OsFileSystem);

  let tasks = builder.plan_standard();
  let output = builder.build(&tasks).await.unwrap();

  assert_eq!(output.assets.len(), 2);
  assert_eq!(output.warnings.len(), 2);
  assert!(output.warnings[0].to_string().starts_with("Missing output dist/main.js.map"));
}

#[tokio::test]
async fn builds_run_concurrently() {
  let dir = tempfile::tempdir().unwrap();
  let builder = Builder::with_backend(
    options(dir.path(), BuildMode::Production),
    BarrierBackend(Barrier::new(2)),
    OsFileSystem,
  );

  let tasks = builder.plan_standard();
  let output = tokio::time::timeout(Duration::from_secs(5), builder.build(&tasks))
    .await
    .expect("builds were issued one after another")
    .unwrap();

  assert_eq!(output.assets.len(), 2);
}
