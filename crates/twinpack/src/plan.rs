//! Option selection for the two build scripts.
//!
//! | script / step    | minify   | sourcemap | format | output                 |
//! |------------------|----------|-----------|--------|------------------------|
//! | standard         | per-mode | per-mode  | iife   | `main.js`, `worker.js` |
//! | `bundle` step    | false    | per-mode  | cjs    | `main.js`, `worker.js` |
//! | `minify` step    | per-mode | per-mode  | iife   | in place               |
//!
//! "per-mode" means minified without a source map in production and the
//! reverse in development.

use twinpack_common::{BuildStep, BuildTask, EntryPoint, NormalizedBuildOptions, OutputFormat};

/// Options shared by every task, before the script decides the rest.
fn base_task(options: &NormalizedBuildOptions, entry: &EntryPoint) -> BuildTask {
  let production = options.mode.is_production();
  BuildTask {
    name: entry.name.clone(),
    entry: options.paths.source_file(&entry.import),
    outfile: options.paths.output_file(&entry.output_filename()),
    bundle: true,
    minify: production,
    sourcemap: !production,
    tree_shaking: true,
    allow_overwrite: false,
    target: options.target,
    format: OutputFormat::Iife,
    platform: options.platform,
    external: options.external.clone(),
    log_level: options.log_level,
  }
}

/// The single-shot build: every entry is bundled straight into the output
/// directory.
pub fn plan_standard(options: &NormalizedBuildOptions) -> Vec<BuildTask> {
  options.entries.iter().map(|entry| base_task(options, entry)).collect()
}

pub fn plan_step(options: &NormalizedBuildOptions, step: BuildStep) -> Vec<BuildTask> {
  options
    .entries
    .iter()
    .map(|entry| {
      let task = base_task(options, entry);
      match step {
        BuildStep::Bundle => BuildTask { minify: false, format: OutputFormat::Cjs, ..task },
        BuildStep::Minify => BuildTask {
          entry: task.outfile.clone(),
          bundle: false,
          tree_shaking: false,
          allow_overwrite: true,
          format: OutputFormat::Iife,
          ..task
        },
      }
    })
    .collect()
}

/// Same as [`plan_step`] for a raw command line argument. A missing or
/// unrecognized argument plans nothing.
pub fn plan_step_arg(options: &NormalizedBuildOptions, arg: Option<&str>) -> Vec<BuildTask> {
  let Some(arg) = arg else {
    tracing::warn!("No build step given, nothing to do");
    return vec![];
  };

  match arg.parse::<BuildStep>() {
    Ok(step) => plan_step(options, step),
    Err(reason) => {
      tracing::warn!("{reason} Nothing to do");
      vec![]
    }
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use twinpack_common::{BuildMode, BuildOptions, ESTarget, EntryPoint};

  use super::*;
  use crate::normalize_options;

  fn options(mode: BuildMode) -> NormalizedBuildOptions {
    normalize_options(BuildOptions {
      cwd: Some(std::env::temp_dir().join("app")),
      mode: Some(mode),
      ..Default::default()
    })
  }

  fn flags(task: &BuildTask) -> (bool, bool, OutputFormat) {
    (task.minify, task.sourcemap, task.format)
  }

  #[test]
  fn standard_development() {
    let options = options(BuildMode::Development);
    let tasks = plan_standard(&options);

    assert_eq!(tasks.len(), 2);
    for task in &tasks {
      assert_eq!(flags(task), (false, true, OutputFormat::Iife));
      assert!(task.bundle);
      assert!(task.tree_shaking);
      assert!(!task.allow_overwrite);
      assert_eq!(task.target, ESTarget::Es2020);
    }
    assert_eq!(tasks[0].entry, options.paths.src.join("App.bs.js"));
    assert_eq!(tasks[0].outfile, options.paths.dist.join("main.js"));
    assert_eq!(tasks[1].entry, options.paths.src.join("Intelligence.bs.js"));
    assert_eq!(tasks[1].outfile, options.paths.dist.join("worker.js"));
  }

  #[test]
  fn standard_production() {
    let tasks = plan_standard(&options(BuildMode::Production));
    for task in &tasks {
      assert_eq!(flags(task), (true, false, OutputFormat::Iife));
    }
  }

  #[test]
  fn bundle_step_never_minifies() {
    let development = plan_step(&options(BuildMode::Development), BuildStep::Bundle);
    let production = plan_step(&options(BuildMode::Production), BuildStep::Bundle);

    for task in &development {
      assert_eq!(flags(task), (false, true, OutputFormat::Cjs));
      assert!(task.bundle);
    }
    for task in &production {
      assert_eq!(flags(task), (false, false, OutputFormat::Cjs));
    }
  }

  #[test]
  fn bundle_step_without_env_builds_main_for_development() {
    let options = normalize_options(BuildOptions {
      cwd: Some(std::env::temp_dir().join("app")),
      mode: Some(BuildMode::from_env_value(None)),
      ..Default::default()
    });
    let tasks = plan_step_arg(&options, Some("bundle"));
    let main = &tasks[0];

    assert!(!main.minify);
    assert!(main.sourcemap);
    assert_eq!(main.format, OutputFormat::Cjs);
    assert_eq!(main.outfile.file_name().unwrap(), "main.js");
  }

  #[test]
  fn minify_step_overwrites_in_place() {
    let options = options(BuildMode::from_env_value(Some("production")));
    let tasks = plan_step_arg(&options, Some("minify"));
    assert_eq!(tasks.len(), 2);

    let main = &tasks[0];
    assert!(main.minify);
    assert!(main.allow_overwrite);
    assert!(!main.bundle);
    assert_eq!(main.format, OutputFormat::Iife);
    assert_eq!(main.entry, options.paths.dist.join("main.js"));
    assert_eq!(main.outfile, main.entry);

    let worker = &tasks[1];
    assert!(worker.is_in_place());
    assert_eq!(worker.outfile, options.paths.dist.join("worker.js"));
  }

  #[test]
  fn minify_step_in_development_keeps_sourcemaps() {
    let tasks = plan_step(&options(BuildMode::Development), BuildStep::Minify);
    for task in &tasks {
      assert_eq!(flags(task), (false, true, OutputFormat::Iife));
      assert!(task.allow_overwrite);
    }
  }

  #[test]
  fn unknown_or_missing_step_plans_nothing() {
    let options = options(BuildMode::Production);
    assert!(plan_step_arg(&options, None).is_empty());
    assert!(plan_step_arg(&options, Some("watch")).is_empty());
    assert!(plan_step_arg(&options, Some("")).is_empty());
  }

  #[test]
  fn shared_options_reach_every_task() {
    let options = normalize_options(BuildOptions {
      cwd: Some(std::env::temp_dir().join("app")),
      entries: Some(vec![EntryPoint::new("app", "index.js")]),
      external: Some(vec!["react".to_string()]),
      target: Some(ESTarget::Es2017),
      mode: Some(BuildMode::Development),
      ..Default::default()
    });

    let tasks = plan_step(&options, BuildStep::Bundle);
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].external, ["react"]);
    assert_eq!(tasks[0].target, ESTarget::Es2017);
    assert_eq!(tasks[0].outfile, options.paths.dist.join(PathBuf::from("app.js")));
  }
}
