use std::path::Path;

use twinpack_common::{BuildMode, BuildOptions, EntryPoint, NormalizedBuildOptions, ProjectPaths};

pub fn normalize_options(raw_options: BuildOptions) -> NormalizedBuildOptions {
  let cwd = raw_options.cwd.unwrap_or_else(|| Path::new(".").to_path_buf());
  let src_dir = raw_options.src_dir.unwrap_or_else(|| Path::new("src").to_path_buf());
  let out_dir = raw_options.out_dir.unwrap_or_else(|| Path::new("dist").to_path_buf());

  let paths = ProjectPaths::new(&cwd, &src_dir, &out_dir);

  NormalizedBuildOptions {
    esbuild: raw_options.esbuild.map(|program| {
      // A bare program name is looked up on `PATH`, anything else is a path.
      if program.components().count() > 1 { paths.cwd.join(program) } else { program }
    }),
    paths,
    entries: raw_options.entries.unwrap_or_else(EntryPoint::defaults),
    platform: raw_options.platform.unwrap_or_default(),
    external: raw_options.external.unwrap_or_default(),
    target: raw_options.target.unwrap_or_default(),
    log_level: raw_options.log_level.unwrap_or_default(),
    mode: raw_options.mode.unwrap_or_else(BuildMode::from_env),
  }
}
