pub mod build_mode;
pub mod build_step;
pub mod build_task;
pub mod output_asset;
pub mod project_paths;
