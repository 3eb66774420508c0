pub mod build_mode;
pub mod es_target;
pub mod platform;
