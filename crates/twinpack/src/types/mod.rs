pub mod build_output;
