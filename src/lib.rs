// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;

pub use cli::{Args, rewrite_tree, run};
pub use core::replacer::{TextEncoding, replace_in_file};
pub use core::toolchain::{ToolOutput, run_build, run_tidy};
pub use core::verify::count_residual;
pub use core::walker::find_source_files;
pub use models::RunSummary;
