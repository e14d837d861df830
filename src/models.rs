// src/models.rs
mod run_summary;

pub use run_summary::RunSummary;
