// src/core/walker.rs
use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory name pruned from traversal at any depth.
pub const VENDOR_DIR: &str = "vendor";

/// Suffix that marks a file as a rewrite target.
pub const SOURCE_SUFFIX: &str = ".go";

/// Collects every Go source file under a directory, pruning vendored
/// dependencies from the walk entirely.
///
/// # Arguments
///
/// * `dir` - The module root to enumerate
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - Matching paths in traversal order
///
/// # Errors
///
/// This function may return an error if a directory cannot be accessed
/// or read during traversal.
#[inline]
pub fn find_source_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| !is_vendor_dir(e))
    {
        let entry = entry?;
        if entry.file_type().is_file() && is_source_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn is_vendor_dir(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_dir() && entry.file_name().to_str() == Some(VENDOR_DIR)
}

fn is_source_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(SOURCE_SUFFIX))
}
