// src/core/verify.rs
use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::core::replacer::decode;
use crate::core::walker::find_source_files;

/// Re-scans the source tree for leftover occurrences of a pattern.
///
/// Uses the same walk (vendored dependencies pruned) and the same
/// dual-encoding read as the rewrite itself, so a Latin-1 file is
/// inspected rather than skipped. Files that cannot be read are
/// silently ignored; this pass only ever produces a warning.
///
/// # Arguments
///
/// * `dir` - The module root to re-scan
/// * `pattern` - The literal substring to count
///
/// # Returns
///
/// * `Ok(usize)` - Total occurrences remaining across all source files
///
/// # Errors
///
/// This function may return an error if directory traversal fails.
#[inline]
pub fn count_residual(dir: &Path, pattern: &str) -> Result<usize> {
    let mut remaining: usize = 0;

    for path in find_source_files(dir)? {
        let Ok(bytes) = fs::read(&path) else {
            continue;
        };
        let (content, _) = decode(&bytes);
        remaining = remaining.saturating_add(content.matches(pattern).count());
    }

    Ok(remaining)
}
