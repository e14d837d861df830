// tests/integration_tests/rewrite_test.rs
use super::common::{NEW_PATH, OLD_PATH, setup_test_module};
use anyhow::Result;
use modpath::{Args, replace_in_file, rewrite_tree};
use std::fs;

fn test_args(dir: &std::path::Path) -> Args {
    Args {
        old_path: String::from(OLD_PATH),
        new_path: String::from(NEW_PATH),
        directory: dir.to_path_buf(),
        config_files: vec![String::from("widget.json")],
    }
}

#[test]
fn test_rewrite_covers_all_targets() -> Result<()> {
    let temp_dir = setup_test_module()?;

    let summary = rewrite_tree(&test_args(temp_dir.path()))?;

    // go.mod, main.go, util.go, README.md, widget.json
    assert_eq!(summary.files_modified, 5, "Should touch every target file once");
    assert_eq!(summary.total_replacements, 6, "1+1+2+1+1 occurrences");

    let manifest = fs::read_to_string(temp_dir.path().join("go.mod"))?;
    assert!(manifest.contains(&format!("module {NEW_PATH}")));
    assert!(!manifest.contains(OLD_PATH));

    let util = fs::read_to_string(temp_dir.path().join("internal/util/util.go"))?;
    assert_eq!(util.matches(NEW_PATH).count(), 2, "Both import lines updated");

    Ok(())
}

#[test]
fn test_rewrite_is_idempotent() -> Result<()> {
    let temp_dir = setup_test_module()?;
    let args = test_args(temp_dir.path());

    rewrite_tree(&args)?;
    let second = rewrite_tree(&args)?;

    assert_eq!(second.files_modified, 0, "Second pass should find nothing");
    assert_eq!(second.total_replacements, 0);

    Ok(())
}

#[test]
fn test_non_targets_untouched() -> Result<()> {
    let temp_dir = setup_test_module()?;
    let vendored = temp_dir.path().join("vendor/dep/dep.go");
    let notes = temp_dir.path().join("notes.txt");
    let vendored_before = fs::read(&vendored)?;
    let notes_before = fs::read(&notes)?;

    rewrite_tree(&test_args(temp_dir.path()))?;

    assert_eq!(fs::read(&vendored)?, vendored_before, "vendor must never be modified");
    assert_eq!(fs::read(&notes)?, notes_before, "Unlisted files must never be modified");

    Ok(())
}

#[test]
fn test_replacement_counts_match_occurrences() -> Result<()> {
    let temp_dir = setup_test_module()?;

    let manifest = temp_dir.path().join("go.mod");
    let count = replace_in_file(&manifest, OLD_PATH, NEW_PATH)?;
    assert_eq!(count, 1, "Manifest declares the module path once");

    let util = temp_dir.path().join("internal/util/util.go");
    let count = replace_in_file(&util, OLD_PATH, NEW_PATH)?;
    assert_eq!(count, 2, "Both import lines should be counted");

    Ok(())
}
