// tests/integration_tests/walker_test.rs
use super::common::{create_test_file, setup_test_module};
use anyhow::Result;
use modpath::find_source_files;

#[test]
fn test_walker_collects_go_files() -> Result<()> {
    let temp_dir = setup_test_module()?;

    let files = find_source_files(temp_dir.path())?;

    assert_eq!(files.len(), 2, "main.go and internal/util/util.go, vendor pruned");
    assert!(files.iter().all(|p| {
        p.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(".go"))
    }));

    Ok(())
}

#[test]
fn test_walker_prunes_nested_vendor() -> Result<()> {
    let temp_dir = setup_test_module()?;
    create_test_file(
        temp_dir.path(),
        "internal/vendor/hidden.go",
        "package hidden\n",
    )?;
    create_test_file(temp_dir.path(), "internal/deep/deep.go", "package deep\n")?;

    let files = find_source_files(temp_dir.path())?;

    assert_eq!(files.len(), 3, "Nested vendor pruned, nested source kept");
    assert!(
        !files.iter().any(|p| p.to_string_lossy().contains("vendor")),
        "No vendored path may appear in the walk"
    );

    Ok(())
}
