// src/cli.rs
use anyhow::{Result, bail};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::replacer::replace_in_file;
use crate::core::toolchain::{ToolOutput, run_build, run_tidy};
use crate::core::verify::count_residual;
use crate::core::walker::find_source_files;
use crate::models::RunSummary;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Module path to replace (e.g. "github.com/oldorg/project")
    pub old_path: String,

    /// Replacement module path (e.g. "github.com/neworg/project")
    pub new_path: String,

    /// Module root to operate in (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// Extra configuration files to rewrite, relative to the module root
    #[arg(long = "config", value_name = "FILE")]
    pub config_files: Vec<String>,
}

/// Runs the full rewrite: file rewrites, `go mod tidy`, `go build .`,
/// residual verification, and the closing summary.
///
/// # Errors
///
/// Returns an error if the arguments are invalid, a rewritten file
/// cannot be written back, `go` is missing from the PATH, or either
/// toolchain step exits non-zero. Files rewritten before a failure stay
/// rewritten; there is no rollback.
pub fn run(args: &Args) -> Result<()> {
    if args.old_path.is_empty() || args.new_path.is_empty() {
        bail!("Module paths must not be empty");
    }
    if args.old_path == args.new_path {
        bail!("Old and new module paths are identical; nothing to do");
    }

    println!("Rewriting module path {} -> {}", args.old_path, args.new_path);

    let summary = rewrite_tree(args)?;

    println!("\nRunning go mod tidy...");
    let tidy = run_tidy(&args.directory)?;
    if !tidy.success {
        print_tool_failure("go mod tidy", &tidy);
        bail!("go mod tidy failed");
    }
    println!("go mod tidy succeeded");

    println!("\nRunning go build...");
    let build = run_build(&args.directory)?;
    if !build.success {
        print_tool_failure("go build", &build);
        bail!("go build failed");
    }
    println!("go build succeeded");
    remove_build_artifacts(&args.directory, &args.new_path);

    println!("\nVerifying rewrite...");
    let remaining = count_residual(&args.directory, &args.old_path)?;
    if remaining == 0 {
        println!("All occurrences of the old module path were replaced");
    } else {
        println!("Warning: {remaining} occurrences of the old module path remain");
    }

    println!("\nFiles modified: {}", summary.files_modified);
    println!("Total replacements: {}", summary.total_replacements);
    println!("\nInstall the renamed module with:");
    println!("  go install {}@latest", args.new_path);

    Ok(())
}

/// Applies the rewrite to every target file: the module manifest, every
/// Go source file outside vendor, the readme, and the configured extra
/// files. Manifest, readme, and config files are each skipped when
/// absent. Prints per-file progress and returns the accumulated counts.
///
/// # Errors
///
/// Returns an error if traversal fails or a modified file cannot be
/// written back.
pub fn rewrite_tree(args: &Args) -> Result<RunSummary> {
    let mut summary = RunSummary::new();

    let manifest = args.directory.join("go.mod");
    if manifest.exists() {
        println!("Updating go.mod...");
        let count = replace_in_file(&manifest, &args.old_path, &args.new_path)?;
        report(&mut summary, Path::new("go.mod"), count);
    }

    let sources = find_source_files(&args.directory)?;
    println!("Found {} Go source files", sources.len());
    for path in &sources {
        let count = replace_in_file(path, &args.old_path, &args.new_path)?;
        let display = path.strip_prefix(&args.directory).unwrap_or(path);
        report(&mut summary, display, count);
    }

    let readme = args.directory.join("README.md");
    if readme.exists() {
        println!("Updating README.md...");
        let count = replace_in_file(&readme, &args.old_path, &args.new_path)?;
        report(&mut summary, Path::new("README.md"), count);
    }

    for name in &args.config_files {
        let path = args.directory.join(name);
        if path.exists() {
            println!("Updating {name}...");
            let count = replace_in_file(&path, &args.old_path, &args.new_path)?;
            report(&mut summary, Path::new(name), count);
        }
    }

    Ok(summary)
}

fn report(summary: &mut RunSummary, path: &Path, count: usize) {
    if count > 0 {
        println!("  modified {} ({count} replacements)", path.display());
        summary.record(count);
    }
}

fn print_tool_failure(step: &str, output: &ToolOutput) {
    println!("{step} failed:");
    if !output.stdout.is_empty() {
        print!("{}", output.stdout);
    }
    if !output.stderr.is_empty() {
        print!("{}", output.stderr);
    }
}

/// Deletes the binaries `go build .` may have left in the module root:
/// the new module's basename, its `.exe` variant, and `main.exe`.
fn remove_build_artifacts(dir: &Path, new_path: &str) {
    let trimmed = new_path.trim_end_matches('/');
    let base = trimmed.rsplit('/').next().unwrap_or(trimmed);
    if base.is_empty() {
        return;
    }
    let artifacts = [base.to_owned(), format!("{base}.exe"), String::from("main.exe")];

    for name in &artifacts {
        let path = dir.join(name);
        if path.exists() {
            match fs::remove_file(&path) {
                Ok(()) => println!("Removed build artifact {name}"),
                Err(err) => println!("Could not remove {name}: {err}"),
            }
        }
    }
}
